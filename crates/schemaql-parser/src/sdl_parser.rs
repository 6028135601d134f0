use crate::ScanPattern;
use crate::Scanner;
use crate::SdlParseError;
use crate::SdlParseErrorKind;
use crate::ast;
use crate::scan_pattern::unescape_string;

/// Parses an SDL document.
///
/// Shorthand for `SdlParser::new(source).parse_document()`.
pub fn parse(source: &str) -> Result<ast::Document, SdlParseError> {
    SdlParser::new(source).parse_document()
}

// =============================================================================
// Main parser struct
// =============================================================================

/// A recursive descent parser for SDL documents.
///
/// Alternatives are tried in order and the first match wins. Parsing stops
/// at the first error; there is no recovery.
///
/// # Usage
///
/// ```
/// use schemaql_parser::ast;
/// use schemaql_parser::SdlParser;
///
/// let doc = SdlParser::new("type Query { hello: String }")
///     .parse_document()
///     .unwrap();
/// assert!(matches!(doc.definitions[0], ast::Definition::ObjectType(_)));
/// ```
pub struct SdlParser<'src> {
    scanner: Scanner<'src>,

    /// Current nesting depth of type references and literal values.
    recursion_depth: usize,
}

const INVALID_DEFINITION_MESSAGE: &str =
    "invalid definition (must be either a type, interface, union, scalar, enum, input or extend)";

impl<'src> SdlParser<'src> {
    /// Maximum nesting depth for type references (`[[[String]]]`) and
    /// literal values (`[[[1]]]`, `{a: {b: ...}}`).
    const MAX_RECURSION_DEPTH: usize = 64;

    pub fn new(source: &'src str) -> Self {
        Self {
            scanner: Scanner::new(source),
            recursion_depth: 0,
        }
    }

    /// Parses the entire source. Any text that is not a comment or a
    /// complete type definition is an error.
    pub fn parse_document(mut self) -> Result<ast::Document, SdlParseError> {
        let mut definitions = vec![];
        loop {
            if let Some(comment) = self.parse_comment() {
                definitions.push(ast::Definition::Comment(comment));
            } else if let Some(definition) = self.parse_type_definition()? {
                definitions.push(definition);
            } else {
                break;
            }
        }

        if !self.scanner.is_at_end() {
            return Err(self.scanner.error(
                INVALID_DEFINITION_MESSAGE,
                SdlParseErrorKind::InvalidDefinition,
            ));
        }

        Ok(ast::Document { definitions })
    }

    // =========================================================================
    // Shared helpers
    // =========================================================================

    fn parse_comment(&mut self) -> Option<ast::Comment> {
        self.scanner
            .match_pattern(ScanPattern::Comment)
            .map(|value| ast::Comment {
                value: value.to_string(),
            })
    }

    fn parse_name(&mut self) -> Option<ast::Name> {
        self.scanner
            .match_pattern(ScanPattern::Name)
            .map(ast::Name::new)
    }

    fn expect_name(&mut self) -> Result<ast::Name, SdlParseError> {
        let name = self.parse_name();
        self.scanner.required(name, ScanPattern::Name.description())
    }

    fn parse_named_type(&mut self) -> Option<ast::NamedType> {
        self.parse_name().map(|name| ast::NamedType { name })
    }

    /// Parses `(comment | item)*` using `parse_item` for the items.
    fn parse_members<T>(
        &mut self,
        mut parse_item: impl FnMut(&mut Self) -> Result<Option<T>, SdlParseError>,
    ) -> Result<Vec<ast::Member<T>>, SdlParseError> {
        let mut members = vec![];
        loop {
            if let Some(comment) = self.parse_comment() {
                members.push(ast::Member::Comment(comment));
            } else if let Some(item) = parse_item(self)? {
                members.push(ast::Member::Item(item));
            } else {
                return Ok(members);
            }
        }
    }

    /// Parses `"{" (comment | item)* "}"`.
    fn parse_body<T>(
        &mut self,
        parse_item: impl FnMut(&mut Self) -> Result<Option<T>, SdlParseError>,
    ) -> Result<Vec<ast::Member<T>>, SdlParseError> {
        self.scanner.expect("{")?;
        let members = self.parse_members(parse_item)?;
        self.scanner.expect("}")?;
        Ok(members)
    }

    fn enter_recursion(&mut self) -> Result<(), SdlParseError> {
        self.recursion_depth += 1;
        if self.recursion_depth > Self::MAX_RECURSION_DEPTH {
            self.recursion_depth -= 1;
            return Err(self
                .scanner
                .error(
                    "maximum nesting depth exceeded",
                    SdlParseErrorKind::RecursionLimitExceeded,
                )
                .with_note(format!(
                    "types and values may be nested at most {} levels deep",
                    Self::MAX_RECURSION_DEPTH,
                )));
        }
        Ok(())
    }

    fn exit_recursion(&mut self) {
        self.recursion_depth -= 1;
    }

    // =========================================================================
    // Type definitions
    // =========================================================================

    fn parse_type_definition(&mut self) -> Result<Option<ast::Definition>, SdlParseError> {
        if let Some(def) = self.parse_object_type_definition()? {
            return Ok(Some(ast::Definition::ObjectType(def)));
        }
        if let Some(def) = self.parse_interface_type_definition()? {
            return Ok(Some(ast::Definition::InterfaceType(def)));
        }
        if let Some(def) = self.parse_union_type_definition()? {
            return Ok(Some(ast::Definition::UnionType(def)));
        }
        if let Some(def) = self.parse_scalar_type_definition()? {
            return Ok(Some(ast::Definition::ScalarType(def)));
        }
        if let Some(def) = self.parse_enum_type_definition()? {
            return Ok(Some(ast::Definition::EnumType(def)));
        }
        if let Some(def) = self.parse_input_object_type_definition()? {
            return Ok(Some(ast::Definition::InputObjectType(def)));
        }
        if let Some(def) = self.parse_type_extension_definition()? {
            return Ok(Some(ast::Definition::TypeExtension(def)));
        }
        Ok(None)
    }

    /// `type Name implements A & B { ... }`
    fn parse_object_type_definition(
        &mut self,
    ) -> Result<Option<ast::ObjectTypeDefinition>, SdlParseError> {
        if self.scanner.match_keyword("type").is_none() {
            return Ok(None);
        }
        let name = self.expect_name()?;
        let interfaces = self.parse_implements()?;
        let fields = self.parse_body(Self::parse_field_definition)?;
        Ok(Some(ast::ObjectTypeDefinition {
            name,
            interfaces,
            fields,
        }))
    }

    /// `implements A B`, `implements A, B` or `implements A & B`.
    fn parse_implements(&mut self) -> Result<Vec<ast::NamedType>, SdlParseError> {
        if self.scanner.match_keyword("implements").is_none() {
            return Ok(vec![]);
        }
        let mut interfaces = vec![];
        loop {
            let after_ampersand = self.scanner.match_literal("&").is_some();
            let named_type = self.parse_named_type();
            if named_type.is_none() && !interfaces.is_empty() && !after_ampersand {
                return Ok(interfaces);
            }
            interfaces.push(self.scanner.required(named_type, ScanPattern::Name.description())?);
        }
    }

    fn parse_field_definition(
        &mut self,
    ) -> Result<Option<ast::FieldDefinition>, SdlParseError> {
        let Some(name) = self.parse_name() else {
            return Ok(None);
        };
        let arguments = self.parse_arguments_definition()?;
        self.scanner.expect(":")?;
        let field_type = self.expect_type()?;
        Ok(Some(ast::FieldDefinition {
            name,
            arguments,
            field_type,
        }))
    }

    fn parse_arguments_definition(
        &mut self,
    ) -> Result<Option<Vec<ast::Member<ast::InputValueDefinition>>>, SdlParseError> {
        if self.scanner.match_literal("(").is_none() {
            return Ok(None);
        }
        let arguments = self.parse_members(Self::parse_input_value_definition)?;
        self.scanner.expect(")")?;
        Ok(Some(arguments))
    }

    fn parse_input_value_definition(
        &mut self,
    ) -> Result<Option<ast::InputValueDefinition>, SdlParseError> {
        let Some(name) = self.parse_name() else {
            return Ok(None);
        };
        self.scanner.expect(":")?;
        let value_type = self.expect_type()?;
        let default_value = if self.scanner.match_literal("=").is_some() {
            Some(self.expect_value()?)
        } else {
            None
        };
        Ok(Some(ast::InputValueDefinition {
            name,
            value_type,
            default_value,
        }))
    }

    fn parse_interface_type_definition(
        &mut self,
    ) -> Result<Option<ast::InterfaceTypeDefinition>, SdlParseError> {
        if self.scanner.match_keyword("interface").is_none() {
            return Ok(None);
        }
        let name = self.expect_name()?;
        let fields = self.parse_body(Self::parse_field_definition)?;
        Ok(Some(ast::InterfaceTypeDefinition { name, fields }))
    }

    /// `union Name = A | B | C`
    fn parse_union_type_definition(
        &mut self,
    ) -> Result<Option<ast::UnionTypeDefinition>, SdlParseError> {
        if self.scanner.match_keyword("union").is_none() {
            return Ok(None);
        }
        let name = self.expect_name()?;
        self.scanner.expect("=")?;
        let first = self.parse_named_type();
        let mut types = vec![self.scanner.required(first, "NamedType")?];
        while self.scanner.match_literal("|").is_some() {
            let next = self.parse_named_type();
            types.push(self.scanner.required(next, "NamedType")?);
        }
        Ok(Some(ast::UnionTypeDefinition { name, types }))
    }

    fn parse_scalar_type_definition(
        &mut self,
    ) -> Result<Option<ast::ScalarTypeDefinition>, SdlParseError> {
        if self.scanner.match_keyword("scalar").is_none() {
            return Ok(None);
        }
        let name = self.expect_name()?;
        Ok(Some(ast::ScalarTypeDefinition { name }))
    }

    fn parse_enum_type_definition(
        &mut self,
    ) -> Result<Option<ast::EnumTypeDefinition>, SdlParseError> {
        if self.scanner.match_keyword("enum").is_none() {
            return Ok(None);
        }
        let name = self.expect_name()?;
        let values = self.parse_body(|parser| {
            Ok(parser
                .parse_name()
                .map(|name| ast::EnumValueDefinition { name }))
        })?;
        Ok(Some(ast::EnumTypeDefinition { name, values }))
    }

    fn parse_input_object_type_definition(
        &mut self,
    ) -> Result<Option<ast::InputObjectTypeDefinition>, SdlParseError> {
        if self.scanner.match_keyword("input").is_none() {
            return Ok(None);
        }
        let name = self.expect_name()?;
        let fields = self.parse_body(Self::parse_input_value_definition)?;
        Ok(Some(ast::InputObjectTypeDefinition { name, fields }))
    }

    /// `extend type Name { ... }`
    fn parse_type_extension_definition(
        &mut self,
    ) -> Result<Option<ast::TypeExtensionDefinition>, SdlParseError> {
        if self.scanner.match_keyword("extend").is_none() {
            return Ok(None);
        }
        let definition = self.parse_object_type_definition()?;
        let definition = self
            .scanner
            .required(definition, "ObjectTypeDefinition")
            .map_err(|err| err.with_note("only object types can be extended"))?;
        Ok(Some(ast::TypeExtensionDefinition { definition }))
    }

    // =========================================================================
    // Type references
    // =========================================================================

    fn expect_type(&mut self) -> Result<ast::Type, SdlParseError> {
        let parsed = self.parse_type()?;
        self.scanner.required(parsed, "type")
    }

    /// `Name`, `[Type]`, optionally followed by `!`.
    fn parse_type(&mut self) -> Result<Option<ast::Type>, SdlParseError> {
        self.enter_recursion()?;
        let result = self.parse_type_impl();
        self.exit_recursion();
        result
    }

    fn parse_type_impl(&mut self) -> Result<Option<ast::Type>, SdlParseError> {
        let inner = if let Some(named_type) = self.parse_named_type() {
            ast::Type::Named(named_type)
        } else if self.scanner.match_literal("[").is_some() {
            let item_type = self.parse_type()?;
            let item_type = self.scanner.required(item_type, "Type")?;
            self.scanner.expect("]")?;
            ast::Type::list(item_type)
        } else {
            return Ok(None);
        };

        if self.scanner.match_literal("!").is_some() {
            Ok(Some(ast::Type::non_null(inner)))
        } else {
            Ok(Some(inner))
        }
    }

    // =========================================================================
    // Values
    // =========================================================================

    fn expect_value(&mut self) -> Result<ast::Value, SdlParseError> {
        let value = self.parse_value()?;
        self.scanner.required(value, "Value")
    }

    fn parse_value(&mut self) -> Result<Option<ast::Value>, SdlParseError> {
        self.enter_recursion()?;
        let result = self.parse_value_impl();
        self.exit_recursion();
        result
    }

    fn parse_value_impl(&mut self) -> Result<Option<ast::Value>, SdlParseError> {
        if let Some(lexeme) = self.scanner.match_pattern(ScanPattern::Number) {
            return Ok(Some(self.number_value(lexeme)?));
        }
        if let Some(lexeme) = self.scanner.match_pattern(ScanPattern::String) {
            return Ok(Some(ast::Value::String(ast::StringValue {
                value: unescape_string(lexeme),
            })));
        }
        if self.scanner.match_keyword("true").is_some() {
            return Ok(Some(ast::Value::Boolean(ast::BooleanValue { value: true })));
        }
        if self.scanner.match_keyword("false").is_some() {
            return Ok(Some(ast::Value::Boolean(ast::BooleanValue { value: false })));
        }
        if let Some(name) = self.parse_name() {
            return Ok(Some(ast::Value::Enum(ast::EnumValue { name })));
        }
        if self.scanner.match_literal("[").is_some() {
            return Ok(Some(ast::Value::List(self.parse_list_value()?)));
        }
        if self.scanner.match_literal("{").is_some() {
            return Ok(Some(ast::Value::Object(self.parse_object_value()?)));
        }
        Ok(None)
    }

    fn number_value(&self, lexeme: &str) -> Result<ast::Value, SdlParseError> {
        let number = ast::Number::from_lexeme(lexeme);
        let number = self.scanner.required(number, ScanPattern::Number.description())?;
        Ok(ast::Value::Number(ast::NumberValue { value: number }))
    }

    /// Parses the rest of a list literal after its `[`.
    fn parse_list_value(&mut self) -> Result<ast::ListValue, SdlParseError> {
        let mut values = vec![];
        loop {
            if self.parse_comment().is_some() {
                continue;
            }
            match self.parse_value()? {
                Some(value) => values.push(value),
                None => break,
            }
        }
        self.scanner.expect("]")?;
        Ok(ast::ListValue { values })
    }

    /// Parses the rest of an object literal after its `{`.
    fn parse_object_value(&mut self) -> Result<ast::ObjectValue, SdlParseError> {
        let mut fields = vec![];
        loop {
            if self.parse_comment().is_some() {
                continue;
            }
            let Some(name) = self.parse_name() else {
                break;
            };
            self.scanner.expect(":")?;
            let value = self.expect_value()?;
            fields.push(ast::ObjectField { name, value });
        }
        self.scanner.expect("}")?;
        Ok(ast::ObjectValue { fields })
    }
}
