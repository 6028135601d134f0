use crate::GenerateError;
use crate::ast;
use crate::types::BuiltinScalar;
use crate::types::GraphQLTypeKind;
use crate::types::NamedGraphQLTypeRef;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, GenerateError>;

/// Whether a type reference appears where values flow out (field types) or
/// in (argument and input-field types).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum TypePosition {
    Input,
    Output,
}

/// Every type name a document declares, mapped to its kind.
///
/// Built before any descriptor is generated so that type references can be
/// resolved no matter where in the document their target is defined.
#[derive(Debug)]
pub(crate) struct TypeNamespace {
    kinds: IndexMap<String, GraphQLTypeKind>,
}
impl TypeNamespace {
    pub fn new() -> Self {
        Self {
            kinds: BuiltinScalar::ALL
                .iter()
                .map(|scalar| (scalar.name().to_string(), scalar.kind()))
                .collect(),
        }
    }

    pub fn from_document(document: &ast::Document) -> Result<Self> {
        let mut namespace = Self::new();
        for def in document.type_definitions() {
            let kind = match def {
                ast::Definition::EnumType(_) => GraphQLTypeKind::Enum,
                ast::Definition::InputObjectType(_) => GraphQLTypeKind::InputObject,
                ast::Definition::InterfaceType(_) => GraphQLTypeKind::Interface,
                ast::Definition::ObjectType(_) => GraphQLTypeKind::Object,
                ast::Definition::ScalarType(_) => GraphQLTypeKind::Scalar,
                ast::Definition::UnionType(_) => GraphQLTypeKind::Union,
                ast::Definition::Comment(_) | ast::Definition::TypeExtension(_) => continue,
            };
            if let Some(type_name) = def.type_name() {
                namespace.declare(type_name, kind)?;
            }
        }
        Ok(namespace)
    }

    pub fn declare(&mut self, type_name: &str, kind: GraphQLTypeKind) -> Result<()> {
        if self.kinds.contains_key(type_name) {
            return Err(GenerateError::DuplicateTypeDefinition {
                type_name: type_name.to_string(),
            });
        }
        log::trace!("Declared {} type `{type_name}`.", kind.name());
        self.kinds.insert(type_name.to_string(), kind);
        Ok(())
    }

    pub fn kind_of(&self, type_name: &str) -> Option<GraphQLTypeKind> {
        self.kinds.get(type_name).copied()
    }

    /// Resolves a written type reference, keeping its list and non-null
    /// wrappers.
    ///
    /// Object types cannot be used in input position; naming one there
    /// fails exactly like naming an unknown type.
    pub fn resolve(&self, ast_type: &ast::Type, position: TypePosition) -> Result<TypeAnnotation> {
        Ok(match ast_type {
            ast::Type::Named(named) => {
                let type_name = named.name.as_str();
                match self.kind_of(type_name) {
                    Some(kind) if position == TypePosition::Output || kind.is_input_type() =>
                        TypeAnnotation::Named(NamedGraphQLTypeRef::new(type_name, kind)),

                    _ => return Err(GenerateError::TypeNotImplemented {
                        type_name: type_name.to_string(),
                    }),
                }
            },
            ast::Type::List(list) =>
                TypeAnnotation::List(Box::new(self.resolve(&list.inner, position)?)),
            ast::Type::NonNull(non_null) =>
                TypeAnnotation::NonNull(Box::new(self.resolve(&non_null.inner, position)?)),
        })
    }
}
