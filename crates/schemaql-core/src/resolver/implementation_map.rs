use crate::ast;
use crate::resolver::FieldResolver;
use crate::resolver::ScalarImplementation;
use crate::resolver::TypeResolver;
use indexmap::IndexMap;
use serde_json::Value;

/// Everything the caller provides for one named type.
///
/// Which parts matter depends on the kind of the type: `fields` for object
/// types, `resolve_type` for interfaces and unions, `scalar` for custom
/// scalars, and `enum_values` for enums.
#[derive(Clone, Debug, Default)]
pub struct TypeImplementation {
    pub fields: IndexMap<String, FieldResolver>,
    pub resolve_type: Option<TypeResolver>,
    pub scalar: Option<ScalarImplementation>,
    pub enum_values: IndexMap<String, Value>,
}

/// Caller-owned implementations keyed by type name.
///
/// ```
/// use schemaql_core::ImplementationMap;
/// use schemaql_core::resolver::FieldResolver;
/// use schemaql_core::resolver::TypeResolver;
/// use serde_json::json;
///
/// let impls = ImplementationMap::new()
///     .field("Query", "hero", FieldResolver::constant(json!({"name": "R2-D2"})))
///     .resolve_type("Character", TypeResolver::by_name(|_| "Droid".to_string()))
///     .enum_value("Episode", "NEWHOPE", json!(4));
///
/// assert!(impls.field_resolver("Query", "hero").is_some());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ImplementationMap {
    types: IndexMap<String, TypeImplementation>,
}
impl ImplementationMap {
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&mut self, type_name: impl Into<String>) -> &mut TypeImplementation {
        self.types.entry(type_name.into()).or_default()
    }

    /// Registers the resolver for `type_name.field_name`.
    pub fn field(
        mut self,
        type_name: impl Into<String>,
        field_name: impl Into<String>,
        resolver: FieldResolver,
    ) -> Self {
        self.entry(type_name).fields.insert(field_name.into(), resolver);
        self
    }

    /// Registers the type resolver of an interface or union.
    pub fn resolve_type(mut self, type_name: impl Into<String>, resolver: TypeResolver) -> Self {
        self.entry(type_name).resolve_type = Some(resolver);
        self
    }

    pub fn scalar(
        mut self,
        type_name: impl Into<String>,
        implementation: ScalarImplementation,
    ) -> Self {
        self.entry(type_name).scalar = Some(implementation);
        self
    }

    /// Sets the runtime value of one enum value.
    pub fn enum_value(
        mut self,
        enum_name: impl Into<String>,
        value_name: impl Into<String>,
        value: Value,
    ) -> Self {
        self.entry(enum_name).enum_values.insert(value_name.into(), value);
        self
    }

    /// Replaces everything registered for `type_name`.
    pub fn insert(&mut self, type_name: impl Into<String>, implementation: TypeImplementation) {
        self.types.insert(type_name.into(), implementation);
    }

    pub fn get(&self, type_name: &str) -> Option<&TypeImplementation> {
        self.types.get(type_name)
    }

    pub fn field_resolver(&self, type_name: &str, field_name: &str) -> Option<&FieldResolver> {
        self.get(type_name)?.fields.get(field_name)
    }

    pub fn type_resolver(&self, type_name: &str) -> Option<&TypeResolver> {
        self.get(type_name)?.resolve_type.as_ref()
    }

    pub fn scalar_implementation(&self, type_name: &str) -> Option<&ScalarImplementation> {
        self.get(type_name)?.scalar.as_ref()
    }

    /// The registered enum values for `enum_name`, or `None` when none were
    /// registered at all.
    pub fn enum_values(&self, enum_name: &str) -> Option<&IndexMap<String, Value>> {
        self.get(enum_name)
            .map(|imp| &imp.enum_values)
            .filter(|values| !values.is_empty())
    }

    /// Fills in a `null`-returning resolver for every calculated object field
    /// in `document` that does not already have one.
    ///
    /// Useful for tooling that wants to compile a schema without running it.
    pub fn with_placeholder_resolvers(mut self, document: &ast::Document) -> Self {
        let object_defs = document.definitions.iter().filter_map(|def| match def {
            ast::Definition::ObjectType(obj) => Some(obj),
            ast::Definition::TypeExtension(ext) => Some(&ext.definition),
            _ => None,
        });
        for obj in object_defs {
            for field in obj.field_definitions().filter(|field| field.is_calculated()) {
                let fields = &mut self.entry(obj.name.as_str()).fields;
                if !fields.contains_key(field.name.as_str()) {
                    log::trace!(
                        "Using a placeholder resolver for `{}.{}`.",
                        obj.name.as_str(),
                        field.name.as_str(),
                    );
                    fields.insert(
                        field.name.value.clone(),
                        FieldResolver::constant(Value::Null),
                    );
                }
            }
        }
        self
    }
}
