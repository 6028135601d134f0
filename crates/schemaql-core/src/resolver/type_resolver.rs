use crate::TypeRegistry;
use crate::types::ObjectType;
use serde_json::Value;
use std::sync::Arc;

/// What a [`TypeResolver`] decided a runtime value is.
#[derive(Clone, Debug)]
pub enum ResolvedType<'r> {
    /// The name of an object type, looked up in the registry.
    ByName(String),

    /// An object type descriptor taken directly from the registry.
    Object(&'r ObjectType),
}

type TypeResolverFn =
    dyn for<'r> Fn(&Value, &'r TypeRegistry) -> ResolvedType<'r> + Send + Sync;

/// A caller-supplied function that picks the concrete object type of a
/// value belonging to an interface or union.
#[derive(Clone)]
pub struct TypeResolver(Arc<TypeResolverFn>);
impl TypeResolver {
    pub fn new<F>(resolve: F) -> Self
    where
        F: for<'r> Fn(&Value, &'r TypeRegistry) -> ResolvedType<'r> + Send + Sync + 'static,
    {
        Self(Arc::new(resolve))
    }

    /// A resolver that only ever answers with a type name.
    pub fn by_name<F>(resolve: F) -> Self
    where
        F: Fn(&Value) -> String + Send + Sync + 'static,
    {
        Self::new(move |value, _registry| ResolvedType::ByName(resolve(value)))
    }

    pub fn call<'r>(&self, value: &Value, registry: &'r TypeRegistry) -> ResolvedType<'r> {
        (self.0)(value, registry)
    }
}
impl std::fmt::Debug for TypeResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("TypeResolver(..)")
    }
}

/// A [`TypeResolver`] attached to a specific interface or union.
#[derive(Clone, Debug)]
pub struct BoundTypeResolver {
    abstract_type_name: String,
    resolver: TypeResolver,
}
impl BoundTypeResolver {
    pub(crate) fn new(abstract_type_name: impl Into<String>, resolver: TypeResolver) -> Self {
        Self {
            abstract_type_name: abstract_type_name.into(),
            resolver,
        }
    }

    pub fn abstract_type_name(&self) -> &str {
        self.abstract_type_name.as_str()
    }

    /// Resolves `value` to one of the possible object types of the bound
    /// abstract type.
    pub fn resolve<'r>(
        &self,
        value: &Value,
        registry: &'r TypeRegistry,
    ) -> Result<&'r ObjectType, TypeResolutionError> {
        let object_type = match self.resolver.call(value, registry) {
            ResolvedType::ByName(type_name) => registry
                .object_type(type_name.as_str())
                .ok_or_else(|| TypeResolutionError::UnknownObjectType {
                    abstract_type_name: self.abstract_type_name.clone(),
                    type_name,
                })?,
            ResolvedType::Object(object_type) => object_type,
        };

        if !registry.is_possible_type(self.abstract_type_name.as_str(), object_type.name()) {
            return Err(TypeResolutionError::NotAPossibleType {
                abstract_type_name: self.abstract_type_name.clone(),
                type_name: object_type.name().to_string(),
            });
        }

        Ok(object_type)
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum TypeResolutionError {
    #[error(
        "the type resolver for `{abstract_type_name}` returned `{type_name}`, \
        which is not an object type"
    )]
    UnknownObjectType {
        abstract_type_name: String,
        type_name: String,
    },

    #[error("`{type_name}` is not a possible type of `{abstract_type_name}`")]
    NotAPossibleType {
        abstract_type_name: String,
        type_name: String,
    },
}
