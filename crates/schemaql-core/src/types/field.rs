use crate::resolver::BoundFieldResolver;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

/// A field defined on an [`ObjectType`](crate::types::ObjectType) or
/// [`InterfaceType`](crate::types::InterfaceType).
#[derive(Clone, Debug)]
pub struct Field {
    pub(crate) arguments: Option<IndexMap<String, Argument>>,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) resolver: Option<BoundFieldResolver>,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Field {
    /// The arguments this field accepts, in definition order.
    ///
    /// `None` when no argument list was written. `Some` (possibly empty) when
    /// one was, which makes the field *calculated*.
    pub fn arguments(&self) -> Option<&IndexMap<String, Argument>> {
        self.arguments.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_calculated(&self) -> bool {
        self.arguments.is_some()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The resolver bound to this field. Interface fields never have one.
    pub fn resolver(&self) -> Option<&BoundFieldResolver> {
        self.resolver.as_ref()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}

/// An argument accepted by a [`Field`].
#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    pub(crate) default_value: Option<serde_json::Value>,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Argument {
    /// The default value, already converted to its runtime representation.
    pub fn default_value(&self) -> Option<&serde_json::Value> {
        self.default_value.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
