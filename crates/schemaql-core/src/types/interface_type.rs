use crate::resolver::BoundTypeResolver;
use crate::types::Field;
use indexmap::IndexMap;

/// Represents an interface type defined within some
/// [`TypeRegistry`](crate::TypeRegistry).
///
/// Interface fields are never bound to resolvers; the concrete object type's
/// fields are.
#[derive(Clone, Debug)]
pub struct InterfaceType {
    pub(crate) description: Option<String>,
    pub(crate) fields: IndexMap<String, Field>,
    pub(crate) name: String,
    pub(crate) resolve_type: Option<BoundTypeResolver>,
}
impl InterfaceType {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Decides which object type a runtime value of this interface is.
    pub fn resolve_type(&self) -> Option<&BoundTypeResolver> {
        self.resolve_type.as_ref()
    }
}
