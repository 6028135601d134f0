use crate::types::Field;
use crate::types::NamedGraphQLTypeRef;
use indexmap::IndexMap;

/// Represents an object type defined within some
/// [`TypeRegistry`](crate::TypeRegistry).
#[derive(Clone, Debug)]
pub struct ObjectType {
    pub(crate) description: Option<String>,
    pub(crate) fields: IndexMap<String, Field>,
    pub(crate) interfaces: Vec<NamedGraphQLTypeRef>,
    pub(crate) name: String,
}
impl ObjectType {
    /// The description of this [`ObjectType`] as written in the `#` comments
    /// immediately preceding its definition.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The fields of this type, in definition order. Fields added by
    /// `extend type` follow the originally defined ones.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// The interfaces this type declares it implements.
    pub fn interfaces(&self) -> &[NamedGraphQLTypeRef] {
        self.interfaces.as_slice()
    }

    pub fn implements(&self, interface_name: &str) -> bool {
        self.interfaces
            .iter()
            .any(|iface| iface.name() == interface_name)
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
