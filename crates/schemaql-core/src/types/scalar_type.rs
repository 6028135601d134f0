use crate::resolver::ScalarImplementation;

/// Represents a custom scalar type defined within some
/// [`TypeRegistry`](crate::TypeRegistry).
#[derive(Clone, Debug)]
pub struct ScalarType {
    pub(crate) description: Option<String>,
    pub(crate) implementation: ScalarImplementation,
    pub(crate) name: String,
}
impl ScalarType {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// How values of this scalar are serialized and parsed. Parts left
    /// unimplemented behave as the identity.
    pub fn implementation(&self) -> &ScalarImplementation {
        &self.implementation
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
