use crate::TypeRegistry;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;

/// A non-owning, by-name reference to a type held by a [`TypeRegistry`].
///
/// Descriptors never point at each other directly; they store these refs
/// and are linked up at lookup time via [`NamedGraphQLTypeRef::deref()`].
/// This is what lets mutually-referencing types live side by side in the
/// registry.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct NamedGraphQLTypeRef {
    name: String,
    kind: GraphQLTypeKind,
}
impl NamedGraphQLTypeRef {
    pub fn new(name: impl Into<String>, kind: GraphQLTypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The kind the name resolved to when the reference was created.
    pub fn kind(&self) -> GraphQLTypeKind {
        self.kind
    }

    pub fn deref<'r>(
        &self,
        registry: &'r TypeRegistry,
    ) -> Result<GraphQLType<'r>, DerefByNameError> {
        registry
            .lookup(self.name.as_str())
            .ok_or_else(|| DerefByNameError::DanglingReference(self.name.clone()))
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DerefByNameError {
    #[error("`{0}` does not name a type in this registry")]
    DanglingReference(String),
}
