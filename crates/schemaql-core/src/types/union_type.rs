use crate::TypeRegistry;
use crate::resolver::BoundTypeResolver;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectType;
use indexmap::IndexMap;

/// Represents a union type defined within some [`TypeRegistry`].
#[derive(Clone, Debug)]
pub struct UnionType {
    pub(crate) description: Option<String>,
    pub(crate) members: IndexMap<String, NamedGraphQLTypeRef>,
    pub(crate) name: String,
    pub(crate) resolve_type: Option<BoundTypeResolver>,
}
impl UnionType {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn has_member(&self, type_name: &str) -> bool {
        self.members.contains_key(type_name)
    }

    /// The names of each member type, in the order they were written.
    pub fn member_type_names(&self) -> Vec<&str> {
        self.members.keys()
            .map(|type_name| type_name.as_str())
            .collect()
    }

    /// The member object types, in the order they were written.
    pub fn member_types<'r>(&self, registry: &'r TypeRegistry) -> Vec<&'r ObjectType> {
        self.members.keys()
            .filter_map(|type_name| registry.object_type(type_name))
            .collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn resolve_type(&self) -> Option<&BoundTypeResolver> {
        self.resolve_type.as_ref()
    }
}
