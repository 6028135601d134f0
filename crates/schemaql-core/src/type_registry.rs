use crate::GenerateError;
use crate::Generator;
use crate::ImplementationMap;
use crate::ast;
use crate::types::BuiltinScalar;
use crate::types::EnumType;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;
use indexmap::IndexMap;

/// The object types that serve as entry points of operations, by
/// convention named `Query`, `Mutation`, and `Subscription`.
#[derive(Clone, Copy, Debug)]
pub struct RootOperationTypes<'r> {
    pub query: Option<&'r ObjectType>,
    pub mutation: Option<&'r ObjectType>,
    pub subscription: Option<&'r ObjectType>,
}

/// The fully linked output of a [`Generator`] run: every type defined by a
/// document, keyed by name and grouped by kind.
///
/// Each name maps to at most one type across all kinds. Types refer to each
/// other by name (see
/// [`NamedGraphQLTypeRef`](crate::types::NamedGraphQLTypeRef)), and every
/// such reference resolves within the registry that holds it.
///
/// A registry is immutable once built and may be shared freely across
/// threads.
#[derive(Clone, Debug, Default)]
pub struct TypeRegistry {
    pub(crate) enum_types: IndexMap<String, EnumType>,
    pub(crate) input_object_types: IndexMap<String, InputObjectType>,
    pub(crate) interface_types: IndexMap<String, InterfaceType>,
    pub(crate) object_types: IndexMap<String, ObjectType>,
    pub(crate) scalar_types: IndexMap<String, ScalarType>,
    pub(crate) union_types: IndexMap<String, UnionType>,
}
impl TypeRegistry {
    /// Parses `sdl` and generates a registry from it, binding resolvers from
    /// `implementations`.
    pub fn build_from_str(
        sdl: &str,
        implementations: &ImplementationMap,
    ) -> Result<Self, GenerateError> {
        let document = schemaql_parser::parse(sdl)?;
        Self::build_from_document(&document, implementations)
    }

    pub fn build_from_document(
        document: &ast::Document,
        implementations: &ImplementationMap,
    ) -> Result<Self, GenerateError> {
        Generator::new(implementations).generate(document)
    }

    /// Looks up any type by name, built-in scalars included.
    pub fn lookup(&self, type_name: &str) -> Option<GraphQLType<'_>> {
        if let Some(builtin) = BuiltinScalar::from_name(type_name) {
            return Some(builtin.into());
        }
        self.object_types.get(type_name).map(GraphQLType::Object)
            .or_else(|| self.interface_types.get(type_name).map(GraphQLType::Interface))
            .or_else(|| self.union_types.get(type_name).map(GraphQLType::Union))
            .or_else(|| self.scalar_types.get(type_name).map(GraphQLType::Scalar))
            .or_else(|| self.enum_types.get(type_name).map(GraphQLType::Enum))
            .or_else(|| self.input_object_types.get(type_name).map(GraphQLType::InputObject))
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.lookup(type_name).is_some()
    }

    pub fn enum_type(&self, type_name: &str) -> Option<&EnumType> {
        self.enum_types.get(type_name)
    }

    pub fn enum_types(&self) -> &IndexMap<String, EnumType> {
        &self.enum_types
    }

    pub fn input_object_type(&self, type_name: &str) -> Option<&InputObjectType> {
        self.input_object_types.get(type_name)
    }

    pub fn input_object_types(&self) -> &IndexMap<String, InputObjectType> {
        &self.input_object_types
    }

    pub fn interface_type(&self, type_name: &str) -> Option<&InterfaceType> {
        self.interface_types.get(type_name)
    }

    pub fn interface_types(&self) -> &IndexMap<String, InterfaceType> {
        &self.interface_types
    }

    pub fn object_type(&self, type_name: &str) -> Option<&ObjectType> {
        self.object_types.get(type_name)
    }

    pub fn object_types(&self) -> &IndexMap<String, ObjectType> {
        &self.object_types
    }

    pub fn scalar_type(&self, type_name: &str) -> Option<&ScalarType> {
        self.scalar_types.get(type_name)
    }

    pub fn scalar_types(&self) -> &IndexMap<String, ScalarType> {
        &self.scalar_types
    }

    pub fn union_type(&self, type_name: &str) -> Option<&UnionType> {
        self.union_types.get(type_name)
    }

    pub fn union_types(&self) -> &IndexMap<String, UnionType> {
        &self.union_types
    }

    /// Whether `object_type_name` is a possible runtime type of the
    /// interface or union named `abstract_type_name`.
    ///
    /// Always `false` when `abstract_type_name` names neither an interface
    /// nor a union.
    pub fn is_possible_type(&self, abstract_type_name: &str, object_type_name: &str) -> bool {
        if let Some(union_type) = self.union_types.get(abstract_type_name) {
            return union_type.has_member(object_type_name);
        }
        if self.interface_types.contains_key(abstract_type_name) {
            return self.object_types
                .get(object_type_name)
                .is_some_and(|obj| obj.implements(abstract_type_name));
        }
        false
    }

    /// All object types implementing the interface named `interface_name`,
    /// in definition order.
    pub fn implementors_of(&self, interface_name: &str) -> Vec<&ObjectType> {
        self.object_types
            .values()
            .filter(|obj| obj.implements(interface_name))
            .collect()
    }

    pub fn root_operation_types(&self) -> RootOperationTypes<'_> {
        RootOperationTypes {
            query: self.object_types.get("Query"),
            mutation: self.object_types.get("Mutation"),
            subscription: self.object_types.get("Subscription"),
        }
    }

    /// Total number of user-defined types. Built-in scalars are not counted.
    pub fn len(&self) -> usize {
        self.enum_types.len()
            + self.input_object_types.len()
            + self.interface_types.len()
            + self.object_types.len()
            + self.scalar_types.len()
            + self.union_types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
