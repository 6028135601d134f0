mod builtin_scalar;
mod enum_type;
mod field;
mod graphql_type;
mod graphql_type_kind;
mod input_object_type;
mod interface_type;
mod named_graphql_type_ref;
mod object_type;
mod scalar_type;
mod type_annotation;
mod union_type;

pub use builtin_scalar::BuiltinScalar;
pub use enum_type::EnumType;
pub use enum_type::EnumValue;
pub use field::Argument;
pub use field::Field;
pub use graphql_type::GraphQLType;
pub use graphql_type_kind::GraphQLTypeKind;
pub use input_object_type::InputField;
pub use input_object_type::InputObjectType;
pub use interface_type::InterfaceType;
pub use named_graphql_type_ref::DerefByNameError;
pub use named_graphql_type_ref::NamedGraphQLTypeRef;
pub use object_type::ObjectType;
pub use scalar_type::ScalarType;
pub use type_annotation::TypeAnnotation;
pub use union_type::UnionType;
