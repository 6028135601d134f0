use crate::types::BuiltinScalar;
use crate::types::EnumType;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;

/// A borrowed view of any type known to a
/// [`TypeRegistry`](crate::TypeRegistry).
///
/// Built-in scalars have no descriptor of their own and are represented by
/// unit variants.
#[derive(Clone, Copy, Debug)]
pub enum GraphQLType<'a> {
    Bool,
    Enum(&'a EnumType),
    Float,
    ID,
    InputObject(&'a InputObjectType),
    Int,
    Interface(&'a InterfaceType),
    Object(&'a ObjectType),
    Scalar(&'a ScalarType),
    String,
    Union(&'a UnionType),
}
impl<'a> GraphQLType<'a> {
    pub fn as_enum(&self) -> Option<&'a EnumType> {
        if let Self::Enum(type_) = *self { Some(type_) } else { None }
    }

    pub fn as_input_object(&self) -> Option<&'a InputObjectType> {
        if let Self::InputObject(type_) = *self { Some(type_) } else { None }
    }

    pub fn as_interface(&self) -> Option<&'a InterfaceType> {
        if let Self::Interface(type_) = *self { Some(type_) } else { None }
    }

    pub fn as_object(&self) -> Option<&'a ObjectType> {
        if let Self::Object(type_) = *self { Some(type_) } else { None }
    }

    pub fn as_scalar(&self) -> Option<&'a ScalarType> {
        if let Self::Scalar(type_) = *self { Some(type_) } else { None }
    }

    pub fn as_union(&self) -> Option<&'a UnionType> {
        if let Self::Union(type_) = *self { Some(type_) } else { None }
    }

    /// The documentation attached to this type, if any. Built-in scalars
    /// have none.
    pub fn description(&self) -> Option<&'a str> {
        match self {
            Self::Bool | Self::Float | Self::ID | Self::Int | Self::String => None,
            Self::Enum(type_) => type_.description(),
            Self::InputObject(type_) => type_.description(),
            Self::Interface(type_) => type_.description(),
            Self::Object(type_) => type_.description(),
            Self::Scalar(type_) => type_.description(),
            Self::Union(type_) => type_.description(),
        }
    }

    pub fn kind(&self) -> GraphQLTypeKind {
        self.into()
    }

    pub fn name(&self) -> &'a str {
        match self {
            Self::Bool => BuiltinScalar::Boolean.name(),
            Self::Float => BuiltinScalar::Float.name(),
            Self::ID => BuiltinScalar::ID.name(),
            Self::Int => BuiltinScalar::Int.name(),
            Self::String => BuiltinScalar::String.name(),
            Self::Enum(type_) => type_.name(),
            Self::InputObject(type_) => type_.name(),
            Self::Interface(type_) => type_.name(),
            Self::Object(type_) => type_.name(),
            Self::Scalar(type_) => type_.name(),
            Self::Union(type_) => type_.name(),
        }
    }
}
impl std::convert::From<BuiltinScalar> for GraphQLType<'_> {
    fn from(value: BuiltinScalar) -> Self {
        match value {
            BuiltinScalar::Boolean => Self::Bool,
            BuiltinScalar::Float => Self::Float,
            BuiltinScalar::ID => Self::ID,
            BuiltinScalar::Int => Self::Int,
            BuiltinScalar::String => Self::String,
        }
    }
}
