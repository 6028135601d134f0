use crate::types::GraphQLTypeKind;

/// The scalar types every registry knows without them being declared.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BuiltinScalar {
    Boolean,
    Float,
    ID,
    Int,
    String,
}
impl BuiltinScalar {
    pub const ALL: [BuiltinScalar; 5] = [
        Self::Boolean,
        Self::Float,
        Self::ID,
        Self::Int,
        Self::String,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|scalar| scalar.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::Float => "Float",
            Self::ID => "ID",
            Self::Int => "Int",
            Self::String => "String",
        }
    }

    pub fn kind(&self) -> GraphQLTypeKind {
        match self {
            Self::Boolean => GraphQLTypeKind::Bool,
            Self::Float => GraphQLTypeKind::Float,
            Self::ID => GraphQLTypeKind::ID,
            Self::Int => GraphQLTypeKind::Int,
            Self::String => GraphQLTypeKind::String,
        }
    }
}
