use crate::types::NamedGraphQLTypeRef;

/// The resolved type of a [`Field`](crate::types::Field),
/// [`Argument`](crate::types::Argument), or
/// [`InputField`](crate::types::InputField).
///
/// Wrappers compose in the order they were written: `[String!]!` is
/// `NonNull(List(NonNull(Named(String))))`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TypeAnnotation {
    Named(NamedGraphQLTypeRef),
    List(Box<TypeAnnotation>),
    NonNull(Box<TypeAnnotation>),
}
impl TypeAnnotation {
    /// Recursively unwrap this annotation and return the inner-most named
    /// type reference.
    pub fn innermost_type_ref(&self) -> &NamedGraphQLTypeRef {
        match self {
            Self::Named(type_ref) => type_ref,
            Self::List(inner) | Self::NonNull(inner) => inner.innermost_type_ref(),
        }
    }

    pub fn is_nullable(&self) -> bool {
        !matches!(self, Self::NonNull(_))
    }

    pub fn is_list(&self) -> bool {
        match self {
            Self::List(_) => true,
            Self::NonNull(inner) => inner.is_list(),
            Self::Named(_) => false,
        }
    }
}
impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Named(type_ref) => write!(f, "{}", type_ref.name()),
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}
