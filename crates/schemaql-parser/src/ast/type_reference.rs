/// An identifier matching `[_A-Za-z][_0-9A-Za-z]*`.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Name {
    pub value: String,
}
impl Name {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }

    pub fn as_str(&self) -> &str {
        self.value.as_str()
    }
}

/// A reference to a type by name.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NamedType {
    pub name: Name,
}
impl NamedType {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: Name::new(name) }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ListType {
    pub inner: Box<Type>,
}

/// `T!`. The inner type is never itself a `NonNull`.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NonNullType {
    pub inner: Box<Type>,
}

/// A type reference as written in source: a name, optionally wrapped in any
/// composition of list and non-null wrappers.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Type {
    Named(NamedType),
    List(ListType),
    NonNull(NonNullType),
}
impl Type {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(NamedType::new(name))
    }

    pub fn list(inner: Type) -> Self {
        Self::List(ListType { inner: Box::new(inner) })
    }

    pub fn non_null(inner: Type) -> Self {
        Self::NonNull(NonNullType { inner: Box::new(inner) })
    }

    /// The name at the core of this (possibly wrapped) type.
    pub fn innermost_name(&self) -> &str {
        match self {
            Self::Named(named) => named.name.as_str(),
            Self::List(list) => list.inner.innermost_name(),
            Self::NonNull(non_null) => non_null.inner.innermost_name(),
        }
    }
}
impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Named(named) => write!(f, "{}", named.name.as_str()),
            Self::List(list) => write!(f, "[{}]", list.inner),
            Self::NonNull(non_null) => write!(f, "{}!", non_null.inner),
        }
    }
}
