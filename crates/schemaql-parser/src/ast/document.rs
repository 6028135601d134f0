use crate::ast::EnumTypeDefinition;
use crate::ast::InputObjectTypeDefinition;
use crate::ast::InterfaceTypeDefinition;
use crate::ast::ObjectTypeDefinition;
use crate::ast::ScalarTypeDefinition;
use crate::ast::TypeExtensionDefinition;
use crate::ast::UnionTypeDefinition;

/// Root node of a parsed schema document.
///
/// `definitions` retains source order. Order matters for documentation
/// attachment (a [`Definition::Comment`] documents whatever follows it) but
/// not for type identity.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Document {
    pub definitions: Vec<Definition>,
}
impl Document {
    /// Iterates the non-comment definitions of this document.
    pub fn type_definitions(&self) -> impl Iterator<Item = &Definition> {
        self.definitions
            .iter()
            .filter(|def| !matches!(def, Definition::Comment(_)))
    }
}

/// A top-level entry of a [`Document`].
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Definition {
    Comment(Comment),
    EnumType(EnumTypeDefinition),
    InputObjectType(InputObjectTypeDefinition),
    InterfaceType(InterfaceTypeDefinition),
    ObjectType(ObjectTypeDefinition),
    ScalarType(ScalarTypeDefinition),
    TypeExtension(TypeExtensionDefinition),
    UnionType(UnionTypeDefinition),
}
impl Definition {
    /// Human-readable name of this node's kind, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Comment(_) => "Comment",
            Self::EnumType(_) => "EnumTypeDefinition",
            Self::InputObjectType(_) => "InputObjectTypeDefinition",
            Self::InterfaceType(_) => "InterfaceTypeDefinition",
            Self::ObjectType(_) => "ObjectTypeDefinition",
            Self::ScalarType(_) => "ScalarTypeDefinition",
            Self::TypeExtension(_) => "TypeExtensionDefinition",
            Self::UnionType(_) => "UnionTypeDefinition",
        }
    }

    /// The name of the type this definition declares (or extends).
    ///
    /// Returns `None` for comments.
    pub fn type_name(&self) -> Option<&str> {
        match self {
            Self::Comment(_) => None,
            Self::EnumType(def) => Some(def.name.value.as_str()),
            Self::InputObjectType(def) => Some(def.name.value.as_str()),
            Self::InterfaceType(def) => Some(def.name.value.as_str()),
            Self::ObjectType(def) => Some(def.name.value.as_str()),
            Self::ScalarType(def) => Some(def.name.value.as_str()),
            Self::TypeExtension(ext) => Some(ext.definition.name.value.as_str()),
            Self::UnionType(def) => Some(def.name.value.as_str()),
        }
    }
}

/// A `#`-comment. `value` holds the raw text including the leading `#`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Comment {
    pub value: String,
}
impl Comment {
    /// The comment text with the leading `#` removed.
    pub fn text(&self) -> &str {
        self.value.strip_prefix('#').unwrap_or(self.value.as_str())
    }
}

/// An entry inside a braced or parenthesized body: either a comment or the
/// body's item kind (a field, an enum value, an input value, ...).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Member<T> {
    Comment(Comment),
    Item(T),
}
impl<T> Member<T> {
    pub fn as_item(&self) -> Option<&T> {
        match self {
            Self::Comment(_) => None,
            Self::Item(item) => Some(item),
        }
    }
}

/// Iterates only the items (skipping comments) of a member list.
pub(crate) fn items<T>(members: &[Member<T>]) -> impl Iterator<Item = &T> {
    members.iter().filter_map(Member::as_item)
}
