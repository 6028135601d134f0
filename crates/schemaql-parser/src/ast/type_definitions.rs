use crate::ast::Member;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::Type;
use crate::ast::Value;
use crate::ast::document::items;

/// `type Name implements A B { ... }`
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectTypeDefinition {
    pub name: Name,
    pub interfaces: Vec<NamedType>,
    pub fields: Vec<Member<FieldDefinition>>,
}
impl ObjectTypeDefinition {
    pub fn field_definitions(&self) -> impl Iterator<Item = &FieldDefinition> {
        items(&self.fields)
    }
}

/// `interface Name { ... }`
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InterfaceTypeDefinition {
    pub name: Name,
    pub fields: Vec<Member<FieldDefinition>>,
}
impl InterfaceTypeDefinition {
    pub fn field_definitions(&self) -> impl Iterator<Item = &FieldDefinition> {
        items(&self.fields)
    }
}

/// `union Name = A | B`
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UnionTypeDefinition {
    pub name: Name,
    pub types: Vec<NamedType>,
}

/// `scalar Name`
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ScalarTypeDefinition {
    pub name: Name,
}

/// `enum Name { A B C }`
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumTypeDefinition {
    pub name: Name,
    pub values: Vec<Member<EnumValueDefinition>>,
}
impl EnumTypeDefinition {
    pub fn value_definitions(&self) -> impl Iterator<Item = &EnumValueDefinition> {
        items(&self.values)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumValueDefinition {
    pub name: Name,
}

/// `input Name { field: Type = default }`
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputObjectTypeDefinition {
    pub name: Name,
    pub fields: Vec<Member<InputValueDefinition>>,
}
impl InputObjectTypeDefinition {
    pub fn field_definitions(&self) -> impl Iterator<Item = &InputValueDefinition> {
        items(&self.fields)
    }
}

/// `extend type Name { ... }`
///
/// Only object types can be extended.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct TypeExtensionDefinition {
    pub definition: ObjectTypeDefinition,
}

/// A field on an object or interface type.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FieldDefinition {
    pub name: Name,
    /// `Some` whenever an argument list was written, including an empty
    /// `()`. A field with an argument list is a *calculated* field.
    pub arguments: Option<Vec<Member<InputValueDefinition>>>,
    pub field_type: Type,
}
impl FieldDefinition {
    pub fn argument_definitions(&self) -> impl Iterator<Item = &InputValueDefinition> {
        self.arguments
            .as_deref()
            .map(items)
            .into_iter()
            .flatten()
    }

    pub fn is_calculated(&self) -> bool {
        self.arguments.is_some()
    }
}

/// A field argument or an input-object field.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputValueDefinition {
    pub name: Name,
    pub value_type: Type,
    pub default_value: Option<Value>,
}
