//! The abstract syntax tree produced by [`SdlParser`](crate::SdlParser).
//!
//! Every node is a plain, immutable record. Comments are preserved as
//! [`Comment`] nodes (rather than discarded as trivia) because they carry
//! the documentation for whatever definition or field follows them.

mod document;
mod type_definitions;
mod type_reference;
mod values;

pub use document::Comment;
pub use document::Definition;
pub use document::Document;
pub use document::Member;
pub use type_definitions::EnumTypeDefinition;
pub use type_definitions::EnumValueDefinition;
pub use type_definitions::FieldDefinition;
pub use type_definitions::InputObjectTypeDefinition;
pub use type_definitions::InputValueDefinition;
pub use type_definitions::InterfaceTypeDefinition;
pub use type_definitions::ObjectTypeDefinition;
pub use type_definitions::ScalarTypeDefinition;
pub use type_definitions::TypeExtensionDefinition;
pub use type_definitions::UnionTypeDefinition;
pub use type_reference::ListType;
pub use type_reference::Name;
pub use type_reference::NamedType;
pub use type_reference::NonNullType;
pub use type_reference::Type;
pub use values::BooleanValue;
pub use values::EnumValue;
pub use values::ListValue;
pub use values::Number;
pub use values::NumberValue;
pub use values::ObjectField;
pub use values::ObjectValue;
pub use values::StringValue;
pub use values::Value;
