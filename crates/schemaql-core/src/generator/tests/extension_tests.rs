use crate::GenerateError;
use crate::ImplementationMap;
use crate::generator::tests::test_utils;
use crate::resolver::FieldResolver;
use crate::types::GraphQLTypeKind;

type Result<T> = std::result::Result<T, GenerateError>;

#[test]
fn extension_appends_fields_and_interfaces() -> Result<()> {
    let impls = ImplementationMap::new()
        .field("User", "friends", FieldResolver::constant(serde_json::json!([])));
    let registry = test_utils::generate_with("
        extend type User implements Node {
          # Added later.
          friends(first: Int): [User]
        }
        interface Node { id: ID }
        type User { id: ID }
    ", &impls)?;

    let user = registry.object_type("User").unwrap();
    let field_names = user.fields().keys().map(String::as_str).collect::<Vec<_>>();
    assert_eq!(field_names, vec!["id", "friends"]);
    assert!(user.implements("Node"));
    assert_eq!(user.field("friends").unwrap().description(), Some("Added later."));
    assert!(user.field("friends").unwrap().resolver().is_some());

    Ok(())
}

/// Comments directly before `extend` do not document anything.
#[test]
fn comments_before_extend_are_discarded() -> Result<()> {
    let registry = test_utils::generate("
        type User { id: ID }
        # about the extension
        extend type User { name: String }
        type Query { me: User }
    ")?;

    assert_eq!(registry.object_type("Query").unwrap().description(), None);
    assert_eq!(registry.object_type("User").unwrap().description(), None);

    Ok(())
}

#[test]
fn extending_an_undefined_type_fails() {
    let err = test_utils::generate_err("extend type Ghost { boo: String }");

    assert_eq!(err, GenerateError::ExtensionOfUndefinedType {
        type_name: "Ghost".to_string(),
    });
}

#[test]
fn extending_a_non_object_type_fails() {
    let err = test_utils::generate_err("
        interface Node { id: ID }
        extend type Node { name: String }
    ");

    assert_eq!(err, GenerateError::InvalidExtensionType {
        type_name: "Node".to_string(),
        kind: GraphQLTypeKind::Interface,
    });
}

#[test]
fn extension_field_collision_fails() {
    let err = test_utils::generate_err("
        type User { id: ID }
        extend type User { id: String }
    ");

    assert_eq!(err, GenerateError::DuplicateFieldDefinition {
        type_name: "User".to_string(),
        field_name: "id".to_string(),
    });
}

#[test]
fn calculated_extension_field_needs_implementation() {
    let err = test_utils::generate_err("
        type User { id: ID }
        extend type User { friends(first: Int): [User] }
    ");

    assert!(matches!(err, GenerateError::MissingFieldImplementation { .. }));
}
