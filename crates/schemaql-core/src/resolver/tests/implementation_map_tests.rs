use crate::ImplementationMap;
use crate::TypeRegistry;
use crate::resolver::FieldResolver;
use crate::resolver::TypeImplementation;
use serde_json::Value;
use serde_json::json;

#[test]
fn builders_register_by_type_name() {
    let impls = ImplementationMap::new()
        .field("Query", "a", FieldResolver::constant(Value::Null))
        .enum_value("Color", "RED", json!(1));

    assert!(impls.field_resolver("Query", "a").is_some());
    assert!(impls.field_resolver("Query", "b").is_none());
    assert!(impls.field_resolver("Other", "a").is_none());
    assert!(impls.type_resolver("Query").is_none());
    assert_eq!(impls.enum_values("Color").unwrap().get("RED"), Some(&json!(1)));
}

/// A type entry with no enum values counts as no enum implementation.
#[test]
fn empty_enum_values_are_absent() {
    let impls = ImplementationMap::new()
        .field("Color", "unused", FieldResolver::constant(Value::Null));

    assert!(impls.enum_values("Color").is_none());
}

#[test]
fn insert_replaces_the_type_entry() {
    let mut impls = ImplementationMap::new()
        .field("Query", "a", FieldResolver::constant(Value::Null));
    impls.insert("Query", TypeImplementation::default());

    assert!(impls.field_resolver("Query", "a").is_none());
    assert!(impls.get("Query").is_some());
}

#[test]
fn placeholder_resolvers_cover_calculated_fields() {
    let document = schemaql_parser::parse("
        type Query { search(term: String): [String] plain: Int kept(): Int }
        extend type Query { more(first: Int): Int }
        interface Node { related(first: Int): Node }
    ").unwrap();
    let impls = ImplementationMap::new()
        .field("Query", "kept", FieldResolver::constant(json!(1)))
        .with_placeholder_resolvers(&document);

    assert!(impls.field_resolver("Query", "search").is_some());
    assert!(impls.field_resolver("Query", "more").is_some());
    assert!(impls.field_resolver("Query", "plain").is_none());
    assert!(impls.field_resolver("Node", "related").is_none());

    let registry = TypeRegistry::build_from_document(&document, &impls);
    assert!(registry.is_ok());
}
