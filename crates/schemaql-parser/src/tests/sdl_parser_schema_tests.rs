//! Tests for type definitions and document structure.

use crate::ast;
use crate::ast::Member;
use crate::ast::Type;
use crate::tests::utils::comment;
use crate::tests::utils::name;
use crate::tests::utils::parse_schema;
use crate::tests::utils::parse_single_object;

// =============================================================================
// Document
// =============================================================================

#[test]
fn empty_document() {
    assert!(parse_schema("").definitions.is_empty());
    assert!(parse_schema(" \n\t, \r\n").definitions.is_empty());
}

#[test]
fn comments_only_document() {
    let doc = parse_schema("# one\n  # two\n");
    assert_eq!(doc.definitions, vec![
        ast::Definition::Comment(comment("# one")),
        ast::Definition::Comment(comment("# two")),
    ]);
}

#[test]
fn definitions_keep_source_order() {
    let doc = parse_schema("scalar B\nscalar A\n# doc\nscalar C");
    let names: Vec<_> = doc.type_definitions().filter_map(|d| d.type_name()).collect();
    assert_eq!(names, vec!["B", "A", "C"]);
    assert_eq!(doc.definitions.len(), 4);
}

// =============================================================================
// Object types
// =============================================================================

#[test]
fn object_type_with_fields() {
    let obj = parse_single_object("type Person { name: String age: Int }");
    assert_eq!(obj.name, name("Person"));
    assert!(obj.interfaces.is_empty());
    let fields: Vec<_> = obj
        .field_definitions()
        .map(|f| (f.name.as_str().to_string(), f.field_type.to_string()))
        .collect();
    assert_eq!(fields, vec![
        ("name".to_string(), "String".to_string()),
        ("age".to_string(), "Int".to_string()),
    ]);
}

#[test]
fn empty_object_type() {
    let obj = parse_single_object("type Empty {}");
    assert!(obj.fields.is_empty());
}

#[test]
fn fields_separated_by_commas_and_newlines() {
    let obj = parse_single_object("type T {\n  a: Int,\n  b: Int,, c: Int\n}");
    assert_eq!(obj.field_definitions().count(), 3);
}

#[test]
fn field_comments_are_members() {
    let obj = parse_single_object("type T {\n  # the a\n  a: Int\n  # trailing\n}");
    assert_eq!(obj.fields, vec![
        Member::Comment(comment("# the a")),
        Member::Item(ast::FieldDefinition {
            name: name("a"),
            arguments: None,
            field_type: Type::named("Int"),
        }),
        Member::Comment(comment("# trailing")),
    ]);
}

/// Field names are plain names, so keywords are fine as field names.
#[test]
fn keyword_field_names() {
    let obj = parse_single_object("type T { type: String input: Int enum: Boolean }");
    let names: Vec<_> = obj.field_definitions().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["type", "input", "enum"]);
}

#[test]
fn implements_variants() {
    for source in [
        "type T implements A B { x: Int }",
        "type T implements A, B { x: Int }",
        "type T implements A & B { x: Int }",
        "type T implements & A & B { x: Int }",
    ] {
        let obj = parse_single_object(source);
        assert_eq!(
            obj.interfaces,
            vec![ast::NamedType::new("A"), ast::NamedType::new("B")],
            "source: {source}",
        );
    }
}

// =============================================================================
// Arguments
// =============================================================================

#[test]
fn field_without_arguments_has_none() {
    let obj = parse_single_object("type T { f: Int }");
    let field = obj.field_definitions().next().unwrap();
    assert_eq!(field.arguments, None);
    assert!(!field.is_calculated());
}

/// An empty argument list is still an argument list.
#[test]
fn field_with_empty_arguments_has_some() {
    let obj = parse_single_object("type T { f(): Int }");
    let field = obj.field_definitions().next().unwrap();
    assert_eq!(field.arguments, Some(vec![]));
    assert!(field.is_calculated());
}

#[test]
fn field_arguments_with_comments_and_defaults() {
    let obj = parse_single_object(concat!(
        "type T {\n",
        "  f(\n",
        "    # first\n",
        "    a: Int = 1\n",
        "    b: [String!]!\n",
        "  ): Int\n",
        "}",
    ));
    let field = obj.field_definitions().next().unwrap();
    assert_eq!(field.arguments.as_ref().unwrap().len(), 3);
    let args: Vec<_> = field.argument_definitions().collect();
    assert_eq!(args[0].name, name("a"));
    assert_eq!(
        args[0].default_value,
        Some(ast::Value::Number(ast::NumberValue {
            value: ast::Number::Int(1),
        })),
    );
    assert_eq!(args[1].value_type.to_string(), "[String!]!");
    assert_eq!(args[1].default_value, None);
}

// =============================================================================
// Other definitions
// =============================================================================

#[test]
fn interface_type() {
    let doc = parse_schema("interface Node { id: ID! }");
    let ast::Definition::InterfaceType(iface) = &doc.definitions[0] else {
        panic!("expected an interface, got {:?}", doc.definitions[0]);
    };
    assert_eq!(iface.name, name("Node"));
    assert_eq!(iface.field_definitions().count(), 1);
}

#[test]
fn union_type() {
    let doc = parse_schema("union Result = Success\n  | Failure|Other");
    assert_eq!(doc.definitions, vec![ast::Definition::UnionType(
        ast::UnionTypeDefinition {
            name: name("Result"),
            types: vec![
                ast::NamedType::new("Success"),
                ast::NamedType::new("Failure"),
                ast::NamedType::new("Other"),
            ],
        },
    )]);
}

#[test]
fn scalar_type() {
    let doc = parse_schema("scalar Date");
    assert_eq!(doc.definitions, vec![ast::Definition::ScalarType(
        ast::ScalarTypeDefinition { name: name("Date") },
    )]);
}

#[test]
fn enum_type_with_comments() {
    let doc = parse_schema("enum Color {\n  RED, GREEN\n  # the sky\n  BLUE\n}");
    let ast::Definition::EnumType(enum_def) = &doc.definitions[0] else {
        panic!("expected an enum, got {:?}", doc.definitions[0]);
    };
    let values: Vec<_> = enum_def.value_definitions().map(|v| v.name.as_str()).collect();
    assert_eq!(values, vec!["RED", "GREEN", "BLUE"]);
    assert_eq!(enum_def.values.len(), 4);
}

#[test]
fn input_object_type() {
    let doc = parse_schema("input Filter { limit: Int = 10 name: String }");
    let ast::Definition::InputObjectType(input) = &doc.definitions[0] else {
        panic!("expected an input object, got {:?}", doc.definitions[0]);
    };
    let fields: Vec<_> = input.field_definitions().collect();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0].value_type, Type::named("Int"));
    assert!(fields[0].default_value.is_some());
}

#[test]
fn type_extension() {
    let doc = parse_schema("extend type Query implements Node { extra: Int }");
    let ast::Definition::TypeExtension(ext) = &doc.definitions[0] else {
        panic!("expected an extension, got {:?}", doc.definitions[0]);
    };
    assert_eq!(ext.definition.name, name("Query"));
    assert_eq!(ext.definition.interfaces, vec![ast::NamedType::new("Node")]);
    assert_eq!(ext.definition.field_definitions().count(), 1);
}
