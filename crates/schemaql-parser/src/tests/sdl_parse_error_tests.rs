//! Tests for syntax error messages, positions and excerpts.

use crate::ScanPattern;
use crate::SdlParseErrorKind;
use crate::tests::utils::parse_error;

const INVALID_DEFINITION: &str =
    "invalid definition (must be either a type, interface, union, scalar, enum, input or extend)";

#[test]
fn trailing_text_is_an_invalid_definition() {
    let err = parse_error("type A { a: Int }\nbogus B");
    assert_eq!(err.message(), INVALID_DEFINITION);
    assert_eq!(err.kind(), &SdlParseErrorKind::InvalidDefinition);
    assert_eq!((err.position().line(), err.position().col()), (1, 0));
}

/// `typeFoo` is a name, not the `type` keyword.
#[test]
fn keyword_without_boundary_is_an_invalid_definition() {
    let err = parse_error("typeFoo { a: Int }");
    assert_eq!(err.kind(), &SdlParseErrorKind::InvalidDefinition);
    assert_eq!(err.byte_offset(), 0);
}

#[test]
fn missing_type_name() {
    let err = parse_error("type { a: Int }");
    assert_eq!(err.message(), "Expected name but got \"{\"");
}

/// Missing names are reported with the same wording the name pattern uses
/// to describe itself.
#[test]
fn missing_name_is_described_by_its_pattern() {
    let err = parse_error("enum Episode { NEWHOPE }
input {}");
    assert_eq!(err.kind(), &SdlParseErrorKind::ExpectedToken {
        expected: ScanPattern::Name.description().to_string(),
        found: Some("{".to_string()),
    });
    assert_eq!((err.position().line(), err.position().col()), (1, 6));
}

#[test]
fn missing_colon_in_field() {
    let err = parse_error("type User {\n  name String\n}");
    assert_eq!(err.message(), "Expected \":\" but got \"S\"");
    assert_eq!((err.position().line(), err.position().col()), (1, 7));
}

#[test]
fn unclosed_body_at_end_of_input() {
    let err = parse_error("type User {\n  name: String\n");
    assert_eq!(err.message(), "Expected \"}\" but got end of input");
    assert_eq!(err.kind(), &SdlParseErrorKind::ExpectedToken {
        expected: "\"}\"".to_string(),
        found: None,
    });
}

#[test]
fn union_requires_members() {
    let err = parse_error("union U = ");
    assert_eq!(err.message(), "Expected NamedType but got end of input");

    let err = parse_error("union U = A |");
    assert_eq!(err.message(), "Expected NamedType but got end of input");
}

#[test]
fn implements_requires_a_name() {
    let err = parse_error("type T implements { a: Int }");
    assert_eq!(err.message(), "Expected name but got \"{\"");

    let err = parse_error("type T implements A & { a: Int }");
    assert_eq!(err.message(), "Expected name but got \"{\"");
}

#[test]
fn only_object_types_can_be_extended() {
    let err = parse_error("extend interface Node { id: ID }");
    assert_eq!(err.message(), "Expected ObjectTypeDefinition but got \"i\"");
    assert_eq!(err.notes().len(), 1);
}

#[test]
fn excerpt_shows_surrounding_lines_and_caret() {
    let err = parse_error("type User {\n  name String\n}\n");
    assert_eq!(
        err.excerpt(),
        concat!(
            "\n\n",
            "    type User {\n",
            "      name String\n",
            "           ^\n",
            "    }\n",
        ),
    );
    assert_eq!(
        err.to_string(),
        format!("Expected \":\" but got \"S\"{}", err.excerpt()),
    );
}

#[test]
fn excerpt_on_first_line_has_empty_line_before() {
    let err = parse_error("scalar");
    assert_eq!(err.message(), "Expected name but got end of input");
    assert_eq!(
        err.excerpt(),
        "\n\n    \n    scalar\n          ^\n    \n",
    );
}

#[test]
fn format_oneline_uses_one_based_positions() {
    let err = parse_error("type User {\n  name String\n}");
    assert_eq!(
        err.format_oneline(),
        "<input>:2:8: error: Expected \":\" but got \"S\"",
    );
    assert_eq!(
        err.format_oneline_with_file_name("schema.graphql"),
        "schema.graphql:2:8: error: Expected \":\" but got \"S\"",
    );
}

#[test]
fn format_detailed_includes_notes() {
    let err = parse_error("extend scalar Date");
    let detailed = err.format_detailed("schema.graphql");
    assert!(detailed.starts_with("schema.graphql:1:8: error: "));
    assert!(detailed.contains("    extend scalar Date\n"));
    assert!(detailed.ends_with("    = note: only object types can be extended\n"));
}
