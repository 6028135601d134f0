use crate::_macro_runtime;

#[test]
fn serialized_document_is_restored() {
    let document = schemaql_parser::parse("
        # Documented.
        type Query { hero(episode: Episode = JEDI): String }
        enum Episode { JEDI }
    ").unwrap();

    let bytes = _macro_runtime::serialize_document(&document).unwrap();
    assert_eq!(_macro_runtime::document_from_macro_serialized(&bytes), document);
}
