use crate::ast;

/// Decodes a [`Document`](ast::Document) embedded by the `sdl_document!`
/// macro.
pub fn document_from_macro_serialized(serialized_document: &[u8]) -> ast::Document {
    bincode::serde::decode_from_slice::<ast::Document, _>(
        serialized_document,
        bincode::config::standard(),
    ).expect("Failed to deserialize precompiled Document").0
}

/// Used by the macro at compile time. Lives here so that encoding and
/// decoding always agree on the bincode configuration.
pub fn serialize_document(
    document: &ast::Document,
) -> Result<Vec<u8>, bincode::error::EncodeError> {
    bincode::serde::encode_to_vec(document, bincode::config::standard())
}
