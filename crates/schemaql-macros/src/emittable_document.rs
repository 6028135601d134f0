use quote::quote;
use schemaql_core::ast::Document;

pub(crate) struct EmittableDocument(Document);
impl EmittableDocument {
    pub fn new(document: Document) -> Self {
        Self(document)
    }
}
impl std::convert::From<EmittableDocument> for proc_macro2::TokenStream {
    fn from(val: EmittableDocument) -> Self {
        let document_bytes = match schemaql_core::_macro_runtime::serialize_document(&val.0) {
            Ok(bytes) => bytes,
            Err(err) => {
                let error_msg = format!("Failed to serialize SDL document: {err}");
                return quote! {
                    compile_error!(#error_msg)
                };
            },
        };

        // Decoded again at runtime.
        quote! {
            {
                static SERIALIZED_DOCUMENT: &[u8] = &[#(#document_bytes),*];
                schemaql::_macro_runtime::document_from_macro_serialized(SERIALIZED_DOCUMENT)
            }
        }
    }
}
