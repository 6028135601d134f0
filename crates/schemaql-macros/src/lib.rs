mod emittable_document;


use emittable_document::EmittableDocument;
use quote::quote;
use syn::LitStr;
use syn::parse_macro_input;

/// Evaluates to an [`ast::Document`](schemaql::ast::Document) given a literal
/// Rust `str` containing SDL.
///
/// The document is parsed and its types are generated while your crate
/// compiles, so syntax errors and type errors (such as references to
/// unknown types) are reported as compile errors. Only the parsed document
/// is embedded; resolvers are bound at runtime by handing it
/// to [`TypeRegistry::build_from_document()`](schemaql::TypeRegistry::build_from_document()).
///
/// Calculated fields are not checked for implementations at compile time.
///
/// ```rust
/// use schemaql::ImplementationMap;
/// use schemaql::TypeRegistry;
/// use schemaql::macros::sdl_document;
///
/// let document = sdl_document!(r#"
///     ## The currently-authenticated user.
///     type User {
///         firstName: String
///         lastName: String
///     }
///
///     type Query { me: User }
/// "#);
///
/// let registry = TypeRegistry::build_from_document(
///     &document,
///     &ImplementationMap::new(),
/// ).unwrap();
/// let user_type = registry.object_type("User").unwrap();
///
/// assert_eq!(user_type.description(), Some("The currently-authenticated user."));
/// assert!(user_type.field("firstName").is_some());
/// ```
#[proc_macro]
pub fn sdl_document(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let sdl = parse_macro_input!(input as LitStr).value();
    expand_sdl_document(sdl.as_str()).into()
}

fn expand_sdl_document(sdl: &str) -> proc_macro2::TokenStream {
    let document = match schemaql_parser::parse(sdl) {
        Ok(document) => document,
        Err(err) => {
            let error_msg = format!("Failed to parse SDL document: {}", err.format_detailed("<sdl_document!>"));
            return quote! {
                compile_error!(#error_msg)
            };
        },
    };

    let implementations =
        schemaql_core::ImplementationMap::new().with_placeholder_resolvers(&document);
    if let Err(err) = schemaql_core::TypeRegistry::build_from_document(&document, &implementations) {
        let error_msg = format!("Failed to generate types from SDL document: {err}");
        return quote! {
            compile_error!(#error_msg)
        };
    }

    EmittableDocument::new(document).into()
}
