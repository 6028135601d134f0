//! Compiles SDL documents into a linked [`TypeRegistry`] of type
//! descriptors, binding caller-supplied resolvers along the way.
//!
//! ```
//! use schemaql_core::ImplementationMap;
//! use schemaql_core::TypeRegistry;
//! use schemaql_core::resolver::FieldResolver;
//! use serde_json::json;
//!
//! let impls = ImplementationMap::new().field(
//!     "Query",
//!     "greeting",
//!     FieldResolver::from_fn(|params| {
//!         let name = params.args.get("name").cloned().unwrap_or(json!("world"));
//!         Ok(json!(format!("hello {}", name.as_str().unwrap_or_default())))
//!     }),
//! );
//! let registry = TypeRegistry::build_from_str(
//!     "type Query { greeting(name: String): String }",
//!     &impls,
//! ).unwrap();
//!
//! assert!(registry.root_operation_types().query.is_some());
//! ```

pub mod execution;
pub mod generator;
pub mod resolver;
mod type_registry;
pub mod types;

#[doc(hidden)]
pub mod _macro_runtime;

pub use generator::GenerateError;
pub use generator::Generator;
pub use resolver::ImplementationMap;
pub use schemaql_parser as parser;
pub use schemaql_parser::SdlParseError;
pub use schemaql_parser::ast;
pub use type_registry::RootOperationTypes;
pub use type_registry::TypeRegistry;

#[cfg(test)]
mod tests;
