pub use schemaql_core::*;

/// Helpful macros for doing things with SDL at Rust compile-time (e.g.
/// parse and check an SDL [`Document`](crate::ast::Document) while your
/// crate compiles).
#[cfg(feature = "macros")]
pub mod macros {
    pub use schemaql_macros::*;
}

#[cfg(test)]
mod tests;
