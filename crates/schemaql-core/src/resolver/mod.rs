//! Caller-supplied behavior (resolvers, scalar coercion, enum values) and
//! the bound forms the generator attaches to type descriptors.

mod field_resolver;
mod implementation_map;
mod literal_coercion;
mod scalar_implementation;
mod type_resolver;

pub use field_resolver::BoundFieldResolver;
pub use field_resolver::FieldResolver;
pub use field_resolver::ResolveInfo;
pub use field_resolver::ResolveParams;
pub use field_resolver::ResolverError;
pub use field_resolver::ResolverFuture;
pub use implementation_map::ImplementationMap;
pub use implementation_map::TypeImplementation;
pub use literal_coercion::LiteralCoercionError;
pub use literal_coercion::QueryLiteral;
pub use literal_coercion::coerce_query_literal;
pub use literal_coercion::literal_to_raw_value;
pub use scalar_implementation::ScalarCoercionError;
pub use scalar_implementation::ScalarImplementation;
pub use type_resolver::BoundTypeResolver;
pub use type_resolver::ResolvedType;
pub use type_resolver::TypeResolutionError;
pub use type_resolver::TypeResolver;

#[cfg(test)]
mod tests;
