use crate::resolver::LiteralCoercionError;
use crate::resolver::QueryLiteral;
use crate::resolver::coerce_query_literal;
use serde_json::Value;
use std::sync::Arc;

type CoerceFn = dyn Fn(&Value) -> Result<Value, ScalarCoercionError> + Send + Sync;
type ParseLiteralFn = dyn Fn(&QueryLiteral) -> Result<Value, ScalarCoercionError> + Send + Sync;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ScalarCoercionError {
    #[error("{0}")]
    Invalid(String),

    #[error(transparent)]
    Literal(#[from] LiteralCoercionError),
}
impl ScalarCoercionError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}

/// The caller-supplied behavior of a custom scalar.
///
/// Any part left unset behaves as the identity. When `parse_literal` is
/// unset, literals are converted with [`coerce_query_literal`] and then
/// handed to `parse_value`.
#[derive(Clone, Default)]
pub struct ScalarImplementation {
    parse_literal: Option<Arc<ParseLiteralFn>>,
    parse_value: Option<Arc<CoerceFn>>,
    serialize: Option<Arc<CoerceFn>>,
}
impl ScalarImplementation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_serialize<F>(mut self, serialize: F) -> Self
    where
        F: Fn(&Value) -> Result<Value, ScalarCoercionError> + Send + Sync + 'static,
    {
        self.serialize = Some(Arc::new(serialize));
        self
    }

    pub fn with_parse_value<F>(mut self, parse_value: F) -> Self
    where
        F: Fn(&Value) -> Result<Value, ScalarCoercionError> + Send + Sync + 'static,
    {
        self.parse_value = Some(Arc::new(parse_value));
        self
    }

    pub fn with_parse_literal<F>(mut self, parse_literal: F) -> Self
    where
        F: Fn(&QueryLiteral) -> Result<Value, ScalarCoercionError> + Send + Sync + 'static,
    {
        self.parse_literal = Some(Arc::new(parse_literal));
        self
    }

    /// Converts an internal value to its output representation.
    pub fn serialize(&self, value: &Value) -> Result<Value, ScalarCoercionError> {
        match &self.serialize {
            Some(serialize) => serialize(value),
            None => Ok(value.clone()),
        }
    }

    /// Converts an input value (e.g. from variables) to its internal
    /// representation.
    pub fn parse_value(&self, value: &Value) -> Result<Value, ScalarCoercionError> {
        match &self.parse_value {
            Some(parse_value) => parse_value(value),
            None => Ok(value.clone()),
        }
    }

    /// Converts a literal written in a query to its internal representation.
    pub fn parse_literal(&self, literal: &QueryLiteral) -> Result<Value, ScalarCoercionError> {
        match &self.parse_literal {
            Some(parse_literal) => parse_literal(literal),
            None => self.parse_value(&coerce_query_literal(literal)?),
        }
    }
}
impl std::fmt::Debug for ScalarImplementation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScalarImplementation")
            .field("parse_literal", &self.parse_literal.is_some())
            .field("parse_value", &self.parse_value.is_some())
            .field("serialize", &self.serialize.is_some())
            .finish()
    }
}
