use crate::ast;
use indexmap::IndexMap;
use serde_json::Map;
use serde_json::Value;

/// A literal as it appears in a *query* document, in the shape an execution
/// engine hands it over.
///
/// This is distinct from [`ast::Value`], which only describes literals
/// written in SDL default values. Numbers keep their source lexeme.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryLiteral {
    Int(String),
    Float(String),
    String(String),
    Boolean(bool),
    Null,
    Enum(String),
    List(Vec<QueryLiteral>),
    Object(IndexMap<String, QueryLiteral>),
    Variable(String),
}
impl QueryLiteral {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "IntValue",
            Self::Float(_) => "FloatValue",
            Self::String(_) => "StringValue",
            Self::Boolean(_) => "BooleanValue",
            Self::Null => "NullValue",
            Self::Enum(_) => "EnumValue",
            Self::List(_) => "ListValue",
            Self::Object(_) => "ObjectValue",
            Self::Variable(_) => "Variable",
        }
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum LiteralCoercionError {
    #[error("`{0}` is not a valid number")]
    InvalidNumber(String),

    #[error("{kind} is not supported")]
    UnexpectedNode { kind: &'static str },
}

/// Converts a query literal to its raw runtime value.
///
/// Numbers are parsed from their lexeme as JSON, enum literals become their
/// name, and lists and objects convert element-wise. Variables cannot be
/// converted without an execution context and are rejected.
pub fn coerce_query_literal(literal: &QueryLiteral) -> Result<Value, LiteralCoercionError> {
    Ok(match literal {
        QueryLiteral::Int(lexeme) | QueryLiteral::Float(lexeme) => {
            match serde_json::from_str::<Value>(lexeme) {
                Ok(number @ Value::Number(_)) => number,
                _ => return Err(LiteralCoercionError::InvalidNumber(lexeme.clone())),
            }
        },
        QueryLiteral::String(value) | QueryLiteral::Enum(value) => Value::String(value.clone()),
        QueryLiteral::Boolean(value) => Value::Bool(*value),
        QueryLiteral::Null => Value::Null,
        QueryLiteral::List(values) => Value::Array(
            values.iter().map(coerce_query_literal).collect::<Result<_, _>>()?,
        ),
        QueryLiteral::Object(fields) => Value::Object(
            fields.iter()
                .map(|(name, value)| Ok((name.clone(), coerce_query_literal(value)?)))
                .collect::<Result<Map<_, _>, LiteralCoercionError>>()?,
        ),
        QueryLiteral::Variable(_) => {
            return Err(LiteralCoercionError::UnexpectedNode {
                kind: literal.kind_name(),
            });
        },
    })
}

/// Converts an SDL default-value literal to its raw runtime value.
///
/// Numbers, strings and booleans pass through; enum literals become their
/// name; lists and objects convert element-wise.
pub fn literal_to_raw_value(literal: &ast::Value) -> Value {
    match literal {
        ast::Value::Number(number) => match number.value {
            ast::Number::Int(int) => Value::from(int),
            ast::Number::Float(float) => serde_json::Number::from_f64(float)
                .map(Value::Number)
                .unwrap_or_else(|| {
                    log::warn!("Default value `{float}` is not a finite number; using null.");
                    Value::Null
                }),
        },
        ast::Value::String(string) => Value::String(string.value.clone()),
        ast::Value::Boolean(boolean) => Value::Bool(boolean.value),
        ast::Value::Enum(enum_value) => Value::String(enum_value.name.value.clone()),
        ast::Value::List(list) => Value::Array(
            list.values.iter().map(literal_to_raw_value).collect(),
        ),
        ast::Value::Object(object) => Value::Object(
            object.fields.iter()
                .map(|field| (field.name.value.clone(), literal_to_raw_value(&field.value)))
                .collect(),
        ),
    }
}
