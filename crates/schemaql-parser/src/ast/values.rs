use crate::ast::Name;

/// A literal value, as used for default values of arguments and input
/// fields.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Value {
    Boolean(BooleanValue),
    Enum(EnumValue),
    List(ListValue),
    Number(NumberValue),
    Object(ObjectValue),
    String(StringValue),
}

/// The JSON-compatible interpretation of a numeric literal.
///
/// Literals without a fractional part or exponent that fit in an `i64` are
/// `Int`; everything else is `Float`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Number {
    Int(i64),
    Float(f64),
}
impl Number {
    /// Interprets a lexeme already matched by the number pattern.
    pub(crate) fn from_lexeme(lexeme: &str) -> Option<Self> {
        let is_integral = !lexeme.contains(['.', 'e', 'E']);
        if is_integral && let Ok(int) = lexeme.parse::<i64>() {
            return Some(Self::Int(int));
        }
        lexeme.parse::<f64>().ok().map(Self::Float)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NumberValue {
    pub value: Number,
}

/// A double-quoted string literal, with `\\` and `\"` escapes resolved.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct StringValue {
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct BooleanValue {
    pub value: bool,
}

/// A bare identifier used as a value (e.g. `= NEWHOPE`).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumValue {
    pub name: Name,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ListValue {
    pub values: Vec<Value>,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectValue {
    pub fields: Vec<ObjectField>,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectField {
    pub name: Name,
    pub value: Value,
}
