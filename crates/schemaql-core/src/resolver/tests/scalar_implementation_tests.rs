use crate::ImplementationMap;
use crate::TypeRegistry;
use crate::resolver::QueryLiteral;
use crate::resolver::ScalarCoercionError;
use crate::resolver::ScalarImplementation;
use serde_json::json;

type Result<T> = std::result::Result<T, ScalarCoercionError>;

#[test]
fn unimplemented_parts_are_identity() -> Result<()> {
    let scalar = ScalarImplementation::new();

    assert_eq!(scalar.serialize(&json!("x"))?, json!("x"));
    assert_eq!(scalar.parse_value(&json!(3))?, json!(3));
    assert_eq!(scalar.parse_literal(&QueryLiteral::Int("42".to_string()))?, json!(42));

    Ok(())
}

/// Without a literal parser, literals are coerced and handed to
/// `parse_value`.
#[test]
fn parse_literal_falls_back_to_parse_value() -> Result<()> {
    let scalar = ScalarImplementation::new().with_parse_value(|value| {
        value.as_str()
            .map(|s| json!(s.to_uppercase()))
            .ok_or_else(|| ScalarCoercionError::invalid("expected a string"))
    });

    assert_eq!(
        scalar.parse_literal(&QueryLiteral::String("abc".to_string()))?,
        json!("ABC"),
    );
    assert_eq!(
        scalar.parse_literal(&QueryLiteral::Boolean(true)).unwrap_err(),
        ScalarCoercionError::invalid("expected a string"),
    );

    Ok(())
}

#[test]
fn explicit_parse_literal_wins() -> Result<()> {
    let scalar = ScalarImplementation::new()
        .with_parse_value(|_| Ok(json!("from value")))
        .with_parse_literal(|_| Ok(json!("from literal")));

    assert_eq!(scalar.parse_literal(&QueryLiteral::Null)?, json!("from literal"));

    Ok(())
}

#[test]
fn variables_cannot_be_parsed_as_literals() {
    let scalar = ScalarImplementation::new();

    let err = scalar.parse_literal(&QueryLiteral::Variable("id".to_string())).unwrap_err();
    assert_eq!(err.to_string(), "Variable is not supported");
}

#[test]
fn generated_scalar_carries_its_implementation() -> Result<()> {
    let impls = ImplementationMap::new().scalar(
        "Cents",
        ScalarImplementation::new().with_serialize(|value| {
            let cents = value.as_i64().ok_or_else(|| ScalarCoercionError::invalid("not an int"))?;
            Ok(json!(cents as f64 / 100.0))
        }),
    );
    let registry = TypeRegistry::build_from_str(
        "# Money, in cents.\nscalar Cents\nscalar Opaque",
        &impls,
    ).unwrap();

    let cents = registry.scalar_type("Cents").unwrap();
    assert_eq!(cents.description(), Some("Money, in cents."));
    assert_eq!(cents.implementation().serialize(&json!(250))?, json!(2.5));

    let opaque = registry.scalar_type("Opaque").unwrap();
    assert_eq!(opaque.implementation().serialize(&json!({"a": 1}))?, json!({"a": 1}));

    Ok(())
}
