use crate::GenerateError;
use crate::ImplementationMap;
use crate::generator::tests::test_utils;
use serde_json::json;

type Result<T> = std::result::Result<T, GenerateError>;

#[test]
fn values_default_to_their_names() -> Result<()> {
    let registry = test_utils::generate("enum Episode { NEWHOPE EMPIRE JEDI }")?;

    let episode = registry.enum_type("Episode").unwrap();
    let values = episode.values()
        .values()
        .map(|value| (value.name(), value.value().clone()))
        .collect::<Vec<_>>();
    assert_eq!(values, vec![
        ("NEWHOPE", json!("NEWHOPE")),
        ("EMPIRE", json!("EMPIRE")),
        ("JEDI", json!("JEDI")),
    ]);

    Ok(())
}

#[test]
fn values_come_from_the_implementation() -> Result<()> {
    let impls = ImplementationMap::new()
        .enum_value("Episode", "NEWHOPE", json!(4))
        .enum_value("Episode", "EMPIRE", json!(5));
    let registry = test_utils::generate_with("enum Episode { NEWHOPE EMPIRE }", &impls)?;

    let episode = registry.enum_type("Episode").unwrap();
    assert_eq!(episode.value("NEWHOPE").unwrap().value(), &json!(4));
    assert_eq!(episode.value("EMPIRE").unwrap().value(), &json!(5));

    Ok(())
}

#[test]
fn partial_implementation_is_rejected() {
    let impls = ImplementationMap::new().enum_value("Episode", "NEWHOPE", json!(4));
    let err = test_utils::generate_with("enum Episode { NEWHOPE EMPIRE }", &impls).unwrap_err();

    assert_eq!(err, GenerateError::IncompleteEnumImplementation {
        enum_name: "Episode".to_string(),
        value_name: "EMPIRE".to_string(),
    });
}

#[test]
fn value_descriptions() -> Result<()> {
    let registry = test_utils::generate("
        # Film trilogy.
        enum Episode {
          # Released in 1977.
          NEWHOPE
          EMPIRE
          # trailing
        }
    ")?;

    let episode = registry.enum_type("Episode").unwrap();
    assert_eq!(episode.description(), Some("Film trilogy."));
    assert_eq!(episode.value("NEWHOPE").unwrap().description(), Some("Released in 1977."));
    assert_eq!(episode.value("EMPIRE").unwrap().description(), None);

    Ok(())
}

#[test]
fn duplicate_value_is_rejected() {
    let err = test_utils::generate_err("enum Color { RED RED }");

    assert_eq!(err, GenerateError::DuplicateEnumValue {
        enum_name: "Color".to_string(),
        value_name: "RED".to_string(),
    });
}
