use crate::ImplementationMap;
use crate::resolver::FieldResolver;
use crate::resolver::ResolverError;
use crate::resolver::TypeResolver;
use serde_json::Value;
use serde_json::json;

pub(super) const SCHEMA: &str = include_str!("fixtures/star_wars.graphql");

fn characters() -> Value {
    json!({
        "1000": {"kind": "Human", "id": "1000", "name": "Luke Skywalker", "homePlanet": "Tatooine"},
        "1001": {"kind": "Human", "id": "1001", "name": "Darth Vader", "homePlanet": "Tatooine"},
        "2001": {"kind": "Droid", "id": "2001", "name": "R2-D2", "primaryFunction": "Astromech"},
    })
}

fn character_by_id(id: &str) -> Value {
    characters().get(id).cloned().unwrap_or(Value::Null)
}

pub(super) fn implementations() -> ImplementationMap {
    let kind_field = || TypeResolver::by_name(|value| {
        value["kind"].as_str().unwrap_or_default().to_string()
    });

    ImplementationMap::new()
        .field("Query", "hero", FieldResolver::from_fn(|params| {
            Ok(match params.args.get("episode").and_then(Value::as_i64) {
                Some(5) => character_by_id("1000"),
                _ => character_by_id("2001"),
            })
        }))
        .field("Query", "human", FieldResolver::from_fn(|params| {
            let id = params.args.get("id")
                .and_then(Value::as_str)
                .ok_or_else(|| ResolverError::new("`id` is required"))?;
            Ok(character_by_id(id))
        }))
        .field("Query", "droid", FieldResolver::new(|params: crate::resolver::ResolveParams| async move {
            let id = params.args.get("id").and_then(Value::as_str).unwrap_or_default();
            Ok(character_by_id(id))
        }))
        .field("Query", "search", FieldResolver::from_fn(|params| {
            let text = params.args.get("text").and_then(Value::as_str).unwrap_or_default();
            let matches = characters()
                .as_object()
                .map(|all| {
                    all.values()
                        .filter(|c| c["name"].as_str().is_some_and(|name| name.contains(text)))
                        .cloned()
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default();
            Ok(Value::Array(matches))
        }))
        .resolve_type("Character", kind_field())
        .resolve_type("SearchResult", kind_field())
        .enum_value("Episode", "NEWHOPE", json!(4))
        .enum_value("Episode", "EMPIRE", json!(5))
        .enum_value("Episode", "JEDI", json!(6))
}
