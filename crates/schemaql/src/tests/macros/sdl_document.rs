use crate::GenerateError;
use crate::ImplementationMap;
use crate::TypeRegistry;
use crate::macros::sdl_document;
use crate::resolver::FieldResolver;
use crate::resolver::ResolveParams;
use crate::types::GraphQLTypeKind;
use serde_json::json;

#[test]
pub fn basic_functionality() -> Result<(), GenerateError> {
    use crate as schemaql;
    let document = sdl_document!(r#"
        type Query {
          me: User
        }

        # Someone who can sign in.
        type User {
          firstName: String
          lastName: String
        }
    "#);

    let registry = TypeRegistry::build_from_document(&document, &ImplementationMap::new())?;

    let query_type = registry.root_operation_types().query.unwrap();
    assert_eq!(query_type.name(), "Query");

    let user_type = registry.lookup("User").unwrap();
    assert_eq!(user_type.kind(), GraphQLTypeKind::Object);
    assert_eq!(user_type.description(), Some("Someone who can sign in."));

    Ok(())
}

#[test]
pub fn document_matches_runtime_parse() {
    use crate as schemaql;
    let document = sdl_document!("enum Episode { NEWHOPE EMPIRE JEDI }");

    assert_eq!(
        document,
        crate::parser::parse("enum Episode { NEWHOPE EMPIRE JEDI }").unwrap(),
    );
}

/// Resolvers for calculated fields are supplied when the embedded document
/// is generated at runtime.
#[tokio::test]
pub async fn calculated_fields_bind_at_runtime() -> Result<(), Box<dyn std::error::Error>> {
    use crate as schemaql;
    let document = sdl_document!(r#"
        type Query { greeting(name: String = "world"): String }
    "#);

    let missing = TypeRegistry::build_from_document(&document, &ImplementationMap::new());
    assert!(matches!(missing, Err(GenerateError::MissingFieldImplementation { .. })));

    let impls = ImplementationMap::new().field(
        "Query",
        "greeting",
        FieldResolver::from_fn(|params| {
            let name = params.args.get("name").and_then(|name| name.as_str()).unwrap_or("?");
            Ok(json!(format!("hello {name}")))
        }),
    );
    let registry = TypeRegistry::build_from_document(&document, &impls)?;
    let greeting = registry.object_type("Query").unwrap().field("greeting").unwrap();
    let default_name = greeting.arguments().unwrap().get("name").unwrap().default_value().cloned();

    let mut args = serde_json::Map::new();
    args.insert("name".to_string(), default_name.unwrap());
    let value = greeting.resolver().unwrap()
        .invoke(ResolveParams::new(serde_json::Value::Null).with_args(args))
        .await?;
    assert_eq!(value, json!("hello world"));

    Ok(())
}
