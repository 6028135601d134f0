use crate::GenerateError;
use crate::ImplementationMap;
use crate::TypeRegistry;
use crate::execution::ExecutableSchema;
use crate::execution::ExecutionEngine;
use crate::execution::ExecutionErrorDescriptor;
use crate::execution::ExecutionRequest;
use crate::execution::ExecutionResult;
use crate::resolver::ResolveParams;
use crate::tests::star_wars;
use futures::FutureExt;
use futures::future::BoxFuture;
use serde_json::json;
use std::sync::Arc;

/// Resolves the single top-level field named by the query text.
struct SingleFieldEngine;
impl ExecutionEngine for SingleFieldEngine {
    fn execute(
        &self,
        registry: Arc<TypeRegistry>,
        request: ExecutionRequest,
    ) -> BoxFuture<'static, ExecutionResult> {
        async move {
            let field_name = request.query.trim();
            let resolver = registry.root_operation_types().query
                .and_then(|query| query.field(field_name))
                .and_then(|field| field.resolver())
                .cloned();
            let Some(resolver) = resolver else {
                return ExecutionResult::from_errors(vec![
                    ExecutionErrorDescriptor::new(format!("cannot query `{field_name}`")),
                ]);
            };

            let params = ResolveParams::new(request.root_value).with_args(request.variables);
            match resolver.invoke(params).await {
                Ok(value) => {
                    let mut data = serde_json::Map::new();
                    data.insert(field_name.to_string(), value);
                    ExecutionResult::from_data(data)
                },
                Err(err) => ExecutionResult::from_errors(vec![
                    ExecutionErrorDescriptor::new(err.to_string())
                        .with_path(vec![json!(field_name)]),
                ]),
            }
        }.boxed()
    }
}

#[tokio::test]
async fn executable_schema_delegates_to_engine() -> Result<(), GenerateError> {
    let schema = ExecutableSchema::build_from_str(
        star_wars::SCHEMA,
        &star_wars::implementations(),
        SingleFieldEngine,
    )?;

    let mut variables = serde_json::Map::new();
    variables.insert("id".to_string(), json!("2001"));
    let result = schema.query(ExecutionRequest::new("droid").with_variables(variables)).await;
    assert!(result.is_ok());
    assert_eq!(result.data.unwrap()["droid"]["name"], json!("R2-D2"));

    let result = schema.query(ExecutionRequest::new("human")).await;
    assert!(!result.is_ok());
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({"errors": [{"message": "Query.human: `id` is required", "path": ["human"]}]}),
    );

    Ok(())
}

#[test]
fn executable_schema_requires_query_root() {
    let registry = TypeRegistry::build_from_str("type Mutation { a: Int }", &ImplementationMap::new())
        .unwrap();

    let err = ExecutableSchema::new(registry, SingleFieldEngine).unwrap_err();
    assert_eq!(err, GenerateError::NoQueryOperationTypeDefined);
}

#[test]
fn request_serde_shape() {
    let request: ExecutionRequest = serde_json::from_value(json!({
        "query": "{ hero { name } }",
        "operationName": "Hero",
    })).unwrap();

    assert_eq!(request, ExecutionRequest::new("{ hero { name } }").with_operation_name("Hero"));
    assert_eq!(
        serde_json::to_value(ExecutionRequest::new("{ a }")).unwrap(),
        json!({"query": "{ a }", "rootValue": null, "variables": {}}),
    );
}
