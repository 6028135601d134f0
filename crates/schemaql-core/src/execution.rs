//! The seam between a compiled [`TypeRegistry`] and whatever executes
//! queries against it.
//!
//! This crate does not execute queries itself. Callers plug in an
//! [`ExecutionEngine`] and pair it with a registry via [`ExecutableSchema`].

use crate::GenerateError;
use crate::ImplementationMap;
use crate::TypeRegistry;
use futures::future::BoxFuture;
use serde_json::Map;
use serde_json::Value;
use std::sync::Arc;

/// Executes query documents against a [`TypeRegistry`].
///
/// Engines drive the bound resolvers found on the registry's object type
/// fields and must not assume anything about the thread they are polled on.
pub trait ExecutionEngine: Send + Sync {
    fn execute(
        &self,
        registry: Arc<TypeRegistry>,
        request: ExecutionRequest,
    ) -> BoxFuture<'static, ExecutionResult>;
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionRequest {
    pub query: String,

    #[serde(default)]
    pub root_value: Value,

    #[serde(default)]
    pub variables: Map<String, Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
}
impl ExecutionRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn with_root_value(mut self, root_value: Value) -> Self {
        self.root_value = root_value;
        self
    }

    pub fn with_variables(mut self, variables: Map<String, Value>) -> Self {
        self.variables = variables;
        self
    }

    pub fn with_operation_name(mut self, operation_name: impl Into<String>) -> Self {
        self.operation_name = Some(operation_name.into());
        self
    }
}

/// The response of one execution. Fields that are `None` are left out when
/// serialized.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ExecutionResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Map<String, Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ExecutionErrorDescriptor>>,
}
impl ExecutionResult {
    pub fn from_data(data: Map<String, Value>) -> Self {
        Self {
            data: Some(data),
            errors: None,
        }
    }

    pub fn from_errors(errors: Vec<ExecutionErrorDescriptor>) -> Self {
        Self {
            data: None,
            errors: Some(errors),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.errors.as_ref().is_none_or(|errors| errors.is_empty())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ExecutionErrorDescriptor {
    pub message: String,

    /// Response path of the field that failed, made of field names and list
    /// indices.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<Value>,
}
impl ExecutionErrorDescriptor {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: vec![],
        }
    }

    pub fn with_path(mut self, path: Vec<Value>) -> Self {
        self.path = path;
        self
    }
}

/// A [`TypeRegistry`] that has a `Query` root, paired with the engine that
/// executes against it.
#[derive(Clone)]
pub struct ExecutableSchema {
    engine: Arc<dyn ExecutionEngine>,
    registry: Arc<TypeRegistry>,
}
impl ExecutableSchema {
    pub fn new(
        registry: TypeRegistry,
        engine: impl ExecutionEngine + 'static,
    ) -> Result<Self, GenerateError> {
        if registry.root_operation_types().query.is_none() {
            return Err(GenerateError::NoQueryOperationTypeDefined);
        }
        Ok(Self {
            engine: Arc::new(engine),
            registry: Arc::new(registry),
        })
    }

    /// Parses and generates `sdl`, then pairs the result with `engine`.
    pub fn build_from_str(
        sdl: &str,
        implementations: &ImplementationMap,
        engine: impl ExecutionEngine + 'static,
    ) -> Result<Self, GenerateError> {
        Self::new(TypeRegistry::build_from_str(sdl, implementations)?, engine)
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    pub fn query(&self, request: ExecutionRequest) -> BoxFuture<'static, ExecutionResult> {
        log::debug!(
            "Executing {} ({} byte query).",
            request.operation_name.as_deref().unwrap_or("anonymous operation"),
            request.query.len(),
        );
        self.engine.execute(Arc::clone(&self.registry), request)
    }
}
impl std::fmt::Debug for ExecutableSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExecutableSchema")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
