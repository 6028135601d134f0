use futures::FutureExt;
use futures::future::BoxFuture;
use serde_json::Map;
use serde_json::Value;
use std::any::Any;
use std::future::Future;
use std::sync::Arc;

/// The one future type every field resolver produces.
pub type ResolverFuture = BoxFuture<'static, Result<Value, ResolverError>>;

type ResolverFn = dyn Fn(ResolveParams) -> ResolverFuture + Send + Sync;

/// Everything a field resolver is called with.
#[derive(Clone)]
pub struct ResolveParams {
    /// The value of the parent object.
    pub source: Value,

    /// Argument values, keyed by argument name.
    pub args: Map<String, Value>,

    /// Caller-defined per-request context, passed through untouched.
    pub context: Arc<dyn Any + Send + Sync>,

    pub info: ResolveInfo,
}
impl ResolveParams {
    pub fn new(source: Value) -> Self {
        Self {
            source,
            args: Map::new(),
            context: Arc::new(()),
            info: ResolveInfo::default(),
        }
    }

    pub fn with_args(mut self, args: Map<String, Value>) -> Self {
        self.args = args;
        self
    }

    pub fn with_context(mut self, context: Arc<dyn Any + Send + Sync>) -> Self {
        self.context = context;
        self
    }

    /// Borrows the context as a `T`, if that is what it holds.
    pub fn context<T: Any>(&self) -> Option<&T> {
        self.context.downcast_ref::<T>()
    }
}
impl std::fmt::Debug for ResolveParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolveParams")
            .field("source", &self.source)
            .field("args", &self.args)
            .field("info", &self.info)
            .finish_non_exhaustive()
    }
}

/// Identifies the field being resolved.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ResolveInfo {
    pub parent_type_name: String,
    pub field_name: String,
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ResolverError {
    #[error("{0}")]
    Message(String),

    #[error("{type_name}.{field_name}: {source}")]
    Field {
        type_name: String,
        field_name: String,
        #[source]
        source: Box<ResolverError>,
    },
}
impl ResolverError {
    pub fn new(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }
}
impl std::convert::From<String> for ResolverError {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}
impl std::convert::From<&str> for ResolverError {
    fn from(message: &str) -> Self {
        Self::Message(message.to_string())
    }
}

/// A caller-supplied field resolver.
///
/// Synchronous and asynchronous bodies are normalized into the same
/// future-returning shape when the resolver is constructed, so callers never
/// need to care which kind they were given.
#[derive(Clone)]
pub struct FieldResolver(Arc<ResolverFn>);
impl FieldResolver {
    /// Wraps an asynchronous resolver body.
    pub fn new<F, Fut>(resolve: F) -> Self
    where
        F: Fn(ResolveParams) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value, ResolverError>> + Send + 'static,
    {
        Self(Arc::new(move |params: ResolveParams| resolve(params).boxed()))
    }

    /// Wraps a synchronous resolver body. Its result is delivered through an
    /// already-completed future.
    pub fn from_fn<F>(resolve: F) -> Self
    where
        F: Fn(ResolveParams) -> Result<Value, ResolverError> + Send + Sync + 'static,
    {
        Self(Arc::new(move |params: ResolveParams| futures::future::ready(resolve(params)).boxed()))
    }

    /// A resolver that always yields `value`.
    pub fn constant(value: Value) -> Self {
        Self::from_fn(move |_| Ok(value.clone()))
    }

    pub fn call(&self, params: ResolveParams) -> ResolverFuture {
        (self.0)(params)
    }
}
impl std::fmt::Debug for FieldResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FieldResolver(..)")
    }
}

/// A [`FieldResolver`] attached to a specific `Type.field`.
#[derive(Clone, Debug)]
pub struct BoundFieldResolver {
    field_name: String,
    resolver: FieldResolver,
    type_name: String,
}
impl BoundFieldResolver {
    pub(crate) fn new(
        type_name: impl Into<String>,
        field_name: impl Into<String>,
        resolver: FieldResolver,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            resolver,
            type_name: type_name.into(),
        }
    }

    pub fn field_name(&self) -> &str {
        self.field_name.as_str()
    }

    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }

    /// Invokes the resolver.
    ///
    /// `params.info` is filled in with the bound type and field names; every
    /// other part of `params` reaches the resolver unchanged. Failures are
    /// tagged with `Type.field`.
    pub fn invoke(&self, mut params: ResolveParams) -> ResolverFuture {
        params.info = ResolveInfo {
            parent_type_name: self.type_name.clone(),
            field_name: self.field_name.clone(),
        };
        let type_name = self.type_name.clone();
        let field_name = self.field_name.clone();
        self.resolver
            .call(params)
            .map(move |result| {
                result.map_err(|err| ResolverError::Field {
                    type_name,
                    field_name,
                    source: Box::new(err),
                })
            })
            .boxed()
    }
}
