//! Async mirror of the dispatch pipeline, behind the `async` feature.
//!
//! Semantics are identical to [`crate::dispatch::Engine`]; the only
//! difference is that handlers are awaited, so hosts with async method
//! bodies avoid blocking a runtime thread. Batch elements are still
//! processed sequentially and output order follows input order.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::BoxFuture;
use serde_json::Value;
use tracing::{debug, warn};

use crate::decode::decode_request;
use crate::dispatch::check_method_name;
use crate::encode::encode_response;
use crate::error::{RegistryError, RpcError};
use crate::request::Request;
use crate::response::Response;

/// Async counterpart of [`crate::dispatch::Handler`].
#[async_trait]
pub trait AsyncHandler: Send + Sync {
    async fn call(&self, request: &Request) -> Result<Value, RpcError>;
}

#[async_trait]
impl<F> AsyncHandler for F
where
    F: for<'a> Fn(&'a Request) -> BoxFuture<'a, Result<Value, RpcError>> + Send + Sync,
{
    async fn call(&self, request: &Request) -> Result<Value, RpcError> {
        self(request).await
    }
}

/// Async counterpart of [`crate::dispatch::Engine`].
#[derive(Default)]
pub struct AsyncEngine {
    handlers: HashMap<String, Arc<dyn AsyncHandler>>,
}

impl AsyncEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for a method name; `rpc.`-prefixed names are
    /// refused at configuration time.
    pub fn register<H>(&mut self, method: impl Into<String>, handler: H) -> Result<(), RegistryError>
    where
        H: AsyncHandler + 'static,
    {
        let method = method.into();
        check_method_name(&method)?;
        self.handlers.insert(method, Arc::new(handler));
        Ok(())
    }

    pub fn registered_methods(&self) -> Vec<String> {
        self.handlers.keys().cloned().collect()
    }

    pub async fn execute_request(&self, request: &Request) -> Response {
        let Some(handler) = self.handlers.get(&request.method) else {
            warn!(method = %request.method, "method not found");
            return Response::failure(request.id.clone(), RpcError::method_not_found());
        };

        debug!(method = %request.method, id = ?request.id, "dispatching request");

        match handler.call(request).await {
            Ok(result) => Response::success(request.id.clone(), result),
            Err(error) => {
                warn!(method = %request.method, code = error.code, "handler returned error");
                Response::failure(request.id.clone(), error)
            }
        }
    }

    /// Run the full pipeline on a top-level JSON value; `None` means there
    /// is nothing to send back.
    pub async fn execute(&self, value: &Value) -> Option<Value> {
        if let Value::Array(elements) = value {
            return self.execute_batch(elements).await;
        }

        let response = match decode_request(value) {
            Ok(request) => self.execute_request(&request).await,
            Err(error) => Response::failure(None, error),
        };

        if response.id().is_some() {
            Some(encode_response(&response))
        } else {
            None
        }
    }

    /// Run the pipeline on raw JSON text, mapping syntax errors to a
    /// Parse Error response.
    pub async fn execute_str(&self, json: &str) -> Option<Value> {
        match serde_json::from_str::<Value>(json) {
            Ok(value) => self.execute(&value).await,
            Err(err) => {
                warn!(error = %err, "request body is not valid JSON");
                Some(encode_response(&Response::failure(
                    None,
                    RpcError::parse_error(),
                )))
            }
        }
    }

    async fn execute_batch(&self, elements: &[Value]) -> Option<Value> {
        if elements.is_empty() {
            return Some(encode_response(&Response::failure(
                None,
                RpcError::invalid_request(),
            )));
        }

        let mut responses = Vec::new();

        for element in elements {
            if !element.is_object() {
                responses.push(encode_response(&Response::failure(
                    None,
                    RpcError::invalid_request(),
                )));
                continue;
            }

            match decode_request(element) {
                Ok(request) => {
                    let response = self.execute_request(&request).await;
                    if !request.is_notification() {
                        responses.push(encode_response(&response));
                    }
                }
                Err(error) => {
                    responses.push(encode_response(&Response::failure(None, error)));
                }
            }
        }

        if responses.is_empty() {
            None
        } else {
            Some(Value::Array(responses))
        }
    }
}
