//! Method registry and the decode → dispatch → encode pipeline.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::decode::decode_request;
use crate::encode::encode_response;
use crate::error::{RegistryError, RpcError};
use crate::request::Request;
use crate::response::Response;

/// Method-name prefix reserved for system-level extensions; rejected at
/// registration time.
pub const RESERVED_PREFIX: &str = "rpc.";

/// Application-supplied method logic: consumes a request, produces a JSON
/// result value or fails with a structured error.
pub trait Handler: Send + Sync {
    fn call(&self, request: &Request) -> Result<Value, RpcError>;
}

impl<F> Handler for F
where
    F: Fn(&Request) -> Result<Value, RpcError> + Send + Sync,
{
    fn call(&self, request: &Request) -> Result<Value, RpcError> {
        self(request)
    }
}

pub(crate) fn check_method_name(method: &str) -> Result<(), RegistryError> {
    if method.is_empty() {
        return Err(RegistryError::EmptyName);
    }
    if method.starts_with(RESERVED_PREFIX) {
        return Err(RegistryError::ReservedNamespace(method.to_string()));
    }
    Ok(())
}

/// The protocol engine: owns the method registry and runs the pipeline.
///
/// Registration takes `&mut self` and dispatch takes `&self`, so the
/// registry is populated during single-threaded setup and read-only once
/// the engine is shared. A finished engine is `Send + Sync`.
#[derive(Default)]
pub struct Engine {
    handlers: HashMap<String, Arc<dyn Handler>>,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for a method name.
    ///
    /// Names under the `rpc.` namespace are refused here, at configuration
    /// time, never at dispatch time. Registering the same name twice
    /// replaces the previous handler.
    pub fn register<H>(&mut self, method: impl Into<String>, handler: H) -> Result<(), RegistryError>
    where
        H: Handler + 'static,
    {
        let method = method.into();
        check_method_name(&method)?;
        self.handlers.insert(method, Arc::new(handler));
        Ok(())
    }

    pub fn registered_methods(&self) -> Vec<String> {
        self.handlers.keys().cloned().collect()
    }

    /// Dispatch a single decoded request: a pure function of
    /// (registry, request) → response.
    pub fn execute_request(&self, request: &Request) -> Response {
        let Some(handler) = self.handlers.get(&request.method) else {
            warn!(method = %request.method, "method not found");
            return Response::failure(request.id.clone(), RpcError::method_not_found());
        };

        debug!(method = %request.method, id = ?request.id, "dispatching request");

        match handler.call(request) {
            Ok(result) => Response::success(request.id.clone(), result),
            Err(error) => {
                warn!(method = %request.method, code = error.code, "handler returned error");
                Response::failure(request.id.clone(), error)
            }
        }
    }

    /// Run the full pipeline on a top-level JSON value, which may be a
    /// single request object or a batch array.
    ///
    /// Returns `None` when there is nothing to send back: a notification,
    /// or a batch whose every element was a notification.
    pub fn execute(&self, value: &Value) -> Option<Value> {
        if let Value::Array(elements) = value {
            return self.execute_batch(elements);
        }

        let response = match decode_request(value) {
            Ok(request) => self.execute_request(&request),
            Err(error) => Response::failure(None, error),
        };

        // Only responses with a known id are emitted; decode failures
        // never recover one and notifications never carry one.
        if response.id().is_some() {
            Some(encode_response(&response))
        } else {
            None
        }
    }

    /// Run the pipeline on raw JSON text, mapping syntax errors to a
    /// Parse Error response.
    pub fn execute_str(&self, json: &str) -> Option<Value> {
        match serde_json::from_str::<Value>(json) {
            Ok(value) => self.execute(&value),
            Err(err) => {
                warn!(error = %err, "request body is not valid JSON");
                Some(encode_response(&Response::failure(
                    None,
                    RpcError::parse_error(),
                )))
            }
        }
    }

    fn execute_batch(&self, elements: &[Value]) -> Option<Value> {
        // An empty batch is itself invalid and answered with a single
        // non-array error object.
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
                    let response = self.execute_request(&request);
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argument::ArgumentList;
    use serde_json::json;

    fn subtract_engine() -> Engine {
        let mut engine = Engine::new();
        engine
            .register("subtract", |request: &Request| {
                let minuend = request
                    .argument(0, "minuend")
                    .ok()
                    .flatten()
                    .and_then(|a| a.as_i64())
                    .ok_or_else(RpcError::invalid_params)?;
                let subtrahend = request
                    .argument(1, "subtrahend")
                    .ok()
                    .flatten()
                    .and_then(|a| a.as_i64())
                    .ok_or_else(RpcError::invalid_params)?;
                Ok(json!(minuend - subtrahend))
            })
            .unwrap();
        engine
    }

    #[test]
    fn test_register_rejects_reserved_namespace() {
        let mut engine = Engine::new();
        let err = engine
            .register("rpc.discover", |_: &Request| Ok(json!(null)))
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::ReservedNamespace("rpc.discover".to_string())
        );
        assert!(engine.registered_methods().is_empty());
    }

    #[test]
    fn test_register_rejects_empty_name() {
        let mut engine = Engine::new();
        let err = engine.register("", |_: &Request| Ok(json!(null))).unwrap_err();
        assert_eq!(err, RegistryError::EmptyName);
    }

    #[test]
    fn test_unknown_method_yields_method_not_found() {
        let engine = Engine::new();
        let request = Request::new(Some("1".to_string()), "missing", ArgumentList::empty());
        let response = engine.execute_request(&request);

        assert_eq!(response.id(), Some("1"));
        assert_eq!(response.error().map(|e| e.code), Some(-32601));
    }

    #[test]
    fn test_handler_error_forwarded_verbatim() {
        let mut engine = Engine::new();
        engine
            .register("boom", |_: &Request| {
                Err(RpcError::application(-12, "domain failure").with_data("context"))
            })
            .unwrap();

        let request = Request::new(Some("7".to_string()), "boom", ArgumentList::empty());
        let error = engine.execute_request(&request).error().cloned().unwrap();

        assert_eq!(error.code, -12);
        assert_eq!(error.message, "domain failure");
        assert_eq!(error.data.as_deref(), Some("context"));
    }

    #[test]
    fn test_execute_single_request() {
        let engine = subtract_engine();
        let input = json!({"jsonrpc": "2.0", "method": "subtract", "params": [42, 23], "id": "1"});

        assert_eq!(
            engine.execute(&input),
            Some(json!({"jsonrpc": "2.0", "id": "1", "result": 19}))
        );
    }

    #[test]
    fn test_execute_named_params() {
        let engine = subtract_engine();
        let input = json!({
            "jsonrpc": "2.0",
            "method": "subtract",
            "params": {"subtrahend": 23, "minuend": 42},
            "id": "3"
        });

        assert_eq!(
            engine.execute(&input),
            Some(json!({"jsonrpc": "2.0", "id": "3", "result": 19}))
        );
    }

    #[test]
    fn test_notification_emits_nothing() {
        let engine = subtract_engine();
        let input = json!({"jsonrpc": "2.0", "method": "subtract", "params": [42, 23]});
        assert_eq!(engine.execute(&input), None);
    }

    #[test]
    fn test_notification_to_unknown_method_emits_nothing() {
        let engine = Engine::new();
        let input = json!({"jsonrpc": "2.0", "method": "nothing"});
        assert_eq!(engine.execute(&input), None);
    }

    #[test]
    fn test_empty_batch_yields_single_error_object() {
        let engine = Engine::new();
        let output = engine.execute(&json!([])).unwrap();

        assert!(output.is_object());
        assert_eq!(output["error"]["code"], json!(-32600));
        assert_eq!(output["id"], json!(null));
    }

    #[test]
    fn test_batch_isolates_per_element_failures() {
        let engine = subtract_engine();
        let input = json!([
            {"jsonrpc": "2.0", "method": "subtract", "params": [42, 23], "id": "a"},
            "not an object",
            {"jsonrpc": "2.0", "method": "subtract", "params": [5, 3], "id": "b"}
        ]);

        let output = engine.execute(&input).unwrap();
        let responses = output.as_array().unwrap();

        assert_eq!(responses.len(), 3);
        assert_eq!(responses[0]["result"], json!(19));
        assert_eq!(responses[1]["error"]["code"], json!(-32600));
        assert_eq!(responses[2]["result"], json!(2));
    }

    #[test]
    fn test_batch_omits_notification_responses() {
        let engine = subtract_engine();
        let input = json!([
            {"jsonrpc": "2.0", "method": "subtract", "params": [42, 23]},
            {"jsonrpc": "2.0", "method": "subtract", "params": [42, 23], "id": "keep"}
        ]);

        let output = engine.execute(&input).unwrap();
        let responses = output.as_array().unwrap();

        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0]["id"], json!("keep"));
    }

    #[test]
    fn test_all_notification_batch_emits_nothing() {
        let engine = subtract_engine();
        let input = json!([
            {"jsonrpc": "2.0", "method": "subtract", "params": [1, 1]},
            {"jsonrpc": "2.0", "method": "subtract", "params": [2, 2]}
        ]);

        assert_eq!(engine.execute(&input), None);
    }

    #[test]
    fn test_batch_decode_failure_gets_null_id_error() {
        let engine = subtract_engine();
        let input = json!([
            {"jsonrpc": "1.0", "method": "subtract", "id": "x"}
        ]);

        let output = engine.execute(&input).unwrap();
        let responses = output.as_array().unwrap();

        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0]["id"], json!(null));
        assert_eq!(responses[0]["error"]["code"], json!(-32700));
    }

    #[test]
    fn test_execute_str_maps_syntax_error_to_parse_error() {
        let engine = Engine::new();
        let output = engine.execute_str("{\"jsonrpc\":").unwrap();

        assert_eq!(output["error"]["code"], json!(-32700));
        assert_eq!(output["id"], json!(null));
    }

    #[test]
    fn test_execute_str_round_trip() {
        let engine = subtract_engine();
        let output = engine
            .execute_str(r#"{"jsonrpc": "2.0", "method": "subtract", "params": [42, 23], "id": "1"}"#)
            .unwrap();

        assert_eq!(output["result"], json!(19));
    }
}
