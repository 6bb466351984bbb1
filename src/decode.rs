//! Decoding of generic JSON values into [`Request`]s.
//!
//! All decode-time structural violations surface uniformly as Parse Error
//! (-32700); callers at the pipeline boundary convert the error into a
//! response rather than letting it escape.

use serde_json::Value;
use tracing::debug;

use crate::argument::{Argument, ArgumentList};
use crate::error::RpcError;
use crate::request::Request;
use crate::JSONRPC_VERSION;

/// Decode a request from a generic JSON value.
///
/// The value must be a JSON object with `jsonrpc` equal to `"2.0"` and a
/// string `method`. A missing `id` models a notification and is accepted;
/// a present `id` must be a string. `params` may be an array (positional
/// arguments, in order) or an object (named arguments, in key order);
/// when absent the argument list is empty.
pub fn decode_request(value: &Value) -> Result<Request, RpcError> {
    let obj = value.as_object().ok_or_else(RpcError::parse_error)?;

    match obj.get("jsonrpc").and_then(Value::as_str) {
        Some(version) if version == JSONRPC_VERSION => {}
        other => {
            debug!(version = ?other, "rejecting request with wrong protocol version");
            return Err(RpcError::parse_error());
        }
    }

    let id = match obj.get("id") {
        None => None,
        Some(Value::String(id)) => Some(id.clone()),
        Some(_) => return Err(RpcError::parse_error()),
    };

    let method = obj
        .get("method")
        .and_then(Value::as_str)
        .ok_or_else(RpcError::parse_error)?
        .to_string();

    let arguments = match obj.get("params") {
        None => ArgumentList::empty(),
        Some(Value::Array(items)) => {
            ArgumentList::new(items.iter().cloned().map(Argument::positional).collect())
        }
        Some(Value::Object(map)) => ArgumentList::new(
            map.iter()
                .map(|(name, value)| Argument::named(name.clone(), value.clone()))
                .collect(),
        ),
        // Any other params shape is tolerated as "no arguments".
        Some(other) => {
            debug!(params = ?other, "ignoring params of unsupported shape");
            ArgumentList::empty()
        }
    };

    Ok(Request::new(id, method, arguments))
}

/// Decode a request from JSON text, mapping syntax errors to Parse Error.
pub fn decode_request_str(json: &str) -> Result<Request, RpcError> {
    let value: Value = serde_json::from_str(json).map_err(|_| RpcError::parse_error())?;
    decode_request(&value)
}
