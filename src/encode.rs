//! Serialization of responses and errors back into the generic JSON value
//! tree for transport.

use serde_json::{Map, Value};

use crate::error::RpcError;
use crate::response::{Response, ResponseBody};
use crate::JSONRPC_VERSION;

/// Serialize a bare error object: `code`, `message`, and `data` only when
/// present.
pub fn encode_error(error: &RpcError) -> Value {
    let mut obj = Map::new();
    obj.insert("code".to_string(), Value::from(error.code));
    obj.insert("message".to_string(), Value::String(error.message.clone()));

    if let Some(data) = &error.data {
        obj.insert("data".to_string(), Value::String(data.clone()));
    }

    Value::Object(obj)
}

/// Serialize a response: `jsonrpc`, `id` (JSON null when absent), and
/// exactly one of `result` or `error`.
pub fn encode_response(response: &Response) -> Value {
    let mut obj = Map::new();
    obj.insert(
        "jsonrpc".to_string(),
        Value::String(JSONRPC_VERSION.to_string()),
    );
    obj.insert(
        "id".to_string(),
        match &response.id {
            Some(id) => Value::String(id.clone()),
            None => Value::Null,
        },
    );

    match &response.body {
        ResponseBody::Error(error) => {
            obj.insert("error".to_string(), encode_error(error));
        }
        ResponseBody::Result(result) => {
            obj.insert("result".to_string(), result.clone());
        }
    }

    Value::Object(obj)
}
