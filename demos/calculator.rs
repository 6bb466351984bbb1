//! Simple Calculator JSON-RPC Example
//!
//! Registers `add` and `subtract` handlers and runs a few requests through
//! the engine end to end, including a batch and a notification.

use jsonrpc_engine::{Engine, Request, RpcError};
use serde_json::json;

fn number(request: &Request, index: usize, name: &str) -> Result<f64, RpcError> {
    request
        .argument(index, name)
        .map_err(|_| RpcError::invalid_params())?
        .and_then(|arg| arg.as_f64())
        .ok_or_else(RpcError::invalid_params)
}

fn main() {
    let mut engine = Engine::new();

    engine
        .register("add", |request: &Request| {
            let a = number(request, 0, "a")?;
            let b = number(request, 1, "b")?;
            Ok(json!(a + b))
        })
        .expect("register add");

    engine
        .register("subtract", |request: &Request| {
            let a = number(request, 0, "minuend")?;
            let b = number(request, 1, "subtrahend")?;
            Ok(json!(a - b))
        })
        .expect("register subtract");

    let requests = [
        r#"{"jsonrpc": "2.0", "method": "add", "params": {"a": 5, "b": 3}, "id": "1"}"#,
        r#"{"jsonrpc": "2.0", "method": "subtract", "params": [42, 23], "id": "2"}"#,
        r#"{"jsonrpc": "2.0", "method": "multiply", "params": [2, 3], "id": "3"}"#,
        r#"{"jsonrpc": "2.0", "method": "add", "params": {"a": 1, "b": 1}}"#,
        r#"[{"jsonrpc": "2.0", "method": "add", "params": [1, 2], "id": "4"},
            {"jsonrpc": "2.0", "method": "subtract", "params": [10, 4], "id": "5"}]"#,
    ];

    for request in requests {
        println!("--> {request}");
        match engine.execute_str(request) {
            Some(response) => println!("<-- {response}"),
            None => println!("<-- (no response: notification)"),
        }
    }
}
