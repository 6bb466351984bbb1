//! # JSON-RPC 2.0 Protocol Engine
//!
//! A pure, transport-agnostic JSON-RPC 2.0 protocol engine: it decodes
//! wire-format requests, validates them against the specification,
//! dispatches them to application-supplied method handlers, and encodes
//! correctly-shaped responses, including batch and notification semantics.
//! It is meant to be embedded by any server (HTTP, socket, stdio) that
//! wants JSON-RPC semantics without owning the protocol logic itself.
//!
//! ## Features
//! - Full JSON-RPC 2.0 request/response/batch/notification handling
//! - Transport agnostic: consumes and produces `serde_json::Value`
//! - Explicit `Result`-based error propagation, no panics
//! - Dual positional/named argument lookup
//! - Optional async dispatcher with the `async` feature (on by default)
//!
//! ```
//! use jsonrpc_engine::{Engine, Request, RpcError};
//! use serde_json::json;
//!
//! let mut engine = Engine::new();
//! engine
//!     .register("subtract", |request: &Request| {
//!         let a = request.argument(0, "minuend").ok().flatten()
//!             .and_then(|a| a.as_i64())
//!             .ok_or_else(RpcError::invalid_params)?;
//!         let b = request.argument(1, "subtrahend").ok().flatten()
//!             .and_then(|a| a.as_i64())
//!             .ok_or_else(RpcError::invalid_params)?;
//!         Ok(json!(a - b))
//!     })
//!     .unwrap();
//!
//! let input = json!({"jsonrpc": "2.0", "method": "subtract", "params": [42, 23], "id": "1"});
//! let output = engine.execute(&input).unwrap();
//! assert_eq!(output["result"], json!(19));
//! ```

pub mod argument;
pub mod decode;
pub mod dispatch;
pub mod encode;
pub mod error;
pub mod prelude;
pub mod request;
pub mod response;

#[cfg(feature = "async")]
pub mod r#async;

// Re-export main types
pub use argument::{Argument, ArgumentError, ArgumentList};
pub use decode::{decode_request, decode_request_str};
pub use dispatch::{Engine, Handler, RESERVED_PREFIX};
pub use encode::{encode_error, encode_response};
pub use error::{RegistryError, RpcError, RpcErrorCode};
pub use request::Request;
pub use response::{Response, ResponseBody};

#[cfg(feature = "async")]
pub use r#async::{AsyncEngine, AsyncHandler};

/// JSON-RPC 2.0 version constant
pub const JSONRPC_VERSION: &str = "2.0";

/// Standard JSON-RPC 2.0 error codes
pub mod error_codes {
    pub const PARSE_ERROR: i64 = -32700;
    pub const INVALID_REQUEST: i64 = -32600;
    pub const METHOD_NOT_FOUND: i64 = -32601;
    pub const INVALID_PARAMS: i64 = -32602;
    pub const INTERNAL_ERROR: i64 = -32603;
}
