//! Convenient re-exports of the most commonly used types.
//!
//! ```rust
//! use jsonrpc_engine::prelude::*;
//! ```

pub use crate::argument::{Argument, ArgumentError, ArgumentList};
pub use crate::decode::{decode_request, decode_request_str};
pub use crate::dispatch::{Engine, Handler, RESERVED_PREFIX};
pub use crate::encode::{encode_error, encode_response};
pub use crate::error::{RegistryError, RpcError, RpcErrorCode};
pub use crate::request::Request;
pub use crate::response::{Response, ResponseBody};

#[cfg(feature = "async")]
pub use crate::r#async::{AsyncEngine, AsyncHandler};

// Standard error codes
pub use crate::error_codes::*;
