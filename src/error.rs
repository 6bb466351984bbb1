use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// JSON-RPC error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpcErrorCode {
    ParseError,
    InvalidRequest,
    MethodNotFound,
    InvalidParams,
    InternalError,
    /// Application-defined code, unconstrained by the specification.
    Application(i64),
}

impl RpcErrorCode {
    pub fn code(&self) -> i64 {
        match self {
            RpcErrorCode::ParseError => -32700,
            RpcErrorCode::InvalidRequest => -32600,
            RpcErrorCode::MethodNotFound => -32601,
            RpcErrorCode::InvalidParams => -32602,
            RpcErrorCode::InternalError => -32603,
            RpcErrorCode::Application(code) => *code,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            RpcErrorCode::ParseError => "Parse Error",
            RpcErrorCode::InvalidRequest => "Invalid Request",
            RpcErrorCode::MethodNotFound => "Method not found",
            RpcErrorCode::InvalidParams => "Invalid Params",
            RpcErrorCode::InternalError => "Internal Error",
            RpcErrorCode::Application(_) => "Application error",
        }
    }
}

impl fmt::Display for RpcErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}

/// JSON-RPC Error object: an immutable code/message/optional-data triple.
///
/// `data` is omitted from the wire entirely when unset, never emitted as
/// `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

impl RpcError {
    pub fn new(code: RpcErrorCode) -> Self {
        Self {
            code: code.code(),
            message: code.message().to_string(),
            data: None,
        }
    }

    pub fn with_message(code: RpcErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code(),
            message: message.into(),
            data: None,
        }
    }

    /// An error with an application-defined code, outside the reserved set.
    pub fn application(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    pub fn parse_error() -> Self {
        Self::new(RpcErrorCode::ParseError)
    }

    pub fn invalid_request() -> Self {
        Self::new(RpcErrorCode::InvalidRequest)
    }

    pub fn method_not_found() -> Self {
        Self::new(RpcErrorCode::MethodNotFound)
    }

    pub fn invalid_params() -> Self {
        Self::new(RpcErrorCode::InvalidParams)
    }

    pub fn internal_error() -> Self {
        Self::new(RpcErrorCode::InternalError)
    }
}

impl From<RpcErrorCode> for RpcError {
    fn from(code: RpcErrorCode) -> Self {
        Self::new(code)
    }
}

impl fmt::Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JSON-RPC Error {}: {}", self.code, self.message)
    }
}

impl std::error::Error for RpcError {}

/// Configuration-time failures from the method registry (not protocol
/// errors, never sent over the wire).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("the rpc namespace is reserved for system extensions: {0}")]
    ReservedNamespace(String),

    #[error("method name must not be empty")]
    EmptyName,
}
