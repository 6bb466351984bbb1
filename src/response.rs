use serde_json::Value;

use crate::error::RpcError;

/// Either the handler's result value or a structured error. The enum keeps
/// "exactly one of result/error" structural rather than a runtime rule.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Result(Value),
    Error(RpcError),
}

/// A JSON-RPC response, tagged by the originating request id.
///
/// Built once per dispatch and discarded after encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub id: Option<String>,
    pub body: ResponseBody,
}

impl Response {
    pub fn success(id: Option<String>, result: Value) -> Self {
        Self {
            id,
            body: ResponseBody::Result(result),
        }
    }

    pub fn failure(id: Option<String>, error: RpcError) -> Self {
        Self {
            id,
            body: ResponseBody::Error(error),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn result(&self) -> Option<&Value> {
        match &self.body {
            ResponseBody::Result(value) => Some(value),
            ResponseBody::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&RpcError> {
        match &self.body {
            ResponseBody::Result(_) => None,
            ResponseBody::Error(error) => Some(error),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.body, ResponseBody::Error(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_response() {
        let response = Response::success(Some("1".to_string()), json!(19));
        assert_eq!(response.id(), Some("1"));
        assert_eq!(response.result(), Some(&json!(19)));
        assert_eq!(response.error(), None);
        assert!(!response.is_error());
    }

    #[test]
    fn test_error_response() {
        let response = Response::failure(None, RpcError::invalid_request());
        assert_eq!(response.id(), None);
        assert_eq!(response.result(), None);
        assert_eq!(response.error().map(|e| e.code), Some(-32600));
        assert!(response.is_error());
    }
}
