use crate::argument::{Argument, ArgumentError, ArgumentList};

/// A decoded JSON-RPC request: one unit of work.
///
/// A request without an `id` is a notification and never produces a
/// response.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub id: Option<String>,
    pub method: String,
    pub arguments: ArgumentList,
}

impl Request {
    pub fn new(id: Option<String>, method: impl Into<String>, arguments: ArgumentList) -> Self {
        Self {
            id,
            method: method.into(),
            arguments,
        }
    }

    /// A request with no id.
    pub fn notification(method: impl Into<String>, arguments: ArgumentList) -> Self {
        Self::new(None, method, arguments)
    }

    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }

    /// Shorthand for `arguments.get(index, name)`.
    pub fn argument(&self, index: usize, name: &str) -> Result<Option<&Argument>, ArgumentError> {
        self.arguments.get(index, name)
    }
}
