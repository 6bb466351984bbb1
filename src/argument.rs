use serde_json::{Map, Value};
use thiserror::Error;

/// A single request parameter, positional or named.
///
/// Unnamed arguments are positional; the position is implicit in the
/// argument's index within its [`ArgumentList`].
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    name: Option<String>,
    value: Value,
}

impl Argument {
    /// A positional argument, addressed by its index in the list.
    pub fn positional(value: Value) -> Self {
        Self { name: None, value }
    }

    /// A named argument, addressed by its parameter name.
    pub fn named(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: Some(name.into()),
            value,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_named(&self) -> bool {
        self.name.is_some()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.value.as_i64()
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.value.as_f64()
    }

    pub fn as_str(&self) -> Option<&str> {
        self.value.as_str()
    }

    pub fn as_bool(&self) -> Option<bool> {
        self.value.as_bool()
    }

    pub fn as_object(&self) -> Option<&Map<String, Value>> {
        self.value.as_object()
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        self.value.as_array()
    }
}

/// Lookup contract violations for [`ArgumentList::get`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("invalid argument index {index} (list holds {len})")]
    InvalidIndex { index: usize, len: usize },
}

/// Ordered list of request arguments with dual index/name lookup.
///
/// A list is built entirely positional (from a params array) or entirely
/// named (from a params object); insertion order is source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArgumentList {
    arguments: Vec<Argument>,
}

impl ArgumentList {
    pub fn new(arguments: Vec<Argument>) -> Self {
        Self { arguments }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Argument> {
        self.arguments.iter()
    }

    /// Look up an argument by index or name.
    ///
    /// Callers pass the index the parameter would have if positional plus
    /// the name it would have if named; either addressing mode resolves the
    /// same logical parameter. The argument at `index` is tested first
    /// (cheaper than scanning): it wins if it is unnamed or its name
    /// matches. Otherwise the list is scanned for the first argument named
    /// `name`.
    ///
    /// An out-of-range index is a caller bug and fails; no match at all is
    /// ordinary absence and returns `Ok(None)`.
    pub fn get(&self, index: usize, name: &str) -> Result<Option<&Argument>, ArgumentError> {
        let candidate = self.arguments.get(index).ok_or(ArgumentError::InvalidIndex {
            index,
            len: self.arguments.len(),
        })?;

        match candidate.name() {
            None => return Ok(Some(candidate)),
            Some(n) if n == name => return Ok(Some(candidate)),
            Some(_) => {}
        }

        Ok(self.arguments.iter().find(|arg| arg.name() == Some(name)))
    }
}

impl From<Vec<Argument>> for ArgumentList {
    fn from(arguments: Vec<Argument>) -> Self {
        Self::new(arguments)
    }
}

impl<'a> IntoIterator for &'a ArgumentList {
    type Item = &'a Argument;
    type IntoIter = std::slice::Iter<'a, Argument>;

    fn into_iter(self) -> Self::IntoIter {
        self.arguments.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn positional_list() -> ArgumentList {
        ArgumentList::new(vec![
            Argument::positional(json!(42)),
            Argument::positional(json!(23)),
        ])
    }

    fn named_list() -> ArgumentList {
        ArgumentList::new(vec![
            Argument::named("minuend", json!(42)),
            Argument::named("subtrahend", json!(23)),
        ])
    }

    #[test]
    fn test_positional_lookup_ignores_name() {
        let list = positional_list();
        let arg = list.get(1, "whatever").unwrap().unwrap();
        assert_eq!(arg.as_i64(), Some(23));
    }

    #[test]
    fn test_named_lookup_by_name_independent_of_index() {
        let list = named_list();
        // Index 0 holds "minuend", so the name wins via the scan.
        let arg = list.get(0, "subtrahend").unwrap().unwrap();
        assert_eq!(arg.as_i64(), Some(23));
    }

    #[test]
    fn test_named_lookup_index_match_short_circuits() {
        let list = named_list();
        let arg = list.get(1, "subtrahend").unwrap().unwrap();
        assert_eq!(arg.as_i64(), Some(23));
    }

    #[test]
    fn test_out_of_range_index_fails() {
        let list = positional_list();
        assert_eq!(
            list.get(5, "minuend"),
            Err(ArgumentError::InvalidIndex { index: 5, len: 2 })
        );
    }

    #[test]
    fn test_missing_name_is_absence_not_error() {
        let list = named_list();
        assert_eq!(list.get(0, "divisor"), Ok(None));
    }

    #[test]
    fn test_typed_accessors() {
        let arg = Argument::named("flag", json!(true));
        assert_eq!(arg.as_bool(), Some(true));
        assert_eq!(arg.as_i64(), None);
        assert_eq!(arg.name(), Some("flag"));
        assert!(arg.is_named());

        let arg = Argument::positional(json!("hello"));
        assert_eq!(arg.as_str(), Some("hello"));
        assert!(!arg.is_named());
    }
}
