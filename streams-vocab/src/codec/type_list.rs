use serde_json::Value;
use streams_types::{Error, Result};

use super::JsonMap;

/// The JSON key holding type tokens.
pub const TYPE_KEY: &str = "type";

/// The `type` tokens of an object, in document order.
///
/// The list may hold tokens from other vocabularies next to the canonical
/// name, including non-string tokens, which are kept verbatim and only
/// ever matched as strings. Encoding appends the canonical name when it is
/// missing; the stored list is left as the caller built it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeList(Vec<Value>);

impl TypeList {
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Number of tokens, string or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.iter().any(|t| t == name)
    }

    /// Returns the raw token at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    pub fn push(&mut self, name: impl Into<String>) {
        self.0.push(Value::String(name.into()));
    }

    pub fn prepend(&mut self, name: impl Into<String>) {
        self.0.insert(0, Value::String(name.into()));
    }

    /// Adds a token of any shape at the end.
    pub fn push_token(&mut self, token: Value) {
        self.0.push(token);
    }

    /// Removes every occurrence of `name`. Returns true if any was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|t| t.as_str() != Some(name));
        before != self.0.len()
    }

    /// The string tokens, in order. Non-string tokens are skipped.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().filter_map(Value::as_str)
    }

    /// Every token as it appeared on the wire.
    #[must_use]
    pub fn tokens(&self) -> &[Value] {
        &self.0
    }

    /// The string tokens, owned.
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.iter().map(str::to_owned).collect()
    }

    /// Fails unless `name` is among the string tokens.
    pub fn require(&self, name: &'static str) -> Result<()> {
        if self.contains(name) {
            Ok(())
        } else {
            Err(Error::UnexpectedType {
                expected: name,
                found: self.to_vec(),
            })
        }
    }

    /// Reads the tokens of `value` without consuming them. An array gives
    /// one token per element; any other value is a single token.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Array(items) => Self(items.clone()),
            single => Self(vec![single.clone()]),
        }
    }

    /// Peeks at the tokens of `map`. Non-string tokens are skipped.
    pub fn names_in(map: &JsonMap) -> impl Iterator<Item = &str> {
        let (single, many) = match map.get(TYPE_KEY) {
            Some(Value::String(s)) => (Some(s.as_str()), None),
            Some(Value::Array(items)) => (None, Some(items.iter().filter_map(Value::as_str))),
            _ => (None, None),
        };
        single.into_iter().chain(many.into_iter().flatten())
    }

    /// Removes and decodes the `type` key.
    pub fn decode_from(map: &mut JsonMap) -> Result<Self> {
        map.remove(TYPE_KEY)
            .map(|value| Self::from_value(&value))
            .ok_or(Error::MissingType)
    }

    /// Writes the `type` key, adding `canonical` when absent.
    pub fn encode_into(&self, canonical: &str, map: &mut JsonMap) {
        let mut tokens = self.0.clone();
        if !self.contains(canonical) {
            tokens.push(Value::String(canonical.to_owned()));
        }
        let value = match tokens.len() {
            1 if !tokens[0].is_array() => tokens.remove(0),
            _ => Value::Array(tokens),
        };
        map.insert(TYPE_KEY.to_owned(), value);
    }
}

impl<S: Into<String>> FromIterator<S> for TypeList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(|s| Value::String(s.into())).collect())
    }
}
