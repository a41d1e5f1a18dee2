//! Natural-language values.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

/// An `rdf:langString` map: BCP-47 language tag to localized text.
///
/// Serialized as a plain JSON object, e.g. `{"en": "Hello", "fr": "Bonjour"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LangMap(BTreeMap<String, String>);

impl LangMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a JSON object whose values are all strings.
    #[must_use]
    pub fn from_json(map: &Map<String, Value>) -> Option<Self> {
        map.iter()
            .map(|(tag, text)| text.as_str().map(|t| (tag.clone(), t.to_owned())))
            .collect::<Option<BTreeMap<_, _>>>()
            .map(Self)
    }

    /// Converts to a JSON object.
    #[must_use]
    pub fn to_json(&self) -> Map<String, Value> {
        self.0
            .iter()
            .map(|(tag, text)| (tag.clone(), Value::String(text.clone())))
            .collect()
    }

    /// Returns the text for a language tag.
    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&str> {
        self.0.get(tag).map(String::as_str)
    }

    /// Sets the text for a language tag, returning the previous text.
    pub fn insert(&mut self, tag: impl Into<String>, text: impl Into<String>) -> Option<String> {
        self.0.insert(tag.into(), text.into())
    }

    /// Removes the text for a language tag.
    pub fn remove(&mut self, tag: &str) -> Option<String> {
        self.0.remove(tag)
    }

    /// Returns true if a tag is present.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains_key(tag)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates entries in tag order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LangMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// A BCP-47 language tag such as `en` or `pt-BR`.
///
/// The tag is not validated against the registry; any string is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageTag(String);

impl LanguageTag {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LanguageTag {
    fn from(tag: &str) -> Self {
        Self(tag.to_owned())
    }
}
