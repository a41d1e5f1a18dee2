use serde_json::Value;
use streams_types::{LangMap, Result};

use super::{JsonMap, Property};

/// A property with a natural-language sibling key.
///
/// `name` and `nameMap` are read and written independently: the plain
/// values live in `values`, the language map in `map`. A map that is set
/// but empty is still written as `{}`.
#[derive(Debug, Clone, PartialEq)]
pub struct NaturalLanguage<P> {
    pub values: P,
    pub map: Option<LangMap>,
}

impl<P: Default> Default for NaturalLanguage<P> {
    fn default() -> Self {
        Self {
            values: P::default(),
            map: None,
        }
    }
}

impl<P> NaturalLanguage<P> {
    /// Returns the language map, if set.
    #[must_use]
    pub fn map(&self) -> Option<&LangMap> {
        self.map.as_ref()
    }

    /// Returns the text for one language tag.
    #[must_use]
    pub fn get_lang(&self, tag: &str) -> Option<&str> {
        self.map.as_ref().and_then(|m| m.get(tag))
    }

    /// Sets the text for one language tag, creating the map if needed.
    pub fn set_map(&mut self, tag: impl Into<String>, text: impl Into<String>) {
        self.map.get_or_insert_with(LangMap::new).insert(tag, text);
    }

    pub fn clear_map(&mut self) {
        self.map = None;
    }
}

fn map_key(key: &str) -> String {
    format!("{key}Map")
}

impl<P: Property> Property for NaturalLanguage<P> {
    fn decode_from(key: &str, map: &mut JsonMap) -> Result<Self> {
        let values = P::decode_from(key, map)?;
        let sibling = map_key(key);
        let lang = match map.get(&sibling) {
            Some(Value::Object(obj)) => LangMap::from_json(obj),
            _ => None,
        };
        if lang.is_some() {
            map.remove(&sibling);
        } else if map.contains_key(&sibling) {
            tracing::trace!(property = %sibling, "language map is not an object of strings; keeping it raw");
        }
        Ok(Self { values, map: lang })
    }

    fn encode_into(&self, key: &str, map: &mut JsonMap) -> Result<()> {
        self.values.encode_into(key, map)?;
        if let Some(lang) = &self.map {
            map.insert(map_key(key), Value::Object(lang.to_json()));
        }
        Ok(())
    }
}
