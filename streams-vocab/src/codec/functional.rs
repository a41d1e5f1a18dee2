use serde_json::Value;
use streams_types::Result;

use super::{JsonMap, Property, PropertyValue};

/// A property that holds at most one value.
#[derive(Debug, Clone, PartialEq)]
pub struct Functional<T>(Option<T>);

impl<T> Default for Functional<T> {
    fn default() -> Self {
        Self(None)
    }
}

impl<T> Functional<T> {
    /// Creates an empty property.
    #[must_use]
    pub fn new() -> Self {
        Self(None)
    }

    /// Returns the value, if set.
    #[must_use]
    pub fn get(&self) -> Option<&T> {
        self.0.as_ref()
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.0.as_mut()
    }

    /// Replaces the value, returning the previous one.
    pub fn set(&mut self, value: impl Into<T>) -> Option<T> {
        self.0.replace(value.into())
    }

    /// Removes the value.
    pub fn clear(&mut self) {
        self.0 = None;
    }

    pub fn take(&mut self) -> Option<T> {
        self.0.take()
    }

    #[must_use]
    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    #[must_use]
    pub fn into_inner(self) -> Option<T> {
        self.0
    }
}

impl<T: PropertyValue> Functional<T> {
    /// Returns true if the value matched none of the declared alternatives.
    #[must_use]
    pub fn has_unknown(&self) -> bool {
        self.0.as_ref().is_some_and(|v| v.as_unknown().is_some())
    }

    /// Returns the raw value kept for an unrecognized shape.
    #[must_use]
    pub fn unknown(&self) -> Option<&Value> {
        self.0.as_ref().and_then(PropertyValue::as_unknown)
    }

    /// Stores a raw value as the unknown alternative.
    pub fn set_unknown(&mut self, value: Value) {
        self.0 = Some(T::unknown(value));
    }
}

impl<T> From<Option<T>> for Functional<T> {
    fn from(value: Option<T>) -> Self {
        Self(value)
    }
}

impl<T: PropertyValue> Property for Functional<T> {
    fn decode_from(key: &str, map: &mut JsonMap) -> Result<Self> {
        match map.remove(key) {
            Some(value) => T::decode(&value)
                .map(|v| Self(Some(v)))
                .map_err(|e| e.in_property(key)),
            None => Ok(Self(None)),
        }
    }

    fn encode_into(&self, key: &str, map: &mut JsonMap) -> Result<()> {
        if let Some(value) = &self.0 {
            let encoded = value.encode().map_err(|e| e.in_property(key))?;
            map.insert(key.to_owned(), encoded);
        }
        Ok(())
    }
}
