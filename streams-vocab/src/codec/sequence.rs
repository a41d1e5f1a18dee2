use serde_json::Value;
use streams_types::Result;

use super::{JsonMap, Property, PropertyValue};

/// A property that holds an ordered list of values.
///
/// Order is significant and duplicates are allowed. On the wire a single
/// element is written as a bare value and several as an array; both forms
/// decode back to the same list. An empty list writes no key at all, and a
/// single element that is itself an array keeps its enclosing array.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence<T>(Vec<T>);

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> Sequence<T> {
    /// Creates an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the element at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.0.get_mut(index)
    }

    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.0.first()
    }

    /// Adds a value at the end.
    pub fn append(&mut self, value: impl Into<T>) {
        self.0.push(value.into());
    }

    /// Adds a value at the front.
    pub fn prepend(&mut self, value: impl Into<T>) {
        self.0.insert(0, value.into());
    }

    /// Inserts a value before `index`. Indexes past the end append.
    pub fn insert(&mut self, index: usize, value: impl Into<T>) {
        let index = index.min(self.0.len());
        self.0.insert(index, value.into());
    }

    /// Replaces the value at `index`, returning the previous one. Out of
    /// range leaves the sequence unchanged and returns `None`.
    pub fn replace(&mut self, index: usize, value: impl Into<T>) -> Option<T> {
        self.0
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, value.into()))
    }

    /// Removes the value at `index`. Out of range is a no-op.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        (index < self.0.len()).then(|| self.0.remove(index))
    }

    /// Swaps two elements. Out of range is a no-op.
    pub fn swap(&mut self, i: usize, j: usize) {
        if i < self.0.len() && j < self.0.len() {
            self.0.swap(i, j);
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.0.iter_mut()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }
}

impl<T: PropertyValue> Sequence<T> {
    /// Appends a raw value as the unknown alternative.
    pub fn append_unknown(&mut self, value: Value) {
        self.0.push(T::unknown(value));
    }

    /// Returns true if the element at `index` matched no declared alternative.
    #[must_use]
    pub fn has_unknown(&self, index: usize) -> bool {
        self.unknown(index).is_some()
    }

    /// Returns the raw value kept at `index` for an unrecognized shape.
    #[must_use]
    pub fn unknown(&self, index: usize) -> Option<&Value> {
        self.0.get(index).and_then(PropertyValue::as_unknown)
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(values: Vec<T>) -> Self {
        Self(values)
    }
}

impl<T, V: Into<T>> FromIterator<V> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: PropertyValue> Property for Sequence<T> {
    fn decode_from(key: &str, map: &mut JsonMap) -> Result<Self> {
        let Some(value) = map.remove(key) else {
            return Ok(Self::new());
        };
        let decoded = match &value {
            Value::Array(items) => items.iter().map(T::decode).collect::<Result<Vec<_>>>(),
            single => T::decode(single).map(|v| vec![v]),
        };
        decoded.map(Self).map_err(|e| e.in_property(key))
    }

    fn encode_into(&self, key: &str, map: &mut JsonMap) -> Result<()> {
        let mut encoded = self
            .0
            .iter()
            .map(PropertyValue::encode)
            .collect::<Result<Vec<_>>>()
            .map_err(|e| e.in_property(key))?;
        match encoded.len() {
            0 => {}
            1 => {
                // A lone array element stays wrapped, or it would decode as many.
                let value = match encoded.remove(0) {
                    array @ Value::Array(_) => Value::Array(vec![array]),
                    bare => bare,
                };
                map.insert(key.to_owned(), value);
            }
            _ => {
                map.insert(key.to_owned(), Value::Array(encoded));
            }
        }
        Ok(())
    }
}
