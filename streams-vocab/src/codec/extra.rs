use serde_json::Value;
use std::collections::BTreeMap;
use streams_types::Result;

use super::{JsonMap, TypeList};
use crate::resource::{Resource, is_known_type};

/// One extension value.
///
/// Objects that name a known vocabulary type are resolved into a
/// [`Resource`] on decode; everything else keeps its JSON structure.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtraValue {
    /// A string, number, boolean or null.
    Scalar(Value),
    Array(Vec<ExtraValue>),
    Object(BTreeMap<String, ExtraValue>),
    Resource(Box<Resource>),
}

impl ExtraValue {
    /// Converts decoded JSON, resolving nested vocabulary objects.
    ///
    /// An object that names a known type but fails to decode is kept raw.
    pub fn resolve(value: Value) -> Self {
        match value {
            Value::Array(items) => Self::Array(items.into_iter().map(Self::resolve).collect()),
            Value::Object(obj) => {
                if TypeList::names_in(&obj).any(is_known_type) {
                    match Resource::from_map(&obj) {
                        Ok(resource) => return Self::Resource(Box::new(resource)),
                        Err(error) => {
                            tracing::debug!(%error, "extension object names a known type but did not decode; keeping it raw");
                        }
                    }
                }
                Self::Object(obj.into_iter().map(|(k, v)| (k, Self::resolve(v))).collect())
            }
            scalar => Self::Scalar(scalar),
        }
    }

    /// Converts back to JSON.
    pub fn to_value(&self) -> Result<Value> {
        Ok(match self {
            Self::Scalar(v) => v.clone(),
            Self::Array(items) => Value::Array(items.iter().map(Self::to_value).collect::<Result<_>>()?),
            Self::Object(obj) => Value::Object(
                obj.iter()
                    .map(|(k, v)| Ok((k.clone(), v.to_value()?)))
                    .collect::<Result<_>>()?,
            ),
            Self::Resource(resource) => Value::Object(resource.to_map()?),
        })
    }

    #[must_use]
    pub fn as_scalar(&self) -> Option<&Value> {
        match self {
            Self::Scalar(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_resource(&self) -> Option<&Resource> {
        match self {
            Self::Resource(r) => Some(r),
            _ => None,
        }
    }
}

/// Structural conversion only; no type resolution.
impl From<Value> for ExtraValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::Object(obj) => Self::Object(obj.into_iter().map(|(k, v)| (k, Self::from(v))).collect()),
            scalar => Self::Scalar(scalar),
        }
    }
}

impl From<Resource> for ExtraValue {
    fn from(resource: Resource) -> Self {
        Self::Resource(Box::new(resource))
    }
}

/// Keys outside the vocabulary, kept for round-tripping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtraFields(BTreeMap<String, ExtraValue>);

impl ExtraFields {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes every remaining entry of a decoded map.
    #[must_use]
    pub fn from_json(map: JsonMap) -> Self {
        Self(
            map.into_iter()
                .map(|(k, v)| (k, ExtraValue::resolve(v)))
                .collect(),
        )
    }

    /// Writes every entry into `map`. Declared properties already present
    /// in `map` win over extension entries with the same key.
    pub fn encode_into(&self, map: &mut JsonMap) -> Result<()> {
        for (key, value) in &self.0 {
            if !map.contains_key(key) {
                map.insert(key.clone(), value.to_value()?);
            }
        }
        Ok(())
    }

    /// Converts every entry to JSON.
    pub fn to_json(&self) -> Result<JsonMap> {
        let mut map = JsonMap::new();
        self.encode_into(&mut map)?;
        Ok(map)
    }

    /// Adds or replaces an entry, returning the previous value.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<ExtraValue>) -> Option<ExtraValue> {
        self.0.insert(key.into(), value.into())
    }

    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ExtraValue> {
        self.0.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<ExtraValue> {
        self.0.remove(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ExtraValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}
