//! The property codec.
//!
//! A vocabulary object is encoded by running every declared property
//! against one shared JSON map, then folding in the keys nobody claimed.
//! The pieces here are generic over the value range of a property:
//!
//! - [`Functional`]: at most one value
//! - [`Sequence`]: an ordered list; one element is written as a bare value
//! - [`NaturalLanguage`]: a property with a `<name>Map` sibling key
//! - [`TypeList`]: the `type` tokens
//! - [`ExtraFields`]: keys outside the vocabulary

mod extra;
mod functional;
mod natural;
mod sequence;
mod type_list;

pub use extra::{ExtraFields, ExtraValue};
pub use functional::Functional;
pub use natural::NaturalLanguage;
pub use sequence::Sequence;
pub use type_list::{TYPE_KEY, TypeList};

use serde_json::{Map, Value};
use streams_types::Result;

/// The JSON-LD context key. Accepted on input, never stored.
pub const CONTEXT_KEY: &str = "@context";

/// The ActivityStreams JSON-LD context.
pub const CONTEXT_IRI: &str = "https://www.w3.org/ns/activitystreams";

/// A JSON object as produced and consumed by the codec.
pub type JsonMap = Map<String, Value>;

/// A union of alternative value shapes for one property, plus an unknown
/// fallback.
///
/// Decoding tries the alternatives in a fixed priority order and falls back
/// to [`PropertyValue::unknown`] when none matches; it fails only when a
/// matched sub-entity is itself malformed.
pub trait PropertyValue: Sized {
    /// Decodes one JSON value.
    fn decode(value: &Value) -> Result<Self>;

    /// Encodes the populated alternative.
    fn encode(&self) -> Result<Value>;

    /// Wraps a value that matched no alternative.
    fn unknown(value: Value) -> Self;

    /// Returns the raw value if this is the unknown alternative.
    fn as_unknown(&self) -> Option<&Value>;
}

/// A container for one property's values, read from and written to a map
/// under a fixed key.
pub trait Property: Default {
    /// Removes this property's key (and any sibling key it owns) from `map`
    /// and decodes it.
    fn decode_from(key: &str, map: &mut JsonMap) -> Result<Self>;

    /// Writes this property into `map`. Absent values write nothing.
    fn encode_into(&self, key: &str, map: &mut JsonMap) -> Result<()>;
}

/// Adds the ActivityStreams `@context` to a serialized object.
#[must_use]
pub fn with_context(mut map: JsonMap) -> JsonMap {
    map.insert(CONTEXT_KEY.to_owned(), Value::String(CONTEXT_IRI.to_owned()));
    map
}
