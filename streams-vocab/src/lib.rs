//! Typed ActivityStreams 2.0 objects with a lossless JSON codec.
//!
//! # Layers
//!
//! - [`codec`]: property containers and the rules for reading and writing
//!   them from a JSON map: arity collapse, natural-language maps, `type`
//!   handling, and the extension bag.
//! - [`value`]: the value range of each property, as an enum of the shapes
//!   it accepts plus an `Unknown` fallback.
//! - [`group`]: property groups, one per level of the vocabulary.
//! - [`vocab`]: the concrete types, each a composition of groups.
//! - [`resource`]: [`Resource`], the closed set of all types, and
//!   capability lookups through [`Parts`].
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use streams_vocab::{Note, Vocabulary};
//!
//! let note = Note::from_value(&json!({
//!     "type": "Note",
//!     "content": "hi",
//!     "to": "https://www.w3.org/ns/activitystreams#Public",
//! }))
//! .unwrap();
//! assert!(note.is_public());
//! ```

mod addressing;
pub mod codec;
pub mod group;
pub mod resource;
pub mod value;
pub mod vocab;

pub use codec::{
    CONTEXT_IRI, CONTEXT_KEY, ExtraFields, ExtraValue, Functional, JsonMap, NaturalLanguage, Property,
    PropertyValue, Sequence, TypeList, with_context,
};
pub use group::*;
pub use resource::{AnyLink, AnyObject, Category, Parts, PartsMut, Resource, Vocabulary, is_known_type};
pub use value::*;
pub use vocab::*;

pub use streams_types::{
    DateTime, Duration, Error, Iri, LangMap, LanguageTag, LinkRelation, MediaType, PUBLIC_IRI, Result, Unit,
};
