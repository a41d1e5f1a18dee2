//! Primitive value kinds for the ActivityStreams 2.0 vocabulary.
//!
//! Every property of a vocabulary object ranges over a small set of value
//! kinds. This crate defines the ones that are not vocabulary objects
//! themselves:
//! - [`Iri`]: an absolute IRI reference (`xsd:anyURI`)
//! - [`DateTime`]: `xsd:dateTime`
//! - [`Duration`]: `xsd:duration`
//! - [`LangMap`]: an `rdf:langString` map from BCP-47 tag to text
//! - [`LanguageTag`], [`MediaType`], [`LinkRelation`], [`Unit`]: string-shaped
//!   literals with their own meaning
//!
//! Each kind implements [`Alternative`], the decoding contract the property
//! codec in `streams-vocab` uses to try alternatives in priority order.

mod alternative;
mod datetime;
mod duration;
mod error;
mod iri;
mod lang;
mod literal;

pub use alternative::Alternative;
pub use datetime::DateTime;
pub use duration::Duration;
pub use error::{Error, Result};
pub use iri::{Iri, PUBLIC_IRI};
pub use lang::{LangMap, LanguageTag};
pub use literal::{LinkRelation, MediaType, Unit};
