//! Error types shared by the value kinds and the property codec.

use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while encoding or decoding ActivityStreams values.
///
/// A property value whose shape matches none of its alternatives is never an
/// error; it is kept as an unknown value. These variants cover values that
/// were recognized and then turned out to be malformed.
#[derive(Debug, Error)]
pub enum Error {
    /// A string could not be parsed as an absolute IRI.
    #[error("invalid IRI {value:?}: {source}")]
    InvalidIri {
        value: String,
        #[source]
        source: url::ParseError,
    },

    /// A string is not an `xsd:dateTime`.
    #[error("invalid xsd:dateTime: {0:?}")]
    InvalidDateTime(String),

    /// A string is not an `xsd:duration`.
    #[error("invalid xsd:duration: {0:?}")]
    InvalidDuration(String),

    /// A string is not one of the unit names.
    #[error("invalid unit: {0:?}")]
    InvalidUnit(String),

    /// The input was expected to be a JSON object.
    #[error("expected a JSON object for {0}")]
    NotAnObject(&'static str),

    /// The map has no `type` key.
    #[error("no \"type\" property in map")]
    MissingType,

    /// The `type` key does not name the type being decoded.
    #[error("\"type\" property does not contain {expected:?} (found {found:?})")]
    UnexpectedType {
        expected: &'static str,
        found: Vec<String>,
    },

    /// None of the `type` tokens names a vocabulary type.
    #[error("no known vocabulary type among {found:?}")]
    UnrecognizedType { found: Vec<String> },

    /// A float that JSON cannot represent (NaN or infinite).
    #[error("{0} cannot be represented in JSON")]
    NonFiniteFloat(f64),

    /// A resource was placed where only a given capability is accepted.
    #[error("{type_name} is not {capability}")]
    Incapable {
        type_name: &'static str,
        capability: &'static str,
    },

    /// A nested value failed to decode or encode.
    #[error("property {property:?}: {source}")]
    Property {
        property: String,
        #[source]
        source: Box<Error>,
    },

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Wraps this error with the name of the property it occurred in.
    #[must_use]
    pub fn in_property(self, property: &str) -> Self {
        Error::Property {
            property: property.to_owned(),
            source: Box::new(self),
        }
    }
}
