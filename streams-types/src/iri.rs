//! IRI references.
//!
//! Almost every ActivityStreams property may hold a reference by identifier
//! instead of an embedded value. An [`Iri`] keeps the exact string it was
//! built from so that re-serialization reproduces the input byte for byte;
//! `url` normalizes (`https://example.com` becomes `https://example.com/`).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use url::Url;

use crate::{Error, Result};

/// The special collection addressing everyone.
pub const PUBLIC_IRI: &str = "https://www.w3.org/ns/activitystreams#Public";

/// An absolute IRI, validated on construction.
///
/// Equality, ordering and hashing use the original string.
#[derive(Debug, Clone)]
pub struct Iri {
    raw: String,
    url: Url,
}

impl Iri {
    /// Parses an IRI. Relative references are rejected: a value without a
    /// scheme is not treated as an IRI.
    pub fn parse(s: &str) -> Result<Self> {
        let url = Url::parse(s).map_err(|source| Error::InvalidIri {
            value: s.to_owned(),
            source,
        })?;
        Ok(Self {
            raw: s.to_owned(),
            url,
        })
    }

    /// Returns the IRI exactly as it was given.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the parsed URL.
    #[must_use]
    pub fn as_url(&self) -> &Url {
        &self.url
    }

    /// Returns true if this is the public addressing collection.
    #[must_use]
    pub fn is_public(&self) -> bool {
        self.raw == PUBLIC_IRI
    }
}

impl PartialEq for Iri {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for Iri {}

impl Hash for Iri {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl PartialOrd for Iri {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Iri {
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw.cmp(&other.raw)
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for Iri {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Iri {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<Url> for Iri {
    fn from(url: Url) -> Self {
        Self {
            raw: url.as_str().to_owned(),
            url,
        }
    }
}

impl AsRef<str> for Iri {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl Serialize for Iri {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for Iri {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
