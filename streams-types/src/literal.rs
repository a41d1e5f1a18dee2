//! String-shaped literals with a fixed meaning.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// A MIME media type (RFC 2045), e.g. `text/html`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaType(String);

impl MediaType {
    #[must_use]
    pub fn new(media_type: impl Into<String>) -> Self {
        Self(media_type.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The part before `/`, e.g. `image` for `image/png`.
    #[must_use]
    pub fn top_level(&self) -> &str {
        self.0.split('/').next().unwrap_or_default()
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MediaType {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// A link relation (RFC 5988 or HTML5), e.g. `canonical` or `preview`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkRelation(String);

impl LinkRelation {
    #[must_use]
    pub fn new(rel: impl Into<String>) -> Self {
        Self(rel.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LinkRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LinkRelation {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Units of measurement for `Place.radius` and `Place.altitude`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Cm,
    Feet,
    Inches,
    Km,
    M,
    Miles,
}

impl Unit {
    /// The wire name of the unit.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Unit::Cm => "cm",
            Unit::Feet => "feet",
            Unit::Inches => "inches",
            Unit::Km => "km",
            Unit::M => "m",
            Unit::Miles => "miles",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "cm" => Ok(Unit::Cm),
            "feet" => Ok(Unit::Feet),
            "inches" => Ok(Unit::Inches),
            "km" => Ok(Unit::Km),
            "m" => Ok(Unit::M),
            "miles" => Ok(Unit::Miles),
            other => Err(Error::InvalidUnit(other.to_owned())),
        }
    }
}
