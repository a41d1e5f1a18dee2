//! `xsd:dateTime` values.

use chrono::{FixedOffset, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Minute precision form some servers emit (`2006-01-02T15:04Z07:00`).
const MINUTE_PRECISION: &str = "%Y-%m-%dT%H:%M%:z";

/// A point in time with its original UTC offset.
///
/// Serialized as RFC 3339, `Z` for UTC, with fractional seconds only when
/// they are non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateTime(chrono::DateTime<FixedOffset>);

impl DateTime {
    /// Wraps a chrono timestamp.
    #[must_use]
    pub const fn new(inner: chrono::DateTime<FixedOffset>) -> Self {
        Self(inner)
    }

    /// The current time in UTC.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now().fixed_offset())
    }

    /// Parses RFC 3339, falling back to minute precision.
    pub fn parse(s: &str) -> Result<Self> {
        if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
            return Ok(Self(dt));
        }
        let normalized = match s.strip_suffix('Z') {
            Some(rest) => format!("{rest}+00:00"),
            None => s.to_owned(),
        };
        chrono::DateTime::parse_from_str(&normalized, MINUTE_PRECISION)
            .map(Self)
            .map_err(|_| Error::InvalidDateTime(s.to_owned()))
    }

    /// Returns the underlying chrono value.
    #[must_use]
    pub const fn inner(&self) -> chrono::DateTime<FixedOffset> {
        self.0
    }

    /// Formats as RFC 3339.
    #[must_use]
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }
}

impl From<chrono::DateTime<FixedOffset>> for DateTime {
    fn from(inner: chrono::DateTime<FixedOffset>) -> Self {
        Self(inner)
    }
}

impl From<chrono::DateTime<Utc>> for DateTime {
    fn from(inner: chrono::DateTime<Utc>) -> Self {
        Self(inner.fixed_offset())
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

impl FromStr for DateTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for DateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_rfc3339())
    }
}

impl<'de> Deserialize<'de> for DateTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
