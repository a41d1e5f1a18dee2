//! `xsd:duration` values.
//!
//! xsd:duration has calendar components that do not map onto a fixed
//! length of time. A year is taken as 365 days and a month as 30 days, so
//! `P1M` and `P30D` decode to the same value and re-encode as `P1M`.

use chrono::TimeDelta;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Write as _};
use std::str::FromStr;

use crate::{Error, Result};

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: i64 = 24 * SECS_PER_HOUR;
const SECS_PER_MONTH: i64 = 30 * SECS_PER_DAY;
const SECS_PER_YEAR: i64 = 365 * SECS_PER_DAY;

/// A signed length of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Duration(TimeDelta);

impl Duration {
    /// Wraps a chrono time delta.
    #[must_use]
    pub const fn new(delta: TimeDelta) -> Self {
        Self(delta)
    }

    /// A duration of whole seconds. Returns `None` when out of range.
    #[must_use]
    pub fn from_secs(secs: i64) -> Option<Self> {
        TimeDelta::try_seconds(secs).map(Self)
    }

    /// Returns the underlying chrono value.
    #[must_use]
    pub const fn inner(&self) -> TimeDelta {
        self.0
    }

    /// Parses `[-]PnYnMnDTnHnMnS`.
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidDuration(s.to_owned());

        let (negative, rest) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let rest = rest.strip_prefix('P').ok_or_else(invalid)?;
        let (date_part, time_part) = match rest.split_once('T') {
            Some((date, time)) => {
                if time.is_empty() {
                    return Err(invalid());
                }
                (date, Some(time))
            }
            None => (rest, None),
        };

        let mut secs: i64 = 0;
        let mut nanos: i64 = 0;
        let mut components = 0;

        for (value, unit) in components_of(date_part).ok_or_else(invalid)? {
            let scale = match unit {
                'Y' => SECS_PER_YEAR,
                'M' => SECS_PER_MONTH,
                'D' => SECS_PER_DAY,
                _ => return Err(invalid()),
            };
            secs = whole(value)
                .and_then(|n| n.checked_mul(scale))
                .and_then(|n| secs.checked_add(n))
                .ok_or_else(invalid)?;
            components += 1;
        }
        check_order(date_part, &['Y', 'M', 'D']).ok_or_else(invalid)?;

        if let Some(time) = time_part {
            for (value, unit) in components_of(time).ok_or_else(invalid)? {
                let scale = match unit {
                    'H' => SECS_PER_HOUR,
                    'M' => SECS_PER_MINUTE,
                    'S' => {
                        let (int, frac) = match value.split_once('.') {
                            Some((int, frac)) => (int, Some(frac)),
                            None => (value, None),
                        };
                        secs = whole(int)
                            .and_then(|n| secs.checked_add(n))
                            .ok_or_else(invalid)?;
                        if let Some(frac) = frac {
                            nanos = fraction_nanos(frac).ok_or_else(invalid)?;
                        }
                        components += 1;
                        continue;
                    }
                    _ => return Err(invalid()),
                };
                secs = whole(value)
                    .and_then(|n| n.checked_mul(scale))
                    .and_then(|n| secs.checked_add(n))
                    .ok_or_else(invalid)?;
                components += 1;
            }
            check_order(time, &['H', 'M', 'S']).ok_or_else(invalid)?;
        }

        if components == 0 {
            return Err(invalid());
        }

        let delta = TimeDelta::try_seconds(secs)
            .and_then(|d| d.checked_add(&TimeDelta::nanoseconds(nanos)))
            .ok_or_else(invalid)?;
        Ok(Self(if negative { -delta } else { delta }))
    }

    /// Formats as `[-]PnYnMnDTnHnMnS`, omitting zero components.
    #[must_use]
    pub fn to_xsd(&self) -> String {
        let negative = self.0 < TimeDelta::zero();
        let delta = self.0.abs();
        let mut rest = delta.num_seconds();
        let nanos = delta.subsec_nanos();

        let mut out = String::from(if negative { "-P" } else { "P" });
        for (scale, unit) in [(SECS_PER_YEAR, 'Y'), (SECS_PER_MONTH, 'M'), (SECS_PER_DAY, 'D')] {
            let n = rest / scale;
            if n > 0 {
                let _ = write!(out, "{n}{unit}");
                rest -= n * scale;
            }
        }

        if rest > 0 || nanos > 0 {
            out.push('T');
            for (scale, unit) in [(SECS_PER_HOUR, 'H'), (SECS_PER_MINUTE, 'M')] {
                let n = rest / scale;
                if n > 0 {
                    let _ = write!(out, "{n}{unit}");
                    rest -= n * scale;
                }
            }
            if nanos > 0 {
                let frac = format!("{nanos:09}");
                let _ = write!(out, "{rest}.{}S", frac.trim_end_matches('0'));
            } else if rest > 0 {
                let _ = write!(out, "{rest}S");
            }
        }

        if out.ends_with('P') {
            out.push_str("T0S");
        }
        out
    }
}

/// Splits `12Y3M` into `[("12", 'Y'), ("3", 'M')]`.
fn components_of(s: &str) -> Option<Vec<(&str, char)>> {
    let mut out = Vec::new();
    let mut start = 0;
    for (i, c) in s.char_indices() {
        if c.is_ascii_digit() || c == '.' {
            continue;
        }
        if i == start {
            return None;
        }
        out.push((&s[start..i], c));
        start = i + c.len_utf8();
    }
    if start != s.len() {
        return None;
    }
    Some(out)
}

/// Designators must appear at most once and in canonical order.
fn check_order(s: &str, order: &[char]) -> Option<()> {
    let mut last = None;
    for c in s.chars().filter(|c| c.is_ascii_alphabetic()) {
        let pos = order.iter().position(|o| *o == c)?;
        if last.is_some_and(|l| pos <= l) {
            return None;
        }
        last = Some(pos);
    }
    Some(())
}

fn whole(digits: &str) -> Option<i64> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

fn fraction_nanos(digits: &str) -> Option<i64> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let padded: String = digits.chars().chain(std::iter::repeat('0')).take(9).collect();
    padded.parse().ok()
}

impl From<TimeDelta> for Duration {
    fn from(delta: TimeDelta) -> Self {
        Self(delta)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_xsd())
    }
}

impl FromStr for Duration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for Duration {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_xsd())
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
