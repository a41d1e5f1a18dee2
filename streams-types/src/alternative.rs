//! The decoding contract for one alternative of a property value.
//!
//! A property value is a union of alternatives tried in a fixed priority
//! order. Each alternative answers two questions about a JSON value: does it
//! have my shape, and if so, what am I? A shape mismatch is `Ok(None)` and
//! lets the next alternative try; an error means the shape matched but the
//! content is malformed, and it stops decoding.

use serde_json::{Number, Value};

use crate::{DateTime, Duration, Error, Iri, LangMap, LanguageTag, LinkRelation, MediaType, Result, Unit};

/// One alternative value shape of a property.
pub trait Alternative: Sized {
    /// Reads `value` as this alternative. `Ok(None)` when the shape does not
    /// match.
    fn decode(value: &Value) -> Result<Option<Self>>;

    /// Writes this alternative as JSON.
    fn encode(&self) -> Result<Value>;
}

impl Alternative for String {
    fn decode(value: &Value) -> Result<Option<Self>> {
        Ok(value.as_str().map(str::to_owned))
    }

    fn encode(&self) -> Result<Value> {
        Ok(Value::String(self.clone()))
    }
}

impl Alternative for bool {
    fn decode(value: &Value) -> Result<Option<Self>> {
        Ok(value.as_bool())
    }

    fn encode(&self) -> Result<Value> {
        Ok(Value::Bool(*self))
    }
}

/// 2^63, the first `f64` past the `i64` range.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// `xsd:float`. Any JSON number an `f64` holds exactly matches; an integer
/// that would round is left to the unknown alternative so it keeps its
/// digits. Integral values are written back without a fractional part,
/// except `-0.0`, which keeps its sign.
impl Alternative for f64 {
    fn decode(value: &Value) -> Result<Option<Self>> {
        let Value::Number(n) = value else {
            return Ok(None);
        };
        let exact = match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, Some(f)) => f as i128 == i128::from(i),
            (None, Some(u), Some(f)) => f as u128 == u128::from(u),
            (None, None, f) => f.is_some(),
            (_, _, None) => false,
        };
        Ok(n.as_f64().filter(|_| exact))
    }

    fn encode(&self) -> Result<Value> {
        let negative_zero = *self == 0.0 && self.is_sign_negative();
        if self.fract() == 0.0 && !negative_zero && (-I64_BOUND..I64_BOUND).contains(self) {
            return Ok(Value::from(*self as i64));
        }
        Number::from_f64(*self)
            .map(Value::Number)
            .ok_or(Error::NonFiniteFloat(*self))
    }
}

/// `xsd:nonNegativeInteger`.
impl Alternative for u64 {
    fn decode(value: &Value) -> Result<Option<Self>> {
        Ok(value.as_u64())
    }

    fn encode(&self) -> Result<Value> {
        Ok(Value::from(*self))
    }
}

/// Only strings with a scheme match, so plain words fall through to the
/// next alternative.
impl Alternative for Iri {
    fn decode(value: &Value) -> Result<Option<Self>> {
        Ok(value.as_str().and_then(|s| Iri::parse(s).ok()))
    }

    fn encode(&self) -> Result<Value> {
        Ok(Value::String(self.as_str().to_owned()))
    }
}

impl Alternative for DateTime {
    fn decode(value: &Value) -> Result<Option<Self>> {
        Ok(value.as_str().and_then(|s| DateTime::parse(s).ok()))
    }

    fn encode(&self) -> Result<Value> {
        Ok(Value::String(self.to_rfc3339()))
    }
}

impl Alternative for Duration {
    fn decode(value: &Value) -> Result<Option<Self>> {
        Ok(value.as_str().and_then(|s| Duration::parse(s).ok()))
    }

    fn encode(&self) -> Result<Value> {
        Ok(Value::String(self.to_xsd()))
    }
}

impl Alternative for LangMap {
    fn decode(value: &Value) -> Result<Option<Self>> {
        Ok(value.as_object().and_then(LangMap::from_json))
    }

    fn encode(&self) -> Result<Value> {
        Ok(Value::Object(self.to_json()))
    }
}

impl Alternative for Unit {
    fn decode(value: &Value) -> Result<Option<Self>> {
        Ok(value.as_str().and_then(|s| s.parse().ok()))
    }

    fn encode(&self) -> Result<Value> {
        Ok(Value::String(self.as_str().to_owned()))
    }
}

macro_rules! string_alternative {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Alternative for $ty {
                fn decode(value: &Value) -> Result<Option<Self>> {
                    Ok(value.as_str().map(<$ty>::new))
                }

                fn encode(&self) -> Result<Value> {
                    Ok(Value::String(self.as_str().to_owned()))
                }
            }
        )*
    };
}

string_alternative!(LanguageTag, MediaType, LinkRelation);
