//! Conversion between [`Value`] and `serde_json::Value`.
//!
//! JSON has no notion of `undefined`, symbols, functions, non-finite
//! numbers or big integers, so converting those out of [`Value`] fails
//! with [`ValueError::NotRepresentable`]. Big integers inside the
//! `i64` range are emitted as JSON integers. Dates become RFC 3339
//! strings and do not come back as dates.

use serde_json::{Map, Number};

use super::{Object, Value, ValueError};

/// The largest integer a double represents exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(flag) => Self::Boolean(flag),
            serde_json::Value::Number(number) => {
                Self::Number(number.as_f64().unwrap_or(f64::NAN))
            }
            serde_json::Value::String(text) => Self::String(text),
            serde_json::Value::Array(values) => {
                Self::Array(values.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(entries) => Self::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect::<Object>(),
            ),
        }
    }
}

impl TryFrom<&Value> for serde_json::Value {
    type Error = ValueError;

    /// # Examples
    ///
    /// ```rust
    /// use fnkit::value::Value;
    ///
    /// let value = Value::object([("a", Value::array([1, 2]))]);
    /// let json = serde_json::Value::try_from(&value);
    /// assert_eq!(json, Ok(serde_json::json!({ "a": [1, 2] })));
    ///
    /// assert!(serde_json::Value::try_from(&Value::Undefined).is_err());
    /// ```
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let not_representable = || ValueError::NotRepresentable {
            category: value.category(),
        };

        match value {
            Value::Null => Ok(Self::Null),
            Value::Boolean(flag) => Ok(Self::Bool(*flag)),
            Value::Number(number) => number_to_json(*number).ok_or_else(not_representable),
            Value::BigInt(number) => i64::try_from(*number)
                .map(|integer| Self::Number(integer.into()))
                .map_err(|_| not_representable()),
            Value::String(text) => Ok(Self::String(text.clone())),
            Value::Date(date) => Ok(Self::String(date.to_rfc3339())),
            Value::Array(values) => values
                .iter()
                .map(Self::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Array),
            Value::Object(entries) => entries
                .iter()
                .map(|(key, value)| Self::try_from(value).map(|json| (key.clone(), json)))
                .collect::<Result<Map<_, _>, _>>()
                .map(Self::Object),
            Value::Undefined | Value::Symbol(_) | Value::Function(_) => Err(not_representable()),
        }
    }
}

impl TryFrom<Value> for serde_json::Value {
    type Error = ValueError;

    #[inline]
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::try_from(&value)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn number_to_json(number: f64) -> Option<serde_json::Value> {
    if number.fract() == 0.0 && number.abs() <= MAX_SAFE_INTEGER {
        Some(serde_json::Value::Number(Number::from(number as i64)))
    } else {
        Number::from_f64(number).map(serde_json::Value::Number)
    }
}
