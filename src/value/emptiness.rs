//! Emptiness by category.

use super::{Category, Value, ValueError};

/// Returns whether `value` is empty.
///
/// | category | empty when |
/// |----------|------------|
/// | array | it has no elements |
/// | string | it has no characters |
/// | date | it is the Unix epoch |
/// | object | it has no keys |
/// | number, big integer | it is zero (`NaN` is not empty) |
/// | boolean | it is `false` |
/// | symbol | never |
/// | null, undefined | always |
///
/// # Errors
///
/// Returns [`ValueError::UnsupportedEmptiness`] for functions.
///
/// # Examples
///
/// ```rust
/// use fnkit::value::{Function, Value, is_empty};
///
/// assert_eq!(is_empty(&Value::from("")), Ok(true));
/// assert_eq!(is_empty(&Value::array([0])), Ok(false));
/// assert!(is_empty(&Value::from(Function::new(|_| Value::Null))).is_err());
/// ```
#[allow(clippy::float_cmp)]
pub fn is_empty(value: &Value) -> Result<bool, ValueError> {
    match value {
        Value::Undefined | Value::Null => Ok(true),
        Value::Boolean(flag) => Ok(!flag),
        Value::Number(number) => Ok(*number == 0.0),
        Value::BigInt(number) => Ok(*number == 0),
        Value::String(text) => Ok(text.is_empty()),
        Value::Symbol(_) => Ok(false),
        Value::Date(date) => Ok(date.timestamp_millis() == 0),
        Value::Array(values) => Ok(values.is_empty()),
        Value::Object(entries) => Ok(entries.is_empty()),
        Value::Function(_) => {
            let category = Category::Function;
            tracing::debug!(%category, "emptiness is not defined for this category");
            Err(ValueError::UnsupportedEmptiness { category })
        }
    }
}

/// Negation of [`is_empty`].
///
/// # Errors
///
/// Forwards the error of [`is_empty`].
#[inline]
pub fn is_not_empty(value: &Value) -> Result<bool, ValueError> {
    is_empty(value).map(|empty| !empty)
}
