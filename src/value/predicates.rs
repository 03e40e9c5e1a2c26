//! Runtime category predicates.
//!
//! These answer "what kind of value is this" the way `typeof` and the
//! usual `isX` helpers do. [`is_object`] is true for plain objects only;
//! `null`, dates and arrays share the `object` [`Category`] but are not
//! plain objects.

use super::{Category, Value};

/// Returns the `typeof` category of `value`.
#[inline]
pub const fn type_of(value: &Value) -> Category {
    value.category()
}

/// Returns `true` for strings.
#[inline]
pub const fn is_string(value: &Value) -> bool {
    matches!(value, Value::String(_))
}

/// Returns `true` for numbers, including `NaN`.
#[inline]
pub const fn is_number(value: &Value) -> bool {
    matches!(value, Value::Number(_))
}

/// Returns `true` for big integers.
#[inline]
pub const fn is_big_int(value: &Value) -> bool {
    matches!(value, Value::BigInt(_))
}

/// Returns `true` for booleans.
#[inline]
pub const fn is_boolean(value: &Value) -> bool {
    matches!(value, Value::Boolean(_))
}

/// Returns `true` for symbols.
#[inline]
pub const fn is_symbol(value: &Value) -> bool {
    matches!(value, Value::Symbol(_))
}

/// Returns `true` for functions.
#[inline]
pub const fn is_function(value: &Value) -> bool {
    matches!(value, Value::Function(_))
}

/// Returns `true` for dates.
#[inline]
pub const fn is_date(value: &Value) -> bool {
    matches!(value, Value::Date(_))
}

/// Returns `true` for arrays.
#[inline]
pub const fn is_array(value: &Value) -> bool {
    matches!(value, Value::Array(_))
}

/// Returns `true` for plain objects.
///
/// # Examples
///
/// ```rust
/// use fnkit::value::{Value, is_object};
///
/// assert!(is_object(&Value::object([("a", 1)])));
/// assert!(!is_object(&Value::Null));
/// assert!(!is_object(&Value::array([1])));
/// ```
#[inline]
pub const fn is_object(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

/// Returns `true` for `null`.
#[inline]
pub const fn is_null(value: &Value) -> bool {
    matches!(value, Value::Null)
}

/// Returns `true` for `undefined`.
#[inline]
pub const fn is_undefined(value: &Value) -> bool {
    matches!(value, Value::Undefined)
}

/// Returns `true` for `null` or `undefined`.
#[inline]
pub const fn is_nil(value: &Value) -> bool {
    matches!(value, Value::Null | Value::Undefined)
}

/// Returns `true` for anything but `null` and `undefined`.
#[inline]
pub const fn is_not_nil(value: &Value) -> bool {
    !is_nil(value)
}
