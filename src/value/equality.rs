//! Structural deep equality over [`Value`]s.
//!
//! The comparison runs in three stages:
//!
//! 1. values of different [`Category`](super::Category) are never equal;
//! 2. identical values are equal (same scalar, same symbol, same function,
//!    or the very same container);
//! 3. arrays compare element-wise and objects compare key by key.
//!
//! Everything else is unequal. In particular dates are compared by
//! identity only, and two distinct empty objects are not equal because an
//! object comparison needs at least one key to succeed.

use super::{Object, Value};

/// Returns `true` when `left` and `right` are deeply equal.
///
/// # Examples
///
/// ```rust
/// use fnkit::value::{Object, Value, are_equals};
///
/// let left = Value::object([("a", Value::array([1, 2]))]);
/// let right = Value::object([("a", Value::array([1, 2]))]);
/// assert!(are_equals(&left, &right));
///
/// // Different categories short-circuit.
/// assert!(!are_equals(&Value::from(1), &Value::from("1")));
///
/// // Distinct empty objects never compare equal.
/// let empty = Value::Object(Object::new());
/// assert!(!are_equals(&empty, &empty.clone()));
/// assert!(are_equals(&empty, &empty));
/// ```
pub fn are_equals(left: &Value, right: &Value) -> bool {
    if left.category() != right.category() {
        tracing::trace!(
            left = %left.category(),
            right = %right.category(),
            "category mismatch"
        );
        return false;
    }

    if is_identical(left, right) {
        return true;
    }

    match (left, right) {
        (Value::Array(left_values), Value::Array(right_values)) => {
            left_values.len() == right_values.len()
                && left_values
                    .iter()
                    .zip(right_values)
                    .all(|(left_value, right_value)| are_equals(left_value, right_value))
        }
        (Value::Object(left_entries), Value::Object(right_entries)) => {
            object_equals(left_entries, right_entries)
        }
        _ => false,
    }
}

/// Strict identity: scalars by value, containers by address.
#[allow(clippy::float_cmp)]
fn is_identical(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Boolean(left), Value::Boolean(right)) => left == right,
        (Value::Number(left), Value::Number(right)) => {
            left == right || (left.is_nan() && right.is_nan())
        }
        (Value::BigInt(left), Value::BigInt(right)) => left == right,
        (Value::String(left), Value::String(right)) => left == right,
        (Value::Symbol(left), Value::Symbol(right)) => left == right,
        (Value::Function(left), Value::Function(right)) => left == right,
        (Value::Date(_), Value::Date(_))
        | (Value::Array(_), Value::Array(_))
        | (Value::Object(_), Value::Object(_)) => std::ptr::eq(left, right),
        _ => false,
    }
}

fn object_equals(left: &Object, right: &Object) -> bool {
    (!left.is_empty() || !right.is_empty())
        && left.iter().all(|(key, left_value)| {
            right
                .get(key)
                .is_some_and(|right_value| are_equals(left_value, right_value))
        })
        && right.keys().all(|key| left.contains_key(key))
}
