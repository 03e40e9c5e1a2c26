//! Dynamic values and the predicates that classify them.
//!
//! [`Value`] models the open value universe the equality engine works on:
//! scalars, null/undefined markers, ordered sequences and insertion-ordered
//! key-value mappings. Every value belongs to exactly one [`Category`], the
//! coarse runtime kind used to short-circuit comparisons.
//!
//! - [`are_equals`]: structural deep equality
//! - [`is_empty`] / [`is_not_empty`]: emptiness by category
//! - `is_*` predicates: category tests
//!
//! # Examples
//!
//! ```rust
//! use fnkit::value::{Value, are_equals};
//!
//! let left = Value::array([Value::from(1), Value::array([2, 3])]);
//! let right = Value::array([Value::from(1), Value::array([2, 3])]);
//! assert!(are_equals(&left, &right));
//!
//! assert!(!are_equals(&Value::from(42), &Value::from("42")));
//! ```

mod emptiness;
mod equality;
mod error;
#[cfg(feature = "serde")]
mod json;
mod predicates;

pub use emptiness::{is_empty, is_not_empty};
pub use equality::are_equals;
pub use error::ValueError;
pub use predicates::{
    is_array, is_big_int, is_boolean, is_date, is_function, is_nil, is_not_nil, is_null,
    is_number, is_object, is_string, is_symbol, is_undefined, type_of,
};

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use indexmap::IndexMap;

/// An insertion-ordered mapping from keys to values.
pub type Object = IndexMap<String, Value>;

/// A dynamically typed value.
///
/// `Value` does not implement `PartialEq`: structural comparison has
/// deliberate edge cases and goes through [`are_equals`].
#[derive(Debug, Clone)]
pub enum Value {
    /// The absent-value marker.
    Undefined,
    /// The null marker.
    Null,
    /// A boolean.
    Boolean(bool),
    /// A double precision number.
    Number(f64),
    /// An arbitrary sized integer, bounded to `i128`.
    BigInt(i128),
    /// A string.
    String(String),
    /// A unique symbol.
    Symbol(Symbol),
    /// A shared callable.
    Function(Function),
    /// A point in time.
    Date(DateTime<Utc>),
    /// An ordered sequence.
    Array(Vec<Value>),
    /// An insertion-ordered mapping.
    Object(Object),
}

static_assertions::assert_impl_all!(Value: Send, Sync, Clone);

impl Value {
    /// Builds an array from anything convertible into values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::value::Value;
    ///
    /// let numbers = Value::array([1, 2, 3]);
    /// assert_eq!(numbers.as_array().map(<[Value]>::len), Some(3));
    /// ```
    pub fn array<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Self>,
    {
        Self::Array(values.into_iter().map(Into::into).collect())
    }

    /// Builds an object from key-value pairs, keeping their order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::value::Value;
    ///
    /// let point = Value::object([("x", 1), ("y", 2)]);
    /// assert_eq!(point.get("y").and_then(Value::as_f64), Some(2.0));
    /// ```
    pub fn object<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Self>,
    {
        Self::Object(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Returns the runtime category of this value.
    pub const fn category(&self) -> Category {
        match self {
            Self::Undefined => Category::Undefined,
            Self::Null | Self::Date(_) | Self::Array(_) | Self::Object(_) => Category::Object,
            Self::Boolean(_) => Category::Boolean,
            Self::Number(_) => Category::Number,
            Self::BigInt(_) => Category::BigInt,
            Self::String(_) => Category::String,
            Self::Symbol(_) => Category::Symbol,
            Self::Function(_) => Category::Function,
        }
    }

    /// Method form of [`are_equals`].
    #[inline]
    pub fn deep_equals(&self, other: &Self) -> bool {
        are_equals(self, other)
    }

    /// Returns the field `key` of an object, or `None` for missing keys and
    /// non-object values.
    pub fn get(&self, key: &str) -> Option<&Self> {
        match self {
            Self::Object(entries) => entries.get(key),
            _ => None,
        }
    }

    /// Returns the elements of an array.
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(values) => Some(values),
            _ => None,
        }
    }

    /// Returns the entries of an object.
    pub const fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(entries) => Some(entries),
            _ => None,
        }
    }

    /// Returns the number held by a `Number`.
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the text held by a `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }
}

// =============================================================================
// Category
// =============================================================================

/// The coarse runtime kind of a [`Value`], as reported by `typeof`.
///
/// `Null`, dates, arrays and objects all share [`Category::Object`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// `undefined`
    Undefined,
    /// `object`
    Object,
    /// `boolean`
    Boolean,
    /// `number`
    Number,
    /// `bigint`
    BigInt,
    /// `string`
    String,
    /// `symbol`
    Symbol,
    /// `function`
    Function,
}

impl Category {
    /// Returns the `typeof` name of this category.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Object => "object",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::BigInt => "bigint",
            Self::String => "string",
            Self::Symbol => "symbol",
            Self::Function => "function",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

// =============================================================================
// Symbol
// =============================================================================

static NEXT_SYMBOL_ID: AtomicU64 = AtomicU64::new(0);

/// A unique token with an optional description.
///
/// Clones share the identity of the original; two calls to
/// [`Symbol::new`] never produce equal symbols.
///
/// # Examples
///
/// ```rust
/// use fnkit::value::Symbol;
///
/// let first = Symbol::new(Some("id"));
/// assert_eq!(first, first.clone());
/// assert_ne!(first, Symbol::new(Some("id")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol {
    id: u64,
    description: Option<Arc<str>>,
}

impl Symbol {
    /// Allocates a new symbol.
    pub fn new(description: Option<&str>) -> Self {
        Self {
            id: NEXT_SYMBOL_ID.fetch_add(1, Ordering::Relaxed),
            description: description.map(Arc::from),
        }
    }

    /// Returns the description given at creation.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Symbol({})", self.description().unwrap_or_default())
    }
}

// =============================================================================
// Function
// =============================================================================

type Callable = dyn Fn(&[Value]) -> Value + Send + Sync;

/// A shared callable value.
///
/// Identity is the identity of the shared allocation: clones are the same
/// function, two separately created functions never are.
#[derive(Clone)]
pub struct Function(Arc<Callable>);

impl Function {
    /// Wraps a closure.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self(Arc::new(function))
    }

    /// Invokes the function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::value::{Function, Value};
    ///
    /// let count = Function::new(|arguments| Value::from(arguments.len() as f64));
    /// assert_eq!(count.call(&[Value::Null, Value::Null]).as_f64(), Some(2.0));
    /// ```
    pub fn call(&self, arguments: &[Value]) -> Value {
        (self.0)(arguments)
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Function {}

impl fmt::Debug for Function {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Function(..)")
    }
}

// =============================================================================
// Display
// =============================================================================

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => formatter.write_str("undefined"),
            Self::Null => formatter.write_str("null"),
            Self::Boolean(flag) => write!(formatter, "{flag}"),
            Self::Number(number) => write_number(formatter, *number),
            Self::BigInt(number) => write!(formatter, "{number}"),
            Self::String(text) => formatter.write_str(text),
            Self::Symbol(symbol) => write!(formatter, "{symbol}"),
            Self::Function(_) => formatter.write_str("function"),
            Self::Date(date) => formatter.write_str(&date.to_rfc3339()),
            Self::Array(values) => {
                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(",")?;
                    }
                    // Nil elements render as empty slots.
                    if is_not_nil(value) {
                        write!(formatter, "{value}")?;
                    }
                }
                Ok(())
            }
            Self::Object(_) => formatter.write_str("[object Object]"),
        }
    }
}

#[allow(clippy::float_cmp)]
fn write_number(formatter: &mut fmt::Formatter<'_>, number: f64) -> fmt::Result {
    if number.is_nan() {
        formatter.write_str("NaN")
    } else if number.is_infinite() {
        formatter.write_str(if number > 0.0 { "Infinity" } else { "-Infinity" })
    } else if number == 0.0 {
        formatter.write_str("0")
    } else if number.abs() >= 1e21 || number.abs() < 1e-6 {
        let rendered = format!("{number:e}");
        match rendered.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                write!(formatter, "{mantissa}e+{exponent}")
            }
            _ => formatter.write_str(&rendered),
        }
    } else {
        write!(formatter, "{number}")
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Boolean(flag)
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<u32> for Value {
    fn from(number: u32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<i128> for Value {
    fn from(number: i128) -> Self {
        Self::BigInt(number)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::String(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::String(text)
    }
}

impl From<Symbol> for Value {
    fn from(symbol: Symbol) -> Self {
        Self::Symbol(symbol)
    }
}

impl From<Function> for Value {
    fn from(function: Function) -> Self {
        Self::Function(function)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(date: DateTime<Utc>) -> Self {
        Self::Date(date)
    }
}

impl From<Vec<Self>> for Value {
    fn from(values: Vec<Self>) -> Self {
        Self::Array(values)
    }
}

impl From<Object> for Value {
    fn from(entries: Object) -> Self {
        Self::Object(entries)
    }
}

impl FromIterator<Self> for Value {
    fn from_iter<I: IntoIterator<Item = Self>>(iter: I) -> Self {
        Self::Array(iter.into_iter().collect())
    }
}
