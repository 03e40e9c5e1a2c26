//! Helpers over insertion-ordered records.
//!
//! A [`Record`] is an [`IndexMap`]: iteration follows insertion order and
//! every helper below preserves it.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::collection::record::{self, Record};
//!
//! let stock: Record<&str, u32> = Record::from([("apples", 3), ("pears", 0), ("plums", 7)]);
//! let available = record::filter(&stock, |_, count, _| *count > 0);
//! assert_eq!(record::show(&available), "{apples: 3, plums: 7}");
//! ```

use std::fmt::Display;
use std::hash::Hash;
use std::iter::Sum;

use indexmap::IndexMap;

use super::{ShowOptions, array};
use crate::value::{Value, is_not_nil};

/// An insertion-ordered mapping.
pub type Record<K, V> = IndexMap<K, V>;

/// Returns the key-value pairs in insertion order.
pub fn entries<K, V>(record: &Record<K, V>) -> Vec<(&K, &V)> {
    record.iter().collect()
}

/// Maps every value. `function` receives the key, the value and the
/// position of the entry.
///
/// # Examples
///
/// ```rust
/// use fnkit::collection::record::{self, Record};
///
/// let prices: Record<&str, f64> = Record::from([("tea", 2.0), ("cake", 3.5)]);
/// let labels = record::map(&prices, |name, price, index| format!("{index}:{name}={price}"));
/// assert_eq!(labels["cake"], "1:cake=3.5");
/// ```
pub fn map<K, V, R, F>(record: &Record<K, V>, mut function: F) -> Record<K, R>
where
    K: Clone + Hash + Eq,
    F: FnMut(&K, &V, usize) -> R,
{
    record
        .iter()
        .enumerate()
        .map(|(index, (key, value))| (key.clone(), function(key, value, index)))
        .collect()
}

/// Keeps the entries `predicate` accepts.
pub fn filter<K, V, F>(record: &Record<K, V>, mut predicate: F) -> Record<K, V>
where
    K: Clone + Hash + Eq,
    V: Clone,
    F: FnMut(&K, &V, usize) -> bool,
{
    record
        .iter()
        .enumerate()
        .filter(|&(index, (key, value))| predicate(key, value, index))
        .map(|(_, (key, value))| (key.clone(), value.clone()))
        .collect()
}

/// Folds the entries in insertion order.
pub fn reduce<K, V, A, F>(record: &Record<K, V>, initial: A, function: F) -> A
where
    F: FnMut(A, (&K, &V)) -> A,
{
    record.iter().fold(initial, function)
}

/// Lifts nested records to the top level, joining keys with a dot.
///
/// # Examples
///
/// ```rust
/// use fnkit::collection::record::{self, Record};
///
/// let nested: Record<&str, Record<&str, i32>> =
///     Record::from([("a", Record::from([("x", 1), ("y", 2)])), ("b", Record::from([("z", 3)]))]);
/// let flat = record::flatten_keys(&nested);
/// assert_eq!(flat.keys().collect::<Vec<_>>(), ["a.x", "a.y", "b.z"]);
/// ```
pub fn flatten_keys<K1, K2, V>(record: &Record<K1, Record<K2, V>>) -> Record<String, V>
where
    K1: Display,
    K2: Display,
    V: Clone,
{
    record
        .iter()
        .flat_map(|(outer, inner)| {
            inner
                .iter()
                .map(move |(key, value)| (format!("{outer}.{key}"), value.clone()))
        })
        .collect()
}

/// Drops `None` values and unwraps the rest.
pub fn compact<K, V>(record: &Record<K, Option<V>>) -> Record<K, V>
where
    K: Clone + Hash + Eq,
    V: Clone,
{
    record
        .iter()
        .filter_map(|(key, value)| value.clone().map(|value| (key.clone(), value)))
        .collect()
}

/// Drops `null` and `undefined` values.
pub fn compact_nil<K>(record: &Record<K, Value>) -> Record<K, Value>
where
    K: Clone + Hash + Eq,
{
    filter(record, |_, value, _| is_not_nil(value))
}

/// Returns `true` when every entry of `other` is in `record`.
pub fn includes<K, V>(record: &Record<K, V>, other: &Record<K, V>) -> bool
where
    K: Hash + Eq,
    V: PartialEq,
{
    includes_by(record, other, PartialEq::eq)
}

/// [`includes`] with a custom value comparison, e.g.
/// [`are_equals`](crate::value::are_equals) for [`Value`] records.
pub fn includes_by<K, V, F>(record: &Record<K, V>, other: &Record<K, V>, comparator: F) -> bool
where
    K: Hash + Eq,
    F: Fn(&V, &V) -> bool,
{
    other.iter().all(|(key, expected)| {
        record
            .get(key)
            .is_some_and(|actual| comparator(actual, expected))
    })
}

/// Adds all values.
pub fn sum<K, T>(record: &Record<K, T>) -> T
where
    T: Copy + Sum<T>,
{
    record.values().copied().sum()
}

/// Returns the median of the values, or `0.0` for an empty record.
pub fn median<K>(record: &Record<K, f64>) -> f64 {
    let values: Vec<f64> = record.values().copied().collect();
    array::median(&values)
}

/// Returns `true` when the record has no entries.
#[inline]
pub fn is_empty<K, V>(record: &Record<K, V>) -> bool {
    record.is_empty()
}

/// Renders the record as `{key: value, ...}`.
pub fn show<K: Display, V: Display>(record: &Record<K, V>) -> String {
    show_with(&ShowOptions::record(), record, |key, value| {
        format!("{key}: {value}")
    })
}

/// Renders the record with custom delimiters and entry formatting.
///
/// # Examples
///
/// ```rust
/// use fnkit::collection::{ShowOptions, record::{self, Record}};
///
/// let env: Record<&str, &str> = Record::from([("HOME", "/root"), ("SHELL", "sh")]);
/// let options = ShowOptions { start: "", separator: "\n", end: "" };
/// let rendered = record::show_with(&options, &env, |key, value| format!("{key}={value}"));
/// assert_eq!(rendered, "HOME=/root\nSHELL=sh");
/// ```
pub fn show_with<K, V, F>(options: &ShowOptions<'_>, record: &Record<K, V>, entry: F) -> String
where
    F: Fn(&K, &V) -> String,
{
    options.render(record.iter().map(|(key, value)| entry(key, value)))
}

/// Drops the given keys.
pub fn excludes<K, V>(record: &Record<K, V>, keys: &[K]) -> Record<K, V>
where
    K: Clone + Hash + Eq,
    V: Clone,
{
    filter(record, |key, _, _| !keys.contains(key))
}

/// Sets `key` to `value`. An existing key keeps its position, a new key
/// goes last.
pub fn update_at<K, V>(record: &Record<K, V>, key: K, value: V) -> Record<K, V>
where
    K: Clone + Hash + Eq,
    V: Clone,
{
    let mut copy = record.clone();
    copy.insert(key, value);
    copy
}
