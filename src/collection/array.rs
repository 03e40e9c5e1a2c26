//! Slice helpers.
//!
//! Every helper borrows its input and returns a new collection. Helpers
//! that look at a named field work on [`Value`] records and compare field
//! values with [`are_equals`].
//!
//! # Examples
//!
//! ```rust
//! use fnkit::collection::array;
//!
//! let chunks = array::chunk(&[1, 2, 3, 4, 5], 2);
//! assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);
//!
//! assert_eq!(array::take_right(&[1, 2, 3], 2), vec![2, 3]);
//! assert_eq!(array::median(&[3.0, 1.0, 2.0, 10.0]), 2.5);
//! ```

use std::fmt::Display;
use std::hash::Hash;
use std::iter::Sum;

use indexmap::IndexSet;
use rand::Rng;
use rand::seq::SliceRandom;

use super::ShowOptions;
use crate::value::{Value, are_equals, is_not_nil};

// =============================================================================
// Construction
// =============================================================================

/// Returns `[0, 1, ..., length - 1]`.
pub fn range(length: usize) -> Vec<usize> {
    (0..length).collect()
}

/// Returns `[filler(0), ..., filler(length - 1)]`.
///
/// # Examples
///
/// ```rust
/// use fnkit::collection::array;
///
/// assert_eq!(array::range_with(3, |index| index * 10), vec![0, 10, 20]);
/// ```
pub fn range_with<T, F>(length: usize, filler: F) -> Vec<T>
where
    F: FnMut(usize) -> T,
{
    (0..length).map(filler).collect()
}

/// Splits `values` into chunks of `size` elements, the last one possibly
/// shorter.
///
/// A `size` of zero yields the whole slice as a single chunk.
pub fn chunk<T: Clone>(values: &[T], size: usize) -> Vec<Vec<T>> {
    if size == 0 {
        return vec![values.to_vec()];
    }
    values.chunks(size).map(<[T]>::to_vec).collect()
}

/// Returns `values` followed by `extra`.
pub fn append<T: Clone>(values: &[T], extra: &[T]) -> Vec<T> {
    values.iter().chain(extra).cloned().collect()
}

/// Returns `extra` followed by `values`.
pub fn prepend<T: Clone>(values: &[T], extra: &[T]) -> Vec<T> {
    append(extra, values)
}

// =============================================================================
// Access
// =============================================================================

/// Returns the last element.
#[inline]
pub const fn last<T>(values: &[T]) -> Option<&T> {
    values.last()
}

/// Returns `true` when `values` has no elements.
#[inline]
pub const fn is_empty<T>(values: &[T]) -> bool {
    values.is_empty()
}

/// Returns the first `length` elements.
pub fn take<T: Clone>(values: &[T], length: usize) -> Vec<T> {
    values[..length.min(values.len())].to_vec()
}

/// Returns the last `length` elements.
pub fn take_right<T: Clone>(values: &[T], length: usize) -> Vec<T> {
    values[values.len().saturating_sub(length)..].to_vec()
}

/// Returns a uniformly chosen element, or `None` for an empty slice.
pub fn pick<T>(values: &[T]) -> Option<&T> {
    pick_with(values, &mut rand::thread_rng())
}

/// [`pick`] with a caller supplied generator.
pub fn pick_with<'a, T, R>(values: &'a [T], rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    values.choose(rng)
}

// =============================================================================
// Pairing
// =============================================================================

/// Pairs elements by position, stopping at the shorter slice.
pub fn zip<A: Clone, B: Clone>(left: &[A], right: &[B]) -> Vec<(A, B)> {
    left.iter().cloned().zip(right.iter().cloned()).collect()
}

/// Pairs every element with its index.
pub fn zip_with_index<T: Clone>(values: &[T]) -> Vec<(T, usize)> {
    values
        .iter()
        .cloned()
        .enumerate()
        .map(|(index, value)| (value, index))
        .collect()
}

/// Splits pairs into two vectors.
pub fn unzip<A: Clone, B: Clone>(pairs: &[(A, B)]) -> (Vec<A>, Vec<B>) {
    pairs.iter().cloned().unzip()
}

/// Pairs every element of `left` with every element of `right`.
///
/// # Examples
///
/// ```rust
/// use fnkit::collection::array;
///
/// let pairs = array::cartesian_product(&[1, 2], &['a', 'b']);
/// assert_eq!(pairs, vec![(1, 'a'), (1, 'b'), (2, 'a'), (2, 'b')]);
/// ```
pub fn cartesian_product<A: Clone, B: Clone>(left: &[A], right: &[B]) -> Vec<(A, B)> {
    left.iter()
        .flat_map(|first| right.iter().map(move |second| (first.clone(), second.clone())))
        .collect()
}

// =============================================================================
// Numbers
// =============================================================================

/// Adds all elements.
pub fn sum<T>(values: &[T]) -> T
where
    T: Copy + Sum<T>,
{
    values.iter().copied().sum()
}

/// Returns the median, or `0.0` for an empty slice.
///
/// Even lengths average the two middle values.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let middle = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[middle - 1] + sorted[middle]) / 2.0
    } else {
        sorted[middle]
    }
}

// =============================================================================
// Deduplication
// =============================================================================

/// Removes duplicates by hash, keeping first occurrences in order.
pub fn distinct<T>(values: &[T]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    values
        .iter()
        .cloned()
        .collect::<IndexSet<T>>()
        .into_iter()
        .collect()
}

/// Keeps the first record for every distinct value of `field`.
///
/// Field values compare with [`are_equals`]; a missing field and a
/// non-object element both count as `undefined`.
///
/// # Examples
///
/// ```rust
/// use fnkit::collection::array;
/// use fnkit::value::Value;
///
/// let animals = [
///     Value::object([("animal", Value::from("cat")), ("size", Value::from(10))]),
///     Value::object([("animal", Value::from("cat")), ("size", Value::from(20))]),
///     Value::object([("animal", Value::from("dog")), ("size", Value::from(100))]),
/// ];
/// let kept = array::distinct_by_field(&animals, "animal");
/// assert_eq!(kept.len(), 2);
/// ```
pub fn distinct_by_field(records: &[Value], field: &str) -> Vec<Value> {
    let mut kept: Vec<&Value> = Vec::new();
    for record in records {
        let key = field_of(record, field);
        if !kept
            .iter()
            .any(|existing| are_equals(field_of(existing, field), key))
        {
            kept.push(record);
        }
    }
    kept.into_iter().cloned().collect()
}

/// Removes duplicates by `PartialEq`, keeping first occurrences in order.
pub fn uniq<T: Clone + PartialEq>(values: &[T]) -> Vec<T> {
    uniq_for(values, PartialEq::eq)
}

/// Removes duplicates according to `comparator`, keeping first occurrences.
pub fn uniq_for<T, F>(values: &[T], comparator: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    values
        .iter()
        .enumerate()
        .filter(|&(index, value)| {
            values
                .iter()
                .position(|other| comparator(value, other))
                .is_none_or(|first| first == index)
        })
        .map(|(_, value)| value.clone())
        .collect()
}

/// Removes elements whose key, as computed by `key`, was already seen.
///
/// # Examples
///
/// ```rust
/// use fnkit::collection::array;
///
/// let words = ["apple", "avocado", "banana"];
/// assert_eq!(array::uniq_by(&words, |word| word.chars().next()), vec!["apple", "banana"]);
/// ```
pub fn uniq_by<T, K, F>(values: &[T], key: F) -> Vec<T>
where
    T: Clone,
    K: PartialEq,
    F: Fn(&T) -> K,
{
    uniq_for(values, |left, right| key(left) == key(right))
}

// =============================================================================
// Editing
// =============================================================================

/// Removes every element equal to one of `to_exclude`.
pub fn excludes<T: Clone + PartialEq>(values: &[T], to_exclude: &[T]) -> Vec<T> {
    excludes_with(values, to_exclude, PartialEq::eq)
}

/// Removes every element that `comparator` matches against one of
/// `to_exclude`.
pub fn excludes_with<T, F>(values: &[T], to_exclude: &[T], comparator: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    values
        .iter()
        .filter(|&value| !to_exclude.iter().any(|excluded| comparator(value, excluded)))
        .cloned()
        .collect()
}

/// Returns a copy where the element at `index` is replaced by
/// `update(element)`. An out-of-range `index` returns an unchanged copy.
pub fn update_at<T, F>(values: &[T], index: usize, update: F) -> Vec<T>
where
    T: Clone,
    F: FnOnce(&T) -> T,
{
    let mut copy = values.to_vec();
    if let Some(slot) = copy.get_mut(index) {
        *slot = update(slot);
    }
    copy
}

/// Returns a copy where the element at `index` is `value`. An out-of-range
/// `index` returns an unchanged copy.
pub fn replace_at<T: Clone>(values: &[T], index: usize, value: T) -> Vec<T> {
    update_at(values, index, |_| value)
}

/// Returns a randomly reordered copy.
pub fn shuffle<T: Clone>(values: &[T]) -> Vec<T> {
    shuffle_with(values, &mut rand::thread_rng())
}

/// [`shuffle`] with a caller supplied generator.
pub fn shuffle_with<T, R>(values: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut copy = values.to_vec();
    copy.shuffle(rng);
    copy
}

// =============================================================================
// Rendering
// =============================================================================

/// Renders the elements between `options.start` and `options.end`.
///
/// # Examples
///
/// ```rust
/// use fnkit::collection::{ShowOptions, array};
///
/// let options = ShowOptions { start: "<", separator: "; ", end: ">" };
/// assert_eq!(array::show(&["a", "b"], &options), "<a; b>");
/// assert_eq!(array::show::<i32>(&[], &ShowOptions::default()), "[]");
/// ```
pub fn show<T: Display>(values: &[T], options: &ShowOptions<'_>) -> String {
    options.render(values.iter().map(ToString::to_string))
}

// =============================================================================
// Dynamic values
// =============================================================================

/// Drops nil values and inlines nested arrays by one level.
///
/// # Examples
///
/// ```rust
/// use fnkit::collection::array;
/// use fnkit::value::Value;
///
/// let nested = [Value::from(1), Value::Null, Value::array([2, 3])];
/// let flat = array::flatten(&nested);
/// assert_eq!(flat.len(), 3);
/// ```
pub fn flatten(values: &[Value]) -> Vec<Value> {
    values
        .iter()
        .filter(|value| is_not_nil(value))
        .flat_map(|value| match value {
            Value::Array(inner) => inner.clone(),
            other => vec![other.clone()],
        })
        .collect()
}

/// Groups records by the value of `field`, in order of first appearance.
pub fn group_by(records: &[Value], field: &str) -> Vec<Vec<Value>> {
    let mut groups: Vec<Vec<Value>> = Vec::new();
    for record in records {
        let key = field_of(record, field);
        match groups
            .iter_mut()
            .find(|group| group.first().is_some_and(|head| are_equals(field_of(head, field), key)))
        {
            Some(group) => group.push(record.clone()),
            None => groups.push(vec![record.clone()]),
        }
    }
    groups
}

static UNDEFINED: Value = Value::Undefined;

fn field_of<'a>(record: &'a Value, field: &str) -> &'a Value {
    record.get(field).unwrap_or(&UNDEFINED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::rstest;

    #[rstest]
    #[case(&[1, 2, 3, 4, 5], 2, vec![vec![1, 2], vec![3, 4], vec![5]])]
    #[case(&[1, 2], 5, vec![vec![1, 2]])]
    #[case(&[1, 2, 3], 0, vec![vec![1, 2, 3]])]
    #[case(&[], 3, vec![])]
    fn test_chunk(#[case] values: &[i32], #[case] size: usize, #[case] expected: Vec<Vec<i32>>) {
        assert_eq!(chunk(values, size), expected);
    }

    #[rstest]
    #[case(0, vec![])]
    #[case(2, vec![2, 3])]
    #[case(9, vec![1, 2, 3])]
    fn test_take_right(#[case] length: usize, #[case] expected: Vec<i32>) {
        assert_eq!(take_right(&[1, 2, 3], length), expected);
    }

    #[rstest]
    fn test_take_clamps_to_length() {
        assert_eq!(take(&[1, 2, 3], 2), vec![1, 2]);
        assert_eq!(take(&[1, 2, 3], 10), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_zip_truncates_to_shorter() {
        assert_eq!(zip(&[1, 2, 3], &["a"]), vec![(1, "a")]);
        assert_eq!(zip(&[1], &["a", "b"]), vec![(1, "a")]);
    }

    #[rstest]
    fn test_zip_with_index_and_unzip() {
        let indexed = zip_with_index(&["a", "b"]);
        assert_eq!(indexed, vec![("a", 0), ("b", 1)]);
        assert_eq!(unzip(&indexed), (vec!["a", "b"], vec![0, 1]));
    }

    #[rstest]
    #[case(&[], 0.0)]
    #[case(&[5.0], 5.0)]
    #[case(&[3.0, 1.0, 2.0], 2.0)]
    #[case(&[4.0, 1.0, 3.0, 2.0], 2.5)]
    fn test_median(#[case] values: &[f64], #[case] expected: f64) {
        assert!((median(values) - expected).abs() < f64::EPSILON);
    }

    #[rstest]
    fn test_median_does_not_reorder_input() {
        let values = [3.0, 1.0, 2.0];
        let _ = median(&values);
        assert_eq!(values, [3.0, 1.0, 2.0]);
    }

    #[rstest]
    fn test_distinct_keeps_first_occurrence() {
        assert_eq!(distinct(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
    }

    #[rstest]
    fn test_uniq_variants() {
        let names = ["miaous", "milo", "leo", "sylvester", "miaous"];
        assert_eq!(uniq(&names), vec!["miaous", "milo", "leo", "sylvester"]);
        assert_eq!(
            uniq_for(&names, |left, right| left.len() == right.len()),
            vec!["miaous", "milo", "leo", "sylvester"]
        );
        assert_eq!(uniq_by(&[1, 2, 3, 4], |n| n % 2), vec![1, 2]);
    }

    #[rstest]
    fn test_excludes() {
        assert_eq!(excludes(&[1, 2, 3, 2], &[2]), vec![1, 3]);
        assert_eq!(
            excludes_with(&["a", "B"], &["b"], |left, right| left.eq_ignore_ascii_case(right)),
            vec!["a"]
        );
    }

    #[rstest]
    fn test_update_and_replace_at() {
        assert_eq!(update_at(&[1, 2, 3], 1, |n| n * 10), vec![1, 20, 3]);
        assert_eq!(replace_at(&[1, 2, 3], 0, 9), vec![9, 2, 3]);
        assert_eq!(replace_at(&[1, 2, 3], 7, 9), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_append_and_prepend() {
        assert_eq!(append(&[1, 2], &[3]), vec![1, 2, 3]);
        assert_eq!(prepend(&[1, 2], &[0]), vec![0, 1, 2]);
    }

    #[rstest]
    fn test_pick() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(pick_with::<i32, _>(&[], &mut rng), None);
        let values = [10, 20, 30];
        let picked = pick_with(&values, &mut rng);
        assert!(picked.is_some_and(|value| values.contains(value)));
        assert!(pick(&values).is_some());
    }

    #[rstest]
    fn test_shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        let values: Vec<usize> = range(20);
        let mut shuffled = shuffle_with(&values, &mut rng);
        shuffled.sort_unstable();
        assert_eq!(shuffled, values);
    }

    #[rstest]
    fn test_show_uses_separator_between_elements() {
        assert_eq!(show(&[1, 2, 3], &ShowOptions::default()), "[1,2,3]");
        assert_eq!(show(&[1.5], &ShowOptions::default()), "[1.5]");
    }

    #[rstest]
    fn test_flatten_drops_nil_and_inlines_one_level() {
        let nested = [
            Value::from(1),
            Value::Undefined,
            Value::array([Value::from(2), Value::array([3])]),
            Value::Null,
        ];
        let expected = [
            Value::from(1),
            Value::from(2),
            Value::array([3]),
        ];
        let flat = flatten(&nested);
        assert!(are_equals(&Value::from(flat), &Value::array(expected)));
    }

    #[rstest]
    fn test_group_by_preserves_first_appearance() {
        let animals = [
            Value::object([("species", Value::from("cat")), ("size", Value::from(10))]),
            Value::object([("species", Value::from("dog")), ("size", Value::from(100))]),
            Value::object([("species", Value::from("cat")), ("size", Value::from(20))]),
            Value::object([("size", Value::from(1))]),
        ];
        let groups = group_by(&animals, "species");
        let sizes: Vec<Vec<f64>> = groups
            .iter()
            .map(|group| {
                group
                    .iter()
                    .filter_map(|animal| animal.get("size").and_then(Value::as_f64))
                    .collect()
            })
            .collect();
        assert_eq!(sizes, vec![vec![10.0, 20.0], vec![100.0], vec![1.0]]);
    }

    #[rstest]
    fn test_distinct_by_field_treats_missing_field_as_undefined() {
        let records = [
            Value::object([("id", 1)]),
            Value::object([("other", 1)]),
            Value::object([("id", 1)]),
            Value::from(5),
        ];
        let kept = distinct_by_field(&records, "id");
        assert_eq!(kept.len(), 2);
        assert!(kept[1].get("other").is_some());
    }
}
