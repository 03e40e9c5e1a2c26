//! Small function combinators.

/// Returns the value unchanged.
///
/// `identity` is the unit of [`compose`]: composing it on either side of a
/// function leaves the function's behavior unchanged.
///
/// # Examples
///
/// ```
/// use fnkit::compose::{compose, identity};
///
/// assert_eq!(identity(42), 42);
///
/// let double = |x: i32| x * 2;
/// assert_eq!(compose(identity, double)(5), double(5));
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// Does nothing.
///
/// Useful where a callback is required but no work is needed.
#[inline]
pub const fn do_nothing() {}

/// Builds a function running `first` and then `second` on its result.
///
/// # Examples
///
/// ```
/// use fnkit::compose::compose;
///
/// let add_one = |n: i32| n + 1;
/// let double = |n: i32| n * 2;
///
/// // double(add_one(5))
/// assert_eq!(compose(add_one, double)(5), 12);
/// ```
#[inline]
pub fn compose<A, B, C, F, G>(first: F, second: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |input| second(first(input))
}

/// Builds a predicate returning the opposite of `predicate`.
///
/// # Examples
///
/// ```
/// use fnkit::compose::negate;
///
/// let is_odd = negate(|n: &i32| n % 2 == 0);
/// assert!(is_odd(&3));
/// assert!(!is_odd(&4));
/// ```
#[inline]
pub fn negate<I, P>(predicate: P) -> impl Fn(I) -> bool
where
    P: Fn(I) -> bool,
{
    move |input| !predicate(input)
}
