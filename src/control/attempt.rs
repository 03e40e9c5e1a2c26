//! Try type - the outcome of a computation that may fail.
//!
//! This module provides the `Try<T, E>` type, which is either a
//! `Success(T)` or a `Failure(E)`. A `Try` is created by running a
//! computation through [`Try::new`] or [`Try::attempt`]; those are the only
//! places where a failure is captured. Every other operation is a pure
//! transformation that returns a new `Try`.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::control::{Try, TryError};
//!
//! let parsed = Try::attempt(|| "42".parse::<i32>().map_err(|error| TryError::new(error.to_string())));
//! let doubled = parsed.map(|n| n * 2);
//! assert_eq!(doubled.get_or_else(0), 84);
//!
//! let failed: Try<i32> = Try::new(|| panic!("boom"));
//! assert_eq!(failed.recover(|_| -1).get_or_else(0), -1);
//! ```

use std::panic::{self, AssertUnwindSafe};

use super::error::TryError;

/// The outcome of a computation: either a value or a captured failure.
///
/// # Type Parameters
///
/// * `T` - The type of the successfully computed value
/// * `E` - The type of the captured failure, [`TryError`] by default
///
/// # Examples
///
/// ```rust
/// use fnkit::control::{Try, TryError};
///
/// let success: Try<i32> = Try::Success(42);
/// let failure: Try<i32> = Try::Failure(TryError::new("fail"));
///
/// assert_eq!(success.map(|x| x + 1), Try::Success(43));
/// assert_eq!(failure.clone().map(|x| x + 1), failure);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Try<T, E = TryError> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed.
    Failure(E),
}

static_assertions::assert_impl_all!(Try<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Try<String, String>: Send, Sync, Clone);

impl<T> Try<T> {
    /// Runs `block` and captures its outcome.
    ///
    /// Returns `Success` with the returned value, or `Failure` with a
    /// [`TryError::Panicked`] if `block` panics. The panic does not propagate
    /// past this call.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::control::{Try, TryError};
    ///
    /// assert_eq!(Try::new(|| 21 * 2), Try::Success(42));
    ///
    /// let failed: Try<i32> = Try::new(|| panic!("boom"));
    /// assert_eq!(failed, Try::Failure(TryError::Panicked { message: "boom".to_string() }));
    /// ```
    pub fn new<F>(block: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match panic::catch_unwind(AssertUnwindSafe(block)) {
            Ok(value) => Self::Success(value),
            Err(payload) => Self::Failure(captured(payload)),
        }
    }
}

impl<T, E> Try<T, E> {
    /// Runs a fallible `block` and captures its outcome.
    ///
    /// `Ok` becomes `Success`, `Err` becomes `Failure`. A panic inside `block`
    /// becomes a `Failure` holding `E::from(TryError::Panicked { .. })`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::control::{Try, TryError};
    ///
    /// let ok: Try<i32> = Try::attempt(|| Ok(1));
    /// assert_eq!(ok, Try::Success(1));
    ///
    /// let err: Try<i32> = Try::attempt(|| Err(TryError::new("nope")));
    /// assert_eq!(err.error_or_else(TryError::new("fallback")).message(), "nope");
    /// ```
    pub fn attempt<F>(block: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
        E: From<TryError>,
    {
        match panic::catch_unwind(AssertUnwindSafe(block)) {
            Ok(result) => result.into(),
            Err(payload) => Self::Failure(E::from(captured(payload))),
        }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Converts from `&Try<T, E>` to `Try<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Try<&T, &E> {
        match self {
            Self::Success(value) => Try::Success(value),
            Self::Failure(error) => Try::Failure(error),
        }
    }

    /// Returns the value of a `Success`, or `None`.
    #[inline]
    pub fn into_success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns the error of a `Failure`, or `None`.
    #[inline]
    pub fn into_failure(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Converts into a standard `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }

    /// Eliminates the `Try` by applying one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::control::{Try, TryError};
    ///
    /// let success: Try<i32> = Try::Success(2);
    /// assert_eq!(success.fold(|error| error.to_string(), |n| n.to_string()), "2");
    /// ```
    #[inline]
    pub fn fold<R, F, G>(self, on_failure: F, on_success: G) -> R
    where
        F: FnOnce(E) -> R,
        G: FnOnce(T) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    // =========================================================================
    // Composition
    // =========================================================================

    /// Transforms the value of a `Success`. A `Failure` passes through and
    /// `function` is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::control::Try;
    ///
    /// let value: Try<i32> = Try::Success(1);
    /// assert_eq!(value.map(|n| n.to_string()), Try::Success("1".to_string()));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Try<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Try::Success(function(value)),
            Self::Failure(error) => Try::Failure(error),
        }
    }

    /// Chains a computation that itself returns a `Try`.
    ///
    /// Equivalent to `self.map(function).flatten()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::control::{Try, TryError};
    ///
    /// let half = |n: i32| if n % 2 == 0 { Try::Success(n / 2) } else { Try::Failure(TryError::new("odd")) };
    /// assert_eq!(Try::Success(8).flat_map(half), Try::Success(4));
    /// assert!(Try::Success(3).flat_map(half).is_failure());
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Try<U, E>
    where
        F: FnOnce(T) -> Try<U, E>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Try::Failure(error),
        }
    }

    /// Transforms the error of a `Failure`. A `Success` passes through.
    #[inline]
    pub fn map_error<E2, F>(self, function: F) -> Try<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Success(value) => Try::Success(value),
            Self::Failure(error) => Try::Failure(function(error)),
        }
    }

    /// Turns a `Failure` into a `Success` computed from its error.
    /// `function` is never called on a `Success`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::control::{Try, TryError};
    ///
    /// let failed: Try<usize> = Try::Failure(TryError::new("four"));
    /// assert_eq!(failed.recover(|error| error.message().len()), Try::Success(4));
    /// ```
    #[inline]
    pub fn recover<F>(self, function: F) -> Self
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => Self::Success(function(error)),
        }
    }

    /// Replaces a `Failure` with the `Try` returned by `function`.
    /// `function` is never called on a `Success`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::control::{Try, TryError};
    ///
    /// let failed: Try<i32> = Try::Failure(TryError::new("x"));
    /// assert_eq!(failed.flat_recover(|_| Try::new(|| 42)), Try::Success(42));
    /// ```
    #[inline]
    pub fn flat_recover<E2, F>(self, function: F) -> Try<T, E2>
    where
        F: FnOnce(E) -> Try<T, E2>,
    {
        match self {
            Self::Success(value) => Try::Success(value),
            Self::Failure(error) => function(error),
        }
    }

    /// Returns the value of a `Success`, or `fallback`.
    #[inline]
    pub fn get_or_else(self, fallback: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => fallback,
        }
    }

    /// Returns the error of a `Failure`, or `fallback_error`.
    #[inline]
    pub fn error_or_else(self, fallback_error: E) -> E {
        match self {
            Self::Success(_) => fallback_error,
            Self::Failure(error) => error,
        }
    }
}

impl<T, E> Try<Try<T, E>, E> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::control::Try;
    ///
    /// let nested: Try<Try<i32>> = Try::new(|| Try::new(|| 7));
    /// assert_eq!(nested.flatten(), Try::Success(7));
    /// ```
    #[inline]
    pub fn flatten(self) -> Try<T, E> {
        match self {
            Self::Success(inner) => inner,
            Self::Failure(error) => Try::Failure(error),
        }
    }
}

fn captured(payload: Box<dyn std::any::Any + Send>) -> TryError {
    let error = TryError::from_panic(payload);
    tracing::debug!(panic_message = %error.message(), "captured panic from guarded computation");
    error
}

// =============================================================================
// Conversions
// =============================================================================

impl<T, E> From<Result<T, E>> for Try<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Try<T, E>> for Result<T, E> {
    #[inline]
    fn from(attempt: Try<T, E>) -> Self {
        match attempt {
            Try::Success(value) => Ok(value),
            Try::Failure(error) => Err(error),
        }
    }
}

/// Collects an iterator of `Try` values, stopping at the first failure.
///
/// # Examples
///
/// ```rust
/// use fnkit::control::{Try, TryError};
///
/// let all: Try<Vec<i32>> = vec![Try::Success(1), Try::Success(2)].into_iter().collect();
/// assert_eq!(all, Try::Success(vec![1, 2]));
///
/// let broken: Try<Vec<i32>> = vec![Try::Success(1), Try::Failure(TryError::new("x"))]
///     .into_iter()
///     .collect();
/// assert!(broken.is_failure());
/// ```
impl<T, E, C> FromIterator<Try<T, E>> for Try<C, E>
where
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Try<T, E>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Try::into_result)
            .collect::<Result<C, E>>()
            .into()
    }
}
