//! Monad type class - sequencing dependent computations.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fnkit::control::{Try, TryError};
//! use fnkit::typeclass::Monad;
//!
//! fn parse(input: &str) -> Try<i32> {
//!     input.parse::<i32>().map_err(|error| TryError::new(error.to_string())).into()
//! }
//!
//! let start: Try<&str> = Try::Success("20");
//! let total = start.and_then(parse).and_then(|n| Try::Success(n + 22));
//! assert_eq!(total, Try::Success(42));
//! ```

use super::applicative::Applicative;

/// A type class for sequencing computations where each step depends on the
/// previous result.
pub trait Monad: Applicative {
    /// Applies a function returning a new context and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first value.
    ///
    /// A failure in `self` wins over `next`.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

// =============================================================================
// Try<T, E> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<T, E: Clone> Monad for crate::control::Try<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> crate::control::Try<B, E>
    where
        F: FnOnce(T) -> crate::control::Try<B, E>,
    {
        // Resolves to the inherent method.
        Self::flat_map(self, function)
    }
}
