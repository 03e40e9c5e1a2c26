//! Applicative type class - lifting values and combining independent contexts.
//!
//! # Laws
//!
//! ```text
//! pure(|x| x).apply(v) == v                       (identity)
//! pure(f).apply(pure(x)) == pure(f(x))            (homomorphism)
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)     (interchange)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fnkit::control::{Try, TryError};
//! use fnkit::typeclass::Applicative;
//!
//! let lifted: Try<i32> = <Try<()>>::pure(42);
//! assert_eq!(lifted, Try::Success(42));
//!
//! let width: Try<u32> = Try::Success(3);
//! let height: Try<u32> = Try::Success(4);
//! assert_eq!(width.map2(height, |w, h| w * h), Try::Success(12));
//! ```

use super::functor::Functor;

/// A type class for types that support lifting values and combining contexts.
pub trait Applicative: Functor {
    /// Lifts a pure value into the context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two values in the context with a binary function.
    ///
    /// The first failure (from `self`, then `other`) wins.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Pairs two values in the context.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |first, second| (first, second))
    }

    /// Applies a function held in the context to a value held in the context.
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// Try<T, E> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<T, E: Clone> Applicative for crate::control::Try<T, E> {
    #[inline]
    fn pure<B>(value: B) -> crate::control::Try<B, E> {
        crate::control::Try::Success(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: crate::control::Try<B, E>, function: F) -> crate::control::Try<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        use crate::control::Try;

        match (self, other) {
            (Try::Success(a), Try::Success(b)) => Try::Success(function(a, b)),
            (Try::Failure(error), _) | (_, Try::Failure(error)) => Try::Failure(error),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: crate::control::Try<B, E>) -> crate::control::Try<Output, E>
    where
        T: FnOnce(B) -> Output,
    {
        self.map2(other, |function, b| function(b))
    }
}
