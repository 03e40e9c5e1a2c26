//! `MonadError` type class - raising and handling errors inside a monad.
//!
//! # Laws
//!
//! ```text
//! catch_error(throw_error(e), h) == h(e)
//! catch_error(pure(a), h) == pure(a)
//! throw_error(e).flat_map(f) == throw_error(e)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fnkit::control::{Try, TryError};
//! use fnkit::typeclass::MonadError;
//!
//! let failed: Try<i32> = <Try<i32>>::throw_error(TryError::new("boom"));
//! let handled = <Try<i32>>::handle_error(failed, |error| error.message().len() as i32);
//! assert_eq!(handled, Try::Success(4));
//! ```

use super::monad::Monad;

/// A monad that can raise an error of type `E` and recover from it.
pub trait MonadError<E>: Monad {
    /// Creates a failed computation.
    fn throw_error<A>(error: E) -> Self::WithType<A>;

    /// Replaces a failed computation with the one produced by `handler`.
    /// `handler` is not called on success.
    fn catch_error<A, F>(computation: Self::WithType<A>, handler: F) -> Self::WithType<A>
    where
        F: FnOnce(E) -> Self::WithType<A>;

    /// Lifts a `Result` into the monad.
    fn from_result<A>(result: Result<A, E>) -> Self::WithType<A>;

    /// Replaces a failed computation with `default`.
    #[inline]
    fn recover_with<A>(
        computation: Self::WithType<A>,
        default: Self::WithType<A>,
    ) -> Self::WithType<A> {
        Self::catch_error(computation, |_| default)
    }

    /// Transforms the error of a failed computation.
    #[inline]
    fn adapt_error<A, F>(computation: Self::WithType<A>, transform: F) -> Self::WithType<A>
    where
        F: FnOnce(E) -> E,
    {
        Self::catch_error(computation, |error| Self::throw_error(transform(error)))
    }

    /// Turns a failed computation into a successful one.
    #[inline]
    fn handle_error<A, F>(computation: Self::WithType<A>, handler: F) -> Self::WithType<A>
    where
        F: FnOnce(E) -> A,
    {
        Self::catch_error(computation, |error| Self::pure(handler(error)))
    }
}

// =============================================================================
// Try<T, E> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<T, E: Clone> MonadError<E> for crate::control::Try<T, E> {
    #[inline]
    fn throw_error<A>(error: E) -> crate::control::Try<A, E> {
        crate::control::Try::Failure(error)
    }

    #[inline]
    fn catch_error<A, F>(computation: crate::control::Try<A, E>, handler: F) -> crate::control::Try<A, E>
    where
        F: FnOnce(E) -> crate::control::Try<A, E>,
    {
        computation.flat_recover(handler)
    }

    #[inline]
    fn from_result<A>(result: Result<A, E>) -> crate::control::Try<A, E> {
        result.into()
    }
}

#[cfg(all(test, feature = "control"))]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn try_adapt_error_rewrites_message() {
        use crate::control::Try;

        let failed: Try<i32, String> = Try::Failure("e".to_string());
        let adapted = <Try<i32, String>>::adapt_error(failed, |error| format!("wrapped {error}"));
        assert_eq!(adapted, Try::Failure("wrapped e".to_string()));
    }

    #[rstest]
    fn try_catch_error_laws() {
        use crate::control::{Try, TryError};

        let handler = |error: TryError| Try::Success(error.message().len());
        let thrown = <Try<usize>>::throw_error::<usize>(TryError::new("abc"));
        assert_eq!(<Try<usize>>::catch_error(thrown, handler), Try::Success(3));

        let pure: Try<usize> = Try::Success(9);
        assert_eq!(<Try<usize>>::catch_error(pure, handler), Try::Success(9));
    }

    #[rstest]
    fn try_recover_with_uses_default_on_failure() {
        use crate::control::{Try, TryError};

        let failed: Try<i32> = Try::Failure(TryError::new("x"));
        assert_eq!(
            <Try<i32>>::recover_with(failed, Try::Success(0)),
            Try::Success(0)
        );
    }
}
