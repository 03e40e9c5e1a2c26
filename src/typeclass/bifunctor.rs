//! Bifunctor type class - mapping over two type parameters.
//!
//! # Laws
//!
//! ```text
//! bf.bimap(|x| x, |y| y) == bf
//! bf.bimap(|x| f2(f1(x)), |y| g2(g1(y))) == bf.bimap(f1, g1).bimap(f2, g2)
//! bf.bimap(f, g) == bf.first(f).second(g) == bf.second(g).first(f)
//! ```
//!
//! # Type Parameter Order
//!
//! `Result<T, E>` and `Try<T, E>` are implemented as `Bifunctor<E, T>`:
//! `first` transforms the error and `second` transforms the value, so that
//! `second` agrees with `Functor::fmap`.
//!
//! ```rust
//! use fnkit::control::{Try, TryError};
//! use fnkit::typeclass::{Bifunctor, Functor};
//!
//! let attempt: Try<i32> = Try::Success(21);
//! assert_eq!(attempt.clone().second(|n| n * 2), attempt.fmap(|n| n * 2));
//! ```

/// A type class for types with two type parameters that can both be mapped.
pub trait Bifunctor<A, B> {
    /// The resulting type after applying the transformation.
    type Target<C, D>;

    /// Applies two functions, one per type parameter.
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Applies a function to the first type parameter only.
    #[inline]
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        Self: Sized,
        F: FnOnce(A) -> C,
    {
        self.bimap(function, |second| second)
    }

    /// Applies a function to the second type parameter only.
    #[inline]
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        Self: Sized,
        G: FnOnce(B) -> D,
    {
        self.bimap(|first| first, function)
    }
}

impl<T, E> Bifunctor<E, T> for Result<T, E> {
    type Target<C, D> = Result<D, C>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Result<D, C>
    where
        F: FnOnce(E) -> C,
        G: FnOnce(T) -> D,
    {
        match self {
            Ok(value) => Ok(second_function(value)),
            Err(error) => Err(first_function(error)),
        }
    }
}

#[cfg(feature = "control")]
impl<T, E> Bifunctor<E, T> for crate::control::Try<T, E> {
    type Target<C, D> = crate::control::Try<D, C>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> crate::control::Try<D, C>
    where
        F: FnOnce(E) -> C,
        G: FnOnce(T) -> D,
    {
        self.map(second_function).map_error(first_function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn result_first_maps_error() {
        let failed: Result<i32, &str> = Err("four");
        assert_eq!(failed.first(str::len), Err(4));
    }

    #[cfg(feature = "control")]
    #[rstest]
    fn try_bimap_touches_one_side() {
        use crate::control::{Try, TryError};

        let failed: Try<i32> = Try::Failure(TryError::new("abc"));
        assert_eq!(
            failed.bimap(|error| error.message().len(), |n| n + 1),
            Try::Failure(3)
        );
    }
}
