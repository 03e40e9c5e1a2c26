//! Functor type class - mapping over container values.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fnkit::control::Try;
//! use fnkit::typeclass::Functor;
//!
//! let attempt: Try<i32> = Try::Success(5);
//! assert_eq!(attempt.fmap(|n| n.to_string()), Try::Success("5".to_string()));
//! ```

use super::higher::TypeConstructor;

/// A type class for types that can have a function mapped over their contents.
///
/// See the module documentation for the laws.
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor,
    /// leaving the original untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::control::Try;
    /// use fnkit::typeclass::Functor;
    ///
    /// let x: Try<String> = Try::Success("hello".to_string());
    /// assert_eq!(x.fmap_ref(|s| s.len()), Try::Success(5));
    /// assert!(x.is_success());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, keeping only its shape.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Try<T, E> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<T, E: Clone> Functor for crate::control::Try<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> crate::control::Try<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> crate::control::Try<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        self.as_ref().map(function).map_error(E::clone)
    }
}
