//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Try<_, E>` as a type
//! constructors directly. [`TypeConstructor`] names the applied type
//! (`Inner`) and the same constructor applied to another type (`WithType`),
//! which is enough to state `Functor` and `Monad` generically.

/// A trait representing a type constructor applied to `Inner`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F` itself.
///
/// # Example
///
/// ```rust
/// use fnkit::control::Try;
/// use fnkit::typeclass::TypeConstructor;
///
/// fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
/// assert_inner::<Try<i32>>();
/// assert_inner::<Try<i32, String>>();
/// ```
pub trait TypeConstructor {
    /// The type this constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

#[cfg(feature = "control")]
impl<T, E> TypeConstructor for crate::control::Try<T, E> {
    type Inner = T;
    type WithType<B> = crate::control::Try<B, E>;
}

#[cfg(all(test, feature = "control"))]
mod tests {
    use super::*;

    #[test]
    fn try_keeps_error_type_across_with_type() {
        use crate::control::{Try, TryError};

        fn assert_same<A, B>()
        where
            A: TypeConstructor<WithType<u8> = B>,
        {
        }

        assert_same::<Try<String, TryError>, Try<u8, TryError>>();
    }
}
