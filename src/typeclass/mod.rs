//! Type class traits for functional programming abstractions.
//!
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Lifting values and combining independent contexts
//! - [`Monad`]: Sequencing dependent computations
//! - [`Bifunctor`]: Mapping over both sides of a two-parameter type
//! - [`MonadError`]: Raising and handling errors inside a monad
//!
//! With the `control` feature every trait has an instance for
//! [`Try`](crate::control::Try). `Bifunctor` is also implemented for `Result`.
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native higher-kinded types. [`TypeConstructor`] uses
//! Generic Associated Types to name "the same constructor applied to another
//! type", which is what the traits above need.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::control::Try;
//! use fnkit::typeclass::{Applicative, Monad};
//!
//! let x: Try<i32> = <Try<()>>::pure(20);
//! let y = Monad::flat_map(x, |n| Try::Success(n + 22));
//! assert_eq!(y, Try::Success(42));
//! ```

mod applicative;
mod bifunctor;
mod functor;
mod higher;
mod monad;
mod monad_error;

pub use applicative::Applicative;
pub use bifunctor::Bifunctor;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use monad_error::MonadError;
