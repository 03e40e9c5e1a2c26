//! # fnkit
//!
//! Functional helpers for Rust.
//!
//! ## Overview
//!
//! - **Try**: a result wrapper that captures panics and chains fallible
//!   steps (`map`, `flat_map`, `recover`, ...)
//! - **Type Classes**: Functor, Applicative, Monad, Bifunctor and
//!   `MonadError` instances for `Try`
//! - **Dynamic Values**: a `Value` model with runtime categories, type
//!   predicates, emptiness and structural deep equality
//! - **Collections**: slice and insertion-ordered record helpers
//! - **Function Helpers**: `identity`, `do_nothing`, `compose`, `negate`
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits
//! - `control`: `Try` and `TryError`
//! - `value`: `Value`, predicates and `are_equals`
//! - `collection`: array and record helpers
//! - `compose`: function helpers
//! - `serde`: serde support and JSON conversion for `Value`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fnkit::prelude::*;
//!
//! let parsed: Try<i32> = Try::new(|| "42".parse::<i32>().unwrap_or_default());
//! assert_eq!(parsed.map(|n| n + 1).get_or_else(0), 43);
//!
//! let left = Value::array([1, 2]);
//! let right = Value::array([1, 2]);
//! assert!(are_equals(&left, &right));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports every enabled module.
///
/// # Usage
///
/// ```rust
/// use fnkit::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "value")]
    pub use crate::value::*;

    #[cfg(feature = "collection")]
    pub use crate::collection::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "value")]
pub mod value;

#[cfg(feature = "collection")]
pub mod collection;
