//! Control structures for fallible computation.
//!
//! This module provides:
//!
//! - [`Try`]: The outcome of a computation, either `Success` or `Failure`
//! - [`TryError`]: The default failure type captured by [`Try::new`]
//!
//! # Examples
//!
//! ```rust
//! use fnkit::control::{Try, TryError};
//!
//! fn divide(numerator: i32, denominator: i32) -> Try<i32> {
//!     Try::new(|| numerator / denominator)
//! }
//!
//! assert_eq!(divide(10, 2), Try::Success(5));
//!
//! let recovered = divide(1, 0)
//!     .map_error(|error| TryError::new(format!("cannot divide: {}", error.message())))
//!     .recover(|_| 0);
//! assert_eq!(recovered, Try::Success(0));
//! ```

mod attempt;
mod error;

pub use attempt::Try;
pub use error::TryError;
