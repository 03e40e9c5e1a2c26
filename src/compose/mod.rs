//! Function helpers.
//!
//! - [`identity`]: returns its argument
//! - [`do_nothing`]: a no-op callback
//! - [`compose`]: runs one function after another
//! - [`negate`]: inverts a predicate
//!
//! # Examples
//!
//! ```
//! use fnkit::compose::{compose, negate};
//!
//! let trim_len = compose(str::trim, str::len);
//! assert_eq!(trim_len("  ab "), 2);
//!
//! let is_blank = compose(str::trim, str::is_empty);
//! let has_text = negate(is_blank);
//! assert!(has_text(" x "));
//! ```

mod utils;

pub use utils::{compose, do_nothing, identity, negate};
