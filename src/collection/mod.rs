//! Helpers over slices and insertion-ordered records.
//!
//! All helpers are free functions that borrow their input and return new
//! owned collections; nothing is mutated in place.
//!
//! - [`array`]: slice helpers (`chunk`, `zip`, `distinct`, `median`, ...)
//! - [`record`]: helpers over [`Record`](record::Record), an
//!   [`IndexMap`](indexmap::IndexMap) keeping insertion order
//!
//! # Examples
//!
//! ```rust
//! use fnkit::collection::{ShowOptions, array, record};
//! use indexmap::IndexMap;
//!
//! assert_eq!(array::show(&[1, 2, 3], &ShowOptions::default()), "[1,2,3]");
//!
//! let scores: IndexMap<&str, f64> = IndexMap::from([("ann", 3.0), ("bob", 5.0)]);
//! assert_eq!(record::median(&scores), 4.0);
//! ```

pub mod array;
pub mod record;

/// Delimiters used by the `show` helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShowOptions<'a> {
    /// Written before the first element.
    pub start: &'a str,
    /// Written between two elements.
    pub separator: &'a str,
    /// Written after the last element.
    pub end: &'a str,
}

impl ShowOptions<'static> {
    /// `[a,b]`
    pub const fn array() -> Self {
        Self {
            start: "[",
            separator: ",",
            end: "]",
        }
    }

    /// `{a: 1, b: 2}`
    pub const fn record() -> Self {
        Self {
            start: "{",
            separator: ", ",
            end: "}",
        }
    }
}

impl Default for ShowOptions<'static> {
    fn default() -> Self {
        Self::array()
    }
}

impl<'a> ShowOptions<'a> {
    /// Joins already rendered parts between `start` and `end`.
    pub(crate) fn render<I>(&self, parts: I) -> String
    where
        I: IntoIterator<Item = String>,
    {
        let mut output = String::from(self.start);
        for (index, part) in parts.into_iter().enumerate() {
            if index > 0 {
                output.push_str(self.separator);
            }
            output.push_str(&part);
        }
        output.push_str(self.end);
        output
    }

    /// Replaces the separator.
    #[must_use]
    pub const fn with_separator(self, separator: &'a str) -> Self {
        Self { separator, ..self }
    }
}
