//! Error types for the value module.

use super::Category;

/// Represents errors raised by operations over [`Value`](super::Value)s.
///
/// # Examples
///
/// ```rust
/// use fnkit::value::{Category, ValueError};
///
/// let error = ValueError::UnsupportedEmptiness { category: Category::Function };
/// assert_eq!(error.to_string(), "unsupported emptiness test on a function value");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    /// Emptiness has no meaning for this category.
    #[error("unsupported emptiness test on a {category} value")]
    UnsupportedEmptiness {
        /// The category of the rejected value.
        category: Category,
    },
    /// The value cannot be expressed as JSON.
    #[error("a {category} value has no JSON representation")]
    NotRepresentable {
        /// The category of the rejected value.
        category: Category,
    },
}
