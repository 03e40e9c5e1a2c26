//! Error type captured by [`Try`](super::Try).
//!
//! A `TryError` is what a failed computation turns into once it crosses the
//! `Try::new` / `Try::attempt` boundary. It is ordinary data from then on.

use std::any::Any;

/// Placeholder message used when a panic payload is neither `&str` nor `String`.
const NON_STRING_PAYLOAD: &str = "<non-string panic payload>";

/// A failure captured by a [`Try`](super::Try).
///
/// # Examples
///
/// ```rust
/// use fnkit::control::TryError;
///
/// let error = TryError::new("division by zero");
/// assert_eq!(error.message(), "division by zero");
/// assert_eq!(format!("{error}"), "division by zero");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TryError {
    /// The guarded computation panicked.
    #[error("computation panicked: {message}")]
    Panicked {
        /// The panic message, when the payload carried one.
        message: String,
    },
    /// The error was raised explicitly by user code.
    #[error("{message}")]
    Raised {
        /// Human readable description of the failure.
        message: String,
    },
}

impl TryError {
    /// Creates a [`TryError::Raised`] with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self::Raised {
            message: message.into(),
        }
    }

    /// Returns the message carried by either variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::control::TryError;
    ///
    /// let error = TryError::Panicked { message: "boom".to_string() };
    /// assert_eq!(error.message(), "boom");
    /// ```
    pub fn message(&self) -> &str {
        match self {
            Self::Panicked { message } | Self::Raised { message } => message,
        }
    }

    /// Returns `true` if this error comes from a captured panic.
    #[inline]
    pub const fn is_panic(&self) -> bool {
        matches!(self, Self::Panicked { .. })
    }

    /// Converts a payload obtained from `catch_unwind` into a `TryError`.
    ///
    /// A `TryError` raised with `std::panic::panic_any` is returned unchanged.
    pub(crate) fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let payload = match payload.downcast::<Self>() {
            Ok(error) => return *error,
            Err(payload) => payload,
        };
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => payload
                .downcast_ref::<&str>()
                .map_or_else(|| NON_STRING_PAYLOAD.to_string(), |message| (*message).to_string()),
        };
        Self::Panicked { message }
    }
}

impl From<&str> for TryError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for TryError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}
