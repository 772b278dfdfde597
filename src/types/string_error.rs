//! Message-only leaf error.
//!
//! [`StringError`] materializes a plain string as a real error type, so
//! [`GraftError::new`](crate::GraftError::new) has a concrete leaf to wrap
//! and the chain walker has a node to stop at.

use core::fmt;

/// A leaf error carrying nothing but its message text.
///
/// # Examples
///
/// ```
/// use error_graft::StringError;
///
/// let err = StringError::new("disk offline");
/// assert_eq!(err.to_string(), "disk offline");
/// assert_eq!(format!("{err:?}"), r#"StringError("disk offline")"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringError(String);

impl StringError {
    /// Creates a leaf error from any string-like value.
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// Returns the message text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StringError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for StringError {}

impl From<&str> for StringError {
    #[inline]
    fn from(message: &str) -> Self {
        Self(message.into())
    }
}

impl From<String> for StringError {
    #[inline]
    fn from(message: String) -> Self {
        Self(message)
    }
}
