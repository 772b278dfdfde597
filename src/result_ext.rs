//! Extension trait bridging `Result` into [`GraftError`].
//!
//! Adds wrap-and-annotate methods to any `Result` whose error type can
//! become an [`ErrorRef`](crate::ErrorRef), so call sites keep their
//! `?`-flow without `map_err` boilerplate. All methods are
//! `#[track_caller]`: the recorded location is the `.graft()` call site,
//! not this module.
//!
//! # Examples
//!
//! ```
//! use error_graft::{GraftError, ResultExt};
//!
//! fn load(path: &str) -> Result<String, GraftError> {
//!     std::fs::read_to_string(path).graft_ctx("path", path)
//! }
//!
//! assert!(load("definitely/not/here.toml").is_err());
//! ```

use std::error::Error as StdError;

use serde_json::Value;

use crate::types::GraftError;

/// Wrap-and-annotate methods for `Result`.
pub trait ResultExt<T> {
    /// Wraps the error side into a [`GraftError`].
    #[track_caller]
    fn graft(self) -> Result<T, GraftError>;

    /// Wraps the error side and attaches one context entry.
    #[track_caller]
    fn graft_ctx(self, key: impl Into<String>, value: impl Into<Value>) -> Result<T, GraftError>;

    /// Wraps the error side, then applies a builder closure.
    ///
    /// The closure runs only on the error path; the success path is a
    /// plain pass-through.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_graft::{GraftError, ResultExt};
    ///
    /// let denied = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "locked");
    /// let result: Result<(), _> = Err(denied);
    /// let err = result
    ///     .graft_with(|e| e.with_cause(GraftError::new("vault sealed")))
    ///     .unwrap_err();
    /// assert!(err.cause().is_some());
    /// ```
    #[track_caller]
    fn graft_with<F>(self, f: F) -> Result<T, GraftError>
    where
        F: FnOnce(GraftError) -> GraftError;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    #[track_caller]
    #[inline]
    fn graft(self) -> Result<T, GraftError> {
        match self {
            Ok(ok) => Ok(ok),
            Err(err) => Err(GraftError::wrap(err)),
        }
    }

    #[track_caller]
    #[inline]
    fn graft_ctx(self, key: impl Into<String>, value: impl Into<Value>) -> Result<T, GraftError> {
        match self {
            Ok(ok) => Ok(ok),
            Err(err) => Err(GraftError::wrap(err).with_context(key, value)),
        }
    }

    #[track_caller]
    #[inline]
    fn graft_with<F>(self, f: F) -> Result<T, GraftError>
    where
        F: FnOnce(GraftError) -> GraftError,
    {
        match self {
            Ok(ok) => Ok(ok),
            Err(err) => Err(f(GraftError::wrap(err))),
        }
    }
}
