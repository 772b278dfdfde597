//! The grafted error value: message, cause side-chain, and context map.
//!
//! This module provides [`GraftError`], an immutable-after-construction
//! error node that wraps an underlying failure ([`GraftError::wrap`]) or a
//! fresh message ([`GraftError::new`]) and grafts onto it:
//! - a string-keyed [`Context`] map of diagnostic values, with the
//!   construction site recorded automatically under
//!   [`GraftError::LOCATION_KEY`],
//! - an optional *cause*: a second, independently attached error that is
//!   not part of the wrap chain (see [`crate::chain::cause`]).

use core::panic::Location;

use serde_json::Value;

use crate::types::{Context, ErrorRef, StringError};

mod traits;

/// An error value carrying a wrapped message, an optional cause, and context.
///
/// Built once through [`new`](GraftError::new)/[`wrap`](GraftError::wrap)
/// plus chained builder calls, then never mutated: every builder method
/// consumes `self` and there are no `&mut` setters.
///
/// The value has a distinguished *nil state* ([`GraftError::nil`], also
/// [`Default`]) representing "no error, not-nil type". It renders as
/// `<nil>`/`null`, compares nil-equivalent in [`crate::chain::is`], and
/// builder calls on it are no-ops.
///
/// # Examples
///
/// ```
/// use error_graft::GraftError;
///
/// let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing manifest");
/// let err = GraftError::wrap(io)
///     .with_cause(GraftError::new("registry offline"))
///     .with_context("attempt", 3);
///
/// assert_eq!(err.to_string(), "missing manifest");
/// assert!(err.cause().is_some());
/// ```
#[must_use]
#[derive(Clone, Default)]
pub struct GraftError {
    pub(crate) core: Option<Box<GraftCore>>,
}

#[derive(Clone)]
pub(crate) struct GraftCore {
    pub(crate) err: Option<ErrorRef>,
    pub(crate) cause: Option<ErrorRef>,
    pub(crate) context: Context,
}

impl GraftError {
    /// Context key under which the construction site is recorded.
    pub const LOCATION_KEY: &'static str = "location";

    /// Creates a message-only error, recording the caller as its location.
    ///
    /// The message is materialized as a [`StringError`] leaf, so
    /// [`source()`](std::error::Error::source) on the result yields a real
    /// error node.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_graft::GraftError;
    ///
    /// let err = GraftError::new("file not found");
    /// assert_eq!(err.to_string(), "file not found");
    /// ```
    #[track_caller]
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self::build(Some(ErrorRef::new(StringError::new(message))), Location::caller())
    }

    /// Wraps an existing error, recording the caller as its location.
    ///
    /// Anything `Error + Send + Sync + 'static` converts, including another
    /// [`GraftError`] or a shared [`ErrorRef`].
    #[track_caller]
    #[inline]
    pub fn wrap(err: impl Into<ErrorRef>) -> Self {
        Self::build(Some(err.into()), Location::caller())
    }

    /// Wraps an error that may be absent.
    ///
    /// `None` still produces a valid, non-nil-state value whose message
    /// renders as `<nil>`; use [`GraftError::nil`] for the nil state
    /// itself.
    #[track_caller]
    #[inline]
    pub fn wrap_opt(err: Option<ErrorRef>) -> Self {
        Self::build(err, Location::caller())
    }

    /// Returns the nil state: "no error, not-nil type".
    #[inline]
    pub fn nil() -> Self {
        Self { core: None }
    }

    fn build(err: Option<ErrorRef>, location: &'static Location<'static>) -> Self {
        let mut context = Context::new();
        context.insert(
            Self::LOCATION_KEY.to_owned(),
            Value::from(format!(
                "{}:{}:{}",
                location.file(),
                location.line(),
                location.column()
            )),
        );
        Self {
            core: Some(Box::new(GraftCore { err, cause: None, context })),
        }
    }

    /// Sets (or, on repeat, replaces) the cause side-chain error.
    ///
    /// The cause is reported by [`crate::chain::cause`] and searched by
    /// [`crate::chain::is`]/[`crate::chain::downcast_ref`], but it never
    /// appears in the plain message and is never returned by
    /// [`source()`](std::error::Error::source). Like every other builder
    /// method, the last call wins.
    #[inline]
    pub fn with_cause(mut self, cause: impl Into<ErrorRef>) -> Self {
        if let Some(core) = self.core.as_mut() {
            core.cause = Some(cause.into());
        }
        self
    }

    /// Inserts one context entry, overwriting any previous value for the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_graft::GraftError;
    ///
    /// let err = GraftError::new("boom")
    ///     .with_context("attempt", 1)
    ///     .with_context("attempt", 2);
    /// assert_eq!(err.context().unwrap()["attempt"], 2);
    /// ```
    #[inline]
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        if let Some(core) = self.core.as_mut() {
            core.context.insert(key.into(), value.into());
        }
        self
    }

    /// Merges a batch of context entries; later entries win per key.
    ///
    /// Pairs well with the [`context!`](crate::context) macro.
    #[inline]
    pub fn with_contexts<I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        if let Some(core) = self.core.as_mut() {
            core.context.extend(entries);
        }
        self
    }

    /// Removes the automatically recorded location entry.
    ///
    /// Useful when output must be position-independent, e.g. in golden
    /// string assertions.
    #[inline]
    pub fn without_location(mut self) -> Self {
        if let Some(core) = self.core.as_mut() {
            core.context.remove(Self::LOCATION_KEY);
        }
        self
    }

    /// Reports whether this is the nil state.
    #[inline]
    pub fn is_nil(&self) -> bool {
        self.core.is_none()
    }

    /// Returns the wrapped message error, if any.
    #[inline]
    pub fn wrapped(&self) -> Option<&ErrorRef> {
        self.core.as_deref().and_then(|core| core.err.as_ref())
    }

    /// Returns the cause side-chain error, if any.
    #[inline]
    pub fn cause(&self) -> Option<&ErrorRef> {
        self.core.as_deref().and_then(|core| core.cause.as_ref())
    }

    /// Returns the context map; `None` in the nil state.
    #[inline]
    pub fn context(&self) -> Option<&Context> {
        self.core.as_deref().map(|core| &core.context)
    }
}
