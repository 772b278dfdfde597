//! Shared, type-tagged handle to an arbitrary error.
//!
//! [`ErrorRef`] is the currency the rest of the crate trades in:
//! construction ([`GraftError::wrap`](crate::GraftError::wrap),
//! [`with_cause`](crate::GraftError::with_cause)) accepts
//! `impl Into<ErrorRef>`, and a blanket [`From`] conversion covers every
//! `Error + Send + Sync + 'static` type. The handle remembers the concrete
//! type name, which is otherwise erased behind `dyn Error`, and clones
//! share the underlying allocation so one cause can back several wrapping
//! errors.

use core::fmt;
use std::error::Error as StdError;
use std::sync::Arc;

/// Cheaply cloneable reference to any `Error + Send + Sync + 'static`.
///
/// `ErrorRef` intentionally does **not** implement [`std::error::Error`]:
/// that keeps the blanket `From<E>` conversion coherent (a reflexive
/// `From<ErrorRef>` would otherwise collide with it) and pushes callers to
/// [`as_dyn`](ErrorRef::as_dyn) when a plain `&dyn Error` is needed.
///
/// # Examples
///
/// ```
/// use error_graft::ErrorRef;
///
/// let err = ErrorRef::new(std::io::Error::other("link down"));
/// assert_eq!(err.to_string(), "link down");
/// assert_eq!(err.type_name(), std::any::type_name::<std::io::Error>());
///
/// let shared = err.clone();
/// assert!(shared.ptr_eq(&err));
/// ```
#[derive(Clone)]
pub struct ErrorRef {
    err: Arc<dyn StdError + Send + Sync + 'static>,
    type_name: &'static str,
}

impl ErrorRef {
    /// Wraps a concrete error, capturing its type name.
    #[inline]
    pub fn new<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            err: Arc::new(err),
            type_name: core::any::type_name::<E>(),
        }
    }

    /// Returns the type name captured when the handle was created.
    ///
    /// This is the [`core::any::type_name`] of the concrete type and is
    /// what the JSON renderer reports as `Type`.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Borrows the error as a plain `&dyn Error` for chain walking.
    #[inline]
    pub fn as_dyn(&self) -> &(dyn StdError + 'static) {
        &*self.err
    }

    /// Attempts to downcast the referenced error to `T`.
    #[inline]
    pub fn downcast_ref<T>(&self) -> Option<&T>
    where
        T: StdError + 'static,
    {
        self.as_dyn().downcast_ref::<T>()
    }

    /// Reports whether two handles reference the same allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &ErrorRef) -> bool {
        core::ptr::addr_eq(Arc::as_ptr(&self.err), Arc::as_ptr(&other.err))
    }
}

impl<E> From<E> for ErrorRef
where
    E: StdError + Send + Sync + 'static,
{
    #[inline]
    fn from(err: E) -> Self {
        Self::new(err)
    }
}

impl fmt::Display for ErrorRef {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.err, f)
    }
}

impl fmt::Debug for ErrorRef {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.err, f)
    }
}
