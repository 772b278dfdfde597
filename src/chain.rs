//! Chain-walking free functions over type-erased errors.
//!
//! Errors form a two-dimensional graph: the *wrap chain* reachable by
//! repeated [`source()`](std::error::Error::source) steps, and at every
//! [`GraftError`] node an optional *cause side-chain*. The functions here
//! traverse that graph without any state of their own:
//!
//! - [`cause`]: deepest distinct cause, or the error itself,
//! - [`is`]: referential-identity search across both dimensions,
//! - [`downcast_ref`]: type-directed search across both dimensions,
//! - [`unwrap`]: a single wrap-chain step.
//!
//! All functions accept `Option<&dyn Error>` so "no error at all" flows
//! through naturally, and a shared [`ErrorRef`](crate::ErrorRef) makes
//! identity observable through every wrapper holding it.

use std::error::Error as StdError;

use crate::types::GraftError;

/// Resolves the deepest cause reachable from `err`.
///
/// Walks the wrap chain one step at a time; whenever the current node is a
/// [`GraftError`] carrying a non-nil-state cause, the walk jumps to that
/// cause and never resumes the abandoned link's chain. Returns the last
/// cause jumped to; if no node on the walk carries one, returns `err`
/// itself. `None` in, `None` out.
///
/// # Examples
///
/// ```
/// use error_graft::{chain, GraftError};
///
/// let root = GraftError::new("root reason");
/// let mid = GraftError::new("mid layer").with_cause(root);
/// let err = GraftError::new("surface").with_cause(mid);
///
/// let deepest = chain::cause(Some(&err)).unwrap();
/// assert_eq!(deepest.to_string(), "root reason");
///
/// let plain = GraftError::new("no cause here");
/// assert_eq!(chain::cause(Some(&plain)).unwrap().to_string(), "no cause here");
/// assert!(chain::cause(None).is_none());
/// ```
pub fn cause<'a>(
    err: Option<&'a (dyn StdError + 'static)>,
) -> Option<&'a (dyn StdError + 'static)> {
    let root = err?;
    let mut deepest = root;
    let mut node = Some(root);
    while let Some(current) = node {
        match side_cause(current) {
            Some(cause) => {
                deepest = cause;
                node = Some(cause);
            }
            None => node = current.source(),
        }
    }
    Some(deepest)
}

/// Reports whether `target` is reachable from `err`.
///
/// `None` matches `None`; a present `err` matches a `None` target only
/// when it is nil-equivalent: the nil state, a wrapped-nothing value, or
/// any error whose rendered message is empty. Otherwise the search
/// compares by referential identity ([`core::ptr::addr_eq`]) while walking
/// the wrap chain and, at every [`GraftError`] node, recursing through the
/// cause side-chain.
///
/// Identity, not structural equality: two separately built errors with the
/// same text never match, while one shared [`ErrorRef`](crate::ErrorRef)
/// is found through every wrapper holding it.
///
/// # Examples
///
/// ```
/// use error_graft::{chain, ErrorRef, GraftError};
///
/// let shared = ErrorRef::new(std::io::Error::other("link down"));
/// let err = GraftError::new("sync failed").with_cause(shared.clone());
///
/// assert!(chain::is(Some(&err), Some(shared.as_dyn())));
///
/// let unrelated = GraftError::new("sync failed");
/// assert!(!chain::is(Some(&err), Some(&unrelated)));
/// ```
pub fn is(
    err: Option<&(dyn StdError + 'static)>,
    target: Option<&(dyn StdError + 'static)>,
) -> bool {
    match (err, target) {
        (None, None) => true,
        (None, Some(_)) => false,
        (Some(err), None) => nil_equivalent(err),
        (Some(err), Some(target)) => search(err, target),
    }
}

/// Finds the first `T` in the two-dimensional chain.
///
/// The search order at each node is the node itself, then its cause
/// subtree, then the next wrap-chain step. `None` in, `None` out.
///
/// # Examples
///
/// ```
/// use error_graft::{chain, GraftError};
///
/// let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "locked");
/// let err = GraftError::new("copy failed").with_cause(io);
///
/// let found = chain::downcast_ref::<std::io::Error>(Some(&err)).unwrap();
/// assert_eq!(found.kind(), std::io::ErrorKind::PermissionDenied);
/// assert!(chain::downcast_ref::<std::io::Error>(None).is_none());
/// ```
pub fn downcast_ref<'a, T>(err: Option<&'a (dyn StdError + 'static)>) -> Option<&'a T>
where
    T: StdError + 'static,
{
    find::<T>(err?)
}

/// Takes a single wrap-chain step via the node's own `source()`.
///
/// Never consults the cause side-chain; unwrapping a
/// [`GraftError::new`] value yields its
/// [`StringError`](crate::StringError) base.
///
/// # Examples
///
/// ```
/// use error_graft::{chain, GraftError, StringError};
///
/// let err = GraftError::new("boom");
/// let base = chain::unwrap(Some(&err)).unwrap();
/// assert!(base.is::<StringError>());
/// assert!(chain::unwrap(Some(base)).is_none());
/// ```
pub fn unwrap<'a>(
    err: Option<&'a (dyn StdError + 'static)>,
) -> Option<&'a (dyn StdError + 'static)> {
    err?.source()
}

// Capability probe: only GraftError nodes expose a cause, and a nil-state
// cause counts as unset.
fn side_cause<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a (dyn StdError + 'static)> {
    let graft = err.downcast_ref::<GraftError>()?;
    let cause = graft.cause()?;
    if cause.downcast_ref::<GraftError>().is_some_and(GraftError::is_nil) {
        return None;
    }
    Some(cause.as_dyn())
}

fn nil_equivalent(err: &(dyn StdError + 'static)) -> bool {
    if let Some(graft) = err.downcast_ref::<GraftError>() {
        // The nil state and a wrapped-nothing value both have no message
        // to report.
        if graft.wrapped().is_none() {
            return true;
        }
    }
    err.to_string().is_empty()
}

fn search(err: &(dyn StdError + 'static), target: &(dyn StdError + 'static)) -> bool {
    let mut node = Some(err);
    while let Some(current) = node {
        if core::ptr::addr_eq(current as *const _, target as *const _) {
            return true;
        }
        if let Some(cause) = side_cause(current) {
            if search(cause, target) {
                return true;
            }
        }
        node = current.source();
    }
    false
}

fn find<'a, T>(err: &'a (dyn StdError + 'static)) -> Option<&'a T>
where
    T: StdError + 'static,
{
    let mut node = Some(err);
    while let Some(current) = node {
        if let Some(found) = current.downcast_ref::<T>() {
            return Some(found);
        }
        if let Some(cause) = side_cause(current) {
            if let Some(found) = find::<T>(cause) {
                return Some(found);
            }
        }
        node = current.source();
    }
    None
}
