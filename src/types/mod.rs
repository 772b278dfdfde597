//! Core data types: the error value, the shared handle, and the leaf.

/// Shared, type-tagged error handle
pub mod error_ref;
/// The grafted error value
pub mod graft_error;
/// Message-only leaf error
pub mod string_error;

pub use error_ref::ErrorRef;
pub use graft_error::GraftError;
pub use string_error::StringError;

use std::collections::BTreeMap;

use serde_json::Value;

/// Context map attached to a [`GraftError`]: string keys, JSON-compatible
/// values, iterated in key order so rendered output is deterministic.
pub type Context = BTreeMap<String, Value>;
