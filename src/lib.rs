//! Graft structured diagnostics onto any error.
//!
//! `error_graft` wraps a failure (an existing error or a fresh message)
//! into a [`GraftError`] carrying three things the plain error cannot:
//!
//! - a **context map**: string-keyed [`Value`]s, with the construction site
//!   recorded automatically under `"location"`,
//! - an optional **cause side-chain**: a second, independently attached
//!   error naming the deeper reason without becoming part of the wrap
//!   chain,
//! - four **render modes** from one value: the short message (`{}`), a
//!   verbose struct dump (`{:?}`/`{:#}`), JSON (`{:+}` or [`encode_json`]),
//!   and explicit markers for unsupported verbs.
//!
//! The free functions in [`chain`] resolve the deepest
//! [`cause`](chain::cause), test reachability by identity
//! ([`is`](chain::is)), extract concrete types
//! ([`downcast_ref`](chain::downcast_ref)) and step wrap chains
//! ([`unwrap`](chain::unwrap)), over this crate's values and foreign
//! `std::error::Error`s alike.
//!
//! # Examples
//!
//! ## Wrapping with a cause and context
//!
//! ```
//! use error_graft::{chain, GraftError};
//!
//! fn fetch() -> Result<(), GraftError> {
//!     let timeout = std::io::Error::new(std::io::ErrorKind::TimedOut, "deadline exceeded");
//!     Err(GraftError::new("fetching manifest failed")
//!         .with_cause(timeout)
//!         .with_context("url", "https://crates.io/api/v1"))
//! }
//!
//! let err = fetch().unwrap_err();
//! assert_eq!(err.to_string(), "fetching manifest failed");
//!
//! // The cause stays out of the message but is reachable by the walker.
//! let root = chain::cause(Some(&err)).unwrap();
//! assert_eq!(root.to_string(), "deadline exceeded");
//! assert!(chain::downcast_ref::<std::io::Error>(Some(&err)).is_some());
//! ```
//!
//! ## JSON rendering
//!
//! ```
//! use error_graft::{encode_json, GraftError};
//!
//! let err = GraftError::new("boom").without_location().with_context("k", "<v>");
//! let json = encode_json(Some(&err));
//! assert!(json.contains("\"Context\":{\"k\":\"\\u003cv\\u003e\"}"));
//! ```

/// Chain-walking free functions: cause, is, downcast_ref, unwrap
pub mod chain;
/// JSON rendering and the canonical HTML-safe encoder
pub mod json;
/// Context-map macros
mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Result-to-GraftError bridge
pub mod result_ext;
/// Core data types
pub mod types;

pub use chain::{cause, downcast_ref, is, unwrap};
pub use json::encode_json;
pub use result_ext::ResultExt;
pub use serde_json::Value;
pub use types::{Context, ErrorRef, GraftError, StringError};
