//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use error_graft::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`context!`](crate::context)
//! - **Types**: [`GraftError`], [`ErrorRef`], [`StringError`], [`Context`], [`Value`]
//! - **Traits**: [`ResultExt`]
//! - **Functions**: the [`chain`] module and [`encode_json`]
//!
//! # Examples
//!
//! ```
//! use error_graft::prelude::*;
//!
//! fn load_config() -> Result<String, GraftError> {
//!     std::fs::read_to_string("config.toml")
//!         .graft_ctx("path", "config.toml")
//! }
//!
//! let err = load_config().unwrap_err();
//! assert!(chain::downcast_ref::<std::io::Error>(Some(&err)).is_some());
//! ```

// Macros
pub use crate::context;

// Core types
pub use crate::types::{Context, ErrorRef, GraftError, StringError};
pub use crate::Value;

// Traits
pub use crate::result_ext::ResultExt;

// Chain walking and rendering
pub use crate::chain;
pub use crate::json::encode_json;
