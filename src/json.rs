//! JSON rendering: the canonical encoder and the `Serialize` impls.
//!
//! Every error graph renders to one JSON shape:
//! - a [`GraftError`] node is an object with keys, in order, `Type`, `Err`
//!   (omitted when the message is absent or the nil state), `Context`
//!   (omitted when empty) and `Cause` (omitted when absent or the nil
//!   state); the nil state itself is `null`,
//! - a foreign node is `{"Type": ..., "Msg": ...}` plus a recursive `Err`
//!   entry when it has a `source()`.
//!
//! [`encode_json`] escapes `<`, `>` and `&` inside strings so the output
//! can be spliced into HTML contexts; a plain `serde_json::to_string`
//! produces the same structure without that escaping.

use std::error::Error as StdError;
use std::io;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::ser::Formatter;

use crate::types::{ErrorRef, GraftError, StringError};

/// Fallback `Type` string for nodes reached through `source()`, where the
/// concrete name was never captured.
const DYN_TYPE: &str = "dyn Error";

/// Renders any error to the crate's JSON shape, HTML-safely.
///
/// `None` encodes as `null`, as does the nil-state [`GraftError`].
///
/// # Examples
///
/// ```
/// use error_graft::{encode_json, GraftError, StringError};
///
/// let err = GraftError::new("boom").without_location().with_context("k", "v");
/// let graft_type = std::any::type_name::<GraftError>();
/// let leaf_type = std::any::type_name::<StringError>();
/// assert_eq!(
///     encode_json(Some(&err)),
///     format!(
///         r#"{{"Type":"{graft_type}","Err":{{"Type":"{leaf_type}","Msg":"boom"}},"Context":{{"k":"v"}}}}"#
///     )
/// );
/// assert_eq!(encode_json(None), "null");
/// ```
pub fn encode_json(err: Option<&(dyn StdError + 'static)>) -> String {
    let mut buf = Vec::with_capacity(128);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, HtmlSafeFormatter);
    // Writing to a Vec cannot fail and none of the Serialize impls below
    // error out; degrade to the null render all the same.
    if JsonView::root(err).serialize(&mut ser).is_err() {
        return String::from("null");
    }
    String::from_utf8(buf).unwrap_or_else(|_| String::from("null"))
}

impl Serialize for GraftError {
    /// Emits the JSON object shape; this is what embeds a `GraftError` in
    /// a caller's own serializable types.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let Some(context) = self.context() else {
            return serializer.serialize_none();
        };
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("Type", core::any::type_name::<GraftError>())?;
        if let Some(err) = self.wrapped() {
            if !nil_state(err) {
                map.serialize_entry("Err", &JsonView::of(err))?;
            }
        }
        if !context.is_empty() {
            map.serialize_entry("Context", context)?;
        }
        if let Some(cause) = self.cause() {
            if !nil_state(cause) {
                map.serialize_entry("Cause", &JsonView::of(cause))?;
            }
        }
        map.end()
    }
}

// A nil-state node is dropped from either field position; text modes still
// render it as `<nil>`.
fn nil_state(err: &ErrorRef) -> bool {
    err.downcast_ref::<GraftError>().is_some_and(GraftError::is_nil)
}

impl Serialize for StringError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("Type", core::any::type_name::<StringError>())?;
        map.serialize_entry("Msg", self.as_str())?;
        map.end()
    }
}

// One node of the error graph plus the best known name for it.
struct JsonView<'a> {
    err: Option<&'a (dyn StdError + 'static)>,
    type_name: &'static str,
}

impl<'a> JsonView<'a> {
    fn root(err: Option<&'a (dyn StdError + 'static)>) -> Self {
        Self { err, type_name: DYN_TYPE }
    }

    fn of(err: &ErrorRef) -> JsonView<'_> {
        JsonView { err: Some(err.as_dyn()), type_name: err.type_name() }
    }
}

impl Serialize for JsonView<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let Some(err) = self.err else {
            return serializer.serialize_none();
        };
        // Nodes of this crate render themselves; anything else becomes a
        // Type/Msg pair with its source chain nested under Err.
        if let Some(graft) = err.downcast_ref::<GraftError>() {
            return graft.serialize(serializer);
        }
        if let Some(leaf) = err.downcast_ref::<StringError>() {
            return leaf.serialize(serializer);
        }
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("Type", self.type_name)?;
        map.serialize_entry("Msg", &err.to_string())?;
        if let Some(source) = err.source() {
            map.serialize_entry("Err", &JsonView { err: Some(source), type_name: DYN_TYPE })?;
        }
        map.end()
    }
}

// serde_json's default string output with the three HTML-significant bytes
// `<`, `>` and `&` written as \u escapes.
struct HtmlSafeFormatter;

impl Formatter for HtmlSafeFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (i, byte) in fragment.bytes().enumerate() {
            let escape: &[u8] = match byte {
                b'<' => b"\\u003c",
                b'>' => b"\\u003e",
                b'&' => b"\\u0026",
                _ => continue,
            };
            if start < i {
                writer.write_all(fragment[start..i].as_bytes())?;
            }
            writer.write_all(escape)?;
            start = i + 1;
        }
        if start < fragment.len() {
            writer.write_all(fragment[start..].as_bytes())?;
        }
        Ok(())
    }
}
