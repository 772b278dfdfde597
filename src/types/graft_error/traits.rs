//! Trait implementations for [`GraftError`]: the render modes, the standard
//! error capabilities, and the debug dump.
//!
//! Render-mode dispatch follows the formatter flags:
//! - `{}`: the message's own text, `<nil>` for the nil state,
//! - `{:?}` / `{:#}`: the verbose struct dump, `{:#?}` its pretty form,
//! - `{:+}`: the JSON form produced by [`crate::json::encode_json`],
//! - `{:x}`, `{:X}`, `{:o}`, `{:b}`, `{:e}`, `{:E}`: explicit "unsupported
//!   verb" markers,
//! - `{:p}`: the address of the heap body, `0x0` for the nil state.

use core::fmt;
use std::error::Error as StdError;

use super::{GraftCore, GraftError};
use crate::types::ErrorRef;

const NIL_TOKEN: &str = "<nil>";

impl fmt::Display for GraftError {
    /// Renders the short message; `{:+}` switches to JSON, `{:#}` to the
    /// verbose dump.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.sign_plus() {
            return f.write_str(&crate::json::encode_json(Some(self)));
        }
        if f.alternate() {
            // Re-dispatch without the alternate flag to keep the dump on
            // one line, as `{:?}` produces it.
            return write!(f, "{self:?}");
        }
        match self.wrapped() {
            Some(err) => fmt::Display::fmt(err, f),
            None => f.write_str(NIL_TOKEN),
        }
    }
}

impl fmt::Debug for GraftError {
    /// Renders the verbose struct dump; nested errors use their own
    /// `Debug` form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.core.as_deref() {
            Some(core) => fmt::Debug::fmt(core, f),
            None => f.write_str(NIL_TOKEN),
        }
    }
}

impl fmt::Debug for GraftCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut dump = f.debug_struct("GraftError");
        match self.err.as_ref() {
            Some(err) => dump.field("err", &err.as_dyn()),
            None => dump.field("err", &Nil),
        };
        match self.cause.as_ref() {
            Some(cause) => dump.field("cause", &cause.as_dyn()),
            None => dump.field("cause", &Nil),
        };
        dump.field("context", &self.context);
        dump.finish()
    }
}

/// Debug token for absent fields, matching the short form's nil render.
struct Nil;

impl fmt::Debug for Nil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(NIL_TOKEN)
    }
}

impl fmt::Pointer for GraftError {
    /// Prints the address of the heap body; the nil state prints `0x0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.core.as_deref() {
            Some(core) => fmt::Pointer::fmt(&(core as *const GraftCore), f),
            None => f.write_str("0x0"),
        }
    }
}

// An error value has no numeric rendering. Misuse stays observable in the
// output instead of panicking: the marker names the verb and carries the
// full dump.
fn unsupported_verb(err: &GraftError, verb: char, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "%!{verb}({err:?})")
}

impl fmt::LowerHex for GraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        unsupported_verb(self, 'x', f)
    }
}

impl fmt::UpperHex for GraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        unsupported_verb(self, 'X', f)
    }
}

impl fmt::Octal for GraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        unsupported_verb(self, 'o', f)
    }
}

impl fmt::Binary for GraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        unsupported_verb(self, 'b', f)
    }
}

impl fmt::LowerExp for GraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        unsupported_verb(self, 'e', f)
    }
}

impl fmt::UpperExp for GraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        unsupported_verb(self, 'E', f)
    }
}

impl StdError for GraftError {
    /// One step into the wrap chain: the wrapped message, never the cause.
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.wrapped().map(ErrorRef::as_dyn)
    }
}
