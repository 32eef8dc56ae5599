//! Character references in attribute values.
//!
//! `lol_html` hands attribute values over as written in the source, so
//! `a.html?x=1&amp;y=2` still carries the `&amp;`. Links are resolved on the
//! decoded text and written back re-escaped.

use std::borrow::Cow;

use quick_xml::escape::{partial_escape, resolve_html5_entity, unescape_with};

/// Decodes named (HTML5) and numeric character references.
///
/// Values that do not form valid references (a bare `&` in a query string,
/// an unknown name) are returned as written.
pub fn decode_attribute(raw: &str) -> Cow<'_, str> {
    match unescape_with(raw, resolve_html5_entity) {
        Ok(decoded) => decoded,
        Err(e) => {
            tracing::trace!(value = raw, error = %e, "attribute kept undecoded");
            Cow::Borrowed(raw)
        }
    }
}

/// Escapes `&`, `<` and `>` for use as an attribute value. Quotes are
/// escaped by `lol_html` itself.
pub fn encode_attribute(value: &str) -> Cow<'_, str> {
    partial_escape(value)
}
