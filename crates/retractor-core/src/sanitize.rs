//! String sanitization for extracted field values.
//!
//! PubMed text nodes occasionally carry literal `\t`/`\n`/`\r` escape
//! sequences as well as raw control characters; both are stripped before a
//! value enters a record. Sanitization is idempotent.

/// Sanitize a single field value.
///
/// Removes literal backslash-escape sequences first, then raw tab, newline,
/// and carriage-return characters, then trims surrounding whitespace.
pub fn sanitize(value: &str) -> String {
    value
        .replace("\\t", "")
        .replace("\\n", "")
        .replace("\\r", "")
        .replace(['\t', '\n', '\r'], "")
        .trim()
        .to_string()
}
