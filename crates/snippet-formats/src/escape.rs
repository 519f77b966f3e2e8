//! Format-specific escaping rules
//!
//! Each editor format treats a different set of characters as structural.
//! Bodies get format-specific escaping. Descriptions and triggers are only
//! folded onto one line and are otherwise interpolated unescaped.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Placeholder syntax Sublime Text would expand inside a snippet body:
/// a dollar sign, letters or an opening parenthesis, then a non-dollar.
static SUBLIME_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$[a-zA-Z(]+[^$]").expect("placeholder pattern is valid")
});

/// Escape a body for use inside double-quoted JSON-style string literals.
///
/// Backslashes are doubled before quotes are escaped, otherwise the
/// backslash introduced for a quote would itself be doubled.
pub fn quoted_string_body(body: &str) -> String {
    body.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Fold a header value onto one line, replacing each `\n` with a space.
///
/// Descriptions and triggers sit inline inside a quoted key or element, so
/// a raw line break would split the entry.
pub fn single_line(value: &str) -> Cow<'_, str> {
    if value.contains('\n') {
        Cow::Owned(value.replace('\n', " "))
    } else {
        Cow::Borrowed(value)
    }
}

/// Insert a backslash before every dollar sign that starts placeholder
/// syntax, so Sublime Text keeps it as literal text.
///
/// Matches are non-overlapping and scanned left to right. `$1` style
/// numbered fields are left alone.
pub fn sublime_placeholders(body: &str) -> String {
    SUBLIME_PLACEHOLDER.replace_all(body, r"\${0}").into_owned()
}
