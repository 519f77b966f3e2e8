//! Sublime Text snippet formatter.
//!
//! Produces a `.sublime-snippet` XML document. The body goes into a CDATA
//! section at column zero with placeholder syntax escaped.

use crate::escape;
use crate::format::SnippetFormatter;
use crate::record::SnippetRecord;

/// Comment lines emitted after the description element.
const SCOPE_HINT: [&str; 2] = [
    "<!-- Optional: Set a scope to limit where the snippet will trigger -->",
    "<!-- <scope >source.python</scope > -->",
];

/// Sublime Text formatter.
#[derive(Debug, Default, Clone, Copy)]
pub struct SublimeFormatter;

impl SublimeFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl SnippetFormatter for SublimeFormatter {
    fn name(&self) -> &str {
        "sublime"
    }

    fn extension(&self) -> &str {
        "sublime-snippet"
    }

    fn format(&self, record: &SnippetRecord) -> String {
        format(record)
    }
}

/// Render a record as a Sublime Text snippet document.
///
/// Trigger and description are folded onto one line but neither escaped
/// nor entity-encoded.
pub fn format(record: &SnippetRecord) -> String {
    let body = escape::sublime_placeholders(&record.snippet);

    let mut out = String::with_capacity(body.len() + 256);
    out.push_str("<snippet>\n");
    out.push_str("  <content><![CDATA[\n");
    out.push_str(&body);
    out.push('\n');
    out.push_str("]]></content>\n");
    out.push_str(&format!(
        "  <trigger>{}</trigger>\n",
        escape::single_line(&record.trigger)
    ));
    out.push_str(&format!(
        "  <description>{}</description>\n",
        escape::single_line(&record.description)
    ));
    for comment in SCOPE_HINT {
        out.push_str("  ");
        out.push_str(comment);
        out.push('\n');
    }
    out.push_str("</snippet>");
    out
}
