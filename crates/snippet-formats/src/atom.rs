//! Atom snippet formatter.
//!
//! Renders a CSON entry whose body is a triple-quoted block. Nothing is
//! escaped; every body line is indented to the block's column.

use crate::escape;
use crate::format::SnippetFormatter;
use crate::record::SnippetRecord;

const BODY_INDENT: &str = "    ";

/// Atom formatter.
#[derive(Debug, Default, Clone, Copy)]
pub struct AtomFormatter;

impl AtomFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl SnippetFormatter for AtomFormatter {
    fn name(&self) -> &str {
        "atom"
    }

    fn extension(&self) -> &str {
        "cson"
    }

    fn format(&self, record: &SnippetRecord) -> String {
        format(record)
    }
}

/// Render a record as an Atom snippet entry.
///
/// Description and trigger are folded onto one line and sit inside single
/// quotes unescaped, so an apostrophe in either breaks the entry.
pub fn format(record: &SnippetRecord) -> String {
    let mut out = String::with_capacity(record.snippet.len() + 64);
    out.push_str(&format!("'{}':\n", escape::single_line(&record.description)));
    out.push_str(&format!("  'prefix': '{}'\n", escape::single_line(&record.trigger)));
    out.push_str("  'body': \"\"\"\n");
    for line in record.snippet.split('\n') {
        out.push_str(BODY_INDENT);
        out.push_str(line);
        out.push('\n');
    }
    out.push_str("  \"\"\"");
    out
}
