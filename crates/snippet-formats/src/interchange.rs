//! Interchange text format for bulk import and export.
//!
//! A file holds one record per chunk, chunks separated by a blank line:
//!
//! ```text
//! description: Log a value
//! trigger: log
//! snippet: console.log($1);
//!
//! description: Arrow function
//! trigger: af
//! snippet: ($1) => $0
//! ```
//!
//! Each field must fit on a single line. Values are split at the first
//! colon and trimmed, so multi-line bodies and padded values do not survive
//! a round trip; [`is_lossless`] reports such records.

use crate::record::SnippetRecord;
use tracing::{debug, warn};

const RECORD_SEPARATOR: &str = "\n\n";

const DESCRIPTION_KEY: &str = "description";
const TRIGGER_KEY: &str = "trigger";
const SNIPPET_KEY: &str = "snippet";

fn render_lines(record: &SnippetRecord) -> [String; 3] {
    [
        format!("{DESCRIPTION_KEY}: {}", record.description),
        format!("{TRIGGER_KEY}: {}", record.trigger),
        format!("{SNIPPET_KEY}: {}", record.snippet),
    ]
}

fn warn_if_lossy(record: &SnippetRecord) {
    if !is_lossless(record) {
        warn!(
            trigger = %record.trigger,
            "Record cannot be represented exactly in the interchange format"
        );
    }
}

/// Serialize a list of records, separated by blank lines, with a single
/// trailing newline.
pub fn serialize_all(records: &[SnippetRecord]) -> String {
    let chunks: Vec<String> = records
        .iter()
        .inspect(|record| warn_if_lossy(record))
        .map(|record| render_lines(record).join("\n"))
        .collect();

    let mut out = chunks.join(RECORD_SEPARATOR);
    out.push('\n');
    out
}

/// Serialize a single record, ending with a newline.
pub fn serialize_one(record: &SnippetRecord) -> String {
    warn_if_lossy(record);
    let mut out = render_lines(record).join("\n");
    out.push('\n');
    out
}

/// Whether `record` parses back unchanged after serialization.
///
/// Fails when a field holds a line break or leading/trailing whitespace,
/// or when every field is empty (such chunks are dropped on import).
pub fn is_lossless(record: &SnippetRecord) -> bool {
    !record.is_empty()
        && [&record.description, &record.trigger, &record.snippet]
            .iter()
            .all(|field| !field.contains(['\n', '\r']) && field.trim() == field.as_str())
}

/// Parse interchange text into records.
///
/// Never fails: lines without a colon are skipped, missing keys default to
/// empty strings, and chunks with every field empty are dropped.
pub fn parse_all(text: &str) -> Vec<SnippetRecord> {
    let normalized = text.replace("\r\n", "\n");

    normalized
        .split(RECORD_SEPARATOR)
        .map(parse_chunk)
        .filter(|record| !record.is_empty())
        .collect()
}

fn parse_chunk(chunk: &str) -> SnippetRecord {
    let mut record = SnippetRecord::default();

    for line in chunk.split('\n') {
        let Some((key, value)) = line.split_once(':') else {
            if !line.trim().is_empty() {
                debug!(line, "Skipping interchange line without a key");
            }
            continue;
        };

        let value = value.trim().to_string();
        match key.trim() {
            DESCRIPTION_KEY => record.description = value,
            TRIGGER_KEY => record.trigger = value,
            SNIPPET_KEY => record.snippet = value,
            "" => debug!(line, "Skipping interchange line with an empty key"),
            other => debug!(key = other, "Ignoring unknown interchange key"),
        }
    }

    record
}
