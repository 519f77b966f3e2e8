//! VSCode snippet formatter.
//!
//! Renders a record as one entry of a VSCode snippets file:
//!
//! ```text
//! "<description>": {
//!   "prefix": "<trigger>",
//!   "body": [
//!     "<line>"
//!   ],
//!   "description": "<description>"
//! }
//! ```
//!
//! Also builds the standalone `.code-snippets` JSON document.

use crate::error::Result;
use crate::escape;
use crate::format::SnippetFormatter;
use crate::record::SnippetRecord;
use serde::Serialize;
use std::collections::BTreeMap;

/// Key used in `.code-snippets` documents when the trigger is empty.
pub const UNTITLED_KEY: &str = "untitled";

/// VSCode formatter.
#[derive(Debug, Default, Clone, Copy)]
pub struct VSCodeFormatter;

impl VSCodeFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl SnippetFormatter for VSCodeFormatter {
    fn name(&self) -> &str {
        "vscode"
    }

    fn extension(&self) -> &str {
        "json"
    }

    fn format(&self, record: &SnippetRecord) -> String {
        format(record)
    }
}

/// Render a record as a VSCode snippet entry.
///
/// The body is escaped and split into one quoted line per source line.
/// Description and trigger are folded onto one line but otherwise
/// interpolated as-is, so a quote in either yields invalid JSON.
pub fn format(record: &SnippetRecord) -> String {
    let description = escape::single_line(&record.description);
    let trigger = escape::single_line(&record.trigger);
    let escaped = escape::quoted_string_body(&record.snippet);
    let lines: Vec<&str> = escaped.split('\n').collect();
    let last = lines.len() - 1;

    let mut out = String::with_capacity(escaped.len() + 96);
    out.push_str(&format!("\"{description}\": {{\n"));
    out.push_str(&format!("  \"prefix\": \"{trigger}\",\n"));
    out.push_str("  \"body\": [\n");
    for (index, line) in lines.iter().enumerate() {
        let comma = if index == last { "" } else { "," };
        out.push_str(&format!("    \"{line}\"{comma}\n"));
    }
    out.push_str("  ],\n");
    out.push_str(&format!("  \"description\": \"{description}\"\n"));
    out.push('}');
    out
}

#[derive(Serialize)]
struct CodeSnippetEntry<'a> {
    prefix: &'a str,
    body: Vec<&'a str>,
    description: &'a str,
}

/// Build a `.code-snippets` document holding a single record.
///
/// Unlike [`format`], every field goes through serde_json, so the output is
/// valid JSON for any input.
pub fn code_snippets_json(record: &SnippetRecord) -> Result<String> {
    code_snippets_document(std::slice::from_ref(record))
}

/// Build one `.code-snippets` document holding every record.
///
/// Entries are keyed by trigger (or [`UNTITLED_KEY`]) and sorted by key.
/// Repeated keys get `-2`, `-3`, ... suffixes so no record is dropped.
pub fn code_snippets_document(records: &[SnippetRecord]) -> Result<String> {
    let mut document = BTreeMap::new();

    for record in records {
        let base = if record.trigger.is_empty() {
            UNTITLED_KEY
        } else {
            record.trigger.as_str()
        };
        let mut key = base.to_string();
        let mut counter = 2;
        while document.contains_key(&key) {
            key = format!("{base}-{counter}");
            counter += 1;
        }

        document.insert(
            key,
            CodeSnippetEntry {
                prefix: &record.trigger,
                body: record.snippet.split('\n').collect(),
                description: &record.description,
            },
        );
    }

    Ok(serde_json::to_string_pretty(&document)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    #[test]
    fn test_name() {
        let formatter = VSCodeFormatter::new();
        assert_eq!(formatter.name(), "vscode");
        assert_eq!(formatter.extension(), "json");
    }

    #[test]
    fn test_simple_record() {
        let record = SnippetRecord::new("a", "b", "c");
        let expected = "\"a\": {\n  \"prefix\": \"b\",\n  \"body\": [\n    \"c\"\n  ],\n  \"description\": \"a\"\n}";
        assert_eq!(format(&record), expected);
    }

    #[test]
    fn test_empty_snippet_has_one_empty_line() {
        let record = SnippetRecord::new("d", "t", "");
        let output = format(&record);
        assert!(output.contains("  \"body\": [\n    \"\"\n  ],\n"));
    }

    #[test]
    fn test_multi_line_commas() {
        let record = SnippetRecord::new("d", "t", "one\ntwo\nthree");
        let output = format(&record);
        assert!(output.contains("    \"one\",\n    \"two\",\n    \"three\"\n  ],"));
    }

    #[test]
    fn test_trailing_newline_yields_empty_last_line() {
        let record = SnippetRecord::new("d", "t", "x\n");
        assert!(format(&record).contains("    \"x\",\n    \"\"\n"));
    }

    #[test]
    fn test_multi_line_header_fields_are_folded() {
        let record = SnippetRecord::new("Log\nvalue", "lo\ng", "c");
        let expected = "\"Log value\": {\n  \"prefix\": \"lo g\",\n  \"body\": [\n    \"c\"\n  ],\n  \"description\": \"Log value\"\n}";
        assert_eq!(format(&record), expected);

        let wrapped = format!("{{{}}}", format(&record));
        assert!(serde_json::from_str::<Value>(&wrapped).is_ok());
    }

    #[test]
    fn test_escapes_backslash_before_quote() {
        let record = SnippetRecord::new("d", "t", r#"\""#);
        assert!(format(&record).contains(r#"    "\\\""#));
    }

    #[test]
    fn test_code_snippets_json_structure() {
        let record = SnippetRecord::new("Log value", "log", "console.log($1);\n$0");
        let json = code_snippets_json(&record).unwrap();
        let parsed: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["log"]["prefix"], "log");
        assert_eq!(parsed["log"]["body"][0], "console.log($1);");
        assert_eq!(parsed["log"]["body"][1], "$0");
        assert_eq!(parsed["log"]["description"], "Log value");
    }

    #[test]
    fn test_code_snippets_json_field_order_and_indent() {
        let record = SnippetRecord::new("a", "b", "c");
        let json = code_snippets_json(&record).unwrap();
        let expected = "{\n  \"b\": {\n    \"prefix\": \"b\",\n    \"body\": [\n      \"c\"\n    ],\n    \"description\": \"a\"\n  }\n}";
        assert_eq!(json, expected);
    }

    #[test]
    fn test_code_snippets_json_untitled_key() {
        let record = SnippetRecord::new("d", "", "s");
        let parsed: Value = serde_json::from_str(&code_snippets_json(&record).unwrap()).unwrap();
        assert!(parsed.get(UNTITLED_KEY).is_some());
        assert_eq!(parsed[UNTITLED_KEY]["prefix"], "");
    }

    #[test]
    fn test_code_snippets_document_holds_every_record() {
        let records = vec![
            SnippetRecord::new("first", "log", "a"),
            SnippetRecord::new("second", "log", "b"),
            SnippetRecord::new("third", "", "c"),
        ];
        let parsed: Value =
            serde_json::from_str(&code_snippets_document(&records).unwrap()).unwrap();

        let object = parsed.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(parsed["log"]["description"], "first");
        assert_eq!(parsed["log-2"]["description"], "second");
        assert_eq!(parsed["log-2"]["prefix"], "log");
        assert_eq!(parsed[UNTITLED_KEY]["body"][0], "c");
    }

    #[test]
    fn test_code_snippets_document_empty() {
        assert_eq!(code_snippets_document(&[]).unwrap(), "{}");
    }

    #[test]
    fn test_code_snippets_json_escapes_all_fields() {
        let record = SnippetRecord::new(r#"say "hi""#, r#"q"t"#, r"a\b");
        let parsed: Value = serde_json::from_str(&code_snippets_json(&record).unwrap()).unwrap();
        assert_eq!(parsed[r#"q"t"#]["description"], r#"say "hi""#);
        assert_eq!(parsed[r#"q"t"#]["body"][0], r"a\b");
    }
}
