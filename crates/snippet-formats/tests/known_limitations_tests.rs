//! Known limitations of the editor and interchange formats.
//!
//! Category: known-limitation
//! These tests pin behavior that produces broken or lossy output on purpose,
//! so that a change to it is a deliberate decision rather than an accident.

use pretty_assertions::assert_eq;
use snippet_formats::{SnippetRecord, atom, interchange, vscode};

#[test]
fn vscode_description_and_trigger_are_not_escaped() {
    let record = SnippetRecord::new(r#"say "hi""#, r#"q""#, "x");
    let output = vscode::format(&record);

    assert!(output.starts_with(r#""say "hi"": {"#));
    assert!(output.contains(r#"  "prefix": "q"","#));

    let wrapped = format!("{{{output}}}");
    assert!(
        serde_json::from_str::<serde_json::Value>(&wrapped).is_err(),
        "quotes in description/trigger are expected to break the entry"
    );
}

#[test]
fn vscode_code_snippets_document_has_no_such_limitation() {
    let record = SnippetRecord::new(r#"say "hi""#, r#"q""#, "x");
    let json = vscode::code_snippets_json(&record).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed[r#"q""#]["description"], r#"say "hi""#);
}

#[test]
fn atom_apostrophes_are_not_escaped() {
    let record = SnippetRecord::new("Don't panic", "it's", "x");
    let output = atom::format(&record);
    assert!(output.starts_with("'Don't panic':\n"));
    assert!(output.contains("  'prefix': 'it's'\n"));
}

#[test]
fn atom_triple_quote_in_body_is_not_escaped() {
    let record = SnippetRecord::new("d", "t", "\"\"\"docstring\"\"\"");
    assert!(atom::format(&record).contains("    \"\"\"docstring\"\"\"\n"));
}

#[test]
fn interchange_blank_line_in_snippet_splits_record() {
    let record = SnippetRecord::new("d", "t", "first\n\nsecond: part");
    assert!(!interchange::is_lossless(&record));

    let parsed = interchange::parse_all(&interchange::serialize_one(&record));
    // The tail becomes its own chunk with only an unknown key, which is dropped.
    assert_eq!(parsed, vec![SnippetRecord::new("d", "t", "first")]);
}

#[test]
fn interchange_value_padding_is_trimmed() {
    let record = SnippetRecord::new("d", "t", "    indented");
    assert!(!interchange::is_lossless(&record));
    let parsed = interchange::parse_all(&interchange::serialize_one(&record));
    assert_eq!(parsed[0].snippet, "indented");
}
