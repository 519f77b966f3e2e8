//! Interchange import/export tests against realistic files.

use pretty_assertions::assert_eq;
use snippet_formats::{BlockList, Field, SnippetRecord, interchange};

const EXPORTED: &str = "\
description: Log a value
trigger: log
snippet: console.log($1);

description: Arrow function
trigger: af
snippet: ($1) => { $0 }

description: Shell var
trigger: sv
snippet: echo ${HOME}: $(pwd)
";

#[test]
fn parses_exported_file() {
    let records = interchange::parse_all(EXPORTED);
    assert_eq!(
        records,
        vec![
            SnippetRecord::new("Log a value", "log", "console.log($1);"),
            SnippetRecord::new("Arrow function", "af", "($1) => { $0 }"),
            SnippetRecord::new("Shell var", "sv", "echo ${HOME}: $(pwd)"),
        ]
    );
}

#[test]
fn re_export_is_byte_identical() {
    let records = interchange::parse_all(EXPORTED);
    assert_eq!(interchange::serialize_all(&records), EXPORTED);
}

#[test]
fn import_appends_to_existing_blocks() {
    let mut blocks = BlockList::new();
    blocks.update(1, Field::Trigger, "existing");

    let ids = blocks.append_records(interchange::parse_all(EXPORTED));
    assert_eq!(ids, vec![2, 3, 4]);

    let exported = interchange::serialize_all(&blocks.records());
    assert!(exported.starts_with("description: \ntrigger: existing\nsnippet: \n\n"));

    // Re-importing keeps every non-empty block in order.
    let reparsed = interchange::parse_all(&exported);
    assert_eq!(reparsed.len(), 4);
    assert_eq!(reparsed[0].trigger, "existing");
    assert_eq!(reparsed[3].trigger, "sv");
}

#[test]
fn blank_blocks_are_not_reimported() {
    let mut blocks = BlockList::new();
    blocks.add_blank(2);
    let exported = interchange::serialize_all(&blocks.records());
    assert_eq!(
        exported,
        "description: \ntrigger: \nsnippet: \n\ndescription: \ntrigger: \nsnippet: \n\ndescription: \ntrigger: \nsnippet: \n"
    );
    assert!(interchange::parse_all(&exported).is_empty());
}

#[test]
fn per_record_exports_concatenate_cleanly() {
    let records = interchange::parse_all(EXPORTED);
    let joined: String = records
        .iter()
        .map(interchange::serialize_one)
        .collect::<Vec<_>>()
        .join("\n");
    assert_eq!(interchange::parse_all(&joined), records);
}
