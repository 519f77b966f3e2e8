//! Render command: print every snippet of an interchange file

use std::path::Path;

use colored::Colorize;
use snippet_formats::{SnippetRecord, interchange, vscode};

use super::{load_records, render_one};
use crate::cli::OutputFormat;
use crate::error::Result;

/// Render records as one text block, snippets separated by a blank line.
///
/// The text format uses the interchange serializer for the whole list so
/// the output can be imported again. The json format emits a single
/// `.code-snippets` document holding every record.
pub fn render_records(records: &[SnippetRecord], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => return Ok(interchange::serialize_all(records)),
        OutputFormat::Json => {
            let mut out = vscode::code_snippets_document(records)?;
            out.push('\n');
            return Ok(out);
        }
        _ => {}
    }

    let rendered = records
        .iter()
        .map(|record| render_one(record, format))
        .collect::<Result<Vec<_>>>()?;

    let mut out = rendered.join("\n\n");
    out.push('\n');
    Ok(out)
}

/// Run the render command
pub fn run_render(path: &Path, format: OutputFormat) -> Result<()> {
    let records = load_records(path)?;

    if records.is_empty() {
        eprintln!(
            "{} No snippets found in {}",
            "warning:".yellow().bold(),
            path.display()
        );
        return Ok(());
    }

    print!("{}", render_records(&records, format)?);
    Ok(())
}
