//! Command implementations for snippet-cli

pub mod completions;
pub mod export;
pub mod merge;
pub mod new;
pub mod render;

pub use completions::run_completions;
pub use export::run_export;
pub use merge::run_merge;
pub use new::run_new;
pub use render::run_render;

use std::fs;
use std::io::Read;
use std::path::Path;

use snippet_formats::{SnippetRecord, interchange, vscode};
use tracing::debug;

use crate::cli::OutputFormat;
use crate::error::{CliError, Result};

/// Read an interchange file, or stdin when `path` is "-".
pub(crate) fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| CliError::import("<stdin>", e))?;
        return Ok(content);
    }

    fs::read_to_string(path).map_err(|e| CliError::import(path, e))
}

/// Read and parse an interchange file.
pub(crate) fn load_records(path: &Path) -> Result<Vec<SnippetRecord>> {
    let records = interchange::parse_all(&read_input(path)?);
    debug!(path = %path.display(), count = records.len(), "Parsed interchange file");
    Ok(records)
}

/// Render a single record in the given output format.
pub(crate) fn render_one(record: &SnippetRecord, format: OutputFormat) -> Result<String> {
    let rendered = match (format, format.editor()) {
        (_, Some(editor)) => editor.render(record),
        (OutputFormat::Json, None) => vscode::code_snippets_json(record)?,
        (_, None) => interchange::serialize_one(record),
    };
    Ok(rendered)
}
