//! New command: render one snippet from command-line fields

use snippet_formats::SnippetRecord;

use super::render_one;
use crate::cli::OutputFormat;
use crate::error::Result;

/// Run the new command
pub fn run_new(record: &SnippetRecord, format: OutputFormat) -> Result<()> {
    let rendered = render_one(record, format)?;
    if rendered.ends_with('\n') {
        print!("{rendered}");
    } else {
        println!("{rendered}");
    }
    Ok(())
}
