//! Merge command: combine interchange files

use std::fs;
use std::path::{Path, PathBuf};

use colored::Colorize;
use snippet_formats::{BlockList, interchange};

use super::load_records;
use crate::error::Result;

/// Load every file into one block list, in argument order.
pub fn merge_files(paths: &[PathBuf]) -> Result<BlockList> {
    let mut blocks = BlockList::empty();
    for path in paths {
        blocks.append_records(load_records(path)?);
    }
    Ok(blocks)
}

/// Run the merge command
pub fn run_merge(paths: &[PathBuf], output: Option<&Path>) -> Result<()> {
    let blocks = merge_files(paths)?;
    let content = interchange::serialize_all(&blocks.records());

    match output {
        Some(out) => {
            fs::write(out, &content)?;
            println!(
                "{} Merged {} snippet(s) from {} file(s) into {}",
                "OK".green().bold(),
                blocks.len(),
                paths.len(),
                out.display()
            );
        }
        None => print!("{content}"),
    }

    Ok(())
}
