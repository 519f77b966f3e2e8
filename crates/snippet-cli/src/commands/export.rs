//! Export command: write snippets to individual files

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use colored::Colorize;
use snippet_formats::{SnippetRecord, interchange};
use tracing::info;

use super::{load_records, render_one};
use crate::cli::OutputFormat;
use crate::error::Result;

/// File name used by `--bundle`
pub const BUNDLE_FILE: &str = "snippet.txt";

/// Options for the export command
#[derive(Debug, Clone)]
pub struct ExportOptions<'a> {
    pub out_dir: &'a Path,
    pub format: OutputFormat,
    pub bundle: bool,
    pub fallback_name: &'a str,
}

/// Turn a trigger into a file stem that stays inside the output directory.
///
/// Anything other than alphanumerics, `-`, `_` and `.` becomes `_`. Stems
/// that end up empty or made only of dots use `fallback`.
pub fn safe_file_stem(trigger: &str, fallback: &str) -> String {
    let stem: String = trigger
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' || c == '.' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if stem.chars().all(|c| c == '.') {
        fallback.to_string()
    } else {
        stem
    }
}

/// Pick a file name not yet in `used`, appending `-2`, `-3`, ... on clashes.
///
/// Names are compared case-insensitively since `Log` and `log` land on the
/// same file on macOS and Windows.
fn unique_file_name(stem: &str, extension: &str, used: &mut HashSet<String>) -> String {
    let mut name = format!("{stem}.{extension}");
    let mut counter = 2;
    while used.contains(&name.to_lowercase()) {
        name = format!("{stem}-{counter}.{extension}");
        counter += 1;
    }
    used.insert(name.to_lowercase());
    name
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    info!(path = %path.display(), "Wrote snippet file");
    println!("{} {}", "OK".green().bold(), path.display());
    Ok(())
}

/// Write `records` to files according to `options`, returning the paths.
pub fn export_records(records: &[SnippetRecord], options: &ExportOptions<'_>) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(options.out_dir)?;

    if options.bundle {
        let path = options.out_dir.join(BUNDLE_FILE);
        write_file(&path, &interchange::serialize_all(records))?;
        return Ok(vec![path]);
    }

    let extension = options.format.extension();
    let mut used = HashSet::new();
    let mut written = Vec::with_capacity(records.len());

    for record in records {
        let stem = safe_file_stem(record.file_stem(options.fallback_name), options.fallback_name);
        let path = options
            .out_dir
            .join(unique_file_name(&stem, extension, &mut used));

        let mut content = render_one(record, options.format)?;
        if !content.ends_with('\n') {
            content.push('\n');
        }
        write_file(&path, &content)?;
        written.push(path);
    }

    Ok(written)
}

/// Run the export command
pub fn run_export(path: &Path, options: &ExportOptions<'_>) -> Result<()> {
    let records = load_records(path)?;

    if records.is_empty() {
        eprintln!(
            "{} No snippets found in {}",
            "warning:".yellow().bold(),
            path.display()
        );
        return Ok(());
    }

    println!(
        "{} Exporting {} snippet(s) to {}",
        "=>".blue().bold(),
        records.len(),
        options.out_dir.display().to_string().cyan()
    );
    let written = export_records(&records, options)?;
    println!("{} {} file(s) written.", "Done".green().bold(), written.len());
    Ok(())
}
