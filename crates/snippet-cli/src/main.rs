//! Snippet Converter CLI
//!
//! Converts interchange snippet files into editor snippet formats.

mod cli;
mod commands;
mod config;
mod error;
mod logging;

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use snippet_formats::SnippetRecord;

use cli::{Cli, Commands};
use commands::export::ExportOptions;
use config::Config;
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose)
        .map_err(|e| CliError::user(format!("Failed to set up logging: {e}")))?;

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Some(cmd) => execute_command(cmd, &config),
        None => {
            // No command provided - show help hint
            println!("{} Snippet Converter CLI", "snippets".green().bold());
            println!();
            println!("Run {} for available commands.", "snippets --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands, config: &Config) -> Result<()> {
    match cmd {
        Commands::Render { file, format } => {
            commands::run_render(&file, config.format_or_default(format))
        }
        Commands::Export {
            file,
            out_dir,
            format,
            bundle,
        } => {
            let out_dir = out_dir
                .or_else(|| config.output_dir.clone())
                .unwrap_or_else(|| PathBuf::from("."));
            let options = ExportOptions {
                out_dir: &out_dir,
                format: config.format_or_default(format),
                bundle,
                fallback_name: &config.fallback_name,
            };
            commands::run_export(&file, &options)
        }
        Commands::Merge { files, output } => commands::run_merge(&files, output.as_deref()),
        Commands::New {
            description,
            trigger,
            snippet,
            format,
        } => {
            let record = SnippetRecord::new(description, trigger, snippet);
            commands::run_new(&record, config.format_or_default(format))
        }
        Commands::Completions { shell } => commands::run_completions(shell),
    }
}
