//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};
use snippet_formats::EditorFormat;

/// Snippet Converter - Turn snippets into VSCode, Atom and Sublime Text formats
#[derive(Parser, Debug)]
#[command(name = "snippets")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a config file
    #[arg(long, global = true, env = "SNIPPETS_CONFIG")]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for rendered snippets
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// VSCode snippet entry
    Vscode,
    /// Atom CSON snippet entry
    Atom,
    /// Sublime Text XML snippet
    Sublime,
    /// Interchange text format
    Text,
    /// Standalone VSCode .code-snippets document
    Json,
}

impl OutputFormat {
    /// The editor formatter behind this output, if any.
    pub fn editor(&self) -> Option<EditorFormat> {
        match self {
            Self::Vscode => Some(EditorFormat::VSCode),
            Self::Atom => Some(EditorFormat::Atom),
            Self::Sublime => Some(EditorFormat::Sublime),
            Self::Text | Self::Json => None,
        }
    }

    /// File extension used when exporting one record per file.
    pub fn extension(&self) -> &'static str {
        match (self, self.editor()) {
            (_, Some(editor)) => editor.extension(),
            (Self::Json, None) => "code-snippets",
            (_, None) => "txt",
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Render every snippet of an interchange file
    ///
    /// Examples:
    ///   snippets render snippet.txt             # VSCode entries
    ///   snippets render snippet.txt -f sublime  # Sublime Text snippets
    ///   cat snippet.txt | snippets render -     # Read from stdin
    Render {
        /// Interchange file to read ("-" for stdin)
        file: PathBuf,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Write each snippet of an interchange file to its own file
    ///
    /// Files are named after the trigger, e.g. `log.sublime-snippet`.
    Export {
        /// Interchange file to read ("-" for stdin)
        file: PathBuf,

        /// Output directory (defaults to the configured directory or ".")
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Write all snippets into a single snippet.txt instead
        #[arg(long)]
        bundle: bool,
    },

    /// Combine interchange files into one
    ///
    /// Snippets are appended in argument order; empty ones are dropped.
    Merge {
        /// Interchange files to combine
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render a single snippet given on the command line
    New {
        /// Human-readable description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Trigger abbreviation
        #[arg(short, long, default_value = "")]
        trigger: String,

        /// Snippet body (use $'...' in bash for newlines)
        #[arg(short, long, default_value = "", allow_hyphen_values = true)]
        snippet: String,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Generate shell completions
    ///
    /// Examples:
    ///   snippets completions bash > ~/.local/share/bash-completion/completions/snippets
    ///   snippets completions zsh > ~/.zfunc/_snippets
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
