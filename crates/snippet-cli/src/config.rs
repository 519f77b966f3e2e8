//! CLI configuration loaded from TOML
//!
//! Lookup order: `--config` / `SNIPPETS_CONFIG`, then
//! `<config_dir>/snippets/config.toml`. Only an explicitly named file is
//! required to exist.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::OutputFormat;
use crate::error::{CliError, Result};

/// Default config path relative to the platform config directory
const CONFIG_FILE: &str = "snippets/config.toml";

/// User configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Format used when a command gets no `--format`
    pub default_format: OutputFormat,
    /// File stem for exported snippets that have no trigger
    pub fallback_name: String,
    /// Directory `export` writes into when no `--out-dir` is given
    pub output_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Vscode,
            fallback_name: "snippet".to_string(),
            output_dir: None,
        }
    }
}

impl Config {
    /// Load configuration, falling back to defaults when no file exists.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(CliError::user(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            return Self::from_file(path);
        }

        match dirs::config_dir().map(|dir| dir.join(CONFIG_FILE)) {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Parse configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = toml::from_str(&content).map_err(|source| CliError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Resolve the output format, preferring the command-line value.
    pub fn format_or_default(&self, format: Option<OutputFormat>) -> OutputFormat {
        format.unwrap_or(self.default_format)
    }
}
