//! Editor format selection and the formatter trait

use crate::atom::AtomFormatter;
use crate::error::{Error, Result};
use crate::record::SnippetRecord;
use crate::sublime::SublimeFormatter;
use crate::vscode::VSCodeFormatter;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Trait for editor snippet formatters.
///
/// Implementations are stateless and total: any record renders to a string,
/// never an error.
pub trait SnippetFormatter: Send + Sync {
    /// The format's slug identifier (e.g., "vscode", "sublime")
    fn name(&self) -> &str;

    /// File extension used when writing a single rendered snippet.
    fn extension(&self) -> &str;

    /// Render one record in this format.
    fn format(&self, record: &SnippetRecord) -> String;
}

/// Supported editor formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorFormat {
    /// VSCode JSON snippet entry
    VSCode,
    /// Atom CSON snippet entry
    Atom,
    /// Sublime Text XML snippet
    Sublime,
}

impl EditorFormat {
    pub const ALL: [EditorFormat; 3] = [Self::VSCode, Self::Atom, Self::Sublime];

    /// Get the formatter implementing this format.
    pub fn formatter(&self) -> &'static dyn SnippetFormatter {
        match self {
            Self::VSCode => &VSCodeFormatter,
            Self::Atom => &AtomFormatter,
            Self::Sublime => &SublimeFormatter,
        }
    }

    /// Render a record with this format's formatter.
    pub fn render(&self, record: &SnippetRecord) -> String {
        self.formatter().format(record)
    }

    pub fn name(&self) -> &'static str {
        self.formatter().name()
    }

    pub fn extension(&self) -> &'static str {
        self.formatter().extension()
    }
}

impl fmt::Display for EditorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EditorFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "vscode" | "code" => Ok(Self::VSCode),
            "atom" => Ok(Self::Atom),
            "sublime" | "sublime-text" | "sublimetext" => Ok(Self::Sublime),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}
