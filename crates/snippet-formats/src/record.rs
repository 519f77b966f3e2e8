//! The snippet record shared by every formatter

use serde::{Deserialize, Serialize};

/// A user-authored snippet.
///
/// Records are built by the caller (from command-line input or from
/// interchange parsing) and passed by reference into formatters, which
/// never mutate them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SnippetRecord {
    /// Free-form human label
    pub description: String,
    /// Abbreviation typed to expand the snippet
    pub trigger: String,
    /// Body text, may span several lines and contain placeholders like `$1`
    pub snippet: String,
}

impl SnippetRecord {
    pub fn new(
        description: impl Into<String>,
        trigger: impl Into<String>,
        snippet: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            trigger: trigger.into(),
            snippet: snippet.into(),
        }
    }

    /// True when all three fields are empty.
    pub fn is_empty(&self) -> bool {
        self.description.is_empty() && self.trigger.is_empty() && self.snippet.is_empty()
    }

    /// File stem used when exporting this record, falling back when the
    /// trigger is empty.
    pub fn file_stem<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.trigger.is_empty() {
            fallback
        } else {
            &self.trigger
        }
    }
}
