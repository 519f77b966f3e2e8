//! Editor snippet formatters for Snippet Converter.
//!
//! This crate turns a [`SnippetRecord`] (description, trigger, body) into the
//! snippet-definition syntax of several editors, and reads and writes the
//! blank-line-delimited interchange text format used for bulk import/export.
//!
//! # Architecture
//!
//! Every formatter is a pure, total function over string input:
//!
//! 1. **Editor formatters** - [`vscode`], [`atom`] and [`sublime`] each render
//!    a single record with the escaping rules of their target syntax.
//!
//! 2. **Interchange** - [`interchange`] serializes lists of records to text and
//!    parses them back.
//!
//! [`EditorFormat`] selects a formatter by name, and [`BlockList`] holds the
//! ordered, id-keyed records a front end edits.

pub mod atom;
pub mod blocks;
pub mod error;
pub mod escape;
pub mod format;
pub mod interchange;
pub mod record;
pub mod sublime;
pub mod vscode;

pub use atom::AtomFormatter;
pub use blocks::{Block, BlockList, Field};
pub use error::{Error, Result};
pub use format::{EditorFormat, SnippetFormatter};
pub use record::SnippetRecord;
pub use sublime::SublimeFormatter;
pub use vscode::VSCodeFormatter;
