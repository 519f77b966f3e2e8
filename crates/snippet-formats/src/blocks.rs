//! Ordered, id-keyed list of snippet blocks
//!
//! Front ends edit snippets as numbered blocks. Ids are assigned
//! monotonically and never reused within a list.

use crate::record::SnippetRecord;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A record together with its list-local identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub id: u64,
    #[serde(flatten)]
    pub record: SnippetRecord,
}

/// Editable field of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Description,
    Trigger,
    Snippet,
}

/// Ordered collection of blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockList {
    blocks: Vec<Block>,
    last_id: u64,
}

impl BlockList {
    /// A list holding one empty block with id 1.
    pub fn new() -> Self {
        let mut list = Self::empty();
        list.add_blank(1);
        list
    }

    /// A list with no blocks.
    pub fn empty() -> Self {
        Self {
            blocks: Vec::new(),
            last_id: 0,
        }
    }

    /// A list holding `records` with ids starting at 1.
    pub fn from_records(records: impl IntoIterator<Item = SnippetRecord>) -> Self {
        let mut list = Self::empty();
        list.append_records(records);
        list
    }

    fn next_id(&mut self) -> u64 {
        self.last_id += 1;
        self.last_id
    }

    fn push(&mut self, record: SnippetRecord) -> u64 {
        let id = self.next_id();
        self.blocks.push(Block { id, record });
        id
    }

    /// Append `count` empty blocks, returning their ids.
    pub fn add_blank(&mut self, count: usize) -> Vec<u64> {
        (0..count).map(|_| self.push(SnippetRecord::default())).collect()
    }

    /// Append imported records after the existing blocks, returning their ids.
    pub fn append_records(&mut self, records: impl IntoIterator<Item = SnippetRecord>) -> Vec<u64> {
        let ids: Vec<u64> = records.into_iter().map(|record| self.push(record)).collect();
        debug!(count = ids.len(), "Appended records to block list");
        ids
    }

    /// Remove the block with `id`.
    pub fn remove(&mut self, id: u64) -> Option<Block> {
        let index = self.blocks.iter().position(|block| block.id == id)?;
        Some(self.blocks.remove(index))
    }

    /// Keep only the first `target_count` blocks.
    pub fn truncate(&mut self, target_count: usize) {
        self.blocks.truncate(target_count);
    }

    /// Set one field of the block with `id`. Returns false if no such block.
    pub fn update(&mut self, id: u64, field: Field, value: impl Into<String>) -> bool {
        let Some(block) = self.blocks.iter_mut().find(|block| block.id == id) else {
            return false;
        };
        let slot = match field {
            Field::Description => &mut block.record.description,
            Field::Trigger => &mut block.record.trigger,
            Field::Snippet => &mut block.record.snippet,
        };
        *slot = value.into();
        true
    }

    pub fn get(&self, id: u64) -> Option<&Block> {
        self.blocks.iter().find(|block| block.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Records in list order, cloned for formatting or export.
    pub fn records(&self) -> Vec<SnippetRecord> {
        self.blocks.iter().map(|block| block.record.clone()).collect()
    }
}

impl Default for BlockList {
    fn default() -> Self {
        Self::new()
    }
}
