//! Section-level types.

use super::{Paragraph, Table};
use serde::{Deserialize, Serialize};

/// A document section: an ordered list of blocks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Section {
    /// Content blocks in document order
    pub elements: Vec<Block>,
}

impl Section {
    /// Create a new empty section.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a block to the section.
    pub fn add_block(&mut self, block: Block) {
        self.elements.push(block);
    }

    /// Add a paragraph to the section.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.elements.push(Block::Paragraph(paragraph));
    }

    /// Add a table to the section.
    pub fn add_table(&mut self, table: Table) {
        self.elements.push(Block::Table(table));
    }

    /// Iterate over the top-level paragraphs.
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.elements.iter().filter_map(Block::as_paragraph)
    }

    /// Iterate over the top-level tables.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.elements.iter().filter_map(Block::as_table)
    }

    /// Get plain text content of the section.
    pub fn plain_text(&self) -> String {
        self.elements
            .iter()
            .filter_map(Block::plain_text)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Check if the section is empty (no content blocks).
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Get the number of blocks in the section.
    pub fn block_count(&self) -> usize {
        self.elements.len()
    }
}

/// A content block in a section or table cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A paragraph of text
    Paragraph(Paragraph),

    /// A table
    Table(Table),

    /// A page break
    PageBreak,
}

impl Block {
    /// Check if this block is a paragraph.
    pub fn is_paragraph(&self) -> bool {
        matches!(self, Block::Paragraph(_))
    }

    /// Check if this block is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, Block::Table(_))
    }

    /// Get the paragraph if this block is one.
    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            Block::Paragraph(p) => Some(p),
            _ => None,
        }
    }

    /// Get the table if this block is one.
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Block::Table(t) => Some(t),
            _ => None,
        }
    }

    /// Plain text of the block; page breaks have none.
    pub fn plain_text(&self) -> Option<String> {
        match self {
            Block::Paragraph(p) => Some(p.plain_text()),
            Block::Table(t) => Some(t.plain_text()),
            Block::PageBreak => None,
        }
    }
}
