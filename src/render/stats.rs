//! Section statistics.

use crate::model::{Block, InlineContent, Paragraph, Section, Table};
use serde::{Deserialize, Serialize};

/// Counts of the content in a converted section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionStats {
    /// Number of paragraphs, including those in table cells
    pub paragraph_count: u32,

    /// Number of headings
    pub heading_count: u32,

    /// Number of list items
    pub list_item_count: u32,

    /// Number of tables, including nested ones
    pub table_count: u32,

    /// Number of table rows
    pub row_count: u32,

    /// Number of table cells
    pub cell_count: u32,

    /// Number of text runs
    pub run_count: u32,

    /// Number of page breaks
    pub page_break_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl SectionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect statistics for a section.
    pub fn from_section(section: &Section) -> Self {
        let mut stats = Self::new();
        for block in &section.elements {
            stats.count_block(block);
        }
        stats
    }

    fn count_block(&mut self, block: &Block) {
        match block {
            Block::Paragraph(p) => self.count_paragraph(p),
            Block::Table(t) => self.count_table(t),
            Block::PageBreak => self.page_break_count += 1,
        }
    }

    fn count_paragraph(&mut self, paragraph: &Paragraph) {
        self.paragraph_count += 1;
        if paragraph.is_heading() {
            self.heading_count += 1;
        }
        if paragraph.is_list_item() {
            self.list_item_count += 1;
        }
        for content in &paragraph.content {
            if let InlineContent::Text(run) = content {
                self.run_count += 1;
                self.count_text(&run.text);
            }
        }
    }

    fn count_table(&mut self, table: &Table) {
        self.table_count += 1;
        for row in &table.rows {
            self.row_count += 1;
            for cell in &row.cells {
                self.cell_count += 1;
                for block in &cell.content {
                    self.count_block(block);
                }
            }
        }
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &SectionStats) {
        self.paragraph_count += other.paragraph_count;
        self.heading_count += other.heading_count;
        self.list_item_count += other.list_item_count;
        self.table_count += other.table_count;
        self.row_count += other.row_count;
        self.cell_count += other.cell_count;
        self.run_count += other.run_count;
        self.page_break_count += other.page_break_count;
        self.word_count += other.word_count;
        self.char_count += other.char_count;
    }
}
