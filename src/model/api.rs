//! The document model interface the converter writes into.
//!
//! The converter never holds on to document nodes. It asks the model to
//! create them and gets back small copyable handles, valid for as long as
//! the model says so. Calls are made in document order.

use super::{CellStyle, ListInfo, ParagraphStyle, RowStyle, TableStyle, TextStyle};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Handle to a paragraph created by a [`DocumentModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParagraphId(pub usize);

/// Handle to a table created by a [`DocumentModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableId(pub usize);

/// Handle to a table row created by a [`DocumentModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RowId(pub usize);

/// Handle to a table cell created by a [`DocumentModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellId(pub usize);

/// A container that can hold paragraphs, tables and page breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Container {
    /// The section body
    Section,
    /// A table cell
    Cell(CellId),
}

/// Operations the converter needs from a document model.
///
/// Implementations may refuse a call by returning an error; the converter
/// stops and hands that error back to its caller unchanged.
pub trait DocumentModel {
    /// Create a paragraph at the end of `parent`.
    fn create_paragraph(&mut self, parent: Container, style: &ParagraphStyle)
        -> Result<ParagraphId>;

    /// Append a run of text to a paragraph.
    fn append_run(&mut self, paragraph: ParagraphId, text: &str, style: &TextStyle) -> Result<()>;

    /// Append a line break to a paragraph.
    fn append_line_break(&mut self, paragraph: ParagraphId) -> Result<()>;

    /// Create a table at the end of `parent`.
    fn create_table(&mut self, parent: Container, style: &TableStyle) -> Result<TableId>;

    /// Add a row to a table.
    fn add_row(&mut self, table: TableId, style: &RowStyle) -> Result<RowId>;

    /// Add a cell spanning `colspan` logical columns to a row.
    fn add_cell(&mut self, row: RowId, colspan: u16, style: &CellStyle) -> Result<CellId>;

    /// Mark a paragraph as a list item.
    fn add_list_item(&mut self, paragraph: ParagraphId, list: &ListInfo) -> Result<()>;

    /// Add a page break at the end of `parent`.
    fn add_page_break(&mut self, parent: Container) -> Result<()>;
}
