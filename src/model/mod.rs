//! Document model types for converted content.
//!
//! This module defines the word-processing representation that HTML is
//! converted into, the [`DocumentModel`] interface the converter writes
//! through, and [`DocumentBuilder`], the in-memory implementation of that
//! interface.

mod api;
mod builder;
mod paragraph;
mod section;
mod table;

pub use api::{CellId, Container, DocumentModel, ParagraphId, RowId, TableId};
pub use builder::DocumentBuilder;
pub use paragraph::{
    Alignment, InlineContent, LineHeight, ListInfo, ListStyle, NumberStyle, Paragraph,
    ParagraphStyle, TextRun, TextStyle, Underline,
};
pub use section::{Block, Section};
pub use table::{
    Border, BorderStyle, CellStyle, RowStyle, Table, TableCell, TableRow, TableStyle, TableWidth,
    VerticalAlignment,
};
