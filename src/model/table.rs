//! Table types.

use super::{Block, Paragraph};
use serde::{Deserialize, Serialize};

/// A table structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    /// Rows in the table
    pub rows: Vec<TableRow>,

    /// Table-level formatting
    pub style: TableStyle,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            style: TableStyle::default(),
        }
    }

    /// Create an empty table with the given style.
    pub fn with_style(style: TableStyle) -> Self {
        Self {
            rows: Vec::new(),
            style,
        }
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of logical columns (widest row, counting spans).
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(TableRow::span_width).max().unwrap_or(0)
    }

    /// Number of leading header rows.
    pub fn header_rows(&self) -> usize {
        self.rows.iter().take_while(|r| r.style.header).count()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get plain text representation of the table.
    pub fn plain_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Check if the table has merged cells.
    pub fn has_merged_cells(&self) -> bool {
        self.rows
            .iter()
            .flat_map(|r| &r.cells)
            .any(TableCell::is_merged)
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

/// A table row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in the row
    pub cells: Vec<TableCell>,

    /// Row-level formatting
    pub style: RowStyle,
}

impl TableRow {
    /// Create a new row with cells.
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self {
            cells,
            style: RowStyle::default(),
        }
    }

    /// Create a header row.
    pub fn header(cells: Vec<TableCell>) -> Self {
        Self {
            cells,
            style: RowStyle { header: true },
        }
    }

    /// Logical width of the row (sum of colspans).
    pub fn span_width(&self) -> usize {
        self.cells.iter().map(|c| c.colspan as usize).sum()
    }

    /// Get plain text representation.
    pub fn plain_text(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.plain_text())
            .collect::<Vec<_>>()
            .join("\t")
    }
}

/// A table cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableCell {
    /// Cell content (paragraphs and nested tables)
    pub content: Vec<Block>,

    /// Number of columns this cell spans
    pub colspan: u16,

    /// Cell formatting
    pub style: CellStyle,
}

impl TableCell {
    /// Create an empty cell.
    pub fn empty() -> Self {
        Self {
            content: Vec::new(),
            colspan: 1,
            style: CellStyle::default(),
        }
    }

    /// Create a new cell with text content.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![Block::Paragraph(Paragraph::with_text(text))],
            ..Self::empty()
        }
    }

    /// Set colspan and return self.
    pub fn colspan(mut self, span: u16) -> Self {
        self.colspan = span.max(1);
        self
    }

    /// Iterate over the paragraphs directly inside the cell.
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.content.iter().filter_map(|b| match b {
            Block::Paragraph(p) => Some(p),
            _ => None,
        })
    }

    /// Get plain text content.
    pub fn plain_text(&self) -> String {
        self.content
            .iter()
            .filter_map(Block::plain_text)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Check if the cell is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty() || self.plain_text().trim().is_empty()
    }

    /// Check if this cell spans multiple rows or columns.
    pub fn is_merged(&self) -> bool {
        self.colspan > 1 || self.style.rowspan.is_some_and(|r| r > 1)
    }
}

/// Table-level formatting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableStyle {
    /// Preferred table width
    pub width: Option<TableWidth>,

    /// Border applied to the table and its cells
    pub border: Option<Border>,

    /// Default cell shading (`#RRGGBB`)
    pub shading: Option<String>,
}

/// Row-level formatting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowStyle {
    /// Whether this is a header row
    pub header: bool,
}

/// Cell formatting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CellStyle {
    /// Whether this is a header cell (`<th>`)
    pub header: bool,

    /// Background shading (`#RRGGBB`)
    pub shading: Option<String>,

    /// Cell border
    pub border: Option<Border>,

    /// Preferred cell width
    pub width: Option<TableWidth>,

    /// Vertical alignment
    pub vertical_alignment: Option<VerticalAlignment>,

    /// Number of rows the cell spans, as declared in the markup
    pub rowspan: Option<u16>,
}

/// Preferred width of a table or cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum TableWidth {
    /// Percentage of the available width
    Percent(f32),
    /// Fixed width in twips
    Fixed(u32),
}

/// A border line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Border {
    /// Line width in twips
    pub width: u32,

    /// Line style
    pub style: BorderStyle,

    /// Line color (`#RRGGBB`)
    pub color: Option<String>,
}

/// Border line style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// No border
    None,
    /// Single solid line
    #[default]
    Single,
    /// Double line
    Double,
    /// Dotted line
    Dotted,
    /// Dashed line
    Dashed,
}

/// Vertical alignment for table cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlignment {
    /// Top alignment
    #[default]
    Top,
    /// Middle/center alignment
    Middle,
    /// Bottom alignment
    Bottom,
}
