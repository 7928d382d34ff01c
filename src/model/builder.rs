//! In-memory [`DocumentModel`] that assembles a [`Section`].

use super::api::{CellId, Container, DocumentModel, ParagraphId, RowId, TableId};
use super::{
    Block, CellStyle, ListInfo, Paragraph, ParagraphStyle, RowStyle, Section, Table, TableCell,
    TableRow, TableStyle, TextRun, TextStyle,
};
use crate::error::{Error, Result};

/// Arena entry. Handles are indices into the arena.
#[derive(Debug)]
enum Slot {
    Paragraph(Paragraph),
    Table {
        style: TableStyle,
        rows: Vec<usize>,
    },
    Row {
        style: RowStyle,
        cells: Vec<usize>,
    },
    Cell {
        colspan: u16,
        style: CellStyle,
        content: Vec<usize>,
    },
    PageBreak,
}

/// Builds a [`Section`] from document model calls.
///
/// # Example
///
/// ```
/// use htmlword::model::{Container, DocumentBuilder, DocumentModel, ParagraphStyle, TextStyle};
///
/// let mut builder = DocumentBuilder::new();
/// let p = builder.create_paragraph(Container::Section, &ParagraphStyle::default())?;
/// builder.append_run(p, "Hello", &TextStyle::default())?;
///
/// let section = builder.finish();
/// assert_eq!(section.plain_text(), "Hello");
/// # Ok::<(), htmlword::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    slots: Vec<Option<Slot>>,
    body: Vec<usize>,
}

impl DocumentBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes created so far.
    pub fn node_count(&self) -> usize {
        self.slots.len()
    }

    /// Assemble the section from everything created so far.
    pub fn finish(mut self) -> Section {
        let body = std::mem::take(&mut self.body);
        let elements = body
            .into_iter()
            .filter_map(|idx| self.take_block(idx))
            .collect();
        Section { elements }
    }

    fn push(&mut self, slot: Slot) -> usize {
        self.slots.push(Some(slot));
        self.slots.len() - 1
    }

    fn slot_mut(&mut self, idx: usize) -> Option<&mut Slot> {
        self.slots.get_mut(idx).and_then(Option::as_mut)
    }

    fn children_of(&mut self, parent: Container) -> Result<&mut Vec<usize>> {
        match parent {
            Container::Section => Ok(&mut self.body),
            Container::Cell(CellId(idx)) => match self.slot_mut(idx) {
                Some(Slot::Cell { content, .. }) => Ok(content),
                _ => Err(Error::Model(format!("no cell with id {}", idx))),
            },
        }
    }

    fn paragraph_mut(&mut self, id: ParagraphId) -> Result<&mut Paragraph> {
        match self.slot_mut(id.0) {
            Some(Slot::Paragraph(p)) => Ok(p),
            _ => Err(Error::Model(format!("no paragraph with id {}", id.0))),
        }
    }

    fn take_block(&mut self, idx: usize) -> Option<Block> {
        let slot = self.slots.get_mut(idx)?.take()?;
        match slot {
            Slot::Paragraph(p) => Some(Block::Paragraph(p)),
            Slot::PageBreak => Some(Block::PageBreak),
            Slot::Table { style, rows } => {
                let mut table = Table::with_style(style);
                for row in rows {
                    if let Some(row) = self.take_row(row) {
                        table.add_row(row);
                    }
                }
                Some(Block::Table(table))
            }
            // Rows and cells only appear under their parents.
            Slot::Row { .. } | Slot::Cell { .. } => None,
        }
    }

    fn take_row(&mut self, idx: usize) -> Option<TableRow> {
        let slot = self.slots.get_mut(idx)?.take()?;
        match slot {
            Slot::Row { style, cells } => {
                let cells = cells
                    .into_iter()
                    .filter_map(|cell| self.take_cell(cell))
                    .collect();
                Some(TableRow { cells, style })
            }
            _ => None,
        }
    }

    fn take_cell(&mut self, idx: usize) -> Option<TableCell> {
        let slot = self.slots.get_mut(idx)?.take()?;
        match slot {
            Slot::Cell {
                colspan,
                style,
                content,
            } => {
                let content = content
                    .into_iter()
                    .filter_map(|block| self.take_block(block))
                    .collect();
                Some(TableCell {
                    content,
                    colspan,
                    style,
                })
            }
            _ => None,
        }
    }
}

impl DocumentModel for DocumentBuilder {
    fn create_paragraph(
        &mut self,
        parent: Container,
        style: &ParagraphStyle,
    ) -> Result<ParagraphId> {
        // Validate the parent before allocating.
        self.children_of(parent)?;
        let idx = self.push(Slot::Paragraph(Paragraph::with_style(style.clone())));
        self.children_of(parent)?.push(idx);
        Ok(ParagraphId(idx))
    }

    fn append_run(&mut self, paragraph: ParagraphId, text: &str, style: &TextStyle) -> Result<()> {
        self.paragraph_mut(paragraph)?
            .add_run(TextRun::styled(text, style.clone()));
        Ok(())
    }

    fn append_line_break(&mut self, paragraph: ParagraphId) -> Result<()> {
        self.paragraph_mut(paragraph)?.add_line_break();
        Ok(())
    }

    fn create_table(&mut self, parent: Container, style: &TableStyle) -> Result<TableId> {
        self.children_of(parent)?;
        let idx = self.push(Slot::Table {
            style: style.clone(),
            rows: Vec::new(),
        });
        self.children_of(parent)?.push(idx);
        Ok(TableId(idx))
    }

    fn add_row(&mut self, table: TableId, style: &RowStyle) -> Result<RowId> {
        if !matches!(self.slot_mut(table.0), Some(Slot::Table { .. })) {
            return Err(Error::Model(format!("no table with id {}", table.0)));
        }
        let idx = self.push(Slot::Row {
            style: *style,
            cells: Vec::new(),
        });
        if let Some(Slot::Table { rows, .. }) = self.slot_mut(table.0) {
            rows.push(idx);
        }
        Ok(RowId(idx))
    }

    fn add_cell(&mut self, row: RowId, colspan: u16, style: &CellStyle) -> Result<CellId> {
        if !matches!(self.slot_mut(row.0), Some(Slot::Row { .. })) {
            return Err(Error::Model(format!("no row with id {}", row.0)));
        }
        let idx = self.push(Slot::Cell {
            colspan: colspan.max(1),
            style: style.clone(),
            content: Vec::new(),
        });
        if let Some(Slot::Row { cells, .. }) = self.slot_mut(row.0) {
            cells.push(idx);
        }
        Ok(CellId(idx))
    }

    fn add_list_item(&mut self, paragraph: ParagraphId, list: &ListInfo) -> Result<()> {
        self.paragraph_mut(paragraph)?.style.list_info = Some(list.clone());
        Ok(())
    }

    fn add_page_break(&mut self, parent: Container) -> Result<()> {
        self.children_of(parent)?;
        let idx = self.push(Slot::PageBreak);
        self.children_of(parent)?.push(idx);
        Ok(())
    }
}
