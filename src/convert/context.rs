//! The converter's context stack.

use super::list::ListFrame;
use super::table::{RowFrame, TableFrame};
use crate::classify::ElementKind;
use crate::model::{Container, ListInfo, ParagraphId, ParagraphStyle, RowId, TableId, TextStyle};
use std::fmt;

/// A paragraph currently receiving inline content.
#[derive(Debug)]
pub(crate) struct OpenParagraph {
    pub id: ParagraphId,
    /// Nothing written since the paragraph started or the last line break
    pub at_line_start: bool,
    /// A collapsed space held back until more text follows
    pub pending_space: Option<TextStyle>,
}

impl OpenParagraph {
    pub fn new(id: ParagraphId) -> Self {
        Self {
            id,
            at_line_start: true,
            pending_space: None,
        }
    }
}

/// A paragraph-level element whose paragraph is created on first content.
#[derive(Debug)]
pub(crate) struct BlockFrame {
    pub style: ParagraphStyle,
    /// List membership, given to the first paragraph only
    pub list: Option<ListInfo>,
    pub paragraph: Option<OpenParagraph>,
    /// A paragraph has been created for this element
    pub emitted: bool,
    /// A nested block closed this element's paragraph
    pub nested_block: bool,
    /// Emit an empty paragraph if the element had no content
    pub keep_empty: bool,
}

impl BlockFrame {
    pub fn new(style: ParagraphStyle, list: Option<ListInfo>, keep_empty: bool) -> Self {
        Self {
            style,
            list,
            paragraph: None,
            emitted: false,
            nested_block: false,
            keep_empty,
        }
    }
}

/// One entry of the context stack.
#[derive(Debug)]
pub(crate) enum Frame {
    /// A place paragraphs and tables can be created in, with the paragraph
    /// that collects loose inline content
    Container {
        target: Container,
        paragraph: Option<OpenParagraph>,
    },
    Block(BlockFrame),
    Table(TableFrame),
    Row(RowFrame),
    List(ListFrame),
}

/// What kind of content the top of the stack accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scope {
    /// Paragraphs, inline content, tables, lists
    Flow,
    /// Rows and row groups
    Table,
    /// Cells
    Row,
    /// List items and nested lists
    List,
}

/// Implicit structure opened around content that is out of place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Wrapper {
    /// A cell (in an implicit row when no row is open)
    Cell,
    /// A list item
    Item,
}

impl fmt::Display for Wrapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Wrapper::Cell => write!(f, "cell"),
            Wrapper::Item => write!(f, "list item"),
        }
    }
}

impl Scope {
    /// Wrapper needed before content of `kind` (`None` for text) can be
    /// placed in this scope.
    pub fn wrapper_for(self, kind: Option<ElementKind>) -> Option<Wrapper> {
        match (self, kind) {
            (Scope::Flow, _) => None,
            (
                Scope::Table,
                Some(
                    ElementKind::TableRow
                    | ElementKind::TableHead
                    | ElementKind::TableBody
                    | ElementKind::TableCell { .. },
                ),
            ) => None,
            (Scope::Row, Some(ElementKind::TableCell { .. })) => None,
            (Scope::Table | Scope::Row, _) => Some(Wrapper::Cell),
            (
                Scope::List,
                Some(ElementKind::ListItem | ElementKind::ListOrdered | ElementKind::ListUnordered),
            ) => None,
            (Scope::List, _) => Some(Wrapper::Item),
        }
    }
}

/// Stack of open containers.
///
/// The bottom frame is always the container the conversion writes into.
#[derive(Debug)]
pub(crate) struct ContextStack {
    root: Container,
    frames: Vec<Frame>,
}

impl ContextStack {
    pub fn new(root: Container) -> Self {
        Self {
            root,
            frames: vec![Frame::Container {
                target: root,
                paragraph: None,
            }],
        }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    /// Pop the top frame, folding a finished row into its table.
    pub fn pop(&mut self) -> Option<Frame> {
        let frame = self.frames.pop()?;
        if let Frame::Row(row) = &frame {
            if let Some(Frame::Table(table)) = self.frames.last_mut() {
                table.finish_row(row);
            }
        }
        Some(frame)
    }

    pub fn top(&self) -> Option<&Frame> {
        self.frames.last()
    }

    pub fn frame_mut(&mut self, idx: usize) -> Option<&mut Frame> {
        self.frames.get_mut(idx)
    }

    pub fn scope(&self) -> Scope {
        match self.top() {
            Some(Frame::Table(_)) => Scope::Table,
            Some(Frame::Row(_)) => Scope::Row,
            Some(Frame::List(_)) => Scope::List,
            _ => Scope::Flow,
        }
    }

    /// Nearest container at or below `idx`.
    pub fn container_at(&self, idx: usize) -> Container {
        self.frames
            .iter()
            .take(idx + 1)
            .rev()
            .find_map(|frame| match frame {
                Frame::Container { target, .. } => Some(*target),
                _ => None,
            })
            .unwrap_or(self.root)
    }

    /// Nearest container on the stack.
    pub fn container(&self) -> Container {
        self.container_at(self.frames.len().saturating_sub(1))
    }

    /// Index of the frame that owns the current paragraph.
    pub fn holder(&self) -> usize {
        self.frames
            .iter()
            .rposition(|frame| matches!(frame, Frame::Container { .. } | Frame::Block(_)))
            .unwrap_or(0)
    }

    /// The paragraph currently receiving inline content, if any.
    pub fn open_paragraph_mut(&mut self) -> Option<&mut OpenParagraph> {
        let idx = self.holder();
        match self.frames.get_mut(idx)? {
            Frame::Container { paragraph, .. } => paragraph.as_mut(),
            Frame::Block(block) => block.paragraph.as_mut(),
            _ => None,
        }
    }

    /// Close the current paragraph; following inline content starts a new one.
    pub fn close_paragraph(&mut self) {
        let idx = self.holder();
        match self.frames.get_mut(idx) {
            Some(Frame::Container { paragraph, .. }) => *paragraph = None,
            Some(Frame::Block(block)) => {
                block.paragraph = None;
                block.nested_block = true;
            }
            _ => {}
        }
    }

    /// Take the list membership of the paragraph holder if it has not
    /// created a paragraph yet, so a block nested in `<li>` can carry it.
    pub fn take_unclaimed_list(&mut self) -> Option<ListInfo> {
        let idx = self.holder();
        match self.frames.get_mut(idx) {
            Some(Frame::Block(block)) if !block.emitted => block.list.take(),
            _ => None,
        }
    }

    /// Whether the top frame is a block that still owes an empty paragraph.
    pub fn top_needs_empty_paragraph(&self) -> bool {
        matches!(
            self.top(),
            Some(Frame::Block(block)) if block.keep_empty && !block.emitted && !block.nested_block
        )
    }

    /// The table on top of the stack.
    pub fn current_table(&self) -> Option<TableId> {
        match self.top() {
            Some(Frame::Table(table)) => Some(table.id),
            _ => None,
        }
    }

    /// The row on top of the stack.
    pub fn current_row(&self) -> Option<RowId> {
        match self.top() {
            Some(Frame::Row(row)) => Some(row.id),
            _ => None,
        }
    }

    /// Record a cell's span on the row on top of the stack.
    pub fn add_to_row(&mut self, colspan: u16) {
        if let Some(Frame::Row(row)) = self.frames.last_mut() {
            row.width += usize::from(colspan);
        }
    }

    /// The innermost open list.
    pub fn nearest_list_mut(&mut self) -> Option<&mut ListFrame> {
        self.frames.iter_mut().rev().find_map(|frame| match frame {
            Frame::List(list) => Some(list),
            _ => None,
        })
    }

    /// Number of open lists.
    pub fn list_depth(&self) -> usize {
        self.frames
            .iter()
            .filter(|frame| matches!(frame, Frame::List(_)))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CellId;

    #[test]
    fn test_root_container() {
        let stack = ContextStack::new(Container::Section);
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.scope(), Scope::Flow);
        assert_eq!(stack.container(), Container::Section);
        assert_eq!(stack.holder(), 0);
    }

    #[test]
    fn test_block_paragraph_goes_to_nearest_container() {
        let mut stack = ContextStack::new(Container::Section);
        stack.push(Frame::Table(TableFrame::new(TableId(0))));
        stack.push(Frame::Row(RowFrame::new(RowId(1), false)));
        stack.push(Frame::Container {
            target: Container::Cell(CellId(2)),
            paragraph: None,
        });
        stack.push(Frame::Block(BlockFrame::new(
            ParagraphStyle::default(),
            None,
            true,
        )));

        assert_eq!(stack.holder(), 4);
        assert_eq!(stack.container_at(4), Container::Cell(CellId(2)));
        assert!(stack.top_needs_empty_paragraph());
    }

    #[test]
    fn test_close_paragraph_marks_nested_block() {
        let mut stack = ContextStack::new(Container::Section);
        let mut block = BlockFrame::new(ParagraphStyle::default(), None, true);
        block.paragraph = Some(OpenParagraph::new(ParagraphId(0)));
        block.emitted = true;
        stack.push(Frame::Block(block));

        assert!(stack.open_paragraph_mut().is_some());
        stack.close_paragraph();
        assert!(stack.open_paragraph_mut().is_none());
        match stack.top() {
            Some(Frame::Block(block)) => assert!(block.nested_block),
            other => panic!("unexpected frame {:?}", other),
        }
    }

    #[test]
    fn test_take_unclaimed_list() {
        let mut stack = ContextStack::new(Container::Section);
        stack.push(Frame::Block(BlockFrame::new(
            ParagraphStyle::default(),
            Some(ListInfo::bullet(1)),
            true,
        )));
        assert_eq!(stack.take_unclaimed_list(), Some(ListInfo::bullet(1)));
        assert_eq!(stack.take_unclaimed_list(), None);

        let mut block = BlockFrame::new(ParagraphStyle::default(), Some(ListInfo::bullet(1)), true);
        block.emitted = true;
        stack.push(Frame::Block(block));
        assert_eq!(stack.take_unclaimed_list(), None);
    }

    #[test]
    fn test_popping_row_updates_table() {
        let mut stack = ContextStack::new(Container::Section);
        stack.push(Frame::Table(TableFrame::new(TableId(0))));
        stack.push(Frame::Row(RowFrame::new(RowId(1), false)));
        stack.add_to_row(2);
        stack.add_to_row(1);
        stack.pop();

        match stack.top() {
            Some(Frame::Table(table)) => assert_eq!(table.columns, Some(3)),
            other => panic!("unexpected frame {:?}", other),
        }
    }

    #[test]
    fn test_wrappers() {
        assert_eq!(Scope::Table.wrapper_for(None), Some(Wrapper::Cell));
        assert_eq!(
            Scope::Table.wrapper_for(Some(ElementKind::TableCell { header: false })),
            None
        );
        assert_eq!(
            Scope::Row.wrapper_for(Some(ElementKind::TableRow)),
            Some(Wrapper::Cell)
        );
        assert_eq!(Scope::List.wrapper_for(Some(ElementKind::ListUnordered)), None);
        assert_eq!(
            Scope::List.wrapper_for(Some(ElementKind::InlineRun)),
            Some(Wrapper::Item)
        );
        assert_eq!(Scope::Flow.wrapper_for(None), None);
    }

    #[test]
    fn test_list_depth() {
        let mut stack = ContextStack::new(Container::Section);
        stack.push(Frame::List(ListFrame::unordered(1, '•')));
        stack.push(Frame::List(ListFrame::unordered(2, '•')));
        assert_eq!(stack.list_depth(), 2);
        assert_eq!(stack.nearest_list_mut().map(|l| l.depth), Some(2));
    }
}
