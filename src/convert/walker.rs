//! Depth-first walk of the element tree that drives the document model.

use super::context::{BlockFrame, ContextStack, Frame, OpenParagraph, Wrapper};
use super::list::ListFrame;
use super::table::{self, RowFrame, TableFrame};
use super::ConvertOptions;
use crate::classify::{classify, ElementKind};
use crate::dom::{Element, Node};
use crate::entities;
use crate::error::Result;
use crate::model::{
    Alignment, CellStyle, Container, DocumentModel, ListInfo, ParagraphId, ParagraphStyle, RowId,
    RowStyle, TableId, TableStyle, TextStyle,
};
use crate::style::{self, StyleMap};

/// Properties a child inherits from its ancestors.
///
/// Each element works on its own copy, so nothing leaks back out of it.
#[derive(Debug, Clone, Default)]
struct Inherited {
    run: TextStyle,
    alignment: Option<Alignment>,
    /// Shading for cells, from an enclosing row or row group
    shading: Option<String>,
    header_row: bool,
    preformatted: bool,
}

pub(crate) struct Walker<'a, M: DocumentModel + ?Sized> {
    model: &'a mut M,
    options: &'a ConvertOptions,
    stack: ContextStack,
}

impl<'a, M: DocumentModel + ?Sized> Walker<'a, M> {
    pub fn new(model: &'a mut M, container: Container, options: &'a ConvertOptions) -> Self {
        Self {
            model,
            options,
            stack: ContextStack::new(container),
        }
    }

    /// Convert `nodes` in order, then close everything that is still open.
    pub fn convert(mut self, nodes: &[Node]) -> Result<()> {
        let inherited = Inherited::default();
        for node in nodes {
            self.walk_node(node, &inherited)?;
        }
        self.leave(0)
    }

    fn walk_node(&mut self, node: &Node, inherited: &Inherited) -> Result<()> {
        match node {
            Node::Text(text) => self.walk_text(text, inherited),
            Node::Element(el) => self.walk_element(el, inherited),
        }
    }

    fn walk_children(&mut self, el: &Element, inherited: &Inherited) -> Result<()> {
        for child in &el.children {
            self.walk_node(child, inherited)?;
        }
        Ok(())
    }

    fn walk_text(&mut self, raw: &str, inherited: &Inherited) -> Result<()> {
        let text = self.prepare_text(raw, inherited);
        if text.is_empty() {
            return Ok(());
        }
        let blank = text.chars().all(|c| c.is_ascii_whitespace());

        let scope = self.stack.scope();
        if let Some(wrapper) = scope.wrapper_for(None) {
            if blank {
                return Ok(());
            }
            let mark = self.stack.len();
            log::debug!("text directly inside {:?}, wrapping in implicit {}", scope, wrapper);
            self.open_wrapper(wrapper, inherited)?;
            self.append_text(&text, inherited)?;
            return self.leave(mark);
        }

        if blank && !inherited.preformatted && self.stack.open_paragraph_mut().is_none() {
            return Ok(());
        }
        self.append_text(&text, inherited)
    }

    fn walk_element(&mut self, el: &Element, inherited: &Inherited) -> Result<()> {
        let kind = classify(&el.tag);
        log::trace!("<{}> is {}", el.tag, kind);

        match kind {
            ElementKind::Ignored => return Ok(()),
            ElementKind::Passthrough => return self.walk_children(el, inherited),
            _ => {}
        }

        let map = if kind == (ElementKind::TableCell { header: true })
            && !self.options.header_cells_bold
        {
            style::resolve_without_defaults(el)
        } else {
            style::resolve(el)
        };

        let mark = self.stack.len();
        let scope = self.stack.scope();
        if let Some(wrapper) = scope.wrapper_for(Some(kind)) {
            log::debug!(
                "<{}> directly inside {:?}, wrapping in implicit {}",
                el.tag,
                scope,
                wrapper
            );
            self.open_wrapper(wrapper, inherited)?;
        }

        if kind.is_block() {
            self.stack.close_paragraph();
            if style::page_break_before(&map) {
                self.page_break()?;
            }
        }

        self.dispatch(el, kind, &map, inherited)?;
        self.leave(mark)?;

        if kind.is_block() && style::page_break_after(&map) {
            self.page_break()?;
        }
        Ok(())
    }

    fn dispatch(
        &mut self,
        el: &Element,
        kind: ElementKind,
        map: &StyleMap,
        inherited: &Inherited,
    ) -> Result<()> {
        let mut inh = inherited.clone();
        style::apply_run(map, &mut inh.run);
        if let Some(alignment) = style::alignment(map) {
            inh.alignment = Some(alignment);
        }

        match kind {
            ElementKind::BlockParagraph => {
                run_background(map, &mut inh);
                if el.tag == "pre" {
                    inh.preformatted = true;
                }
                self.push_block(map, &inh, ParagraphStyle::default(), None, el.tag == "p");
                self.walk_children(el, &inh)
            }
            ElementKind::Heading(level) => {
                run_background(map, &mut inh);
                let style = ParagraphStyle {
                    style_name: Some(self.options.heading_style(level)),
                    heading_level: Some(level),
                    ..Default::default()
                };
                self.push_block(map, &inh, style, None, true);
                self.walk_children(el, &inh)
            }
            ElementKind::InlineRun => {
                run_background(map, &mut inh);
                self.walk_children(el, &inh)
            }
            ElementKind::LineBreak => self.line_break(&inh),
            ElementKind::PageBreak => self.page_break(),
            ElementKind::TableRoot => {
                let mut style = TableStyle::default();
                style::apply_table(map, &mut style);
                self.open_table(&style)?;
                inh.header_row = false;
                inh.shading = None;
                self.walk_children(el, &inh)
            }
            ElementKind::TableHead | ElementKind::TableBody => {
                if self.stack.current_table().is_none() {
                    log::debug!("<{}> outside a table, treating it as the table", el.tag);
                    let mut style = TableStyle::default();
                    style::apply_table(map, &mut style);
                    self.open_table(&style)?;
                } else if let Some(color) = style::background(map) {
                    inh.shading = Some(color);
                }
                inh.header_row = kind == ElementKind::TableHead;
                self.walk_children(el, &inh)
            }
            ElementKind::TableRow => {
                let table = self.ensure_table()?;
                if let Some(color) = style::background(map) {
                    inh.shading = Some(color);
                }
                self.open_row(table, RowStyle { header: inh.header_row }, false)?;
                self.walk_children(el, &inh)
            }
            ElementKind::TableCell { header } => {
                let colspan = table::colspan(el.get_attr("colspan"), self.options.max_colspan);
                let mut style = CellStyle {
                    header,
                    shading: inh.shading.take(),
                    rowspan: table::rowspan(el.get_attr("rowspan")),
                    ..Default::default()
                };
                style::apply_cell(map, &mut style);
                self.open_cell(colspan, &style, &inh)?;
                self.walk_children(el, &inh)
            }
            ElementKind::ListOrdered | ElementKind::ListUnordered => {
                let depth = u8::try_from(self.stack.list_depth() + 1).unwrap_or(u8::MAX);
                let list = ListFrame::from_element(
                    el,
                    map,
                    kind == ElementKind::ListOrdered,
                    depth,
                    self.options.bullet_marker,
                );
                self.stack.push(Frame::List(list));
                self.walk_children(el, &inh)
            }
            ElementKind::ListItem => {
                run_background(map, &mut inh);
                let value = el.get_attr("value").and_then(|v| v.trim().parse().ok());
                let info = self.next_list_item(value);
                self.push_block(map, &inh, ParagraphStyle::default(), Some(info), true);
                self.walk_children(el, &inh)
            }
            ElementKind::Ignored | ElementKind::Passthrough => self.walk_children(el, &inh),
        }
    }

    /// Pop frames down to `mark`, giving empty paragraphs to blocks that
    /// must not vanish.
    fn leave(&mut self, mark: usize) -> Result<()> {
        while self.stack.len() > mark {
            if self.stack.top_needs_empty_paragraph() {
                self.paragraph(&Inherited::default())?;
            }
            self.stack.pop();
        }
        Ok(())
    }

    fn push_block(
        &mut self,
        map: &StyleMap,
        inh: &Inherited,
        mut style: ParagraphStyle,
        list: Option<ListInfo>,
        keep_empty: bool,
    ) {
        style.alignment = inh.alignment;
        style::apply_paragraph(map, &mut style);
        let list = list.or_else(|| self.stack.take_unclaimed_list());
        self.stack
            .push(Frame::Block(BlockFrame::new(style, list, keep_empty)));
    }

    fn open_wrapper(&mut self, wrapper: Wrapper, inh: &Inherited) -> Result<()> {
        match wrapper {
            Wrapper::Cell => self.open_cell(1, &CellStyle::default(), inh),
            Wrapper::Item => {
                let info = self.next_list_item(None);
                self.push_block(&StyleMap::new(), inh, ParagraphStyle::default(), Some(info), false);
                Ok(())
            }
        }
    }

    fn next_list_item(&mut self, value: Option<u32>) -> ListInfo {
        if self.stack.nearest_list_mut().is_none() {
            log::debug!("list item outside a list, opening an implicit unordered list");
            self.stack
                .push(Frame::List(ListFrame::unordered(1, self.options.bullet_marker)));
        }
        match self.stack.nearest_list_mut() {
            Some(list) => list.next_item(value),
            None => ListInfo::bullet(1),
        }
    }

    fn open_table(&mut self, style: &TableStyle) -> Result<TableId> {
        let id = self.model.create_table(self.stack.container(), style)?;
        self.stack.push(Frame::Table(TableFrame::new(id)));
        Ok(id)
    }

    fn ensure_table(&mut self) -> Result<TableId> {
        match self.stack.current_table() {
            Some(id) => Ok(id),
            None => {
                log::debug!("row outside a table, opening an implicit table");
                self.open_table(&TableStyle::default())
            }
        }
    }

    fn open_row(&mut self, table: TableId, style: RowStyle, implicit: bool) -> Result<RowId> {
        let id = self.model.add_row(table, &style)?;
        self.stack.push(Frame::Row(RowFrame::new(id, implicit)));
        Ok(id)
    }

    fn ensure_row(&mut self, inh: &Inherited) -> Result<RowId> {
        if let Some(id) = self.stack.current_row() {
            return Ok(id);
        }
        log::debug!("cell outside a row, opening an implicit row");
        let table = self.ensure_table()?;
        self.open_row(table, RowStyle { header: inh.header_row }, true)
    }

    fn open_cell(&mut self, colspan: u16, style: &CellStyle, inh: &Inherited) -> Result<()> {
        let row = self.ensure_row(inh)?;
        let id = self.model.add_cell(row, colspan, style)?;
        self.stack.add_to_row(colspan);
        self.stack.push(Frame::Container {
            target: Container::Cell(id),
            paragraph: None,
        });
        Ok(())
    }

    /// The paragraph receiving inline content, created on demand.
    fn paragraph(&mut self, inh: &Inherited) -> Result<ParagraphId> {
        if let Some(open) = self.stack.open_paragraph_mut() {
            return Ok(open.id);
        }

        let idx = self.stack.holder();
        let parent = self.stack.container_at(idx);
        let (style, list) = match self.stack.frame_mut(idx) {
            Some(Frame::Block(block)) => (block.style.clone(), block.list.take()),
            _ => (
                ParagraphStyle {
                    alignment: inh.alignment,
                    ..Default::default()
                },
                None,
            ),
        };

        let id = self.model.create_paragraph(parent, &style)?;
        if let Some(info) = list {
            self.model.add_list_item(id, &info)?;
        }

        match self.stack.frame_mut(idx) {
            Some(Frame::Block(block)) => {
                block.paragraph = Some(OpenParagraph::new(id));
                block.emitted = true;
            }
            Some(Frame::Container { paragraph, .. }) => {
                *paragraph = Some(OpenParagraph::new(id));
            }
            _ => {}
        }
        Ok(id)
    }

    fn prepare_text(&self, raw: &str, inh: &Inherited) -> String {
        if self.options.collapse_whitespace && !inh.preformatted {
            entities::decode(&collapse_whitespace(raw))
        } else {
            entities::decode(raw)
        }
    }

    fn append_text(&mut self, text: &str, inh: &Inherited) -> Result<()> {
        if inh.preformatted {
            return self.append_preformatted(text, inh);
        }
        if !self.options.collapse_whitespace {
            let id = self.paragraph(inh)?;
            return self.model.append_run(id, text, &inh.run);
        }

        let leading = text.starts_with(' ');
        let trailing = text.ends_with(' ');
        let body = text.trim_matches(' ');

        if body.is_empty() {
            if let Some(open) = self.stack.open_paragraph_mut() {
                if !open.at_line_start && open.pending_space.is_none() {
                    open.pending_space = Some(inh.run.clone());
                }
            }
            return Ok(());
        }

        let id = self.paragraph(inh)?;
        let space = match self.stack.open_paragraph_mut() {
            Some(open) => {
                let pending = open.pending_space.take();
                let space = if open.at_line_start {
                    None
                } else if leading {
                    pending.or_else(|| Some(inh.run.clone()))
                } else {
                    pending
                };
                open.at_line_start = false;
                open.pending_space = trailing.then(|| inh.run.clone());
                space
            }
            None => None,
        };

        if let Some(style) = space {
            self.model.append_run(id, " ", &style)?;
        }
        self.model.append_run(id, body, &inh.run)
    }

    fn append_preformatted(&mut self, text: &str, inh: &Inherited) -> Result<()> {
        let id = self.paragraph(inh)?;
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                self.model.append_line_break(id)?;
            }
            let line = line.trim_end_matches('\r');
            if !line.is_empty() {
                self.model.append_run(id, line, &inh.run)?;
            }
        }
        if let Some(open) = self.stack.open_paragraph_mut() {
            open.at_line_start = false;
        }
        Ok(())
    }

    fn line_break(&mut self, inh: &Inherited) -> Result<()> {
        let id = self.paragraph(inh)?;
        self.model.append_line_break(id)?;
        if let Some(open) = self.stack.open_paragraph_mut() {
            open.at_line_start = true;
            open.pending_space = None;
        }
        Ok(())
    }

    fn page_break(&mut self) -> Result<()> {
        self.stack.close_paragraph();
        self.model.add_page_break(self.stack.container())
    }
}

/// Background on paragraphs and inline elements shades the text runs.
fn run_background(map: &StyleMap, inh: &mut Inherited) {
    if let Some(color) = style::background(map) {
        inh.run.background_color = Some(color);
    }
}

/// Collapse runs of ASCII whitespace to a single space.
///
/// Non-breaking and other Unicode spaces are content and stay as they are.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_space = false;
    for c in text.chars() {
        if c.is_ascii_whitespace() {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out
}
