//! # htmlword
//!
//! Convert HTML with inline CSS into a word-processing document model.
//!
//! The converter walks an element tree depth-first and drives any
//! implementation of [`DocumentModel`]: paragraphs with styled runs, tables
//! with spanned and shaded cells, numbered and bulleted lists, line and
//! page breaks. [`DocumentBuilder`] is the bundled in-memory model; it
//! produces a serializable [`Section`].
//!
//! ## Quick Start
//!
//! ```
//! use htmlword::html_to_section;
//!
//! fn main() -> htmlword::Result<()> {
//!     let section = html_to_section(
//!         r#"<h1>Title</h1><p style="color: red">Hello <b>world</b></p>"#,
//!         false,
//!     )?;
//!
//!     let heading = section.paragraphs().next().unwrap();
//!     assert_eq!(heading.style.style_name.as_deref(), Some("Heading1"));
//!     assert_eq!(section.plain_text(), "Title\n\nHello world");
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Style cascade**: tag defaults, presentational attributes, inline `style`
//! - **Tables**: colspan, rowspan, header rows, shading, borders and widths
//! - **Lists**: nested ordered and unordered lists with numbering styles
//! - **Best effort**: malformed markup and styles never fail a conversion
//! - **Parallel batches**: independent documents convert on Rayon workers

pub mod classify;
pub mod convert;
pub mod dom;
pub mod entities;
pub mod error;
pub mod markup;
pub mod model;
pub mod render;
pub mod style;

// Re-export commonly used types
pub use convert::ConvertOptions;
pub use dom::{Element, Node};
pub use error::{Error, Result};
pub use model::{
    Alignment, Block, CellId, Container, DocumentBuilder, DocumentModel, InlineContent, ListInfo,
    ListStyle, NumberStyle, Paragraph, ParagraphId, ParagraphStyle, RowId, Section, Table,
    TableCell, TableId, TableRow, TextRun, TextStyle,
};
pub use render::{JsonFormat, SectionStats};

use rayon::prelude::*;

/// Parse `markup` and convert it into `container` of `model`.
///
/// With `full_document` the markup is parsed as a whole document and
/// conversion starts at its `<body>`; otherwise it is parsed as a body
/// fragment.
///
/// # Example
///
/// ```
/// use htmlword::{add_html, Container, DocumentBuilder};
///
/// let mut builder = DocumentBuilder::new();
/// add_html(&mut builder, Container::Section, "<p>one</p><p>two</p>", false)?;
/// assert_eq!(builder.finish().block_count(), 2);
/// # Ok::<(), htmlword::Error>(())
/// ```
pub fn add_html<M: DocumentModel + ?Sized>(
    model: &mut M,
    container: Container,
    markup: &str,
    full_document: bool,
) -> Result<()> {
    add_html_with_options(
        model,
        container,
        markup,
        full_document,
        &ConvertOptions::default(),
    )
}

/// Parse `markup` and convert it with custom options.
pub fn add_html_with_options<M: DocumentModel + ?Sized>(
    model: &mut M,
    container: Container,
    markup: &str,
    full_document: bool,
    options: &ConvertOptions,
) -> Result<()> {
    let root = if full_document {
        markup::parse_document(markup)
    } else {
        markup::parse_fragment(markup)
    };
    convert::add_html(model, container, &root, full_document, options)
}

/// Convert markup into a fresh [`Section`].
///
/// # Example
///
/// ```
/// use htmlword::html_to_section;
///
/// let section = html_to_section("<table><tr><td>a</td><td>b</td></tr></table>", false)?;
/// assert_eq!(section.tables().next().unwrap().column_count(), 2);
/// # Ok::<(), htmlword::Error>(())
/// ```
pub fn html_to_section(markup: &str, full_document: bool) -> Result<Section> {
    html_to_section_with_options(markup, full_document, &ConvertOptions::default())
}

/// Convert markup into a fresh [`Section`] with custom options.
pub fn html_to_section_with_options(
    markup: &str,
    full_document: bool,
    options: &ConvertOptions,
) -> Result<Section> {
    let mut builder = DocumentBuilder::new();
    add_html_with_options(
        &mut builder,
        Container::Section,
        markup,
        full_document,
        options,
    )?;
    Ok(builder.finish())
}

/// Convert many documents in parallel.
///
/// Conversions share no state; results are returned in input order.
pub fn convert_batch(
    documents: &[&str],
    full_document: bool,
    options: &ConvertOptions,
) -> Vec<Result<Section>> {
    documents
        .par_iter()
        .map(|markup| html_to_section_with_options(markup, full_document, options))
        .collect()
}

/// Builder for converting HTML documents.
///
/// # Example
///
/// ```
/// use htmlword::HtmlWord;
///
/// let text = HtmlWord::new()
///     .with_heading_style_prefix("Title")
///     .full_document()
///     .convert("<html><body><h2>Intro</h2><p>Body</p></body></html>")?
///     .to_text()?;
/// assert_eq!(text, "Intro\n\nBody");
/// # Ok::<(), htmlword::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct HtmlWord {
    options: ConvertOptions,
    full_document: bool,
}

impl HtmlWord {
    /// Create a new HtmlWord builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the given conversion options.
    pub fn with_options(mut self, options: ConvertOptions) -> Self {
        self.options = options;
        self
    }

    /// Parse input as a whole document and convert its `<body>`.
    pub fn full_document(mut self) -> Self {
        self.full_document = true;
        self
    }

    /// Set the heading style prefix.
    pub fn with_heading_style_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.options = self.options.with_heading_style_prefix(prefix);
        self
    }

    /// Keep text whitespace exactly as written.
    pub fn preserve_whitespace(mut self) -> Self {
        self.options = self.options.preserve_whitespace();
        self
    }

    /// Set the bullet marker for unordered lists.
    pub fn with_bullet_marker(mut self, marker: char) -> Self {
        self.options = self.options.with_bullet_marker(marker);
        self
    }

    /// Set the largest allowed colspan.
    pub fn with_max_colspan(mut self, max: u16) -> Self {
        self.options = self.options.with_max_colspan(max);
        self
    }

    /// Enable or disable bold header cells.
    pub fn with_header_cells_bold(mut self, bold: bool) -> Self {
        self.options = self.options.with_header_cells_bold(bold);
        self
    }

    /// Convert markup and return a result wrapper.
    pub fn convert(&self, markup: &str) -> Result<HtmlWordResult> {
        let section = html_to_section_with_options(markup, self.full_document, &self.options)?;
        Ok(HtmlWordResult { section })
    }

    /// Convert many documents in parallel.
    pub fn convert_batch(&self, documents: &[&str]) -> Vec<Result<HtmlWordResult>> {
        convert_batch(documents, self.full_document, &self.options)
            .into_iter()
            .map(|result| result.map(|section| HtmlWordResult { section }))
            .collect()
    }
}

/// Result of converting an HTML document.
#[derive(Debug, Clone)]
pub struct HtmlWordResult {
    /// The converted section
    pub section: Section,
}

impl HtmlWordResult {
    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.section, format)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.section)
    }

    /// Content statistics.
    pub fn stats(&self) -> SectionStats {
        SectionStats::from_section(&self.section)
    }

    /// Get plain text of all paragraphs and tables.
    pub fn plain_text(&self) -> String {
        self.section.plain_text()
    }

    /// Get the section.
    pub fn section(&self) -> &Section {
        &self.section
    }

    /// Take the section.
    pub fn into_section(self) -> Section {
        self.section
    }
}
