//! HTML to document model conversion.
//!
//! [`add_html`] walks a parsed element tree depth-first and writes it into
//! a [`DocumentModel`]. Each element is classified, its styles resolved,
//! and the matching model calls are made in document order. Conversion is
//! best effort: malformed styles, unknown tags and misplaced table or list
//! parts never fail the call. The only errors are those returned by the
//! model itself, which are passed back unchanged.
//!
//! # Example
//!
//! ```
//! use htmlword::convert::{add_html, ConvertOptions};
//! use htmlword::dom::{Element, Node};
//! use htmlword::model::{Container, DocumentBuilder};
//!
//! let tree: Node = Element::new("p")
//!     .child(Element::new("strong").with_text("Hello"))
//!     .into();
//!
//! let mut builder = DocumentBuilder::new();
//! add_html(&mut builder, Container::Section, &tree, false, &ConvertOptions::default())?;
//!
//! let section = builder.finish();
//! let paragraph = section.paragraphs().next().unwrap();
//! assert!(paragraph.runs().next().unwrap().style.bold);
//! # Ok::<(), htmlword::Error>(())
//! ```

mod context;
mod list;
mod table;
mod walker;

use crate::dom::Node;
use crate::error::Result;
use crate::model::{Container, DocumentModel};
use walker::Walker;

/// Options for conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Prefix of heading style names; level 2 becomes `{prefix}2`
    pub heading_style_prefix: String,

    /// Collapse whitespace in text the way a browser does
    pub collapse_whitespace: bool,

    /// Marker for unordered list items
    pub bullet_marker: char,

    /// Largest colspan passed to the document model
    pub max_colspan: u16,

    /// Make `<th>` text bold by default
    pub header_cells_bold: bool,
}

impl ConvertOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the heading style prefix.
    pub fn with_heading_style_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.heading_style_prefix = prefix.into();
        self
    }

    /// Enable or disable whitespace collapsing.
    pub fn with_collapse_whitespace(mut self, collapse: bool) -> Self {
        self.collapse_whitespace = collapse;
        self
    }

    /// Keep text whitespace exactly as written.
    pub fn preserve_whitespace(mut self) -> Self {
        self.collapse_whitespace = false;
        self
    }

    /// Set the bullet marker.
    pub fn with_bullet_marker(mut self, marker: char) -> Self {
        self.bullet_marker = marker;
        self
    }

    /// Set the largest allowed colspan (at least 1).
    pub fn with_max_colspan(mut self, max: u16) -> Self {
        self.max_colspan = max.max(1);
        self
    }

    /// Enable or disable bold header cells.
    pub fn with_header_cells_bold(mut self, bold: bool) -> Self {
        self.header_cells_bold = bold;
        self
    }

    /// Style name for a heading level.
    pub fn heading_style(&self, level: u8) -> String {
        format!("{}{}", self.heading_style_prefix, level)
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            heading_style_prefix: "Heading".to_string(),
            collapse_whitespace: true,
            bullet_marker: '\u{2022}',
            max_colspan: 63,
            header_cells_bold: true,
        }
    }
}

/// Convert an element tree into `container`.
///
/// With `full_document` set, conversion starts at the first `<body>` found
/// depth-first; if there is none, the whole tree is converted. Wrapper
/// elements (`html`, `body`, the fragment root) never produce containers.
pub fn add_html<M: DocumentModel + ?Sized>(
    model: &mut M,
    container: Container,
    root: &Node,
    full_document: bool,
    options: &ConvertOptions,
) -> Result<()> {
    let walker = Walker::new(model, container, options);

    if full_document {
        match root.as_element().and_then(|el| el.find("body")) {
            Some(body) => return walker.convert(&body.children),
            None => log::debug!("no <body> in document, converting the whole tree"),
        }
    }

    walker.convert(std::slice::from_ref(root))
}
