//! Structural classification of elements by tag name.

use std::fmt;

/// What an element contributes to the document structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Opens a paragraph (`p`, `div`, `blockquote`, ...)
    BlockParagraph,
    /// Opens a heading paragraph of the given level (1-6)
    Heading(u8),
    /// Styles its content without opening a paragraph
    InlineRun,
    /// `table`
    TableRoot,
    /// `thead`: rows inside are header rows
    TableHead,
    /// `tbody` or `tfoot`
    TableBody,
    /// `tr`
    TableRow,
    /// `td`, or `th` when `header` is set
    TableCell {
        /// Header cell
        header: bool,
    },
    /// `ol`
    ListOrdered,
    /// `ul`
    ListUnordered,
    /// `li`
    ListItem,
    /// `br`
    LineBreak,
    /// `hr`
    PageBreak,
    /// Skipped together with its content
    Ignored,
    /// Transparent: children are processed as if the element were absent
    Passthrough,
}

impl ElementKind {
    /// Whether the element closes the open paragraph when it starts.
    pub fn is_block(&self) -> bool {
        matches!(
            self,
            ElementKind::BlockParagraph
                | ElementKind::Heading(_)
                | ElementKind::TableRoot
                | ElementKind::TableHead
                | ElementKind::TableBody
                | ElementKind::TableRow
                | ElementKind::TableCell { .. }
                | ElementKind::ListOrdered
                | ElementKind::ListUnordered
                | ElementKind::ListItem
                | ElementKind::PageBreak
        )
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::BlockParagraph => write!(f, "block"),
            ElementKind::Heading(level) => write!(f, "heading {}", level),
            ElementKind::InlineRun => write!(f, "inline"),
            ElementKind::TableRoot => write!(f, "table"),
            ElementKind::TableHead => write!(f, "table head"),
            ElementKind::TableBody => write!(f, "table body"),
            ElementKind::TableRow => write!(f, "table row"),
            ElementKind::TableCell { header: true } => write!(f, "header cell"),
            ElementKind::TableCell { header: false } => write!(f, "table cell"),
            ElementKind::ListOrdered => write!(f, "ordered list"),
            ElementKind::ListUnordered => write!(f, "unordered list"),
            ElementKind::ListItem => write!(f, "list item"),
            ElementKind::LineBreak => write!(f, "line break"),
            ElementKind::PageBreak => write!(f, "page break"),
            ElementKind::Ignored => write!(f, "ignored"),
            ElementKind::Passthrough => write!(f, "passthrough"),
        }
    }
}

/// Classify a lower-case tag name.
pub fn classify(tag: &str) -> ElementKind {
    match tag {
        "h1" => ElementKind::Heading(1),
        "h2" => ElementKind::Heading(2),
        "h3" => ElementKind::Heading(3),
        "h4" => ElementKind::Heading(4),
        "h5" => ElementKind::Heading(5),
        "h6" => ElementKind::Heading(6),

        "p" | "div" | "blockquote" | "pre" | "section" | "article" | "header" | "footer"
        | "address" | "figure" | "figcaption" | "caption" | "center" | "dt" | "dd" | "main"
        | "nav" | "aside" => ElementKind::BlockParagraph,

        "span" | "strong" | "b" | "em" | "i" | "u" | "s" | "strike" | "del" | "ins" | "sup"
        | "sub" | "font" | "a" | "code" | "kbd" | "samp" | "tt" | "var" | "dfn" | "small"
        | "big" | "mark" | "label" | "abbr" | "cite" | "q" => ElementKind::InlineRun,

        "table" => ElementKind::TableRoot,
        "thead" => ElementKind::TableHead,
        "tbody" | "tfoot" => ElementKind::TableBody,
        "tr" => ElementKind::TableRow,
        "td" => ElementKind::TableCell { header: false },
        "th" => ElementKind::TableCell { header: true },

        "ol" => ElementKind::ListOrdered,
        "ul" => ElementKind::ListUnordered,
        "li" => ElementKind::ListItem,

        "br" => ElementKind::LineBreak,
        "hr" => ElementKind::PageBreak,

        "head" | "title" | "meta" | "link" | "script" | "style" | "template" | "noscript"
        | "colgroup" | "col" => ElementKind::Ignored,

        _ => ElementKind::Passthrough,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings() {
        for level in 1..=6u8 {
            assert_eq!(
                classify(&format!("h{}", level)),
                ElementKind::Heading(level)
            );
        }
        assert_eq!(classify("h7"), ElementKind::Passthrough);
    }

    #[test]
    fn test_blocks_and_inlines() {
        assert_eq!(classify("p"), ElementKind::BlockParagraph);
        assert_eq!(classify("div"), ElementKind::BlockParagraph);
        for tag in ["strong", "em", "sup", "sub", "u", "span"] {
            assert_eq!(classify(tag), ElementKind::InlineRun);
            assert!(!classify(tag).is_block());
        }
    }

    #[test]
    fn test_table_parts() {
        assert_eq!(classify("th"), ElementKind::TableCell { header: true });
        assert_eq!(classify("td"), ElementKind::TableCell { header: false });
        assert_eq!(classify("tbody"), ElementKind::TableBody);
        assert!(classify("tr").is_block());
    }

    #[test]
    fn test_unknown_and_ignored() {
        assert_eq!(classify("blink"), ElementKind::Passthrough);
        assert_eq!(classify("html"), ElementKind::Passthrough);
        assert_eq!(classify("body"), ElementKind::Passthrough);
        assert_eq!(classify("script"), ElementKind::Ignored);
        assert!(!ElementKind::Passthrough.is_block());
    }

    #[test]
    fn test_display() {
        assert_eq!(ElementKind::Heading(2).to_string(), "heading 2");
        assert_eq!(
            ElementKind::TableCell { header: true }.to_string(),
            "header cell"
        );
    }
}
