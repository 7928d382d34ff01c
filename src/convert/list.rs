//! List assembly: numbering families, depth and item counters.

use crate::dom::Element;
use crate::model::{ListInfo, ListStyle, NumberStyle};
use crate::style::{self, StyleMap};

/// An open `<ul>` or `<ol>`.
#[derive(Debug)]
pub(crate) struct ListFrame {
    pub style: ListStyle,
    /// Nesting depth, 1 for a top-level list
    pub depth: u8,
    next: u32,
}

impl ListFrame {
    /// Build a list frame from its element and resolved styles.
    pub fn from_element(
        element: &Element,
        map: &StyleMap,
        ordered: bool,
        depth: u8,
        bullet: char,
    ) -> Self {
        let keyword = style::list_style_type(map);

        if ordered {
            let number_style = keyword
                .as_deref()
                .and_then(number_style_keyword)
                .or_else(|| element.get_attr("type").and_then(number_style_attr))
                .unwrap_or_default();
            let start = element
                .get_attr("start")
                .and_then(|s| s.trim().parse::<u32>().ok())
                .unwrap_or(1);
            Self {
                style: ListStyle::Ordered {
                    start,
                    number_style,
                },
                depth,
                next: start,
            }
        } else {
            let marker = match keyword.as_deref() {
                Some("circle") => '\u{25E6}',
                Some("square") => '\u{25AA}',
                _ => bullet,
            };
            Self::unordered(depth, marker)
        }
    }

    /// An unordered list with the given marker.
    pub fn unordered(depth: u8, marker: char) -> Self {
        Self {
            style: ListStyle::Unordered { marker },
            depth,
            next: 1,
        }
    }

    /// Number the next item. `value` restarts the count, as `<li value>` does.
    pub fn next_item(&mut self, value: Option<u32>) -> ListInfo {
        let number = value.unwrap_or(self.next);
        self.next = number.saturating_add(1);

        let item_number = match self.style {
            ListStyle::Ordered { .. } => Some(number),
            ListStyle::Unordered { .. } => None,
        };
        ListInfo {
            style: self.style.clone(),
            depth: self.depth,
            item_number,
        }
    }
}

fn number_style_keyword(keyword: &str) -> Option<NumberStyle> {
    match keyword {
        "decimal" => Some(NumberStyle::Decimal),
        "lower-alpha" | "lower-latin" => Some(NumberStyle::LowerAlpha),
        "upper-alpha" | "upper-latin" => Some(NumberStyle::UpperAlpha),
        "lower-roman" => Some(NumberStyle::LowerRoman),
        "upper-roman" => Some(NumberStyle::UpperRoman),
        _ => None,
    }
}

/// `<ol type>` is case-sensitive.
fn number_style_attr(value: &str) -> Option<NumberStyle> {
    match value.trim() {
        "1" => Some(NumberStyle::Decimal),
        "a" => Some(NumberStyle::LowerAlpha),
        "A" => Some(NumberStyle::UpperAlpha),
        "i" => Some(NumberStyle::LowerRoman),
        "I" => Some(NumberStyle::UpperRoman),
        _ => None,
    }
}
