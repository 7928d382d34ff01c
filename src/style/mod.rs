//! Style resolution.
//!
//! [`resolve`] builds the [`StyleMap`] of an element from a two-tier
//! cascade: tag defaults and presentational attributes first, then the
//! declarations of its `style` attribute. The `apply_*` functions translate
//! a map into model properties, one declaration at a time in cascade order.
//! Unknown properties and values that fail to parse are ignored.

pub mod css;
mod declarations;
mod defaults;

pub use declarations::{Declaration, StyleMap};
pub use defaults::{presentational, tag_defaults};

use crate::dom::Element;
use crate::model::{
    Alignment, Border, CellStyle, ParagraphStyle, TableStyle, TextStyle, Underline,
    VerticalAlignment,
};

/// Resolve the declarations that apply to an element.
pub fn resolve(element: &Element) -> StyleMap {
    let mut map = StyleMap::parse(tag_defaults(&element.tag));
    map.extend(author_styles(element));
    map
}

/// Resolve an element's declarations without its tag defaults.
pub fn resolve_without_defaults(element: &Element) -> StyleMap {
    author_styles(element)
}

fn author_styles(element: &Element) -> StyleMap {
    let mut map = presentational(element);
    if let Some(css) = element.get_attr("style") {
        map.extend_css(css);
    }
    map
}

/// Apply run-level properties to an inherited text style.
///
/// `background-color` is not handled here; see [`background`].
pub fn apply_run(map: &StyleMap, run: &mut TextStyle) {
    for decl in map.iter() {
        let value = decl.value.as_str();
        match decl.property.as_str() {
            "font-weight" => {
                if let Some(bold) = css::parse_font_weight(value) {
                    run.bold = bold;
                }
            }
            "font-style" => match value.to_ascii_lowercase().as_str() {
                "italic" | "oblique" => run.italic = true,
                "normal" => run.italic = false,
                _ => {}
            },
            "text-decoration" | "text-decoration-line" => apply_text_decoration(value, run),
            "text-decoration-style" => {
                if let Some(kind) = underline_kind(value) {
                    if run.is_underlined() {
                        run.underline = kind;
                    }
                }
            }
            "vertical-align" => match value.to_ascii_lowercase().as_str() {
                "super" => {
                    run.superscript = true;
                    run.subscript = false;
                }
                "sub" => {
                    run.subscript = true;
                    run.superscript = false;
                }
                "baseline" => {
                    run.superscript = false;
                    run.subscript = false;
                }
                _ => {}
            },
            "color" => match css::parse_color(value) {
                Some(color) => run.color = Some(color),
                None => log::debug!("ignoring color {:?}", value),
            },
            "font-family" => {
                if let Some(family) = css::parse_font_family(value) {
                    run.font_name = Some(family);
                }
            }
            "font-size" => {
                if let Some(size) = css::parse_font_size(value, run.font_size) {
                    run.font_size = Some(size);
                }
            }
            _ => {}
        }
    }
}

/// Decorations are independent flags: `underline` and `line-through` add
/// to what is already set, `none` clears both.
fn apply_text_decoration(value: &str, run: &mut TextStyle) {
    let mut underline = false;
    let mut strike = false;
    let mut none = false;
    let mut kind = None;

    for token in value.split_whitespace() {
        match token.to_ascii_lowercase().as_str() {
            "underline" => underline = true,
            "line-through" => strike = true,
            "none" => none = true,
            other => {
                if let Some(k) = underline_kind(other) {
                    kind = Some(k);
                }
            }
        }
    }

    if none {
        run.underline = Underline::None;
        run.strikethrough = false;
    }
    if underline {
        run.underline = kind.unwrap_or(Underline::Single);
    }
    if strike {
        run.strikethrough = true;
    }
}

fn underline_kind(value: &str) -> Option<Underline> {
    match value.trim().to_ascii_lowercase().as_str() {
        "solid" => Some(Underline::Single),
        "double" => Some(Underline::Double),
        "dotted" => Some(Underline::Dotted),
        "dashed" => Some(Underline::Dash),
        "wavy" => Some(Underline::Wave),
        _ => None,
    }
}

/// Effective `text-align` of a map.
pub fn alignment(map: &StyleMap) -> Option<Alignment> {
    map.iter()
        .filter(|d| d.property == "text-align")
        .filter_map(|d| css::parse_alignment(&d.value))
        .last()
}

/// Effective background color from `background-color` or `background`.
pub fn background(map: &StyleMap) -> Option<String> {
    map.iter()
        .filter_map(|d| match d.property.as_str() {
            "background-color" => css::parse_color(&d.value),
            "background" => d.value.split_whitespace().find_map(css::parse_color),
            _ => None,
        })
        .last()
}

/// Apply spacing, indentation and line height to a paragraph style.
pub fn apply_paragraph(map: &StyleMap, style: &mut ParagraphStyle) {
    for decl in map.iter() {
        let value = decl.value.as_str();
        match decl.property.as_str() {
            "margin" => {
                let sides: Vec<&str> = value.split_whitespace().collect();
                let (top, bottom, left) = match sides.as_slice() {
                    [all] => (*all, *all, *all),
                    [vertical, horizontal] => (*vertical, *vertical, *horizontal),
                    [top, horizontal, bottom] => (*top, *bottom, *horizontal),
                    [top, _, bottom, left] => (*top, *bottom, *left),
                    _ => continue,
                };
                if let Some(twips) = css::parse_twips(top) {
                    style.space_before = Some(twips);
                }
                if let Some(twips) = css::parse_twips(bottom) {
                    style.space_after = Some(twips);
                }
                if let Some(twips) = css::parse_twips(left) {
                    style.indent = Some(twips);
                }
            }
            "margin-top" => {
                if let Some(twips) = css::parse_twips(value) {
                    style.space_before = Some(twips);
                }
            }
            "margin-bottom" => {
                if let Some(twips) = css::parse_twips(value) {
                    style.space_after = Some(twips);
                }
            }
            "margin-left" => {
                if let Some(twips) = css::parse_twips(value) {
                    style.indent = Some(twips);
                }
            }
            "text-indent" => {
                if let Some(twips) = css::parse_length(value) {
                    style.first_line_indent = Some(twips.round() as i32);
                }
            }
            "line-height" => {
                if let Some(height) = css::parse_line_height(value) {
                    style.line_height = Some(height);
                }
            }
            _ => {}
        }
    }
}

/// Apply width, borders and shading to a table style.
pub fn apply_table(map: &StyleMap, style: &mut TableStyle) {
    for decl in map.iter() {
        match decl.property.as_str() {
            "width" => style.width = css::parse_width(&decl.value),
            _ => apply_border(decl, &mut style.border),
        }
    }
    if let Some(color) = background(map) {
        style.shading = Some(color);
    }
}

/// Apply width, borders, vertical alignment and shading to a cell style.
pub fn apply_cell(map: &StyleMap, style: &mut CellStyle) {
    for decl in map.iter() {
        match decl.property.as_str() {
            "width" => style.width = css::parse_width(&decl.value),
            "vertical-align" => {
                if let Some(valign) = vertical_alignment(&decl.value) {
                    style.vertical_alignment = Some(valign);
                }
            }
            _ => apply_border(decl, &mut style.border),
        }
    }
    if let Some(color) = background(map) {
        style.shading = Some(color);
    }
}

fn vertical_alignment(value: &str) -> Option<VerticalAlignment> {
    match value.trim().to_ascii_lowercase().as_str() {
        "top" => Some(VerticalAlignment::Top),
        "middle" | "center" => Some(VerticalAlignment::Middle),
        "bottom" => Some(VerticalAlignment::Bottom),
        _ => None,
    }
}

/// `border-width` and `border-color` adjust an existing border;
/// `border-style` creates one.
fn apply_border(decl: &Declaration, border: &mut Option<Border>) {
    let value = decl.value.as_str();
    match decl.property.as_str() {
        "border" => {
            if let Some(parsed) = css::parse_border(value) {
                *border = parsed;
            }
        }
        "border-style" => {
            if let Some(style) = value.split_whitespace().next().and_then(css::parse_border_style) {
                if style == crate::model::BorderStyle::None {
                    *border = None;
                } else {
                    border.get_or_insert_with(css::default_border).style = style;
                }
            }
        }
        "border-width" => {
            if let Some(width) = value.split_whitespace().next().and_then(css::parse_border_width) {
                if width == 0 {
                    *border = None;
                } else if let Some(b) = border.as_mut() {
                    b.width = width;
                }
            }
        }
        "border-color" => {
            if let Some(color) = value.split_whitespace().next().and_then(css::parse_color) {
                if let Some(b) = border.as_mut() {
                    b.color = Some(color);
                }
            }
        }
        _ => {}
    }
}

fn is_page_break(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "always" | "page" | "left" | "right"
    )
}

/// Check for `page-break-before: always` or `break-before: page`.
pub fn page_break_before(map: &StyleMap) -> bool {
    map.iter()
        .filter(|d| d.property == "page-break-before" || d.property == "break-before")
        .last()
        .is_some_and(|d| is_page_break(&d.value))
}

/// Check for `page-break-after: always` or `break-after: page`.
pub fn page_break_after(map: &StyleMap) -> bool {
    map.iter()
        .filter(|d| d.property == "page-break-after" || d.property == "break-after")
        .last()
        .is_some_and(|d| is_page_break(&d.value))
}

/// The list marker keyword from `list-style-type` or `list-style`.
pub fn list_style_type(map: &StyleMap) -> Option<String> {
    map.iter()
        .filter_map(|d| match d.property.as_str() {
            "list-style-type" => Some(d.value.to_ascii_lowercase()),
            "list-style" => d
                .value
                .split_whitespace()
                .map(str::to_ascii_lowercase)
                .find(|t| !t.starts_with("url(") && t != "inside" && t != "outside"),
            _ => None,
        })
        .last()
}
