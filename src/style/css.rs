//! CSS value parsers.
//!
//! Every parser returns `None` for a value it does not understand; callers
//! drop the declaration in that case.

use crate::model::{Alignment, Border, BorderStyle, LineHeight, TableWidth};
use regex::Regex;
use std::sync::OnceLock;

/// Twips per CSS pixel (96 px per inch, 1440 twips per inch).
pub const TWIPS_PER_PX: f32 = 15.0;

/// Font size assumed when a relative size has nothing to scale.
pub const DEFAULT_FONT_SIZE: f32 = 12.0;

/// Border width used when a border shorthand names no width (1px).
const DEFAULT_BORDER_WIDTH: u32 = 15;

const NAMED_COLORS: &[(&str, &str)] = &[
    ("black", "000000"),
    ("silver", "C0C0C0"),
    ("gray", "808080"),
    ("grey", "808080"),
    ("white", "FFFFFF"),
    ("maroon", "800000"),
    ("red", "FF0000"),
    ("purple", "800080"),
    ("fuchsia", "FF00FF"),
    ("green", "008000"),
    ("lime", "00FF00"),
    ("olive", "808000"),
    ("yellow", "FFFF00"),
    ("navy", "000080"),
    ("blue", "0000FF"),
    ("teal", "008080"),
    ("aqua", "00FFFF"),
];

fn dimension_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([+-]?(?:\d+(?:\.\d*)?|\.\d+))\s*([a-z%]*)$").unwrap())
}

/// A number with its unit, e.g. `12.5pt` or `50%`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimension<'a> {
    /// Numeric part
    pub value: f32,
    /// Unit, lower-case; empty for unitless numbers
    pub unit: &'a str,
}

/// Split a value into number and unit.
pub fn parse_dimension(value: &str) -> Option<Dimension<'_>> {
    let caps = dimension_regex().captures(value.trim())?;
    let number = caps.get(1)?.as_str().parse::<f32>().ok()?;
    let unit = caps.get(2).map_or("", |m| m.as_str());
    Some(Dimension {
        value: number,
        unit,
    })
}

/// Parse an absolute length into twips.
///
/// Unitless numbers are pixels, as in presentational attributes.
pub fn parse_length(value: &str) -> Option<f32> {
    let lower = value.to_ascii_lowercase();
    let dim = parse_dimension(&lower)?;
    let factor = match dim.unit {
        "" | "px" => TWIPS_PER_PX,
        "pt" => 20.0,
        "pc" => 240.0,
        "in" => 1440.0,
        "cm" => 567.0,
        "mm" => 56.7,
        "em" | "rem" => 240.0,
        _ => return None,
    };
    Some(dim.value * factor)
}

/// Parse a non-negative length into whole twips.
pub fn parse_twips(value: &str) -> Option<u32> {
    parse_length(value)
        .filter(|twips| *twips >= 0.0)
        .map(|twips| twips.round() as u32)
}

/// Parse a color into upper-case `#RRGGBB`.
pub fn parse_color(value: &str) -> Option<String> {
    let raw = value.trim().to_ascii_lowercase();

    if let Some(hex) = raw.strip_prefix('#') {
        return parse_hex(hex);
    }
    if let Some(args) = raw.strip_prefix("rgb(").and_then(|r| r.strip_suffix(')')) {
        return parse_rgb(args);
    }

    NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == raw)
        .map(|(_, hex)| format!("#{}", hex))
}

fn parse_hex(hex: &str) -> Option<String> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let full: String = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 => hex.to_string(),
        _ => return None,
    };
    Some(format!("#{}", full.to_ascii_uppercase()))
}

fn parse_rgb(args: &str) -> Option<String> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return None;
    }

    let mut out = String::from("#");
    for part in parts {
        let channel = match part.strip_suffix('%') {
            Some(pct) => pct.trim().parse::<f32>().ok()?.clamp(0.0, 100.0) * 2.55,
            None => part.parse::<f32>().ok()?.clamp(0.0, 255.0),
        };
        out.push_str(&format!("{:02X}", channel.round() as u8));
    }
    Some(out)
}

/// Parse a `font-size` value into points.
///
/// Relative sizes (`em`, `%`, `smaller`, `larger`) scale `current`.
pub fn parse_font_size(value: &str, current: Option<f32>) -> Option<f32> {
    let raw = value.trim().to_ascii_lowercase();
    let base = current.unwrap_or(DEFAULT_FONT_SIZE);

    let keyword = match raw.as_str() {
        "xx-small" => Some(7.0),
        "x-small" => Some(7.5),
        "small" => Some(10.0),
        "medium" => Some(12.0),
        "large" => Some(13.5),
        "x-large" => Some(18.0),
        "xx-large" => Some(24.0),
        "xxx-large" => Some(36.0),
        "smaller" => Some(base / 1.2),
        "larger" => Some(base * 1.2),
        _ => None,
    };
    if keyword.is_some() {
        return keyword;
    }

    let dim = parse_dimension(&raw)?;
    let size = match dim.unit {
        "%" => base * dim.value / 100.0,
        "em" => base * dim.value,
        "rem" => DEFAULT_FONT_SIZE * dim.value,
        _ => parse_length(&raw)? / 20.0,
    };
    (size > 0.0).then_some(size)
}

/// Map a `text-align` value to logical alignment.
pub fn parse_alignment(value: &str) -> Option<Alignment> {
    match value.trim().to_ascii_lowercase().as_str() {
        "left" | "start" => Some(Alignment::Start),
        "right" | "end" => Some(Alignment::End),
        "center" => Some(Alignment::Center),
        "justify" => Some(Alignment::Both),
        _ => None,
    }
}

/// Parse a table or cell `width`.
pub fn parse_width(value: &str) -> Option<TableWidth> {
    let raw = value.trim().to_ascii_lowercase();
    if raw == "auto" {
        return None;
    }
    let dim = parse_dimension(&raw)?;
    if dim.value < 0.0 {
        return None;
    }
    if dim.unit == "%" {
        return Some(TableWidth::Percent(dim.value));
    }
    parse_twips(&raw).map(TableWidth::Fixed)
}

/// Parse a `line-height` value.
pub fn parse_line_height(value: &str) -> Option<LineHeight> {
    let raw = value.trim().to_ascii_lowercase();
    if raw == "normal" {
        return Some(LineHeight::Multiple(1.0));
    }
    let dim = parse_dimension(&raw)?;
    if dim.value <= 0.0 {
        return None;
    }
    match dim.unit {
        "" => Some(LineHeight::Multiple(dim.value)),
        "%" => Some(LineHeight::Multiple(dim.value / 100.0)),
        "em" => Some(LineHeight::Multiple(dim.value)),
        _ => parse_twips(&raw).map(LineHeight::Exact),
    }
}

/// Parse a border style keyword.
pub fn parse_border_style(value: &str) -> Option<BorderStyle> {
    match value.trim().to_ascii_lowercase().as_str() {
        "none" | "hidden" => Some(BorderStyle::None),
        "solid" | "groove" | "ridge" | "inset" | "outset" => Some(BorderStyle::Single),
        "double" => Some(BorderStyle::Double),
        "dotted" => Some(BorderStyle::Dotted),
        "dashed" => Some(BorderStyle::Dashed),
        _ => None,
    }
}

/// Parse a border width into twips.
pub fn parse_border_width(value: &str) -> Option<u32> {
    match value.trim().to_ascii_lowercase().as_str() {
        "thin" => Some(15),
        "medium" => Some(45),
        "thick" => Some(75),
        other => parse_twips(other),
    }
}

/// A thin single border with no color.
pub fn default_border() -> Border {
    Border {
        width: DEFAULT_BORDER_WIDTH,
        style: BorderStyle::Single,
        color: None,
    }
}

/// Parse a `border` shorthand: width, style and color in any order.
///
/// Returns `Some(None)` for an explicit "no border" (`none`, `0`).
pub fn parse_border(value: &str) -> Option<Option<Border>> {
    let mut width = None;
    let mut style = None;
    let mut color = None;

    for token in value.split_whitespace() {
        if style.is_none() {
            if let Some(s) = parse_border_style(token) {
                style = Some(s);
                continue;
            }
        }
        if width.is_none() {
            if let Some(w) = parse_border_width(token) {
                width = Some(w);
                continue;
            }
        }
        if color.is_none() {
            if let Some(c) = parse_color(token) {
                color = Some(c);
                continue;
            }
        }
        return None;
    }

    if width.is_none() && style.is_none() && color.is_none() {
        return None;
    }
    if style == Some(BorderStyle::None) || width == Some(0) {
        return Some(None);
    }

    Some(Some(Border {
        width: width.unwrap_or(DEFAULT_BORDER_WIDTH),
        style: style.unwrap_or_default(),
        color,
    }))
}

/// Read a `font-weight` value: `Some(true)` for bold, `Some(false)` for normal.
pub fn parse_font_weight(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "bold" | "bolder" => Some(true),
        "normal" | "lighter" => Some(false),
        numeric => numeric.parse::<u16>().ok().map(|w| w >= 700),
    }
}

/// First family of a `font-family` list, unquoted.
pub fn parse_font_family(value: &str) -> Option<String> {
    let first = value.split(',').next()?.trim();
    let name = first.trim_matches(|c| c == '"' || c == '\'').trim();
    (!name.is_empty()).then(|| name.to_string())
}
