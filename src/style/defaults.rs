//! Built-in tag defaults and presentational attributes.
//!
//! Both form the lower tier of the cascade; the `style` attribute is
//! applied on top of them.

use super::StyleMap;
use crate::dom::Element;

/// Default declarations for a tag, as a declaration block.
pub fn tag_defaults(tag: &str) -> &'static str {
    match tag {
        "b" | "strong" | "th" => "font-weight: bold",
        "i" | "em" | "cite" | "var" | "dfn" | "address" => "font-style: italic",
        "u" | "ins" => "text-decoration: underline",
        "s" | "strike" | "del" => "text-decoration: line-through",
        "sup" => "vertical-align: super",
        "sub" => "vertical-align: sub",
        "code" | "kbd" | "samp" | "tt" | "pre" => "font-family: Courier New",
        "small" => "font-size: smaller",
        "big" => "font-size: larger",
        "mark" => "background-color: yellow",
        "a" => "color: #0000FF; text-decoration: underline",
        "center" => "text-align: center",
        "blockquote" => "margin-left: 40px",
        _ => "",
    }
}

/// Sizes of `<font size="1..7">` in points.
const FONT_SIZES: [&str; 7] = ["7.5pt", "10pt", "12pt", "13.5pt", "18pt", "24pt", "36pt"];

/// Declarations implied by presentational attributes.
pub fn presentational(element: &Element) -> StyleMap {
    let mut map = StyleMap::new();

    if let Some(align) = element.get_attr("align") {
        // On a table `align` positions the table itself.
        if element.tag != "table" {
            map.set("text-align", align);
        }
    }
    if let Some(color) = element.get_attr("bgcolor") {
        map.set("background-color", color);
    }
    if let Some(valign) = element.get_attr("valign") {
        map.set("vertical-align", valign);
    }

    match element.tag.as_str() {
        "font" => {
            if let Some(color) = element.get_attr("color") {
                map.set("color", color);
            }
            if let Some(face) = element.get_attr("face") {
                map.set("font-family", face);
            }
            if let Some(size) = element.get_attr("size").and_then(font_size_attr) {
                map.set("font-size", size);
            }
        }
        "table" => {
            if let Some(border) = element.get_attr("border") {
                match border.trim().parse::<u32>() {
                    Ok(0) => map.set("border", "none"),
                    Ok(px) => map.set("border", &format!("{}px solid", px)),
                    Err(_) => {}
                }
            }
            width_attr(element, &mut map);
        }
        "td" | "th" | "col" => width_attr(element, &mut map),
        _ => {}
    }

    map
}

fn width_attr(element: &Element, map: &mut StyleMap) {
    if let Some(width) = element.get_attr("width") {
        let width = width.trim();
        if width.chars().all(|c| c.is_ascii_digit()) && !width.is_empty() {
            map.set("width", &format!("{}px", width));
        } else {
            map.set("width", width);
        }
    }
}

fn font_size_attr(size: &str) -> Option<&'static str> {
    let size = size.trim();
    let base = 3i32;
    let level = if let Some(rel) = size.strip_prefix('+') {
        base.saturating_add(rel.parse::<i32>().ok()?)
    } else if let Some(rel) = size.strip_prefix('-') {
        base.saturating_sub(rel.parse::<i32>().ok()?)
    } else {
        size.parse::<i32>().ok()?
    };
    Some(FONT_SIZES[(level.clamp(1, 7) - 1) as usize])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_defaults() {
        assert_eq!(tag_defaults("strong"), "font-weight: bold");
        assert_eq!(tag_defaults("th"), "font-weight: bold");
        assert_eq!(tag_defaults("u"), "text-decoration: underline");
        assert_eq!(tag_defaults("span"), "");
    }

    #[test]
    fn test_font_attributes() {
        let el = Element::new("font")
            .attr("color", "red")
            .attr("face", "Arial")
            .attr("size", "+1");
        let map = presentational(&el);
        assert_eq!(map.get("color"), Some("red"));
        assert_eq!(map.get("font-family"), Some("Arial"));
        assert_eq!(map.get("font-size"), Some("13.5pt"));

        let el = Element::new("font").attr("size", "+2147483647");
        assert_eq!(presentational(&el).get("font-size"), Some("36pt"));
        let el = Element::new("font").attr("size", "-2147483647");
        assert_eq!(presentational(&el).get("font-size"), Some("7.5pt"));
    }

    #[test]
    fn test_table_attributes() {
        let el = Element::new("table")
            .attr("border", "2")
            .attr("width", "300")
            .attr("align", "center");
        let map = presentational(&el);
        assert_eq!(map.get("border"), Some("2px solid"));
        assert_eq!(map.get("width"), Some("300px"));
        assert!(!map.contains("text-align"));

        let el = Element::new("table").attr("border", "0");
        assert_eq!(presentational(&el).get("border"), Some("none"));
    }

    #[test]
    fn test_cell_attributes() {
        let el = Element::new("td")
            .attr("width", "25%")
            .attr("valign", "middle")
            .attr("bgcolor", "#eee")
            .attr("align", "right");
        let map = presentational(&el);
        assert_eq!(map.get("width"), Some("25%"));
        assert_eq!(map.get("vertical-align"), Some("middle"));
        assert_eq!(map.get("background-color"), Some("#eee"));
        assert_eq!(map.get("text-align"), Some("right"));
    }
}
