//! Integration tests for style resolution.

use htmlword::dom::Element;
use htmlword::html_to_section;
use htmlword::model::{
    Alignment, Border, BorderStyle, LineHeight, Section, TableWidth, TextRun, TextStyle, Underline,
    VerticalAlignment,
};
use htmlword::style::{self, css, StyleMap};

fn first_run(section: &Section) -> TextRun {
    section
        .paragraphs()
        .next()
        .and_then(|p| p.runs().next())
        .cloned()
        .expect("no run")
}

fn run_style(markup: &str) -> TextStyle {
    first_run(&html_to_section(markup, false).unwrap()).style
}

// ==================== Declaration Parsing ====================

#[test]
fn test_resolve_lowercases_keys_and_inline_wins() {
    let el = Element::new("b").attr("style", "FONT-WEIGHT: normal; Color: Red");
    let map = style::resolve(&el);

    assert_eq!(map.get("font-weight"), Some("normal"));
    assert_eq!(map.get("color"), Some("Red"));
}

#[test]
fn test_malformed_declarations_are_skipped() {
    let map = StyleMap::parse("color; : red; font-style: italic; margin-top:; ;");
    assert_eq!(map.len(), 1);
    assert_eq!(map.get("font-style"), Some("italic"));
}

#[test]
fn test_important_is_ignored() {
    let style = run_style(r#"<p style="font-weight: bold !important">x</p>"#);
    assert!(style.bold);
}

#[test]
fn test_unknown_properties_are_ignored() {
    let style = run_style(r#"<p style="float: left; cursor: pointer">x</p>"#);
    assert_eq!(style, TextStyle::default());
}

// ==================== Run Properties ====================

#[test]
fn test_font_attributes() {
    let style = run_style(r#"<p><font color="red" face="Arial, sans-serif" size="5">x</font></p>"#);
    assert_eq!(style.color.as_deref(), Some("#FF0000"));
    assert_eq!(style.font_name.as_deref(), Some("Arial"));
    assert_eq!(style.font_size, Some(18.0));

    let style = run_style(r#"<p><font size="+2147483647">x</font></p>"#);
    assert_eq!(style.font_size, Some(36.0));
}

#[test]
fn test_font_sizes() {
    assert_eq!(
        run_style(r#"<p style="font-size: 14px">x</p>"#).font_size,
        Some(10.5)
    );
    assert_eq!(
        run_style(r#"<p style="font-size: 20pt"><span style="font-size: 50%">x</span></p>"#)
            .font_size,
        Some(10.0)
    );
    assert_eq!(
        run_style(r#"<p style="font-size: large">x</p>"#).font_size,
        Some(13.5)
    );
    assert_eq!(
        run_style(r#"<p style="font-size: -3px">x</p>"#).font_size,
        None
    );
}

#[test]
fn test_font_family_is_unquoted() {
    let style = run_style(r#"<p style="font-family: 'Times New Roman', serif">x</p>"#);
    assert_eq!(style.font_name.as_deref(), Some("Times New Roman"));
}

#[test]
fn test_colors() {
    assert_eq!(
        run_style(r#"<p style="color: rgb(255, 128, 0)">x</p>"#).color.as_deref(),
        Some("#FF8000")
    );
    assert_eq!(
        run_style(r#"<p style="color: #abc">x</p>"#).color.as_deref(),
        Some("#AABBCC")
    );
    // A bad value keeps the inherited color.
    assert_eq!(
        run_style(r#"<p style="color: red"><span style="color: notacolor">x</span></p>"#)
            .color
            .as_deref(),
        Some("#FF0000")
    );
}

#[test]
fn test_text_decoration_variants() {
    assert_eq!(
        run_style(r#"<p><u><span style="text-decoration: none">x</span></u></p>"#).underline,
        Underline::None
    );
    assert_eq!(
        run_style(r#"<p style="text-decoration: underline double">x</p>"#).underline,
        Underline::Double
    );
    assert_eq!(
        run_style(r#"<p style="text-decoration: underline; text-decoration-style: wavy">x</p>"#)
            .underline,
        Underline::Wave
    );

    let style = run_style(r#"<p><s><u>x</u></s></p>"#);
    assert!(style.strikethrough);
    assert_eq!(style.underline, Underline::Single);
}

#[test]
fn test_decoration_style_without_underline_does_nothing() {
    let style = run_style(r#"<p style="text-decoration-style: dotted">x</p>"#);
    assert_eq!(style.underline, Underline::None);
}

#[test]
fn test_link_and_mark_defaults() {
    let link = run_style(r#"<p><a href="https://example.com">x</a></p>"#);
    assert_eq!(link.color.as_deref(), Some("#0000FF"));
    assert_eq!(link.underline, Underline::Single);

    let mark = run_style("<p><mark>x</mark></p>");
    assert_eq!(mark.background_color.as_deref(), Some("#FFFF00"));
}

// ==================== Paragraph Properties ====================

#[test]
fn test_spacing_and_indentation() {
    let section = html_to_section(
        r#"<p style="margin: 10px 0 20px 1in; text-indent: -20px; line-height: 150%">x</p>"#,
        false,
    )
    .unwrap();
    let style = &section.paragraphs().next().unwrap().style;

    assert_eq!(style.space_before, Some(150));
    assert_eq!(style.space_after, Some(300));
    assert_eq!(style.indent, Some(1440));
    assert_eq!(style.first_line_indent, Some(-300));
    assert_eq!(style.line_height, Some(LineHeight::Multiple(1.5)));
}

#[test]
fn test_line_height_length_is_exact() {
    let section = html_to_section(r#"<p style="line-height: 18pt">x</p>"#, false).unwrap();
    let style = &section.paragraphs().next().unwrap().style;
    assert_eq!(style.line_height, Some(LineHeight::Exact(360)));
}

#[test]
fn test_align_attribute_and_override() {
    let section = html_to_section(
        r#"<h1 align="center">a</h1><p align="right" style="text-align: justify">b</p>"#,
        false,
    )
    .unwrap();
    let alignments: Vec<Option<Alignment>> =
        section.paragraphs().map(|p| p.style.alignment).collect();
    assert_eq!(alignments, vec![Some(Alignment::Center), Some(Alignment::Both)]);
}

#[test]
fn test_alignment_inherits_into_nested_blocks() {
    let section = html_to_section(
        r#"<div style="text-align: right"><p>a</p></div>"#,
        false,
    )
    .unwrap();
    let p = section.paragraphs().next().unwrap();
    assert_eq!(p.style.alignment, Some(Alignment::End));
}

// ==================== Table Properties ====================

#[test]
fn test_cell_border_longhands() {
    let section = html_to_section(
        r#"<table><tr><td valign="bottom" style="border-style: dotted; border-color: #123456">x</td></tr></table>"#,
        false,
    )
    .unwrap();
    let cell = &section.tables().next().unwrap().rows[0].cells[0];

    assert_eq!(cell.style.vertical_alignment, Some(VerticalAlignment::Bottom));
    assert_eq!(
        cell.style.border,
        Some(Border {
            width: 15,
            style: BorderStyle::Dotted,
            color: Some("#123456".to_string()),
        })
    );
}

#[test]
fn test_inline_border_none_overrides_attribute() {
    let section = html_to_section(
        r#"<table border="2" style="border: none"><tr><td>x</td></tr></table>"#,
        false,
    )
    .unwrap();
    assert_eq!(section.tables().next().unwrap().style.border, None);
}

#[test]
fn test_width_attributes() {
    let section = html_to_section(
        r#"<table style="width: auto"><tr><td width="120">a</td><td style="width: 25%">b</td></tr></table>"#,
        false,
    )
    .unwrap();
    let table = section.tables().next().unwrap();

    assert_eq!(table.style.width, None);
    assert_eq!(table.rows[0].cells[0].style.width, Some(TableWidth::Fixed(1800)));
    assert_eq!(table.rows[0].cells[1].style.width, Some(TableWidth::Percent(25.0)));
}

// ==================== Value Parsers ====================

#[test]
fn test_css_value_parsers() {
    assert_eq!(css::parse_length("1in"), Some(1440.0));
    assert_eq!(css::parse_length("2pt"), Some(40.0));
    assert_eq!(css::parse_length("1vw"), None);
    assert_eq!(css::parse_twips("-5px"), None);
    assert_eq!(css::parse_twips("1cm"), Some(567));

    assert_eq!(css::parse_color("transparent"), None);
    assert_eq!(css::parse_color("#12345"), None);
    assert_eq!(css::parse_color("rgb(100%, 0%, 0%)").as_deref(), Some("#FF0000"));

    assert_eq!(css::parse_alignment("end"), Some(Alignment::End));
    assert_eq!(css::parse_font_weight("600"), Some(false));
    assert_eq!(css::parse_font_weight("800"), Some(true));
    assert_eq!(css::parse_border("0"), Some(None));
    assert_eq!(css::parse_border("wobbly"), None);
}
