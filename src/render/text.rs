//! Plain text rendering of converted sections.

use crate::error::Result;
use crate::model::{Block, ListInfo, ListStyle, NumberStyle, Paragraph, Section, Table};

/// Convert a section to plain text.
///
/// Paragraphs are separated by blank lines, list items carry their marker
/// and are indented by depth, table cells are separated by tabs and page
/// breaks become form feeds.
pub fn to_text(section: &Section) -> Result<String> {
    let mut output = String::new();
    render_blocks(&mut output, &section.elements);
    Ok(output.trim().to_string())
}

fn render_blocks(output: &mut String, blocks: &[Block]) {
    for block in blocks {
        match block {
            Block::Paragraph(p) => render_paragraph(output, p),
            Block::Table(t) => render_table(output, t),
            Block::PageBreak => output.push_str("\u{000C}\n"),
        }
    }
}

fn render_paragraph(output: &mut String, para: &Paragraph) {
    match &para.style.list_info {
        Some(info) => {
            output.push_str(&"  ".repeat(usize::from(info.depth.saturating_sub(1))));
            output.push_str(&list_marker(info));
            output.push(' ');
            output.push_str(&para.plain_text());
            output.push('\n');
        }
        None => {
            output.push_str(&para.plain_text());
            output.push_str("\n\n");
        }
    }
}

fn render_table(output: &mut String, table: &Table) {
    for row in &table.rows {
        let cells: Vec<String> = row
            .cells
            .iter()
            .map(|cell| cell.plain_text().replace('\n', " "))
            .collect();
        output.push_str(&cells.join("\t"));
        output.push('\n');
    }
    output.push('\n');
}

/// Marker text for a list item.
pub(crate) fn list_marker(info: &ListInfo) -> String {
    match &info.style {
        ListStyle::Unordered { marker } => marker.to_string(),
        ListStyle::Ordered { number_style, .. } => {
            let num = info.item_number.unwrap_or(1);
            match number_style {
                NumberStyle::Decimal => format!("{}.", num),
                NumberStyle::LowerAlpha => format!("{}.", to_alpha(num).to_lowercase()),
                NumberStyle::UpperAlpha => format!("{}.", to_alpha(num)),
                NumberStyle::LowerRoman => format!("{}.", to_roman(num).to_lowercase()),
                NumberStyle::UpperRoman => format!("{}.", to_roman(num)),
            }
        }
    }
}

/// Convert number to letters: A..Z, then AA, AB, ...
fn to_alpha(mut num: u32) -> String {
    if num == 0 {
        return "0".to_string();
    }
    let mut letters = Vec::new();
    while num > 0 {
        num -= 1;
        letters.push(char::from(b'A' + (num % 26) as u8));
        num /= 26;
    }
    letters.iter().rev().collect()
}

/// Convert number to Roman numerals.
fn to_roman(mut num: u32) -> String {
    if num == 0 {
        return "0".to_string();
    }
    let numerals = [
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];

    let mut result = String::new();
    for (value, symbol) in numerals {
        while num >= value {
            result.push_str(symbol);
            num -= value;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ParagraphStyle, TableCell, TableRow};

    #[test]
    fn test_to_roman() {
        assert_eq!(to_roman(1), "I");
        assert_eq!(to_roman(4), "IV");
        assert_eq!(to_roman(9), "IX");
        assert_eq!(to_roman(14), "XIV");
        assert_eq!(to_roman(2024), "MMXXIV");
    }

    #[test]
    fn test_to_alpha() {
        assert_eq!(to_alpha(1), "A");
        assert_eq!(to_alpha(26), "Z");
        assert_eq!(to_alpha(27), "AA");
        assert_eq!(to_alpha(53), "BA");
    }

    #[test]
    fn test_to_text() {
        let mut section = Section::new();
        section.add_paragraph(Paragraph::with_text("Hello, world!"));
        section.add_paragraph(Paragraph::with_text("Second paragraph."));

        let result = to_text(&section).unwrap();
        assert_eq!(result, "Hello, world!\n\nSecond paragraph.");
    }

    #[test]
    fn test_list_items_and_tables() {
        let mut section = Section::new();
        let mut item = Paragraph::with_style(ParagraphStyle {
            list_info: Some(ListInfo {
                style: ListStyle::Ordered {
                    start: 1,
                    number_style: NumberStyle::LowerRoman,
                },
                depth: 2,
                item_number: Some(3),
            }),
            ..Default::default()
        });
        item.add_text("third");
        section.add_paragraph(item);

        let mut table = Table::new();
        table.add_row(TableRow::new(vec![TableCell::text("a"), TableCell::text("b")]));
        section.add_table(table);
        section.add_block(Block::PageBreak);
        section.add_paragraph(Paragraph::with_text("after"));

        let result = to_text(&section).unwrap();
        assert_eq!(result, "  iii. third\na\tb\n\n\u{000C}\nafter");
    }
}
