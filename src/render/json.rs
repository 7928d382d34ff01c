//! JSON rendering of converted sections.

use crate::error::{Error, Result};
use crate::model::Section;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a section to JSON.
pub fn to_json(section: &Section, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(section),
        JsonFormat::Compact => serde_json::to_string(section),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Block, Paragraph, Table, TableCell, TableRow};

    #[test]
    fn test_to_json_pretty() {
        let mut section = Section::new();
        section.add_paragraph(Paragraph::with_text("Hello"));

        let json = to_json(&section, JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"type\": \"paragraph\""));
        assert!(json.contains("Hello"));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let mut section = Section::new();
        section.add_block(Block::PageBreak);

        let json = to_json(&section, JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.contains("\"type\":\"page_break\""));
    }

    #[test]
    fn test_json_round_trips_tables() {
        let mut table = Table::new();
        table.add_row(TableRow::new(vec![TableCell::text("a").colspan(2)]));
        let mut section = Section::new();
        section.add_table(table);

        let json = to_json(&section, JsonFormat::Compact).unwrap();
        let back: Section = serde_json::from_str(&json).unwrap();
        let table = back.tables().next().unwrap();
        assert_eq!(table.rows[0].cells[0].colspan, 2);
    }
}
