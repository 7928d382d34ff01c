//! Table assembly: row and cell bookkeeping.

use crate::model::{RowId, TableId};

/// An open table.
#[derive(Debug)]
pub(crate) struct TableFrame {
    pub id: TableId,
    /// Logical column count, fixed by the first explicit row
    pub columns: Option<usize>,
    pub rows: usize,
}

impl TableFrame {
    pub fn new(id: TableId) -> Self {
        Self {
            id,
            columns: None,
            rows: 0,
        }
    }

    /// Account for a finished row.
    ///
    /// Wider rows are emitted as they are; the grid grows.
    pub fn finish_row(&mut self, row: &RowFrame) {
        self.rows += 1;
        if row.implicit {
            return;
        }
        match self.columns {
            None => self.columns = Some(row.width),
            Some(columns) if row.width > columns => log::warn!(
                "row {} of table {} spans {} columns, table has {}",
                self.rows,
                self.id.0,
                row.width,
                columns
            ),
            Some(_) => {}
        }
    }
}

/// An open table row.
#[derive(Debug)]
pub(crate) struct RowFrame {
    pub id: RowId,
    /// Sum of the colspans of the cells added so far
    pub width: usize,
    /// Opened by the converter rather than by a `<tr>`
    pub implicit: bool,
}

impl RowFrame {
    pub fn new(id: RowId, implicit: bool) -> Self {
        Self {
            id,
            width: 0,
            implicit,
        }
    }
}

/// Parse a `colspan` attribute.
///
/// Missing, non-numeric and zero values give 1; values above `max` are
/// clamped.
pub(crate) fn colspan(value: Option<&str>, max: u16) -> u16 {
    let span = value
        .and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|&n| n >= 1)
        .unwrap_or(1);
    let max = u32::from(max.max(1));
    if span > max {
        log::debug!("colspan {} clamped to {}", span, max);
    }
    span.min(max) as u16
}

/// Parse a `rowspan` attribute; only spans over one row are recorded.
pub(crate) fn rowspan(value: Option<&str>) -> Option<u16> {
    value
        .and_then(|v| v.trim().parse::<u16>().ok())
        .filter(|&n| n > 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colspan_parsing() {
        assert_eq!(colspan(Some("2"), 63), 2);
        assert_eq!(colspan(Some(" 3 "), 63), 3);
        assert_eq!(colspan(None, 63), 1);
        assert_eq!(colspan(Some("abc"), 63), 1);
        assert_eq!(colspan(Some("0"), 63), 1);
        assert_eq!(colspan(Some("-4"), 63), 1);
        assert_eq!(colspan(Some("1000"), 63), 63);
    }

    #[test]
    fn test_rowspan_parsing() {
        assert_eq!(rowspan(Some("3")), Some(3));
        assert_eq!(rowspan(Some("1")), None);
        assert_eq!(rowspan(Some("x")), None);
    }

    #[test]
    fn test_first_explicit_row_fixes_columns() {
        let mut table = TableFrame::new(TableId(0));

        let implicit = RowFrame {
            width: 1,
            ..RowFrame::new(RowId(1), true)
        };
        table.finish_row(&implicit);
        assert_eq!(table.columns, None);

        let header = RowFrame {
            width: 3,
            ..RowFrame::new(RowId(2), false)
        };
        table.finish_row(&header);
        let wide = RowFrame {
            width: 4,
            ..RowFrame::new(RowId(3), false)
        };
        table.finish_row(&wide);

        assert_eq!(table.columns, Some(3));
        assert_eq!(table.rows, 3);
    }
}
