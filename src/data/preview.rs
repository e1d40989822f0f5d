use crate::data::rows::CsvRow;

/// Maximum number of rows shown in the preview table.
pub const PREVIEW_LIMIT: usize = 20;

/// Column headers of the preview table, by column position.
pub const PREVIEW_HEADERS: [&str; 4] = ["Tn", "Toneladas", "Au (g/tn)", "LOM (meses)"];

/// The leading slice of a parse, kept as raw strings for the table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewRows {
    rows: Vec<CsvRow>,
}

impl PreviewRows {
    /// Take at most `limit` rows from the front, keeping their order.
    pub fn from_rows(rows: &[CsvRow], limit: usize) -> Self {
        Self {
            rows: rows.iter().take(limit).cloned().collect(),
        }
    }

    pub fn rows(&self) -> &[CsvRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Raw cell text; a cell the row does not have reads as empty.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.cell(col))
            .unwrap_or("")
    }
}
