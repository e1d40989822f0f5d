//! Row parsing: CSV bytes to ordered rows of raw string cells.

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};

use crate::error::{PlotterError, Result};

/// One parsed CSV record. Cells are kept exactly as they appear in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvRow(pub Vec<String>);

impl CsvRow {
    pub fn cell(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// A line with nothing on it: no cells, or a single empty cell.
    pub fn is_blank(&self) -> bool {
        match self.0.as_slice() {
            [] => true,
            [only] => only.is_empty(),
            _ => false,
        }
    }
}

impl From<Vec<&str>> for CsvRow {
    fn from(cells: Vec<&str>) -> Self {
        Self(cells.into_iter().map(str::to_string).collect())
    }
}

/// Headerless CSV parser that tolerates ragged rows.
#[derive(Debug, Clone)]
pub struct RowParser {
    delimiter: u8,
}

impl Default for RowParser {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl RowParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Read and parse a file from disk.
    pub fn parse_file(&self, path: &Path) -> Result<Vec<CsvRow>> {
        let bytes = std::fs::read(path).map_err(|source| PlotterError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse_bytes(&bytes)
    }

    pub fn parse_reader<R: Read>(&self, mut reader: R) -> Result<Vec<CsvRow>> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|source| PlotterError::Io {
                path: "<reader>".into(),
                source,
            })?;
        self.parse_bytes(&bytes)
    }

    /// Invalid UTF-8 is replaced rather than rejected.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Vec<CsvRow>> {
        let text = String::from_utf8_lossy(bytes);
        self.parse_str(&text)
    }

    pub fn parse_str(&self, content: &str) -> Result<Vec<CsvRow>> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::None)
            .delimiter(self.delimiter)
            .from_reader(content.as_bytes());

        let mut rows = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record.map_err(|source| PlotterError::Csv {
                record: index + 1,
                source,
            })?;
            let row = CsvRow(record.iter().map(str::to_string).collect());
            if !row.is_blank() {
                rows.push(row);
            }
        }
        tracing::debug!(rows = rows.len(), "parsed CSV content");
        Ok(rows)
    }
}
