use std::path::{Path, PathBuf};

use crate::config::PlotterConfig;
use crate::data::preview::PreviewRows;
use crate::data::rows::CsvRow;
use crate::data::traces::{derive_traces, Trace};

/// Everything derived from one parse completion.
///
/// Preview and traces come from the same rows and are only ever replaced
/// together, never edited in place.
#[derive(Debug, Clone, Default)]
pub struct PlotterData {
    pub preview: PreviewRows,
    pub traces: Vec<Trace>,
    pub source: Option<PathBuf>,
}

impl PlotterData {
    pub fn from_rows(source: Option<&Path>, rows: &[CsvRow], cfg: &PlotterConfig) -> Self {
        Self {
            preview: PreviewRows::from_rows(rows, cfg.preview_limit),
            traces: derive_traces(rows, &cfg.trace_specs()),
            source: source.map(Path::to_path_buf),
        }
    }

    pub fn has_preview(&self) -> bool {
        !self.preview.is_empty()
    }

    pub fn has_traces(&self) -> bool {
        !self.traces.is_empty()
    }

    /// Number of rows behind the traces (the full parse, not the preview).
    pub fn row_count(&self) -> usize {
        self.traces.first().map_or(0, Trace::len)
    }
}
