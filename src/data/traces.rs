//! Trace derivation: fixed CSV columns mapped to numeric chart series.

use egui::Color32;

use crate::data::numeric::parse_cell;
use crate::data::rows::CsvRow;

/// Column that holds the shared x-value of every trace.
pub const X_COLUMN: usize = 0;

/// Traces shorter than this are drawn with markers on top of their line.
pub const MARKER_POINT_LIMIT: usize = 20;

/// How a trace is drawn. Only scatter plots are produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TraceKind {
    #[default]
    Scatter,
}

impl TraceKind {
    pub fn label(&self) -> &'static str {
        match self {
            TraceKind::Scatter => "scatter",
        }
    }
}

/// Which vertical axis a trace is read against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum YAxis {
    /// Left-hand axis, with grid lines.
    #[default]
    Primary,
    /// Right-hand axis overlaying the primary one, without grid lines.
    Secondary,
}

/// Which column becomes a trace and how it looks.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceSpec {
    pub name: String,
    pub column: usize,
    pub color: Option<Color32>,
    pub y_axis: YAxis,
}

/// A named series of points with rendering hints.
///
/// `x` and `y` always have the same length, one entry per parsed row. Values
/// that failed to convert are `NaN` and stay in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub name: String,
    pub kind: TraceKind,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub marker_color: Option<Color32>,
    pub y_axis: YAxis,
}

impl Trace {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Points where both coordinates are finite; the rest are gaps.
    pub fn finite_points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.x
            .iter()
            .zip(self.y.iter())
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .map(|(&x, &y)| [x, y])
    }

    /// Runs of consecutive finite points. A non-finite value ends the current
    /// run, so lines drawn per segment leave a gap there.
    pub fn finite_segments(&self) -> Vec<Vec<[f64; 2]>> {
        let mut segments = Vec::new();
        let mut current = Vec::new();
        for (&x, &y) in self.x.iter().zip(self.y.iter()) {
            if x.is_finite() && y.is_finite() {
                current.push([x, y]);
            } else if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        segments
    }

    pub fn show_markers(&self) -> bool {
        self.len() < MARKER_POINT_LIMIT
    }
}

/// Build one trace per spec from the full row set.
///
/// Returns no traces at all when there are no rows, so nothing gets charted.
pub fn derive_traces(rows: &[CsvRow], specs: &[TraceSpec]) -> Vec<Trace> {
    if rows.is_empty() {
        return Vec::new();
    }
    let x: Vec<f64> = rows.iter().map(|r| parse_cell(r.cell(X_COLUMN))).collect();
    specs
        .iter()
        .map(|spec| Trace {
            name: spec.name.clone(),
            kind: TraceKind::Scatter,
            x: x.clone(),
            y: rows.iter().map(|r| parse_cell(r.cell(spec.column))).collect(),
            marker_color: spec.color,
            y_axis: spec.y_axis,
        })
        .collect()
}
