//! tabplot crate root: re-exports and module wiring.
//!
//! A small egui/eframe viewer for tabular mining data. The user picks a CSV
//! file; the first rows are shown in a preview table and columns 0, 1 and 2
//! are plotted as two scatter series against a shared x-axis, the second one
//! on its own right-hand y-axis.
//!
//! - `data`: parsing, preview, trace derivation, axis mapping and export
//! - `loader`: background parsing with latest-request-wins delivery
//! - `panels`: egui renderers for the intake controls, chart and table
//! - `app`: the eframe application and its run helper
//! - `config`: YAML-loadable labels, colors and limits

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod loader;
pub mod panels;

// Public re-exports for a compact external API
pub use app::{run_plotter, PlotterApp};
pub use config::{ChartConfig, LegendOrientation, PlotterConfig, SeriesConfig};
pub use data::dataset::PlotterData;
pub use data::rows::{CsvRow, RowParser};
pub use data::traces::{derive_traces, Trace, TraceKind, TraceSpec, YAxis};
pub use error::PlotterError;
pub use loader::{LoadOutcome, Loader};
