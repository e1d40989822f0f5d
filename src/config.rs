//! Configuration for the plotter window, chart and preview table.
//!
//! Every field has a default, so an empty YAML document (or no file at all)
//! yields the stock "Curva Tn Ley" chart.

use std::path::Path;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::data::preview::{PREVIEW_HEADERS, PREVIEW_LIMIT};
use crate::data::traces::{TraceSpec, YAxis};
use crate::error::{PlotterError, Result};

/// Legend layout. Horizontal draws a single row of entries above the chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendOrientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Name and marker color of one plotted series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesConfig {
    pub name: String,
    pub color_rgba: [u8; 4],
}

impl SeriesConfig {
    fn new(name: &str, color: Color32) -> Self {
        Self {
            name: name.to_string(),
            color_rgba: color.to_array(),
        }
    }

    pub fn color(&self) -> Color32 {
        let [r, g, b, a] = self.color_rgba;
        Color32::from_rgba_unmultiplied(r, g, b, a)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub y2_label: String,
    pub legend: LegendOrientation,
    /// Drawn against the left axis, read from column 1.
    pub primary: SeriesConfig,
    /// Drawn against the right axis, read from column 2.
    pub secondary: SeriesConfig,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "Curva Tn Ley (CyR)".to_string(),
            x_label: "Tn".to_string(),
            y_label: "Tonelaje".to_string(),
            y2_label: "Au (g/tn)".to_string(),
            legend: LegendOrientation::Horizontal,
            primary: SeriesConfig::new("Toneladas", Color32::ORANGE),
            secondary: SeriesConfig::new("Au (g/tn)", Color32::GRAY),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotterConfig {
    /// Native window title.
    pub title: String,
    pub window_size: [f32; 2],
    pub preview_limit: usize,
    pub table_headers: Vec<String>,
    pub chart: ChartConfig,
}

impl Default for PlotterConfig {
    fn default() -> Self {
        Self {
            title: "Tabular Data Plotter".to_string(),
            window_size: [1200.0, 900.0],
            preview_limit: PREVIEW_LIMIT,
            table_headers: PREVIEW_HEADERS.iter().map(|h| h.to_string()).collect(),
            chart: ChartConfig::default(),
        }
    }
}

impl PlotterConfig {
    pub fn from_yaml_str(yaml: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }

    pub fn from_yaml_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| PlotterError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text).map_err(|source| PlotterError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The two traces derived from every parse: column 1 on the primary axis,
    /// column 2 on the secondary axis.
    pub fn trace_specs(&self) -> Vec<TraceSpec> {
        vec![
            TraceSpec {
                name: self.chart.primary.name.clone(),
                column: 1,
                color: Some(self.chart.primary.color()),
                y_axis: YAxis::Primary,
            },
            TraceSpec {
                name: self.chart.secondary.name.clone(),
                column: 2,
                color: Some(self.chart.secondary.color()),
                y_axis: YAxis::Secondary,
            },
        ]
    }
}
