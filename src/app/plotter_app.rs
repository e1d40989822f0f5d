//! The [`PlotterApp`] eframe application.

use std::path::{Path, PathBuf};
use std::time::Duration;

use eframe::egui;

use crate::config::PlotterConfig;
use crate::data::dataset::PlotterData;
use crate::data::export;
use crate::loader::{LoadOutcome, Loader};
use crate::panels::{ChartPanel, ExportAction, ExportPanel, IntakePanel, PreviewTablePanel};

/// Share of the central panel given to the chart when the table is shown below it.
const CHART_HEIGHT_FRACTION: f32 = 0.6;

pub struct PlotterApp {
    config: PlotterConfig,
    data: PlotterData,
    loader: Loader,
    intake: IntakePanel,
    chart: ChartPanel,
    table: PreviewTablePanel,
    export: ExportPanel,
    pending_screenshot: Option<PathBuf>,
}

impl PlotterApp {
    pub fn new(config: PlotterConfig) -> Self {
        Self {
            config,
            data: PlotterData::default(),
            loader: Loader::default(),
            intake: IntakePanel,
            chart: ChartPanel::default(),
            table: PreviewTablePanel::default(),
            export: ExportPanel,
            pending_screenshot: None,
        }
    }

    /// Start loading `path` in the background, as if picked in the dialog.
    pub fn open(&mut self, path: &Path) {
        self.loader.request(path);
    }

    pub fn data(&self) -> &PlotterData {
        &self.data
    }

    pub fn config(&self) -> &PlotterConfig {
        &self.config
    }

    fn ingest(&mut self) {
        if let Some(outcome) = self.loader.poll() {
            self.apply(outcome);
        }
    }

    /// Replace preview and traces together from a finished parse.
    /// A failed parse leaves the previous data on screen.
    pub fn apply(&mut self, outcome: LoadOutcome) {
        let LoadOutcome { path, result, .. } = outcome;
        match result {
            Ok(rows) => {
                tracing::info!(path = %path.display(), rows = rows.len(), "CSV loaded");
                self.data = PlotterData::from_rows(Some(&path), &rows, &self.config);
            }
            Err(e) => tracing::warn!(path = %path.display(), "failed to load CSV: {e}"),
        }
    }

    fn save_screenshot_if_captured(&mut self, ctx: &egui::Context) {
        if self.pending_screenshot.is_none() {
            return;
        }
        let image = ctx.input(|i| {
            i.events.iter().rev().find_map(|e| {
                if let egui::Event::Screenshot { image, .. } = e {
                    Some(image.clone())
                } else {
                    None
                }
            })
        });
        if let (Some(image), Some(path)) = (image, self.pending_screenshot.take()) {
            match export::save_screenshot(&image, &path) {
                Ok(()) => tracing::info!(path = %path.display(), "saved screenshot"),
                Err(e) => tracing::warn!("{e}"),
            }
        }
    }
}

impl eframe::App for PlotterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ingest();
        self.save_screenshot_if_captured(ctx);

        egui::TopBottomPanel::top("tabplot_intake").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let picked = self.intake.show(
                    ui,
                    self.loader.is_loading(),
                    self.data.source.as_deref(),
                );
                if let Some(path) = picked {
                    self.open(&path);
                }
                ui.separator();
                if let Some(ExportAction::Screenshot(path)) =
                    self.export.render_menu(ui, &self.data)
                {
                    self.pending_screenshot = Some(path);
                }
                if self.data.has_traces() {
                    ui.separator();
                    ui.weak(format!("{} rows", self.data.row_count()));
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.data.has_traces() {
                let height = if self.data.has_preview() {
                    ui.available_height() * CHART_HEIGHT_FRACTION
                } else {
                    ui.available_height()
                };
                self.chart
                    .show(ui, &self.data.traces, &self.config.chart, height);
                ui.separator();
            }
            if self.data.has_preview() {
                self.table
                    .show(ui, &self.data.preview, &self.config.table_headers);
            }
        });

        // Keep polling the worker until the parse lands.
        if self.loader.is_loading() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }
    }
}
