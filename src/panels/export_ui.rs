use std::path::PathBuf;

use egui::Ui;

use crate::data::dataset::PlotterData;
use crate::data::export;

/// What the export menu asked the app to do after the frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportAction {
    /// Save the next viewport screenshot to this path.
    Screenshot(PathBuf),
}

#[derive(Default)]
pub struct ExportPanel;

impl ExportPanel {
    pub const TRACES_CSV_LABEL: &'static str = "🖹 Traces as CSV...";
    pub const SCREENSHOT_LABEL: &'static str = "🖼 Save Screenshot...";

    pub fn render_menu(&self, ui: &mut Ui, data: &PlotterData) -> Option<ExportAction> {
        let mut action = None;
        ui.menu_button("🗁 Export", |ui| {
            if ui
                .add_enabled(data.has_traces(), egui::Button::new(Self::TRACES_CSV_LABEL))
                .on_hover_text("Write the plotted series to a CSV file")
                .clicked()
            {
                if let Some(path) = rfd::FileDialog::new()
                    .set_file_name("traces.csv")
                    .add_filter("CSV", &["csv"])
                    .save_file()
                {
                    match export::save_traces_csv(&path, &data.traces) {
                        Ok(()) => tracing::info!(path = %path.display(), "exported traces"),
                        Err(e) => tracing::warn!("failed to export traces: {e}"),
                    }
                }
                ui.close();
            }
            if ui
                .button(Self::SCREENSHOT_LABEL)
                .on_hover_text("Take a screenshot of the entire window")
                .clicked()
            {
                let default_name =
                    format!("tabplot_{}.png", chrono::Local::now().format("%Y%m%d_%H%M%S"));
                if let Some(path) = rfd::FileDialog::new()
                    .set_file_name(&default_name)
                    .add_filter("PNG", &["png"])
                    .save_file()
                {
                    ui.ctx()
                        .send_viewport_cmd(egui::ViewportCommand::Screenshot(Default::default()));
                    action = Some(ExportAction::Screenshot(path));
                }
                ui.close();
            }
        });
        action
    }
}
