use std::path::{Path, PathBuf};

use egui::Ui;

/// File picker restricted to `.csv` by extension filter.
#[derive(Default)]
pub struct IntakePanel;

impl IntakePanel {
    pub const OPEN_LABEL: &'static str = "Open CSV...";

    /// Render the picker. Returns the chosen file, or `None` when nothing was
    /// picked (including a cancelled dialog).
    pub fn show(&self, ui: &mut Ui, loading: bool, source: Option<&Path>) -> Option<PathBuf> {
        let mut picked = None;
        ui.horizontal(|ui| {
            let label = format!("{} {}", egui_phosphor::regular::FOLDER_OPEN, Self::OPEN_LABEL);
            if ui
                .button(label)
                .on_hover_text("Choose a comma separated file to plot")
                .clicked()
            {
                picked = rfd::FileDialog::new().add_filter("CSV", &["csv"]).pick_file();
            }
            if loading {
                ui.spinner();
            }
            match source.and_then(Path::file_name) {
                Some(name) => ui.label(name.to_string_lossy().into_owned()),
                None => ui.weak("No file selected"),
            };
        });
        picked
    }
}
