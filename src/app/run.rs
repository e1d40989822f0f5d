//! Top-level entry point for running the plotter as a native window.

use std::path::PathBuf;

use eframe::egui;

use crate::config::PlotterConfig;

use super::plotter_app::PlotterApp;

/// Launch the plotter in a native window, optionally loading `initial` first.
///
/// The call blocks until the window is closed.
pub fn run_plotter(cfg: PlotterConfig, initial: Option<PathBuf>) -> eframe::Result<()> {
    let title = cfg.title.clone();
    let [w, h] = cfg.window_size;

    let mut viewport = egui::ViewportBuilder::default().with_inner_size(egui::vec2(w, h));
    if let Some(icon) = load_app_icon_svg() {
        viewport = viewport.with_icon(icon);
    }
    let opts = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let mut app = PlotterApp::new(cfg);
    if let Some(path) = initial {
        app.open(&path);
    }

    eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}

/// Render the bundled `icon.svg` into an [`egui::IconData`].
fn load_app_icon_svg() -> Option<egui::IconData> {
    let data = include_bytes!("../../icon.svg");
    let tree = usvg::Tree::from_data(data, &usvg::Options::default()).ok()?;
    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());
    Some(egui::IconData {
        rgba: pixmap.take(),
        width: size.width(),
        height: size.height(),
    })
}
