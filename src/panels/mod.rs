pub mod chart_ui;
pub mod export_ui;
pub mod intake_ui;
pub mod table_ui;

pub use chart_ui::ChartPanel;
pub use export_ui::{ExportAction, ExportPanel};
pub use intake_ui::IntakePanel;
pub use table_ui::PreviewTablePanel;
