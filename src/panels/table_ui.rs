use egui::Ui;
use egui_table::{CellInfo, Column, HeaderCellInfo, HeaderRow, Table, TableDelegate};

use crate::data::preview::PreviewRows;

/// Preview of the first parsed rows, cells shown verbatim.
pub struct PreviewTablePanel {
    pub column_width: f32,
}

impl Default for PreviewTablePanel {
    fn default() -> Self {
        Self {
            column_width: 140.0,
        }
    }
}

struct PreviewDelegate<'a> {
    preview: &'a PreviewRows,
    headers: &'a [String],
}

impl TableDelegate for PreviewDelegate<'_> {
    fn header_cell_ui(&mut self, ui: &mut Ui, cell: &HeaderCellInfo) {
        let col = cell.col_range.start;
        ui.add_space(4.0);
        ui.strong(self.headers.get(col).map(String::as_str).unwrap_or(""));
    }

    fn cell_ui(&mut self, ui: &mut Ui, cell: &CellInfo) {
        ui.add_space(4.0);
        ui.label(self.preview.cell(cell.row_nr as usize, cell.col_nr));
    }
}

impl PreviewTablePanel {
    pub fn show(&self, ui: &mut Ui, preview: &PreviewRows, headers: &[String]) {
        let mut delegate = PreviewDelegate { preview, headers };
        let cols: Vec<Column> = headers
            .iter()
            .map(|_| Column::new(self.column_width))
            .collect();

        // Fill the rest of the panel.
        let size = egui::vec2(ui.available_width(), ui.available_height());
        let (rect, _resp) = ui.allocate_exact_size(size, egui::Sense::hover());
        let ui_builder = egui::UiBuilder::new()
            .max_rect(rect)
            .layout(egui::Layout::left_to_right(egui::Align::Min));
        let mut table_ui = ui.new_child(ui_builder);
        Table::new()
            .id_salt("preview_table")
            .num_rows(preview.len() as u64)
            .columns(cols)
            .headers(vec![HeaderRow::new(24.0)])
            .show(&mut table_ui, &mut delegate);
    }
}
