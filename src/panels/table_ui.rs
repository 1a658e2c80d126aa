use egui::Ui;
use egui_phosphor::regular::EXPORT;
use egui_table::{Column, HeaderRow, Table, TableDelegate};

use super::panel_trait::{Panel, PanelState};
use crate::data::export;
use crate::data::interactions::{CellId, Dataset, KEYS};
use crate::data::view::ChartData;

/// Raw interaction rows, one column per record field.
pub struct TablePanel {
    state: PanelState,
}

impl Default for TablePanel {
    fn default() -> Self {
        let mut state = PanelState::new("Data table", egui_phosphor::regular::TABLE);
        state.visible = false;
        Self { state }
    }
}

struct RowsDelegate<'a> {
    dataset: &'a Dataset,
    to_toggle: Option<CellId>,
}

impl TableDelegate for RowsDelegate<'_> {
    fn header_cell_ui(&mut self, ui: &mut Ui, cell: &egui_table::HeaderCellInfo) {
        let col = cell.col_range.start;
        ui.add_space(4.0);
        ui.strong(KEYS.get(col).copied().unwrap_or(""));
    }

    fn cell_ui(&mut self, ui: &mut Ui, cell: &egui_table::CellInfo) {
        let id = CellId(cell.row_nr as usize);
        let Some(c) = self.dataset.cell(id) else {
            return;
        };
        ui.add_space(4.0);
        let text = c.record.field(cell.col_nr).unwrap_or("");
        if ui.selectable_label(c.is_active(), text).clicked() {
            self.to_toggle = Some(id);
        }
    }
}

impl Panel for TablePanel {
    fn state(&self) -> &PanelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_panel(&mut self, ui: &mut Ui, data: &mut ChartData<'_>) {
        ui.horizontal(|ui| {
            ui.label(format!("{} rows", data.dataset.len()));
            if ui
                .button(format!("{EXPORT} Export CSV"))
                .on_hover_text("Save all rows as CSV")
                .clicked()
            {
                if let Some(path) = rfd::FileDialog::new()
                    .set_file_name("interactions.csv")
                    .add_filter("CSV", &["csv"])
                    .save_file()
                {
                    if let Err(e) = export::save_table_csv(&path, &*data.dataset) {
                        log::error!("Failed to export table CSV: {e}");
                    }
                }
            }
        });

        let mut delegate = RowsDelegate {
            dataset: &*data.dataset,
            to_toggle: None,
        };
        let cols = vec![
            Column::new(90.0),
            Column::new(90.0),
            Column::new(60.0),
            Column::new(80.0),
            Column::new(110.0),
            Column::new(90.0),
            Column::new(90.0),
            Column::new(60.0),
        ];
        Table::new()
            .id_salt("interaction_rows_table")
            .num_rows(data.dataset.len() as u64)
            .columns(cols)
            .headers(vec![HeaderRow::new(24.0)])
            .show(ui, &mut delegate);

        // Clicking a row toggles its cell, same as clicking it in the heatmap.
        if let Some(id) = delegate.to_toggle {
            data.toggle(id);
        }
    }
}
