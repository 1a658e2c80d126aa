use egui::Ui;
use egui_phosphor::regular::{BROOM, EXPORT, X};

use super::panel_trait::{Panel, PanelState};
use crate::data::export;
use crate::data::view::ChartData;

/// Lists the selected cells as `receptor : signal protein` lines.
pub struct InfoBoxPanel {
    state: PanelState,
}

impl Default for InfoBoxPanel {
    fn default() -> Self {
        Self {
            state: PanelState::new("Selection", egui_phosphor::regular::LIST_CHECKS),
        }
    }
}

impl Panel for InfoBoxPanel {
    fn state(&self) -> &PanelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_panel(&mut self, ui: &mut Ui, data: &mut ChartData<'_>) {
        ui.horizontal(|ui| {
            ui.strong(format!("{} selected", data.selection.len()));
            let any_selected = !data.selection.is_empty();
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add_enabled(any_selected, egui::Button::new(format!("{BROOM} Clear")))
                    .on_hover_text("Deselect all cells")
                    .clicked()
                {
                    data.clear_selection();
                }
                if ui
                    .add_enabled(any_selected, egui::Button::new(format!("{EXPORT} CSV")))
                    .on_hover_text("Export the selection as CSV")
                    .clicked()
                {
                    if let Some(path) = rfd::FileDialog::new()
                        .set_file_name("selection.csv")
                        .add_filter("CSV", &["csv"])
                        .save_file()
                    {
                        let saved =
                            export::save_selection_csv(&path, &*data.dataset, &*data.selection);
                        match saved {
                            Ok(()) => log::info!("Saved selection to {}", path.display()),
                            Err(e) => log::error!("Failed to export selection CSV: {e}"),
                        }
                    }
                }
            });
        });
        ui.separator();

        if data.info_box.is_empty() {
            ui.weak("Click a cell in the heatmap to select it.");
            return;
        }

        // Line i of the box belongs to selection entry i.
        let mut deselect = None;
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for (line, id) in data.info_box.lines().iter().zip(data.selection.iter()) {
                    ui.horizontal(|ui| {
                        if ui.small_button(X).on_hover_text("Deselect").clicked() {
                            deselect = Some(id);
                        }
                        ui.monospace(&line.text);
                    });
                }
            });
        if let Some(id) = deselect {
            data.toggle(id);
        }
    }
}
