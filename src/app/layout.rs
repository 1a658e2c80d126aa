//! Menu bar and panel placement for [`ChartsApp`].
//!
//! The heatmap fills the central area, the info box sits on the right,
//! the statistics charts at the bottom and the data table floats in its
//! own window.

use std::path::PathBuf;

use eframe::egui;
use egui_phosphor::regular::{EXPORT, FLOPPY_DISK, FOLDER_OPEN, PALETTE};

use crate::color_scheme::ColorScheme;
use crate::data::export;
use crate::panels::panel_trait::Panel;

use super::ChartsApp;

impl ChartsApp {
    /// Draw one frame. Returns the save/load state requests raised by the UI.
    pub(super) fn render(&mut self, ctx: &egui::Context) -> (Option<PathBuf>, Option<PathBuf>) {
        let mut theme_change = None;
        let features = self.config.features.clone();
        let mut data = self.model.view(&self.config);

        // ─────────────────────────────────────────────────────────────────────
        // Top menu bar
        // ─────────────────────────────────────────────────────────────────────
        egui::TopBottomPanel::top("charts_menu").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button(format!("{FOLDER_OPEN} Load state…")).clicked() {
                        data.request_load_state = rfd::FileDialog::new()
                            .add_filter("JSON", &["json"])
                            .pick_file();
                        ui.close();
                    }
                    if ui.button(format!("{FLOPPY_DISK} Save state…")).clicked() {
                        data.request_save_state = rfd::FileDialog::new()
                            .set_file_name("view_state.json")
                            .add_filter("JSON", &["json"])
                            .save_file();
                        ui.close();
                    }
                    ui.separator();
                    if ui.button(format!("{EXPORT} Export table CSV…")).clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .set_file_name("interactions.csv")
                            .add_filter("CSV", &["csv"])
                            .save_file()
                        {
                            if let Err(e) = export::save_table_csv(&path, &*data.dataset) {
                                log::error!("Failed to export table CSV: {e}");
                            }
                        }
                        ui.close();
                    }
                });

                ui.menu_button("View", |ui| {
                    for panel in [
                        &mut self.info_box as &mut dyn Panel,
                        &mut self.stats,
                        &mut self.table,
                    ] {
                        let enabled = match panel.title() {
                            "Data table" => features.data_table,
                            "Statistics" => features.statistics,
                            "Selection" => features.info_box,
                            _ => true,
                        };
                        let mut visible = panel.is_visible();
                        if ui
                            .add_enabled(
                                enabled,
                                egui::Checkbox::new(&mut visible, panel.title_and_icon()),
                            )
                            .changed()
                        {
                            panel.set_visible(visible);
                        }
                    }
                });

                ui.menu_button(format!("{PALETTE} Theme"), |ui| {
                    for scheme in ColorScheme::all() {
                        let selected = *scheme == data.config.color_scheme;
                        if ui.selectable_label(selected, scheme.label()).clicked() {
                            theme_change = Some(*scheme);
                            ui.close();
                        }
                    }
                });

                ui.separator();
                self.heatmap.render_menu(ui, &mut data);
            });
        });

        // ─────────────────────────────────────────────────────────────────────
        // Side and bottom panels
        // ─────────────────────────────────────────────────────────────────────
        if self.info_box.is_visible() {
            egui::SidePanel::right("selection_panel")
                .resizable(true)
                .default_width(240.0)
                .show(ctx, |ui| {
                    ui.heading(self.info_box.title_and_icon());
                    self.info_box.render_panel(ui, &mut data);
                });
        }

        if self.stats.is_visible() {
            egui::TopBottomPanel::bottom("statistics_panel")
                .resizable(true)
                .default_height(280.0)
                .show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        ui.heading(self.stats.title_and_icon());
                        self.stats.render_menu(ui, &mut data);
                    });
                    self.stats.render_panel(ui, &mut data);
                });
        }

        if self.table.is_visible() {
            let mut open = true;
            egui::Window::new(self.table.title_and_icon())
                .id(egui::Id::new("data_table_window"))
                .open(&mut open)
                .default_size([760.0, 360.0])
                .show(ctx, |ui| {
                    self.table.render_panel(ui, &mut data);
                });
            if !open {
                self.table.set_visible(false);
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.heatmap.render_panel(ui, &mut data);
        });

        let requests = (data.request_save_state.take(), data.request_load_state.take());
        drop(data);

        if let Some(scheme) = theme_change {
            self.config.color_scheme = scheme;
            self.color_scheme_applied = false;
        }
        requests
    }
}
