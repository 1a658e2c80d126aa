//! [`ChartsApp`]: owns the loaded data, the selection and the panels.

use eframe::egui;

use crate::config::ChartsConfig;
use crate::data::interactions::Dataset;
use crate::data::selection::{InfoBox, SelectionTracker};
use crate::data::stats::{ChartSwitcher, StatsData};
use crate::data::view::ChartData;
use crate::panels::panel_trait::Panel;
use crate::panels::{HeatmapPanel, InfoBoxPanel, StatsPanel, TablePanel};
use crate::persistence::{PanelVisSerde, ViewStateSerde};

// ─────────────────────────────────────────────────────────────────────────────
// ChartModel
// ─────────────────────────────────────────────────────────────────────────────

/// Data and selection state shared by all panels.
pub struct ChartModel {
    pub dataset: Dataset,
    pub selection: SelectionTracker,
    pub info_box: InfoBox,
    pub stats: StatsData,
    pub switcher: ChartSwitcher,
}

impl ChartModel {
    pub fn new(dataset: Dataset, stats: StatsData, config: &ChartsConfig) -> Self {
        Self {
            dataset,
            selection: SelectionTracker::new(),
            info_box: InfoBox::new(config.heatmap.info_line_spacing),
            stats,
            switcher: ChartSwitcher::new(config.charts.initial)
                .with_default_stacked(config.charts.stacked),
        }
    }

    /// Borrow everything a panel needs for one frame.
    pub fn view<'a>(&'a mut self, config: &'a ChartsConfig) -> ChartData<'a> {
        ChartData {
            dataset: &mut self.dataset,
            selection: &mut self.selection,
            info_box: &mut self.info_box,
            stats: &self.stats,
            switcher: &mut self.switcher,
            config,
            request_save_state: None,
            request_load_state: None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ChartsApp
// ─────────────────────────────────────────────────────────────────────────────

pub struct ChartsApp {
    pub model: ChartModel,
    pub config: ChartsConfig,

    pub(super) heatmap: HeatmapPanel,
    pub(super) info_box: InfoBoxPanel,
    pub(super) stats: StatsPanel,
    pub(super) table: TablePanel,

    /// Flag so the color scheme is only pushed to egui when it changes.
    pub(super) color_scheme_applied: bool,
}

impl ChartsApp {
    pub fn new(config: ChartsConfig, dataset: Dataset, stats: StatsData) -> Self {
        let model = ChartModel::new(dataset, stats, &config);
        let mut app = Self {
            model,
            heatmap: HeatmapPanel::default(),
            info_box: InfoBoxPanel::default(),
            stats: StatsPanel::default(),
            table: TablePanel::default(),
            color_scheme_applied: false,
            config,
        };
        let features = app.config.features.clone();
        app.info_box.set_visible(features.info_box);
        app.stats.set_visible(features.statistics);
        app.table.set_visible(features.data_table && app.table.is_visible());
        app
    }

    pub(super) fn panels_mut(&mut self) -> [&mut dyn Panel; 4] {
        [
            &mut self.heatmap,
            &mut self.info_box,
            &mut self.stats,
            &mut self.table,
        ]
    }

    fn panels(&self) -> [&dyn Panel; 4] {
        [&self.heatmap, &self.info_box, &self.stats, &self.table]
    }

    /// Snapshot of selection, chart and panel visibility.
    pub fn capture_state(&self) -> ViewStateSerde {
        let mut state = ViewStateSerde::capture(&self.model.dataset, &self.model.selection);
        state.active_chart = self.model.switcher.visible();
        state.stacked = self.model.switcher.stacked_overrides().clone();
        state.panels = self
            .panels()
            .iter()
            .map(|p| PanelVisSerde {
                title: p.title().to_string(),
                visible: p.is_visible(),
            })
            .collect();
        state
    }

    /// Restore a saved view. Returns how many saved cells were not found.
    pub fn apply_state(&mut self, state: &ViewStateSerde) -> usize {
        let model = &mut self.model;
        let missing = state.restore_selection(&mut model.dataset, &mut model.selection);
        model.selection.sync(&model.dataset, &mut model.info_box);
        model.switcher.select(state.active_chart);
        model.switcher.restore_stacked(&state.stacked);

        for vis in &state.panels {
            for panel in self.panels_mut() {
                if panel.title() == vis.title {
                    panel.set_visible(vis.visible);
                }
            }
        }
        log::info!(
            "Restored {} selected cells ({} missing)",
            self.model.selection.len(),
            missing
        );
        missing
    }

    pub(super) fn handle_save_state(&self, path: &std::path::Path) {
        let state = self.capture_state();
        if let Err(e) = crate::persistence::save_state_to_path(&state, path) {
            log::error!("Failed to save state to {}: {e}", path.display());
        }
    }

    pub(super) fn handle_load_state(&mut self, path: &std::path::Path) {
        match crate::persistence::load_state_from_path(path) {
            Ok(state) => {
                self.apply_state(&state);
            }
            Err(e) => log::error!("Failed to load state from {}: {e}", path.display()),
        }
    }
}

impl eframe::App for ChartsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.color_scheme_applied {
            self.config.color_scheme.apply(ctx);
            self.color_scheme_applied = true;
        }

        let (save, load) = self.render(ctx);
        if let Some(path) = save {
            self.handle_save_state(&path);
        }
        if let Some(path) = load {
            self.handle_load_state(&path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::interactions::{CellId, InteractionRecord};
    use crate::data::stats::ChartKind;

    fn record(rec: &str, sig: &str) -> InteractionRecord {
        InteractionRecord {
            rec_gn: Some(rec.to_string()),
            sig_gn: Some(sig.to_string()),
            int_ty: Some("hydrophobic".to_string()),
            ..Default::default()
        }
    }

    fn app() -> ChartsApp {
        let dataset = Dataset::from_records([record("3x50", "H5.23"), record("6x30", "H5.24")]);
        ChartsApp::new(ChartsConfig::default(), dataset, StatsData::default())
    }

    #[test]
    fn captured_state_restores_into_fresh_app() {
        let mut a = app();
        {
            let mut data = a.model.view(&a.config);
            data.toggle(CellId(1));
            data.toggle(CellId(0));
        }
        a.model.switcher.select(ChartKind::AllCrystalsPerYear);
        a.model.switcher.set_stacked(ChartKind::UniqueByClass, false);
        a.table.set_visible(true);
        let state = a.capture_state();

        let mut b = app();
        assert_eq!(b.apply_state(&state), 0);
        assert_eq!(b.model.selection.ids(), &[CellId(1), CellId(0)]);
        assert_eq!(b.model.info_box.texts(), vec!["6x30 : H5.24", "3x50 : H5.23"]);
        assert_eq!(b.model.switcher.visible(), ChartKind::AllCrystalsPerYear);
        assert!(!b.model.switcher.is_stacked(ChartKind::UniqueByClass));
        assert!(b.model.switcher.is_stacked(ChartKind::AllCrystalsPerYear));
        assert!(b.table.is_visible());
    }
}
