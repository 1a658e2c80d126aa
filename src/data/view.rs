//! ChartData: a view struct handing the app state to the panels.

use std::path::PathBuf;

use crate::config::ChartsConfig;
use crate::data::interactions::{CellId, Dataset};
use crate::data::selection::{InfoBox, SelectionTracker};
use crate::data::stats::{ChartSwitcher, StatsData};

/// Everything a panel may read or change during one frame.
pub struct ChartData<'a> {
    pub dataset: &'a mut Dataset,
    pub selection: &'a mut SelectionTracker,
    pub info_box: &'a mut InfoBox,
    pub stats: &'a StatsData,
    pub switcher: &'a mut ChartSwitcher,
    pub config: &'a ChartsConfig,
    // Set by panel UI, consumed by the app after the frame.
    pub request_save_state: Option<PathBuf>,
    pub request_load_state: Option<PathBuf>,
}

impl<'a> ChartData<'a> {
    /// Toggle a heatmap cell and bring the info box up to date.
    pub fn toggle(&mut self, id: CellId) -> bool {
        self.selection
            .toggle_and_sync(&mut *self.dataset, id, &mut *self.info_box)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear(&mut *self.dataset);
        self.selection.sync(&*self.dataset, &mut *self.info_box);
    }
}
