//! State persistence: save and restore the view (selection, active chart,
//! panel visibility) as JSON.
//!
//! Cells are stored by content rather than by index, so a state file stays
//! usable when the interaction list is regenerated in a different order.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::data::interactions::{CellId, Dataset};
use crate::data::selection::SelectionTracker;
use crate::data::stats::ChartKind;
use crate::error::Result;

/// Serializable reference to one selected cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedCellSerde {
    pub receptor: Option<String>,
    pub signal_protein: Option<String>,
    pub interaction_type: Option<String>,
}

/// Panel visibility state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelVisSerde {
    pub title: String,
    pub visible: bool,
}

/// Full view state (for save/load).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewStateSerde {
    pub saved_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub active_chart: ChartKind,
    /// Per-chart stacked (`true`) or grouped (`false`) mode, only for
    /// charts that differ from the configured default.
    #[serde(default)]
    pub stacked: BTreeMap<ChartKind, bool>,
    /// Selected cells in activation order.
    #[serde(default)]
    pub selected: Vec<SelectedCellSerde>,
    #[serde(default)]
    pub panels: Vec<PanelVisSerde>,
}


impl ViewStateSerde {
    /// Record the current selection; chart and panel fields are set by the caller.
    pub fn capture(dataset: &Dataset, selection: &SelectionTracker) -> Self {
        let selected = selection
            .iter()
            .filter_map(|id| dataset.cell(id))
            .map(|c| SelectedCellSerde {
                receptor: c.record.rec_gn.clone(),
                signal_protein: c.record.sig_gn.clone(),
                interaction_type: c.record.int_ty.clone(),
            })
            .collect();
        Self {
            saved_at: Some(Utc::now()),
            selected,
            ..Default::default()
        }
    }

    /// Replace the current selection with the stored one.
    ///
    /// Entries are replayed in stored order, each matched to the first cell
    /// with the same content that is not active yet. Returns how many
    /// entries could not be matched.
    pub fn restore_selection(
        &self,
        dataset: &mut Dataset,
        selection: &mut SelectionTracker,
    ) -> usize {
        selection.clear(dataset);
        let mut missing = 0;
        for entry in &self.selected {
            let found: Option<CellId> = dataset
                .iter()
                .find(|(_, c)| {
                    !c.is_active()
                        && c.record.rec_gn == entry.receptor
                        && c.record.sig_gn == entry.signal_protein
                        && c.record.int_ty == entry.interaction_type
                })
                .map(|(id, _)| id);
            match found {
                Some(id) => {
                    selection.toggle(dataset, id);
                }
                None => {
                    log::warn!(
                        "Saved selection {:?} : {:?} not found in dataset",
                        entry.receptor,
                        entry.signal_protein
                    );
                    missing += 1;
                }
            }
        }
        missing
    }
}

// ---------- Public API ----------

/// Serialize the view state as pretty JSON.
pub fn state_to_json(state: &ViewStateSerde) -> Result<String> {
    Ok(serde_json::to_string_pretty(state)?)
}

/// Deserialize view state from JSON.
pub fn state_from_json(json: &str) -> Result<ViewStateSerde> {
    Ok(serde_json::from_str(json)?)
}

/// Save the view state to a JSON file at the given path.
pub fn save_state_to_path(state: &ViewStateSerde, path: &Path) -> Result<()> {
    let txt = state_to_json(state)?;
    std::fs::write(path, txt)?;
    log::info!("Saved view state to {}", path.display());
    Ok(())
}

/// Load the view state from a JSON file at the given path.
pub fn load_state_from_path(path: &Path) -> Result<ViewStateSerde> {
    let txt = std::fs::read_to_string(path)?;
    state_from_json(&txt)
}
