//! Selection tracking for the heatmap and the info box that mirrors it.
//!
//! [`SelectionTracker`] owns the ordered list of active cells. Every toggle
//! is followed by a full reconciliation of an [`InfoDisplay`], so the shown
//! lines always equal [`SelectionTracker::render`] for the current state.

use super::interactions::{CellId, Dataset};

/// Default vertical distance between two info lines.
pub const DEFAULT_LINE_SPACING: f32 = 15.0;

/// Counts reported by one reconciliation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileStats {
    pub added: usize,
    pub removed: usize,
    /// Lines kept from the previous pass and rewritten in place.
    pub refreshed: usize,
}

/// Anything that can display the rendered selection lines.
pub trait InfoDisplay {
    /// Bring the displayed lines in line with `lines`.
    fn reconcile(&mut self, lines: &[String]) -> ReconcileStats;
}

/// One displayed line of the info box.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoLine {
    pub text: String,
    /// Offset from the top of the box.
    pub y: f32,
}

/// The displayed list of selected interactions.
#[derive(Debug, Clone)]
pub struct InfoBox {
    lines: Vec<InfoLine>,
    line_spacing: f32,
}

impl Default for InfoBox {
    fn default() -> Self {
        Self::new(DEFAULT_LINE_SPACING)
    }
}

impl InfoBox {
    pub fn new(line_spacing: f32) -> Self {
        Self {
            lines: Vec::new(),
            line_spacing,
        }
    }

    pub fn lines(&self) -> &[InfoLine] {
        &self.lines
    }

    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.text.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line_spacing(&self) -> f32 {
        self.line_spacing
    }
}

impl InfoDisplay for InfoBox {
    fn reconcile(&mut self, lines: &[String]) -> ReconcileStats {
        let kept = self.lines.len().min(lines.len());
        let removed = self.lines.len() - kept;
        self.lines.truncate(kept);

        // Kept lines are rewritten even when the text looks unchanged: the
        // underlying record may have changed since the last pass.
        for (i, (line, text)) in self.lines.iter_mut().zip(lines).enumerate() {
            line.y = i as f32 * self.line_spacing;
            line.text.clone_from(text);
        }

        for (i, text) in lines.iter().enumerate().skip(kept) {
            self.lines.push(InfoLine {
                text: text.clone(),
                y: i as f32 * self.line_spacing,
            });
        }

        ReconcileStats {
            added: lines.len() - kept,
            removed,
            refreshed: kept,
        }
    }
}

/// Ordered set of active cells, in activation order.
#[derive(Debug, Clone, Default)]
pub struct SelectionTracker {
    selected: Vec<CellId>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the active flag of `id` and update the selection set.
    ///
    /// Returns the new active state. Unknown ids are ignored and reported
    /// as inactive.
    pub fn toggle(&mut self, dataset: &mut Dataset, id: CellId) -> bool {
        let Some(cell) = dataset.cell_mut(id) else {
            log::warn!("Ignoring toggle of unknown cell {}", id.0);
            return false;
        };
        let active = !cell.is_active();
        cell.set_active(active);

        if active {
            if self.selected.contains(&id) {
                // The flag and the set disagreed before this call, which means
                // someone else flipped the flag.
                log::error!("Cell {} activated but already selected", id.0);
                debug_assert!(false, "cell {} already selected", id.0);
            } else {
                self.selected.push(id);
            }
        } else if let Some(pos) = self.selected.iter().position(|c| *c == id) {
            self.selected.remove(pos);
        } else {
            log::error!("Cell {} deactivated but was not selected", id.0);
        }

        log::debug!(
            "Cell {} {} ({} selected)",
            id.0,
            if active { "selected" } else { "deselected" },
            self.selected.len()
        );
        active
    }

    /// One info line per selected cell, in activation order.
    pub fn render(&self, dataset: &Dataset) -> Vec<String> {
        self.selected
            .iter()
            .filter_map(|id| dataset.cell(*id))
            .map(|c| c.info_line())
            .collect()
    }

    /// Reconcile `display` with the current selection.
    pub fn sync<D: InfoDisplay + ?Sized>(
        &self,
        dataset: &Dataset,
        display: &mut D,
    ) -> ReconcileStats {
        display.reconcile(&self.render(dataset))
    }

    /// Toggle `id` and immediately reconcile `display`.
    pub fn toggle_and_sync<D: InfoDisplay + ?Sized>(
        &mut self,
        dataset: &mut Dataset,
        id: CellId,
        display: &mut D,
    ) -> bool {
        let active = self.toggle(dataset, id);
        self.sync(dataset, display);
        active
    }

    /// Deactivate every selected cell.
    pub fn clear(&mut self, dataset: &mut Dataset) {
        for id in self.selected.drain(..) {
            if let Some(cell) = dataset.cell_mut(id) {
                cell.set_active(false);
            }
        }
    }

    pub fn ids(&self) -> &[CellId] {
        &self.selected
    }

    pub fn iter(&self) -> impl Iterator<Item = CellId> + '_ {
        self.selected.iter().copied()
    }

    pub fn contains(&self, id: CellId) -> bool {
        self.selected.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// `true` when every active cell is selected exactly once and nothing else is.
    pub fn is_consistent(&self, dataset: &Dataset) -> bool {
        let active_count = dataset.cells().iter().filter(|c| c.is_active()).count();
        let all_active = self
            .selected
            .iter()
            .all(|id| dataset.cell(*id).is_some_and(|c| c.is_active()));
        let unique = self
            .selected
            .iter()
            .enumerate()
            .all(|(i, id)| !self.selected[..i].contains(id));
        all_active && unique && active_count == self.selected.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn reconcile_enters_updates_and_exits() {
        let mut info = InfoBox::default();
        let stats = info.reconcile(&lines(&["a", "b"]));
        assert_eq!(
            stats,
            ReconcileStats {
                added: 2,
                removed: 0,
                refreshed: 0
            }
        );

        let stats = info.reconcile(&lines(&["b"]));
        assert_eq!(
            stats,
            ReconcileStats {
                added: 0,
                removed: 1,
                refreshed: 1
            }
        );
        assert_eq!(info.texts(), vec!["b"]);
        assert_eq!(info.lines()[0].y, 0.0);
    }

    #[test]
    fn offsets_follow_line_spacing() {
        let mut info = InfoBox::new(20.0);
        info.reconcile(&lines(&["a", "b", "c"]));
        let ys: Vec<f32> = info.lines().iter().map(|l| l.y).collect();
        assert_eq!(ys, vec![0.0, 20.0, 40.0]);
    }
}
