//! Structure statistics: stacked multi-bar chart data and the chart switcher.
//!
//! Each chart is fed from one "datum": an array of series in the
//! `{ key, values: [{ x, y }] }` shape. Bar stacking itself is left to
//! `egui_plot`; this module only lays the series out on shared categories.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Fraction of a category slot covered by its bars.
pub const BAR_SLOT: f64 = 0.8;

/// X value of a series point: a year, a class name, ...
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum XValue {
    Number(f64),
    Text(String),
}

impl XValue {
    pub fn label(&self) -> String {
        match self {
            XValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => format!("{}", *n as i64),
            XValue::Number(n) => n.to_string(),
            XValue::Text(s) => s.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub x: XValue,
    pub y: f64,
}

/// One stacked layer of a bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub key: String,
    #[serde(default)]
    pub values: Vec<SeriesPoint>,
}

/// The statistics charts shown on the page.
///
/// Serialized by the same short id that [`ChartKind::id`] returns.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum ChartKind {
    #[serde(rename = "unique_cryst")]
    UniqueCrystallized,
    #[serde(rename = "unique_cryst_year")]
    UniqueCrystallizedPerYear,
    #[serde(rename = "cryst_year")]
    AllCrystalsPerYear,
    #[default]
    #[serde(rename = "unique_class")]
    UniqueByClass,
    #[serde(rename = "unique_class_year")]
    UniqueByClassPerYear,
    #[serde(rename = "class_year")]
    AllByClassPerYear,
}

impl ChartKind {
    pub const ALL: [ChartKind; 6] = [
        ChartKind::UniqueCrystallized,
        ChartKind::UniqueCrystallizedPerYear,
        ChartKind::AllCrystalsPerYear,
        ChartKind::UniqueByClass,
        ChartKind::UniqueByClassPerYear,
        ChartKind::AllByClassPerYear,
    ];

    /// Short identifier used by the switcher and on the command line.
    pub fn id(self) -> &'static str {
        match self {
            ChartKind::UniqueCrystallized => "unique_cryst",
            ChartKind::UniqueCrystallizedPerYear => "unique_cryst_year",
            ChartKind::AllCrystalsPerYear => "cryst_year",
            ChartKind::UniqueByClass => "unique_class",
            ChartKind::UniqueByClassPerYear => "unique_class_year",
            ChartKind::AllByClassPerYear => "class_year",
        }
    }

    /// Key of this chart's datum in the statistics JSON.
    pub fn datum_key(self) -> &'static str {
        match self {
            ChartKind::UniqueCrystallized => "unique_cryst_container",
            ChartKind::UniqueCrystallizedPerYear => "unique_cryst_year_container",
            ChartKind::AllCrystalsPerYear => "cryst_year_container",
            ChartKind::UniqueByClass => "unique_class_cryst_container",
            ChartKind::UniqueByClassPerYear => "unique_class_cryst_year_container",
            ChartKind::AllByClassPerYear => "cryst_class_year_container",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ChartKind::UniqueCrystallized => "Unique crystallized receptors",
            ChartKind::UniqueCrystallizedPerYear => "Unique crystallized receptors per year",
            ChartKind::AllCrystalsPerYear => "All crystal structures per year",
            ChartKind::UniqueByClass => "Unique crystallized receptors per class",
            ChartKind::UniqueByClassPerYear => "Unique crystallized receptors per class and year",
            ChartKind::AllByClassPerYear => "All crystal structures per class and year",
        }
    }

    /// Parse either a switcher id or a datum key.
    pub fn from_id(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.id() == s || k.datum_key() == s)
            .ok_or_else(|| Error::UnknownChart(s.to_string()))
    }
}

/// One chart ready to be drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct StackedChart {
    pub kind: ChartKind,
    pub series: Vec<Series>,
    /// Stacked when `true`, side by side otherwise.
    pub stacked: bool,
}

/// A single bar of one series.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSpec {
    /// Position along the x axis (category index plus group offset).
    pub argument: f64,
    pub value: f64,
    pub category: String,
}

impl StackedChart {
    pub fn new(kind: ChartKind, series: Vec<Series>, stacked: bool) -> Self {
        Self {
            kind,
            series,
            stacked,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.series.iter().all(|s| s.values.is_empty())
    }

    /// Union of all x labels, in first-seen order across series.
    pub fn categories(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for p in self.series.iter().flat_map(|s| s.values.iter()) {
            let label = p.x.label();
            if !out.contains(&label) {
                out.push(label);
            }
        }
        out
    }

    pub fn bar_width(&self) -> f64 {
        if self.stacked {
            BAR_SLOT
        } else {
            BAR_SLOT / self.series.len().max(1) as f64
        }
    }

    /// Bars of series `index`, one per category in category order.
    ///
    /// Categories the series has no value for get a zero bar, so that bars of
    /// different series line up index by index when stacked. Repeated x
    /// values within one series are summed.
    pub fn bars(&self, index: usize) -> Vec<BarSpec> {
        let Some(series) = self.series.get(index) else {
            return Vec::new();
        };
        let width = self.bar_width();
        let offset = if self.stacked {
            0.0
        } else {
            -BAR_SLOT / 2.0 + width * (index as f64 + 0.5)
        };

        self.categories()
            .into_iter()
            .enumerate()
            .map(|(slot, category)| {
                let value = series
                    .values
                    .iter()
                    .filter(|p| p.x.label() == category)
                    .map(|p| p.y)
                    .sum();
                BarSpec {
                    argument: slot as f64 + offset,
                    value,
                    category,
                }
            })
            .collect()
    }
}

/// Series of every statistics chart, keyed by chart.
#[derive(Debug, Clone, Default)]
pub struct StatsData {
    charts: HashMap<ChartKind, Vec<Series>>,
}

impl StatsData {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, Vec<Series>> = serde_json::from_str(json)?;
        let mut charts = HashMap::new();
        for (key, series) in raw {
            match ChartKind::from_id(&key) {
                Ok(kind) => {
                    charts.insert(kind, series);
                }
                Err(_) => log::warn!("Ignoring statistics datum '{key}'"),
            }
        }
        Ok(Self { charts })
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let txt = std::fs::read_to_string(path)?;
        let data = Self::from_json_str(&txt)?;
        log::info!("Loaded {} statistics charts from {}", data.charts.len(), path.display());
        Ok(data)
    }

    pub fn insert(&mut self, kind: ChartKind, series: Vec<Series>) {
        self.charts.insert(kind, series);
    }

    /// Series of `kind`; empty when the datum was not supplied.
    pub fn series(&self, kind: ChartKind) -> &[Series] {
        self.charts.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn chart(&self, kind: ChartKind, stacked: bool) -> StackedChart {
        StackedChart::new(kind, self.series(kind).to_vec(), stacked)
    }
}

/// Keeps exactly one statistics chart visible at a time and remembers the
/// stacked/grouped mode of each chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSwitcher {
    visible: ChartKind,
    default_stacked: bool,
    /// Charts whose mode was changed from `default_stacked`.
    stacked: BTreeMap<ChartKind, bool>,
}

impl Default for ChartSwitcher {
    fn default() -> Self {
        Self::new(ChartKind::default())
    }
}

impl ChartSwitcher {
    pub fn new(initial: ChartKind) -> Self {
        Self {
            visible: initial,
            default_stacked: true,
            stacked: BTreeMap::new(),
        }
    }

    /// Start every chart stacked (`true`) or grouped (`false`).
    pub fn with_default_stacked(mut self, stacked: bool) -> Self {
        self.default_stacked = stacked;
        self
    }

    pub fn is_stacked(&self, kind: ChartKind) -> bool {
        self.stacked
            .get(&kind)
            .copied()
            .unwrap_or(self.default_stacked)
    }

    /// Change the mode of one chart; the others keep theirs.
    pub fn set_stacked(&mut self, kind: ChartKind, stacked: bool) {
        if self.is_stacked(kind) != stacked {
            log::debug!(
                "{} chart now {}",
                kind.id(),
                if stacked { "stacked" } else { "grouped" }
            );
        }
        if stacked == self.default_stacked {
            self.stacked.remove(&kind);
        } else {
            self.stacked.insert(kind, stacked);
        }
    }

    /// Modes that differ from the default, keyed by chart.
    pub fn stacked_overrides(&self) -> &BTreeMap<ChartKind, bool> {
        &self.stacked
    }

    /// Apply saved per-chart modes on top of the current default.
    pub fn restore_stacked(&mut self, modes: &BTreeMap<ChartKind, bool>) {
        self.stacked.clear();
        for (&kind, &stacked) in modes {
            self.set_stacked(kind, stacked);
        }
    }

    /// Show `kind` and hide every other chart.
    pub fn select(&mut self, kind: ChartKind) {
        if self.visible != kind {
            log::debug!("Switching statistics chart to {}", kind.id());
        }
        self.visible = kind;
    }

    pub fn visible(&self) -> ChartKind {
        self.visible
    }

    pub fn is_visible(&self, kind: ChartKind) -> bool {
        self.visible == kind
    }

    /// Every chart with its visibility, in display order.
    pub fn containers(&self) -> impl Iterator<Item = (ChartKind, bool)> + '_ {
        ChartKind::ALL.into_iter().map(move |k| (k, self.is_visible(k)))
    }
}

/// Tick label format of the bar charts: rounded, with `,` thousands separators.
pub fn format_thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_numbers_label_without_fraction() {
        assert_eq!(XValue::Number(2004.0).label(), "2004");
        assert_eq!(XValue::Number(2.5).label(), "2.5");
    }
}
