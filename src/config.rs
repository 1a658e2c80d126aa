//! Configuration of the chart window.
//!
//! Every field has a default, so a YAML file only needs to name what it
//! changes:
//!
//! ```yaml
//! title: "GPCR / G-protein interactions"
//! color_scheme: dark
//! features:
//!   data_table: false
//! charts:
//!   initial: unique_class_year
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color_scheme::ColorScheme;
use crate::data::selection::DEFAULT_LINE_SPACING;
use crate::data::stats::ChartKind;
use crate::error::Result;

// ─────────────────────────────────────────────────────────────────────────────
// Feature flags
// ─────────────────────────────────────────────────────────────────────────────

/// Toggle individual views on or off.
///
/// All features default to `true` (enabled).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureFlags {
    /// Interaction-type legend next to the heatmap.
    pub legend: bool,
    /// Grid lines behind the heatmap.
    pub grid: bool,
    /// Hover tooltip on heatmap cells.
    pub tooltips: bool,
    /// Info box listing the selected interactions.
    pub info_box: bool,
    /// Amino-acid strips along both heatmap axes.
    pub sequences: bool,
    /// Raw interaction table.
    pub data_table: bool,
    /// Structure statistics bar charts.
    pub statistics: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            legend: true,
            grid: true,
            tooltips: true,
            info_box: true,
            sequences: true,
            data_table: true,
            statistics: true,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Heatmap layout
// ─────────────────────────────────────────────────────────────────────────────

/// Geometry of the heatmap cells, in category units.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatmapLayout {
    /// Fraction of a category slot covered by a cell. Default: `0.75`.
    pub cell_fill: f64,
    /// Corner radius (fraction of the cell side) for small datasets. Default: `0.2`.
    pub compact_corner: f64,
    /// Corner radius (fraction of the cell side) for large datasets. Default: `0.12`.
    pub corner: f64,
    /// Datasets with fewer cells than this count as small. Default: `15`.
    pub compact_threshold: usize,
    /// Vertical distance between info box lines (px). Default: `15.0`.
    pub info_line_spacing: f32,
    /// Axis label under the receptor axis.
    pub x_label: String,
    /// Axis label beside the signaling-protein axis.
    pub y_label: String,
}

impl Default for HeatmapLayout {
    fn default() -> Self {
        Self {
            cell_fill: 0.75,
            compact_corner: 0.2,
            corner: 0.12,
            compact_threshold: 15,
            info_line_spacing: DEFAULT_LINE_SPACING,
            x_label: "GPCR".to_string(),
            y_label: "G-Protein".to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Statistics charts
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    /// Chart shown when the window opens.
    pub initial: ChartKind,
    /// Stack the series (otherwise grouped side by side). Default: `true`.
    pub stacked: bool,
    /// Repeat the value axis on the right side. Default: `true`.
    pub mirror_y_axis: bool,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            initial: ChartKind::default(),
            stacked: true,
            mirror_y_axis: true,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ChartsConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration.
///
/// | Field          | Purpose |
/// |----------------|---------|
/// | `features`     | Toggle individual views on/off |
/// | `heatmap`      | Cell geometry and axis labels |
/// | `charts`       | Statistics chart defaults |
/// | `color_scheme` | Predefined visual theme |
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartsConfig {
    /// Native window title.
    pub title: String,
    /// Initial inner window size.
    pub window_size: [f32; 2],
    pub color_scheme: ColorScheme,
    pub features: FeatureFlags,
    pub heatmap: HeatmapLayout,
    pub charts: ChartSettings,
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            title: "Signaling protein interactions".to_string(),
            window_size: [1400.0, 900.0],
            color_scheme: ColorScheme::default(),
            features: FeatureFlags::default(),
            heatmap: HeatmapLayout::default(),
            charts: ChartSettings::default(),
        }
    }
}

impl ChartsConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let txt = std::fs::read_to_string(path)?;
        let cfg = Self::from_yaml_str(&txt)?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
