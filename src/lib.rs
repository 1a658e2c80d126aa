//! signprotmat crate root: re-exports and module wiring.
//!
//! Interactive receptor / signaling-protein interaction heatmap built on
//! egui/eframe, with structure statistics bar charts next to it.
//!
//! - `data`: interaction dataset, selection tracker, statistics series, CSV export
//! - `config`: YAML-loadable window and chart configuration
//! - `persistence`: save/restore of the view state as JSON
//! - `svg_merge`: combine an exported chart SVG with its legend SVG
//! - `panels` / `app`: the egui UI

pub mod app;
pub mod color_scheme;
pub mod config;
pub mod data;
pub mod error;
pub mod panels;
pub mod persistence;
pub mod svg_merge;

// Public re-exports for a compact external API
pub use app::{run_charts, ChartsApp};
pub use color_scheme::ColorScheme;
pub use config::ChartsConfig;
pub use data::interactions::{Cell, CellId, Dataset, InteractionRecord};
pub use data::selection::{InfoBox, InfoDisplay, SelectionTracker};
pub use data::stats::{ChartKind, ChartSwitcher, StackedChart, StatsData};
pub use error::{Error, Result};
pub use persistence::ViewStateSerde;
