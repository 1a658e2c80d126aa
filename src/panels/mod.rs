pub mod heatmap_ui;
pub mod info_box_ui;
pub mod panel_trait;
pub mod stats_ui;
pub mod table_ui;

pub use heatmap_ui::HeatmapPanel;
pub use info_box_ui::InfoBoxPanel;
pub use panel_trait::{Panel, PanelState};
pub use stats_ui::StatsPanel;
pub use table_ui::TablePanel;
