//! Color schemes and the categorical palettes used by the charts.
//!
//! Interaction types are colored with the ColorBrewer "Dark2" palette, bar
//! series with the classic 20-color categorical palette. Both cycle when a
//! chart has more categories than colors.

use eframe::egui::{Color32, Context, Visuals};
use serde::{Deserialize, Serialize};

/// ColorBrewer Dark2, used for interaction types.
pub const DARK2: [Color32; 8] = [
    Color32::from_rgb(27, 158, 119),
    Color32::from_rgb(217, 95, 2),
    Color32::from_rgb(117, 112, 179),
    Color32::from_rgb(231, 41, 138),
    Color32::from_rgb(102, 166, 30),
    Color32::from_rgb(230, 171, 2),
    Color32::from_rgb(166, 118, 29),
    Color32::from_rgb(102, 102, 102),
];

/// 20-color categorical palette, used for bar series.
pub const CATEGORY20: [Color32; 20] = [
    Color32::from_rgb(31, 119, 180),
    Color32::from_rgb(174, 199, 232),
    Color32::from_rgb(255, 127, 14),
    Color32::from_rgb(255, 187, 120),
    Color32::from_rgb(44, 160, 44),
    Color32::from_rgb(152, 223, 138),
    Color32::from_rgb(214, 39, 40),
    Color32::from_rgb(255, 152, 150),
    Color32::from_rgb(148, 103, 189),
    Color32::from_rgb(197, 176, 213),
    Color32::from_rgb(140, 86, 75),
    Color32::from_rgb(196, 156, 148),
    Color32::from_rgb(227, 119, 194),
    Color32::from_rgb(247, 182, 210),
    Color32::from_rgb(127, 127, 127),
    Color32::from_rgb(199, 199, 199),
    Color32::from_rgb(188, 189, 34),
    Color32::from_rgb(219, 219, 141),
    Color32::from_rgb(23, 190, 207),
    Color32::from_rgb(158, 218, 229),
];

/// Color of the `index`-th interaction type.
pub fn interaction_color(index: usize) -> Color32 {
    DARK2[index % DARK2.len()]
}

/// Color of the `index`-th bar series.
pub fn series_color(index: usize) -> Color32 {
    CATEGORY20[index % CATEGORY20.len()]
}

/// Look up the color of `value` within an ordered category domain.
pub fn ordinal_color(domain: &[&str], value: &str) -> Option<Color32> {
    domain
        .iter()
        .position(|d| *d == value)
        .map(interaction_color)
}

/// Visual theme of the window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorScheme {
    /// Light page-like theme.
    #[default]
    Light,
    Dark,
    SolarizedLight,
    /// Pure black background with white text.
    HighContrast,
}

impl ColorScheme {
    /// All built-in schemes (useful for combo-box UIs).
    pub fn all() -> &'static [ColorScheme] {
        &[
            ColorScheme::Light,
            ColorScheme::Dark,
            ColorScheme::SolarizedLight,
            ColorScheme::HighContrast,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ColorScheme::Light => "Light",
            ColorScheme::Dark => "Dark",
            ColorScheme::SolarizedLight => "Solarized Light",
            ColorScheme::HighContrast => "High Contrast",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ColorScheme::Dark | ColorScheme::HighContrast)
    }

    /// Outline of active heatmap cells and of sequence boxes.
    pub fn outline_color(&self) -> Color32 {
        if self.is_dark() {
            Color32::WHITE
        } else {
            Color32::BLACK
        }
    }

    /// Apply this scheme's visuals to an egui context.
    pub fn apply(&self, ctx: &Context) {
        match self {
            ColorScheme::Light => ctx.set_visuals(Visuals::light()),
            ColorScheme::Dark => ctx.set_visuals(Visuals::dark()),
            ColorScheme::SolarizedLight => {
                let mut v = Visuals::light();
                let base3 = Color32::from_rgb(253, 246, 227);
                let base2 = Color32::from_rgb(238, 232, 213);
                let base00 = Color32::from_rgb(101, 123, 131);
                v.panel_fill = base3;
                v.window_fill = base2;
                v.extreme_bg_color = base3;
                v.faint_bg_color = base2;
                v.override_text_color = Some(base00);
                v.widgets.noninteractive.bg_fill = base2;
                v.widgets.noninteractive.fg_stroke.color = base00;
                v.widgets.inactive.bg_fill = base2;
                v.widgets.inactive.fg_stroke.color = base00;
                ctx.set_visuals(v);
            }
            ColorScheme::HighContrast => {
                let mut v = Visuals::dark();
                v.panel_fill = Color32::BLACK;
                v.window_fill = Color32::from_rgb(10, 10, 10);
                v.extreme_bg_color = Color32::BLACK;
                v.faint_bg_color = Color32::from_rgb(20, 20, 20);
                v.override_text_color = Some(Color32::WHITE);
                v.widgets.noninteractive.bg_fill = Color32::from_rgb(20, 20, 20);
                v.widgets.noninteractive.fg_stroke.color = Color32::WHITE;
                ctx.set_visuals(v);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinal_colors_follow_domain_order_and_cycle() {
        let domain = ["polar", "hydrophobic"];
        assert_eq!(ordinal_color(&domain, "hydrophobic"), Some(DARK2[1]));
        assert_eq!(ordinal_color(&domain, "ionic"), None);
        assert_eq!(interaction_color(8), DARK2[0]);
        assert_eq!(series_color(21), CATEGORY20[1]);
    }
}
