//! Top-level entry point for opening the chart window.

use eframe::egui;

use crate::config::ChartsConfig;
use crate::data::interactions::Dataset;
use crate::data::stats::StatsData;
use crate::error::Error;
use crate::persistence::ViewStateSerde;

use super::ChartsApp;

/// Open the chart window and block until it is closed.
///
/// `state`, when given, is restored before the first frame.
pub fn run_charts(
    config: ChartsConfig,
    dataset: Dataset,
    stats: StatsData,
    state: Option<ViewStateSerde>,
) -> crate::Result<()> {
    let title = config.title.clone();
    let [w, h] = config.window_size;

    let mut app = ChartsApp::new(config, dataset, stats);
    if let Some(state) = &state {
        app.apply_state(state);
    }

    let mut viewport = egui::ViewportBuilder::default().with_inner_size(egui::vec2(w, h));
    if let Some(icon) = window_icon() {
        viewport = viewport.with_icon(icon);
    }
    let opts = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    log::info!("Opening window '{title}'");
    eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            // Install Phosphor icon font before creating the app.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )?;
    Ok(())
}

/// Edge length of the window icon in pixels.
const ICON_PX: u32 = 64;

const ICON_SVG: &str = include_str!("../../icon.svg");

fn window_icon() -> Option<egui::IconData> {
    match rasterize_icon(ICON_SVG, ICON_PX) {
        Ok(icon) => Some(icon),
        Err(e) => {
            log::warn!("Window icon unavailable: {e}");
            None
        }
    }
}

/// Scale `svg` to fit a `px` square, centered, and return its RGBA pixels.
fn rasterize_icon(svg: &str, px: u32) -> crate::Result<egui::IconData> {
    let tree = usvg::Tree::from_str(svg, &usvg::Options::default())?;
    let size = tree.size();
    let side = px as f32;
    let scale = side / size.width().max(size.height());
    if !scale.is_finite() || scale <= 0.0 {
        return Err(Error::Svg(format!(
            "icon has no area ({}x{})",
            size.width(),
            size.height()
        )));
    }
    let dx = (side - size.width() * scale) / 2.0;
    let dy = (side - size.height() * scale) / 2.0;

    let mut pixmap = tiny_skia::Pixmap::new(px, px)
        .ok_or_else(|| Error::Svg(format!("cannot allocate a {px}x{px} icon")))?;
    let transform = tiny_skia::Transform::from_scale(scale, scale).post_translate(dx, dy);
    resvg::render(&tree, transform, &mut pixmap.as_mut());
    Ok(egui::IconData {
        rgba: pixmap.take(),
        width: px,
        height: px,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_icon_fills_a_square() {
        let icon = rasterize_icon(ICON_SVG, 32).unwrap();
        assert_eq!((icon.width, icon.height), (32, 32));
        assert_eq!(icon.rgba.len(), 32 * 32 * 4);
        assert!(icon.rgba.chunks(4).any(|px| px[3] > 0));
    }

    #[test]
    fn wide_icon_is_letterboxed() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="10">
            <rect width="20" height="10" fill="black"/></svg>"#;
        let icon = rasterize_icon(svg, 8).unwrap();
        let alpha = |x: usize, y: usize| icon.rgba[(y * 8 + x) * 4 + 3];
        assert_eq!(alpha(4, 0), 0);
        assert_eq!(alpha(4, 4), 255);
        assert_eq!(alpha(4, 7), 0);
    }

    #[test]
    fn broken_icon_is_an_error() {
        assert!(rasterize_icon("<svg", 16).is_err());
    }
}
