//! Interaction heatmap: receptors along x, signaling proteins along y.
//!
//! Cells are drawn as rounded squares colored by interaction type; cells
//! without a type are drawn as empty outlines. Clicking a cell toggles it
//! in the selection, hovering shows a tooltip.

use egui::{Color32, Stroke, Ui};
use egui_plot::{uniform_grid_spacer, Legend, Line, Plot, PlotPoint, PlotPoints, Polygon, Text};

use super::panel_trait::{Panel, PanelState};
use crate::color_scheme::ordinal_color;
use crate::data::interactions::CellId;
use crate::data::view::ChartData;

/// Points per quarter circle of a rounded corner.
const CORNER_STEPS: usize = 4;

pub struct HeatmapPanel {
    state: PanelState,
    hovered: Option<CellId>,
}

impl Default for HeatmapPanel {
    fn default() -> Self {
        Self {
            state: PanelState::new("Heatmap", egui_phosphor::regular::GRID_FOUR),
            hovered: None,
        }
    }
}

impl HeatmapPanel {
    /// Cell currently under the pointer, if any.
    pub fn hovered(&self) -> Option<CellId> {
        self.hovered
    }
}

impl Panel for HeatmapPanel {
    fn state(&self) -> &PanelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_menu(&mut self, ui: &mut Ui, data: &mut ChartData<'_>) {
        ui.label(format!(
            "{} interactions, {} receptors, {} signaling proteins",
            data.dataset.len(),
            data.dataset.receptor_axis().len(),
            data.dataset.signal_protein_axis().len()
        ));
    }

    fn render_panel(&mut self, ui: &mut Ui, data: &mut ChartData<'_>) {
        let cfg = data.config;
        let layout = &cfg.heatmap;
        let features = &cfg.features;
        let outline = cfg.color_scheme.outline_color();

        let dataset = &*data.dataset;
        if dataset.is_empty() {
            ui.centered_and_justified(|ui| ui.label("No interactions loaded"));
            return;
        }

        let types = dataset.interaction_types();
        let corner = if dataset.is_compact(layout.compact_threshold) {
            layout.compact_corner
        } else {
            layout.corner
        };
        let x_labels = dataset.receptor_axis().to_vec();
        let y_labels = dataset.signal_protein_axis().to_vec();
        let n_x = x_labels.len() as f64;
        let n_y = y_labels.len() as f64;

        let mut plot = Plot::new("interaction_heatmap")
            .data_aspect(1.0)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .show_x(false)
            .show_y(false)
            .show_grid(features.grid)
            .include_x(-1.0)
            .include_x(n_x + 0.5)
            .include_y(-1.5)
            .include_y(n_y - 0.5)
            .x_grid_spacer(uniform_grid_spacer(|_| [1.0, 5.0, 10.0]))
            .y_grid_spacer(uniform_grid_spacer(|_| [1.0, 5.0, 10.0]))
            .x_axis_label(layout.x_label.clone())
            .y_axis_label(layout.y_label.clone())
            .x_axis_formatter(move |mark, _range| category_label(&x_labels, mark.value))
            .y_axis_formatter(move |mark, _range| category_label(&y_labels, mark.value));
        if features.legend {
            plot = plot.legend(Legend::default());
        }

        let plot_resp = plot.show(ui, |plot_ui| {
            for (id, cell) in dataset.iter() {
                let Some((cx, cy)) = dataset.position(id) else {
                    continue;
                };
                let outline_pts = rounded_square(cx, cy, layout.cell_fill, corner);

                let fill = cell
                    .record
                    .int_ty
                    .as_deref()
                    .and_then(|ty| ordinal_color(&types, ty).map(|c| (ty, c)));
                match fill {
                    Some((ty, color)) => {
                        // Named after the type so the legend lists each type once.
                        plot_ui.polygon(
                            Polygon::new(ty, PlotPoints::from(outline_pts.clone()))
                                .fill_color(color)
                                .stroke(Stroke::new(0.5, color)),
                        );
                    }
                    None => {
                        plot_ui.polygon(
                            Polygon::new("", PlotPoints::from(outline_pts.clone()))
                                .fill_color(Color32::TRANSPARENT)
                                .stroke(Stroke::new(1.0, Color32::GRAY)),
                        );
                    }
                }

                if cell.is_active() {
                    let mut closed = outline_pts;
                    if let Some(first) = closed.first().copied() {
                        closed.push(first);
                    }
                    plot_ui.line(
                        Line::new("", PlotPoints::from(closed))
                            .color(outline)
                            .width(2.0),
                    );
                }
            }

            if features.sequences {
                for id in dataset.unique_receptors() {
                    if let (Some(cell), Some((x, _))) = (dataset.cell(id), dataset.position(id)) {
                        if let Some(aa) = cell.record.rec_aa.as_deref() {
                            plot_ui.text(Text::new("", PlotPoint::new(x, -1.0), aa));
                        }
                    }
                }
                for id in dataset.unique_signal_proteins() {
                    if let (Some(cell), Some((_, y))) = (dataset.cell(id), dataset.position(id)) {
                        if let Some(aa) = cell.record.sig_aa.as_deref() {
                            plot_ui.text(Text::new("", PlotPoint::new(n_x, y), aa));
                        }
                    }
                }
                let strip = 0.35;
                let receptor_strip = rect_outline(-0.5, -1.0 - strip, n_x - 0.5, -1.0 + strip);
                let signal_strip = rect_outline(n_x - strip, -0.5, n_x + strip, n_y - 0.5);
                for outline_pts in [receptor_strip, signal_strip] {
                    plot_ui.line(
                        Line::new("", PlotPoints::from(outline_pts))
                            .color(outline)
                            .width(1.0),
                    );
                }
            }

            plot_ui.pointer_coordinate()
        });

        let pointer = plot_resp.inner;
        self.hovered = pointer.and_then(|p| dataset.cell_at(p.x, p.y, layout.cell_fill));

        let Some(id) = self.hovered else {
            return;
        };
        let response = plot_resp.response;
        if features.tooltips {
            if let Some(cell) = dataset.cell(id) {
                let lines = cell.tooltip_lines();
                response.clone().on_hover_ui_at_pointer(|ui| {
                    for line in &lines {
                        ui.label(line);
                    }
                });
            }
        }
        if response.clicked() {
            data.toggle(id);
        }
    }
}

/// Axis tick label for a category axis: the name at integer positions only.
pub(crate) fn category_label(labels: &[String], value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    labels.get(rounded as usize).cloned().unwrap_or_default()
}

/// Outline of a square centered on `(cx, cy)` with rounded corners.
///
/// `side` is the side length, `corner` the corner radius as a fraction of
/// the side. Points run counter-clockwise and the polygon is not closed.
fn rounded_square(cx: f64, cy: f64, side: f64, corner: f64) -> Vec<[f64; 2]> {
    let half = side / 2.0;
    let r = (side * corner).clamp(0.0, half);
    if r == 0.0 {
        return vec![
            [cx + half, cy + half],
            [cx - half, cy + half],
            [cx - half, cy - half],
            [cx + half, cy - half],
        ];
    }

    let centers = [
        (cx + half - r, cy + half - r),
        (cx - half + r, cy + half - r),
        (cx - half + r, cy - half + r),
        (cx + half - r, cy - half + r),
    ];
    let mut pts = Vec::with_capacity(4 * (CORNER_STEPS + 1));
    for (quarter, (ox, oy)) in centers.into_iter().enumerate() {
        for step in 0..=CORNER_STEPS {
            let angle = std::f64::consts::FRAC_PI_2
                * (quarter as f64 + step as f64 / CORNER_STEPS as f64);
            pts.push([ox + r * angle.cos(), oy + r * angle.sin()]);
        }
    }
    pts
}

fn rect_outline(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<[f64; 2]> {
    vec![[x0, y0], [x1, y0], [x1, y1], [x0, y1], [x0, y0]]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_labels_only_on_integers() {
        let labels = vec!["a".to_string(), "b".to_string()];
        assert_eq!(category_label(&labels, 1.0), "b");
        assert_eq!(category_label(&labels, 0.5), "");
        assert_eq!(category_label(&labels, -1.0), "");
        assert_eq!(category_label(&labels, 7.0), "");
    }

    #[test]
    fn rounded_square_stays_inside_its_slot() {
        let pts = rounded_square(2.0, 3.0, 0.75, 0.2);
        assert_eq!(pts.len(), 4 * (CORNER_STEPS + 1));
        for [x, y] in pts {
            assert!((x - 2.0).abs() <= 0.375 + 1e-9);
            assert!((y - 3.0).abs() <= 0.375 + 1e-9);
        }
    }

    #[test]
    fn zero_corner_gives_plain_square() {
        assert_eq!(rounded_square(0.0, 0.0, 1.0, 0.0).len(), 4);
    }
}
