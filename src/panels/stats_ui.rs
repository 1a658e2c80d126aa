//! Structure statistics: one stacked bar chart at a time, picked by the
//! switcher buttons above the plot.

use egui::Ui;
use egui_plot::{uniform_grid_spacer, AxisHints, Bar, BarChart, HPlacement, Legend, Plot};

use super::heatmap_ui::category_label;
use super::panel_trait::{Panel, PanelState};
use crate::color_scheme::series_color;
use crate::data::stats::{format_thousands, StackedChart};
use crate::data::view::ChartData;

pub struct StatsPanel {
    state: PanelState,
}

impl Default for StatsPanel {
    fn default() -> Self {
        Self {
            state: PanelState::new("Statistics", egui_phosphor::regular::CHART_BAR),
        }
    }
}

impl Panel for StatsPanel {
    fn state(&self) -> &PanelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_menu(&mut self, ui: &mut Ui, data: &mut ChartData<'_>) {
        ui.menu_button("Chart", |ui| {
            for (kind, visible) in data.switcher.containers().collect::<Vec<_>>() {
                if ui.selectable_label(visible, kind.title()).clicked() {
                    data.switcher.select(kind);
                    ui.close();
                }
            }
        });
    }

    fn render_panel(&mut self, ui: &mut Ui, data: &mut ChartData<'_>) {
        ui.horizontal_wrapped(|ui| {
            for (kind, visible) in data.switcher.containers().collect::<Vec<_>>() {
                if ui
                    .selectable_label(visible, kind.id())
                    .on_hover_text(kind.title())
                    .clicked()
                {
                    data.switcher.select(kind);
                }
            }
            ui.separator();
            let kind = data.switcher.visible();
            let mut stacked = data.switcher.is_stacked(kind);
            let changed = ui.radio_value(&mut stacked, true, "Stacked").changed()
                | ui.radio_value(&mut stacked, false, "Grouped").changed();
            if changed {
                data.switcher.set_stacked(kind, stacked);
            }
        });

        let kind = data.switcher.visible();
        let chart = data.stats.chart(kind, data.switcher.is_stacked(kind));
        ui.strong(kind.title());
        if chart.is_empty() {
            ui.centered_and_justified(|ui| ui.label("No data"));
            return;
        }
        show_chart(ui, &chart, data.config.charts.mirror_y_axis, data.config.features.legend);
    }
}

fn show_chart(ui: &mut Ui, chart: &StackedChart, mirror_y: bool, legend: bool) {
    let categories = chart.categories();
    let n = categories.len() as f64;

    let mut y_axes =
        vec![AxisHints::new_y().formatter(|mark, _range| format_thousands(mark.value))];
    if mirror_y {
        y_axes.push(
            AxisHints::new_y()
                .placement(HPlacement::Right)
                .formatter(|mark, _range| format_thousands(mark.value)),
        );
    }

    let mut plot = Plot::new(("stats_chart", chart.kind.id()))
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_x(-0.5)
        .include_x(n - 0.5)
        .include_y(0.0)
        .x_grid_spacer(uniform_grid_spacer(|_| [1.0, 5.0, 10.0]))
        .x_axis_formatter(move |mark, _range| category_label(&categories, mark.value))
        .custom_y_axes(y_axes);
    if legend {
        plot = plot.legend(Legend::default());
    }

    let width = chart.bar_width();
    let mut layers: Vec<BarChart> = Vec::with_capacity(chart.series.len());
    for (i, series) in chart.series.iter().enumerate() {
        let bars: Vec<Bar> = chart
            .bars(i)
            .into_iter()
            .map(|b| Bar::new(b.argument, b.value).width(width).name(b.category))
            .collect();
        let mut layer = BarChart::new(series.key.clone(), bars).color(series_color(i));
        if chart.stacked {
            let below: Vec<&BarChart> = layers.iter().collect();
            layer = layer.stack_on(&below);
        }
        layers.push(layer);
    }

    plot.show(ui, |plot_ui| {
        for layer in layers {
            plot_ui.bar_chart(layer);
        }
    });
}
