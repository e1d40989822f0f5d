//! Dual-axis scatter chart.

use egui::{Color32, RichText, Ui};
use egui_plot::{AxisHints, Corner, HPlacement, Legend, Line, MarkerShape, Plot, PlotPoints, Points};

use crate::config::{ChartConfig, LegendOrientation};
use crate::data::axis::{format_tick, SecondaryAxisMap};
use crate::data::traces::{Trace, YAxis};

/// Room left for the title heading and the legend row around the plot.
const CHROME_HEIGHT: f32 = 56.0;

pub struct ChartPanel {
    pub marker_radius: f32,
    pub line_width: f32,
}

impl Default for ChartPanel {
    fn default() -> Self {
        Self {
            marker_radius: 3.5,
            line_width: 1.5,
        }
    }
}

impl ChartPanel {
    /// Draw the chart for `traces` using at most `height` points of vertical space.
    pub fn show(&self, ui: &mut Ui, traces: &[Trace], cfg: &ChartConfig, height: f32) {
        ui.vertical_centered(|ui| {
            ui.heading(&cfg.title);
        });
        let axis_map = SecondaryAxisMap::fit(
            traces
                .iter()
                .filter(|t| t.y_axis == YAxis::Primary)
                .flat_map(|t| t.y.iter()),
            traces
                .iter()
                .filter(|t| t.y_axis == YAxis::Secondary)
                .flat_map(|t| t.y.iter()),
        );

        let y_axes = vec![
            AxisHints::new_y().label(cfg.y_label.as_str()),
            AxisHints::new_y()
                .label(cfg.y2_label.as_str())
                .placement(HPlacement::Right)
                .formatter(move |mark, _range| format_tick(axis_map.to_secondary(mark.value))),
        ];

        let mut plot = Plot::new("tabplot_chart")
            .height((height - CHROME_HEIGHT).max(120.0))
            .allow_scroll(false)
            .allow_boxed_zoom(true)
            .show_grid(true)
            .x_axis_label(cfg.x_label.as_str())
            .custom_y_axes(y_axes);
        if cfg.legend == LegendOrientation::Vertical {
            plot = plot.legend(Legend::default().position(Corner::RightTop));
        }

        plot.show(ui, |plot_ui| {
            for tr in traces {
                let color = tr.marker_color.unwrap_or(Color32::GRAY);
                let to_drawn = |[x, y]: [f64; 2]| match tr.y_axis {
                    YAxis::Primary => [x, y],
                    YAxis::Secondary => [x, axis_map.to_primary(y)],
                };
                // One line per finite run so NaN cells leave a gap.
                for segment in tr.finite_segments() {
                    let pts: PlotPoints = segment.into_iter().map(to_drawn).collect();
                    plot_ui.line(
                        Line::new(tr.name.as_str(), pts)
                            .color(color)
                            .width(self.line_width),
                    );
                }
                if tr.show_markers() {
                    let pts: PlotPoints = tr.finite_points().map(to_drawn).collect();
                    plot_ui.points(
                        Points::new(tr.name.as_str(), pts)
                            .shape(MarkerShape::Circle)
                            .filled(true)
                            .radius(self.marker_radius)
                            .color(color),
                    );
                }
            }
        });

        if cfg.legend == LegendOrientation::Horizontal {
            legend_row(ui, traces);
        }
    }
}

fn legend_row(ui: &mut Ui, traces: &[Trace]) {
    ui.horizontal(|ui| {
        for tr in traces {
            let color = tr.marker_color.unwrap_or(Color32::GRAY);
            ui.label(RichText::new("●").color(color));
            ui.label(&tr.name);
            ui.add_space(12.0);
        }
    });
}
