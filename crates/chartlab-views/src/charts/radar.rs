//! Radar chart demo - candidate skill comparison

use std::f64::consts::{FRAC_PI_2, TAU};

use egui::Ui;
use egui_plot::{Corner, Legend, Line, Plot, PlotPoints, Polygon, Text};
use serde_json::{json, Value};

use chartlab_data::{generators, RadarIndicator, Series};

use crate::charts::utils::colors;
use crate::{DemoView, DemoViewId, ViewerContext};

const RING_COUNT: usize = 5;

/// Two candidates compared across six skill axes
pub struct RadarChartView {
    id: DemoViewId,
    title: String,
    indicators: Vec<RadarIndicator>,
    series: Vec<Series>,
}

impl RadarChartView {
    pub fn new(id: DemoViewId, title: String) -> Self {
        let (indicators, series) = generators::skill_radar();
        Self {
            id,
            title,
            indicators,
            series,
        }
    }

    /// Axis endpoint in plot space, axis zero pointing up
    fn axis_point(&self, axis: usize, radius: f64) -> [f64; 2] {
        let angle_step = TAU / self.indicators.len() as f64;
        let angle = FRAC_PI_2 - axis as f64 * angle_step;
        [radius * angle.cos(), radius * angle.sin()]
    }
}

impl DemoView for RadarChartView {
    fn id(&self) -> DemoViewId {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.title
    }

    fn view_type(&self) -> &str {
        "RadarChart"
    }

    fn ui(&mut self, _ctx: &ViewerContext, ui: &mut Ui) {
        let axis_count = self.indicators.len();
        if axis_count == 0 {
            ui.centered_and_justified(|ui| {
                ui.label("No data to display");
            });
            return;
        }
        let max_radius = self
            .indicators
            .iter()
            .map(|i| i.max)
            .fold(f64::NEG_INFINITY, f64::max);

        Plot::new(format!("radar_{:?}", self.id))
            .legend(Legend::default().position(Corner::LeftBottom))
            .data_aspect(1.0)
            .allow_boxed_zoom(false)
            .allow_scroll(false)
            .show_axes([false, false])
            .show_grid(false)
            .show(ui, |plot_ui| {
                let grid_color = egui::Color32::from_gray(120);

                // Concentric rings
                for ring in 1..=RING_COUNT {
                    let radius = max_radius * ring as f64 / RING_COUNT as f64;
                    let ring_points: Vec<[f64; 2]> = (0..=axis_count)
                        .map(|axis| self.axis_point(axis % axis_count, radius))
                        .collect();
                    plot_ui.line(
                        Line::new(PlotPoints::new(ring_points))
                            .color(grid_color)
                            .width(0.5),
                    );
                }

                // Spokes and axis labels
                for (axis, indicator) in self.indicators.iter().enumerate() {
                    let end = self.axis_point(axis, max_radius);
                    plot_ui.line(
                        Line::new(PlotPoints::new(vec![[0.0, 0.0], end]))
                            .color(grid_color)
                            .width(0.5),
                    );
                    let label_pos = self.axis_point(axis, max_radius * 1.15);
                    plot_ui.text(Text::new(label_pos.into(), &indicator.name));
                }

                // One translucent polygon per candidate
                for (series_index, series) in self.series.iter().enumerate() {
                    let color = series
                        .color
                        .map(colors::rgb)
                        .unwrap_or_else(|| colors::categorical_color(series_index));
                    let polygon_points: Vec<[f64; 2]> = series
                        .values
                        .iter()
                        .enumerate()
                        .map(|(axis, value)| self.axis_point(axis, *value))
                        .collect();

                    plot_ui.polygon(
                        Polygon::new(PlotPoints::new(polygon_points.clone()))
                            .fill_color(color.linear_multiply(0.25))
                            .color(color)
                            .width(2.0)
                            .name(&series.name),
                    );

                    for point in &polygon_points {
                        plot_ui.points(
                            egui_plot::Points::new(vec![*point])
                                .color(color)
                                .radius(3.0)
                                .name(&series.name),
                        );
                    }
                }
            });
    }

    fn save_config(&self) -> Value {
        json!({})
    }

    fn load_config(&mut self, _config: Value) {}

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}
