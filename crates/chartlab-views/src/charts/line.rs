//! Line chart demo - monthly sales trend
//!
//! Every user-visible string resolves through the locale table, so a
//! language switch relabels the chart without touching the data.

use egui::Ui;
use egui_plot::{Line, Plot, PlotPoints, Points, Polygon};
use serde_json::{json, Value};

use chartlab_core::LocaleText;
use chartlab_data::generators;

use crate::charts::utils::{catmull_rom, colors};
use crate::{DemoView, DemoViewId, ViewerContext};

/// Monthly sales line chart, labelled in the active locale
pub struct LineChartView {
    id: DemoViewId,
    title: String,
    values: Vec<f64>,
}

impl LineChartView {
    pub fn new(id: DemoViewId, title: String) -> Self {
        Self {
            id,
            title,
            values: generators::monthly_sales_values(),
        }
    }
}

impl DemoView for LineChartView {
    fn id(&self) -> DemoViewId {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.title
    }

    fn view_type(&self) -> &str {
        "LineChart"
    }

    fn ui(&mut self, ctx: &ViewerContext, ui: &mut Ui) {
        let locale = ctx.state.locale();
        let months = locale.month_labels();
        let series_name = locale.text(LocaleText::MonthlySalesSeries);
        let color = colors::categorical_color(0);

        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(locale.text(LocaleText::MonthlySalesTitle)).strong());
        });

        let points: Vec<[f64; 2]> = self
            .values
            .iter()
            .enumerate()
            .map(|(i, v)| [i as f64, *v])
            .collect();
        let curve = catmull_rom(&points, 16);

        let month_labels: Vec<String> = months.iter().map(|m| m.to_string()).collect();
        Plot::new(format!("line_{:?}", self.id))
            .x_axis_formatter(move |x, _max_chars, _range| {
                let index = x.round();
                if (x - index).abs() > 0.05 || index < 0.0 {
                    return String::new();
                }
                month_labels.get(index as usize).cloned().unwrap_or_default()
            })
            .include_y(0.0)
            .show(ui, |plot_ui| {
                // Translucent area fill under the curve
                let mut area = curve.clone();
                area.push([points.len() as f64 - 1.0, 0.0]);
                area.push([0.0, 0.0]);
                plot_ui.polygon(
                    Polygon::new(PlotPoints::new(area))
                        .fill_color(egui::Color32::from_rgba_unmultiplied(0x54, 0x70, 0xc6, 51))
                        .color(egui::Color32::TRANSPARENT)
                        .width(0.0),
                );

                plot_ui.line(
                    Line::new(PlotPoints::new(curve.clone()))
                        .color(color)
                        .width(4.0)
                        .name(series_name),
                );

                plot_ui.points(
                    Points::new(PlotPoints::new(points.clone()))
                        .color(color)
                        .radius(5.0)
                        .name(series_name),
                );
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
