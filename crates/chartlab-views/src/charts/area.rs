//! Area chart demo - weekly website traffic

use egui::Ui;
use egui_plot::{Corner, Legend, Line, Plot, PlotPoints, Polygon};
use serde_json::{json, Value};

use chartlab_data::{generators, CategoryDataset};

use crate::charts::utils::{catmull_rom, colors};
use crate::{DemoView, DemoViewId, ViewerContext};

/// Desktop and mobile traffic drawn as stacked-looking smooth areas
pub struct AreaChartView {
    id: DemoViewId,
    title: String,
    data: CategoryDataset,
}

impl AreaChartView {
    pub fn new(id: DemoViewId, title: String) -> Self {
        Self {
            id,
            title,
            data: generators::weekly_traffic(),
        }
    }
}

impl DemoView for AreaChartView {
    fn id(&self) -> DemoViewId {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.title
    }

    fn view_type(&self) -> &str {
        "AreaChart"
    }

    fn ui(&mut self, _ctx: &ViewerContext, ui: &mut Ui) {
        let categories = self.data.categories.clone();

        Plot::new(format!("area_{:?}", self.id))
            .legend(Legend::default().position(Corner::LeftBottom))
            .x_axis_formatter(move |x, _max_chars, _range| {
                let index = x.round();
                if (x - index).abs() > 0.05 || index < 0.0 {
                    return String::new();
                }
                categories.get(index as usize).cloned().unwrap_or_default()
            })
            .include_y(0.0)
            .show(ui, |plot_ui| {
                for (series_index, series) in self.data.series.iter().enumerate() {
                    let color = series
                        .color
                        .map(colors::rgb)
                        .unwrap_or_else(|| colors::categorical_color(series_index));
                    let points: Vec<[f64; 2]> = series
                        .values
                        .iter()
                        .enumerate()
                        .map(|(i, v)| [i as f64, *v])
                        .collect();
                    let curve = catmull_rom(&points, 16);

                    let mut area = curve.clone();
                    area.push([points.len() as f64 - 1.0, 0.0]);
                    area.push([0.0, 0.0]);
                    plot_ui.polygon(
                        Polygon::new(PlotPoints::new(area))
                            .fill_color(color.linear_multiply(0.25))
                            .color(egui::Color32::TRANSPARENT)
                            .width(0.0),
                    );

                    plot_ui.line(
                        Line::new(PlotPoints::new(curve))
                            .color(color)
                            .width(2.0)
                            .name(&series.name),
                    );
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
