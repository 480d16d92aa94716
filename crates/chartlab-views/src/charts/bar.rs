//! Bar chart demo - weekly sales

use egui::Ui;
use egui_plot::{Bar, BarChart, Plot};
use serde_json::{json, Value};

use chartlab_data::{generators, CategoryDataset};

use crate::charts::utils::colors;
use crate::{DemoView, DemoViewId, ViewerContext};

const EMPHASIS: egui::Color32 = egui::Color32::from_rgb(0x91, 0xcc, 0x75);

/// Weekly sales bar chart with hover emphasis
pub struct BarChartView {
    id: DemoViewId,
    title: String,
    data: CategoryDataset,
}

impl BarChartView {
    pub fn new(id: DemoViewId, title: String) -> Self {
        Self {
            id,
            title,
            data: generators::weekly_sales(),
        }
    }
}

impl DemoView for BarChartView {
    fn id(&self) -> DemoViewId {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.title
    }

    fn view_type(&self) -> &str {
        "BarChart"
    }

    fn ui(&mut self, ctx: &ViewerContext, ui: &mut Ui) {
        let Some(series) = self.data.series.first() else {
            ui.centered_and_justified(|ui| {
                ui.label("No data to display");
            });
            return;
        };

        let categories = self.data.categories.clone();
        let base_color = series.color.map(colors::rgb).unwrap_or_else(|| colors::categorical_color(0));
        let values = series.values.clone();
        let series_name = series.name.clone();
        let view_id = self.id;

        Plot::new(format!("bar_{:?}", self.id))
            .x_axis_formatter(move |x, _max_chars, _range| {
                let index = x.round();
                if (x - index).abs() > 0.05 || index < 0.0 {
                    return String::new();
                }
                categories.get(index as usize).cloned().unwrap_or_default()
            })
            .include_y(0.0)
            .show(ui, |plot_ui| {
                // Repaint the hovered bar in the emphasis color
                let hovered = plot_ui.pointer_coordinate().and_then(|pointer| {
                    let index = pointer.x.round();
                    if (pointer.x - index).abs() > 0.45 || index < 0.0 {
                        return None;
                    }
                    let index = index as usize;
                    let value = *values.get(index)?;
                    (pointer.y >= 0.0 && pointer.y <= value).then_some(index)
                });

                let bars: Vec<Bar> = values
                    .iter()
                    .enumerate()
                    .map(|(i, value)| {
                        let fill = if hovered == Some(i) { EMPHASIS } else { base_color };
                        Bar::new(i as f64, *value)
                            .width(0.6)
                            .name(&self.data.categories[i])
                            .fill(fill)
                    })
                    .collect();

                plot_ui.bar_chart(BarChart::new(bars).name(&series_name));

                if let Some(index) = hovered {
                    let mut hovered_data = ctx.hovered_data.write();
                    hovered_data.x = index as f64;
                    hovered_data.y = values[index];
                    hovered_data.label =
                        format!("{}: {}", self.data.categories[index], values[index]);
                    hovered_data.view_id = Some(view_id);
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
