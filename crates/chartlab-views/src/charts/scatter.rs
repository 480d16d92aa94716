//! Scatter chart demo - study hours against exam scores

use egui::Ui;
use egui_plot::{Line, LineStyle, Plot, PlotPoints, Points};
use serde_json::{json, Value};

use chartlab_data::generators;

use crate::charts::utils::stats;
use crate::{DemoView, DemoViewId, ViewerContext};

const POINT_COLOR: egui::Color32 = egui::Color32::from_rgb(0x91, 0xcc, 0x75);

/// Eleven observations with a least-squares trend line
pub struct ScatterChartView {
    id: DemoViewId,
    title: String,
    points: Vec<[f64; 2]>,
}

impl ScatterChartView {
    pub fn new(id: DemoViewId, title: String) -> Self {
        Self {
            id,
            title,
            points: generators::study_scores(),
        }
    }
}

impl DemoView for ScatterChartView {
    fn id(&self) -> DemoViewId {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.title
    }

    fn view_type(&self) -> &str {
        "ScatterChart"
    }

    fn ui(&mut self, ctx: &ViewerContext, ui: &mut Ui) {
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new("Study Hours vs. Exam Score").strong());
        });

        let trend = stats::regression_endpoints(&self.points);

        Plot::new(format!("scatter_{:?}", self.id))
            .show(ui, |plot_ui| {
                plot_ui.points(
                    Points::new(PlotPoints::new(self.points.clone()))
                        .color(POINT_COLOR)
                        .radius(8.0)
                        .name("Score"),
                );

                if let Some(endpoints) = trend {
                    plot_ui.line(
                        Line::new(PlotPoints::new(endpoints.to_vec()))
                            .color(egui::Color32::GRAY)
                            .width(2.0)
                            .style(LineStyle::Dashed { length: 10.0 })
                            .name("Trend Line"),
                    );
                }

                // Report the nearest point under the pointer
                if let Some(pointer) = plot_ui.pointer_coordinate() {
                    let nearest = self
                        .points
                        .iter()
                        .min_by(|a, b| {
                            let da = (a[0] - pointer.x).powi(2) + (a[1] - pointer.y).powi(2);
                            let db = (b[0] - pointer.x).powi(2) + (b[1] - pointer.y).powi(2);
                            da.total_cmp(&db)
                        })
                        .copied();
                    if let Some(point) = nearest {
                        let distance =
                            ((point[0] - pointer.x).powi(2) + (point[1] - pointer.y).powi(2)).sqrt();
                        if distance < 0.5 {
                            let mut hovered_data = ctx.hovered_data.write();
                            hovered_data.x = point[0];
                            hovered_data.y = point[1];
                            hovered_data.label =
                                format!("{} h studied, score {}", point[0], point[1]);
                            hovered_data.view_id = Some(self.id);
                        }
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
