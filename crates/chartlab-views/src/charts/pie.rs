//! Pie chart demo - sales share by category
//!
//! Drawn with the raw painter: arc sectors, a stacked legend on the left
//! and a per-slice tooltip with value and percentage.

use std::f32::consts::TAU;

use egui::{pos2, vec2, Pos2, Sense, Shape, Stroke, Ui};
use serde_json::{json, Value};

use chartlab_data::{generators, PieSlice};

use crate::charts::utils::{colors, stats};
use crate::{DemoView, DemoViewId, ViewerContext};

const CHART_TITLE: &str = "Sales Distribution by Category";
const LEGEND_WIDTH: f32 = 150.0;

/// Sales split across five categories
pub struct PieChartView {
    id: DemoViewId,
    title: String,
    slices: Vec<PieSlice>,
}

impl PieChartView {
    pub fn new(id: DemoViewId, title: String) -> Self {
        Self {
            id,
            title,
            slices: generators::sales_share(),
        }
    }

    fn sector_points(center: Pos2, radius: f32, start: f32, sweep: f32) -> Vec<Pos2> {
        let steps = ((sweep / TAU * 64.0).ceil() as usize).max(2);
        let mut points = Vec::with_capacity(steps + 2);
        points.push(center);
        for s in 0..=steps {
            let angle = start + sweep * s as f32 / steps as f32;
            points.push(center + vec2(angle.cos(), angle.sin()) * radius);
        }
        points
    }
}

impl DemoView for PieChartView {
    fn id(&self) -> DemoViewId {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.title
    }

    fn view_type(&self) -> &str {
        "PieChart"
    }

    fn ui(&mut self, ctx: &ViewerContext, ui: &mut Ui) {
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(CHART_TITLE).strong());
        });

        let values: Vec<f64> = self.slices.iter().map(|s| s.value).collect();
        let total: f64 = values.iter().sum();
        let shares = stats::percentages(&values);

        let (response, painter) =
            ui.allocate_painter(ui.available_size_before_wrap(), Sense::hover());
        let rect = response.rect;

        // Legend stacked on the left
        let mut legend_y = rect.top() + 16.0;
        for (i, slice) in self.slices.iter().enumerate() {
            let swatch = egui::Rect::from_min_size(pos2(rect.left() + 8.0, legend_y), vec2(12.0, 12.0));
            painter.rect_filled(swatch, 2.0, colors::categorical_color(i));
            painter.text(
                pos2(swatch.right() + 6.0, swatch.center().y),
                egui::Align2::LEFT_CENTER,
                &slice.name,
                egui::FontId::proportional(12.0),
                ui.visuals().text_color(),
            );
            legend_y += 20.0;
        }

        let center = pos2(
            rect.left() + LEGEND_WIDTH + (rect.width() - LEGEND_WIDTH) / 2.0,
            rect.center().y,
        );
        let radius = ((rect.width() - LEGEND_WIDTH).min(rect.height()) / 2.0 * 0.6).max(10.0);

        // Which slice is under the pointer
        let hovered = response.hover_pos().and_then(|pos| {
            let offset = pos - center;
            if offset.length() > radius {
                return None;
            }
            let mut angle = offset.y.atan2(offset.x);
            // Slices start at twelve o'clock
            angle = (angle + TAU + TAU / 4.0) % TAU;
            let mut acc = 0.0_f32;
            for (i, value) in values.iter().enumerate() {
                acc += (value / total) as f32 * TAU;
                if angle < acc {
                    return Some(i);
                }
            }
            None
        });

        let mut start = -TAU / 4.0;
        for (i, value) in values.iter().enumerate() {
            let sweep = (value / total) as f32 * TAU;
            let mid = start + sweep / 2.0;
            let slice_center = if hovered == Some(i) {
                center + vec2(mid.cos(), mid.sin()) * 8.0
            } else {
                center
            };
            painter.add(Shape::convex_polygon(
                Self::sector_points(slice_center, radius, start, sweep),
                colors::categorical_color(i),
                Stroke::new(1.0, ui.visuals().window_fill()),
            ));
            start += sweep;
        }

        if let Some(i) = hovered {
            let slice = &self.slices[i];
            egui::show_tooltip_at_pointer(ui.ctx(), egui::Id::new(("pie_slice", self.id)), |ui| {
                ui.label(format!("{}: {} ({}%)", slice.name, slice.value, shares[i]));
            });

            let mut hovered_data = ctx.hovered_data.write();
            hovered_data.x = shares[i];
            hovered_data.y = slice.value;
            hovered_data.label = format!("{}: {} ({}%)", slice.name, slice.value, shares[i]);
            hovered_data.view_id = Some(self.id);
        }
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
