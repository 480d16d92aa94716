//! Heatmap demo - matrix datasets with schemes, thresholds and a colorbar
//!
//! Cells are painted directly instead of going through `egui_plot`; the
//! grid scrolls when it outgrows the panel.

use egui::{pos2, vec2, Color32, FontId, Rect, Sense, Stroke, Ui};
use serde_json::{json, Value};
use tracing::debug;

use chartlab_core::events::events::DatasetRefreshed;
use chartlab_data::{DatasetId, HeatmapDataset, HeatmapKind};

use crate::charts::utils::colors::{contrast_text, HeatScheme};
use crate::{DemoView, DemoViewId, ViewerContext};

const EXTREME_BORDER: Color32 = Color32::from_rgb(0xff, 0x47, 0x57);
const MARGIN: f32 = 60.0;
const COLORBAR_STEPS: usize = 50;

#[derive(Debug, Clone)]
pub struct HeatmapConfig {
    pub kind: HeatmapKind,
    pub scheme: HeatScheme,
    pub cell_size: f32,
    pub show_values: bool,
    pub show_borders: bool,
    pub min_threshold: f32,
    pub max_threshold: f32,
    pub highlight_extremes: bool,
    pub show_statistics: bool,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            kind: HeatmapKind::Sales,
            scheme: HeatScheme::Blues,
            cell_size: 20.0,
            show_values: true,
            show_borders: true,
            min_threshold: 0.0,
            max_threshold: 100.0,
            highlight_extremes: false,
            show_statistics: true,
        }
    }
}

/// Matrix explorer over four generated grids
pub struct HeatmapView {
    id: DemoViewId,
    title: String,
    pub config: HeatmapConfig,
}

impl HeatmapView {
    pub fn new(id: DemoViewId, title: String) -> Self {
        Self {
            id,
            title,
            config: HeatmapConfig::default(),
        }
    }

    fn dataset_id(&self) -> DatasetId {
        DatasetId::Heatmap(self.config.kind)
    }

    /// Threshold band in value space, from the observed range and the
    /// percentage sliders. Crossed sliders produce an empty band.
    fn threshold_band(&self, min_value: f64, max_value: f64) -> (f64, f64) {
        let range = max_value - min_value;
        let low = min_value + range * self.config.min_threshold as f64 / 100.0;
        let high = min_value + range * self.config.max_threshold as f64 / 100.0;
        (low, high)
    }

    fn draw_grid(&self, ctx: &ViewerContext, dataset: &HeatmapDataset, ui: &mut Ui) {
        let Some((min_value, max_value)) = dataset.value_range() else {
            ui.centered_and_justified(|ui| {
                ui.label("No data to display");
            });
            return;
        };
        let (band_low, band_high) = self.threshold_band(min_value, max_value);

        let cell = self.config.cell_size;
        let columns = dataset.x_labels.len();
        let rows = dataset.y_labels.len();
        let grid_width = columns as f32 * cell;
        let grid_height = rows as f32 * cell;
        let desired = vec2(MARGIN + grid_width + 90.0, grid_height + 40.0);

        egui::ScrollArea::both()
            .id_source(format!("heatmap_scroll_{}", self.id))
            .show(ui, |ui| {
                let (response, painter) = ui.allocate_painter(desired, Sense::hover());
                let origin = pos2(response.rect.left() + MARGIN, response.rect.top() + 8.0);

                // Row and column labels
                for (row, label) in dataset.y_labels.iter().enumerate() {
                    painter.text(
                        pos2(origin.x - 6.0, origin.y + (row as f32 + 0.5) * cell),
                        egui::Align2::RIGHT_CENTER,
                        label,
                        FontId::proportional(11.0),
                        ui.visuals().text_color(),
                    );
                }
                for (column, label) in dataset.x_labels.iter().enumerate() {
                    painter.text(
                        pos2(origin.x + (column as f32 + 0.5) * cell, origin.y + grid_height + 4.0),
                        egui::Align2::CENTER_TOP,
                        label,
                        FontId::proportional(10.0),
                        ui.visuals().text_color(),
                    );
                }

                let value_font = FontId::proportional((cell * 0.35).clamp(8.0, 14.0));
                let mut hovered_cell = None;

                for heat_cell in &dataset.cells {
                    if heat_cell.value < band_low || heat_cell.value > band_high {
                        continue;
                    }

                    let cell_rect = Rect::from_min_size(
                        pos2(
                            origin.x + heat_cell.col as f32 * cell,
                            origin.y + heat_cell.row as f32 * cell,
                        ),
                        vec2(cell, cell),
                    );

                    // The color scale spans the sliders' band, not the raw range
                    let t = if band_high > band_low {
                        (heat_cell.value - band_low) / (band_high - band_low)
                    } else {
                        0.5
                    };
                    let fill = self.config.scheme.sample(t);
                    painter.rect_filled(cell_rect, 0.0, fill);

                    if self.config.show_borders {
                        painter.rect_stroke(cell_rect, 0.0, Stroke::new(1.0, Color32::from_gray(90)));
                    }
                    if self.config.highlight_extremes
                        && (heat_cell.value == min_value || heat_cell.value == max_value)
                    {
                        painter.rect_stroke(cell_rect, 0.0, Stroke::new(3.0, EXTREME_BORDER));
                    }

                    if self.config.show_values && cell >= 18.0 {
                        painter.text(
                            cell_rect.center(),
                            egui::Align2::CENTER_CENTER,
                            format!("{}", heat_cell.value),
                            value_font.clone(),
                            contrast_text(fill),
                        );
                    }

                    if let Some(pos) = response.hover_pos() {
                        if cell_rect.contains(pos) {
                            hovered_cell = Some(heat_cell);
                        }
                    }
                }

                // Vertical colorbar over the band
                let bar_rect = Rect::from_min_size(
                    pos2(origin.x + grid_width + 20.0, origin.y),
                    vec2(18.0, grid_height),
                );
                let step_height = bar_rect.height() / COLORBAR_STEPS as f32;
                for step in 0..COLORBAR_STEPS {
                    let t = 1.0 - step as f64 / (COLORBAR_STEPS - 1) as f64;
                    let step_rect = Rect::from_min_size(
                        pos2(bar_rect.left(), bar_rect.top() + step as f32 * step_height),
                        vec2(bar_rect.width(), step_height + 0.5),
                    );
                    painter.rect_filled(step_rect, 0.0, self.config.scheme.sample(t));
                }
                painter.text(
                    pos2(bar_rect.right() + 4.0, bar_rect.top()),
                    egui::Align2::LEFT_TOP,
                    format!("{:.1}", band_high),
                    FontId::proportional(10.0),
                    ui.visuals().text_color(),
                );
                painter.text(
                    pos2(bar_rect.right() + 4.0, bar_rect.bottom()),
                    egui::Align2::LEFT_BOTTOM,
                    format!("{:.1}", band_low),
                    FontId::proportional(10.0),
                    ui.visuals().text_color(),
                );

                if let Some(heat_cell) = hovered_cell {
                    let column = dataset
                        .x_labels
                        .get(heat_cell.col)
                        .map(String::as_str)
                        .unwrap_or("");
                    let row = dataset
                        .y_labels
                        .get(heat_cell.row)
                        .map(String::as_str)
                        .unwrap_or("");
                    let summary =
                        format!("{} / {}: {} {}", row, column, heat_cell.value, dataset.unit);
                    egui::show_tooltip_at_pointer(
                        ui.ctx(),
                        egui::Id::new(("heatmap_cell", self.id)),
                        |ui| {
                            ui.label(&summary);
                        },
                    );

                    let mut hovered_data = ctx.hovered_data.write();
                    hovered_data.x = heat_cell.col as f64;
                    hovered_data.y = heat_cell.row as f64;
                    hovered_data.label = summary;
                    hovered_data.view_id = Some(self.id);
                }
            });
    }
}

impl DemoView for HeatmapView {
    fn id(&self) -> DemoViewId {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.title
    }

    fn view_type(&self) -> &str {
        "Heatmap"
    }

    fn ui(&mut self, ctx: &ViewerContext, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label("Dataset:");
            egui::ComboBox::from_id_source(format!("heatmap_kind_{}", self.id))
                .selected_text(self.config.kind.label())
                .show_ui(ui, |ui| {
                    for kind in HeatmapKind::ALL {
                        ui.selectable_value(&mut self.config.kind, kind, kind.label());
                    }
                });

            ui.label("Scheme:");
            egui::ComboBox::from_id_source(format!("heatmap_scheme_{}", self.id))
                .selected_text(self.config.scheme.label())
                .show_ui(ui, |ui| {
                    for scheme in HeatScheme::ALL {
                        ui.selectable_value(&mut self.config.scheme, scheme, scheme.label());
                    }
                });

            if ui.button("Regenerate").clicked() {
                let id = self.dataset_id();
                ctx.store.refresh(id);
                ctx.events.publish(DatasetRefreshed {
                    dataset_id: format!("{:?}", id),
                });
                debug!("Regenerated heatmap {}", self.config.kind.label());
            }
        });

        ui.horizontal(|ui| {
            ui.label("Cell size:");
            ui.add(egui::Slider::new(&mut self.config.cell_size, 15.0..=40.0));
            ui.checkbox(&mut self.config.show_values, "Values");
            ui.checkbox(&mut self.config.show_borders, "Borders");
            ui.checkbox(&mut self.config.highlight_extremes, "Highlight extremes");
            ui.checkbox(&mut self.config.show_statistics, "Statistics");
        });

        ui.horizontal(|ui| {
            ui.label("Min threshold:");
            ui.add(egui::Slider::new(&mut self.config.min_threshold, 0.0..=100.0).suffix("%"));
            ui.label("Max threshold:");
            ui.add(egui::Slider::new(&mut self.config.max_threshold, 0.0..=100.0).suffix("%"));
        });

        let snapshot = ctx.store.snapshot(self.dataset_id());
        let dataset = match snapshot.heatmap() {
            Ok(dataset) => dataset,
            Err(_) => {
                ui.centered_and_justified(|ui| {
                    ui.label("No data to display");
                    ui.label(egui::RichText::new("Snapshot holds a different dataset").weak());
                });
                return;
            }
        };

        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(&dataset.title).strong());
            ui.label(egui::RichText::new(self.config.kind.subtitle()).weak());
        });

        if self.config.show_statistics {
            if let Some((min_value, max_value)) = dataset.value_range() {
                let (band_low, band_high) = self.threshold_band(min_value, max_value);
                let visible: Vec<f64> = dataset
                    .cells
                    .iter()
                    .map(|c| c.value)
                    .filter(|v| *v >= band_low && *v <= band_high)
                    .collect();
                let average = if visible.is_empty() {
                    0.0
                } else {
                    visible.iter().sum::<f64>() / visible.len() as f64
                };
                let shown_max = visible.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
                let shown_min = visible.iter().cloned().fold(f64::INFINITY, f64::min);

                ui.separator();
                ui.horizontal(|ui| {
                    ui.label(format!("Data points: {}", visible.len()));
                    ui.separator();
                    if visible.is_empty() {
                        ui.label("Max: -");
                        ui.separator();
                        ui.label("Min: -");
                    } else {
                        ui.label(format!("Max: {} {}", shown_max, dataset.unit));
                        ui.separator();
                        ui.label(format!("Min: {} {}", shown_min, dataset.unit));
                    }
                    ui.separator();
                    ui.label(format!("Avg: {:.2} {}", average, dataset.unit));
                });
            }
        }

        ui.separator();
        self.draw_grid(ctx, dataset, ui);
    }

    fn save_config(&self) -> Value {
        json!({
            "kind": self.config.kind.label(),
            "scheme": self.config.scheme.label(),
            "cell_size": self.config.cell_size,
            "show_values": self.config.show_values,
            "show_borders": self.config.show_borders,
            "min_threshold": self.config.min_threshold,
            "max_threshold": self.config.max_threshold,
            "highlight_extremes": self.config.highlight_extremes,
            "show_statistics": self.config.show_statistics,
        })
    }

    fn load_config(&mut self, config: Value) {
        if let Some(label) = config.get("kind").and_then(|v| v.as_str()) {
            if let Some(kind) = HeatmapKind::ALL.iter().find(|k| k.label() == label) {
                self.config.kind = *kind;
            }
        }
        if let Some(label) = config.get("scheme").and_then(|v| v.as_str()) {
            if let Some(scheme) = HeatScheme::ALL.iter().find(|s| s.label() == label) {
                self.config.scheme = *scheme;
            }
        }
        if let Some(size) = config.get("cell_size").and_then(|v| v.as_f64()) {
            self.config.cell_size = (size as f32).clamp(15.0, 40.0);
        }
        if let Some(flag) = config.get("show_values").and_then(|v| v.as_bool()) {
            self.config.show_values = flag;
        }
        if let Some(flag) = config.get("show_borders").and_then(|v| v.as_bool()) {
            self.config.show_borders = flag;
        }
        if let Some(threshold) = config.get("min_threshold").and_then(|v| v.as_f64()) {
            self.config.min_threshold = (threshold as f32).clamp(0.0, 100.0);
        }
        if let Some(threshold) = config.get("max_threshold").and_then(|v| v.as_f64()) {
            self.config.max_threshold = (threshold as f32).clamp(0.0, 100.0);
        }
        if let Some(flag) = config.get("highlight_extremes").and_then(|v| v.as_bool()) {
            self.config.highlight_extremes = flag;
        }
        if let Some(flag) = config.get("show_statistics").and_then(|v| v.as_bool()) {
            self.config.show_statistics = flag;
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_threshold_band_scales_with_observed_range() {
        let mut view = HeatmapView::new(Uuid::new_v4(), "Heatmap".to_string());
        view.config.min_threshold = 25.0;
        view.config.max_threshold = 75.0;
        let (low, high) = view.threshold_band(100.0, 300.0);
        assert_eq!(low, 150.0);
        assert_eq!(high, 250.0);
    }

    #[test]
    fn test_crossed_thresholds_make_an_empty_band() {
        let mut view = HeatmapView::new(Uuid::new_v4(), "Heatmap".to_string());
        view.config.min_threshold = 80.0;
        view.config.max_threshold = 20.0;
        let (low, high) = view.threshold_band(0.0, 100.0);
        assert!(low > high);
    }
}
