//! Step line demo - risers placed at the segment start, middle or end

use egui::{Color32, Ui};
use egui_plot::{Corner, Legend, Line, Plot, PlotPoints, Points, Polygon, Text};
use serde_json::{json, Value};

use chartlab_data::{generators, CategoryDataset, StepKind};

use crate::charts::utils::colors;
use crate::{DemoView, DemoViewId, ViewerContext};

/// Where the vertical riser sits between two samples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepMode {
    Start,
    Middle,
    End,
    None,
}

impl StepMode {
    pub const ALL: [StepMode; 4] = [
        StepMode::Start,
        StepMode::Middle,
        StepMode::End,
        StepMode::None,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StepMode::Start => "Start",
            StepMode::Middle => "Middle",
            StepMode::End => "End",
            StepMode::None => "None",
        }
    }
}

/// Expands samples into a stepped polyline. `None` returns the samples
/// unchanged; the other modes insert the riser at the left edge, the
/// midpoint or the right edge of each segment.
pub fn step_points(points: &[[f64; 2]], mode: StepMode) -> Vec<[f64; 2]> {
    if mode == StepMode::None || points.len() < 2 {
        return points.to_vec();
    }

    let mut stepped = Vec::with_capacity(points.len() * 3);
    stepped.push(points[0]);
    for pair in points.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        match mode {
            StepMode::Start => {
                stepped.push([from[0], to[1]]);
            }
            StepMode::Middle => {
                let mid = (from[0] + to[0]) / 2.0;
                stepped.push([mid, from[1]]);
                stepped.push([mid, to[1]]);
            }
            StepMode::End => {
                stepped.push([to[0], from[1]]);
            }
            StepMode::None => unreachable!(),
        }
        stepped.push(to);
    }
    stepped
}

#[derive(Debug, Clone)]
pub struct StepLineConfig {
    pub kind: StepKind,
    pub mode: StepMode,
    pub line_width: f32,
    pub symbol_size: f32,
    pub area_fill: bool,
    pub show_values: bool,
}

impl Default for StepLineConfig {
    fn default() -> Self {
        Self {
            kind: StepKind::Sales,
            mode: StepMode::Start,
            line_width: 3.0,
            symbol_size: 8.0,
            area_fill: true,
            show_values: false,
        }
    }
}

/// Stepped comparison of the fixed category profiles
pub struct StepLineView {
    id: DemoViewId,
    title: String,
    pub config: StepLineConfig,
    data: CategoryDataset,
}

impl StepLineView {
    pub fn new(id: DemoViewId, title: String) -> Self {
        let config = StepLineConfig::default();
        let data = generators::step_profile(config.kind);
        Self {
            id,
            title,
            config,
            data,
        }
    }
}

impl DemoView for StepLineView {
    fn id(&self) -> DemoViewId {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.title
    }

    fn view_type(&self) -> &str {
        "StepLine"
    }

    fn ui(&mut self, ctx: &ViewerContext, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label("Dataset:");
            let previous_kind = self.config.kind;
            egui::ComboBox::from_id_source(format!("step_kind_{}", self.id))
                .selected_text(self.config.kind.label())
                .show_ui(ui, |ui| {
                    for kind in StepKind::ALL {
                        ui.selectable_value(&mut self.config.kind, kind, kind.label());
                    }
                });
            if previous_kind != self.config.kind {
                self.data = generators::step_profile(self.config.kind);
            }

            ui.separator();
            ui.label("Step:");
            for mode in StepMode::ALL {
                ui.selectable_value(&mut self.config.mode, mode, mode.label());
            }
        });

        ui.horizontal(|ui| {
            ui.label("Line width:");
            ui.add(egui::Slider::new(&mut self.config.line_width, 1.0..=8.0));
            ui.label("Symbol size:");
            ui.add(egui::Slider::new(&mut self.config.symbol_size, 0.0..=15.0));
            ui.checkbox(&mut self.config.area_fill, "Area");
            ui.checkbox(&mut self.config.show_values, "Values");
        });

        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(&self.data.title).strong());
        });

        if self.data.series.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label("No data to display");
            });
            return;
        }

        let categories = self.data.categories.clone();
        let value_span = {
            let values: Vec<f64> = self
                .data
                .series
                .iter()
                .flat_map(|s| s.values.iter().copied())
                .collect();
            let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
            max - min
        };
        let config = self.config.clone();

        Plot::new(format!("step_{}", self.id))
            .legend(Legend::default().position(Corner::LeftTop))
            .x_axis_formatter(move |x, _max_chars, _range| {
                let index = x.round();
                if (x - index).abs() > 0.05 || index < 0.0 {
                    return String::new();
                }
                categories
                    .get(index as usize)
                    .cloned()
                    .unwrap_or_default()
            })
            .include_y(0.0)
            .show(ui, |plot_ui| {
                for (series_index, series) in self.data.series.iter().enumerate() {
                    let color = series
                        .color
                        .map(colors::rgb)
                        .unwrap_or_else(|| colors::categorical_color(series_index));
                    let raw: Vec<[f64; 2]> = series
                        .values
                        .iter()
                        .enumerate()
                        .map(|(i, v)| [i as f64, *v])
                        .collect();
                    let stepped = step_points(&raw, config.mode);

                    if config.area_fill {
                        let mut area = stepped.clone();
                        if let (Some(first), Some(last)) = (stepped.first(), stepped.last()) {
                            area.push([last[0], 0.0]);
                            area.push([first[0], 0.0]);
                        }
                        plot_ui.polygon(
                            Polygon::new(PlotPoints::new(area))
                                .fill_color(color.linear_multiply(0.15))
                                .color(Color32::TRANSPARENT)
                                .width(0.0),
                        );
                    }

                    plot_ui.line(
                        Line::new(PlotPoints::new(stepped))
                            .color(color)
                            .width(config.line_width)
                            .name(&series.name),
                    );

                    if config.symbol_size > 0.0 {
                        plot_ui.points(
                            Points::new(PlotPoints::new(raw.clone()))
                                .color(color)
                                .radius(config.symbol_size * 0.5)
                                .name(&series.name),
                        );
                    }

                    if config.show_values {
                        for point in &raw {
                            plot_ui.text(
                                Text::new(
                                    [point[0], point[1] + value_span * 0.03].into(),
                                    format!("{}", point[1]),
                                )
                                .color(color),
                            );
                        }
                    }
                }

                if let Some(pointer) = plot_ui.pointer_coordinate() {
                    let mut hovered_data = ctx.hovered_data.write();
                    hovered_data.x = pointer.x;
                    hovered_data.y = pointer.y;
                    hovered_data.label = format!("{:.1}", pointer.y);
                    hovered_data.view_id = Some(self.id);
                }
            });
    }

    fn save_config(&self) -> Value {
        json!({
            "kind": self.config.kind.label(),
            "mode": self.config.mode.label(),
            "line_width": self.config.line_width,
            "symbol_size": self.config.symbol_size,
            "area_fill": self.config.area_fill,
            "show_values": self.config.show_values,
        })
    }

    fn load_config(&mut self, config: Value) {
        if let Some(label) = config.get("kind").and_then(|v| v.as_str()) {
            if let Some(kind) = StepKind::ALL.iter().find(|k| k.label() == label) {
                self.config.kind = *kind;
                self.data = generators::step_profile(self.config.kind);
            }
        }
        if let Some(label) = config.get("mode").and_then(|v| v.as_str()) {
            if let Some(mode) = StepMode::ALL.iter().find(|m| m.label() == label) {
                self.config.mode = *mode;
            }
        }
        if let Some(width) = config.get("line_width").and_then(|v| v.as_f64()) {
            self.config.line_width = (width as f32).clamp(1.0, 8.0);
        }
        if let Some(size) = config.get("symbol_size").and_then(|v| v.as_f64()) {
            self.config.symbol_size = (size as f32).clamp(0.0, 15.0);
        }
        if let Some(flag) = config.get("area_fill").and_then(|v| v.as_bool()) {
            self.config.area_fill = flag;
        }
        if let Some(flag) = config.get("show_values").and_then(|v| v.as_bool()) {
            self.config.show_values = flag;
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

    const SAMPLES: [[f64; 2]; 4] = [[0.0, 1.0], [1.0, 3.0], [2.0, 2.0], [3.0, 5.0]];

    #[test]
    fn test_none_mode_passes_samples_through() {
        assert_eq!(step_points(&SAMPLES, StepMode::None), SAMPLES.to_vec());
    }

    #[test]
    fn test_point_counts_per_mode() {
        assert_eq!(step_points(&SAMPLES, StepMode::Start).len(), 7);
        assert_eq!(step_points(&SAMPLES, StepMode::End).len(), 7);
        assert_eq!(step_points(&SAMPLES, StepMode::Middle).len(), 10);
    }

    #[test]
    fn test_start_riser_sits_at_left_edge() {
        let stepped = step_points(&SAMPLES[..2], StepMode::Start);
        assert_eq!(stepped, vec![[0.0, 1.0], [0.0, 3.0], [1.0, 3.0]]);
    }

    #[test]
    fn test_end_riser_sits_at_right_edge() {
        let stepped = step_points(&SAMPLES[..2], StepMode::End);
        assert_eq!(stepped, vec![[0.0, 1.0], [1.0, 1.0], [1.0, 3.0]]);
    }

    #[test]
    fn test_middle_riser_sits_at_midpoint() {
        let stepped = step_points(&SAMPLES[..2], StepMode::Middle);
        assert_eq!(
            stepped,
            vec![[0.0, 1.0], [0.5, 1.0], [0.5, 3.0], [1.0, 3.0]]
        );
    }

    #[test]
    fn test_stepped_x_never_decreases() {
        for mode in StepMode::ALL {
            let stepped = step_points(&SAMPLES, mode);
            assert!(
                stepped.windows(2).all(|pair| pair[0][0] <= pair[1][0]),
                "x went backwards in {:?} mode",
                mode
            );
        }
    }

    #[test]
    fn test_single_point_needs_no_risers() {
        assert_eq!(step_points(&SAMPLES[..1], StepMode::Start).len(), 1);
        assert!(step_points(&[], StepMode::Middle).is_empty());
    }
}
