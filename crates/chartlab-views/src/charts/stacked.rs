//! Stacked line demo - cumulative, plain and percent-normalized bands

use egui::{Color32, Ui};
use egui_plot::{Corner, Legend, Line, LineStyle, Plot, PlotPoints, Points, Polygon, Text};
use serde_json::{json, Value};

use chartlab_data::{generators, CategoryDataset, StackedKind};

use crate::charts::utils::stats;
use crate::charts::utils::{self, colors};
use crate::{DemoView, DemoViewId, ViewerContext};

const TOTAL_COLOR: Color32 = Color32::from_rgb(0x2c, 0x3e, 0x50);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackMode {
    Stacked,
    Normal,
    Percentage,
}

impl StackMode {
    pub const ALL: [StackMode; 3] = [StackMode::Stacked, StackMode::Normal, StackMode::Percentage];

    pub fn label(self) -> &'static str {
        match self {
            StackMode::Stacked => "Stacked",
            StackMode::Normal => "Normal",
            StackMode::Percentage => "Percentage",
        }
    }
}

/// One drawable band: the series line runs along `upper`, the area fill
/// closes down to `lower`
struct StackedBand {
    name: String,
    color: Option<[u8; 3]>,
    lower: Vec<f64>,
    upper: Vec<f64>,
}

/// Converts the dataset into bands for the requested mode. Stacked bands
/// accumulate bottom-up in series order; percentage bands normalize every
/// category column to 100 first.
fn assemble(dataset: &CategoryDataset, mode: StackMode) -> Vec<StackedBand> {
    let point_count = dataset
        .series
        .first()
        .map(|s| s.values.len())
        .unwrap_or(0);

    let columns: Vec<Vec<f64>> = match mode {
        StackMode::Percentage => (0..point_count)
            .map(|index| {
                let column: Vec<f64> = dataset
                    .series
                    .iter()
                    .map(|s| s.values.get(index).copied().unwrap_or(0.0))
                    .collect();
                stats::percentages(&column)
            })
            .collect(),
        _ => Vec::new(),
    };

    let mut running = vec![0.0; point_count];
    dataset
        .series
        .iter()
        .enumerate()
        .map(|(series_index, series)| {
            let values: Vec<f64> = match mode {
                StackMode::Percentage => columns.iter().map(|col| col[series_index]).collect(),
                _ => series.values.clone(),
            };
            let (lower, upper) = match mode {
                StackMode::Normal => (vec![0.0; point_count], values),
                _ => {
                    let lower = running.clone();
                    for (acc, v) in running.iter_mut().zip(&values) {
                        *acc += v;
                    }
                    (lower, running.clone())
                }
            };
            StackedBand {
                name: series.name.clone(),
                color: series.color,
                lower,
                upper,
            }
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct StackedConfig {
    pub kind: StackedKind,
    pub mode: StackMode,
    pub area_fill: bool,
    pub smooth: bool,
    pub show_symbols: bool,
    pub show_values: bool,
    pub show_total: bool,
    pub line_width: f32,
    pub area_opacity: f32,
}

impl Default for StackedConfig {
    fn default() -> Self {
        Self {
            kind: StackedKind::Revenue,
            mode: StackMode::Stacked,
            area_fill: true,
            smooth: true,
            show_symbols: false,
            show_values: false,
            show_total: false,
            line_width: 2.0,
            area_opacity: 0.6,
        }
    }
}

/// Stacked composition of the fixed multi-series tables
pub struct StackedLineView {
    id: DemoViewId,
    title: String,
    pub config: StackedConfig,
    data: CategoryDataset,
}

impl StackedLineView {
    pub fn new(id: DemoViewId, title: String) -> Self {
        let config = StackedConfig::default();
        let data = generators::stacked_series(config.kind);
        Self {
            id,
            title,
            config,
            data,
        }
    }
}

impl DemoView for StackedLineView {
    fn id(&self) -> DemoViewId {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.title
    }

    fn view_type(&self) -> &str {
        "StackedLine"
    }

    fn ui(&mut self, ctx: &ViewerContext, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label("Dataset:");
            let previous_kind = self.config.kind;
            egui::ComboBox::from_id_source(format!("stacked_kind_{}", self.id))
                .selected_text(self.config.kind.label())
                .show_ui(ui, |ui| {
                    for kind in StackedKind::ALL {
                        ui.selectable_value(&mut self.config.kind, kind, kind.label());
                    }
                });
            if previous_kind != self.config.kind {
                self.data = generators::stacked_series(self.config.kind);
            }

            ui.separator();
            ui.label("Mode:");
            for mode in StackMode::ALL {
                ui.selectable_value(&mut self.config.mode, mode, mode.label());
            }
        });

        ui.horizontal(|ui| {
            ui.checkbox(&mut self.config.area_fill, "Area");
            ui.checkbox(&mut self.config.smooth, "Smooth");
            ui.checkbox(&mut self.config.show_symbols, "Symbols");
            ui.checkbox(&mut self.config.show_values, "Values");
            ui.checkbox(&mut self.config.show_total, "Total line");
            ui.separator();
            ui.label("Line width:");
            ui.add(egui::Slider::new(&mut self.config.line_width, 1.0..=6.0));
            ui.label("Opacity:");
            ui.add(egui::Slider::new(&mut self.config.area_opacity, 0.3..=1.0));
        });

        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(&self.data.title).strong());
        });

        ui.separator();
        ui.horizontal(|ui| {
            ui.label(format!("Series: {}", self.data.series.len()));
            ui.separator();
            ui.label(format!("Points: {}", self.data.categories.len()));
            ui.separator();
            ui.label(format!("Mode: {}", self.config.mode.label()));
            ui.separator();
            ui.label(format!(
                "Peak total: {}",
                self.config.kind.format_total(self.data.max_total())
            ));
        });

        if self.data.series.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label("No data to display");
            });
            return;
        }

        let bands = assemble(&self.data, self.config.mode);
        let categories = self.data.categories.clone();
        let config = self.config.clone();

        let mut plot = Plot::new(format!("stacked_{}", self.id))
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
            .include_y(0.0);
        if config.mode == StackMode::Percentage {
            plot = plot.include_y(100.0);
        }

        plot.show(ui, |plot_ui| {
            for (band_index, band) in bands.iter().enumerate() {
                let color = band
                    .color
                    .map(colors::rgb)
                    .unwrap_or_else(|| colors::categorical_color(band_index));
                let upper: Vec<[f64; 2]> = band
                    .upper
                    .iter()
                    .enumerate()
                    .map(|(i, v)| [i as f64, *v])
                    .collect();
                let upper_curve = if config.smooth {
                    utils::catmull_rom(&upper, 16)
                } else {
                    upper.clone()
                };

                if config.area_fill {
                    let lower: Vec<[f64; 2]> = band
                        .lower
                        .iter()
                        .enumerate()
                        .map(|(i, v)| [i as f64, *v])
                        .collect();
                    let lower_curve = if config.smooth {
                        utils::catmull_rom(&lower, 16)
                    } else {
                        lower
                    };
                    let mut ring = upper_curve.clone();
                    ring.extend(lower_curve.into_iter().rev());
                    plot_ui.polygon(
                        Polygon::new(PlotPoints::new(ring))
                            .fill_color(color.linear_multiply(config.area_opacity))
                            .color(Color32::TRANSPARENT)
                            .width(0.0),
                    );
                }

                plot_ui.line(
                    Line::new(PlotPoints::new(upper_curve))
                        .color(color)
                        .width(config.line_width)
                        .name(&band.name),
                );

                if config.show_symbols {
                    plot_ui.points(
                        Points::new(PlotPoints::new(upper.clone()))
                            .color(color)
                            .radius(3.0)
                            .name(&band.name),
                    );
                }

                if config.show_values {
                    for (index, point) in upper.iter().enumerate() {
                        let own = band.upper[index] - band.lower[index];
                        let text = if config.mode == StackMode::Percentage {
                            format!("{:.0}%", own)
                        } else {
                            format!("{:.0}", own)
                        };
                        plot_ui.text(Text::new([point[0], point[1]].into(), text).color(color));
                    }
                }
            }

            // The overall sum only reads sensibly on unstacked lines
            if config.show_total && config.mode == StackMode::Normal {
                let point_count = bands.first().map(|b| b.upper.len()).unwrap_or(0);
                let totals: Vec<[f64; 2]> = (0..point_count)
                    .map(|index| {
                        let sum: f64 = bands.iter().map(|b| b.upper[index]).sum();
                        [index as f64, sum]
                    })
                    .collect();
                let totals_curve = if config.smooth {
                    utils::catmull_rom(&totals, 16)
                } else {
                    totals
                };
                plot_ui.line(
                    Line::new(PlotPoints::new(totals_curve))
                        .color(TOTAL_COLOR)
                        .width(2.0)
                        .style(LineStyle::Dashed { length: 8.0 })
                        .name("Total"),
                );
            }

            if let Some(pointer) = plot_ui.pointer_coordinate() {
                let mut hovered_data = ctx.hovered_data.write();
                hovered_data.x = pointer.x;
                hovered_data.y = pointer.y;
                hovered_data.label = if config.mode == StackMode::Percentage {
                    format!("{:.1}%", pointer.y)
                } else {
                    format!("{:.1}", pointer.y)
                };
                hovered_data.view_id = Some(self.id);
            }
        });
    }

    fn save_config(&self) -> Value {
        json!({
            "kind": self.config.kind.label(),
            "mode": self.config.mode.label(),
            "area_fill": self.config.area_fill,
            "smooth": self.config.smooth,
            "show_symbols": self.config.show_symbols,
            "show_values": self.config.show_values,
            "show_total": self.config.show_total,
            "line_width": self.config.line_width,
            "area_opacity": self.config.area_opacity,
        })
    }

    fn load_config(&mut self, config: Value) {
        if let Some(label) = config.get("kind").and_then(|v| v.as_str()) {
            if let Some(kind) = StackedKind::ALL.iter().find(|k| k.label() == label) {
                self.config.kind = *kind;
                self.data = generators::stacked_series(self.config.kind);
            }
        }
        if let Some(label) = config.get("mode").and_then(|v| v.as_str()) {
            if let Some(mode) = StackMode::ALL.iter().find(|m| m.label() == label) {
                self.config.mode = *mode;
            }
        }
        if let Some(flag) = config.get("area_fill").and_then(|v| v.as_bool()) {
            self.config.area_fill = flag;
        }
        if let Some(flag) = config.get("smooth").and_then(|v| v.as_bool()) {
            self.config.smooth = flag;
        }
        if let Some(flag) = config.get("show_symbols").and_then(|v| v.as_bool()) {
            self.config.show_symbols = flag;
        }
        if let Some(flag) = config.get("show_values").and_then(|v| v.as_bool()) {
            self.config.show_values = flag;
        }
        if let Some(flag) = config.get("show_total").and_then(|v| v.as_bool()) {
            self.config.show_total = flag;
        }
        if let Some(width) = config.get("line_width").and_then(|v| v.as_f64()) {
            self.config.line_width = (width as f32).clamp(1.0, 6.0);
        }
        if let Some(opacity) = config.get("area_opacity").and_then(|v| v.as_f64()) {
            self.config.area_opacity = (opacity as f32).clamp(0.3, 1.0);
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
    use chartlab_data::Series;

    fn sample_dataset() -> CategoryDataset {
        CategoryDataset {
            title: "Sample".to_string(),
            categories: vec!["A".to_string(), "B".to_string(), "C".to_string()],
            series: vec![
                Series::new("one", vec![10.0, 20.0, 30.0]),
                Series::new("two", vec![30.0, 20.0, 10.0]),
                Series::new("three", vec![60.0, 60.0, 60.0]),
            ],
        }
    }

    #[test]
    fn test_normal_bands_sit_on_the_axis() {
        let bands = assemble(&sample_dataset(), StackMode::Normal);
        assert!(bands.iter().all(|b| b.lower.iter().all(|v| *v == 0.0)));
        assert_eq!(bands[0].upper, vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_stacked_bands_accumulate_in_series_order() {
        let bands = assemble(&sample_dataset(), StackMode::Stacked);
        assert_eq!(bands[0].upper, vec![10.0, 20.0, 30.0]);
        assert_eq!(bands[1].lower, bands[0].upper);
        assert_eq!(bands[1].upper, vec![40.0, 40.0, 40.0]);
        assert_eq!(bands[2].upper, vec![100.0, 100.0, 100.0]);
    }

    #[test]
    fn test_percentage_bands_top_out_at_one_hundred() {
        let bands = assemble(&sample_dataset(), StackMode::Percentage);
        let top = bands.last().unwrap();
        for (index, upper) in top.upper.iter().enumerate() {
            assert!(
                (upper - 100.0).abs() < 0.2,
                "column {} stacked to {}",
                index,
                upper
            );
        }
        assert_eq!(bands[0].upper[0], 10.0);
    }

    #[test]
    fn test_revenue_peak_total_matches_table() {
        let dataset = generators::stacked_series(StackedKind::Revenue);
        assert_eq!(dataset.max_total(), 635.0);
        let bands = assemble(&dataset, StackMode::Stacked);
        let last_band = bands.last().unwrap();
        assert_eq!(*last_band.upper.last().unwrap(), 635.0);
    }
}
