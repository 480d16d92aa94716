//! Time-series line demo - timestamped axes with analysis overlays

use egui::{Color32, Ui};
use egui_plot::{Corner, Legend, Line, LineStyle, MarkerShape, Plot, PlotPoints, Points, Polygon, Text};
use serde_json::{json, Value};
use tracing::debug;

use chartlab_core::events::events::DatasetRefreshed;
use chartlab_data::{DatasetId, TimeSeriesKind};

use crate::charts::utils::stats;
use crate::charts::utils::{self, colors};
use crate::{DemoView, DemoViewId, ViewerContext};

const MARKER_COLOR: Color32 = Color32::from_rgb(0xee, 0x66, 0x66);
const MA_COLOR: Color32 = Color32::from_rgb(0xff, 0x7f, 0x0e);

/// Axis timestamp rendering; `Auto` picks a pattern from the data span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFormat {
    Auto,
    Date,
    Time,
    DateTime,
    Month,
}

impl TimeFormat {
    pub const ALL: [TimeFormat; 5] = [
        TimeFormat::Auto,
        TimeFormat::Date,
        TimeFormat::Time,
        TimeFormat::DateTime,
        TimeFormat::Month,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TimeFormat::Auto => "Auto",
            TimeFormat::Date => "Date",
            TimeFormat::Time => "Time",
            TimeFormat::DateTime => "Date & Time",
            TimeFormat::Month => "Month",
        }
    }

    /// Strftime pattern for axis labels given the plotted span in seconds
    pub fn pattern(self, span_seconds: f64) -> &'static str {
        const DAY: f64 = 86_400.0;
        match self {
            TimeFormat::Auto => {
                if span_seconds > 60.0 * DAY {
                    "%m/%d"
                } else if span_seconds > 2.0 * DAY {
                    "%m/%d %Hh"
                } else {
                    "%H:%M"
                }
            }
            TimeFormat::Date => "%Y-%m-%d",
            TimeFormat::Time => "%H:%M:%S",
            TimeFormat::DateTime => "%Y-%m-%d %H:%M",
            TimeFormat::Month => "%Y-%m",
        }
    }
}

#[derive(Debug, Clone)]
pub struct TimeSeriesConfig {
    pub kind: TimeSeriesKind,
    pub time_format: TimeFormat,
    pub smooth: bool,
    pub line_width: f32,
    pub symbol_size: f32,
    pub area_fill: bool,
    pub show_minmax: bool,
    pub show_ma: bool,
    pub show_trend: bool,
    pub show_outliers: bool,
}

impl Default for TimeSeriesConfig {
    fn default() -> Self {
        Self {
            kind: TimeSeriesKind::Stock,
            time_format: TimeFormat::Auto,
            smooth: true,
            line_width: 2.0,
            symbol_size: 4.0,
            area_fill: false,
            show_minmax: true,
            show_ma: false,
            show_trend: false,
            show_outliers: false,
        }
    }
}

/// Timestamped line chart with moving average, trend and outlier overlays
pub struct TimeSeriesLineView {
    id: DemoViewId,
    title: String,
    pub config: TimeSeriesConfig,
}

impl TimeSeriesLineView {
    pub fn new(id: DemoViewId, title: String) -> Self {
        Self {
            id,
            title,
            config: TimeSeriesConfig::default(),
        }
    }

    fn dataset_id(&self) -> DatasetId {
        DatasetId::TimeSeries(self.config.kind)
    }
}

impl DemoView for TimeSeriesLineView {
    fn id(&self) -> DemoViewId {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.title
    }

    fn view_type(&self) -> &str {
        "TimeSeriesLine"
    }

    fn ui(&mut self, ctx: &ViewerContext, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label("Dataset:");
            egui::ComboBox::from_id_source(format!("timeseries_kind_{}", self.id))
                .selected_text(self.config.kind.label())
                .show_ui(ui, |ui| {
                    for kind in TimeSeriesKind::ALL {
                        ui.selectable_value(&mut self.config.kind, kind, kind.label());
                    }
                });

            ui.label("Time format:");
            egui::ComboBox::from_id_source(format!("timeseries_format_{}", self.id))
                .selected_text(self.config.time_format.label())
                .show_ui(ui, |ui| {
                    for format in TimeFormat::ALL {
                        ui.selectable_value(&mut self.config.time_format, format, format.label());
                    }
                });

            if ui.button("Regenerate").clicked() {
                let id = self.dataset_id();
                ctx.store.refresh(id);
                ctx.events.publish(DatasetRefreshed {
                    dataset_id: format!("{:?}", id),
                });
                debug!("Regenerated time series {}", self.config.kind.label());
            }
        });

        ui.horizontal(|ui| {
            ui.checkbox(&mut self.config.smooth, "Smooth");
            ui.label("Line width:");
            ui.add(egui::Slider::new(&mut self.config.line_width, 1.0..=6.0));
            ui.label("Symbol size:");
            ui.add(egui::Slider::new(&mut self.config.symbol_size, 0.0..=12.0));
            ui.checkbox(&mut self.config.area_fill, "Area");
        });

        ui.horizontal(|ui| {
            ui.label("Overlays:");
            ui.checkbox(&mut self.config.show_minmax, "Min/Max");
            ui.checkbox(&mut self.config.show_ma, "7-Day MA");
            ui.checkbox(&mut self.config.show_trend, "Trend");
            ui.checkbox(&mut self.config.show_outliers, "Outliers");
        });

        let snapshot = ctx.store.snapshot(self.dataset_id());
        let dataset = match snapshot.time_series() {
            Ok(dataset) => dataset,
            Err(_) => {
                ui.centered_and_justified(|ui| {
                    ui.label("No data to display");
                });
                return;
            }
        };
        if dataset.point_count() == 0 {
            ui.centered_and_justified(|ui| {
                ui.label("No data to display");
            });
            return;
        }

        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(&dataset.title).strong());
            ui.label(egui::RichText::new(self.config.kind.subtitle()).weak());
        });

        let (first, last) = dataset.time_range().unwrap_or((0.0, 0.0));
        let span = last - first;
        let pattern = self.config.time_format.pattern(span);

        ui.separator();
        ui.horizontal(|ui| {
            ui.label(format!("Points: {}", dataset.point_count()));
            ui.separator();
            ui.label(format!(
                "Range: {} - {}",
                utils::format_timestamp(first, pattern),
                utils::format_timestamp(last, pattern)
            ));
            ui.separator();
            ui.label(format!("Cadence: {}", self.config.kind.cadence()));
        });

        let config = self.config.clone();
        let baseline = dataset
            .series
            .iter()
            .flat_map(|series| series.points.iter().map(|p| p[1]))
            .fold(f64::INFINITY, f64::min);

        Plot::new(format!("timeseries_{}", self.id))
            .legend(Legend::default().position(Corner::LeftTop))
            .x_axis_formatter(move |value, _max_chars, _range| {
                utils::format_timestamp(value, pattern)
            })
            .show(ui, |plot_ui| {
                for (index, series) in dataset.series.iter().enumerate() {
                    let color = colors::rgb(series.color);
                    let curve = if config.smooth {
                        utils::catmull_rom(&series.points, 16)
                    } else {
                        series.points.clone()
                    };

                    if config.area_fill {
                        let mut area = curve.clone();
                        if let (Some(first_point), Some(last_point)) =
                            (curve.first(), curve.last())
                        {
                            area.push([last_point[0], baseline]);
                            area.push([first_point[0], baseline]);
                        }
                        plot_ui.polygon(
                            Polygon::new(PlotPoints::new(area))
                                .fill_color(color.linear_multiply(0.15))
                                .color(Color32::TRANSPARENT)
                                .width(0.0),
                        );
                    }

                    plot_ui.line(
                        Line::new(PlotPoints::new(curve))
                            .color(color)
                            .width(config.line_width)
                            .name(&series.name),
                    );

                    if config.symbol_size > 0.0 {
                        plot_ui.points(
                            Points::new(PlotPoints::new(series.points.clone()))
                                .color(color)
                                .radius(config.symbol_size * 0.5)
                                .name(&series.name),
                        );
                    }

                    // Analysis overlays track the primary series only
                    if index > 0 {
                        continue;
                    }
                    let values: Vec<f64> = series.points.iter().map(|p| p[1]).collect();

                    if config.show_minmax {
                        let max = series
                            .points
                            .iter()
                            .cloned()
                            .fold(None::<[f64; 2]>, |best, p| match best {
                                Some(b) if b[1] >= p[1] => Some(b),
                                _ => Some(p),
                            });
                        let min = series
                            .points
                            .iter()
                            .cloned()
                            .fold(None::<[f64; 2]>, |best, p| match best {
                                Some(b) if b[1] <= p[1] => Some(b),
                                _ => Some(p),
                            });
                        if let (Some(max), Some(min)) = (max, min) {
                            let offset = (max[1] - min[1]).abs() * 0.04;
                            plot_ui.points(
                                Points::new(PlotPoints::new(vec![max, min]))
                                    .color(MARKER_COLOR)
                                    .radius(4.0),
                            );
                            plot_ui.text(
                                Text::new(
                                    [max[0], max[1] + offset].into(),
                                    format!("Max: {:.1}", max[1]),
                                )
                                .color(MARKER_COLOR),
                            );
                            plot_ui.text(
                                Text::new(
                                    [min[0], min[1] - offset].into(),
                                    format!("Min: {:.1}", min[1]),
                                )
                                .color(MARKER_COLOR),
                            );
                        }
                    }

                    if config.show_ma && values.len() > 1 {
                        let averaged = stats::partial_moving_average(&values, 7);
                        let points: Vec<[f64; 2]> = series
                            .points
                            .iter()
                            .zip(averaged)
                            .map(|(p, v)| [p[0], v])
                            .collect();
                        plot_ui.line(
                            Line::new(PlotPoints::new(points))
                                .color(MA_COLOR)
                                .width(2.0)
                                .style(LineStyle::Dashed { length: 8.0 })
                                .name("7-Day MA"),
                        );
                    }

                    if config.show_trend {
                        if let Some(endpoints) = stats::regression_endpoints(&series.points) {
                            plot_ui.line(
                                Line::new(PlotPoints::new(endpoints.to_vec()))
                                    .color(Color32::GRAY)
                                    .width(2.0)
                                    .style(LineStyle::Dashed { length: 10.0 })
                                    .name("Trend"),
                            );
                        }
                    }

                    if config.show_outliers {
                        let outliers: Vec<[f64; 2]> = stats::zscore_outliers(&values, 2.0)
                            .into_iter()
                            .map(|i| series.points[i])
                            .collect();
                        if !outliers.is_empty() {
                            plot_ui.points(
                                Points::new(PlotPoints::new(outliers))
                                    .color(MARKER_COLOR)
                                    .shape(MarkerShape::Diamond)
                                    .radius(5.0)
                                    .name("Outliers"),
                            );
                        }
                    }
                }

                if let Some(pointer) = plot_ui.pointer_coordinate() {
                    let mut hovered_data = ctx.hovered_data.write();
                    hovered_data.x = pointer.x;
                    hovered_data.y = pointer.y;
                    hovered_data.label = format!(
                        "{}: {:.2}",
                        utils::format_timestamp(pointer.x, pattern),
                        pointer.y
                    );
                    hovered_data.view_id = Some(self.id);
                }
            });
    }

    fn save_config(&self) -> Value {
        json!({
            "kind": self.config.kind.label(),
            "time_format": self.config.time_format.label(),
            "smooth": self.config.smooth,
            "line_width": self.config.line_width,
            "symbol_size": self.config.symbol_size,
            "area_fill": self.config.area_fill,
            "show_minmax": self.config.show_minmax,
            "show_ma": self.config.show_ma,
            "show_trend": self.config.show_trend,
            "show_outliers": self.config.show_outliers,
        })
    }

    fn load_config(&mut self, config: Value) {
        if let Some(label) = config.get("kind").and_then(|v| v.as_str()) {
            if let Some(kind) = TimeSeriesKind::ALL.iter().find(|k| k.label() == label) {
                self.config.kind = *kind;
            }
        }
        if let Some(label) = config.get("time_format").and_then(|v| v.as_str()) {
            if let Some(format) = TimeFormat::ALL.iter().find(|f| f.label() == label) {
                self.config.time_format = *format;
            }
        }
        if let Some(flag) = config.get("smooth").and_then(|v| v.as_bool()) {
            self.config.smooth = flag;
        }
        if let Some(width) = config.get("line_width").and_then(|v| v.as_f64()) {
            self.config.line_width = (width as f32).clamp(1.0, 6.0);
        }
        if let Some(size) = config.get("symbol_size").and_then(|v| v.as_f64()) {
            self.config.symbol_size = (size as f32).clamp(0.0, 12.0);
        }
        if let Some(flag) = config.get("area_fill").and_then(|v| v.as_bool()) {
            self.config.area_fill = flag;
        }
        if let Some(flag) = config.get("show_minmax").and_then(|v| v.as_bool()) {
            self.config.show_minmax = flag;
        }
        if let Some(flag) = config.get("show_ma").and_then(|v| v.as_bool()) {
            self.config.show_ma = flag;
        }
        if let Some(flag) = config.get("show_trend").and_then(|v| v.as_bool()) {
            self.config.show_trend = flag;
        }
        if let Some(flag) = config.get("show_outliers").and_then(|v| v.as_bool()) {
            self.config.show_outliers = flag;
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

    const DAY: f64 = 86_400.0;

    #[test]
    fn test_auto_pattern_follows_span() {
        assert_eq!(TimeFormat::Auto.pattern(90.0 * DAY), "%m/%d");
        assert_eq!(TimeFormat::Auto.pattern(3.0 * DAY), "%m/%d %Hh");
        assert_eq!(TimeFormat::Auto.pattern(3600.0), "%H:%M");
    }

    #[test]
    fn test_fixed_patterns_ignore_span() {
        assert_eq!(TimeFormat::Date.pattern(0.0), "%Y-%m-%d");
        assert_eq!(TimeFormat::Date.pattern(400.0 * DAY), "%Y-%m-%d");
        assert_eq!(TimeFormat::Month.pattern(3600.0), "%Y-%m");
    }
}
