//! Candlestick chart demo - synthetic stock walks with technical overlays

use chrono::NaiveTime;
use egui::Ui;
use egui_plot::{
    Bar, BarChart, BoxElem, BoxPlot, BoxSpread, Corner, Legend, Line, LineStyle, Plot, PlotPoints,
    Text,
};
use serde_json::{json, Value};
use tracing::debug;

use chartlab_core::events::events::DatasetRefreshed;
use chartlab_data::{Candle, CandleDataset, CandlePeriod, DatasetId, StockSymbol};

use crate::charts::utils::{format_timestamp, stats};
use crate::{DemoView, DemoViewId, ViewerContext};

const UP_COLOR: egui::Color32 = egui::Color32::from_rgb(0x00, 0xda, 0x3c);
const DOWN_COLOR: egui::Color32 = egui::Color32::from_rgb(0xec, 0x00, 0x00);
const MA5_COLOR: egui::Color32 = egui::Color32::from_rgb(0xff, 0x6b, 0x35);
const MA20_COLOR: egui::Color32 = egui::Color32::from_rgb(0x4d, 0xab, 0xf7);
const BOLLINGER_COLOR: egui::Color32 = egui::Color32::from_rgb(0x9c, 0x88, 0xff);

const DAY_SECONDS: f64 = 86_400.0;

#[derive(Debug, Clone)]
pub struct CandlestickConfig {
    pub symbol: StockSymbol,
    pub period: CandlePeriod,
    pub show_ma5: bool,
    pub show_ma20: bool,
    pub show_bollinger: bool,
    pub show_volume: bool,
    pub show_grid: bool,
}

impl Default for CandlestickConfig {
    fn default() -> Self {
        Self {
            symbol: StockSymbol::Aapl,
            period: CandlePeriod::ThreeMonths,
            show_ma5: true,
            show_ma20: true,
            show_bollinger: false,
            show_volume: true,
            show_grid: true,
        }
    }
}

/// OHLC chart with moving averages, Bollinger bands and a volume pane
pub struct CandlestickView {
    id: DemoViewId,
    title: String,
    pub config: CandlestickConfig,
}

impl CandlestickView {
    pub fn new(id: DemoViewId, title: String) -> Self {
        Self {
            id,
            title,
            config: CandlestickConfig::default(),
        }
    }

    fn dataset_id(&self) -> DatasetId {
        DatasetId::Candles {
            symbol: self.config.symbol,
            period: self.config.period,
        }
    }

    fn candle_time(candle: &Candle) -> f64 {
        candle
            .date
            .and_time(NaiveTime::MIN)
            .and_utc()
            .timestamp() as f64
    }

    fn plot_candles(&self, dataset: &CandleDataset, plot_ui: &mut egui_plot::PlotUi) {
        for candle in &dataset.candles {
            let x = Self::candle_time(candle);
            let color = if candle.is_up() { UP_COLOR } else { DOWN_COLOR };

            // Wick from low to high, body as a collapsed box
            plot_ui.line(
                Line::new(PlotPoints::new(vec![[x, candle.low], [x, candle.high]]))
                    .color(color)
                    .width(1.0),
            );

            let bottom = candle.open.min(candle.close);
            let top = candle.open.max(candle.close);
            let middle = (bottom + top) / 2.0;
            let body = BoxElem::new(x, BoxSpread::new(bottom, bottom, middle, top, top))
                .box_width(0.6 * DAY_SECONDS)
                .fill(color)
                .stroke(egui::Stroke::new(1.0, color));
            plot_ui.box_plot(BoxPlot::new(vec![body]));
        }
    }

    fn plot_overlays(&self, dataset: &CandleDataset, plot_ui: &mut egui_plot::PlotUi) {
        let closes = dataset.closes();
        let times: Vec<f64> = dataset.candles.iter().map(Self::candle_time).collect();

        let series_points = |values: &[Option<f64>]| -> Vec<[f64; 2]> {
            values
                .iter()
                .enumerate()
                .filter_map(|(i, v)| v.map(|v| [times[i], v]))
                .collect()
        };

        if self.config.show_ma5 {
            let ma5 = stats::moving_average(&closes, 5);
            plot_ui.line(
                Line::new(PlotPoints::new(series_points(&ma5)))
                    .color(MA5_COLOR)
                    .width(2.0)
                    .name("MA5"),
            );
        }

        if self.config.show_ma20 {
            let ma20 = stats::moving_average(&closes, 20);
            plot_ui.line(
                Line::new(PlotPoints::new(series_points(&ma20)))
                    .color(MA20_COLOR)
                    .width(2.0)
                    .name("MA20"),
            );
        }

        if self.config.show_bollinger {
            let bands = stats::bollinger_bands(&closes, 20, 2.0);
            for (values, name) in [(&bands.upper, "BOLL Upper"), (&bands.lower, "BOLL Lower")] {
                plot_ui.line(
                    Line::new(PlotPoints::new(series_points(values)))
                        .color(BOLLINGER_COLOR)
                        .width(1.5)
                        .style(LineStyle::Dashed { length: 10.0 })
                        .name(name),
                );
            }
        }

        // Period extremes marked on the candles themselves
        let highest = dataset
            .candles
            .iter()
            .max_by(|a, b| a.high.total_cmp(&b.high));
        let lowest = dataset
            .candles
            .iter()
            .min_by(|a, b| a.low.total_cmp(&b.low));
        if let (Some(high), Some(low)) = (highest, lowest) {
            plot_ui.text(
                Text::new(
                    [Self::candle_time(high), high.high * 1.002].into(),
                    format!("H {:.2}", high.high),
                )
                .color(UP_COLOR),
            );
            plot_ui.text(
                Text::new(
                    [Self::candle_time(low), low.low * 0.998].into(),
                    format!("L {:.2}", low.low),
                )
                .color(DOWN_COLOR),
            );
        }
    }

    fn statistics_strip(&self, dataset: &CandleDataset, ui: &mut Ui) {
        let (change, percent) = dataset.daily_change();
        let change_color = if change >= 0.0 { UP_COLOR } else { DOWN_COLOR };
        let sign = if change >= 0.0 { "+" } else { "" };

        ui.horizontal(|ui| {
            ui.label(format!("Current: ${:.2}", dataset.current_price()));
            ui.separator();
            ui.label("Change:");
            ui.label(
                egui::RichText::new(format!("{}{:.2} ({}{:.2}%)", sign, change, sign, percent))
                    .color(change_color),
            );
            ui.separator();
            ui.label(format!(
                "Volume: {:.1}M",
                dataset.current_volume() as f64 / 1_000_000.0
            ));
            if let Some((low, high)) = dataset.price_range() {
                ui.separator();
                ui.label(format!("High: ${:.2}", high));
                ui.separator();
                ui.label(format!("Low: ${:.2}", low));
            }
        });
    }
}

impl DemoView for CandlestickView {
    fn id(&self) -> DemoViewId {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.title
    }

    fn view_type(&self) -> &str {
        "Candlestick"
    }

    fn ui(&mut self, ctx: &ViewerContext, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label("Stock:");
            egui::ComboBox::from_id_source(format!("candle_symbol_{}", self.id))
                .selected_text(self.config.symbol.ticker())
                .show_ui(ui, |ui| {
                    for symbol in StockSymbol::ALL {
                        ui.selectable_value(&mut self.config.symbol, symbol, symbol.ticker());
                    }
                });

            ui.label("Period:");
            egui::ComboBox::from_id_source(format!("candle_period_{}", self.id))
                .selected_text(self.config.period.label())
                .show_ui(ui, |ui| {
                    for period in CandlePeriod::ALL {
                        ui.selectable_value(&mut self.config.period, period, period.label());
                    }
                });

            if ui.button("Regenerate").clicked() {
                let id = self.dataset_id();
                ctx.store.refresh(id);
                ctx.events.publish(DatasetRefreshed {
                    dataset_id: format!("{:?}", id),
                });
                debug!("Regenerated candles for {}", self.config.symbol.ticker());
            }
        });

        ui.horizontal(|ui| {
            ui.label("Indicators:");
            ui.checkbox(&mut self.config.show_ma5, "MA5");
            ui.checkbox(&mut self.config.show_ma20, "MA20");
            ui.checkbox(&mut self.config.show_bollinger, "Bollinger Bands");
            ui.separator();
            ui.checkbox(&mut self.config.show_volume, "Volume");
            ui.checkbox(&mut self.config.show_grid, "Grid");
        });

        let snapshot = ctx.store.snapshot(self.dataset_id());
        let dataset = match snapshot.candles() {
            Ok(dataset) => dataset,
            Err(_) => {
                ui.centered_and_justified(|ui| {
                    ui.label("No data to display");
                    ui.label(egui::RichText::new("Snapshot holds a different dataset").weak());
                });
                return;
            }
        };

        if dataset.candles.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label("No data to display");
            });
            return;
        }

        ui.separator();
        self.statistics_strip(dataset, ui);

        let reserved = if self.config.show_volume { 160.0 } else { 16.0 };
        let plot_height = (ui.available_height() - reserved).max(200.0);

        let plot = Plot::new(format!("candlestick_{:?}", self.id))
            .legend(Legend::default().position(Corner::LeftTop))
            .x_axis_formatter(|val, _max_chars, _range| format_timestamp(val, "%m/%d"))
            .show_grid(self.config.show_grid)
            .height(plot_height);

        plot.show(ui, |plot_ui| {
            self.plot_candles(dataset, plot_ui);
            self.plot_overlays(dataset, plot_ui);
        });

        if self.config.show_volume {
            ui.separator();
            ui.label("Volume");

            let volume_plot = Plot::new(format!("volume_{:?}", self.id))
                .height(100.0)
                .x_axis_formatter(|val, _max_chars, _range| format_timestamp(val, "%m/%d"))
                .show_axes([false, true]);

            volume_plot.show(ui, |plot_ui| {
                let bars: Vec<Bar> = dataset
                    .candles
                    .iter()
                    .map(|candle| {
                        let color = if candle.is_up() { UP_COLOR } else { DOWN_COLOR };
                        Bar::new(Self::candle_time(candle), candle.volume as f64)
                            .width(0.6 * DAY_SECONDS)
                            .fill(color)
                    })
                    .collect();
                plot_ui.bar_chart(BarChart::new(bars));
            });
        }
    }

    fn save_config(&self) -> Value {
        json!({
            "symbol": self.config.symbol.ticker(),
            "period": self.config.period.label(),
            "show_ma5": self.config.show_ma5,
            "show_ma20": self.config.show_ma20,
            "show_bollinger": self.config.show_bollinger,
            "show_volume": self.config.show_volume,
            "show_grid": self.config.show_grid,
        })
    }

    fn load_config(&mut self, config: Value) {
        if let Some(ticker) = config.get("symbol").and_then(|v| v.as_str()) {
            if let Some(symbol) = StockSymbol::ALL.iter().find(|s| s.ticker() == ticker) {
                self.config.symbol = *symbol;
            }
        }
        if let Some(label) = config.get("period").and_then(|v| v.as_str()) {
            if let Some(period) = CandlePeriod::ALL.iter().find(|p| p.label() == label) {
                self.config.period = *period;
            }
        }
        if let Some(show) = config.get("show_ma5").and_then(|v| v.as_bool()) {
            self.config.show_ma5 = show;
        }
        if let Some(show) = config.get("show_ma20").and_then(|v| v.as_bool()) {
            self.config.show_ma20 = show;
        }
        if let Some(show) = config.get("show_bollinger").and_then(|v| v.as_bool()) {
            self.config.show_bollinger = show;
        }
        if let Some(show) = config.get("show_volume").and_then(|v| v.as_bool()) {
            self.config.show_volume = show;
        }
        if let Some(show) = config.get("show_grid").and_then(|v| v.as_bool()) {
            self.config.show_grid = show;
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}
