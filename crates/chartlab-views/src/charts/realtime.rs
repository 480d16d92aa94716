//! Real-time line demo - a ticking stream appended to a sliding window
//!
//! Ticks accumulate frame time rather than running a timer thread, so a
//! paused stream costs nothing and missed frames replay at most a small
//! burst of samples.

use std::collections::VecDeque;
use std::time::Instant;

use chrono::Utc;
use egui::{Color32, Ui};
use egui_plot::{Corner, Legend, Line, Plot, PlotPoints, Polygon};
use rand::thread_rng;
use serde_json::{json, Value};

use chartlab_data::generators::{self, STREAM_COLORS, STREAM_NAMES};
use chartlab_data::{SlidingWindow, StreamSample};

use crate::charts::utils::{self, colors};
use crate::{DemoView, DemoViewId, ViewerContext};

/// Most ticks replayed in one frame after a long stall
const MAX_TICKS_PER_FRAME: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamInterval {
    Ms100,
    Ms500,
    S1,
    S2,
    S5,
}

impl StreamInterval {
    pub const ALL: [StreamInterval; 5] = [
        StreamInterval::Ms100,
        StreamInterval::Ms500,
        StreamInterval::S1,
        StreamInterval::S2,
        StreamInterval::S5,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StreamInterval::Ms100 => "100 ms",
            StreamInterval::Ms500 => "500 ms",
            StreamInterval::S1 => "1 s",
            StreamInterval::S2 => "2 s",
            StreamInterval::S5 => "5 s",
        }
    }

    pub fn millis(self) -> u64 {
        match self {
            StreamInterval::Ms100 => 100,
            StreamInterval::Ms500 => 500,
            StreamInterval::S1 => 1000,
            StreamInterval::S2 => 2000,
            StreamInterval::S5 => 5000,
        }
    }

    pub fn seconds(self) -> f32 {
        self.millis() as f32 / 1000.0
    }
}

#[derive(Debug, Clone)]
pub struct RealtimeConfig {
    pub interval: StreamInterval,
    pub max_points: usize,
    pub volatility: f64,
    pub running: bool,
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self {
            interval: StreamInterval::S1,
            max_points: 50,
            volatility: 1.0,
            running: false,
        }
    }
}

/// Live three-series stream over a bounded window
pub struct RealtimeLineView {
    id: DemoViewId,
    title: String,
    pub config: RealtimeConfig,
    window: SlidingWindow<StreamSample>,
    accumulator: f32,
    recent_ticks: VecDeque<Instant>,
}

impl RealtimeLineView {
    pub fn new(id: DemoViewId, title: String) -> Self {
        let config = RealtimeConfig::default();
        let mut view = Self {
            id,
            title,
            config,
            window: SlidingWindow::new(0),
            accumulator: 0.0,
            recent_ticks: VecDeque::new(),
        };
        view.reseed();
        view
    }

    /// Refill the window with generated history ending at the wall clock
    fn reseed(&mut self) {
        let mut rng = thread_rng();
        let now = Utc::now().timestamp() as f64;
        let mut window = SlidingWindow::new(self.config.max_points);
        for sample in generators::stream_seed(self.config.max_points, now, &mut rng) {
            window.push(sample);
        }
        self.window = window;
        self.accumulator = 0.0;
        self.recent_ticks.clear();
    }

    fn tick(&mut self) {
        let now = Utc::now().timestamp_millis() as f64 / 1000.0;
        match self.window.back().copied() {
            Some(prev) => {
                let mut rng = thread_rng();
                let next = generators::stream_next(&prev, now, self.config.volatility, &mut rng);
                self.window.push(next);
            }
            None => self.reseed(),
        }
        self.recent_ticks.push_back(Instant::now());
    }

    /// Apply a max-points change; growth backfills history before the
    /// current front so the x span stays contiguous
    fn apply_capacity(&mut self) {
        let capacity = self.config.max_points;
        if capacity == self.window.capacity() {
            return;
        }
        self.window.set_capacity(capacity);
        let missing = capacity.saturating_sub(self.window.len());
        if missing > 0 {
            if let Some(front_time) = self.window.front().map(|sample| sample.time) {
                let mut rng = thread_rng();
                let history = generators::stream_seed(missing, front_time, &mut rng);
                self.window.prepend(history);
            }
        }
    }

    fn prune_ticks(&mut self) {
        let cutoff = Instant::now() - std::time::Duration::from_secs(1);
        while self
            .recent_ticks
            .front()
            .map(|tick| *tick < cutoff)
            .unwrap_or(false)
        {
            self.recent_ticks.pop_front();
        }
    }
}

impl DemoView for RealtimeLineView {
    fn id(&self) -> DemoViewId {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.title
    }

    fn view_type(&self) -> &str {
        "RealtimeLine"
    }

    fn on_frame_update(&mut self, _ctx: &ViewerContext, dt: f32) {
        if !self.config.running {
            return;
        }
        self.accumulator += dt;
        let interval = self.config.interval.seconds();
        let mut ticks = 0;
        while self.accumulator >= interval && ticks < MAX_TICKS_PER_FRAME {
            self.accumulator -= interval;
            self.tick();
            ticks += 1;
        }
        if ticks == MAX_TICKS_PER_FRAME {
            self.accumulator = 0.0;
        }
    }

    fn is_animating(&self) -> bool {
        self.config.running
    }

    fn ui(&mut self, ctx: &ViewerContext, ui: &mut Ui) {
        self.prune_ticks();

        ui.horizontal(|ui| {
            let toggle_label = if self.config.running { "Pause" } else { "Start" };
            if ui.button(toggle_label).clicked() {
                self.config.running = !self.config.running;
                self.accumulator = 0.0;
            }
            if ui.button("Reset").clicked() {
                self.config.running = false;
                self.reseed();
            }

            ui.separator();
            ui.label("Interval:");
            egui::ComboBox::from_id_source(format!("realtime_interval_{}", self.id))
                .selected_text(self.config.interval.label())
                .show_ui(ui, |ui| {
                    for interval in StreamInterval::ALL {
                        ui.selectable_value(&mut self.config.interval, interval, interval.label());
                    }
                });
        });

        ui.horizontal(|ui| {
            ui.label("Max points:");
            let capacity_response =
                ui.add(egui::Slider::new(&mut self.config.max_points, 20..=200));
            if capacity_response.changed() {
                self.apply_capacity();
            }

            ui.label("Volatility:");
            ui.add(egui::Slider::new(&mut self.config.volatility, 0.1..=2.0));
        });

        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new("Real-time Line Chart").strong());
            ui.label(egui::RichText::new("Live data streaming with smooth animations").weak());
        });

        ui.separator();
        ui.horizontal(|ui| {
            ui.label(format!("Ticks/s: {}", self.recent_ticks.len()));
            ui.separator();
            ui.label(format!("Points: {}", self.window.len()));
            if let Some(latest) = self.window.back() {
                for (slot, name) in STREAM_NAMES.iter().enumerate() {
                    ui.separator();
                    ui.label(
                        egui::RichText::new(format!("{}: {:.1}", name, latest.values[slot]))
                            .color(colors::rgb(STREAM_COLORS[slot])),
                    );
                }
            }
        });

        if self.window.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label("No data to display");
            });
            return;
        }

        let baseline = self
            .window
            .iter()
            .flat_map(|sample| sample.values.iter().copied())
            .fold(f64::INFINITY, f64::min);

        let series_points: Vec<Vec<[f64; 2]>> = (0..STREAM_NAMES.len())
            .map(|slot| {
                self.window
                    .iter()
                    .map(|sample| [sample.time, sample.values[slot]])
                    .collect()
            })
            .collect();

        Plot::new(format!("realtime_{}", self.id))
            .legend(Legend::default().position(Corner::LeftTop))
            .x_axis_formatter(|value, _max_chars, _range| {
                utils::format_timestamp(value, "%H:%M:%S")
            })
            .show(ui, |plot_ui| {
                for (slot, points) in series_points.into_iter().enumerate() {
                    let color = colors::rgb(STREAM_COLORS[slot]);
                    let curve = utils::catmull_rom(&points, 8);

                    let mut area = curve.clone();
                    if let (Some(first), Some(last)) = (curve.first(), curve.last()) {
                        area.push([last[0], baseline]);
                        area.push([first[0], baseline]);
                    }
                    plot_ui.polygon(
                        Polygon::new(PlotPoints::new(area))
                            .fill_color(color.linear_multiply(0.25))
                            .color(Color32::TRANSPARENT)
                            .width(0.0),
                    );

                    plot_ui.line(
                        Line::new(PlotPoints::new(curve))
                            .color(color)
                            .width(2.0)
                            .name(STREAM_NAMES[slot]),
                    );
                }

                if let Some(pointer) = plot_ui.pointer_coordinate() {
                    let mut hovered_data = ctx.hovered_data.write();
                    hovered_data.x = pointer.x;
                    hovered_data.y = pointer.y;
                    hovered_data.label = format!(
                        "{}: {:.1}",
                        utils::format_timestamp(pointer.x, "%H:%M:%S"),
                        pointer.y
                    );
                    hovered_data.view_id = Some(self.id);
                }
            });
    }

    fn save_config(&self) -> Value {
        json!({
            "interval": self.config.interval.label(),
            "max_points": self.config.max_points,
            "volatility": self.config.volatility,
        })
    }

    fn load_config(&mut self, config: Value) {
        if let Some(label) = config.get("interval").and_then(|v| v.as_str()) {
            if let Some(interval) = StreamInterval::ALL.iter().find(|i| i.label() == label) {
                self.config.interval = *interval;
            }
        }
        if let Some(points) = config.get("max_points").and_then(|v| v.as_u64()) {
            self.config.max_points = (points as usize).clamp(20, 200);
        }
        if let Some(volatility) = config.get("volatility").and_then(|v| v.as_f64()) {
            self.config.volatility = volatility.clamp(0.1, 2.0);
        }
        // Streams restart paused with fresh history
        self.config.running = false;
        self.reseed();
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
    fn test_interval_labels_and_millis() {
        assert_eq!(StreamInterval::Ms100.millis(), 100);
        assert_eq!(StreamInterval::S5.millis(), 5000);
        assert_eq!(StreamInterval::S1.label(), "1 s");
        assert_eq!(StreamInterval::Ms500.seconds(), 0.5);
    }

    #[test]
    fn test_new_view_seeds_a_full_window() {
        let view = RealtimeLineView::new(Uuid::new_v4(), "Realtime".to_string());
        assert_eq!(view.window.len(), view.config.max_points);

        let times: Vec<f64> = view.window.iter().map(|s| s.time).collect();
        assert!(times.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_growing_capacity_backfills_older_history() {
        let mut view = RealtimeLineView::new(Uuid::new_v4(), "Realtime".to_string());
        let old_front = view.window.front().unwrap().time;

        view.config.max_points = 80;
        view.apply_capacity();

        assert_eq!(view.window.len(), 80);
        assert!(view.window.front().unwrap().time < old_front);
        let times: Vec<f64> = view.window.iter().map(|s| s.time).collect();
        assert!(times.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_shrinking_capacity_keeps_newest_samples() {
        let mut view = RealtimeLineView::new(Uuid::new_v4(), "Realtime".to_string());
        let newest = view.window.back().unwrap().time;

        view.config.max_points = 20;
        view.apply_capacity();

        assert_eq!(view.window.len(), 20);
        assert_eq!(view.window.back().unwrap().time, newest);
    }

    #[test]
    fn test_tick_appends_without_exceeding_capacity() {
        let mut view = RealtimeLineView::new(Uuid::new_v4(), "Realtime".to_string());
        for _ in 0..10 {
            view.tick();
        }
        assert_eq!(view.window.len(), view.config.max_points);
        assert_eq!(view.recent_ticks.len(), 10);

        let back = view.window.back().unwrap();
        assert!(back.values.iter().all(|v| *v >= 0.0));
    }

    #[test]
    fn test_reset_reseeds_and_stops() {
        let mut view = RealtimeLineView::new(Uuid::new_v4(), "Realtime".to_string());
        view.config.running = true;
        for _ in 0..5 {
            view.tick();
        }

        view.config.running = false;
        view.reseed();
        assert_eq!(view.window.len(), view.config.max_points);
        assert!(view.recent_ticks.is_empty());
        assert_eq!(view.accumulator, 0.0);
    }
}
