//! Gauge demo - preset meters with styles, themes and a value simulation
//!
//! Drawn with the raw painter. Angles follow the usual gauge convention:
//! degrees measured counter-clockwise from three o'clock, with the sweep
//! running clockwise from the start angle down to `end - 360`.

use egui::{pos2, vec2, Color32, FontId, Pos2, Sense, Shape, Stroke, Ui};
use rand::prelude::*;
use serde_json::{json, Value};

use chartlab_data::GaugeKind;

use crate::charts::utils::colors::lerp_color;
use crate::{DemoView, DemoViewId, ViewerContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaugeStyle {
    Default,
    Arc,
    Minimal,
    Modern,
}

impl GaugeStyle {
    pub const ALL: [GaugeStyle; 4] = [
        GaugeStyle::Default,
        GaugeStyle::Arc,
        GaugeStyle::Minimal,
        GaugeStyle::Modern,
    ];

    pub fn label(self) -> &'static str {
        match self {
            GaugeStyle::Default => "Default",
            GaugeStyle::Arc => "Arc",
            GaugeStyle::Minimal => "Minimal",
            GaugeStyle::Modern => "Modern",
        }
    }

    fn band_width(self) -> f32 {
        match self {
            GaugeStyle::Default => 10.0,
            GaugeStyle::Arc => 30.0,
            GaugeStyle::Minimal => 2.0,
            GaugeStyle::Modern => 20.0,
        }
    }

    fn split_count(self) -> usize {
        match self {
            GaugeStyle::Default | GaugeStyle::Arc => 10,
            GaugeStyle::Minimal => 5,
            GaugeStyle::Modern => 8,
        }
    }

    fn radius_factor(self) -> f32 {
        match self {
            GaugeStyle::Default | GaugeStyle::Minimal => 0.75,
            GaugeStyle::Arc => 0.85,
            GaugeStyle::Modern => 0.70,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaugeTheme {
    Blue,
    Green,
    Orange,
    Red,
    Purple,
    Gradient,
}

const GRADIENT_STOPS: [Color32; 3] = [
    Color32::from_rgb(0x66, 0x7e, 0xea),
    Color32::from_rgb(0x76, 0x4b, 0xa2),
    Color32::from_rgb(0xf0, 0x93, 0xfb),
];

impl GaugeTheme {
    pub const ALL: [GaugeTheme; 6] = [
        GaugeTheme::Blue,
        GaugeTheme::Green,
        GaugeTheme::Orange,
        GaugeTheme::Red,
        GaugeTheme::Purple,
        GaugeTheme::Gradient,
    ];

    pub fn label(self) -> &'static str {
        match self {
            GaugeTheme::Blue => "Blue",
            GaugeTheme::Green => "Green",
            GaugeTheme::Orange => "Orange",
            GaugeTheme::Red => "Red",
            GaugeTheme::Purple => "Purple",
            GaugeTheme::Gradient => "Gradient",
        }
    }

    /// Four ramp colors from light to dark
    pub fn ramp(self) -> [Color32; 4] {
        let rgb = |r, g, b| Color32::from_rgb(r, g, b);
        match self {
            GaugeTheme::Blue => [
                rgb(0x91, 0xd5, 0xff),
                rgb(0x40, 0xa9, 0xff),
                rgb(0x18, 0x90, 0xff),
                rgb(0x00, 0x50, 0xb3),
            ],
            GaugeTheme::Green => [
                rgb(0xb7, 0xeb, 0x8f),
                rgb(0x73, 0xd1, 0x3d),
                rgb(0x52, 0xc4, 0x1a),
                rgb(0x23, 0x78, 0x04),
            ],
            GaugeTheme::Orange => [
                rgb(0xff, 0xd5, 0x91),
                rgb(0xff, 0xb3, 0x66),
                rgb(0xfa, 0x8c, 0x16),
                rgb(0xad, 0x4e, 0x00),
            ],
            GaugeTheme::Red => [
                rgb(0xff, 0xb3, 0xb3),
                rgb(0xff, 0x78, 0x75),
                rgb(0xff, 0x4d, 0x4f),
                rgb(0xa8, 0x07, 0x1a),
            ],
            GaugeTheme::Purple => [
                rgb(0xd3, 0xad, 0xf7),
                rgb(0xb3, 0x7f, 0xeb),
                rgb(0x92, 0x54, 0xde),
                rgb(0x39, 0x10, 0x85),
            ],
            GaugeTheme::Gradient => [
                Self::gradient_sample(0.0),
                Self::gradient_sample(1.0 / 3.0),
                Self::gradient_sample(2.0 / 3.0),
                Self::gradient_sample(1.0),
            ],
        }
    }

    pub fn background(self) -> Color32 {
        let rgb = |r, g, b| Color32::from_rgb(r, g, b);
        match self {
            GaugeTheme::Blue => rgb(0xf0, 0xf9, 0xff),
            GaugeTheme::Green => rgb(0xf6, 0xff, 0xed),
            GaugeTheme::Orange => rgb(0xff, 0xf7, 0xe6),
            GaugeTheme::Red => rgb(0xff, 0xf2, 0xf0),
            GaugeTheme::Purple => rgb(0xf9, 0xf0, 0xff),
            GaugeTheme::Gradient => rgb(0xf8, 0xf9, 0xff),
        }
    }

    /// Strongest ramp color, used for the pointer and progress ring
    pub fn accent(self) -> Color32 {
        self.ramp()[2]
    }

    /// Three-stop blend with stops at 0, 0.5 and 1
    fn gradient_sample(t: f64) -> Color32 {
        if t <= 0.5 {
            lerp_color(GRADIENT_STOPS[0], GRADIENT_STOPS[1], t / 0.5)
        } else {
            lerp_color(GRADIENT_STOPS[1], GRADIENT_STOPS[2], (t - 0.5) / 0.5)
        }
    }
}

#[derive(Debug, Clone)]
pub struct GaugeConfig {
    pub kind: GaugeKind,
    pub style: GaugeStyle,
    pub theme: GaugeTheme,
    pub start_angle: f64,
    pub end_angle: f64,
    pub value: f64,
    pub show_title: bool,
    pub show_details: bool,
    pub show_progress: bool,
    pub show_pointer: bool,
    pub show_anchor: bool,
    pub animate: bool,
    pub simulating: bool,
}

impl Default for GaugeConfig {
    fn default() -> Self {
        let kind = GaugeKind::Performance;
        Self {
            kind,
            style: GaugeStyle::Default,
            theme: GaugeTheme::Blue,
            start_angle: 225.0,
            end_angle: 315.0,
            value: kind.preset().initial,
            show_title: true,
            show_details: true,
            show_progress: true,
            show_pointer: true,
            show_anchor: true,
            animate: true,
            simulating: false,
        }
    }
}

/// Multi-mode gauge with a one-second simulation tick
pub struct GaugeView {
    id: DemoViewId,
    title: String,
    pub config: GaugeConfig,
    displayed: f64,
    sim_accumulator: f32,
}

impl GaugeView {
    pub fn new(id: DemoViewId, title: String) -> Self {
        let config = GaugeConfig::default();
        let displayed = config.value;
        Self {
            id,
            title,
            config,
            displayed,
            sim_accumulator: 0.0,
        }
    }

    /// Sweep in degrees from the start angle down to `end - 360`
    fn sweep(&self) -> f64 {
        self.config.start_angle - (self.config.end_angle - 360.0)
    }

    /// Gauge angle in degrees for a value fraction in `0..=1`
    pub fn angle_for(&self, fraction: f64) -> f64 {
        self.config.start_angle - fraction.clamp(0.0, 1.0) * self.sweep()
    }

    /// Share of the preset range covered by the current value, one decimal
    pub fn percentage(&self) -> f64 {
        let preset = self.config.kind.preset();
        let range = preset.max - preset.min;
        if range == 0.0 {
            return 0.0;
        }
        ((self.config.value - preset.min) / range * 1000.0).round() / 10.0
    }

    /// One simulation step: a bounded random walk over the preset range
    pub fn simulation_step<R: Rng>(&mut self, rng: &mut R) {
        let preset = self.config.kind.preset();
        let range = preset.max - preset.min;
        let next = self.config.value + (rng.gen::<f64>() - 0.5) * range * 0.1;
        self.config.value = ((next.clamp(preset.min, preset.max)) * 10.0).round() / 10.0;
    }

    fn point_at(center: Pos2, radius: f32, degrees: f64) -> Pos2 {
        let radians = degrees.to_radians();
        center + vec2(radians.cos() as f32, -radians.sin() as f32) * radius
    }

    fn draw_arc(
        painter: &egui::Painter,
        center: Pos2,
        radius: f32,
        from_deg: f64,
        to_deg: f64,
        stroke: Stroke,
    ) {
        let steps = (((from_deg - to_deg).abs() / 3.0).ceil() as usize).max(2);
        let points: Vec<Pos2> = (0..=steps)
            .map(|s| {
                let angle = from_deg + (to_deg - from_deg) * s as f64 / steps as f64;
                Self::point_at(center, radius, angle)
            })
            .collect();
        painter.add(Shape::line(points, stroke));
    }

    /// Band segments as `(end fraction, color)` pairs
    fn band_stops(&self) -> Vec<(f64, Color32)> {
        let ramp = self.config.theme.ramp();
        match self.config.style {
            GaugeStyle::Default => vec![(0.2, ramp[0]), (0.8, ramp[1]), (1.0, ramp[2])],
            GaugeStyle::Arc => vec![(0.3, ramp[0]), (0.7, ramp[1]), (1.0, ramp[2])],
            GaugeStyle::Minimal => vec![(1.0, Color32::from_rgb(0xe0, 0xe0, 0xe0))],
            GaugeStyle::Modern => {
                let preset = self.config.kind.preset();
                let range = preset.max - preset.min;
                let fraction = if range == 0.0 {
                    0.0
                } else {
                    ((self.config.value - preset.min) / range).clamp(0.0, 1.0)
                };
                vec![
                    (fraction, self.config.theme.accent()),
                    (1.0, Color32::from_rgb(0xf0, 0xf0, 0xf0)),
                ]
            }
        }
    }

    fn format_value(value: f64, unit: &str) -> String {
        if value.fract().abs() < 1e-9 {
            format!("{:.0}{}", value, unit)
        } else {
            format!("{:.1}{}", value, unit)
        }
    }

    fn draw_gauge(&self, ui: &mut Ui) {
        let preset = self.config.kind.preset();
        let (response, painter) =
            ui.allocate_painter(ui.available_size_before_wrap(), Sense::hover());
        let rect = response.rect;

        painter.rect_filled(rect, 4.0, self.config.theme.background());
        let text_color = Color32::from_gray(0x33);

        let center = pos2(rect.center().x, rect.top() + rect.height() * 0.60);
        let radius =
            (rect.width().min(rect.height()) / 2.0 * self.config.style.radius_factor()).max(30.0);
        let band_width = self.config.style.band_width();

        if self.config.show_title {
            painter.text(
                pos2(center.x, rect.top() + rect.height() * 0.10),
                egui::Align2::CENTER_CENTER,
                preset.name,
                FontId::proportional(18.0),
                text_color,
            );
        }

        // Colored band, split into the style's stop segments
        let mut from_fraction = 0.0;
        for (to_fraction, color) in self.band_stops() {
            Self::draw_arc(
                &painter,
                center,
                radius,
                self.angle_for(from_fraction),
                self.angle_for(to_fraction),
                Stroke::new(band_width, color),
            );
            from_fraction = to_fraction;
        }

        // Ticks and scale labels inside the band
        let splits = self.config.style.split_count();
        for i in 0..=splits {
            let fraction = i as f64 / splits as f64;
            let angle = self.angle_for(fraction);
            let tick_outer = Self::point_at(center, radius - band_width / 2.0 - 2.0, angle);
            let tick_inner = Self::point_at(center, radius - band_width / 2.0 - 10.0, angle);
            painter.line_segment([tick_outer, tick_inner], Stroke::new(2.0, text_color));

            let label_pos = Self::point_at(center, radius - band_width / 2.0 - 24.0, angle);
            let label_value = preset.min + fraction * (preset.max - preset.min);
            painter.text(
                label_pos,
                egui::Align2::CENTER_CENTER,
                format!("{:.0}", label_value),
                FontId::proportional(11.0),
                text_color,
            );
        }

        let range = preset.max - preset.min;
        let fraction = if range == 0.0 {
            0.0
        } else {
            ((self.displayed - preset.min) / range).clamp(0.0, 1.0)
        };

        // Progress ring outside the band
        if self.config.show_progress && fraction > 0.0 {
            Self::draw_arc(
                &painter,
                center,
                radius + band_width / 2.0 + 5.0,
                self.angle_for(0.0),
                self.angle_for(fraction),
                Stroke::new(4.0, self.config.theme.accent()),
            );
        }

        if self.config.show_pointer {
            let tip = Self::point_at(center, radius * 0.6, self.angle_for(fraction));
            painter.line_segment([center, tip], Stroke::new(6.0, self.config.theme.accent()));
        }

        if self.config.show_anchor {
            painter.circle(
                center,
                9.0,
                Color32::WHITE,
                Stroke::new(8.0, self.config.theme.accent()),
            );
        }

        painter.text(
            center + vec2(0.0, radius * 0.40),
            egui::Align2::CENTER_CENTER,
            Self::format_value(self.displayed, preset.unit),
            FontId::proportional(30.0),
            text_color,
        );
    }
}

impl DemoView for GaugeView {
    fn id(&self) -> DemoViewId {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.title
    }

    fn view_type(&self) -> &str {
        "Gauge"
    }

    fn ui(&mut self, _ctx: &ViewerContext, ui: &mut Ui) {
        let preset = self.config.kind.preset();

        ui.horizontal(|ui| {
            for kind in GaugeKind::ALL {
                if ui
                    .selectable_label(self.config.kind == kind, kind.label())
                    .clicked()
                {
                    self.config.kind = kind;
                    self.config.value = kind.preset().initial;
                    self.displayed = self.config.value;
                }
            }
        });

        ui.horizontal(|ui| {
            ui.label("Style:");
            egui::ComboBox::from_id_source(format!("gauge_style_{}", self.id))
                .selected_text(self.config.style.label())
                .show_ui(ui, |ui| {
                    for style in GaugeStyle::ALL {
                        ui.selectable_value(&mut self.config.style, style, style.label());
                    }
                });

            ui.label("Theme:");
            egui::ComboBox::from_id_source(format!("gauge_theme_{}", self.id))
                .selected_text(self.config.theme.label())
                .show_ui(ui, |ui| {
                    for theme in GaugeTheme::ALL {
                        ui.selectable_value(&mut self.config.theme, theme, theme.label());
                    }
                });

            ui.separator();
            let sim_label = if self.config.simulating { "Stop" } else { "Simulate" };
            if ui.button(sim_label).clicked() {
                self.config.simulating = !self.config.simulating;
                self.sim_accumulator = 0.0;
            }
        });

        ui.horizontal(|ui| {
            ui.label("Value:");
            ui.add(egui::Slider::new(
                &mut self.config.value,
                preset.min..=preset.max,
            ));
            ui.label("Start:");
            ui.add(egui::Slider::new(&mut self.config.start_angle, 180.0..=270.0));
            ui.label("End:");
            ui.add(egui::Slider::new(&mut self.config.end_angle, 270.0..=360.0));
        });

        ui.horizontal(|ui| {
            ui.checkbox(&mut self.config.show_title, "Title");
            ui.checkbox(&mut self.config.show_details, "Details");
            ui.checkbox(&mut self.config.show_progress, "Progress");
            ui.checkbox(&mut self.config.show_pointer, "Pointer");
            ui.checkbox(&mut self.config.show_anchor, "Anchor");
            ui.checkbox(&mut self.config.animate, "Animation");
        });

        if self.config.show_details {
            ui.separator();
            ui.horizontal(|ui| {
                ui.label(format!(
                    "Current: {}",
                    Self::format_value(self.config.value, preset.unit)
                ));
                ui.separator();
                ui.label(format!("Percentage: {:.1}%", self.percentage()));
                ui.separator();
                ui.label(format!("Min: {:.0}", preset.min));
                ui.separator();
                ui.label(format!("Max: {:.0}", preset.max));
            });
        }

        ui.separator();
        self.draw_gauge(ui);
    }

    fn save_config(&self) -> Value {
        json!({
            "kind": self.config.kind.label(),
            "style": self.config.style.label(),
            "theme": self.config.theme.label(),
            "start_angle": self.config.start_angle,
            "end_angle": self.config.end_angle,
            "value": self.config.value,
            "show_title": self.config.show_title,
            "show_details": self.config.show_details,
            "show_progress": self.config.show_progress,
            "show_pointer": self.config.show_pointer,
            "show_anchor": self.config.show_anchor,
            "animate": self.config.animate,
        })
    }

    fn load_config(&mut self, config: Value) {
        if let Some(label) = config.get("kind").and_then(|v| v.as_str()) {
            if let Some(kind) = GaugeKind::ALL.iter().find(|k| k.label() == label) {
                self.config.kind = *kind;
            }
        }
        if let Some(label) = config.get("style").and_then(|v| v.as_str()) {
            if let Some(style) = GaugeStyle::ALL.iter().find(|s| s.label() == label) {
                self.config.style = *style;
            }
        }
        if let Some(label) = config.get("theme").and_then(|v| v.as_str()) {
            if let Some(theme) = GaugeTheme::ALL.iter().find(|t| t.label() == label) {
                self.config.theme = *theme;
            }
        }
        if let Some(angle) = config.get("start_angle").and_then(|v| v.as_f64()) {
            self.config.start_angle = angle.clamp(180.0, 270.0);
        }
        if let Some(angle) = config.get("end_angle").and_then(|v| v.as_f64()) {
            self.config.end_angle = angle.clamp(270.0, 360.0);
        }
        if let Some(value) = config.get("value").and_then(|v| v.as_f64()) {
            let preset = self.config.kind.preset();
            self.config.value = value.clamp(preset.min, preset.max);
            self.displayed = self.config.value;
        }
        if let Some(flag) = config.get("show_title").and_then(|v| v.as_bool()) {
            self.config.show_title = flag;
        }
        if let Some(flag) = config.get("show_details").and_then(|v| v.as_bool()) {
            self.config.show_details = flag;
        }
        if let Some(flag) = config.get("show_progress").and_then(|v| v.as_bool()) {
            self.config.show_progress = flag;
        }
        if let Some(flag) = config.get("show_pointer").and_then(|v| v.as_bool()) {
            self.config.show_pointer = flag;
        }
        if let Some(flag) = config.get("show_anchor").and_then(|v| v.as_bool()) {
            self.config.show_anchor = flag;
        }
        if let Some(flag) = config.get("animate").and_then(|v| v.as_bool()) {
            self.config.animate = flag;
        }
    }

    fn on_frame_update(&mut self, _ctx: &ViewerContext, dt: f32) {
        if self.config.simulating {
            self.sim_accumulator += dt;
            while self.sim_accumulator >= 1.0 {
                self.sim_accumulator -= 1.0;
                let mut rng = thread_rng();
                self.simulation_step(&mut rng);
            }
        }

        if self.config.animate {
            let blend = (dt as f64 * 8.0).min(1.0);
            self.displayed += (self.config.value - self.displayed) * blend;
            if (self.displayed - self.config.value).abs() < 0.01 {
                self.displayed = self.config.value;
            }
        } else {
            self.displayed = self.config.value;
        }
    }

    fn is_animating(&self) -> bool {
        self.config.simulating
            || (self.config.animate && (self.displayed - self.config.value).abs() > 0.01)
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
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use uuid::Uuid;

    fn test_view() -> GaugeView {
        GaugeView::new(Uuid::new_v4(), "Gauge".to_string())
    }

    #[test]
    fn test_angle_endpoints_map_to_range_bounds() {
        let view = test_view();
        assert_eq!(view.angle_for(0.0), 225.0);
        assert_eq!(view.angle_for(1.0), -45.0);
        assert_eq!(view.angle_for(0.5), 90.0);
    }

    #[test]
    fn test_percentage_rounds_to_one_decimal() {
        let mut view = test_view();
        view.config.kind = GaugeKind::Temperature;
        view.config.value = 23.0;
        // (23 - -20) / 70 = 61.4285..%
        assert_eq!(view.percentage(), 61.4);
    }

    #[test]
    fn test_simulation_step_stays_in_range() {
        let mut view = test_view();
        let mut rng = StdRng::seed_from_u64(7);
        let preset = view.config.kind.preset();
        for _ in 0..500 {
            view.simulation_step(&mut rng);
            assert!(view.config.value >= preset.min && view.config.value <= preset.max);
            // One decimal place after every step
            assert_eq!((view.config.value * 10.0).round() / 10.0, view.config.value);
        }
    }

    #[test]
    fn test_gradient_theme_ramp_blends_between_stops() {
        let ramp = GaugeTheme::Gradient.ramp();
        assert_eq!(ramp[0], GRADIENT_STOPS[0]);
        assert_eq!(ramp[3], GRADIENT_STOPS[2]);
        assert_ne!(ramp[1], ramp[2]);
    }
}
