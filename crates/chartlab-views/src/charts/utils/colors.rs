//! Palettes and color ramps for the chart views

use egui::Color32;

/// Default series palette, applied when a series carries no explicit color
pub const CATEGORICAL: [Color32; 9] = [
    Color32::from_rgb(0x54, 0x70, 0xc6),
    Color32::from_rgb(0x91, 0xcc, 0x75),
    Color32::from_rgb(0xfa, 0xc8, 0x58),
    Color32::from_rgb(0xee, 0x66, 0x66),
    Color32::from_rgb(0x73, 0xc0, 0xde),
    Color32::from_rgb(0x3b, 0xa2, 0x72),
    Color32::from_rgb(0xfc, 0x84, 0x52),
    Color32::from_rgb(0x9a, 0x60, 0xb4),
    Color32::from_rgb(0xea, 0x7c, 0xcc),
];

/// Palette color for a series index, cycling past the end
pub fn categorical_color(index: usize) -> Color32 {
    CATEGORICAL[index % CATEGORICAL.len()]
}

/// Convert a stored `[r, g, b]` triple into a [`Color32`]
pub fn rgb(color: [u8; 3]) -> Color32 {
    Color32::from_rgb(color[0], color[1], color[2])
}

/// Linear interpolation between two colors
pub fn lerp_color(a: Color32, b: Color32, t: f64) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let channel = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * t).round() as u8;
    Color32::from_rgb(
        channel(a.r(), b.r()),
        channel(a.g(), b.g()),
        channel(a.b(), b.b()),
    )
}

/// Black or white, whichever reads better on the given fill
pub fn contrast_text(background: Color32) -> Color32 {
    let luminance = 0.299 * background.r() as f64
        + 0.587 * background.g() as f64
        + 0.114 * background.b() as f64;
    if luminance > 150.0 {
        Color32::BLACK
    } else {
        Color32::WHITE
    }
}

/// Nine-step color ramps for the heatmap demo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeatScheme {
    Blues,
    Greens,
    Reds,
    Viridis,
    Plasma,
    CoolWarm,
}

const BLUES: [Color32; 9] = [
    Color32::from_rgb(0xf7, 0xfb, 0xff),
    Color32::from_rgb(0xde, 0xeb, 0xf7),
    Color32::from_rgb(0xc6, 0xdb, 0xef),
    Color32::from_rgb(0x9e, 0xca, 0xe1),
    Color32::from_rgb(0x6b, 0xae, 0xd6),
    Color32::from_rgb(0x42, 0x92, 0xc6),
    Color32::from_rgb(0x21, 0x71, 0xb5),
    Color32::from_rgb(0x08, 0x51, 0x9c),
    Color32::from_rgb(0x08, 0x30, 0x6b),
];

const GREENS: [Color32; 9] = [
    Color32::from_rgb(0xf7, 0xfc, 0xf5),
    Color32::from_rgb(0xe5, 0xf5, 0xe0),
    Color32::from_rgb(0xc7, 0xe9, 0xc0),
    Color32::from_rgb(0xa1, 0xd9, 0x9b),
    Color32::from_rgb(0x74, 0xc4, 0x76),
    Color32::from_rgb(0x41, 0xab, 0x5d),
    Color32::from_rgb(0x23, 0x8b, 0x45),
    Color32::from_rgb(0x00, 0x6d, 0x2c),
    Color32::from_rgb(0x00, 0x44, 0x1b),
];

const REDS: [Color32; 9] = [
    Color32::from_rgb(0xff, 0xf5, 0xf0),
    Color32::from_rgb(0xfe, 0xe0, 0xd2),
    Color32::from_rgb(0xfc, 0xbb, 0xa1),
    Color32::from_rgb(0xfc, 0x92, 0x72),
    Color32::from_rgb(0xfb, 0x6a, 0x4a),
    Color32::from_rgb(0xef, 0x3b, 0x2c),
    Color32::from_rgb(0xcb, 0x18, 0x1d),
    Color32::from_rgb(0xa5, 0x0f, 0x15),
    Color32::from_rgb(0x67, 0x00, 0x0d),
];

const VIRIDIS: [Color32; 9] = [
    Color32::from_rgb(0x44, 0x01, 0x54),
    Color32::from_rgb(0x48, 0x28, 0x78),
    Color32::from_rgb(0x3e, 0x49, 0x89),
    Color32::from_rgb(0x31, 0x68, 0x8e),
    Color32::from_rgb(0x26, 0x82, 0x8e),
    Color32::from_rgb(0x1f, 0x9e, 0x89),
    Color32::from_rgb(0x35, 0xb7, 0x79),
    Color32::from_rgb(0x6e, 0xce, 0x58),
    Color32::from_rgb(0xb5, 0xde, 0x2b),
];

const PLASMA: [Color32; 9] = [
    Color32::from_rgb(0x0d, 0x08, 0x87),
    Color32::from_rgb(0x46, 0x03, 0x9f),
    Color32::from_rgb(0x72, 0x01, 0xa8),
    Color32::from_rgb(0x9c, 0x17, 0x9e),
    Color32::from_rgb(0xbd, 0x37, 0x86),
    Color32::from_rgb(0xd8, 0x57, 0x6b),
    Color32::from_rgb(0xed, 0x79, 0x53),
    Color32::from_rgb(0xfb, 0x9f, 0x3a),
    Color32::from_rgb(0xfd, 0xca, 0x26),
];

const COOLWARM: [Color32; 9] = [
    Color32::from_rgb(0x3b, 0x4c, 0xc0),
    Color32::from_rgb(0x59, 0x77, 0xe3),
    Color32::from_rgb(0x7b, 0x9f, 0xf0),
    Color32::from_rgb(0x9e, 0xbc, 0xf5),
    Color32::from_rgb(0xc0, 0xd4, 0xf7),
    Color32::from_rgb(0xdd, 0xe5, 0xf0),
    Color32::from_rgb(0xf2, 0xe5, 0xd5),
    Color32::from_rgb(0xf5, 0xc5, 0xa0),
    Color32::from_rgb(0xed, 0x9b, 0x6a),
];

impl HeatScheme {
    pub const ALL: [HeatScheme; 6] = [
        HeatScheme::Blues,
        HeatScheme::Greens,
        HeatScheme::Reds,
        HeatScheme::Viridis,
        HeatScheme::Plasma,
        HeatScheme::CoolWarm,
    ];

    pub fn label(self) -> &'static str {
        match self {
            HeatScheme::Blues => "Blues",
            HeatScheme::Greens => "Greens",
            HeatScheme::Reds => "Reds",
            HeatScheme::Viridis => "Viridis",
            HeatScheme::Plasma => "Plasma",
            HeatScheme::CoolWarm => "Cool-Warm",
        }
    }

    pub fn ramp(self) -> &'static [Color32; 9] {
        match self {
            HeatScheme::Blues => &BLUES,
            HeatScheme::Greens => &GREENS,
            HeatScheme::Reds => &REDS,
            HeatScheme::Viridis => &VIRIDIS,
            HeatScheme::Plasma => &PLASMA,
            HeatScheme::CoolWarm => &COOLWARM,
        }
    }

    /// Sample the ramp at `t` in `0..=1`, interpolating between steps
    pub fn sample(self, t: f64) -> Color32 {
        let ramp = self.ramp();
        let t = t.clamp(0.0, 1.0);
        let scaled = t * (ramp.len() - 1) as f64;
        let index = (scaled.floor() as usize).min(ramp.len() - 2);
        lerp_color(ramp[index], ramp[index + 1], scaled - index as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorical_color_cycles() {
        assert_eq!(categorical_color(0), CATEGORICAL[0]);
        assert_eq!(categorical_color(9), CATEGORICAL[0]);
        assert_eq!(categorical_color(12), CATEGORICAL[3]);
    }

    #[test]
    fn test_heat_scheme_sample_hits_endpoints() {
        for scheme in HeatScheme::ALL {
            assert_eq!(scheme.sample(0.0), scheme.ramp()[0]);
            assert_eq!(scheme.sample(1.0), scheme.ramp()[8]);
            assert_eq!(scheme.sample(-1.0), scheme.ramp()[0]);
            assert_eq!(scheme.sample(2.0), scheme.ramp()[8]);
        }
    }

    #[test]
    fn test_lerp_color_midpoint() {
        let mid = lerp_color(Color32::BLACK, Color32::WHITE, 0.5);
        assert_eq!(mid.r(), 128);
    }

    #[test]
    fn test_contrast_text_flips_on_light_fills() {
        assert_eq!(contrast_text(Color32::WHITE), Color32::BLACK);
        assert_eq!(contrast_text(Color32::from_rgb(0x08, 0x30, 0x6b)), Color32::WHITE);
    }
}
