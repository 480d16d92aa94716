//! Shared helpers for the chart views

pub mod colors;
pub mod stats;

use chrono::DateTime;

/// Format an epoch-seconds plot coordinate with a chrono format string.
///
/// Out-of-range values fall back to the raw number so axis labels never
/// disappear while zooming far out.
pub fn format_timestamp(secs: f64, fmt: &str) -> String {
    match DateTime::from_timestamp(secs as i64, 0) {
        Some(dt) => dt.format(fmt).to_string(),
        None => format!("{:.0}", secs),
    }
}

/// Resample a polyline as a Catmull-Rom spline through its points.
///
/// Endpoints are clamped by repeating the first and last point, so the
/// curve passes through every input point in order. Inputs shorter than
/// three points are returned unchanged.
pub fn catmull_rom(points: &[[f64; 2]], samples_per_segment: usize) -> Vec<[f64; 2]> {
    if points.len() < 3 || samples_per_segment < 2 {
        return points.to_vec();
    }

    let mut curve = Vec::with_capacity((points.len() - 1) * samples_per_segment + 1);
    for i in 0..points.len() - 1 {
        let p0 = points[i.saturating_sub(1)];
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = points[(i + 2).min(points.len() - 1)];

        for s in 0..samples_per_segment {
            let t = s as f64 / samples_per_segment as f64;
            let t2 = t * t;
            let t3 = t2 * t;
            let interp = |a: f64, b: f64, c: f64, d: f64| {
                0.5 * ((2.0 * b)
                    + (-a + c) * t
                    + (2.0 * a - 5.0 * b + 4.0 * c - d) * t2
                    + (-a + 3.0 * b - 3.0 * c + d) * t3)
            };
            curve.push([
                interp(p0[0], p1[0], p2[0], p3[0]),
                interp(p0[1], p1[1], p2[1], p3[1]),
            ]);
        }
    }
    curve.push(points[points.len() - 1]);
    curve
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        // 2024-01-15 00:00:00 UTC
        assert_eq!(format_timestamp(1705276800.0, "%m/%d"), "01/15");
        assert_eq!(format_timestamp(f64::MAX, "%m/%d"), format!("{:.0}", f64::MAX));
    }

    #[test]
    fn test_catmull_rom_passes_through_input_points() {
        let points = vec![[0.0, 0.0], [1.0, 2.0], [2.0, 1.0], [3.0, 3.0]];
        let curve = catmull_rom(&points, 8);

        assert_eq!(curve.len(), 3 * 8 + 1);
        assert_eq!(curve[0], [0.0, 0.0]);
        assert_eq!(curve[8], [1.0, 2.0]);
        assert_eq!(curve[16], [2.0, 1.0]);
        assert_eq!(*curve.last().unwrap(), [3.0, 3.0]);
    }

    #[test]
    fn test_catmull_rom_short_input_passthrough() {
        let points = vec![[0.0, 1.0], [1.0, 2.0]];
        assert_eq!(catmull_rom(&points, 8), points);
    }
}
