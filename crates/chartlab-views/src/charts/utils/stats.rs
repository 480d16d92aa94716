//! Series statistics shared by the line and candlestick demos

/// Bollinger band arrays, aligned with the input series.
///
/// All three vectors have the input length; entries before the first
/// full period are `None`.
#[derive(Debug, Clone)]
pub struct BollingerBands {
    pub upper: Vec<Option<f64>>,
    pub middle: Vec<Option<f64>>,
    pub lower: Vec<Option<f64>>,
}

/// Trailing moving average with a fixed window.
///
/// The first `window - 1` entries are `None`; defined entries are rounded
/// to two decimals. A window of zero or one longer than the input yields
/// all `None`.
pub fn moving_average(values: &[f64], window: usize) -> Vec<Option<f64>> {
    if window == 0 || window > values.len() {
        return vec![None; values.len()];
    }

    let mut result = Vec::with_capacity(values.len());
    for i in 0..values.len() {
        if i + 1 < window {
            result.push(None);
        } else {
            let sum: f64 = values[i + 1 - window..=i].iter().sum();
            result.push(Some(round2(sum / window as f64)));
        }
    }
    result
}

/// Trailing mean over a window that shrinks at the start of the series.
///
/// Every entry is defined: index `i` averages `values[max(0, i+1-window)..=i]`
/// by the actual slice length.
pub fn partial_moving_average(values: &[f64], window: usize) -> Vec<f64> {
    if window == 0 {
        return values.to_vec();
    }

    let mut result = Vec::with_capacity(values.len());
    for i in 0..values.len() {
        let start = (i + 1).saturating_sub(window);
        let slice = &values[start..=i];
        let sum: f64 = slice.iter().sum();
        result.push(sum / slice.len() as f64);
    }
    result
}

/// Bollinger bands over a trailing window.
///
/// The middle band is the moving average; the outer bands sit `multiplier`
/// population standard deviations away, rounded to two decimals.
pub fn bollinger_bands(values: &[f64], period: usize, multiplier: f64) -> BollingerBands {
    let middle = moving_average(values, period);
    let mut upper = Vec::with_capacity(values.len());
    let mut lower = Vec::with_capacity(values.len());

    for i in 0..values.len() {
        if i + 1 < period || period == 0 || period > values.len() {
            upper.push(None);
            lower.push(None);
        } else {
            let slice = &values[i + 1 - period..=i];
            let mean: f64 = slice.iter().sum::<f64>() / period as f64;
            let variance: f64 =
                slice.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / period as f64;
            let std_dev = variance.sqrt();
            upper.push(Some(round2(mean + multiplier * std_dev)));
            lower.push(Some(round2(mean - multiplier * std_dev)));
        }
    }

    BollingerBands { upper, middle, lower }
}

/// Ordinary least squares fit, returning `(slope, intercept)`.
///
/// An empty input yields `(0, 0)`; inputs whose x values are all equal
/// yield a flat line through the mean of y.
pub fn linear_regression(points: &[[f64; 2]]) -> (f64, f64) {
    let n = points.len() as f64;
    if points.is_empty() {
        return (0.0, 0.0);
    }

    let sum_x: f64 = points.iter().map(|p| p[0]).sum();
    let sum_y: f64 = points.iter().map(|p| p[1]).sum();
    let sum_xy: f64 = points.iter().map(|p| p[0] * p[1]).sum();
    let sum_x2: f64 = points.iter().map(|p| p[0] * p[0]).sum();

    let denominator = n * sum_x2 - sum_x * sum_x;
    if denominator.abs() < f64::EPSILON {
        return (0.0, sum_y / n);
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;
    (slope, intercept)
}

/// Endpoints of the regression line across the x range of the input.
///
/// Returns `None` for fewer than two points.
pub fn regression_endpoints(points: &[[f64; 2]]) -> Option<[[f64; 2]; 2]> {
    if points.len() < 2 {
        return None;
    }

    let (slope, intercept) = linear_regression(points);
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    for p in points {
        min_x = min_x.min(p[0]);
        max_x = max_x.max(p[0]);
    }

    Some([
        [min_x, slope * min_x + intercept],
        [max_x, slope * max_x + intercept],
    ])
}

/// Indices of values whose z-score magnitude exceeds `threshold`.
///
/// A constant series has zero deviation and no outliers.
pub fn zscore_outliers(values: &[f64], threshold: f64) -> Vec<usize> {
    if values.is_empty() {
        return Vec::new();
    }

    let mean: f64 = values.iter().sum::<f64>() / values.len() as f64;
    let variance: f64 =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    let std_dev = variance.sqrt();

    if std_dev == 0.0 {
        return Vec::new();
    }

    values
        .iter()
        .enumerate()
        .filter(|(_, v)| ((*v - mean) / std_dev).abs() > threshold)
        .map(|(i, _)| i)
        .collect()
}

/// Share of the slice total per value, in percent rounded to one decimal.
///
/// A zero total maps every value to zero.
pub fn percentages(values: &[f64]) -> Vec<f64> {
    let total: f64 = values.iter().sum();
    if total == 0.0 {
        return vec![0.0; values.len()];
    }
    values.iter().map(|v| round1(v / total * 100.0)).collect()
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moving_average_pads_leading_window() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        let ma = moving_average(&values, 3);
        assert_eq!(ma, vec![None, None, Some(2.0), Some(3.0), Some(4.0)]);
    }

    #[test]
    fn test_moving_average_degenerate_windows() {
        let values = [1.0, 2.0, 3.0];
        assert_eq!(moving_average(&values, 0), vec![None; 3]);
        assert_eq!(moving_average(&values, 4), vec![None; 3]);
        assert_eq!(moving_average(&[], 3), Vec::<Option<f64>>::new());
    }

    #[test]
    fn test_moving_average_rounds_to_two_decimals() {
        let values = [1.0, 2.0, 2.0];
        let ma = moving_average(&values, 3);
        assert_eq!(ma[2], Some(1.67));
    }

    #[test]
    fn test_partial_moving_average_shrinks_at_start() {
        let values = [2.0, 4.0, 6.0, 8.0];
        let ma = partial_moving_average(&values, 3);
        assert_eq!(ma[0], 2.0);
        assert_eq!(ma[1], 3.0);
        assert_eq!(ma[2], 4.0);
        assert_eq!(ma[3], 6.0);
    }

    #[test]
    fn test_bollinger_bands_order_and_alignment() {
        let values: Vec<f64> = (0..30).map(|i| 100.0 + (i as f64 * 0.7).sin() * 5.0).collect();
        let bands = bollinger_bands(&values, 20, 2.0);

        assert_eq!(bands.upper.len(), values.len());
        for i in 0..19 {
            assert!(bands.upper[i].is_none());
            assert!(bands.middle[i].is_none());
            assert!(bands.lower[i].is_none());
        }
        for i in 19..values.len() {
            let upper = bands.upper[i].unwrap();
            let middle = bands.middle[i].unwrap();
            let lower = bands.lower[i].unwrap();
            assert!(upper >= middle && middle >= lower);
        }
    }

    #[test]
    fn test_bollinger_bands_collapse_on_constant_series() {
        let values = [50.0; 25];
        let bands = bollinger_bands(&values, 20, 2.0);
        assert_eq!(bands.upper[24], Some(50.0));
        assert_eq!(bands.middle[24], Some(50.0));
        assert_eq!(bands.lower[24], Some(50.0));
    }

    #[test]
    fn test_linear_regression_recovers_exact_line() {
        let points: Vec<[f64; 2]> = (0..10).map(|i| [i as f64, 3.0 * i as f64 + 1.0]).collect();
        let (slope, intercept) = linear_regression(&points);
        assert!((slope - 3.0).abs() < 1e-9);
        assert!((intercept - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_linear_regression_degenerate_inputs() {
        assert_eq!(linear_regression(&[]), (0.0, 0.0));

        let vertical = [[2.0, 1.0], [2.0, 3.0], [2.0, 5.0]];
        let (slope, intercept) = linear_regression(&vertical);
        assert_eq!(slope, 0.0);
        assert!((intercept - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_regression_endpoints_span_x_range() {
        let points = [[1.0, 2.0], [5.0, 10.0], [3.0, 6.0]];
        let endpoints = regression_endpoints(&points).unwrap();
        assert_eq!(endpoints[0][0], 1.0);
        assert_eq!(endpoints[1][0], 5.0);
        assert!((endpoints[0][1] - 2.0).abs() < 1e-9);
        assert!((endpoints[1][1] - 10.0).abs() < 1e-9);

        assert!(regression_endpoints(&[[1.0, 1.0]]).is_none());
    }

    #[test]
    fn test_zscore_outliers_find_known_spike() {
        let mut values = vec![10.0; 20];
        values[7] = 100.0;
        assert_eq!(zscore_outliers(&values, 2.0), vec![7]);
    }

    #[test]
    fn test_zscore_outliers_constant_series_has_none() {
        assert!(zscore_outliers(&[5.0; 10], 2.0).is_empty());
        assert!(zscore_outliers(&[], 2.0).is_empty());
    }

    #[test]
    fn test_percentages_sum_to_one_hundred() {
        let shares = percentages(&[1048.0, 735.0, 580.0, 484.0, 300.0]);
        let total: f64 = shares.iter().sum();
        assert!((total - 100.0).abs() < 0.5);
        assert_eq!(shares[0], 33.3);
    }

    #[test]
    fn test_percentages_zero_total() {
        assert_eq!(percentages(&[0.0, 0.0]), vec![0.0, 0.0]);
    }
}
