//! Dataset shapes shared by the generators, the store, and the demo views

use chrono::NaiveDate;

/// A named ordered sequence of values with an optional fixed color
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
    /// RGB triplet; `None` falls back to the categorical palette
    pub color: Option<[u8; 3]>,
}

impl Series {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
            color: None,
        }
    }

    pub fn with_color(name: impl Into<String>, values: Vec<f64>, color: [u8; 3]) -> Self {
        Self {
            name: name.into(),
            values,
            color: Some(color),
        }
    }
}

/// One or more series plotted over a shared category axis
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryDataset {
    pub title: String,
    pub categories: Vec<String>,
    pub series: Vec<Series>,
}

impl CategoryDataset {
    /// Per-category sum across all series
    pub fn totals(&self) -> Vec<f64> {
        (0..self.categories.len())
            .map(|i| {
                self.series
                    .iter()
                    .map(|s| s.values.get(i).copied().unwrap_or(0.0))
                    .sum()
            })
            .collect()
    }

    pub fn max_total(&self) -> f64 {
        self.totals().into_iter().fold(0.0, f64::max)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub name: String,
    pub value: f64,
}

/// One radar axis with its scale maximum
#[derive(Debug, Clone, PartialEq)]
pub struct RadarIndicator {
    pub name: String,
    pub max: f64,
}

/// One daily OHLCV candle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candle {
    pub date: NaiveDate,
    pub open: f64,
    pub close: f64,
    pub low: f64,
    pub high: f64,
    pub volume: u64,
}

impl Candle {
    pub fn is_up(&self) -> bool {
        self.close >= self.open
    }
}

/// A generated run of daily candles for one stock preset
#[derive(Debug, Clone, PartialEq)]
pub struct CandleDataset {
    pub symbol: StockSymbol,
    pub period: CandlePeriod,
    pub candles: Vec<Candle>,
}

impl CandleDataset {
    pub fn closes(&self) -> Vec<f64> {
        self.candles.iter().map(|c| c.close).collect()
    }

    /// Last close, or the preset base price when the run is empty
    pub fn current_price(&self) -> f64 {
        self.candles
            .last()
            .map(|c| c.close)
            .unwrap_or(self.symbol.profile().base_price)
    }

    /// Close-to-close change of the final candle: absolute and percent of its open
    pub fn daily_change(&self) -> (f64, f64) {
        let n = self.candles.len();
        if n < 2 {
            return (0.0, 0.0);
        }
        let last = &self.candles[n - 1];
        let prev = &self.candles[n - 2];
        let change = last.close - prev.close;
        let percent = if last.open != 0.0 {
            change / last.open * 100.0
        } else {
            0.0
        };
        (change, percent)
    }

    /// Volume of the final candle
    pub fn current_volume(&self) -> u64 {
        self.candles.last().map(|c| c.volume).unwrap_or(0)
    }

    /// Highest high and lowest low over the whole run
    pub fn price_range(&self) -> Option<(f64, f64)> {
        if self.candles.is_empty() {
            return None;
        }
        let high = self.candles.iter().map(|c| c.high).fold(f64::MIN, f64::max);
        let low = self.candles.iter().map(|c| c.low).fold(f64::MAX, f64::min);
        Some((low, high))
    }
}

/// A named time series; points are `[epoch seconds, value]`
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    pub name: String,
    pub color: [u8; 3],
    pub points: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesDataset {
    pub kind: TimeSeriesKind,
    pub title: String,
    pub y_axis: String,
    pub series: Vec<TimeSeries>,
}

impl TimeSeriesDataset {
    pub fn point_count(&self) -> usize {
        self.series.first().map(|s| s.points.len()).unwrap_or(0)
    }

    /// First and last timestamps of the primary series
    pub fn time_range(&self) -> Option<(f64, f64)> {
        let points = &self.series.first()?.points;
        match (points.first(), points.last()) {
            (Some(first), Some(last)) => Some((first[0], last[0])),
            _ => None,
        }
    }
}

/// One heatmap cell addressed by column and row index
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatCell {
    pub col: usize,
    pub row: usize,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapDataset {
    pub kind: HeatmapKind,
    pub title: String,
    pub unit: String,
    pub x_labels: Vec<String>,
    pub y_labels: Vec<String>,
    pub cells: Vec<HeatCell>,
}

impl HeatmapDataset {
    pub fn value_range(&self) -> Option<(f64, f64)> {
        if self.cells.is_empty() {
            return None;
        }
        let min = self.cells.iter().map(|c| c.value).fold(f64::MAX, f64::min);
        let max = self.cells.iter().map(|c| c.value).fold(f64::MIN, f64::max);
        Some((min, max))
    }

    pub fn mean(&self) -> f64 {
        if self.cells.is_empty() {
            return 0.0;
        }
        self.cells.iter().map(|c| c.value).sum::<f64>() / self.cells.len() as f64
    }
}

/// A node in one of the fixed demo hierarchies
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    pub name: String,
    pub value: f64,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn leaf(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
            children: Vec::new(),
        }
    }

    pub fn branch(name: impl Into<String>, value: f64, children: Vec<TreeNode>) -> Self {
        Self {
            name: name.into(),
            value,
            children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn count_nodes(&self) -> usize {
        1 + self.children.iter().map(|c| c.count_nodes()).sum::<usize>()
    }

    pub fn count_leaves(&self) -> usize {
        if self.is_leaf() {
            1
        } else {
            self.children.iter().map(|c| c.count_leaves()).sum()
        }
    }

    /// Depth in levels; a lone root counts as 1
    pub fn max_depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|c| c.max_depth())
            .max()
            .unwrap_or(0)
    }
}

/// One sample appended to the live-stream window each tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StreamSample {
    /// Epoch seconds
    pub time: f64,
    pub values: [f64; 3],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugePreset {
    pub name: &'static str,
    pub unit: &'static str,
    pub initial: f64,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GaugeKind {
    Performance,
    Speed,
    Temperature,
    Progress,
}

impl GaugeKind {
    pub const ALL: [GaugeKind; 4] = [
        GaugeKind::Performance,
        GaugeKind::Speed,
        GaugeKind::Temperature,
        GaugeKind::Progress,
    ];

    pub fn label(self) -> &'static str {
        match self {
            GaugeKind::Performance => "Performance",
            GaugeKind::Speed => "Speed",
            GaugeKind::Temperature => "Temperature",
            GaugeKind::Progress => "Progress",
        }
    }

    pub fn preset(self) -> GaugePreset {
        match self {
            GaugeKind::Performance => GaugePreset {
                name: "CPU Usage",
                unit: "%",
                initial: 75.0,
                min: 0.0,
                max: 100.0,
            },
            GaugeKind::Speed => GaugePreset {
                name: "Speed",
                unit: "km/h",
                initial: 85.0,
                min: 0.0,
                max: 200.0,
            },
            GaugeKind::Temperature => GaugePreset {
                name: "Temperature",
                unit: "°C",
                initial: 23.0,
                min: -20.0,
                max: 50.0,
            },
            GaugeKind::Progress => GaugePreset {
                name: "Project Progress",
                unit: "%",
                initial: 68.0,
                min: 0.0,
                max: 100.0,
            },
        }
    }
}

/// Random-walk parameters for one stock preset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StockProfile {
    pub base_price: f64,
    pub volatility: f64,
    pub trend: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StockSymbol {
    Aapl,
    Googl,
    Tsla,
    Msft,
}

impl StockSymbol {
    pub const ALL: [StockSymbol; 4] = [
        StockSymbol::Aapl,
        StockSymbol::Googl,
        StockSymbol::Tsla,
        StockSymbol::Msft,
    ];

    pub fn ticker(self) -> &'static str {
        match self {
            StockSymbol::Aapl => "AAPL",
            StockSymbol::Googl => "GOOGL",
            StockSymbol::Tsla => "TSLA",
            StockSymbol::Msft => "MSFT",
        }
    }

    pub fn profile(self) -> StockProfile {
        match self {
            StockSymbol::Aapl => StockProfile {
                base_price: 150.0,
                volatility: 0.02,
                trend: 0.0005,
            },
            StockSymbol::Googl => StockProfile {
                base_price: 2800.0,
                volatility: 0.025,
                trend: 0.0003,
            },
            StockSymbol::Tsla => StockProfile {
                base_price: 200.0,
                volatility: 0.04,
                trend: 0.001,
            },
            StockSymbol::Msft => StockProfile {
                base_price: 300.0,
                volatility: 0.018,
                trend: 0.0004,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandlePeriod {
    OneMonth,
    ThreeMonths,
    SixMonths,
    OneYear,
}

impl CandlePeriod {
    pub const ALL: [CandlePeriod; 4] = [
        CandlePeriod::OneMonth,
        CandlePeriod::ThreeMonths,
        CandlePeriod::SixMonths,
        CandlePeriod::OneYear,
    ];

    pub fn days(self) -> usize {
        match self {
            CandlePeriod::OneMonth => 30,
            CandlePeriod::ThreeMonths => 90,
            CandlePeriod::SixMonths => 180,
            CandlePeriod::OneYear => 365,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CandlePeriod::OneMonth => "1M",
            CandlePeriod::ThreeMonths => "3M",
            CandlePeriod::SixMonths => "6M",
            CandlePeriod::OneYear => "1Y",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeSeriesKind {
    Stock,
    Weather,
    Sales,
    Analytics,
}

impl TimeSeriesKind {
    pub const ALL: [TimeSeriesKind; 4] = [
        TimeSeriesKind::Stock,
        TimeSeriesKind::Weather,
        TimeSeriesKind::Sales,
        TimeSeriesKind::Analytics,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TimeSeriesKind::Stock => "Stock Prices",
            TimeSeriesKind::Weather => "Weather Data",
            TimeSeriesKind::Sales => "Sales Revenue",
            TimeSeriesKind::Analytics => "Web Analytics",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            TimeSeriesKind::Stock => "2024 Daily Data",
            TimeSeriesKind::Weather => "Hourly Temperature",
            TimeSeriesKind::Sales => "Monthly Performance",
            TimeSeriesKind::Analytics => "Daily Visitors",
        }
    }

    pub fn cadence(self) -> &'static str {
        match self {
            TimeSeriesKind::Stock => "Daily (Trading days)",
            TimeSeriesKind::Weather => "Hourly",
            TimeSeriesKind::Sales => "Monthly",
            TimeSeriesKind::Analytics => "Daily",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeatmapKind {
    Sales,
    Github,
    Correlation,
    Temperature,
}

impl HeatmapKind {
    pub const ALL: [HeatmapKind; 4] = [
        HeatmapKind::Sales,
        HeatmapKind::Github,
        HeatmapKind::Correlation,
        HeatmapKind::Temperature,
    ];

    pub fn label(self) -> &'static str {
        match self {
            HeatmapKind::Sales => "Sales Performance",
            HeatmapKind::Github => "GitHub Activity",
            HeatmapKind::Correlation => "Correlation Matrix",
            HeatmapKind::Temperature => "Temperature Map",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            HeatmapKind::Sales => "Product × Region",
            HeatmapKind::Github => "Commit Calendar",
            HeatmapKind::Correlation => "Feature Analysis",
            HeatmapKind::Temperature => "Time × Location",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeKind {
    Organization,
    Family,
    FileSystem,
    MindMap,
}

impl TreeKind {
    pub const ALL: [TreeKind; 4] = [
        TreeKind::Organization,
        TreeKind::Family,
        TreeKind::FileSystem,
        TreeKind::MindMap,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TreeKind::Organization => "Organization",
            TreeKind::Family => "Family Tree",
            TreeKind::FileSystem => "File System",
            TreeKind::MindMap => "Mind Map",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    Sales,
    Temperature,
    Performance,
    Stock,
}

impl StepKind {
    pub const ALL: [StepKind; 4] = [
        StepKind::Sales,
        StepKind::Temperature,
        StepKind::Performance,
        StepKind::Stock,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StepKind::Sales => "Sales Data",
            StepKind::Temperature => "Temperature",
            StepKind::Performance => "Performance",
            StepKind::Stock => "Stock Price",
        }
    }

    pub fn y_axis(self) -> &'static str {
        match self {
            StepKind::Sales => "Units",
            StepKind::Temperature => "Temperature",
            StepKind::Performance => "Percentage (%)",
            StepKind::Stock => "Price ($)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StackedKind {
    Revenue,
    Traffic,
    Energy,
    Portfolio,
}

impl StackedKind {
    pub const ALL: [StackedKind; 4] = [
        StackedKind::Revenue,
        StackedKind::Traffic,
        StackedKind::Energy,
        StackedKind::Portfolio,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StackedKind::Revenue => "Revenue Streams",
            StackedKind::Traffic => "Traffic Sources",
            StackedKind::Energy => "Energy Usage",
            StackedKind::Portfolio => "Investment Portfolio",
        }
    }

    pub fn y_axis(self) -> &'static str {
        match self {
            StackedKind::Revenue => "Revenue (Millions)",
            StackedKind::Traffic => "Visitors",
            StackedKind::Energy => "Power (MW)",
            StackedKind::Portfolio => "Value ($)",
        }
    }

    /// Unit-formatted display of a stacked total
    pub fn format_total(self, value: f64) -> String {
        match self {
            StackedKind::Revenue => format!("${:.0}M", value),
            // Round half away from zero before formatting so 21.25 shows as 21.3
            StackedKind::Traffic => format!("{:.1}K", (value / 100.0).round() / 10.0),
            StackedKind::Energy => format!("{:.0}MW", value),
            StackedKind::Portfolio => format!("${:.0}K", (value / 1000.0).round()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_candles() -> CandleDataset {
        let day = |d: u32| NaiveDate::from_ymd_opt(2024, 3, d).unwrap();
        CandleDataset {
            symbol: StockSymbol::Aapl,
            period: CandlePeriod::OneMonth,
            candles: vec![
                Candle {
                    date: day(1),
                    open: 100.0,
                    close: 104.0,
                    low: 99.0,
                    high: 105.0,
                    volume: 6_000_000,
                },
                Candle {
                    date: day(2),
                    open: 104.0,
                    close: 102.0,
                    low: 101.0,
                    high: 106.0,
                    volume: 8_000_000,
                },
            ],
        }
    }

    #[test]
    fn test_candle_direction() {
        let data = sample_candles();
        assert!(data.candles[0].is_up());
        assert!(!data.candles[1].is_up());
    }

    #[test]
    fn test_candle_stats() {
        let data = sample_candles();
        assert_eq!(data.current_price(), 102.0);
        assert_eq!(data.current_volume(), 8_000_000);
        let (change, percent) = data.daily_change();
        assert!((change - (-2.0)).abs() < 1e-9);
        assert!((percent - (-2.0 / 104.0 * 100.0)).abs() < 1e-9);
        assert_eq!(data.price_range(), Some((99.0, 106.0)));
    }

    #[test]
    fn test_empty_candles_fall_back_to_base_price() {
        let data = CandleDataset {
            symbol: StockSymbol::Googl,
            period: CandlePeriod::OneYear,
            candles: Vec::new(),
        };
        assert_eq!(data.current_price(), 2800.0);
        assert_eq!(data.daily_change(), (0.0, 0.0));
        assert_eq!(data.price_range(), None);
    }

    #[test]
    fn test_category_totals() {
        let data = CategoryDataset {
            title: "t".into(),
            categories: vec!["a".into(), "b".into()],
            series: vec![
                Series::new("one", vec![1.0, 2.0]),
                Series::new("two", vec![10.0, 20.0]),
            ],
        };
        assert_eq!(data.totals(), vec![11.0, 22.0]);
        assert_eq!(data.max_total(), 22.0);
    }

    #[test]
    fn test_tree_counters() {
        let tree = TreeNode::branch(
            "root",
            10.0,
            vec![
                TreeNode::branch("a", 5.0, vec![TreeNode::leaf("a1", 1.0)]),
                TreeNode::leaf("b", 2.0),
            ],
        );
        assert_eq!(tree.count_nodes(), 4);
        assert_eq!(tree.count_leaves(), 2);
        assert_eq!(tree.max_depth(), 3);
        assert!(!tree.is_leaf());
    }

    #[test]
    fn test_stacked_total_formatting() {
        assert_eq!(StackedKind::Revenue.format_total(835.0), "$835M");
        assert_eq!(StackedKind::Traffic.format_total(21250.0), "21.3K");
        assert_eq!(StackedKind::Energy.format_total(160.0), "160MW");
        assert_eq!(StackedKind::Portfolio.format_total(144500.0), "$145K");
    }
}
