//! Generators behind every demo dataset
//!
//! Random datasets draw from a caller-supplied [`Rng`] so tests can seed them;
//! fixed catalogs return the same tables every call.

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveTime, Utc, Weekday};
use rand::Rng;
use tracing::debug;

use crate::datasets::{
    Candle, CandleDataset, CandlePeriod, CategoryDataset, HeatCell, HeatmapDataset, HeatmapKind,
    PieSlice, RadarIndicator, Series, StackedKind, StepKind, StockSymbol, StreamSample, TimeSeries,
    TimeSeriesDataset, TimeSeriesKind, TreeKind, TreeNode,
};

/// Series names of the live stream, in slot order
pub const STREAM_NAMES: [&str; 3] = ["Series A", "Series B", "Series C"];
/// Series colors of the live stream, in slot order
pub const STREAM_COLORS: [[u8; 3]; 3] = [[0x54, 0x70, 0xc6], [0x91, 0xcc, 0x75], [0xfa, 0xc8, 0x58]];
/// Mean-reversion targets per stream slot
pub const STREAM_BASES: [f64; 3] = [100.0, 80.0, 60.0];

const STREAM_SPREADS: [f64; 3] = [20.0, 15.0, 10.0];
const STREAM_SCALES: [f64; 3] = [5.0, 4.0, 3.0];

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn epoch_secs(date: NaiveDate) -> f64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp() as f64
}

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

// ---------------------------------------------------------------------------
// Fixed catalogs for the static showcases

pub fn weekly_sales() -> CategoryDataset {
    CategoryDataset {
        title: "Weekly Sales Data".to_string(),
        categories: labels(&["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]),
        series: vec![Series::with_color(
            "Sales",
            vec![120.0, 200.0, 150.0, 80.0, 70.0, 110.0, 130.0],
            [0x54, 0x70, 0xc6],
        )],
    }
}

/// Monthly revenue curve of the locale-aware line demo; labels come from the
/// locale table, only the values live here
pub fn monthly_sales_values() -> Vec<f64> {
    vec![820.0, 932.0, 901.0, 934.0, 1290.0, 1330.0, 1320.0]
}

pub fn weekly_traffic() -> CategoryDataset {
    CategoryDataset {
        title: "Weekly Website Traffic".to_string(),
        categories: labels(&["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]),
        series: vec![
            Series::new(
                "Desktop",
                vec![320.0, 332.0, 301.0, 334.0, 390.0, 330.0, 320.0],
            ),
            Series::new(
                "Mobile",
                vec![120.0, 132.0, 101.0, 134.0, 90.0, 230.0, 210.0],
            ),
        ],
    }
}

pub fn sales_share() -> Vec<PieSlice> {
    [
        ("Electronics", 1048.0),
        ("Apparel", 735.0),
        ("Home Goods", 580.0),
        ("Sports", 484.0),
        ("Books", 300.0),
    ]
    .into_iter()
    .map(|(name, value)| PieSlice {
        name: name.to_string(),
        value,
    })
    .collect()
}

/// Radar axes and the two candidate score series
pub fn skill_radar() -> (Vec<RadarIndicator>, Vec<Series>) {
    let indicators = [
        "Communication",
        "Problem Solving",
        "Technical Skills",
        "Teamwork",
        "Leadership",
        "Creativity",
    ]
    .into_iter()
    .map(|name| RadarIndicator {
        name: name.to_string(),
        max: 100.0,
    })
    .collect();
    let series = vec![
        Series::new(
            "Candidate A",
            vec![85.0, 90.0, 95.0, 80.0, 70.0, 88.0],
        ),
        Series::new(
            "Candidate B",
            vec![75.0, 80.0, 88.0, 85.0, 65.0, 92.0],
        ),
    ];
    (indicators, series)
}

/// Study-hours / exam-score sample for the scatter demo
pub fn study_scores() -> Vec<[f64; 2]> {
    vec![
        [10.0, 8.04],
        [8.07, 6.95],
        [13.0, 7.58],
        [9.05, 8.81],
        [11.0, 8.33],
        [14.0, 9.96],
        [6.0, 7.24],
        [4.0, 4.26],
        [12.0, 10.84],
        [7.0, 4.82],
        [5.0, 5.68],
    ]
}

// ---------------------------------------------------------------------------
// Candlesticks

/// Daily OHLCV random walk for one stock preset, ending yesterday
pub fn stock_candles<R: Rng>(symbol: StockSymbol, period: CandlePeriod, rng: &mut R) -> CandleDataset {
    let profile = symbol.profile();
    let days = period.days();
    let today = Utc::now().date_naive();
    let drift = profile.trend * profile.base_price;
    let swing = profile.volatility * profile.base_price;

    let mut price = profile.base_price;
    let mut candles = Vec::with_capacity(days);
    for i in 0..days {
        let date = today - Duration::days((days - i) as i64);
        let open = price;
        let close = open + drift + (rng.gen::<f64>() - 0.5) * swing;
        let high = open.max(close) + rng.gen::<f64>() * swing * 0.5;
        let low = open.min(close) - rng.gen::<f64>() * swing * 0.5;
        candles.push(Candle {
            date,
            open: round2(open),
            close: round2(close),
            low: round2(low),
            high: round2(high),
            volume: 5_000_000 + rng.gen_range(0..10_000_000u64),
        });
        price = close;
    }
    debug!("Generated {} candles for {}", candles.len(), symbol.ticker());
    CandleDataset {
        symbol,
        period,
        candles,
    }
}

// ---------------------------------------------------------------------------
// Time series

pub fn time_series<R: Rng>(kind: TimeSeriesKind, rng: &mut R) -> TimeSeriesDataset {
    let dataset = match kind {
        TimeSeriesKind::Stock => stock_series(rng),
        TimeSeriesKind::Weather => weather_series(rng),
        TimeSeriesKind::Sales => sales_series(rng),
        TimeSeriesKind::Analytics => analytics_series(rng),
    };
    debug!(
        "Generated '{}' with {} points",
        dataset.title,
        dataset.point_count()
    );
    dataset
}

/// 2024 daily closing prices, trading days only
fn stock_series<R: Rng>(rng: &mut R) -> TimeSeriesDataset {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let mut price = 150.0;
    let mut points = Vec::new();
    for i in 0..365 {
        let date = start + Duration::days(i);
        if is_weekend(date) {
            continue;
        }
        price += (rng.gen::<f64>() - 0.5) * 5.0;
        price = price.clamp(50.0, 200.0);
        points.push([epoch_secs(date), round2(price)]);
    }
    TimeSeriesDataset {
        kind: TimeSeriesKind::Stock,
        title: "Stock Price Movement (AAPL)".to_string(),
        y_axis: "Price ($)".to_string(),
        series: vec![TimeSeries {
            name: "AAPL".to_string(),
            color: [0x1f, 0x77, 0xb4],
            points,
        }],
    }
}

/// One week of hourly temperature and humidity
fn weather_series<R: Rng>(rng: &mut R) -> TimeSeriesDataset {
    let base = epoch_secs(NaiveDate::from_ymd_opt(2024, 9, 25).unwrap());
    let mut temperature = Vec::with_capacity(168);
    let mut humidity = Vec::with_capacity(168);
    for i in 0..168 {
        let time = base + i as f64 * 3600.0;
        let phase = (i % 24) as f64 / 24.0 * std::f64::consts::TAU;
        let temp = 20.0 + phase.sin() * 10.0 + (rng.gen::<f64>() - 0.5) * 3.0;
        let humid = 60.0 + (phase + std::f64::consts::PI).sin() * 20.0 + (rng.gen::<f64>() - 0.5) * 10.0;
        temperature.push([time, round1(temp)]);
        humidity.push([time, round1(humid)]);
    }
    TimeSeriesDataset {
        kind: TimeSeriesKind::Weather,
        title: "Weather Data (7-Day Hourly)".to_string(),
        y_axis: "Temperature (°C) / Humidity (%)".to_string(),
        series: vec![
            TimeSeries {
                name: "Temperature".to_string(),
                color: [0xff, 0x7f, 0x0e],
                points: temperature,
            },
            TimeSeries {
                name: "Humidity".to_string(),
                color: [0x2c, 0xa0, 0x2c],
                points: humidity,
            },
        ],
    }
}

/// Two years of monthly revenue with seasonality and a linear trend
fn sales_series<R: Rng>(rng: &mut R) -> TimeSeriesDataset {
    let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    let mut points = Vec::with_capacity(24);
    for i in 0..24u32 {
        let date = start + Months::new(i);
        let seasonality = ((i % 12) as f64 / 12.0 * std::f64::consts::TAU).sin() * 20000.0;
        let trend = i as f64 * 1000.0;
        let noise = (rng.gen::<f64>() - 0.5) * 10000.0;
        points.push([epoch_secs(date), (50000.0 + seasonality + trend + noise).round()]);
    }
    TimeSeriesDataset {
        kind: TimeSeriesKind::Sales,
        title: "Monthly Sales Revenue".to_string(),
        y_axis: "Revenue ($)".to_string(),
        series: vec![TimeSeries {
            name: "Revenue".to_string(),
            color: [0xd6, 0x27, 0x28],
            points,
        }],
    }
}

/// Thirty days of visitors and page views with a weekday/weekend split
fn analytics_series<R: Rng>(rng: &mut R) -> TimeSeriesDataset {
    let start = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
    let mut visitors = Vec::with_capacity(30);
    let mut page_views = Vec::with_capacity(30);
    for i in 0..30 {
        let date = start + Duration::days(i);
        let time = epoch_secs(date);
        let base = if is_weekend(date) { 800.0 } else { 1200.0 };
        let count = (base + (rng.gen::<f64>() - 0.5) * 400.0).round();
        visitors.push([time, count]);
        page_views.push([time, (count * (2.0 + rng.gen::<f64>())).round()]);
    }
    TimeSeriesDataset {
        kind: TimeSeriesKind::Analytics,
        title: "Website Analytics (30 Days)".to_string(),
        y_axis: "Count".to_string(),
        series: vec![
            TimeSeries {
                name: "Visitors".to_string(),
                color: [0x94, 0x67, 0xbd],
                points: visitors,
            },
            TimeSeries {
                name: "Page Views".to_string(),
                color: [0x8c, 0x56, 0x4b],
                points: page_views,
            },
        ],
    }
}

// ---------------------------------------------------------------------------
// Heat grids

pub fn heat_grid<R: Rng>(kind: HeatmapKind, rng: &mut R) -> HeatmapDataset {
    let dataset = match kind {
        HeatmapKind::Sales => sales_grid(rng),
        HeatmapKind::Github => github_grid(rng),
        HeatmapKind::Correlation => correlation_grid(rng),
        HeatmapKind::Temperature => temperature_grid(rng),
    };
    debug!("Generated '{}' with {} cells", dataset.title, dataset.cells.len());
    dataset
}

fn sales_grid<R: Rng>(rng: &mut R) -> HeatmapDataset {
    let products = ["Product A", "Product B", "Product C", "Product D", "Product E"];
    let regions = ["North", "South", "East", "West", "Central"];
    let mut cells = Vec::with_capacity(products.len() * regions.len());
    for row in 0..products.len() {
        for col in 0..regions.len() {
            cells.push(HeatCell {
                col,
                row,
                value: (rng.gen::<f64>() * 1000.0).floor() + 100.0,
            });
        }
    }
    HeatmapDataset {
        kind: HeatmapKind::Sales,
        title: "Sales Performance by Product and Region".to_string(),
        unit: "Sales ($K)".to_string(),
        x_labels: labels(&regions),
        y_labels: labels(&products),
        cells,
    }
}

fn github_grid<R: Rng>(rng: &mut R) -> HeatmapDataset {
    let months = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    let weeks = ["Week 1", "Week 2", "Week 3", "Week 4"];
    let mut cells = Vec::with_capacity(months.len() * weeks.len());
    for col in 0..months.len() {
        // Commit activity peaks around mid-year
        let activity = if (6 - col as i32).abs() < 3 { 0.8 } else { 0.3 };
        for row in 0..weeks.len() {
            cells.push(HeatCell {
                col,
                row,
                value: (activity * rng.gen::<f64>() * 50.0).floor(),
            });
        }
    }
    HeatmapDataset {
        kind: HeatmapKind::Github,
        title: "GitHub Commit Activity Calendar".to_string(),
        unit: "Commits".to_string(),
        x_labels: labels(&months),
        y_labels: labels(&weeks),
        cells,
    }
}

fn correlation_grid<R: Rng>(rng: &mut R) -> HeatmapDataset {
    let features = [
        "Feature A", "Feature B", "Feature C", "Feature D", "Feature E", "Feature F",
    ];
    let mut cells = Vec::with_capacity(features.len() * features.len());
    for col in 0..features.len() {
        for row in 0..features.len() {
            let value = if col == row {
                1.0
            } else {
                round2((rng.gen::<f64>() - 0.5) * 2.0)
            };
            cells.push(HeatCell { col, row, value });
        }
    }
    HeatmapDataset {
        kind: HeatmapKind::Correlation,
        title: "Feature Correlation Matrix".to_string(),
        unit: "Correlation".to_string(),
        x_labels: labels(&features),
        y_labels: labels(&features),
        cells,
    }
}

fn temperature_grid<R: Rng>(rng: &mut R) -> HeatmapDataset {
    let hours: Vec<String> = (0..24).map(|h| format!("{}:00", h)).collect();
    let locations = [
        "Location A", "Location B", "Location C", "Location D", "Location E",
    ];
    let mut cells = Vec::with_capacity(hours.len() * locations.len());
    for col in 0..hours.len() {
        let base = 20.0 + ((col as f64 - 6.0) / 24.0 * std::f64::consts::TAU).sin() * 10.0;
        for row in 0..locations.len() {
            cells.push(HeatCell {
                col,
                row,
                value: round1(base + (rng.gen::<f64>() - 0.5) * 10.0),
            });
        }
    }
    HeatmapDataset {
        kind: HeatmapKind::Temperature,
        title: "Temperature Distribution by Time and Location".to_string(),
        unit: "Temperature (°C)".to_string(),
        x_labels: hours,
        y_labels: labels(&locations),
        cells,
    }
}

// ---------------------------------------------------------------------------
// Live stream

/// Seed `count` historical samples at one-second spacing ending just before `now`
pub fn stream_seed<R: Rng>(count: usize, now: f64, rng: &mut R) -> Vec<StreamSample> {
    (0..count)
        .map(|i| StreamSample {
            time: now - (count - i) as f64,
            values: std::array::from_fn(|s| {
                STREAM_BASES[s] + (rng.gen::<f64>() - 0.5) * STREAM_SPREADS[s]
            }),
        })
        .collect()
}

/// Next mean-reverting sample after `prev`, floored at zero
pub fn stream_next<R: Rng>(prev: &StreamSample, time: f64, volatility: f64, rng: &mut R) -> StreamSample {
    StreamSample {
        time,
        values: std::array::from_fn(|s| {
            let drift = (STREAM_BASES[s] - prev.values[s]) * 0.1;
            let shock = (rng.gen::<f64>() - 0.5) * volatility * STREAM_SCALES[s];
            (prev.values[s] + drift + shock).max(0.0)
        }),
    }
}

// ---------------------------------------------------------------------------
// Step and stacked tables

pub fn step_profile(kind: StepKind) -> CategoryDataset {
    match kind {
        StepKind::Sales => CategoryDataset {
            title: "Monthly Sales Target vs Achievement".to_string(),
            categories: labels(&[
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ]),
            series: vec![
                Series::with_color(
                    "Target",
                    vec![
                        1000.0, 1100.0, 1200.0, 1150.0, 1300.0, 1250.0, 1400.0, 1350.0, 1500.0,
                        1450.0, 1600.0, 1700.0,
                    ],
                    [0xe7, 0x4c, 0x3c],
                ),
                Series::with_color(
                    "Achievement",
                    vec![
                        950.0, 1150.0, 1100.0, 1200.0, 1280.0, 1300.0, 1380.0, 1420.0, 1480.0,
                        1520.0, 1580.0, 1650.0,
                    ],
                    [0x2e, 0xcc, 0x71],
                ),
            ],
        },
        StepKind::Temperature => CategoryDataset {
            title: "Daily Temperature Range".to_string(),
            categories: labels(&[
                "6:00", "9:00", "12:00", "15:00", "18:00", "21:00", "0:00", "3:00",
            ]),
            series: vec![
                Series::with_color(
                    "Indoor (°C)",
                    vec![18.0, 20.0, 24.0, 26.0, 25.0, 22.0, 20.0, 18.0],
                    [0x34, 0x98, 0xdb],
                ),
                Series::with_color(
                    "Outdoor (°C)",
                    vec![12.0, 16.0, 22.0, 28.0, 26.0, 20.0, 16.0, 14.0],
                    [0xf3, 0x9c, 0x12],
                ),
            ],
        },
        StepKind::Performance => CategoryDataset {
            title: "System Performance Metrics".to_string(),
            categories: labels(&["00:00", "04:00", "08:00", "12:00", "16:00", "20:00"]),
            series: vec![
                Series::with_color(
                    "CPU Usage (%)",
                    vec![25.0, 30.0, 85.0, 90.0, 75.0, 40.0],
                    [0x9b, 0x59, 0xb6],
                ),
                Series::with_color(
                    "Memory Usage (%)",
                    vec![45.0, 48.0, 65.0, 70.0, 68.0, 52.0],
                    [0x1a, 0xbc, 0x9c],
                ),
            ],
        },
        StepKind::Stock => CategoryDataset {
            title: "Stock Price Movement (Hourly)".to_string(),
            categories: labels(&[
                "9:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00",
            ]),
            series: vec![
                Series::with_color(
                    "Stock A ($)",
                    vec![100.0, 105.0, 102.0, 108.0, 106.0, 110.0, 108.0, 112.0],
                    [0xe6, 0x7e, 0x22],
                ),
                Series::with_color(
                    "Stock B ($)",
                    vec![85.0, 88.0, 87.0, 90.0, 92.0, 89.0, 91.0, 94.0],
                    [0x34, 0x49, 0x5e],
                ),
            ],
        },
    }
}

pub fn stacked_series(kind: StackedKind) -> CategoryDataset {
    match kind {
        StackedKind::Revenue => CategoryDataset {
            title: "Revenue Streams Over Time".to_string(),
            categories: labels(&["Q1", "Q2", "Q3", "Q4", "Q1", "Q2", "Q3", "Q4"]),
            series: vec![
                Series::with_color(
                    "Product Sales",
                    vec![120.0, 140.0, 160.0, 180.0, 200.0, 220.0, 240.0, 260.0],
                    [0x34, 0x98, 0xdb],
                ),
                Series::with_color(
                    "Subscriptions",
                    vec![80.0, 90.0, 110.0, 130.0, 150.0, 170.0, 190.0, 210.0],
                    [0x2e, 0xcc, 0x71],
                ),
                Series::with_color(
                    "Services",
                    vec![40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0, 110.0],
                    [0xf3, 0x9c, 0x12],
                ),
                Series::with_color(
                    "Licensing",
                    vec![20.0, 25.0, 30.0, 35.0, 40.0, 45.0, 50.0, 55.0],
                    [0x9b, 0x59, 0xb6],
                ),
            ],
        },
        StackedKind::Traffic => CategoryDataset {
            title: "Website Traffic Sources".to_string(),
            categories: labels(&[
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ]),
            series: vec![
                Series::with_color(
                    "Organic Search",
                    vec![
                        4500.0, 4800.0, 5200.0, 5800.0, 6200.0, 6800.0, 7200.0, 7600.0, 8000.0,
                        8400.0, 8800.0, 9200.0,
                    ],
                    [0xe7, 0x4c, 0x3c],
                ),
                Series::with_color(
                    "Direct",
                    vec![
                        2200.0, 2400.0, 2600.0, 2800.0, 3000.0, 3200.0, 3400.0, 3600.0, 3800.0,
                        4000.0, 4200.0, 4400.0,
                    ],
                    [0x34, 0x98, 0xdb],
                ),
                Series::with_color(
                    "Social Media",
                    vec![
                        1800.0, 2000.0, 2200.0, 2400.0, 2600.0, 2800.0, 3000.0, 3200.0, 3400.0,
                        3600.0, 3800.0, 4000.0,
                    ],
                    [0x2e, 0xcc, 0x71],
                ),
                Series::with_color(
                    "Paid Ads",
                    vec![
                        1200.0, 1300.0, 1400.0, 1500.0, 1600.0, 1700.0, 1800.0, 1900.0, 2000.0,
                        2100.0, 2200.0, 2300.0,
                    ],
                    [0xf3, 0x9c, 0x12],
                ),
                Series::with_color(
                    "Email",
                    vec![
                        800.0, 850.0, 900.0, 950.0, 1000.0, 1050.0, 1100.0, 1150.0, 1200.0, 1250.0,
                        1300.0, 1350.0,
                    ],
                    [0x9b, 0x59, 0xb6],
                ),
            ],
        },
        StackedKind::Energy => CategoryDataset {
            title: "Energy Consumption by Source".to_string(),
            categories: labels(&["6AM", "9AM", "12PM", "3PM", "6PM", "9PM", "12AM", "3AM"]),
            series: vec![
                Series::with_color(
                    "Solar",
                    vec![0.0, 20.0, 40.0, 45.0, 35.0, 10.0, 0.0, 0.0],
                    [0xf1, 0xc4, 0x0f],
                ),
                Series::with_color(
                    "Wind",
                    vec![15.0, 18.0, 22.0, 25.0, 28.0, 30.0, 25.0, 20.0],
                    [0x16, 0xa0, 0x85],
                ),
                Series::with_color("Hydro", vec![25.0; 8], [0x34, 0x98, 0xdb]),
                Series::with_color("Nuclear", vec![35.0; 8], [0xe6, 0x7e, 0x22]),
                Series::with_color(
                    "Coal",
                    vec![45.0, 40.0, 35.0, 30.0, 35.0, 40.0, 45.0, 50.0],
                    [0x34, 0x49, 0x5e],
                ),
            ],
        },
        StackedKind::Portfolio => CategoryDataset {
            title: "Investment Portfolio Performance".to_string(),
            categories: labels(&["2020", "2021", "2022", "2023", "2024"]),
            series: vec![
                Series::with_color(
                    "Stocks",
                    vec![45000.0, 52000.0, 48000.0, 55000.0, 62000.0],
                    [0xe7, 0x4c, 0x3c],
                ),
                Series::with_color(
                    "Bonds",
                    vec![25000.0, 27000.0, 29000.0, 31000.0, 33000.0],
                    [0x34, 0x98, 0xdb],
                ),
                Series::with_color(
                    "Real Estate",
                    vec![15000.0, 16500.0, 18000.0, 20000.0, 22000.0],
                    [0x2e, 0xcc, 0x71],
                ),
                Series::with_color(
                    "Commodities",
                    vec![8000.0, 9000.0, 7500.0, 8500.0, 9500.0],
                    [0xf3, 0x9c, 0x12],
                ),
                Series::with_color(
                    "Crypto",
                    vec![2000.0, 8000.0, 3000.0, 12000.0, 18000.0],
                    [0x9b, 0x59, 0xb6],
                ),
            ],
        },
    }
}

// ---------------------------------------------------------------------------
// Hierarchies

pub fn tree(kind: TreeKind) -> TreeNode {
    match kind {
        TreeKind::Organization => organization_tree(),
        TreeKind::Family => family_tree(),
        TreeKind::FileSystem => file_system_tree(),
        TreeKind::MindMap => mind_map_tree(),
    }
}

fn organization_tree() -> TreeNode {
    TreeNode::branch(
        "CEO",
        100.0,
        vec![
            TreeNode::branch(
                "CTO",
                85.0,
                vec![
                    TreeNode::branch(
                        "Frontend Team",
                        70.0,
                        vec![
                            TreeNode::leaf("Senior Dev A", 60.0),
                            TreeNode::leaf("Developer B", 50.0),
                            TreeNode::leaf("Junior Dev C", 30.0),
                        ],
                    ),
                    TreeNode::branch(
                        "Backend Team",
                        75.0,
                        vec![
                            TreeNode::leaf("Senior Dev D", 65.0),
                            TreeNode::leaf("Developer E", 55.0),
                            TreeNode::leaf("DevOps F", 60.0),
                        ],
                    ),
                ],
            ),
            TreeNode::branch(
                "CFO",
                80.0,
                vec![
                    TreeNode::branch(
                        "Accounting",
                        60.0,
                        vec![
                            TreeNode::leaf("Accountant A", 50.0),
                            TreeNode::leaf("Accountant B", 45.0),
                        ],
                    ),
                    TreeNode::branch(
                        "Finance",
                        65.0,
                        vec![
                            TreeNode::leaf("Financial Analyst", 55.0),
                            TreeNode::leaf("Budget Manager", 60.0),
                        ],
                    ),
                ],
            ),
            TreeNode::branch(
                "CMO",
                78.0,
                vec![
                    TreeNode::branch(
                        "Marketing",
                        65.0,
                        vec![
                            TreeNode::leaf("Content Creator", 50.0),
                            TreeNode::leaf("SEO Specialist", 55.0),
                        ],
                    ),
                    TreeNode::branch(
                        "Sales",
                        70.0,
                        vec![
                            TreeNode::leaf("Sales Rep A", 60.0),
                            TreeNode::leaf("Sales Rep B", 58.0),
                        ],
                    ),
                ],
            ),
        ],
    )
}

fn family_tree() -> TreeNode {
    TreeNode::branch(
        "Great Grandfather",
        95.0,
        vec![
            TreeNode::branch(
                "Grandfather",
                75.0,
                vec![
                    TreeNode::branch(
                        "Father",
                        50.0,
                        vec![TreeNode::leaf("Son", 25.0), TreeNode::leaf("Daughter", 23.0)],
                    ),
                    TreeNode::branch(
                        "Uncle",
                        48.0,
                        vec![
                            TreeNode::leaf("Cousin A", 20.0),
                            TreeNode::leaf("Cousin B", 18.0),
                        ],
                    ),
                ],
            ),
            TreeNode::branch(
                "Great Uncle",
                73.0,
                vec![TreeNode::branch(
                    "Second Cousin Parent",
                    45.0,
                    vec![TreeNode::leaf("Second Cousin", 15.0)],
                )],
            ),
        ],
    )
}

fn file_system_tree() -> TreeNode {
    TreeNode::branch(
        "root",
        100.0,
        vec![
            TreeNode::branch(
                "src",
                60.0,
                vec![
                    TreeNode::branch(
                        "components",
                        25.0,
                        vec![
                            TreeNode::leaf("header.tsx", 5.0),
                            TreeNode::leaf("footer.tsx", 4.0),
                            TreeNode::leaf("sidebar.tsx", 6.0),
                        ],
                    ),
                    TreeNode::branch(
                        "pages",
                        20.0,
                        vec![
                            TreeNode::leaf("home.tsx", 8.0),
                            TreeNode::leaf("about.tsx", 6.0),
                        ],
                    ),
                    TreeNode::leaf("index.tsx", 3.0),
                ],
            ),
            TreeNode::branch(
                "public",
                15.0,
                vec![
                    TreeNode::leaf("favicon.ico", 1.0),
                    TreeNode::leaf("index.html", 2.0),
                    TreeNode::branch(
                        "assets",
                        10.0,
                        vec![
                            TreeNode::leaf("logo.png", 3.0),
                            TreeNode::leaf("styles.css", 4.0),
                        ],
                    ),
                ],
            ),
            TreeNode::branch(
                "docs",
                8.0,
                vec![
                    TreeNode::leaf("README.md", 3.0),
                    TreeNode::leaf("CONTRIBUTING.md", 2.0),
                ],
            ),
        ],
    )
}

fn mind_map_tree() -> TreeNode {
    TreeNode::branch(
        "Web Development",
        100.0,
        vec![
            TreeNode::branch(
                "Core Concepts",
                80.0,
                vec![
                    TreeNode::branch(
                        "Components",
                        60.0,
                        vec![
                            TreeNode::leaf("Templates", 20.0),
                            TreeNode::leaf("Lifecycle", 25.0),
                            TreeNode::leaf("Data Binding", 30.0),
                        ],
                    ),
                    TreeNode::branch(
                        "Services",
                        50.0,
                        vec![
                            TreeNode::leaf("Dependency Injection", 25.0),
                            TreeNode::leaf("HTTP Client", 20.0),
                        ],
                    ),
                ],
            ),
            TreeNode::branch(
                "Advanced Topics",
                70.0,
                vec![
                    TreeNode::branch(
                        "Routing",
                        40.0,
                        vec![
                            TreeNode::leaf("Guards", 15.0),
                            TreeNode::leaf("Lazy Loading", 20.0),
                        ],
                    ),
                    TreeNode::branch(
                        "State Management",
                        45.0,
                        vec![
                            TreeNode::leaf("Store", 25.0),
                            TreeNode::leaf("Reactivity", 20.0),
                        ],
                    ),
                ],
            ),
            TreeNode::branch(
                "Testing",
                60.0,
                vec![
                    TreeNode::leaf("Unit Tests", 30.0),
                    TreeNode::leaf("E2E Tests", 25.0),
                ],
            ),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_candle_invariants() {
        let data = stock_candles(StockSymbol::Aapl, CandlePeriod::ThreeMonths, &mut rng());
        assert_eq!(data.candles.len(), 90);
        assert_eq!(data.candles[0].open, 150.0);
        for candle in &data.candles {
            assert!(candle.high >= candle.open.max(candle.close));
            assert!(candle.low <= candle.open.min(candle.close));
            assert!(candle.volume >= 5_000_000 && candle.volume < 15_000_000);
        }
    }

    #[test]
    fn test_candles_open_at_previous_close() {
        let data = stock_candles(StockSymbol::Tsla, CandlePeriod::OneMonth, &mut rng());
        for pair in data.candles.windows(2) {
            assert_eq!(pair[1].open, pair[0].close);
        }
    }

    #[test]
    fn test_stock_series_skips_weekends_and_clamps() {
        let data = time_series(TimeSeriesKind::Stock, &mut rng());
        let points = &data.series[0].points;
        assert_eq!(points.len(), 261);
        for p in points {
            let date = chrono::DateTime::from_timestamp(p[0] as i64, 0)
                .map(|dt| dt.date_naive())
                .unwrap();
            assert!(!is_weekend(date));
            assert!(p[1] >= 50.0 && p[1] <= 200.0);
        }
    }

    #[test]
    fn test_weather_series_shape() {
        let data = time_series(TimeSeriesKind::Weather, &mut rng());
        assert_eq!(data.series.len(), 2);
        let temperature = &data.series[0].points;
        let humidity = &data.series[1].points;
        assert_eq!(temperature.len(), 168);
        assert_eq!(humidity.len(), 168);
        for (t, h) in temperature.iter().zip(humidity) {
            assert_eq!(t[0], h[0]);
            assert!(t[1] >= 8.5 && t[1] <= 31.5);
            assert!(h[1] >= 35.0 && h[1] <= 85.0);
        }
        // Hourly spacing
        assert_eq!(temperature[1][0] - temperature[0][0], 3600.0);
    }

    #[test]
    fn test_sales_series_shape() {
        let data = time_series(TimeSeriesKind::Sales, &mut rng());
        let points = &data.series[0].points;
        assert_eq!(points.len(), 24);
        for p in points {
            assert_eq!(p[1].fract(), 0.0);
            assert!(p[1] >= 20000.0 && p[1] <= 100000.0);
        }
    }

    #[test]
    fn test_analytics_page_views_track_visitors() {
        let data = time_series(TimeSeriesKind::Analytics, &mut rng());
        let visitors = &data.series[0].points;
        let page_views = &data.series[1].points;
        assert_eq!(visitors.len(), 30);
        assert_eq!(page_views.len(), 30);
        for (v, pv) in visitors.iter().zip(page_views) {
            assert!(pv[1] >= v[1] * 2.0 - 1.0);
            assert!(pv[1] <= v[1] * 3.0 + 1.0);
        }
    }

    #[test]
    fn test_sales_grid_range() {
        let data = heat_grid(HeatmapKind::Sales, &mut rng());
        assert_eq!(data.cells.len(), 25);
        assert_eq!(data.x_labels.len(), 5);
        assert_eq!(data.y_labels.len(), 5);
        for cell in &data.cells {
            assert!(cell.value >= 100.0 && cell.value < 1100.0);
            assert_eq!(cell.value.fract(), 0.0);
        }
    }

    #[test]
    fn test_correlation_grid_diagonal() {
        let data = heat_grid(HeatmapKind::Correlation, &mut rng());
        assert_eq!(data.cells.len(), 36);
        for cell in &data.cells {
            if cell.col == cell.row {
                assert_eq!(cell.value, 1.0);
            } else {
                assert!(cell.value >= -1.0 && cell.value <= 1.0);
            }
        }
    }

    #[test]
    fn test_github_grid_range() {
        let data = heat_grid(HeatmapKind::Github, &mut rng());
        assert_eq!(data.cells.len(), 48);
        for cell in &data.cells {
            assert!(cell.value >= 0.0 && cell.value <= 40.0);
        }
    }

    #[test]
    fn test_temperature_grid_shape() {
        let data = heat_grid(HeatmapKind::Temperature, &mut rng());
        assert_eq!(data.cells.len(), 120);
        assert_eq!(data.x_labels[0], "0:00");
        assert_eq!(data.x_labels[23], "23:00");
    }

    #[test]
    fn test_stream_seed_spacing() {
        let seeded = stream_seed(50, 1000.0, &mut rng());
        assert_eq!(seeded.len(), 50);
        assert_eq!(seeded[0].time, 950.0);
        assert_eq!(seeded[49].time, 999.0);
        for sample in &seeded {
            for (s, value) in sample.values.iter().enumerate() {
                assert!((value - STREAM_BASES[s]).abs() <= STREAM_SPREADS[s] / 2.0);
            }
        }
    }

    #[test]
    fn test_stream_next_never_negative() {
        let mut rng = rng();
        let mut sample = StreamSample {
            time: 0.0,
            values: [0.5, 0.5, 0.5],
        };
        for i in 1..200 {
            sample = stream_next(&sample, i as f64, 2.0, &mut rng);
            for value in sample.values {
                assert!(value >= 0.0);
            }
        }
    }

    #[test]
    fn test_fixed_tables() {
        assert_eq!(weekly_sales().series[0].values.len(), 7);
        assert_eq!(monthly_sales_values().len(), 7);
        assert_eq!(weekly_traffic().series.len(), 2);
        assert_eq!(sales_share().len(), 5);
        let (indicators, series) = skill_radar();
        assert_eq!(indicators.len(), 6);
        assert_eq!(series.len(), 2);
        assert_eq!(study_scores().len(), 11);
    }

    #[test]
    fn test_step_tables_aligned() {
        for kind in StepKind::ALL {
            let data = step_profile(kind);
            assert_eq!(data.series.len(), 2);
            for series in &data.series {
                assert_eq!(series.values.len(), data.categories.len());
                assert!(series.color.is_some());
            }
        }
    }

    #[test]
    fn test_stacked_tables_aligned() {
        for kind in StackedKind::ALL {
            let data = stacked_series(kind);
            assert!(data.series.len() >= 4);
            for series in &data.series {
                assert_eq!(series.values.len(), data.categories.len());
            }
        }
        let revenue = stacked_series(StackedKind::Revenue);
        assert_eq!(revenue.max_total(), 260.0 + 210.0 + 110.0 + 55.0);
    }

    #[test]
    fn test_tree_shapes() {
        let organization = tree(TreeKind::Organization);
        assert_eq!(organization.count_nodes(), 24);
        assert_eq!(organization.count_leaves(), 14);
        assert_eq!(organization.max_depth(), 4);

        let family = tree(TreeKind::Family);
        assert_eq!(family.count_nodes(), 11);
        assert_eq!(family.count_leaves(), 5);

        let files = tree(TreeKind::FileSystem);
        assert_eq!(files.count_nodes(), 19);
        assert_eq!(files.max_depth(), 4);

        let mind_map = tree(TreeKind::MindMap);
        assert_eq!(mind_map.count_nodes(), 19);
        assert_eq!(mind_map.count_leaves(), 11);
    }
}
