//! Chart demo implementations
//!
//! Each module holds one dockable demo view. The views pull their data
//! from [`chartlab_data`] (fixed catalogs or store snapshots), keep their
//! own configuration, and draw with `egui_plot` or the raw painter.

pub mod utils;

mod area;
mod bar;
mod candlestick;
mod gauge;
mod heatmap;
mod line;
mod pie;
mod radar;
mod realtime;
mod scatter;
mod stacked;
mod step;
mod timeseries;
mod tree;

pub use area::AreaChartView;
pub use bar::BarChartView;
pub use candlestick::{CandlestickConfig, CandlestickView};
pub use gauge::{GaugeConfig, GaugeStyle, GaugeTheme, GaugeView};
pub use heatmap::{HeatmapConfig, HeatmapView};
pub use line::LineChartView;
pub use pie::PieChartView;
pub use radar::RadarChartView;
pub use realtime::{RealtimeConfig, RealtimeLineView, StreamInterval};
pub use scatter::ScatterChartView;
pub use stacked::{StackMode, StackedConfig, StackedLineView};
pub use step::{StepLineConfig, StepLineView, StepMode};
pub use timeseries::{TimeFormat, TimeSeriesConfig, TimeSeriesLineView};
pub use tree::{TreeConfig, TreeLayout, TreeLineStyle, TreeOrientation, TreeScheme, TreeView};
