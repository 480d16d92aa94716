//! Synthetic datasets and data plumbing for the chart gallery

pub mod datasets;
pub mod generators;
pub mod store;
pub mod window;

use thiserror::Error;

// Re-exports
pub use datasets::{
    Candle, CandleDataset, CandlePeriod, CategoryDataset, GaugeKind, GaugePreset, HeatCell,
    HeatmapDataset, HeatmapKind, PieSlice, RadarIndicator, Series, StackedKind, StepKind,
    StockSymbol, StreamSample, TimeSeries, TimeSeriesDataset, TimeSeriesKind, TreeKind, TreeNode,
};
pub use store::{DatasetId, DatasetStore, Snapshot};
pub use window::SlidingWindow;

/// Errors that can occur in data operations
#[derive(Error, Debug)]
pub enum DataError {
    #[error("no cached snapshot for {0}")]
    Missing(String),

    #[error("snapshot holds {actual} data, expected {expected}")]
    WrongShape {
        expected: &'static str,
        actual: &'static str,
    },
}
