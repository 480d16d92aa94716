//! View system for the chart demo gallery

mod demo_view;
mod viewport;
pub mod charts;

pub use demo_view::{DemoView, DemoViewId};
pub use viewport::Viewport;
pub use charts::{
    AreaChartView, BarChartView, CandlestickView, GaugeView, HeatmapView, LineChartView,
    PieChartView, RadarChartView, RealtimeLineView, ScatterChartView, StackedLineView,
    StepLineView, TimeSeriesLineView, TreeView,
};

use std::sync::Arc;

use parking_lot::RwLock;

use chartlab_core::{EventBus, GalleryState};
use chartlab_data::DatasetStore;

/// Hovered data information
#[derive(Default, Clone)]
pub struct HoveredData {
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub view_id: Option<DemoViewId>,
}

/// Context passed to views during rendering
#[derive(Clone)]
pub struct ViewerContext {
    /// Shared gallery state (locale, theme, settings)
    pub state: Arc<GalleryState>,

    /// Event bus for cross-view notifications
    pub events: Arc<EventBus>,

    /// Dataset snapshots shared by the demos and their statistic strips
    pub store: Arc<DatasetStore>,

    /// Currently hovered data, shown in the shell status bar
    pub hovered_data: Arc<RwLock<HoveredData>>,
}

impl ViewerContext {
    pub fn new(state: Arc<GalleryState>, events: Arc<EventBus>, store: Arc<DatasetStore>) -> Self {
        Self {
            state,
            events,
            store,
            hovered_data: Arc::new(RwLock::new(HoveredData::default())),
        }
    }
}
