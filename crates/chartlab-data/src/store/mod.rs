//! Snapshot store for the random demo datasets
//!
//! Every reader of a dataset sees the same generated snapshot until something
//! explicitly refreshes it, so a statistics strip can never drift from the
//! chart it sits under.

use std::sync::Arc;

use ahash::AHashMap;
use parking_lot::{Mutex, RwLock};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::datasets::{
    CandleDataset, CandlePeriod, HeatmapDataset, HeatmapKind, StockSymbol, TimeSeriesDataset,
    TimeSeriesKind,
};
use crate::{generators, DataError};

/// Key of one generated dataset variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetId {
    Candles {
        symbol: StockSymbol,
        period: CandlePeriod,
    },
    Heatmap(HeatmapKind),
    TimeSeries(TimeSeriesKind),
}

/// One generated dataset, type-tagged
#[derive(Debug, Clone)]
pub enum Snapshot {
    Candles(CandleDataset),
    Heatmap(HeatmapDataset),
    TimeSeries(TimeSeriesDataset),
}

impl Snapshot {
    fn shape_name(&self) -> &'static str {
        match self {
            Snapshot::Candles(_) => "candle",
            Snapshot::Heatmap(_) => "heatmap",
            Snapshot::TimeSeries(_) => "time-series",
        }
    }

    pub fn candles(&self) -> Result<&CandleDataset, DataError> {
        match self {
            Snapshot::Candles(data) => Ok(data),
            other => Err(DataError::WrongShape {
                expected: "candle",
                actual: other.shape_name(),
            }),
        }
    }

    pub fn heatmap(&self) -> Result<&HeatmapDataset, DataError> {
        match self {
            Snapshot::Heatmap(data) => Ok(data),
            other => Err(DataError::WrongShape {
                expected: "heatmap",
                actual: other.shape_name(),
            }),
        }
    }

    pub fn time_series(&self) -> Result<&TimeSeriesDataset, DataError> {
        match self {
            Snapshot::TimeSeries(data) => Ok(data),
            other => Err(DataError::WrongShape {
                expected: "time-series",
                actual: other.shape_name(),
            }),
        }
    }
}

/// Generate-once cache keyed by [`DatasetId`]
pub struct DatasetStore {
    snapshots: RwLock<AHashMap<DatasetId, Arc<Snapshot>>>,
    rng: Mutex<StdRng>,
}

impl DatasetStore {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic store for tests
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            snapshots: RwLock::new(AHashMap::new()),
            rng: Mutex::new(rng),
        }
    }

    /// Cached snapshot, generating on first use
    pub fn snapshot(&self, id: DatasetId) -> Arc<Snapshot> {
        if let Some(found) = self.snapshots.read().get(&id).cloned() {
            return found;
        }
        self.refresh(id)
    }

    /// Drop any cached copy and generate anew
    pub fn refresh(&self, id: DatasetId) -> Arc<Snapshot> {
        let snapshot = Arc::new(self.generate(id));
        self.snapshots.write().insert(id, snapshot.clone());
        info!("Refreshed dataset {:?}", id);
        snapshot
    }

    /// Read-only peek that never triggers generation
    pub fn cached(&self, id: DatasetId) -> Result<Arc<Snapshot>, DataError> {
        self.snapshots
            .read()
            .get(&id)
            .cloned()
            .ok_or_else(|| DataError::Missing(format!("{:?}", id)))
    }

    pub fn clear(&self) {
        self.snapshots.write().clear();
    }

    fn generate(&self, id: DatasetId) -> Snapshot {
        let mut rng = self.rng.lock();
        match id {
            DatasetId::Candles { symbol, period } => {
                Snapshot::Candles(generators::stock_candles(symbol, period, &mut *rng))
            }
            DatasetId::Heatmap(kind) => Snapshot::Heatmap(generators::heat_grid(kind, &mut *rng)),
            DatasetId::TimeSeries(kind) => {
                Snapshot::TimeSeries(generators::time_series(kind, &mut *rng))
            }
        }
    }
}

impl Default for DatasetStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_is_stable_until_refreshed() {
        let store = DatasetStore::with_seed(7);
        let id = DatasetId::Heatmap(HeatmapKind::Sales);
        let first = store.snapshot(id);
        let second = store.snapshot(id);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_refresh_replaces_snapshot() {
        let store = DatasetStore::with_seed(7);
        let id = DatasetId::Candles {
            symbol: StockSymbol::Aapl,
            period: CandlePeriod::OneMonth,
        };
        let first = store.snapshot(id);
        let second = store.refresh(id);
        assert!(!Arc::ptr_eq(&first, &second));
        assert!(Arc::ptr_eq(&second, &store.snapshot(id)));
    }

    #[test]
    fn test_cached_never_generates() {
        let store = DatasetStore::with_seed(7);
        let id = DatasetId::TimeSeries(TimeSeriesKind::Weather);
        assert!(store.cached(id).is_err());
        store.snapshot(id);
        assert!(store.cached(id).is_ok());
        store.clear();
        assert!(store.cached(id).is_err());
    }

    #[test]
    fn test_shape_accessors() {
        let store = DatasetStore::with_seed(7);
        let snapshot = store.snapshot(DatasetId::Heatmap(HeatmapKind::Correlation));
        assert!(snapshot.heatmap().is_ok());
        assert!(matches!(
            snapshot.candles(),
            Err(DataError::WrongShape { expected: "candle", .. })
        ));
    }
}
