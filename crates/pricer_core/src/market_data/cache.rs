//! Calibration memoisation with time-to-live invalidation.
//!
//! [`CalibrationCache`] keeps the last snapshot per symbol and re-calibrates
//! once the entry is older than its time-to-live (24 hours by default).
//!
//! The cache is an explicit collaborator owned by the caller; it is safe to
//! share between threads.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use super::error::DataError;
use super::source::{HistoricalDataSource, LookbackWindow};
use crate::calibration::{calibrate, MarketSnapshot};

/// Default time-to-live for cached calibrations.
pub const DEFAULT_CACHE_TTL_HOURS: i64 = 24;

#[derive(Clone, Copy, Debug)]
struct CacheEntry {
    snapshot: MarketSnapshot,
    calibrated_at: DateTime<Utc>,
}

/// Per-symbol cache of calibrated snapshots.
///
/// # Examples
///
/// ```
/// use chrono::Duration;
/// use pricer_core::market_data::{CalibrationCache, PriceSeries};
/// use pricer_core::market_data::source::InMemorySource;
///
/// let mut source = InMemorySource::new();
/// source.insert("AAPL", PriceSeries::from_closes(vec![100.0, 101.0, 99.0]));
///
/// let cache = CalibrationCache::new(source).with_ttl(Duration::hours(1));
/// let first = cache.get_or_calibrate("AAPL").unwrap();
/// let second = cache.get_or_calibrate("AAPL").unwrap();
///
/// assert_eq!(first, second);
/// assert_eq!(cache.len(), 1);
/// ```
pub struct CalibrationCache<S: HistoricalDataSource> {
    source: S,
    ttl: Duration,
    window: LookbackWindow,
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl<S: HistoricalDataSource> CalibrationCache<S> {
    /// Creates a cache over `source` with the default TTL and a one-year window.
    pub fn new(source: S) -> Self {
        Self {
            source,
            ttl: Duration::hours(DEFAULT_CACHE_TTL_HOURS),
            window: LookbackWindow::one_year(),
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Sets the time-to-live for entries.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Sets the lookback window requested from the source.
    pub fn with_window(mut self, window: LookbackWindow) -> Self {
        self.window = window;
        self
    }

    /// Time-to-live for entries.
    #[inline]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Lookback window requested from the source.
    #[inline]
    pub fn window(&self) -> LookbackWindow {
        self.window
    }

    /// The wrapped data source.
    #[inline]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the cached snapshot for `symbol`, calibrating on miss or expiry.
    ///
    /// # Errors
    ///
    /// Propagates `DataError` from the source or the calibrator. Failures
    /// are not cached.
    pub fn get_or_calibrate(&self, symbol: &str) -> Result<MarketSnapshot, DataError> {
        self.get_or_calibrate_at(symbol, Utc::now())
    }

    /// Same as [`get_or_calibrate`](Self::get_or_calibrate) with an explicit clock.
    pub fn get_or_calibrate_at(
        &self,
        symbol: &str,
        now: DateTime<Utc>,
    ) -> Result<MarketSnapshot, DataError> {
        {
            let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(entry) = entries.get(symbol) {
                if now - entry.calibrated_at < self.ttl {
                    debug!(symbol, "calibration cache hit");
                    return Ok(entry.snapshot);
                }
            }
        }

        debug!(symbol, window_days = self.window.len_days(), "calibration cache miss");
        let series = self.source.closing_prices(symbol, self.window)?;
        let snapshot = calibrate(&series)?;

        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(
            symbol.to_string(),
            CacheEntry {
                snapshot,
                calibrated_at: now,
            },
        );

        Ok(snapshot)
    }

    /// Drops the entry for `symbol`. Returns `true` if one existed.
    pub fn invalidate(&self, symbol: &str) -> bool {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(symbol)
            .is_some()
    }

    /// Drops every entry.
    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Number of cached symbols, expired entries included.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
