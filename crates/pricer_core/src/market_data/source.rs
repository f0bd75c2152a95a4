//! Historical data source collaborator.
//!
//! The pricer never fetches market data itself. Callers provide an
//! implementation of [`HistoricalDataSource`]; the workspace ships a CSV file
//! adapter in `service_cli` and the [`InMemorySource`] used by tests and
//! embedding applications.

use std::collections::HashMap;

use chrono::{Duration, NaiveDate};

use super::error::DataError;
use super::series::PriceSeries;

/// Default trailing window: one calendar year.
pub const DEFAULT_LOOKBACK_DAYS: u32 = 365;

/// Trailing calendar-day window ending at the most recent observation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LookbackWindow {
    days: u32,
}

impl LookbackWindow {
    /// Creates a window of `days` calendar days.
    #[inline]
    pub fn days(days: u32) -> Self {
        Self { days }
    }

    /// One calendar year.
    #[inline]
    pub fn one_year() -> Self {
        Self::days(DEFAULT_LOOKBACK_DAYS)
    }

    /// Window length in calendar days.
    #[inline]
    pub fn len_days(&self) -> u32 {
        self.days
    }

    /// First date inside the window that ends on `end`.
    ///
    /// Windows reaching past the earliest representable date start there.
    pub fn start_from(&self, end: NaiveDate) -> NaiveDate {
        end.checked_sub_signed(Duration::days(i64::from(self.days)))
            .unwrap_or(NaiveDate::MIN)
    }

    /// Restricts a dated series to the window ending at its last observation.
    pub fn apply(&self, series: &PriceSeries) -> PriceSeries {
        match series.last_date() {
            Some(end) => series.since(self.start_from(end)),
            None => series.clone(),
        }
    }
}

impl Default for LookbackWindow {
    fn default() -> Self {
        Self::one_year()
    }
}

/// Source of chronologically ordered closing prices.
///
/// Implementations own transport concerns (files, HTTP, databases) and any
/// retry policy; the calibrator only reads the returned series.
pub trait HistoricalDataSource: Send + Sync {
    /// Returns closing prices for `symbol` over the trailing `window`.
    ///
    /// # Errors
    ///
    /// Returns `DataError::SourceUnavailable` when the symbol is unknown or
    /// the transport fails.
    fn closing_prices(&self, symbol: &str, window: LookbackWindow)
        -> Result<PriceSeries, DataError>;
}

/// Data source backed by series held in memory.
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::{HistoricalDataSource, LookbackWindow, PriceSeries};
/// use pricer_core::market_data::source::InMemorySource;
///
/// let mut source = InMemorySource::new();
/// source.insert("AAPL", PriceSeries::from_closes(vec![100.0, 101.0]));
///
/// let series = source.closing_prices("AAPL", LookbackWindow::one_year()).unwrap();
/// assert_eq!(series.len(), 2);
/// assert!(source.closing_prices("MSFT", LookbackWindow::one_year()).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct InMemorySource {
    series: HashMap<String, PriceSeries>,
}

impl InMemorySource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers or replaces the series for `symbol`.
    pub fn insert(&mut self, symbol: impl Into<String>, series: PriceSeries) {
        self.series.insert(symbol.into(), series);
    }
}

impl HistoricalDataSource for InMemorySource {
    fn closing_prices(
        &self,
        symbol: &str,
        window: LookbackWindow,
    ) -> Result<PriceSeries, DataError> {
        self.series
            .get(symbol)
            .map(|series| window.apply(series))
            .ok_or_else(|| DataError::source_unavailable(format!("unknown symbol {}", symbol)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market_data::PricePoint;

    fn dated_series() -> PriceSeries {
        let start = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
        let points = (0..800)
            .map(|i| PricePoint::new(start + Duration::days(i), 100.0 + i as f64 * 0.01))
            .collect();
        PriceSeries::new(points).unwrap()
    }

    #[test]
    fn test_lookback_default_is_one_year() {
        assert_eq!(LookbackWindow::default().len_days(), 365);
    }

    #[test]
    fn test_start_from() {
        let end = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let start = LookbackWindow::days(29).start_from(end);
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
    }

    #[test]
    fn test_huge_window_keeps_everything() {
        let series = dated_series();
        let window = LookbackWindow::days(u32::MAX);

        let end = series.last_date().unwrap();
        assert_eq!(window.start_from(end), NaiveDate::MIN);
        assert_eq!(window.apply(&series), series);
    }

    #[test]
    fn test_apply_trims_dated_series() {
        let series = dated_series();
        let trimmed = LookbackWindow::one_year().apply(&series);

        // 365 days back from the last date, inclusive of both ends
        assert_eq!(trimmed.len(), 366);
        assert_eq!(trimmed.last_close(), series.last_close());
    }

    #[test]
    fn test_apply_leaves_undated_series() {
        let series = PriceSeries::from_closes(vec![1.0, 2.0, 3.0]);
        assert_eq!(LookbackWindow::days(1).apply(&series), series);
    }

    #[test]
    fn test_in_memory_unknown_symbol() {
        let source = InMemorySource::new();
        let err = source
            .closing_prices("XYZ", LookbackWindow::one_year())
            .unwrap_err();
        assert!(matches!(err, DataError::SourceUnavailable(_)));
    }
}
