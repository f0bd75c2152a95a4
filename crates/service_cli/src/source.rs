//! CSV file adapter for [`HistoricalDataSource`].
//!
//! Files need a header row with `date` (YYYY-MM-DD) and `close` columns in
//! chronological order. Other columns are ignored.
//!
//! ```text
//! date,open,close
//! 2024-01-02,185.6,185.64
//! 2024-01-03,184.2,184.25
//! ```

use std::io::Read;
use std::path::{Path, PathBuf};

use pricer_core::market_data::{
    DataError, HistoricalDataSource, LookbackWindow, PricePoint, PriceSeries,
};
use tracing::debug;

/// Parses a closing-price CSV from any reader.
///
/// # Errors
///
/// - `DataError::SourceUnavailable` for unreadable or malformed rows, with
///   the CSV position in the message
/// - `DataError::Unordered` if dates are not strictly increasing
pub fn read_price_series<R: Read>(reader: R) -> Result<PriceSeries, DataError> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let points = csv_reader
        .deserialize::<PricePoint>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| DataError::source_unavailable(format!("invalid CSV: {}", e)))?;

    PriceSeries::new(points)
}

/// Historical data source backed by one CSV file.
///
/// The file holds a single instrument; the requested symbol only labels log
/// output.
#[derive(Clone, Debug)]
pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    /// Creates a source reading `path` on every request.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoricalDataSource for CsvFileSource {
    fn closing_prices(
        &self,
        symbol: &str,
        window: LookbackWindow,
    ) -> Result<PriceSeries, DataError> {
        let file = std::fs::File::open(&self.path).map_err(|e| {
            DataError::source_unavailable(format!("{}: {}", self.path.display(), e))
        })?;

        let series = read_price_series(file)?;
        let windowed = window.apply(&series);
        debug!(
            symbol,
            path = %self.path.display(),
            rows = series.len(),
            in_window = windowed.len(),
            "loaded closing prices"
        );
        Ok(windowed)
    }
}
