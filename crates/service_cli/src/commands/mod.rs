//! CLI command implementations
//!
//! Each submodule implements a specific CLI command and returns the rendered
//! output; `main` prints it.

pub mod calibrate;
pub mod check;
pub mod price;

use pricer_core::market_data::CalibrationCache;
use pricer_core::MarketSnapshot;
use tracing::debug;

use crate::cli::DataArgs;
use crate::config::CliConfig;
use crate::source::CsvFileSource;
use crate::{CliError, Result};

/// Loads and calibrates the CSV named by `data` through a TTL cache.
pub(crate) fn load_snapshot(config: &CliConfig, data: &DataArgs) -> Result<MarketSnapshot> {
    if !data.data.exists() {
        return Err(CliError::FileNotFound(data.data.display().to_string()));
    }

    let cache = CalibrationCache::new(CsvFileSource::new(data.data.clone()))
        .with_ttl(config.cache_ttl())
        .with_window(config.lookback_window());

    let snapshot = cache.get_or_calibrate(&data.symbol)?;
    debug!(
        symbol = %data.symbol,
        spot = snapshot.spot(),
        volatility = snapshot.volatility(),
        "calibrated"
    );
    Ok(snapshot)
}
