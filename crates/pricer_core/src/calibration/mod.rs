//! Historical calibration of the GBM model.
//!
//! Converts a series of closing prices into a [`MarketSnapshot`]:
//!
//! ```text
//! r_t   = ln(P_t / P_{t-1})          t = 1..n-1
//! S0    = P_{n-1}
//! mu    = mean(r) × 252
//! sigma = stdev(r) × √252            (sample standard deviation)
//! ```
//!
//! The annualisation assumes 252 trading periods per year regardless of the
//! calendar span of the input.

mod snapshot;

pub use snapshot::{MarketSnapshot, DEGENERATE_VOLATILITY};

use tracing::{debug, warn};

use crate::market_data::{DataError, PriceSeries};

/// Trading periods per year used for annualisation.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Minimum number of prices needed to form one log-return.
pub const MIN_OBSERVATIONS: usize = 2;

/// Calibrates a snapshot from a price series.
///
/// # Errors
///
/// - `DataError::InsufficientData` if the series has fewer than 2 prices
/// - `DataError::MalformedPrice` if any price is non-finite or non-positive
///
/// A series with no price dispersion yields a degenerate snapshot
/// (`volatility() == 0.0`) rather than an error. Estimates below
/// [`DEGENERATE_VOLATILITY`], which are rounding noise from e.g. a constant
/// growth series, are snapped to zero.
///
/// # Examples
///
/// ```
/// use pricer_core::calibration::calibrate;
/// use pricer_core::market_data::PriceSeries;
///
/// let series = PriceSeries::from_closes(vec![100.0]);
/// assert!(calibrate(&series).is_err());
/// ```
pub fn calibrate(series: &PriceSeries) -> Result<MarketSnapshot, DataError> {
    calibrate_closes(series.as_slice())
}

/// Calibrates a snapshot from bare closing prices in chronological order.
///
/// See [`calibrate`] for the error contract.
pub fn calibrate_closes(closes: &[f64]) -> Result<MarketSnapshot, DataError> {
    if closes.len() < MIN_OBSERVATIONS {
        return Err(DataError::InsufficientData {
            required: MIN_OBSERVATIONS,
            actual: closes.len(),
        });
    }

    if let Some((index, &value)) = closes
        .iter()
        .enumerate()
        .find(|(_, p)| !p.is_finite() || **p <= 0.0)
    {
        return Err(DataError::MalformedPrice { index, value });
    }

    let returns: Vec<f64> = closes.windows(2).map(|w| (w[1] / w[0]).ln()).collect();
    let n = returns.len() as f64;

    let mean = returns.iter().sum::<f64>() / n;
    let variance = if returns.len() > 1 {
        returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (n - 1.0)
    } else {
        0.0
    };

    let spot = closes[closes.len() - 1];
    let drift = mean * TRADING_DAYS_PER_YEAR;
    let mut volatility = variance.sqrt() * TRADING_DAYS_PER_YEAR.sqrt();
    if volatility < DEGENERATE_VOLATILITY {
        volatility = 0.0;
    }

    let snapshot = MarketSnapshot::new(spot, drift, volatility).with_observations(returns.len());

    if snapshot.is_degenerate() {
        warn!(
            observations = returns.len(),
            spot, "calibrated volatility is zero; pricing will be deterministic"
        );
    } else {
        debug!(spot, drift, volatility, observations = returns.len(), "calibrated snapshot");
    }

    Ok(snapshot)
}
