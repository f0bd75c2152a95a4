//! Error types for the Monte Carlo engine.

use pricer_models::InstrumentError;
use thiserror::Error;

use super::config::{MAX_PATHS, MAX_STEPS};

/// Configuration error for the simulation settings.
///
/// Raised when a [`SimulationConfig`](super::SimulationConfig) is built or
/// validated with out-of-range values.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Path count outside [1, MAX_PATHS].
    #[error("Invalid path count {0}: must be in range [1, {max}]", max = MAX_PATHS)]
    InvalidPathCount(usize),

    /// Step count outside [1, MAX_STEPS].
    #[error("Invalid step count {0}: must be in range [1, {max}]", max = MAX_STEPS)]
    InvalidStepCount(usize),

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

/// Error returned by the pricing entry points.
///
/// Inputs are never clamped: any field outside its domain is reported with
/// its name and offending value.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum PricingError {
    /// A snapshot or option field violates its domain.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Field name, e.g. "volatility" or "strike".
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Simulation settings are out of range.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The estimate overflowed `f64` for otherwise valid inputs.
    #[error("Estimate is not finite: {value}")]
    NonFinite {
        /// The overflowed estimate.
        value: f64,
    },
}

impl PricingError {
    /// Shorthand for [`PricingError::InvalidParameter`].
    #[inline]
    pub fn invalid(name: &'static str, value: f64) -> Self {
        PricingError::InvalidParameter { name, value }
    }
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        let value = match err {
            InstrumentError::InvalidStrike { strike } => strike,
            InstrumentError::InvalidMaturity { maturity } => maturity,
            InstrumentError::InvalidRate { rate } => rate,
            InstrumentError::InvalidSpot { spot } => spot,
            InstrumentError::InvalidMoneyness { strike_pct } => strike_pct,
            InstrumentError::UnknownVariant { .. } => f64::NAN,
        };
        PricingError::invalid(err.field(), value)
    }
}
