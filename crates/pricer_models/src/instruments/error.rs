//! Instrument error types.
//!
//! This module provides structured error handling for option
//! specification validation.

use thiserror::Error;

/// Instrument-related errors.
///
/// # Variants
/// - `InvalidStrike`: Strike price is non-positive or not finite
/// - `InvalidMaturity`: Maturity is non-positive or not finite
/// - `InvalidRate`: Risk-free rate is not finite
/// - `InvalidSpot`: Reference spot for a moneyness strike is invalid
/// - `InvalidMoneyness`: Strike percentage is non-positive or not finite
/// - `UnknownVariant`: Unrecognised style or right name when parsing
///
/// # Examples
/// ```
/// use pricer_models::instruments::InstrumentError;
///
/// let err = InstrumentError::InvalidStrike { strike: -100.0 };
/// assert!(format!("{}", err).contains("-100"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Invalid strike price.
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid time to maturity.
    #[error("Invalid maturity: T = {maturity}")]
    InvalidMaturity {
        /// The invalid maturity value
        maturity: f64,
    },

    /// Non-finite risk-free rate.
    #[error("Invalid risk-free rate: r = {rate}")]
    InvalidRate {
        /// The invalid rate value
        rate: f64,
    },

    /// Invalid reference spot price.
    #[error("Invalid spot: S = {spot}")]
    InvalidSpot {
        /// The invalid spot value
        spot: f64,
    },

    /// Invalid strike expressed as a fraction of spot.
    #[error("Invalid moneyness: {strike_pct}")]
    InvalidMoneyness {
        /// The invalid fraction
        strike_pct: f64,
    },

    /// Unrecognised enum name.
    #[error("Unknown {kind}: {value}")]
    UnknownVariant {
        /// What was being parsed (e.g. "option style")
        kind: &'static str,
        /// The rejected input
        value: String,
    },
}

impl InstrumentError {
    /// Name of the offending field, for callers that report parameter errors.
    pub fn field(&self) -> &'static str {
        match self {
            InstrumentError::InvalidStrike { .. } => "strike",
            InstrumentError::InvalidMaturity { .. } => "maturity",
            InstrumentError::InvalidRate { .. } => "rate",
            InstrumentError::InvalidSpot { .. } => "spot",
            InstrumentError::InvalidMoneyness { .. } => "strike_pct",
            InstrumentError::UnknownVariant { kind, .. } => kind,
        }
    }
}
