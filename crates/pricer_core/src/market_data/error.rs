//! Market data error types.
//!
//! This module provides structured error handling for historical price
//! series construction, data source lookups and calibration.

use thiserror::Error;

/// Historical market data errors.
///
/// Raised when a price series is too short, malformed, or cannot be
/// obtained from its source. These errors are surfaced to the caller and
/// never retried inside the pricer.
///
/// # Variants
///
/// - `InsufficientData`: Fewer observations than the operation requires
/// - `MalformedPrice`: Non-finite or non-positive closing price
/// - `Unordered`: Observation dates are not strictly increasing
/// - `SourceUnavailable`: The data source could not provide the series
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::DataError;
///
/// let err = DataError::InsufficientData { required: 2, actual: 1 };
/// assert!(format!("{}", err).contains("need 2"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataError {
    /// Not enough observations for the requested operation.
    #[error("Insufficient data: got {actual} price points, need {required}")]
    InsufficientData {
        /// Minimum number of observations required
        required: usize,
        /// Number of observations provided
        actual: usize,
    },

    /// Closing price that cannot produce a log-return.
    #[error("Malformed price at index {index}: {value}")]
    MalformedPrice {
        /// Position of the offending observation
        index: usize,
        /// The offending value
        value: f64,
    },

    /// Observation dates not strictly increasing.
    #[error("Price series out of chronological order at index {index}")]
    Unordered {
        /// Position of the first out-of-order observation
        index: usize,
    },

    /// The collaborator failed to deliver a series.
    #[error("Data source unavailable: {0}")]
    SourceUnavailable(String),
}

impl DataError {
    /// Convenience constructor for source failures.
    pub fn source_unavailable(msg: impl Into<String>) -> Self {
        Self::SourceUnavailable(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_data_display() {
        let err = DataError::InsufficientData {
            required: 2,
            actual: 1,
        };
        assert_eq!(
            format!("{}", err),
            "Insufficient data: got 1 price points, need 2"
        );
    }

    #[test]
    fn test_malformed_price_display() {
        let err = DataError::MalformedPrice {
            index: 3,
            value: -1.5,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("index 3"));
        assert!(msg.contains("-1.5"));
    }

    #[test]
    fn test_source_unavailable_constructor() {
        let err = DataError::source_unavailable("file not found");
        assert_eq!(err, DataError::SourceUnavailable("file not found".into()));
    }
}
