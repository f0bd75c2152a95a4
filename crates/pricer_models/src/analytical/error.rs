//! Error types for analytical pricing operations.

use thiserror::Error;

/// Analytical pricing errors.
///
/// # Variants
/// - `InvalidVolatility`: Negative or non-finite volatility
/// - `InvalidSpot`: Non-positive spot price
/// - `UnsupportedStyle`: No closed form for the requested option style
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("σ"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Invalid volatility.
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Invalid spot price.
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Option style without a closed-form price.
    #[error("No closed-form price for {style} options")]
    UnsupportedStyle {
        /// Name of the style
        style: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = AnalyticalError::InvalidSpot { spot: 0.0 };
        assert_eq!(format!("{}", err), "Invalid spot price: S = 0");

        let err = AnalyticalError::UnsupportedStyle {
            style: "asian".to_string(),
        };
        assert_eq!(format!("{}", err), "No closed-form price for asian options");
    }
}
