//! Calibrated model parameters.

/// Volatility below which a snapshot counts as degenerate.
pub const DEGENERATE_VOLATILITY: f64 = 1e-12;

/// Model parameters derived from a historical price series.
///
/// Holds the last observed spot price together with the annualised mean
/// (`drift`) and standard deviation (`volatility`) of daily log-returns.
/// Snapshots are immutable once built.
///
/// The drift is informational: risk-neutral pricing replaces it with the
/// risk-free rate.
///
/// # Examples
///
/// ```
/// use pricer_core::MarketSnapshot;
///
/// let snapshot = MarketSnapshot::new(100.0, 0.08, 0.2);
/// assert_eq!(snapshot.spot(), 100.0);
/// assert!(!snapshot.is_degenerate());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketSnapshot {
    spot: f64,
    drift: f64,
    volatility: f64,
    observations: usize,
}

impl MarketSnapshot {
    /// Creates a snapshot from known parameters.
    ///
    /// No validation is performed here; pricing entry points reject
    /// snapshots that violate their invariants.
    ///
    /// # Arguments
    ///
    /// * `spot` - Last observed price (S₀)
    /// * `drift` - Annualised mean log-return (μ)
    /// * `volatility` - Annualised log-return standard deviation (σ)
    #[inline]
    pub fn new(spot: f64, drift: f64, volatility: f64) -> Self {
        Self {
            spot,
            drift,
            volatility,
            observations: 0,
        }
    }

    /// Records the number of log-returns the estimate is based on.
    #[inline]
    pub fn with_observations(mut self, observations: usize) -> Self {
        self.observations = observations;
        self
    }

    /// Last observed spot price (S₀).
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Annualised mean log-return (μ).
    #[inline]
    pub fn drift(&self) -> f64 {
        self.drift
    }

    /// Annualised volatility (σ).
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Number of log-returns used for calibration (0 if set by hand).
    #[inline]
    pub fn observations(&self) -> usize {
        self.observations
    }

    /// Returns `true` when the volatility is zero up to
    /// [`DEGENERATE_VOLATILITY`].
    ///
    /// Degenerate snapshots still price deterministically.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        (0.0..DEGENERATE_VOLATILITY).contains(&self.volatility)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_tolerance() {
        assert!(MarketSnapshot::new(100.0, 0.0, 0.0).is_degenerate());
        assert!(MarketSnapshot::new(100.0, 0.0, 1e-17).is_degenerate());
        assert!(!MarketSnapshot::new(100.0, 0.0, 1e-6).is_degenerate());
        assert!(!MarketSnapshot::new(100.0, 0.0, -1.0).is_degenerate());
    }
}
