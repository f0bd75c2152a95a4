//! Path generation for Monte Carlo simulation.
//!
//! Two modes share the exact log-space GBM transition of
//! [`GbmDynamics`]:
//!
//! - **Terminal-only**: one draw per trial samples S(T) directly. Used for
//!   European options; no intermediate prices exist.
//! - **Full-path**: `num_steps` draws per trial with dt = T / num_steps. The
//!   realised path has `num_steps + 1` prices, S₀ first. Used for Asian
//!   options, where the step count sets the averaging resolution only.
//!
//! Every draw comes fresh from the [`NormalSource`]; none is reused across
//! steps or trials.

use pricer_core::MarketSnapshot;
use pricer_models::{GbmDynamics, OptionSpec};

use super::config::SimulationConfig;
use super::error::PricingError;
use super::pricer::prepare;
use crate::path_dependent::PathObserver;
use crate::rng::NormalSource;

/// A materialised price trajectory.
///
/// Holds `num_steps + 1` strictly positive prices; the first is S₀.
///
/// # Examples
///
/// ```rust
/// use pricer_models::GbmDynamics;
/// use pricer_pricing::mc::generate_path;
/// use pricer_pricing::rng::PricerRng;
///
/// let gbm = GbmDynamics::new(100.0, 0.04, 0.2);
/// let path = generate_path(&gbm, 1.0, 12, &mut PricerRng::from_seed(1));
///
/// assert_eq!(path.len(), 13);
/// assert_eq!(path.initial(), 100.0);
/// assert!(path.as_slice().iter().all(|&s| s > 0.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PricePath {
    prices: Vec<f64>,
}

impl PricePath {
    /// Number of prices on the path (steps + 1).
    #[inline]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Always `false` for generated paths; provided for completeness.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Number of time steps.
    #[inline]
    pub fn num_steps(&self) -> usize {
        self.prices.len().saturating_sub(1)
    }

    /// Prices in time order.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.prices
    }

    /// Starting price S₀.
    #[inline]
    pub fn initial(&self) -> f64 {
        self.prices.first().copied().unwrap_or(0.0)
    }

    /// Final price S(T).
    #[inline]
    pub fn terminal(&self) -> f64 {
        self.prices.last().copied().unwrap_or(0.0)
    }

    /// Arithmetic mean over every price, S₀ included.
    #[inline]
    pub fn average(&self) -> f64 {
        pricer_models::instruments::payoff::arithmetic_mean(&self.prices)
    }

    /// Consumes the path and returns the prices.
    #[inline]
    pub fn into_vec(self) -> Vec<f64> {
        self.prices
    }
}

impl AsRef<[f64]> for PricePath {
    fn as_ref(&self) -> &[f64] {
        &self.prices
    }
}

/// Samples S(T) with a single standard normal draw.
///
/// S(T) = S₀·exp((r - σ²/2)T + σ√T·Z)
#[inline]
pub fn simulate_terminal<N: NormalSource + ?Sized>(
    dynamics: &GbmDynamics,
    maturity: f64,
    rng: &mut N,
) -> f64 {
    dynamics.terminal(maturity, rng.next_normal())
}

/// Simulates one full path, streaming every price (S₀ included) into
/// `observer`.
///
/// The observer is not reset; callers reuse one observer per worker and reset
/// it between trials. Memory use is constant in `num_steps`.
pub fn simulate_path_into<N: NormalSource + ?Sized>(
    dynamics: &GbmDynamics,
    maturity: f64,
    num_steps: usize,
    rng: &mut N,
    observer: &mut PathObserver<f64>,
) {
    let steps = num_steps.max(1);
    let step = dynamics.step(maturity / steps as f64);

    let mut price = dynamics.spot;
    observer.observe(price);
    for _ in 0..steps {
        price = step.advance(price, rng.next_normal());
        observer.observe(price);
    }
}

/// Simulates and materialises one full path of `num_steps + 1` prices.
pub fn generate_path<N: NormalSource + ?Sized>(
    dynamics: &GbmDynamics,
    maturity: f64,
    num_steps: usize,
    rng: &mut N,
) -> PricePath {
    let steps = num_steps.max(1);
    let step = dynamics.step(maturity / steps as f64);

    let mut prices = Vec::with_capacity(steps + 1);
    let mut price = dynamics.spot;
    prices.push(price);
    for _ in 0..steps {
        price = step.advance(price, rng.next_normal());
        prices.push(price);
    }

    PricePath { prices }
}

/// Generates `count` raw paths for display next to a price.
///
/// Uses the same risk-neutral dynamics and step count the pricer would use
/// for `spec`, so European specs are also shown as full paths.
///
/// # Errors
///
/// Same validation as [`price_option`](super::price_option).
///
/// # Examples
///
/// ```rust
/// use pricer_core::MarketSnapshot;
/// use pricer_models::{OptionRight, OptionSpec};
/// use pricer_pricing::mc::{sample_paths, SimulationConfig};
/// use pricer_pricing::rng::PricerRng;
///
/// let snapshot = MarketSnapshot::new(100.0, 0.1, 0.3);
/// let spec = OptionSpec::asian(OptionRight::Call, 100.0, 0.5, 0.04);
/// let config = SimulationConfig::builder().num_steps(20).build().unwrap();
///
/// let paths = sample_paths(&snapshot, &spec, &config, 5, &mut PricerRng::from_seed(3)).unwrap();
/// assert_eq!(paths.len(), 5);
/// assert!(paths.iter().all(|p| p.len() == 21));
/// ```
pub fn sample_paths<N: NormalSource + ?Sized>(
    snapshot: &MarketSnapshot,
    spec: &OptionSpec,
    config: &SimulationConfig,
    count: usize,
    rng: &mut N,
) -> Result<Vec<PricePath>, PricingError> {
    let dynamics = prepare(snapshot, spec, config)?;
    let num_steps = config.num_steps(spec.maturity)?;
    Ok((0..count)
        .map(|_| generate_path(&dynamics, spec.maturity, num_steps, rng))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::PricerRng;
    use approx::assert_relative_eq;
    use pricer_models::OptionRight;

    /// Replays a fixed list of draws.
    struct Scripted(Vec<f64>, usize);

    impl NormalSource for Scripted {
        fn next_normal(&mut self) -> f64 {
            let z = self.0[self.1];
            self.1 += 1;
            z
        }
    }

    #[test]
    fn test_terminal_uses_one_draw() {
        let gbm = GbmDynamics::new(100.0, 0.05, 0.2);
        let mut src = Scripted(vec![0.5], 0);
        let st = simulate_terminal(&gbm, 2.0, &mut src);

        let expected = 100.0 * ((0.05 - 0.02) * 2.0 + 0.2 * 2.0_f64.sqrt() * 0.5).exp();
        assert_relative_eq!(st, expected, epsilon = 1e-10);
        assert_eq!(src.1, 1);
    }

    #[test]
    fn test_path_consumes_one_draw_per_step() {
        let gbm = GbmDynamics::new(50.0, 0.0, 0.3);
        let mut src = Scripted(vec![0.1, -0.2, 0.3, -0.4], 0);
        let path = generate_path(&gbm, 1.0, 4, &mut src);

        assert_eq!(path.len(), 5);
        assert_eq!(path.num_steps(), 4);
        assert_eq!(path.initial(), 50.0);
        assert_eq!(src.1, 4);
    }

    #[test]
    fn test_streaming_matches_materialised() {
        let gbm = GbmDynamics::new(100.0, 0.03, 0.25);
        let path = generate_path(&gbm, 1.0, 50, &mut PricerRng::from_seed(11));

        let mut observer = PathObserver::new();
        simulate_path_into(&gbm, 1.0, 50, &mut PricerRng::from_seed(11), &mut observer);

        assert_eq!(observer.count(), path.len());
        assert_eq!(observer.terminal(), path.terminal());
        assert_relative_eq!(observer.arithmetic_average(), path.average(), epsilon = 1e-10);
    }

    #[test]
    fn test_zero_volatility_path_is_deterministic() {
        let gbm = GbmDynamics::new(100.0, 0.05, 0.0);
        let path = generate_path(&gbm, 1.0, 4, &mut PricerRng::from_seed(0));

        for (i, &s) in path.as_slice().iter().enumerate() {
            let t = i as f64 * 0.25;
            assert_relative_eq!(s, 100.0 * (0.05 * t).exp(), epsilon = 1e-10);
        }
    }

    #[test]
    fn test_zero_steps_treated_as_one() {
        let gbm = GbmDynamics::new(100.0, 0.0, 0.2);
        let path = generate_path(&gbm, 1.0, 0, &mut PricerRng::from_seed(0));
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn test_sample_paths_validates() {
        let snapshot = MarketSnapshot::new(-1.0, 0.0, 0.2);
        let spec = OptionSpec::european(OptionRight::Call, 100.0, 1.0, 0.0);
        let config = SimulationConfig::default();

        let result = sample_paths(&snapshot, &spec, &config, 3, &mut PricerRng::from_seed(0));
        assert_eq!(result, Err(PricingError::invalid("spot", -1.0)));
    }

    #[test]
    fn test_sample_paths_follow_step_policy() {
        let snapshot = MarketSnapshot::new(100.0, 0.0, 0.2);
        let spec = OptionSpec::european(OptionRight::Call, 100.0, 0.5, 0.0);
        let config = SimulationConfig::builder().steps_per_year(52).build().unwrap();

        let paths = sample_paths(&snapshot, &spec, &config, 2, &mut PricerRng::from_seed(0)).unwrap();
        assert!(paths.iter().all(|p| p.num_steps() == 26));
    }
}
