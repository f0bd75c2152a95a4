//! Monte Carlo pricer.
//!
//! # Overview
//!
//! For each of `num_paths` independent trials the pricer
//! 1. simulates the outcome the option needs (terminal price or path
//!    average, see [`paths`](super::paths)),
//! 2. evaluates the undiscounted payoff,
//! 3. accumulates the running mean and variance,
//!
//! and finally discounts the mean by exp(-rT). The estimator is plain Monte
//! Carlo; the reported standard error is that of the discounted mean.
//!
//! Inputs are validated up front and rejected with
//! [`PricingError::InvalidParameter`], never clamped. Zero volatility is
//! valid and prices deterministically.

use pricer_core::MarketSnapshot;
use pricer_models::instruments::payoff::{average_payoff, terminal_payoff};
use pricer_models::{GbmDynamics, OptionSpec, OptionStyle};
use tracing::debug;

use super::config::SimulationConfig;
use super::error::{ConfigError, PricingError};
use super::estimator::PayoffAccumulator;
use super::parallel::simulate_parallel;
use super::paths::{simulate_path_into, simulate_terminal};
use crate::path_dependent::PathObserver;
use crate::rng::NormalSource;

/// Pricing result with the standard error of the estimate.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::PricingResult;
///
/// let result = PricingResult {
///     price: 10.5,
///     std_error: 0.05,
///     num_paths: 10_000,
///     num_steps: 1,
/// };
///
/// assert!((result.confidence_95() - 0.098).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    /// Present value of the option.
    pub price: f64,
    /// Standard error of the price estimate.
    pub std_error: f64,
    /// Trials simulated.
    pub num_paths: usize,
    /// Time steps per trial (1 for terminal-only sampling).
    pub num_steps: usize,
}

impl PricingResult {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// Returns the 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.std_error
    }
}

/// Risk-neutral discount factor exp(-rT).
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::discount_factor;
///
/// assert_eq!(discount_factor(0.0, 5.0), 1.0);
/// assert!((discount_factor(0.05, 2.0) - (-0.1_f64).exp()).abs() < 1e-15);
/// ```
#[inline]
pub fn discount_factor(rate: f64, maturity: f64) -> f64 {
    (-rate * maturity).exp()
}

/// Prices `spec` and returns the discounted expected payoff.
///
/// Draws come from `rng` in trial order; `config.seed()` is not consulted.
///
/// # Errors
///
/// - `PricingError::InvalidParameter` for a non-positive or non-finite spot,
///   a negative or non-finite volatility, or an invalid strike, maturity or
///   rate
/// - `PricingError::InvalidParameter` named "rate" when exp(rT) or the
///   forward overflows
/// - `PricingError::Config` for out-of-range simulation settings
/// - `PricingError::NonFinite` if the estimate itself overflows, e.g. for
///   extreme volatility
///
/// # Examples
///
/// ```rust
/// use pricer_core::MarketSnapshot;
/// use pricer_models::{OptionRight, OptionSpec};
/// use pricer_pricing::mc::{price_option, SimulationConfig};
/// use pricer_pricing::rng::PricerRng;
///
/// // Zero volatility: deterministic forward, call worth S0 - K·e^(-rT)
/// let snapshot = MarketSnapshot::new(100.0, 0.0, 0.0);
/// let spec = OptionSpec::european(OptionRight::Call, 100.0, 1.0, 0.05);
/// let config = SimulationConfig::builder().num_paths(10).build().unwrap();
///
/// let price = price_option(&snapshot, &spec, &config, &mut PricerRng::from_seed(0)).unwrap();
/// assert!((price - (100.0 - 100.0 * (-0.05_f64).exp())).abs() < 1e-9);
/// ```
pub fn price_option<N: NormalSource + ?Sized>(
    snapshot: &MarketSnapshot,
    spec: &OptionSpec,
    config: &SimulationConfig,
    rng: &mut N,
) -> Result<f64, PricingError> {
    run_sequential(snapshot, spec, config, rng).map(|result| result.price)
}

/// Monte Carlo pricing engine bound to one [`SimulationConfig`].
///
/// # Examples
///
/// ```rust
/// use pricer_core::MarketSnapshot;
/// use pricer_models::{OptionRight, OptionSpec};
/// use pricer_pricing::mc::{MonteCarloPricer, SimulationConfig};
/// use pricer_pricing::rng::PricerRng;
///
/// let config = SimulationConfig::builder().num_paths(20_000).build().unwrap();
/// let pricer = MonteCarloPricer::new(config).unwrap();
///
/// let snapshot = MarketSnapshot::new(100.0, 0.12, 0.2);
/// let spec = OptionSpec::european(OptionRight::Put, 100.0, 1.0, 0.04);
/// let result = pricer.price(&snapshot, &spec, &mut PricerRng::from_seed(42)).unwrap();
///
/// println!("Price: {} +/- {}", result.price, result.confidence_95());
/// assert_eq!(result.num_paths, 20_000);
/// ```
#[derive(Clone, Debug)]
pub struct MonteCarloPricer {
    config: SimulationConfig,
}

impl MonteCarloPricer {
    /// Creates a pricer with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration is invalid.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns a reference to the configuration.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Prices sequentially with draws from `rng`.
    ///
    /// # Errors
    ///
    /// See [`price_option`].
    pub fn price<N: NormalSource + ?Sized>(
        &self,
        snapshot: &MarketSnapshot,
        spec: &OptionSpec,
        rng: &mut N,
    ) -> Result<PricingResult, PricingError> {
        run_sequential(snapshot, spec, &self.config, rng)
    }

    /// Prices on the rayon pool.
    ///
    /// Trials are split into chunks of
    /// [`PARALLEL_CHUNK_SIZE`](super::PARALLEL_CHUNK_SIZE); chunk `i` draws
    /// from `PricerRng::for_stream(seed, i)`. The estimate depends on `seed`
    /// and the configuration only, not on the number of worker threads. It
    /// differs from the sequential estimate for the same seed.
    ///
    /// # Errors
    ///
    /// See [`price_option`].
    pub fn price_parallel(
        &self,
        snapshot: &MarketSnapshot,
        spec: &OptionSpec,
        seed: u64,
    ) -> Result<PricingResult, PricingError> {
        let (dynamics, num_steps) = prepare_pricing(snapshot, spec, &self.config)?;
        let num_paths = self.config.num_paths();

        debug!(
            style = %spec.style,
            right = %spec.right,
            num_paths,
            num_steps,
            seed,
            threads = rayon::current_num_threads(),
            "pricing in parallel"
        );

        let acc = simulate_parallel(&dynamics, spec, num_steps, num_paths, seed);
        finish(spec, &acc, num_steps)
    }
}

fn run_sequential<N: NormalSource + ?Sized>(
    snapshot: &MarketSnapshot,
    spec: &OptionSpec,
    config: &SimulationConfig,
    rng: &mut N,
) -> Result<PricingResult, PricingError> {
    let (dynamics, num_steps) = prepare_pricing(snapshot, spec, config)?;
    let num_paths = config.num_paths();

    debug!(
        style = %spec.style,
        right = %spec.right,
        spot = dynamics.spot,
        volatility = dynamics.volatility,
        strike = spec.strike,
        maturity = spec.maturity,
        rate = spec.rate,
        num_paths,
        num_steps,
        "pricing"
    );

    let acc = simulate_trials(&dynamics, spec, num_steps, num_paths, rng);
    finish(spec, &acc, num_steps)
}

fn finish(
    spec: &OptionSpec,
    acc: &PayoffAccumulator,
    num_steps: usize,
) -> Result<PricingResult, PricingError> {
    let df = discount_factor(spec.rate, spec.maturity);
    let result = PricingResult {
        price: acc.mean() * df,
        std_error: acc.std_error() * df,
        num_paths: acc.count(),
        num_steps,
    };
    if !result.price.is_finite() {
        return Err(PricingError::NonFinite {
            value: result.price,
        });
    }
    debug!(price = result.price, std_error = result.std_error, "priced");
    Ok(result)
}

/// Validates all inputs and builds the risk-neutral dynamics.
pub(super) fn prepare(
    snapshot: &MarketSnapshot,
    spec: &OptionSpec,
    config: &SimulationConfig,
) -> Result<GbmDynamics, PricingError> {
    let spot = snapshot.spot();
    if !(spot.is_finite() && spot > 0.0) {
        return Err(PricingError::invalid("spot", spot));
    }
    let volatility = snapshot.volatility();
    if !(volatility.is_finite() && volatility >= 0.0) {
        return Err(PricingError::invalid("volatility", volatility));
    }
    spec.validate()?;
    config.validate()?;

    // exp(rT) must be representable both ways
    let dynamics = GbmDynamics::from_snapshot(snapshot, spec.rate);
    let df = discount_factor(spec.rate, spec.maturity);
    if !(dynamics.forward(spec.maturity).is_finite() && df.is_finite() && df > 0.0) {
        return Err(PricingError::invalid("rate", spec.rate));
    }

    Ok(dynamics)
}

/// [`prepare`] plus the step count the payoff needs: one exact step for
/// European options, the configured policy for Asian options.
fn prepare_pricing(
    snapshot: &MarketSnapshot,
    spec: &OptionSpec,
    config: &SimulationConfig,
) -> Result<(GbmDynamics, usize), PricingError> {
    let dynamics = prepare(snapshot, spec, config)?;
    let num_steps = if spec.style.is_path_dependent() {
        config.num_steps(spec.maturity)?
    } else {
        1
    };
    Ok((dynamics, num_steps))
}

/// Runs `trials` trials and accumulates their undiscounted payoffs.
pub(super) fn simulate_trials<N: NormalSource + ?Sized>(
    dynamics: &GbmDynamics,
    spec: &OptionSpec,
    num_steps: usize,
    trials: usize,
    rng: &mut N,
) -> PayoffAccumulator {
    let mut acc = PayoffAccumulator::new();

    match spec.style {
        OptionStyle::European => {
            for _ in 0..trials {
                let terminal = simulate_terminal(dynamics, spec.maturity, rng);
                acc.push(terminal_payoff(spec, terminal));
            }
        }
        OptionStyle::Asian => {
            let mut observer = PathObserver::new();
            for _ in 0..trials {
                observer.reset();
                simulate_path_into(dynamics, spec.maturity, num_steps, rng, &mut observer);
                acc.push(average_payoff(spec, observer.arithmetic_average()));
            }
        }
    }

    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::PricerRng;
    use approx::assert_relative_eq;
    use pricer_models::OptionRight;

    fn config(num_paths: usize) -> SimulationConfig {
        SimulationConfig::builder()
            .num_paths(num_paths)
            .num_steps(50)
            .build()
            .unwrap()
    }

    #[test]
    fn test_rejects_invalid_snapshot() {
        let spec = OptionSpec::european(OptionRight::Call, 100.0, 1.0, 0.0);
        let mut rng = PricerRng::from_seed(0);

        for (snapshot, name) in [
            (MarketSnapshot::new(0.0, 0.0, 0.2), "spot"),
            (MarketSnapshot::new(f64::NAN, 0.0, 0.2), "spot"),
            (MarketSnapshot::new(100.0, 0.0, -0.2), "volatility"),
            (MarketSnapshot::new(100.0, 0.0, f64::INFINITY), "volatility"),
        ] {
            let err = price_option(&snapshot, &spec, &config(10), &mut rng).unwrap_err();
            assert!(
                matches!(err, PricingError::InvalidParameter { name: n, .. } if n == name),
                "{:?}",
                err
            );
        }
    }

    #[test]
    fn test_rejects_invalid_spec() {
        let snapshot = MarketSnapshot::new(100.0, 0.0, 0.2);
        let mut rng = PricerRng::from_seed(0);

        let bad_strike = OptionSpec::european(OptionRight::Call, 0.0, 1.0, 0.0);
        assert_eq!(
            price_option(&snapshot, &bad_strike, &config(10), &mut rng),
            Err(PricingError::invalid("strike", 0.0))
        );

        let bad_maturity = OptionSpec::asian(OptionRight::Put, 100.0, -1.0, 0.0);
        assert_eq!(
            price_option(&snapshot, &bad_maturity, &config(10), &mut rng),
            Err(PricingError::invalid("maturity", -1.0))
        );

        let bad_rate = OptionSpec::asian(OptionRight::Put, 100.0, 1.0, f64::NAN);
        assert!(matches!(
            price_option(&snapshot, &bad_rate, &config(10), &mut rng),
            Err(PricingError::InvalidParameter { name: "rate", .. })
        ));
    }

    #[test]
    fn test_rejects_overflowing_growth() {
        let snapshot = MarketSnapshot::new(100.0, 0.0, 0.2);
        let mut rng = PricerRng::from_seed(0);

        for rate in [800.0, -800.0] {
            let spec = OptionSpec::european(OptionRight::Call, 100.0, 1.0, rate);
            assert_eq!(
                price_option(&snapshot, &spec, &config(100), &mut rng),
                Err(PricingError::invalid("rate", rate))
            );
        }

        // Large but representable growth still prices
        let spec = OptionSpec::european(OptionRight::Put, 100.0, 1.0, 5.0);
        let price = price_option(&snapshot, &spec, &config(100), &mut rng).unwrap();
        assert!(price.is_finite() && price >= 0.0);
    }

    #[test]
    fn test_extreme_volatility_is_not_silent() {
        // exp(σ√T·Z) overflows for some draws
        let snapshot = MarketSnapshot::new(100.0, 0.0, 1e3);
        let spec = OptionSpec::asian(OptionRight::Call, 100.0, 1.0, 0.0);
        let result = price_option(&snapshot, &spec, &config(1_000), &mut PricerRng::from_seed(4));

        match result {
            Ok(price) => assert!(price.is_finite() && price >= 0.0),
            Err(err) => assert!(matches!(err, PricingError::NonFinite { .. })),
        }
    }

    #[test]
    fn test_new_keeps_config() {
        let pricer = MonteCarloPricer::new(SimulationConfig::default()).unwrap();
        assert_eq!(pricer.config(), &SimulationConfig::default());
    }

    #[test]
    fn test_zero_volatility_european() {
        let snapshot = MarketSnapshot::new(100.0, 0.0, 0.0);
        let call = OptionSpec::european(OptionRight::Call, 95.0, 2.0, 0.03);
        let put = OptionSpec::european(OptionRight::Put, 95.0, 2.0, 0.03);
        let pricer = MonteCarloPricer::new(config(100)).unwrap();

        let c = pricer.price(&snapshot, &call, &mut PricerRng::from_seed(1)).unwrap();
        let p = pricer.price(&snapshot, &put, &mut PricerRng::from_seed(1)).unwrap();

        assert_relative_eq!(c.price, 100.0 - 95.0 * (-0.06_f64).exp(), epsilon = 1e-9);
        assert_relative_eq!(c.std_error, 0.0, epsilon = 1e-9);
        assert_eq!(p.price, 0.0);
        assert_eq!(c.num_steps, 1);
    }

    #[test]
    fn test_zero_volatility_asian() {
        // Deterministic path S0·e^(r t_i); average over 51 points
        let snapshot = MarketSnapshot::new(100.0, 0.0, 0.0);
        let spec = OptionSpec::asian(OptionRight::Call, 100.0, 1.0, 0.05);
        let pricer = MonteCarloPricer::new(config(10)).unwrap();
        let result = pricer.price(&snapshot, &spec, &mut PricerRng::from_seed(1)).unwrap();

        let average = (0..=50)
            .map(|i| 100.0 * (0.05 * i as f64 / 50.0).exp())
            .sum::<f64>()
            / 51.0;
        let expected = (average - 100.0) * (-0.05_f64).exp();

        assert_relative_eq!(result.price, expected, epsilon = 1e-9);
        assert_eq!(result.num_steps, 50);
    }

    #[test]
    fn test_single_path() {
        let snapshot = MarketSnapshot::new(100.0, 0.0, 0.3);
        let spec = OptionSpec::european(OptionRight::Call, 100.0, 1.0, 0.0);
        let result = MonteCarloPricer::new(config(1))
            .unwrap()
            .price(&snapshot, &spec, &mut PricerRng::from_seed(9))
            .unwrap();

        assert_eq!(result.num_paths, 1);
        assert_eq!(result.std_error, 0.0);
        assert!(result.price >= 0.0);
    }

    #[test]
    fn test_seeded_reproducibility() {
        let snapshot = MarketSnapshot::new(100.0, 0.0, 0.25);
        let spec = OptionSpec::asian(OptionRight::Put, 100.0, 1.0, 0.02);
        let a = price_option(&snapshot, &spec, &config(2_000), &mut PricerRng::from_seed(77)).unwrap();
        let b = price_option(&snapshot, &spec, &config(2_000), &mut PricerRng::from_seed(77)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_drift_is_ignored() {
        let spec = OptionSpec::european(OptionRight::Call, 100.0, 1.0, 0.03);
        let low = MarketSnapshot::new(100.0, -0.5, 0.2);
        let high = MarketSnapshot::new(100.0, 0.9, 0.2);

        let a = price_option(&low, &spec, &config(1_000), &mut PricerRng::from_seed(5)).unwrap();
        let b = price_option(&high, &spec, &config(1_000), &mut PricerRng::from_seed(5)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_parallel_matches_config() {
        let snapshot = MarketSnapshot::new(100.0, 0.0, 0.2);
        let spec = OptionSpec::european(OptionRight::Call, 100.0, 1.0, 0.04);
        let pricer = MonteCarloPricer::new(config(10_001)).unwrap();
        let result = pricer.price_parallel(&snapshot, &spec, 3).unwrap();

        assert_eq!(result.num_paths, 10_001);
        assert!(result.price > 0.0);
    }
}
