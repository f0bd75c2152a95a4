//! Monte Carlo simulation configuration.
//!
//! [`SimulationConfig`] fixes the trial count, the time-step policy for
//! path-dependent options and an optional seed. Construct it through
//! [`SimulationConfigBuilder`], which validates ranges at build time.

use super::error::ConfigError;

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Maximum number of time steps allowed per path.
pub const MAX_STEPS: usize = 10_000;

/// Default number of trials.
pub const DEFAULT_NUM_PATHS: usize = 10_000;

/// Default number of averaging steps for Asian options (one per trading day).
pub const DEFAULT_NUM_STEPS: usize = 252;

/// How many time steps a full-path simulation uses.
///
/// European options are sampled in a single exact step and ignore the
/// policy.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::StepPolicy;
///
/// assert_eq!(StepPolicy::Fixed(252).resolve(0.25), 252);
/// assert_eq!(StepPolicy::PerYear(252).resolve(0.25), 63);
/// assert_eq!(StepPolicy::PerYear(252).resolve(0.001), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StepPolicy {
    /// Always the given number of steps, whatever the maturity.
    Fixed(usize),
    /// Steps per year of maturity: max(1, round(n × T)).
    PerYear(usize),
}

impl Default for StepPolicy {
    fn default() -> Self {
        StepPolicy::Fixed(DEFAULT_NUM_STEPS)
    }
}

impl StepPolicy {
    /// Number of steps for an option of the given maturity.
    #[inline]
    pub fn resolve(&self, maturity: f64) -> usize {
        match *self {
            StepPolicy::Fixed(n) => n,
            StepPolicy::PerYear(n) => {
                let scaled = (n as f64 * maturity).round();
                if scaled.is_finite() && scaled >= 1.0 {
                    scaled as usize
                } else {
                    1
                }
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let n = match *self {
            StepPolicy::Fixed(n) | StepPolicy::PerYear(n) => n,
        };
        if n == 0 || n > MAX_STEPS {
            return Err(ConfigError::InvalidStepCount(n));
        }
        Ok(())
    }
}

/// Monte Carlo simulation configuration.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::{SimulationConfig, StepPolicy};
///
/// let config = SimulationConfig::builder()
///     .num_paths(50_000)
///     .steps_per_year(252)
///     .seed(12345)
///     .build()
///     .expect("valid config");
///
/// assert_eq!(config.num_paths(), 50_000);
/// assert_eq!(config.steps(), StepPolicy::PerYear(252));
/// assert_eq!(config.num_steps(2.0).unwrap(), 504);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationConfig {
    num_paths: usize,
    steps: StepPolicy,
    seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_paths: DEFAULT_NUM_PATHS,
            steps: StepPolicy::default(),
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Creates a new configuration builder starting from the defaults.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Returns the number of trials.
    #[inline]
    pub fn num_paths(&self) -> usize {
        self.num_paths
    }

    /// Returns the step policy.
    #[inline]
    pub fn steps(&self) -> StepPolicy {
        self.steps
    }

    /// Returns the optional seed.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Resolves the step policy for `maturity`.
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidStepCount` if a per-year policy scales beyond
    /// [`MAX_STEPS`].
    pub fn num_steps(&self, maturity: f64) -> Result<usize, ConfigError> {
        let n = self.steps.resolve(maturity);
        if n > MAX_STEPS {
            return Err(ConfigError::InvalidStepCount(n));
        }
        Ok(n)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `num_paths` is 0 or greater than 10,000,000
    /// - the step count of the policy is 0 or greater than 10,000
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_paths == 0 || self.num_paths > MAX_PATHS {
            return Err(ConfigError::InvalidPathCount(self.num_paths));
        }
        self.steps.validate()
    }
}

/// Builder for [`SimulationConfig`].
///
/// Unset fields keep their defaults: 10,000 paths, 252 fixed steps, no seed.
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    config: SimulationConfig,
}

impl SimulationConfigBuilder {
    /// Sets the number of trials, in [1, 10_000_000].
    #[inline]
    pub fn num_paths(mut self, num_paths: usize) -> Self {
        self.config.num_paths = num_paths;
        self
    }

    /// Uses a fixed number of steps, in [1, 10_000].
    #[inline]
    pub fn num_steps(mut self, num_steps: usize) -> Self {
        self.config.steps = StepPolicy::Fixed(num_steps);
        self
    }

    /// Scales the number of steps with maturity.
    #[inline]
    pub fn steps_per_year(mut self, steps_per_year: usize) -> Self {
        self.config.steps = StepPolicy::PerYear(steps_per_year);
        self
    }

    /// Sets the step policy directly.
    #[inline]
    pub fn steps(mut self, steps: StepPolicy) -> Self {
        self.config.steps = steps;
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Sets or clears the seed.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.config.seed = seed;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any field is out of range.
    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
