//! CLI configuration management
//!
//! Handles loading configuration from a TOML file, `MCPRICE_*` environment
//! variables and command-line arguments.
//!
//! Priority (highest to lowest):
//! 1. CLI arguments
//! 2. Environment variables
//! 3. Config file
//! 4. Default values

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::Duration;
use pricer_core::market_data::{LookbackWindow, DEFAULT_CACHE_TTL_HOURS};
use pricer_core::market_data::source::DEFAULT_LOOKBACK_DAYS;
use pricer_pricing::mc::{SimulationConfig, StepPolicy, DEFAULT_NUM_PATHS, DEFAULT_NUM_STEPS};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Config file read when `--config` is not given, if present.
pub const DEFAULT_CONFIG_FILE: &str = "mcprice.toml";

/// Prefix of every environment variable read by [`CliConfig::apply_env`].
pub const ENV_PREFIX: &str = "MCPRICE_";

/// Longest accepted calibration window in calendar days (100 years).
pub const MAX_LOOKBACK_DAYS: u32 = 36_525;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unknown log level name.
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// A setting is outside its domain.
    #[error("Invalid value for {name}: {value}")]
    InvalidValue {
        /// Setting name
        name: &'static str,
        /// Offending value
        value: String,
    },

    /// Config file could not be read or parsed.
    #[error("Configuration file error: {0}")]
    FileError(String),

    /// Environment variable could not be parsed.
    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Log levels accepted in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Everything, including per-trial detail
    Trace,
    /// Per-call parameters
    Debug,
    /// Progress messages
    #[default]
    Info,
    /// Degenerate inputs
    Warn,
    /// Failures only
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Effective `mcprice` configuration.
///
/// Every field has a default, so a config file only needs the keys it
/// changes:
///
/// ```toml
/// num_paths = 100000
/// steps_per_year = 252
/// seed = 42
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level used when `RUST_LOG` is unset
    pub log_level: LogLevel,
    /// Monte Carlo trials
    pub num_paths: usize,
    /// Fixed averaging steps for Asian options
    pub num_steps: usize,
    /// Steps per year of maturity; overrides `num_steps` when set
    pub steps_per_year: Option<usize>,
    /// Seed for reproducible runs
    pub seed: Option<u64>,
    /// Calibration cache time-to-live in hours
    pub cache_ttl_hours: i64,
    /// Trailing calibration window in calendar days
    pub lookback_days: u32,
    /// Price on the rayon pool
    pub parallel: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            num_paths: DEFAULT_NUM_PATHS,
            num_steps: DEFAULT_NUM_STEPS,
            steps_per_year: None,
            seed: None,
            cache_ttl_hours: DEFAULT_CACHE_TTL_HOURS,
            lookback_days: DEFAULT_LOOKBACK_DAYS,
            parallel: false,
        }
    }
}

/// Command-line overrides, all optional.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Trial count override
    pub num_paths: Option<usize>,
    /// Fixed step count override
    pub num_steps: Option<usize>,
    /// Per-year step count override
    pub steps_per_year: Option<usize>,
    /// Seed override
    pub seed: Option<u64>,
    /// Lookback override in calendar days
    pub lookback_days: Option<u32>,
    /// Force parallel pricing
    pub parallel: bool,
}

fn parse_env<T: FromStr>(key: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::EnvError(format!("{}{}={}", ENV_PREFIX, key, raw)))
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::EnvError(format!("{}{}={}", ENV_PREFIX, key, raw))),
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Overrides fields from `MCPRICE_*` environment variables.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_from(|key| std::env::var(format!("{}{}", ENV_PREFIX, key)).ok())
    }

    /// Overrides fields from `lookup`, which maps an unprefixed key such as
    /// `NUM_PATHS` to its raw value.
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("LOG_LEVEL") {
            self.log_level = LogLevel::from_str(raw.trim())?;
        }
        if let Some(raw) = lookup("NUM_PATHS") {
            self.num_paths = parse_env("NUM_PATHS", &raw)?;
        }
        if let Some(raw) = lookup("NUM_STEPS") {
            self.num_steps = parse_env("NUM_STEPS", &raw)?;
        }
        if let Some(raw) = lookup("STEPS_PER_YEAR") {
            self.steps_per_year = Some(parse_env("STEPS_PER_YEAR", &raw)?);
        }
        if let Some(raw) = lookup("SEED") {
            self.seed = Some(parse_env("SEED", &raw)?);
        }
        if let Some(raw) = lookup("CACHE_TTL_HOURS") {
            self.cache_ttl_hours = parse_env("CACHE_TTL_HOURS", &raw)?;
        }
        if let Some(raw) = lookup("LOOKBACK_DAYS") {
            self.lookback_days = parse_env("LOOKBACK_DAYS", &raw)?;
        }
        if let Some(raw) = lookup("PARALLEL") {
            self.parallel = parse_bool("PARALLEL", &raw)?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &ConfigOverrides) -> Result<(), ConfigError> {
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        }
        if let Some(n) = cli.num_paths {
            self.num_paths = n;
        }
        if let Some(n) = cli.num_steps {
            self.num_steps = n;
            self.steps_per_year = None;
        }
        if let Some(n) = cli.steps_per_year {
            self.steps_per_year = Some(n);
        }
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if let Some(days) = cli.lookback_days {
            self.lookback_days = days;
        }
        if cli.parallel {
            self.parallel = true;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache_ttl_hours < 0 || Duration::try_hours(self.cache_ttl_hours).is_none() {
            return Err(ConfigError::InvalidValue {
                name: "cache_ttl_hours",
                value: self.cache_ttl_hours.to_string(),
            });
        }
        if self.lookback_days == 0 || self.lookback_days > MAX_LOOKBACK_DAYS {
            return Err(ConfigError::InvalidValue {
                name: "lookback_days",
                value: self.lookback_days.to_string(),
            });
        }
        self.simulation_config()
            .map(|_| ())
            .map_err(|e| ConfigError::InvalidValue {
                name: "simulation",
                value: e.to_string(),
            })
    }

    /// Step policy selected by `steps_per_year` / `num_steps`.
    pub fn step_policy(&self) -> StepPolicy {
        match self.steps_per_year {
            Some(n) => StepPolicy::PerYear(n),
            None => StepPolicy::Fixed(self.num_steps),
        }
    }

    /// Builds the engine configuration.
    pub fn simulation_config(&self) -> Result<SimulationConfig, pricer_pricing::mc::ConfigError> {
        SimulationConfig::builder()
            .num_paths(self.num_paths)
            .steps(self.step_policy())
            .maybe_seed(self.seed)
            .build()
    }

    /// Calibration window.
    pub fn lookback_window(&self) -> LookbackWindow {
        LookbackWindow::days(self.lookback_days)
    }

    /// Calibration cache time-to-live.
    ///
    /// Saturates for values [`validate`](Self::validate) would reject.
    pub fn cache_ttl(&self) -> Duration {
        Duration::try_hours(self.cache_ttl_hours).unwrap_or(Duration::MAX)
    }
}

/// Build configuration from all sources
///
/// An explicit `--config` path must exist; the default `mcprice.toml` is
/// read only if present.
pub fn build_config(cli: &ConfigOverrides) -> Result<CliConfig, ConfigError> {
    build_config_with_env(cli, |key| {
        std::env::var(format!("{}{}", ENV_PREFIX, key)).ok()
    })
}

/// [`build_config`] with an injectable environment lookup.
pub fn build_config_with_env<F>(cli: &ConfigOverrides, env: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if default.exists() {
                CliConfig::from_file(default)?
            } else {
                CliConfig::default()
            }
        }
    };

    config.apply_env_from(env)?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}
