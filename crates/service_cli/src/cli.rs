//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use pricer_models::{OptionRight, OptionStyle};

use crate::config::ConfigOverrides;
use crate::output::OutputFormat;

/// Monte Carlo pricer for European and arithmetic Asian options
#[derive(Debug, Parser)]
#[command(name = "mcprice")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path (default: mcprice.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Calibrate spot, drift and volatility from a closing-price CSV
    Calibrate(CalibrateArgs),

    /// Price an option by Monte Carlo simulation
    Price(PriceArgs),

    /// Print the effective configuration
    Check,
}

/// Market data selection shared by `calibrate` and `price`.
#[derive(Debug, Clone, Args)]
pub struct DataArgs {
    /// CSV file with `date` and `close` columns
    #[arg(short, long)]
    pub data: PathBuf,

    /// Symbol label for the data
    #[arg(short, long, default_value = "UNDERLYING")]
    pub symbol: String,

    /// Trailing calibration window in calendar days
    #[arg(long)]
    pub lookback_days: Option<u32>,
}

/// Arguments of `mcprice calibrate`.
#[derive(Debug, Clone, Args)]
pub struct CalibrateArgs {
    /// Market data
    #[command(flatten)]
    pub data: DataArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

/// Arguments of `mcprice price`.
#[derive(Debug, Clone, Args)]
pub struct PriceArgs {
    /// Market data
    #[command(flatten)]
    pub data: DataArgs,

    /// Option style (european, asian)
    #[arg(long, default_value = "european")]
    pub style: OptionStyle,

    /// Option right (call, put)
    #[arg(long, default_value = "call")]
    pub right: OptionRight,

    /// Absolute strike price
    #[arg(short = 'k', long, conflicts_with = "strike_pct", required_unless_present = "strike_pct")]
    pub strike: Option<f64>,

    /// Strike as a fraction of the calibrated spot (1.05 = 105%)
    #[arg(long)]
    pub strike_pct: Option<f64>,

    /// Time to maturity in years
    #[arg(short = 't', long)]
    pub maturity: f64,

    /// Continuously compounded risk-free rate
    #[arg(short, long, allow_negative_numbers = true)]
    pub rate: f64,

    /// Number of Monte Carlo paths
    #[arg(long)]
    pub paths: Option<usize>,

    /// Fixed number of averaging steps for Asian options
    #[arg(long, conflicts_with = "steps_per_year")]
    pub steps: Option<usize>,

    /// Averaging steps per year of maturity for Asian options
    #[arg(long)]
    pub steps_per_year: Option<usize>,

    /// Seed for reproducible pricing
    #[arg(long)]
    pub seed: Option<u64>,

    /// Price on all cores
    #[arg(long)]
    pub parallel: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,

    /// Number of raw paths to include in the output
    #[arg(long, default_value_t = 0)]
    pub sample_paths: usize,
}

impl Cli {
    /// Collects the configuration overrides carried by the arguments.
    pub fn overrides(&self) -> ConfigOverrides {
        let mut overrides = ConfigOverrides {
            config_file: self.config.clone(),
            log_level: self.log_level.clone(),
            ..Default::default()
        };

        match &self.command {
            Commands::Calibrate(args) => {
                overrides.lookback_days = args.data.lookback_days;
            }
            Commands::Price(args) => {
                overrides.lookback_days = args.data.lookback_days;
                overrides.num_paths = args.paths;
                overrides.num_steps = args.steps;
                overrides.steps_per_year = args.steps_per_year;
                overrides.seed = args.seed;
                overrides.parallel = args.parallel;
            }
            Commands::Check => {}
        }

        overrides
    }
}
