//! CLI error types.

use pricer_core::market_data::DataError;
use pricer_models::InstrumentError;
use pricer_pricing::mc::PricingError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by `mcprice` commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Command-line argument combination is invalid.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Market data could not be loaded or calibrated.
    #[error("Market data error: {0}")]
    Data(#[from] DataError),

    /// Option specification is invalid.
    #[error("Instrument error: {0}")]
    Instrument(#[from] InstrumentError),

    /// Pricing rejected its inputs.
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Simulation settings are out of range.
    #[error("Simulation settings: {0}")]
    Simulation(#[from] pricer_pricing::mc::ConfigError),

    /// JSON rendering failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
