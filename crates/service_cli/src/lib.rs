//! # service_cli: command-line front end for the Monte Carlo pricer
//!
//! `mcprice` calibrates an underlying from a CSV of daily closes and prices
//! European or arithmetic Asian options on it.
//!
//! # Commands
//!
//! - `mcprice calibrate --data <csv>` - Estimate spot, drift and volatility
//! - `mcprice price --data <csv> --strike <K> --maturity <T> --rate <r>` - Price an option
//! - `mcprice check` - Print the effective configuration
//!
//! # Configuration
//!
//! Settings resolve in priority order: command-line flags, `MCPRICE_*`
//! environment variables, the TOML config file, then built-in defaults.
//! See [`config`].

#![deny(missing_docs)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod source;

pub use error::{CliError, Result};
