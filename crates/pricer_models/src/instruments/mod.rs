//! Option instrument definitions.
//!
//! This module provides:
//! - [`OptionStyle`] and [`OptionRight`]: European/Asian and call/put enums
//! - [`OptionSpec`]: Strike, maturity and risk-free rate of a vanilla option
//! - [`payoff`]: Undiscounted payoff evaluation
//! - [`InstrumentError`]: Specification validation errors
//!
//! # Examples
//! ```
//! use pricer_models::instruments::{payoff, OptionRight, OptionSpec};
//!
//! let spec = OptionSpec::european(OptionRight::Call, 100.0, 1.0, 0.04);
//! assert_eq!(payoff::terminal_payoff(&spec, 120.0), 20.0);
//! ```

mod error;
mod option_spec;
pub mod payoff;

pub use error::InstrumentError;
pub use option_spec::{OptionRight, OptionSpec, OptionStyle};
