//! # Pricer Models (L2: Business Logic)
//!
//! Option specifications, payoff functions and the GBM model.
//!
//! This crate provides:
//! - Instrument definitions: European and arithmetic Asian vanilla options
//! - Payoff functions for terminal prices and realised paths
//! - Risk-neutral geometric Brownian motion dynamics
//! - Black-Scholes closed-form prices for validation
//!
//! ## Design Principles
//!
//! - **Enum-based instruments** for static dispatch
//! - **Plain data specifications** validated at the pricing boundary
//! - **Exact log-space stepping** for GBM, so no discretisation bias

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
pub mod models;

pub use instruments::{InstrumentError, OptionRight, OptionSpec, OptionStyle};
pub use models::GbmDynamics;
