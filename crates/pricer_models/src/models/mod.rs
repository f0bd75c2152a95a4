//! Stochastic models for the underlying.
//!
//! - [`gbm`]: Risk-neutral geometric Brownian motion with exact log-space steps

pub mod gbm;

pub use gbm::{GbmDynamics, GbmStep};
