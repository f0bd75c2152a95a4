//! # Pricer Pricing (Layer 3: Monte Carlo Engine)
//!
//! Prices European and arithmetic Asian vanilla options by simulating the
//! risk-neutral GBM model of [`pricer_models`] from a calibrated
//! [`pricer_core::MarketSnapshot`].
//!
//! ## Module Structure
//!
//! - [`rng`]: Normal-variate source trait and the seeded [`PricerRng`](rng::PricerRng)
//! - [`mc`]: Simulation configuration, path generation and the pricer
//! - [`path_dependent`]: Streaming path statistics for Asian payoffs
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::MarketSnapshot;
//! use pricer_models::{OptionRight, OptionSpec};
//! use pricer_pricing::mc::{price_option, SimulationConfig};
//! use pricer_pricing::rng::PricerRng;
//!
//! let snapshot = MarketSnapshot::new(100.0, 0.08, 0.2);
//! let spec = OptionSpec::european(OptionRight::Call, 100.0, 1.0, 0.04);
//! let config = SimulationConfig::builder().num_paths(20_000).build().unwrap();
//! let mut rng = PricerRng::from_seed(42);
//!
//! let price = price_option(&snapshot, &spec, &config, &mut rng).unwrap();
//! assert!(price > 9.0 && price < 11.0);
//! ```
//!
//! ## Reproducibility
//!
//! Sequential pricing consumes draws from the injected source in trial order.
//! Parallel pricing splits trials into fixed-size chunks, each with its own
//! generator derived from the master seed, so a seed gives the same estimate
//! for any rayon pool size.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod mc;
pub mod path_dependent;
pub mod rng;
