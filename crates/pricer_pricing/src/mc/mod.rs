//! Monte Carlo pricing engine.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloPricer
//! ├── SimulationConfig  (paths, step policy, seed)
//! ├── NormalSource      (injected N(0,1) draws)
//! └── Orchestration
//!     ├── simulate_terminal()   European: one draw per trial
//!     ├── simulate_path_into()  Asian: streaming average, O(1) memory
//!     ├── payoff evaluation
//!     └── discounting and standard error
//! ```
//!
//! # Example
//!
//! ```rust
//! use pricer_core::MarketSnapshot;
//! use pricer_models::{OptionRight, OptionSpec};
//! use pricer_pricing::mc::{MonteCarloPricer, SimulationConfig};
//!
//! let config = SimulationConfig::builder()
//!     .num_paths(10_000)
//!     .num_steps(52)
//!     .build()
//!     .unwrap();
//! let pricer = MonteCarloPricer::new(config).unwrap();
//!
//! let snapshot = MarketSnapshot::new(100.0, 0.0, 0.25);
//! let spec = OptionSpec::asian(OptionRight::Put, 100.0, 1.0, 0.03);
//! let result = pricer.price_parallel(&snapshot, &spec, 7).unwrap();
//!
//! assert!(result.price > 0.0);
//! assert!(result.confidence_95() < 0.5);
//! ```

mod config;
mod error;
mod estimator;
mod parallel;
pub mod paths;
mod pricer;

pub use config::{
    SimulationConfig, SimulationConfigBuilder, StepPolicy, DEFAULT_NUM_PATHS, DEFAULT_NUM_STEPS,
    MAX_PATHS, MAX_STEPS,
};
pub use error::{ConfigError, PricingError};
pub use estimator::PayoffAccumulator;
pub use parallel::PARALLEL_CHUNK_SIZE;
pub use paths::{generate_path, sample_paths, simulate_path_into, simulate_terminal, PricePath};
pub use pricer::{discount_factor, price_option, MonteCarloPricer, PricingResult};
