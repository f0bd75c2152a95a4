//! # Random Number Generation
//!
//! Standard normal draws for Monte Carlo simulation.
//!
//! - **Reproducibility**: [`PricerRng`] is seeded and reports its seed
//! - **Injection**: pricing functions take any [`NormalSource`], so tests can
//!   substitute scripted draws
//! - **Independence**: every call yields a fresh draw; nothing is cached
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::{NormalSource, PricerRng};
//!
//! let mut rng = PricerRng::from_seed(12345);
//! let z = rng.next_normal();
//! assert!(z.is_finite());
//!
//! // Batch generation into a pre-allocated buffer
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_normal(&mut buffer);
//! ```

mod prng;
mod source;

pub use prng::PricerRng;
pub use source::NormalSource;
