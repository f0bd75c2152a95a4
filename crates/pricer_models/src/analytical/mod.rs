//! Analytical pricing formulas for European options.
//!
//! Closed-form Black-Scholes prices used to validate the Monte Carlo engine
//! and to report the model price alongside simulated estimates.
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: Works with `f32` and `f64`
//! - **Numerical Stability**: Uses erfc-based CDF for accuracy
//! - **Degenerate inputs**: Zero volatility and zero maturity reduce to
//!   discounted intrinsic value instead of dividing by zero

pub mod black_scholes;
pub mod distributions;
pub mod error;

pub use black_scholes::BlackScholes;
pub use distributions::norm_cdf;
pub use error::AnalyticalError;
