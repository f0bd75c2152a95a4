//! # pricer_core: Market Data Foundation for the Monte Carlo Pricer
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Historical price series types: `PricePoint`, `PriceSeries` (`market_data::series`)
//! - The historical data source collaborator trait (`market_data::source`)
//! - Model calibration from closing prices: `calibrate`, `MarketSnapshot` (`calibration`)
//! - Explicit calibration memoisation with time-to-live (`market_data::cache`)
//! - Error types: `DataError` (`market_data::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - chrono: Observation dates and cache expiry
//! - thiserror: Structured error types
//! - tracing: Diagnostics for degenerate calibrations
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::calibration::calibrate_closes;
//!
//! let closes = [100.0, 101.0, 99.5, 102.0, 103.5];
//! let snapshot = calibrate_closes(&closes).unwrap();
//!
//! assert_eq!(snapshot.spot(), 103.5);
//! assert!(snapshot.volatility() > 0.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `PricePoint` and `MarketSnapshot`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod calibration;
pub mod market_data;

pub use calibration::{calibrate, calibrate_closes, MarketSnapshot, TRADING_DAYS_PER_YEAR};
pub use market_data::{DataError, HistoricalDataSource, LookbackWindow, PricePoint, PriceSeries};
