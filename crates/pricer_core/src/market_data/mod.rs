//! Historical market data for model calibration.
//!
//! This module provides the inputs consumed by the calibrator: a dated
//! series of closing prices, the data source trait that produces it, and a
//! time-to-live cache that memoises calibrations per symbol.
//!
//! # Components
//!
//! - [`series`]: `PricePoint` and chronologically ordered `PriceSeries`
//! - [`source`]: `HistoricalDataSource` collaborator and `LookbackWindow`
//! - [`cache`]: `CalibrationCache` with explicit TTL invalidation
//! - [`error`]: Market data error types (`DataError`)
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use pricer_core::market_data::{PricePoint, PriceSeries};
//!
//! let d = |day| NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
//! let series = PriceSeries::new(vec![
//!     PricePoint::new(d(2), 100.0),
//!     PricePoint::new(d(3), 101.0),
//! ])
//! .unwrap();
//!
//! assert_eq!(series.len(), 2);
//! assert_eq!(series.last_close(), Some(101.0));
//! ```

pub mod cache;
pub mod error;
pub mod series;
pub mod source;

pub use cache::{CalibrationCache, DEFAULT_CACHE_TTL_HOURS};
pub use error::DataError;
pub use series::{PricePoint, PriceSeries};
pub use source::{HistoricalDataSource, LookbackWindow};
