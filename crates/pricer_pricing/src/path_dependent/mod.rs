//! Path-dependent payoff support.
//!
//! Asian payoffs need the arithmetic average of every sampled price. The
//! [`PathObserver`] accumulates it as the path is generated, so the pricer
//! never stores a full trajectory.

mod observer;

pub use observer::PathObserver;
