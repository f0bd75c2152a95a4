//! Geometric Brownian Motion (GBM) under the risk-neutral measure.
//!
//! GBM is the fundamental model for asset price dynamics, described by:
//! ```text
//! dS = r * S * dt + sigma * S * dW
//! ```
//! where:
//! - S = asset price
//! - r = risk-free rate
//! - sigma = volatility
//! - dW = Wiener process increment
//!
//! ## Log-space formulation
//!
//! The transition density is known in closed form, so stepping with
//! ```text
//! S(t+dt) = S(t) * exp((r - 0.5*sigma^2)*dt + sigma*sqrt(dt)*Z)
//! ```
//! samples the exact distribution for any `dt`. Terminal prices are sampled
//! in a single step of length T.

use pricer_core::MarketSnapshot;

/// Risk-neutral GBM parameters.
///
/// The calibrated drift of a [`MarketSnapshot`] is deliberately dropped:
/// under the pricing measure the asset grows at the risk-free rate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmDynamics {
    /// Initial spot price (S₀)
    pub spot: f64,
    /// Risk-free rate (r), annualised
    pub rate: f64,
    /// Volatility (σ), annualised
    pub volatility: f64,
}

impl GbmDynamics {
    /// Creates new dynamics.
    #[inline]
    pub fn new(spot: f64, rate: f64, volatility: f64) -> Self {
        Self {
            spot,
            rate,
            volatility,
        }
    }

    /// Builds risk-neutral dynamics from a calibrated snapshot.
    #[inline]
    pub fn from_snapshot(snapshot: &MarketSnapshot, rate: f64) -> Self {
        Self::new(snapshot.spot(), rate, snapshot.volatility())
    }

    /// Precomputed drift and diffusion terms for a step of length `dt`.
    #[inline]
    pub fn step(&self, dt: f64) -> GbmStep {
        GbmStep {
            drift_dt: (self.rate - 0.5 * self.volatility * self.volatility) * dt,
            vol_sqrt_dt: self.volatility * dt.sqrt(),
        }
    }

    /// Samples S(T) from the initial spot using one standard normal draw.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::GbmDynamics;
    ///
    /// // Zero volatility grows deterministically at the risk-free rate
    /// let gbm = GbmDynamics::new(100.0, 0.05, 0.0);
    /// let st = gbm.terminal(1.0, 1.7);
    /// assert!((st - 100.0 * 0.05_f64.exp()).abs() < 1e-10);
    /// ```
    #[inline]
    pub fn terminal(&self, maturity: f64, z: f64) -> f64 {
        self.step(maturity).advance(self.spot, z)
    }

    /// Risk-neutral forward price S₀·exp(rT).
    #[inline]
    pub fn forward(&self, maturity: f64) -> f64 {
        self.spot * (self.rate * maturity).exp()
    }
}

/// Drift and diffusion coefficients for a fixed step length.
///
/// Hoisting these out of the simulation loop leaves one `exp` per draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmStep {
    /// (r - σ²/2)·dt
    pub drift_dt: f64,
    /// σ·√dt
    pub vol_sqrt_dt: f64,
}

impl GbmStep {
    /// Advances `price` by one step using the standard normal draw `z`.
    #[inline]
    pub fn advance(&self, price: f64, z: f64) -> f64 {
        price * (self.drift_dt + self.vol_sqrt_dt * z).exp()
    }
}
