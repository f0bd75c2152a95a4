//! Black-Scholes prices for European options.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! With σ = 0 or T = 0 the terminal price is known, so both formulas
//! collapse to the discounted intrinsic value of the forward.

use pricer_core::MarketSnapshot;

use super::distributions::norm_cdf;
use super::error::AnalyticalError;
use crate::instruments::{OptionRight, OptionSpec, OptionStyle};

/// Below this σ√T the closed form is replaced by the deterministic limit.
const DEGENERATE_VOL_SQRT_T: f64 = 1e-12;

/// Black-Scholes model for European option pricing.
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
/// let call_price = bs.price_call(100.0, 1.0);
/// let put_price = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes {
    spot: f64,
    rate: f64,
    volatility: f64,
}

impl BlackScholes {
    /// Creates a new Black-Scholes model.
    ///
    /// Zero volatility is accepted and prices deterministically.
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot is not positive and finite
    /// - `AnalyticalError::InvalidVolatility` if volatility is negative or not finite
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// assert!(BlackScholes::new(-100.0, 0.05, 0.2).is_err());
    /// assert!(BlackScholes::new(100.0, 0.05, -0.1).is_err());
    /// assert!(BlackScholes::new(100.0, 0.05, 0.0).is_ok());
    /// ```
    pub fn new(spot: f64, rate: f64, volatility: f64) -> Result<Self, AnalyticalError> {
        if !(spot.is_finite() && spot > 0.0) {
            return Err(AnalyticalError::InvalidSpot { spot });
        }
        if !(volatility.is_finite() && volatility >= 0.0) {
            return Err(AnalyticalError::InvalidVolatility { volatility });
        }

        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Builds the model from a calibrated snapshot and a risk-free rate.
    pub fn from_snapshot(snapshot: &MarketSnapshot, rate: f64) -> Result<Self, AnalyticalError> {
        Self::new(snapshot.spot(), rate, snapshot.volatility())
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns (d₁, d₂), or `None` when σ√T is degenerate.
    #[inline]
    pub fn d1_d2(&self, strike: f64, expiry: f64) -> Option<(f64, f64)> {
        let vol_sqrt_t = self.volatility * expiry.max(0.0).sqrt();
        if vol_sqrt_t < DEGENERATE_VOL_SQRT_T {
            return None;
        }

        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate + 0.5 * self.volatility * self.volatility) * expiry;
        let d1 = (log_moneyness + drift) / vol_sqrt_t;
        Some((d1, d1 - vol_sqrt_t))
    }

    /// European call price.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0, 0.04, 0.2).unwrap();
    /// assert!((bs.price_call(100.0, 1.0) - 9.9251).abs() < 1e-3);
    /// ```
    pub fn price_call(&self, strike: f64, expiry: f64) -> f64 {
        self.price(OptionRight::Call, strike, expiry)
    }

    /// European put price.
    pub fn price_put(&self, strike: f64, expiry: f64) -> f64 {
        self.price(OptionRight::Put, strike, expiry)
    }

    fn price(&self, right: OptionRight, strike: f64, expiry: f64) -> f64 {
        let discount = (-self.rate * expiry).exp();

        match self.d1_d2(strike, expiry) {
            None => {
                // Deterministic terminal price S·e^(rT)
                let forward = self.spot * (self.rate * expiry).exp();
                discount * right.intrinsic(forward, strike)
            }
            Some((d1, d2)) => match right {
                OptionRight::Call => self.spot * norm_cdf(d1) - strike * discount * norm_cdf(d2),
                OptionRight::Put => strike * discount * norm_cdf(-d2) - self.spot * norm_cdf(-d1),
            },
        }
    }

    /// Prices a European [`OptionSpec`] at the spec's own rate.
    ///
    /// # Errors
    /// `AnalyticalError::UnsupportedStyle` for Asian options.
    pub fn price_option(spot: f64, volatility: f64, spec: &OptionSpec) -> Result<f64, AnalyticalError> {
        if spec.style != OptionStyle::European {
            return Err(AnalyticalError::UnsupportedStyle {
                style: spec.style.to_string(),
            });
        }
        let model = Self::new(spot, spec.rate, volatility)?;
        Ok(model.price(spec.right, spec.strike, spec.maturity))
    }
}
