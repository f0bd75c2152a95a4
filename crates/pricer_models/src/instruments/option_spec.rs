//! Vanilla option specification.

use std::fmt;
use std::str::FromStr;

use num_traits::Float;

use super::error::InstrumentError;

/// Exercise/averaging style of the option.
///
/// # Variants
/// - `European`: Payoff on the terminal price only
/// - `Asian`: Payoff on the arithmetic average of the sampled path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionStyle {
    /// Terminal-price payoff.
    #[default]
    European,
    /// Arithmetic-average payoff.
    Asian,
}

impl OptionStyle {
    /// Returns `true` if the payoff depends on the whole path.
    #[inline]
    pub fn is_path_dependent(&self) -> bool {
        matches!(self, OptionStyle::Asian)
    }
}

impl fmt::Display for OptionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionStyle::European => write!(f, "european"),
            OptionStyle::Asian => write!(f, "asian"),
        }
    }
}

impl FromStr for OptionStyle {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "european" | "euro" | "eu" => Ok(OptionStyle::European),
            "asian" | "asia" => Ok(OptionStyle::Asian),
            _ => Err(InstrumentError::UnknownVariant {
                kind: "option style",
                value: s.to_string(),
            }),
        }
    }
}

/// Right conveyed by the option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionRight {
    /// Right to buy: max(S - K, 0)
    #[default]
    Call,
    /// Right to sell: max(K - S, 0)
    Put,
}

impl OptionRight {
    /// Intrinsic value of the right against `underlying`.
    ///
    /// Never negative; zero when out of the money.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::OptionRight;
    ///
    /// assert_eq!(OptionRight::Call.intrinsic(110.0_f64, 100.0), 10.0);
    /// assert_eq!(OptionRight::Put.intrinsic(110.0_f64, 100.0), 0.0);
    /// ```
    #[inline]
    pub fn intrinsic<T: Float>(&self, underlying: T, strike: T) -> T {
        let moneyness = match self {
            OptionRight::Call => underlying - strike,
            OptionRight::Put => strike - underlying,
        };
        moneyness.max(T::zero())
    }
}

impl fmt::Display for OptionRight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionRight::Call => write!(f, "call"),
            OptionRight::Put => write!(f, "put"),
        }
    }
}

impl FromStr for OptionRight {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "call" | "c" => Ok(OptionRight::Call),
            "put" | "p" => Ok(OptionRight::Put),
            _ => Err(InstrumentError::UnknownVariant {
                kind: "option right",
                value: s.to_string(),
            }),
        }
    }
}

/// Complete description of a vanilla option contract.
///
/// Fields are plain data; [`validate`](Self::validate) checks the invariants
/// and is called by every pricing entry point.
///
/// # Examples
/// ```
/// use pricer_models::{OptionRight, OptionSpec, OptionStyle};
///
/// let spec = OptionSpec::new(OptionStyle::Asian, OptionRight::Put, 100.0, 0.5, 0.04);
/// assert!(spec.validate().is_ok());
/// assert!(spec.style.is_path_dependent());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionSpec {
    /// European or Asian
    pub style: OptionStyle,
    /// Call or put
    pub right: OptionRight,
    /// Strike price (K)
    pub strike: f64,
    /// Time to maturity in years (T)
    pub maturity: f64,
    /// Continuously compounded risk-free rate (r)
    pub rate: f64,
}

impl OptionSpec {
    /// Creates a specification. Validation is deferred to [`validate`](Self::validate).
    #[inline]
    pub fn new(style: OptionStyle, right: OptionRight, strike: f64, maturity: f64, rate: f64) -> Self {
        Self {
            style,
            right,
            strike,
            maturity,
            rate,
        }
    }

    /// European option shorthand.
    #[inline]
    pub fn european(right: OptionRight, strike: f64, maturity: f64, rate: f64) -> Self {
        Self::new(OptionStyle::European, right, strike, maturity, rate)
    }

    /// Asian option shorthand.
    #[inline]
    pub fn asian(right: OptionRight, strike: f64, maturity: f64, rate: f64) -> Self {
        Self::new(OptionStyle::Asian, right, strike, maturity, rate)
    }

    /// Creates a specification whose strike is `strike_pct × spot`.
    ///
    /// # Errors
    /// - `InstrumentError::InvalidSpot` if spot is not positive and finite
    /// - `InstrumentError::InvalidMoneyness` if strike_pct is not positive and finite
    /// - Any error from [`validate`](Self::validate)
    ///
    /// # Examples
    /// ```
    /// use pricer_models::{OptionRight, OptionSpec, OptionStyle};
    ///
    /// let spec = OptionSpec::with_moneyness(
    ///     OptionStyle::European, OptionRight::Call, 200.0, 1.05, 1.0, 0.04,
    /// ).unwrap();
    /// assert!((spec.strike - 210.0).abs() < 1e-12);
    /// ```
    pub fn with_moneyness(
        style: OptionStyle,
        right: OptionRight,
        spot: f64,
        strike_pct: f64,
        maturity: f64,
        rate: f64,
    ) -> Result<Self, InstrumentError> {
        if !(spot.is_finite() && spot > 0.0) {
            return Err(InstrumentError::InvalidSpot { spot });
        }
        if !(strike_pct.is_finite() && strike_pct > 0.0) {
            return Err(InstrumentError::InvalidMoneyness { strike_pct });
        }

        let spec = Self::new(style, right, spot * strike_pct, maturity, rate);
        spec.validate()?;
        Ok(spec)
    }

    /// Checks strike > 0, maturity > 0 and that every field is finite.
    ///
    /// # Errors
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), InstrumentError> {
        if !(self.strike.is_finite() && self.strike > 0.0) {
            return Err(InstrumentError::InvalidStrike {
                strike: self.strike,
            });
        }
        if !(self.maturity.is_finite() && self.maturity > 0.0) {
            return Err(InstrumentError::InvalidMaturity {
                maturity: self.maturity,
            });
        }
        if !self.rate.is_finite() {
            return Err(InstrumentError::InvalidRate { rate: self.rate });
        }
        Ok(())
    }

    /// Risk-neutral discount factor exp(-rT).
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.maturity).exp()
    }
}
