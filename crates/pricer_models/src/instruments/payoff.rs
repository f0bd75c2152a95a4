//! Payoff evaluation for European and arithmetic Asian options.
//!
//! Payoffs are undiscounted and never negative:
//!
//! | Style    | Call                | Put                 |
//! |----------|---------------------|---------------------|
//! | European | max(S_T - K, 0)     | max(K - S_T, 0)     |
//! | Asian    | max(A - K, 0)       | max(K - A, 0)       |
//!
//! where A is the arithmetic mean over every sampled point of the path,
//! the initial spot included.

use super::option_spec::{OptionSpec, OptionStyle};

/// Payoff of `spec` given a terminal price.
///
/// For Asian options the caller must pass the path average instead; see
/// [`average_payoff`].
#[inline]
pub fn terminal_payoff(spec: &OptionSpec, terminal: f64) -> f64 {
    spec.right.intrinsic(terminal, spec.strike)
}

/// Payoff of `spec` given the arithmetic average of a path.
#[inline]
pub fn average_payoff(spec: &OptionSpec, average: f64) -> f64 {
    spec.right.intrinsic(average, spec.strike)
}

/// Arithmetic mean of a path. Returns 0 for an empty path.
#[inline]
pub fn arithmetic_mean(path: &[f64]) -> f64 {
    if path.is_empty() {
        return 0.0;
    }
    path.iter().sum::<f64>() / path.len() as f64
}

/// Payoff of `spec` on a fully materialised path.
///
/// European options read the last point; Asian options average all points.
/// An empty path pays nothing.
///
/// # Examples
/// ```
/// use pricer_models::instruments::payoff::path_payoff;
/// use pricer_models::{OptionRight, OptionSpec};
///
/// let path = [100.0, 110.0, 120.0];
/// let euro = OptionSpec::european(OptionRight::Call, 105.0, 1.0, 0.0);
/// let asian = OptionSpec::asian(OptionRight::Call, 105.0, 1.0, 0.0);
///
/// assert_eq!(path_payoff(&euro, &path), 15.0);
/// assert_eq!(path_payoff(&asian, &path), 5.0);
/// ```
pub fn path_payoff(spec: &OptionSpec, path: &[f64]) -> f64 {
    match (spec.style, path.last()) {
        (_, None) => 0.0,
        (OptionStyle::European, Some(&terminal)) => terminal_payoff(spec, terminal),
        (OptionStyle::Asian, Some(_)) => average_payoff(spec, arithmetic_mean(path)),
    }
}
