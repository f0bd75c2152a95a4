//! PathObserver: streaming statistics for a single simulated path.
//!
//! Statistics are accumulated incrementally as prices are observed:
//!
//! - **Arithmetic average**: running sum / count
//! - **Terminal**: last observed price

use num_traits::Float;

/// Streaming path observation statistics.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Example
///
/// ```
/// use pricer_pricing::path_dependent::PathObserver;
///
/// let mut observer: PathObserver<f64> = PathObserver::new();
/// for price in [100.0, 105.0, 110.0, 95.0] {
///     observer.observe(price);
/// }
///
/// assert_eq!(observer.count(), 4);
/// assert_eq!(observer.arithmetic_average(), 102.5);
/// assert_eq!(observer.terminal(), 95.0);
/// ```
#[derive(Clone, Debug)]
pub struct PathObserver<T: Float> {
    /// Σ S_i
    running_sum: T,
    count: usize,
    terminal: T,
}

impl<T: Float> PathObserver<T> {
    /// Creates an empty observer.
    #[inline]
    pub fn new() -> Self {
        Self {
            running_sum: T::zero(),
            count: 0,
            terminal: T::zero(),
        }
    }

    /// Records the next price on the path.
    #[inline]
    pub fn observe(&mut self, price: T) {
        self.running_sum = self.running_sum + price;
        self.terminal = price;
        self.count += 1;
    }

    /// Clears all statistics so the observer can be reused for the next trial.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Arithmetic mean of the observed prices, or zero before any observation.
    #[inline]
    pub fn arithmetic_average(&self) -> T {
        if self.count == 0 {
            return T::zero();
        }
        // usize → T conversion cannot fail for Float types
        self.running_sum / T::from(self.count).unwrap_or_else(T::one)
    }

    /// Last observed price, or zero before any observation.
    #[inline]
    pub fn terminal(&self) -> T {
        self.terminal
    }

    /// Number of prices observed.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }
}

impl<T: Float> Default for PathObserver<T> {
    fn default() -> Self {
        Self::new()
    }
}
