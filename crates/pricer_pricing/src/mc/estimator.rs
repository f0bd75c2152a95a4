//! Running mean and variance of simulated payoffs.

/// Accumulates payoff samples with Welford's update.
///
/// Two accumulators built over disjoint trials combine exactly with
/// [`merge`](Self::merge) (Chan et al. pairwise update), which is how the
/// parallel pricer reduces per-chunk results.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::PayoffAccumulator;
///
/// let mut acc = PayoffAccumulator::new();
/// for payoff in [1.0, 2.0, 3.0, 4.0] {
///     acc.push(payoff);
/// }
///
/// assert_eq!(acc.count(), 4);
/// assert_eq!(acc.mean(), 2.5);
/// assert!((acc.sample_variance() - 5.0 / 3.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PayoffAccumulator {
    count: usize,
    mean: f64,
    /// Σ (x_i - mean)²
    m2: f64,
}

impl PayoffAccumulator {
    /// Creates an empty accumulator.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one payoff sample.
    #[inline]
    pub fn push(&mut self, payoff: f64) {
        self.count += 1;
        let delta = payoff - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (payoff - self.mean);
    }

    /// Folds `other` into `self`.
    pub fn merge(&mut self, other: &PayoffAccumulator) {
        if other.count == 0 {
            return;
        }
        if self.count == 0 {
            *self = *other;
            return;
        }

        let n_a = self.count as f64;
        let n_b = other.count as f64;
        let n = n_a + n_b;
        let delta = other.mean - self.mean;

        self.mean += delta * n_b / n;
        self.m2 += other.m2 + delta * delta * n_a * n_b / n;
        self.count += other.count;
    }

    /// Number of samples.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Sample mean, zero when empty.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sample variance with the n-1 denominator; zero below two samples.
    #[inline]
    pub fn sample_variance(&self) -> f64 {
        if self.count < 2 {
            return 0.0;
        }
        (self.m2 / (self.count - 1) as f64).max(0.0)
    }

    /// Standard error of the mean, √(s² / n).
    #[inline]
    pub fn std_error(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        (self.sample_variance() / self.count as f64).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_empty_and_single() {
        let mut acc = PayoffAccumulator::new();
        assert_eq!(acc.std_error(), 0.0);

        acc.push(7.0);
        assert_eq!(acc.mean(), 7.0);
        assert_eq!(acc.sample_variance(), 0.0);
        assert_eq!(acc.std_error(), 0.0);
    }

    #[test]
    fn test_constant_samples_have_zero_error() {
        let mut acc = PayoffAccumulator::new();
        for _ in 0..1000 {
            acc.push(3.25);
        }
        assert_relative_eq!(acc.mean(), 3.25, epsilon = 1e-12);
        assert_relative_eq!(acc.std_error(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_merge_with_empty() {
        let mut a = PayoffAccumulator::new();
        let mut b = PayoffAccumulator::new();
        b.push(1.0);
        b.push(3.0);

        a.merge(&b);
        assert_eq!(a, b);

        let before = a;
        a.merge(&PayoffAccumulator::new());
        assert_eq!(a, before);
    }

    proptest! {
        #[test]
        fn prop_merge_matches_sequential(
            xs in prop::collection::vec(0.0f64..100.0, 1..60),
            split in 0usize..60,
        ) {
            let split = split.min(xs.len());

            let mut whole = PayoffAccumulator::new();
            xs.iter().for_each(|&x| whole.push(x));

            let mut left = PayoffAccumulator::new();
            let mut right = PayoffAccumulator::new();
            xs[..split].iter().for_each(|&x| left.push(x));
            xs[split..].iter().for_each(|&x| right.push(x));
            left.merge(&right);

            prop_assert_eq!(left.count(), whole.count());
            prop_assert!((left.mean() - whole.mean()).abs() < 1e-9);
            prop_assert!((left.sample_variance() - whole.sample_variance()).abs() < 1e-6);
        }
    }
}
