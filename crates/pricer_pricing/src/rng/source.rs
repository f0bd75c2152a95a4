//! Standard normal variate source.

/// Source of independent N(0, 1) draws.
///
/// Implementors must return a fresh draw on every call. The path generator
/// never reuses a draw across steps or trials.
///
/// # Examples
///
/// A scripted source that cycles through fixed values:
///
/// ```rust
/// use pricer_pricing::rng::NormalSource;
///
/// struct Cycle(Vec<f64>, usize);
///
/// impl NormalSource for Cycle {
///     fn next_normal(&mut self) -> f64 {
///         let z = self.0[self.1 % self.0.len()];
///         self.1 += 1;
///         z
///     }
/// }
///
/// let mut src = Cycle(vec![1.0, -1.0], 0);
/// assert_eq!(src.next_normal(), 1.0);
/// assert_eq!(src.next_normal(), -1.0);
/// ```
pub trait NormalSource {
    /// Returns the next standard normal draw.
    fn next_normal(&mut self) -> f64;

    /// Fills `buffer` with consecutive draws.
    #[inline]
    fn fill_normal(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.next_normal();
        }
    }
}

impl<N: NormalSource + ?Sized> NormalSource for &mut N {
    #[inline]
    fn next_normal(&mut self) -> f64 {
        (**self).next_normal()
    }

    #[inline]
    fn fill_normal(&mut self, buffer: &mut [f64]) {
        (**self).fill_normal(buffer)
    }
}
