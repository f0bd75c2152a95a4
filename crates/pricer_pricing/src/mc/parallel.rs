//! Parallel trial partitioning on the rayon pool.
//!
//! Trials are cut into chunks of [`PARALLEL_CHUNK_SIZE`]. Chunk `i` owns
//! `PricerRng::for_stream(seed, i)`, so which thread runs a chunk has no
//! effect on its draws. Partial accumulators are merged in chunk order.

use pricer_models::{GbmDynamics, OptionSpec};
use rayon::prelude::*;

use super::estimator::PayoffAccumulator;
use super::pricer::simulate_trials;
use crate::rng::PricerRng;

/// Trials per parallel work item.
pub const PARALLEL_CHUNK_SIZE: usize = 4_096;

/// Number of trials in chunk `index` of a `num_paths` run.
#[inline]
fn chunk_len(num_paths: usize, index: usize) -> usize {
    let start = index * PARALLEL_CHUNK_SIZE;
    PARALLEL_CHUNK_SIZE.min(num_paths.saturating_sub(start))
}

pub(super) fn simulate_parallel(
    dynamics: &GbmDynamics,
    spec: &OptionSpec,
    num_steps: usize,
    num_paths: usize,
    seed: u64,
) -> PayoffAccumulator {
    let num_chunks = num_paths.div_ceil(PARALLEL_CHUNK_SIZE);

    let partials: Vec<PayoffAccumulator> = (0..num_chunks)
        .into_par_iter()
        .map(|index| {
            let mut rng = PricerRng::for_stream(seed, index as u64);
            simulate_trials(dynamics, spec, num_steps, chunk_len(num_paths, index), &mut rng)
        })
        .collect();

    // Chunk order, not completion order
    partials
        .iter()
        .fold(PayoffAccumulator::new(), |mut acc, partial| {
            acc.merge(partial);
            acc
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_models::OptionRight;

    #[test]
    fn test_chunks_cover_all_paths() {
        for &n in &[1, PARALLEL_CHUNK_SIZE - 1, PARALLEL_CHUNK_SIZE, 3 * PARALLEL_CHUNK_SIZE + 17] {
            let chunks = n.div_ceil(PARALLEL_CHUNK_SIZE);
            let total: usize = (0..chunks).map(|i| chunk_len(n, i)).sum();
            assert_eq!(total, n);
            assert!((0..chunks).all(|i| chunk_len(n, i) > 0));
        }
    }

    #[test]
    fn test_independent_of_pool_size() {
        let gbm = GbmDynamics::new(100.0, 0.04, 0.2);
        let spec = OptionSpec::asian(OptionRight::Call, 100.0, 1.0, 0.04);
        let n = 5 * PARALLEL_CHUNK_SIZE + 123;

        let run = |threads: usize| {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .unwrap()
                .install(|| simulate_parallel(&gbm, &spec, 12, n, 2024))
        };

        let single = run(1);
        let many = run(4);
        assert_eq!(single, many);
        assert_eq!(single.count(), n);
    }

    #[test]
    fn test_seed_changes_result() {
        let gbm = GbmDynamics::new(100.0, 0.0, 0.3);
        let spec = OptionSpec::european(OptionRight::Put, 100.0, 1.0, 0.0);

        let a = simulate_parallel(&gbm, &spec, 1, 10_000, 1);
        let b = simulate_parallel(&gbm, &spec, 1, 10_000, 2);
        assert_ne!(a.mean(), b.mean());
    }
}
