//! Criterion benchmarks for pricer_core calibration.
//!
//! Measures calibration cost across history lengths and the cost of a warm
//! cache lookup against a cold calibration.

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_core::market_data::source::InMemorySource;
use pricer_core::market_data::CalibrationCache;
use pricer_core::{calibrate, calibrate_closes, LookbackWindow, PricePoint, PriceSeries};

/// Generate a zig-zag close history of `n` points.
fn generate_closes(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| 100.0 * (1.0 + 0.01 * ((i % 7) as f64 - 3.0)))
        .collect()
}

fn dated_series(n: usize) -> PriceSeries {
    let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    let points = generate_closes(n)
        .into_iter()
        .enumerate()
        .map(|(i, close)| PricePoint::new(start + Duration::days(i as i64), close))
        .collect();
    PriceSeries::new(points).unwrap()
}

fn bench_calibrate(c: &mut Criterion) {
    let mut group = c.benchmark_group("calibrate");

    for size in [252, 2_520, 25_200] {
        let closes = generate_closes(size);
        group.bench_with_input(BenchmarkId::new("closes", size), &closes, |b, closes| {
            b.iter(|| calibrate_closes(black_box(closes)))
        });

        let series = dated_series(size);
        group.bench_with_input(BenchmarkId::new("series", size), &series, |b, series| {
            b.iter(|| calibrate(black_box(series)))
        });
    }

    group.finish();
}

fn bench_cache(c: &mut Criterion) {
    let mut group = c.benchmark_group("calibration_cache");

    let mut source = InMemorySource::new();
    source.insert("BENCH", dated_series(2_520));

    let cache = CalibrationCache::new(source).with_window(LookbackWindow::one_year());
    cache.get_or_calibrate("BENCH").unwrap();

    group.bench_function("warm_hit", |b| {
        b.iter(|| cache.get_or_calibrate(black_box("BENCH")))
    });

    group.bench_function("cold_miss", |b| {
        b.iter(|| {
            cache.invalidate("BENCH");
            cache.get_or_calibrate(black_box("BENCH"))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_calibrate, bench_cache);
criterion_main!(benches);
