//! Frontier sampling benchmark over the default five-asset grid.

use criterion::{Criterion, criterion_group, criterion_main};
use hobart_risk::{StatisticsSnapshot, sample_frontier};
use ndarray::{Array1, arr2};
use std::hint::black_box;

fn table_snapshot() -> StatisticsSnapshot {
    let expected_returns = Array1::from_vec(vec![0.0211, 0.0412, 0.0808, 0.0983, 0.1105]);
    let std_devs = Array1::from_vec(vec![0.0351, 0.0847, 0.1514, 0.1761, 0.2300]);
    let correlation = arr2(&[
        [1.00, 0.52, -0.05, -0.03, -0.05],
        [0.52, 1.00, 0.17, 0.40, 0.29],
        [-0.05, 0.17, 1.00, 0.85, 0.75],
        [-0.03, 0.40, 0.85, 1.00, 0.87],
        [-0.05, 0.29, 0.75, 0.87, 1.00],
    ]);
    StatisticsSnapshot::new(expected_returns, std_devs, correlation).unwrap()
}

fn bench_sample_frontier(c: &mut Criterion) {
    let snapshot = table_snapshot();

    c.bench_function("sample_frontier_30", |b| {
        b.iter(|| sample_frontier(black_box(&snapshot), 30))
    });

    c.bench_function("sample_frontier_100", |b| {
        b.iter(|| sample_frontier(black_box(&snapshot), 100))
    });
}

criterion_group!(benches, bench_sample_frontier);
criterion_main!(benches);
