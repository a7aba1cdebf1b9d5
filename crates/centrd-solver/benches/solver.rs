//! Benchmarks for the geometric-median scan.
//!
//! # Benchmarks
//!
//! - **`find_optimal_points`**: solves the largest puzzle shape the generator
//!   produces (20×20 grid, 12 dots) under each distance metric.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use centrd_core::{DistanceMetric, Position};
use centrd_solver::find_optimal_points;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

const HARD_DOTS: [(u8, u8); 12] = [
    (14, 13),
    (16, 12),
    (6, 0),
    (18, 4),
    (0, 9),
    (16, 3),
    (9, 8),
    (11, 11),
    (1, 13),
    (11, 3),
    (11, 1),
    (18, 0),
];

fn bench_find_optimal_points(c: &mut Criterion) {
    let dots: Vec<_> = HARD_DOTS.into_iter().map(Position::from).collect();

    for metric in DistanceMetric::ALL {
        c.bench_with_input(
            BenchmarkId::new("find_optimal_points", metric),
            &dots,
            |b, dots| {
                b.iter(|| find_optimal_points(hint::black_box(20), hint::black_box(dots), metric));
            },
        );
    }
}

criterion_group!(benches, bench_find_optimal_points);
criterion_main!(benches);
