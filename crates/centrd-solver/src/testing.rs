//! Reference implementations and strategies for solver tests.

use centrd_core::{DistanceMetric, Position};
use proptest::prelude::*;

/// Minimum total distance over the grid, computed independently of the solver.
pub(crate) fn brute_force_minimum(grid_size: u8, dots: &[Position], metric: DistanceMetric) -> f64 {
    let mut totals = Vec::new();
    for y in 0..grid_size {
        for x in 0..grid_size {
            let cell = Position::new(x, y);
            totals.push(dots.iter().map(|&d| metric.distance(cell, d)).sum::<f64>());
        }
    }
    totals.into_iter().fold(f64::INFINITY, f64::min)
}

/// Number of optimal cells under an integral metric, using integer arithmetic.
pub(crate) fn exact_optimal_count(grid_size: u8, dots: &[Position], metric: DistanceMetric) -> usize {
    assert!(metric.is_integral());
    let totals: Vec<u32> = Position::scan(grid_size)
        .map(|cell| {
            dots.iter()
                .map(|&d| {
                    let (dx, dy) = cell.abs_diff(d);
                    match metric {
                        DistanceMetric::Manhattan => u32::from(dx) + u32::from(dy),
                        _ => u32::from(dx.max(dy)),
                    }
                })
                .sum()
        })
        .collect();
    let min = totals.iter().copied().min().unwrap_or_default();
    totals.iter().filter(|&&t| t == min).count()
}

/// A grid size in `1..=20` with 1 to 12 dots inside it.
pub(crate) fn grid_and_dots() -> impl Strategy<Value = (u8, Vec<Position>)> {
    (1u8..=20).prop_flat_map(|grid_size| {
        let cell = (0..grid_size, 0..grid_size).prop_map(Position::from);
        (Just(grid_size), prop::collection::vec(cell, 1..=12))
    })
}
