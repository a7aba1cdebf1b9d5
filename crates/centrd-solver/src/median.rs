use centrd_core::{DistanceMetric, Position};

/// Absolute tolerance under which two totals are treated as tied.
///
/// Euclidean totals are sums of square roots and pick up rounding noise;
/// Manhattan and Chebyshev totals are exact integers, so this never merges
/// two different integer totals.
pub const TIE_TOLERANCE: f64 = 1e-4;

/// The set of cells achieving the minimum total distance.
///
/// Never empty. Points are kept in scan order.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimalPoints {
    points: Vec<Position>,
    total_distance: f64,
}

impl OptimalPoints {
    /// Returns every optimal cell, in scan order.
    #[must_use]
    pub fn points(&self) -> &[Position] {
        &self.points
    }

    /// Returns the canonical answer: the first optimal cell in scan order.
    #[must_use]
    pub fn canonical(&self) -> Position {
        self.points[0]
    }

    /// Returns the minimum total distance.
    #[must_use]
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Returns `true` if `pos` is one of the optimal cells.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.points.contains(&pos)
    }

    /// Consumes the set and returns the optimal cells.
    #[must_use]
    pub fn into_points(self) -> Vec<Position> {
        self.points
    }
}

/// Returns the sum of distances from `point` to every dot.
///
/// # Examples
///
/// ```
/// use centrd_core::{DistanceMetric, Position};
/// use centrd_solver::total_distance;
///
/// let dots = [Position::new(0, 0), Position::new(2, 0), Position::new(1, 2)];
/// let total = total_distance(Position::new(1, 0), &dots, DistanceMetric::Manhattan);
/// assert_eq!(total, 4.0);
/// ```
#[must_use]
pub fn total_distance(point: Position, dots: &[Position], metric: DistanceMetric) -> f64 {
    dots.iter().map(|&dot| metric.distance(point, dot)).sum()
}

/// Scans the whole grid and returns every cell of minimum total distance.
///
/// A cell strictly below the running minimum resets the set; a cell within
/// [`TIE_TOLERANCE`] of it is appended. The first point of the result is
/// therefore stable for identical inputs.
///
/// Runs in `O(grid_size² · dots.len())`.
///
/// # Panics
///
/// Panics if `dots` is empty or `grid_size` is zero. Generated puzzles always
/// have at least one dot.
#[must_use]
pub fn find_optimal_points(
    grid_size: u8,
    dots: &[Position],
    metric: DistanceMetric,
) -> OptimalPoints {
    assert!(!dots.is_empty(), "cannot solve a puzzle without dots");
    assert!(grid_size > 0, "cannot solve an empty grid");

    let mut min_distance = f64::INFINITY;
    let mut points = Vec::new();

    for point in Position::scan(grid_size) {
        let total = total_distance(point, dots, metric);
        if total < min_distance {
            min_distance = total;
            points.clear();
            points.push(point);
        } else if (total - min_distance).abs() < TIE_TOLERANCE {
            points.push(point);
        }
    }

    log::trace!(
        "solved {grid_size}x{grid_size} grid with {} dots under {metric}: {} optimal cell(s), total {min_distance}",
        dots.len(),
        points.len(),
    );

    OptimalPoints {
        points,
        total_distance: min_distance,
    }
}

/// Returns `true` if `guess` is one of the optimal cells.
///
/// This accepts any optimal cell, not only the canonical one used for scoring.
#[must_use]
pub fn is_optimal_guess(
    grid_size: u8,
    dots: &[Position],
    metric: DistanceMetric,
    guess: Position,
) -> bool {
    find_optimal_points(grid_size, dots, metric).contains(guess)
}
