//! Grid cell coordinates.

/// A cell on a square puzzle grid.
///
/// Coordinates are zero-based; `x` grows to the right and `y` grows downward.
/// A position is only meaningful together with a grid size `n`, where
/// `0 <= x, y < n`.
///
/// # Examples
///
/// ```
/// use centrd_core::Position;
///
/// let pos = Position::new(2, 5);
/// assert_eq!(pos.x(), 2);
/// assert_eq!(pos.y(), 5);
/// assert_eq!(pos.to_string(), "(2, 5)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("({x}, {y})")]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Returns the column of this position.
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row of this position.
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the absolute coordinate differences `(|dx|, |dy|)` to `other`.
    #[must_use]
    pub const fn abs_diff(self, other: Self) -> (u8, u8) {
        (self.x.abs_diff(other.x), self.y.abs_diff(other.y))
    }

    /// Returns `true` if this position lies inside a `grid_size` × `grid_size` grid.
    #[must_use]
    pub const fn is_within(self, grid_size: u8) -> bool {
        self.x < grid_size && self.y < grid_size
    }

    /// Iterates every cell of a `grid_size` × `grid_size` grid.
    ///
    /// Cells are produced column by column: `x` is the outer loop and `y` the
    /// inner one. Solver tie-breaking relies on this order being stable.
    ///
    /// # Examples
    ///
    /// ```
    /// use centrd_core::Position;
    ///
    /// let cells: Vec<_> = Position::scan(2).collect();
    /// assert_eq!(
    ///     cells,
    ///     [
    ///         Position::new(0, 0),
    ///         Position::new(0, 1),
    ///         Position::new(1, 0),
    ///         Position::new(1, 1),
    ///     ]
    /// );
    /// ```
    pub fn scan(grid_size: u8) -> impl Iterator<Item = Self> {
        (0..grid_size).flat_map(move |x| (0..grid_size).map(move |y| Self::new(x, y)))
    }
}

impl From<(u8, u8)> for Position {
    fn from((x, y): (u8, u8)) -> Self {
        Self::new(x, y)
    }
}
