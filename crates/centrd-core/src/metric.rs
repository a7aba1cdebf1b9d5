//! Distance metrics between grid cells.

use crate::Position;

/// The distance function used to score a puzzle.
///
/// The metric is a session-level setting: it decides both which cells are
/// optimal and how far a guess is from the revealed answer.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant,
)]
pub enum DistanceMetric {
    /// Straight-line distance, `sqrt(dx² + dy²)`.
    #[default]
    #[display("euclidean")]
    Euclidean,
    /// Grid-walk distance, `dx + dy`.
    #[display("manhattan")]
    Manhattan,
    /// King-move distance, `max(dx, dy)`.
    #[display("chebyshev")]
    Chebyshev,
}

impl DistanceMetric {
    /// All metrics, in display order.
    pub const ALL: [Self; 3] = [Self::Euclidean, Self::Manhattan, Self::Chebyshev];

    /// Returns the distance between two cells.
    ///
    /// Manhattan and Chebyshev distances are always whole numbers.
    ///
    /// # Examples
    ///
    /// ```
    /// use centrd_core::{DistanceMetric, Position};
    ///
    /// let d = DistanceMetric::Manhattan.distance(Position::new(1, 1), Position::new(4, 0));
    /// assert_eq!(d, 4.0);
    /// ```
    #[must_use]
    pub fn distance(self, a: Position, b: Position) -> f64 {
        let (dx, dy) = a.abs_diff(b);
        let (dx, dy) = (f64::from(dx), f64::from(dy));
        match self {
            Self::Euclidean => (dx * dx + dy * dy).sqrt(),
            Self::Manhattan => dx + dy,
            Self::Chebyshev => dx.max(dy),
        }
    }

    /// Returns `true` if every distance under this metric is an integer.
    #[must_use]
    pub const fn is_integral(self) -> bool {
        !matches!(self, Self::Euclidean)
    }
}

/// Error returned when parsing an unknown metric name.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown distance metric: {_0:?}")]
pub struct ParseMetricError(#[error(not(source))] String);

impl std::str::FromStr for DistanceMetric {
    type Err = ParseMetricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseMetricError(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_known_distances() {
        let a = Position::new(2, 3);
        let b = Position::new(5, 7);
        assert!((DistanceMetric::Euclidean.distance(a, b) - 5.0).abs() < f64::EPSILON);
        assert_eq!(DistanceMetric::Manhattan.distance(a, b), 7.0);
        assert_eq!(DistanceMetric::Chebyshev.distance(a, b), 4.0);
    }

    #[test]
    fn test_parse_round_trip() {
        for metric in DistanceMetric::ALL {
            assert_eq!(metric.to_string().parse::<DistanceMetric>(), Ok(metric));
        }
        assert_eq!("Manhattan".parse(), Ok(DistanceMetric::Manhattan));
        assert!("taxicab".parse::<DistanceMetric>().is_err());
    }

    #[test]
    fn test_parse_error_is_std_error() {
        let err: Box<dyn std::error::Error> =
            Box::new("taxicab".parse::<DistanceMetric>().unwrap_err());
        assert_eq!(err.to_string(), r#"unknown distance metric: "taxicab""#);
        assert!(err.source().is_none());
    }

    proptest! {
        #[test]
        fn distance_is_symmetric_and_zero_on_self(
            ax in 0u8..20, ay in 0u8..20, bx in 0u8..20, by in 0u8..20,
        ) {
            let a = Position::new(ax, ay);
            let b = Position::new(bx, by);
            for metric in DistanceMetric::ALL {
                prop_assert_eq!(metric.distance(a, b), metric.distance(b, a));
                prop_assert_eq!(metric.distance(a, a), 0.0);
            }
        }

        #[test]
        fn chebyshev_le_euclidean_le_manhattan(
            ax in 0u8..20, ay in 0u8..20, bx in 0u8..20, by in 0u8..20,
        ) {
            let a = Position::new(ax, ay);
            let b = Position::new(bx, by);
            let che = DistanceMetric::Chebyshev.distance(a, b);
            let euc = DistanceMetric::Euclidean.distance(a, b);
            let man = DistanceMetric::Manhattan.distance(a, b);
            prop_assert!(che <= euc + 1e-9);
            prop_assert!(euc <= man + 1e-9);
        }
    }
}
