//! Replay and summary queries over recorded flights.

use num_rational::Rational64;
use num_traits::{One, Zero};

use crate::error::{Result, SearchError};
use crate::types::{Offset, Op, Step};

/// Re-apply every recorded move starting from 1, checking that each
/// step's value matches and that the flight ends at exactly 1.
///
/// # Examples
///
/// ```
/// use boomerang::v1::{query, Bounds, Offset, shortest_flight};
///
/// let offset = Offset::new(1, 2).unwrap();
/// let steps = shortest_flight(offset, &Bounds::default()).unwrap();
/// assert!(query::replay(offset, &steps).is_ok());
/// ```
pub fn replay(offset: Offset, steps: &[Step]) -> Result<()> {
    if steps.is_empty() {
        return Err(SearchError::EmptyFlight);
    }
    if steps[0].op != Op::AddOffset {
        return Err(SearchError::FirstMoveNotAdd);
    }

    let mut cur = Rational64::one();
    for (index, step) in steps.iter().enumerate() {
        cur = match step.op {
            Op::AddOffset => cur + offset.value(),
            Op::Invert => {
                if cur.is_zero() {
                    return Err(SearchError::InvertedZero { index });
                }
                cur.recip()
            }
        };
        if cur != step.value {
            return Err(SearchError::ReplayMismatch {
                index,
                expected: cur.to_string(),
                recorded: step.value.to_string(),
            });
        }
    }

    if !cur.is_one() {
        return Err(SearchError::OpenFlight {
            last: cur.to_string(),
        });
    }
    Ok(())
}

/// Tally of moves by kind: `(add_offset, invert)`.
pub fn op_counts(steps: &[Step]) -> (usize, usize) {
    let adds = steps.iter().filter(|s| s.op == Op::AddOffset).count();
    (adds, steps.len() - adds)
}

/// Largest reduced denominator touched along the flight.
pub fn peak_denominator(steps: &[Step]) -> i64 {
    steps.iter().map(|s| *s.value.denom()).max().unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::shortest_flight;
    use crate::types::Bounds;

    fn frac(m: i64, n: i64) -> Rational64 {
        Rational64::new(m, n)
    }

    fn half_trip() -> (Offset, Vec<Step>) {
        let offset = Offset::new(1, 2).unwrap();
        let steps = shortest_flight(offset, &Bounds::default()).unwrap();
        (offset, steps)
    }

    #[test]
    fn test_replay_accepts_found_flight() {
        let (offset, steps) = half_trip();
        assert!(replay(offset, &steps).is_ok());
    }

    #[test]
    fn test_replay_rejects_empty() {
        let offset = Offset::new(1, 2).unwrap();
        assert!(matches!(replay(offset, &[]), Err(SearchError::EmptyFlight)));
    }

    #[test]
    fn test_replay_rejects_leading_invert() {
        let offset = Offset::new(1, 2).unwrap();
        let steps = [Step::new(frac(1, 1), Op::Invert)];
        assert!(matches!(
            replay(offset, &steps),
            Err(SearchError::FirstMoveNotAdd)
        ));
    }

    #[test]
    fn test_replay_flags_tampered_value() {
        let (offset, mut steps) = half_trip();
        steps[1].value = frac(7, 3);
        let err = replay(offset, &steps).unwrap_err();
        match err {
            SearchError::ReplayMismatch {
                index,
                expected,
                recorded,
            } => {
                assert_eq!(index, 1);
                assert_eq!(expected, "2");
                assert_eq!(recorded, "7/3");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_replay_flags_reciprocal_of_zero() {
        // r = -1 drives 1 to 0 on the first move.
        let offset = Offset::new(-1, 1).unwrap();
        let steps = [
            Step::new(frac(0, 1), Op::AddOffset),
            Step::new(frac(1, 1), Op::Invert),
        ];
        assert!(matches!(
            replay(offset, &steps),
            Err(SearchError::InvertedZero { index: 1 })
        ));
    }

    #[test]
    fn test_replay_flags_open_flight() {
        let offset = Offset::new(1, 2).unwrap();
        let steps = [Step::new(frac(3, 2), Op::AddOffset)];
        assert!(matches!(
            replay(offset, &steps),
            Err(SearchError::OpenFlight { .. })
        ));
    }

    #[test]
    fn test_op_counts() {
        let (_, steps) = half_trip();
        assert_eq!(op_counts(&steps), (3, 1));
        assert_eq!(op_counts(&[]), (0, 0));
    }

    #[test]
    fn test_peak_denominator() {
        let (_, steps) = half_trip();
        assert_eq!(peak_denominator(&steps), 2);
        assert_eq!(peak_denominator(&[]), 1);
    }

    #[test]
    fn test_eleventh_summary() {
        let offset = Offset::new(1, 11).unwrap();
        let b = Bounds {
            max_steps: 2000,
            den_limit: 5000,
            value_limit: 1_000_000,
        };
        let steps = shortest_flight(offset, &b).unwrap();
        assert_eq!(op_counts(&steps), (58, 4));
        assert_eq!(peak_denominator(&steps), 88);
    }
}
