//! Breadth-first search for the shortest flight from 1 back to 1.
//!
//! The state space is the graph of exact rationals reachable from 1
//! under the two moves, pruned by [`Bounds`]. All edges have unit
//! weight, so the first time 1 is reached the path is minimal.

use std::collections::{HashMap, VecDeque};

use num_rational::Rational64;
use num_traits::{CheckedAdd, One, Zero};

use crate::error::Result;
use crate::types::{Bounds, Flight, Offset, Op, Step};

/// Find the shortest sequence of moves returning 1 to itself.
///
/// The first move is always `1 + r`; every later move adds r again or
/// takes the reciprocal. Returns `None` when no round trip exists
/// within `bounds`, which says nothing about what exists beyond them.
///
/// # Examples
///
/// ```
/// use boomerang::v1::{Bounds, Offset, shortest_flight};
///
/// let offset = Offset::new(1, 2).unwrap();
/// let steps = shortest_flight(offset, &Bounds::default()).unwrap();
/// assert_eq!(steps.len(), 4);
/// assert_eq!(steps.last().unwrap().value.to_string(), "1");
/// ```
pub fn shortest_flight(offset: Offset, bounds: &Bounds) -> Option<Vec<Step>> {
    let one = Rational64::one();
    let r = offset.value();
    let first = one + r;

    // r == 0: the mandatory first move is already the whole trip
    if first == one {
        return Some(vec![Step::new(one, Op::AddOffset)]);
    }
    if !admits(&first, bounds) {
        return None;
    }

    // Parent and depth maps double as the visited set. A value is
    // inserted at most once, so BFS level order fixes the path length;
    // 1 itself only ever enters as the terminal entry.
    let mut parents: HashMap<Rational64, (Rational64, Op)> = HashMap::new();
    let mut depths: HashMap<Rational64, u32> = HashMap::new();
    let mut frontier: VecDeque<Rational64> = VecDeque::new();
    parents.insert(first, (one, Op::AddOffset));
    depths.insert(first, 1);
    frontier.push_back(first);

    while let Some(x) = frontier.pop_front() {
        let depth = depths[&x];
        if depth >= bounds.max_steps {
            continue;
        }
        for (next, op) in neighbors(x, r) {
            if !admits(&next, bounds) || parents.contains_key(&next) {
                continue;
            }
            parents.insert(next, (x, op));
            depths.insert(next, depth + 1);
            if next == one {
                return Some(backtrack(&parents, one));
            }
            frontier.push_back(next);
        }
    }

    None
}

/// Entry point from raw integers: validate r = m/n, then search.
///
/// `Err` only for a zero denominator; an exhausted search is `Ok(None)`.
pub fn search(m: i64, n: i64, bounds: &Bounds) -> Result<Option<Vec<Step>>> {
    Ok(shortest_flight(Offset::new(m, n)?, bounds))
}

/// Run [`shortest_flight`] and package the result as a [`Flight`]
/// document recording the offset and bounds that produced it.
pub fn plan_flight(offset: Offset, bounds: &Bounds) -> Option<Flight> {
    shortest_flight(offset, bounds).map(|steps| Flight::new(offset, *bounds, steps))
}

/// Candidate moves out of `x`, in discovery order: `+r` first, then the
/// reciprocal. The reciprocal of zero is no move at all; a sum that
/// overflows `i64` cannot satisfy any representable magnitude guard.
fn neighbors(x: Rational64, r: Rational64) -> Vec<(Rational64, Op)> {
    let mut out = Vec::with_capacity(2);
    if let Some(sum) = x.checked_add(&r) {
        out.push((sum, Op::AddOffset));
    }
    if !x.is_zero() {
        out.push((x.recip(), Op::Invert));
    }
    out
}

/// Denominator and magnitude pruning guard, on lowest-terms components.
fn admits(z: &Rational64, bounds: &Bounds) -> bool {
    *z.denom() <= bounds.den_limit
        && z.numer().checked_abs().is_some_and(|a| a <= bounds.value_limit)
}

/// Walk the parent map backwards from the terminal 1, then reverse.
/// Stops when the parent is the synthetic start 1, which the map holds
/// only as the terminal entry's value, never as a revisited key.
fn backtrack(parents: &HashMap<Rational64, (Rational64, Op)>, one: Rational64) -> Vec<Step> {
    let mut steps = Vec::new();
    let mut cur = one;
    loop {
        let (prev, op) = parents[&cur];
        steps.push(Step::new(cur, op));
        cur = prev;
        if cur == one {
            break;
        }
    }
    steps.reverse();
    steps
}
