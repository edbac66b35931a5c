//! The sweep shared by all binary set operations.
//!
//! Each input is seen as an ordered list of boundaries: an interval
//! `[low, high]` opens at `low` and closes at `high + 1`.  Walking the
//! boundaries of both inputs in ascending order, we always know whether the
//! current point is inside the left set and inside the right set.  A merge
//! predicate combines those two flags, and an output interval starts or ends
//! whenever the predicate's value changes.
//!
//! ```text
//!      left:   [-------]      [----]
//!     right:        [-----------]
//!
//!     union:   [-------------------]      l | r
//!     inter:        [--]      [-]         l & r
//!      diff:   [---]             [-]      l & !r
//!       xor:   [---]   [------]  [-]      l ^ r
//! ```
//!
//! Boundaries are computed on `u64`, so that `high + 1` never overflows.
//! Since the output only changes state on a boundary, and all boundaries at
//! the same position are consumed together, the produced intervals are
//! sorted, disjoint and never touch: the output is already canonical.

use crate::intervals::{Interval, Point};
use std::iter::FusedIterator;

/// Decides whether a point belongs to the result, given whether it belongs
/// to the left and to the right operands.  A predicate must return false
/// when the point is in neither operand.
pub(crate) type MergePredicate = fn(bool, bool) -> bool;

pub(crate) fn union(in_left: bool, in_right: bool) -> bool {
    in_left | in_right
}

pub(crate) fn intersection(in_left: bool, in_right: bool) -> bool {
    in_left & in_right
}

pub(crate) fn difference(in_left: bool, in_right: bool) -> bool {
    in_left & !in_right
}

pub(crate) fn symmetric_difference(in_left: bool, in_right: bool) -> bool {
    in_left ^ in_right
}

/// The boundaries of a canonical list of intervals, in ascending order.
struct Boundaries<'a> {
    intervals: std::slice::Iter<'a, Interval>,
    pending_close: Option<u64>,
    next: Option<u64>,
}

impl<'a> Boundaries<'a> {
    fn new(intervals: &'a [Interval]) -> Self {
        let mut result = Boundaries {
            intervals: intervals.iter(),
            pending_close: None,
            next: None,
        };
        result.advance();
        result
    }

    fn peek(&self) -> Option<u64> {
        self.next
    }

    fn advance(&mut self) {
        self.next = match self.pending_close.take() {
            Some(close) => Some(close),
            None => self.intervals.next().map(|intv| {
                self.pending_close = Some(u64::from(intv.high()) + 1);
                u64::from(intv.low())
            }),
        };
    }
}

/// A lazy iterator over the intervals of `predicate(left, right)`.
/// Stopping early (for instance to check whether the result is empty)
/// never visits the remaining boundaries.
pub(crate) struct Merge<'a> {
    left: Boundaries<'a>,
    right: Boundaries<'a>,
    predicate: MergePredicate,
    in_left: bool,
    in_right: bool,
    inside: bool,
    start: u64,
}

impl<'a> Merge<'a> {
    pub(crate) fn new(
        left: &'a [Interval],
        right: &'a [Interval],
        predicate: MergePredicate,
    ) -> Self {
        Merge {
            left: Boundaries::new(left),
            right: Boundaries::new(right),
            predicate,
            in_left: false,
            in_right: false,
            inside: false,
            start: 0,
        }
    }
}

impl Iterator for Merge<'_> {
    type Item = Interval;

    fn next(&mut self) -> Option<Interval> {
        loop {
            let position = match (self.left.peek(), self.right.peek()) {
                (None, None) => return None,
                (Some(l), None) => l,
                (None, Some(r)) => r,
                (Some(l), Some(r)) => l.min(r),
            };
            if self.left.peek() == Some(position) {
                self.left.advance();
                self.in_left = !self.in_left;
            }
            if self.right.peek() == Some(position) {
                self.right.advance();
                self.in_right = !self.in_right;
            }

            let inside = (self.predicate)(self.in_left, self.in_right);
            if inside != self.inside {
                self.inside = inside;
                if inside {
                    self.start = position;
                } else {
                    // An interval only opens at a point that is inside one of
                    // the operands, and closes at most at Point::MAX + 1, so
                    // both bounds fit in a Point.
                    return Some(Interval::new_unchecked(
                        self.start as Point,
                        (position - 1) as Point,
                    ));
                }
            }
        }
    }
}

impl FusedIterator for Merge<'_> {}

#[cfg(test)]
mod test {
    use super::*;

    fn intervals(bounds: &[(Point, Point)]) -> Vec<Interval> {
        bounds
            .iter()
            .map(|(l, h)| Interval::new(*l, *h).unwrap())
            .collect()
    }

    fn merge(
        left: &[(Point, Point)],
        right: &[(Point, Point)],
        predicate: MergePredicate,
    ) -> Vec<(Point, Point)> {
        let left = intervals(left);
        let right = intervals(right);
        Merge::new(&left, &right, predicate).map(<(Point, Point)>::from).collect()
    }

    const NONE: Vec<(Point, Point)> = Vec::new();

    #[test]
    fn test_boundaries() {
        let intv = intervals(&[(1, 3), (7, 7)]);
        let mut b = Boundaries::new(&intv);
        let mut all = Vec::new();
        while let Some(p) = b.peek() {
            all.push(p);
            b.advance();
        }
        assert_eq!(all, vec![1, 4, 7, 8]);
        assert_eq!(Boundaries::new(&[]).peek(), None);
    }

    #[test]
    fn test_predicates() {
        let left = [(11, 45), (88, 100)];
        let right = [(33, 54), (63, 74), (79, 94)];
        assert_eq!(
            merge(&left, &right, union),
            vec![(11, 54), (63, 74), (79, 100)]
        );
        assert_eq!(
            merge(&left, &right, intersection),
            vec![(33, 45), (88, 94)]
        );
        assert_eq!(
            merge(&left, &right, difference),
            vec![(11, 32), (95, 100)]
        );
        assert_eq!(
            merge(&left, &right, symmetric_difference),
            vec![(11, 32), (46, 54), (63, 74), (79, 87), (95, 100)]
        );
    }

    #[test]
    fn test_adjacent() {
        // Touching intervals from both sides are merged into one
        assert_eq!(merge(&[(1, 4)], &[(5, 9)], union), vec![(1, 9)]);
        assert_eq!(merge(&[(5, 9)], &[(1, 4)], union), vec![(1, 9)]);

        // Removing the middle of an interval splits it in two
        assert_eq!(
            merge(&[(1, 9)], &[(4, 5)], difference),
            vec![(1, 3), (6, 9)]
        );

        // Identical bounds on both sides
        assert_eq!(merge(&[(1, 9)], &[(1, 9)], symmetric_difference), NONE);
        assert_eq!(merge(&[(1, 9)], &[(1, 9)], intersection), vec![(1, 9)]);
    }

    #[test]
    fn test_extreme_bounds() {
        let max = Point::MAX;
        assert_eq!(
            merge(&[(0, max)], &[(5, 5)], difference),
            vec![(0, 4), (6, max)]
        );
        assert_eq!(
            merge(&[(max - 3, max)], &[(0, max - 4)], union),
            vec![(0, max)]
        );
        assert_eq!(
            merge(&[(0, max)], &[(max, max)], symmetric_difference),
            vec![(0, max - 1)]
        );
    }

    #[test]
    fn test_empty_operands() {
        assert_eq!(merge(&[], &[], union), NONE);
        assert_eq!(merge(&[], &[(1, 2)], union), vec![(1, 2)]);
        assert_eq!(merge(&[(1, 2)], &[], intersection), NONE);
        assert_eq!(merge(&[], &[(1, 2)], difference), NONE);
    }
}
