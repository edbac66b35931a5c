use crate::intervals::{Interval, Point};
use std::iter::{FlatMap, FusedIterator};
use std::ops::RangeInclusive;

fn points(intv: &Interval) -> RangeInclusive<Point> {
    intv.low()..=intv.high()
}

/// Iterates over every point of a [`crate::ProcSet`], in ascending order.
///
/// The iterator only borrows the set, so any number of independent
/// traversals can run at the same time.
#[derive(Clone)]
pub struct Iter<'a> {
    inner: FlatMap<
        std::slice::Iter<'a, Interval>,
        RangeInclusive<Point>,
        fn(&Interval) -> RangeInclusive<Point>,
    >,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(intervals: &'a [Interval]) -> Self {
        Iter {
            inner: intervals
                .iter()
                .flat_map(points as fn(&Interval) -> RangeInclusive<Point>),
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Point> {
        self.inner.next_back()
    }
}

impl FusedIterator for Iter<'_> {}

/// Iterates over the intervals of a [`crate::ProcSet`], in ascending order.
#[derive(Clone)]
pub struct Intervals<'a> {
    inner: std::slice::Iter<'a, Interval>,
}

impl<'a> Intervals<'a> {
    pub(crate) fn new(intervals: &'a [Interval]) -> Self {
        Intervals {
            inner: intervals.iter(),
        }
    }
}

impl Iterator for Intervals<'_> {
    type Item = Interval;

    fn next(&mut self) -> Option<Interval> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Intervals<'_> {
    fn next_back(&mut self) -> Option<Interval> {
        self.inner.next_back().copied()
    }
}

impl ExactSizeIterator for Intervals<'_> {}
impl FusedIterator for Intervals<'_> {}

#[cfg(test)]
mod test {
    use super::*;

    fn intervals() -> Vec<Interval> {
        vec![
            Interval::new(1, 3).unwrap(),
            Interval::new_single(7),
            Interval::new(10, 11).unwrap(),
        ]
    }

    #[test]
    fn test_points() {
        let intv = intervals();
        assert_eq!(
            Iter::new(&intv).collect::<Vec<_>>(),
            vec![1, 2, 3, 7, 10, 11]
        );
        assert_eq!(
            Iter::new(&intv).rev().collect::<Vec<_>>(),
            vec![11, 10, 7, 3, 2, 1]
        );
        assert_eq!(Iter::new(&[]).next(), None);
    }

    #[test]
    fn test_restartable() {
        let intv = intervals();
        let mut first = Iter::new(&intv);
        assert_eq!(first.next(), Some(1));
        assert_eq!(first.next(), Some(2));

        // A second traversal starts from the beginning, and the first one
        // is not affected.
        let mut second = Iter::new(&intv);
        assert_eq!(second.next(), Some(1));
        assert_eq!(first.next(), Some(3));

        // Cloning an iterator forks the traversal
        let mut third = first.clone();
        assert_eq!(first.next(), Some(7));
        assert_eq!(third.next(), Some(7));
    }

    #[test]
    fn test_intervals() {
        let intv = intervals();
        let it = Intervals::new(&intv);
        assert_eq!(it.len(), 3);
        assert_eq!(
            it.map(<(Point, Point)>::from).collect::<Vec<_>>(),
            vec![(1, 3), (7, 7), (10, 11)]
        );
        assert_eq!(
            Intervals::new(&intv).next_back(),
            Interval::new(10, 11).ok()
        );
    }

    #[test]
    fn test_last_point() {
        let intv = vec![Interval::new(Point::MAX - 1, Point::MAX).unwrap()];
        assert_eq!(
            Iter::new(&intv).collect::<Vec<_>>(),
            vec![Point::MAX - 1, Point::MAX]
        );
    }
}
