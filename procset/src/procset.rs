use crate::errors::{Error, Result};
use crate::intervals::{Interval, Point};
use crate::iter::{Intervals, Iter};
use crate::merge::{self, Merge, MergePredicate};
use std::cmp::Ordering;

/// A set of points, stored as a list of closed intervals.
///
/// The list is always kept canonical: intervals are sorted, disjoint, and
/// two consecutive intervals never touch (`[1,4]` and `[5,9]` are always
/// stored as `[1,9]`).  As a result, two sets contain the same points if and
/// only if they have the same list of intervals, and all operations cost a
/// time proportional to the number of intervals rather than the number of
/// points.
///
/// ```
/// use procset::ProcSet;
/// let a: ProcSet = "11-45 88-100".parse().unwrap();
/// let b: ProcSet = "33-54 63-74 79-94".parse().unwrap();
/// assert_eq!((&a | &b).to_string(), "11-54 63-74 79-100");
/// assert_eq!((&a & &b).to_string(), "33-45 88-94");
/// assert_eq!((&a - &b).to_string(), "11-32 95-100");
/// assert_eq!((&a ^ &b).to_string(), "11-32 46-54 63-74 79-87 95-100");
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ProcSet {
    intervals: Vec<Interval>,

    // Number of points in intervals[0..=i], used for cardinality and
    // indexing.  Always has the same length as intervals.
    cumulative: Vec<u64>,
}

/// Whether the intervals are sorted, disjoint and not touching.
pub(crate) fn is_canonical(intervals: &[Interval]) -> bool {
    intervals
        .windows(2)
        .all(|w| matches!(w, [a, b] if u64::from(a.high()) + 1 < u64::from(b.low())))
}

/// Sort the intervals and merge those that overlap or touch.
pub(crate) fn normalize(mut raw: Vec<Interval>) -> Vec<Interval> {
    raw.sort_unstable();
    let mut result: Vec<Interval> = Vec::with_capacity(raw.len());
    for intv in raw {
        if let Some(current) = result.last_mut() {
            if current.contiguous(&intv) {
                *current = current.convex_hull(&intv);
                continue;
            }
        }
        result.push(intv);
    }
    result
}

impl ProcSet {
    /// Returns an empty set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a list of intervals that is already canonical, for instance the
    /// output of a merge.
    pub(crate) fn from_canonical(intervals: Vec<Interval>) -> Self {
        debug_assert!(is_canonical(&intervals), "not canonical {intervals:?}");
        let cumulative = intervals
            .iter()
            .scan(0_u64, |total, intv| {
                *total += intv.count();
                Some(*total)
            })
            .collect();
        Self {
            intervals,
            cumulative,
        }
    }

    /// Create a set from any list of intervals, in any order, possibly
    /// overlapping.
    #[must_use]
    pub fn from_intervals<I: IntoIterator<Item = Interval>>(raw: I) -> Self {
        let raw: Vec<Interval> = raw.into_iter().collect();
        let count = raw.len();
        let result = Self::from_canonical(normalize(raw));
        log::trace!(
            "normalized {} intervals into {}",
            count,
            result.interval_count()
        );
        result
    }

    /// The canonical intervals, in ascending order
    #[must_use]
    pub fn as_intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Iterate over the canonical intervals, in ascending order
    #[must_use]
    pub fn intervals(&self) -> Intervals<'_> {
        Intervals::new(&self.intervals)
    }

    /// Iterate over all points of the set, in ascending order.  Each call
    /// starts a new traversal.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.intervals)
    }

    /// Number of intervals needed to represent the set
    #[must_use]
    pub fn interval_count(&self) -> usize {
        self.intervals.len()
    }

    /// Number of points in the set
    #[must_use]
    pub fn len(&self) -> u64 {
        self.cumulative.last().copied().unwrap_or(0)
    }

    /// True if the set contains no point
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Whether value is in the set.  This is a binary search on the
    /// intervals.
    #[must_use]
    pub fn contains(&self, value: Point) -> bool {
        let idx = self.intervals.partition_point(|intv| intv.high() < value);
        self.intervals
            .get(idx)
            .is_some_and(|intv| intv.low() <= value)
    }

    /// The index-th smallest point of the set (starting at 0), or None if
    /// the set has fewer points.
    #[must_use]
    pub fn get(&self, index: u64) -> Option<Point> {
        let idx = self.cumulative.partition_point(|total| *total <= index);
        let intv = self.intervals.get(idx)?;
        let before = match idx.checked_sub(1) {
            None => 0,
            Some(prev) => self.cumulative.get(prev).copied().unwrap_or(0),
        };
        // index - before < intv.count(), so the sum stays within intv
        Some(intv.low() + (index - before) as Point)
    }

    /// Same as [`ProcSet::get`], but with a signed index, as received from
    /// user input.  Negative indexes are rejected.
    pub fn at(&self, index: i64) -> Result<Point> {
        u64::try_from(index)
            .ok()
            .and_then(|i| self.get(i))
            .ok_or(Error::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// The smallest point of the set
    pub fn min(&self) -> Result<Point> {
        self.intervals
            .first()
            .map(Interval::low)
            .ok_or(Error::EmptySet)
    }

    /// The largest point of the set
    pub fn max(&self) -> Result<Point> {
        self.intervals
            .last()
            .map(Interval::high)
            .ok_or(Error::EmptySet)
    }

    fn merge(&self, right: &Self, predicate: MergePredicate) -> Self {
        Self::from_canonical(
            Merge::new(&self.intervals, &right.intervals, predicate).collect(),
        )
    }

    /// Replace self with the result of the merge.  The new list is fully
    /// computed before self is modified.
    fn merge_update(&mut self, right: &Self, predicate: MergePredicate) {
        let result = self.merge(right, predicate);
        log::debug!(
            "in-place update: {} -> {} intervals",
            self.interval_count(),
            result.interval_count()
        );
        *self = result;
    }

    /// True if the merge would produce at least one point.  Stops as soon as
    /// the first one is found.
    fn merge_any(&self, right: &Self, predicate: MergePredicate) -> bool {
        Merge::new(&self.intervals, &right.intervals, predicate)
            .next()
            .is_some()
    }

    /// Points that are in either set.  This is the same as the `|` operator.
    #[must_use]
    pub fn union(&self, right: &Self) -> Self {
        self.merge(right, merge::union)
    }

    /// Points that are in both sets.  This is the same as the `&` operator.
    #[must_use]
    pub fn intersection(&self, right: &Self) -> Self {
        self.merge(right, merge::intersection)
    }

    /// Points of self that are not in right.  This is the same as the `-`
    /// operator.
    #[must_use]
    pub fn difference(&self, right: &Self) -> Self {
        self.merge(right, merge::difference)
    }

    /// Points that are in exactly one of the sets.  This is the same as the
    /// `^` operator.
    #[must_use]
    pub fn symmetric_difference(&self, right: &Self) -> Self {
        self.merge(right, merge::symmetric_difference)
    }

    /// Add all points of right to self (the `|=` operator)
    pub fn union_update(&mut self, right: &Self) {
        self.merge_update(right, merge::union);
    }

    /// Only keep the points that are also in right (the `&=` operator)
    pub fn intersection_update(&mut self, right: &Self) {
        self.merge_update(right, merge::intersection);
    }

    /// Remove all points of right from self (the `-=` operator)
    pub fn difference_update(&mut self, right: &Self) {
        self.merge_update(right, merge::difference);
    }

    /// The `^=` operator
    pub fn symmetric_difference_update(&mut self, right: &Self) {
        self.merge_update(right, merge::symmetric_difference);
    }

    /// Whether all points of self are also in right
    #[must_use]
    pub fn is_subset(&self, right: &Self) -> bool {
        !self.merge_any(right, merge::difference)
    }

    /// Whether all points of right are also in self
    #[must_use]
    pub fn is_superset(&self, right: &Self) -> bool {
        right.is_subset(self)
    }

    #[must_use]
    pub fn is_proper_subset(&self, right: &Self) -> bool {
        self != right && self.is_subset(right)
    }

    #[must_use]
    pub fn is_proper_superset(&self, right: &Self) -> bool {
        right.is_proper_subset(self)
    }

    /// Whether the two sets have no point in common
    #[must_use]
    pub fn is_disjoint(&self, right: &Self) -> bool {
        !self.merge_any(right, merge::intersection)
    }

    /// Add a single point
    pub fn insert(&mut self, value: Point) {
        self.insert_interval(Interval::new_single(value));
    }

    /// Add all points of the interval
    pub fn insert_interval(&mut self, intv: Interval) {
        self.union_update(&ProcSet::from(intv));
    }

    /// Remove a single point, if it is in the set
    pub fn remove(&mut self, value: Point) {
        self.difference_update(&ProcSet::from(Interval::new_single(value)));
    }

    /// Remove all points
    pub fn clear(&mut self) {
        self.intervals.clear();
        self.cumulative.clear();
    }
}

/// Sets are ordered by inclusion, so two sets might not be comparable.
/// ```
/// use procset::ProcSet;
/// let a: ProcSet = "1-5".parse().unwrap();
/// let b: ProcSet = "1-10".parse().unwrap();
/// let c: ProcSet = "8-20".parse().unwrap();
/// assert!(a < b);
/// assert!(b >= a);
/// assert_eq!(a.partial_cmp(&c), None);
/// ```
impl PartialOrd for ProcSet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if self.is_subset(other) {
            Some(Ordering::Less)
        } else if other.is_subset(self) {
            Some(Ordering::Greater)
        } else {
            None
        }
    }
}

impl From<Interval> for ProcSet {
    fn from(value: Interval) -> Self {
        Self::from_canonical(vec![value])
    }
}

impl FromIterator<Point> for ProcSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::from_intervals(iter.into_iter().map(Interval::new_single))
    }
}

impl FromIterator<Interval> for ProcSet {
    fn from_iter<I: IntoIterator<Item = Interval>>(iter: I) -> Self {
        Self::from_intervals(iter)
    }
}

impl Extend<Point> for ProcSet {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        let added: ProcSet = iter.into_iter().collect();
        self.union_update(&added);
    }
}

impl Extend<Interval> for ProcSet {
    fn extend<I: IntoIterator<Item = Interval>>(&mut self, iter: I) {
        let added: ProcSet = iter.into_iter().collect();
        self.union_update(&added);
    }
}

impl<'a> IntoIterator for &'a ProcSet {
    type Item = Point;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

macro_rules! set_operator {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident,
     $func:ident, $update:ident) => {
        ///  &ProcSet op &ProcSet
        impl std::ops::$trait<&ProcSet> for &ProcSet {
            type Output = ProcSet;

            fn $method(self, rhs: &ProcSet) -> ProcSet {
                self.$func(rhs)
            }
        }

        ///  ProcSet op &ProcSet
        impl std::ops::$trait<&ProcSet> for ProcSet {
            type Output = ProcSet;

            fn $method(self, rhs: &ProcSet) -> ProcSet {
                self.$func(rhs)
            }
        }

        ///  &ProcSet op ProcSet
        impl std::ops::$trait<ProcSet> for &ProcSet {
            type Output = ProcSet;

            fn $method(self, rhs: ProcSet) -> ProcSet {
                self.$func(&rhs)
            }
        }

        ///  ProcSet op ProcSet
        impl std::ops::$trait<ProcSet> for ProcSet {
            type Output = ProcSet;

            fn $method(self, rhs: ProcSet) -> ProcSet {
                self.$func(&rhs)
            }
        }

        ///  ProcSet op= &ProcSet
        impl std::ops::$assign_trait<&ProcSet> for ProcSet {
            fn $assign_method(&mut self, rhs: &ProcSet) {
                self.$update(rhs);
            }
        }

        ///  ProcSet op= ProcSet
        impl std::ops::$assign_trait<ProcSet> for ProcSet {
            fn $assign_method(&mut self, rhs: ProcSet) {
                self.$update(&rhs);
            }
        }
    };
}

set_operator!(BitOr, bitor, BitOrAssign, bitor_assign, union, union_update);
set_operator!(
    BitAnd,
    bitand,
    BitAndAssign,
    bitand_assign,
    intersection,
    intersection_update
);
set_operator!(Sub, sub, SubAssign, sub_assign, difference, difference_update);
set_operator!(
    BitXor,
    bitxor,
    BitXorAssign,
    bitxor_assign,
    symmetric_difference,
    symmetric_difference_update
);
