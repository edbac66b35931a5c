use crate::errors::{Error, Result};

/// The type of the identifiers stored in a set (processor or node index).
pub type Point = u32;

/// A closed interval of points `[low, high]`, which contains all values
/// `low, low + 1, ..., high`.
///
/// An interval is never empty: constructors refuse `low > high`.  The
/// derived ordering compares the lower bounds first, then the upper bounds.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval {
    low: Point,
    high: Point,
}

impl Interval {
    /// Construct a closed interval `[low, high]`.
    /// ```
    /// use procset::Interval;
    /// assert!(Interval::new(3, 7).is_ok());
    /// assert!(Interval::new(7, 3).is_err());
    /// ```
    pub fn new(low: Point, high: Point) -> Result<Self> {
        if low > high {
            Err(Error::InvalidRange { low, high })
        } else {
            Ok(Self { low, high })
        }
    }

    /// Returns an interval that contains a single value (`[value,value]`)
    #[must_use]
    pub fn new_single(value: Point) -> Self {
        Self {
            low: value,
            high: value,
        }
    }

    /// Build an interval from bounds already known to be ordered.
    pub(crate) fn new_unchecked(low: Point, high: Point) -> Self {
        debug_assert!(low <= high, "invalid interval {low}-{high}");
        Self { low, high }
    }

    /// The lower bound, included in the interval.
    #[must_use]
    pub fn low(&self) -> Point {
        self.low
    }

    /// The upper bound, included in the interval.
    #[must_use]
    pub fn high(&self) -> Point {
        self.high
    }

    /// Number of points in the interval.  This is never zero, and can be
    /// 2^32 for the interval covering all points.
    #[must_use]
    pub fn count(&self) -> u64 {
        u64::from(self.high) - u64::from(self.low) + 1
    }

    /// True if self is of the form `[A, A]`.
    #[must_use]
    pub fn is_single(&self) -> bool {
        self.low == self.high
    }

    /// Whether value is contained in the interval
    #[must_use]
    pub fn contains(&self, value: Point) -> bool {
        self.low <= value && value <= self.high
    }

    /// Whether self contains all values of the second interval (and possibly
    /// more).
    #[must_use]
    pub fn contains_interval(&self, other: &Self) -> bool {
        self.low <= other.low && other.high <= self.high
    }

    /// Whether the two intervals have at least one point in common
    #[must_use]
    pub fn intersects(&self, right: &Self) -> bool {
        self.low <= right.high && right.low <= self.high
    }

    /// True if no value lies between the two intervals, i.e. they overlap
    /// or touch (`[1,4]` and `[5,9]` are contiguous).
    #[must_use]
    pub fn contiguous(&self, right: &Self) -> bool {
        u64::from(self.low) <= u64::from(right.high) + 1
            && u64::from(right.low) <= u64::from(self.high) + 1
    }

    /// Returns the convex hull of the two intervals, i.e. the smallest
    /// interval that contains the values of both intervals.
    #[must_use]
    pub fn convex_hull(&self, right: &Self) -> Self {
        Self {
            low: self.low.min(right.low),
            high: self.high.max(right.high),
        }
    }

    /// Returns the union of the two intervals, if they are contiguous.
    /// If not, returns None.
    #[must_use]
    pub fn union(&self, right: &Self) -> Option<Self> {
        if self.contiguous(right) {
            Some(self.convex_hull(right))
        } else {
            None
        }
    }

    /// Returns the intersection of the two intervals, None if they do not
    /// overlap.
    #[must_use]
    pub fn intersection(&self, right: &Self) -> Option<Self> {
        if self.intersects(right) {
            Some(Self {
                low: self.low.max(right.low),
                high: self.high.min(right.high),
            })
        } else {
            None
        }
    }
}

impl From<Point> for Interval {
    fn from(value: Point) -> Self {
        Interval::new_single(value)
    }
}

impl TryFrom<(Point, Point)> for Interval {
    type Error = Error;

    fn try_from(value: (Point, Point)) -> Result<Self> {
        Interval::new(value.0, value.1)
    }
}

impl From<Interval> for (Point, Point) {
    fn from(value: Interval) -> Self {
        (value.low, value.high)
    }
}

impl ::core::fmt::Debug for Interval {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

/// Renders the interval the way the text grammar expects it: `5` for a
/// single point, `3-7` otherwise.
impl ::core::fmt::Display for Interval {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        if self.is_single() {
            write!(f, "{}", self.low)
        } else {
            write!(f, "{}-{}", self.low, self.high)
        }
    }
}
