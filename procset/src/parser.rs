//! Conversion between sets and their textual form.
//!
//! The text is a whitespace-separated list of tokens, each being either a
//! single point (`5`) or an inclusive range (`11-45`).  Tokens may come in
//! any order and may overlap: `"88-100 11-45 40-50"` is a valid spelling of
//! `11-50 88-100`.  The empty string is the empty set.

use crate::errors::{Error, Result};
use crate::intervals::{Interval, Point};
use crate::procset::ProcSet;
use itertools::Itertools;

/// One of the values that can be combined to build a [`ProcSet`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProcSetItem {
    /// A single point
    Point(Point),

    /// An inclusive range `(low, high)`
    Pair(Point, Point),

    /// Any number of points, in any order
    Collection(Vec<Point>),

    /// A textual specification, like `"11-45 88-100"`
    Text(String),

    /// Another set
    Set(ProcSet),
}

impl ProcSetItem {
    /// Append the intervals described by self to raw.  They are neither
    /// sorted nor merged.
    fn collect_into(self, raw: &mut Vec<Interval>) -> Result<()> {
        match self {
            ProcSetItem::Point(p) => raw.push(Interval::new_single(p)),
            ProcSetItem::Pair(low, high) => raw.push(Interval::new(low, high)?),
            ProcSetItem::Collection(points) => {
                raw.extend(points.into_iter().map(Interval::new_single))
            }
            ProcSetItem::Text(text) => raw.extend(parse_intervals(&text)?),
            ProcSetItem::Set(set) => raw.extend(set.intervals()),
        }
        Ok(())
    }
}

impl From<Point> for ProcSetItem {
    fn from(value: Point) -> Self {
        ProcSetItem::Point(value)
    }
}

impl From<(Point, Point)> for ProcSetItem {
    fn from(value: (Point, Point)) -> Self {
        ProcSetItem::Pair(value.0, value.1)
    }
}

impl From<Interval> for ProcSetItem {
    fn from(value: Interval) -> Self {
        ProcSetItem::Pair(value.low(), value.high())
    }
}

impl From<Vec<Point>> for ProcSetItem {
    fn from(value: Vec<Point>) -> Self {
        ProcSetItem::Collection(value)
    }
}

impl From<&[Point]> for ProcSetItem {
    fn from(value: &[Point]) -> Self {
        ProcSetItem::Collection(value.to_vec())
    }
}

impl From<&str> for ProcSetItem {
    fn from(value: &str) -> Self {
        ProcSetItem::Text(value.to_string())
    }
}

impl From<String> for ProcSetItem {
    fn from(value: String) -> Self {
        ProcSetItem::Text(value)
    }
}

impl From<ProcSet> for ProcSetItem {
    fn from(value: ProcSet) -> Self {
        ProcSetItem::Set(value)
    }
}

impl From<&ProcSet> for ProcSetItem {
    fn from(value: &ProcSet) -> Self {
        ProcSetItem::Set(value.clone())
    }
}

/// Parse one point.  Only decimal digits are accepted (no sign), and the
/// value must fit in a [`Point`].
fn parse_point(text: &str, token: &str) -> Result<Point> {
    let parse_error = |reason| Error::Parse {
        token: token.to_string(),
        reason,
    };
    if text.is_empty() {
        return Err(parse_error("missing bound"));
    }
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(parse_error("not a non-negative integer"));
    }
    text.parse::<Point>()
        .map_err(|_| parse_error("value out of range"))
}

/// Parse a single token, either `N` or `LOW-HIGH`.
fn parse_token(token: &str) -> Result<Interval> {
    match token.split_once('-') {
        None => Ok(Interval::new_single(parse_point(token, token)?)),
        Some((low, high)) => {
            let low = parse_point(low, token)?;
            let high = parse_point(high, token)?;
            Interval::new(low, high)
        }
    }
}

/// Parse the textual specification into a list of raw intervals, in the
/// order they appear in the text.
pub(crate) fn parse_intervals(text: &str) -> Result<Vec<Interval>> {
    text.split_whitespace().map(parse_token).collect()
}

impl ProcSet {
    /// Build the union of all items.
    /// Fails if any item is invalid, in which case no set is returned.
    ///
    /// ```
    /// use procset::{ProcSet, ProcSetItem};
    /// let set = ProcSet::from_items([
    ///     ProcSetItem::from(3_u32),
    ///     ProcSetItem::from((5_u32, 8_u32)),
    ///     ProcSetItem::from(vec![4_u32, 20, 21]),
    ///     ProcSetItem::from("9-12 30"),
    /// ])
    /// .unwrap();
    /// assert_eq!(set.to_string(), "3-12 20-21 30");
    /// ```
    pub fn from_items<I, T>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<ProcSetItem>,
    {
        let mut raw = Vec::new();
        for item in items {
            item.into().collect_into(&mut raw)?;
        }
        Ok(ProcSet::from_intervals(raw))
    }
}

impl std::str::FromStr for ProcSet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(ProcSet::from_intervals(parse_intervals(s)?))
    }
}

/// The textual form, which can be parsed back.  The empty set is the empty
/// string.
impl ::core::fmt::Display for ProcSet {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(f, "{}", self.intervals().join(" "))
    }
}

impl ::core::fmt::Debug for ProcSet {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(f, "ProcSet({})", self)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn assert_parse_error(text: &str, bad_token: &str) {
        match text.parse::<ProcSet>() {
            Err(Error::Parse { token, .. }) => assert_eq!(token, bad_token),
            other => panic!("expected parse error for {text:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_parse() {
        let set: ProcSet = "11-45 88-100".parse().unwrap();
        assert_eq!(set.len(), 48);
        assert_eq!(set.min(), Ok(11));
        assert_eq!(set.max(), Ok(100));

        let set: ProcSet = "5".parse().unwrap();
        assert_eq!(set.as_intervals(), &[Interval::new_single(5)]);

        // Unordered, overlapping and adjacent tokens are merged
        let set: ProcSet = "  88-100\t11-45 40-50\n51 7 ".parse().unwrap();
        assert_eq!(set.to_string(), "7 11-51 88-100");

        let max = format!("0-{}", Point::MAX);
        let set: ProcSet = max.parse().unwrap();
        assert_eq!(set.len(), 1_u64 << 32);
        assert_eq!(set.to_string(), max);
    }

    #[test]
    fn test_empty() {
        let empty: ProcSet = "".parse().unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.to_string(), "");
        assert_eq!(format!("{:?}", empty), "ProcSet()");
        assert_eq!(empty.min(), Err(Error::EmptySet));

        let blank: ProcSet = "   ".parse().unwrap();
        assert_eq!(blank, empty);
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            "5-3".parse::<ProcSet>(),
            Err(Error::InvalidRange { low: 5, high: 3 })
        );
        assert_parse_error("1-3 abc", "abc");
        assert_parse_error("5-", "5-");
        assert_parse_error("-5", "-5");
        assert_parse_error("1-2-3", "1-2-3");
        assert_parse_error("+5", "+5");
        assert_parse_error("1,2", "1,2");
        assert_parse_error("4294967296", "4294967296");
        assert_parse_error("1-4294967296", "1-4294967296");
    }

    #[test]
    fn test_round_trip() {
        for text in ["", "0", "1-2", "3 5 7-9", "11-54 63-74 79-100"] {
            let set: ProcSet = text.parse().unwrap();
            assert_eq!(set.to_string(), text);
            assert_eq!(set.to_string().parse::<ProcSet>(), Ok(set));
        }
    }

    #[test]
    fn test_display() {
        let set: ProcSet = "1-3 5".parse().unwrap();
        assert_eq!(format!("{}", set), "1-3 5");
        assert_eq!(format!("{:?}", set), "ProcSet(1-3 5)");
    }

    #[test]
    fn test_from_items() {
        let base: ProcSet = "40-45".parse().unwrap();
        let set = ProcSet::from_items([
            ProcSetItem::Point(3),
            ProcSetItem::Pair(5, 8),
            ProcSetItem::Collection(vec![21, 4, 20]),
            ProcSetItem::Text("9-12 30".to_string()),
            ProcSetItem::from(&base),
            ProcSetItem::from(Interval::new(46, 50).unwrap()),
        ])
        .unwrap();
        assert_eq!(set.to_string(), "3-12 20-21 30 40-50");

        assert_eq!(
            ProcSet::from_items(Vec::<ProcSetItem>::new()),
            Ok(ProcSet::new())
        );
        assert_eq!(ProcSet::from_items([1_u32, 2, 3]).unwrap().to_string(), "1-3");
        assert_eq!(ProcSet::from_items(["1-3", "4"]).unwrap().to_string(), "1-4");
        assert_eq!(
            ProcSet::from_items([(1_u32, 3_u32), (7, 9)])
                .unwrap()
                .to_string(),
            "1-3 7-9"
        );

        // Any invalid item makes the whole construction fail
        assert_eq!(
            ProcSet::from_items([ProcSetItem::Point(1), ProcSetItem::Pair(4, 2)]),
            Err(Error::InvalidRange { low: 4, high: 2 })
        );
        assert!(ProcSet::from_items(["1-3", "x"]).is_err());
    }
}
