use crate::intervals::Point;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A token of the textual specification is not a number or a range
    #[error("invalid token {token:?}: {reason}")]
    Parse { token: String, reason: &'static str },

    /// The lower bound of a range is greater than its upper bound
    #[error("invalid range {low}-{high}: lower bound is greater than upper bound")]
    InvalidRange { low: Point, high: Point },

    #[error("index {index} out of range for a set of {len} elements")]
    IndexOutOfRange { index: i64, len: u64 },

    /// Minimum or maximum requested on an empty set
    #[error("the set is empty")]
    EmptySet,
}

pub type Result<T> = std::result::Result<T, Error>;
