//! This crate provides sets of non-negative integers, typically the
//! identifiers of the processors or nodes allocated to a job by a cluster
//! scheduler.
//!
//! A [`ProcSet`] is stored as a sorted list of closed intervals.  The list
//! is always kept canonical: intervals never overlap and never touch, so
//! `1-4 5-9` is always stored as `1-9`.  All operations therefore run in a
//! time proportional to the number of intervals, not to the number of
//! points, even when the set spans millions of values.
//!
//!  |Operation              |Method                               |Operator
//!  |-----------------------|-------------------------------------|--------
//!  | union                 |[`ProcSet::union`]                   | `\|`
//!  | intersection          |[`ProcSet::intersection`]            | `&`
//!  | difference            |[`ProcSet::difference`]              | `-`
//!  | symmetric difference  |[`ProcSet::symmetric_difference`]    | `^`
//!  | subset                |[`ProcSet::is_subset`]               | `<=`
//!  | proper subset         |[`ProcSet::is_proper_subset`]        | `<`
//!  | disjoint              |[`ProcSet::is_disjoint`]             |
//!
//! Each binary operation also has an in-place variant
//! ([`ProcSet::union_update`] and `|=`,...).
//!
//! Given two sets, we can compute the following:
//!
//! ```text
//!        A:    [11 ------ 45]                    [88 --- 100]
//!        B:           [33 ------ 54]  [63-74]  [79 --- 94]
//!
//!    A | B:    [11 ------------- 54]  [63-74]  [79 ----- 100]
//!    A & B:           [33 - 45]                  [88-94]
//!    A - B:    [11-32]                                [95-100]
//!    A ^ B:    [11-32]       [46-54]  [63-74]  [79-87]  [95-100]
//! ```
//!
//! Sets are created from their textual form, a list of points and
//! inclusive ranges separated by whitespace:
//!
//! ```
//! use procset::ProcSet;
//! let set: ProcSet = "11-45 88-100".parse().unwrap();
//! assert_eq!(set.len(), 48);
//! assert_eq!(set.min(), Ok(11));
//! assert_eq!(set.max(), Ok(100));
//! assert!(set.contains(90));
//! assert_eq!(set.get(35), Some(88));
//! assert_eq!(set.to_string(), "11-45 88-100");
//! ```
//!
//! or by combining several [`ProcSetItem`] with [`ProcSet::from_items`].

mod errors;
mod intervals;
mod iter;
mod merge;
mod parser;
mod procset;

pub use crate::errors::{Error, Result};
pub use crate::intervals::{Interval, Point};
pub use crate::iter::{Intervals, Iter};
pub use crate::parser::ProcSetItem;
pub use crate::procset::ProcSet;
