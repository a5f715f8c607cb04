//! Numeric predicates
//!
//! Comparisons over any `PartialOrd + Display + Copy` value. The names clash
//! with the string size family, so the prelude exposes this module as
//! `numeric::greater_than` and so on.

pub mod range;

pub use range::{
    Between, GreaterThan, GreaterThanOrEqual, LessThan, LessThanOrEqual, between, greater_than,
    greater_than_or_equal, less_than, less_than_or_equal,
};
