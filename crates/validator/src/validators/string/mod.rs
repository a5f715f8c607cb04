//! String predicates
//!
//! - Size (`fixed_size`, `greater_than`, …), counted in normalized code points
//! - Presence and substrings (`not_empty`, `not_blank`, `contains`, …)
//! - Formats (`pattern`, `email`, `url`)
//! - Numeric parseability (`is_byte` … `is_big_decimal`)

pub mod content;
pub mod format;
pub mod length;
pub mod parse;

pub use content::{
    Contains, EndsWith, NotBlank, NotEmpty, StartsWith, contains, ends_with, not_blank, not_empty,
    starts_with,
};
pub use format::{Email, Pattern, URL_SCHEMES, Url, email, pattern, url};
pub use length::{
    FixedSize, GreaterThan, GreaterThanOrEqual, LessThan, LessThanOrEqual, fixed_size,
    greater_than, greater_than_or_equal, less_than, less_than_or_equal,
};
pub use parse::{
    IsBigDecimal, IsBigInteger, IsByte, IsDouble, IsFloat, IsInteger, IsLong, IsShort,
    is_big_decimal, is_big_integer, is_byte, is_double, is_float, is_integer, is_long, is_short,
};
