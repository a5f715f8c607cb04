//! Numeric parseability predicates
//!
//! Each predicate accepts a string that parses as the named numeric type.
//! Integral types check their bounds exactly, so `is_byte` accepts `-128`
//! and `127` but rejects `-129` and `128`.

use std::str::FromStr;
use std::sync::LazyLock;

use crate::foundation::ValidationError;

static BIG_INTEGER_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[+-]?[0-9]+$").expect("integer pattern is valid"));

static BIG_DECIMAL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$")
        .expect("decimal pattern is valid")
});

/// Integral text parses exactly as the target type, without surrounding
/// whitespace.
fn parses<T: FromStr>(input: &str) -> bool {
    input.parse::<T>().is_ok()
}

/// Floating text follows the lenient numeric literal grammar: control
/// characters and spaces around the value are ignored, a trailing `f`/`d`
/// type suffix is allowed, and the only non-numeric spellings are `NaN` and
/// `Infinity`.
fn parses_float<T: FromStr>(input: &str) -> bool {
    let trimmed = input.trim_matches(|c: char| c <= ' ');
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    if unsigned == "NaN" || unsigned == "Infinity" {
        return true;
    }

    let literal = unsigned.strip_suffix(['f', 'F', 'd', 'D']).unwrap_or(unsigned);
    // `str::parse` also takes "inf" and "nan" in any case.
    literal.starts_with(|c: char| c.is_ascii_digit() || c == '.') && literal.parse::<T>().is_ok()
}

/// Declares one predicate per target type that succeeds when the given
/// check does.
macro_rules! parses_as {
    ($(
        $(#[$meta:meta])*
        $name:ident, $factory:ident, $check:expr, $code:literal, $what:literal;
    )+) => {
        $(
            crate::predicate! {
                $(#[$meta])*
                pub $name for str;
                rule(input) { ($check)(input) }
                error(input) {
                    ValidationError::new(
                        $code,
                        concat!("\"{0}\" must be a valid representation of ", $what),
                    )
                }
                fn $factory();
            }
        )+
    };
}

parses_as! {
    /// 8-bit signed integer.
    IsByte, is_byte, parses::<i8>, "string.is_byte", "a byte";
    /// 16-bit signed integer.
    IsShort, is_short, parses::<i16>, "string.is_short", "a short";
    /// 32-bit signed integer.
    IsInteger, is_integer, parses::<i32>, "string.is_integer", "an integer";
    /// 64-bit signed integer.
    IsLong, is_long, parses::<i64>, "string.is_long", "a long";
    /// Single-precision float.
    IsFloat, is_float, parses_float::<f32>, "string.is_float", "a float";
    /// Double-precision float.
    IsDouble, is_double, parses_float::<f64>, "string.is_double", "a double";
}

crate::predicate! {
    /// An integer of any magnitude.
    pub IsBigInteger for str;
    rule(input) { BIG_INTEGER_REGEX.is_match(input) }
    error(input) {
        ValidationError::new(
            "string.is_big_integer",
            "\"{0}\" must be a valid representation of a big integer",
        )
    }
    fn is_big_integer();
}

crate::predicate! {
    /// A decimal of any magnitude and scale, optionally with an exponent.
    pub IsBigDecimal for str;
    rule(input) { BIG_DECIMAL_REGEX.is_match(input) }
    error(input) {
        ValidationError::new(
            "string.is_big_decimal",
            "\"{0}\" must be a valid representation of a big decimal",
        )
    }
    fn is_big_decimal();
}
