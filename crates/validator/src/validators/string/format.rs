//! Format predicates: regular expressions, email addresses and URLs
//!
//! `email` and `url` accept the empty string. Presence is the job of
//! [`not_empty`](super::not_empty) or [`not_blank`](super::not_blank), so an
//! optional field can be checked for shape without being required.

use std::sync::LazyLock;

use crate::error::ValidatorError;
use crate::foundation::{Validate, ValidationError};
use crate::normalizer::Normalization;

/// One atom of a local part or domain label: anything but control
/// characters, whitespace and the RFC 5322 specials.
const ATOM: &str = r#"[^\x00-\x1F()<>@,;:\\".\[\]\s]"#;

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    let pattern = format!("(?i)^{ATOM}+(?:\\.{ATOM}+)*@{ATOM}+(?:\\.{ATOM}+)*$");
    regex::Regex::new(&pattern).expect("email pattern is valid")
});

/// Schemes accepted by [`Url`].
pub const URL_SCHEMES: &[&str] = &["http", "https", "ftp", "file", "jar", "mailto"];

// ============================================================================
// PATTERN
// ============================================================================

/// The whole value matches a regular expression.
///
/// The expression is anchored at both ends, so `[0-9]{4}` rejects `"12345"`.
/// The value is NFC-normalized before matching unless configured otherwise.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: regex::Regex,
    normalization: Normalization,
}

impl Pattern {
    /// Compiles `pattern`.
    ///
    /// # Errors
    ///
    /// [`ValidatorError::InvalidPattern`] if the expression does not compile.
    pub fn new(pattern: impl Into<String>) -> Result<Self, ValidatorError> {
        let source = pattern.into();
        let regex = regex::Regex::new(&format!("^(?:{source})$")).map_err(|e| {
            ValidatorError::InvalidPattern {
                pattern: source.clone(),
                source: e,
            }
        })?;

        Ok(Self {
            source,
            regex,
            normalization: Normalization::Nfc,
        })
    }

    /// Sets the normalization applied before matching.
    #[must_use = "builder methods must be chained or built"]
    pub fn normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    /// The expression as given, without anchors.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl Validate for Pattern {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if self.regex.is_match(&self.normalization.apply(input)) {
            Ok(())
        } else {
            Err(
                ValidationError::new("string.pattern", "\"{0}\" must match {1}")
                    .with_arg(self.source.clone()),
            )
        }
    }
}

/// Compiles a whole-value regular expression predicate.
///
/// # Errors
///
/// [`ValidatorError::InvalidPattern`] if the expression does not compile.
pub fn pattern(pattern: impl Into<String>) -> Result<Pattern, ValidatorError> {
    Pattern::new(pattern)
}

// ============================================================================
// EMAIL
// ============================================================================

crate::predicate! {
    /// The value is empty or shaped like an email address.
    ///
    /// Non-ASCII local parts and IP-literal domains (`abc@192.168.1.10`)
    /// are accepted; a missing or doubled `@` is not.
    pub Email for str;
    rule(input) { input.is_empty() || EMAIL_REGEX.is_match(input) }
    error(input) {
        ValidationError::new("string.email", "\"{0}\" must be a valid email address")
    }
    fn email();
}

// ============================================================================
// URL
// ============================================================================

crate::predicate! {
    /// The value is empty or an absolute URL with one of the [`URL_SCHEMES`].
    pub Url for str;
    rule(input) {
        input.is_empty()
            || url::Url::parse(input)
                .is_ok_and(|parsed| URL_SCHEMES.contains(&parsed.scheme()))
    }
    error(input) { ValidationError::new("string.url", "\"{0}\" must be a valid URL") }
    fn url();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1234", true)]
    #[case("0000", true)]
    #[case("134a", false)]
    #[case("abcd", false)]
    #[case("12345", false)]
    fn test_pattern_matches_whole_value(#[case] input: &str, #[case] valid: bool) {
        assert_eq!(pattern("[0-9]{4}").unwrap().test(input), valid);
    }

    #[test]
    fn test_pattern_normalizes_input() {
        let composed = pattern("モジ").unwrap();
        assert!(composed.test("モシ\u{3099}"));
        assert!(
            !composed
                .normalization(Normalization::None)
                .test("モシ\u{3099}")
        );
    }

    #[test]
    fn test_invalid_pattern() {
        let error = pattern("(").unwrap_err();
        assert!(matches!(
            error,
            ValidatorError::InvalidPattern { ref pattern, .. } if pattern == "("
        ));
    }

    #[rstest]
    #[case("abc@example.com")]
    #[case("abc@localhost")]
    #[case("abc@192.168.1.10")]
    #[case("東京@example.com")]
    #[case("first.last@example.co.jp")]
    #[case("")]
    fn test_valid_email(#[case] input: &str) {
        assert!(email().test(input));
    }

    #[rstest]
    #[case("example.com")]
    #[case("abc@@example.com")]
    #[case("abc@example..com")]
    #[case("a b@example.com")]
    fn test_invalid_email(#[case] input: &str) {
        assert!(!email().test(input));
    }

    #[rstest]
    #[case("http://example.com", true)]
    #[case("https://example.com", true)]
    #[case("ftp://example.com/file.txt", true)]
    #[case("", true)]
    #[case("example.com", false)]
    #[case("htt://example.com", false)]
    fn test_url(#[case] input: &str, #[case] valid: bool) {
        assert_eq!(url().test(input), valid);
    }
}
