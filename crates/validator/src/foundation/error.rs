//! Predicate failure type
//!
//! A predicate that rejects a value reports which constraint failed (the
//! message key), the built-in message template for that constraint, and the
//! ordered arguments the template interpolates. The engine later turns this
//! into a [`ConstraintViolation`](crate::violation::ConstraintViolation) once
//! the field path and the locale are known.
//!
//! All string fields use `Cow<'static, str>` so static keys and templates
//! never allocate.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

/// Ordered message arguments carried by a predicate failure.
///
/// Placeholder `{0}` is reserved for the field path, so the first entry here
/// is rendered by `{1}`, the second by `{2}`, and so on.
pub type Args = SmallVec<[Cow<'static, str>; 4]>;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A single predicate failure.
///
/// # Examples
///
/// ```rust,ignore
/// use veritas_validator::foundation::ValidationError;
///
/// let error = ValidationError::new(
///     "string.fixed_size",
///     "The size of \"{0}\" must be {1}. The given size is {2}",
/// )
/// .with_arg("2")
/// .with_arg("3");
///
/// assert_eq!(error.arg(0), Some("2"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Message key identifying the failed constraint.
    ///
    /// Examples: "string.not_blank", "numeric.greater_than", "object.not_null"
    pub code: Cow<'static, str>,

    /// Built-in message template, used when no locale-specific template
    /// resolves `code`.
    pub message: Cow<'static, str>,

    /// Predicate arguments, in placeholder order starting at `{1}`.
    pub args: Args,
}

impl ValidationError {
    /// Creates a failure with a message key and a default template.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            args: SmallVec::new(),
        }
    }

    /// Appends one message argument.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_arg(mut self, arg: impl Into<Cow<'static, str>>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Appends several message arguments in order.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_args<I, A>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Cow<'static, str>>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Returns the argument at `index` (zero-based, i.e. placeholder `{index + 1}`).
    #[must_use]
    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(AsRef::as_ref)
    }

    /// The failure reported for an absent field that is required.
    #[must_use]
    pub fn not_null() -> Self {
        Self::new("object.not_null", "\"{0}\" must not be null")
    }

    /// A size-type failure: the limit and then the measured size.
    pub fn size(
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
        limit: usize,
        actual: usize,
    ) -> Self {
        Self::new(code, message)
            .with_arg(limit.to_string())
            .with_arg(actual.to_string())
    }

    /// Creates a "custom" failure with a template.
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new("custom", message)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;

        if !self.args.is_empty() {
            write!(f, " (args: [")?;
            for (i, arg) in self.args.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{arg}")?;
            }
            write!(f, "])")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_error() {
        let error = ValidationError::new("string.not_blank", "\"{0}\" must not be blank");
        assert_eq!(error.code, "string.not_blank");
        assert!(error.args.is_empty());
    }

    #[test]
    fn test_args_keep_order() {
        let error = ValidationError::new("numeric.between", "between")
            .with_arg("1")
            .with_args(["5", "9"]);

        assert_eq!(error.arg(0), Some("1"));
        assert_eq!(error.arg(1), Some("5"));
        assert_eq!(error.arg(2), Some("9"));
        assert_eq!(error.arg(3), None);
    }

    #[test]
    fn test_size_error() {
        let error = ValidationError::size("string.fixed_size", "size", 2, 3);
        assert_eq!(error.arg(0), Some("2"));
        assert_eq!(error.arg(1), Some("3"));
    }

    #[test]
    fn test_display_lists_args() {
        let error =
            ValidationError::new("string.contains", "\"{0}\" must contain {1}").with_arg("a");
        assert_eq!(
            error.to_string(),
            "string.contains: \"{0}\" must contain {1} (args: [a])"
        );
    }

    #[test]
    fn test_zero_alloc_static_strings() {
        let error = ValidationError::not_null();
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }
}
