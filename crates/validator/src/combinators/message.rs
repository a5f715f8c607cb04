//! MESSAGE combinator - replaces the message key and template
//!
//! Keeps the predicate's arguments so the replacement template can refer to
//! them with the same `{1}`, `{2}`… placeholders.

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationError};

/// Overrides the message key and default template of a predicate.
///
/// # Examples
///
/// ```rust,ignore
/// use veritas_validator::prelude::*;
///
/// let validator = WithMessage::new(
///     greater_than_or_equal(8),
///     "password.too_short",
///     "\"{0}\" needs at least {1} characters",
/// );
///
/// let error = validator.validate("short").unwrap_err();
/// assert_eq!(error.code, "password.too_short");
/// assert_eq!(error.arg(0), Some("8"));
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<V> {
    inner: V,
    code: Cow<'static, str>,
    template: Cow<'static, str>,
}

impl<V> WithMessage<V> {
    /// Creates a new override.
    pub fn new(
        inner: V,
        code: impl Into<Cow<'static, str>>,
        template: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            inner,
            code: code.into(),
            template: template.into(),
        }
    }

    /// Returns a reference to the inner predicate.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Returns the replacement message key.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the replacement template.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Extracts the inner predicate.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for WithMessage<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner.validate(input).map_err(|original| ValidationError {
            code: self.code.clone(),
            message: self.template.clone(),
            args: original.args,
        })
    }
}

/// Creates a `WithMessage` combinator.
pub fn with_message<V>(
    validator: V,
    code: impl Into<Cow<'static, str>>,
    template: impl Into<Cow<'static, str>>,
) -> WithMessage<V> {
    WithMessage::new(validator, code, template)
}
