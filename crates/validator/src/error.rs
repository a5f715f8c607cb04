//! Contract violations.
//!
//! These are programmer errors and are returned as `Err` from the engine.
//! Failed predicates are never reported here; they are collected into
//! [`ConstraintViolations`](crate::violation::ConstraintViolations).

/// Errors from building or running a validator.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ValidatorError {
    /// `validate` was called without a target.
    #[error("validation target must not be null")]
    NullTarget,

    /// Nested validation went deeper than the configured limit.
    #[error("nesting depth exceeded {limit} at '{path}'")]
    MaxDepthExceeded {
        /// Path of the field that would have exceeded the limit.
        path: String,
        /// The configured maximum depth.
        limit: usize,
    },

    /// A pattern predicate was given an invalid regular expression.
    #[error("invalid pattern '{pattern}'")]
    InvalidPattern {
        /// The rejected expression.
        pattern: String,
        /// Why the regex engine rejected it.
        #[source]
        source: regex::Error,
    },

    /// A rule was declared without any predicate.
    #[error("rule for field '{field}' has no predicates")]
    EmptyRule {
        /// The field the rule was declared for.
        field: String,
    },
}

impl ValidatorError {
    /// Returns true for [`ValidatorError::NullTarget`].
    #[must_use]
    pub fn is_null_target(&self) -> bool {
        matches!(self, Self::NullTarget)
    }
}
