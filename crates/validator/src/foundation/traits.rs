//! Core traits for the predicate layer
//!
//! A predicate is anything implementing [`Validate`]: a pure check over one
//! field value that either passes or reports a [`ValidationError`] naming the
//! failed constraint.

use std::borrow::Cow;

use crate::foundation::ValidationError;

// ============================================================================
// CORE PREDICATE TRAIT
// ============================================================================

/// The trait every predicate implements.
///
/// Implementations must be pure: validating equal inputs twice yields equal
/// results, and a predicate carries no mutable state. That is what makes a
/// built [`Validator`](crate::validator::Validator) safe to share across
/// threads without locking.
///
/// # Examples
///
/// ```rust,ignore
/// use veritas_validator::foundation::{Validate, ValidationError};
///
/// struct Lowercase;
///
/// impl Validate for Lowercase {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.chars().all(|c| !c.is_uppercase()) {
///             Ok(())
///         } else {
///             Err(ValidationError::new("string.lowercase", "\"{0}\" must be lowercase"))
///         }
///     }
/// }
/// ```
pub trait Validate {
    /// The type of value being checked.
    ///
    /// Use `?Sized` inputs such as `str` and `[T]` where possible.
    type Input: ?Sized;

    /// Checks the value.
    ///
    /// Returns `Err` with the message key, default template and arguments of
    /// the failed constraint.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Boolean view of [`validate`](Self::validate).
    fn test(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }
}

// ============================================================================
// PREDICATE EXTENSION TRAIT
// ============================================================================

/// Extension methods available on every predicate.
///
/// # Examples
///
/// ```rust,ignore
/// use veritas_validator::prelude::*;
///
/// let zip = pattern("[0-9]{3}-[0-9]{4}")?
///     .with_message("address.zip", "\"{0}\" is not a postal code")
///     .when(|s: &str| !s.is_empty());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Runs the predicate only when `condition` holds for the value.
    ///
    /// If the condition returns `false` the predicate passes.
    fn when<C>(self, condition: C) -> When<Self, C>
    where
        C: Fn(&Self::Input) -> bool,
    {
        When::new(self, condition)
    }

    /// Replaces the message key and template of this predicate's failures.
    ///
    /// Arguments are kept so the replacement template can still use them.
    fn with_message(
        self,
        code: impl Into<Cow<'static, str>>,
        template: impl Into<Cow<'static, str>>,
    ) -> WithMessage<Self> {
        WithMessage::new(self, code, template)
    }

    /// Inverts the predicate.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

impl<T: Validate> ValidateExt for T {}

pub use crate::combinators::message::WithMessage;
pub use crate::combinators::not::Not;
pub use crate::combinators::when::When;

// ============================================================================
// TESTS
// ============================================================================
