//! WHEN combinator - value-conditional predicates
//!
//! [`When`] runs its inner predicate only if a condition on the same value
//! holds. This is the value-level counterpart of rule conditions, which look
//! at the whole target instead.
//!
//! # Examples
//!
//! ```rust,ignore
//! use veritas_validator::prelude::*;
//!
//! // Only check the shape of a code that has been filled in
//! let validator = When::new(pattern("[A-Z]{3}")?, |s: &str| !s.is_empty());
//! assert!(validator.test(""));
//! assert!(validator.test("ABC"));
//! assert!(!validator.test("ab"));
//! ```

use crate::foundation::{Validate, ValidationError};

/// Conditionally applies a predicate.
///
/// If the condition returns `false` the predicate passes without running the
/// inner check.
#[derive(Debug, Clone, Copy)]
pub struct When<V, C> {
    pub(crate) validator: V,
    pub(crate) condition: C,
}

impl<V, C> When<V, C> {
    /// Creates a new `When` combinator.
    pub fn new(validator: V, condition: C) -> Self {
        Self {
            validator,
            condition,
        }
    }

    /// Returns a reference to the inner predicate.
    pub fn validator(&self) -> &V {
        &self.validator
    }

    /// Extracts the predicate and condition.
    pub fn into_parts(self) -> (V, C) {
        (self.validator, self.condition)
    }
}

impl<V, C> Validate for When<V, C>
where
    V: Validate,
    C: Fn(&V::Input) -> bool,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if (self.condition)(input) {
            self.validator.validate(input)
        } else {
            Ok(())
        }
    }
}

/// Creates a `When` combinator from a predicate and condition.
pub fn when<V, C>(validator: V, condition: C) -> When<V, C>
where
    V: Validate,
    C: Fn(&V::Input) -> bool,
{
    When::new(validator, condition)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::string::{fixed_size, not_blank};

    #[test]
    fn test_when_condition_true() {
        let validator = When::new(fixed_size(3), |s: &str| s.starts_with('#'));
        assert!(validator.validate("#ab").is_ok());
        assert!(validator.validate("#abc").is_err());
    }

    #[test]
    fn test_when_condition_false() {
        let validator = When::new(fixed_size(3), |s: &str| s.starts_with('#'));
        assert!(validator.validate("hello").is_ok());
        assert!(validator.validate("").is_ok());
    }

    #[test]
    fn test_when_via_ext() {
        let validator = not_blank().when(|s: &str| !s.is_empty());
        assert!(validator.validate("").is_ok());
        assert!(validator.validate("   ").is_err());
        assert!(validator.validate("x").is_ok());
    }
}
