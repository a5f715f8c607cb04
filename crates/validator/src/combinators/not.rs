//! NOT combinator - inverts a predicate
//!
//! The generic failure says little about why the value was rejected, so
//! negations are usually followed by [`with_message`](super::with_message).
//!
//! # Examples
//!
//! ```rust,ignore
//! use veritas_validator::prelude::*;
//!
//! let no_admin = contains("admin")
//!     .not()
//!     .with_message("user.reserved", "\"{0}\" is reserved");
//! assert!(no_admin.test("user123"));
//! assert!(!no_admin.test("admin123"));
//! ```

use crate::foundation::{Validate, ValidationError};

/// Passes exactly when the inner predicate fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<V> {
    pub(crate) inner: V,
}

impl<V> Not<V> {
    /// Creates a new `Not` combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner predicate.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Extracts the inner predicate.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for Not<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.inner.validate(input) {
            Ok(()) => Err(ValidationError::new(
                "predicate.not",
                "\"{0}\" must not satisfy the constraint",
            )),
            Err(_) => Ok(()),
        }
    }
}

/// Creates a `Not` combinator.
pub fn not<V: Validate>(validator: V) -> Not<V> {
    Not::new(validator)
}
