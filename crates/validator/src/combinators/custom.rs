//! Closure-backed predicates
//!
//! [`Custom`] turns a plain `Fn(&I) -> bool` into a predicate with its own
//! message key and template, for checks the built-in catalog does not cover.
//!
//! # Examples
//!
//! ```rust,ignore
//! use veritas_validator::combinators::custom;
//!
//! let even = custom("numeric.even", "\"{0}\" must be even", |n: &u32| n % 2 == 0);
//! assert!(even.test(&4));
//! assert!(!even.test(&3));
//! ```

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{Validate, ValidationError};

/// A predicate defined by a closure.
///
/// The closure must be pure; it is shared by every validation call that uses
/// the owning validator.
pub struct Custom<I: ?Sized, F> {
    code: Cow<'static, str>,
    template: Cow<'static, str>,
    test_fn: F,
    _phantom: PhantomData<fn(&I)>,
}

impl<I: ?Sized, F> Custom<I, F> {
    /// Creates a closure predicate.
    pub fn new(
        code: impl Into<Cow<'static, str>>,
        template: impl Into<Cow<'static, str>>,
        test_fn: F,
    ) -> Self {
        Self {
            code: code.into(),
            template: template.into(),
            test_fn,
            _phantom: PhantomData,
        }
    }

    /// Returns the message key reported on failure.
    pub fn code(&self) -> &str {
        &self.code
    }
}

impl<I: ?Sized, F: Clone> Clone for Custom<I, F> {
    fn clone(&self) -> Self {
        Self {
            code: self.code.clone(),
            template: self.template.clone(),
            test_fn: self.test_fn.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<I: ?Sized, F> fmt::Debug for Custom<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Custom")
            .field("code", &self.code)
            .field("template", &self.template)
            .field("test_fn", &"<function>")
            .finish()
    }
}

impl<I, F> Validate for Custom<I, F>
where
    I: ?Sized,
    F: Fn(&I) -> bool,
{
    type Input = I;

    fn validate(&self, input: &I) -> Result<(), ValidationError> {
        if (self.test_fn)(input) {
            Ok(())
        } else {
            Err(ValidationError::new(self.code.clone(), self.template.clone()))
        }
    }
}

/// Creates a closure predicate.
pub fn custom<I, F>(
    code: impl Into<Cow<'static, str>>,
    template: impl Into<Cow<'static, str>>,
    test_fn: F,
) -> Custom<I, F>
where
    I: ?Sized,
    F: Fn(&I) -> bool,
{
    Custom::new(code, template, test_fn)
}
