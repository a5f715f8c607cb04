//! Either-shaped validation results.
//!
//! [`EitherValidator`] runs the same rules as its [`Validator`] but returns
//! `Either::Right(target)` when there are no violations and
//! `Either::Left(violations)` otherwise. A success hands back the very
//! reference that was validated.
//!
//! # Examples
//!
//! ```rust,ignore
//! use either::Either;
//!
//! match validator.either().validate(&user)? {
//!     Either::Right(user) => save(user),
//!     Either::Left(violations) => render(&violations),
//! }
//! ```

use either::Either;

use crate::error::ValidatorError;
use crate::group::ConstraintGroup;
use crate::locale::Locale;
use crate::validator::Validator;
use crate::violation::ConstraintViolations;

/// Outcome of an either-style validation.
pub type Validated<'a, T> = Either<ConstraintViolations, &'a T>;

/// A view of a [`Validator`] that reports through [`Either`].
#[derive(Debug)]
pub struct EitherValidator<'v, T> {
    validator: &'v Validator<T>,
}

impl<T> Clone for EitherValidator<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for EitherValidator<'_, T> {}

impl<'v, T> EitherValidator<'v, T> {
    pub(crate) fn new(validator: &'v Validator<T>) -> Self {
        Self { validator }
    }

    /// The underlying validator.
    pub fn validator(&self) -> &'v Validator<T> {
        self.validator
    }

    /// See [`Validator::validate`].
    ///
    /// # Errors
    ///
    /// Contract violations, exactly as [`Validator::validate`].
    pub fn validate<'a>(
        &self,
        target: impl Into<Option<&'a T>>,
    ) -> Result<Validated<'a, T>, ValidatorError>
    where
        T: 'a,
    {
        let group = ConstraintGroup::DEFAULT;
        self.validate_with(target, Locale::system(), &group)
    }

    /// See [`Validator::validate_in_group`].
    ///
    /// # Errors
    ///
    /// Contract violations, exactly as [`Validator::validate`].
    pub fn validate_in_group<'a>(
        &self,
        target: impl Into<Option<&'a T>>,
        group: &ConstraintGroup,
    ) -> Result<Validated<'a, T>, ValidatorError>
    where
        T: 'a,
    {
        self.validate_with(target, Locale::system(), group)
    }

    /// See [`Validator::validate_with_locale`].
    ///
    /// # Errors
    ///
    /// Contract violations, exactly as [`Validator::validate`].
    pub fn validate_with_locale<'a>(
        &self,
        target: impl Into<Option<&'a T>>,
        locale: &Locale,
    ) -> Result<Validated<'a, T>, ValidatorError>
    where
        T: 'a,
    {
        let group = ConstraintGroup::DEFAULT;
        self.validate_with(target, locale, &group)
    }

    /// See [`Validator::validate_with`].
    ///
    /// # Errors
    ///
    /// Contract violations, exactly as [`Validator::validate`].
    pub fn validate_with<'a>(
        &self,
        target: impl Into<Option<&'a T>>,
        locale: &Locale,
        group: &ConstraintGroup,
    ) -> Result<Validated<'a, T>, ValidatorError>
    where
        T: 'a,
    {
        let target = target.into().ok_or(ValidatorError::NullTarget)?;
        let violations = self.validator.validate_with(target, locale, group)?;

        Ok(if violations.is_valid() {
            Either::Right(target)
        } else {
            Either::Left(violations)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::string::not_blank;

    #[derive(Debug)]
    struct Named {
        name: String,
    }

    fn validator() -> Validator<Named> {
        Validator::builder()
            .constraint("name", |n: &Named| n.name.as_str(), |c| c.with(not_blank()))
            .build()
            .unwrap()
    }

    #[test]
    fn test_right_is_the_same_reference() {
        let validator = validator();
        let target = Named { name: "ok".into() };

        let result = validator.either().validate_with_locale(&target, &Locale::ROOT).unwrap();
        let returned = result.right().unwrap();
        assert!(std::ptr::eq(returned, &target));
    }

    #[test]
    fn test_left_holds_violations() {
        let validator = validator();
        let target = Named { name: String::new() };

        let result = validator.either().validate_with_locale(&target, &Locale::ROOT).unwrap();
        assert_eq!(result.left().map(|v| v.len()), Some(1));
    }

    #[test]
    fn test_null_target() {
        let validator = validator();
        let error = validator.either().validate(None::<&Named>).unwrap_err();
        assert!(error.is_null_target());
    }
}
