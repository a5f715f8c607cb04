//! Validators: built rule sets applied to whole targets.
//!
//! A [`Validator`] is assembled once with [`Validator::builder`] and is
//! immutable afterwards. It can be shared between threads and used for any
//! number of validation calls.
//!
//! # Examples
//!
//! ```rust,ignore
//! use veritas_validator::prelude::*;
//!
//! struct User {
//!     name: String,
//!     email: String,
//!     age: u32,
//! }
//!
//! let validator = Validator::<User>::builder()
//!     .constraint("name", |u: &User| u.name.as_str(), |c| {
//!         c.with(not_blank()).with(less_than_or_equal(20))
//!     })
//!     .constraint("email", |u: &User| u.email.as_str(), |c| c.with(email()))
//!     .constraint("age", |u: &User| &u.age, |c| c.with(numeric::between(0, 150)))
//!     .build()?;
//!
//! let violations = validator.validate(&user)?;
//! for violation in &violations {
//!     println!("{}: {}", violation.field(), violation.message());
//! }
//! ```

use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::error::ValidatorError;
use crate::group::ConstraintGroup;
use crate::locale::Locale;
use crate::message::MessageSource;
use crate::rule::GuardedRule;
use crate::violation::ConstraintViolations;

pub mod builder;
pub mod config;
pub mod either;
pub(crate) mod engine;

pub use builder::ValidatorBuilder;
pub use config::{AbsentPolicy, FieldPolicy, ValidatorConfig};
pub use either::EitherValidator;

use engine::{Evaluation, Scope};

/// An immutable set of rules for targets of type `T`.
pub struct Validator<T> {
    rules: Vec<GuardedRule<T>>,
    config: ValidatorConfig,
    messages: Arc<dyn MessageSource>,
}

impl<T: 'static> Validator<T> {
    /// Starts a new builder.
    pub fn builder() -> ValidatorBuilder<T> {
        ValidatorBuilder::new()
    }
}

impl<T> Validator<T> {
    pub(crate) fn from_parts(
        rules: Vec<GuardedRule<T>>,
        config: ValidatorConfig,
        messages: Arc<dyn MessageSource>,
    ) -> Self {
        Self {
            rules,
            config,
            messages,
        }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Number of declared rules, across all groups.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Validates in the default group with the process locale.
    ///
    /// # Errors
    ///
    /// [`ValidatorError::NullTarget`] when `target` is `None`;
    /// [`ValidatorError::MaxDepthExceeded`] when nesting is too deep.
    pub fn validate<'a>(
        &self,
        target: impl Into<Option<&'a T>>,
    ) -> Result<ConstraintViolations, ValidatorError>
    where
        T: 'a,
    {
        let group = ConstraintGroup::DEFAULT;
        self.validate_with(target, Locale::system(), &group)
    }

    /// Validates the rules of `group` with the process locale.
    ///
    /// # Errors
    ///
    /// See [`validate`](Self::validate).
    pub fn validate_in_group<'a>(
        &self,
        target: impl Into<Option<&'a T>>,
        group: &ConstraintGroup,
    ) -> Result<ConstraintViolations, ValidatorError>
    where
        T: 'a,
    {
        self.validate_with(target, Locale::system(), group)
    }

    /// Validates in the default group, rendering messages for `locale`.
    ///
    /// # Errors
    ///
    /// See [`validate`](Self::validate).
    pub fn validate_with_locale<'a>(
        &self,
        target: impl Into<Option<&'a T>>,
        locale: &Locale,
    ) -> Result<ConstraintViolations, ValidatorError>
    where
        T: 'a,
    {
        let group = ConstraintGroup::DEFAULT;
        self.validate_with(target, locale, &group)
    }

    /// Validates the rules of `group`, rendering messages for `locale`.
    ///
    /// Rules run in declaration order and every applicable rule runs, unless
    /// the configuration asks to stop at the first violation. No predicate
    /// runs when `target` is `None`.
    ///
    /// # Errors
    ///
    /// See [`validate`](Self::validate).
    pub fn validate_with<'a>(
        &self,
        target: impl Into<Option<&'a T>>,
        locale: &Locale,
        group: &ConstraintGroup,
    ) -> Result<ConstraintViolations, ValidatorError>
    where
        T: 'a,
    {
        let target = target.into().ok_or(ValidatorError::NullTarget)?;

        let mut eval = Evaluation::new(locale, group, self.messages.as_ref(), &self.config);
        self.evaluate(target, &mut eval)?;
        let violations = eval.finish();

        debug!(
            group = %group,
            locale = %locale,
            violations = violations.len(),
            "validation finished"
        );
        Ok(violations)
    }

    /// The same validator, reporting through [`either::Either`].
    pub fn either(&self) -> EitherValidator<'_, T> {
        EitherValidator::new(self)
    }

    /// Runs the rules against `target` within an ongoing pass.
    pub(crate) fn evaluate(
        &self,
        target: &T,
        eval: &mut Evaluation<'_>,
    ) -> Result<(), ValidatorError> {
        eval.with_scope(Scope::from(&self.config), |eval| {
            for guarded in &self.rules {
                if eval.should_stop() {
                    break;
                }

                let name = guarded.rule.name();
                if !guarded.applicability.includes(eval.group()) {
                    trace!(rule = name, group = %eval.group(), "skipped: not in group");
                    continue;
                }
                if !guarded.applicability.holds(target) {
                    trace!(rule = name, "skipped: condition not met");
                    continue;
                }

                trace!(rule = name, "evaluating");
                guarded.rule.evaluate(target, eval)?;
            }
            Ok(())
        })
    }
}

impl<T> fmt::Debug for Validator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rules: Vec<&str> = self.rules.iter().map(|g| g.rule.name()).collect();
        f.debug_struct("Validator")
            .field("rules", &rules)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
