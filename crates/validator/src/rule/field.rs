//! Predicates on a single field.

use std::borrow::Cow;

use tracing::trace;

use crate::error::ValidatorError;
use crate::foundation::ValidationError;
use crate::rule::{Accessor, Predicate, Rule};
use crate::validator::config::{AbsentPolicy, FieldPolicy};
use crate::validator::engine::Evaluation;

pub(crate) struct FieldRule<T, U: ?Sized> {
    pub(crate) name: Cow<'static, str>,
    pub(crate) accessor: Accessor<T, U>,
    pub(crate) predicates: Vec<Predicate<U>>,
    pub(crate) policy: Option<FieldPolicy>,
    pub(crate) required: bool,
}

impl<T, U: ?Sized> Rule<T> for FieldRule<T, U> {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, target: &T, eval: &mut Evaluation<'_>) -> Result<(), ValidatorError> {
        let scope = eval.scope();

        let Some(value) = (self.accessor)(target) else {
            if self.required || scope.on_absent == AbsentPolicy::Violation {
                eval.report(&self.name, ValidationError::not_null());
            } else {
                trace!(field = %self.name, "skipped: value absent");
            }
            return Ok(());
        };

        let policy = self.policy.unwrap_or(scope.field_policy);
        for predicate in &self.predicates {
            if eval.should_stop() {
                break;
            }
            if let Err(error) = predicate.validate(value) {
                eval.report(&self.name, error);
                if policy == FieldPolicy::FailFast {
                    break;
                }
            }
        }

        Ok(())
    }
}
