//! Validation of every element of a collection.
//!
//! Elements are reported with their index: `items[2].name`.

use std::borrow::Cow;

use tracing::trace;

use crate::error::ValidatorError;
use crate::foundation::ValidationError;
use crate::rule::{Accessor, NestedValidator, Rule};
use crate::validator::config::AbsentPolicy;
use crate::validator::engine::Evaluation;

pub(crate) struct EachRule<T, U: 'static> {
    pub(crate) name: Cow<'static, str>,
    pub(crate) accessor: Accessor<T, [U]>,
    pub(crate) nested: NestedValidator<U>,
}

impl<T, U: 'static> Rule<T> for EachRule<T, U> {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, target: &T, eval: &mut Evaluation<'_>) -> Result<(), ValidatorError> {
        let Some(items) = (self.accessor)(target) else {
            if eval.scope().on_absent == AbsentPolicy::Violation {
                eval.report(&self.name, ValidationError::not_null());
            } else {
                trace!(field = %self.name, "skipped: value absent");
            }
            return Ok(());
        };

        let validator = self.nested.get();
        for (index, item) in items.iter().enumerate() {
            if eval.should_stop() {
                break;
            }
            let segment = format!("{}[{index}]", self.name);
            eval.descend(&segment, |eval| validator.evaluate(item, eval))?;
        }

        Ok(())
    }
}
