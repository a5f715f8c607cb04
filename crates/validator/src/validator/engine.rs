//! State of one validation pass.

use std::borrow::Cow;

use tracing::{trace, warn};

use crate::error::ValidatorError;
use crate::foundation::ValidationError;
use crate::group::ConstraintGroup;
use crate::locale::Locale;
use crate::message::{MessageFormatter, MessageSource};
use crate::validator::config::{AbsentPolicy, FieldPolicy, ValidatorConfig};
use crate::violation::{ConstraintViolation, ConstraintViolations};

/// Rule defaults of the validator currently being run.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Scope {
    pub(crate) field_policy: FieldPolicy,
    pub(crate) on_absent: AbsentPolicy,
}

impl From<&ValidatorConfig> for Scope {
    fn from(config: &ValidatorConfig) -> Self {
        Self {
            field_policy: config.field_policy,
            on_absent: config.on_absent,
        }
    }
}

pub(crate) struct Evaluation<'a> {
    locale: &'a Locale,
    group: &'a ConstraintGroup,
    messages: &'a dyn MessageSource,
    fail_fast: bool,
    max_depth: usize,
    depth: usize,
    prefix: String,
    scope: Scope,
    stopped: bool,
    violations: ConstraintViolations,
}

impl<'a> Evaluation<'a> {
    pub(crate) fn new(
        locale: &'a Locale,
        group: &'a ConstraintGroup,
        messages: &'a dyn MessageSource,
        config: &ValidatorConfig,
    ) -> Self {
        Self {
            locale,
            group,
            messages,
            fail_fast: config.fail_fast,
            max_depth: config.max_depth,
            depth: 0,
            prefix: String::new(),
            scope: Scope::from(config),
            stopped: false,
            violations: ConstraintViolations::new(),
        }
    }

    pub(crate) fn group(&self) -> &ConstraintGroup {
        self.group
    }

    pub(crate) fn scope(&self) -> Scope {
        self.scope
    }

    /// True once a violation was reported under global fail-fast.
    pub(crate) fn should_stop(&self) -> bool {
        self.stopped
    }

    /// Full dotted path of `field` below the current prefix.
    pub(crate) fn path_for(&self, field: &str) -> String {
        if self.prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{field}", self.prefix)
        }
    }

    /// Runs `f` with the rule defaults of another validator.
    pub(crate) fn with_scope<R>(&mut self, scope: Scope, f: impl FnOnce(&mut Self) -> R) -> R {
        let saved = std::mem::replace(&mut self.scope, scope);
        let result = f(self);
        self.scope = saved;
        result
    }

    /// Runs `f` one level deeper, under `segment`.
    pub(crate) fn descend(
        &mut self,
        segment: &str,
        f: impl FnOnce(&mut Self) -> Result<(), ValidatorError>,
    ) -> Result<(), ValidatorError> {
        let path = self.path_for(segment);
        if self.depth >= self.max_depth {
            warn!(path = %path, limit = self.max_depth, "maximum nesting depth exceeded");
            return Err(ValidatorError::MaxDepthExceeded {
                path,
                limit: self.max_depth,
            });
        }

        let saved = std::mem::replace(&mut self.prefix, path);
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        self.prefix = saved;
        result
    }

    /// Records a predicate failure on `field`.
    ///
    /// The field path becomes `{0}`; the predicate's own arguments follow.
    pub(crate) fn report(&mut self, field: &str, error: ValidationError) {
        let ValidationError {
            code,
            message: default_template,
            args: predicate_args,
        } = error;

        let path = self.path_for(field);
        let mut args: Vec<Cow<'static, str>> = Vec::with_capacity(predicate_args.len() + 1);
        args.push(Cow::Owned(path.clone()));
        args.extend(predicate_args);

        let messages = self.messages;
        let template = messages.template(&code, self.locale);
        let template = template.as_deref().unwrap_or(default_template.as_ref());
        let message = MessageFormatter::format(template, &args);

        trace!(field = %path, key = %code, "constraint violated");
        self.violations
            .push(ConstraintViolation::new(path, code, args, message));

        if self.fail_fast {
            self.stopped = true;
        }
    }

    pub(crate) fn finish(self) -> ConstraintViolations {
        self.violations
    }
}
