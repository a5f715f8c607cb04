//! Validation of sub-objects by another validator
//!
//! The nested validator's violations are reported under the parent field,
//! so a blank `zip` inside `address` becomes `address.zip`.
//!
//! # Self-referencing types
//!
//! A type that contains itself cannot hold an `Arc` to its own validator
//! while that validator is being built. Implement [`Validatable`] with a
//! lazily built static instead and refer to it through [`registered`]:
//!
//! ```rust,ignore
//! use std::sync::LazyLock;
//! use veritas_validator::prelude::*;
//!
//! struct Node {
//!     name: String,
//!     child: Option<Box<Node>>,
//! }
//!
//! static NODE: LazyLock<Validator<Node>> = LazyLock::new(|| {
//!     Validator::builder()
//!         .constraint("name", |n: &Node| n.name.as_str(), |c| c.with(not_blank()))
//!         .nest_if_present("child", |n: &Node| n.child.as_deref(), registered::<Node>())
//!         .build()
//!         .expect("node rules are valid")
//! });
//!
//! impl Validatable for Node {
//!     fn validator() -> &'static Validator<Self> {
//!         &NODE
//!     }
//! }
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::error::ValidatorError;
use crate::foundation::ValidationError;
use crate::rule::{Accessor, Rule};
use crate::validator::Validator;
use crate::validator::config::AbsentPolicy;
use crate::validator::engine::Evaluation;

// ============================================================================
// VALIDATABLE TRAIT
// ============================================================================

/// Types with a canonical, process-wide validator.
pub trait Validatable: Sized + 'static {
    fn validator() -> &'static Validator<Self>;
}

// ============================================================================
// NESTED VALIDATOR HANDLE
// ============================================================================

/// How a rule reaches the validator for a sub-object.
pub enum NestedValidator<U: 'static> {
    /// A validator owned by the rule.
    Shared(Arc<Validator<U>>),
    /// A validator resolved at validation time, see [`Validatable`].
    Registered(fn() -> &'static Validator<U>),
}

impl<U: 'static> NestedValidator<U> {
    pub(crate) fn get(&self) -> &Validator<U> {
        match self {
            Self::Shared(validator) => validator.as_ref(),
            Self::Registered(resolve) => resolve(),
        }
    }
}

impl<U: 'static> Clone for NestedValidator<U> {
    fn clone(&self) -> Self {
        match self {
            Self::Shared(validator) => Self::Shared(Arc::clone(validator)),
            Self::Registered(resolve) => Self::Registered(*resolve),
        }
    }
}

impl<U: 'static> fmt::Debug for NestedValidator<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shared(_) => f.write_str("NestedValidator::Shared"),
            Self::Registered(_) => f.write_str("NestedValidator::Registered"),
        }
    }
}

impl<U: 'static> From<Arc<Validator<U>>> for NestedValidator<U> {
    fn from(validator: Arc<Validator<U>>) -> Self {
        Self::Shared(validator)
    }
}

impl<U: 'static> From<Validator<U>> for NestedValidator<U> {
    fn from(validator: Validator<U>) -> Self {
        Self::Shared(Arc::new(validator))
    }
}

/// The registered validator of `U`.
#[must_use]
pub fn registered<U: Validatable>() -> NestedValidator<U> {
    NestedValidator::Registered(U::validator)
}

// ============================================================================
// NESTED RULE
// ============================================================================

pub(crate) struct NestedRule<T, U: 'static> {
    pub(crate) name: Cow<'static, str>,
    pub(crate) accessor: Accessor<T, U>,
    pub(crate) nested: NestedValidator<U>,
}

impl<T, U: 'static> Rule<T> for NestedRule<T, U> {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, target: &T, eval: &mut Evaluation<'_>) -> Result<(), ValidatorError> {
        match (self.accessor)(target) {
            Some(value) => eval.descend(&self.name, |eval| self.nested.get().evaluate(value, eval)),
            None => {
                if eval.scope().on_absent == AbsentPolicy::Violation {
                    eval.report(&self.name, ValidationError::not_null());
                } else {
                    trace!(field = %self.name, "skipped: value absent");
                }
                Ok(())
            }
        }
    }
}
