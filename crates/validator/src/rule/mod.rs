//! Rules: what a validator checks on its target.
//!
//! A rule pairs an accessor into the target with the checks for the value it
//! finds, plus the groups and conditions under which the rule applies.
//!
//! - field rules: predicates on one field
//! - [`nested`] rules: another validator on a sub-object
//! - each rules: another validator on every element of a collection

use std::borrow::Cow;
use std::sync::Arc;

use crate::error::ValidatorError;
use crate::foundation::Validate;
use crate::group::{ConstraintGroup, GroupSet};
use crate::validator::config::FieldPolicy;
use crate::validator::engine::Evaluation;

pub(crate) mod each;
pub(crate) mod field;
pub mod nested;

pub use nested::{NestedValidator, Validatable, registered};

/// A boxed predicate over a field value.
pub(crate) type Predicate<U> = Box<dyn Validate<Input = U> + Send + Sync>;

/// A boxed accessor. `None` means the value is absent.
pub(crate) type Accessor<T, U> = Box<dyn Fn(&T) -> Option<&U> + Send + Sync>;

/// A condition on the whole target.
pub(crate) type Condition<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Pins the higher-ranked signature of an accessor closure before boxing.
pub(crate) fn accessor<T, U, F>(f: F) -> F
where
    T: ?Sized,
    U: ?Sized,
    F: Fn(&T) -> Option<&U>,
{
    f
}

// ============================================================================
// RULE TRAIT
// ============================================================================

pub(crate) trait Rule<T>: Send + Sync {
    /// Field name, used in logs and as the path segment.
    fn name(&self) -> &str;

    /// Checks `target`, reporting violations into `eval`.
    ///
    /// `Err` is reserved for contract violations such as the depth guard.
    fn evaluate(&self, target: &T, eval: &mut Evaluation<'_>) -> Result<(), ValidatorError>;
}

// ============================================================================
// APPLICABILITY
// ============================================================================

/// When a rule runs: group membership and target conditions.
///
/// `groups` are the rule's own groups, any of which selects it. Each entry of
/// `scopes` comes from an enclosing `on_group` block and must also contain the
/// active group, so nested blocks narrow the way nested conditions do.
pub(crate) struct Applicability<T> {
    groups: GroupSet,
    scopes: Vec<GroupSet>,
    conditions: Vec<Condition<T>>,
}

impl<T> Default for Applicability<T> {
    fn default() -> Self {
        Self {
            groups: GroupSet::new(),
            scopes: Vec::new(),
            conditions: Vec::new(),
        }
    }
}

impl<T> Clone for Applicability<T> {
    fn clone(&self) -> Self {
        Self {
            groups: self.groups.clone(),
            scopes: self.scopes.clone(),
            conditions: self.conditions.clone(),
        }
    }
}

impl<T> Applicability<T> {
    pub(crate) fn add_group(&mut self, group: ConstraintGroup) {
        if !self.groups.contains(&group) {
            self.groups.push(group);
        }
    }

    pub(crate) fn add_condition(&mut self, condition: Condition<T>) {
        self.conditions.push(condition);
    }

    /// Narrows `self` by an enclosing block.
    pub(crate) fn merge(&mut self, outer: &Self) {
        if !outer.groups.is_empty() {
            self.scopes.push(outer.groups.clone());
        }
        self.scopes.extend(outer.scopes.iter().cloned());
        self.conditions.extend(outer.conditions.iter().cloned());
    }

    /// A rule without groups belongs to every group its blocks allow.
    pub(crate) fn includes(&self, group: &ConstraintGroup) -> bool {
        (self.groups.is_empty() || self.groups.contains(group))
            && self.scopes.iter().all(|scope| scope.contains(group))
    }

    /// Every condition holds for `target`.
    pub(crate) fn holds(&self, target: &T) -> bool {
        self.conditions.iter().all(|condition| condition(target))
    }
}

/// A rule with its applicability.
pub(crate) struct GuardedRule<T> {
    pub(crate) rule: Box<dyn Rule<T>>,
    pub(crate) applicability: Applicability<T>,
}

// ============================================================================
// RULE BUILDER
// ============================================================================

/// Collects the predicates and options of one field rule.
///
/// Handed to the closure passed to
/// [`ValidatorBuilder::constraint`](crate::validator::ValidatorBuilder::constraint).
///
/// # Examples
///
/// ```rust,ignore
/// builder.constraint("name", |u: &User| u.name.as_str(), |c| {
///     c.with(not_blank()).with(less_than_or_equal(20)).collect_all()
/// })
/// ```
#[must_use = "builder methods must be chained or built"]
pub struct RuleBuilder<T, U: ?Sized> {
    pub(crate) predicates: Vec<Predicate<U>>,
    pub(crate) applicability: Applicability<T>,
    pub(crate) policy: Option<FieldPolicy>,
    pub(crate) required: bool,
}

impl<T, U: ?Sized> RuleBuilder<T, U> {
    pub(crate) fn new() -> Self {
        Self {
            predicates: Vec::new(),
            applicability: Applicability::default(),
            policy: None,
            required: false,
        }
    }

    /// Appends a predicate. Predicates run in the order they are added.
    pub fn with<V>(mut self, predicate: V) -> Self
    where
        V: Validate<Input = U> + Send + Sync + 'static,
    {
        self.predicates.push(Box::new(predicate));
        self
    }

    /// Restricts the rule to `group`. Repeat to allow several groups.
    pub fn on_group(mut self, group: impl Into<ConstraintGroup>) -> Self {
        self.applicability.add_group(group.into());
        self
    }

    /// Runs the rule only when `condition` holds for the target.
    pub fn when<C>(mut self, condition: C) -> Self
    where
        C: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.applicability.add_condition(Arc::new(condition));
        self
    }

    /// Reports every failing predicate instead of only the first.
    pub fn collect_all(mut self) -> Self {
        self.policy = Some(FieldPolicy::CollectAll);
        self
    }

    /// Reports only the first failing predicate.
    pub fn fail_fast(mut self) -> Self {
        self.policy = Some(FieldPolicy::FailFast);
        self
    }

    /// Reports `object.not_null` when the value is absent.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Turns a finished builder into a rule, rejecting rules with no checks.
pub(crate) fn finish<T, U>(
    name: Cow<'static, str>,
    accessor: Accessor<T, U>,
    builder: RuleBuilder<T, U>,
) -> Result<GuardedRule<T>, ValidatorError>
where
    T: 'static,
    U: ?Sized + 'static,
{
    if builder.predicates.is_empty() && !builder.required {
        return Err(ValidatorError::EmptyRule {
            field: name.into_owned(),
        });
    }

    Ok(GuardedRule {
        rule: Box::new(field::FieldRule {
            name,
            accessor,
            predicates: builder.predicates,
            policy: builder.policy,
            required: builder.required,
        }),
        applicability: builder.applicability,
    })
}
