//! Staged construction of a [`Validator`].
//!
//! Rules are added in the order they will run. Declaration mistakes are
//! collected while chaining and reported once by [`ValidatorBuilder::build`].

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::error::ValidatorError;
use crate::group::ConstraintGroup;
use crate::message::{DefaultMessages, MessageSource};
use crate::rule::each::EachRule;
use crate::rule::nested::NestedRule;
use crate::rule::{self, Applicability, GuardedRule, NestedValidator, RuleBuilder, accessor};
use crate::validator::Validator;
use crate::validator::config::ValidatorConfig;

/// Builder for [`Validator`].
#[must_use = "builder methods must be chained or built"]
pub struct ValidatorBuilder<T: 'static> {
    rules: Vec<GuardedRule<T>>,
    config: ValidatorConfig,
    messages: Arc<dyn MessageSource>,
    errors: Vec<ValidatorError>,
}

impl<T: 'static> Default for ValidatorBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> fmt::Debug for ValidatorBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorBuilder")
            .field("rules", &self.rules.len())
            .field("config", &self.config)
            .field("errors", &self.errors)
            .finish_non_exhaustive()
    }
}

impl<T: 'static> ValidatorBuilder<T> {
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            config: ValidatorConfig::default(),
            messages: Arc::new(DefaultMessages),
            errors: Vec::new(),
        }
    }

    // ========================================================================
    // FIELD RULES
    // ========================================================================

    /// Adds predicates on a field that is always present.
    ///
    /// ```rust,ignore
    /// .constraint("name", |u: &User| u.name.as_str(), |c| c.with(not_blank()))
    /// ```
    pub fn constraint<U, F, C>(
        self,
        name: impl Into<Cow<'static, str>>,
        get: F,
        configure: C,
    ) -> Self
    where
        U: ?Sized + 'static,
        F: Fn(&T) -> &U + Send + Sync + 'static,
        C: FnOnce(RuleBuilder<T, U>) -> RuleBuilder<T, U>,
    {
        let boxed: rule::Accessor<T, U> = Box::new(accessor(move |target: &T| Some(get(target))));
        self.push_field(name.into(), boxed, configure)
    }

    /// Adds predicates on an optional field.
    ///
    /// An absent value skips the predicates unless the rule is
    /// [`required`](RuleBuilder::required) or the configuration reports
    /// absent values.
    pub fn constraint_opt<U, F, C>(
        self,
        name: impl Into<Cow<'static, str>>,
        get: F,
        configure: C,
    ) -> Self
    where
        U: ?Sized + 'static,
        F: Fn(&T) -> Option<&U> + Send + Sync + 'static,
        C: FnOnce(RuleBuilder<T, U>) -> RuleBuilder<T, U>,
    {
        self.push_field(name.into(), Box::new(get), configure)
    }

    fn push_field<U, C>(
        mut self,
        name: Cow<'static, str>,
        get: rule::Accessor<T, U>,
        configure: C,
    ) -> Self
    where
        U: ?Sized + 'static,
        C: FnOnce(RuleBuilder<T, U>) -> RuleBuilder<T, U>,
    {
        match rule::finish(name, get, configure(RuleBuilder::new())) {
            Ok(guarded) => self.rules.push(guarded),
            Err(error) => self.errors.push(error),
        }
        self
    }

    // ========================================================================
    // NESTED RULES
    // ========================================================================

    /// Validates a sub-object with another validator.
    pub fn nest<U, F>(
        self,
        name: impl Into<Cow<'static, str>>,
        get: F,
        nested: impl Into<NestedValidator<U>>,
    ) -> Self
    where
        U: 'static,
        F: Fn(&T) -> &U + Send + Sync + 'static,
    {
        let boxed: rule::Accessor<T, U> = Box::new(accessor(move |target: &T| Some(get(target))));
        self.push_rule(NestedRule {
            name: name.into(),
            accessor: boxed,
            nested: nested.into(),
        })
    }

    /// Validates an optional sub-object when it is present.
    pub fn nest_if_present<U, F>(
        self,
        name: impl Into<Cow<'static, str>>,
        get: F,
        nested: impl Into<NestedValidator<U>>,
    ) -> Self
    where
        U: 'static,
        F: Fn(&T) -> Option<&U> + Send + Sync + 'static,
    {
        self.push_rule(NestedRule {
            name: name.into(),
            accessor: Box::new(get),
            nested: nested.into(),
        })
    }

    /// Validates every element of a collection with another validator.
    ///
    /// ```rust,ignore
    /// .for_each("items", |o: &Order| o.items.as_slice(), item_validator)
    /// ```
    pub fn for_each<U, F>(
        self,
        name: impl Into<Cow<'static, str>>,
        get: F,
        nested: impl Into<NestedValidator<U>>,
    ) -> Self
    where
        U: 'static,
        F: Fn(&T) -> &[U] + Send + Sync + 'static,
    {
        let boxed: rule::Accessor<T, [U]> =
            Box::new(accessor(move |target: &T| Some(get(target))));
        self.push_rule(EachRule {
            name: name.into(),
            accessor: boxed,
            nested: nested.into(),
        })
    }

    /// Validates every element of an optional collection when it is present.
    pub fn for_each_if_present<U, F>(
        self,
        name: impl Into<Cow<'static, str>>,
        get: F,
        nested: impl Into<NestedValidator<U>>,
    ) -> Self
    where
        U: 'static,
        F: Fn(&T) -> Option<&[U]> + Send + Sync + 'static,
    {
        self.push_rule(EachRule {
            name: name.into(),
            accessor: Box::new(get),
            nested: nested.into(),
        })
    }

    fn push_rule(mut self, rule: impl rule::Rule<T> + 'static) -> Self {
        self.rules.push(GuardedRule {
            rule: Box::new(rule),
            applicability: Applicability::default(),
        });
        self
    }

    // ========================================================================
    // GROUPS AND CONDITIONS
    // ========================================================================

    /// Declares rules that apply only when validating in `group`.
    ///
    /// Blocks nest by intersection: a rule inside `on_group("a", ..)` and
    /// `on_group("b", ..)` needs the active group to be both, so it never
    /// runs. Only the rules and declaration errors of the block are kept;
    /// configuration set inside it is ignored.
    ///
    /// ```rust,ignore
    /// .on_group(ConstraintGroup::of("update"), |b| {
    ///     b.constraint("id", |u: &User| &u.id, |c| c.with(numeric::greater_than(0)))
    /// })
    /// ```
    pub fn on_group<C>(self, group: impl Into<ConstraintGroup>, configure: C) -> Self
    where
        C: FnOnce(Self) -> Self,
    {
        let mut scope = Applicability::default();
        scope.add_group(group.into());
        self.scoped(scope, configure)
    }

    /// Declares rules that apply only when `condition` holds for the target.
    ///
    /// Nested blocks require every condition to hold.
    pub fn on_condition<P, C>(self, condition: P, configure: C) -> Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
        C: FnOnce(Self) -> Self,
    {
        let mut scope = Applicability::default();
        scope.add_condition(Arc::new(condition));
        self.scoped(scope, configure)
    }

    /// Runs `configure` on an empty builder and takes its rules back under
    /// `scope`.
    fn scoped<C>(mut self, scope: Applicability<T>, configure: C) -> Self
    where
        C: FnOnce(Self) -> Self,
    {
        let block = configure(Self {
            rules: Vec::new(),
            config: self.config.clone(),
            messages: Arc::clone(&self.messages),
            errors: Vec::new(),
        });

        self.rules.extend(block.rules.into_iter().map(|mut guarded| {
            guarded.applicability.merge(&scope);
            guarded
        }));
        self.errors.extend(block.errors);
        self
    }

    // ========================================================================
    // CONFIGURATION
    // ========================================================================

    pub fn config(mut self, config: ValidatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Stops the whole pass at the first violation.
    pub fn fail_fast(mut self, fail_fast: bool) -> Self {
        self.config.fail_fast = fail_fast;
        self
    }

    /// Sets the source of locale-specific message templates.
    pub fn messages(mut self, messages: impl MessageSource + 'static) -> Self {
        self.messages = Arc::new(messages);
        self
    }

    /// Shares one message source between several validators.
    pub fn shared_messages(mut self, messages: Arc<dyn MessageSource>) -> Self {
        self.messages = messages;
        self
    }

    /// Finishes the validator.
    ///
    /// # Errors
    ///
    /// The first declaration error, such as [`ValidatorError::EmptyRule`].
    pub fn build(self) -> Result<Validator<T>, ValidatorError> {
        if let Some(error) = self.errors.into_iter().next() {
            return Err(error);
        }
        Ok(Validator::from_parts(self.rules, self.config, self.messages))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::string::not_blank;

    struct Item {
        label: String,
    }

    #[test]
    fn test_empty_rule_rejected_at_build() {
        let result = Validator::<Item>::builder()
            .constraint("label", |i: &Item| i.label.as_str(), |c| c)
            .build();

        assert!(matches!(
            result,
            Err(ValidatorError::EmptyRule { ref field }) if field == "label"
        ));
    }

    #[test]
    fn test_required_alone_is_a_rule() {
        let validator = Validator::<Option<String>>::builder()
            .constraint_opt("value", |v: &Option<String>| v.as_deref(), |c| c.required())
            .build()
            .unwrap();
        assert_eq!(validator.rule_count(), 1);
    }

    #[test]
    fn test_group_block_tags_only_its_rules() {
        let validator = Validator::<Item>::builder()
            .constraint("label", |i: &Item| i.label.as_str(), |c| c.with(not_blank()))
            .on_group("update", |b| {
                b.constraint("label", |i: &Item| i.label.as_str(), |c| c.with(not_blank()))
            })
            .build()
            .unwrap();

        let update = ConstraintGroup::of("update");
        assert!(validator.rules[0].applicability.includes(&ConstraintGroup::DEFAULT));
        assert!(!validator.rules[1].applicability.includes(&ConstraintGroup::DEFAULT));
        assert!(validator.rules[1].applicability.includes(&update));
    }

    #[test]
    fn test_block_returning_fresh_builder_adds_nothing() {
        let validator = Validator::<Item>::builder()
            .constraint("label", |i: &Item| i.label.as_str(), |c| c.with(not_blank()))
            .on_group("update", |_b| ValidatorBuilder::<Item>::new())
            .on_condition(|_: &Item| true, |_b| ValidatorBuilder::default())
            .build()
            .unwrap();

        assert_eq!(validator.rule_count(), 1);
        assert!(validator.rules[0].applicability.includes(&ConstraintGroup::DEFAULT));
    }

    #[test]
    fn test_block_keeps_declaration_errors() {
        let result = Validator::<Item>::builder()
            .on_group("update", |b| {
                b.constraint("label", |i: &Item| i.label.as_str(), |c| c)
            })
            .build();

        assert!(matches!(result, Err(ValidatorError::EmptyRule { .. })));
    }

    #[test]
    fn test_nested_group_blocks_intersect() {
        let validator = Validator::<Item>::builder()
            .on_group("a", |b| {
                b.on_group("b", |b| {
                    b.constraint("label", |i: &Item| i.label.as_str(), |c| c.with(not_blank()))
                })
            })
            .on_group("a", |b| {
                b.constraint("label", |i: &Item| i.label.as_str(), |c| {
                    c.with(not_blank()).on_group("a").on_group("b")
                })
            })
            .build()
            .unwrap();

        let (a, b) = (ConstraintGroup::of("a"), ConstraintGroup::of("b"));
        let both = &validator.rules[0].applicability;
        assert!(!both.includes(&a));
        assert!(!both.includes(&b));
        assert!(!both.includes(&ConstraintGroup::DEFAULT));

        let rule_level = &validator.rules[1].applicability;
        assert!(rule_level.includes(&a));
        assert!(!rule_level.includes(&b));
    }
}
