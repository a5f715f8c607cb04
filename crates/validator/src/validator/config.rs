//! Validator configuration

use serde::{Deserialize, Serialize};

/// Behaviour of a validation pass.
///
/// The validator a pass starts from owns `fail_fast` and `max_depth`.
/// `field_policy` and `on_absent` are defaults for the rules of each
/// validator, so a nested validator keeps its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Stop the whole pass at the first violation.
    pub fail_fast: bool,

    /// What a field does after its first failing predicate.
    pub field_policy: FieldPolicy,

    /// What happens when an accessor finds no value.
    pub on_absent: AbsentPolicy,

    /// Deepest allowed nesting of `nest` / `for_each` rules.
    pub max_depth: usize,
}

/// Per-field predicate policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldPolicy {
    /// Report the first failing predicate and skip the rest for that field.
    #[default]
    FailFast,
    /// Run every predicate and report each failure.
    CollectAll,
}

/// Treatment of an absent field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsentPolicy {
    /// Skip the field's predicates.
    #[default]
    Skip,
    /// Report `object.not_null` for the field.
    Violation,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            fail_fast: false,
            field_policy: FieldPolicy::FailFast,
            on_absent: AbsentPolicy::Skip,
            max_depth: 32,
        }
    }
}

impl ValidatorConfig {
    #[must_use = "builder methods must be chained or built"]
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_field_policy(mut self, policy: FieldPolicy) -> Self {
        self.field_policy = policy;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_on_absent(mut self, policy: AbsentPolicy) -> Self {
        self.on_absent = policy;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = ValidatorConfig::default();
        assert!(!config.fail_fast);
        assert_eq!(config.field_policy, FieldPolicy::FailFast);
        assert_eq!(config.on_absent, AbsentPolicy::Skip);
        assert_eq!(config.max_depth, 32);
    }

    #[test]
    fn test_partial_json() {
        let config: ValidatorConfig =
            serde_json::from_str(r#"{"field_policy":"collect_all","max_depth":4}"#).unwrap();
        assert_eq!(
            config,
            ValidatorConfig::default()
                .with_field_policy(FieldPolicy::CollectAll)
                .with_max_depth(4)
        );
    }
}
