//! Constraint groups.
//!
//! A group names a subset of rules. Rules declared outside any
//! [`on_group`](crate::validator::ValidatorBuilder::on_group) block apply to
//! every group.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A named partition of rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConstraintGroup(Cow<'static, str>);

impl ConstraintGroup {
    /// The group used when the caller does not name one.
    pub const DEFAULT: Self = Self(Cow::Borrowed("default"));

    /// A group with a static name.
    #[must_use]
    pub const fn of(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// A group with an owned name.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Default for ConstraintGroup {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for ConstraintGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for ConstraintGroup {
    fn from(name: &'static str) -> Self {
        Self::of(name)
    }
}

/// The groups a rule belongs to. Empty means every group.
pub(crate) type GroupSet = SmallVec<[ConstraintGroup; 2]>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_group() {
        assert_eq!(ConstraintGroup::default(), ConstraintGroup::DEFAULT);
        assert_eq!(ConstraintGroup::DEFAULT.name(), "default");
    }

    #[test]
    fn test_static_and_owned_names_compare_equal() {
        assert_eq!(
            ConstraintGroup::of("update"),
            ConstraintGroup::new(String::from("update"))
        );
        assert_eq!(ConstraintGroup::from("update").to_string(), "update");
    }

    #[test]
    fn test_serde_is_a_plain_string() {
        let json = serde_json::to_string(&ConstraintGroup::of("create")).unwrap();
        assert_eq!(json, "\"create\"");

        let group: ConstraintGroup = serde_json::from_str("\"create\"").unwrap();
        assert_eq!(group, ConstraintGroup::of("create"));
    }
}
