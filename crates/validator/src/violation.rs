//! Constraint violations.
//!
//! A [`ConstraintViolation`] records one failed predicate on one field with
//! its rendered message. [`ConstraintViolations`] is the ordered result of a
//! validation pass; rules appear in declaration order, so consumers can rely
//! on it for display.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

// ============================================================================
// SINGLE VIOLATION
// ============================================================================

/// One failed predicate on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConstraintViolation {
    field: String,
    message_key: Cow<'static, str>,
    args: Vec<Cow<'static, str>>,
    message: String,
}

impl ConstraintViolation {
    /// Creates a violation. `args[0]` is the field path.
    pub fn new(
        field: impl Into<String>,
        message_key: impl Into<Cow<'static, str>>,
        args: Vec<Cow<'static, str>>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message_key: message_key.into(),
            args,
            message: message.into(),
        }
    }

    /// Dotted field path, e.g. `address.zip` or `items[2].name`.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Key of the failed constraint, e.g. `string.not_blank`.
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    /// Message arguments: the field path, then the predicate's arguments.
    pub fn args(&self) -> &[Cow<'static, str>] {
        &self.args
    }

    /// The message rendered for the requested locale.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

// ============================================================================
// VIOLATION LIST
// ============================================================================

/// The violations found in one validation pass. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ConstraintViolations(Vec<ConstraintViolation>);

impl ConstraintViolations {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConstraintViolation> {
        self.0.iter()
    }

    pub fn violations(&self) -> &[ConstraintViolation] {
        &self.0
    }

    /// Rendered messages in order.
    pub fn messages(&self) -> Vec<&str> {
        self.0.iter().map(ConstraintViolation::message).collect()
    }

    /// Violations whose path is `field`.
    pub fn for_field<'a>(
        &'a self,
        field: &'a str,
    ) -> impl Iterator<Item = &'a ConstraintViolation> {
        self.0.iter().filter(move |v| v.field == field)
    }

    /// `Ok(target)` when valid, otherwise `Err(self)`.
    ///
    /// # Errors
    ///
    /// Returns the violations themselves when there is at least one.
    pub fn into_result<T>(self, target: T) -> Result<T, Self> {
        if self.is_valid() { Ok(target) } else { Err(self) }
    }

    /// The violations as a JSON array.
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::Value::Array(
            self.0
                .iter()
                .map(|v| {
                    serde_json::json!({
                        "field": v.field,
                        "message_key": v.message_key,
                        "args": v.args,
                        "message": v.message,
                    })
                })
                .collect(),
        )
    }

    pub(crate) fn push(&mut self, violation: ConstraintViolation) {
        self.0.push(violation);
    }

    pub fn into_vec(self) -> Vec<ConstraintViolation> {
        self.0
    }
}

impl IntoIterator for ConstraintViolations {
    type Item = ConstraintViolation;
    type IntoIter = std::vec::IntoIter<ConstraintViolation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ConstraintViolations {
    type Item = &'a ConstraintViolation;
    type IntoIter = std::slice::Iter<'a, ConstraintViolation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<ConstraintViolation> for ConstraintViolations {
    fn from_iter<I: IntoIterator<Item = ConstraintViolation>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for ConstraintViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.len() {
            0 => f.write_str("no constraint violations"),
            1 => write!(f, "{}", self.0[0]),
            n => {
                write!(f, "{n} constraint violations")?;
                for violation in &self.0 {
                    write!(f, "\n  - {violation}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConstraintViolations {}
