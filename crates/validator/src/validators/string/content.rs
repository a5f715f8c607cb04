//! Presence and substring predicates

use crate::foundation::ValidationError;

// ============================================================================
// PRESENCE
// ============================================================================

crate::predicate! {
    /// The value has at least one character. A single space passes.
    pub NotEmpty for str;
    rule(input) { !input.is_empty() }
    error(input) { ValidationError::new("string.not_empty", "\"{0}\" must not be empty") }
    fn not_empty();
}

crate::predicate! {
    /// The value has a non-whitespace character.
    ///
    /// Whitespace follows the Unicode `White_Space` property, so the
    /// ideographic space U+3000 counts as blank.
    pub NotBlank for str;
    rule(input) { !input.trim().is_empty() }
    error(input) { ValidationError::new("string.not_blank", "\"{0}\" must not be blank") }
    fn not_blank();
}

// ============================================================================
// SUBSTRINGS
// ============================================================================

crate::predicate! {
    /// The value contains `needle`. Case-sensitive.
    pub Contains { needle: String } for str;
    rule(self, input) { input.contains(self.needle.as_str()) }
    error(self, input) {
        ValidationError::new("string.contains", "\"{0}\" must contain {1}")
            .with_arg(self.needle.clone())
    }
    new(needle: impl Into<String>) { Self { needle: needle.into() } }
    fn contains(needle: impl Into<String>);
}

crate::predicate! {
    /// The value starts with `prefix`.
    pub StartsWith { prefix: String } for str;
    rule(self, input) { input.starts_with(self.prefix.as_str()) }
    error(self, input) {
        ValidationError::new("string.starts_with", "\"{0}\" must start with \"{1}\"")
            .with_arg(self.prefix.clone())
    }
    new(prefix: impl Into<String>) { Self { prefix: prefix.into() } }
    fn starts_with(prefix: impl Into<String>);
}

crate::predicate! {
    /// The value ends with `suffix`.
    pub EndsWith { suffix: String } for str;
    rule(self, input) { input.ends_with(self.suffix.as_str()) }
    error(self, input) {
        ValidationError::new("string.ends_with", "\"{0}\" must end with \"{1}\"")
            .with_arg(self.suffix.clone())
    }
    new(suffix: impl Into<String>) { Self { suffix: suffix.into() } }
    fn ends_with(suffix: impl Into<String>);
}
