//! Message templates and interpolation.
//!
//! A violation message is resolved in two steps:
//!
//! 1. The validator's [`MessageSource`] is asked for a template for the
//!    message key in the requested locale. If it has none, the default
//!    template carried by the predicate is used.
//! 2. [`MessageFormatter`] replaces `{0}`, `{1}`… with the field path and
//!    the predicate arguments.
//!
//! # Examples
//!
//! ```rust,ignore
//! use veritas_validator::prelude::*;
//!
//! let catalog = MessageCatalog::new()
//!     .with(Locale::JAPANESE, "string.not_blank", "「{0}」は空白にできません");
//! ```

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use crate::locale::Locale;

// ============================================================================
// MESSAGE SOURCE
// ============================================================================

/// Resolves a message template for a key and locale.
///
/// Lookups happen on the validation path and must not block on I/O. Load
/// resource files up front and serve them from memory.
pub trait MessageSource: Send + Sync {
    /// Returns the template for `key`, or `None` to fall back to the
    /// predicate's default template.
    fn template(&self, key: &str, locale: &Locale) -> Option<Cow<'_, str>>;
}

/// Resolves nothing, so every violation uses its predicate's template.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMessages;

impl MessageSource for DefaultMessages {
    fn template(&self, _key: &str, _locale: &Locale) -> Option<Cow<'_, str>> {
        None
    }
}

/// In-memory templates keyed by locale.
///
/// Lookup for `ja-JP` tries `ja-JP`, then `ja`, then the root locale.
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    templates: HashMap<Locale, HashMap<String, String>>,
}

impl MessageCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a template.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(
        mut self,
        locale: Locale,
        key: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        self.insert(locale, key, template);
        self
    }

    /// Adds a template in place, replacing any previous one.
    pub fn insert(&mut self, locale: Locale, key: impl Into<String>, template: impl Into<String>) {
        self.templates
            .entry(locale)
            .or_default()
            .insert(key.into(), template.into());
    }

    /// Adds every `(key, template)` pair for one locale.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_bundle<I, K, V>(mut self, locale: Locale, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let bundle = self.templates.entry(locale).or_default();
        bundle.extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn len(&self) -> usize {
        self.templates.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl MessageSource for MessageCatalog {
    fn template(&self, key: &str, locale: &Locale) -> Option<Cow<'_, str>> {
        locale.fallbacks().find_map(|candidate| {
            self.templates
                .get(&candidate)
                .and_then(|bundle| bundle.get(key))
                .map(|template| Cow::Borrowed(template.as_str()))
        })
    }
}

/// A message source backed by a closure.
pub struct FnMessageSource<F> {
    lookup: F,
}

impl<F> fmt::Debug for FnMessageSource<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnMessageSource").finish_non_exhaustive()
    }
}

impl<F> MessageSource for FnMessageSource<F>
where
    F: Fn(&str, &Locale) -> Option<String> + Send + Sync,
{
    fn template(&self, key: &str, locale: &Locale) -> Option<Cow<'_, str>> {
        (self.lookup)(key, locale).map(Cow::Owned)
    }
}

/// Wraps a `(key, locale) -> template` function.
pub fn message_source_fn<F>(lookup: F) -> FnMessageSource<F>
where
    F: Fn(&str, &Locale) -> Option<String> + Send + Sync,
{
    FnMessageSource { lookup }
}

// ============================================================================
// FORMATTER
// ============================================================================

static PLACEHOLDER: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"\{(\d+)\}").expect("placeholder pattern is valid"));

/// Positional `{n}` interpolation.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageFormatter;

impl MessageFormatter {
    /// Replaces each `{n}` with `args[n]`. Placeholders without an argument
    /// are left as written.
    #[must_use]
    pub fn format<S: AsRef<str>>(template: &str, args: &[S]) -> String {
        PLACEHOLDER
            .replace_all(template, |caps: &regex::Captures<'_>| {
                caps[1]
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| args.get(index))
                    .map_or_else(|| caps[0].to_string(), |arg| arg.as_ref().to_string())
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_positional() {
        let message = MessageFormatter::format(
            "The size of \"{0}\" must be {1}. The given size is {2}",
            &["name", "2", "3"],
        );
        assert_eq!(message, "The size of \"name\" must be 2. The given size is 3");
    }

    #[test]
    fn test_format_keeps_unknown_placeholders() {
        assert_eq!(MessageFormatter::format("{0} {5} {x}", &["a"]), "a {5} {x}");
    }

    #[test]
    fn test_format_repeated_placeholder() {
        assert_eq!(MessageFormatter::format("{0}/{0}", &["p"]), "p/p");
    }

    #[test]
    fn test_catalog_falls_back_to_language_then_root() {
        let catalog = MessageCatalog::new()
            .with(Locale::JAPANESE, "string.not_blank", "「{0}」は空白にできません")
            .with(Locale::ROOT, "string.not_empty", "{0} is required");

        let ja_jp = Locale::parse("ja-JP");
        assert_eq!(
            catalog.template("string.not_blank", &ja_jp).as_deref(),
            Some("「{0}」は空白にできません")
        );
        assert_eq!(
            catalog.template("string.not_empty", &ja_jp).as_deref(),
            Some("{0} is required")
        );
        assert_eq!(catalog.template("string.email", &ja_jp), None);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_region_specific_template_wins() {
        let catalog = MessageCatalog::new()
            .with(Locale::ENGLISH, "k", "generic")
            .with(Locale::parse("en-GB"), "k", "british");

        assert_eq!(catalog.template("k", &Locale::parse("en-GB")).as_deref(), Some("british"));
        assert_eq!(catalog.template("k", &Locale::parse("en-US")).as_deref(), Some("generic"));
    }

    #[test]
    fn test_closure_source() {
        let source = message_source_fn(|key, locale| {
            (locale.language() == "fr" && key == "string.not_blank")
                .then(|| "« {0} » ne doit pas être vide".to_string())
        });

        assert!(source.template("string.not_blank", &Locale::of("fr")).is_some());
        assert!(source.template("string.not_blank", &Locale::ENGLISH).is_none());
        assert!(DefaultMessages.template("string.not_blank", &Locale::ENGLISH).is_none());
    }
}
