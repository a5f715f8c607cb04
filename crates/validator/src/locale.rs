//! Locales for message lookup.
//!
//! Only language and region matter here; anything after a `.` or `@`
//! (encoding, modifier) is dropped when parsing.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// A language with an optional region.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Locale {
    language: Cow<'static, str>,
    region: Option<Cow<'static, str>>,
}

impl Locale {
    /// The locale-neutral root. Catalog lookups end here.
    pub const ROOT: Self = Self {
        language: Cow::Borrowed(""),
        region: None,
    };

    pub const ENGLISH: Self = Self::of("en");

    pub const JAPANESE: Self = Self::of("ja");

    /// A language-only locale with a static tag.
    #[must_use]
    pub const fn of(language: &'static str) -> Self {
        Self {
            language: Cow::Borrowed(language),
            region: None,
        }
    }

    /// A locale from owned parts. Language is lowercased, region uppercased.
    pub fn new(language: impl AsRef<str>, region: Option<&str>) -> Self {
        Self {
            language: Cow::Owned(language.as_ref().to_ascii_lowercase()),
            region: region
                .filter(|r| !r.is_empty())
                .map(|r| Cow::Owned(r.to_ascii_uppercase())),
        }
    }

    /// Parses `ja`, `ja-JP`, `ja_JP` or `ja_JP.UTF-8`.
    ///
    /// `C`, `POSIX` and the empty string map to [`Locale::ROOT`].
    #[must_use]
    pub fn parse(tag: &str) -> Self {
        let tag = tag.split(['.', '@']).next().unwrap_or_default().trim();
        if tag.is_empty() || tag == "C" || tag == "POSIX" {
            return Self::ROOT;
        }

        let mut parts = tag.splitn(2, ['-', '_']);
        let language = parts.next().unwrap_or_default();
        Self::new(language, parts.next())
    }

    /// The process locale from `LC_ALL`, `LC_MESSAGES` or `LANG`, read once.
    pub fn system() -> &'static Locale {
        static SYSTEM: OnceLock<Locale> = OnceLock::new();
        SYSTEM.get_or_init(|| {
            ["LC_ALL", "LC_MESSAGES", "LANG"]
                .iter()
                .filter_map(|name| std::env::var(name).ok())
                .find(|value| !value.is_empty())
                .map(|value| Self::parse(&value))
                .unwrap_or(Self::ROOT)
        })
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn is_root(&self) -> bool {
        self.language.is_empty()
    }

    /// Lookup order: this locale, its language alone, then the root.
    pub fn fallbacks(&self) -> impl Iterator<Item = Locale> + '_ {
        let language_only = self.region.is_some().then(|| Self {
            language: self.language.clone(),
            region: None,
        });
        let root = (!self.is_root()).then_some(Self::ROOT);

        std::iter::once(self.clone())
            .chain(language_only)
            .chain(root)
    }
}

impl FromStr for Locale {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str("root");
        }
        f.write_str(&self.language)?;
        if let Some(region) = &self.region {
            write!(f, "-{region}")?;
        }
        Ok(())
    }
}
