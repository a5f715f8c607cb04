//! Text measurement for size constraints
//!
//! Size constraints count code points, not bytes. Before counting, the value
//! is normalized (NFC by default) so that a base character followed by a
//! combining mark counts the same as its precomposed form. Variation
//! selectors can optionally be left out of the count.
//!
//! # Examples
//!
//! ```rust,ignore
//! use veritas_validator::normalizer::{Normalization, TextMeasure};
//!
//! // "モシ" followed by a combining voiced sound mark composes to "モジ".
//! let text = "モシ\u{3099}";
//! assert_eq!(TextMeasure::default().size(text), 2);
//! assert_eq!(TextMeasure::default().with_normalization(Normalization::None).size(text), 3);
//! ```

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use unicode_normalization::{
    IsNormalized, UnicodeNormalization, is_nfc_quick, is_nfd_quick, is_nfkc_quick, is_nfkd_quick,
};

// ============================================================================
// NORMALIZATION FORM
// ============================================================================

/// Unicode normalization form applied before measuring or matching text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Normalization {
    /// Measure the text as given.
    None,
    /// Canonical composition.
    #[default]
    Nfc,
    /// Canonical decomposition.
    Nfd,
    /// Compatibility composition.
    Nfkc,
    /// Compatibility decomposition.
    Nfkd,
}

impl Normalization {
    /// Applies this form, borrowing when the text is already normalized.
    #[must_use]
    pub fn apply(self, text: &str) -> Cow<'_, str> {
        let (quick, normalize): (IsNormalized, fn(&str) -> String) = match self {
            Normalization::None => return Cow::Borrowed(text),
            Normalization::Nfc => (is_nfc_quick(text.chars()), |t| t.nfc().collect()),
            Normalization::Nfd => (is_nfd_quick(text.chars()), |t| t.nfd().collect()),
            Normalization::Nfkc => (is_nfkc_quick(text.chars()), |t| t.nfkc().collect()),
            Normalization::Nfkd => (is_nfkd_quick(text.chars()), |t| t.nfkd().collect()),
        };

        if quick == IsNormalized::Yes {
            Cow::Borrowed(text)
        } else {
            Cow::Owned(normalize(text))
        }
    }
}

// ============================================================================
// VARIATION SELECTORS
// ============================================================================

/// Whether a class of variation selectors counts toward a size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantPolicy {
    /// Count the selectors like any other code point.
    #[default]
    Notice,
    /// Leave the selectors out of the count.
    Ignore,
}

/// Per-class treatment of variation selectors.
///
/// - IVS: ideographic variation selectors, U+E0100..=U+E01EF
/// - FVS: Mongolian free variation selectors, U+180B..=U+180D and U+180F
/// - SVS: standardized variation selectors, U+FE00..=U+FE0F
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantOptions {
    /// Ideographic variation selectors.
    pub ivs: VariantPolicy,
    /// Mongolian free variation selectors.
    pub fvs: VariantPolicy,
    /// Standardized variation selectors.
    pub svs: VariantPolicy,
}

impl VariantOptions {
    /// Counts every selector.
    #[must_use]
    pub const fn noticing_all() -> Self {
        Self {
            ivs: VariantPolicy::Notice,
            fvs: VariantPolicy::Notice,
            svs: VariantPolicy::Notice,
        }
    }

    /// Ignores every selector.
    #[must_use]
    pub const fn ignoring_all() -> Self {
        Self {
            ivs: VariantPolicy::Ignore,
            fvs: VariantPolicy::Ignore,
            svs: VariantPolicy::Ignore,
        }
    }

    #[must_use = "builder methods must be chained or built"]
    pub const fn with_ivs(mut self, policy: VariantPolicy) -> Self {
        self.ivs = policy;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub const fn with_fvs(mut self, policy: VariantPolicy) -> Self {
        self.fvs = policy;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub const fn with_svs(mut self, policy: VariantPolicy) -> Self {
        self.svs = policy;
        self
    }

    fn ignores(&self, c: char) -> bool {
        match c {
            '\u{E0100}'..='\u{E01EF}' => self.ivs == VariantPolicy::Ignore,
            '\u{180B}'..='\u{180D}' | '\u{180F}' => self.fvs == VariantPolicy::Ignore,
            '\u{FE00}'..='\u{FE0F}' => self.svs == VariantPolicy::Ignore,
            _ => false,
        }
    }

    fn ignores_any(&self) -> bool {
        self.ivs == VariantPolicy::Ignore
            || self.fvs == VariantPolicy::Ignore
            || self.svs == VariantPolicy::Ignore
    }
}

// ============================================================================
// TEXT MEASURE
// ============================================================================

/// How a size constraint measures a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TextMeasure {
    pub normalization: Normalization,
    pub variants: VariantOptions,
}

impl TextMeasure {
    /// NFC, every code point counted.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            normalization: Normalization::Nfc,
            variants: VariantOptions::noticing_all(),
        }
    }

    #[must_use = "builder methods must be chained or built"]
    pub const fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub const fn with_variants(mut self, variants: VariantOptions) -> Self {
        self.variants = variants;
        self
    }

    /// Returns the text in this measure's normalization form.
    #[must_use]
    pub fn normalize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.normalization.apply(text)
    }

    /// Counts the code points of the normalized text, minus ignored selectors.
    #[must_use]
    pub fn size(&self, text: &str) -> usize {
        let normalized = self.normalize(text);
        if self.variants.ignores_any() {
            normalized.chars().filter(|&c| !self.variants.ignores(c)).count()
        } else {
            normalized.chars().count()
        }
    }
}
