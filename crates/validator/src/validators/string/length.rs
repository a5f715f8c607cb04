//! String size predicates
//!
//! Sizes are counted in code points after normalization (see
//! [`TextMeasure`]). By default the value is NFC-normalized and variation
//! selectors count like any other code point.
//!
//! Every failure carries two arguments: the limit, then the measured size.

use crate::foundation::ValidationError;
use crate::normalizer::{Normalization, TextMeasure, VariantOptions};

/// Adds the measure-configuration builders shared by the size predicates.
macro_rules! measured {
    ($($name:ident),+ $(,)?) => {
        $(
            impl $name {
                /// Replaces the whole measure.
                #[must_use = "builder methods must be chained or built"]
                pub fn with_measure(mut self, measure: TextMeasure) -> Self {
                    self.measure = measure;
                    self
                }

                /// Sets the normalization form; [`Normalization::None`] counts the raw code points.
                #[must_use = "builder methods must be chained or built"]
                pub fn normalization(mut self, normalization: Normalization) -> Self {
                    self.measure = self.measure.with_normalization(normalization);
                    self
                }

                /// Sets which variation selectors are left out of the count.
                #[must_use = "builder methods must be chained or built"]
                pub fn variants(mut self, variants: VariantOptions) -> Self {
                    self.measure = self.measure.with_variants(variants);
                    self
                }
            }
        )+
    };
}

// ============================================================================
// FIXED SIZE
// ============================================================================

crate::predicate! {
    /// The value has exactly `size` code points.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub FixedSize { size: usize, measure: TextMeasure } for str;
    rule(self, input) { self.measure.size(input) == self.size }
    error(self, input) {
        ValidationError::size(
            "string.fixed_size",
            "The size of \"{0}\" must be {1}. The given size is {2}",
            self.size,
            self.measure.size(input),
        )
    }
    new(size: usize) { Self { size, measure: TextMeasure::new() } }
    fn fixed_size(size: usize);
}

// ============================================================================
// GREATER THAN
// ============================================================================

crate::predicate! {
    /// The value has more than `min` code points.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub GreaterThan { min: usize, measure: TextMeasure } for str;
    rule(self, input) { self.measure.size(input) > self.min }
    error(self, input) {
        ValidationError::size(
            "string.greater_than",
            "The size of \"{0}\" must be greater than {1}. The given size is {2}",
            self.min,
            self.measure.size(input),
        )
    }
    new(min: usize) { Self { min, measure: TextMeasure::new() } }
    fn greater_than(min: usize);
}

crate::predicate! {
    /// The value has at least `min` code points.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub GreaterThanOrEqual { min: usize, measure: TextMeasure } for str;
    rule(self, input) { self.measure.size(input) >= self.min }
    error(self, input) {
        ValidationError::size(
            "string.greater_than_or_equal",
            "The size of \"{0}\" must be greater than or equal to {1}. The given size is {2}",
            self.min,
            self.measure.size(input),
        )
    }
    new(min: usize) { Self { min, measure: TextMeasure::new() } }
    fn greater_than_or_equal(min: usize);
}

// ============================================================================
// LESS THAN
// ============================================================================

crate::predicate! {
    /// The value has fewer than `max` code points.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub LessThan { max: usize, measure: TextMeasure } for str;
    rule(self, input) { self.measure.size(input) < self.max }
    error(self, input) {
        ValidationError::size(
            "string.less_than",
            "The size of \"{0}\" must be less than {1}. The given size is {2}",
            self.max,
            self.measure.size(input),
        )
    }
    new(max: usize) { Self { max, measure: TextMeasure::new() } }
    fn less_than(max: usize);
}

crate::predicate! {
    /// The value has at most `max` code points.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub LessThanOrEqual { max: usize, measure: TextMeasure } for str;
    rule(self, input) { self.measure.size(input) <= self.max }
    error(self, input) {
        ValidationError::size(
            "string.less_than_or_equal",
            "The size of \"{0}\" must be less than or equal to {1}. The given size is {2}",
            self.max,
            self.measure.size(input),
        )
    }
    new(max: usize) { Self { max, measure: TextMeasure::new() } }
    fn less_than_or_equal(max: usize);
}

measured!(FixedSize, GreaterThan, GreaterThanOrEqual, LessThan, LessThanOrEqual);

// ============================================================================
// TESTS
// ============================================================================
