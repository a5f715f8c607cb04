//! Prelude module for convenient imports.
//!
//! Provides a single `use veritas_validator::prelude::*;` import that brings
//! in the validator types, the predicate traits and the built-in predicates.
//!
//! String predicates are exported directly. Numeric predicates share their
//! names with the string size family and are reached through `numeric::`.
//!
//! # Examples
//!
//! ```rust,ignore
//! use veritas_validator::prelude::*;
//!
//! let name = not_blank();
//! let code = fixed_size(3);
//! let age = numeric::between(0, 150);
//! ```

// ============================================================================
// FOUNDATION: Predicate traits and failures
// ============================================================================

pub use crate::foundation::{Validate, ValidateExt, ValidationError};

// ============================================================================
// PREDICATES
// ============================================================================

pub use crate::validators::numeric;
pub use crate::validators::string::*;

// ============================================================================
// COMBINATORS
// ============================================================================

pub use crate::combinators::{Custom, Not, When, WithMessage, custom, not, when, with_message};

// ============================================================================
// ENGINE
// ============================================================================

pub use crate::error::ValidatorError;
pub use crate::group::ConstraintGroup;
pub use crate::locale::Locale;
pub use crate::message::{DefaultMessages, MessageCatalog, MessageSource, message_source_fn};
pub use crate::normalizer::{Normalization, TextMeasure, VariantOptions, VariantPolicy};
pub use crate::rule::{NestedValidator, RuleBuilder, Validatable, registered};
pub use crate::validator::{
    AbsentPolicy, EitherValidator, FieldPolicy, Validator, ValidatorBuilder, ValidatorConfig,
};
pub use crate::violation::{ConstraintViolation, ConstraintViolations};
