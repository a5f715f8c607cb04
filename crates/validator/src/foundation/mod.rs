//! Predicate layer
//!
//! This module contains the smallest building blocks of the system:
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`], the failure a predicate reports
//!
//! A predicate knows nothing about fields, groups or locales. It checks a
//! single value and, on failure, names the constraint it enforces through a
//! message key plus ordered arguments. Rules and the engine add the rest.
//!
//! # Examples
//!
//! ```rust,ignore
//! use veritas_validator::prelude::*;
//!
//! let validator = fixed_size(2);
//! assert!(validator.test("ab"));
//! assert!(!validator.test("abc"));
//! ```

pub mod error;
pub mod traits;

pub use error::{Args, ValidationError};
pub use traits::{Validate, ValidateExt};

/// A predicate result.
pub type ValidationResult = Result<(), ValidationError>;
