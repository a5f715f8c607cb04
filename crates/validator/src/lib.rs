//! # veritas-validator
//!
//! Declarative object validation: build a reusable [`Validator`] from
//! per-field predicates once, then apply it to any number of targets to get
//! an ordered list of constraint violations with localized messages.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use veritas_validator::prelude::*;
//!
//! struct User {
//!     name: String,
//!     email: String,
//! }
//!
//! let validator = Validator::<User>::builder()
//!     .constraint("name", |u: &User| u.name.as_str(), |c| {
//!         c.with(not_blank()).with(less_than_or_equal(20))
//!     })
//!     .constraint("email", |u: &User| u.email.as_str(), |c| c.with(email()))
//!     .build()?;
//!
//! let violations = validator.validate(&user)?;
//! assert!(violations.is_valid());
//! ```
//!
//! ## Layers
//!
//! - **Predicates** ([`foundation`], [`validators`], [`combinators`]): pure
//!   checks on one value. Use the [`predicate!`] macro to declare new ones.
//! - **Text measurement** ([`normalizer`]): NFC normalization and variation
//!   selector handling for string sizes.
//! - **Rules** ([`rule`]): accessors, groups, conditions, nesting.
//! - **Engine** ([`validator`]): evaluation, aggregation, the Either view.
//! - **Messages** ([`locale`], [`message`], [`violation`]): templates and
//!   rendered violations.
//!
//! ## Errors
//!
//! Failed predicates are data: they come back as [`ConstraintViolations`].
//! Only misuse, such as validating a missing target, is an `Err`
//! ([`ValidatorError`]).
//!
//! [`Validator`]: validator::Validator
//! [`ConstraintViolations`]: violation::ConstraintViolations
//! [`ValidatorError`]: error::ValidatorError

// ValidationError is returned by value from every predicate.
#![allow(clippy::result_large_err)]
#![allow(clippy::type_complexity)]

mod macros;

pub mod combinators;
pub mod error;
pub mod foundation;
pub mod group;
pub mod locale;
pub mod message;
pub mod normalizer;
pub mod prelude;
pub mod rule;
pub mod validator;
pub mod validators;
pub mod violation;
