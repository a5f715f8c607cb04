//! Predicate combinators
//!
//! - [`When`] - run a predicate only when a condition on the value holds
//! - [`WithMessage`] - replace the message key and template of failures
//! - [`Not`] - pass exactly when the inner predicate fails
//! - [`Custom`] - a predicate backed by a closure

pub mod custom;
pub mod message;
pub mod not;
pub mod when;

pub use custom::{Custom, custom};
pub use message::{WithMessage, with_message};
pub use not::{Not, not};
pub use when::{When, when};
