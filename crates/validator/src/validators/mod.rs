//! Built-in predicates
//!
//! # Categories
//!
//! - **String**: size, presence, substrings, formats, parseability
//! - **Numeric**: range comparisons
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

pub mod numeric;
pub mod string;
