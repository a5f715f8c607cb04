//! Macros for declaring predicates with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`predicate!`]: declare a predicate (struct + `Validate` impl + factory fn)
//!
//! # Examples
//!
//! ```rust,ignore
//! use veritas_validator::predicate;
//! use veritas_validator::foundation::ValidationError;
//!
//! // Unit predicate (no fields)
//! predicate! {
//!     pub Lowercase for str;
//!     rule(input) { input.chars().all(|c| !c.is_uppercase()) }
//!     error(input) { ValidationError::new("string.lowercase", "\"{0}\" must be lowercase") }
//!     fn lowercase();
//! }
//!
//! // Struct with fields and an explicit constructor
//! predicate! {
//!     pub Prefix { prefix: String } for str;
//!     rule(self, input) { input.starts_with(&self.prefix) }
//!     error(self, input) {
//!         ValidationError::new("string.prefix", "\"{0}\" must start with {1}")
//!             .with_arg(self.prefix.clone())
//!     }
//!     new(prefix: impl Into<String>) { Self { prefix: prefix.into() } }
//!     fn prefix(prefix: impl Into<String>);
//! }
//! ```

// ============================================================================
// PREDICATE MACRO
// ============================================================================

/// Declares a complete predicate: struct definition, `Validate`
/// implementation, constructor, and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via
/// `#[derive(...)]`.
///
/// # Variants
///
/// **Unit predicate** (zero-sized, no fields):
/// ```rust,ignore
/// predicate! {
///     pub NotEmpty for str;
///     rule(input) { !input.is_empty() }
///     error(input) { ValidationError::new("string.not_empty", "\"{0}\" must not be empty") }
///     fn not_empty();
/// }
/// ```
///
/// **Struct with fields** (explicit `new`):
/// ```rust,ignore
/// predicate! {
///     pub Contains { needle: String } for str;
///     rule(self, input) { input.contains(self.needle.as_str()) }
///     error(self, input) { ValidationError::new("string.contains", "…").with_arg(self.needle.clone()) }
///     new(needle: impl Into<String>) { Self { needle: needle.into() } }
///     fn contains(needle: impl Into<String>);
/// }
/// ```
///
/// **Generic predicate** (auto `new` from all fields):
/// ```rust,ignore
/// predicate! {
///     #[derive(Copy, PartialEq)]
///     pub GreaterThan<T: PartialOrd + Display + Copy> { min: T } for T;
///     rule(self, input) { *input > self.min }
///     error(self, input) { ValidationError::new("numeric.greater_than", "…").with_arg(self.min.to_string()) }
///     fn greater_than(min: T);
/// }
/// ```
#[macro_export]
macro_rules! predicate {
    // ── Unit predicate + factory fn ──────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $crate::predicate! {
            $(#[$meta])*
            $vis $name for $input;
            rule($inp) $rule
            error($einp) $err
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Unit predicate, no factory ───────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&self, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Struct with fields + explicit new + factory fn ───────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::predicate! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
            new($($narg: $naty),*) $new_body
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + explicit new, no factory ────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Generic struct + auto new + factory fn ───────────────────────────
    //
    // A single type parameter with one or more simple trait bounds.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::predicate! {
            $(#[$meta])*
            $vis $name<$gen: $first_bound $(+ $rest_bound)*>
                { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
        }

        #[must_use]
        $vis fn $factory<$gen: $first_bound $(+ $rest_bound)*>($($farg: $faty),*) -> $name<$gen> {
            $name::new($($farg),*)
        }
    };

    // ── Generic struct + auto new, no factory ────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name<$gen> {
            $(pub $field: $fty,)+
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $name<$gen> {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $crate::foundation::Validate for $name<$gen> {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::foundation::{Validate, ValidationError};

    predicate! {
        Ascii for str;
        rule(input) { input.is_ascii() }
        error(input) { ValidationError::new("string.ascii", "\"{0}\" must be ASCII") }
        fn ascii();
    }

    predicate! {
        MultipleOf { factor: u32 } for u32;
        rule(self, input) { *input % self.factor == 0 }
        error(self, input) {
            ValidationError::new("numeric.multiple_of", "\"{0}\" must be a multiple of {1}")
                .with_arg(self.factor.to_string())
        }
        new(factor: u32) { Self { factor: factor.max(1) } }
        fn multiple_of(factor: u32);
    }

    #[test]
    fn test_unit_predicate() {
        assert!(ascii().test("plain"));
        assert_eq!(ascii().validate("ñ").unwrap_err().code, "string.ascii");
    }

    #[test]
    fn test_struct_predicate_uses_constructor() {
        assert_eq!(multiple_of(0).factor, 1);
        assert!(multiple_of(3).test(&9));

        let error = multiple_of(3).validate(&10).unwrap_err();
        assert_eq!(error.arg(0), Some("3"));
    }
}
