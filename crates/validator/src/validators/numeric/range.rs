//! Numeric range predicates

use std::fmt::Display;

use crate::foundation::ValidationError;

crate::predicate! {
    /// The value is strictly greater than `min`.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub GreaterThan<T: PartialOrd + Display + Copy> { min: T } for T;
    rule(self, input) { *input > self.min }
    error(self, input) {
        ValidationError::new("numeric.greater_than", "\"{0}\" must be greater than {1}")
            .with_arg(self.min.to_string())
    }
    fn greater_than(min: T);
}

crate::predicate! {
    /// The value is at least `min`.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub GreaterThanOrEqual<T: PartialOrd + Display + Copy> { min: T } for T;
    rule(self, input) { *input >= self.min }
    error(self, input) {
        ValidationError::new(
            "numeric.greater_than_or_equal",
            "\"{0}\" must be greater than or equal to {1}",
        )
        .with_arg(self.min.to_string())
    }
    fn greater_than_or_equal(min: T);
}

crate::predicate! {
    /// The value is strictly less than `max`.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub LessThan<T: PartialOrd + Display + Copy> { max: T } for T;
    rule(self, input) { *input < self.max }
    error(self, input) {
        ValidationError::new("numeric.less_than", "\"{0}\" must be less than {1}")
            .with_arg(self.max.to_string())
    }
    fn less_than(max: T);
}

crate::predicate! {
    /// The value is at most `max`.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub LessThanOrEqual<T: PartialOrd + Display + Copy> { max: T } for T;
    rule(self, input) { *input <= self.max }
    error(self, input) {
        ValidationError::new(
            "numeric.less_than_or_equal",
            "\"{0}\" must be less than or equal to {1}",
        )
        .with_arg(self.max.to_string())
    }
    fn less_than_or_equal(max: T);
}

crate::predicate! {
    /// The value lies in `min..=max`.
    ///
    /// `NaN` is never in range.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Between<T: PartialOrd + Display + Copy> { min: T, max: T } for T;
    rule(self, input) { *input >= self.min && *input <= self.max }
    error(self, input) {
        ValidationError::new("numeric.between", "\"{0}\" must be between {1} and {2}")
            .with_arg(self.min.to_string())
            .with_arg(self.max.to_string())
    }
    fn between(min: T, max: T);
}
