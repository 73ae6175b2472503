//! String length validators
//!
//! This module provides validators for checking string length constraints.
//! Length is measured in Unicode scalar values (chars).

use crate::foundation::ValidationError;

// ============================================================================
// NOT EMPTY
// ============================================================================

crate::validator! {
    /// Validates that a string is not empty.
    pub NotEmpty for str;
    rule(input) { !input.is_empty() }
    error(input) { ValidationError::new("not_empty", "String must not be empty") }
    fn not_empty();
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string does not exceed a maximum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize } for str;
    rule(self, input) { input.chars().count() <= self.max }
    error(self, input) { ValidationError::max_length("", self.max, input.chars().count()) }
    fn max_length(max: usize);
}

// ============================================================================
// LENGTH RANGE
// ============================================================================

crate::validator! {
    /// Validates that a string length is within an inclusive range.
    ///
    /// Construction fails if `min > max`.
    pub LengthRange { min: usize, max: usize } for str;
    rule(self, input) {
        let len = input.chars().count();
        len >= self.min && len <= self.max
    }
    error(self, input) {
        ValidationError::new(
            "length_range",
            format!("String length must be between {} and {}", self.min, self.max),
        )
        .with_param("min", self.min.to_string())
        .with_param("max", self.max.to_string())
        .with_param("actual", input.chars().count().to_string())
    }
    new(min: usize, max: usize) -> ValidationError {
        if min > max {
            return Err(ValidationError::new("invalid_range", "min must be <= max"));
        }
        Ok(Self { min, max })
    }
    fn length_range(min: usize, max: usize) -> ValidationError;
}

// ============================================================================
// TESTS
// ============================================================================
