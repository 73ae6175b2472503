//! Core traits for the validation system
//!
//! This module defines the fundamental traits that all validators must implement.

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators must implement.
///
/// This trait is generic over the input type, allowing for compile-time
/// type safety while maintaining flexibility. All validators return
/// `Result<(), ValidationError>` for a consistent API.
///
/// # Type Parameters
///
/// * `Input` - The type being validated (can be `?Sized` for DSTs like `str`)
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck::foundation::{Validate, ValidationError};
///
/// struct MaxLength {
///     max: usize,
/// }
///
/// impl Validate for MaxLength {
///     type Input = str;
///
///     fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
///         if input.chars().count() <= self.max {
///             Ok(())
///         } else {
///             Err(ValidationError::new(
///                 "max_length",
///                 format!("Must be at most {} characters", self.max),
///             ))
///         }
///     }
/// }
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str` and `[T]`.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(ValidationError)` if validation fails
    fn validate(&self, input: &Self::Input) -> Result<(), crate::foundation::ValidationError>;
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// This trait is automatically implemented for all types that implement
/// `Validate`, providing a fluent API for composing validators.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck::prelude::*;
///
/// let validator = not_empty()
///     .and(max_length(20))
///     .with_message("account is invalid");
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND.
    ///
    /// Both validators must pass for the combined validator to succeed.
    /// Short-circuits on the first failure.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let validator = not_empty().and(max_length(10));
    /// assert!(validator.validate("hello").is_ok());
    /// assert!(validator.validate("").is_err());
    /// assert!(validator.validate("verylongstring").is_err());
    /// ```
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Replaces the error message of this validator.
    ///
    /// The original error is preserved as a nested error.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let validator = length_range(6, 16)?
    ///     .with_message("password must be between 6 and 16 characters");
    /// ```
    fn with_message(self, message: impl Into<String>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }
}

// Automatically implement ValidateExt for all Validate implementations
impl<T: Validate> ValidateExt for T {}

// ============================================================================
// IMPORT COMBINATOR TYPES
// ============================================================================
// Import the actual combinator implementations instead of duplicating them

pub use crate::combinators::and::And;
pub use crate::combinators::message::WithMessage;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidationError;

    // Simple test validators
    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    struct AlwaysFails;

    impl Validate for AlwaysFails {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Err(ValidationError::new("always_fails", "Always fails"))
        }
    }

    #[test]
    fn test_validate_trait() {
        let validator = AlwaysValid;
        assert!(validator.validate("test").is_ok());
    }

    #[test]
    fn test_ext_and() {
        let validator = AlwaysValid.and(AlwaysFails);
        assert!(validator.validate("test").is_err());
    }

    #[test]
    fn test_ext_with_message() {
        let validator = AlwaysFails.with_message("custom");
        let err = validator.validate("test").unwrap_err();
        assert_eq!(err.message, "custom");
    }
}
