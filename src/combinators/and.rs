//! AND combinator - logical conjunction of validators
//!
//! This module provides the [`And`] combinator which combines two validators
//! with logical AND semantics - both validators must pass for the combined
//! validator to succeed.
//!
//! # Examples
//!
//! ```rust,ignore
//! use fieldcheck::combinators::And;
//! use fieldcheck::foundation::Validate;
//!
//! // Both validators must pass
//! let validator = And::new(not_empty(), max_length(20));
//! assert!(validator.validate("hello").is_ok());
//! assert!(validator.validate("").is_err()); // fails not_empty
//! ```

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical AND.
///
/// Both validators must pass for the combined validator to succeed.
/// Errors are returned from the first failing validator.
///
/// # Type Parameters
///
/// * `L` - The left (first) validator type
/// * `R` - The right (second) validator type
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck::combinators::And;
/// use fieldcheck::foundation::Validate;
///
/// let validator = And::new(not_empty(), max_length(10));
///
/// // Both conditions satisfied
/// assert!(validator.validate("hello").is_ok());
///
/// // First condition fails
/// assert!(validator.validate("").is_err());
///
/// // Second condition fails
/// assert!(validator.validate("verylongstring").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    /// The left (first) validator.
    pub(crate) left: L,
    /// The right (second) validator.
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left validator.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right validator.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)?;
        Ok(())
    }
}

/// Creates an `And` combinator from two validators.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck::combinators::and;
/// use fieldcheck::foundation::Validate;
///
/// let validator = and(not_empty(), max_length(10));
/// assert!(validator.validate("hello").is_ok());
/// ```
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}
