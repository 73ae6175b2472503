//! MESSAGE combinator - custom error messages

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// WITH MESSAGE COMBINATOR
// ============================================================================

/// Replaces the error message of a validator.
///
/// Useful for providing user-facing messages where the inner validator's
/// default wording is too technical. The original error is preserved as a
/// nested error so the structured code and params are not lost.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck::combinators::WithMessage;
/// use fieldcheck::foundation::Validate;
///
/// let validator = WithMessage::new(
///     length_range(6, 16)?,
///     "password must be between 6 and 16 characters"
/// );
///
/// let result = validator.validate("short");
/// assert_eq!(result.unwrap_err().message, "password must be between 6 and 16 characters");
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<V> {
    inner: V,
    message: String,
}

impl<V> WithMessage<V> {
    /// Creates a new WithMessage combinator with a custom message.
    pub fn new(inner: V, message: impl Into<String>) -> Self {
        Self {
            inner,
            message: message.into(),
        }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Returns the custom message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for WithMessage<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner.validate(input).map_err(|original| {
            ValidationError::new(original.code.clone(), Cow::Owned(self.message.clone()))
                .with_nested_error(original)
        })
    }
}

/// Creates a WithMessage combinator.
pub fn with_message<V>(validator: V, message: impl Into<String>) -> WithMessage<V> {
    WithMessage::new(validator, message)
}

// ============================================================================
// TESTS
// ============================================================================
