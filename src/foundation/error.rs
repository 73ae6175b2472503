//! Error types for validation failures
//!
//! This module provides a structured error type that supports nested
//! errors, field paths, error codes, and parameterized messages.
//!
//! All string fields use `Cow<'static, str>` for zero-allocation in the
//! common case of static error codes and messages.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

/// Ordered key-value parameters attached to a [`ValidationError`].
///
/// Inline storage covers the common case of 0-3 params.
pub type ErrorParams = SmallVec<[(Cow<'static, str>, Cow<'static, str>); 3]>;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation error with support for nested errors and metadata.
///
/// Uses `Cow<'static, str>` for zero-allocation when error codes and messages
/// are known at compile time (the common case).
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck::foundation::ValidationError;
///
/// let error = ValidationError::new("max_length", "String is too long")
///     .with_field("account")
///     .with_param("max", "20");
/// ```
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// Examples: "max_length", "checksum", "reserved_value"
    pub code: Cow<'static, str>,

    /// Human-readable error message in English.
    pub message: Cow<'static, str>,

    /// Optional field path.
    pub field: Option<Cow<'static, str>>,

    /// Parameters for the error message.
    ///
    /// Example: `[("max", "20"), ("actual", "23")]`
    pub params: ErrorParams,

    /// Nested validation errors, used by combinators that wrap the
    /// original error (see `WithMessage`).
    pub nested: Vec<ValidationError>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    ///
    /// Static strings do not allocate; dynamic strings allocate only
    /// when needed.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: ErrorParams::new(),
            nested: Vec::new(),
        }
    }

    /// Sets the field path for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Adds a single nested error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested_error(mut self, error: ValidationError) -> Self {
        self.nested.push(error);
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns true if this error has nested errors.
    #[must_use]
    pub fn has_nested(&self) -> bool {
        !self.nested.is_empty()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        if !self.nested.is_empty() {
            write!(f, "\n  Nested errors:")?;
            for (i, error) in self.nested.iter().enumerate() {
                write!(f, "\n    {}. {}", i + 1, error)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a "max_length" error.
    pub fn max_length(field: impl Into<Cow<'static, str>>, max: usize, actual: usize) -> Self {
        Self::new("max_length", format!("Must be at most {max} characters"))
            .with_field(field)
            .with_param("max", max.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates an "invalid_format" error.
    pub fn invalid_format(
        field: impl Into<Cow<'static, str>>,
        expected: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new("invalid_format", "Invalid format")
            .with_field(field)
            .with_param("expected", expected)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_error() {
        let error = ValidationError::new("test", "Test error");
        assert_eq!(error.code, "test");
        assert_eq!(error.message, "Test error");
    }

    #[test]
    fn test_error_with_field() {
        let error = ValidationError::new("not_empty", "Must not be empty").with_field("account");
        assert_eq!(error.field.as_deref(), Some("account"));
    }

    #[test]
    fn test_error_with_params() {
        let error = ValidationError::new("max_length", "Too long")
            .with_param("max", "20")
            .with_param("actual", "23");

        assert_eq!(error.param("max"), Some("20"));
        assert_eq!(error.param("actual"), Some("23"));
    }

    #[test]
    fn test_params_stay_inline() {
        let error = ValidationError::max_length("account", 20, 23);
        // 0-3 params should never spill to the heap
        assert!(!error.params.spilled());
    }

    #[test]
    fn test_nested_error() {
        let error = ValidationError::new("custom", "Custom message")
            .with_nested_error(ValidationError::new("max_length", "Too long"));

        assert!(error.has_nested());
        assert_eq!(error.nested[0].code, "max_length");
    }

    #[test]
    fn test_zero_alloc_static_strings() {
        let error = ValidationError::new("checksum", "Checksum verification failed");
        // Both should be borrowed (no allocation)
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }

    #[test]
    fn test_display_with_field() {
        let error = ValidationError::new("not_empty", "Must not be empty").with_field("email");
        assert_eq!(error.to_string(), "[email] not_empty: Must not be empty");
    }
}
