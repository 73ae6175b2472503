//! Value comparison validators

use crate::foundation::ValidationError;

// ============================================================================
// NOT EQUAL
// ============================================================================

crate::validator! {
    /// Validates that a string differs from a reserved value.
    ///
    /// The comparison is exact and case-sensitive.
    pub NotEqual { forbidden: String } for str;
    rule(self, input) { input != self.forbidden }
    error(self, input) {
        ValidationError::new(
            "reserved_value",
            format!("Value '{}' is reserved", self.forbidden),
        )
        .with_param("forbidden", self.forbidden.clone())
    }
    new(forbidden: &str) { Self { forbidden: forbidden.to_string() } }
    fn not_equal(forbidden: &str);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_not_equal_valid() {
        let validator = not_equal("admin");
        assert!(validator.validate("alice").is_ok());
        assert!(validator.validate("").is_ok());
    }

    #[test]
    fn test_not_equal_invalid() {
        let validator = not_equal("admin");
        assert!(validator.validate("admin").is_err());
    }

    #[test]
    fn test_not_equal_case_sensitive() {
        let validator = not_equal("admin");
        assert!(validator.validate("Admin").is_ok());
        assert!(validator.validate("ADMIN").is_ok());
    }

    #[test]
    fn test_not_equal_error_content() {
        let err = not_equal("admin").validate("admin").unwrap_err();
        assert_eq!(err.code, "reserved_value");
        assert_eq!(err.param("forbidden"), Some("admin"));
    }
}
