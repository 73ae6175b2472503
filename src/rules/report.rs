//! Validation report - the ordered outcome of a validation pass

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// FAILURE
// ============================================================================

/// A single validation failure: the field that failed and a user-facing
/// message.
///
/// Failures are plain data; they carry no error codes or nested structure.
/// The delivery layer renders them directly.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Failure {
    /// The declared field name, e.g. `"account"` or `"nationalId"`.
    pub field: Cow<'static, str>,
    /// The rendered failure message.
    pub message: String,
}

impl Failure {
    /// Creates a new failure.
    pub fn new(field: impl Into<Cow<'static, str>>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

// ============================================================================
// VALIDATION REPORT
// ============================================================================

/// The immutable, ordered outcome of one validation pass.
///
/// Failures appear in rule declaration order. There is no deduplication and
/// no sorting; a field with multiple failing rules appears once per rule.
///
/// # Examples
///
/// ```rust,ignore
/// let report = validator.validate(&record);
/// if !report.is_valid() {
///     for failure in report.failures() {
///         println!("{failure}");
///     }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ValidationReport {
    failures: Vec<Failure>,
}

impl ValidationReport {
    /// Creates a report from a list of failures.
    #[must_use]
    pub fn new(failures: Vec<Failure>) -> Self {
        Self { failures }
    }

    /// Returns true if no rule failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    /// Returns the failures in rule declaration order.
    #[must_use]
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    /// Returns the number of failures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// Returns true if there are no failures.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// Iterates over the failures.
    pub fn iter(&self) -> std::slice::Iter<'_, Failure> {
        self.failures.iter()
    }
}

impl IntoIterator for ValidationReport {
    type Item = Failure;
    type IntoIter = std::vec::IntoIter<Failure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationReport {
    type Item = &'a Failure;
    type IntoIter = std::slice::Iter<'a, Failure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.iter()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.failures.is_empty() {
            return write!(f, "validation passed");
        }
        writeln!(f, "Validation failed with {} failure(s):", self.failures.len())?;
        for (i, failure) in self.failures.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, failure)?;
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_is_valid() {
        let report = ValidationReport::default();
        assert!(report.is_valid());
        assert!(report.is_empty());
        assert_eq!(report.len(), 0);
    }

    #[test]
    fn test_report_preserves_order() {
        let report = ValidationReport::new(vec![
            Failure::new("account", "must not be empty"),
            Failure::new("email", "must be a valid email address"),
        ]);

        assert!(!report.is_valid());
        let fields: Vec<_> = report.iter().map(|f| f.field.as_ref()).collect();
        assert_eq!(fields, ["account", "email"]);
    }

    #[test]
    fn test_no_dedup() {
        let report = ValidationReport::new(vec![
            Failure::new("account", "first"),
            Failure::new("account", "second"),
        ]);
        assert_eq!(report.len(), 2);
    }

    #[test]
    fn test_failure_display() {
        let failure = Failure::new("account", "must not be empty");
        assert_eq!(failure.to_string(), "account: must not be empty");
    }

    #[test]
    fn test_report_display() {
        let report = ValidationReport::new(vec![Failure::new("account", "must not be empty")]);
        let text = report.to_string();
        assert!(text.contains("1 failure"));
        assert!(text.contains("account: must not be empty"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_report_serializes_as_array() {
        let report = ValidationReport::new(vec![Failure::new("account", "must not be empty")]);
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{"field": "account", "message": "must not be empty"}])
        );
    }
}
