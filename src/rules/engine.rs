//! Rule engine - runs an ordered rule set over a record
//!
//! The engine is built once via [`RecordValidator::builder`] and reused
//! across calls. Construction is the only fallible stage: a malformed rule
//! set is a programmer error and surfaces as a [`RuleSetError`]. Invalid
//! record data is never an `Err`; it accumulates as failures in the
//! returned [`ValidationReport`].

use tracing::{debug, trace};

use crate::rules::report::ValidationReport;
use crate::rules::rule::Rule;

// ============================================================================
// RULE SET ERROR
// ============================================================================

/// A configuration error detected when building a rule set.
///
/// These are programmer errors: they are raised once at construction and
/// never during validation.
#[derive(Debug, thiserror::Error)]
pub enum RuleSetError {
    /// A rule was declared with an empty field name.
    #[error("rule has an empty field name")]
    EmptyFieldName,

    /// A simple rule was declared with no steps.
    #[error("rule for field `{field}` has no steps")]
    EmptyRule {
        /// The offending field.
        field: String,
    },

    /// A message template contains an unmatched or nested brace.
    #[error("message template for field `{field}` has unbalanced braces")]
    UnbalancedTemplate {
        /// The offending field.
        field: String,
    },

    /// A message template names a placeholder the rule does not provide.
    #[error("message template for field `{field}` references unknown placeholder `{placeholder}`")]
    UnknownPlaceholder {
        /// The offending field.
        field: String,
        /// The unrecognized placeholder key.
        placeholder: String,
    },

    /// A step validator rejected its own configuration.
    #[error("invalid validator configuration for field `{field}`")]
    InvalidValidator {
        /// The offending field.
        field: String,
        /// The validator's construction error.
        #[source]
        source: crate::foundation::ValidationError,
    },
}

// ============================================================================
// RECORD VALIDATOR
// ============================================================================

/// An ordered, immutable rule set over records of type `T`.
///
/// Every rule runs on every call regardless of earlier rule outcomes;
/// short-circuiting exists only inside a simple rule's step chain.
/// The validator holds no per-call state and is safe to share across
/// threads.
///
/// # Examples
///
/// ```rust,ignore
/// let validator = RecordValidator::builder()
///     .rule(Rule::simple("account", |r: &Record| r.account.as_str(), vec![
///         Step::new(not_empty(), "account must not be empty"),
///     ]))
///     .build()?;
///
/// let report = validator.validate(&record);
/// ```
#[derive(Debug)]
pub struct RecordValidator<T> {
    rules: Vec<Rule<T>>,
}

impl<T> RecordValidator<T> {
    /// Starts building a rule set.
    #[must_use]
    pub fn builder() -> RecordValidatorBuilder<T> {
        RecordValidatorBuilder { rules: Vec::new() }
    }

    /// Runs every rule against the record, in declaration order.
    ///
    /// Returns a report of all failures; an empty report means the record
    /// is valid.
    #[must_use = "the validation report must be checked"]
    pub fn validate(&self, record: &T) -> ValidationReport {
        let mut failures = Vec::new();
        for rule in &self.rules {
            if let Some(failure) = rule.evaluate(record) {
                trace!(field = %failure.field, message = %failure.message, "rule failed");
                failures.push(failure);
            }
        }
        debug!(
            rules = self.rules.len(),
            failures = failures.len(),
            "validation pass complete"
        );
        ValidationReport::new(failures)
    }

    /// Returns the rules in declaration order.
    #[must_use]
    pub fn rules(&self) -> &[Rule<T>] {
        &self.rules
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Builder for [`RecordValidator`].
///
/// Rules are evaluated in the order they are added.
#[derive(Debug)]
pub struct RecordValidatorBuilder<T> {
    rules: Vec<Rule<T>>,
}

impl<T> RecordValidatorBuilder<T> {
    /// Appends a rule to the set.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule(mut self, rule: Rule<T>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Checks every rule's configuration and builds the validator.
    ///
    /// # Errors
    ///
    /// Returns a [`RuleSetError`] for an empty field name, a simple rule
    /// with no steps, or a malformed message template.
    pub fn build(self) -> Result<RecordValidator<T>, RuleSetError> {
        for rule in &self.rules {
            rule.check_well_formed()?;
        }
        Ok(RecordValidator { rules: self.rules })
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::rule::Step;
    use crate::validators::{max_length, not_empty};

    struct Pair {
        a: String,
        b: String,
    }

    fn pair(a: &str, b: &str) -> Pair {
        Pair {
            a: a.to_string(),
            b: b.to_string(),
        }
    }

    fn build_validator() -> RecordValidator<Pair> {
        RecordValidator::builder()
            .rule(Rule::simple(
                "a",
                |p: &Pair| p.a.as_str(),
                vec![
                    Step::new(not_empty(), "a must not be empty"),
                    Step::new(max_length(3), "a is too long"),
                ],
            ))
            .rule(Rule::simple(
                "b",
                |p: &Pair| p.b.as_str(),
                vec![Step::new(not_empty(), "b must not be empty")],
            ))
            .build()
            .expect("rule set is well-formed")
    }

    #[test]
    fn test_all_rules_run() {
        let validator = build_validator();
        let report = validator.validate(&pair("", ""));
        // Both rules fail independently
        assert_eq!(report.len(), 2);
        let fields: Vec<_> = report.iter().map(|f| f.field.as_ref()).collect();
        assert_eq!(fields, ["a", "b"]);
    }

    #[test]
    fn test_per_field_short_circuit() {
        let validator = build_validator();
        // "a" fails only its first step; "b" passes
        let report = validator.validate(&pair("", "ok"));
        assert_eq!(report.len(), 1);
        assert_eq!(report.failures()[0].message, "a must not be empty");
    }

    #[test]
    fn test_valid_record() {
        let validator = build_validator();
        assert!(validator.validate(&pair("abc", "x")).is_valid());
    }

    #[test]
    fn test_reuse_is_stateless() {
        let validator = build_validator();
        let bad = pair("", "");
        let first = validator.validate(&bad);
        let second = validator.validate(&bad);
        assert_eq!(first, second);
    }

    #[test]
    fn test_build_rejects_empty_field_name() {
        let result = RecordValidator::builder()
            .rule(Rule::simple(
                "",
                |p: &Pair| p.a.as_str(),
                vec![Step::new(not_empty(), "msg")],
            ))
            .build();
        assert!(matches!(result, Err(RuleSetError::EmptyFieldName)));
    }

    #[test]
    fn test_build_rejects_unknown_placeholder() {
        let result = RecordValidator::builder()
            .rule(Rule::simple(
                "a",
                |p: &Pair| p.a.as_str(),
                vec![Step::new(not_empty(), "bad {slot} here")],
            ))
            .build();
        assert!(matches!(
            result,
            Err(RuleSetError::UnknownPlaceholder { .. })
        ));
    }

    #[test]
    fn test_validator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RecordValidator<Pair>>();
    }
}
