//! Rule objects - per-field validation logic over a record type
//!
//! A [`Rule`] binds a declared field name to one of three evaluation shapes:
//!
//! - **Simple**: an ordered chain of [`Step`]s over one field; the first
//!   failing step short-circuits the rest of the chain.
//! - **Cross-field**: two fields compared for exact equality, with the
//!   failure attributed to the dependent field.
//! - **Contextual**: a presence check followed by a delegated predicate,
//!   whose failure message may substitute the raw field value.

use std::borrow::Cow;
use std::fmt;

use crate::foundation::Validate;
use crate::rules::engine::RuleSetError;
use crate::rules::report::Failure;

/// Extracts a field value from a record.
type Accessor<T> = Box<dyn for<'a> Fn(&'a T) -> &'a str + Send + Sync>;

/// A boolean check over a raw field value.
type Predicate = Box<dyn Fn(&str) -> bool + Send + Sync>;

// ============================================================================
// STEP
// ============================================================================

/// One link in a simple rule's chain: a validator plus the user-facing
/// message reported when it fails.
pub struct Step {
    check: Box<dyn Validate<Input = str> + Send + Sync>,
    message: Cow<'static, str>,
}

impl Step {
    /// Creates a step from any string validator and a failure message.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let step = Step::new(not_empty(), "account must not be empty");
    /// ```
    pub fn new<V>(check: V, message: impl Into<Cow<'static, str>>) -> Self
    where
        V: Validate<Input = str> + Send + Sync + 'static,
    {
        Self {
            check: Box::new(check),
            message: message.into(),
        }
    }

    /// Returns the failure message for this step.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    fn passes(&self, value: &str) -> bool {
        self.check.validate(value).is_ok()
    }
}

impl fmt::Debug for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Step")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// RULE
// ============================================================================

/// A named validation rule over a record of type `T`.
///
/// Rules never mutate the record and hold no per-call state; a built rule
/// set is safe to share across threads.
pub struct Rule<T> {
    field: Cow<'static, str>,
    kind: RuleKind<T>,
}

enum RuleKind<T> {
    Simple {
        accessor: Accessor<T>,
        steps: Vec<Step>,
    },
    CrossField {
        subject: Accessor<T>,
        expected: Accessor<T>,
        message: Cow<'static, str>,
    },
    Contextual {
        accessor: Accessor<T>,
        predicate: Predicate,
        empty_message: Cow<'static, str>,
        invalid_message: Cow<'static, str>,
    },
}

impl<T> Rule<T> {
    /// Creates a simple rule: an ordered chain of steps over one field.
    ///
    /// Steps run in order and the first failure wins; later steps are
    /// skipped. Other rules are unaffected.
    pub fn simple<A>(field: impl Into<Cow<'static, str>>, accessor: A, steps: Vec<Step>) -> Self
    where
        A: for<'a> Fn(&'a T) -> &'a str + Send + Sync + 'static,
    {
        Self {
            field: field.into(),
            kind: RuleKind::Simple {
                accessor: Box::new(accessor),
                steps,
            },
        }
    }

    /// Creates a cross-field rule: `subject` must equal `expected`.
    ///
    /// The failure is attributed to the declared field (the dependent one),
    /// e.g. `confirmPassword` rather than `password`.
    pub fn cross_field<S, E>(
        field: impl Into<Cow<'static, str>>,
        subject: S,
        expected: E,
        message: impl Into<Cow<'static, str>>,
    ) -> Self
    where
        S: for<'a> Fn(&'a T) -> &'a str + Send + Sync + 'static,
        E: for<'a> Fn(&'a T) -> &'a str + Send + Sync + 'static,
    {
        Self {
            field: field.into(),
            kind: RuleKind::CrossField {
                subject: Box::new(subject),
                expected: Box::new(expected),
                message: message.into(),
            },
        }
    }

    /// Creates a contextual rule: a presence check, then a predicate over
    /// the raw value.
    ///
    /// An empty value fails with `empty_message`. A non-empty value that
    /// fails the predicate fails with `invalid_message`, in which the
    /// `{value}` placeholder is replaced by the raw field value.
    pub fn contextual<A, P>(
        field: impl Into<Cow<'static, str>>,
        accessor: A,
        predicate: P,
        empty_message: impl Into<Cow<'static, str>>,
        invalid_message: impl Into<Cow<'static, str>>,
    ) -> Self
    where
        A: for<'a> Fn(&'a T) -> &'a str + Send + Sync + 'static,
        P: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            field: field.into(),
            kind: RuleKind::Contextual {
                accessor: Box::new(accessor),
                predicate: Box::new(predicate),
                empty_message: empty_message.into(),
                invalid_message: invalid_message.into(),
            },
        }
    }

    /// Returns the declared field name.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Evaluates the rule against a record, yielding at most one failure.
    pub(crate) fn evaluate(&self, record: &T) -> Option<Failure> {
        match &self.kind {
            RuleKind::Simple { accessor, steps } => {
                let value = accessor(record);
                steps
                    .iter()
                    .find(|step| !step.passes(value))
                    .map(|step| Failure::new(self.field.clone(), step.message.as_ref()))
            }
            RuleKind::CrossField {
                subject,
                expected,
                message,
            } => {
                if subject(record) == expected(record) {
                    None
                } else {
                    Some(Failure::new(self.field.clone(), message.as_ref()))
                }
            }
            RuleKind::Contextual {
                accessor,
                predicate,
                empty_message,
                invalid_message,
            } => {
                let value = accessor(record);
                if value.is_empty() {
                    Some(Failure::new(self.field.clone(), empty_message.as_ref()))
                } else if predicate(value) {
                    None
                } else {
                    Some(Failure::new(
                        self.field.clone(),
                        render(invalid_message, &[("value", value)]),
                    ))
                }
            }
        }
    }

    /// Checks the rule's static configuration at build time.
    pub(crate) fn check_well_formed(&self) -> Result<(), RuleSetError> {
        if self.field.is_empty() {
            return Err(RuleSetError::EmptyFieldName);
        }
        match &self.kind {
            RuleKind::Simple { steps, .. } => {
                if steps.is_empty() {
                    return Err(RuleSetError::EmptyRule {
                        field: self.field.to_string(),
                    });
                }
                for step in steps {
                    check_template(&self.field, &step.message, &[])?;
                }
                Ok(())
            }
            RuleKind::CrossField { message, .. } => check_template(&self.field, message, &[]),
            RuleKind::Contextual {
                empty_message,
                invalid_message,
                ..
            } => {
                check_template(&self.field, empty_message, &[])?;
                check_template(&self.field, invalid_message, &["value"])
            }
        }
    }
}

impl<T> fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match &self.kind {
            RuleKind::Simple { steps, .. } => format!("Simple({} steps)", steps.len()),
            RuleKind::CrossField { .. } => "CrossField".to_string(),
            RuleKind::Contextual { .. } => "Contextual".to_string(),
        };
        f.debug_struct("Rule")
            .field("field", &self.field)
            .field("kind", &kind)
            .finish()
    }
}

// ============================================================================
// MESSAGE TEMPLATES
// ============================================================================

/// Verifies that a message template is well-formed: braces are balanced,
/// not nested, and every `{key}` names an allowed placeholder.
fn check_template(field: &str, template: &str, allowed: &[&str]) -> Result<(), RuleSetError> {
    let unbalanced = || RuleSetError::UnbalancedTemplate {
        field: field.to_string(),
    };

    let mut rest = template;
    while let Some(open) = rest.find(['{', '}']) {
        if rest.as_bytes()[open] == b'}' {
            return Err(unbalanced());
        }
        rest = &rest[open + 1..];
        let close = rest.find(['{', '}']).ok_or_else(unbalanced)?;
        if rest.as_bytes()[close] == b'{' {
            return Err(unbalanced());
        }
        let key = &rest[..close];
        if !allowed.contains(&key) {
            return Err(RuleSetError::UnknownPlaceholder {
                field: field.to_string(),
                placeholder: key.to_string(),
            });
        }
        rest = &rest[close + 1..];
    }
    Ok(())
}

/// Substitutes `{key}` placeholders from an explicit key-value list.
///
/// Templates are checked at build time, so this never fails; an unknown
/// or unterminated placeholder is emitted verbatim.
fn render(template: &str, params: &[(&str, &str)]) -> String {
    if !template.contains('{') {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len() + 16);
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        rest = &rest[open + 1..];
        match rest.find('}') {
            Some(close) => {
                let key = &rest[..close];
                match params.iter().find(|(k, _)| *k == key) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(key);
                        out.push('}');
                    }
                }
                rest = &rest[close + 1..];
            }
            None => {
                out.push('{');
                break;
            }
        }
    }
    out.push_str(rest);
    out
}

// ============================================================================
// TESTS
// ============================================================================
