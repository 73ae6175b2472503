//! The record data model and its canonical rule set

use crate::rules::{RecordValidator, Rule, RuleSetError, Step};
use crate::validators::{
    LengthRange, check_digits, complexity, email, max_length, not_empty, not_equal,
};

/// A flat registration record.
///
/// Rules never mutate the record; a validation pass borrows it immutably.
/// With the `serde` feature the wire names use camelCase (`confirmPassword`,
/// `nationalId`) so request bodies deserialize directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Record {
    /// Caller-owned identity; not validated.
    pub id: Option<i64>,
    /// Login name.
    pub account: String,
    /// Plaintext password, validated only, never stored by this crate.
    pub password: String,
    /// Must match `password` exactly.
    pub confirm_password: String,
    /// Nine-digit identification number with a mod-10 checksum.
    pub national_id: String,
    /// Contact address.
    pub email: String,
}

impl Record {
    /// Builds the canonical validator for this record type.
    ///
    /// Shorthand for [`record_validator`].
    pub fn validator() -> Result<RecordValidator<Record>, RuleSetError> {
        record_validator()
    }
}

/// Builds the canonical rule set for [`Record`], in evaluation order:
///
/// 1. `account` — non-empty, not the reserved name `admin`, at most 20
///    characters
/// 2. `password` — 6 to 16 characters, all four complexity classes
/// 3. `confirmPassword` — equal to `password`
/// 4. `email` — syntactically valid address
/// 5. `nationalId` — present and checksum-valid
///
/// # Errors
///
/// Returns a [`RuleSetError`] only if the rule set itself is misconfigured;
/// the canonical set is tested to build cleanly.
pub fn record_validator() -> Result<RecordValidator<Record>, RuleSetError> {
    let password_length =
        LengthRange::new(6, 16).map_err(|source| RuleSetError::InvalidValidator {
            field: "password".to_string(),
            source,
        })?;

    RecordValidator::builder()
        .rule(Rule::simple(
            "account",
            |r: &Record| r.account.as_str(),
            vec![
                Step::new(not_empty(), "account must not be empty"),
                Step::new(not_equal("admin"), "account 'admin' is reserved"),
                Step::new(max_length(20), "account must be at most 20 characters"),
            ],
        ))
        .rule(Rule::simple(
            "password",
            |r: &Record| r.password.as_str(),
            vec![
                Step::new(
                    password_length,
                    "password must be between 6 and 16 characters",
                ),
                Step::new(
                    complexity(),
                    "password must contain a lowercase letter, an uppercase letter, a digit, and a symbol",
                ),
            ],
        ))
        .rule(Rule::cross_field(
            "confirmPassword",
            |r: &Record| r.confirm_password.as_str(),
            |r: &Record| r.password.as_str(),
            "confirmPassword must match password",
        ))
        .rule(Rule::simple(
            "email",
            |r: &Record| r.email.as_str(),
            vec![Step::new(email(), "email must be a valid email address")],
        ))
        .rule(Rule::contextual(
            "nationalId",
            |r: &Record| r.national_id.as_str(),
            check_digits,
            "nationalId must not be empty",
            "nationalId '{value}' has an invalid checksum",
        ))
        .build()
}

// ============================================================================
// TESTS
// ============================================================================
