//! End-to-end tests for the canonical record rule set.

use fieldcheck::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn valid_record() -> Record {
    Record {
        id: None,
        account: "bob".to_string(),
        password: "Abcdef1!".to_string(),
        confirm_password: "Abcdef1!".to_string(),
        national_id: "046454286".to_string(),
        email: "bob@example.com".to_string(),
    }
}

fn validator() -> RecordValidator<Record> {
    record_validator().expect("canonical rule set builds")
}

fn failed_fields(report: &ValidationReport) -> Vec<String> {
    report.iter().map(|f| f.field.to_string()).collect()
}

// ============================================================================
// ACCEPTANCE
// ============================================================================

#[test]
fn accepts_a_fully_valid_record() {
    let report = validator().validate(&valid_record());
    assert_eq!(report, ValidationReport::default());
    assert!(report.is_valid());
}

// ============================================================================
// REJECTION - ALL RULES RUN, FAILURES ORDERED
// ============================================================================

#[test]
fn rejects_a_bad_record_with_ordered_failures() {
    let record = Record {
        id: None,
        account: "admin".to_string(),
        password: "weak".to_string(),
        confirm_password: "weak".to_string(),
        national_id: "123".to_string(),
        email: "not-an-email".to_string(),
    };

    let report = validator().validate(&record);

    // confirmPassword matches password, so it does not appear
    assert_eq!(
        failed_fields(&report),
        ["account", "password", "email", "nationalId"]
    );
}

#[test]
fn rules_fail_independently() {
    let mut record = valid_record();
    record.account = "admin".to_string();
    record.email = "broken".to_string();

    let report = validator().validate(&record);

    // Both failures appear, account first (declaration order)
    assert_eq!(failed_fields(&report), ["account", "email"]);
}

#[test]
fn report_is_idempotent() {
    let mut record = valid_record();
    record.password = "weak".to_string();
    record.confirm_password = "weak".to_string();

    let v = validator();
    let first = v.validate(&record);
    let second = v.validate(&record);
    assert_eq!(first, second);
}

// ============================================================================
// PER-FIELD SHORT-CIRCUIT
// ============================================================================

#[test]
fn empty_account_yields_exactly_one_account_failure() {
    let mut record = valid_record();
    record.account = String::new();

    let report = validator().validate(&record);

    // An empty account also violates the reserved-name and length checks'
    // preconditions, but only the first step reports
    assert_eq!(report.len(), 1);
    assert_eq!(report.failures()[0].field, "account");
    assert_eq!(report.failures()[0].message, "account must not be empty");
}

#[rstest]
#[case("", "account must not be empty")]
#[case("admin", "account 'admin' is reserved")]
#[case("abcdefghijklmnopqrstu", "account must be at most 20 characters")]
fn account_failures_report_the_first_failing_step(#[case] account: &str, #[case] expected: &str) {
    let mut record = valid_record();
    record.account = account.to_string();

    let report = validator().validate(&record);
    assert_eq!(report.len(), 1);
    assert_eq!(report.failures()[0].message, expected);
}

#[rstest]
#[case("short", "password must be between 6 and 16 characters")]
#[case("abcdefghijklmnopq", "password must be between 6 and 16 characters")]
#[case(
    "abcdefg1!",
    "password must contain a lowercase letter, an uppercase letter, a digit, and a symbol"
)]
fn password_failures_report_the_first_failing_step(#[case] password: &str, #[case] expected: &str) {
    let mut record = valid_record();
    record.password = password.to_string();
    record.confirm_password = password.to_string();

    let report = validator().validate(&record);
    assert_eq!(report.len(), 1);
    assert_eq!(report.failures()[0].field, "password");
    assert_eq!(report.failures()[0].message, expected);
}

// ============================================================================
// CROSS-FIELD RULE
// ============================================================================

#[test]
fn mismatched_confirmation_is_attributed_to_confirm_password() {
    let mut record = valid_record();
    record.confirm_password = "Different1!".to_string();

    let report = validator().validate(&record);
    assert_eq!(report.len(), 1);
    assert_eq!(report.failures()[0].field, "confirmPassword");
    assert_eq!(
        report.failures()[0].message,
        "confirmPassword must match password"
    );
}

#[test]
fn confirmation_comparison_is_exact() {
    let mut record = valid_record();
    record.confirm_password = "abcdef1!".to_string(); // case differs

    let report = validator().validate(&record);
    assert_eq!(failed_fields(&report), ["confirmPassword"]);
}

// ============================================================================
// CONTEXTUAL RULE - NATIONAL ID
// ============================================================================

#[test]
fn empty_national_id_reports_the_presence_message() {
    let mut record = valid_record();
    record.national_id = String::new();

    let report = validator().validate(&record);
    assert_eq!(report.len(), 1);
    assert_eq!(report.failures()[0].message, "nationalId must not be empty");
}

#[rstest]
#[case("046454287")]
#[case("999999999")]
#[case("123")]
#[case("04645428x")]
fn invalid_national_id_substitutes_the_raw_value(#[case] national_id: &str) {
    let mut record = valid_record();
    record.national_id = national_id.to_string();

    let report = validator().validate(&record);
    assert_eq!(report.len(), 1);
    assert_eq!(
        report.failures()[0].message,
        format!("nationalId '{national_id}' has an invalid checksum")
    );
}

// ============================================================================
// SERDE SURFACE
// ============================================================================

#[cfg(feature = "serde")]
#[test]
fn report_serializes_for_the_delivery_layer() {
    let mut record = valid_record();
    record.email = "broken".to_string();

    let report = validator().validate(&record);
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(
        value,
        serde_json::json!([
            {"field": "email", "message": "email must be a valid email address"}
        ])
    );
}

#[cfg(feature = "serde")]
#[test]
fn request_body_roundtrip() {
    let body = r#"{
        "account": "bob",
        "password": "Abcdef1!",
        "confirmPassword": "Abcdef1!",
        "nationalId": "046454286",
        "email": "bob@example.com"
    }"#;

    let record: Record = serde_json::from_str(body).unwrap();
    assert!(validator().validate(&record).is_valid());
}
