//! Password complexity validator
//!
//! A password is considered complex when it contains at least one lowercase
//! letter, one uppercase letter, one decimal digit, and one symbol.

use crate::foundation::ValidationError;

/// Returns true if the string contains at least one lowercase letter, one
/// uppercase letter, one ASCII digit, and one symbol.
///
/// A symbol is any character that is neither alphanumeric nor `_` (the
/// complement of the word-character class). The scan is a single pass and
/// order-independent; the empty string is never complex.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck::validators::is_complex;
///
/// assert!(is_complex("Abc123!"));
/// assert!(!is_complex("abc123"));
/// assert!(!is_complex(""));
/// ```
#[must_use]
pub fn is_complex(input: &str) -> bool {
    let mut lower = false;
    let mut upper = false;
    let mut digit = false;
    let mut symbol = false;

    for c in input.chars() {
        if c.is_ascii_lowercase() {
            lower = true;
        } else if c.is_ascii_uppercase() {
            upper = true;
        } else if c.is_ascii_digit() {
            digit = true;
        } else if c != '_' && !c.is_alphanumeric() {
            symbol = true;
        }
    }

    lower && upper && digit && symbol
}

crate::validator! {
    /// Validates that a password contains all four character classes:
    /// lowercase, uppercase, digit, and symbol.
    pub Complexity for str;
    rule(input) { is_complex(input) }
    error(input) {
        ValidationError::new(
            "complexity",
            "Must contain a lowercase letter, an uppercase letter, a digit, and a symbol",
        )
    }
    fn complexity();
}

// ============================================================================
// TESTS
// ============================================================================
