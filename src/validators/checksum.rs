//! Weighted mod-10 checksum validator
//!
//! Validates nine-digit identification numbers with a Luhn-style check:
//! digits in even positions (from the right) are doubled, with 9 subtracted
//! from any double that reaches two digits, and the total must be divisible
//! by ten.

use crate::foundation::ValidationError;

/// Upper bound for checksum inputs; larger values are rejected outright.
const MAX_VALUE: u32 = 999_999_998;

/// Returns true if the digit string passes the weighted mod-10 checksum.
///
/// The input must be a string of ASCII digits no longer than nine digits;
/// anything else (signs, letters, whitespace, overlong input) fails to parse
/// and yields `false`. Leading zeros are significant to the caller but not
/// to the checksum.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck::validators::check_digits;
///
/// assert!(check_digits("046454286"));
/// assert!(!check_digits("046454287"));
/// assert!(!check_digits("999999999"));
/// ```
#[must_use]
pub fn check_digits(input: &str) -> bool {
    let Ok(mut value) = input.parse::<u32>() else {
        return false;
    };
    if value > MAX_VALUE {
        return false;
    }

    let mut sum = 0;
    // Four digit pairs from the least-significant end: the odd-position
    // digit is added as-is, the even-position digit is doubled.
    for _ in 0..4 {
        sum += value % 10;
        value /= 10;

        let mut doubled = (value % 10) * 2;
        if doubled >= 10 {
            doubled -= 9;
        }
        sum += doubled;
        value /= 10;
    }
    // The ninth (most significant) digit is added undoubled.
    sum += value;

    sum % 10 == 0
}

crate::validator! {
    /// Validates a digit string against the weighted mod-10 checksum.
    pub Checksum for str;
    rule(input) { check_digits(input) }
    error(input) { ValidationError::new("checksum", "Checksum verification failed") }
    fn checksum();
}

// ============================================================================
// TESTS
// ============================================================================
