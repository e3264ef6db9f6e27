//! Named field-validation predicates for the checkout form.
//!
//! Each rule is a standalone function returning a structured failure with
//! a human-readable reason, so the checkout coordinator can enumerate
//! every failing field in one pass instead of stopping at the first.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use twenzee_core::Email;

/// Phone numbers: digits, spaces, hyphens, parentheses, and plus only.
static PHONE_CHARSET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d\s\-+()]+$").expect("Invalid regex"));

/// Postal codes: 5 or 6 digits.
static POSTAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{5,6}$").expect("Invalid regex"));

/// Card numbers: exactly 16 digits (after stripping spaces).
static CARD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{16}$").expect("Invalid regex"));

/// CVV: 3 or 4 digits.
static CVV_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{3,4}$").expect("Invalid regex"));

/// Minimum digits a phone number must contain.
const PHONE_MIN_DIGITS: usize = 10;

/// A failed field check, with the message shown next to the field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("This field is required")]
    Required,
    #[error("Please enter a valid email address")]
    Email,
    #[error("Please enter a valid phone number (minimum {PHONE_MIN_DIGITS} digits)")]
    Phone,
    #[error("Please enter a valid postal code")]
    Postal,
    #[error("Please enter a valid 16-digit card number")]
    CardNumber,
    #[error("Please enter a valid CVV")]
    Cvv,
}

/// Non-empty after trimming.
///
/// # Errors
///
/// [`FieldError::Required`] when the trimmed value is empty.
pub fn require(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        Err(FieldError::Required)
    } else {
        Ok(())
    }
}

/// RFC-lite email shape: local part, `@`, dotted domain, no whitespace.
///
/// # Errors
///
/// [`FieldError::Email`] when the value does not parse as an address.
pub fn valid_email(value: &str) -> Result<(), FieldError> {
    Email::parse(value.trim()).map(|_| ()).map_err(|_| FieldError::Email)
}

/// Allowed phone characters with at least ten digits among them.
///
/// # Errors
///
/// [`FieldError::Phone`] on a bad character or too few digits.
pub fn valid_phone(value: &str) -> Result<(), FieldError> {
    let trimmed = value.trim();
    let digits = trimmed.chars().filter(char::is_ascii_digit).count();
    if PHONE_CHARSET_RE.is_match(trimmed) && digits >= PHONE_MIN_DIGITS {
        Ok(())
    } else {
        Err(FieldError::Phone)
    }
}

/// Five or six digits.
///
/// # Errors
///
/// [`FieldError::Postal`] otherwise.
pub fn valid_postal(value: &str) -> Result<(), FieldError> {
    if POSTAL_RE.is_match(value.trim()) {
        Ok(())
    } else {
        Err(FieldError::Postal)
    }
}

/// Exactly sixteen digits once spaces are stripped.
///
/// # Errors
///
/// [`FieldError::CardNumber`] otherwise.
pub fn valid_card_number(value: &str) -> Result<(), FieldError> {
    let stripped: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    if CARD_RE.is_match(&stripped) {
        Ok(())
    } else {
        Err(FieldError::CardNumber)
    }
}

/// Three or four digits.
///
/// # Errors
///
/// [`FieldError::Cvv`] otherwise.
pub fn valid_cvv(value: &str) -> Result<(), FieldError> {
    if CVV_RE.is_match(value.trim()) {
        Ok(())
    } else {
        Err(FieldError::Cvv)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_require() {
        assert!(require("Ayesha Khan").is_ok());
        assert_eq!(require("   ").unwrap_err(), FieldError::Required);
        assert_eq!(require("").unwrap_err(), FieldError::Required);
    }

    #[test]
    fn test_email() {
        assert!(valid_email("ayesha@example.com").is_ok());
        assert!(valid_email("  ayesha@example.com  ").is_ok());
        assert_eq!(valid_email("ayesha@example").unwrap_err(), FieldError::Email);
        assert_eq!(valid_email("not-an-email").unwrap_err(), FieldError::Email);
    }

    #[test]
    fn test_phone() {
        assert!(valid_phone("0300-1234567").is_ok());
        assert!(valid_phone("+92 (300) 123 4567").is_ok());
        // Nine digits: too few.
        assert_eq!(valid_phone("030012345").unwrap_err(), FieldError::Phone);
        // Letters are not allowed.
        assert_eq!(valid_phone("0300-CALL-NOW").unwrap_err(), FieldError::Phone);
    }

    #[test]
    fn test_postal() {
        assert!(valid_postal("54000").is_ok());
        assert!(valid_postal("540001").is_ok());
        assert_eq!(valid_postal("5400").unwrap_err(), FieldError::Postal);
        assert_eq!(valid_postal("5400000").unwrap_err(), FieldError::Postal);
        assert_eq!(valid_postal("ABCDE").unwrap_err(), FieldError::Postal);
    }

    #[test]
    fn test_card_number() {
        assert!(valid_card_number("4111111111111111").is_ok());
        assert!(valid_card_number("4111 1111 1111 1111").is_ok());
        assert_eq!(
            valid_card_number("4111-1111-1111-1111").unwrap_err(),
            FieldError::CardNumber
        );
        assert_eq!(
            valid_card_number("411111111111111").unwrap_err(),
            FieldError::CardNumber
        );
    }

    #[test]
    fn test_cvv() {
        assert!(valid_cvv("123").is_ok());
        assert!(valid_cvv("1234").is_ok());
        assert_eq!(valid_cvv("12").unwrap_err(), FieldError::Cvv);
        assert_eq!(valid_cvv("12345").unwrap_err(), FieldError::Cvv);
        assert_eq!(valid_cvv("abc").unwrap_err(), FieldError::Cvv);
    }
}
