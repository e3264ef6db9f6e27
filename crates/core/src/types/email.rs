//! Validated email address.
//!
//! Deliberately RFC-lite: the same shape check the checkout form applies.
//! A value parses when it has a non-empty local part, exactly one `@`, and
//! a domain with a dot between non-empty labels, with no whitespace
//! anywhere.

use core::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// RFC 5321 length cap.
const MAX_LENGTH: usize = 254;

/// Why a string failed to parse as an [`Email`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailError {
    #[error("email cannot be empty")]
    Empty,
    #[error("email must be at most {MAX_LENGTH} characters")]
    TooLong,
    #[error("email cannot contain whitespace")]
    Whitespace,
    #[error("email must look like name@domain.tld")]
    BadShape,
}

/// A shape-checked email address.
///
/// ```
/// use twenzee_core::Email;
///
/// assert!(Email::parse("user.name+tag@domain.co.uk").is_ok());
/// assert!(Email::parse("user@domain").is_err());
/// assert!(Email::parse("@domain.com").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Parse and validate an address.
    ///
    /// # Errors
    ///
    /// Returns [`EmailError`] describing the first failing check.
    pub fn parse(s: &str) -> Result<Self, EmailError> {
        if s.is_empty() {
            return Err(EmailError::Empty);
        }
        if s.len() > MAX_LENGTH {
            return Err(EmailError::TooLong);
        }
        if s.chars().any(char::is_whitespace) {
            return Err(EmailError::Whitespace);
        }

        let (local, domain) = s.split_once('@').ok_or(EmailError::BadShape)?;
        let dotted = domain
            .find('.')
            .is_some_and(|dot| dot > 0 && dot < domain.len() - 1);
        if local.is_empty() || domain.contains('@') || !dotted {
            return Err(EmailError::BadShape);
        }

        Ok(Self(s.to_owned()))
    }

    /// The address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The part before the `@`.
    #[must_use]
    pub fn local_part(&self) -> &str {
        self.0.split('@').next().unwrap_or("")
    }

    /// The part after the `@`.
    #[must_use]
    pub fn domain(&self) -> &str {
        self.0.split('@').nth(1).unwrap_or("")
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Email {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_common_shapes() {
        for ok in [
            "user@example.com",
            "user.name+tag@example.com",
            "u@sub.example.co.uk",
        ] {
            assert!(Email::parse(ok).is_ok(), "rejected {ok}");
        }
    }

    #[test]
    fn test_rejects_bad_shapes() {
        assert_eq!(Email::parse("").unwrap_err(), EmailError::Empty);
        assert_eq!(
            Email::parse("a b@example.com").unwrap_err(),
            EmailError::Whitespace
        );
        for bad in [
            "no-at-symbol",
            "@example.com",
            "user@",
            "user@domain",
            "user@domain.",
            "user@.com",
            "a@b@c.com",
            "user@@example.com",
        ] {
            assert_eq!(Email::parse(bad).unwrap_err(), EmailError::BadShape, "accepted {bad}");
        }
    }

    #[test]
    fn test_rejects_over_length() {
        let long = format!("{}@example.com", "a".repeat(250));
        assert_eq!(Email::parse(&long).unwrap_err(), EmailError::TooLong);
    }

    #[test]
    fn test_parts() {
        let email = Email::parse("ayesha@example.com").unwrap();
        assert_eq!(email.local_part(), "ayesha");
        assert_eq!(email.domain(), "example.com");
        assert_eq!(email.to_string(), "ayesha@example.com");
    }

    #[test]
    fn test_serde_transparent() {
        let email = Email::parse("ayesha@example.com").unwrap();
        assert_eq!(
            serde_json::to_string(&email).unwrap(),
            "\"ayesha@example.com\""
        );
        let parsed: Email = serde_json::from_str("\"ayesha@example.com\"").unwrap();
        assert_eq!(parsed, email);
    }
}
