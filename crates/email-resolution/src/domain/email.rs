//! Email address value type.
//!
//! Candidate lookups are case-insensitive, so the address is normalised to
//! lowercase at the boundary and every comparison downstream is plain
//! equality. Validation is deliberately shallow: the address arrives from an
//! upstream identity provider that has already accepted it, so only the
//! shape needed for safe matching is enforced here.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors returned by [`EmailAddress::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailValidationError {
    /// The address was empty once trimmed.
    Empty,
    /// The address contained surrounding whitespace.
    SurroundingWhitespace,
    /// The address did not contain exactly one `@` with text on both sides.
    InvalidFormat,
}

impl fmt::Display for EmailValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "email address must not be empty"),
            Self::SurroundingWhitespace => {
                write!(f, "email address must not contain surrounding whitespace")
            }
            Self::InvalidFormat => write!(
                f,
                "email address must contain a local part and a domain separated by '@'",
            ),
        }
    }
}

impl std::error::Error for EmailValidationError {}

/// Normalised email address under resolution.
///
/// ## Invariants
/// - Stored lowercase; two addresses differing only by case are equal.
/// - Contains exactly one `@` with a non-empty local part and domain.
///
/// # Examples
/// ```
/// use email_resolution::domain::EmailAddress;
///
/// let a = EmailAddress::new("Ada@Example.org").unwrap();
/// let b = EmailAddress::new("ada@example.org").unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.as_ref(), "ada@example.org");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate, normalise, and construct an [`EmailAddress`].
    pub fn new(address: impl AsRef<str>) -> Result<Self, EmailValidationError> {
        let raw = address.as_ref();
        if raw.trim().is_empty() {
            return Err(EmailValidationError::Empty);
        }
        if raw.trim() != raw {
            return Err(EmailValidationError::SurroundingWhitespace);
        }

        let mut parts = raw.split('@');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(local), Some(domain), None) if !local.is_empty() && !domain.is_empty() => {
                Ok(Self(raw.to_lowercase()))
            }
            _ => Err(EmailValidationError::InvalidFormat),
        }
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = EmailValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("", EmailValidationError::Empty)]
    #[case("   ", EmailValidationError::Empty)]
    #[case(" ada@example.org", EmailValidationError::SurroundingWhitespace)]
    #[case("ada@example.org ", EmailValidationError::SurroundingWhitespace)]
    #[case("ada.example.org", EmailValidationError::InvalidFormat)]
    #[case("@example.org", EmailValidationError::InvalidFormat)]
    #[case("ada@", EmailValidationError::InvalidFormat)]
    #[case("ada@ex@ample.org", EmailValidationError::InvalidFormat)]
    fn rejects_invalid_addresses(#[case] raw: &str, #[case] expected: EmailValidationError) {
        let err = EmailAddress::new(raw).expect_err("invalid addresses must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    #[case("Ada@Example.ORG", "ada@example.org")]
    #[case("grace@navy.mil", "grace@navy.mil")]
    fn normalises_to_lowercase(#[case] raw: &str, #[case] expected: &str) {
        let email = EmailAddress::new(raw).expect("valid address");
        assert_eq!(email.as_ref(), expected);
    }

    #[test]
    fn serde_round_trip_normalises() {
        let email: EmailAddress =
            serde_json::from_str("\"Ada@Example.org\"").expect("deserialize");
        assert_eq!(email.to_string(), "ada@example.org");
        let json = serde_json::to_string(&email).expect("serialize");
        assert_eq!(json, "\"ada@example.org\"");
    }
}
