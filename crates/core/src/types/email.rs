//! Email address type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing an [`EmailAddress`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailAddressError {
    /// The input string is empty.
    #[error("email address cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("email address must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input does not contain an @ symbol.
    #[error("email address must contain an @ symbol")]
    MissingAtSymbol,
    /// The input contains more than one @ symbol.
    #[error("email address must contain exactly one @ symbol")]
    MultipleAtSymbols,
    /// The local part (before @) is empty.
    #[error("email address local part cannot be empty")]
    EmptyLocalPart,
    /// The domain part (after @) is empty.
    #[error("email address domain cannot be empty")]
    EmptyDomain,
}

/// An email address as it appears on the wire (`ua_address`,
/// `sender_address`, `reply_to`).
///
/// ## Constraints
///
/// - Length: 1-254 characters (RFC 5321 limit)
/// - Exactly one @ symbol
/// - Local part (before @) and domain part (after @) must not be empty
///
/// ## Examples
///
/// ```
/// use airship_core::EmailAddress;
///
/// assert!(EmailAddress::parse("new@email.com").is_ok());
/// assert!(EmailAddress::parse("team+promo@urbanairship.com").is_ok());
///
/// assert!(EmailAddress::parse("").is_err());
/// assert!(EmailAddress::parse("no-at-symbol").is_err());
/// assert!(EmailAddress::parse("a@b@c").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Maximum length of an email address (RFC 5321).
    pub const MAX_LENGTH: usize = 254;

    /// Parse an `EmailAddress` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, longer than 254 characters,
    /// or does not split into a non-empty local part and domain around a
    /// single @ symbol.
    pub fn parse(s: &str) -> Result<Self, EmailAddressError> {
        if s.is_empty() {
            return Err(EmailAddressError::Empty);
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(EmailAddressError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        let (local, domain) = s
            .split_once('@')
            .ok_or(EmailAddressError::MissingAtSymbol)?;

        if domain.contains('@') {
            return Err(EmailAddressError::MultipleAtSymbols);
        }

        if local.is_empty() {
            return Err(EmailAddressError::EmptyLocalPart);
        }

        if domain.is_empty() {
            return Err(EmailAddressError::EmptyDomain);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the email address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `EmailAddress` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Returns the local part of the address (before the @).
    #[must_use]
    pub fn local_part(&self) -> &str {
        self.0.split_once('@').map_or("", |(local, _)| local)
    }

    /// Returns the domain part of the address (after the @).
    #[must_use]
    pub fn domain(&self) -> &str {
        self.0.split_once('@').map_or("", |(_, domain)| domain)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for EmailAddress {
    type Err = EmailAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = EmailAddressError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for EmailAddress {
    type Error = EmailAddressError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<EmailAddress> for String {
    fn from(address: EmailAddress) -> Self {
        address.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_addresses() {
        assert!(EmailAddress::parse("new@email.com").is_ok());
        assert!(EmailAddress::parse("ben@icetown.com").is_ok());
        assert!(EmailAddress::parse("no-reply@urbanairship.com").is_ok());
        assert!(EmailAddress::parse("user+tag@example.co.uk").is_ok());
        assert!(EmailAddress::parse("a@b.c").is_ok());
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(EmailAddress::parse(""), Err(EmailAddressError::Empty));
    }

    #[test]
    fn test_parse_too_long() {
        let long = format!("{}@example.com", "a".repeat(250));
        assert!(matches!(
            EmailAddress::parse(&long),
            Err(EmailAddressError::TooLong { max: 254 })
        ));
    }

    #[test]
    fn test_parse_missing_at() {
        assert_eq!(
            EmailAddress::parse("no-at-symbol"),
            Err(EmailAddressError::MissingAtSymbol)
        );
    }

    #[test]
    fn test_parse_multiple_at() {
        assert_eq!(
            EmailAddress::parse("a@b@example.com"),
            Err(EmailAddressError::MultipleAtSymbols)
        );
    }

    #[test]
    fn test_parse_empty_parts() {
        assert_eq!(
            EmailAddress::parse("@domain.com"),
            Err(EmailAddressError::EmptyLocalPart)
        );
        assert_eq!(
            EmailAddress::parse("user@"),
            Err(EmailAddressError::EmptyDomain)
        );
    }

    #[test]
    fn test_local_part_and_domain() {
        let address = EmailAddress::parse("team@urbanairship.com").unwrap();
        assert_eq!(address.local_part(), "team");
        assert_eq!(address.domain(), "urbanairship.com");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let address = EmailAddress::parse("new@email.com").unwrap();
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, "\"new@email.com\"");

        let parsed: EmailAddress = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, address);
    }

    #[test]
    fn test_deserialize_rejects_invalid() {
        let result: Result<EmailAddress, _> = serde_json::from_str("\"not-an-address\"");
        assert!(result.is_err());
    }
}
