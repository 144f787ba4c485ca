//! Payload composition errors.

use thiserror::Error;

use airship_core::{EmailAddressError, IdError};

/// Result type alias using the payload error type.
pub type Result<T> = std::result::Result<T, PayloadError>;

/// A payload could not be built.
///
/// Every variant is an invalid-argument condition raised synchronously by a
/// constructor; the variant names the combination that was rejected.
#[derive(Debug, Error)]
pub enum PayloadError {
    /// An email template was given both a template ID and inline fields.
    #[error("email template must reference a template_id or define fields, not both")]
    TemplateSourceConflict,

    /// An email template was given neither a template ID nor inline fields.
    #[error("email template requires either a template_id or fields")]
    TemplateSourceMissing,

    /// Inline content was set alongside a template.
    #[error("{field} cannot be set when an email template is used")]
    ContentConflict {
        /// The inline content field that conflicts with the template.
        field: &'static str,
    },

    /// A required field was not set.
    #[error("{0} must be set")]
    MissingField(&'static str),

    /// A required string field was set to the empty string.
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    /// A create-and-send audience needs at least one channel.
    #[error("create-and-send audience requires at least one channel")]
    EmptyAudience,

    /// A notification needs at least one device override.
    #[error("notification requires at least one device type override")]
    EmptyNotification,

    /// The same device type was overridden twice.
    #[error("duplicate override for device type {0}")]
    DuplicateDeviceType(airship_core::DeviceType),

    /// A substitution key collides with a reserved channel attribute.
    #[error("substitution key {0:?} is reserved")]
    ReservedSubstitutionKey(String),

    /// Too many campaign categories.
    #[error("campaigns allow at most {max} categories (got {got})")]
    TooManyCategories {
        /// Maximum allowed categories.
        max: usize,
        /// Number of categories supplied.
        got: usize,
    },

    /// A campaign category is empty or too long.
    #[error("campaign category {category:?} must be 1-{max} characters")]
    InvalidCategory {
        /// The offending category.
        category: String,
        /// Maximum category length.
        max: usize,
    },

    /// A custom event name exceeds the allowed length.
    #[error("custom event name must be at most {max} characters")]
    NameTooLong {
        /// Maximum allowed length.
        max: usize,
    },

    /// A custom event value falls outside the accepted range.
    #[error("custom event value {0} is outside the accepted range")]
    ValueOutOfRange(rust_decimal::Decimal),

    /// A custom event request carries no events.
    #[error("custom event request requires at least one event")]
    EmptyEvents,

    /// An email address failed validation.
    #[error("invalid email address: {0}")]
    Address(#[from] EmailAddressError),

    /// An ID failed validation.
    #[error("invalid id: {0}")]
    Id(#[from] IdError),

    /// The request URL could not be built.
    #[error("invalid request url: {0}")]
    Url(#[from] url::ParseError),

    /// Serialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_error_display() {
        let err = PayloadError::ContentConflict { field: "subject" };
        assert_eq!(
            err.to_string(),
            "subject cannot be set when an email template is used"
        );

        let err = PayloadError::MissingField("plaintext_body");
        assert_eq!(err.to_string(), "plaintext_body must be set");

        let err = PayloadError::TooManyCategories { max: 10, got: 11 };
        assert_eq!(
            err.to_string(),
            "campaigns allow at most 10 categories (got 11)"
        );
    }

    #[test]
    fn test_payload_error_from_address() {
        let err: PayloadError = EmailAddressError::MissingAtSymbol.into();
        assert!(matches!(err, PayloadError::Address(_)));
        assert_eq!(
            err.to_string(),
            "invalid email address: email address must contain an @ symbol"
        );
    }
}
