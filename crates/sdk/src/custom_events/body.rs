//! Custom event bodies.

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{PayloadError, Result};

/// Open-ended event properties. Values nest arbitrarily (strings, numbers,
/// booleans, null, objects, arrays) and keep their insertion order.
pub type Properties = Map<String, Value>;

/// Loosely populated event body input.
#[derive(Debug, Clone, Default)]
pub struct CustomEventBodyParts {
    pub name: String,
    pub value: Option<Decimal>,
    pub transaction: Option<String>,
    pub interaction_id: Option<String>,
    pub interaction_type: Option<String>,
    pub session_id: Option<String>,
    pub properties: Properties,
}

/// What happened: the event name, an optional value and free-form
/// properties.
///
/// Unset `value`, `transaction`, `interaction_*` and empty `properties` are
/// omitted from the JSON, but `session_id` is always written and is `null`
/// when unset. Consumers of the event stream rely on that marker.
///
/// `value` is written as a JSON number carrying the decimal's exact digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomEventBody {
    name: String,
    #[serde(
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    value: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    transaction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    interaction_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    interaction_type: Option<String>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    properties: Properties,
    session_id: Option<String>,
}

impl CustomEventBody {
    /// Maximum length of an event name, in characters.
    pub const MAX_NAME_LENGTH: usize = 255;

    /// Validate parts into a body.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::EmptyField`] for an empty name,
    /// [`PayloadError::NameTooLong`] above [`Self::MAX_NAME_LENGTH`] and
    /// [`PayloadError::ValueOutOfRange`] for a value outside the signed
    /// 32-bit integer range.
    pub fn new(parts: CustomEventBodyParts) -> Result<Self> {
        if parts.name.is_empty() {
            return Err(PayloadError::EmptyField("name"));
        }
        if parts.name.chars().count() > Self::MAX_NAME_LENGTH {
            return Err(PayloadError::NameTooLong {
                max: Self::MAX_NAME_LENGTH,
            });
        }
        let accepted = Decimal::from(i32::MIN)..=Decimal::from(i32::MAX);
        if let Some(value) = parts.value.filter(|v| !accepted.contains(v)) {
            return Err(PayloadError::ValueOutOfRange(value));
        }

        tracing::debug!(
            name = %parts.name,
            properties = parts.properties.len(),
            "built custom event body"
        );

        Ok(Self {
            name: parts.name,
            value: parts.value,
            transaction: parts.transaction,
            interaction_id: parts.interaction_id,
            interaction_type: parts.interaction_type,
            properties: parts.properties,
            session_id: parts.session_id,
        })
    }

    /// A body with only a name.
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new).
    pub fn named(name: impl Into<String>) -> Result<Self> {
        Self::new(CustomEventBodyParts {
            name: name.into(),
            ..CustomEventBodyParts::default()
        })
    }

    /// Get the event name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the event value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<Decimal> {
        self.value
    }

    /// Get the session the event belongs to, if any.
    #[must_use]
    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    /// Get the free-form properties.
    #[must_use]
    pub const fn properties(&self) -> &Properties {
        &self.properties
    }
}
