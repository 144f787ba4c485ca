//! Inline create-and-send audiences of email channels.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use airship_core::{EmailAddress, wire_datetime};

use crate::error::{PayloadError, Result};

/// Channel attribute keys that substitutions may not shadow.
pub const RESERVED_CHANNEL_KEYS: &[&str] = &[
    "ua_address",
    "ua_commercial_opted_in",
    "ua_transactional_opted_in",
];

/// The moment an address consented to a category of mail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptIn {
    Commercial(DateTime<Utc>),
    Transactional(DateTime<Utc>),
}

impl OptIn {
    /// Channel attribute the opt-in is written under.
    #[must_use]
    pub const fn wire_key(&self) -> &'static str {
        match self {
            Self::Commercial(_) => "ua_commercial_opted_in",
            Self::Transactional(_) => "ua_transactional_opted_in",
        }
    }

    /// When the opt-in happened.
    #[must_use]
    pub const fn at(&self) -> &DateTime<Utc> {
        match self {
            Self::Commercial(at) | Self::Transactional(at) => at,
        }
    }
}

/// One recipient of a create-and-send email.
///
/// Serializes as a flat object: the address, the opt-in timestamp (if any)
/// and every template substitution as a sibling key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailChannel {
    address: EmailAddress,
    opt_in: Option<OptIn>,
    substitutions: BTreeMap<String, String>,
}

impl EmailChannel {
    /// Build a channel.
    ///
    /// A substitution key repeated in `substitutions` keeps its last value.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::EmptyField`] for an empty substitution key and
    /// [`PayloadError::ReservedSubstitutionKey`] for a key that would
    /// overwrite one of [`RESERVED_CHANNEL_KEYS`].
    pub fn new<I, K, V>(
        address: EmailAddress,
        opt_in: Option<OptIn>,
        substitutions: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut checked = BTreeMap::new();
        for (key, value) in substitutions {
            let key = key.into();
            if key.is_empty() {
                return Err(PayloadError::EmptyField("substitution key"));
            }
            if RESERVED_CHANNEL_KEYS.contains(&key.as_str()) {
                return Err(PayloadError::ReservedSubstitutionKey(key));
            }
            checked.insert(key, value.into());
        }

        Ok(Self {
            address,
            opt_in,
            substitutions: checked,
        })
    }

    /// A channel with an address and nothing else.
    #[must_use]
    pub const fn address_only(address: EmailAddress) -> Self {
        Self {
            address,
            opt_in: None,
            substitutions: BTreeMap::new(),
        }
    }

    /// Get the channel address.
    #[must_use]
    pub const fn address(&self) -> &EmailAddress {
        &self.address
    }

    /// Get the opt-in, if any.
    #[must_use]
    pub const fn opt_in(&self) -> Option<&OptIn> {
        self.opt_in.as_ref()
    }

    /// Get the template substitutions, ordered by key.
    #[must_use]
    pub const fn substitutions(&self) -> &BTreeMap<String, String> {
        &self.substitutions
    }
}

impl Serialize for EmailChannel {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let len = 1 + usize::from(self.opt_in.is_some()) + self.substitutions.len();
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("ua_address", &self.address)?;
        if let Some(opt_in) = &self.opt_in {
            map.serialize_entry(opt_in.wire_key(), &wire_datetime::format(opt_in.at()))?;
        }
        for (key, value) in &self.substitutions {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// The recipients of a create-and-send request, in send order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateAndSendAudience {
    #[serde(rename = "create_and_send")]
    channels: Vec<EmailChannel>,
}

impl CreateAndSendAudience {
    /// Build an audience from channels, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::EmptyAudience`] if `channels` is empty.
    pub fn new(channels: impl IntoIterator<Item = EmailChannel>) -> Result<Self> {
        let channels: Vec<EmailChannel> = channels.into_iter().collect();
        if channels.is_empty() {
            return Err(PayloadError::EmptyAudience);
        }
        tracing::debug!(channels = channels.len(), "built create-and-send audience");
        Ok(Self { channels })
    }

    /// Get the channels, in send order.
    #[must_use]
    pub fn channels(&self) -> &[EmailChannel] {
        &self.channels
    }
}
