//! The user a custom event is attributed to.

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use airship_core::ChannelId;

use crate::error::Result;

/// Kind of identifier a custom event user is given by.
///
/// The wire value doubles as the key of the `user` object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CustomEventChannelType {
    #[serde(rename = "ios_channel")]
    Ios,
    #[serde(rename = "android_channel")]
    Android,
    #[serde(rename = "amazon_channel")]
    Amazon,
    #[serde(rename = "web_channel")]
    Web,
    #[serde(rename = "named_user_id")]
    NamedUser,
    #[serde(rename = "channel")]
    Generic,
}

impl CustomEventChannelType {
    /// Get the wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ios => "ios_channel",
            Self::Android => "android_channel",
            Self::Amazon => "amazon_channel",
            Self::Web => "web_channel",
            Self::NamedUser => "named_user_id",
            Self::Generic => "channel",
        }
    }
}

impl std::fmt::Display for CustomEventChannelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exactly one identifier for the user, e.g. `{"android_channel": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomEventUser {
    channel_type: CustomEventChannelType,
    channel: ChannelId,
}

impl CustomEventUser {
    /// Pair a channel type with an identifier.
    #[must_use]
    pub const fn new(channel_type: CustomEventChannelType, channel: ChannelId) -> Self {
        Self {
            channel_type,
            channel,
        }
    }

    /// Build a user from a raw identifier string.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::Id`](crate::PayloadError::Id) if `channel` is
    /// empty.
    pub fn parse(channel_type: CustomEventChannelType, channel: &str) -> Result<Self> {
        Ok(Self::new(channel_type, ChannelId::new(channel)?))
    }

    /// Get the channel type.
    #[must_use]
    pub const fn channel_type(&self) -> CustomEventChannelType {
        self.channel_type
    }

    /// Get the channel identifier.
    #[must_use]
    pub const fn channel(&self) -> &ChannelId {
        &self.channel
    }
}

impl Serialize for CustomEventUser {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.channel_type.as_str(), &self.channel)?;
        map.end()
    }
}
