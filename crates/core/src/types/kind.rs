//! Wire enums shared by every payload.

use serde::{Deserialize, Serialize};

/// Email message category.
///
/// Commercial mail is only delivered to addresses with a commercial opt-in;
/// transactional mail goes to every address not explicitly opted out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    Commercial,
    Transactional,
}

impl MessageType {
    /// Get the wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Commercial => "commercial",
            Self::Transactional => "transactional",
        }
    }
}

impl std::fmt::Display for MessageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MessageType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "commercial" => Ok(Self::Commercial),
            "transactional" => Ok(Self::Transactional),
            _ => Err(format!("invalid message type: {s}")),
        }
    }
}

/// Platform a notification override or `device_types` entry targets.
///
/// The declaration order is the order `device_types` lists are emitted in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Ios,
    Android,
    Amazon,
    Web,
    Wns,
    Email,
    Sms,
    Open,
}

impl DeviceType {
    /// Get the wire value, also used as the notification override key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ios => "ios",
            Self::Android => "android",
            Self::Amazon => "amazon",
            Self::Web => "web",
            Self::Wns => "wns",
            Self::Email => "email",
            Self::Sms => "sms",
            Self::Open => "open",
        }
    }
}

impl std::fmt::Display for DeviceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DeviceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ios" => Ok(Self::Ios),
            "android" => Ok(Self::Android),
            "amazon" => Ok(Self::Amazon),
            "web" => Ok(Self::Web),
            "wns" => Ok(Self::Wns),
            "email" => Ok(Self::Email),
            "sms" => Ok(Self::Sms),
            "open" => Ok(Self::Open),
            _ => Err(format!("invalid device type: {s}")),
        }
    }
}
