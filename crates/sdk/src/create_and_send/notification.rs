//! Per-device notification overrides.

use std::collections::BTreeMap;

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use airship_core::DeviceType;

use super::email::CreateAndSendEmailPayload;
use crate::error::{PayloadError, Result};

/// A platform-specific payload inside a notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DevicePayload {
    Email(CreateAndSendEmailPayload),
}

impl DevicePayload {
    /// The device type this payload overrides.
    #[must_use]
    pub const fn device_type(&self) -> DeviceType {
        match self {
            Self::Email(_) => DeviceType::Email,
        }
    }
}

impl From<CreateAndSendEmailPayload> for DevicePayload {
    fn from(payload: CreateAndSendEmailPayload) -> Self {
        Self::Email(payload)
    }
}

/// Notification body keyed by device type, e.g. `{"email": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    overrides: BTreeMap<DeviceType, DevicePayload>,
}

impl Notification {
    /// Build a notification from device overrides.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::EmptyNotification`] without overrides and
    /// [`PayloadError::DuplicateDeviceType`] if two overrides target the same
    /// device type.
    pub fn new(overrides: impl IntoIterator<Item = DevicePayload>) -> Result<Self> {
        let mut by_type = BTreeMap::new();
        for payload in overrides {
            let device_type = payload.device_type();
            if by_type.insert(device_type, payload).is_some() {
                return Err(PayloadError::DuplicateDeviceType(device_type));
            }
        }
        if by_type.is_empty() {
            return Err(PayloadError::EmptyNotification);
        }
        Ok(Self { overrides: by_type })
    }

    /// A notification carrying only an email override.
    #[must_use]
    pub fn email(payload: CreateAndSendEmailPayload) -> Self {
        Self {
            overrides: BTreeMap::from([(DeviceType::Email, DevicePayload::Email(payload))]),
        }
    }

    /// Device types with an override, in wire order.
    pub fn device_types(&self) -> impl Iterator<Item = DeviceType> + '_ {
        self.overrides.keys().copied()
    }

    /// Get the override for a device type.
    #[must_use]
    pub fn get(&self, device_type: DeviceType) -> Option<&DevicePayload> {
        self.overrides.get(&device_type)
    }
}

impl Serialize for Notification {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.overrides.len()))?;
        for (device_type, payload) in &self.overrides {
            map.serialize_entry(device_type.as_str(), payload)?;
        }
        map.end()
    }
}
