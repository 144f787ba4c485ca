//! The top-level create-and-send request body.

use serde::Serialize;

use airship_core::DeviceType;

use super::audience::CreateAndSendAudience;
use super::campaigns::Campaigns;
use super::notification::Notification;

/// Audience, notification and optional campaigns of one create-and-send.
///
/// `device_types` is not supplied by the caller: it always lists exactly the
/// device types the notification overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateAndSendPayload {
    audience: CreateAndSendAudience,
    device_types: Vec<DeviceType>,
    notification: Notification,
    #[serde(skip_serializing_if = "Option::is_none")]
    campaigns: Option<Campaigns>,
}

impl CreateAndSendPayload {
    /// Assemble a payload. `device_types` is taken from the notification.
    #[must_use]
    pub fn new(
        audience: CreateAndSendAudience,
        notification: Notification,
        campaigns: Option<Campaigns>,
    ) -> Self {
        let device_types: Vec<DeviceType> = notification.device_types().collect();
        tracing::debug!(
            channels = audience.channels().len(),
            device_types = ?device_types,
            campaigns = campaigns.is_some(),
            "built create-and-send payload"
        );
        Self {
            audience,
            device_types,
            notification,
            campaigns,
        }
    }

    /// Get the audience.
    #[must_use]
    pub const fn audience(&self) -> &CreateAndSendAudience {
        &self.audience
    }

    /// Get the device types the notification overrides.
    #[must_use]
    pub fn device_types(&self) -> &[DeviceType] {
        &self.device_types
    }

    /// Get the notification.
    #[must_use]
    pub const fn notification(&self) -> &Notification {
        &self.notification
    }

    /// Get the campaigns, if any.
    #[must_use]
    pub const fn campaigns(&self) -> Option<&Campaigns> {
        self.campaigns.as_ref()
    }
}
