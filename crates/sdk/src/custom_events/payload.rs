//! A single custom event record.

use chrono::{DateTime, SubsecRound, TimeZone, Utc};
use serde::Serialize;

use super::body::CustomEventBody;
use super::user::CustomEventUser;

/// Who did what, and when.
///
/// `occurred` is stored in UTC at whole-second precision, which is all the
/// wire format carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomEventPayload {
    #[serde(with = "airship_core::wire_datetime")]
    occurred: DateTime<Utc>,
    user: CustomEventUser,
    body: CustomEventBody,
}

impl CustomEventPayload {
    /// Attach a body to a user at a point in time, normalized to UTC.
    #[must_use]
    pub fn new<Tz: TimeZone>(
        body: CustomEventBody,
        user: CustomEventUser,
        occurred: &DateTime<Tz>,
    ) -> Self {
        let occurred = occurred.with_timezone(&Utc).trunc_subsecs(0);
        tracing::debug!(
            event = body.name(),
            user_type = %user.channel_type(),
            occurred = %occurred,
            "built custom event payload"
        );
        Self {
            occurred,
            user,
            body,
        }
    }

    /// Get when the event occurred, in UTC.
    #[must_use]
    pub const fn occurred(&self) -> &DateTime<Utc> {
        &self.occurred
    }

    /// Get the user the event is attributed to.
    #[must_use]
    pub const fn user(&self) -> &CustomEventUser {
        &self.user
    }

    /// Get the event body.
    #[must_use]
    pub const fn body(&self) -> &CustomEventBody {
        &self.body
    }
}
