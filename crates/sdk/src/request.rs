//! Transport-agnostic request descriptors.
//!
//! A request pairs a validated payload with the endpoint it is sent to. The
//! HTTP client that actually sends it (headers, authentication, retries)
//! lives outside this crate and only needs [`Request::method`],
//! [`Request::url`] and [`Request::body`].

use serde::Serialize;
use tracing::instrument;
use url::Url;

use crate::config::SdkConfig;
use crate::create_and_send::CreateAndSendPayload;
use crate::custom_events::CustomEventPayload;
use crate::error::{PayloadError, Result};

/// Media type of every request body.
pub const CONTENT_TYPE: &str = "application/json";

/// HTTP method of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Post,
}

impl Method {
    /// Get the method name as sent on the request line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Post => "POST",
        }
    }
}

/// A payload bound to an API endpoint.
pub trait Request {
    /// Value serialized as the request body.
    type Body: Serialize + ?Sized;

    /// HTTP method the endpoint expects.
    fn method(&self) -> Method;

    /// Endpoint path, relative to the API base URL.
    fn path(&self) -> &'static str;

    /// The validated payload sent as the body.
    fn payload(&self) -> &Self::Body;

    /// Render the literal request body.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::Serialization`] if the payload fails to
    /// serialize.
    #[instrument(skip_all, fields(path = self.path()))]
    fn body(&self) -> Result<String> {
        let body = serde_json::to_string(self.payload())?;
        tracing::debug!(bytes = body.len(), "rendered request body");
        Ok(body)
    }

    /// Absolute endpoint URL under `config`'s base URL.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::Url`] if the path cannot be joined.
    fn url(&self, config: &SdkConfig) -> Result<Url> {
        Ok(config.endpoint(self.path())?)
    }
}

/// `POST /api/create-and-send`, or its dry-run `/validate` twin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAndSendRequest {
    payload: CreateAndSendPayload,
    validate_only: bool,
}

impl CreateAndSendRequest {
    const SEND_PATH: &'static str = "/api/create-and-send";
    const VALIDATE_PATH: &'static str = "/api/create-and-send/validate";

    /// Send the payload.
    #[must_use]
    pub const fn send(payload: CreateAndSendPayload) -> Self {
        Self {
            payload,
            validate_only: false,
        }
    }

    /// Ask the API to validate the payload without sending anything.
    #[must_use]
    pub const fn validate(payload: CreateAndSendPayload) -> Self {
        Self {
            payload,
            validate_only: true,
        }
    }

    /// Whether this request only validates the payload.
    #[must_use]
    pub const fn is_validate_only(&self) -> bool {
        self.validate_only
    }
}

impl Request for CreateAndSendRequest {
    type Body = CreateAndSendPayload;

    fn method(&self) -> Method {
        Method::Post
    }

    fn path(&self) -> &'static str {
        if self.validate_only {
            Self::VALIDATE_PATH
        } else {
            Self::SEND_PATH
        }
    }

    fn payload(&self) -> &CreateAndSendPayload {
        &self.payload
    }
}

/// `POST /api/custom-events` with a JSON array of events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomEventRequest {
    events: Vec<CustomEventPayload>,
}

impl CustomEventRequest {
    const PATH: &'static str = "/api/custom-events";

    /// Batch events into one request, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::EmptyEvents`] if `events` is empty.
    pub fn new(events: impl IntoIterator<Item = CustomEventPayload>) -> Result<Self> {
        let events: Vec<CustomEventPayload> = events.into_iter().collect();
        if events.is_empty() {
            return Err(PayloadError::EmptyEvents);
        }
        Ok(Self { events })
    }

    /// A request carrying a single event.
    #[must_use]
    pub fn single(event: CustomEventPayload) -> Self {
        Self {
            events: vec![event],
        }
    }

    /// Get the batched events, in send order.
    #[must_use]
    pub fn events(&self) -> &[CustomEventPayload] {
        &self.events
    }
}

impl Request for CustomEventRequest {
    type Body = [CustomEventPayload];

    fn method(&self) -> Method {
        Method::Post
    }

    fn path(&self) -> &'static str {
        Self::PATH
    }

    fn payload(&self) -> &[CustomEventPayload] {
        &self.events
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use airship_core::{EmailAddress, MessageType, TemplateId};
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::config::Region;
    use crate::create_and_send::{
        CreateAndSendAudience, CreateAndSendEmailPayload, EmailChannel, EmailPayloadParts,
        EmailTemplate, Notification,
    };
    use crate::custom_events::{CustomEventBody, CustomEventChannelType, CustomEventUser};

    fn create_and_send_payload() -> CreateAndSendPayload {
        let email = CreateAndSendEmailPayload::new(EmailPayloadParts {
            template: Some(EmailTemplate::Id(TemplateId::new("welcome").unwrap())),
            message_type: Some(MessageType::Commercial),
            sender_name: Some("Shop".to_string()),
            sender_address: Some(EmailAddress::parse("shop@example.com").unwrap()),
            reply_to: Some(EmailAddress::parse("help@example.com").unwrap()),
            ..EmailPayloadParts::default()
        })
        .unwrap();
        let audience = CreateAndSendAudience::new([EmailChannel::address_only(
            EmailAddress::parse("new@email.com").unwrap(),
        )])
        .unwrap();
        CreateAndSendPayload::new(audience, Notification::email(email), None)
    }

    fn event(name: &str) -> CustomEventPayload {
        CustomEventPayload::new(
            CustomEventBody::named(name).unwrap(),
            CustomEventUser::parse(CustomEventChannelType::Web, "web-1").unwrap(),
            &Utc.with_ymd_and_hms(2015, 5, 2, 2, 31, 22).unwrap(),
        )
    }

    #[test]
    fn test_create_and_send_paths() {
        let config = SdkConfig::for_region(Region::Us).unwrap();

        let send = CreateAndSendRequest::send(create_and_send_payload());
        assert_eq!(send.method(), Method::Post);
        assert_eq!(send.method().as_str(), "POST");
        assert_eq!(CONTENT_TYPE, "application/json");
        assert_eq!(
            send.url(&config).unwrap().as_str(),
            "https://go.urbanairship.com/api/create-and-send"
        );

        let validate = CreateAndSendRequest::validate(create_and_send_payload());
        assert!(validate.is_validate_only());
        assert_eq!(
            validate.url(&config).unwrap().as_str(),
            "https://go.urbanairship.com/api/create-and-send/validate"
        );
    }

    #[test]
    fn test_create_and_send_body_is_payload_json() {
        let request = CreateAndSendRequest::send(create_and_send_payload());
        let body: serde_json::Value = serde_json::from_str(&request.body().unwrap()).unwrap();
        assert_eq!(body, serde_json::to_value(request.payload()).unwrap());
    }

    #[test]
    fn test_custom_event_body_is_array() {
        let request = CustomEventRequest::new([event("purchased"), event("viewed")]).unwrap();
        let body: serde_json::Value = serde_json::from_str(&request.body().unwrap()).unwrap();

        let events = body.as_array().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0]["body"]["name"], "purchased");
        assert_eq!(events[1]["body"]["name"], "viewed");
    }

    #[test]
    fn test_custom_event_url_follows_region() {
        let config = SdkConfig::for_region(Region::Eu).unwrap();
        let request = CustomEventRequest::single(event("purchased"));
        assert_eq!(
            request.url(&config).unwrap().as_str(),
            "https://go.airship.eu/api/custom-events"
        );
    }

    #[test]
    fn test_empty_custom_event_request_rejected() {
        let result = CustomEventRequest::new(Vec::new());
        assert!(matches!(result, Err(PayloadError::EmptyEvents)));
    }
}
