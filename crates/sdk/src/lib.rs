//! Airship SDK - Typed request payloads for the Airship API.
//!
//! This crate builds the JSON bodies for two endpoints:
//! - [`create_and_send`] - Register email channels and send them a message
//!   in one call
//! - [`custom_events`] - Report user actions for segmentation and
//!   automation
//!
//! Payloads are validated when they are constructed, so any value that
//! exists serializes to a body the API accepts. [`request`] pairs a payload
//! with its endpoint; sending it over HTTP is left to the caller.
//!
//! # Example
//!
//! ```
//! use airship_core::ChannelId;
//! use airship_sdk::custom_events::{
//!     CustomEventBody, CustomEventChannelType, CustomEventPayload, CustomEventUser,
//! };
//! use airship_sdk::request::{CustomEventRequest, Request};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let user = CustomEventUser::new(CustomEventChannelType::NamedUser, ChannelId::new("user-1")?);
//! let event = CustomEventPayload::new(CustomEventBody::named("purchased")?, user, &chrono::Utc::now());
//! let request = CustomEventRequest::single(event);
//!
//! let config = airship_sdk::SdkConfig::for_region(airship_sdk::Region::Us)?;
//! assert_eq!(request.url(&config)?.path(), "/api/custom-events");
//! assert!(request.body()?.starts_with('['));
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod create_and_send;
pub mod custom_events;
pub mod error;
pub mod request;

pub use config::{ConfigError, Region, SdkConfig};
pub use error::{PayloadError, Result};
pub use request::{CONTENT_TYPE, CreateAndSendRequest, CustomEventRequest, Method, Request};
