//! Core types for the Airship payload SDK.
//!
//! This module provides type-safe wrappers for common wire concepts.

pub mod datetime;
pub mod email;
pub mod id;
pub mod kind;

pub use datetime::{WireDateTimeError, wire_datetime};
pub use email::{EmailAddress, EmailAddressError};
pub use id::*;
pub use kind::*;
