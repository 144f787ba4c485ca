//! Airship Core - Shared value types.
//!
//! This crate provides the small, validated types used across the Airship
//! payload SDK:
//! - `sdk` - Create-and-send and custom event payload construction
//! - `integration-tests` - Wire format fixtures
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no
//! payload composition rules. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Email addresses, string IDs, wire enums and the API's
//!   date-time format

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
