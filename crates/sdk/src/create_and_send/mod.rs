//! Create-and-send email payloads.
//!
//! A create-and-send request defines its audience inline, by email address,
//! instead of referencing a registered segment. The request body has the
//! shape:
//!
//! ```json
//! {
//!   "audience": {"create_and_send": [{"ua_address": "...", ...}]},
//!   "device_types": ["email"],
//!   "notification": {"email": {...}},
//!   "campaigns": {"categories": [...]}
//! }
//! ```
//!
//! Every type here is an immutable value. Fallible constructors validate
//! their input up front and never hand back a partially valid payload.

mod audience;
mod campaigns;
mod email;
mod notification;
mod payload;

pub use audience::*;
pub use campaigns::*;
pub use email::*;
pub use notification::*;
pub use payload::*;
