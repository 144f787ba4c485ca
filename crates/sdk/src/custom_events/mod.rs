//! Custom event payloads.
//!
//! A custom event reports an application-level user action (a purchase, a
//! page view) with a name, an optional value, free-form properties and the
//! time it happened:
//!
//! ```json
//! {
//!   "occurred": "2015-05-02T02:31:22",
//!   "user": {"android_channel": "..."},
//!   "body": {"name": "purchased", "session_id": null}
//! }
//! ```

mod body;
mod payload;
mod user;

pub use body::*;
pub use payload::*;
pub use user::*;
