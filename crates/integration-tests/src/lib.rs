//! Wire format fixtures for the Airship SDK.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p airship-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `create_and_send_email` - Audiences, email payloads, notifications and
//!   the composition rules around templates
//! - `custom_event_payload` - Custom event users, bodies and timestamps
//!
//! Each fixture compares the serialized payload against a literal JSON body
//! as a parsed tree, so object key order and whitespace do not matter while
//! array order does.

use std::sync::Once;

use serde::Serialize;
use serde_json::Value;

static TRACING: Once = Once::new();

/// Install a test subscriber honoring `RUST_LOG`, once per test binary.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Serialize `actual` to text, parse it back, and compare it to `expected`.
///
/// # Panics
///
/// Panics if either side is not valid JSON or the trees differ.
#[allow(clippy::missing_panics_doc, clippy::unwrap_used)]
#[track_caller]
pub fn assert_json_eq<T: Serialize + ?Sized>(actual: &T, expected: &str) {
    let text = serde_json::to_string(actual).unwrap();
    let actual: Value = serde_json::from_str(&text).unwrap();
    let expected: Value = serde_json::from_str(expected).unwrap();
    assert_eq!(actual, expected, "serialized: {text}");
}
