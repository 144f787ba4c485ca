//! Wire format tests for custom event payloads.

#![allow(clippy::unwrap_used)]

use std::str::FromStr;

use airship_integration_tests::{assert_json_eq, init_tracing};
use airship_sdk::custom_events::{
    CustomEventBody, CustomEventBodyParts, CustomEventChannelType, CustomEventPayload,
    CustomEventUser, Properties,
};
use airship_sdk::request::{CustomEventRequest, Request};
use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use serde_json::json;

const CHANNEL: &str = "e393d28e-23b2-4a22-9ace-dc539a5b07a8";

fn occurred() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2015, 5, 2, 2, 31, 22).unwrap()
}

fn properties(value: serde_json::Value) -> Properties {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}

#[test]
fn test_full_payload() {
    init_tracing();

    let user = CustomEventUser::parse(CustomEventChannelType::Android, CHANNEL).unwrap();
    let body = CustomEventBody::new(CustomEventBodyParts {
        name: "purchased".to_string(),
        value: Some(Decimal::from_str("120.49").unwrap()),
        transaction: Some("886f53d4-3e0f-46d7-930e-c2792dac6e0a".to_string()),
        interaction_id: Some(
            "your.store/us/en_us/pd/shoe/pid-11046546/pgid-10978234".to_string(),
        ),
        interaction_type: Some("url".to_string()),
        session_id: Some("22404b07-3f8f-4e42-a4ff-a996c18fa9f1".to_string()),
        properties: properties(json!({
            "category": "mens shoes",
            "id": "pid-11046546",
            "description": "sky high",
            "brand": "victory"
        })),
    })
    .unwrap();

    let payload = CustomEventPayload::new(body, user, &occurred());

    assert_json_eq(
        &payload,
        r#"{
            "occurred": "2015-05-02T02:31:22",
            "user": {"android_channel": "e393d28e-23b2-4a22-9ace-dc539a5b07a8"},
            "body": {
                "name": "purchased",
                "value": 120.49,
                "transaction": "886f53d4-3e0f-46d7-930e-c2792dac6e0a",
                "interaction_id": "your.store/us/en_us/pd/shoe/pid-11046546/pgid-10978234",
                "interaction_type": "url",
                "properties": {
                    "category": "mens shoes",
                    "id": "pid-11046546",
                    "description": "sky high",
                    "brand": "victory"
                },
                "session_id": "22404b07-3f8f-4e42-a4ff-a996c18fa9f1"
            }
        }"#,
    );
}

#[test]
fn test_minimal_payload_with_nested_properties() {
    init_tracing();

    let user = CustomEventUser::parse(CustomEventChannelType::Generic, CHANNEL).unwrap();
    let body = CustomEventBody::new(CustomEventBodyParts {
        name: "purchased".to_string(),
        properties: properties(json!({
            "description": "sky high",
            "brand": "victory",
            "colors": ["red", "blue"],
            "items": [
                {
                    "text": "New Line Sneakers",
                    "price": "$ 79.95",
                    "extras": {"super": "cool", "signature": "best"}
                },
                {"text": "Old Line Sneakers", "price": "$ 79.95"}
            ]
        })),
        ..CustomEventBodyParts::default()
    })
    .unwrap();

    let payload = CustomEventPayload::new(body, user, &occurred());

    assert_json_eq(
        &payload,
        r#"{
            "body": {
                "name": "purchased",
                "session_id": null,
                "properties": {
                    "description": "sky high",
                    "brand": "victory",
                    "items": [
                        {"price": "$ 79.95", "extras": {"super": "cool", "signature": "best"}, "text": "New Line Sneakers"},
                        {"price": "$ 79.95", "text": "Old Line Sneakers"}
                    ],
                    "colors": ["red", "blue"]
                }
            },
            "occurred": "2015-05-02T02:31:22",
            "user": {"channel": "e393d28e-23b2-4a22-9ace-dc539a5b07a8"}
        }"#,
    );
}

#[test]
fn test_properties_keep_insertion_order() {
    let mut properties = Properties::new();
    properties.insert("zeta".to_string(), json!("last alphabetically"));
    properties.insert("alpha".to_string(), json!(true));
    properties.insert("mid".to_string(), json!([3, 1, 2]));

    let body = CustomEventBody::new(CustomEventBodyParts {
        name: "purchased".to_string(),
        properties,
        ..CustomEventBodyParts::default()
    })
    .unwrap();

    assert_eq!(
        serde_json::to_string(&body).unwrap(),
        r#"{"name":"purchased","properties":{"zeta":"last alphabetically","alpha":true,"mid":[3,1,2]},"session_id":null}"#
    );
}

#[test]
fn test_batched_request_body() {
    let event = |channel_type, name: &str| {
        CustomEventPayload::new(
            CustomEventBody::named(name).unwrap(),
            CustomEventUser::parse(channel_type, CHANNEL).unwrap(),
            &occurred(),
        )
    };

    let request = CustomEventRequest::new([
        event(CustomEventChannelType::Ios, "viewed"),
        event(CustomEventChannelType::NamedUser, "purchased"),
    ])
    .unwrap();

    assert_json_eq(
        request.payload(),
        r#"[
            {
                "occurred": "2015-05-02T02:31:22",
                "user": {"ios_channel": "e393d28e-23b2-4a22-9ace-dc539a5b07a8"},
                "body": {"name": "viewed", "session_id": null}
            },
            {
                "occurred": "2015-05-02T02:31:22",
                "user": {"named_user_id": "e393d28e-23b2-4a22-9ace-dc539a5b07a8"},
                "body": {"name": "purchased", "session_id": null}
            }
        ]"#,
    );
}
