//! Tests for item payloads

use super::*;
use crate::decode::decode_response;
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_feedback_item_full() {
    let value = json!({
        "id": "5499612ec4698839368b4573",
        "userAgent": "Mozilla/5.0",
        "comment": "Works great",
        "location": "Amsterdam, Netherlands",
        "date": "2014-12-23T12:36:30.545Z",
        "custom": {"plan": "pro"},
        "email": "user@example.com",
        "labels": ["praise"],
        "nps": 9,
        "publicUrl": "https://example.com/p",
        "rating": 5,
        "buttonId": "b1",
        "tags": ["home"],
        "url": "https://example.com/"
    });

    let item: FeedbackItem = serde_json::from_value(value).unwrap();
    assert_eq!(item.id, "5499612ec4698839368b4573");
    assert_eq!(item.comment.as_deref(), Some("Works great"));
    let expected = Utc.with_ymd_and_hms(2014, 12, 23, 12, 36, 30).unwrap()
        + chrono::Duration::milliseconds(545);
    assert_eq!(item.date, Some(expected));
    assert_eq!(item.custom.get("plan"), Some(&json!("pro")));
    assert_eq!(item.labels, vec!["praise".to_string()]);
    assert_eq!(item.nps, Some(9));
    assert_eq!(item.rating, Some(5));
    assert_eq!(item.button_id.as_deref(), Some("b1"));
    assert!(item.image.is_none());
}

#[test]
fn test_feedback_item_minimal() {
    let item: FeedbackItem = serde_json::from_value(json!({"id": "x", "unknown": 1})).unwrap();
    assert_eq!(item.id, "x");
    assert!(item.custom.is_empty());
    assert!(item.tags.is_empty());
    assert!(item.date.is_none());
}

#[test]
fn test_campaign_type_field() {
    let campaign: Campaign = serde_json::from_value(json!({
        "id": "c1",
        "buttonId": "b1",
        "analyticsId": "a1",
        "status": "active",
        "name": "Exit survey",
        "type": "exit"
    }))
    .unwrap();
    assert_eq!(campaign.kind.as_deref(), Some("exit"));
    assert_eq!(campaign.status.as_deref(), Some("active"));
}

#[test]
fn test_campaign_stat_keeps_extra_fields() {
    let stat: CampaignStat = serde_json::from_value(json!({
        "id": "s1",
        "completed": 10,
        "conversion": 0.25,
        "views": 40,
        "bounce": 3
    }))
    .unwrap();
    assert_eq!(stat.completed, Some(10));
    assert_eq!(stat.views, Some(40));
    assert_eq!(stat.extra.get("bounce"), Some(&json!(3)));
}

#[test]
fn test_app_feedback_geo_location() {
    let item: AppFeedbackItem = serde_json::from_value(json!({
        "id": "af1",
        "appId": "app1",
        "osName": "iOS",
        "geoLocation": {"country": "NL", "city": "Amsterdam", "lat": 52.37, "lon": 4.89},
        "rooted": false,
        "batteryLevel": 0.5
    }))
    .unwrap();
    let geo = item.geo_location.unwrap();
    assert_eq!(geo.country.as_deref(), Some("NL"));
    assert_eq!(geo.lat, Some(52.37));
    assert_eq!(item.rooted, Some(false));
    assert_eq!(item.os_name.as_deref(), Some("iOS"));
}

#[test]
fn test_email_button_in_envelope() {
    let response = decode_response::<EmailButton>(
        br#"{"items":[{"id":"e1","name":"Newsletter","introText":"Rate us","locale":"en","groups":[{"rating":1}]}],
            "count":1,"hasMore":false,"lastTimestamp":1}"#,
    )
    .unwrap();
    assert_eq!(response.items.len(), 1);
    assert_eq!(response.items[0].intro_text.as_deref(), Some("Rate us"));
    assert_eq!(response.items[0].groups.len(), 1);
}

#[test]
fn test_button_and_app() {
    let button: Button = serde_json::from_value(json!({"id": "b1", "name": "Main"})).unwrap();
    assert_eq!(button.name.as_deref(), Some("Main"));

    let app: App = serde_json::from_value(json!({"id": "a1", "status": "active"})).unwrap();
    assert_eq!(app.status.as_deref(), Some("active"));
    assert!(app.name.is_none());
}
