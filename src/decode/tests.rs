//! Tests for response decoding

use super::*;
use crate::error::Error;
use crate::pagination::Page;
use pretty_assertions::assert_eq;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct Item {
    id: String,
}

#[test]
fn test_decode_full_envelope() {
    let body = br#"{
        "items": [{"id": "a"}, {"id": "b"}],
        "count": 2,
        "hasMore": true,
        "lastTimestamp": 1419340238645
    }"#;

    let response: Response<Item> = decode_response(body).unwrap();
    assert_eq!(
        response,
        Response {
            items: vec![
                Item { id: "a".to_string() },
                Item { id: "b".to_string() }
            ],
            count: 2,
            has_more: true,
            last_timestamp: 1_419_340_238_645,
        }
    );
}

#[test]
fn test_decode_missing_fields_default() {
    let response: Response<Item> = decode_response(b"{}").unwrap();
    assert!(response.items.is_empty());
    assert_eq!(response.count, 0);
    assert!(!response.has_more);
    assert_eq!(response.last_timestamp, 0);
}

#[test]
fn test_decode_invalid_json() {
    let err = decode_response::<Item>(b"<html>").unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
    assert!(err.is_fetch_error());
}

#[test]
fn test_decode_wrong_item_shape() {
    let err = decode_response::<Item>(br#"{"items": [{"name": "x"}]}"#).unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}

#[test]
fn test_response_into_page() {
    let response: Response<Item> =
        decode_response(br#"{"items":[{"id":"c"}],"hasMore":false,"lastTimestamp":150}"#)
            .unwrap();
    let page: Page<Item> = response.into();

    assert_eq!(page.items(), &[Item { id: "c".to_string() }]);
    assert!(!page.has_more());
    assert_eq!(page.cursor(), 150);
}
