//! Feed payload decoding
//!
//! The feed is produced by a separate script and served as a static file, so
//! its shape is not trusted. Only invalid JSON is an error; every other
//! deviation degrades to an empty or absent value.

use chrono::FixedOffset;
use serde_json::{Map, Value};

use super::datetime::parse_timestamp;
use crate::domain::entities::{FeedItem, FeedPayload};

/// Decode a raw feed body into a validated payload.
///
/// Zone-less timestamps are read as wall time in `local`.
pub fn decode_payload(body: &str, local: FixedOffset) -> Result<FeedPayload, serde_json::Error> {
    let value: Value = serde_json::from_str(body)?;
    Ok(payload_from_value(&value, local))
}

fn payload_from_value(value: &Value, local: FixedOffset) -> FeedPayload {
    let Some(root) = value.as_object() else {
        return FeedPayload::default();
    };

    let items = root
        .get("items")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item_from_value(item, local))
                .collect()
        })
        .unwrap_or_default();

    FeedPayload {
        generated_at: text_field(root, "generatedAt").and_then(|raw| parse_timestamp(&raw, local)),
        items,
    }
}

fn item_from_value(value: &Value, local: FixedOffset) -> Option<FeedItem> {
    let obj = value.as_object()?;

    Some(FeedItem {
        topic: text_field(obj, "topic"),
        title: text_field(obj, "title"),
        url: text_field(obj, "url"),
        source: text_field(obj, "source"),
        summary: text_field(obj, "summary"),
        published_at: text_field(obj, "publishedAt")
            .and_then(|raw| parse_timestamp(&raw, local)),
    })
}

/// A non-empty string field, or `None`
fn text_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
