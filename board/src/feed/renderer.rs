//! Feed renderer
//!
//! Turns grouped feed items into view nodes.

use chrono::{DateTime, FixedOffset};

use super::datetime::TimestampFormatter;
use super::sanitize::sanitize_url;
use crate::domain::entities::{FeedItem, GroupedItems};
use crate::view::{Anchor, NewsRow, TopicSection};

pub const EMPTY_TOPIC_TEXT: &str = "No stories yet. Try again in a few minutes.";
pub const UNTITLED_TEXT: &str = "Untitled story";
pub const UNKNOWN_SOURCE_TEXT: &str = "Unknown source";
const META_SEPARATOR: &str = " • ";

/// Render one section per topic, in taxonomy order
pub fn render_sections(groups: &GroupedItems, formatter: &TimestampFormatter) -> Vec<TopicSection> {
    groups
        .iter()
        .map(|(topic, items)| {
            let rows = if items.is_empty() {
                vec![NewsRow::Placeholder {
                    text: EMPTY_TOPIC_TEXT.to_string(),
                }]
            } else {
                items.iter().map(|item| render_row(item, formatter)).collect()
            };

            TopicSection {
                title: topic.label.clone(),
                rows,
            }
        })
        .collect()
}

fn render_row(item: &FeedItem, formatter: &TimestampFormatter) -> NewsRow {
    let title = item.title.as_deref().unwrap_or(UNTITLED_TEXT);
    let href = sanitize_url(item.url.as_deref());

    NewsRow::Story {
        anchor: Anchor::new(title, href),
        meta: format_meta(item, formatter),
    }
}

/// Row metadata: `source • summary • date`, skipping absent parts
pub fn format_meta(item: &FeedItem, formatter: &TimestampFormatter) -> String {
    let mut parts = vec![item
        .source
        .clone()
        .unwrap_or_else(|| UNKNOWN_SOURCE_TEXT.to_string())];

    if let Some(summary) = &item.summary {
        parts.push(summary.clone());
    }
    if let Some(published) = &item.published_at {
        parts.push(formatter.format(published));
    }

    parts.join(META_SEPARATOR)
}

/// Text for the "updated at" indicator
pub fn updated_at_text(
    generated_at: Option<&DateTime<FixedOffset>>,
    formatter: &TimestampFormatter,
) -> String {
    match generated_at {
        Some(ts) => format!("Last updated: {}", formatter.format(ts)),
        None => "Last updated: unknown".to_string(),
    }
}
