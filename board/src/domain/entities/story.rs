//! Feed payload and item entities

use chrono::{DateTime, FixedOffset};

/// A decoded feed document
///
/// Every field is already validated: `items` is always a sequence, and
/// optional fields are `None` when the source value was absent or unusable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedPayload {
    pub generated_at: Option<DateTime<FixedOffset>>,
    pub items: Vec<FeedItem>,
}

/// A single story in the feed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedItem {
    /// Topic key as published. Matching against the taxonomy is case-insensitive.
    pub topic: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
    pub source: Option<String>,
    pub summary: Option<String>,
    pub published_at: Option<DateTime<FixedOffset>>,
}

impl FeedItem {
    /// Lower-cased topic key, empty when absent
    pub fn topic_key(&self) -> String {
        self.topic
            .as_deref()
            .map(str::to_lowercase)
            .unwrap_or_default()
    }
}
