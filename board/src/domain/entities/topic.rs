//! Topic taxonomy
//!
//! The fixed, ordered set of topics the board knows how to show. Section
//! order on the page follows taxonomy order.

use super::story::FeedItem;

/// A recognized topic: lower-case key plus the label shown as a section title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub key: String,
    pub label: String,
}

impl Topic {
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_lowercase(),
            label: label.to_string(),
        }
    }
}

/// Immutable ordered list of topics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicTaxonomy {
    topics: Vec<Topic>,
}

impl TopicTaxonomy {
    pub fn new(topics: Vec<Topic>) -> Self {
        Self { topics }
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Partition items into one bucket per topic.
    ///
    /// Matching is case-insensitive and exact. Items whose topic is missing
    /// or unknown are dropped. Source order is kept inside each bucket.
    pub fn group(&self, items: &[FeedItem]) -> GroupedItems {
        let mut buckets: Vec<(Topic, Vec<FeedItem>)> = self
            .topics()
            .iter()
            .map(|t| (t.clone(), Vec::new()))
            .collect();

        for item in items {
            let key = item.topic_key();
            if let Some((_, bucket)) = buckets.iter_mut().find(|(t, _)| t.key == key) {
                bucket.push(item.clone());
            }
        }

        GroupedItems { buckets }
    }
}

impl Default for TopicTaxonomy {
    fn default() -> Self {
        Self::new(vec![
            Topic::new("openai", "OpenAI"),
            Topic::new("openclaw", "OpenClaw"),
        ])
    }
}

/// Items bucketed by topic, in taxonomy order
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedItems {
    buckets: Vec<(Topic, Vec<FeedItem>)>,
}

impl GroupedItems {
    #[cfg(test)]
    pub fn get(&self, key: &str) -> &[FeedItem] {
        self.buckets
            .iter()
            .find(|(t, _)| t.key == key)
            .map(|(_, items)| items.as_slice())
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Topic, &[FeedItem])> {
        self.buckets.iter().map(|(t, items)| (t, items.as_slice()))
    }

    /// Number of items that landed in any bucket
    pub fn total(&self) -> usize {
        self.buckets.iter().map(|(_, items)| items.len()).sum()
    }
}
