//! Test fixtures
//!
//! Factory functions for feed items and feed documents.

use crate::domain::entities::FeedItem;

/// Create a feed item with a topic and title and nothing else
pub fn test_item(topic: &str, title: &str) -> FeedItem {
    FeedItem {
        topic: Some(topic.to_string()),
        title: Some(title.to_string()),
        ..Default::default()
    }
}

/// A feed document shaped like the fetch script's output: three stories in
/// known topics and one in an unknown topic
pub fn sample_feed_json() -> &'static str {
    r#"{
  "generatedAt": "2024-01-01T00:00:00+00:00",
  "topics": ["openai", "openclaw"],
  "items": [
    {
      "title": "OpenAI ships a thing",
      "url": "https://news.example.com/openai-thing",
      "source": "news.example.com",
      "publishedAt": "2023-12-31T18:30:00+00:00",
      "summary": "A thing was shipped.",
      "topic": "openai",
      "topicLabel": "OpenAI"
    },
    {
      "title": "OpenClaw hits 1.0",
      "url": "https://blog.example.org/openclaw-1-0",
      "source": "blog.example.org",
      "publishedAt": "2023-12-30T09:00:00+00:00",
      "summary": "",
      "topic": "openclaw",
      "topicLabel": "OpenClaw"
    },
    {
      "title": "Sketchy link",
      "url": "javascript:alert(document.cookie)",
      "source": "evil.example",
      "publishedAt": null,
      "summary": "",
      "topic": "OpenClaw",
      "topicLabel": "OpenClaw"
    },
    {
      "title": "Off-topic",
      "url": "https://elsewhere.example/",
      "topic": "weather"
    }
  ]
}"#
}
