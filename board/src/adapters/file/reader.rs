use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::ports::FeedSource;
use crate::error::FeedError;

/// Reads the feed straight from disk
///
/// Each fetch re-reads the file, so there is nothing to bypass. Bytes that
/// are not valid UTF-8 are replaced, leaving the JSON decoder to judge them.
pub struct FileFeedSource {
    path: PathBuf,
}

impl FileFeedSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl FeedSource for FileFeedSource {
    async fn fetch(&self) -> Result<String, FeedError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| FeedError::Read {
                path: self.path.display().to_string(),
                source,
            })?;

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Offset, Utc};

    use super::*;
    use crate::error::FeedErrorKind;
    use crate::feed::decode_payload;

    #[tokio::test]
    async fn reads_feed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("news.json");
        std::fs::write(&path, r#"{"items":[]}"#).unwrap();

        let body = FileFeedSource::new(&path).fetch().await.unwrap();

        assert_eq!(body, r#"{"items":[]}"#);
    }

    #[tokio::test]
    async fn missing_file_is_a_network_class_failure() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileFeedSource::new(dir.path().join("absent.json"));

        let err = source.fetch().await.unwrap_err();

        assert_eq!(err.kind(), FeedErrorKind::Network);
        assert!(source.location().ends_with("absent.json"));
    }

    #[tokio::test]
    async fn invalid_utf8_is_replaced_not_a_read_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("news.json");
        std::fs::write(&path, b"{\"items\":[{\"topic\":\"openai\",\"title\":\"caf\xe9\"}]}").unwrap();

        let body = FileFeedSource::new(&path).fetch().await.unwrap();
        let payload = decode_payload(&body, Utc.fix()).unwrap();

        assert_eq!(payload.items[0].title.as_deref(), Some("caf\u{FFFD}"));
    }

    #[tokio::test]
    async fn invalid_utf8_outside_json_is_a_decode_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("news.json");
        std::fs::write(&path, b"\xff\xfe{}").unwrap();

        let body = FileFeedSource::new(&path).fetch().await.unwrap();
        let err = FeedError::from(decode_payload(&body, Utc.fix()).unwrap_err());

        assert_eq!(err.kind(), FeedErrorKind::Decode);
    }
}
