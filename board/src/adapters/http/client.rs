//! HTTP feed client

use async_trait::async_trait;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::Client;
use url::Url;

use crate::config::FEED_RESOURCE;
use crate::domain::ports::FeedSource;
use crate::error::{ConfigError, FeedError};

/// Fetches `data/news.json` relative to a site root
pub struct HttpFeedSource {
    http: Client,
    feed_url: Url,
}

impl HttpFeedSource {
    /// Create a source for the feed under `site_url`.
    ///
    /// The site URL is treated as a directory, so `https://host/board`
    /// resolves the feed at `https://host/board/data/news.json`.
    pub fn new(site_url: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::Invalid {
            name: "NEWSBOARD_SITE_URL",
            value: site_url.to_string(),
        };

        let mut base = site_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }

        let feed_url = Url::parse(&base)
            .and_then(|root| root.join(FEED_RESOURCE))
            .map_err(|_| invalid())?;

        if !matches!(feed_url.scheme(), "http" | "https") {
            return Err(invalid());
        }

        Ok(Self {
            http: Client::new(),
            feed_url,
        })
    }

    #[cfg(test)]
    pub fn feed_url(&self) -> &str {
        self.feed_url.as_str()
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    async fn fetch(&self) -> Result<String, FeedError> {
        let response = self
            .http
            .get(self.feed_url.clone())
            .header(CACHE_CONTROL, "no-store")
            .header(PRAGMA, "no-cache")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::HttpStatus {
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }

    fn location(&self) -> String {
        self.feed_url.to_string()
    }
}
