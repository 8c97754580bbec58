//! Mock implementation of the feed source port
//!
//! Responses are queued up front and handed out one per fetch. An empty
//! queue behaves like an unreachable host.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::ports::FeedSource;
use crate::error::FeedError;

#[derive(Debug, Clone)]
enum MockResponse {
    Body(String),
    Status(u16),
    Unreachable,
}

#[derive(Default)]
pub struct MockFeedSource {
    responses: Mutex<VecDeque<MockResponse>>,
    fetches: AtomicUsize,
}

impl MockFeedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response with this body
    pub fn with_body(self, body: impl Into<String>) -> Self {
        self.push(MockResponse::Body(body.into()))
    }

    /// Queue a non-success HTTP status
    pub fn with_status(self, status: u16) -> Self {
        self.push(MockResponse::Status(status))
    }

    /// Queue a failure to reach the feed at all
    pub fn with_unreachable(self) -> Self {
        self.push(MockResponse::Unreachable)
    }

    fn push(self, response: MockResponse) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FeedSource for MockFeedSource {
    async fn fetch(&self) -> Result<String, FeedError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);

        let next = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(MockResponse::Unreachable);

        match next {
            MockResponse::Body(body) => Ok(body),
            MockResponse::Status(status) => Err(FeedError::HttpStatus { status }),
            MockResponse::Unreachable => Err(FeedError::Read {
                path: self.location(),
                source: std::io::Error::new(
                    std::io::ErrorKind::ConnectionRefused,
                    "connection refused",
                ),
            }),
        }
    }

    fn location(&self) -> String {
        "mock://data/news.json".to_string()
    }
}
