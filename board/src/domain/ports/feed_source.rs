//! Feed source port
//!
//! Where the raw feed document comes from. Decoding is not the source's job;
//! it hands back the body exactly as received.

use async_trait::async_trait;

use crate::error::FeedError;

#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch the raw feed body, bypassing any cache.
    ///
    /// One attempt only. Non-success responses are `FeedError::HttpStatus`.
    async fn fetch(&self) -> Result<String, FeedError>;

    /// Human-readable location, for logs
    fn location(&self) -> String;
}
