//! Adapters layer
//!
//! Implementations of the `FeedSource` port.

pub mod file;
pub mod http;

pub use file::FileFeedSource;
pub use http::HttpFeedSource;
