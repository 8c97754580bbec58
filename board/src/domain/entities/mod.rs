//! Domain entities
//!
//! Typed feed model produced by the decoder in `crate::feed::decode`.

pub mod story;
pub mod topic;

pub use story::{FeedItem, FeedPayload};
pub use topic::{GroupedItems, TopicTaxonomy};
#[cfg(test)]
pub use topic::Topic;
