//! Application layer
//!
//! The load use case: fetch, decode, group, render into the page.

pub mod feed_service;

pub use feed_service::{FeedService, LoadOutcome, RenderModel};
