//! Hosted feed adapter

mod client;

pub use client::HttpFeedSource;
