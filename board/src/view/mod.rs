//! View layer
//!
//! A small retained view tree standing in for the browser DOM. The feed
//! renderer builds nodes, `Page` holds them, and `html` serializes the page.

pub mod html;
pub mod nodes;
pub mod page;

pub use nodes::{Anchor, NewsRow, TopicSection};
pub use page::Page;
