//! Feed module
//!
//! Decoding, link sanitizing and rendering of the news feed.

pub mod datetime;
pub mod decode;
pub mod renderer;
pub mod sanitize;

pub use datetime::TimestampFormatter;
pub use decode::decode_payload;
pub use renderer::{render_sections, updated_at_text};
