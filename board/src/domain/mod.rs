//! Domain layer
//!
//! Contains the feed model with no I/O dependencies.
//! - `entities`: Feed payload, items and the topic taxonomy
//! - `ports`: Trait definitions for where the feed comes from

pub mod entities;
pub mod ports;
