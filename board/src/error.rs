//! Error types for the news board
//!
//! - `FeedError`: everything that can go wrong between requesting the feed
//!   and holding a decoded payload
//! - `ConfigError`: invalid environment configuration

use thiserror::Error;

/// Feed loading errors
///
/// The page never distinguishes between these; they all collapse into the
/// same "unavailable" banner. The kind is kept for logs and tests.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Could not read feed file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP {status}")]
    HttpStatus { status: u16 },

    #[error("Invalid feed JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FeedError {
    /// Short, stable label for the failure kind
    pub fn kind(&self) -> FeedErrorKind {
        match self {
            FeedError::Network(_) | FeedError::Read { .. } => FeedErrorKind::Network,
            FeedError::HttpStatus { .. } => FeedErrorKind::HttpStatus,
            FeedError::Decode(_) => FeedErrorKind::Decode,
        }
    }
}

/// Failure kind, without the payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedErrorKind {
    Network,
    HttpStatus,
    Decode,
}

impl std::fmt::Display for FeedErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedErrorKind::Network => write!(f, "network"),
            FeedErrorKind::HttpStatus => write!(f, "http_status"),
            FeedErrorKind::Decode => write!(f, "decode"),
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}
