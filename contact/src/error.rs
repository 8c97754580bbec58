//! Error types for the contact link populator

use thiserror::Error;

/// Why the mail client could not be launched
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Could not hand off to the system opener: {0}")]
    Open(#[from] std::io::Error),

    #[error("Automatic launch is disabled")]
    Disabled,
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}
