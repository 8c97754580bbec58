//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Why a manual mock instead of mockall?
//! - `FeedError` wraps `reqwest::Error`, which tests cannot construct, so the
//!   mock describes failures and builds the error itself
//! - We control exactly what each fetch returns, in order

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
