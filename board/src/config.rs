use std::env;

use chrono::{FixedOffset, Local};

use crate::error::ConfigError;

/// Relative location of the feed, both on disk and under the site root
pub const FEED_RESOURCE: &str = "./data/news.json";

#[derive(Clone, Debug)]
pub struct Config {
    /// Site root to fetch the feed from. When unset the feed is read from disk.
    pub site_url: Option<String>,
    /// Feed path used in file mode
    pub feed_path: String,
    /// Where the rendered page is written
    pub output_path: String,
    /// Display zone for timestamps
    pub display_offset: FixedOffset,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let display_offset = match env::var("NEWSBOARD_UTC_OFFSET_MINUTES") {
            Ok(value) => parse_offset_minutes(&value)?,
            Err(_) => *Local::now().offset(),
        };

        Ok(Self {
            site_url: env::var("NEWSBOARD_SITE_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
            feed_path: env::var("NEWSBOARD_FEED_PATH")
                .unwrap_or_else(|_| FEED_RESOURCE.to_string()),
            output_path: env::var("NEWSBOARD_OUTPUT").unwrap_or_else(|_| "index.html".to_string()),
            display_offset,
        })
    }
}

/// Parse a UTC offset given in minutes, e.g. `-300` for US Eastern
fn parse_offset_minutes(value: &str) -> Result<FixedOffset, ConfigError> {
    let invalid = || ConfigError::Invalid {
        name: "NEWSBOARD_UTC_OFFSET_MINUTES",
        value: value.to_string(),
    };

    let minutes: i32 = value.trim().parse().map_err(|_| invalid())?;
    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positive_and_negative_offsets() {
        assert_eq!(
            parse_offset_minutes("120").unwrap(),
            FixedOffset::east_opt(7200).unwrap()
        );
        assert_eq!(
            parse_offset_minutes(" -300 ").unwrap(),
            FixedOffset::west_opt(18000).unwrap()
        );
        assert_eq!(parse_offset_minutes("0").unwrap(), FixedOffset::east_opt(0).unwrap());
    }

    #[test]
    fn rejects_garbage_and_out_of_range_offsets() {
        assert!(parse_offset_minutes("utc").is_err());
        assert!(parse_offset_minutes("100000").is_err());
    }
}
