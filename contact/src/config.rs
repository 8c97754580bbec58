use std::env;

use crate::error::ConfigError;

#[derive(Clone, Debug)]
pub struct Config {
    /// Contact page to rewrite in place
    pub page_path: String,
    /// Try to open the mail client after populating links
    pub auto_launch: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let auto_launch = match env::var("CONTACT_AUTO_LAUNCH") {
            Ok(value) => parse_flag(&value).ok_or(ConfigError::Invalid {
                name: "CONTACT_AUTO_LAUNCH",
                value,
            })?,
            Err(_) => true,
        };

        Ok(Self {
            page_path: env::var("CONTACT_PAGE").unwrap_or_else(|_| "contact.html".to_string()),
            auto_launch,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_flag_spellings() {
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag(" YES "), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
