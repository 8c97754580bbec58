//! Contact address

use urlencoding::encode;

pub const CONTACT_EMAIL: &str = "gudbot.comics@gmail.com";
pub const CONTACT_SUBJECT: &str = "OpenClaw News Inquiry";

/// Build a `mailto:` URI with a percent-encoded subject
pub fn mailto_uri(email: &str, subject: &str) -> String {
    format!("mailto:{}?subject={}", email, encode(subject))
}

/// The site's contact URI
pub fn contact_uri() -> String {
    mailto_uri(CONTACT_EMAIL, CONTACT_SUBJECT)
}
