//! Link sanitizer
//!
//! Feed content is attacker-controllable, so only `http` and `https` URLs
//! ever become live links.

use url::Url;

/// Href of a disabled link
pub const DISABLED_HREF: &str = "#";

/// Turn an untrusted URL into a safe href.
///
/// Returns the normalized absolute URL for `http`/`https`, and
/// [`DISABLED_HREF`] for anything else: absent, empty, relative,
/// unparseable, or another scheme (`javascript:`, `data:`, `file:`...).
pub fn sanitize_url(value: Option<&str>) -> String {
    let Some(raw) = value.filter(|v| !v.is_empty()) else {
        return DISABLED_HREF.to_string();
    };

    match Url::parse(raw) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => url.into(),
        _ => DISABLED_HREF.to_string(),
    }
}

pub fn is_disabled(href: &str) -> bool {
    href == DISABLED_HREF
}
