//! View nodes for topic sections and story rows

use crate::feed::sanitize::is_disabled;

/// One topic block: title plus its list of rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicSection {
    pub title: String,
    pub rows: Vec<NewsRow>,
}

/// A row in a topic list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewsRow {
    /// Plain text row, used when a topic has no stories
    Placeholder { text: String },
    Story { anchor: Anchor, meta: String },
}

/// A story link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub text: String,
    pub href: String,
    pub target: Option<&'static str>,
    pub rel: Option<&'static str>,
    pub aria_disabled: bool,
    pub classes: Vec<&'static str>,
}

impl Anchor {
    /// Build an anchor for an already-sanitized href.
    ///
    /// Live links open in a new context with `noopener noreferrer`. The
    /// disabled sentinel gets no target/rel and is marked non-interactive.
    pub fn new(text: impl Into<String>, href: String) -> Self {
        if is_disabled(&href) {
            Self {
                text: text.into(),
                href,
                target: None,
                rel: None,
                aria_disabled: true,
                classes: vec!["disabled"],
            }
        } else {
            Self {
                text: text.into(),
                href,
                target: Some("_blank"),
                rel: Some("noopener noreferrer"),
                aria_disabled: false,
                classes: Vec::new(),
            }
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.aria_disabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_anchor_opens_in_new_context() {
        let anchor = Anchor::new("A", "https://a.com/".to_string());

        assert_eq!(anchor.target, Some("_blank"));
        assert_eq!(anchor.rel, Some("noopener noreferrer"));
        assert!(!anchor.is_disabled());
        assert!(anchor.classes.is_empty());
    }

    #[test]
    fn disabled_anchor_has_no_target_or_rel() {
        let anchor = Anchor::new("A", "#".to_string());

        assert_eq!(anchor.href, "#");
        assert_eq!(anchor.target, None);
        assert_eq!(anchor.rel, None);
        assert!(anchor.is_disabled());
        assert_eq!(anchor.classes, vec!["disabled"]);
    }
}
