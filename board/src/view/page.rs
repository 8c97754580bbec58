//! Page state
//!
//! Mirrors the three live regions of the board: the "updated at" indicator,
//! the list container and the error banner. The load routine is the only
//! writer.

use super::html;
use super::nodes::TopicSection;

/// Indicator text before the first load completes
pub const LOADING_TEXT: &str = "Last updated: loading...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    updated_at: String,
    lists: Vec<TopicSection>,
    error_text: String,
    error_visible: bool,
}

impl Page {
    pub fn new() -> Self {
        Self {
            updated_at: LOADING_TEXT.to_string(),
            lists: Vec::new(),
            error_text: String::new(),
            error_visible: false,
        }
    }

    pub fn updated_at(&self) -> &str {
        &self.updated_at
    }

    pub fn set_updated_at(&mut self, text: impl Into<String>) {
        self.updated_at = text.into();
    }

    pub fn sections(&self) -> &[TopicSection] {
        &self.lists
    }

    /// Remove every rendered section
    pub fn clear_lists(&mut self) {
        self.lists.clear();
    }

    pub fn append_section(&mut self, section: TopicSection) {
        self.lists.push(section);
    }

    pub fn error_text(&self) -> &str {
        &self.error_text
    }

    pub fn error_visible(&self) -> bool {
        self.error_visible
    }

    pub fn show_error(&mut self, text: impl Into<String>) {
        self.error_text = text.into();
        self.error_visible = true;
    }

    pub fn hide_error(&mut self) {
        self.error_visible = false;
    }

    /// Serialize to a standalone HTML document
    pub fn to_html(&self) -> String {
        html::render_document(self)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}
