//! Feed service
//!
//! Runs one load cycle: a single fetch of the feed, then either a full
//! re-render of the page or the "unavailable" state. Nothing is retried; a
//! failed load needs another invocation to recover.

use std::sync::Arc;

use crate::domain::entities::TopicTaxonomy;
use crate::domain::ports::FeedSource;
use crate::error::{FeedError, FeedErrorKind};
use crate::feed::{decode_payload, render_sections, updated_at_text, TimestampFormatter};
use crate::view::{Page, TopicSection};

pub const UNAVAILABLE_TEXT: &str = "Last updated: unavailable";
pub const ERROR_BANNER_TEXT: &str =
    "Could not load data from data/news.json. Run the fetch script or deploy from GitHub Actions.";

/// Everything a successful load puts on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderModel {
    pub updated_at: String,
    pub sections: Vec<TopicSection>,
    /// Stories that matched a known topic
    pub story_count: usize,
}

/// What a load did to the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Rendered { stories: usize },
    Failed(FeedErrorKind),
}

/// Service for loading the feed into a page
pub struct FeedService<S>
where
    S: FeedSource + ?Sized,
{
    source: Arc<S>,
    taxonomy: TopicTaxonomy,
    formatter: TimestampFormatter,
}

impl<S> FeedService<S>
where
    S: FeedSource + ?Sized,
{
    pub fn new(source: Arc<S>, taxonomy: TopicTaxonomy, formatter: TimestampFormatter) -> Self {
        Self {
            source,
            taxonomy,
            formatter,
        }
    }

    /// Fetch and decode the feed, and build the view model
    pub async fn fetch_feed(&self) -> Result<RenderModel, FeedError> {
        let body = self.source.fetch().await?;
        let payload = decode_payload(&body, self.formatter.offset())?;

        let groups = self.taxonomy.group(&payload.items);
        tracing::debug!(
            "Feed has {} items, {} in known topics",
            payload.items.len(),
            groups.total()
        );

        Ok(RenderModel {
            updated_at: updated_at_text(payload.generated_at.as_ref(), &self.formatter),
            sections: render_sections(&groups, &self.formatter),
            story_count: groups.total(),
        })
    }

    /// Run one load cycle against `page`.
    ///
    /// On success the list container is replaced and the banner hidden. On
    /// failure only the indicator and banner change; sections from an earlier
    /// load stay where they are.
    pub async fn load(&self, page: &mut Page) -> LoadOutcome {
        tracing::info!("Loading feed from {}", self.source.location());

        match self.fetch_feed().await {
            Ok(model) => {
                page.clear_lists();
                for section in model.sections {
                    page.append_section(section);
                }
                page.set_updated_at(model.updated_at);
                page.hide_error();

                LoadOutcome::Rendered {
                    stories: model.story_count,
                }
            }
            Err(e) => {
                tracing::warn!("Feed unavailable ({}): {}", e.kind(), e);
                page.set_updated_at(UNAVAILABLE_TEXT);
                page.show_error(ERROR_BANNER_TEXT);

                LoadOutcome::Failed(e.kind())
            }
        }
    }
}
