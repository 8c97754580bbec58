//! OpenClaw News board
//!
//! Loads `data/news.json`, groups stories by topic and writes the news page.
//! Reads the feed from disk by default, or over HTTP when a site URL is
//! configured. A feed that cannot be loaded still produces a page, showing
//! the "unavailable" banner.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod feed;
mod view;

#[cfg(test)]
mod test_utils;


use adapters::{FileFeedSource, HttpFeedSource};
use app::{FeedService, LoadOutcome};
use config::Config;
use domain::entities::TopicTaxonomy;
use domain::ports::FeedSource;
use feed::TimestampFormatter;
use view::Page;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,openclaw_news_board=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env().context("Invalid configuration")?;

    match run(&config).await? {
        LoadOutcome::Rendered { stories } => {
            tracing::info!("Wrote {} with {} stories", config.output_path, stories);
        }
        LoadOutcome::Failed(kind) => {
            tracing::info!(
                "Wrote {} with the unavailable banner ({} failure)",
                config.output_path,
                kind
            );
        }
    }

    Ok(())
}

/// Load the feed into a fresh page and write it to the configured output
async fn run(config: &Config) -> Result<LoadOutcome> {
    let source: Arc<dyn FeedSource> = match &config.site_url {
        Some(site_url) => Arc::new(HttpFeedSource::new(site_url)?),
        None => Arc::new(FileFeedSource::new(&config.feed_path)),
    };

    let service = FeedService::new(
        source,
        TopicTaxonomy::default(),
        TimestampFormatter::new(config.display_offset),
    );

    let mut page = Page::new();
    let outcome = service.load(&mut page).await;

    tokio::fs::write(&config.output_path, page.to_html())
        .await
        .with_context(|| format!("Failed to write {}", config.output_path))?;

    Ok(outcome)
}
