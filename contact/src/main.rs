//! OpenClaw News contact link populator
//!
//! Rewrites the contact page so every `data-contact-link` element points at
//! the site's mailto address, then tries once to open the mail client and
//! records the result in the page's status line.

mod config;
mod document;
mod error;
mod launcher;
mod mailto;
mod populator;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use config::Config;
use document::ContactDocument;
use launcher::{DisabledLauncher, Launcher, SystemLauncher};
use populator::{populate, ContactOutcome};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,openclaw_news_contact=debug".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env().context("Invalid configuration")?;

    let launcher: Box<dyn Launcher> = if config.auto_launch {
        Box::new(SystemLauncher)
    } else {
        Box::new(DisabledLauncher)
    };

    let outcome = run(&config, launcher.as_ref())?;
    tracing::info!(
        "Updated {} contact links in {} (launched: {}, status set: {})",
        outcome.links_updated,
        config.page_path,
        outcome.launched,
        outcome.status_updated
    );

    Ok(())
}

/// Populate the configured contact page in place
fn run(config: &Config, launcher: &dyn Launcher) -> Result<ContactOutcome> {
    let html = std::fs::read_to_string(&config.page_path)
        .with_context(|| format!("Failed to read {}", config.page_path))?;

    let mut doc = ContactDocument::new(html);
    let outcome = populate(&mut doc, &mailto::contact_uri(), launcher);

    std::fs::write(&config.page_path, doc.as_str())
        .with_context(|| format!("Failed to write {}", config.page_path))?;

    Ok(outcome)
}
