//! Contact link populator
//!
//! Points every contact link at the mailto URI, makes a single launch
//! attempt, and reports the result in the status element. Launch failures
//! end up as status text; nothing is retried.

use crate::document::ContactDocument;
use crate::launcher::Launcher;

pub const STATUS_ELEMENT_ID: &str = "contactStatus";
pub const LAUNCHED_STATUS: &str = "If your email app did not open, use the button below.";
pub const BLOCKED_STATUS: &str = "Automatic launch was blocked. Use the button below.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactOutcome {
    pub links_updated: usize,
    pub launched: bool,
    pub status_updated: bool,
}

pub fn populate<L>(doc: &mut ContactDocument, mailto: &str, launcher: &L) -> ContactOutcome
where
    L: Launcher + ?Sized,
{
    let links_updated = doc.set_contact_links(mailto);

    let (launched, status) = match launcher.launch(mailto) {
        Ok(()) => (true, LAUNCHED_STATUS),
        Err(e) => {
            tracing::debug!("Mail client launch failed: {}", e);
            (false, BLOCKED_STATUS)
        }
    };

    let status_updated = doc.set_text_by_id(STATUS_ELEMENT_ID, status);

    ContactOutcome {
        links_updated,
        launched,
        status_updated,
    }
}
