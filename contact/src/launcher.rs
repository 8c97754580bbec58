//! Launcher port and adapters
//!
//! Launching a `mailto:` URI only hands it to the desktop; success means the
//! handoff happened, not that a mail client actually opened.

use crate::error::LaunchError;

pub trait Launcher {
    /// Make one attempt to open `uri`
    fn launch(&self, uri: &str) -> Result<(), LaunchError>;
}

/// Opens URIs with the platform's default handler
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn launch(&self, uri: &str) -> Result<(), LaunchError> {
        open::that(uri)?;
        Ok(())
    }
}

/// Never launches; for headless builds
pub struct DisabledLauncher;

impl Launcher for DisabledLauncher {
    fn launch(&self, _uri: &str) -> Result<(), LaunchError> {
        Err(LaunchError::Disabled)
    }
}
