//! Platform integration: opening links and copying text.

use tracing::{info, warn};

use super::clipboard::ClipboardService;
use crate::domain::ports::LinkOpenerPort;

/// Opens URLs with the system handler and copies text via the clipboard.
#[derive(Clone, Default)]
pub struct SystemLinkOpener {
    clipboard: ClipboardService,
}

impl SystemLinkOpener {
    #[must_use]
    pub fn new() -> Self {
        Self {
            clipboard: ClipboardService::new(),
        }
    }
}

impl LinkOpenerPort for SystemLinkOpener {
    fn open(&self, target: &str) -> std::io::Result<()> {
        info!(target = %target, "Opening link");
        opener::open(target).map_err(|e| {
            warn!(error = %e, target = %target, "Failed to open link");
            std::io::Error::other(e.to_string())
        })
    }

    fn copy(&self, text: &str) {
        self.clipboard.set_text(text);
    }
}
