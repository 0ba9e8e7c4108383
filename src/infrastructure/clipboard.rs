use arboard::Clipboard;
use tracing::{debug, error, warn};

/// Copies text to the system clipboard off the UI thread.
#[derive(Clone, Default)]
pub struct ClipboardService {}

impl ClipboardService {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    pub fn set_text(&self, text: impl Into<String>) {
        let text = text.into();
        let spawned = tokio::runtime::Handle::try_current().map(|handle| {
            handle.spawn_blocking(move || Self::write(text));
        });
        if spawned.is_err() {
            debug!("No async runtime available, skipping clipboard copy");
        }
    }

    fn write(text: String) {
        match Clipboard::new() {
            Ok(mut cb) => {
                if let Err(e) = cb.set_text(text) {
                    error!("Failed to set clipboard text: {}", e);
                }
            }
            Err(e) => {
                warn!("Failed to initialize clipboard for copy: {}", e);
            }
        }
    }
}
