//! Port for handing URLs and files to the platform.

/// Opens links and copies text outside the terminal.
#[cfg_attr(test, mockall::automock)]
pub trait LinkOpenerPort: Send + Sync {
    /// Opens a URL or path with the system handler.
    ///
    /// # Errors
    /// Returns IO error when no handler could be launched.
    fn open(&self, target: &str) -> std::io::Result<()>;

    /// Copies text to the system clipboard.
    fn copy(&self, text: &str);
}
