//! Infrastructure layer with external service adapters.

mod clipboard;
/// Application configuration.
pub mod config;
/// Link opening and clipboard access.
pub mod platform;
/// Contact relay adapters.
pub mod relay;

pub use clipboard::ClipboardService;
pub use config::{AppConfig, CliArgs, LogLevel, StorageManager};
pub use platform::SystemLinkOpener;
pub use relay::HttpContactRelay;
