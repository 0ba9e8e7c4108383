//! Application configuration.

pub mod app_config;
pub mod args;
pub mod storage;

pub use app_config::{AppConfig, ContactConfig, LogLevel, ThemeConfig, TimingConfig, UiConfig};
pub use args::CliArgs;
pub use storage::{ConfigError, StorageManager};
