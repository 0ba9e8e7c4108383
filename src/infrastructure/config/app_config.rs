//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::application::SequenceTimings;
use crate::application::services::sequence_controller::{
    LOADING_DURATION_MS, SCROLL_TOP_THRESHOLD, TRANSITION_DURATION_MS,
};

pub(crate) const APP_NAME: &str = "folio";
pub(crate) const APP_QUALIFIER: &str = "dev";
pub(crate) const APP_ORGANIZATION: &str = "devmurari";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Portfolio content file path.
    #[serde(default)]
    pub content: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Intro sequence timing.
    #[serde(default)]
    pub timing: TimingConfig,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,

    /// Theme configuration.
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Contact relay configuration.
    #[serde(default)]
    pub contact: ContactConfig,
}

/// Intro sequence timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Length of the loading screen.
    #[serde(default = "default_loading_duration_ms")]
    pub loading_duration_ms: u64,

    /// Length of the page transition.
    #[serde(default = "default_transition_duration_ms")]
    pub transition_duration_ms: u64,

    /// Pixel-equivalent offset past which the scroll-to-top button shows.
    #[serde(default = "default_scroll_top_threshold")]
    pub scroll_top_threshold: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            loading_duration_ms: LOADING_DURATION_MS,
            transition_duration_ms: TRANSITION_DURATION_MS,
            scroll_top_threshold: SCROLL_TOP_THRESHOLD,
        }
    }
}

impl From<&TimingConfig> for SequenceTimings {
    fn from(config: &TimingConfig) -> Self {
        Self {
            loading: Duration::from_millis(config.loading_duration_ms),
            transition: Duration::from_millis(config.transition_duration_ms),
            scroll_top_threshold: config.scroll_top_threshold,
        }
    }
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Enable mouse support (hover follower, wheel scrolling, clicks).
    #[serde(default = "default_true")]
    pub mouse: bool,

    /// Enable `TachyonFX` animations.
    #[serde(default = "default_true")]
    pub enable_animations: bool,

    /// Skip the loading screen and transition.
    #[serde(default)]
    pub skip_intro: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse: true,
            enable_animations: true,
            skip_intro: false,
        }
    }
}

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Accent color (name or hex code).
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent_color: default_accent_color(),
        }
    }
}

/// Contact relay configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    /// HTTP endpoint receiving form submissions as JSON.
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_accent_color() -> String {
    "Blue".to_string()
}

fn default_true() -> bool {
    true
}

fn default_loading_duration_ms() -> u64 {
    LOADING_DURATION_MS
}

fn default_transition_duration_ms() -> u64 {
    TRANSITION_DURATION_MS
}

fn default_scroll_top_threshold() -> u32 {
    SCROLL_TOP_THRESHOLD
}

fn default_timeout_secs() -> u64 {
    15
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(content) = args.content {
            self.content = Some(content);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(mouse) = args.mouse {
            self.ui.mouse = mouse;
        }
        if let Some(enable_animations) = args.enable_animations {
            self.ui.enable_animations = enable_animations;
        }
        if args.skip_intro {
            self.ui.skip_intro = true;
        }
        if let Some(accent_color) = args.accent_color {
            self.theme.accent_color = accent_color;
        }
        if let Some(endpoint) = args.relay_endpoint {
            self.contact.endpoint = Some(endpoint);
        }
    }

    /// Returns intro sequence timings.
    #[must_use]
    pub fn sequence_timings(&self) -> SequenceTimings {
        SequenceTimings::from(&self.timing)
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("folio.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            content: None,
            log_path: None,
            log_level: LogLevel::Info,
            timing: TimingConfig::default(),
            ui: UiConfig::default(),
            theme: ThemeConfig::default(),
            contact: ContactConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_partial_config() {
        let toml_content = r#"
            log_level = "debug"

            [timing]
            loading_duration_ms = 1500

            [ui]
            enable_animations = false

            [contact]
            endpoint = "https://relay.example.com/send"
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.timing.loading_duration_ms, 1500);
        assert_eq!(config.timing.transition_duration_ms, TRANSITION_DURATION_MS);
        assert_eq!(config.timing.scroll_top_threshold, 300);
        assert!(!config.ui.enable_animations);
        assert!(config.ui.mouse);
        assert_eq!(
            config.contact.endpoint.as_deref(),
            Some("https://relay.example.com/send")
        );
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        let timings = config.sequence_timings();

        assert_eq!(timings.loading, Duration::from_millis(4000));
        assert_eq!(timings.transition, Duration::from_millis(2000));
        assert_eq!(timings.scroll_top_threshold, 300);
        assert_eq!(config.theme.accent_color, "Blue");
        assert!(config.contact.endpoint.is_none());
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut config = AppConfig::default();
        let args = CliArgs::parse_from([
            "folio",
            "--log-level",
            "trace",
            "--mouse",
            "false",
            "--skip-intro",
            "--accent-color",
            "#3b82f6",
        ]);

        config.merge_with_args(args);

        assert_eq!(config.log_level, LogLevel::Trace);
        assert!(!config.ui.mouse);
        assert!(config.ui.skip_intro);
        assert_eq!(config.theme.accent_color, "#3b82f6");
    }
}
