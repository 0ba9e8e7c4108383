use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "folio",
    version,
    about = "A personal portfolio that lives in your terminal",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Portfolio content file (TOML).
    #[arg(long, value_name = "PATH")]
    pub content: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable mouse support.
    #[arg(long)]
    pub mouse: Option<bool>,

    /// Enable `TachyonFX` animations.
    #[arg(long)]
    pub enable_animations: Option<bool>,

    /// Skip the loading screen and page transition.
    #[arg(long)]
    pub skip_intro: bool,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,

    /// Endpoint receiving contact form submissions.
    #[arg(long, env = "FOLIO_RELAY_ENDPOINT", value_name = "URL")]
    pub relay_endpoint: Option<String>,
}
