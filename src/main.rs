use std::io::stdout;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::Result;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use folio::infrastructure::{
    AppConfig, CliArgs, HttpContactRelay, StorageManager, SystemLinkOpener,
};
use folio::presentation::theme::Theme;
use folio::presentation::{App, AppSettings};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config() -> Result<(AppConfig, StorageManager)> {
    let args = CliArgs::parse();
    let storage = StorageManager::new()?;
    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);
    Ok((config, storage))
}

fn create_app(config: &AppConfig, storage: &StorageManager) -> Result<App> {
    let portfolio = storage.load_content(config.content.as_deref());

    let mut timings = config.sequence_timings();
    if config.ui.skip_intro {
        timings.loading = Duration::ZERO;
        timings.transition = Duration::ZERO;
    }

    let settings = AppSettings {
        timings,
        theme: Theme::new(&config.theme.accent_color),
        animations: config.ui.enable_animations,
    };

    let relay = Arc::new(HttpContactRelay::new(
        config.contact.endpoint.clone(),
        Duration::from_secs(config.contact.timeout_secs),
    )?);
    let opener = Arc::new(SystemLinkOpener::new());

    Ok(App::new(portfolio, settings, relay, opener))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let (config, storage) = load_config()?;
    init_logging(&config)?;

    info!(version = folio::VERSION, "Starting {}", folio::NAME);

    let app = create_app(&config, &storage)?;

    let mut terminal = ratatui::init();
    if config.ui.mouse
        && let Err(e) = execute!(stdout(), EnableMouseCapture)
    {
        ratatui::restore();
        return Err(e.into());
    }

    let result = app.run(&mut terminal).await;

    // The terminal is restored even if mouse capture cannot be released.
    if config.ui.mouse
        && let Err(e) = execute!(stdout(), DisableMouseCapture)
    {
        warn!(error = %e, "Failed to disable mouse capture");
    }
    ratatui::restore();

    result
}
