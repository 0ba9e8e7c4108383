//! UI screens.

mod app;
mod loading_screen;
mod page_scroll;
mod portfolio_screen;
mod transition;

pub use app::{App, AppSettings};
pub use loading_screen::{LoadingScreen, stage_message};
pub use portfolio_screen::{PortfolioScreen, PortfolioScreenState, section_opacity};
pub use transition::{PageTransition, panel_coverage, welcome_opacity};
