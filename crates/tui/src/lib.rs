//! # Folio TUI
//!
//! A terminal portfolio viewer built on Ratatui: one long scrolling page with
//! a navigation bar that tracks the section being read, hides while the
//! reader scrolls down, and scrolls smoothly to any section on request.
//!
//! ## Architecture
//!
//! The page is laid out once per size, filter or theme change into styled
//! rows with known section bounds. Every scroll change is published to the
//! navigation engine over its event bus; components render from the
//! resulting snapshot and answer input with effects that the runtime applies.

mod app;
mod page;
mod ui;

use anyhow::Result;
use folio_types::Portfolio;
use folio_util::{Settings, UserPreferences};

pub use ui::theme::THEME_ENV;

/// Everything the viewer needs to start.
#[derive(Debug)]
pub struct TuiOptions {
    pub portfolio: Portfolio,
    pub settings: Settings,
    pub preferences: UserPreferences,
    /// Theme id or alias chosen on the command line.
    pub theme_override: Option<String>,
    /// Whether to show the loading screen first.
    pub show_splash: bool,
}

/// Runs the viewer until the user quits.
///
/// # Errors
///
/// Fails when the terminal cannot be put into raw mode or drawn to.
pub async fn run(options: TuiOptions) -> Result<()> {
    ui::runtime::run_app(options).await
}

/// `(id, label)` of every bundled theme, in cycling order.
pub fn themes() -> impl Iterator<Item = (&'static str, &'static str)> {
    ui::theme::catalog::THEME_DEFINITIONS
        .iter()
        .map(|definition| (definition.id, definition.label))
}
