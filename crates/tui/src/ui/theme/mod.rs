//! Theme styling for the TUI.
//!
//! Defines the portfolio palettes (Midnight, Daylight) alongside Dracula and
//! Nord, an ANSI 256-color fallback, semantic theme roles, and helper builders
//! for Ratatui styles. Prefer these helpers over hard-coding colors.

use std::env;

use tracing::debug;

pub mod ansi256;
pub mod catalog;
pub mod dracula;
pub mod midnight;
pub mod nord;
pub mod roles;
pub mod theme_helpers;

pub use ansi256::Ansi256Theme;
pub use catalog::ThemeDefinition;
pub use dracula::DraculaTheme;
pub use midnight::{DaylightTheme, MidnightTheme};
pub use nord::NordTheme;
pub use roles::Theme;

/// Environment variable forcing a theme by id or alias.
pub const THEME_ENV: &str = "TUI_THEME";

/// Theme plus metadata describing how it was selected.
pub struct LoadedTheme {
    pub definition: &'static ThemeDefinition,
    pub theme: Box<dyn Theme>,
}

impl LoadedTheme {
    pub fn from_definition(definition: &'static ThemeDefinition) -> Self {
        Self {
            definition,
            theme: definition.build(),
        }
    }
}

impl std::fmt::Debug for LoadedTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedTheme").field("id", &self.definition.id).finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCapability {
    Truecolor,
    Ansi256,
}

/// Selects a theme: `TUI_THEME`, then the command-line choice, then the
/// persisted preference, then the default. ANSI-only terminals always get the
/// fallback palette.
pub fn load(cli_theme: Option<&str>, preferred_theme: Option<&str>) -> LoadedTheme {
    let capability = detect_color_capability();
    if matches!(capability, ColorCapability::Ansi256) {
        debug!("ANSI-only terminal detected; ignoring theme overrides and forcing fallback palette.");
        return LoadedTheme::from_definition(catalog::default_ansi());
    }

    let env_theme = env::var(THEME_ENV).ok();
    let requested = [env_theme.as_deref(), cli_theme, preferred_theme];
    for name in requested.into_iter().flatten() {
        match catalog::resolve(name.trim()) {
            Some(definition) => return LoadedTheme::from_definition(definition),
            None => debug!(theme = name, "ignoring unknown theme"),
        }
    }

    LoadedTheme::from_definition(catalog::default_truecolor())
}

pub fn detect_color_capability() -> ColorCapability {
    if let Some(mode) = env::var("TUI_COLOR_MODE").ok().and_then(|value| parse_color_mode(value.trim())) {
        return mode;
    }

    let color_term = env::var("COLORTERM").unwrap_or_default().to_ascii_lowercase();
    if color_term.contains("truecolor") || color_term.contains("24bit") {
        return ColorCapability::Truecolor;
    }

    let term = env::var("TERM").unwrap_or_default().to_ascii_lowercase();
    if term.contains("truecolor") {
        return ColorCapability::Truecolor;
    }

    ColorCapability::Ansi256
}

fn parse_color_mode(value: &str) -> Option<ColorCapability> {
    match value.to_ascii_lowercase().as_str() {
        "truecolor" | "24bit" => Some(ColorCapability::Truecolor),
        "ansi256" | "256" | "8bit" => Some(ColorCapability::Ansi256),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_truecolor<R>(theme_env: Option<&str>, f: impl FnOnce() -> R) -> R {
        temp_env::with_vars([("TUI_COLOR_MODE", Some("truecolor")), (THEME_ENV, theme_env)], f)
    }

    #[test]
    fn env_override_beats_cli_and_preference() {
        let loaded = with_truecolor(Some("nord"), || load(Some("dracula"), Some("daylight")));
        assert_eq!(loaded.definition.id, "nord");
    }

    #[test]
    fn cli_choice_beats_preference() {
        let loaded = with_truecolor(None, || load(Some("dracula"), Some("daylight")));
        assert_eq!(loaded.definition.id, "dracula");
    }

    #[test]
    fn unknown_names_fall_through_to_the_next_source() {
        let loaded = with_truecolor(Some("sepia"), || load(Some("bogus"), Some("light")));
        assert_eq!(loaded.definition.id, "daylight");

        let loaded = with_truecolor(None, || load(None, None));
        assert_eq!(loaded.definition.id, "midnight");
    }

    #[test]
    fn ansi_terminals_force_the_fallback() {
        let loaded = temp_env::with_vars([("TUI_COLOR_MODE", Some("ansi256")), (THEME_ENV, Some("nord"))], || load(Some("nord"), None));
        assert_eq!(loaded.definition.id, "ansi256");
    }
}
