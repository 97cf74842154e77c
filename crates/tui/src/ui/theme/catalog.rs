use ratatui::style::Color;

use super::{Ansi256Theme, DaylightTheme, DraculaTheme, MidnightTheme, NordTheme, Theme};

/// Describes a selectable theme.
#[derive(Clone, Copy, Debug)]
pub struct ThemeDefinition {
    /// Canonical identifier used for persistence.
    pub id: &'static str,
    /// Human-friendly display name.
    pub label: &'static str,
    /// Accent shown next to the name when the theme changes.
    pub accent: Color,
    /// Theme aliases (e.g., env overrides) that map back to this definition.
    pub aliases: &'static [&'static str],
    /// Whether the palette targets ANSI/8-bit terminals.
    pub is_ansi_fallback: bool,
    factory: fn() -> Box<dyn Theme>,
}

impl ThemeDefinition {
    /// Instantiate the theme represented by this definition.
    pub fn build(&self) -> Box<dyn Theme> {
        (self.factory)()
    }
}

/// Ordered list of selectable themes. The first truecolor entry is the
/// default; `t` cycles through them in this order.
pub static THEME_DEFINITIONS: [ThemeDefinition; 5] = [
    ThemeDefinition {
        id: "midnight",
        label: "Midnight",
        accent: Color::Rgb(0xA6, 0x6C, 0xFF),
        aliases: &["midnight", "dark", "folio"],
        is_ansi_fallback: false,
        factory: || Box::new(MidnightTheme::new()),
    },
    ThemeDefinition {
        id: "daylight",
        label: "Daylight",
        accent: Color::Rgb(0x7C, 0x3A, 0xED),
        aliases: &["daylight", "light"],
        is_ansi_fallback: false,
        factory: || Box::new(DaylightTheme::new()),
    },
    ThemeDefinition {
        id: "dracula",
        label: "Dracula",
        accent: Color::Rgb(0xBD, 0x93, 0xF9),
        aliases: &["dracula"],
        is_ansi_fallback: false,
        factory: || Box::new(DraculaTheme::new()),
    },
    ThemeDefinition {
        id: "nord",
        label: "Nord",
        accent: Color::Rgb(0x88, 0xC0, 0xD0),
        aliases: &["nord"],
        is_ansi_fallback: false,
        factory: || Box::new(NordTheme::new()),
    },
    ThemeDefinition {
        id: "ansi256",
        label: "ANSI 256",
        accent: Color::Indexed(141),
        aliases: &["ansi256", "ansi", "256"],
        is_ansi_fallback: true,
        factory: || Box::new(Ansi256Theme::new()),
    },
];

/// Locate a definition by id or alias (case-insensitive).
pub fn resolve(name: &str) -> Option<&'static ThemeDefinition> {
    THEME_DEFINITIONS.iter().find(|definition| {
        definition.id.eq_ignore_ascii_case(name) || definition.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
    })
}

/// Preferred default for truecolor terminals.
pub fn default_truecolor() -> &'static ThemeDefinition {
    &THEME_DEFINITIONS[0]
}

/// Preferred default for ANSI-only terminals.
pub fn default_ansi() -> &'static ThemeDefinition {
    &THEME_DEFINITIONS[THEME_DEFINITIONS.len() - 1]
}

/// The definition after `current_id`, staying within the same color class
/// (truecolor or ANSI). Unknown ids restart the cycle.
pub fn next_after(current_id: &str, ansi_only: bool) -> &'static ThemeDefinition {
    let candidates: Vec<&'static ThemeDefinition> =
        THEME_DEFINITIONS.iter().filter(|definition| definition.is_ansi_fallback == ansi_only).collect();
    let fallback = if ansi_only { default_ansi() } else { default_truecolor() };
    let Some(position) = candidates.iter().position(|definition| definition.id == current_id) else {
        return candidates.first().copied().unwrap_or(fallback);
    };
    candidates.get((position + 1) % candidates.len()).copied().unwrap_or(fallback)
}
