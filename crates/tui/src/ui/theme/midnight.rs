//! The portfolio's own palettes: the dark "midnight" default and its light
//! "daylight" counterpart.

use ratatui::style::Color;

use super::{
    roles::{Theme, ThemeRoles},
    theme_helpers::darken_rgb,
};

// Midnight (dark)
pub const BACKGROUND: Color = Color::Rgb(0x0E, 0x0E, 0x10); // #0E0E10
pub const SURFACE: Color = Color::Rgb(0x1A, 0x1A, 0x1C); // #1A1A1C
pub const BORDER: Color = Color::Rgb(0x2E, 0x2E, 0x2E); // #2E2E2E
pub const HEADING: Color = Color::Rgb(0xF5, 0xF5, 0xF5); // #F5F5F5
pub const TEXT: Color = Color::Rgb(0xB0, 0xB0, 0xB0); // #B0B0B0
pub const TEXT_MUTED: Color = Color::Rgb(0x70, 0x70, 0x78); // #707078
pub const PRIMARY: Color = Color::Rgb(0xA6, 0x6C, 0xFF); // #A66CFF
pub const PRIMARY_HOVER: Color = Color::Rgb(0xC0, 0x84, 0xFC); // #C084FC

// Semantic accents shared by both variants
pub const GREEN: Color = Color::Rgb(0x4A, 0xDE, 0x80); // #4ADE80
pub const AMBER: Color = Color::Rgb(0xFB, 0xBF, 0x24); // #FBBF24
pub const SKY: Color = Color::Rgb(0x38, 0xBD, 0xF8); // #38BDF8

// Daylight (light)
pub const DAY_BACKGROUND: Color = Color::Rgb(0xFA, 0xFA, 0xFA); // #FAFAFA
pub const DAY_SURFACE: Color = Color::Rgb(0xF0, 0xEE, 0xF5); // #F0EEF5
pub const DAY_BORDER: Color = Color::Rgb(0xD4, 0xD0, 0xDE); // #D4D0DE
pub const DAY_HEADING: Color = Color::Rgb(0x18, 0x18, 0x1B); // #18181B
pub const DAY_TEXT: Color = Color::Rgb(0x3F, 0x3F, 0x46); // #3F3F46
pub const DAY_TEXT_MUTED: Color = Color::Rgb(0x71, 0x71, 0x7A); // #71717A
pub const DAY_PRIMARY: Color = Color::Rgb(0x7C, 0x3A, 0xED); // #7C3AED

/// Dark default matching the portfolio's web palette.
#[derive(Debug, Clone)]
pub struct MidnightTheme {
    roles: ThemeRoles,
}

impl MidnightTheme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: BACKGROUND,
                surface: SURFACE,
                surface_muted: BORDER,
                border: BORDER,

                text: TEXT,
                text_secondary: HEADING,
                text_muted: TEXT_MUTED,
                heading: HEADING,

                accent_primary: PRIMARY,
                accent_secondary: PRIMARY_HOVER,

                info: SKY,
                success: GREEN,
                warning: AMBER,

                selection_bg: darken_rgb(PRIMARY, 0.35),
                selection_fg: HEADING,
                modal_bg: darken_rgb(BACKGROUND, 0.6),

                scrollbar_track: SURFACE,
                scrollbar_thumb: PRIMARY,
            },
        }
    }
}

impl Theme for MidnightTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}

/// Light variant for bright terminals.
#[derive(Debug, Clone)]
pub struct DaylightTheme {
    roles: ThemeRoles,
}

impl DaylightTheme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: DAY_BACKGROUND,
                surface: DAY_SURFACE,
                surface_muted: DAY_BORDER,
                border: DAY_BORDER,

                text: DAY_TEXT,
                text_secondary: DAY_HEADING,
                text_muted: DAY_TEXT_MUTED,
                heading: DAY_HEADING,

                accent_primary: DAY_PRIMARY,
                accent_secondary: PRIMARY,

                info: darken_rgb(SKY, 0.8),
                success: darken_rgb(GREEN, 0.7),
                warning: darken_rgb(AMBER, 0.8),

                selection_bg: DAY_BORDER,
                selection_fg: DAY_HEADING,
                modal_bg: DAY_SURFACE,

                scrollbar_track: DAY_SURFACE,
                scrollbar_thumb: DAY_PRIMARY,
            },
        }
    }
}

impl Theme for DaylightTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
