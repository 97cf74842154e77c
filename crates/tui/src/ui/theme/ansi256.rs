//! ANSI 256-color fallback for terminals without truecolor support.
//!
//! Approximates the midnight palette with indexed colors so the page stays
//! legible inside macOS Terminal and other 8-bit terminals.

use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

#[derive(Debug, Clone)]
pub struct Ansi256Theme {
    roles: ThemeRoles,
}

impl Ansi256Theme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: Color::Indexed(233),
                surface: Color::Indexed(234),
                surface_muted: Color::Indexed(237),
                border: Color::Indexed(237),

                text: Color::Indexed(249),
                text_secondary: Color::Indexed(255),
                text_muted: Color::Indexed(243),
                heading: Color::Indexed(255),

                accent_primary: Color::Indexed(141),
                accent_secondary: Color::Indexed(177),

                info: Color::Indexed(117),
                success: Color::Indexed(84),
                warning: Color::Indexed(215),

                selection_bg: Color::Indexed(60),
                selection_fg: Color::Indexed(255),
                modal_bg: Color::Indexed(232),

                scrollbar_track: Color::Indexed(235),
                scrollbar_thumb: Color::Indexed(141),
            },
        }
    }
}

impl Theme for Ansi256Theme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
