//! Nord palette mapped onto the application's theme roles.

use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

// Polar Night (base surfaces)
pub const N0: Color = Color::Rgb(0x2E, 0x34, 0x40); // #2E3440
pub const N1: Color = Color::Rgb(0x3B, 0x42, 0x52); // #3B4252
pub const N2: Color = Color::Rgb(0x43, 0x4C, 0x5E); // #434C5E
pub const N3: Color = Color::Rgb(0x4C, 0x56, 0x6A); // #4C566A

// Snow Storm (foregrounds)
pub const S0: Color = Color::Rgb(0xD8, 0xDE, 0xE9); // #D8DEE9
pub const S2: Color = Color::Rgb(0xEC, 0xEF, 0xF4); // #ECEFF4

// Frost
pub const F1: Color = Color::Rgb(0x88, 0xC0, 0xD0); // #88C0D0
pub const F3: Color = Color::Rgb(0x5E, 0x81, 0xAC); // #5E81AC
pub const F4: Color = Color::Rgb(0xB4, 0x8E, 0xAD); // #B48EAD

// Aurora (semantic status)
pub const A_ORANGE: Color = Color::Rgb(0xD0, 0x87, 0x70); // #D08770
pub const A_GREEN: Color = Color::Rgb(0xA3, 0xBE, 0x8C); // #A3BE8C

pub const BG_MODAL_OVERLAY: Color = Color::Rgb(0x1A, 0x1E, 0x28);
pub const TEXT_MUTED: Color = Color::Rgb(0x61, 0x6E, 0x88); // #616E88

#[derive(Debug, Clone)]
pub struct NordTheme {
    roles: ThemeRoles,
}

impl NordTheme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: N0,
                surface: N1,
                surface_muted: N2,
                border: N3,

                text: S0,
                text_secondary: S2,
                text_muted: TEXT_MUTED,
                heading: S2,

                accent_primary: F1,
                accent_secondary: F4,

                info: F1,
                success: A_GREEN,
                warning: A_ORANGE,

                selection_bg: F3,
                selection_fg: S2,
                modal_bg: BG_MODAL_OVERLAY,

                scrollbar_track: N1,
                scrollbar_thumb: N3,
            },
        }
    }
}

impl Theme for NordTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
