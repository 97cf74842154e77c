use std::fmt::Debug;

use ratatui::style::{Color, Modifier, Style};

/// Semantic color roles used throughout the UI.
#[derive(Debug, Clone)]
pub struct ThemeRoles {
    pub background: Color,
    pub surface: Color,
    pub surface_muted: Color,
    pub border: Color,

    pub text: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    /// Section headings and the portfolio name.
    pub heading: Color,

    pub accent_primary: Color,
    pub accent_secondary: Color,

    pub info: Color,
    pub success: Color,
    pub warning: Color,

    pub selection_bg: Color,
    pub selection_fg: Color,

    /// Backdrop of the full-screen navigation menu. Darker than `background`
    /// so the overlay reads as elevated.
    pub modal_bg: Color,

    pub scrollbar_track: Color,
    pub scrollbar_thumb: Color,
}

/// Theme trait exposes semantic roles and common style builders.
pub trait Theme: Send + Sync + Debug {
    fn roles(&self) -> &ThemeRoles;

    // Text styles
    fn text_primary_style(&self) -> Style {
        Style::default().fg(self.roles().text)
    }
    fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.roles().text_secondary)
    }
    fn text_muted_style(&self) -> Style {
        Style::default().fg(self.roles().text_muted)
    }
    fn heading_style(&self) -> Style {
        Style::default().fg(self.roles().heading).add_modifier(Modifier::BOLD)
    }

    fn border_style(&self) -> Style {
        Style::default().fg(self.roles().border)
    }

    fn selection_style(&self) -> Style {
        Style::default().fg(self.roles().selection_fg).bg(self.roles().selection_bg)
    }

    fn modal_background_style(&self) -> Style {
        Style::default().bg(self.roles().modal_bg)
    }

    // Status styles
    fn status_info(&self) -> Style {
        Style::default().fg(self.roles().info)
    }
    fn status_success(&self) -> Style {
        Style::default().fg(self.roles().success)
    }
    fn status_warning(&self) -> Style {
        Style::default().fg(self.roles().warning)
    }

    // Accents
    fn accent_primary_style(&self) -> Style {
        Style::default().fg(self.roles().accent_primary)
    }
    fn accent_secondary_style(&self) -> Style {
        Style::default().fg(self.roles().accent_secondary)
    }
    fn accent_emphasis_style(&self) -> Style {
        Style::default().fg(self.roles().accent_primary).add_modifier(Modifier::BOLD)
    }
}
