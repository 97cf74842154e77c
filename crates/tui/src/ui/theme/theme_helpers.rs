use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders},
};

use super::roles::{Theme, ThemeRoles};

/// Build a standard Block with theme surfaces and borders.
pub fn block<'a, T: Theme + ?Sized>(theme: &'a T, title: Option<&'a str>) -> Block<'a> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style())
        .style(panel_style(theme));
    if let Some(t) = title {
        block = block.title(Span::styled(t, theme.heading_style()));
    }
    block
}

/// Style for panel-like containers (set background on widget using `.style`).
pub fn panel_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { surface, text, .. } = *theme.roles();
    Style::default().bg(surface).fg(text)
}

/// Style for the page body.
pub fn page_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { background, text, .. } = *theme.roles();
    Style::default().bg(background).fg(text)
}

/// Darken an RGB color by a multiplicative factor (0.0..=1.0).
/// If the color is not RGB, returns it unchanged.
pub fn darken_rgb(color: Color, factor: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let f = factor.clamp(0.0, 1.0);
            let dr = (r as f32 * f).round().clamp(0.0, 255.0) as u8;
            let dg = (g as f32 * f).round().clamp(0.0, 255.0) as u8;
            let db = (b as f32 * f).round().clamp(0.0, 255.0) as u8;
            Color::Rgb(dr, dg, db)
        }
        other => other,
    }
}

/// Navigation item style; the active section is underlined in the accent.
pub fn nav_item_style<T: Theme + ?Sized>(theme: &T, active: bool) -> Style {
    if active {
        theme.accent_emphasis_style().add_modifier(Modifier::UNDERLINED)
    } else {
        theme.text_primary_style()
    }
}

/// Primary button style (filled accent background).
pub fn button_primary_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles {
        accent_primary, heading, ..
    } = *theme.roles();
    Style::default().bg(accent_primary).fg(heading).add_modifier(Modifier::BOLD)
}

/// Secondary button style (accent text, selection background when chosen).
pub fn button_secondary_style<T: Theme + ?Sized>(theme: &T, selected: bool) -> Style {
    let ThemeRoles {
        accent_primary,
        selection_bg,
        selection_fg,
        ..
    } = *theme.roles();
    if selected {
        Style::default().bg(selection_bg).fg(selection_fg).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(accent_primary)
    }
}

/// Badge/tag style (muted surface, readable text).
pub fn badge_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles {
        surface_muted,
        accent_secondary,
        ..
    } = *theme.roles();
    Style::default().bg(surface_muted).fg(accent_secondary)
}

/// Key/description pairs rendered as `key desc  key desc`.
pub fn build_hint_spans<T: Theme + ?Sized>(theme: &T, hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, description) in hints {
        spans.push(Span::styled(*key, theme.accent_emphasis_style()));
        spans.push(Span::styled(format!(" {description}  "), theme.text_muted_style()));
    }
    spans
}
