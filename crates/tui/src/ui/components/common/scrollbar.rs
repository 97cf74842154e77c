//! Themed scrollbar rendering.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
};

use crate::ui::theme::roles::Theme;

/// Renders a themed vertical scrollbar on the right side of the given area.
///
/// Nothing is drawn when the content fits inside the viewport.
pub fn render_vertical_scrollbar(
    frame: &mut Frame,
    area: Rect,
    theme: &dyn Theme,
    content_length: usize,
    position: usize,
    viewport_length: usize,
) {
    if viewport_length == 0 || content_length <= viewport_length {
        return;
    }
    let scrollable = content_length - viewport_length;
    let mut scrollbar_state = ScrollbarState::new(scrollable)
        .position(position.min(scrollable))
        .viewport_content_length(viewport_length);
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None)
        .thumb_style(Style::default().fg(theme.roles().scrollbar_thumb))
        .track_style(Style::default().fg(theme.roles().scrollbar_track));
    frame.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
}
