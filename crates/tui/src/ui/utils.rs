//! Layout and text helpers shared by the UI components.

use ratatui::prelude::*;
use unicode_width::UnicodeWidthStr;

/// Creates a rectangle centered within `r`, sized as a percentage of it.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    let area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1]);
    area[1]
}

/// Terminal column width of `text`, saturating at `u16::MAX`.
pub fn display_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

/// Index of the rectangle containing `(x, y)`, provided the point also lies
/// inside `container`.
pub fn find_target_index_by_mouse_position(container: &Rect, targets: &[Rect], x: u16, y: u16) -> Option<usize> {
    let position = Position::new(x, y);
    if !container.contains(position) {
        return None;
    }
    targets.iter().position(|target| target.contains(position))
}
