use ratatui::layout::Rect;

/// UI state for the section menu overlay.
#[derive(Debug, Clone, Default)]
pub struct MenuOverlayState {
    /// Highlighted row.
    pub cursor: usize,
    pub last_area: Rect,
    pub item_areas: Vec<Rect>,
}

impl MenuOverlayState {
    /// Move the cursor down, wrapping at the end.
    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.cursor = (self.cursor + 1) % len;
    }

    /// Move the cursor up, wrapping to the end.
    pub fn select_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.cursor = if self.cursor == 0 { len - 1 } else { (self.cursor - 1).min(len - 1) };
    }

    pub fn item_at(&self, x: u16, y: u16) -> Option<usize> {
        crate::ui::utils::find_target_index_by_mouse_position(&self.last_area, &self.item_areas, x, y)
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.last_area.contains((x, y).into())
    }
}
