use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
};

use crate::app::{App, Effect};
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;

const PANEL_WIDTH: u16 = 36;

/// Full-screen section menu opened from the navigation bar.
#[derive(Debug, Default)]
pub struct MenuComponent;

impl MenuComponent {
    fn go_to_index(app: &App, index: usize) -> Vec<Effect> {
        app.registry()
            .by_index(index)
            .map(|section| vec![Effect::GoTo(section.id.clone())])
            .unwrap_or_default()
    }

    /// Centered panel sized for `rows` entries plus borders and padding.
    fn panel_area(area: Rect, rows: u16) -> Rect {
        let width = PANEL_WIDTH.min(area.width);
        let height = (rows + 4).min(area.height);
        Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        )
    }
}

impl Component for MenuComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let len = app.registry().len();
        match key.code {
            KeyCode::Esc => vec![Effect::CloseMenu],
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => vec![Effect::Quit],
            KeyCode::Char('q') => vec![Effect::Quit],
            KeyCode::Char('m') => vec![Effect::ToggleMenu],
            KeyCode::Enter | KeyCode::Char(' ') => Self::go_to_index(app, app.menu.cursor),
            KeyCode::Up | KeyCode::Char('k') => {
                app.menu.select_previous(len);
                Vec::new()
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.menu.select_next(len);
                Vec::new()
            }
            KeyCode::Char(digit @ '1'..='9') => Self::go_to_index(app, digit as usize - '1' as usize),
            _ => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = app.menu.item_at(mouse.column, mouse.row) {
                    return Self::go_to_index(app, index);
                }
                if app.menu.contains(mouse.column, mouse.row) {
                    Vec::new()
                } else {
                    vec![Effect::CloseMenu]
                }
            }
            MouseEventKind::ScrollDown => {
                app.menu.select_next(app.registry().len());
                Vec::new()
            }
            MouseEventKind::ScrollUp => {
                app.menu.select_previous(app.registry().len());
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.theme;
        let snapshot = app.navigation();
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(theme.modal_background_style()), area);

        let rows = u16::try_from(app.registry().len()).unwrap_or(u16::MAX);
        let panel = Self::panel_area(area, rows);
        let block = th::block(theme, Some(" Sections "));
        let inner = block.inner(panel);
        frame.render_widget(block, panel);

        let mut item_areas = Vec::with_capacity(app.registry().len());
        for (index, section) in app.registry().iter().enumerate() {
            let row = inner.y + 1 + index as u16;
            if row >= inner.bottom() {
                break;
            }
            let rect = Rect::new(inner.x + 1, row, inner.width.saturating_sub(2), 1);
            let active = snapshot.is_active(section.id.as_str());
            let style = if index == app.menu.cursor {
                theme.selection_style()
            } else {
                th::nav_item_style(theme, active)
            };
            let marker = if active { "● " } else { "  " };
            let line = Line::from(vec![
                Span::styled(format!("{} ", index + 1), theme.text_muted_style()),
                Span::styled(format!("{marker}{}", section.label), style),
            ]);
            frame.render_widget(Paragraph::new(line).style(th::panel_style(theme)), rect);
            item_areas.push(rect);
        }

        app.menu.last_area = panel;
        app.menu.item_areas = item_areas;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'static>> {
        th::build_hint_spans(
            &*app.theme,
            &[("↑/↓", "move"), ("Enter", "go"), ("1-7", "jump"), ("Esc", "close"), ("q", "quit")],
        )
    }
}
