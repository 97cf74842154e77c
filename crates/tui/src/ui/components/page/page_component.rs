use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Span,
    widgets::{Block, Paragraph},
};

use crate::app::{App, Effect};
use crate::page::{PageAction, content_area};
use crate::ui::components::Component;
use crate::ui::components::common::scrollbar::render_vertical_scrollbar;
use crate::ui::theme::theme_helpers as th;

/// Rows moved per mouse wheel notch.
const WHEEL_STEP: i32 = 3;

/// Renders the visible slice of the page and turns input into scroll and
/// navigation effects.
#[derive(Debug, Default)]
pub struct PageComponent {
    last_content_area: Rect,
}

impl PageComponent {
    fn effect_for(action: &PageAction) -> Effect {
        match action {
            PageAction::GoTo(id) => Effect::GoTo(id.clone()),
            PageAction::Filter(filter) => Effect::SetFilter(*filter),
        }
    }
}

impl Component for PageComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let effect = match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Effect::Quit,
            KeyCode::Char('q') | KeyCode::Esc => Effect::Quit,
            KeyCode::Down | KeyCode::Char('j') => Effect::ScrollLines(1),
            KeyCode::Up | KeyCode::Char('k') => Effect::ScrollLines(-1),
            KeyCode::PageDown | KeyCode::Char(' ') => Effect::ScrollPages(1),
            KeyCode::PageUp => Effect::ScrollPages(-1),
            KeyCode::Home | KeyCode::Char('g') => Effect::ScrollToTop,
            KeyCode::End | KeyCode::Char('G') => Effect::ScrollToBottom,
            KeyCode::Char('m') => Effect::ToggleMenu,
            KeyCode::Char('f') => Effect::CycleFilter,
            KeyCode::Char('t') => Effect::CycleTheme,
            KeyCode::Char(digit @ '1'..='9') => match app.registry().by_index(digit as usize - '1' as usize) {
                Some(section) => Effect::GoTo(section.id.clone()),
                None => return Vec::new(),
            },
            _ => return Vec::new(),
        };
        vec![effect]
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        match mouse.kind {
            MouseEventKind::ScrollDown => vec![Effect::ScrollLines(WHEEL_STEP)],
            MouseEventKind::ScrollUp => vec![Effect::ScrollLines(-WHEEL_STEP)],
            MouseEventKind::Down(MouseButton::Left) => {
                let area = self.last_content_area;
                if !area.contains((mouse.column, mouse.row).into()) {
                    return Vec::new();
                }
                app.page
                    .link_at(mouse.column - area.x, mouse.row - area.y)
                    .map(|link| vec![Self::effect_for(&link.action)])
                    .unwrap_or_default()
            }
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.theme;
        frame.render_widget(Block::default().style(th::page_style(theme)), area);

        let content = content_area(area);
        let lines = app.page.visible_lines().to_vec();
        frame.render_widget(Paragraph::new(lines).style(th::page_style(theme)), content);
        render_vertical_scrollbar(
            frame,
            area,
            theme,
            app.page.document().height(),
            app.page.row(),
            usize::from(area.height),
        );
        self.last_content_area = content;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'static>> {
        let mut spans = th::build_hint_spans(
            &*app.theme,
            &[
                ("↑/↓", "scroll"),
                ("1-7", "sections"),
                ("m", "menu"),
                ("f", "filter"),
                ("t", "theme"),
                ("q", "quit"),
            ],
        );
        spans.push(Span::styled(
            format!("● {}", app.theme_definition.label),
            Style::default().fg(app.theme_definition.accent),
        ));
        spans.push(Span::styled(format!("  {}", app.project_filter.label()), app.theme.text_secondary_style()));
        spans
    }
}

#[cfg(test)]
mod tests {
    use folio_engine::ProjectFilter;
    use folio_types::SectionId;
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn keys_map_to_effects() {
        let mut app = crate::app::test_app();
        let mut page = PageComponent::default();
        assert_eq!(page.handle_key_events(&mut app, key(KeyCode::Char('j'))), vec![Effect::ScrollLines(1)]);
        assert_eq!(page.handle_key_events(&mut app, key(KeyCode::PageUp)), vec![Effect::ScrollPages(-1)]);
        assert_eq!(
            page.handle_key_events(&mut app, key(KeyCode::Char('5'))),
            vec![Effect::GoTo(SectionId::new("skills"))]
        );
        assert!(page.handle_key_events(&mut app, key(KeyCode::Char('8'))).is_empty());
        assert_eq!(page.handle_key_events(&mut app, key(KeyCode::Char('t'))), vec![Effect::CycleTheme]);
    }

    #[test]
    fn clicking_a_rendered_button_follows_it() {
        let mut app = crate::app::test_app();
        let mut page = PageComponent::default();
        let mut terminal = Terminal::new(TestBackend::new(120, 39)).expect("terminal");
        terminal.draw(|frame| page.render(frame, frame.area(), &mut app)).expect("draw");

        let content = page.last_content_area;
        let link = app
            .page
            .document()
            .links
            .iter()
            .find(|link| link.action == PageAction::GoTo(SectionId::new("projects")))
            .cloned()
            .expect("hero button");
        let effects = page.handle_mouse_events(&mut app, click(content.x + link.columns.start, content.y + link.row as u16));
        assert_eq!(effects, vec![Effect::GoTo(SectionId::new("projects"))]);

        assert!(page.handle_mouse_events(&mut app, click(0, 0)).is_empty());
    }

    #[test]
    fn filter_links_set_the_filter() {
        assert_eq!(
            PageComponent::effect_for(&PageAction::Filter(ProjectFilter::Web)),
            Effect::SetFilter(ProjectFilter::Web)
        );
    }

    #[test]
    fn wheel_scrolls_three_rows() {
        let mut app = crate::app::test_app();
        let mut page = PageComponent::default();
        let wheel = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(page.handle_mouse_events(&mut app, wheel), vec![Effect::ScrollLines(3)]);
    }
}
