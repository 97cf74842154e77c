use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::components::{Component, LoadingComponent, MenuComponent, NavBarComponent, PageComponent};
use super::theme::theme_helpers as th;
use crate::app::{App, Effect, Msg};
use crate::page::split_screen;

/// Root view: routes input to the splash, the menu overlay or the page and
/// composes them into one frame.
///
/// Render order is page, navigation bar, menu overlay, hint bar, so the bar
/// floats above the page and the menu covers both.
#[derive(Debug, Default)]
pub struct MainView {
    loading_view: LoadingComponent,
    page_view: PageComponent,
    nav_bar_view: NavBarComponent,
    menu_view: MenuComponent,
}

impl MainView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forwards a message to the app; the returned effects are applied by the
    /// runtime.
    pub fn handle_message(&mut self, app: &mut App, msg: Msg) -> Vec<Effect> {
        app.update(&msg)
    }

    fn focused(&self, app: &App) -> &dyn Component {
        if app.is_loading() {
            &self.loading_view
        } else if app.navigation().menu_open {
            &self.menu_view
        } else {
            &self.page_view
        }
    }
}

impl Component for MainView {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if app.is_loading() {
            return self.loading_view.handle_key_events(app, key);
        }
        if app.navigation().menu_open {
            return self.menu_view.handle_key_events(app, key);
        }
        self.page_view.handle_key_events(app, key)
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if app.is_loading() {
            return Vec::new();
        }
        if app.navigation().menu_open {
            return self.menu_view.handle_mouse_events(app, mouse);
        }
        if mouse.kind == MouseEventKind::Down(MouseButton::Left) && app.nav_bar.last_area.contains((mouse.column, mouse.row).into()) {
            return self.nav_bar_view.handle_mouse_events(app, mouse);
        }
        self.page_view.handle_mouse_events(app, mouse)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let (page_area, hint_area) = split_screen(area);
        if app.is_loading() {
            self.loading_view.render(frame, page_area, app);
        } else {
            self.page_view.render(frame, page_area, app);
            self.nav_bar_view.render(frame, page_area, app);
            if app.navigation().menu_open {
                self.menu_view.render(frame, page_area, app);
            } else {
                app.menu.last_area = Rect::default();
                app.menu.item_areas.clear();
            }
        }

        let hints = Paragraph::new(Line::from(self.get_hint_spans(app))).style(th::panel_style(&*app.theme));
        frame.render_widget(hints, hint_area);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'static>> {
        let mut spans = vec![Span::styled(" ", app.theme.text_muted_style())];
        spans.extend(self.focused(app).get_hint_spans(app));
        spans
    }
}
