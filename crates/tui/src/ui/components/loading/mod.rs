//! Splash screen shown while the portfolio "loads".

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Gauge, Paragraph},
};

use crate::app::{App, Effect, Phase};
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;
use crate::ui::utils::centered_rect;

#[derive(Debug, Default)]
pub struct LoadingComponent;

impl Component for LoadingComponent {
    fn handle_key_events(&mut self, _app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => vec![Effect::Quit],
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => vec![Effect::Quit],
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.theme;
        frame.render_widget(Block::default().style(th::page_style(theme)), area);
        let Phase::Loading(splash) = &app.phase else {
            return;
        };
        let progress = splash.progress();

        let body = centered_rect(60, 50, area);
        let [name, caption, _, gauge] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .flex(ratatui::layout::Flex::Center)
        .areas(body);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(app.portfolio.name.clone(), theme.heading_style()))).centered(),
            name,
        );
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled("Loading portfolio", theme.text_muted_style()))).centered(),
            caption,
        );
        frame.render_widget(
            Gauge::default()
                .gauge_style(theme.accent_primary_style().bg(theme.roles().surface_muted))
                .ratio(progress.ratio().clamp(0.0, 1.0))
                .label(Span::styled(format!("{:.0}%", progress.percent()), theme.heading_style())),
            gauge,
        );
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'static>> {
        th::build_hint_spans(&*app.theme, &[("q", "quit")])
    }
}
