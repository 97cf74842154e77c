use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use folio_types::SectionId;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::state::{HIRE_ME_LABEL, MENU_BUTTON_LABEL, NAV_BAR_HEIGHT, NavTarget, layout_targets};
use crate::app::{App, Effect};
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;

/// Horizontal navigation bar overlaid on the top of the page.
///
/// The bar is only drawn while the navigation snapshot says it is visible;
/// while hidden it records no hit areas so clicks fall through to the page.
#[derive(Debug, Default)]
pub struct NavBarComponent;

impl NavBarComponent {
    /// The rows the bar covers inside `area`.
    pub fn bar_area(area: Rect) -> Rect {
        Rect::new(area.x, area.y, area.width, area.height.min(NAV_BAR_HEIGHT))
    }

    fn effect_for(target: &NavTarget) -> Effect {
        match target {
            NavTarget::Brand => Effect::GoTo(SectionId::new("home")),
            NavTarget::Section(id) => Effect::GoTo(id.clone()),
            NavTarget::HireMe => Effect::GoTo(SectionId::new("contact")),
            NavTarget::MenuButton => Effect::ToggleMenu,
        }
    }
}

impl Component for NavBarComponent {
    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        app.nav_bar
            .target_at(mouse.column, mouse.row)
            .map(|target| vec![Self::effect_for(target)])
            .unwrap_or_default()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let snapshot = app.navigation();
        if !snapshot.nav_visible {
            app.nav_bar.clear();
            return;
        }
        let area = Self::bar_area(area);
        let theme = &*app.theme;
        let layout = layout_targets(area, app.brand(), app.registry(), app.is_narrow());

        frame.render_widget(Clear, area);
        frame.render_widget(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(theme.border_style())
                .style(th::panel_style(theme)),
            area,
        );
        for (target, rect) in layout.targets.iter().zip(&layout.areas) {
            let span = match target {
                NavTarget::Brand => Span::styled(app.brand().to_string(), theme.accent_emphasis_style()),
                NavTarget::Section(id) => {
                    let label = app.registry().get(id.as_str()).map(|section| section.label.clone()).unwrap_or_default();
                    Span::styled(label, th::nav_item_style(theme, snapshot.is_active(id.as_str())))
                }
                NavTarget::HireMe => Span::styled(HIRE_ME_LABEL, th::button_primary_style(theme)),
                NavTarget::MenuButton => Span::styled(MENU_BUTTON_LABEL, th::button_secondary_style(theme, snapshot.menu_open)),
            };
            frame.render_widget(Paragraph::new(Line::from(span)), *rect);
        }

        app.nav_bar.last_area = area;
        app.nav_bar.layout = layout;
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn targets_map_to_navigation_effects() {
        assert_eq!(NavBarComponent::effect_for(&NavTarget::Brand), Effect::GoTo(SectionId::new("home")));
        assert_eq!(NavBarComponent::effect_for(&NavTarget::HireMe), Effect::GoTo(SectionId::new("contact")));
        assert_eq!(NavBarComponent::effect_for(&NavTarget::MenuButton), Effect::ToggleMenu);
        assert_eq!(
            NavBarComponent::effect_for(&NavTarget::Section(SectionId::new("skills"))),
            Effect::GoTo(SectionId::new("skills"))
        );
    }

    #[test]
    fn clicks_only_land_on_recorded_targets() {
        let mut app = crate::app::test_app();
        let mut component = NavBarComponent::default();
        assert!(component.handle_mouse_events(&mut app, click(2, 1)).is_empty());

        app.nav_bar.last_area = Rect::new(0, 0, 120, NAV_BAR_HEIGHT);
        app.nav_bar.layout = layout_targets(app.nav_bar.last_area, "Prakhar", app.registry(), false);
        assert_eq!(
            component.handle_mouse_events(&mut app, click(2, 1)),
            vec![Effect::GoTo(SectionId::new("home"))]
        );
    }
}
