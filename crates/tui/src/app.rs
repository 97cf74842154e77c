//! Application state and update logic for the Folio TUI.
//!
//! `App` owns the portfolio, the page host and the mounted navigation
//! controller. Components read from it while rendering and hand back
//! [`Effect`]s; the runtime applies those effects here. Scroll changes reach
//! the controller as [`HostEvent`]s published on the event bus.

use std::time::{Duration, Instant};

use chrono::Datelike;
use folio_engine::{
    EventBus, GoToOutcome, HostEvent, LoadingProgress, LoadingSchedule, MountedController, NavigationController, NavigationSnapshot,
    ProjectFilter, ScrollHost,
};
use folio_types::{Portfolio, RegistryError, SectionId, SectionRegistry};
use folio_util::{Settings, UserPreferences};
use ratatui::layout::Rect;
use rand::Rng;
use tracing::{debug, info, warn};

use crate::page::{PageHost, content_area, split_screen};
use crate::ui::components::menu::MenuOverlayState;
use crate::ui::components::nav_bar::NavBarState;
use crate::ui::components::page::sections::{PageContext, build_document};
use crate::ui::theme::{LoadedTheme, Theme, ThemeDefinition, catalog};

/// Messages delivered to the app by the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    Tick,
    Resize(u16, u16),
}

/// Requests produced by components and applied by [`App::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    GoTo(SectionId),
    ToggleMenu,
    CloseMenu,
    ScrollLines(i32),
    ScrollPages(i32),
    ScrollToTop,
    ScrollToBottom,
    SetFilter(ProjectFilter),
    CycleFilter,
    CycleTheme,
    Quit,
}

/// The loading screen shown before the page.
#[derive(Debug, Clone)]
pub struct Splash {
    progress: LoadingProgress,
    schedule: LoadingSchedule,
    started: Instant,
    last_step: Instant,
}

impl Splash {
    pub fn new(schedule: LoadingSchedule, now: Instant) -> Self {
        Self {
            progress: LoadingProgress::default(),
            schedule,
            started: now,
            last_step: now,
        }
    }

    pub fn progress(&self) -> &LoadingProgress {
        &self.progress
    }

    /// Steps the progress once per elapsed schedule tick. Returns `true` once
    /// the splash has been shown for its full duration.
    pub fn advance<R: Rng + ?Sized>(&mut self, now: Instant, rng: &mut R) -> bool {
        let tick = self.schedule.tick();
        while now.saturating_duration_since(self.last_step) >= tick {
            self.progress.step(rng);
            self.last_step += tick;
        }
        self.schedule.is_finished(now.saturating_duration_since(self.started))
    }
}

#[derive(Debug, Clone)]
pub enum Phase {
    Loading(Splash),
    Ready,
}

#[derive(Debug)]
pub struct App {
    pub portfolio: Portfolio,
    pub settings: Settings,
    pub theme: Box<dyn Theme>,
    pub theme_definition: &'static ThemeDefinition,
    pub page: PageHost,
    pub project_filter: ProjectFilter,
    pub phase: Phase,
    pub nav_bar: NavBarState,
    pub menu: MenuOverlayState,
    pub should_quit: bool,
    size: (u16, u16),
    year: i32,
    bus: EventBus<HostEvent>,
    navigation: MountedController,
    preferences: UserPreferences,
}

impl App {
    pub fn new(
        portfolio: Portfolio,
        settings: Settings,
        preferences: UserPreferences,
        theme: LoadedTheme,
        show_splash: bool,
        size: (u16, u16),
    ) -> Result<Self, RegistryError> {
        let bus = EventBus::new();
        let navigation = NavigationController::new(SectionRegistry::try_portfolio()?, &settings.navigation).mount(&bus);
        let phase = if show_splash {
            Phase::Loading(Splash::new(settings.splash, Instant::now()))
        } else {
            Phase::Ready
        };
        let mut app = Self {
            page: PageHost::new(settings.navigation.smooth_scroll_speed),
            portfolio,
            settings,
            theme: theme.theme,
            theme_definition: theme.definition,
            project_filter: ProjectFilter::default(),
            phase,
            nav_bar: NavBarState::default(),
            menu: MenuOverlayState::default(),
            should_quit: false,
            size,
            year: chrono::Local::now().year(),
            bus,
            navigation,
            preferences,
        };
        app.relayout();
        Ok(app)
    }

    /// Handles a runtime message and returns follow-up effects.
    pub fn update(&mut self, msg: &Msg) -> Vec<Effect> {
        match msg {
            Msg::Tick => self.tick(Instant::now()),
            Msg::Resize(width, height) => {
                if self.size != (*width, *height) {
                    self.size = (*width, *height);
                    self.relayout();
                }
            }
        }
        Vec::new()
    }

    pub fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::GoTo(section_id) => {
                let outcome = self.navigation.controller_mut().go_to(section_id.as_str(), &mut self.page);
                if matches!(outcome, GoToOutcome::Unmeasured) {
                    warn!(section = %section_id, "cannot navigate before the page is measured");
                }
            }
            Effect::ToggleMenu => {
                if self.navigation.controller_mut().toggle_menu() {
                    self.menu.cursor = self.active_index().unwrap_or(0);
                }
            }
            Effect::CloseMenu => self.navigation.controller_mut().close_menu(),
            Effect::ScrollLines(delta) => {
                self.page.scroll_lines(delta);
                self.publish_scroll();
            }
            Effect::ScrollPages(delta) => {
                self.page.scroll_pages(delta);
                self.publish_scroll();
            }
            Effect::ScrollToTop => {
                self.page.scroll_to_top();
                self.publish_scroll();
            }
            Effect::ScrollToBottom => {
                self.page.scroll_to_bottom();
                self.publish_scroll();
            }
            Effect::SetFilter(filter) => self.set_filter(filter),
            Effect::CycleFilter => self.set_filter(self.project_filter.next()),
            Effect::CycleTheme => self.cycle_theme(),
            Effect::Quit => self.should_quit = true,
        }
    }

    pub fn navigation(&self) -> NavigationSnapshot {
        self.navigation.controller().snapshot()
    }

    pub fn registry(&self) -> &SectionRegistry {
        self.navigation.controller().registry()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading(_))
    }

    /// Whether the navigation bar collapses into the menu button.
    pub fn is_narrow(&self) -> bool {
        self.size.0 < self.settings.layout.narrow_breakpoint
    }

    /// Whether the runtime should tick at animation speed.
    pub fn needs_animation(&self) -> bool {
        self.is_loading() || self.page.is_animating()
    }

    /// How often the runtime should tick right now, if at all.
    pub fn tick_interval(&self) -> Option<Duration> {
        match &self.phase {
            Phase::Loading(_) => Some(self.settings.splash.tick()),
            Phase::Ready if self.page.is_animating() => Some(ANIMATION_FRAME),
            Phase::Ready => None,
        }
    }

    /// First word of the portfolio name, shown as the navigation brand.
    pub fn brand(&self) -> &str {
        self.portfolio.name.split_whitespace().next().unwrap_or("Home")
    }

    pub fn active_index(&self) -> Option<usize> {
        let snapshot = self.navigation();
        snapshot.active.and_then(|active| self.registry().position(active.as_str()))
    }

    /// Releases the bus subscription.
    pub fn shutdown(self) {
        let controller = self.navigation.unmount();
        debug!(active = ?controller.active(), "navigation released");
    }

    fn tick(&mut self, now: Instant) {
        match &mut self.phase {
            Phase::Loading(splash) => {
                if splash.advance(now, &mut rand::thread_rng()) {
                    info!("splash finished");
                    self.phase = Phase::Ready;
                }
            }
            Phase::Ready => {
                if self.page.tick() {
                    self.publish_scroll();
                }
            }
        }
    }

    fn set_filter(&mut self, filter: ProjectFilter) {
        if filter == self.project_filter {
            return;
        }
        debug!(%filter, "project filter changed");
        self.project_filter = filter;
        self.relayout();
    }

    fn cycle_theme(&mut self) {
        let next = catalog::next_after(self.theme_definition.id, self.theme_definition.is_ansi_fallback);
        if next.id == self.theme_definition.id {
            return;
        }
        info!(theme = next.id, "theme changed");
        self.theme = next.build();
        self.theme_definition = next;
        if let Err(error) = self.preferences.set_preferred_theme(Some(next.id.to_string())) {
            warn!(%error, "failed to persist theme preference");
        }
        self.relayout();
    }

    /// Rebuilds the page for the current size, filter and theme.
    fn relayout(&mut self) {
        let (page_area, _) = split_screen(Rect::new(0, 0, self.size.0, self.size.1));
        let context = PageContext {
            width: content_area(page_area).width,
            viewport_height: page_area.height,
            filter: self.project_filter,
            year: self.year,
        };
        let document = build_document(&self.portfolio, self.navigation.controller().registry(), self.theme.as_ref(), context);
        debug!(rows = document.height(), width = context.width, "page laid out");
        self.page.set_document(document, page_area.height);
        self.publish_scroll();
    }

    /// Reports the current offset and geometry to the controller.
    fn publish_scroll(&mut self) {
        self.bus.publish(HostEvent::Scrolled(self.page.scroll_offset()));
        let measurement = match self.page.layout() {
            Some(layout) => HostEvent::Measured(layout),
            None => HostEvent::MeasurementUnavailable,
        };
        self.bus.publish(measurement);
        self.navigation.pump();
    }

    #[cfg(test)]
    pub(crate) fn preferences(&self) -> &UserPreferences {
        &self.preferences
    }
}

/// Tick period while a smooth scroll is running.
pub const ANIMATION_FRAME: Duration = Duration::from_millis(16);

#[cfg(test)]
pub(crate) fn test_app() -> App {
    let theme = LoadedTheme::from_definition(catalog::default_truecolor());
    App::new(
        Portfolio::embedded().expect("embedded"),
        Settings::default(),
        UserPreferences::ephemeral(),
        theme,
        false,
        (120, 40),
    )
    .expect("portfolio sections are valid")
}
