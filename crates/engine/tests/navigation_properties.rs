use folio_engine::{
    EventBus, GoToOutcome, HostEvent, IntersectionEntry, NavigationController, NavigationSettings, PageLayout, RegionBounds,
    ScrollHost, SmoothScroll, Viewport,
};
use folio_types::{RegistryError, SectionId, SectionRegistry};

/// A page of stacked sections scrolled by a [`SmoothScroll`] animator.
struct AnimatedPage {
    scroll: SmoothScroll,
    viewport_height: f64,
    regions: Vec<(SectionId, RegionBounds)>,
    scroll_requests: usize,
}

impl AnimatedPage {
    fn new(heights: &[f64], viewport_height: f64) -> Self {
        let registry = SectionRegistry::portfolio();
        let mut top = 0.0;
        let regions = registry
            .iter()
            .zip(heights)
            .map(|(section, height)| {
                let bounds = RegionBounds::from_height(top, *height);
                top = bounds.bottom;
                (section.id.clone(), bounds)
            })
            .collect::<Vec<_>>();
        let mut scroll = SmoothScroll::default();
        scroll.set_max((top - viewport_height).max(0.0));
        Self {
            scroll,
            viewport_height,
            regions,
            scroll_requests: 0,
        }
    }

    fn current_layout(&self) -> PageLayout {
        PageLayout::new(Viewport::new(self.scroll.offset(), self.viewport_height), self.regions.clone())
    }

    /// Runs the animation to completion, feeding every frame to the controller.
    fn settle(&mut self, controller: &mut NavigationController) {
        while self.scroll.tick() {
            controller.handle(HostEvent::Scrolled(self.scroll.offset()));
            controller.handle(HostEvent::Measured(self.current_layout()));
        }
    }
}

impl ScrollHost for AnimatedPage {
    fn scroll_offset(&self) -> f64 {
        self.scroll.offset()
    }

    fn smooth_scroll_to(&mut self, offset: f64) {
        self.scroll_requests += 1;
        self.scroll.scroll_to(offset);
    }

    fn scroll_target(&self) -> Option<f64> {
        Some(self.scroll.target())
    }

    fn clamp_offset(&self, offset: f64) -> f64 {
        self.scroll.clamp(offset)
    }

    fn layout(&self) -> Option<PageLayout> {
        Some(self.current_layout())
    }
}

fn controller() -> NavigationController {
    NavigationController::new(SectionRegistry::portfolio(), &NavigationSettings::default())
}

fn page() -> AnimatedPage {
    AnimatedPage::new(&[40.0; 7], 40.0)
}

#[test]
fn active_section_follows_the_most_recent_intersecting_entry() {
    let mut controller = controller();
    let batches = [
        vec![IntersectionEntry::entering("home")],
        vec![IntersectionEntry::leaving("home"), IntersectionEntry::entering("about")],
        vec![IntersectionEntry::leaving("about")],
        vec![IntersectionEntry::entering("projects"), IntersectionEntry::entering("about")],
    ];
    let expected = ["home", "about", "about", "about"];

    for (batch, expected) in batches.into_iter().zip(expected) {
        controller.handle(HostEvent::Intersections(batch));
        assert_eq!(controller.active().map(SectionId::as_str), Some(expected));
    }
}

#[test]
fn navigation_bar_follows_scroll_direction() {
    let mut controller = controller();
    let visibility: Vec<bool> = [0.0, 50.0, 90.0, 60.0, 120.0]
        .into_iter()
        .map(|offset| {
            controller.handle(HostEvent::Scrolled(offset));
            controller.nav_visible()
        })
        .collect();
    assert_eq!(visibility, vec![true, true, false, true, false]);
}

#[test]
fn unknown_target_changes_nothing_but_the_menu() {
    let mut controller = controller();
    let mut page = page();
    page.scroll.jump_to(100.0);
    controller.handle(HostEvent::Scrolled(100.0));
    controller.handle(HostEvent::Measured(page.current_layout()));
    let before = controller.snapshot();

    let outcome = controller.go_to("nonexistent", &mut page);

    assert_eq!(outcome, GoToOutcome::UnknownSection);
    assert_eq!(controller.snapshot(), before);
    assert_eq!(page.scroll_offset(), 100.0);
    assert_eq!(page.scroll_requests, 0);
}

#[test]
fn go_to_closes_the_menu_for_valid_and_invalid_targets() {
    for target in ["contact", "nonexistent"] {
        let mut controller = controller();
        let mut page = page();
        assert!(controller.toggle_menu());

        controller.go_to(target, &mut page);

        assert!(!controller.menu_open(), "menu stayed open after go_to({target})");
    }
}

#[test]
fn repeated_go_to_is_idempotent() {
    let mut controller = controller();
    let mut page = page();

    assert_eq!(controller.go_to("skills", &mut page), GoToOutcome::Scrolled);
    // Re-issued while the animation is in flight.
    assert_eq!(controller.go_to("skills", &mut page), GoToOutcome::AlreadyThere);
    page.settle(&mut controller);
    assert_eq!(controller.go_to("skills", &mut page), GoToOutcome::AlreadyThere);

    assert_eq!(page.scroll_requests, 1);
    assert_eq!(page.scroll_offset(), 160.0);
}

#[test]
fn observer_picks_up_the_destination_after_go_to() {
    let mut controller = controller();
    let mut page = page();
    controller.handle(HostEvent::Measured(page.current_layout()));
    assert_eq!(controller.active().map(SectionId::as_str), Some("home"));

    controller.go_to("startups", &mut page);
    // go_to never writes the active section itself.
    assert_eq!(controller.active().map(SectionId::as_str), Some("home"));

    page.settle(&mut controller);
    assert_eq!(controller.active().map(SectionId::as_str), Some("startups"));
}

#[test]
fn duplicate_section_ids_fail_at_construction() {
    let result = SectionRegistry::from_pairs(&[("home", "Home"), ("about", "About"), ("home", "Home again")]);
    assert!(matches!(result, Err(RegistryError::DuplicateId { ref id, .. }) if id == "home"));
}

#[test]
fn bus_events_stop_after_the_controller_is_dropped() {
    let bus = EventBus::new();
    {
        let mut mounted = controller().mount(&bus);
        bus.publish(HostEvent::Scrolled(300.0));
        mounted.pump();
        assert!(!mounted.controller().nav_visible());
    }
    assert_eq!(bus.subscriber_count(), 0);
    assert_eq!(bus.publish(HostEvent::Scrolled(0.0)), 0);
}
