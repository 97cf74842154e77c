//! Navigation command dispatcher: `go_to(section)`.
//!
//! The dispatcher closes the menu overlay and asks the host for an animated
//! scroll. It never touches the active section; the visibility observer picks
//! the new section up once the target region scrolls into the band.

use folio_types::SectionRegistry;
use tracing::debug;

use crate::host::ScrollHost;

/// Offsets closer than this are treated as the same scroll position.
const SAME_OFFSET_EPSILON: f64 = 0.5;

/// What a `go_to` call did. Callers are free to ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoToOutcome {
    /// A new animated scroll was requested.
    Scrolled,
    /// The viewport is already at (or heading to) the target.
    AlreadyThere,
    /// The id is not registered; nothing besides closing the menu happened.
    UnknownSection,
    /// The host could not measure the target region.
    Unmeasured,
}

/// Open/closed state of the menu overlay used on narrow layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }
}

#[derive(Debug, Clone)]
pub struct NavigationDispatcher {
    registry: SectionRegistry,
}

impl NavigationDispatcher {
    pub fn new(registry: SectionRegistry) -> Self {
        Self { registry }
    }

    /// Scrolls the host to the top of `section_id` and closes the menu.
    ///
    /// Unknown ids only close the menu. Re-issuing the destination of an
    /// in-flight (or finished) scroll requests nothing new.
    pub fn go_to<H: ScrollHost + ?Sized>(&self, section_id: &str, host: &mut H, menu: &mut MenuState) -> GoToOutcome {
        menu.close();

        let Some(section) = self.registry.get(section_id) else {
            debug!(section = section_id, "go_to ignored: unknown section");
            return GoToOutcome::UnknownSection;
        };
        let Some(top) = host.region_top(&section.id) else {
            debug!(section = %section.id, "go_to ignored: region not measured");
            return GoToOutcome::Unmeasured;
        };

        let destination = host.clamp_offset(top);
        let heading_to = host.scroll_target().unwrap_or_else(|| host.scroll_offset());
        if (heading_to - destination).abs() < SAME_OFFSET_EPSILON {
            debug!(section = %section.id, destination, "go_to: already at target");
            return GoToOutcome::AlreadyThere;
        }

        debug!(section = %section.id, from = host.scroll_offset(), destination, "go_to: smooth scroll");
        host.smooth_scroll_to(destination);
        GoToOutcome::Scrolled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{PageLayout, RegionBounds, Viewport};

    /// Host that jumps straight to the requested offset and counts requests.
    #[derive(Debug, Default)]
    struct RecordingHost {
        offset: f64,
        requests: Vec<f64>,
        unmeasurable: bool,
    }

    impl ScrollHost for RecordingHost {
        fn scroll_offset(&self) -> f64 {
            self.offset
        }

        fn smooth_scroll_to(&mut self, offset: f64) {
            self.requests.push(offset);
            self.offset = offset;
        }

        fn clamp_offset(&self, offset: f64) -> f64 {
            offset.clamp(0.0, 300.0)
        }

        fn layout(&self) -> Option<PageLayout> {
            if self.unmeasurable {
                return None;
            }
            let regions = SectionRegistry::portfolio()
                .iter()
                .enumerate()
                .map(|(index, section)| (section.id.clone(), RegionBounds::from_height(index as f64 * 60.0, 60.0)))
                .collect();
            Some(PageLayout::new(Viewport::new(self.offset, 120.0), regions))
        }
    }

    fn dispatcher() -> NavigationDispatcher {
        NavigationDispatcher::new(SectionRegistry::portfolio())
    }

    #[test]
    fn scrolls_to_the_region_top_and_closes_the_menu() {
        let mut host = RecordingHost::default();
        let mut menu = MenuState::default();
        menu.open();

        let outcome = dispatcher().go_to("skills", &mut host, &mut menu);

        assert_eq!(outcome, GoToOutcome::Scrolled);
        assert_eq!(host.requests, vec![240.0]);
        assert!(!menu.is_open());
    }

    #[test]
    fn unknown_section_only_closes_the_menu() {
        let mut host = RecordingHost {
            offset: 42.0,
            ..RecordingHost::default()
        };
        let mut menu = MenuState::default();
        menu.open();

        let outcome = dispatcher().go_to("nonexistent", &mut host, &mut menu);

        assert_eq!(outcome, GoToOutcome::UnknownSection);
        assert!(host.requests.is_empty());
        assert_eq!(host.offset, 42.0);
        assert!(!menu.is_open());
    }

    #[test]
    fn repeated_go_to_requests_a_single_scroll() {
        let mut host = RecordingHost::default();
        let mut menu = MenuState::default();
        let dispatcher = dispatcher();

        assert_eq!(dispatcher.go_to("about", &mut host, &mut menu), GoToOutcome::Scrolled);
        assert_eq!(dispatcher.go_to("about", &mut host, &mut menu), GoToOutcome::AlreadyThere);
        assert_eq!(host.requests, vec![60.0]);
        assert_eq!(host.offset, 60.0);
    }

    #[test]
    fn destination_is_clamped_by_the_host() {
        let mut host = RecordingHost::default();
        let mut menu = MenuState::default();
        let dispatcher = dispatcher();

        dispatcher.go_to("contact", &mut host, &mut menu);
        assert_eq!(host.requests, vec![300.0]);
        // Contact starts at 360 but the host can only reach 300.
        assert_eq!(dispatcher.go_to("contact", &mut host, &mut menu), GoToOutcome::AlreadyThere);
    }

    #[test]
    fn unmeasurable_host_is_left_alone() {
        let mut host = RecordingHost {
            unmeasurable: true,
            ..RecordingHost::default()
        };
        let mut menu = MenuState::default();
        menu.open();

        assert_eq!(dispatcher().go_to("about", &mut host, &mut menu), GoToOutcome::Unmeasured);
        assert!(host.requests.is_empty());
        assert!(!menu.is_open());
    }

    #[test]
    fn menu_toggle_flips_state() {
        let mut menu = MenuState::default();
        assert!(menu.toggle());
        assert!(!menu.toggle());
    }
}
