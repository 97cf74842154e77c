//! Navigation controller: composes the visibility observer, the
//! scroll-direction tracker and the dispatcher behind a single owner.
//!
//! The controller is the only place navigation state lives. Rendering reads it
//! through [`NavigationSnapshot`]; hosts feed it [`HostEvent`]s either directly
//! via [`NavigationController::handle`] or through an [`EventBus`] after
//! [`NavigationController::mount`].

use folio_types::{RegistryError, Section, SectionId, SectionRegistry};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::debug;

use crate::bus::{EventBus, Subscription};
use crate::dispatcher::{GoToOutcome, MenuState, NavigationDispatcher};
use crate::geometry::PageLayout;
use crate::host::ScrollHost;
use crate::scroll_direction::ScrollDirectionTracker;
use crate::settings::NavigationSettings;
use crate::visibility::{IntersectionEntry, VisibilityObserver};

/// Observations pushed by the view layer.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    /// The viewport scrolled to the given offset.
    Scrolled(f64),
    /// Region bounds were (re)measured.
    Measured(PageLayout),
    /// The host computed intersection transitions itself.
    Intersections(Vec<IntersectionEntry>),
    /// The host cannot measure regions.
    MeasurementUnavailable,
}

/// Read-only view of navigation state for the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationSnapshot {
    pub active: Option<SectionId>,
    pub nav_visible: bool,
    pub menu_open: bool,
}

impl NavigationSnapshot {
    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_ref().is_some_and(|active| active == id)
    }
}

#[derive(Debug, Clone)]
pub struct NavigationController {
    registry: SectionRegistry,
    observer: VisibilityObserver,
    tracker: ScrollDirectionTracker,
    dispatcher: NavigationDispatcher,
    menu: MenuState,
}

impl NavigationController {
    pub fn new(registry: SectionRegistry, settings: &NavigationSettings) -> Self {
        Self {
            observer: VisibilityObserver::new(registry.clone(), settings.visibility),
            tracker: ScrollDirectionTracker::new(settings.hide_threshold),
            dispatcher: NavigationDispatcher::new(registry.clone()),
            menu: MenuState::default(),
            registry,
        }
    }

    /// Validates `sections` before building the controller.
    pub fn from_sections(sections: Vec<Section>, settings: &NavigationSettings) -> Result<Self, RegistryError> {
        Ok(Self::new(SectionRegistry::new(sections)?, settings))
    }

    pub fn handle(&mut self, event: HostEvent) {
        match event {
            HostEvent::Scrolled(offset) => {
                let was_visible = self.tracker.is_visible();
                let visible = self.tracker.sample(offset);
                if was_visible != visible {
                    debug!(offset, visible, "navigation bar visibility changed");
                }
            }
            HostEvent::Measured(layout) => {
                self.observer.observe(&layout);
            }
            HostEvent::Intersections(entries) => self.observer.deliver(&entries),
            HostEvent::MeasurementUnavailable => self.observer.measurement_unavailable(),
        }
    }

    pub fn go_to<H: ScrollHost + ?Sized>(&mut self, section_id: &str, host: &mut H) -> GoToOutcome {
        self.dispatcher.go_to(section_id, host, &mut self.menu)
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu.toggle()
    }

    pub fn close_menu(&mut self) {
        self.menu.close();
    }

    pub fn active(&self) -> Option<&SectionId> {
        self.observer.active()
    }

    pub fn nav_visible(&self) -> bool {
        self.tracker.is_visible()
    }

    pub fn menu_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn is_degraded(&self) -> bool {
        self.observer.is_degraded()
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    pub fn snapshot(&self) -> NavigationSnapshot {
        NavigationSnapshot {
            active: self.observer.active().cloned(),
            nav_visible: self.tracker.is_visible(),
            menu_open: self.menu.is_open(),
        }
    }

    /// Subscribes the controller to `bus`. The subscription is released when
    /// the returned handle is dropped or unmounted.
    pub fn mount(self, bus: &EventBus<HostEvent>) -> MountedController {
        let (subscription, receiver) = bus.subscribe();
        debug!(sections = self.registry.len(), "navigation controller mounted");
        MountedController {
            controller: self,
            receiver,
            subscription,
        }
    }
}

/// A controller listening on an event bus.
#[derive(Debug)]
pub struct MountedController {
    controller: NavigationController,
    receiver: UnboundedReceiver<HostEvent>,
    subscription: Subscription,
}

impl MountedController {
    /// Applies every event queued so far. Returns how many were applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.receiver.try_recv() {
            self.controller.handle(event);
            applied += 1;
        }
        applied
    }

    /// Waits for the next event and applies it. Returns `false` once the
    /// subscription is closed.
    pub async fn process_next(&mut self) -> bool {
        match self.receiver.recv().await {
            Some(event) => {
                self.controller.handle(event);
                true
            }
            None => false,
        }
    }

    pub fn controller(&self) -> &NavigationController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut NavigationController {
        &mut self.controller
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_active()
    }

    /// Releases the subscription and hands the controller back.
    pub fn unmount(self) -> NavigationController {
        let MountedController {
            controller, mut subscription, ..
        } = self;
        subscription.unsubscribe();
        debug!("navigation controller unmounted");
        controller
    }
}
