//! # Folio Engine
//!
//! Section visibility and navigation for a single scrolling page.
//!
//! ## Components
//!
//! - **`visibility`**: decides which section is active from region/viewport
//!   geometry. The most recent intersecting transition wins.
//! - **`scroll_direction`**: hides the navigation bar while moving down past
//!   a threshold and shows it on any other movement.
//! - **`dispatcher`**: `go_to(section)` closes the menu and asks the host for
//!   an animated scroll.
//! - **`controller`**: owns the three and exposes a [`NavigationSnapshot`].
//! - **`bus`**: host event fan-out with drop-released subscriptions.
//!
//! Hosts plug in through the [`ScrollHost`] trait.
//!
//! ## Usage
//!
//! ```rust
//! use folio_engine::{HostEvent, NavigationController, NavigationSettings, PageLayout, RegionBounds, Viewport};
//! use folio_types::{SectionId, SectionRegistry};
//!
//! let mut controller = NavigationController::new(SectionRegistry::portfolio(), &NavigationSettings::default());
//! let layout = PageLayout::new(
//!     Viewport::new(0.0, 40.0),
//!     vec![(SectionId::new("home"), RegionBounds::new(0.0, 40.0))],
//! );
//! controller.handle(HostEvent::Measured(layout));
//! controller.handle(HostEvent::Scrolled(0.0));
//!
//! let snapshot = controller.snapshot();
//! assert!(snapshot.is_active("home"));
//! assert!(snapshot.nav_visible);
//! ```

pub mod bus;
pub mod controller;
pub mod dispatcher;
pub mod filter;
pub mod geometry;
pub mod host;
pub mod loading;
pub mod scroll_direction;
pub mod settings;
pub mod smooth_scroll;
pub mod visibility;

pub use bus::{EventBus, Subscription};
pub use controller::{HostEvent, MountedController, NavigationController, NavigationSnapshot};
pub use dispatcher::{GoToOutcome, MenuState, NavigationDispatcher};
pub use filter::{ProjectFilter, UnknownFilter};
pub use geometry::{PageLayout, RegionBounds, RootMargins, Viewport, intersection_ratio};
pub use host::ScrollHost;
pub use loading::{LoadingProgress, LoadingSchedule};
pub use scroll_direction::{DEFAULT_HIDE_THRESHOLD, ScrollDirectionTracker};
pub use settings::NavigationSettings;
pub use smooth_scroll::SmoothScroll;
pub use visibility::{DEFAULT_ROOT_MARGIN, DEFAULT_THRESHOLD, IntersectionEntry, VisibilityConfig, VisibilityObserver};
