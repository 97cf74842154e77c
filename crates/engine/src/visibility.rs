//! Visibility observer: decides which single section the reader is looking at.
//!
//! A region is *intersecting* when at least `threshold` of its height lies
//! inside the viewport band (the viewport minus the configured top and
//! bottom margins). The observer remembers the last flag per region and,
//! on each measurement, emits an [`IntersectionEntry`] for every region whose
//! flag flipped. Entries are applied in delivery order and every intersecting
//! entry overwrites the active section, so the most recent transition wins.
//! Overlap size is never used to rank regions.

use std::collections::HashMap;

use folio_types::{SectionId, SectionRegistry};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::geometry::{PageLayout, RootMargins, intersection_ratio};

/// Minimum fraction of a region that must sit inside the band.
pub const DEFAULT_THRESHOLD: f64 = 0.3;
/// Fraction of the viewport excluded from the band at the top and at the bottom.
pub const DEFAULT_ROOT_MARGIN: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisibilityConfig {
    pub threshold: f64,
    pub root_margins: RootMargins,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            root_margins: RootMargins::symmetric(DEFAULT_ROOT_MARGIN),
        }
    }
}

/// Notification that a region crossed the visibility threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry {
    pub id: SectionId,
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl IntersectionEntry {
    pub fn entering(id: impl AsRef<str>) -> Self {
        Self {
            id: SectionId::new(id),
            is_intersecting: true,
            ratio: 1.0,
        }
    }

    pub fn leaving(id: impl AsRef<str>) -> Self {
        Self {
            id: SectionId::new(id),
            is_intersecting: false,
            ratio: 0.0,
        }
    }
}

/// Sole writer of the active section.
#[derive(Debug, Clone)]
pub struct VisibilityObserver {
    config: VisibilityConfig,
    registry: SectionRegistry,
    intersecting: HashMap<SectionId, bool>,
    active: Option<SectionId>,
    degraded: bool,
}

impl VisibilityObserver {
    pub fn new(registry: SectionRegistry, config: VisibilityConfig) -> Self {
        Self {
            config,
            registry,
            intersecting: HashMap::new(),
            active: None,
            degraded: false,
        }
    }

    /// The active section, `None` until the first intersecting entry.
    pub fn active(&self) -> Option<&SectionId> {
        self.active.as_ref()
    }

    pub fn config(&self) -> &VisibilityConfig {
        &self.config
    }

    /// Whether the last measurement attempt found no measuring capability.
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    pub fn is_intersecting(&self, id: &str) -> bool {
        self.intersecting.get(id).copied().unwrap_or(false)
    }

    /// Measures every registered region and returns the entries whose
    /// intersecting flag changed, in registry order. Regions missing from
    /// the layout are not observed.
    pub fn measure(&mut self, layout: &PageLayout) -> Vec<IntersectionEntry> {
        self.degraded = false;
        let band = layout.viewport.band(self.config.root_margins);
        let mut entries = Vec::new();
        for section in self.registry.iter() {
            let Some(bounds) = layout.region(section.id.as_str()) else {
                continue;
            };
            let ratio = intersection_ratio(&bounds, &band);
            let is_intersecting = bounds.height() > 0.0 && ratio >= self.config.threshold;
            let previous = self.intersecting.insert(section.id.clone(), is_intersecting).unwrap_or(false);
            if previous != is_intersecting {
                entries.push(IntersectionEntry {
                    id: section.id.clone(),
                    is_intersecting,
                    ratio,
                });
            }
        }
        entries
    }

    /// Applies a batch of entries in order. Intersecting entries overwrite
    /// the active section; leaving entries never clear it. Entries naming
    /// unregistered sections are ignored.
    pub fn deliver(&mut self, entries: &[IntersectionEntry]) {
        for entry in entries {
            let Some(section) = self.registry.get(entry.id.as_str()) else {
                debug!(section = %entry.id, "ignoring intersection entry for unregistered section");
                continue;
            };
            self.intersecting.insert(section.id.clone(), entry.is_intersecting);
            if entry.is_intersecting {
                if self.active.as_ref() != Some(&section.id) {
                    debug!(section = %section.id, ratio = entry.ratio, "active section changed");
                }
                self.active = Some(section.id.clone());
            }
        }
    }

    /// Measures and applies in one step; returns the active section.
    pub fn observe(&mut self, layout: &PageLayout) -> Option<&SectionId> {
        let entries = self.measure(layout);
        self.deliver(&entries);
        self.active()
    }

    /// Records that the host could not measure regions. State is left as is.
    pub fn measurement_unavailable(&mut self) {
        if !self.degraded {
            debug!("region measurement unavailable; visibility observer paused");
        }
        self.degraded = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{RegionBounds, Viewport};

    fn observer() -> VisibilityObserver {
        VisibilityObserver::new(SectionRegistry::portfolio(), VisibilityConfig::default())
    }

    /// Seven 50-row sections stacked from the top of the page.
    fn stacked_layout(offset: f64, viewport_height: f64) -> PageLayout {
        let regions = SectionRegistry::portfolio()
            .iter()
            .enumerate()
            .map(|(index, section)| (section.id.clone(), RegionBounds::from_height(index as f64 * 50.0, 50.0)))
            .collect();
        PageLayout::new(Viewport::new(offset, viewport_height), regions)
    }

    #[test]
    fn starts_without_an_active_section() {
        assert_eq!(observer().active(), None);
    }

    #[test]
    fn most_recent_intersecting_entry_wins() {
        let mut observer = observer();
        observer.deliver(&[IntersectionEntry::entering("about")]);
        observer.deliver(&[IntersectionEntry::entering("skills"), IntersectionEntry::entering("projects")]);
        assert_eq!(observer.active().map(SectionId::as_str), Some("projects"));
    }

    #[test]
    fn leaving_entries_never_clear_the_active_section() {
        let mut observer = observer();
        observer.deliver(&[IntersectionEntry::entering("about")]);
        observer.deliver(&[IntersectionEntry::leaving("about"), IntersectionEntry::leaving("projects")]);
        assert_eq!(observer.active().map(SectionId::as_str), Some("about"));
    }

    #[test]
    fn leaving_entry_before_any_intersection_keeps_the_sentinel() {
        let mut observer = observer();
        observer.deliver(&[IntersectionEntry::leaving("home")]);
        assert_eq!(observer.active(), None);
    }

    #[test]
    fn unregistered_entries_are_ignored() {
        let mut observer = observer();
        observer.deliver(&[IntersectionEntry::entering("home"), IntersectionEntry::entering("blog")]);
        assert_eq!(observer.active().map(SectionId::as_str), Some("home"));
    }

    #[test]
    fn measuring_the_top_of_the_page_activates_home() {
        let mut observer = observer();
        // Band is rows 20..80; home (0..50) has 30/50 inside, about (50..100) 30/50.
        let active = observer.observe(&stacked_layout(0.0, 100.0)).cloned();
        // Both transition in the same batch; registry order puts about last.
        assert_eq!(active.as_ref().map(SectionId::as_str), Some("about"));
        assert!(observer.is_intersecting("home"));
        assert!(observer.is_intersecting("about"));
    }

    #[test]
    fn only_transitions_are_reported() {
        let mut observer = observer();
        let first = observer.measure(&stacked_layout(0.0, 50.0));
        assert!(!first.is_empty());
        let second = observer.measure(&stacked_layout(0.0, 50.0));
        assert!(second.is_empty());
    }

    #[test]
    fn re_entering_region_becomes_active_again() {
        let mut observer = observer();
        // Band rows 10..40: home 30/50 = 0.6.
        observer.observe(&stacked_layout(0.0, 50.0));
        assert_eq!(observer.active().map(SectionId::as_str), Some("home"));

        // Band rows 40..70: home 10/50 = 0.2 (leaves), about 20/50 = 0.4 (enters).
        observer.observe(&stacked_layout(30.0, 50.0));
        assert_eq!(observer.active().map(SectionId::as_str), Some("about"));

        // Band rows 32..62: home 18/50 = 0.36 (enters), about 12/50 = 0.24 (leaves).
        observer.observe(&stacked_layout(22.0, 50.0));
        assert_eq!(observer.active().map(SectionId::as_str), Some("home"));
    }

    #[test]
    fn larger_overlap_does_not_outrank_latest_transition() {
        let mut observer = observer();
        // Band rows 20..80: home and about both enter; about is last.
        observer.observe(&stacked_layout(0.0, 100.0));
        // Band rows 70..130: home leaves, about stays, projects enters.
        observer.observe(&stacked_layout(50.0, 100.0));
        assert_eq!(observer.active().map(SectionId::as_str), Some("projects"));

        // Band rows 45..105: about sits fully inside but never transitioned;
        // projects drops to 5/50 and leaves. Active stays on projects.
        let entries = observer.measure(&stacked_layout(25.0, 100.0));
        assert_eq!(entries, vec![IntersectionEntry {
            id: SectionId::new("projects"),
            is_intersecting: false,
            ratio: 0.1,
        }]);
        observer.deliver(&entries);
        assert_eq!(observer.active().map(SectionId::as_str), Some("projects"));
    }

    fn single_region_layout(top: f64) -> PageLayout {
        PageLayout::new(Viewport::new(0.0, 100.0), vec![(SectionId::new("about"), RegionBounds::from_height(top, 50.0))])
    }

    #[test]
    fn region_exactly_at_threshold_intersects() {
        let mut observer = observer();
        // Band rows 20..80; rows 65..80 of 65..115 is 15/50 = 0.3.
        let entries = observer.measure(&single_region_layout(65.0));
        assert_eq!(entries.len(), 1);
        assert!(entries[0].is_intersecting);
        assert_eq!(entries[0].ratio, DEFAULT_THRESHOLD);
        observer.deliver(&entries);
        assert_eq!(observer.active().map(SectionId::as_str), Some("about"));
    }

    #[test]
    fn region_just_below_threshold_does_not_intersect() {
        let mut observer = observer();
        // 14.5/50 = 0.29.
        let entries = observer.measure(&single_region_layout(65.5));
        assert!(entries.is_empty());
        assert!(!observer.is_intersecting("about"));
        assert_eq!(observer.active(), None);
    }

    #[test]
    fn gap_between_sections_retains_last_active() {
        let mut observer = observer();
        observer.observe(&stacked_layout(0.0, 50.0));
        // A 5-row viewport yields a 3-row band; no 50-row region reaches 30%.
        observer.observe(&stacked_layout(120.0, 5.0));
        assert_eq!(observer.active().map(SectionId::as_str), Some("home"));
    }

    #[test]
    fn degraded_measurement_keeps_initial_state() {
        let mut observer = observer();
        observer.measurement_unavailable();
        observer.measurement_unavailable();
        assert!(observer.is_degraded());
        assert_eq!(observer.active(), None);

        observer.observe(&stacked_layout(0.0, 50.0));
        assert!(!observer.is_degraded());
    }
}
