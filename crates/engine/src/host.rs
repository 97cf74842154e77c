//! Capabilities the navigation core consumes from the view layer.

use folio_types::SectionId;

use crate::geometry::PageLayout;

/// A scrollable view that can report where its regions are and perform an
/// animated scroll.
///
/// Measurement is optional: hosts that cannot measure return `None` from
/// [`ScrollHost::layout`] and the core degrades instead of failing.
pub trait ScrollHost {
    /// Current scroll offset of the viewport.
    fn scroll_offset(&self) -> f64;

    /// Starts an animated scroll towards `offset`. Fire-and-forget.
    fn smooth_scroll_to(&mut self, offset: f64);

    /// Destination of an in-flight animated scroll, if any.
    fn scroll_target(&self) -> Option<f64> {
        None
    }

    /// Offset the host would actually settle at when asked for `offset`.
    fn clamp_offset(&self, offset: f64) -> f64 {
        offset.max(0.0)
    }

    /// Viewport and region bounds, or `None` when measuring is unsupported.
    fn layout(&self) -> Option<PageLayout>;

    /// Top of the given region, or `None` when unmeasured or absent.
    fn region_top(&self, id: &SectionId) -> Option<f64> {
        self.layout().and_then(|layout| layout.region(id.as_str())).map(|bounds| bounds.top)
    }
}
