//! Page geometry: region bounds, the viewport, and the band used for
//! visibility decisions.
//!
//! All values share the page's own coordinate system (terminal rows for the
//! TUI). Offsets grow downwards from the top of the page.

use folio_types::SectionId;
use serde::{Deserialize, Serialize};

/// Vertical extent of a region, `top` inclusive, `bottom` exclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl RegionBounds {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn from_height(top: f64, height: f64) -> Self {
        Self {
            top,
            bottom: top + height.max(0.0),
        }
    }

    pub fn height(&self) -> f64 {
        (self.bottom - self.top).max(0.0)
    }

    /// Length of the overlap between two extents; zero when disjoint.
    pub fn overlap(&self, other: &RegionBounds) -> f64 {
        let top = self.top.max(other.top);
        let bottom = self.bottom.min(other.bottom);
        (bottom - top).max(0.0)
    }
}

/// Fractions of the viewport height excluded from the top and bottom of the
/// visibility band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RootMargins {
    pub top: f64,
    pub bottom: f64,
}

impl RootMargins {
    pub const fn symmetric(fraction: f64) -> Self {
        Self {
            top: fraction,
            bottom: fraction,
        }
    }
}

/// The visible window onto the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Distance of the viewport top from the page top.
    pub offset: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(offset: f64, height: f64) -> Self {
        Self { offset, height }
    }

    pub fn bounds(&self) -> RegionBounds {
        RegionBounds::from_height(self.offset, self.height)
    }

    /// The viewport shrunk by the given margins. Margins that add up to the
    /// whole viewport or more collapse the band to zero height.
    pub fn band(&self, margins: RootMargins) -> RegionBounds {
        let height = self.height.max(0.0);
        let top = self.offset + height * margins.top.clamp(0.0, 1.0);
        let bottom = self.offset + height * (1.0 - margins.bottom.clamp(0.0, 1.0));
        RegionBounds::new(top, bottom.max(top))
    }
}

/// Fraction of `region` that lies inside `band`, in `0.0..=1.0`.
///
/// Zero-height regions report `0.0`.
pub fn intersection_ratio(region: &RegionBounds, band: &RegionBounds) -> f64 {
    let height = region.height();
    if height <= 0.0 {
        return 0.0;
    }
    (region.overlap(band) / height).clamp(0.0, 1.0)
}

/// A measured page: the viewport plus the bounds of every rendered section.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub viewport: Viewport,
    pub regions: Vec<(SectionId, RegionBounds)>,
}

impl PageLayout {
    pub fn new(viewport: Viewport, regions: Vec<(SectionId, RegionBounds)>) -> Self {
        Self { viewport, regions }
    }

    pub fn region(&self, id: &str) -> Option<RegionBounds> {
        self.regions.iter().find(|(section_id, _)| section_id == id).map(|(_, bounds)| *bounds)
    }

    /// Bottom of the lowest region.
    pub fn content_height(&self) -> f64 {
        self.regions.iter().map(|(_, bounds)| bounds.bottom).fold(0.0, f64::max)
    }

    /// Largest offset the viewport can scroll to.
    pub fn max_offset(&self) -> f64 {
        (self.content_height() - self.viewport.height).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_excludes_top_and_bottom_fifths() {
        let viewport = Viewport::new(100.0, 50.0);
        let band = viewport.band(RootMargins::symmetric(0.2));
        assert_eq!(band, RegionBounds::new(110.0, 140.0));
    }

    #[test]
    fn overlapping_margins_collapse_the_band() {
        let viewport = Viewport::new(0.0, 10.0);
        let band = viewport.band(RootMargins { top: 0.7, bottom: 0.6 });
        assert_eq!(band.height(), 0.0);
    }

    #[test]
    fn ratio_is_relative_to_region_height() {
        let band = RegionBounds::new(10.0, 30.0);
        assert_eq!(intersection_ratio(&RegionBounds::new(20.0, 40.0), &band), 0.5);
        assert_eq!(intersection_ratio(&RegionBounds::new(12.0, 18.0), &band), 1.0);
        assert_eq!(intersection_ratio(&RegionBounds::new(30.0, 50.0), &band), 0.0);
    }

    #[test]
    fn zero_height_regions_never_intersect() {
        let band = RegionBounds::new(0.0, 100.0);
        assert_eq!(intersection_ratio(&RegionBounds::new(50.0, 50.0), &band), 0.0);
    }

    #[test]
    fn layout_reports_scroll_range() {
        let layout = PageLayout::new(
            Viewport::new(0.0, 40.0),
            vec![
                (SectionId::new("home"), RegionBounds::new(0.0, 30.0)),
                (SectionId::new("about"), RegionBounds::new(30.0, 100.0)),
            ],
        );
        assert_eq!(layout.content_height(), 100.0);
        assert_eq!(layout.max_offset(), 60.0);
        assert_eq!(layout.region("about"), Some(RegionBounds::new(30.0, 100.0)));
        assert_eq!(layout.region("contact"), None);
    }
}
