//! The scrolling page: rendered section lines, their row bounds, and the
//! animated viewport the navigation controller drives.

use std::ops::Range;

use folio_engine::{PageLayout, ProjectFilter, RegionBounds, ScrollHost, SmoothScroll, Viewport};
use folio_types::SectionId;
use ratatui::{layout::Rect, text::Line};

/// Widest the page text is allowed to grow, in columns.
pub const MAX_CONTENT_WIDTH: u16 = 96;
/// Narrowest width the page is laid out for.
pub const MIN_CONTENT_WIDTH: u16 = 24;
/// Rows reserved below the page for the key hints.
pub const HINT_BAR_HEIGHT: u16 = 1;
const HORIZONTAL_PADDING: u16 = 2;
const SCROLLBAR_WIDTH: u16 = 1;

/// What a clickable span inside the page does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageAction {
    GoTo(SectionId),
    Filter(ProjectFilter),
}

/// A clickable span, in document coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    pub action: PageAction,
    pub row: usize,
    pub columns: Range<u16>,
}

/// The laid-out page: one styled line per terminal row.
#[derive(Debug, Clone, Default)]
pub struct PageDocument {
    pub lines: Vec<Line<'static>>,
    pub regions: Vec<(SectionId, RegionBounds)>,
    pub links: Vec<PageLink>,
}

impl PageDocument {
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    pub fn region(&self, id: &str) -> Option<RegionBounds> {
        self.regions.iter().find(|(section_id, _)| section_id == id).map(|(_, bounds)| *bounds)
    }
}

/// Splits the screen into the page viewport and the hint bar.
pub fn split_screen(area: Rect) -> (Rect, Rect) {
    let hints = HINT_BAR_HEIGHT.min(area.height);
    let page = Rect::new(area.x, area.y, area.width, area.height - hints);
    let hint_bar = Rect::new(area.x, area.y + page.height, area.width, hints);
    (page, hint_bar)
}

/// Where the page text goes inside `area`: padded, capped to
/// [`MAX_CONTENT_WIDTH`] and centered, leaving the last column for the
/// scrollbar.
pub fn content_area(area: Rect) -> Rect {
    let usable = area.width.saturating_sub(SCROLLBAR_WIDTH + HORIZONTAL_PADDING * 2);
    let width = usable.min(MAX_CONTENT_WIDTH);
    let x = area.x + HORIZONTAL_PADDING + (usable - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

/// Page state seen by the navigation core through [`ScrollHost`].
#[derive(Debug, Clone)]
pub struct PageHost {
    scroll: SmoothScroll,
    viewport_height: u16,
    document: PageDocument,
}

impl PageHost {
    pub fn new(scroll_speed: f64) -> Self {
        Self {
            scroll: SmoothScroll::new(scroll_speed),
            viewport_height: 0,
            document: PageDocument::default(),
        }
    }

    /// Replaces the laid-out page. The offset is kept, clamped to the new
    /// scrollable range; an in-flight animation keeps its clamped target.
    pub fn set_document(&mut self, document: PageDocument, viewport_height: u16) {
        self.document = document;
        self.viewport_height = viewport_height;
        self.scroll.set_max(self.max_offset());
    }

    pub fn document(&self) -> &PageDocument {
        &self.document
    }

    #[cfg(test)]
    pub fn viewport_height(&self) -> u16 {
        self.viewport_height
    }

    /// First document row shown in the viewport.
    pub fn row(&self) -> usize {
        usize::from(self.scroll.row())
    }

    pub fn visible_lines(&self) -> &[Line<'static>] {
        let start = self.row().min(self.document.lines.len());
        let end = (start + usize::from(self.viewport_height)).min(self.document.lines.len());
        &self.document.lines[start..end]
    }

    /// Advances the animation by one frame. Returns `true` when the offset
    /// moved.
    pub fn tick(&mut self) -> bool {
        self.scroll.tick()
    }

    pub fn is_animating(&self) -> bool {
        self.scroll.is_animating()
    }

    /// Scrolls by whole rows, cancelling any animation.
    pub fn scroll_lines(&mut self, delta: i32) {
        self.scroll.jump_by(f64::from(delta));
    }

    /// Scrolls by whole viewports, keeping two rows of context.
    pub fn scroll_pages(&mut self, delta: i32) {
        let page = i32::from(self.viewport_height.saturating_sub(2).max(1));
        self.scroll_lines(page.saturating_mul(delta));
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll.jump_to(0.0);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll.jump_to(self.scroll.max());
    }

    /// Link under the given viewport cell, if any.
    pub fn link_at(&self, column: u16, viewport_row: u16) -> Option<&PageLink> {
        let row = self.row() + usize::from(viewport_row);
        self.document
            .links
            .iter()
            .find(|link| link.row == row && link.columns.contains(&column))
    }

    fn max_offset(&self) -> f64 {
        self.document.lines.len().saturating_sub(usize::from(self.viewport_height)) as f64
    }
}

impl ScrollHost for PageHost {
    fn scroll_offset(&self) -> f64 {
        self.scroll.offset()
    }

    fn smooth_scroll_to(&mut self, offset: f64) {
        self.scroll.scroll_to(offset);
    }

    fn scroll_target(&self) -> Option<f64> {
        Some(self.scroll.target())
    }

    fn clamp_offset(&self, offset: f64) -> f64 {
        self.scroll.clamp(offset)
    }

    fn layout(&self) -> Option<PageLayout> {
        if self.viewport_height == 0 || self.document.regions.is_empty() {
            return None;
        }
        Some(PageLayout::new(
            Viewport::new(self.scroll.offset(), f64::from(self.viewport_height)),
            self.document.regions.clone(),
        ))
    }

    fn region_top(&self, id: &SectionId) -> Option<f64> {
        if self.viewport_height == 0 {
            return None;
        }
        self.document.region(id.as_str()).map(|bounds| bounds.top)
    }
}
