//! Scroll-direction tracker: hides the navigation bar while the reader moves
//! down the page and shows it again on any upward movement.

/// Offset below which the bar always stays visible, even when moving down.
pub const DEFAULT_HIDE_THRESHOLD: f64 = 80.0;

/// Sole writer of the navigation bar visibility flag.
///
/// The threshold is an absolute distance from the top of the page, not the
/// distance travelled since the last direction change.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollDirectionTracker {
    hide_threshold: f64,
    last_offset: f64,
    visible: bool,
}

impl ScrollDirectionTracker {
    pub fn new(hide_threshold: f64) -> Self {
        Self {
            hide_threshold,
            last_offset: 0.0,
            visible: true,
        }
    }

    /// Feeds one scroll sample and returns the resulting visibility.
    pub fn sample(&mut self, current: f64) -> bool {
        self.visible = !(current > self.last_offset && current > self.hide_threshold);
        self.last_offset = current;
        self.visible
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn hide_threshold(&self) -> f64 {
        self.hide_threshold
    }
}

impl Default for ScrollDirectionTracker {
    fn default() -> Self {
        Self::new(DEFAULT_HIDE_THRESHOLD)
    }
}
