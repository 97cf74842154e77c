use serde::{Deserialize, Serialize};

use crate::scroll_direction::DEFAULT_HIDE_THRESHOLD;
use crate::smooth_scroll::DEFAULT_SPEED;
use crate::visibility::VisibilityConfig;

/// Tunables of the navigation controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationSettings {
    /// Offset past which moving down hides the navigation bar.
    pub hide_threshold: f64,
    pub visibility: VisibilityConfig,
    /// Fraction of the remaining distance covered per animation frame.
    pub smooth_scroll_speed: f64,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            hide_threshold: DEFAULT_HIDE_THRESHOLD,
            visibility: VisibilityConfig::default(),
            smooth_scroll_speed: DEFAULT_SPEED,
        }
    }
}
