//! Offset animator with exponential ease-out.
//!
//! Each tick closes a fixed fraction of the remaining distance to the target
//! and snaps once the remainder drops below half a row.

/// Fraction of the remaining distance covered per tick.
pub const DEFAULT_SPEED: f64 = 0.35;
const SNAP_DISTANCE: f64 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub struct SmoothScroll {
    current: f64,
    target: f64,
    max: f64,
    speed: f64,
}

impl SmoothScroll {
    /// Non-finite speeds fall back to [`DEFAULT_SPEED`].
    pub fn new(speed: f64) -> Self {
        let speed = if speed.is_finite() { speed.clamp(0.05, 1.0) } else { DEFAULT_SPEED };
        Self {
            current: 0.0,
            target: 0.0,
            max: 0.0,
            speed,
        }
    }

    /// Updates the scrollable range and pulls both offsets back inside it.
    pub fn set_max(&mut self, max: f64) {
        self.max = max.max(0.0);
        self.current = self.clamp(self.current);
        self.target = self.clamp(self.target);
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn clamp(&self, offset: f64) -> f64 {
        offset.clamp(0.0, self.max)
    }

    /// Starts animating towards `target`. Returns `false` when the clamped
    /// target equals the current one.
    pub fn scroll_to(&mut self, target: f64) -> bool {
        let target = self.clamp(target);
        if (target - self.target).abs() < f64::EPSILON {
            return false;
        }
        self.target = target;
        true
    }

    /// Moves immediately, cancelling any animation.
    pub fn jump_to(&mut self, offset: f64) {
        let offset = self.clamp(offset);
        self.current = offset;
        self.target = offset;
    }

    /// Moves by `delta` from the current position, cancelling any animation.
    pub fn jump_by(&mut self, delta: f64) {
        self.jump_to(self.current + delta);
    }

    /// Advances one frame. Returns `true` while the offset moved.
    pub fn tick(&mut self) -> bool {
        if !self.is_animating() {
            return false;
        }
        let remaining = self.target - self.current;
        self.current += remaining * self.speed;
        if (self.target - self.current).abs() < SNAP_DISTANCE {
            self.current = self.target;
        }
        true
    }

    pub fn offset(&self) -> f64 {
        self.current
    }

    /// Current offset rounded to a whole row.
    pub fn row(&self) -> u16 {
        self.current.round().clamp(0.0, f64::from(u16::MAX)) as u16
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_animating(&self) -> bool {
        self.current != self.target
    }
}

impl Default for SmoothScroll {
    fn default() -> Self {
        Self::new(DEFAULT_SPEED)
    }
}
