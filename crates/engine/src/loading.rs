//! Simulated loading progress shown before the page appears.
//!
//! Progress is cosmetic: it advances by a random step every tick and the page
//! is revealed after a fixed duration, whatever the bar shows at that point.

use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Largest random step added per tick, in percent.
pub const MAX_STEP_PERCENT: f64 = 15.0;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LoadingProgress {
    percent: f64,
}

impl LoadingProgress {
    pub fn percent(&self) -> f64 {
        self.percent
    }

    /// Progress as a `0.0..=1.0` ratio, handy for gauges.
    pub fn ratio(&self) -> f64 {
        self.percent / 100.0
    }

    pub fn is_complete(&self) -> bool {
        self.percent >= 100.0
    }

    /// Advances by a random amount in `[0, 15)` and caps at 100.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f64 {
        if !self.is_complete() {
            self.percent = (self.percent + rng.gen_range(0.0..MAX_STEP_PERCENT)).min(100.0);
        }
        self.percent
    }
}

/// Timing of the loading screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadingSchedule {
    /// How long the loading screen stays up, in milliseconds.
    pub duration_ms: u64,
    /// Interval between progress steps, in milliseconds.
    pub tick_ms: u64,
}

impl Default for LoadingSchedule {
    fn default() -> Self {
        Self {
            duration_ms: 2000,
            tick_ms: 200,
        }
    }
}

impl LoadingSchedule {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Tick interval; never zero so it can drive a `tokio::time::interval`.
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration()
    }
}
