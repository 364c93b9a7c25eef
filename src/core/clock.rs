//! Per-frame timing

use std::time::Instant;

/// Measures the elapsed time between frames so movement can be scaled
/// to be frame-rate independent.
///
/// The last timestamp is seeded at construction, so the first tick
/// yields a near-zero delta rather than a spurious jump.
#[derive(Debug)]
pub struct FrameClock {
    last_frame: Instant,
}

impl FrameClock {
    /// Create a clock whose first tick measures from "now"
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
        }
    }

    /// Advance the clock and return the elapsed time in seconds since
    /// the previous tick (or since construction for the first tick)
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        delta
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
