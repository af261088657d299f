//! Spawn cycle pacing

use std::time::Duration;

/// Turns frame deltas into discrete spawn cycles.
///
/// At most one cycle is released per `update`; time beyond it stays banked,
/// so a long frame is paid back over the following calls.
#[derive(Debug, Clone)]
pub struct CycleTimer {
    period: f32,
    banked: f32,
}

impl CycleTimer {
    pub fn new(period: f32) -> Self {
        Self { period, banked: 0.0 }
    }

    /// Bank `delta` and report whether a cycle is due
    pub fn update(&mut self, delta: Duration) -> bool {
        self.banked += delta.as_secs_f32();
        let due = self.banked >= self.period;
        if due {
            self.banked -= self.period;
        }
        due
    }

    /// Seconds banked toward the next cycle
    pub fn pending(&self) -> f32 {
        self.banked
    }
}
