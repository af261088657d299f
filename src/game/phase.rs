//! Day/night phase
//!
//! The controller only asks "is it night?". `DayCycle` answers that from a
//! running clock and reports dawn and dusk as they happen.

use std::time::Duration;

use super::events::WorldEvent;

/// Source of the current day/night phase
pub trait PhaseOracle {
    fn is_night(&self) -> bool;
}

impl<P: PhaseOracle + ?Sized> PhaseOracle for &P {
    fn is_night(&self) -> bool {
        (**self).is_night()
    }
}

/// Fraction of the day at which night begins
const DUSK_FRACTION: f32 = 0.5;

/// A looping day clock. Day occupies the first half, night the second.
#[derive(Debug, Clone)]
pub struct DayCycle {
    /// Length of a full day in seconds
    day_length: f32,
    /// Seconds since the most recent dawn
    time_of_day: f32,
}

impl DayCycle {
    pub fn new(day_length: f32) -> Self {
        Self {
            day_length: day_length.max(f32::EPSILON),
            time_of_day: 0.0,
        }
    }

    /// Start the clock at a given fraction of the day (0.0 = dawn)
    pub fn starting_at(day_length: f32, fraction: f32) -> Self {
        let mut cycle = Self::new(day_length);
        cycle.time_of_day = fraction.rem_euclid(1.0) * cycle.day_length;
        cycle
    }

    /// Advance the clock. Returns Dawn or Dusk if the phase flipped.
    pub fn update(&mut self, delta: Duration) -> Option<WorldEvent> {
        let was_night = self.is_night();
        self.time_of_day = (self.time_of_day + delta.as_secs_f32()).rem_euclid(self.day_length);

        match (was_night, self.is_night()) {
            (false, true) => Some(WorldEvent::Dusk),
            (true, false) => Some(WorldEvent::Dawn),
            _ => None,
        }
    }

    /// Position in the day, 0.0 at dawn
    pub fn fraction(&self) -> f32 {
        self.time_of_day / self.day_length
    }
}

impl PhaseOracle for DayCycle {
    fn is_night(&self) -> bool {
        self.fraction() >= DUSK_FRACTION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dusk_then_dawn() {
        let mut cycle = DayCycle::new(10.0);
        assert!(!cycle.is_night());

        assert_eq!(cycle.update(Duration::from_secs(4)), None);
        assert_eq!(cycle.update(Duration::from_secs(2)), Some(WorldEvent::Dusk));
        assert!(cycle.is_night());

        assert_eq!(cycle.update(Duration::from_secs(3)), None);
        assert_eq!(cycle.update(Duration::from_secs(2)), Some(WorldEvent::Dawn));
        assert!(!cycle.is_night());
    }

    #[test]
    fn test_starting_at_night() {
        let cycle = DayCycle::starting_at(20.0, 0.75);
        assert!(cycle.is_night());
        assert!((cycle.fraction() - 0.75).abs() < 1e-5);
    }
}
