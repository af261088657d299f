//! Game module - timing, day/night phase, and world notifications

mod events;
mod phase;
mod time;

pub use events::{EventBus, WorldEvent};
pub use phase::{DayCycle, PhaseOracle};
pub use time::CycleTimer;
