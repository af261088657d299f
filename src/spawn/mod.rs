//! Spawning module
//!
//! Position search, the live-enemy queue, and the controller that ties them
//! to the day/night cycle.

pub mod controller;
pub mod position;
pub mod queue;
pub mod shared;

pub use controller::{SpawnController, SpawnStats};
pub use position::{is_valid_spawn_position, PositionFinder};
pub use queue::SpawnQueue;
pub use shared::SharedSpawnController;
