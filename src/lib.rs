//! Controlled Spawn - day/night hostile spawning for a streamed voxel world
//!
//! Keeps a bounded population of enemies alive in loaded regions, picks
//! what to spawn from the current phase, and clears everything out at dawn
//! and dusk.

pub mod data;
pub mod ecs;
pub mod error;
pub mod game;
pub mod spawn;
pub mod world;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use data::{SpawnConfig, SpawnTemplate, TemplateCatalog};
pub use ecs::{EcsEntities, EntityLifecycle};
pub use error::{Result, SpawnError};
pub use game::{DayCycle, EventBus, PhaseOracle, WorldEvent};
pub use spawn::{SharedSpawnController, SpawnController, SpawnStats};
pub use world::{RegionTracker, VoxelTerrain, WorldQuery};
