//! World module
//!
//! Coordinates, loaded-region tracking, the world query interface, and a
//! procedural terrain that implements it.

pub mod coords;
pub mod query;
pub mod region;
pub mod terrain;

pub use coords::{BlockPos, RegionExtent, RegionPos, REGION_SIZE_X, REGION_SIZE_Y, REGION_SIZE_Z};
pub use query::{BlockInfo, WorldQuery};
pub use region::RegionTracker;
pub use terrain::VoxelTerrain;
