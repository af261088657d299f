//! Procedural voxel terrain
//!
//! A heightmap world generated from fractal Perlin noise. Everything at or
//! below the surface height is solid, everything above is air. Regions are
//! streamed in and out explicitly by the host.

use std::collections::HashSet;

use noise::{Fbm, MultiFractal, NoiseFn, Perlin};

use crate::error::Result;
use crate::game::WorldEvent;
use super::coords::{BlockPos, RegionExtent, RegionPos};
use super::query::{BlockInfo, WorldQuery};

/// Average surface height in blocks
const BASE_HEIGHT: f64 = 40.0;
/// Maximum deviation from the base height
const HEIGHT_AMPLITUDE: f64 = 16.0;
/// Horizontal noise frequency (per block)
const TERRAIN_FREQUENCY: f64 = 0.01;

/// Noise-generated terrain with explicit region streaming
pub struct VoxelTerrain {
    extent: RegionExtent,
    heights: Fbm<Perlin>,
    active: HashSet<RegionPos>,
}

impl VoxelTerrain {
    /// Terrain for `seed` with no regions loaded
    pub fn new(seed: u32, extent: RegionExtent) -> Self {
        let heights = Fbm::<Perlin>::new(seed)
            .set_octaves(4)
            .set_frequency(TERRAIN_FREQUENCY);
        Self {
            extent,
            heights,
            active: HashSet::new(),
        }
    }

    /// Block size of one region
    pub fn extent(&self) -> RegionExtent {
        self.extent
    }

    /// Y of the topmost solid block in a column
    pub fn surface_height(&self, x: i32, z: i32) -> i32 {
        let n = self.heights.get([x as f64, z as f64]).clamp(-1.0, 1.0);
        (BASE_HEIGHT + n * HEIGHT_AMPLITUDE).round() as i32
    }

    /// Stream a region in. Returns the notification to deliver, if it was not already loaded.
    pub fn load_region(&mut self, pos: RegionPos) -> Option<WorldEvent> {
        if self.active.insert(pos) {
            Some(WorldEvent::RegionLoaded(pos))
        } else {
            None
        }
    }

    /// Stream a region out. Returns the notification to deliver, if it was loaded.
    pub fn unload_region(&mut self, pos: RegionPos) -> Option<WorldEvent> {
        if self.active.remove(&pos) {
            Some(WorldEvent::RegionUnloaded(pos))
        } else {
            None
        }
    }

    /// Stream a region out without producing a notification
    pub fn drop_region_silently(&mut self, pos: RegionPos) -> bool {
        self.active.remove(&pos)
    }

    /// Regions currently streamed in, in no particular order
    pub fn loaded_regions(&self) -> impl Iterator<Item = &RegionPos> {
        self.active.iter()
    }

    /// Ground-level regions within `radius` of `center` on the horizontal plane
    pub fn regions_around(center: RegionPos, radius: i32) -> Vec<RegionPos> {
        let mut regions = Vec::new();
        for x in (center.x - radius)..=(center.x + radius) {
            for z in (center.z - radius)..=(center.z + radius) {
                regions.push(RegionPos::new(x, center.y, z));
            }
        }
        regions
    }
}

impl WorldQuery for VoxelTerrain {
    fn is_region_active(&self, world_pos: BlockPos) -> Result<bool> {
        Ok(self.active.contains(&world_pos.region(self.extent)))
    }

    fn block_at(&self, pos: BlockPos) -> Result<BlockInfo> {
        if pos.y > self.surface_height(pos.x, pos.z) {
            Ok(BlockInfo::AIR)
        } else {
            Ok(BlockInfo::SOLID)
        }
    }
}
