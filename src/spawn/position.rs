//! Spawn position search
//!
//! Picks a random column inside a random loaded region and scans it for a
//! block an enemy can stand in.

use rand::Rng;

use crate::error::Result;
use crate::world::{BlockPos, RegionExtent, RegionTracker, WorldQuery};

/// Finds standable positions inside loaded regions
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionFinder {
    extent: RegionExtent,
}

impl PositionFinder {
    pub fn new(extent: RegionExtent) -> Self {
        Self { extent }
    }

    pub fn extent(&self) -> RegionExtent {
        self.extent
    }

    /// Find a spawn position, or None if this cycle has nowhere to spawn.
    ///
    /// A sampled region the world reports as inactive is dropped from
    /// `regions`, since its unload notification was missed.
    pub fn find_spawn_position<W: WorldQuery>(
        &self,
        regions: &mut RegionTracker,
        world: &W,
        rng: &mut impl Rng,
    ) -> Result<Option<BlockPos>> {
        let region = match regions.sample(rng) {
            Some(region) => region,
            None => {
                log::debug!("No loaded regions, skipping spawn cycle");
                return Ok(None);
            }
        };

        let origin = region.origin(self.extent);
        let column_x = origin.x + rng.gen_range(0..self.extent.x);
        let column_z = origin.z + rng.gen_range(0..self.extent.z);

        if !world.is_region_active(origin)? {
            regions.on_region_unloaded(region);
            log::debug!("Region {} is no longer active, dropped it and skipped spawn cycle", region);
            return Ok(None);
        }

        // Scan a window twice the region height so columns whose surface
        // sits just outside the region are still found.
        let bottom = origin.y - self.extent.y;
        let top = origin.y + self.extent.y;
        for y in bottom..top {
            let candidate = BlockPos::new(column_x, y, column_z);
            if is_valid_spawn_position(world, candidate)? {
                return Ok(Some(candidate));
            }
        }

        log::debug!(
            "No valid position in column ({}, {}) of region {}, skipping spawn cycle",
            column_x,
            column_z,
            region
        );
        Ok(None)
    }
}

/// Solid footing below, open space at the position and above it
pub fn is_valid_spawn_position<W: WorldQuery + ?Sized>(world: &W, pos: BlockPos) -> Result<bool> {
    if world.block_at(pos.below())?.penetrable {
        return Ok(false);
    }
    if !world.block_at(pos)?.penetrable {
        return Ok(false);
    }
    Ok(world.block_at(pos.above())?.penetrable)
}
