//! World and region coordinates
//!
//! Block positions live in world space; region positions index the grid of
//! independently streamed regions.

use serde::{Deserialize, Serialize};

/// Default region width along X, in blocks
pub const REGION_SIZE_X: i32 = 32;
/// Default region height along Y, in blocks
pub const REGION_SIZE_Y: i32 = 64;
/// Default region depth along Z, in blocks
pub const REGION_SIZE_Z: i32 = 32;

/// Integer block position in world space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    pub fn below(&self) -> Self {
        Self::new(self.x, self.y - 1, self.z)
    }

    pub fn above(&self) -> Self {
        Self::new(self.x, self.y + 1, self.z)
    }

    /// Region containing this block
    pub fn region(&self, extent: RegionExtent) -> RegionPos {
        RegionPos::new(
            self.x.div_euclid(extent.x),
            self.y.div_euclid(extent.y),
            self.z.div_euclid(extent.z),
        )
    }
}

/// Position of a region in region-grid units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegionPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl RegionPos {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// World-space block at the region's minimum corner
    pub fn origin(&self, extent: RegionExtent) -> BlockPos {
        BlockPos::new(self.x * extent.x, self.y * extent.y, self.z * extent.z)
    }
}

impl std::fmt::Display for RegionPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Size of one region in blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionExtent {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl RegionExtent {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    pub fn is_valid(&self) -> bool {
        self.x > 0 && self.y > 0 && self.z > 0
    }
}

impl Default for RegionExtent {
    fn default() -> Self {
        Self::new(REGION_SIZE_X, REGION_SIZE_Y, REGION_SIZE_Z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_origin() {
        let extent = RegionExtent::default();
        assert_eq!(RegionPos::new(1, 0, -2).origin(extent), BlockPos::new(32, 0, -64));
    }

    #[test]
    fn test_block_region_handles_negatives() {
        let extent = RegionExtent::default();
        assert_eq!(BlockPos::new(-1, -1, 31).region(extent), RegionPos::new(-1, -1, 0));
        assert_eq!(BlockPos::new(32, 64, -32).region(extent), RegionPos::new(1, 1, -1));
    }

    #[test]
    fn test_neighbours() {
        let pos = BlockPos::new(4, 10, -3);
        assert_eq!(pos.below(), BlockPos::new(4, 9, -3));
        assert_eq!(pos.above(), BlockPos::new(4, 11, -3));
    }
}
