//! ECS Components
//!
//! Components attached to spawned enemies.

use serde::{Deserialize, Serialize};

use crate::world::{BlockPos, RegionExtent, RegionPos};

/// World-space location of an entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Placement {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Block containing this placement
    pub fn block(&self) -> BlockPos {
        BlockPos::new(self.x.floor() as i32, self.y.floor() as i32, self.z.floor() as i32)
    }

    pub fn region(&self, extent: RegionExtent) -> RegionPos {
        self.block().region(extent)
    }
}

impl From<BlockPos> for Placement {
    fn from(pos: BlockPos) -> Self {
        Self::new(pos.x as f32, pos.y as f32, pos.z as f32)
    }
}

/// Name component for entities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Name(pub String);

impl Name {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

/// Marks an entity as an enemy created from a spawn template
#[derive(Debug, Clone)]
pub struct Enemy {
    pub template_id: String,
}

/// Health component
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0
    }
}

/// Entity is outside the simulated area and no longer active
#[derive(Debug, Clone, Copy, Default)]
pub struct Dormant;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_block_floors() {
        let placement = Placement::new(-0.5, 10.9, 31.0);
        assert_eq!(placement.block(), BlockPos::new(-1, 10, 31));
        assert_eq!(placement.region(RegionExtent::default()), RegionPos::new(-1, 0, 0));
    }
}
