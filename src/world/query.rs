//! World query interface
//!
//! The spawn controller never owns terrain. Hosts hand it something that
//! can answer block and region questions.

use crate::error::Result;
use super::coords::BlockPos;

/// What the spawner needs to know about a single block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockInfo {
    /// Entities can stand inside / pass through this block
    pub penetrable: bool,
}

impl BlockInfo {
    pub const AIR: BlockInfo = BlockInfo { penetrable: true };
    pub const SOLID: BlockInfo = BlockInfo { penetrable: false };
}

/// Read access to terrain
pub trait WorldQuery {
    /// Whether the region containing `world_pos` is currently loaded and simulated
    fn is_region_active(&self, world_pos: BlockPos) -> Result<bool>;

    /// Block at the given position
    fn block_at(&self, pos: BlockPos) -> Result<BlockInfo>;
}

impl<W: WorldQuery + ?Sized> WorldQuery for &W {
    fn is_region_active(&self, world_pos: BlockPos) -> Result<bool> {
        (**self).is_region_active(world_pos)
    }

    fn block_at(&self, pos: BlockPos) -> Result<BlockInfo> {
        (**self).block_at(pos)
    }
}
