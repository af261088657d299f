//! Loaded region tracking
//!
//! Keeps the list of regions spawns may be placed in. Only the load/unload
//! handlers and stale-region detection mutate it.

use rand::seq::SliceRandom;
use rand::Rng;

use super::coords::RegionPos;

/// Set of currently loaded regions, in load order
#[derive(Debug, Clone, Default)]
pub struct RegionTracker {
    regions: Vec<RegionPos>,
}

impl RegionTracker {
    /// Tracker with no regions
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a newly loaded region. Returns false if it was already tracked.
    pub fn on_region_loaded(&mut self, pos: RegionPos) -> bool {
        if self.regions.contains(&pos) {
            return false;
        }
        self.regions.push(pos);
        true
    }

    /// Forget a region. Returns false if it wasn't tracked.
    pub fn on_region_unloaded(&mut self, pos: RegionPos) -> bool {
        match self.regions.iter().position(|r| *r == pos) {
            Some(idx) => {
                self.regions.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Pick a tracked region uniformly at random
    pub fn sample(&self, rng: &mut impl Rng) -> Option<RegionPos> {
        self.regions.choose(rng).copied()
    }

    /// True if `pos` is tracked
    pub fn contains(&self, pos: &RegionPos) -> bool {
        self.regions.contains(pos)
    }

    /// Number of tracked regions
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// True when no region is tracked
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Tracked regions in load order
    pub fn iter(&self) -> impl Iterator<Item = &RegionPos> {
        self.regions.iter()
    }
}
