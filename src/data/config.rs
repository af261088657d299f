//! Spawn controller configuration

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpawnError};
use crate::world::RegionExtent;

/// Maximum number of live spawned enemies
pub const MAX_ENEMIES: usize = 30;
/// Seconds between spawn/sweep cycles
pub const UPDATE_PERIOD_SECS: f32 = 1.0;

/// Tunables for the spawn controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// Queue capacity; no spawn is attempted while this many are alive
    pub max_enemies: usize,
    /// Seconds between cycles
    pub update_period_secs: f32,
    /// Block size of one streamed region
    pub region_extent: RegionExtent,
    /// Fixed RNG seed, or None for entropy
    pub seed: Option<u64>,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            max_enemies: MAX_ENEMIES,
            update_period_secs: UPDATE_PERIOD_SECS,
            region_extent: RegionExtent::default(),
            seed: None,
        }
    }
}

impl SpawnConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_enemies == 0 {
            return Err(SpawnError::Config("max_enemies must be at least 1".to_string()));
        }
        if !(self.update_period_secs > 0.0) {
            return Err(SpawnError::Config(format!(
                "update_period_secs must be positive, got {}",
                self.update_period_secs
            )));
        }
        if !self.region_extent.is_valid() {
            return Err(SpawnError::Config(format!(
                "region_extent must be positive on every axis, got {:?}",
                self.region_extent
            )));
        }
        Ok(())
    }
}
