//! In-memory collaborators for unit tests

use std::collections::{HashMap, HashSet};

use crate::data::SpawnTemplate;
use crate::ecs::{EntityLifecycle, Placement};
use crate::error::{Result, SpawnError};
use crate::game::PhaseOracle;
use crate::world::{BlockInfo, BlockPos, RegionExtent, RegionPos, WorldQuery};

/// A world whose blocks and region activity are set by the test
#[derive(Debug, Default)]
pub struct ScriptedWorld {
    extent: RegionExtent,
    /// Everything at or below this Y is solid
    ground: Option<i32>,
    overrides: HashMap<BlockPos, bool>,
    inactive: HashSet<RegionPos>,
    fail_blocks: bool,
}

impl ScriptedWorld {
    /// All air, every region active
    pub fn new() -> Self {
        Self::default()
    }

    /// Flat ground with its top solid block at `height`
    pub fn flat(height: i32) -> Self {
        Self { ground: Some(height), ..Self::default() }
    }

    pub fn set_solid(&mut self, pos: BlockPos, solid: bool) {
        self.overrides.insert(pos, solid);
    }

    pub fn set_region_active(&mut self, region: RegionPos, active: bool) {
        if active {
            self.inactive.remove(&region);
        } else {
            self.inactive.insert(region);
        }
    }

    pub fn fail_block_queries(&mut self, fail: bool) {
        self.fail_blocks = fail;
    }
}

impl WorldQuery for ScriptedWorld {
    fn is_region_active(&self, world_pos: BlockPos) -> Result<bool> {
        Ok(!self.inactive.contains(&world_pos.region(self.extent)))
    }

    fn block_at(&self, pos: BlockPos) -> Result<BlockInfo> {
        if self.fail_blocks {
            return Err(SpawnError::WorldQuery(format!("block store unavailable at {:?}", pos)));
        }
        let solid = self
            .overrides
            .get(&pos)
            .copied()
            .unwrap_or_else(|| self.ground.map_or(false, |h| pos.y <= h));
        Ok(BlockInfo { penetrable: !solid })
    }
}

#[derive(Debug)]
struct Record {
    placement: Option<Placement>,
    active: bool,
    destroyed: bool,
}

/// Entity service that remembers everything done to it
#[derive(Debug, Default)]
pub struct RecordingEntities {
    records: Vec<Record>,
    destroyed_order: Vec<u32>,
    created_templates: Vec<String>,
    fail_creation: bool,
}

impl RecordingEntities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn created_count(&self) -> usize {
        self.records.len()
    }

    pub fn created_templates(&self) -> &[String] {
        &self.created_templates
    }

    pub fn destroyed_order(&self) -> &[u32] {
        &self.destroyed_order
    }

    pub fn was_destroyed(&self, handle: u32) -> bool {
        self.records[handle as usize].destroyed
    }

    pub fn deactivate(&mut self, handle: u32) {
        self.records[handle as usize].active = false;
    }

    pub fn strip_placement(&mut self, handle: u32) {
        self.records[handle as usize].placement = None;
    }

    pub fn fail_creation(&mut self, fail: bool) {
        self.fail_creation = fail;
    }
}

impl EntityLifecycle for RecordingEntities {
    type Handle = u32;

    fn create_from_template(&mut self, template: &SpawnTemplate, placement: Placement) -> Result<u32> {
        if self.fail_creation {
            return Err(SpawnError::EntityCreation {
                template: template.id.clone(),
                reason: "entity store rejected the template".to_string(),
            });
        }
        let handle = self.records.len() as u32;
        self.records.push(Record {
            placement: Some(placement),
            active: true,
            destroyed: false,
        });
        self.created_templates.push(template.id.clone());
        Ok(handle)
    }

    fn destroy(&mut self, handle: u32) {
        let record = &mut self.records[handle as usize];
        if !record.destroyed {
            record.destroyed = true;
            record.active = false;
            self.destroyed_order.push(handle);
        }
    }

    fn is_active(&self, handle: u32) -> bool {
        self.records[handle as usize].active
    }

    fn placement(&self, handle: u32) -> Option<Placement> {
        self.records[handle as usize].placement
    }
}

/// Phase oracle with a fixed answer
#[derive(Debug, Clone, Copy)]
pub struct FixedPhase {
    night: bool,
}

impl FixedPhase {
    pub fn new(night: bool) -> Self {
        Self { night }
    }

    pub fn set_night(&mut self, night: bool) {
        self.night = night;
    }
}

impl PhaseOracle for FixedPhase {
    fn is_night(&self) -> bool {
        self.night
    }
}
