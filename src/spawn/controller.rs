//! Spawn controller
//!
//! Keeps a bounded population of hostile entities in the loaded part of the
//! world. Every cycle it may spawn one enemy, then retires enemies that went
//! inactive or lost their placement. Dawn and dusk wipe the whole population.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::data::{SpawnConfig, SpawnTemplate, TemplateCatalog};
use crate::ecs::{EntityLifecycle, Placement};
use crate::error::{Result, SpawnError};
use crate::game::{CycleTimer, PhaseOracle, WorldEvent};
use crate::world::{BlockPos, RegionPos, RegionTracker, WorldQuery};
use super::position::PositionFinder;
use super::queue::SpawnQueue;

/// Running totals, for diagnostics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpawnStats {
    /// Cycles that actually ran
    pub cycles: u64,
    pub spawned: u64,
    /// Cycles with room to spawn but no usable position
    pub skipped_no_position: u64,
    pub swept_inactive: u64,
    pub swept_malformed: u64,
    /// Entities destroyed by dawn/dusk
    pub flushed: u64,
}

/// Orchestrates spawning and despawning of controlled enemies
pub struct SpawnController<W, E: EntityLifecycle, P, R = StdRng> {
    world: W,
    entities: E,
    phase: P,
    rng: R,
    /// None until templates have been classified
    catalog: Option<TemplateCatalog>,
    regions: RegionTracker,
    finder: PositionFinder,
    queue: SpawnQueue<E::Handle>,
    timer: CycleTimer,
    stats: SpawnStats,
}

impl<W, E, P> SpawnController<W, E, P, StdRng>
where
    W: WorldQuery,
    E: EntityLifecycle,
    P: PhaseOracle,
{
    /// Create a controller seeded from the config, or from entropy
    pub fn new(config: SpawnConfig, world: W, entities: E, phase: P) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, world, entities, phase, rng)
    }
}

impl<W, E, P, R> SpawnController<W, E, P, R>
where
    W: WorldQuery,
    E: EntityLifecycle,
    P: PhaseOracle,
    R: Rng,
{
    /// Create a controller with an explicit RNG. Fails on an invalid config.
    pub fn with_rng(config: SpawnConfig, world: W, entities: E, phase: P, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            finder: PositionFinder::new(config.region_extent),
            queue: SpawnQueue::new(config.max_enemies),
            timer: CycleTimer::new(config.update_period_secs),
            world,
            entities,
            phase,
            rng,
            catalog: None,
            regions: RegionTracker::new(),
            stats: SpawnStats::default(),
        })
    }

    /// Classify the spawn templates. Must succeed before any tick does work.
    ///
    /// Fails with `ConfigurationGap` if either period has no templates, in
    /// which case the controller stays idle.
    pub fn initialize(&mut self, templates: impl IntoIterator<Item = SpawnTemplate>) -> Result<()> {
        let catalog = TemplateCatalog::classify(templates);
        catalog.validate()?;
        self.catalog = Some(catalog);
        Ok(())
    }

    /// True once templates have been classified
    pub fn is_ready(&self) -> bool {
        self.catalog.is_some()
    }

    /// Advance time. Runs at most one spawn/sweep cycle per call.
    ///
    /// World-query and entity-creation failures end the cycle early and are
    /// returned; the next cycle tries again.
    pub fn tick(&mut self, delta: Duration) -> Result<()> {
        if !self.is_ready() {
            return Ok(());
        }
        if !self.timer.update(delta) {
            return Ok(());
        }
        self.stats.cycles += 1;

        if self.queue.has_room() {
            self.spawn_enemy_in_world()?;
        }

        self.sweep();
        Ok(())
    }

    /// Try to spawn one enemy somewhere in the loaded world
    fn spawn_enemy_in_world(&mut self) -> Result<Option<E::Handle>> {
        let position = self
            .finder
            .find_spawn_position(&mut self.regions, &self.world, &mut self.rng)?;

        match position {
            Some(pos) => self.spawn_on_position(pos),
            None => {
                self.stats.skipped_no_position += 1;
                Ok(None)
            }
        }
    }

    /// Spawn a template for the current phase at `pos`
    fn spawn_on_position(&mut self, pos: BlockPos) -> Result<Option<E::Handle>> {
        let catalog = self.catalog.as_ref().ok_or_else(not_initialized)?;
        let template = catalog.select(self.phase.is_night(), &mut self.rng)?;
        let handle = self.entities.create_from_template(template, Placement::from(pos))?;

        if !self.queue.push(handle) {
            self.entities.destroy(handle);
            log::warn!("Spawn queue full, discarded {:?}", handle);
            return Ok(None);
        }

        self.stats.spawned += 1;
        log::debug!(
            "Spawned '{}' at ({}, {}, {}), {} alive",
            template.id,
            pos.x,
            pos.y,
            pos.z,
            self.queue.len()
        );
        Ok(Some(handle))
    }

    /// Pick the template the next spawn would use
    pub fn select_template(&mut self) -> Result<&SpawnTemplate> {
        let catalog = self.catalog.as_ref().ok_or_else(not_initialized)?;
        catalog.select(self.phase.is_night(), &mut self.rng)
    }

    /// Retire enemies that lost their placement or went inactive
    fn sweep(&mut self) -> usize {
        let entities = &self.entities;
        let stats = &mut self.stats;

        let retired = self.queue.remove_where(|handle| match entities.placement(handle) {
            None => {
                log::warn!("Removed enemy {:?} without a placement", handle);
                stats.swept_malformed += 1;
                true
            }
            Some(_) if entities.is_active(handle) => false,
            Some(at) => {
                log::debug!("Removed inactive enemy at ({:.1}, {:.1}, {:.1})", at.x, at.y, at.z);
                stats.swept_inactive += 1;
                true
            }
        });

        for &handle in &retired {
            self.entities.destroy(handle);
        }
        retired.len()
    }

    /// Dawn: every spawned enemy is removed
    pub fn on_dawn(&mut self) -> usize {
        log::debug!("Dawn, despawning all enemies");
        self.flush()
    }

    /// Dusk: every spawned enemy is removed
    pub fn on_dusk(&mut self) -> usize {
        log::debug!("Dusk, despawning all enemies");
        self.flush()
    }

    fn flush(&mut self) -> usize {
        let mut count = 0;
        for handle in self.queue.drain() {
            self.entities.destroy(handle);
            count += 1;
        }
        self.stats.flushed += count as u64;
        count
    }

    pub fn on_region_loaded(&mut self, pos: RegionPos) {
        self.regions.on_region_loaded(pos);
    }

    pub fn on_region_unloaded(&mut self, pos: RegionPos) {
        self.regions.on_region_unloaded(pos);
    }

    /// Route a notification to its handler
    pub fn handle_event(&mut self, event: WorldEvent) {
        match event {
            WorldEvent::RegionLoaded(pos) => self.on_region_loaded(pos),
            WorldEvent::RegionUnloaded(pos) => self.on_region_unloaded(pos),
            WorldEvent::Dawn => {
                self.on_dawn();
            }
            WorldEvent::Dusk => {
                self.on_dusk();
            }
        }
    }

    /// Classified templates, once `initialize` has succeeded
    pub fn catalog(&self) -> Option<&TemplateCatalog> {
        self.catalog.as_ref()
    }

    /// Regions currently eligible for spawning
    pub fn regions(&self) -> &RegionTracker {
        &self.regions
    }

    /// Live spawned enemies, oldest first
    pub fn queue(&self) -> &SpawnQueue<E::Handle> {
        &self.queue
    }

    /// Totals since construction
    pub fn stats(&self) -> SpawnStats {
        self.stats
    }

    /// World being spawned into
    pub fn world(&self) -> &W {
        &self.world
    }

    /// Mutable world, for hosts that stream regions
    pub fn world_mut(&mut self) -> &mut W {
        &mut self.world
    }

    /// Entity service backing the queue
    pub fn entities(&self) -> &E {
        &self.entities
    }

    /// Mutable entity service
    pub fn entities_mut(&mut self) -> &mut E {
        &mut self.entities
    }

    /// Day/night oracle
    pub fn phase(&self) -> &P {
        &self.phase
    }

    /// Mutable day/night oracle, for hosts that drive the clock
    pub fn phase_mut(&mut self) -> &mut P {
        &mut self.phase
    }
}

fn not_initialized() -> SpawnError {
    SpawnError::Config("spawn templates have not been classified yet".to_string())
}
