//! Controlled Spawn - Demo host
//!
//! Runs the spawn controller against procedural terrain for a fixed amount
//! of simulated time, streaming regions around a moving viewer and cycling
//! day and night.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};

use controlled_spawn::data::{export_default_data, DataManager};
use controlled_spawn::ecs::EcsEntities;
use controlled_spawn::game::{DayCycle, EventBus};
use controlled_spawn::world::{RegionExtent, RegionPos, VoxelTerrain};
use controlled_spawn::{PhaseOracle, SpawnController};

/// Simulation step
const STEP: Duration = Duration::from_millis(50);
/// Simulated seconds to run when no duration is given
const DEFAULT_RUN_SECS: u64 = 300;
/// Longest run accepted on the command line (one simulated week)
const MAX_RUN_SECS: u64 = 7 * 24 * 60 * 60;
/// Length of a full day/night cycle in seconds
const DAY_LENGTH_SECS: f32 = 120.0;
/// Regions kept loaded around the viewer, in each horizontal direction
const VIEW_RADIUS: i32 = 2;
/// The viewer moves one region this often
const STREAM_INTERVAL_SECS: f32 = 15.0;
/// Every this many moves, one region is dropped without a notification
const SILENT_DROP_EVERY: u32 = 4;
/// The oldest enemy is slain this often
const HUNT_INTERVAL_SECS: f32 = 7.0;
/// Stats are logged this often
const REPORT_INTERVAL_SECS: f32 = 30.0;

type DemoController = SpawnController<VoxelTerrain, EcsEntities, DayCycle>;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Controlled Spawn demo v{}", env!("CARGO_PKG_VERSION"));

    let mut run_secs = DEFAULT_RUN_SECS;
    for arg in std::env::args().skip(1) {
        if arg == "--export-data" {
            export_default_data(Path::new("assets/data")).context("exporting default data")?;
            log::info!("Wrote default spawn data to assets/data");
            return Ok(());
        }
        run_secs = parse_run_secs(&arg)?;
    }

    let data = DataManager::new();
    let config = data.config().clone();
    let extent = config.region_extent;
    let terrain_seed = config.seed.unwrap_or(0) as u32;

    let mut controller: DemoController = SpawnController::new(
        config,
        VoxelTerrain::new(terrain_seed, extent),
        EcsEntities::new(),
        DayCycle::new(DAY_LENGTH_SECS),
    )
    .context("building spawn controller")?;
    controller
        .initialize(data.templates().iter().cloned())
        .context("classifying spawn templates")?;

    let mut bus = EventBus::new();
    let mut streamer = Streamer::new(extent);
    streamer.stream_to(&mut controller, &mut bus, RegionPos::new(0, 0, 0));

    run(&mut controller, &mut bus, &mut streamer, run_secs);

    let stats = controller.stats();
    log::info!(
        "Finished {}s: {} cycles, {} spawned, {} skipped, {} inactive removed, {} malformed removed, {} flushed, {} alive",
        run_secs,
        stats.cycles,
        stats.spawned,
        stats.skipped_no_position,
        stats.swept_inactive,
        stats.swept_malformed,
        stats.flushed,
        controller.queue().len()
    );
    Ok(())
}

/// Parse a run length in simulated seconds
fn parse_run_secs(arg: &str) -> Result<u64> {
    let secs: u64 = arg
        .parse()
        .with_context(|| format!("expected a number of seconds, got '{}'", arg))?;
    anyhow::ensure!(
        secs <= MAX_RUN_SECS,
        "run length {}s exceeds the {}s maximum",
        secs,
        MAX_RUN_SECS
    );
    Ok(secs)
}

/// Number of fixed steps covering `run_secs`
fn step_count(run_secs: u64) -> u64 {
    run_secs.saturating_mul(1000) / STEP.as_millis() as u64
}

/// Fixed-step simulation loop
fn run(controller: &mut DemoController, bus: &mut EventBus, streamer: &mut Streamer, run_secs: u64) {
    let steps = step_count(run_secs);
    let step_secs = STEP.as_secs_f32();
    let mut since_stream = 0.0;
    let mut since_hunt = 0.0;
    let mut since_report = 0.0;

    for _ in 0..steps {
        bus.publish_opt(controller.phase_mut().update(STEP));

        since_stream += step_secs;
        if since_stream >= STREAM_INTERVAL_SECS {
            since_stream -= STREAM_INTERVAL_SECS;
            let next = RegionPos::new(streamer.center.x + 1, 0, streamer.center.z);
            streamer.stream_to(controller, bus, next);
        }

        since_hunt += step_secs;
        if since_hunt >= HUNT_INTERVAL_SECS {
            since_hunt -= HUNT_INTERVAL_SECS;
            if let Some(oldest) = controller.queue().front() {
                if controller.entities_mut().damage(oldest, 1000) {
                    log::debug!("Hunter slew {:?}", oldest);
                }
            }
        }

        for event in bus.drain() {
            controller.handle_event(event);
        }

        match controller.tick(STEP) {
            Ok(()) => {}
            Err(e) if e.is_configuration() => log::error!("Spawn configuration problem: {}", e),
            Err(e) => log::warn!("Spawn cycle failed, retrying next cycle: {}", e),
        }

        since_report += step_secs;
        if since_report >= REPORT_INTERVAL_SECS {
            since_report -= REPORT_INTERVAL_SECS;
            let stats = controller.stats();
            log::info!(
                "[{}] {}/{} alive, {} regions tracked, {} spawned, {} flushed",
                if controller.phase().is_night() { "night" } else { "day" },
                controller.queue().len(),
                controller.queue().capacity(),
                controller.regions().len(),
                stats.spawned,
                stats.flushed
            );
        }
    }
}

/// Keeps the regions around a moving viewer loaded
struct Streamer {
    extent: RegionExtent,
    center: RegionPos,
    moves: u32,
}

impl Streamer {
    fn new(extent: RegionExtent) -> Self {
        Self {
            extent,
            center: RegionPos::new(0, 0, 0),
            moves: 0,
        }
    }

    fn stream_to(&mut self, controller: &mut DemoController, bus: &mut EventBus, center: RegionPos) {
        self.center = center;
        self.moves += 1;

        let wanted = VoxelTerrain::regions_around(center, VIEW_RADIUS);
        let loaded: Vec<RegionPos> = controller.world().loaded_regions().copied().collect();

        for region in loaded.into_iter().filter(|r| !wanted.contains(r)) {
            if let Some(event) = controller.world_mut().unload_region(region) {
                let dormant = controller.entities_mut().mark_dormant_in(region, self.extent);
                log::debug!("Unloaded region {} ({} enemies went dormant)", region, dormant);
                bus.publish(event);
            }
        }

        for region in wanted {
            bus.publish_opt(controller.world_mut().load_region(region));
        }

        // Simulate a lost unload notification on the far edge
        if self.moves % SILENT_DROP_EVERY == 0 {
            let edge = RegionPos::new(center.x - VIEW_RADIUS, center.y, center.z + VIEW_RADIUS);
            if controller.world_mut().drop_region_silently(edge) {
                controller.entities_mut().mark_dormant_in(edge, self.extent);
                log::debug!("Dropped region {} without notifying", edge);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_secs() {
        assert_eq!(parse_run_secs("60").unwrap(), 60);
        assert!(parse_run_secs("soon").is_err());
        assert!(parse_run_secs(&u64::MAX.to_string()).is_err());
        assert!(parse_run_secs(&(MAX_RUN_SECS + 1).to_string()).is_err());
    }

    #[test]
    fn test_step_count_saturates() {
        assert_eq!(step_count(1), 20);
        assert_eq!(step_count(u64::MAX), u64::MAX / 50);
    }
}
