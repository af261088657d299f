//! Thread-shared controller handle
//!
//! For hosts that tick on one thread and deliver notifications on another.
//! One lock guards the whole controller, so region tracking and the spawn
//! queue always change together.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use rand::Rng;

use crate::ecs::EntityLifecycle;
use crate::error::Result;
use crate::game::{PhaseOracle, WorldEvent};
use crate::world::WorldQuery;
use super::controller::{SpawnController, SpawnStats};

pub struct SharedSpawnController<W, E: EntityLifecycle, P, R> {
    inner: Arc<Mutex<SpawnController<W, E, P, R>>>,
}

impl<W, E: EntityLifecycle, P, R> Clone for SharedSpawnController<W, E, P, R> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<W, E, P, R> SharedSpawnController<W, E, P, R>
where
    W: WorldQuery,
    E: EntityLifecycle,
    P: PhaseOracle,
    R: Rng,
{
    pub fn new(controller: SpawnController<W, E, P, R>) -> Self {
        Self { inner: Arc::new(Mutex::new(controller)) }
    }

    pub fn tick(&self, delta: Duration) -> Result<()> {
        self.inner.lock().tick(delta)
    }

    pub fn handle_event(&self, event: WorldEvent) {
        self.inner.lock().handle_event(event);
    }

    pub fn stats(&self) -> SpawnStats {
        self.inner.lock().stats()
    }

    pub fn live_count(&self) -> usize {
        self.inner.lock().queue().len()
    }

    /// Run `f` with exclusive access to the controller
    pub fn with<T>(&self, f: impl FnOnce(&mut SpawnController<W, E, P, R>) -> T) -> T {
        f(&mut self.inner.lock())
    }
}
