//! World notifications
//!
//! Region streaming and sun events the spawn controller reacts to. Hosts
//! publish into an `EventBus` and drain it into the controller between ticks.

use std::collections::VecDeque;

use crate::world::RegionPos;

/// Something the world or the sun did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldEvent {
    RegionLoaded(RegionPos),
    RegionUnloaded(RegionPos),
    Dawn,
    Dusk,
}

/// FIFO of pending notifications
#[derive(Debug, Default)]
pub struct EventBus {
    pending: VecDeque<WorldEvent>,
}

impl EventBus {
    /// Empty bus
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event behind those already pending
    pub fn publish(&mut self, event: WorldEvent) {
        self.pending.push_back(event);
    }

    /// Publish if there is something to publish
    pub fn publish_opt(&mut self, event: Option<WorldEvent>) {
        if let Some(event) = event {
            self.publish(event);
        }
    }

    /// Take every pending event, oldest first
    pub fn drain(&mut self) -> impl Iterator<Item = WorldEvent> + '_ {
        self.pending.drain(..)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
