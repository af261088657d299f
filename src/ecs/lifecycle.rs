//! Entity lifecycle interface
//!
//! How the spawn controller creates, inspects, and destroys the entities it
//! owns, without knowing how they are stored.

use std::fmt::Debug;

use crate::data::SpawnTemplate;
use crate::error::Result;
use super::components::Placement;

pub trait EntityLifecycle {
    /// Reference to a created entity
    type Handle: Copy + Eq + Debug;

    /// Build an entity from a template. The placement is applied before the
    /// entity becomes visible to the rest of the world.
    fn create_from_template(&mut self, template: &SpawnTemplate, placement: Placement) -> Result<Self::Handle>;

    /// Remove an entity. Destroying an entity that is already gone is a no-op.
    fn destroy(&mut self, handle: Self::Handle);

    /// Whether the entity still exists and is being simulated
    fn is_active(&self, handle: Self::Handle) -> bool;

    /// Current placement, or None if the entity has lost it
    fn placement(&self, handle: Self::Handle) -> Option<Placement>;

    fn has_placement(&self, handle: Self::Handle) -> bool {
        self.placement(handle).is_some()
    }
}
