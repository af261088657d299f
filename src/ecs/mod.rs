//! Entity Component System module
//!
//! Components for spawned enemies, the lifecycle interface the spawner uses,
//! and its hecs-backed implementation.

pub mod components;
pub mod entities;
pub mod lifecycle;

pub use components::*;
pub use entities::EcsEntities;
pub use lifecycle::EntityLifecycle;
