//! hecs-backed entity lifecycle
//!
//! Stores spawned enemies in a `hecs::World`. An enemy is active while it
//! exists, is alive, and is not dormant.

use hecs::{Entity, EntityBuilder, World};

use crate::data::SpawnTemplate;
use crate::error::Result;
use crate::world::{RegionExtent, RegionPos};
use super::components::{Dormant, Enemy, Health, Name, Placement};
use super::lifecycle::EntityLifecycle;

/// Entity storage for the spawn controller
#[derive(Default)]
pub struct EcsEntities {
    world: World,
}

impl EcsEntities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Number of enemies currently stored
    pub fn enemy_count(&self) -> usize {
        self.world.query::<&Enemy>().iter().count()
    }

    /// Mark every enemy standing in `region` dormant. Returns how many were affected.
    pub fn mark_dormant_in(&mut self, region: RegionPos, extent: RegionExtent) -> usize {
        let inside: Vec<Entity> = self
            .world
            .query::<(&Placement, &Enemy)>()
            .without::<&Dormant>()
            .iter()
            .filter(|(_, (placement, _))| placement.region(extent) == region)
            .map(|(entity, _)| entity)
            .collect();

        let mut marked = 0;
        for entity in inside {
            match self.world.insert_one(entity, Dormant) {
                Ok(()) => marked += 1,
                Err(e) => log::debug!("Could not mark {:?} dormant: {}", entity, e),
            }
        }
        marked
    }

    /// Reduce an enemy's health, returning true if it died
    pub fn damage(&mut self, entity: Entity, amount: i32) -> bool {
        match self.world.get::<&mut Health>(entity) {
            Ok(mut health) => {
                health.current -= amount;
                health.is_dead()
            }
            Err(_) => false,
        }
    }
}

impl EntityLifecycle for EcsEntities {
    type Handle = Entity;

    fn create_from_template(&mut self, template: &SpawnTemplate, placement: Placement) -> Result<Entity> {
        let mut builder = EntityBuilder::new();
        builder
            .add(Name::new(template.name.clone()))
            .add(Enemy { template_id: template.id.clone() })
            .add(Health::new(template.health))
            .add(placement);
        Ok(self.world.spawn(builder.build()))
    }

    fn destroy(&mut self, handle: Entity) {
        if self.world.despawn(handle).is_err() {
            log::debug!("Entity {:?} was already despawned", handle);
        }
    }

    fn is_active(&self, handle: Entity) -> bool {
        if !self.world.contains(handle) || self.world.get::<&Dormant>(handle).is_ok() {
            return false;
        }
        self.world
            .get::<&Health>(handle)
            .map(|health| !health.is_dead())
            .unwrap_or(true)
    }

    fn placement(&self, handle: Entity) -> Option<Placement> {
        self.world.get::<&Placement>(handle).ok().map(|p| *p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ghoul() -> SpawnTemplate {
        SpawnTemplate::new("ghoul", "Ghoul", Some("NIGHT"), 40)
    }

    #[test]
    fn test_create_applies_template_and_placement() {
        let mut entities = EcsEntities::new();
        let e = entities.create_from_template(&ghoul(), Placement::new(1.0, 2.0, 3.0)).unwrap();

        assert!(entities.is_active(e));
        assert_eq!(entities.placement(e), Some(Placement::new(1.0, 2.0, 3.0)));
        assert_eq!(entities.world().get::<&Name>(e).unwrap().0, "Ghoul");
        assert_eq!(entities.world().get::<&Enemy>(e).unwrap().template_id, "ghoul");
        assert_eq!(entities.enemy_count(), 1);
    }

    #[test]
    fn test_destroy_is_idempotent() {
        let mut entities = EcsEntities::new();
        let e = entities.create_from_template(&ghoul(), Placement::new(0.0, 0.0, 0.0)).unwrap();
        entities.destroy(e);
        entities.destroy(e);
        assert!(!entities.is_active(e));
        assert_eq!(entities.placement(e), None);
    }

    #[test]
    fn test_dormant_and_dead_are_inactive() {
        let mut entities = EcsEntities::new();
        let extent = RegionExtent::default();
        let inside = entities.create_from_template(&ghoul(), Placement::new(5.0, 40.0, 5.0)).unwrap();
        let outside = entities.create_from_template(&ghoul(), Placement::new(40.0, 40.0, 5.0)).unwrap();

        assert_eq!(entities.mark_dormant_in(RegionPos::new(0, 0, 0), extent), 1);
        assert!(!entities.is_active(inside));
        assert!(entities.is_active(outside));

        assert!(entities.damage(outside, 100));
        assert!(!entities.is_active(outside));
    }

    #[test]
    fn test_mark_dormant_counts_only_newly_marked() {
        let mut entities = EcsEntities::new();
        let extent = RegionExtent::default();
        let a = entities.create_from_template(&ghoul(), Placement::new(1.0, 10.0, 1.0)).unwrap();
        let b = entities.create_from_template(&ghoul(), Placement::new(2.0, 10.0, 2.0)).unwrap();

        assert_eq!(entities.mark_dormant_in(RegionPos::new(0, 0, 0), extent), 2);
        assert_eq!(entities.mark_dormant_in(RegionPos::new(0, 0, 0), extent), 0);
        assert!(entities.world().get::<&Dormant>(a).is_ok());
        assert!(entities.world().get::<&Dormant>(b).is_ok());
    }

    #[test]
    fn test_missing_placement() {
        let mut entities = EcsEntities::new();
        let e = entities.create_from_template(&ghoul(), Placement::new(0.0, 0.0, 0.0)).unwrap();
        entities.world_mut().remove_one::<Placement>(e).unwrap();
        assert!(!entities.has_placement(e));
        assert!(entities.is_active(e));
    }
}
