//! ECS World implementation
//!
//! The world owns everything the collision system only borrows: entity
//! allocation, the rectangle arena shared with movement systems, and the
//! event bus collision events are published to.

use super::Entity;
use crate::events::EventBus;
use crate::foundation::collections::{HandleMap, RectKey};
use crate::physics::collision::OrientedRect;

/// ECS World containing entities, their rectangles and the event bus
pub struct World {
    next_entity_id: u32,
    entities: Vec<Entity>,
    rects: HandleMap<RectKey, OrientedRect>,
    events: EventBus,
}

impl World {
    /// Create a new world
    pub fn new() -> Self {
        Self {
            next_entity_id: 0,
            entities: Vec::new(),
            rects: HandleMap::with_key(),
            events: EventBus::new(),
        }
    }

    /// Create a new entity
    pub fn create_entity(&mut self) -> Entity {
        let entity = Entity::new(self.next_entity_id);
        self.next_entity_id += 1;
        self.entities.push(entity);
        entity
    }

    /// Forget an entity; its rectangles stay until removed explicitly
    pub fn destroy_entity(&mut self, entity: Entity) {
        self.entities.retain(|&e| e != entity);
    }

    /// Get an iterator over all entities
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Store a rectangle and return its handle
    pub fn insert_rect(&mut self, rect: OrientedRect) -> RectKey {
        self.rects.insert(rect)
    }

    /// Remove a rectangle; rows still pointing at it are skipped by the collision system
    pub fn remove_rect(&mut self, key: RectKey) -> Option<OrientedRect> {
        self.rects.remove(key)
    }

    /// Get a rectangle
    pub fn rect(&self, key: RectKey) -> Option<&OrientedRect> {
        self.rects.get(key)
    }

    /// Get a mutable rectangle (movement, animation)
    pub fn rect_mut(&mut self, key: RectKey) -> Option<&mut OrientedRect> {
        self.rects.get_mut(key)
    }

    /// Number of stored rectangles
    pub fn rect_count(&self) -> usize {
        self.rects.len()
    }

    /// Event bus
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Mutable event bus
    pub fn events_mut(&mut self) -> &mut EventBus {
        &mut self.events
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entities_get_unique_ids() {
        let mut world = World::new();
        let a = world.create_entity();
        let b = world.create_entity();

        assert_ne!(a, b);
        assert_eq!(world.entities().count(), 2);

        world.destroy_entity(a);
        assert_eq!(world.entities().copied().collect::<Vec<_>>(), vec![b]);
    }

    #[test]
    fn test_rect_arena() {
        let mut world = World::new();
        let key = world.insert_rect(OrientedRect::new(0.0, 0.0, 5.0, 5.0));

        world.rect_mut(key).unwrap().position.x = 3.0;
        assert_eq!(world.rect(key).unwrap().position.x, 3.0);

        assert!(world.remove_rect(key).is_some());
        assert!(world.rect(key).is_none());
        assert_eq!(world.rect_count(), 0);
    }
}
