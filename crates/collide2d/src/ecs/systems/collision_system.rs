//! ECS collision system
//!
//! Based on Game Engine Architecture 3rd Edition:
//! - Section 13.3: Collision Detection System
//! - Section 16.6: Updating Game Objects in Real Time
//!
//! Keeps a flat, ordered list of registered entities and once per tick
//! tests every active entity against every other row, publishing an event
//! per overlap and pushing solid overlaps apart.
//!
//! # Ordering
//!
//! Resolution is sequential and depends on registration order. Rows are
//! walked by index, and a row moved earlier in the pass presents its new
//! position to every pair tested after it in the same tick. The pass is not
//! simultaneous and is not meant to be.

use crate::config::CollisionConfig;
use crate::ecs::components::CollisionDescriptor;
use crate::ecs::{Entity, System, World};
use crate::events::CollisionEvent;
use crate::foundation::collections::RectKey;
use crate::foundation::math::Vec2;
use crate::physics::collision::Aabb;
use crate::physics::collision_groups::CollisionGroups;
use crate::physics::collision_system::{resolve_pair, Response};

/// One registered row
#[derive(Debug, Clone)]
struct CollisionEntry {
    entity: Entity,
    descriptor: CollisionDescriptor,
    rect: RectKey,
}

/// Brute-force pairwise collision detection and MTD resolution
///
/// The system never creates or destroys entities; it reads and writes the
/// positions of the rectangles it was registered with and the descriptor
/// rows it owns.
pub struct CollisionSystem {
    entries: Vec<CollisionEntry>,
    solids: CollisionGroups,
    legacy_bounds: bool,
}

impl CollisionSystem {
    /// Create a system where matches on `solids` push entities apart
    pub fn new(solids: CollisionGroups) -> Self {
        Self {
            entries: Vec::new(),
            solids,
            legacy_bounds: false,
        }
    }

    /// Create a system from loaded configuration
    pub fn from_config(config: &CollisionConfig) -> Self {
        let mut system = Self::new(config.solids);
        system.legacy_bounds = config.legacy_bounds;
        system
    }

    /// Register an entity with its descriptor and rectangle
    ///
    /// No uniqueness check: registering the same entity twice adds a second,
    /// independent row.
    pub fn register(&mut self, entity: Entity, descriptor: CollisionDescriptor, rect: RectKey) {
        log::debug!(
            "Registering collider for entity {} (active {:#010b}, passive {:#010b})",
            entity.id(),
            descriptor.active.bits(),
            descriptor.passive.bits()
        );
        self.entries.push(CollisionEntry {
            entity,
            descriptor,
            rect,
        });
    }

    /// Remove the first row registered for `entity`; no-op when absent
    pub fn unregister(&mut self, entity: Entity) {
        match self.entries.iter().position(|entry| entry.entity == entity) {
            Some(index) => {
                self.entries.remove(index);
            }
            None => log::debug!("Unregister ignored, entity {} has no collider", entity.id()),
        }
    }

    /// Run one detection and resolution pass
    ///
    /// `delta_time` is accepted for symmetry with other systems; resolution
    /// is purely geometric. Events go to the world's event bus and are not
    /// dispatched here.
    pub fn update(&mut self, world: &mut World, _delta_time: f32) {
        for i in 0..self.entries.len() {
            if self.entries[i].descriptor.is_passive_only() {
                continue;
            }

            let Some(mut initiator_box) = self.broad_phase_box(world, i) else {
                log::trace!(
                    "Entity {} skipped, rectangle no longer exists",
                    self.entries[i].entity.id()
                );
                continue;
            };

            let mut collided = CollisionGroups::empty();
            for j in 0..self.entries.len() {
                if i == j {
                    continue;
                }

                let initiator = &self.entries[i];
                let other = &self.entries[j];
                if CollisionGroups::matched(initiator.descriptor.active, other.descriptor.passive)
                    .is_empty()
                {
                    continue;
                }

                let Some(other_box) = self.broad_phase_box(world, j) else {
                    continue;
                };

                let Some(outcome) = resolve_pair(
                    &initiator.descriptor,
                    &initiator_box,
                    &other.descriptor,
                    &other_box,
                    self.solids,
                ) else {
                    continue;
                };

                let (from, to) = (initiator.entity, other.entity);
                let (from_rect, to_rect) = (initiator.rect, other.rect);
                log::trace!(
                    "Entity {} overlaps {} on {:#010b}: {:?}",
                    from.id(),
                    to.id(),
                    outcome.matched.bits(),
                    outcome.response
                );

                match outcome.response {
                    Response::None => {}
                    Response::Push(mtd) => translate(world, from_rect, mtd),
                    Response::Split(mtd) => {
                        let half = mtd * 0.5;
                        translate(world, from_rect, half);
                        translate(world, to_rect, -half);
                        world
                            .events_mut()
                            .publish(CollisionEvent::new(to, from, outcome.matched));
                    }
                }

                collided |= outcome.matched;
                world
                    .events_mut()
                    .publish(CollisionEvent::new(from, to, outcome.matched));

                if let Some(moved) = self.broad_phase_box(world, i) {
                    initiator_box = moved;
                }
            }

            self.entries[i].descriptor.last_collided = collided;
        }
    }

    /// Margin-expanded bounding box of row `index`
    fn broad_phase_box(&self, world: &World, index: usize) -> Option<Aabb> {
        let entry = &self.entries[index];
        let rect = world.rect(entry.rect)?;
        let bounds = if self.legacy_bounds {
            rect.aabb_legacy()
        } else {
            rect.aabb()
        };
        Some(bounds.expanded(entry.descriptor.margin))
    }

    /// Descriptor of the first row registered for `entity`
    pub fn descriptor(&self, entity: Entity) -> Option<&CollisionDescriptor> {
        self.entries
            .iter()
            .find(|entry| entry.entity == entity)
            .map(|entry| &entry.descriptor)
    }

    /// Mutable descriptor of the first row registered for `entity`
    pub fn descriptor_mut(&mut self, entity: Entity) -> Option<&mut CollisionDescriptor> {
        self.entries
            .iter_mut()
            .find(|entry| entry.entity == entity)
            .map(|entry| &mut entry.descriptor)
    }

    /// Groups matched by `entity` in its latest initiating tick
    pub fn last_collided(&self, entity: Entity) -> Option<CollisionGroups> {
        self.descriptor(entity).map(|descriptor| descriptor.last_collided)
    }

    /// Registered entities in resolution order
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.entries.iter().map(|entry| entry.entity)
    }

    /// Number of registered rows
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no rows are registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Groups whose matches produce physical separation
    pub fn solids(&self) -> CollisionGroups {
        self.solids
    }

    /// Replace the solids mask
    pub fn set_solids(&mut self, solids: CollisionGroups) {
        self.solids = solids;
    }

    /// Whether the broad phase uses the legacy bounds fold
    pub fn legacy_bounds(&self) -> bool {
        self.legacy_bounds
    }

    /// Switch the broad phase between corrected and legacy bounds
    pub fn set_legacy_bounds(&mut self, enabled: bool) {
        self.legacy_bounds = enabled;
    }

    /// Drop all registrations
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl System for CollisionSystem {
    fn update(&mut self, world: &mut World, delta_time: f32) {
        CollisionSystem::update(self, world, delta_time);
    }
}

fn translate(world: &mut World, key: RectKey, offset: Vec2) {
    if let Some(rect) = world.rect_mut(key) {
        rect.translate(offset);
    }
}
