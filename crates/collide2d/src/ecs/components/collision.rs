//! Collision components for ECS
//!
//! Based on Game Engine Architecture 3rd Edition:
//! - Section 13.3.8: Collision filtering
//! - Section 16.2: Component-based architecture

use crate::foundation::math::Vec2;
use crate::physics::collision_groups::CollisionGroups;

/// Per-entity collision configuration and last-tick result
///
/// An entity with an empty `active` set never initiates a check; it can
/// still be found by others through `passive`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionDescriptor {
    /// Groups this entity tests against others
    pub active: CollisionGroups,

    /// Groups others test against this entity
    pub passive: CollisionGroups,

    /// Broad-phase padding, half applied on each side
    pub margin: Vec2,

    /// Groups matched during the latest tick in which this entity initiated
    ///
    /// Written only for entities with a non-empty `active` set, so a purely
    /// passive entity keeps whatever value it had.
    pub last_collided: CollisionGroups,
}

impl CollisionDescriptor {
    /// Create a descriptor without margin
    pub fn new(active: CollisionGroups, passive: CollisionGroups) -> Self {
        Self {
            active,
            passive,
            margin: Vec2::zeros(),
            last_collided: CollisionGroups::empty(),
        }
    }

    /// Set the broad-phase margin (builder pattern)
    pub fn with_margin(mut self, margin: Vec2) -> Self {
        self.margin = margin;
        self
    }

    /// Whether this entity never initiates checks
    pub fn is_passive_only(&self) -> bool {
        self.active.is_empty()
    }

    /// Whether the latest initiating tick matched any group
    pub fn is_colliding(&self) -> bool {
        !self.last_collided.is_empty()
    }
}

impl Default for CollisionDescriptor {
    fn default() -> Self {
        Self::new(CollisionGroups::empty(), CollisionGroups::empty())
    }
}
