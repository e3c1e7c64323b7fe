//! Physics module for collision detection and response
//!
//! Provides oriented-rectangle geometry, collision group filtering and
//! minimum-translation resolution for overlapping boxes. Detection is
//! discrete and brute force; there is no spatial partitioning.

pub mod collision;
pub mod collision_groups;
pub mod collision_system;

pub use collision::{
    Aabb,
    Ellipse,
    HitboxShape,
    Line,
    OrientedRect,
};
pub use collision_groups::CollisionGroups;
pub use collision_system::{is_intersecting, minimum_translation, PairOutcome, Response};
