//! # collide2d
//!
//! A 2D collision detection and resolution kernel for entity-component
//! game engines.
//!
//! ## Features
//!
//! - **Oriented Rectangles**: Rotated footprints with corner, bounding box
//!   and point containment queries
//! - **Hitbox Shapes**: Optional ellipse and polygon hitboxes in local space
//! - **Collision Groups**: 8-bit active/passive masks with a solids mask
//! - **MTD Resolution**: Single-axis pushout, asymmetric or split 50/50
//! - **Events**: One event per detected overlap, queued on a bus
//!
//! ## Quick Start
//!
//! ```rust
//! use collide2d::prelude::*;
//!
//! let mut world = World::new();
//! let mut collisions = CollisionSystem::new(CollisionGroups::GROUP_0);
//!
//! let player = world.create_entity();
//! let player_rect = world.insert_rect(OrientedRect::new(0.0, 0.0, 10.0, 10.0));
//! collisions.register(
//!     player,
//!     CollisionDescriptor::new(CollisionGroups::GROUP_0, CollisionGroups::empty()),
//!     player_rect,
//! );
//!
//! let wall = world.create_entity();
//! let wall_rect = world.insert_rect(OrientedRect::new(8.0, 0.0, 10.0, 10.0));
//! collisions.register(
//!     wall,
//!     CollisionDescriptor::new(CollisionGroups::empty(), CollisionGroups::GROUP_0),
//!     wall_rect,
//! );
//!
//! collisions.update(&mut world, 1.0 / 60.0);
//!
//! assert_eq!(world.rect(player_rect).unwrap().position, Vec2::new(-2.0, 0.0));
//! assert_eq!(world.events_mut().drain().len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod ecs;
pub mod events;
pub mod physics;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{CollisionConfig, Config, ConfigError},
        ecs::{
            components::CollisionDescriptor,
            systems::CollisionSystem,
            Entity, System, World,
        },
        events::{CollisionEvent, EventBus, EventHandler},
        foundation::{
            collections::RectKey,
            math::Vec2,
        },
        physics::{Aabb, CollisionGroups, Ellipse, HitboxShape, Line, OrientedRect},
    };
}
