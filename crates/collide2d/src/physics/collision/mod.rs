//! Collision geometry
//!
//! Narrow-phase geometry for 2D entities: oriented rectangles, their
//! bounding boxes and point containment against optional hitbox shapes.
//!
//! # Architecture
//!
//! - **Local Space Storage**: Hitbox shapes are stored relative to the
//!   rectangle's un-rotated top-left corner
//! - **On-Demand Transformation**: Query points or polygon edges are mapped
//!   between frames only while a test runs
//!
//! # Module Organization
//!
//! - [`primitives`] - Basic geometric primitives (segments, boxes, ellipses)
//! - [`shape`] - Hitbox shape variants
//! - [`oriented_rect`] - The rotated rectangle footprint

pub mod primitives;
pub mod shape;
pub mod oriented_rect;

// Re-export commonly used types
pub use primitives::{Aabb, Ellipse, Line};
pub use shape::HitboxShape;
pub use oriented_rect::OrientedRect;
