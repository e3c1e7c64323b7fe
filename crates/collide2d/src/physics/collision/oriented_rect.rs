//! Oriented rectangle: an entity's spatial footprint
//!
//! The rectangle is anchored at its un-rotated top-left corner (`position`)
//! and rotated clockwise about that corner by `rotation_degrees`. Optional
//! hitbox shapes refine containment queries; with none, the whole rectangle
//! is the hitbox.

use crate::foundation::math::{utils, Vec2};
use super::primitives::Aabb;
use super::shape::HitboxShape;

/// Relative tolerance under which a corner-pair triangle counts as reaching
/// half the rectangle's area. Absorbs rotation rounding for edge points.
const BOUNDARY_TOLERANCE: f32 = 1e-4;

/// A rotated rectangle with optional local-space hitboxes
#[derive(Debug, Clone, PartialEq)]
pub struct OrientedRect {
    /// Un-rotated top-left corner, also the rotation pivot
    pub position: Vec2,
    /// Width before rotation
    pub width: f32,
    /// Height before rotation
    pub height: f32,
    /// Clockwise rotation about `position`, in degrees
    pub rotation_degrees: f32,
    /// Hitbox shapes in the un-rotated local frame
    pub hitboxes: Vec<HitboxShape>,
}

impl OrientedRect {
    /// Creates an un-rotated rectangle without hitboxes
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            width,
            height,
            rotation_degrees: 0.0,
            hitboxes: Vec::new(),
        }
    }

    /// Set the rotation (builder pattern)
    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation_degrees = degrees;
        self
    }

    /// Add a hitbox shape (builder pattern)
    pub fn with_hitbox(mut self, shape: HitboxShape) -> Self {
        self.hitboxes.push(shape);
        self
    }

    /// Un-rotated size as a vector
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Area of the rectangle (rotation invariant)
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Move the rectangle by `offset`
    pub fn translate(&mut self, offset: Vec2) {
        self.position += offset;
    }

    /// Map a point from the local frame to world space
    pub fn local_to_world(&self, local: Vec2) -> Vec2 {
        utils::rotate_about(self.position + local, self.position, self.rotation_degrees)
    }

    /// Map a world-space point into the un-rotated local frame
    pub fn world_to_local(&self, world: Vec2) -> Vec2 {
        utils::rotate_about(world, self.position, -self.rotation_degrees) - self.position
    }

    /// The four corners in world space
    ///
    /// Order: top-left (equal to `position`), then the rotated top-right,
    /// bottom-left and bottom-right.
    pub fn corners(&self) -> [Vec2; 4] {
        let rotation = utils::rotation_deg(self.rotation_degrees);
        [
            self.position,
            self.position + rotation * Vec2::new(self.width, 0.0),
            self.position + rotation * Vec2::new(0.0, self.height),
            self.position + rotation * Vec2::new(self.width, self.height),
        ]
    }

    /// Smallest axis-aligned box enclosing the rectangle
    pub fn aabb(&self) -> Aabb {
        if self.rotation_degrees == 0.0 {
            return Aabb::from_position_size(self.position, self.size());
        }

        let mut min = Vec2::repeat(f32::INFINITY);
        let mut max = Vec2::repeat(f32::NEG_INFINITY);
        for corner in self.corners() {
            min = min.inf(&corner);
            max = max.sup(&corner);
        }
        Aabb::new(min, max)
    }

    /// Bounding box computed with the legacy X fold
    ///
    /// X only checks for a new maximum when the corner was not a new
    /// minimum, so the first corner never sets `max.x` and a strictly
    /// decreasing run of X values (e.g. 135° on a tall rectangle) leaves it at
    /// `-inf`. Y is folded correctly. Selected
    /// through `CollisionConfig::legacy_bounds`.
    pub fn aabb_legacy(&self) -> Aabb {
        if self.rotation_degrees == 0.0 {
            return Aabb::from_position_size(self.position, self.size());
        }

        let mut min = Vec2::repeat(f32::INFINITY);
        let mut max = Vec2::repeat(f32::NEG_INFINITY);
        for corner in self.corners() {
            if corner.x < min.x {
                min.x = corner.x;
            } else if corner.x > max.x {
                max.x = corner.x;
            }

            if corner.y < min.y {
                min.y = corner.y;
            }
            if corner.y > max.y {
                max.y = corner.y;
            }
        }
        Aabb::new(min, max)
    }

    /// Center of the rectangle in world space
    pub fn center(&self) -> Vec2 {
        self.local_to_world(self.size() * 0.5)
    }

    /// Move the rectangle so its center lands on `center`
    pub fn set_center(&mut self, center: Vec2) {
        let offset = utils::rotation_deg(self.rotation_degrees) * (self.size() * 0.5);
        self.position = center - offset;
    }

    /// Test whether a world-space point lies strictly inside the footprint
    ///
    /// Points on the boundary are not contained. Without hitboxes the
    /// rectangle itself is tested; otherwise the point must fall inside at
    /// least one hitbox.
    pub fn contains(&self, point: Vec2) -> bool {
        if self.hitboxes.is_empty() {
            return self.contains_by_triangles(point);
        }

        let local = self.world_to_local(point);
        self.hitboxes
            .iter()
            .any(|shape| shape.contains(local, point, |p| self.local_to_world(p)))
    }

    /// Triangle-area containment over every pair of corners
    ///
    /// For each of the six corner pairs the triangle with `point` is measured
    /// through its height over the pair (law of cosines). Inside the
    /// rectangle every such triangle is smaller than half the rectangle; on
    /// an edge the triangle over the opposite edge reaches half, which is
    /// what makes the test boundary-exclusive. Triangles within
    /// [`BOUNDARY_TOLERANCE`] of half the area count as reaching it.
    fn contains_by_triangles(&self, point: Vec2) -> bool {
        let half_area = self.area().abs() * 0.5;
        if half_area == 0.0 {
            return false;
        }

        let corners = self.corners();
        for i in 0..corners.len() {
            for j in (i + 1)..corners.len() {
                let a_sq = (point - corners[i]).norm_squared();
                let b_sq = (point - corners[j]).norm_squared();
                let c_sq = (corners[j] - corners[i]).norm_squared();
                if c_sq == 0.0 {
                    continue;
                }

                let c = c_sq.sqrt();
                let foot = (a_sq - b_sq + c_sq) / (2.0 * c);
                let height = (a_sq - foot * foot).max(0.0).sqrt();
                let triangle = c * height * 0.5;
                if triangle >= half_area
                    || approx::relative_eq!(
                        triangle,
                        half_area,
                        max_relative = BOUNDARY_TOLERANCE
                    )
                {
                    return false;
                }
            }
        }
        true
    }
}
