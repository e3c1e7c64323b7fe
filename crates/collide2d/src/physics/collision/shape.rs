//! Hitbox shapes attached to oriented rectangles
//!
//! Shapes are stored in the owning rectangle's un-rotated local frame
//! (origin at its un-rotated top-left corner) and are only brought into
//! world space while a containment query runs.

use crate::foundation::math::Vec2;
use super::primitives::{Ellipse, Line};

/// Far end of the parity ray, well outside any scene the engine expects.
/// Slightly oblique so rays rarely run along axis-aligned polygon edges.
const RAY_FAR_X: f32 = -100_000.0;
const RAY_FAR_Y: f32 = -73_000.0;

/// Hitbox shape kinds (stored in LOCAL space)
#[derive(Debug, Clone, PartialEq)]
pub enum HitboxShape {
    /// Elliptical hitbox
    Ellipse(Ellipse),
    /// Polygon outline made of ordered edges, possibly open
    Polygon(Vec<Line>),
}

impl HitboxShape {
    /// Creates an elliptical hitbox
    pub fn ellipse(cx: f32, cy: f32, rx: f32, ry: f32) -> Self {
        Self::Ellipse(Ellipse::new(cx, cy, rx, ry))
    }

    /// Creates a closed polygon hitbox from its vertices
    ///
    /// Consecutive vertices become edges and the last vertex is joined back
    /// to the first. Fewer than two vertices yield an empty outline, which
    /// never reports containment.
    pub fn polygon_from_points(points: &[Vec2]) -> Self {
        if points.len() < 2 {
            return Self::Polygon(Vec::new());
        }

        let edges = points
            .iter()
            .zip(points.iter().cycle().skip(1))
            .map(|(&p1, &p2)| Line::new(p1, p2))
            .collect();
        Self::Polygon(edges)
    }

    /// Test a point against this hitbox
    ///
    /// `local` is the query point in the rectangle's local frame, `world` the
    /// same point in world space, and `to_world` maps local points to world
    /// space. Ellipses are tested in local space; polygons cast a world-space
    /// ray and apply the even-odd rule to the transformed edges. Open outlines
    /// are counted as given, without an implied closing edge.
    pub fn contains(&self, local: Vec2, world: Vec2, to_world: impl Fn(Vec2) -> Vec2) -> bool {
        match self {
            Self::Ellipse(ellipse) => ellipse.contains_local(local),
            Self::Polygon(edges) => {
                let ray = Line::new(world, Vec2::new(RAY_FAR_X, RAY_FAR_Y));
                let crossings = edges
                    .iter()
                    .map(|edge| edge.map(&to_world))
                    .filter(|edge| edge.crossed_by(&ray))
                    .count();
                crossings % 2 == 1
            }
        }
    }
}
