//! Basic geometric primitives for 2D collision detection
//!
//! Pure value types: line segments, axis-aligned boxes and ellipses.
//! Points and displacements are plain [`Vec2`]s.

use crate::foundation::math::Vec2;

/// A directed line segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    /// Start point
    pub p1: Vec2,
    /// End point
    pub p2: Vec2,
}

impl Line {
    /// Creates a new segment from `p1` to `p2`
    pub fn new(p1: Vec2, p2: Vec2) -> Self {
        Self { p1, p2 }
    }

    /// Map both endpoints through `f`, keeping direction
    pub fn map(&self, f: impl Fn(Vec2) -> Vec2) -> Self {
        Self::new(f(self.p1), f(self.p2))
    }

    /// Test whether `ray` crosses this edge for even-odd counting
    ///
    /// Half-open rule: the edge counts only when exactly one endpoint lies
    /// strictly to the positive side of the ray's line, with endpoints on the
    /// line treated as the non-positive side. A ray through a shared vertex
    /// therefore counts exactly one of the two edges meeting there, and a
    /// ray grazing a vertex counts both or neither. The ray's own endpoints
    /// must also lie strictly on opposite sides of the edge.
    pub fn crossed_by(&self, ray: &Line) -> bool {
        let p1_above = orientation(ray.p1, ray.p2, self.p1) > 0.0;
        let p2_above = orientation(ray.p1, ray.p2, self.p2) > 0.0;
        if p1_above == p2_above {
            return false;
        }

        let start = orientation(self.p1, self.p2, ray.p1);
        let end = orientation(self.p1, self.p2, ray.p2);
        (start > 0.0 && end < 0.0) || (start < 0.0 && end > 0.0)
    }
}

/// Signed area of the parallelogram spanned by `a->b` and `a->c`
fn orientation(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    (b - a).perp(&(c - a))
}

/// Axis-aligned bounding box
///
/// `min <= max` on both axes is the intended invariant; the legacy bounds
/// fold on [`OrientedRect`](super::OrientedRect) can break it on X.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner
    pub min: Vec2,
    /// Maximum corner
    pub max: Vec2,
}

impl Aabb {
    /// Creates a new box from its corners
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box with the given top-left corner and size
    pub fn from_position_size(position: Vec2, size: Vec2) -> Self {
        Self::new(position, position + size)
    }

    /// Grow the box by `margin / 2` on every side
    ///
    /// A margin of `(10, 4)` widens the box by 10 and heightens it by 4 in total.
    pub fn expanded(&self, margin: Vec2) -> Self {
        let half = margin * 0.5;
        Self::new(self.min - half, self.max + half)
    }

    /// Extent along X
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Extent along Y
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Center point
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }
}

/// Ellipse in a rectangle's un-rotated local frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    /// Center X
    pub cx: f32,
    /// Center Y
    pub cy: f32,
    /// Horizontal radius
    pub rx: f32,
    /// Vertical radius
    pub ry: f32,
}

impl Ellipse {
    /// Creates a new ellipse
    pub fn new(cx: f32, cy: f32, rx: f32, ry: f32) -> Self {
        Self { cx, cy, rx, ry }
    }

    /// Test a local-space point against the ellipse interior (boundary excluded)
    ///
    /// Solves the implicit equation for the admissible half-height at the
    /// point's X offset from the center.
    pub fn contains_local(&self, local: Vec2) -> bool {
        let dx = local.x - self.cx;
        if dx.abs() >= self.rx {
            return false;
        }

        let half_height = self.ry * (1.0 - (dx * dx) / (self.rx * self.rx)).sqrt();
        (local.y - self.cy).abs() < half_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_crosses_edge() {
        let ray = Line::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let edge = Line::new(Vec2::new(0.0, 10.0), Vec2::new(10.0, 0.0));
        assert!(edge.crossed_by(&ray));
    }

    #[test]
    fn test_parallel_and_disjoint_edges() {
        let ray = Line::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
        let parallel = Line::new(Vec2::new(0.0, 1.0), Vec2::new(10.0, 1.0));
        let beyond = Line::new(Vec2::new(20.0, -5.0), Vec2::new(20.0, 5.0));
        let collinear = Line::new(Vec2::new(2.0, 0.0), Vec2::new(6.0, 0.0));
        assert!(!parallel.crossed_by(&ray));
        assert!(!beyond.crossed_by(&ray));
        assert!(!collinear.crossed_by(&ray));
    }

    #[test]
    fn test_vertex_on_ray_counts_one_edge() {
        // Horizontal ray through the shared vertex (5, 0)
        let ray = Line::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
        let upper = Line::new(Vec2::new(5.0, 5.0), Vec2::new(5.0, 0.0));
        let lower = Line::new(Vec2::new(5.0, 0.0), Vec2::new(5.0, -5.0));

        // Passing through: exactly one of the two edges counts
        assert_ne!(upper.crossed_by(&ray), lower.crossed_by(&ray));

        // Grazing a vertex from one side: both or neither
        let left_upper = Line::new(Vec2::new(3.0, 5.0), Vec2::new(5.0, 0.0));
        let right_upper = Line::new(Vec2::new(5.0, 0.0), Vec2::new(7.0, 5.0));
        assert_eq!(left_upper.crossed_by(&ray), right_upper.crossed_by(&ray));
    }

    #[test]
    fn test_aabb_expanded_by_half_margin() {
        let aabb = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let grown = aabb.expanded(Vec2::new(4.0, 2.0));

        assert_eq!(grown.min, Vec2::new(-2.0, -1.0));
        assert_eq!(grown.max, Vec2::new(12.0, 11.0));
        assert_eq!(grown.width(), 14.0);
        assert_eq!(grown.center(), aabb.center());
    }

    #[test]
    fn test_ellipse_contains_local() {
        let ellipse = Ellipse::new(10.0, 5.0, 10.0, 5.0);

        assert!(ellipse.contains_local(Vec2::new(10.0, 5.0)));
        assert!(ellipse.contains_local(Vec2::new(1.0, 5.0)));
        // Inside the bounding box, outside the curve
        assert!(!ellipse.contains_local(Vec2::new(1.0, 1.0)));
        // On the horizontal extremes
        assert!(!ellipse.contains_local(Vec2::new(0.0, 5.0)));
        assert!(!ellipse.contains_local(Vec2::new(20.0, 5.0)));
        // On the vertical extremes
        assert!(!ellipse.contains_local(Vec2::new(10.0, 0.0)));
    }
}
