//! Math utilities and types
//!
//! Provides the 2D vector type and the rotation helpers used by the
//! collision geometry. All angles handed to the public API are in degrees,
//! rotation is clockwise in screen space (Y pointing down).

pub use nalgebra::{Rotation2, Vector2};

/// 2D vector type, used for both points and displacements
pub type Vec2 = Vector2<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::{constants, Rotation2, Vec2};

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * constants::RAD_TO_DEG
    }

    /// Rotation matrix for an angle given in degrees
    pub fn rotation_deg(degrees: f32) -> Rotation2<f32> {
        Rotation2::new(deg_to_rad(degrees))
    }

    /// Rotate `point` by `degrees` around `pivot`
    pub fn rotate_about(point: Vec2, pivot: Vec2, degrees: f32) -> Vec2 {
        pivot + rotation_deg(degrees) * (point - pivot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_degree_conversion_round_trip() {
        assert_abs_diff_eq!(utils::rad_to_deg(utils::deg_to_rad(37.5)), 37.5, epsilon = 1e-4);
        assert_abs_diff_eq!(utils::deg_to_rad(180.0), constants::PI, epsilon = 1e-6);
    }

    #[test]
    fn test_rotate_about_pivot() {
        let rotated = utils::rotate_about(Vec2::new(2.0, 1.0), Vec2::new(1.0, 1.0), 90.0);
        assert_abs_diff_eq!(rotated, Vec2::new(1.0, 2.0), epsilon = 1e-5);

        let back = utils::rotate_about(rotated, Vec2::new(1.0, 1.0), -90.0);
        assert_abs_diff_eq!(back, Vec2::new(2.0, 1.0), epsilon = 1e-5);
    }
}
