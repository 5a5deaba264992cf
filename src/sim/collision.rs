//! Radius-based collision detection
//!
//! Every entity is a circle for hit purposes. Overlap is decided on squared
//! distances, so no square roots are taken on the hot path.

use glam::Vec2;

/// True when two circles overlap: center distance within the sum of radii.
/// Touching exactly counts as overlapping.
#[inline]
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    let reach = a_radius + b_radius;
    a.distance_squared(b) <= reach * reach
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_circles_hit() {
        assert!(circles_overlap(
            Vec2::new(0.0, 0.0),
            5.0,
            Vec2::new(3.0, 0.0),
            5.0
        ));
    }

    #[test]
    fn test_touching_circles_hit() {
        // 3-4-5 triangle: centers exactly 5 apart, radii sum to 5.
        assert!(circles_overlap(
            Vec2::new(0.0, 0.0),
            3.0,
            Vec2::new(3.0, 4.0),
            2.0
        ));
    }

    #[test]
    fn test_separated_circles_miss() {
        assert!(!circles_overlap(
            Vec2::new(0.0, 0.0),
            3.0,
            Vec2::new(10.0, 0.0),
            3.0
        ));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = Vec2::new(2.0, 7.0);
        let b = Vec2::new(6.5, 4.0);
        assert_eq!(
            circles_overlap(a, 4.0, b, 1.5),
            circles_overlap(b, 1.5, a, 4.0)
        );
    }

    #[test]
    fn test_zero_radius_point_inside() {
        assert!(circles_overlap(
            Vec2::new(50.0, 50.0),
            5.0,
            Vec2::new(52.0, 51.0),
            0.0
        ));
    }
}
