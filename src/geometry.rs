//! 3D point and vector algebra
//!
//! Point arithmetic (difference, dot and cross products, magnitude) and
//! the angle between two planes given four points.

use std::ops::Sub;

use serde::{Deserialize, Serialize};

/// A point (or vector) in 3D space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Dot product
    pub fn dot(&self, other: Point3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product
    pub fn cross(&self, other: Point3) -> Point3 {
        Point3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Euclidean length
    pub fn magnitude(&self) -> f64 {
        self.dot(*self).sqrt()
    }
}

impl Sub for Point3 {
    type Output = Point3;

    fn sub(self, rhs: Point3) -> Point3 {
        Point3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Angle in degrees between the planes ABC and BCD.
///
/// Uses the normals `(b-a)×(c-b)` and `(c-b)×(d-c)`. Returns 0 when
/// either normal degenerates to the zero vector (collinear points).
pub fn plane_angle(a: Point3, b: Point3, c: Point3, d: Point3) -> f64 {
    let ab = b - a;
    let bc = c - b;
    let cd = d - c;

    let n1 = ab.cross(bc);
    let n2 = bc.cross(cd);

    let denom = n1.magnitude() * n2.magnitude();
    if denom == 0.0 {
        return 0.0;
    }

    let cos = (n1.dot(n2) / denom).clamp(-1.0, 1.0);
    cos.acos().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_difference() {
        let p1 = Point3::new(1.0, 2.0, 3.0);
        let p2 = Point3::new(4.0, 5.0, 6.0);

        assert_eq!(p1 - p2, Point3::new(-3.0, -3.0, -3.0));
    }

    #[test]
    fn test_cross_product() {
        let p1 = Point3::new(1.0, 2.0, 3.0);
        let p2 = Point3::new(4.0, 5.0, 6.0);

        assert_eq!(p1.cross(p2), Point3::new(-3.0, 6.0, -3.0));
    }

    #[test]
    fn test_dot_and_magnitude() {
        let p1 = Point3::new(1.0, 2.0, 3.0);
        let p2 = Point3::new(4.0, 5.0, 6.0);

        assert_eq!(p1.dot(p2), 32.0);
        assert!((p1.magnitude() - 14.0_f64.sqrt()).abs() < 1e-10);
    }

    #[test]
    fn test_plane_angle_perpendicular() {
        // ABC lies in the xy-plane, BCD in the xz-plane
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 0.0, 0.0);
        let c = Point3::new(1.0, 1.0, 0.0);
        let d = Point3::new(1.0, 1.0, 1.0);

        assert!((plane_angle(a, b, c, d) - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_plane_angle_coplanar() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 0.0, 0.0);
        let c = Point3::new(1.0, 1.0, 0.0);
        let d = Point3::new(0.0, 2.0, 0.0);

        assert!(plane_angle(a, b, c, d).abs() < 1e-9);
    }

    #[test]
    fn test_plane_angle_collinear_is_zero() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 0.0, 0.0);
        let c = Point3::new(2.0, 0.0, 0.0);
        let d = Point3::new(3.0, 1.0, 0.0);

        assert_eq!(plane_angle(a, b, c, d), 0.0);
    }
}
