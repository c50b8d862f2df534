/// Ray - half-line used for cursor picking.

use glam::Vec3;

/// A ray with a world-space origin and a unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point (on the near plane for pick rays)
    pub origin: Vec3,
    /// Normalized direction
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray, normalizing the direction.
    ///
    /// A zero direction is kept as-is (`normalize_or_zero`); such a ray
    /// never hits anything.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point at parameter `t` along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_new_normalizes_direction() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, -10.0, 0.0));
        assert_eq!(ray.direction, Vec3::NEG_Y);
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vec3::new(1.0, 5.0, 1.0), Vec3::NEG_Y);
        assert_eq!(ray.at(5.0), Vec3::new(1.0, 0.0, 1.0));
    }

    #[test]
    fn test_ray_zero_direction() {
        let ray = Ray::new(Vec3::ONE, Vec3::ZERO);
        assert_eq!(ray.direction, Vec3::ZERO);
    }
}
