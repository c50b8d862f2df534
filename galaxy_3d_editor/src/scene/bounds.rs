/// Bounding volumes for scene components.
///
/// An `AABB` is stored in the component's local space; an
/// `OrientedBoundingBox` pairs it with the component's world transform,
/// which is what the debug overlay draws.

use glam::{Mat4, Vec3};

// ===== AABB =====

/// Axis-Aligned Bounding Box in local space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
}

impl AABB {
    /// Box centered on `center` with the given half-extents.
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Center point
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Full size along each axis
    pub fn dimensions(&self) -> Vec3 {
        self.max - self.min
    }

    /// Half size along each axis
    pub fn half_extents(&self) -> Vec3 {
        self.dimensions() * 0.5
    }

    /// Transform this local-space AABB by a matrix, returning a new AABB.
    ///
    /// Uses the Arvo method: projects each matrix axis onto the AABB extents
    /// for an exact (tight) result without transforming all 8 corners.
    pub fn transformed(&self, matrix: &Mat4) -> AABB {
        let translation = matrix.col(3).truncate();
        let mut new_min = translation;
        let mut new_max = translation;

        for i in 0..3 {
            let axis = matrix.col(i).truncate();
            let a = axis * self.min[i];
            let b = axis * self.max[i];
            new_min += a.min(b);
            new_max += a.max(b);
        }

        AABB { min: new_min, max: new_max }
    }

    /// Test if this AABB fully contains another AABB.
    pub fn contains(&self, other: &AABB) -> bool {
        self.min.x <= other.min.x && self.max.x >= other.max.x
        && self.min.y <= other.min.y && self.max.y >= other.max.y
        && self.min.z <= other.min.z && self.max.z >= other.max.z
    }

    /// Test if this AABB intersects (overlaps or touches) another AABB.
    pub fn intersects(&self, other: &AABB) -> bool {
        self.min.x <= other.max.x && self.max.x >= other.min.x
        && self.min.y <= other.max.y && self.max.y >= other.min.y
        && self.min.z <= other.max.z && self.max.z >= other.min.z
    }
}

// ===== ORIENTED BOUNDING BOX =====

/// Local AABB plus the transform that places it in the world.
///
/// Corner accessors are named after the (x, y, z) choice of min (0) or
/// max (1) and return world-space points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedBoundingBox {
    bounds: AABB,
    transform: Mat4,
}

impl OrientedBoundingBox {
    pub fn new(bounds: AABB, transform: Mat4) -> Self {
        Self { bounds, transform }
    }

    /// Local-space bounds
    pub fn bounds(&self) -> &AABB {
        &self.bounds
    }

    /// Local-to-world transform
    pub fn transform(&self) -> &Mat4 {
        &self.transform
    }

    pub fn set_transform(&mut self, transform: Mat4) {
        self.transform = transform;
    }

    /// Same bounds with an identity transform.
    ///
    /// Debug meshes are built from this template once; the live transform
    /// is applied per frame on the instance.
    pub fn local_template(&self) -> OrientedBoundingBox {
        OrientedBoundingBox::new(self.bounds, Mat4::IDENTITY)
    }

    fn corner(&self, x_max: bool, y_max: bool, z_max: bool) -> Vec3 {
        let local = Vec3::new(
            if x_max { self.bounds.max.x } else { self.bounds.min.x },
            if y_max { self.bounds.max.y } else { self.bounds.min.y },
            if z_max { self.bounds.max.z } else { self.bounds.min.z },
        );
        self.transform.transform_point3(local)
    }

    pub fn corner000(&self) -> Vec3 { self.corner(false, false, false) }
    pub fn corner001(&self) -> Vec3 { self.corner(false, false, true) }
    pub fn corner010(&self) -> Vec3 { self.corner(false, true, false) }
    pub fn corner011(&self) -> Vec3 { self.corner(false, true, true) }
    pub fn corner100(&self) -> Vec3 { self.corner(true, false, false) }
    pub fn corner101(&self) -> Vec3 { self.corner(true, false, true) }
    pub fn corner110(&self) -> Vec3 { self.corner(true, true, false) }
    pub fn corner111(&self) -> Vec3 { self.corner(true, true, true) }

    /// All eight corners in box-edge builder order:
    /// 000, 010, 100, 110, 001, 011, 101, 111.
    pub fn corners(&self) -> [Vec3; 8] {
        [
            self.corner000(),
            self.corner010(),
            self.corner100(),
            self.corner110(),
            self.corner001(),
            self.corner011(),
            self.corner101(),
            self.corner111(),
        ]
    }
}
