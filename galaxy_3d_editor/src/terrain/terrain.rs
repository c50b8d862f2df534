//! Height field terrain.
//!
//! A square grid of `resolution x resolution` vertices spanning `size` world
//! units on X and Z, starting at `position`. Heights are relative to
//! `position.y`. Vertex `(x, z)` is stored at `z * resolution + x`.

use glam::Vec3;
use crate::camera::Ray;
use crate::error::{Error, Result};
use super::splat_map::SplatMap;

/// Bisection steps used to refine a ray hit once the surface is bracketed
const REFINE_ITERATIONS: u32 = 16;

/// Vertical slack added around the height range when clipping rays
const HEIGHT_EPSILON: f32 = 1e-3;

// ===== DESCRIPTOR =====

/// Descriptor for creating a terrain
#[derive(Debug, Clone)]
pub struct TerrainDesc {
    /// Debug name
    pub name: String,
    /// World position of vertex (0, 0)
    pub position: Vec3,
    /// Extent on X and Z in world units
    pub size: f32,
    /// Vertices per side (>= 2)
    pub resolution: u32,
    /// Initial heights, row-major; empty for a flat terrain
    pub heights: Vec<f32>,
}

impl Default for TerrainDesc {
    fn default() -> Self {
        Self {
            name: "terrain".to_string(),
            position: Vec3::ZERO,
            size: 100.0,
            resolution: 101,
            heights: Vec::new(),
        }
    }
}

// ===== TERRAIN =====

#[derive(Debug, Clone)]
pub struct Terrain {
    name: String,
    position: Vec3,
    size: f32,
    resolution: u32,
    heights: Vec<f32>,
    splat_map: SplatMap,
}

impl Terrain {
    pub fn new(desc: TerrainDesc) -> Result<Self> {
        if desc.resolution < 2 {
            return Err(Error::InvalidResource(format!(
                "Terrain '{}' resolution must be at least 2 (got {})",
                desc.name, desc.resolution
            )));
        }
        if !(desc.size > 0.0) || !desc.size.is_finite() {
            return Err(Error::InvalidResource(format!(
                "Terrain '{}' size must be positive (got {})",
                desc.name, desc.size
            )));
        }

        let vertex_count = (desc.resolution * desc.resolution) as usize;
        let heights = if desc.heights.is_empty() {
            vec![0.0; vertex_count]
        } else if desc.heights.len() == vertex_count {
            desc.heights
        } else {
            return Err(Error::InvalidResource(format!(
                "Terrain '{}' has {} heights, expected {}",
                desc.name, desc.heights.len(), vertex_count
            )));
        };

        Ok(Self {
            name: desc.name,
            position: desc.position,
            size: desc.size,
            resolution: desc.resolution,
            heights,
            splat_map: SplatMap::new(desc.resolution),
        })
    }

    // ===== ACCESSORS =====

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Distance between neighbouring vertices
    pub fn cell_size(&self) -> f32 {
        self.size / (self.resolution - 1) as f32
    }

    pub fn heights(&self) -> &[f32] {
        &self.heights
    }

    pub fn splat_map(&self) -> &SplatMap {
        &self.splat_map
    }

    pub fn splat_map_mut(&mut self) -> &mut SplatMap {
        &mut self.splat_map
    }

    fn index(&self, x: u32, z: u32) -> Option<usize> {
        (x < self.resolution && z < self.resolution)
            .then(|| (z * self.resolution + x) as usize)
    }

    // ===== VERTICES =====

    /// Height of a grid vertex, relative to the terrain position
    pub fn vertex_height(&self, x: u32, z: u32) -> Option<f32> {
        self.index(x, z).map(|i| self.heights[i])
    }

    /// Returns false if the vertex is out of range.
    pub fn set_vertex_height(&mut self, x: u32, z: u32, height: f32) -> bool {
        match self.index(x, z) {
            Some(i) => {
                self.heights[i] = height;
                true
            }
            None => false,
        }
    }

    /// World position of a grid vertex
    pub fn world_vertex_position(&self, x: u32, z: u32) -> Option<Vec3> {
        let height = self.vertex_height(x, z)?;
        let cell = self.cell_size();
        Some(self.position + Vec3::new(x as f32 * cell, height, z as f32 * cell))
    }

    /// Lowest and highest world-space height
    pub fn height_range(&self) -> (f32, f32) {
        let (min, max) = self
            .heights
            .iter()
            .fold((f32::MAX, f32::MIN), |(lo, hi), &h| (lo.min(h), hi.max(h)));
        (self.position.y + min, self.position.y + max)
    }

    // ===== SAMPLING =====

    /// True if the world point lies over the terrain footprint
    pub fn contains_xz(&self, x: f32, z: f32) -> bool {
        let local_x = x - self.position.x;
        let local_z = z - self.position.z;
        (0.0..=self.size).contains(&local_x) && (0.0..=self.size).contains(&local_z)
    }

    /// World height under a point, bilinearly interpolated.
    ///
    /// `None` outside the terrain footprint.
    pub fn height_at(&self, x: f32, z: f32) -> Option<f32> {
        if !self.contains_xz(x, z) {
            return None;
        }
        Some(self.sample_clamped(x, z))
    }

    /// Bilinear height with the query point clamped onto the footprint
    fn sample_clamped(&self, x: f32, z: f32) -> f32 {
        let last = (self.resolution - 1) as f32;
        let cell = self.cell_size();
        let gx = ((x - self.position.x) / cell).clamp(0.0, last);
        let gz = ((z - self.position.z) / cell).clamp(0.0, last);

        let x0 = (gx.floor() as u32).min(self.resolution - 2);
        let z0 = (gz.floor() as u32).min(self.resolution - 2);
        let fx = gx - x0 as f32;
        let fz = gz - z0 as f32;

        let h = |x: u32, z: u32| self.heights[(z * self.resolution + x) as usize];
        let top = h(x0, z0) + (h(x0 + 1, z0) - h(x0, z0)) * fx;
        let bottom = h(x0, z0 + 1) + (h(x0 + 1, z0 + 1) - h(x0, z0 + 1)) * fx;
        self.position.y + top + (bottom - top) * fz
    }

    // ===== PICKING =====

    /// First point where the ray hits the surface.
    ///
    /// The ray is clipped to the terrain's bounding volume, marched in half
    /// cell steps until it passes below the surface, then refined by
    /// bisection.
    pub fn ray_intersection(&self, ray: &Ray) -> Option<Vec3> {
        if ray.direction == Vec3::ZERO {
            return None;
        }

        let (min_height, max_height) = self.height_range();
        let lo = Vec3::new(self.position.x, min_height - HEIGHT_EPSILON, self.position.z);
        let hi = Vec3::new(self.position.x + self.size, max_height + HEIGHT_EPSILON, self.position.z + self.size);
        let (t_enter, t_exit) = clip_ray(ray, lo, hi)?;

        let above = |t: f32| {
            let p = ray.at(t);
            p.y - self.sample_clamped(p.x, p.z)
        };

        let step = self.cell_size() * 0.5;
        let mut t_prev = t_enter;
        if above(t_prev) <= 0.0 {
            return Some(self.surface_point(ray.at(t_prev)));
        }

        loop {
            let t = (t_prev + step).min(t_exit);
            if above(t) <= 0.0 {
                let (mut a, mut b) = (t_prev, t);
                for _ in 0..REFINE_ITERATIONS {
                    let mid = (a + b) * 0.5;
                    if above(mid) > 0.0 {
                        a = mid;
                    } else {
                        b = mid;
                    }
                }
                return Some(self.surface_point(ray.at((a + b) * 0.5)));
            }
            if t >= t_exit {
                return None;
            }
            t_prev = t;
        }
    }

    fn surface_point(&self, p: Vec3) -> Vec3 {
        Vec3::new(p.x, self.sample_clamped(p.x, p.z), p.z)
    }
}

/// Slab test against an axis-aligned box. Returns the `t` range inside it,
/// starting no earlier than the ray origin.
fn clip_ray(ray: &Ray, lo: Vec3, hi: Vec3) -> Option<(f32, f32)> {
    let mut t_min = 0.0f32;
    let mut t_max = f32::MAX;

    for axis in 0..3 {
        let origin = ray.origin[axis];
        let direction = ray.direction[axis];
        if direction.abs() < f32::EPSILON {
            if origin < lo[axis] || origin > hi[axis] {
                return None;
            }
            continue;
        }
        let t0 = (lo[axis] - origin) / direction;
        let t1 = (hi[axis] - origin) / direction;
        t_min = t_min.max(t0.min(t1));
        t_max = t_max.min(t0.max(t1));
        if t_min > t_max {
            return None;
        }
    }

    Some((t_min, t_max))
}

#[cfg(test)]
#[path = "terrain_tests.rs"]
mod tests;
