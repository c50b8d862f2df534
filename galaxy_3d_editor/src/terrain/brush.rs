//! Terrain brush trait and the operations brushes share.
//!
//! A brush has a mode, a radius, a world-space center and the index of the
//! terrain it edits. Concrete brushes decide which modes they support and
//! which vertices fall inside their footprint; the height and splat edits
//! themselves live here.

use glam::Vec3;
use crate::error::{Error, Result};
use crate::engine_warn;
use super::splat_map::SplatChannel;
use super::terrain::Terrain;

// ===== MODE =====

/// What a brush does to the terrain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrushMode {
    /// Raise (or lower) heights inside the footprint
    RaiseLower,
    /// Pull heights toward a target height
    PaintHeight,
    /// Pull heights toward the average of their neighbours
    Smooth,
    /// Blend a splat map channel
    Paint,
}

impl BrushMode {
    pub const ALL: [BrushMode; 4] = [
        BrushMode::RaiseLower,
        BrushMode::PaintHeight,
        BrushMode::Smooth,
        BrushMode::Paint,
    ];
}

// ===== FALLOFF =====

/// Weight of a vertex as a function of its distance to the brush center
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Falloff {
    /// 1 everywhere inside the footprint
    Constant,
    /// 1 at the center, 0 at the rim
    #[default]
    Linear,
    /// Smoothstep from center to rim
    Smooth,
    /// Gaussian with sigma = radius / 3
    Gaussian,
}

impl Falloff {
    /// Weight in `[0, 1]`; 0 beyond `radius`
    pub fn weight(&self, distance: f32, radius: f32) -> f32 {
        if radius <= 0.0 || distance > radius {
            return 0.0;
        }
        let t = distance / radius;
        match self {
            Falloff::Constant => 1.0,
            Falloff::Linear => 1.0 - t,
            Falloff::Smooth => {
                let s = 1.0 - t;
                s * s * (3.0 - 2.0 * s)
            }
            Falloff::Gaussian => (-4.5 * t * t).exp(),
        }
    }
}

// ===== STATE =====

/// State every brush carries
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushState {
    /// `None` until a supported mode is set
    pub mode: Option<BrushMode>,
    /// Footprint radius in world units (> 0)
    pub radius: f32,
    /// World-space center
    pub translation: Vec3,
    /// Index of the edited terrain in the project's terrain list
    pub terrain: Option<usize>,
}

impl BrushState {
    pub fn new(radius: f32) -> Self {
        Self {
            mode: None,
            radius,
            translation: Vec3::ZERO,
            terrain: None,
        }
    }
}

// ===== TRAIT =====

/// Terrain editing brush.
///
/// Implementors provide the mode table, state storage and `apply`; the rest
/// of the contract is shared.
pub trait TerrainBrush: Send + Sync {
    /// Display name, used in error messages
    fn name(&self) -> &str;

    fn supports_mode(&self, mode: BrushMode) -> bool;

    fn state(&self) -> &BrushState;

    fn state_mut(&mut self) -> &mut BrushState;

    /// Edit one terrain with the given mode.
    ///
    /// `raise` is the direction for `RaiseLower`; other modes only act when
    /// it is true.
    fn apply(&self, terrain: &mut Terrain, mode: BrushMode, raise: bool);

    fn mode(&self) -> Option<BrushMode> {
        self.state().mode
    }

    /// Switch mode. Unsupported modes leave the brush untouched.
    fn set_mode(&mut self, mode: BrushMode) -> Result<()> {
        if !self.supports_mode(mode) {
            engine_warn!("galaxy3d::TerrainBrush", "{} does not support {:?}", self.name(), mode);
            return Err(Error::UnsupportedMode {
                brush: self.name().to_string(),
                mode,
            });
        }
        self.state_mut().mode = Some(mode);
        Ok(())
    }

    fn radius(&self) -> f32 {
        self.state().radius
    }

    fn set_radius(&mut self, radius: f32) -> Result<()> {
        if !(radius > 0.0) || !radius.is_finite() {
            return Err(Error::InvalidResource(format!(
                "{} radius must be positive (got {})", self.name(), radius
            )));
        }
        self.state_mut().radius = radius;
        Ok(())
    }

    /// Multiply the radius. Non-positive factors are ignored.
    fn scale(&mut self, factor: f32) {
        if factor > 0.0 && factor.is_finite() {
            self.state_mut().radius *= factor;
        }
    }

    fn translation(&self) -> Vec3 {
        self.state().translation
    }

    fn set_translation(&mut self, translation: Vec3) {
        self.state_mut().translation = translation;
    }

    fn terrain(&self) -> Option<usize> {
        self.state().terrain
    }

    fn set_terrain(&mut self, terrain: Option<usize>) {
        self.state_mut().terrain = terrain;
    }

    /// Apply the current mode to the current terrain.
    ///
    /// No-op while the mode is unset or the terrain index is not in `terrains`.
    fn draw(&mut self, terrains: &mut [Terrain], raise: bool) {
        let state = *self.state();
        let (Some(mode), Some(index)) = (state.mode, state.terrain) else {
            return;
        };
        if let Some(terrain) = terrains.get_mut(index) {
            self.apply(terrain, mode, raise);
        }
    }
}

// ===== SHARED OPERATIONS =====

/// Grid vertices inside a footprint with their brush weight
pub(crate) type Footprint = Vec<(u32, u32, f32)>;

/// Vertices whose XZ distance to `center` is within `radius`
pub(crate) fn circle_footprint(terrain: &Terrain, center: Vec3, radius: f32, falloff: Falloff) -> Footprint {
    grid_window(terrain, center, radius)
        .filter_map(|(x, z, p)| {
            let distance = Vec3::new(p.x - center.x, 0.0, p.z - center.z).length();
            let weight = falloff.weight(distance, radius);
            (weight > 0.0).then_some((x, z, weight))
        })
        .collect()
}

/// Vertices inside the axis-aligned square of half-size `radius`, weight 1
pub(crate) fn square_footprint(terrain: &Terrain, center: Vec3, radius: f32) -> Footprint {
    grid_window(terrain, center, radius)
        .filter(|(_, _, p)| (p.x - center.x).abs() <= radius && (p.z - center.z).abs() <= radius)
        .map(|(x, z, _)| (x, z, 1.0))
        .collect()
}

/// Vertices of the grid cells overlapping the square around `center`
fn grid_window(terrain: &Terrain, center: Vec3, radius: f32) -> impl Iterator<Item = (u32, u32, Vec3)> + '_ {
    let cell = terrain.cell_size();
    let last = terrain.resolution() as i64 - 1;
    let origin = terrain.position();
    let to_grid = |v: f32, o: f32| ((v - o) / cell).floor() as i64;

    let x0 = to_grid(center.x - radius, origin.x).clamp(0, last + 1);
    let x1 = (to_grid(center.x + radius, origin.x) + 1).clamp(-1, last);
    let z0 = to_grid(center.z - radius, origin.z).clamp(0, last + 1);
    let z1 = (to_grid(center.z + radius, origin.z) + 1).clamp(-1, last);

    (z0..=z1).flat_map(move |z| {
        (x0..=x1).filter_map(move |x| {
            let (x, z) = (x as u32, z as u32);
            terrain.world_vertex_position(x, z).map(|p| (x, z, p))
        })
    })
}

pub(crate) fn raise_lower(terrain: &mut Terrain, footprint: &Footprint, strength: f32, raise: bool) {
    let sign = if raise { 1.0 } else { -1.0 };
    for &(x, z, weight) in footprint {
        if let Some(h) = terrain.vertex_height(x, z) {
            terrain.set_vertex_height(x, z, h + sign * strength * weight);
        }
    }
}

/// Move heights toward `target` (world units) by `strength * weight`, at most all the way.
pub(crate) fn paint_height(terrain: &mut Terrain, footprint: &Footprint, target: f32, strength: f32) {
    let local_target = target - terrain.position().y;
    for &(x, z, weight) in footprint {
        if let Some(h) = terrain.vertex_height(x, z) {
            let t = (strength * weight).min(1.0);
            terrain.set_vertex_height(x, z, h + (local_target - h) * t);
        }
    }
}

/// Move heights toward the mean of their 4-neighbours, read from a snapshot.
pub(crate) fn smooth(terrain: &mut Terrain, footprint: &Footprint, strength: f32) {
    let resolution = terrain.resolution() as i64;
    let snapshot = terrain.heights().to_vec();
    let height = |x: i64, z: i64| {
        (x >= 0 && z >= 0 && x < resolution && z < resolution)
            .then(|| snapshot[(z * resolution + x) as usize])
    };

    for &(x, z, weight) in footprint {
        let (x, z) = (x as i64, z as i64);
        let Some(h) = height(x, z) else {
            continue;
        };
        let neighbours: Vec<f32> = [(x - 1, z), (x + 1, z), (x, z - 1), (x, z + 1)]
            .into_iter()
            .filter_map(|(nx, nz)| height(nx, nz))
            .collect();
        if neighbours.is_empty() {
            continue;
        }
        let average = neighbours.iter().sum::<f32>() / neighbours.len() as f32;
        let t = (strength * weight).min(1.0);
        terrain.set_vertex_height(x as u32, z as u32, h + (average - h) * t);
    }
}

pub(crate) fn paint(terrain: &mut Terrain, footprint: &Footprint, channel: SplatChannel, strength: f32) {
    let splat_map = terrain.splat_map_mut();
    for &(x, z, weight) in footprint {
        splat_map.paint(x, z, channel, strength * weight);
    }
}

#[cfg(test)]
#[path = "brush_tests.rs"]
mod tests;
