//! Line and triangle shape builders for debug geometry.
//!
//! Builders produce `MeshDesc`s only; the graphics device turns them into
//! GPU meshes. Vertex data is interleaved `f32` as declared by the
//! descriptor's `VertexAttributes`.

use glam::Vec3;
use crate::error::{Error, Result};
use crate::graphics_device::{Color, Material, MeshDesc, PrimitiveTopology, VertexAttributes};

/// Edge list of a box whose corners are given in the order
/// 000, 010, 100, 110, 001, 011, 101, 111 (x, y, z bit per corner).
pub const BOX_EDGE_INDICES: [u16; 24] = [
    // along x
    0, 2, 1, 3, 4, 6, 5, 7,
    // along y
    0, 1, 2, 3, 4, 5, 6, 7,
    // along z
    0, 4, 1, 5, 2, 6, 3, 7,
];

/// Smallest number of radial segments an arrow can be built with
pub const MIN_ARROW_DIVISIONS: u32 = 3;

/// Largest number of radial segments whose `3n + 3` vertices stay addressable by 16-bit indices
pub const MAX_ARROW_DIVISIONS: u32 = (u16::MAX as u32 - 3) / 3;

/// Line-list mesh of the 12 edges between 8 box corners.
///
/// Positions only; `color` becomes the material's diffuse color.
pub fn build_box_edges(name: &str, corners: &[Vec3; 8], color: Color) -> MeshDesc {
    let positions: Vec<f32> = corners.iter().flat_map(|c| c.to_array()).collect();

    MeshDesc {
        name: name.to_string(),
        topology: PrimitiveTopology::LineList,
        attributes: VertexAttributes::POSITION,
        vertex_data: bytemuck::cast_slice(&positions).to_vec(),
        vertex_count: corners.len() as u32,
        indices: BOX_EDGE_INDICES.to_vec(),
        material: Material {
            name: name.to_string(),
            diffuse: Some(color),
        },
    }
}

/// Solid arrow from `origin` to `tip`: a capped cylinder shaft and a capped cone head.
///
/// * `shaft_radius` - radius of the shaft; the cone base is twice as wide
/// * `head_ratio` - head length as a fraction of the arrow length, clamped to `[0, 1]`
/// * `divisions` - radial segments of both the shaft and the head
///
/// Every vertex carries `color` as an unpacked color attribute.
pub fn build_arrow(
    name: &str,
    origin: Vec3,
    tip: Vec3,
    shaft_radius: f32,
    head_ratio: f32,
    divisions: u32,
    color: Color,
) -> Result<MeshDesc> {
    let axis = tip - origin;
    let length = axis.length();
    if !length.is_finite() || length <= f32::EPSILON {
        return Err(Error::InvalidResource(format!(
            "Arrow '{}' has zero length", name
        )));
    }
    if !(shaft_radius > 0.0) {
        return Err(Error::InvalidResource(format!(
            "Arrow '{}' shaft radius must be positive (got {})", name, shaft_radius
        )));
    }
    if divisions < MIN_ARROW_DIVISIONS {
        return Err(Error::InvalidResource(format!(
            "Arrow '{}' needs at least {} divisions (got {})",
            name, MIN_ARROW_DIVISIONS, divisions
        )));
    }
    if divisions > MAX_ARROW_DIVISIONS {
        return Err(Error::InvalidResource(format!(
            "Arrow '{}' supports at most {} divisions (got {})",
            name, MAX_ARROW_DIVISIONS, divisions
        )));
    }

    let direction = axis / length;
    let (u, v) = direction.any_orthonormal_pair();
    let head_length = length * head_ratio.clamp(0.0, 1.0);
    let head_base = tip - direction * head_length;
    let head_radius = shaft_radius * 2.0;
    let n = divisions as usize;

    let ring = |center: Vec3, radius: f32| -> Vec<Vec3> {
        (0..n)
            .map(|i| {
                let angle = i as f32 / n as f32 * std::f32::consts::TAU;
                center + (u * angle.cos() + v * angle.sin()) * radius
            })
            .collect()
    };

    // Layout: shaft bottom ring, shaft top ring, head ring, then the three centers.
    let mut positions = Vec::with_capacity(3 * n + 3);
    positions.extend(ring(origin, shaft_radius));
    positions.extend(ring(head_base, shaft_radius));
    positions.extend(ring(head_base, head_radius));
    positions.push(origin);
    positions.push(head_base);
    positions.push(tip);

    let shaft_bottom = 0;
    let shaft_top = n;
    let head_ring = 2 * n;
    let origin_center = 3 * n;
    let head_center = 3 * n + 1;
    let tip_index = 3 * n + 2;

    let mut indices: Vec<u16> = Vec::with_capacity(n * 15);
    for i in 0..n {
        let j = (i + 1) % n;
        // shaft side
        indices.extend([shaft_bottom + i, shaft_bottom + j, shaft_top + j].map(|x| x as u16));
        indices.extend([shaft_bottom + i, shaft_top + j, shaft_top + i].map(|x| x as u16));
        // shaft cap
        indices.extend([origin_center, shaft_bottom + j, shaft_bottom + i].map(|x| x as u16));
        // head side
        indices.extend([head_ring + i, head_ring + j, tip_index].map(|x| x as u16));
        // head cap
        indices.extend([head_center, head_ring + j, head_ring + i].map(|x| x as u16));
    }

    let rgba = color.to_array();
    let vertex_data: Vec<f32> = positions
        .iter()
        .flat_map(|p| {
            let mut vertex = [0.0f32; 7];
            vertex[..3].copy_from_slice(&p.to_array());
            vertex[3..].copy_from_slice(&rgba);
            vertex
        })
        .collect();

    Ok(MeshDesc {
        name: name.to_string(),
        topology: PrimitiveTopology::TriangleList,
        attributes: VertexAttributes::POSITION | VertexAttributes::COLOR_UNPACKED,
        vertex_data: bytemuck::cast_slice(&vertex_data).to_vec(),
        vertex_count: positions.len() as u32,
        indices,
        material: Material {
            name: name.to_string(),
            diffuse: None,
        },
    })
}

#[cfg(test)]
#[path = "shape_builder_tests.rs"]
mod tests;
