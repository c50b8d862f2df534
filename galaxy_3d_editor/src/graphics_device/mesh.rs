/// Mesh trait and mesh descriptor
///
/// A `Mesh` is a GPU-resident vertex/index pair owned by whoever holds the
/// `Box<dyn Mesh>`. Backends release the GPU memory when the box is dropped,
/// so ownership alone decides the resource lifetime.

use std::fmt::Debug;
use bitflags::bitflags;
use crate::error::{Error, Result};
use super::color::Color;

/// Primitive topology
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveTopology {
    /// Triangle list
    TriangleList,
    /// Line list
    LineList,
}

impl PrimitiveTopology {
    /// Number of indices per primitive
    pub fn indices_per_primitive(&self) -> usize {
        match self {
            PrimitiveTopology::TriangleList => 3,
            PrimitiveTopology::LineList => 2,
        }
    }
}

bitflags! {
    /// Vertex attributes present in a mesh, interleaved in declaration order
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct VertexAttributes: u32 {
        /// vec3 position (12 bytes)
        const POSITION = 1 << 0;
        /// vec4 float color (16 bytes)
        const COLOR_UNPACKED = 1 << 1;
    }
}

impl VertexAttributes {
    /// Number of f32 components per vertex
    pub fn component_count(&self) -> usize {
        let mut count = 0;
        if self.contains(VertexAttributes::POSITION) {
            count += 3;
        }
        if self.contains(VertexAttributes::COLOR_UNPACKED) {
            count += 4;
        }
        count
    }

    /// Vertex stride in bytes
    pub fn stride(&self) -> usize {
        self.component_count() * std::mem::size_of::<f32>()
    }
}

/// Material parameters attached to a mesh part
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Material name (e.g. "debug_box")
    pub name: String,
    /// Uniform diffuse color, `None` when colors come from vertices
    pub diffuse: Option<Color>,
}

/// Descriptor for creating a mesh
#[derive(Debug, Clone)]
pub struct MeshDesc {
    /// Debug name
    pub name: String,
    /// Primitive topology
    pub topology: PrimitiveTopology,
    /// Interleaved vertex layout
    pub attributes: VertexAttributes,
    /// Raw interleaved vertex data
    pub vertex_data: Vec<u8>,
    /// Number of vertices in `vertex_data`
    pub vertex_count: u32,
    /// 16-bit indices
    pub indices: Vec<u16>,
    /// Material of the single mesh part
    pub material: Material,
}

impl MeshDesc {
    /// Check the descriptor is internally consistent.
    ///
    /// Backends call this before allocating anything.
    pub fn validate(&self) -> Result<()> {
        if !self.attributes.contains(VertexAttributes::POSITION) {
            return Err(Error::InvalidResource(format!(
                "Mesh '{}' has no position attribute", self.name
            )));
        }
        if self.vertex_count == 0 {
            return Err(Error::InvalidResource(format!("Mesh '{}' has no vertices", self.name)));
        }
        let expected = self.vertex_count as usize * self.attributes.stride();
        if self.vertex_data.len() != expected {
            return Err(Error::InvalidResource(format!(
                "Mesh '{}' vertex data is {} bytes, expected {}",
                self.name, self.vertex_data.len(), expected
            )));
        }
        if self.indices.len() % self.topology.indices_per_primitive() != 0 {
            return Err(Error::InvalidResource(format!(
                "Mesh '{}' index count {} is not a multiple of {}",
                self.name, self.indices.len(), self.topology.indices_per_primitive()
            )));
        }
        if let Some(&index) = self.indices.iter().find(|&&i| i as u32 >= self.vertex_count) {
            return Err(Error::InvalidResource(format!(
                "Mesh '{}' index {} out of range ({} vertices)",
                self.name, index, self.vertex_count
            )));
        }
        Ok(())
    }
}

/// GPU mesh trait
///
/// Implemented by backend-specific mesh types. Dropping the object releases
/// the GPU resources.
pub trait Mesh: Send + Sync + Debug {
    /// Debug name
    fn name(&self) -> &str;

    /// Primitive topology
    fn topology(&self) -> PrimitiveTopology;

    /// Number of vertices
    fn vertex_count(&self) -> u32;

    /// Number of indices
    fn index_count(&self) -> u32;
}
