/// Debug geometry factory and the model instances it produces
///
/// A `DebugModelInstance` owns its GPU mesh outright. Dropping the instance
/// releases the mesh, so the overlay cache decides every lifetime.

use glam::{Mat4, Vec3};
use crate::error::{Error, Result};
use crate::graphics_device::{BatchItem, Color, GraphicsDevice, Mesh};
use crate::scene::OrientedBoundingBox;
use super::shape_builder;

// ===== ARROW PARAMS =====

/// Shape of the facing arrow
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowParams {
    /// Shaft radius in world units
    pub shaft_radius: f32,
    /// Head length as a fraction of the arrow length
    pub head_ratio: f32,
    /// Radial segments
    pub divisions: u32,
}

impl Default for ArrowParams {
    fn default() -> Self {
        Self {
            shaft_radius: 0.03,
            head_ratio: 0.5,
            divisions: 20,
        }
    }
}

// ===== MODEL INSTANCE =====

/// A debug mesh paired with the transform it is drawn with
#[derive(Debug)]
pub struct DebugModelInstance {
    mesh: Box<dyn Mesh>,
    transform: Mat4,
}

impl DebugModelInstance {
    pub fn new(mesh: Box<dyn Mesh>) -> Self {
        Self { mesh, transform: Mat4::IDENTITY }
    }

    pub fn mesh(&self) -> &dyn Mesh {
        self.mesh.as_ref()
    }

    pub fn transform(&self) -> &Mat4 {
        &self.transform
    }

    pub fn set_transform(&mut self, transform: Mat4) {
        self.transform = transform;
    }

    /// Batch entry for this frame
    pub fn batch_item(&self) -> BatchItem<'_> {
        BatchItem {
            mesh: self.mesh.as_ref(),
            transform: self.transform,
        }
    }
}

// ===== FACTORY =====

/// Builds debug meshes on a graphics device.
///
/// Device failures surface as `Error::ResourceBuildFailure`.
pub struct DebugGeometryFactory;

impl DebugGeometryFactory {
    /// Wireframe of an OBB.
    ///
    /// Corners are sampled from `obb` as given. Pass the local template to
    /// get a mesh that is positioned by the instance transform instead.
    pub fn build_box(
        device: &mut dyn GraphicsDevice,
        name: &str,
        obb: &OrientedBoundingBox,
        color: Color,
    ) -> Result<DebugModelInstance> {
        let desc = shape_builder::build_box_edges(name, &obb.corners(), color);
        let mesh = device
            .create_mesh(desc)
            .map_err(|e| Error::ResourceBuildFailure(format!("box '{}': {}", name, e)))?;
        Ok(DebugModelInstance::new(mesh))
    }

    /// Solid arrow between two points, uniformly colored.
    pub fn build_arrow(
        device: &mut dyn GraphicsDevice,
        name: &str,
        origin: Vec3,
        tip: Vec3,
        params: &ArrowParams,
        color: Color,
    ) -> Result<DebugModelInstance> {
        let desc = shape_builder::build_arrow(
            name,
            origin,
            tip,
            params.shaft_radius,
            params.head_ratio,
            params.divisions,
            color,
        )
        .map_err(|e| Error::ResourceBuildFailure(format!("arrow '{}': {}", name, e)))?;
        let mesh = device
            .create_mesh(desc)
            .map_err(|e| Error::ResourceBuildFailure(format!("arrow '{}': {}", name, e)))?;
        Ok(DebugModelInstance::new(mesh))
    }
}
