/// GraphicsDevice trait - host rendering services

use std::sync::Arc;
use glam::Mat4;
use crate::camera::Camera;
use crate::error::Result;
use super::mesh::{Mesh, MeshDesc};
use super::shader::{ShaderProgram, ShaderProgramDesc};

/// One entry of a batched draw: a mesh and the transform to draw it with
#[derive(Debug, Clone, Copy)]
pub struct BatchItem<'a> {
    pub mesh: &'a dyn Mesh,
    pub transform: Mat4,
}

/// Host rendering services used by the editor core.
///
/// Shared as `Arc<Mutex<dyn GraphicsDevice>>` between the host renderer and
/// editor subsystems. All calls happen on the render thread.
pub trait GraphicsDevice: Send + Sync {
    /// Build a mesh from a descriptor.
    ///
    /// The returned box owns the GPU resources; dropping it releases them.
    fn create_mesh(&mut self, desc: MeshDesc) -> Result<Box<dyn Mesh>>;

    /// Compile a shader program. Compile errors are reported through
    /// `ShaderProgram::is_compiled`, not through the `Result`.
    fn create_shader_program(&mut self, desc: &ShaderProgramDesc) -> Result<Arc<dyn ShaderProgram>>;

    /// Clear the depth attachment of the current render target.
    fn clear_depth_buffer(&mut self) -> Result<()>;

    /// Open a batched draw for the given camera.
    fn begin_batch(&mut self, camera: &Camera) -> Result<()>;

    /// Queue meshes into the open batch.
    fn render_batch(&mut self, items: &[BatchItem<'_>]) -> Result<()>;

    /// Close the batch and flush it.
    fn end_batch(&mut self) -> Result<()>;
}
