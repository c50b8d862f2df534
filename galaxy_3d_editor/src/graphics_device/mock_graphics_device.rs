/// Mock GraphicsDevice for unit tests (no GPU required)
///
/// Tracks mesh creation and release, depth clears and batch commands so
/// tests can verify resource ownership and frame ordering.

use std::sync::{Arc, Mutex};
use glam::Mat4;
use crate::camera::Camera;
use crate::error::{Error, Result};
use super::graphics_device::{BatchItem, GraphicsDevice};
use super::mesh::{Mesh, MeshDesc, PrimitiveTopology, Material};
use super::shader::{ShaderProgram, ShaderProgramDesc};

// ============================================================================
// Shared statistics
// ============================================================================

/// Counters shared between the device and the meshes it created
#[derive(Debug, Default)]
pub struct MockDeviceStats {
    /// Number of meshes created
    pub meshes_created: usize,
    /// Number of meshes dropped
    pub meshes_released: usize,
    /// Names of created meshes, in creation order
    pub created_names: Vec<String>,
    /// Materials of created meshes, in creation order
    pub created_materials: Vec<Material>,
    /// Device command log ("clear_depth", "begin_batch", "render_batch:N", "end_batch")
    pub commands: Vec<String>,
    /// Items of the most recent render_batch call (mesh name, transform)
    pub last_batch: Vec<(String, Mat4)>,
    /// Descriptors of every shader program requested
    pub shader_programs: Vec<ShaderProgramDesc>,
}

impl MockDeviceStats {
    /// Meshes created and not yet released
    pub fn live_meshes(&self) -> usize {
        self.meshes_created - self.meshes_released
    }
}

// ============================================================================
// Mock Mesh
// ============================================================================

#[derive(Debug)]
pub struct MockMesh {
    pub name: String,
    pub topology: PrimitiveTopology,
    pub vertex_count: u32,
    pub index_count: u32,
    stats: Arc<Mutex<MockDeviceStats>>,
}

impl Mesh for MockMesh {
    fn name(&self) -> &str {
        &self.name
    }

    fn topology(&self) -> PrimitiveTopology {
        self.topology
    }

    fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    fn index_count(&self) -> u32 {
        self.index_count
    }
}

impl Drop for MockMesh {
    fn drop(&mut self) {
        if let Ok(mut stats) = self.stats.lock() {
            stats.meshes_released += 1;
        }
    }
}

// ============================================================================
// Mock ShaderProgram
// ============================================================================

#[derive(Debug)]
pub struct MockShaderProgram {
    pub name: String,
    pub compiled: bool,
    pub log: String,
}

impl ShaderProgram for MockShaderProgram {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_compiled(&self) -> bool {
        self.compiled
    }

    fn log(&self) -> &str {
        &self.log
    }
}

// ============================================================================
// Mock GraphicsDevice
// ============================================================================

/// Mock device that records every call without GPU
#[derive(Debug)]
pub struct MockGraphicsDevice {
    pub stats: Arc<Mutex<MockDeviceStats>>,
    /// When set, create_mesh fails with OutOfMemory
    pub fail_mesh_creation: bool,
    /// When set, compiled shader programs report a failure with this log
    pub shader_error: Option<String>,
}

impl MockGraphicsDevice {
    pub fn new() -> Self {
        Self {
            stats: Arc::new(Mutex::new(MockDeviceStats::default())),
            fail_mesh_creation: false,
            shader_error: None,
        }
    }

    /// Shared handle to the statistics, usable after the device is boxed
    pub fn stats_handle(&self) -> Arc<Mutex<MockDeviceStats>> {
        Arc::clone(&self.stats)
    }
}

impl GraphicsDevice for MockGraphicsDevice {
    fn create_mesh(&mut self, desc: MeshDesc) -> Result<Box<dyn Mesh>> {
        if self.fail_mesh_creation {
            return Err(Error::OutOfMemory);
        }
        desc.validate()?;

        let mut stats = self.stats.lock().unwrap();
        stats.meshes_created += 1;
        stats.created_names.push(desc.name.clone());
        stats.created_materials.push(desc.material.clone());
        drop(stats);

        Ok(Box::new(MockMesh {
            name: desc.name,
            topology: desc.topology,
            vertex_count: desc.vertex_count,
            index_count: desc.indices.len() as u32,
            stats: Arc::clone(&self.stats),
        }))
    }

    fn create_shader_program(&mut self, desc: &ShaderProgramDesc) -> Result<Arc<dyn ShaderProgram>> {
        self.stats.lock().unwrap().shader_programs.push(desc.clone());
        Ok(Arc::new(MockShaderProgram {
            name: desc.name.clone(),
            compiled: self.shader_error.is_none(),
            log: self.shader_error.clone().unwrap_or_default(),
        }))
    }

    fn clear_depth_buffer(&mut self) -> Result<()> {
        self.stats.lock().unwrap().commands.push("clear_depth".to_string());
        Ok(())
    }

    fn begin_batch(&mut self, _camera: &Camera) -> Result<()> {
        self.stats.lock().unwrap().commands.push("begin_batch".to_string());
        Ok(())
    }

    fn render_batch(&mut self, items: &[BatchItem<'_>]) -> Result<()> {
        let mut stats = self.stats.lock().unwrap();
        stats.commands.push(format!("render_batch:{}", items.len()));
        stats.last_batch = items
            .iter()
            .map(|item| (item.mesh.name().to_string(), item.transform))
            .collect();
        Ok(())
    }

    fn end_batch(&mut self) -> Result<()> {
        self.stats.lock().unwrap().commands.push("end_batch".to_string());
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "mock_graphics_device_tests.rs"]
mod tests;
