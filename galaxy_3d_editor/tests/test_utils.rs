#![allow(dead_code)]
//! Test utilities - recording graphics device for integration tests
//!
//! `RecordingDevice` implements the public `GraphicsDevice` trait without any
//! GPU. It counts live meshes through their `Drop` and records the frame
//! commands the editor issues, so tests can check resource ownership and
//! command ordering from outside the crate.

use galaxy_3d_editor::galaxy3d::render::{
    BatchItem, Camera, GraphicsDevice, Mesh, MeshDesc, PrimitiveTopology, ShaderProgram,
    ShaderProgramDesc,
};
use galaxy_3d_editor::galaxy3d::Result;
use std::sync::{Arc, Mutex};

/// What the device saw, shared with the test
#[derive(Debug, Default)]
pub struct Recording {
    pub live_meshes: usize,
    pub created: Vec<String>,
    pub commands: Vec<String>,
    pub batches: Vec<Vec<String>>,
}

#[derive(Debug)]
struct RecordedMesh {
    name: String,
    topology: PrimitiveTopology,
    vertex_count: u32,
    index_count: u32,
    recording: Arc<Mutex<Recording>>,
}

impl Mesh for RecordedMesh {
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

impl Drop for RecordedMesh {
    fn drop(&mut self) {
        if let Ok(mut recording) = self.recording.lock() {
            recording.live_meshes -= 1;
        }
    }
}

#[derive(Debug)]
struct RecordedProgram {
    name: String,
}

impl ShaderProgram for RecordedProgram {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_compiled(&self) -> bool {
        true
    }

    fn log(&self) -> &str {
        ""
    }
}

pub struct RecordingDevice {
    recording: Arc<Mutex<Recording>>,
}

impl RecordingDevice {
    /// Create a device and the handle to its recording
    pub fn new() -> (Self, Arc<Mutex<Recording>>) {
        let recording = Arc::new(Mutex::new(Recording::default()));
        (Self { recording: recording.clone() }, recording)
    }

    fn command(&self, command: String) {
        self.recording.lock().unwrap().commands.push(command);
    }
}

impl GraphicsDevice for RecordingDevice {
    fn create_mesh(&mut self, desc: MeshDesc) -> Result<Box<dyn Mesh>> {
        desc.validate()?;
        let mut recording = self.recording.lock().unwrap();
        recording.live_meshes += 1;
        recording.created.push(desc.name.clone());
        Ok(Box::new(RecordedMesh {
            name: desc.name,
            topology: desc.topology,
            vertex_count: desc.vertex_count,
            index_count: desc.indices.len() as u32,
            recording: self.recording.clone(),
        }))
    }

    fn create_shader_program(&mut self, desc: &ShaderProgramDesc) -> Result<Arc<dyn ShaderProgram>> {
        Ok(Arc::new(RecordedProgram { name: desc.name.clone() }))
    }

    fn clear_depth_buffer(&mut self) -> Result<()> {
        self.command("clear_depth".to_string());
        Ok(())
    }

    fn begin_batch(&mut self, _camera: &Camera) -> Result<()> {
        self.command("begin_batch".to_string());
        Ok(())
    }

    fn render_batch(&mut self, items: &[BatchItem<'_>]) -> Result<()> {
        let mut recording = self.recording.lock().unwrap();
        recording.commands.push(format!("render_batch:{}", items.len()));
        recording.batches.push(items.iter().map(|item| item.mesh.name().to_string()).collect());
        Ok(())
    }

    fn end_batch(&mut self) -> Result<()> {
        self.command("end_batch".to_string());
        Ok(())
    }
}
