//! Shader loading and compilation helpers.
//!
//! Sources are read from disk. Shaders that take part in lighting get the
//! light prelude prepended to their fragment stage, preceded by the light
//! limit defines the prelude relies on.

use std::fs;
use std::path::Path;
use std::sync::Arc;
use crate::error::{Error, Result};
use crate::graphics_device::{GraphicsDevice, ShaderProgram, ShaderProgramDesc};
use crate::engine_error;

/// Point lights a light shader can receive
pub const MAX_POINT_LIGHTS: u32 = 4;

/// Spot lights a light shader can receive
pub const MAX_SPOT_LIGHTS: u32 = 4;

/// Vertex and fragment source of one program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSource {
    pub name: String,
    pub vertex: String,
    pub fragment: String,
}

impl ShaderSource {
    pub fn new(name: impl Into<String>, vertex: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vertex: vertex.into(),
            fragment: fragment.into(),
        }
    }

    /// Prepend the light defines and `prelude` to the fragment stage
    pub fn with_light_prelude(mut self, prelude: &str) -> Self {
        self.fragment = format!("{}{}{}", ShaderUtils::light_defines(), prelude, self.fragment);
        self
    }
}

pub struct ShaderUtils;

impl ShaderUtils {
    /// `#define` lines for the light limits
    pub fn light_defines() -> String {
        format!(
            "#define MAX_POINT_LIGHTS {}\n#define MAX_SPOT_LIGHTS {}\n",
            MAX_POINT_LIGHTS, MAX_SPOT_LIGHTS
        )
    }

    /// Read a program from disk.
    ///
    /// `light_prelude` is the path of the light prelude for light shaders,
    /// `None` for everything else. The program is named after the vertex
    /// file stem.
    pub fn load(
        vertex_path: impl AsRef<Path>,
        fragment_path: impl AsRef<Path>,
        light_prelude: Option<&Path>,
    ) -> Result<ShaderSource> {
        let vertex_path = vertex_path.as_ref();
        let name = vertex_path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "shader".to_string());

        let source = ShaderSource::new(name, read_source(vertex_path)?, read_source(fragment_path.as_ref())?);
        match light_prelude {
            Some(path) => Ok(source.with_light_prelude(&read_source(path)?)),
            None => Ok(source),
        }
    }

    /// Compile and link a program on the device.
    ///
    /// Fails with `ShaderCompilationFailed` carrying the compiler log.
    pub fn compile(device: &mut dyn GraphicsDevice, source: &ShaderSource) -> Result<Arc<dyn ShaderProgram>> {
        let program = device.create_shader_program(&ShaderProgramDesc {
            name: source.name.clone(),
            vertex_source: source.vertex.clone(),
            fragment_source: source.fragment.clone(),
        })?;

        if !program.is_compiled() {
            engine_error!("galaxy3d::ShaderUtils", "Shader '{}' failed to compile:\n{}", source.name, program.log());
            return Err(Error::ShaderCompilationFailed(program.log().to_string()));
        }
        Ok(program)
    }

    /// `load` followed by `compile`
    pub fn load_and_compile(
        device: &mut dyn GraphicsDevice,
        vertex_path: impl AsRef<Path>,
        fragment_path: impl AsRef<Path>,
        light_prelude: Option<&Path>,
    ) -> Result<Arc<dyn ShaderProgram>> {
        let source = Self::load(vertex_path, fragment_path, light_prelude)?;
        Self::compile(device, &source)
    }
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        Error::InvalidResource(format!("Cannot read shader source '{}': {}", path.display(), e))
    })
}

#[cfg(test)]
#[path = "shader_utils_tests.rs"]
mod tests;
