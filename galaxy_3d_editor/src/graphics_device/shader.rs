/// Shader program trait and descriptor

use std::fmt::Debug;

/// Descriptor for compiling a shader program from GLSL-like sources
#[derive(Debug, Clone)]
pub struct ShaderProgramDesc {
    /// Debug name
    pub name: String,
    /// Full vertex stage source
    pub vertex_source: String,
    /// Full fragment stage source (prelude already prepended)
    pub fragment_source: String,
}

/// Compiled (or failed) shader program owned by the host
///
/// Creation does not fail on compile errors: the program reports
/// `is_compiled() == false` and exposes the compiler log, the way GL
/// programs do. `ShaderUtils::compile` turns that into an error.
pub trait ShaderProgram: Send + Sync + Debug {
    /// Debug name
    fn name(&self) -> &str;

    /// Whether compile and link succeeded
    fn is_compiled(&self) -> bool;

    /// Compiler / linker log
    fn log(&self) -> &str;
}
