//! Error types for the Galaxy3D editor
//!
//! This module defines the error types used throughout the editor core,
//! including device failures, brush configuration and resource construction.

use std::fmt;
use crate::terrain::BrushMode;

/// Result type for Galaxy3D editor operations
pub type Result<T> = std::result::Result<T, Error>;

/// Galaxy3D editor errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Host device error (mesh builder, batch, poisoned locks)
    BackendError(String),

    /// Out of GPU memory
    OutOfMemory,

    /// Invalid resource or descriptor (mesh, terrain, shader file)
    InvalidResource(String),

    /// Initialization failed (editor subsystems)
    InitializationFailed(String),

    /// A brush was asked to enter a mode it does not declare
    UnsupportedMode {
        /// Name of the brush that rejected the mode
        brush: String,
        /// The rejected mode
        mode: BrushMode,
    },

    /// A debug mesh could not be built by the graphics device
    ResourceBuildFailure(String),

    /// Shader program failed to compile or link (carries the compiler log)
    ShaderCompilationFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::OutOfMemory => write!(f, "Out of GPU memory"),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::UnsupportedMode { brush, mode } => {
                write!(f, "Unsupported mode: {} does not support {:?}", brush, mode)
            }
            Error::ResourceBuildFailure(msg) => write!(f, "Resource build failure: {}", msg),
            Error::ShaderCompilationFailed(log) => write!(f, "Shader compilation failed: {}", log),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Log an error and build an `Error::BackendError` from the formatted message
///
/// # Example
///
/// ```no_run
/// # use galaxy_3d_editor::engine_err;
/// let err = engine_err!("galaxy3d::Terrain", "Terrain {} has no heights", 3);
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::galaxy3d::Error::BackendError(message)
    }};
}

/// Log an error and return early with an `Error::BackendError`
///
/// # Example
///
/// ```no_run
/// # use galaxy_3d_editor::engine_bail;
/// # fn check(ok: bool) -> galaxy_3d_editor::galaxy3d::Result<()> {
/// if !ok {
///     engine_bail!("galaxy3d::Terrain", "Terrain check failed");
/// }
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
