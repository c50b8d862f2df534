/// Graphics device module - host rendering services used by the editor core
///
/// The editor never talks to a GPU API directly. The host implements
/// `GraphicsDevice` on top of its backend; the editor asks it for meshes,
/// shader programs, depth clears and batched draws.

pub mod graphics_device;
pub mod mesh;
pub mod color;
pub mod shader;

pub use graphics_device::*;
pub use mesh::*;
pub use color::*;
pub use shader::*;

// Mock graphics device for tests (no GPU required)
#[cfg(test)]
pub mod mock_graphics_device;
