/// Debug module - bounding box and facing arrow overlay
///
/// `shape_builder` produces mesh descriptors, `DebugGeometryFactory` turns
/// them into device meshes and `DebugRenderer` caches and draws them.

pub mod shape_builder;
mod debug_geometry;
mod debug_renderer;

pub use debug_geometry::{ArrowParams, DebugGeometryFactory, DebugModelInstance};
pub use debug_renderer::{category_color, DebugRenderer, DebugRendererConfig};
