/*!
# Galaxy 3D Editor

Editor-side core of the Galaxy 3D engine: scene view state, a debug overlay
for bounding volumes and facing arrows, and terrain sculpting brushes driven
by editor input.

The crate does not talk to a GPU API. The host implements `GraphicsDevice`
on top of its backend and shares it with the editor subsystems as
`Arc<Mutex<dyn GraphicsDevice>>`.

## Architecture

- **GraphicsDevice**: Host rendering services (meshes, shaders, batched draws)
- **Camera**: Passive view/projection data and pick rays
- **GameObject**: Scene tree node with typed components and bounding boxes
- **DebugRenderer**: Per-component cache of overlay boxes and arrows
- **Terrain / TerrainBrush**: Height fields and the brushes that sculpt them
- **BrushController**: Maps pointer, wheel and key input onto the active brush
- **ProjectContext**: Entities, terrains and id allocation of the open project
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod camera;
pub mod graphics_device;
pub mod scene;
pub mod debug;
pub mod terrain;
pub mod input;
pub mod tools;
pub mod project;
pub mod shader;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine singleton (logger)
    pub use crate::engine::Engine;

    // Host rendering services
    pub use crate::graphics_device::GraphicsDevice;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    pub mod render {
        pub use crate::graphics_device::*;
        pub use crate::camera::*;
        pub use crate::shader::*;
    }

    pub mod scene {
        pub use crate::scene::*;
        pub use crate::project::*;
    }

    pub mod debug {
        pub use crate::debug::*;
    }

    pub mod terrain {
        pub use crate::terrain::*;
    }

    pub mod tools {
        pub use crate::input::*;
        pub use crate::tools::*;
    }
}

// Re-export math library at crate root
pub use glam;
