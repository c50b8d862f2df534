/// Terrain module - height fields, splat maps and the brushes that edit them

mod terrain;
mod splat_map;
mod brush;
mod circle_brush;
mod square_brush;

pub use terrain::{Terrain, TerrainDesc};
pub use splat_map::{SplatChannel, SplatMap};
pub use brush::{BrushMode, BrushState, Falloff, TerrainBrush};
pub use circle_brush::CircleBrush;
pub use square_brush::SquareBrush;
