/// Tools module - editor tools driven by input

mod brush_controller;

pub use brush_controller::{BrushBindings, BrushController};
