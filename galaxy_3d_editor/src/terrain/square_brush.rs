/// Square brush - flat square footprint, height modes only

use super::brush::{self, BrushMode, BrushState, TerrainBrush};
use super::terrain::Terrain;

pub struct SquareBrush {
    name: String,
    state: BrushState,
    strength: f32,
    target_height: f32,
}

impl SquareBrush {
    pub const DEFAULT_RADIUS: f32 = 10.0;

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: BrushState::new(Self::DEFAULT_RADIUS),
            strength: 1.0,
            target_height: 0.0,
        }
    }

    pub fn with_strength(mut self, strength: f32) -> Self {
        self.strength = strength;
        self
    }

    pub fn with_target_height(mut self, target_height: f32) -> Self {
        self.target_height = target_height;
        self
    }

    pub fn target_height(&self) -> f32 {
        self.target_height
    }
}

impl TerrainBrush for SquareBrush {
    fn name(&self) -> &str {
        &self.name
    }

    fn supports_mode(&self, mode: BrushMode) -> bool {
        matches!(mode, BrushMode::RaiseLower | BrushMode::PaintHeight)
    }

    fn state(&self) -> &BrushState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut BrushState {
        &mut self.state
    }

    fn apply(&self, terrain: &mut Terrain, mode: BrushMode, raise: bool) {
        let footprint = brush::square_footprint(terrain, self.state.translation, self.state.radius);
        match mode {
            BrushMode::RaiseLower => brush::raise_lower(terrain, &footprint, self.strength, raise),
            BrushMode::PaintHeight if raise => {
                brush::paint_height(terrain, &footprint, self.target_height, self.strength)
            }
            _ => {}
        }
    }
}
