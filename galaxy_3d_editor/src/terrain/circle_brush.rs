/// Circle brush - round footprint with a distance falloff, every mode

use super::brush::{self, BrushMode, BrushState, Falloff, TerrainBrush};
use super::splat_map::SplatChannel;
use super::terrain::Terrain;

pub struct CircleBrush {
    name: String,
    state: BrushState,
    strength: f32,
    target_height: f32,
    paint_channel: SplatChannel,
    falloff: Falloff,
}

impl CircleBrush {
    pub const DEFAULT_RADIUS: f32 = 10.0;

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: BrushState::new(Self::DEFAULT_RADIUS),
            strength: 1.0,
            target_height: 0.0,
            paint_channel: SplatChannel::G,
            falloff: Falloff::Linear,
        }
    }

    /// Height delta at the center for one raise/lower draw
    pub fn with_strength(mut self, strength: f32) -> Self {
        self.strength = strength;
        self
    }

    /// World height used by `PaintHeight`
    pub fn with_target_height(mut self, target_height: f32) -> Self {
        self.target_height = target_height;
        self
    }

    /// Channel painted by `Paint`
    pub fn with_paint_channel(mut self, channel: SplatChannel) -> Self {
        self.paint_channel = channel;
        self
    }

    pub fn with_falloff(mut self, falloff: Falloff) -> Self {
        self.falloff = falloff;
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        if radius > 0.0 && radius.is_finite() {
            self.state.radius = radius;
        }
        self
    }

    pub fn strength(&self) -> f32 {
        self.strength
    }

    pub fn target_height(&self) -> f32 {
        self.target_height
    }

    pub fn set_target_height(&mut self, target_height: f32) {
        self.target_height = target_height;
    }

    pub fn paint_channel(&self) -> SplatChannel {
        self.paint_channel
    }

    pub fn set_paint_channel(&mut self, channel: SplatChannel) {
        self.paint_channel = channel;
    }

    pub fn falloff(&self) -> Falloff {
        self.falloff
    }
}

impl TerrainBrush for CircleBrush {
    fn name(&self) -> &str {
        &self.name
    }

    fn supports_mode(&self, _mode: BrushMode) -> bool {
        true
    }

    fn state(&self) -> &BrushState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut BrushState {
        &mut self.state
    }

    fn apply(&self, terrain: &mut Terrain, mode: BrushMode, raise: bool) {
        if mode != BrushMode::RaiseLower && !raise {
            return;
        }
        let footprint = brush::circle_footprint(terrain, self.state.translation, self.state.radius, self.falloff);
        match mode {
            BrushMode::RaiseLower => brush::raise_lower(terrain, &footprint, self.strength, raise),
            BrushMode::PaintHeight => brush::paint_height(terrain, &footprint, self.target_height, self.strength),
            BrushMode::Smooth => brush::smooth(terrain, &footprint, self.strength),
            BrushMode::Paint => brush::paint(terrain, &footprint, self.paint_channel, self.strength),
        }
    }
}
