//! Brush controller - drives the active terrain brush from editor input.
//!
//! | Input                 | Effect on the active brush            |
//! |-----------------------|---------------------------------------|
//! | cursor move / drag    | center on the picked point of terrain 0 |
//! | wheel toward user / 0 | radius * grow factor                  |
//! | wheel away from user  | radius * shrink factor                |
//! | raise button held     | `draw(terrains, true)` on `act()`     |
//! | lower button held     | `draw(terrains, false)` on `act()`    |
//! | deactivate key        | no active brush                       |
//!
//! Every callback reports the event as not consumed, so other processors
//! still see it.

use std::sync::{Arc, RwLock};
use winit::event::MouseButton;
use winit::keyboard::KeyCode;
use crate::camera::Camera;
use crate::error::{Error, Result};
use crate::input::{InputProcessor, MouseButtons};
use crate::project::ProjectContext;
use crate::terrain::TerrainBrush;
use crate::{engine_debug, engine_error};

const LOG_SOURCE: &str = "galaxy3d::BrushController";

/// Index of the terrain the controller picks against
const PICK_TERRAIN: usize = 0;

/// Input bindings of the controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushBindings {
    pub raise: MouseButton,
    pub lower: MouseButton,
    pub deactivate: KeyCode,
    /// Radius factor for a wheel turn away from the user
    pub shrink_factor: f32,
    /// Radius factor for a wheel turn toward the user
    pub grow_factor: f32,
}

impl Default for BrushBindings {
    fn default() -> Self {
        Self {
            raise: MouseButton::Left,
            lower: MouseButton::Right,
            deactivate: KeyCode::Escape,
            shrink_factor: 0.9,
            grow_factor: 1.1,
        }
    }
}

pub struct BrushController {
    brushes: Vec<Box<dyn TerrainBrush>>,
    active: Option<usize>,
    camera: Arc<RwLock<Camera>>,
    project: Arc<RwLock<ProjectContext>>,
    bindings: BrushBindings,
    held: MouseButtons,
}

impl BrushController {
    pub fn new(project: Arc<RwLock<ProjectContext>>, camera: Arc<RwLock<Camera>>) -> Self {
        Self::with_bindings(project, camera, BrushBindings::default())
    }

    pub fn with_bindings(
        project: Arc<RwLock<ProjectContext>>,
        camera: Arc<RwLock<Camera>>,
        bindings: BrushBindings,
    ) -> Self {
        Self {
            brushes: Vec::new(),
            active: None,
            camera,
            project,
            bindings,
            held: MouseButtons::empty(),
        }
    }

    pub fn bindings(&self) -> &BrushBindings {
        &self.bindings
    }

    // ===== REGISTRY =====

    /// Register a brush and return its index
    pub fn add_brush(&mut self, brush: Box<dyn TerrainBrush>) -> usize {
        self.brushes.push(brush);
        self.brushes.len() - 1
    }

    pub fn brushes(&self) -> &[Box<dyn TerrainBrush>] {
        &self.brushes
    }

    pub fn activate(&mut self, index: usize) -> Result<()> {
        let Some(brush) = self.brushes.get(index) else {
            return Err(Error::InvalidResource(format!(
                "No brush at index {} ({} registered)", index, self.brushes.len()
            )));
        };
        engine_debug!(LOG_SOURCE, "Activated brush '{}'", brush.name());
        self.active = Some(index);
        Ok(())
    }

    pub fn deactivate(&mut self) {
        if self.active.take().is_some() {
            engine_debug!(LOG_SOURCE, "Brush deactivated");
        }
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active_brush(&self) -> Option<&dyn TerrainBrush> {
        self.active.and_then(|i| self.brushes.get(i)).map(|b| &**b)
    }

    pub fn active_brush_mut(&mut self) -> Option<&mut (dyn TerrainBrush + 'static)> {
        let index = self.active?;
        self.brushes.get_mut(index).map(|b| &mut **b)
    }

    /// Drop every brush. Safe to call more than once.
    pub fn dispose(&mut self) {
        self.active = None;
        self.held = MouseButtons::empty();
        self.brushes.clear();
    }

    // ===== BUTTON STATE =====

    pub fn held_buttons(&self) -> MouseButtons {
        self.held
    }

    /// Override the held buttons, for hosts that poll the mouse directly
    pub fn set_held_buttons(&mut self, held: MouseButtons) {
        self.held = held;
    }

    /// Per-frame update: draw with the active brush while its buttons are held.
    ///
    /// Raise is applied before lower when both are held.
    pub fn act(&mut self) {
        let raise = self.held.is_held(self.bindings.raise);
        let lower = self.held.is_held(self.bindings.lower);
        if !raise && !lower {
            return;
        }
        let Some(index) = self.active else {
            return;
        };
        let Some(brush) = self.brushes.get_mut(index) else {
            return;
        };

        let Ok(mut project) = self.project.write() else {
            engine_error!(LOG_SOURCE, "Project lock poisoned");
            return;
        };
        if raise {
            brush.draw(project.terrains_mut(), true);
        }
        if lower {
            brush.draw(project.terrains_mut(), false);
        }
    }

    /// Move the active brush to the terrain point under the cursor.
    fn pick(&mut self, screen_x: f32, screen_y: f32) {
        let Some(index) = self.active else {
            return;
        };
        let Some(brush) = self.brushes.get_mut(index) else {
            return;
        };

        let ray = match self.camera.read() {
            Ok(camera) => camera.pick_ray(screen_x, screen_y),
            Err(_) => {
                engine_error!(LOG_SOURCE, "Camera lock poisoned");
                return;
            }
        };
        let Ok(project) = self.project.read() else {
            engine_error!(LOG_SOURCE, "Project lock poisoned");
            return;
        };
        let Some(terrain) = project.terrains().get(PICK_TERRAIN) else {
            return;
        };

        if let Some(point) = terrain.ray_intersection(&ray) {
            brush.set_translation(point);
            brush.set_terrain(Some(PICK_TERRAIN));
        }
    }
}

impl InputProcessor for BrushController {
    fn key_down(&mut self, key: KeyCode) -> bool {
        if key == self.bindings.deactivate {
            self.deactivate();
        }
        false
    }

    fn touch_down(&mut self, _screen_x: f32, _screen_y: f32, button: MouseButton) -> bool {
        self.held.insert(MouseButtons::from_button(button));
        false
    }

    fn touch_up(&mut self, _screen_x: f32, _screen_y: f32, button: MouseButton) -> bool {
        self.held.remove(MouseButtons::from_button(button));
        false
    }

    fn touch_dragged(&mut self, screen_x: f32, screen_y: f32) -> bool {
        self.mouse_moved(screen_x, screen_y)
    }

    fn mouse_moved(&mut self, screen_x: f32, screen_y: f32) -> bool {
        self.pick(screen_x, screen_y);
        false
    }

    /// Any non-negative amount grows the brush.
    fn scrolled(&mut self, amount: f32) -> bool {
        let factor = if amount < 0.0 {
            self.bindings.shrink_factor
        } else {
            self.bindings.grow_factor
        };
        if let Some(brush) = self.active_brush_mut() {
            brush.scale(factor);
        }
        false
    }
}

#[cfg(test)]
#[path = "brush_controller_tests.rs"]
mod tests;
