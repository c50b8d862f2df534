/// Camera - low-level passive data container.
///
/// The caller (editor host) computes and sets the view matrix, the
/// projection matrix and the viewport. The camera only derives the combined
/// view-projection and the pick ray for a cursor position.

use glam::{Mat4, Vec3};
use super::ray::Ray;

/// Viewport rectangle in window pixels (origin top-left, y down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Viewport covering a whole window of the given size.
    pub fn from_size(width: f32, height: f32) -> Self {
        Self { x: 0.0, y: 0.0, width, height }
    }
}

/// Low-level camera. Computes nothing but derived matrices and pick rays.
///
/// Projections are expected with a `[0, 1]` depth range (glam `*_rh`
/// constructors).
#[derive(Debug, Clone)]
pub struct Camera {
    view_matrix: Mat4,
    projection_matrix: Mat4,
    viewport: Viewport,
}

impl Camera {
    /// Create a new camera with the given parameters.
    pub fn new(view: Mat4, projection: Mat4, viewport: Viewport) -> Self {
        Self {
            view_matrix: view,
            projection_matrix: projection,
            viewport,
        }
    }

    // ===== GETTERS =====

    /// View matrix (inverse of the camera's world transform).
    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    /// Projection matrix (perspective or orthographic).
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }

    /// Viewport in window pixels.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Build the world-space ray passing through a window pixel.
    ///
    /// Screen coordinates follow window conventions: origin at the top-left
    /// corner, y growing downward. The ray starts on the near plane and
    /// points toward the far plane.
    pub fn pick_ray(&self, screen_x: f32, screen_y: f32) -> Ray {
        let vp = &self.viewport;
        let ndc_x = 2.0 * (screen_x - vp.x) / vp.width - 1.0;
        let ndc_y = 1.0 - 2.0 * (screen_y - vp.y) / vp.height;

        let inverse = self.view_projection_matrix().inverse();
        let near = inverse.project_point3(Vec3::new(ndc_x, ndc_y, 0.0));
        let far = inverse.project_point3(Vec3::new(ndc_x, ndc_y, 1.0));

        Ray::new(near, far - near)
    }

    // ===== SETTERS - store, compute nothing =====

    /// Set the view matrix.
    pub fn set_view(&mut self, matrix: Mat4) {
        self.view_matrix = matrix;
    }

    /// Set the projection matrix.
    pub fn set_projection(&mut self, matrix: Mat4) {
        self.projection_matrix = matrix;
    }

    /// Set the viewport.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
