/// Input module - editor input callbacks and window event routing
///
/// Tools implement `InputProcessor`. The host forwards winit window events
/// through an `InputRouter`, which tracks the cursor and translates the
/// events into processor callbacks.

mod input_router;

pub use input_router::{InputRouter, PIXELS_PER_SCROLL_LINE};

use bitflags::bitflags;
use winit::event::MouseButton;
use winit::keyboard::KeyCode;

bitflags! {
    /// Set of mouse buttons currently held down
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct MouseButtons: u8 {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
        const MIDDLE = 1 << 2;
        const BACK = 1 << 3;
        const FORWARD = 1 << 4;
    }
}

impl MouseButtons {
    /// Flag of a winit button; empty for `MouseButton::Other`
    pub fn from_button(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => MouseButtons::LEFT,
            MouseButton::Right => MouseButtons::RIGHT,
            MouseButton::Middle => MouseButtons::MIDDLE,
            MouseButton::Back => MouseButtons::BACK,
            MouseButton::Forward => MouseButtons::FORWARD,
            MouseButton::Other(_) => MouseButtons::empty(),
        }
    }

    pub fn is_held(&self, button: MouseButton) -> bool {
        let flag = MouseButtons::from_button(button);
        !flag.is_empty() && self.contains(flag)
    }
}

/// Receiver of editor input events.
///
/// Every callback returns whether the event was consumed. Screen
/// coordinates are in pixels from the top-left corner of the window.
/// Scroll amounts are positive when the wheel turns toward the user.
pub trait InputProcessor {
    fn key_down(&mut self, _key: KeyCode) -> bool {
        false
    }

    fn key_up(&mut self, _key: KeyCode) -> bool {
        false
    }

    fn key_typed(&mut self, _character: char) -> bool {
        false
    }

    fn touch_down(&mut self, _screen_x: f32, _screen_y: f32, _button: MouseButton) -> bool {
        false
    }

    fn touch_up(&mut self, _screen_x: f32, _screen_y: f32, _button: MouseButton) -> bool {
        false
    }

    /// Cursor moved with at least one button held
    fn touch_dragged(&mut self, _screen_x: f32, _screen_y: f32) -> bool {
        false
    }

    /// Cursor moved with no button held
    fn mouse_moved(&mut self, _screen_x: f32, _screen_y: f32) -> bool {
        false
    }

    fn scrolled(&mut self, _amount: f32) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_buttons_from_winit() {
        assert_eq!(MouseButtons::from_button(MouseButton::Left), MouseButtons::LEFT);
        assert_eq!(MouseButtons::from_button(MouseButton::Right), MouseButtons::RIGHT);
        assert!(MouseButtons::from_button(MouseButton::Other(7)).is_empty());
    }

    #[test]
    fn test_is_held() {
        let held = MouseButtons::LEFT | MouseButtons::MIDDLE;
        assert!(held.is_held(MouseButton::Left));
        assert!(!held.is_held(MouseButton::Right));
        assert!(!held.is_held(MouseButton::Other(1)));
    }
}
