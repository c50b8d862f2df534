/// Translates winit window events into `InputProcessor` callbacks.

use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use super::{InputProcessor, MouseButtons};

/// Pixel scroll deltas are divided by this to get wheel lines
pub const PIXELS_PER_SCROLL_LINE: f32 = 20.0;

/// Cursor and button state shared by all routed events
#[derive(Debug, Default)]
pub struct InputRouter {
    cursor: (f32, f32),
    held: MouseButtons,
}

impl InputRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known cursor position
    pub fn cursor(&self) -> (f32, f32) {
        self.cursor
    }

    pub fn held_buttons(&self) -> MouseButtons {
        self.held
    }

    /// Route one window event. Returns whether the processor consumed it.
    pub fn dispatch(&mut self, processor: &mut dyn InputProcessor, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(processor, position.x as f32, position.y as f32)
            }
            WindowEvent::MouseInput { state, button, .. } => self.mouse_input(processor, *state, *button),
            WindowEvent::MouseWheel { delta, .. } => self.mouse_wheel(processor, delta),
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(key) = event.physical_key else {
                    return false;
                };
                self.key_input(processor, key, event.state, event.text.as_deref())
            }
            _ => false,
        }
    }

    pub fn cursor_moved(&mut self, processor: &mut dyn InputProcessor, x: f32, y: f32) -> bool {
        self.cursor = (x, y);
        if self.held.is_empty() {
            processor.mouse_moved(x, y)
        } else {
            processor.touch_dragged(x, y)
        }
    }

    pub fn mouse_input(
        &mut self,
        processor: &mut dyn InputProcessor,
        state: ElementState,
        button: MouseButton,
    ) -> bool {
        let (x, y) = self.cursor;
        match state {
            ElementState::Pressed => {
                self.held.insert(MouseButtons::from_button(button));
                processor.touch_down(x, y, button)
            }
            ElementState::Released => {
                self.held.remove(MouseButtons::from_button(button));
                processor.touch_up(x, y, button)
            }
        }
    }

    /// winit reports positive y when the wheel turns away from the user, so
    /// the amount is negated.
    pub fn mouse_wheel(&mut self, processor: &mut dyn InputProcessor, delta: &MouseScrollDelta) -> bool {
        let lines = match delta {
            MouseScrollDelta::LineDelta(_, y) => *y,
            MouseScrollDelta::PixelDelta(position) => position.y as f32 / PIXELS_PER_SCROLL_LINE,
        };
        processor.scrolled(-lines)
    }

    /// Key press or release; typed characters are reported after a press.
    pub fn key_input(
        &mut self,
        processor: &mut dyn InputProcessor,
        key: KeyCode,
        state: ElementState,
        text: Option<&str>,
    ) -> bool {
        match state {
            ElementState::Pressed => {
                let mut consumed = processor.key_down(key);
                for character in text.unwrap_or_default().chars() {
                    consumed |= processor.key_typed(character);
                }
                consumed
            }
            ElementState::Released => processor.key_up(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl InputProcessor for Recorder {
        fn key_down(&mut self, key: KeyCode) -> bool {
            self.calls.push(format!("key_down:{:?}", key));
            false
        }

        fn key_up(&mut self, key: KeyCode) -> bool {
            self.calls.push(format!("key_up:{:?}", key));
            false
        }

        fn key_typed(&mut self, character: char) -> bool {
            self.calls.push(format!("typed:{}", character));
            true
        }

        fn touch_down(&mut self, x: f32, y: f32, button: MouseButton) -> bool {
            self.calls.push(format!("down:{}:{}:{:?}", x, y, button));
            false
        }

        fn touch_up(&mut self, _x: f32, _y: f32, button: MouseButton) -> bool {
            self.calls.push(format!("up:{:?}", button));
            false
        }

        fn touch_dragged(&mut self, x: f32, y: f32) -> bool {
            self.calls.push(format!("drag:{}:{}", x, y));
            false
        }

        fn mouse_moved(&mut self, x: f32, y: f32) -> bool {
            self.calls.push(format!("move:{}:{}", x, y));
            false
        }

        fn scrolled(&mut self, amount: f32) -> bool {
            self.calls.push(format!("scroll:{}", amount));
            false
        }
    }

    #[test]
    fn test_move_versus_drag() {
        let mut router = InputRouter::new();
        let mut recorder = Recorder::default();

        router.cursor_moved(&mut recorder, 10.0, 20.0);
        router.mouse_input(&mut recorder, ElementState::Pressed, MouseButton::Left);
        router.cursor_moved(&mut recorder, 11.0, 21.0);
        router.mouse_input(&mut recorder, ElementState::Released, MouseButton::Left);
        router.cursor_moved(&mut recorder, 12.0, 22.0);

        assert_eq!(
            recorder.calls,
            vec!["move:10:20", "down:10:20:Left", "drag:11:21", "up:Left", "move:12:22"]
        );
        assert!(router.held_buttons().is_empty());
        assert_eq!(router.cursor(), (12.0, 22.0));
    }

    #[test]
    fn test_wheel_sign_and_pixel_scaling() {
        let mut router = InputRouter::new();
        let mut recorder = Recorder::default();

        router.mouse_wheel(&mut recorder, &MouseScrollDelta::LineDelta(0.0, 1.0));
        router.mouse_wheel(&mut recorder, &MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -40.0)));

        assert_eq!(recorder.calls, vec!["scroll:-1", "scroll:2"]);
    }

    #[test]
    fn test_key_press_reports_typed_text() {
        let mut router = InputRouter::new();
        let mut recorder = Recorder::default();

        let consumed = router.key_input(&mut recorder, KeyCode::KeyA, ElementState::Pressed, Some("a"));
        router.key_input(&mut recorder, KeyCode::KeyA, ElementState::Released, None);

        assert!(consumed);
        assert_eq!(recorder.calls, vec!["key_down:KeyA", "typed:a", "key_up:KeyA"]);
    }
}
