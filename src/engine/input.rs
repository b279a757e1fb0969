//! Input methods for `OrreryEngine`.

use glam::Vec2;

use super::OrreryEngine;
use crate::input::{InputEvent, MouseButton};

// ── Unified input handler ──

impl OrreryEngine {
    /// Process a platform-agnostic input event.
    ///
    /// Consumers forward raw window events as [`InputEvent`] variants;
    /// the engine dispatches to camera rotation/pan/zoom.
    ///
    /// # Example
    ///
    /// ```ignore
    /// engine.handle_input(InputEvent::CursorMoved { x, y });
    /// engine.handle_input(InputEvent::Scroll { delta: 1.0 });
    /// ```
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.dispatch_cursor_moved(x, y);
            }
            InputEvent::MouseButton { button, pressed } => {
                if button == MouseButton::Left {
                    self.camera_controller.mouse_pressed = pressed;
                }
            }
            InputEvent::Scroll { delta } => {
                self.camera_controller.zoom(delta);
            }
            InputEvent::ModifiersChanged { shift } => {
                self.camera_controller.shift_pressed = shift;
            }
        }
    }

    /// Cursor moved — compute delta, forward to the camera.
    fn dispatch_cursor_moved(&mut self, x: f32, y: f32) {
        let (delta_x, delta_y) = if let Some((lx, ly)) = self.last_cursor_pos {
            (x - lx, y - ly)
        } else {
            (0.0, 0.0)
        };
        self.last_cursor_pos = Some((x, y));

        if self.camera_controller.mouse_pressed {
            let delta = Vec2::new(delta_x, delta_y);
            if self.camera_controller.shift_pressed {
                self.camera_controller.pan(delta);
            } else {
                self.camera_controller.rotate(delta);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SystemSpec;

    fn engine() -> OrreryEngine {
        OrreryEngine::new(&SystemSpec::solar_system()).unwrap()
    }

    #[test]
    fn drag_rotates_only_while_pressed() {
        let mut e = engine();
        let eye = e.camera().eye;

        // Move without press: camera untouched
        e.handle_input(InputEvent::CursorMoved { x: 10.0, y: 10.0 });
        e.handle_input(InputEvent::CursorMoved { x: 60.0, y: 10.0 });
        assert_eq!(e.camera().eye, eye);

        // Press and drag: camera orbits
        e.handle_input(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        });
        e.handle_input(InputEvent::CursorMoved { x: 120.0, y: 40.0 });
        assert!(e.camera().eye != eye);
    }

    #[test]
    fn shift_drag_pans_the_focus() {
        let mut e = engine();
        e.handle_input(InputEvent::CursorMoved { x: 0.0, y: 0.0 });
        e.handle_input(InputEvent::ModifiersChanged { shift: true });
        e.handle_input(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        });
        e.handle_input(InputEvent::CursorMoved { x: 30.0, y: 0.0 });
        assert!(e.camera_controller.focus_point().length() > 0.0);
    }

    #[test]
    fn scroll_zooms_in() {
        let mut e = engine();
        let before = e.camera_controller.distance();
        e.handle_input(InputEvent::Scroll { delta: 1.0 });
        assert!(e.camera_controller.distance() < before);
    }

    #[test]
    fn non_primary_buttons_are_ignored() {
        let mut e = engine();
        e.handle_input(InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: true,
        });
        assert!(!e.camera_controller.mouse_pressed);
    }
}
