use log::debug;

use super::controller::{Button, Controller};
use crate::camera::{Camera, CameraMovement};

const MOVEMENT_BINDINGS: [(Button, CameraMovement); 4] = [
    (Button::KeyW, CameraMovement::Forward),
    (Button::KeyS, CameraMovement::Backward),
    (Button::KeyA, CameraMovement::Left),
    (Button::KeyD, CameraMovement::Right),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    Continue,
    Exit,
}

/// Turns controller state into camera updates once per frame.
///
/// Keeps the bits of state the mapping needs between frames: the previous
/// cursor sample, whether the cursor is captured for mouse-look, and the Tab
/// edge detector.
#[derive(Debug, Clone)]
pub struct CameraInputAdapter {
    last_cursor: Option<(f32, f32)>,
    cursor_captured: bool,
    tab_was_down: bool,
    pub constrain_pitch: bool,
}

impl CameraInputAdapter {
    pub fn new() -> Self {
        Self {
            last_cursor: None,
            cursor_captured: true,
            tab_was_down: false,
            constrain_pitch: true,
        }
    }

    pub fn cursor_captured(&self) -> bool {
        self.cursor_captured
    }

    /// Apply one frame of input to `camera`.
    ///
    /// Movement always applies. Mouse-look and zoom only apply while the cursor
    /// is captured; Tab toggles capture. The first cursor sample after capture
    /// only seeds the previous position so the view doesn't jump.
    pub fn apply(&mut self, camera: &mut Camera, controller: &impl Controller, delta_time: f32) -> ControlFlow {
        if controller.is_down(Button::Escape) {
            return ControlFlow::Exit;
        }

        for (button, movement) in MOVEMENT_BINDINGS {
            if controller.is_down(button) {
                camera.process_movement(movement, delta_time);
            }
        }

        let tab_down = controller.is_down(Button::Tab);
        if tab_down && !self.tab_was_down {
            self.cursor_captured = !self.cursor_captured;
            self.last_cursor = None;
            debug!("Cursor capture {}", if self.cursor_captured { "on" } else { "off" });
        }
        self.tab_was_down = tab_down;

        if !self.cursor_captured {
            return ControlFlow::Continue;
        }

        if let Some((x, y)) = controller.cursor_position() {
            let (last_x, last_y) = self.last_cursor.unwrap_or((x, y));
            // Screen y grows downward; moving the mouse up should look up.
            let (dx, dy) = (x - last_x, last_y - y);
            if dx != 0.0 || dy != 0.0 {
                camera.process_look(dx, dy, self.constrain_pitch);
            }
            self.last_cursor = Some((x, y));
        }

        let scroll = controller.scroll_delta();
        if scroll != 0.0 {
            camera.process_zoom(scroll);
        }

        ControlFlow::Continue
    }
}

impl Default for CameraInputAdapter {
    fn default() -> Self {
        Self::new()
    }
}
