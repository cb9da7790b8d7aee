use std::collections::HashSet;

/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    Tab,
    Escape,
}

/// Controller - read side of the per-frame input state
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Get all currently pressed buttons
    fn get_down_keys(&self) -> &[Button];

    /// Latest cursor position in window pixels, if the cursor has been seen
    fn cursor_position(&self) -> Option<(f32, f32)>;

    /// Vertical scroll accumulated since the last `end_frame`
    fn scroll_delta(&self) -> f32;
}

/// Input state fed by the windowing layer and owned by the frame loop.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pressed_keys: HashSet<Button>,
    /// Same buttons in press order, so `get_down_keys` can hand out a slice
    pressed_vec: Vec<Button>,
    cursor_position: Option<(f32, f32)>,
    scroll_delta: f32,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, button: Button) {
        if self.pressed_keys.insert(button) {
            self.pressed_vec.push(button);
        }
    }

    pub fn release(&mut self, button: Button) {
        if self.pressed_keys.remove(&button) {
            self.pressed_vec.retain(|&b| b != button);
        }
    }

    pub fn cursor_moved(&mut self, x: f32, y: f32) {
        self.cursor_position = Some((x, y));
    }

    pub fn scrolled(&mut self, dy: f32) {
        self.scroll_delta += dy;
    }

    /// Reset per-frame state (scroll). Held buttons and cursor position persist.
    pub fn end_frame(&mut self) {
        self.scroll_delta = 0.0;
    }
}

impl Controller for InputState {
    fn is_down(&self, button: Button) -> bool {
        self.pressed_keys.contains(&button)
    }

    fn get_down_keys(&self) -> &[Button] {
        &self.pressed_vec
    }

    fn cursor_position(&self) -> Option<(f32, f32)> {
        self.cursor_position
    }

    fn scroll_delta(&self) -> f32 {
        self.scroll_delta
    }
}
