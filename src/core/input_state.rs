use std::collections::HashSet;

use crate::traits::{Button, Controller};

/// Flat snapshot of live input, written by the event side and polled once
/// per frame
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pressed: HashSet<Button>,
    /// Same buttons as `pressed`, in press order
    pressed_vec: Vec<Button>,
    mouse_position: Option<(f32, f32)>,
    mouse_delta: (f32, f32),
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press or release. Repeats of the current state are ignored.
    pub fn set_pressed(&mut self, button: Button, pressed: bool) {
        if pressed {
            if self.pressed.insert(button) {
                self.pressed_vec.push(button);
            }
        } else if self.pressed.remove(&button) {
            self.pressed_vec.retain(|&b| b != button);
        }
    }

    /// Record the latest cursor position, accumulating movement since the
    /// last [`Self::end_frame`]
    pub fn set_mouse_position(&mut self, x: f32, y: f32) {
        if let Some((old_x, old_y)) = self.mouse_position {
            self.mouse_delta.0 += x - old_x;
            self.mouse_delta.1 += y - old_y;
        }
        self.mouse_position = Some((x, y));
    }

    /// Cursor left the window; the next position starts a fresh delta
    pub fn clear_mouse_position(&mut self) {
        self.mouse_position = None;
    }

    /// Release everything, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        self.pressed.clear();
        self.pressed_vec.clear();
    }

    pub fn mouse_delta(&self) -> (f32, f32) {
        self.mouse_delta
    }

    /// Reset per-frame state. Call after the frame consumed the input.
    pub fn end_frame(&mut self) {
        self.mouse_delta = (0.0, 0.0);
    }
}

impl Controller for InputState {
    fn is_down(&self, button: Button) -> bool {
        self.pressed.contains(&button)
    }

    fn get_down_keys(&self) -> &[Button] {
        &self.pressed_vec
    }

    fn mouse_position(&self) -> Option<(f32, f32)> {
        self.mouse_position
    }
}
