use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::input_state::InputState;
use crate::traits::Button;

/// Write a winit window event into the input snapshot
///
/// Returns true if the event was an input event.
pub fn forward_window_event(input: &mut InputState, event: &WindowEvent) -> bool {
    match event {
        WindowEvent::KeyboardInput { event, .. } => {
            if let PhysicalKey::Code(keycode) = event.physical_key {
                if let Some(button) = keycode_to_button(keycode) {
                    input.set_pressed(button, event.state == ElementState::Pressed);
                }
            }
            true
        }
        WindowEvent::MouseInput { state, button, .. } => {
            if let Some(button) = mouse_button_to_button(*button) {
                input.set_pressed(button, *state == ElementState::Pressed);
            }
            true
        }
        WindowEvent::CursorMoved { position, .. } => {
            input.set_mouse_position(position.x as f32, position.y as f32);
            true
        }
        WindowEvent::CursorLeft { .. } => {
            input.clear_mouse_position();
            true
        }
        WindowEvent::Focused(false) => {
            input.release_all();
            false
        }
        _ => false,
    }
}

/// Map winit KeyCode to Button
pub fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
    match keycode {
        KeyCode::KeyW => Some(Button::KeyW),
        KeyCode::KeyA => Some(Button::KeyA),
        KeyCode::KeyS => Some(Button::KeyS),
        KeyCode::KeyD => Some(Button::KeyD),
        KeyCode::KeyR => Some(Button::KeyR),
        KeyCode::Space => Some(Button::Space),
        KeyCode::ShiftLeft | KeyCode::ShiftRight => Some(Button::Shift),
        KeyCode::Tab => Some(Button::Tab),
        KeyCode::Enter | KeyCode::NumpadEnter => Some(Button::Enter),
        KeyCode::Escape => Some(Button::Escape),
        KeyCode::F11 => Some(Button::F11),
        KeyCode::ArrowUp => Some(Button::ArrowUp),
        KeyCode::ArrowDown => Some(Button::ArrowDown),
        KeyCode::ArrowLeft => Some(Button::ArrowLeft),
        KeyCode::ArrowRight => Some(Button::ArrowRight),
        _ => None,
    }
}

/// Map winit MouseButton to Button
pub fn mouse_button_to_button(button: MouseButton) -> Option<Button> {
    match button {
        MouseButton::Left => Some(Button::MouseLeft),
        MouseButton::Right => Some(Button::MouseRight),
        MouseButton::Middle => Some(Button::MouseMiddle),
        _ => None,
    }
}
