/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    KeyR,
    Space,
    Shift,
    Tab,
    Enter,
    Escape,
    F11,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    MouseLeft,
    MouseRight,
    MouseMiddle,
}

/// Controller - read side of the polled input snapshot
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Get all currently pressed buttons, in press order
    fn get_down_keys(&self) -> &[Button];

    /// Last reported cursor position in window pixels
    fn mouse_position(&self) -> Option<(f32, f32)>;
}
