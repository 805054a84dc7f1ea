use crate::error::PlatformError;
use crate::types::{MonitorTarget, RefreshMode, WindowGeometry};

/// Windowing platform abstraction - everything the window core asks of the
/// native library once the window exists
pub trait Platform {
    /// All modes reported by the primary monitor, empty if there is none
    fn primary_monitor_modes(&self) -> Vec<RefreshMode>;

    /// Mode the primary monitor is currently driven at
    fn primary_monitor_native_mode(&self) -> Option<RefreshMode>;

    /// Top-left corner of the window in screen pixels
    fn window_position(&self) -> (i32, i32);

    /// Size of the window in physical pixels
    fn window_size(&self) -> (u32, u32);

    /// Move the window to fullscreen on a monitor or back to windowed mode
    fn set_window_monitor(&self, target: MonitorTarget) -> Result<(), PlatformError>;

    /// Lock and hide the cursor, or release it
    fn set_cursor_captured(&self, captured: bool) -> Result<(), PlatformError>;

    /// Request a new window size in physical pixels
    fn resize_window(&self, width: u32, height: u32) -> Result<(), PlatformError>;

    /// Current position and size in one read
    fn window_geometry(&self) -> WindowGeometry {
        let (x, y) = self.window_position();
        let (width, height) = self.window_size();
        WindowGeometry::new(x, y, width, height)
    }
}
