use crate::error::{PlatformError, StateError};
use crate::traits::Platform;
use crate::types::{MonitorTarget, WindowGeometry};

/// Fullscreen and cursor-capture flags of one window
///
/// The two axes are independent. `saved_geometry` holds the windowed
/// placement captured on the last windowed -> fullscreen transition and is
/// kept (not cleared) when returning to windowed mode.
///
/// Every transition is all-or-nothing: the platform request goes out first
/// and the flags only change once it succeeded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowState {
    is_fullscreen: bool,
    cursor_captured: bool,
    saved_geometry: Option<WindowGeometry>,
}

impl WindowState {
    /// State for a window created windowed or fullscreen
    ///
    /// A window starting in fullscreen needs somewhere to go back to, pass
    /// it as `windowed_geometry`.
    pub fn new(is_fullscreen: bool, windowed_geometry: Option<WindowGeometry>) -> Self {
        Self {
            is_fullscreen,
            cursor_captured: false,
            saved_geometry: windowed_geometry,
        }
    }

    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }

    pub fn cursor_captured(&self) -> bool {
        self.cursor_captured
    }

    pub fn saved_geometry(&self) -> Option<WindowGeometry> {
        self.saved_geometry
    }

    /// Switch to the primary monitor's native mode, remembering the current
    /// windowed geometry. No-op when already fullscreen.
    pub fn enable_fullscreen(&mut self, platform: &dyn Platform) -> Result<(), StateError> {
        if self.is_fullscreen {
            return Ok(());
        }
        let geometry = platform.window_geometry();
        self.enter_fullscreen(platform, geometry)
    }

    /// Return to the geometry saved when fullscreen was entered. No-op when
    /// already windowed.
    pub fn disable_fullscreen(&mut self, platform: &dyn Platform) -> Result<(), StateError> {
        if !self.is_fullscreen {
            return Ok(());
        }
        let geometry = self
            .saved_geometry
            .ok_or(StateError::MissingSavedGeometry)?;
        self.leave_fullscreen(platform, geometry)
    }

    /// Flip between windowed and fullscreen
    ///
    /// The window geometry is read from the platform on every call. Leaving
    /// fullscreen therefore restores whatever the platform reports at that
    /// moment (typically the fullscreen placement), not the geometry saved on
    /// entry. Use [`Self::disable_fullscreen`] for an exact restore.
    pub fn toggle_fullscreen(&mut self, platform: &dyn Platform) -> Result<(), StateError> {
        let geometry = platform.window_geometry();
        if self.is_fullscreen {
            self.leave_fullscreen(platform, geometry)
        } else {
            self.enter_fullscreen(platform, geometry)
        }
    }

    /// Capture or release the cursor. The platform is asked even if the flag
    /// already has the requested value.
    pub fn set_cursor_captured(
        &mut self,
        platform: &dyn Platform,
        captured: bool,
    ) -> Result<(), StateError> {
        platform.set_cursor_captured(captured)?;
        self.cursor_captured = captured;
        log::debug!("Cursor {}", if captured { "captured" } else { "released" });
        Ok(())
    }

    pub fn toggle_cursor_capture(&mut self, platform: &dyn Platform) -> Result<(), StateError> {
        self.set_cursor_captured(platform, !self.cursor_captured)
    }

    fn enter_fullscreen(
        &mut self,
        platform: &dyn Platform,
        geometry: WindowGeometry,
    ) -> Result<(), StateError> {
        let mode = platform
            .primary_monitor_native_mode()
            .ok_or(PlatformError::NoMonitor)?;
        platform.set_window_monitor(MonitorTarget::Fullscreen(mode))?;

        self.saved_geometry = Some(geometry);
        self.is_fullscreen = true;
        log::debug!(
            "Entered fullscreen {}x{}@{}Hz, saved {:?}",
            mode.width,
            mode.height,
            mode.refresh_rate,
            geometry
        );
        Ok(())
    }

    fn leave_fullscreen(
        &mut self,
        platform: &dyn Platform,
        geometry: WindowGeometry,
    ) -> Result<(), StateError> {
        platform.set_window_monitor(MonitorTarget::Windowed(geometry))?;
        self.is_fullscreen = false;
        log::debug!("Left fullscreen, restored {:?}", geometry);
        Ok(())
    }
}
