use std::sync::Arc;

use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event_loop::ActiveEventLoop;
use winit::monitor::{MonitorHandle, VideoModeHandle};
use winit::window::{CursorGrabMode, Fullscreen, Window};

use crate::config::WindowConfig;
use crate::error::PlatformError;
use crate::traits::Platform;
use crate::types::{MonitorTarget, RefreshMode};

/// Used when a monitor doesn't report its refresh rate
const FALLBACK_REFRESH_RATE: u32 = 60;

fn millihertz_to_hz(millihertz: u32) -> u32 {
    millihertz.saturating_add(500) / 1000
}

fn video_mode_to_refresh_mode(mode: &VideoModeHandle) -> RefreshMode {
    let size = mode.size();
    RefreshMode::new(
        size.width,
        size.height,
        millihertz_to_hz(mode.refresh_rate_millihertz()),
    )
}

fn native_mode(monitor: &MonitorHandle) -> RefreshMode {
    let size = monitor.size();
    let refresh_rate = monitor
        .refresh_rate_millihertz()
        .map(millihertz_to_hz)
        .or_else(|| {
            monitor
                .video_modes()
                .filter(|mode| mode.size() == size)
                .map(|mode| millihertz_to_hz(mode.refresh_rate_millihertz()))
                .max()
        })
        .unwrap_or(FALLBACK_REFRESH_RATE);
    RefreshMode::new(size.width, size.height, refresh_rate)
}

/// Exclusive fullscreen with the video mode matching `mode`, borderless on
/// the same monitor when the monitor doesn't offer it
fn fullscreen_for(monitor: MonitorHandle, mode: RefreshMode) -> Fullscreen {
    let exclusive = monitor
        .video_modes()
        .find(|candidate| video_mode_to_refresh_mode(candidate) == mode);
    match exclusive {
        Some(video_mode) => Fullscreen::Exclusive(video_mode),
        None => {
            log::warn!(
                "No exclusive video mode {}x{}@{}Hz, using borderless fullscreen",
                mode.width,
                mode.height,
                mode.refresh_rate
            );
            Fullscreen::Borderless(Some(monitor))
        }
    }
}

/// Platform backed by a winit window
pub struct WinitPlatform {
    window: Arc<Window>,
}

impl WinitPlatform {
    /// Create the OS window described by `config`
    pub fn create(event_loop: &ActiveEventLoop, config: &WindowConfig) -> Result<Self, PlatformError> {
        let mut attributes = Window::default_attributes()
            .with_title(&config.title)
            .with_inner_size(PhysicalSize::new(config.width, config.height));

        if config.start_in_fullscreen {
            let monitor = event_loop
                .primary_monitor()
                .or_else(|| event_loop.available_monitors().next())
                .ok_or(PlatformError::NoMonitor)?;
            let mode = native_mode(&monitor);
            attributes = attributes.with_fullscreen(Some(fullscreen_for(monitor, mode)));
        }

        let window = event_loop
            .create_window(attributes)
            .map_err(|err| PlatformError::WindowCreation(err.to_string()))?;
        log::info!(
            "Created window \"{}\" {}x{}",
            config.title,
            config.width,
            config.height
        );

        Ok(Self::new(Arc::new(window)))
    }

    pub fn new(window: Arc<Window>) -> Self {
        Self { window }
    }

    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }

    // Wayland has no notion of a primary monitor
    fn monitor(&self) -> Option<MonitorHandle> {
        self.window
            .primary_monitor()
            .or_else(|| self.window.current_monitor())
            .or_else(|| self.window.available_monitors().next())
    }
}

impl Platform for WinitPlatform {
    fn primary_monitor_modes(&self) -> Vec<RefreshMode> {
        self.monitor()
            .map(|monitor| {
                monitor
                    .video_modes()
                    .map(|mode| video_mode_to_refresh_mode(&mode))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn primary_monitor_native_mode(&self) -> Option<RefreshMode> {
        self.monitor().map(|monitor| native_mode(&monitor))
    }

    fn window_position(&self) -> (i32, i32) {
        match self.window.outer_position() {
            Ok(position) => (position.x, position.y),
            Err(err) => {
                log::debug!("Window position unavailable: {err}");
                (0, 0)
            }
        }
    }

    fn window_size(&self) -> (u32, u32) {
        let size = self.window.inner_size();
        (size.width, size.height)
    }

    fn set_window_monitor(&self, target: MonitorTarget) -> Result<(), PlatformError> {
        match target {
            MonitorTarget::Fullscreen(mode) => {
                let monitor = self.monitor().ok_or(PlatformError::NoMonitor)?;
                self.window
                    .set_fullscreen(Some(fullscreen_for(monitor, mode)));
            }
            MonitorTarget::Windowed(geometry) => {
                self.window.set_fullscreen(None);
                self.window
                    .set_outer_position(PhysicalPosition::new(geometry.x, geometry.y));
                let _ = self
                    .window
                    .request_inner_size(PhysicalSize::new(geometry.width, geometry.height));
            }
        }
        Ok(())
    }

    fn set_cursor_captured(&self, captured: bool) -> Result<(), PlatformError> {
        if captured {
            // Locked isn't available everywhere (Windows, X11), Confined is
            self.window
                .set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| self.window.set_cursor_grab(CursorGrabMode::Confined))
                .map_err(|err| PlatformError::CursorGrab(err.to_string()))?;
        } else {
            self.window
                .set_cursor_grab(CursorGrabMode::None)
                .map_err(|err| PlatformError::CursorGrab(err.to_string()))?;
        }
        self.window.set_cursor_visible(!captured);
        Ok(())
    }

    fn resize_window(&self, width: u32, height: u32) -> Result<(), PlatformError> {
        if let Some(applied) = self.window.request_inner_size(PhysicalSize::new(width, height)) {
            log::debug!("Resize applied immediately: {}x{}", applied.width, applied.height);
        }
        Ok(())
    }
}
