use glam::Vec2;
use winit::event::WindowEvent;

use super::coordinate_mapper::CoordinateMapper;
use super::display_modes::{get_available_resolutions, parse_resolution};
use super::input_adapter::forward_window_event;
use super::input_state::InputState;
use super::window_state::WindowState;
use crate::config::WindowConfig;
use crate::error::WindowError;
use crate::traits::{Controller, Platform};
use crate::types::{Resolution, WindowGeometry};

/// One live window: the platform handle plus everything tracked about it
pub struct WindowContext<P: Platform> {
    platform: P,
    state: WindowState,
    mapper: CoordinateMapper,
    input: InputState,
}

impl<P: Platform> WindowContext<P> {
    /// Wrap a freshly created platform window
    ///
    /// The fullscreen flag is taken from the config. A window that starts
    /// fullscreen gets the configured size, centered on the monitor, as the
    /// geometry to return to.
    pub fn new(platform: P, config: &WindowConfig) -> Result<Self, WindowError> {
        let windowed_geometry = if config.start_in_fullscreen {
            let bounds = platform
                .primary_monitor_native_mode()
                .map(|mode| mode.resolution())
                .unwrap_or(Resolution::new(config.width, config.height));
            Some(WindowGeometry::centered_in(
                config.width,
                config.height,
                bounds,
            ))
        } else {
            None
        };

        let (width, height) = platform.window_size();
        let mut context = Self {
            platform,
            state: WindowState::new(config.start_in_fullscreen, windowed_geometry),
            mapper: CoordinateMapper::new(width, height),
            input: InputState::new(),
        };

        if config.start_with_mouse_captured {
            context.set_cursor_captured(true)?;
        }

        Ok(context)
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn state(&self) -> &WindowState {
        &self.state
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn viewport(&self) -> (u32, u32) {
        self.mapper.viewport()
    }

    pub fn enable_fullscreen(&mut self) -> Result<(), WindowError> {
        self.state.enable_fullscreen(&self.platform)?;
        Ok(())
    }

    pub fn disable_fullscreen(&mut self) -> Result<(), WindowError> {
        self.state.disable_fullscreen(&self.platform)?;
        Ok(())
    }

    pub fn toggle_fullscreen(&mut self) -> Result<(), WindowError> {
        self.state.toggle_fullscreen(&self.platform)?;
        Ok(())
    }

    pub fn set_cursor_captured(&mut self, captured: bool) -> Result<(), WindowError> {
        self.state.set_cursor_captured(&self.platform, captured)?;
        Ok(())
    }

    pub fn toggle_cursor_capture(&mut self) -> Result<(), WindowError> {
        self.state.toggle_cursor_capture(&self.platform)?;
        Ok(())
    }

    /// Resize the window from a `WIDTHxHEIGHT` string
    ///
    /// The viewport follows once the platform reports the new size through
    /// [`Self::handle_resize`].
    pub fn set_resolution(&mut self, resolution: &str) -> Result<Resolution, WindowError> {
        let resolution = parse_resolution(resolution).inspect_err(|err| {
            log::warn!("Ignoring resize request: {err}");
        })?;
        self.platform
            .resize_window(resolution.width, resolution.height)?;
        log::info!("Requested window size {resolution}");
        Ok(resolution)
    }

    /// Resolutions of the primary monitor as `WIDTHxHEIGHT` strings
    pub fn available_resolutions(&self, ratio: Option<&str>) -> Result<Vec<String>, WindowError> {
        Ok(get_available_resolutions(&self.platform, ratio)?)
    }

    /// Track a new framebuffer size. Returns whether the viewport changed.
    pub fn handle_resize(&mut self, width: u32, height: u32) -> bool {
        let changed = self.mapper.set_viewport(width, height);
        if changed {
            log::debug!("Viewport resized to {width}x{height}");
        }
        changed
    }

    /// Feed a window event into input tracking and viewport state
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        if let WindowEvent::Resized(size) = event {
            self.handle_resize(size.width, size.height);
            return;
        }
        forward_window_event(&mut self.input, event);
    }

    /// Cursor position in normalized space, if the cursor is over the window
    pub fn mouse_normalized(&self) -> Option<Vec2> {
        let (x, y) = self.input.mouse_position()?;
        Some(self.mapper.to_normalized(x, y))
    }

    /// Cursor position in aspect-corrected normalized space
    pub fn mouse_aspect_corrected(&self) -> Option<Vec2> {
        let (x, y) = self.input.mouse_position()?;
        Some(self.mapper.to_aspect_corrected(x, y))
    }

    /// Log what the platform reports about the primary monitor
    pub fn log_platform_info(&self) {
        match self.platform.primary_monitor_native_mode() {
            Some(mode) => log::info!(
                "Primary monitor: {}x{} @ {} Hz, {} display modes",
                mode.width,
                mode.height,
                mode.refresh_rate,
                self.platform.primary_monitor_modes().len()
            ),
            None => log::info!("No primary monitor reported"),
        }
        let geometry = self.platform.window_geometry();
        log::info!(
            "Window at ({}, {}) size {}x{}, fullscreen: {}, cursor captured: {}",
            geometry.x,
            geometry.y,
            geometry.width,
            geometry.height,
            self.state.is_fullscreen(),
            self.state.cursor_captured()
        );
    }
}
