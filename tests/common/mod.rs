#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use window_context::traits::Platform;
use window_context::{MonitorTarget, PlatformError, RefreshMode, WindowGeometry};

/// Platform double that applies requests to its own geometry and records them
pub struct MockPlatform {
    pub geometry: Cell<WindowGeometry>,
    pub modes: Vec<RefreshMode>,
    pub native: Option<RefreshMode>,
    pub monitor_calls: RefCell<Vec<MonitorTarget>>,
    pub cursor_calls: RefCell<Vec<bool>>,
}

impl MockPlatform {
    pub fn new(geometry: WindowGeometry) -> Self {
        let modes = vec![
            RefreshMode::new(2560, 1440, 60),
            RefreshMode::new(2560, 1440, 165),
            RefreshMode::new(1920, 1080, 60),
            RefreshMode::new(1920, 1080, 144),
            RefreshMode::new(1680, 1050, 60),
            RefreshMode::new(1280, 1024, 75),
            RefreshMode::new(1280, 720, 60),
            RefreshMode::new(800, 600, 60),
        ];
        Self {
            geometry: Cell::new(geometry),
            native: Some(modes[1]),
            modes,
            monitor_calls: RefCell::new(Vec::new()),
            cursor_calls: RefCell::new(Vec::new()),
        }
    }

    pub fn without_monitor(geometry: WindowGeometry) -> Self {
        Self {
            modes: Vec::new(),
            native: None,
            ..Self::new(geometry)
        }
    }

    /// Simulate the user dragging the window
    pub fn move_to(&self, x: i32, y: i32) {
        let g = self.geometry.get();
        self.geometry.set(WindowGeometry::new(x, y, g.width, g.height));
    }
}

impl Platform for MockPlatform {
    fn primary_monitor_modes(&self) -> Vec<RefreshMode> {
        self.modes.clone()
    }

    fn primary_monitor_native_mode(&self) -> Option<RefreshMode> {
        self.native
    }

    fn window_position(&self) -> (i32, i32) {
        let g = self.geometry.get();
        (g.x, g.y)
    }

    fn window_size(&self) -> (u32, u32) {
        let g = self.geometry.get();
        (g.width, g.height)
    }

    fn set_window_monitor(&self, target: MonitorTarget) -> Result<(), PlatformError> {
        self.monitor_calls.borrow_mut().push(target);
        match target {
            MonitorTarget::Fullscreen(mode) => self
                .geometry
                .set(WindowGeometry::new(0, 0, mode.width, mode.height)),
            MonitorTarget::Windowed(geometry) => self.geometry.set(geometry),
        }
        Ok(())
    }

    fn set_cursor_captured(&self, captured: bool) -> Result<(), PlatformError> {
        self.cursor_calls.borrow_mut().push(captured);
        Ok(())
    }

    fn resize_window(&self, width: u32, height: u32) -> Result<(), PlatformError> {
        let g = self.geometry.get();
        self.geometry.set(WindowGeometry::new(g.x, g.y, width, height));
        Ok(())
    }
}
