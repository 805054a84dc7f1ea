use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_WINDOW_WIDTH: u32 = 800;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 600;

/// Startup options for the window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Requested inner width in physical pixels
    pub width: u32,
    /// Requested inner height in physical pixels
    pub height: u32,
    pub start_in_fullscreen: bool,
    pub start_with_mouse_captured: bool,
    /// Restricts the resolution catalog, `W:H`
    pub aspect_ratio: Option<String>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "window-context".to_string(),
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
            start_in_fullscreen: false,
            start_with_mouse_captured: false,
            aspect_ratio: None,
        }
    }
}

impl WindowConfig {
    /// Load a JSON config; missing fields take their defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_json(&contents).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_json(contents: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(contents)?;
        anyhow::ensure!(
            config.width > 0 && config.height > 0,
            "window size must be non-zero, got {}x{}",
            config.width,
            config.height
        );
        Ok(config)
    }
}
