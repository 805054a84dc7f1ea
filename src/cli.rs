// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::config::WindowConfig;
use crate::types::Resolution;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "window-context")]
#[command(about = "Window, display mode and input demo", long_about = None)]
pub struct Cli {
    /// JSON file with startup window options
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Window title
    #[arg(long)]
    pub title: Option<String>,

    /// Initial window size, e.g. 1280x720
    #[arg(long)]
    pub resolution: Option<Resolution>,

    /// Only offer resolutions with this aspect ratio, e.g. 16:9
    #[arg(long = "aspect-ratio")]
    pub aspect_ratio: Option<String>,

    /// Start in fullscreen on the primary monitor
    #[arg(long)]
    pub fullscreen: bool,

    /// Start with the cursor captured
    #[arg(long = "capture-mouse")]
    pub capture_mouse: bool,

    /// Print the available resolutions and exit
    #[arg(long = "list-resolutions")]
    pub list_resolutions: bool,
}

impl Cli {
    /// Layer command-line flags over a loaded config
    pub fn apply(&self, mut config: WindowConfig) -> WindowConfig {
        if let Some(title) = &self.title {
            config.title = title.clone();
        }
        if let Some(resolution) = self.resolution {
            config.width = resolution.width;
            config.height = resolution.height;
        }
        if let Some(ratio) = &self.aspect_ratio {
            config.aspect_ratio = Some(ratio.clone());
        }
        config.start_in_fullscreen |= self.fullscreen;
        config.start_with_mouse_captured |= self.capture_mouse;
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "window-context",
            "--resolution",
            "1280x720",
            "--aspect-ratio",
            "16:9",
            "--fullscreen",
        ])
        .unwrap();

        assert_eq!(cli.resolution, Some(Resolution::new(1280, 720)));
        assert_eq!(cli.aspect_ratio.as_deref(), Some("16:9"));
        assert!(cli.fullscreen);
        assert!(!cli.capture_mouse);
    }

    #[test]
    fn test_malformed_resolution_rejected() {
        assert!(Cli::try_parse_from(["window-context", "--resolution", "1280*720"]).is_err());
    }

    #[test]
    fn test_apply_overrides_config() {
        let cli = Cli {
            title: Some("cli".to_string()),
            resolution: Some(Resolution::new(1024, 768)),
            capture_mouse: true,
            ..Cli::default()
        };
        let config = cli.apply(WindowConfig {
            start_in_fullscreen: true,
            ..WindowConfig::default()
        });

        assert_eq!(config.title, "cli");
        assert_eq!((config.width, config.height), (1024, 768));
        assert!(config.start_in_fullscreen, "flags only ever enable");
        assert!(config.start_with_mouse_captured);
    }

    #[test]
    fn test_apply_without_flags_keeps_config() {
        let config = WindowConfig::default();
        assert_eq!(Cli::default().apply(config.clone()), config);
    }
}
