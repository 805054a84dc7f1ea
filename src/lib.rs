pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod traits;
pub mod types;

pub use crate::core::{WindowContext, WindowState, WinitPlatform};
pub use config::WindowConfig;
pub use error::{ParseError, PlatformError, StateError, WindowError};
pub use types::{AspectRatio, MonitorTarget, RefreshMode, Resolution, WindowGeometry};
