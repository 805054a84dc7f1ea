use thiserror::Error;

/// Failure to parse a user supplied resolution or aspect ratio string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("resolution `{0}` has no `x` separator, expected WIDTHxHEIGHT")]
    MissingSeparator(String),

    #[error("`{0}` does not start with an unsigned integer")]
    InvalidInteger(String),

    #[error("resolution `{0}` has a zero dimension")]
    ZeroDimension(String),

    #[error("invalid aspect ratio `{0}`, expected W:H with H > 0")]
    InvalidAspectRatio(String),
}

/// Failure reported by the windowing platform
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    #[error("no monitor available")]
    NoMonitor,

    #[error("failed to create window: {0}")]
    WindowCreation(String),

    #[error("failed to change cursor grab mode: {0}")]
    CursorGrab(String),

    #[error("operation not supported by the platform: {0}")]
    Unsupported(String),
}

/// Failure of a window state transition; the state is left untouched
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error("window is fullscreen but no windowed geometry was saved")]
    MissingSavedGeometry,
}

/// Errors surfaced by [`crate::core::WindowContext`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Platform(#[from] PlatformError),
}
