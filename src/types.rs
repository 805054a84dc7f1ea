use std::fmt;
use std::str::FromStr;

use crate::core::display_modes::{parse_aspect_ratio, parse_resolution};
use crate::error::ParseError;

/// Window or display resolution in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Resolution {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_resolution(s)
    }
}

/// A single display capability reported by a monitor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RefreshMode {
    pub width: u32,
    pub height: u32,
    /// Refresh rate in Hz
    pub refresh_rate: u32,
}

impl RefreshMode {
    pub const fn new(width: u32, height: u32, refresh_rate: u32) -> Self {
        Self {
            width,
            height,
            refresh_rate,
        }
    }

    /// A mode is usable when it has a size and a refresh rate
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0 && self.refresh_rate > 0
    }

    pub fn resolution(&self) -> Resolution {
        Resolution::new(self.width, self.height)
    }
}

/// Width to height ratio, kept unreduced
///
/// Comparison against a mode is done by cross-multiplication so `16:9` and
/// `32:18` select exactly the same modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AspectRatio {
    pub num: u32,
    pub den: u32,
}

impl AspectRatio {
    pub const fn new(num: u32, den: u32) -> Self {
        Self { num, den }
    }

    /// True if `width:height` equals this ratio
    pub fn matches(&self, width: u32, height: u32) -> bool {
        width as u64 * self.den as u64 == height as u64 * self.num as u64
    }

    pub fn matches_mode(&self, mode: &RefreshMode) -> bool {
        self.matches(mode.width, mode.height)
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.num, self.den)
    }
}

impl FromStr for AspectRatio {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_aspect_ratio(s).ok_or_else(|| ParseError::InvalidAspectRatio(s.to_string()))
    }
}

/// Top-left corner and size of a window, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowGeometry {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl WindowGeometry {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Geometry of the given size centered inside `bounds`
    pub fn centered_in(width: u32, height: u32, bounds: Resolution) -> Self {
        let x = (bounds.width as i64 - width as i64) / 2;
        let y = (bounds.height as i64 - height as i64) / 2;
        Self::new(x.max(0) as i32, y.max(0) as i32, width, height)
    }
}

/// Where the platform should place the window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorTarget {
    /// Exclusive fullscreen on the primary monitor using this mode
    Fullscreen(RefreshMode),
    /// Decorated window at this geometry
    Windowed(WindowGeometry),
}
