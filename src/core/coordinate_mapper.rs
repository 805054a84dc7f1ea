use glam::Vec2;

/// Convert a pixel position (origin top-left, y down) to normalized space
/// (origin center, y up, both axes in [-1, 1])
///
/// Sizes must be non-zero, the result is not finite otherwise.
pub fn pixel_to_normalized(x: f32, y: f32, width_px: u32, height_px: u32) -> Vec2 {
    let nx = (2.0 * x) / width_px as f32 - 1.0;
    let ny = 1.0 - (2.0 * y) / height_px as f32;
    Vec2::new(nx, ny)
}

/// Per-axis scale that undoes the stretch of a non-square viewport
///
/// The longer axis is scaled up by the aspect ratio, so a unit circle in
/// corrected space stays round on screen.
pub fn aspect_correction_scale(width_px: u32, height_px: u32) -> Vec2 {
    let aspect = width_px as f32 / height_px as f32;
    if aspect > 1.0 {
        Vec2::new(aspect, 1.0)
    } else {
        Vec2::new(1.0, 1.0 / aspect)
    }
}

/// [`pixel_to_normalized`] followed by [`aspect_correction_scale`]
pub fn pixel_to_aspect_corrected_normalized(
    x: f32,
    y: f32,
    width_px: u32,
    height_px: u32,
) -> Vec2 {
    pixel_to_normalized(x, y, width_px, height_px) * aspect_correction_scale(width_px, height_px)
}

/// Coordinate mapper bound to the current viewport size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    width: u32,
    height: u32,
}

impl CoordinateMapper {
    /// Zero sizes are bumped to 1 so the mapper always yields finite values
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Track a new viewport size. Zero-sized updates (minimized window) are
    /// ignored; returns whether the viewport changed.
    pub fn set_viewport(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 || (width, height) == (self.width, self.height) {
            return false;
        }
        self.width = width;
        self.height = height;
        true
    }

    pub fn viewport(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn to_normalized(&self, x: f32, y: f32) -> Vec2 {
        pixel_to_normalized(x, y, self.width, self.height)
    }

    pub fn to_aspect_corrected(&self, x: f32, y: f32) -> Vec2 {
        pixel_to_aspect_corrected_normalized(x, y, self.width, self.height)
    }

    pub fn scale(&self) -> Vec2 {
        aspect_correction_scale(self.width, self.height)
    }
}
