/// Viewport: integer screen-space rectangle a camera renders into.

use std::fmt;
use crate::error::{Error, Result};
use crate::kernel_bail;

/// Screen rectangle: origin (x, y) and size (width, height) in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Viewport with its origin at (0, 0)
    pub const fn at_origin(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// `width / height`
    ///
    /// # Errors
    ///
    /// `DivideByZero` when `height == 0`.
    pub fn aspect_ratio(&self) -> Result<f64> {
        if self.height == 0 {
            kernel_bail!("view3d::Viewport", Error::DivideByZero(format!(
                "{} has zero height",
                self
            )));
        }
        Ok(self.width as f64 / self.height as f64)
    }

    /// Half-open test: `x <= px < x + width` and `y <= py < y + height`
    pub fn contains(&self, px: i32, py: i32) -> bool {
        // i64 so x + width cannot overflow
        let (px, py) = (i64::from(px), i64::from(py));
        let (x, y) = (i64::from(self.x), i64::from(self.y));
        px >= x
            && px < x + i64::from(self.width)
            && py >= y
            && py < y + i64::from(self.height)
    }

    /// Pixel count
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Same text as `Display`: `Viewport(x,y,width,height)`
    pub fn info(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Viewport({},{},{},{})", self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
#[path = "viewport_tests.rs"]
mod tests;
