/// Degrees and radians as distinct tagged scalars.
///
/// Both directions use the same factor, π/180 and its inverse, so a value
/// converted there and back matches the input to floating precision.

use std::f64::consts::PI;
use std::fmt;

const RADIANS_PER_DEGREE: f64 = PI / 180.0;
const DEGREES_PER_RADIAN: f64 = 180.0 / PI;

/// An angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Degrees(pub f64);

/// An angle in radians
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Radians(pub f64);

impl Degrees {
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> f64 {
        self.0
    }

    pub fn to_radians(&self) -> Radians {
        Radians(self.0 * RADIANS_PER_DEGREE)
    }
}

impl Radians {
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> f64 {
        self.0
    }

    pub fn to_degrees(&self) -> Degrees {
        Degrees(self.0 * DEGREES_PER_RADIAN)
    }

    /// (sin, cos) of this angle
    pub fn sin_cos(&self) -> (f64, f64) {
        self.0.sin_cos()
    }
}

impl From<Degrees> for Radians {
    fn from(angle: Degrees) -> Self {
        angle.to_radians()
    }
}

impl From<Radians> for Degrees {
    fn from(angle: Radians) -> Self {
        angle.to_degrees()
    }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

impl fmt::Display for Radians {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rad", self.0)
    }
}

#[cfg(test)]
#[path = "angle_tests.rs"]
mod tests;
