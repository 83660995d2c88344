/// Graphics API version: capability checks and the matching GLSL target.

use std::fmt;

/// OpenGL `major.minor`, ordered lexicographically
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Whether this version is at least `major.minor`
    pub fn supports(&self, major: u32, minor: u32) -> bool {
        *self >= Self::new(major, minor)
    }

    /// GLSL `#version` number shipped with this API version.
    /// Anything below 2.1 maps to 110.
    pub fn glsl_version(&self) -> u32 {
        match (self.major, self.minor) {
            (0..=1, _) | (2, 0) => 110,
            (2, _) => 120,
            (3, 0) => 130,
            (3, 1) => 140,
            (3, 2) => 150,
            (major, minor) => major * 100 + minor * 10,
        }
    }

    /// Human-readable target, e.g. `"GLSL 150"`
    pub fn glsl_target(&self) -> String {
        format!("GLSL {}", self.glsl_version())
    }

    /// Shader preamble, e.g. `"#version 150 core"`; the core profile exists from 3.2
    pub fn glsl_directive(&self) -> String {
        if self.supports(3, 2) {
            format!("#version {} core", self.glsl_version())
        } else {
            format!("#version {}", self.glsl_version())
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OpenGL {}.{}", self.major, self.minor)
    }
}

#[cfg(test)]
#[path = "version_tests.rs"]
mod tests;
