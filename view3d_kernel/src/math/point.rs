/// Positions in 2D and 3D space.
///
/// Points share the component layout of vectors but not their algebra:
/// `point - point` is a `Vector`, `point ± vector` is a `Point`, and there
/// is no point + point, dot, cross or normalize. `Matrix4::transform_point`
/// applies translation; `Matrix4::transform_vector` does not.

use std::fmt;
use std::ops::{Add, Sub};
use glam::{DVec2, DVec3};
use crate::error::{Error, Result};
use crate::kernel_bail;
use super::vector::{Vector2, Vector3, Vector4};

/// A position in the plane
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2(pub(crate) DVec2);

/// A position in space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3(pub(crate) DVec3);

macro_rules! impl_point {
    ($name:ident, $vector:ident, $glam:ty, $source:literal, $n:literal, $($field:ident),+) => {
        impl $name {
            pub const COMPONENTS: usize = $n;

            pub const fn new($($field: f64),+) -> Self {
                Self(<$glam>::new($($field),+))
            }

            /// The coordinate origin
            pub const fn origin() -> Self {
                Self(<$glam>::ZERO)
            }

            $(
                pub fn $field(self) -> f64 {
                    self.0.$field
                }
            )+

            /// Build from a flat slice of exactly `COMPONENTS` values
            pub fn from_slice(values: &[f64]) -> Result<Self> {
                if values.len() != $n {
                    kernel_bail!($source, Error::DimensionMismatch {
                        expected: $n,
                        actual: values.len(),
                    });
                }
                Ok(Self(<$glam>::from_slice(values)))
            }

            pub fn to_array(self) -> [f64; $n] {
                self.0.to_array()
            }

            /// Displacement from the origin
            pub fn to_vector(self) -> $vector {
                $vector(self.0)
            }

            /// The point reached by moving `offset` away from the origin
            pub fn from_vector(offset: $vector) -> Self {
                Self(offset.0)
            }

            pub fn distance(self, other: Self) -> f64 {
                self.0.distance(other.0)
            }

            pub fn distance_squared(self, other: Self) -> f64 {
                self.0.distance_squared(other.0)
            }

            /// `self + t * (other - self)`. `t` is not clamped.
            pub fn lerp(self, other: Self, t: f64) -> Self {
                Self(self.0 + (other.0 - self.0) * t)
            }

            pub fn midpoint(self, other: Self) -> Self {
                Self((self.0 + other.0) * 0.5)
            }

            /// Componentwise minimum
            pub fn min(self, other: Self) -> Self {
                Self(self.0.min(other.0))
            }

            /// Componentwise maximum
            pub fn max(self, other: Self) -> Self {
                Self(self.0.max(other.0))
            }

            pub fn is_finite(self) -> bool {
                self.0.is_finite()
            }

            pub fn approx_eq(self, other: Self, tolerance: f64) -> bool {
                self.0.abs_diff_eq(other.0, tolerance)
            }
        }

        impl Sub for $name {
            type Output = $vector;

            fn sub(self, rhs: $name) -> $vector {
                $vector(self.0 - rhs.0)
            }
        }

        impl Add<$vector> for $name {
            type Output = $name;

            fn add(self, rhs: $vector) -> $name {
                $name(self.0 + rhs.0)
            }
        }

        impl Sub<$vector> for $name {
            type Output = $name;

            fn sub(self, rhs: $vector) -> $name {
                $name(self.0 - rhs.0)
            }
        }

        impl From<[f64; $n]> for $name {
            fn from(values: [f64; $n]) -> Self {
                Self(<$glam>::from_array(values))
            }
        }

        impl From<$name> for $glam {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let parts: Vec<String> = self.to_array().iter().map(|v| v.to_string()).collect();
                write!(f, "{}({})", stringify!($name), parts.join(", "))
            }
        }
    };
}

impl_point!(Point2, Vector2, DVec2, "view3d::Point2", 2, x, y);
impl_point!(Point3, Vector3, DVec3, "view3d::Point3", 3, x, y, z);

impl Point3 {
    /// Homogeneous position (w = 1)
    pub fn to_homogeneous(self) -> Vector4 {
        Vector4(self.0.extend(1.0))
    }
}

#[cfg(test)]
#[path = "point_tests.rs"]
mod tests;
