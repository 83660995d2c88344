/// Free vectors (directions, offsets, normals).
///
/// Vectors are immutable `f64` values backed by glam. Every operation
/// returns a new value. Positions are `Point2`/`Point3`, never vectors:
/// a `Matrix4` translates points but leaves vectors alone.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use glam::{DVec2, DVec3, DVec4};
use crate::error::{Error, Result};
use crate::kernel_bail;

/// Two-component vector
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2(pub(crate) DVec2);

/// Three-component vector
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3(pub(crate) DVec3);

/// Four-component vector (homogeneous coordinates, plane equations)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector4(pub(crate) DVec4);

macro_rules! impl_vector {
    ($name:ident, $glam:ty, $source:literal, $n:literal, $($field:ident),+) => {
        impl $name {
            /// Number of scalar components
            pub const COMPONENTS: usize = $n;

            pub const fn new($($field: f64),+) -> Self {
                Self(<$glam>::new($($field),+))
            }

            /// All components zero
            pub const fn zero() -> Self {
                Self(<$glam>::ZERO)
            }

            /// All components set to `value`
            pub const fn splat(value: f64) -> Self {
                Self(<$glam>::splat(value))
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

            pub fn add(self, other: Self) -> Self {
                Self(self.0 + other.0)
            }

            pub fn sub(self, other: Self) -> Self {
                Self(self.0 - other.0)
            }

            pub fn scale(self, factor: f64) -> Self {
                Self(self.0 * factor)
            }

            pub fn dot(self, other: Self) -> f64 {
                self.0.dot(other.0)
            }

            /// Euclidean norm
            pub fn length(self) -> f64 {
                self.0.length()
            }

            pub fn length_squared(self) -> f64 {
                self.0.length_squared()
            }

            /// Unit vector with the same direction.
            ///
            /// # Errors
            ///
            /// `DivideByZero` if the length is zero.
            pub fn normalize(self) -> Result<Self> {
                let largest = self.0.abs().max_element();
                if largest == 0.0 {
                    kernel_bail!($source, Error::DivideByZero(format!(
                        "cannot normalize a zero-length {}",
                        stringify!($name)
                    )));
                }
                // Scaled so the squared length cannot overflow
                let scaled = self.0 / largest;
                Ok(Self(scaled / scaled.length()))
            }

            /// Same direction, largest absolute component 1 (zero stays zero)
            pub(crate) fn rescaled(self) -> Self {
                let largest = self.0.abs().max_element();
                if largest > 0.0 { Self(self.0 / largest) } else { self }
            }

            /// `self + t * (other - self)`. `t` is not clamped.
            pub fn lerp(self, other: Self, t: f64) -> Self {
                Self(self.0 + (other.0 - self.0) * t)
            }

            pub fn is_finite(self) -> bool {
                self.0.is_finite()
            }

            /// Componentwise comparison within `tolerance`
            pub fn approx_eq(self, other: Self, tolerance: f64) -> bool {
                self.0.abs_diff_eq(other.0, tolerance)
            }
        }

        impl Add for $name {
            type Output = $name;

            fn add(self, rhs: $name) -> $name {
                $name(self.0 + rhs.0)
            }
        }

        impl Sub for $name {
            type Output = $name;

            fn sub(self, rhs: $name) -> $name {
                $name(self.0 - rhs.0)
            }
        }

        impl Neg for $name {
            type Output = $name;

            fn neg(self) -> $name {
                $name(-self.0)
            }
        }

        impl Mul<f64> for $name {
            type Output = $name;

            fn mul(self, rhs: f64) -> $name {
                $name(self.0 * rhs)
            }
        }

        impl Mul<$name> for f64 {
            type Output = $name;

            fn mul(self, rhs: $name) -> $name {
                $name(rhs.0 * self)
            }
        }

        impl From<$glam> for $name {
            fn from(value: $glam) -> Self {
                Self(value)
            }
        }

        impl From<$name> for $glam {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl From<[f64; $n]> for $name {
            fn from(values: [f64; $n]) -> Self {
                Self(<$glam>::from_array(values))
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

impl_vector!(Vector2, DVec2, "view3d::Vector2", 2, x, y);
impl_vector!(Vector3, DVec3, "view3d::Vector3", 3, x, y, z);
impl_vector!(Vector4, DVec4, "view3d::Vector4", 4, x, y, z, w);

impl Vector2 {
    pub const X: Vector2 = Vector2::new(1.0, 0.0);
    pub const Y: Vector2 = Vector2::new(0.0, 1.0);

    /// Lift into 3D with the given z
    pub fn extend(self, z: f64) -> Vector3 {
        Vector3(self.0.extend(z))
    }
}

impl Vector3 {
    pub const X: Vector3 = Vector3::new(1.0, 0.0, 0.0);
    pub const Y: Vector3 = Vector3::new(0.0, 1.0, 0.0);
    pub const Z: Vector3 = Vector3::new(0.0, 0.0, 1.0);

    /// Right-handed cross product.
    ///
    /// `(a.y*b.z − a.z*b.y, a.z*b.x − a.x*b.z, a.x*b.y − a.y*b.x)`
    pub fn cross(self, other: Vector3) -> Vector3 {
        Vector3(self.0.cross(other.0))
    }

    /// Append w (0 keeps it a direction under a Matrix4)
    pub fn extend(self, w: f64) -> Vector4 {
        Vector4(self.0.extend(w))
    }

    pub fn truncate(self) -> Vector2 {
        Vector2(self.0.truncate())
    }
}

impl Vector4 {
    /// Drop w
    pub fn truncate(self) -> Vector3 {
        Vector3(self.0.truncate())
    }
}

#[cfg(test)]
#[path = "vector_tests.rs"]
mod tests;
