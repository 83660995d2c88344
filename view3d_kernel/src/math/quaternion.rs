/// Quaternion rotations.
///
/// Construction stores the four components verbatim; nothing is normalized
/// up front, so intermediate (non-unit) quaternion math stays exact.
/// Every operation that interprets the quaternion as a rotation
/// (`to_matrix3`, `to_matrix4`, `rotate_vector`, `rotate_point_about`,
/// `slerp`) normalizes a copy first and fails with `DivideByZero` on the
/// zero quaternion.

use std::fmt;
use std::ops::Mul;
use glam::{DQuat, DVec4};
use crate::error::{Error, Result};
use crate::kernel_bail;
use super::angle::Radians;
use super::matrix::{Matrix3, Matrix4};
use super::point::Point3;
use super::vector::Vector3;

const SOURCE: &str = "view3d::Quaternion";

/// Quaternion `w + xi + yj + zk`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion(pub(crate) DQuat);

impl Quaternion {
    /// The rotation that does nothing (w = 1)
    pub const IDENTITY: Quaternion = Quaternion(DQuat::IDENTITY);

    /// Create from components, imaginary part first. Not normalized.
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self(DQuat::from_xyzw(x, y, z, w))
    }

    /// Rotation of `angle` around `axis` (any non-zero length)
    ///
    /// # Errors
    ///
    /// `DivideByZero` if `axis` has zero length.
    pub fn from_axis_angle(axis: Vector3, angle: impl Into<Radians>) -> Result<Self> {
        let axis = axis.normalize()?;
        Ok(Self(DQuat::from_axis_angle(axis.0, angle.into().value())))
    }

    pub fn w(self) -> f64 {
        self.0.w
    }

    pub fn x(self) -> f64 {
        self.0.x
    }

    pub fn y(self) -> f64 {
        self.0.y
    }

    pub fn z(self) -> f64 {
        self.0.z
    }

    /// Components as `[x, y, z, w]`
    pub fn to_array(self) -> [f64; 4] {
        self.0.to_array()
    }

    pub fn dot(self, other: Quaternion) -> f64 {
        self.0.dot(other.0)
    }

    pub fn length(self) -> f64 {
        self.0.length()
    }

    pub fn length_squared(self) -> f64 {
        self.0.length_squared()
    }

    pub fn is_normalized(self) -> bool {
        (self.length_squared() - 1.0).abs() <= 1e-12
    }

    /// Unit quaternion with the same orientation
    ///
    /// # Errors
    ///
    /// `DivideByZero` for the zero quaternion.
    pub fn normalize(self) -> Result<Self> {
        let components = DVec4::from(self.0);
        let largest = components.abs().max_element();
        if largest == 0.0 {
            kernel_bail!(SOURCE, Error::DivideByZero(
                "cannot normalize the zero quaternion".to_string()
            ));
        }
        let scaled = components / largest;
        Ok(Self(DQuat::from_vec4(scaled / scaled.length())))
    }

    /// Negated imaginary part; the inverse rotation for unit quaternions
    pub fn conjugate(self) -> Self {
        Self(self.0.conjugate())
    }

    /// Hamilton product `self * other` (apply `other` first, then `self`)
    pub fn mul(self, other: Quaternion) -> Self {
        Self(self.0 * other.0)
    }

    /// 3×3 rotation matrix of the normalized quaternion
    pub fn to_matrix3(self) -> Result<Matrix3> {
        let unit = self.normalize()?;
        Ok(Matrix3(glam::DMat3::from_quat(unit.0)))
    }

    /// 4×4 rotation matrix (no translation) of the normalized quaternion
    pub fn to_matrix4(self) -> Result<Matrix4> {
        let unit = self.normalize()?;
        Ok(Matrix4(glam::DMat4::from_quat(unit.0)))
    }

    /// Rotate a free vector
    pub fn rotate_vector(self, vector: Vector3) -> Result<Vector3> {
        let unit = self.normalize()?;
        Ok(Vector3(unit.0 * vector.0))
    }

    /// Rotate a position around `pivot`
    pub fn rotate_point_about(self, point: Point3, pivot: Point3) -> Result<Point3> {
        let offset = self.rotate_vector(point - pivot)?;
        Ok(pivot + offset)
    }

    /// Spherical interpolation between the normalized forms of both quaternions
    pub fn slerp(self, other: Quaternion, t: f64) -> Result<Self> {
        let from = self.normalize()?;
        let to = other.normalize()?;
        Ok(Self(from.0.slerp(to.0, t)))
    }

    pub fn approx_eq(self, other: Quaternion, tolerance: f64) -> bool {
        self.0.abs_diff_eq(other.0, tolerance)
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Quaternion {
    type Output = Quaternion;

    fn mul(self, rhs: Quaternion) -> Quaternion {
        Quaternion::mul(self, rhs)
    }
}

impl From<DQuat> for Quaternion {
    fn from(value: DQuat) -> Self {
        Self(value)
    }
}

impl From<Quaternion> for DQuat {
    fn from(value: Quaternion) -> Self {
        value.0
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quaternion(w={}, x={}, y={}, z={})",
            self.0.w, self.0.x, self.0.y, self.0.z
        )
    }
}

#[cfg(test)]
#[path = "quaternion_tests.rs"]
mod tests;
