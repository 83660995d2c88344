/// Square matrices: Matrix2, Matrix3, Matrix4.
///
/// Storage is **column-major**: `data()` lists column 0 top to bottom, then
/// column 1, and so on, which is the layout GPU uniform uploads expect.
/// The same order is used by `from_cols_slice`, by multiplication and by
/// every transform entry point. Vectors are columns: `M * v`.

use std::fmt;
use std::ops::Mul;
use glam::{DMat2, DMat3, DMat4, DVec4};
use crate::error::{Error, Result};
use crate::kernel_bail;
use super::angle::Radians;
use super::point::Point3;
use super::projection::{DepthRange, Handedness, ProjectionConfig};
use super::quaternion::Quaternion;
use super::vector::{Vector2, Vector3, Vector4};
use super::PARALLEL_EPSILON;

/// 2×2 matrix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix2(pub(crate) DMat2);

/// 3×3 matrix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3(pub(crate) DMat3);

/// 4×4 matrix (homogeneous 3D transforms, view and projection)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix4(pub(crate) DMat4);

macro_rules! impl_matrix {
    ($name:ident, $glam:ty, $vector:ident, $source:literal, $dim:literal, $len:literal) => {
        impl $name {
            /// Rows (and columns)
            pub const DIMENSION: usize = $dim;
            /// Length of `data()`
            pub const ELEMENT_COUNT: usize = $len;
            pub const IDENTITY: $name = $name(<$glam>::IDENTITY);

            /// 1 on the diagonal, 0 elsewhere
            pub const fn identity() -> Self {
                Self(<$glam>::IDENTITY)
            }

            pub const fn zero() -> Self {
                Self(<$glam>::ZERO)
            }

            /// Build from column-major values
            ///
            /// # Errors
            ///
            /// `DimensionMismatch` unless `values.len() == ELEMENT_COUNT`.
            pub fn from_cols_slice(values: &[f64]) -> Result<Self> {
                if values.len() != $len {
                    kernel_bail!($source, Error::DimensionMismatch {
                        expected: $len,
                        actual: values.len(),
                    });
                }
                Ok(Self(<$glam>::from_cols_slice(values)))
            }

            /// Column-major copy of the elements
            pub fn data(&self) -> Vec<f64> {
                self.0.to_cols_array().to_vec()
            }

            pub fn to_cols_array(&self) -> [f64; $len] {
                self.0.to_cols_array()
            }

            pub fn col(&self, index: usize) -> Option<$vector> {
                (index < $dim).then(|| $vector(self.0.col(index)))
            }

            pub fn row(&self, index: usize) -> Option<$vector> {
                (index < $dim).then(|| $vector(self.0.row(index)))
            }

            /// Element at (row, col)
            pub fn get(&self, row: usize, col: usize) -> Option<f64> {
                if row < $dim && col < $dim {
                    Some(self.0.to_cols_array()[col * $dim + row])
                } else {
                    None
                }
            }

            /// Matrix product `self * other` (`other` applies first)
            pub fn mul(self, other: Self) -> Self {
                Self(self.0 * other.0)
            }

            /// `self * vector`
            pub fn transform(&self, vector: $vector) -> $vector {
                $vector(self.0 * vector.0)
            }

            pub fn transpose(&self) -> Self {
                Self(self.0.transpose())
            }

            pub fn determinant(&self) -> f64 {
                self.0.determinant()
            }

            /// # Errors
            ///
            /// `DivideByZero` if the matrix is singular.
            pub fn inverse(&self) -> Result<Self> {
                let determinant = self.determinant();
                if determinant == 0.0 || !determinant.is_finite() {
                    kernel_bail!($source, Error::DivideByZero(format!(
                        "{} is singular (determinant {})",
                        stringify!($name),
                        determinant
                    )));
                }
                Ok(Self(self.0.inverse()))
            }

            pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
                self.0.abs_diff_eq(other.0, tolerance)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::identity()
            }
        }

        impl Mul for $name {
            type Output = $name;

            fn mul(self, rhs: $name) -> $name {
                $name(self.0 * rhs.0)
            }
        }

        impl Mul<$vector> for $name {
            type Output = $vector;

            fn mul(self, rhs: $vector) -> $vector {
                self.transform(rhs)
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

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let columns: Vec<String> = (0..$dim)
                    .map(|i| {
                        let col: Vec<String> = self.0.col(i).to_array().iter().map(|v| v.to_string()).collect();
                        format!("[{}]", col.join(", "))
                    })
                    .collect();
                write!(f, "{}(cols: {})", stringify!($name), columns.join(", "))
            }
        }
    };
}

impl_matrix!(Matrix2, DMat2, Vector2, "view3d::Matrix2", 2, 4);
impl_matrix!(Matrix3, DMat3, Vector3, "view3d::Matrix3", 3, 9);
impl_matrix!(Matrix4, DMat4, Vector4, "view3d::Matrix4", 4, 16);

// ===== MATRIX2 =====

impl Matrix2 {
    pub const fn from_cols(x_axis: Vector2, y_axis: Vector2) -> Self {
        Self(DMat2::from_cols(x_axis.0, y_axis.0))
    }

    /// Counter-clockwise rotation in the plane
    pub fn from_angle(angle: impl Into<Radians>) -> Self {
        Self(DMat2::from_angle(angle.into().value()))
    }
}

// ===== MATRIX3 =====

impl Matrix3 {
    pub const fn from_cols(x_axis: Vector3, y_axis: Vector3, z_axis: Vector3) -> Self {
        Self(DMat3::from_cols(x_axis.0, y_axis.0, z_axis.0))
    }

    /// Diagonal (scale) matrix
    pub fn from_diagonal(diagonal: Vector3) -> Self {
        Self(DMat3::from_diagonal(diagonal.0))
    }

    /// Rotation matrix of the normalized quaternion
    pub fn from_quaternion(rotation: Quaternion) -> Result<Self> {
        rotation.to_matrix3()
    }

    /// Upper-left 3×3 block
    pub fn from_matrix4(matrix: &Matrix4) -> Self {
        Self(DMat3::from_mat4(matrix.0))
    }
}

// ===== MATRIX4 =====

const SOURCE: &str = "view3d::Matrix4";

impl Matrix4 {
    pub const fn from_cols(x_axis: Vector4, y_axis: Vector4, z_axis: Vector4, w_axis: Vector4) -> Self {
        Self(DMat4::from_cols(x_axis.0, y_axis.0, z_axis.0, w_axis.0))
    }

    pub fn from_translation(translation: Vector3) -> Self {
        Self(DMat4::from_translation(translation.0))
    }

    pub fn from_scale(scale: Vector3) -> Self {
        Self(DMat4::from_scale(scale.0))
    }

    /// Rotation matrix of the normalized quaternion
    pub fn from_quaternion(rotation: Quaternion) -> Result<Self> {
        rotation.to_matrix4()
    }

    /// `translation * rotation * scale`
    pub fn from_scale_rotation_translation(
        scale: Vector3,
        rotation: Quaternion,
        translation: Vector3,
    ) -> Result<Self> {
        let rotation = rotation.normalize()?;
        Ok(Self(DMat4::from_scale_rotation_translation(scale.0, rotation.0, translation.0)))
    }

    /// Translation part (last column)
    pub fn translation(&self) -> Vector3 {
        Vector3(self.0.w_axis.truncate())
    }

    /// Apply to a direction: linear part only, translation ignored
    pub fn transform_vector(&self, vector: Vector3) -> Vector3 {
        Vector3(self.0.transform_vector3(vector.0))
    }

    /// Apply to a position: translation included, divided by w
    ///
    /// # Errors
    ///
    /// `DivideByZero` if the point maps to w = 0 (e.g. the eye under a projection).
    pub fn transform_point(&self, point: Point3) -> Result<Point3> {
        let homogeneous = self.0 * point.0.extend(1.0);
        if homogeneous.w == 0.0 {
            kernel_bail!(SOURCE, Error::DivideByZero(format!(
                "{} maps to w = 0",
                point
            )));
        }
        Ok(Point3(homogeneous.truncate() / homogeneous.w))
    }

    /// Inverse-transpose of the upper 3×3 block, for transforming normals
    pub fn normal_matrix(&self) -> Result<Matrix3> {
        Ok(Matrix3::from_matrix4(self).inverse()?.transpose())
    }

    /// View matrix looking from `eye` towards `target`
    ///
    /// # Errors
    ///
    /// `DegenerateCamera` if `eye == target` or `up` is parallel to the
    /// view direction (including a zero `up`): no stable basis exists.
    pub fn look_at(eye: Point3, target: Point3, up: Vector3, handedness: Handedness) -> Result<Self> {
        if !(eye.is_finite() && target.is_finite() && up.is_finite()) {
            kernel_bail!(SOURCE, Error::DegenerateCamera(format!(
                "non-finite basis: eye {}, target {}, up {}",
                eye, target, up
            )));
        }
        let forward = target - eye;
        if forward.length_squared() == 0.0 {
            kernel_bail!(SOURCE, Error::DegenerateCamera(format!(
                "position and target are both {}",
                eye
            )));
        }
        let (direction, unit_up) = (forward.rescaled(), up.rescaled());
        let side = direction.cross(unit_up);
        if side.length() <= PARALLEL_EPSILON * direction.length() * unit_up.length() {
            kernel_bail!(SOURCE, Error::DegenerateCamera(format!(
                "up {} is parallel to the view direction {}",
                up, forward
            )));
        }

        Ok(Self::look_at_unchecked(eye, target, up, handedness))
    }

    /// `look_at` for a basis already known to be valid
    pub(crate) fn look_at_unchecked(eye: Point3, target: Point3, up: Vector3, handedness: Handedness) -> Self {
        // glam normalizes these; rescaling first keeps huge coordinates finite
        let (direction, up) = ((target - eye).rescaled().0, up.rescaled().0);
        let view = match handedness {
            Handedness::Right => DMat4::look_to_rh(eye.0, direction, up),
            Handedness::Left => DMat4::look_to_lh(eye.0, direction, up),
        };
        Self(view)
    }

    /// Perspective projection with a vertical field of view
    ///
    /// # Errors
    ///
    /// `DegenerateCamera` unless 0 < fov < π, aspect > 0, 0 < near < far.
    pub fn perspective(
        fov_y: impl Into<Radians>,
        aspect: f64,
        near: f64,
        far: f64,
        config: ProjectionConfig,
    ) -> Result<Self> {
        let fov_y = fov_y.into().value();
        check_field_of_view(fov_y)?;
        if !(aspect > 0.0 && aspect.is_finite()) {
            kernel_bail!(SOURCE, Error::DegenerateCamera(format!(
                "aspect ratio {} must be positive",
                aspect
            )));
        }
        check_clip_range(near, far)?;

        let projection = match config.handedness {
            Handedness::Right => DMat4::perspective_rh(fov_y, aspect, near, far),
            Handedness::Left => DMat4::perspective_lh(fov_y, aspect, near, far),
        };
        Ok(Self(remap_depth(projection, config.depth_range)))
    }

    /// Orthographic projection of the box [left, right] × [bottom, top] × [near, far]
    ///
    /// # Errors
    ///
    /// `DivideByZero` if any pair of opposite planes coincide.
    pub fn orthographic(
        left: f64,
        right: f64,
        bottom: f64,
        top: f64,
        near: f64,
        far: f64,
        config: ProjectionConfig,
    ) -> Result<Self> {
        if left == right || bottom == top || near == far {
            kernel_bail!(SOURCE, Error::DivideByZero(format!(
                "orthographic volume is flat: x [{}, {}], y [{}, {}], z [{}, {}]",
                left, right, bottom, top, near, far
            )));
        }

        let projection = match config.handedness {
            Handedness::Right => DMat4::orthographic_rh(left, right, bottom, top, near, far),
            Handedness::Left => DMat4::orthographic_lh(left, right, bottom, top, near, far),
        };
        Ok(Self(remap_depth(projection, config.depth_range)))
    }
}

pub(crate) fn check_field_of_view(fov_y: f64) -> Result<()> {
    if !(fov_y > 0.0 && fov_y < std::f64::consts::PI) {
        kernel_bail!(SOURCE, Error::DegenerateCamera(format!(
            "field of view {} rad is outside (0, π)",
            fov_y
        )));
    }
    Ok(())
}

pub(crate) fn check_clip_range(near: f64, far: f64) -> Result<()> {
    if !(near > 0.0) {
        kernel_bail!(SOURCE, Error::DegenerateCamera(format!(
            "near plane {} must be positive",
            near
        )));
    }
    if !(far > near) || !far.is_finite() {
        kernel_bail!(SOURCE, Error::DegenerateCamera(format!(
            "far plane {} must be finite and beyond near plane {}",
            far, near
        )));
    }
    Ok(())
}

/// glam builds 0..1 depth; for -1..1 apply z' = 2z - w
fn remap_depth(projection: DMat4, depth_range: DepthRange) -> DMat4 {
    match depth_range {
        DepthRange::ZeroToOne => projection,
        DepthRange::NegativeOneToOne => {
            let remap = DMat4::from_cols(
                DVec4::X,
                DVec4::Y,
                DVec4::new(0.0, 0.0, 2.0, 0.0),
                DVec4::new(0.0, 0.0, -1.0, 1.0),
            );
            remap * projection
        }
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
