//! Math module: angles, vectors, points, matrices and quaternions.
//!
//! Every type is an immutable `Copy` value wrapping a glam `f64` type.
//! Operations return new values; failures come back as `Result`.

mod angle;
mod matrix;
mod point;
mod projection;
mod quaternion;
mod vector;

pub use angle::{Degrees, Radians};
pub use matrix::{Matrix2, Matrix3, Matrix4};
pub use point::{Point2, Point3};
pub use projection::{DepthRange, Handedness, ProjectionConfig};
pub use quaternion::Quaternion;
pub use vector::{Vector2, Vector3, Vector4};

pub(crate) use matrix::{check_clip_range, check_field_of_view};

/// |a × b| ≤ ε·|a|·|b| counts as parallel
pub(crate) const PARALLEL_EPSILON: f64 = 1e-12;
