/// Camera: position, target and lens, producing view and projection matrices.
///
/// A Camera is validated once, at construction: the view basis must exist
/// (position ≠ target, up not parallel to the view direction) and the lens
/// must describe a real frustum (0 < fov < 180°, 0 < near < far). Every
/// derived matrix is recomputed from those parameters on each call, so a
/// Camera carries no cached state that could drift.
///
/// "Setters" are builders: they consume the camera and return a new,
/// re-validated one.

use std::fmt;
use crate::error::Result;
use crate::kernel_trace;
use crate::math::{
    check_clip_range, check_field_of_view,
    Degrees, Matrix4, Point3, ProjectionConfig, Radians, Vector3,
};
use super::frustum::Frustum;
use super::viewport::Viewport;

/// Field of view used by `Camera::looking_at`
pub const DEFAULT_FOV_DEGREES: f64 = 45.0;
/// Near plane used by `Camera::looking_at`
pub const DEFAULT_NEAR: f64 = 0.1;
/// Far plane used by `Camera::looking_at`
pub const DEFAULT_FAR: f64 = 1000.0;

/// Perspective camera
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    position: Point3,
    target: Point3,
    up: Vector3,
    fov: Radians,
    near: f64,
    far: f64,
    projection: ProjectionConfig,
}

impl Camera {
    /// Create a camera with the default projection config (right-handed, depth 0..1)
    ///
    /// # Errors
    ///
    /// `DegenerateCamera` if position == target, up is parallel to the view
    /// direction, fov is outside (0°, 180°), near ≤ 0 or far ≤ near.
    pub fn new(
        position: Point3,
        target: Point3,
        up: Vector3,
        fov: impl Into<Radians>,
        near: f64,
        far: f64,
    ) -> Result<Self> {
        Self::validated(Self {
            position,
            target,
            up,
            fov: fov.into(),
            near,
            far,
            projection: ProjectionConfig::default(),
        })
    }

    /// Flat-scalar constructor (field of view in degrees)
    #[allow(clippy::too_many_arguments)]
    pub fn from_coords(
        position_x: f64, position_y: f64, position_z: f64,
        target_x: f64, target_y: f64, target_z: f64,
        up_x: f64, up_y: f64, up_z: f64,
        fov_degrees: f64,
        near: f64,
        far: f64,
    ) -> Result<Self> {
        Self::new(
            Point3::new(position_x, position_y, position_z),
            Point3::new(target_x, target_y, target_z),
            Vector3::new(up_x, up_y, up_z),
            Degrees(fov_degrees),
            near,
            far,
        )
    }

    /// Y-up camera with a 45° lens and clip planes 0.1..1000
    pub fn looking_at(position: Point3, target: Point3) -> Result<Self> {
        Self::new(
            position,
            target,
            Vector3::Y,
            Degrees(DEFAULT_FOV_DEGREES),
            DEFAULT_NEAR,
            DEFAULT_FAR,
        )
    }

    fn validated(camera: Self) -> Result<Self> {
        // look_at rejects a missing view basis
        Matrix4::look_at(camera.position, camera.target, camera.up, camera.projection.handedness)?;
        check_field_of_view(camera.fov.value())?;
        check_clip_range(camera.near, camera.far)?;

        kernel_trace!("view3d::Camera", "{}", camera);
        Ok(camera)
    }

    // ===== GETTERS =====

    pub fn position(&self) -> Point3 {
        self.position
    }

    pub fn target(&self) -> Point3 {
        self.target
    }

    pub fn up(&self) -> Vector3 {
        self.up
    }

    /// Vertical field of view
    pub fn fov(&self) -> Radians {
        self.fov
    }

    pub fn near(&self) -> f64 {
        self.near
    }

    pub fn far(&self) -> f64 {
        self.far
    }

    pub fn projection_config(&self) -> ProjectionConfig {
        self.projection
    }

    /// Unit vector from position towards target
    pub fn direction(&self) -> Vector3 {
        Vector3((self.target - self.position).rescaled().0.normalize())
    }

    // ===== DERIVED MATRICES =====

    /// World → view transform
    pub fn view_matrix(&self) -> Matrix4 {
        Matrix4::look_at_unchecked(self.position, self.target, self.up, self.projection.handedness)
    }

    /// View → clip transform for the given aspect ratio
    ///
    /// # Errors
    ///
    /// `DegenerateCamera` unless `aspect` is positive and finite.
    pub fn projection_matrix(&self, aspect: f64) -> Result<Matrix4> {
        Matrix4::perspective(self.fov, aspect, self.near, self.far, self.projection)
    }

    /// Projection for a viewport's aspect ratio
    ///
    /// # Errors
    ///
    /// `DivideByZero` for a zero-height viewport, `DegenerateCamera` for a
    /// zero-width one.
    pub fn projection_for(&self, viewport: &Viewport) -> Result<Matrix4> {
        self.projection_matrix(viewport.aspect_ratio()?)
    }

    /// `projection * view`
    pub fn view_projection_matrix(&self, viewport: &Viewport) -> Result<Matrix4> {
        Ok(self.projection_for(viewport)? * self.view_matrix())
    }

    /// Clip planes of what this camera sees through `viewport`
    pub fn frustum(&self, viewport: &Viewport) -> Result<Frustum> {
        let view_projection = self.view_projection_matrix(viewport)?;
        Ok(Frustum::from_view_projection(&view_projection, self.projection.depth_range))
    }

    // ===== BUILDERS =====

    pub fn with_position(self, position: Point3) -> Result<Self> {
        Self::validated(Self { position, ..self })
    }

    pub fn with_target(self, target: Point3) -> Result<Self> {
        Self::validated(Self { target, ..self })
    }

    pub fn with_up(self, up: Vector3) -> Result<Self> {
        Self::validated(Self { up, ..self })
    }

    /// Clip-space convention; handedness and depth range cannot invalidate a camera
    pub fn with_projection_config(self, projection: ProjectionConfig) -> Self {
        Self { projection, ..self }
    }
}

impl fmt::Display for Camera {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Camera(position={}, target={}, fov={:.1}°)",
            self.position,
            self.target,
            self.fov.to_degrees().value()
        )
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
