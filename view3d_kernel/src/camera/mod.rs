//! Camera module: viewport, camera and frustum.
//!
//! The camera turns position/target/lens parameters into view and
//! projection matrices; the viewport supplies the aspect ratio; the
//! frustum turns the combined matrix back into planes for culling.

mod camera;
mod frustum;
mod viewport;

pub use camera::{Camera, DEFAULT_FAR, DEFAULT_FOV_DEGREES, DEFAULT_NEAR};
pub use frustum::{
    Frustum, FrustumTest,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
pub use viewport::Viewport;
