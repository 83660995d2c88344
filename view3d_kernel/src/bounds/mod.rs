//! Bounds module: axis-aligned bounding boxes.
//!
//! Boxes are produced for, and consumed by, the scene graph's visibility
//! queries; see `camera::Frustum` for the culling side.

mod aabb;

pub use aabb::{AxisAlignedBoundingBox, AABB};
