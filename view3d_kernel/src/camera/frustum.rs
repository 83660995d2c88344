/// Frustum: six clipping planes for visibility culling.
///
/// Each plane is represented as a Vector4 (A, B, C, D) where:
/// - (A, B, C) is the inward-pointing unit normal
/// - D is the signed distance
/// - A point P is inside the frustum if A·x + B·y + C·z + D >= 0 for all planes
///
/// `Camera::frustum` builds one from the camera's view-projection matrix;
/// the scene graph runs `intersects_aabb` / `classify_aabb` against it.

use glam::{DVec3, DVec4};
use crate::bounds::AABB;
use crate::math::{DepthRange, Matrix4, Point3, Vector4};

/// Result of a 3-way frustum/AABB classification.
///
/// - `Outside` → skip the entire subtree
/// - `Inside` → collect all objects without further testing
/// - `Partial` → test individual objects and recurse into children
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrustumTest {
    /// AABB is entirely outside the frustum
    Outside,
    /// AABB is entirely inside the frustum
    Inside,
    /// AABB partially overlaps the frustum
    Partial,
}

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// Six frustum planes: left, right, bottom, top, near, far.
///
/// Works with both perspective and orthographic projections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    planes: [DVec4; 6],
}

impl Frustum {
    /// Extract frustum planes from a view-projection matrix.
    ///
    /// Gribb & Hartmann: every plane is a sum or difference of matrix rows.
    /// The near plane depends on where clip space puts depth: `row3 + row2`
    /// for -1..1, `row2` alone for 0..1.
    pub fn from_view_projection(view_projection: &Matrix4, depth_range: DepthRange) -> Self {
        let m = view_projection.0;
        let (row0, row1, row2, row3) = (m.row(0), m.row(1), m.row(2), m.row(3));

        let near = match depth_range {
            DepthRange::ZeroToOne => row2,
            DepthRange::NegativeOneToOne => row3 + row2,
        };

        let mut planes = [
            row3 + row0, // left
            row3 - row0, // right
            row3 + row1, // bottom
            row3 - row1, // top
            near,
            row3 - row2, // far
        ];

        for plane in &mut planes {
            let normal_len = plane.truncate().length();
            if normal_len > 0.0 {
                *plane /= normal_len;
            }
        }

        Self { planes }
    }

    /// All six planes, indexed by the `PLANE_*` constants
    pub fn planes(&self) -> [Vector4; 6] {
        self.planes.map(Vector4)
    }

    /// One plane, `None` past `PLANE_FAR`
    pub fn plane(&self, index: usize) -> Option<Vector4> {
        self.planes.get(index).copied().map(Vector4)
    }

    /// Whether the point is on the inner side of every plane (boundary included)
    pub fn contains_point(&self, point: Point3) -> bool {
        self.planes
            .iter()
            .all(|plane| signed_distance(plane, point.0) >= 0.0)
    }

    /// Test if an AABB intersects this frustum.
    ///
    /// Uses the "positive vertex" test: for each plane, find the AABB corner
    /// most in the direction of the plane normal. If that corner is outside,
    /// the AABB is fully outside.
    ///
    /// May return false positives (conservative), never false negatives.
    pub fn intersects_aabb(&self, aabb: &AABB) -> bool {
        self.planes
            .iter()
            .all(|plane| signed_distance(plane, positive_vertex(plane, aabb)) >= 0.0)
    }

    /// Classify an AABB against the frustum (3-way test).
    ///
    /// - If the p-vertex is outside any plane → `Outside` (early out)
    /// - If the n-vertex is outside any plane → at least `Partial`
    /// - If all n-vertices are inside all planes → `Inside`
    pub fn classify_aabb(&self, aabb: &AABB) -> FrustumTest {
        let mut all_inside = true;

        for plane in &self.planes {
            if signed_distance(plane, positive_vertex(plane, aabb)) < 0.0 {
                return FrustumTest::Outside;
            }
            if signed_distance(plane, negative_vertex(plane, aabb)) < 0.0 {
                all_inside = false;
            }
        }

        if all_inside { FrustumTest::Inside } else { FrustumTest::Partial }
    }
}

fn signed_distance(plane: &DVec4, point: DVec3) -> f64 {
    plane.truncate().dot(point) + plane.w
}

/// Corner most in the direction of the plane normal
fn positive_vertex(plane: &DVec4, aabb: &AABB) -> DVec3 {
    let (min, max) = (aabb.min().0, aabb.max().0);
    DVec3::new(
        if plane.x >= 0.0 { max.x } else { min.x },
        if plane.y >= 0.0 { max.y } else { min.y },
        if plane.z >= 0.0 { max.z } else { min.z },
    )
}

/// Corner least in the direction of the plane normal
fn negative_vertex(plane: &DVec4, aabb: &AABB) -> DVec3 {
    let (min, max) = (aabb.min().0, aabb.max().0);
    DVec3::new(
        if plane.x >= 0.0 { min.x } else { max.x },
        if plane.y >= 0.0 { min.y } else { max.y },
        if plane.z >= 0.0 { min.z } else { max.z },
    )
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
