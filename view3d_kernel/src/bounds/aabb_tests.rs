/// Tests for AxisAlignedBoundingBox
///
/// Construction policy (reorder), containment, merge laws and the
/// Arvo transform against a brute-force corner transform.

use crate::error::Error;
use crate::math::{Degrees, Matrix4, Point3, Quaternion, Vector3};
use super::*;

fn sample_boxes() -> Vec<AABB> {
    vec![
        AABB::new(0.0, 0.0, 0.0, 10.0, 10.0, 10.0),
        AABB::new(5.0, 5.0, 5.0, 15.0, 15.0, 15.0),
        AABB::new(-3.0, 2.0, -7.5, -1.0, 4.0, 0.5),
        AABB::new(1.0, 1.0, 1.0, 1.0, 1.0, 1.0),
    ]
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_new_keeps_ordered_bounds() {
    let b = AABB::new(-1.0, -2.0, -3.0, 1.0, 2.0, 3.0);
    assert_eq!(b.min(), Point3::new(-1.0, -2.0, -3.0));
    assert_eq!(b.max(), Point3::new(1.0, 2.0, 3.0));
}

#[test]
fn test_new_reorders_inverted_bounds() {
    let b = AABB::new(10.0, 0.0, 5.0, 0.0, 10.0, -5.0);
    assert_eq!(b.min(), Point3::new(0.0, 0.0, -5.0));
    assert_eq!(b.max(), Point3::new(10.0, 10.0, 5.0));
    assert_eq!(b, AABB::new(0.0, 0.0, -5.0, 10.0, 10.0, 5.0));
}

#[test]
fn test_new_drops_nan_coordinates() {
    let aabb = AABB::new(f64::NAN, 0.0, 0.0, 1.0, 1.0, 1.0);
    assert_eq!(aabb.min(), Point3::new(1.0, 0.0, 0.0));
    assert_eq!(aabb.max(), Point3::new(1.0, 1.0, 1.0));

    assert!(matches!(
        AABB::from_slice(&[f64::NAN, 0.0, 0.0, 1.0, 1.0, 1.0]),
        Err(Error::InvalidBounds(_))
    ));
}

#[test]
fn test_from_points() {
    let b = AABB::from_points([
        Point3::new(1.0, 5.0, -2.0),
        Point3::new(-3.0, 0.0, 4.0),
        Point3::new(2.0, 1.0, 0.0),
    ])
    .unwrap();
    assert_eq!(b, AABB::new(-3.0, 0.0, -2.0, 2.0, 5.0, 4.0));

    assert_eq!(AABB::from_points(Vec::new()), None);
}

#[test]
fn test_from_slice() {
    let b = AABB::from_slice(&[3.0, 0.0, 0.0, 1.0, 1.0, 1.0]).unwrap();
    assert_eq!(b, AABB::new(1.0, 0.0, 0.0, 3.0, 1.0, 1.0));

    assert_eq!(
        AABB::from_slice(&[0.0; 5]),
        Err(Error::DimensionMismatch { expected: 6, actual: 5 })
    );
    assert!(matches!(
        AABB::from_slice(&[0.0, 0.0, f64::NAN, 1.0, 1.0, 1.0]),
        Err(Error::InvalidBounds(_))
    ));
    assert!(matches!(
        AABB::from_slice(&[0.0, 0.0, 0.0, 1.0, f64::INFINITY, 1.0]),
        Err(Error::InvalidBounds(_))
    ));
}

// ============================================================================
// Queries
// ============================================================================

#[test]
fn test_contains_point() {
    let b = AABB::new(-10.0, -10.0, -10.0, 10.0, 10.0, 10.0);
    assert!(b.contains_xyz(0.0, 0.0, 0.0));
    assert!(!b.contains_xyz(11.0, 11.0, 11.0));
    // Boundary is inside
    assert!(b.contains(Point3::new(10.0, -10.0, 10.0)));
    assert!(!b.contains(Point3::new(10.0, 10.0, 10.000001)));
}

#[test]
fn test_center_and_size() {
    let b = AABB::new(-2.0, 0.0, 4.0, 2.0, 6.0, 5.0);
    assert_eq!(b.center(), Point3::new(0.0, 3.0, 4.5));
    assert_eq!(b.size(), Vector3::new(4.0, 6.0, 1.0));
}

#[test]
fn test_contains_box_and_intersects() {
    let outer = AABB::new(0.0, 0.0, 0.0, 10.0, 10.0, 10.0);
    let inner = AABB::new(2.0, 2.0, 2.0, 8.0, 8.0, 8.0);
    let straddling = AABB::new(5.0, 5.0, 5.0, 15.0, 15.0, 15.0);
    let touching = AABB::new(10.0, 0.0, 0.0, 12.0, 1.0, 1.0);
    let apart = AABB::new(20.0, 20.0, 20.0, 30.0, 30.0, 30.0);

    assert!(outer.contains_box(&inner));
    assert!(outer.contains_box(&outer));
    assert!(!outer.contains_box(&straddling));
    assert!(!inner.contains_box(&outer));

    assert!(outer.intersects(&straddling));
    assert!(outer.intersects(&touching));
    assert!(!outer.intersects(&apart));
}

#[test]
fn test_corners() {
    let b = AABB::new(0.0, 0.0, 0.0, 1.0, 2.0, 3.0);
    let corners = b.corners();
    assert_eq!(corners[0], Point3::new(0.0, 0.0, 0.0));
    assert_eq!(corners[7], Point3::new(1.0, 2.0, 3.0));
    assert_eq!(corners[5], Point3::new(1.0, 0.0, 3.0));
    assert!(corners.iter().all(|c| b.contains(*c)));
}

// ============================================================================
// Merge
// ============================================================================

#[test]
fn test_merge_scenario() {
    let merged = AABB::new(0.0, 0.0, 0.0, 10.0, 10.0, 10.0)
        .merge(&AABB::new(5.0, 5.0, 5.0, 15.0, 15.0, 15.0));
    assert_eq!(merged, AABB::new(0.0, 0.0, 0.0, 15.0, 15.0, 15.0));
}

#[test]
fn test_merge_laws() {
    let boxes = sample_boxes();
    for a in &boxes {
        for b in &boxes {
            let ab = a.merge(b);
            assert_eq!(ab, b.merge(a));
            assert!(ab.contains_box(a));
            assert!(ab.contains_box(b));
            for corner in a.corners().iter().chain(b.corners().iter()) {
                assert!(ab.contains(*corner));
            }
            for c in &boxes {
                assert_eq!(a.merge(&b.merge(c)), a.merge(b).merge(c));
            }
        }
    }
}

#[test]
fn test_expanded_to() {
    let b = AABB::new(0.0, 0.0, 0.0, 1.0, 1.0, 1.0).expanded_to(Point3::new(-1.0, 0.5, 4.0));
    assert_eq!(b, AABB::new(-1.0, 0.0, 0.0, 1.0, 1.0, 4.0));
}

// ============================================================================
// Transform
// ============================================================================

#[test]
fn test_transformed_by_translation() {
    let b = AABB::new(0.0, 0.0, 0.0, 1.0, 1.0, 1.0);
    let moved = b.transformed(&Matrix4::from_translation(Vector3::new(5.0, -1.0, 2.0)));
    assert_eq!(moved, AABB::new(5.0, -1.0, 2.0, 6.0, 0.0, 3.0));
}

#[test]
fn test_transformed_matches_corner_transform() {
    let rotation = Quaternion::from_axis_angle(Vector3::new(1.0, 1.0, 0.0), Degrees(35.0)).unwrap();
    let matrix = Matrix4::from_scale_rotation_translation(
        Vector3::new(2.0, 1.0, 0.5),
        rotation,
        Vector3::new(3.0, -4.0, 1.0),
    )
    .unwrap();

    for b in sample_boxes() {
        let arvo = b.transformed(&matrix);
        let brute = AABB::from_points(
            b.corners().iter().map(|c| matrix.transform_point(*c).unwrap()),
        )
        .unwrap();
        assert!(arvo.min().approx_eq(brute.min(), 1e-9));
        assert!(arvo.max().approx_eq(brute.max(), 1e-9));
    }
}

#[test]
fn test_display() {
    assert_eq!(
        AABB::new(0.0, 0.0, 0.0, 1.0, 2.0, 3.0).to_string(),
        "AxisAlignedBoundingBox(min=Point3(0, 0, 0), max=Point3(1, 2, 3))"
    );
}
