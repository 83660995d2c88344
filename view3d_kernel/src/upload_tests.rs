use crate::math::{Matrix4, Point3, Quaternion, Vector3};
use super::*;

// ============================================================================
// Size estimates
// ============================================================================

#[test]
fn test_element_sizes() {
    assert_eq!(ElementType::U8.size_bytes(), 1);
    assert_eq!(ElementType::U16.size_bytes(), 2);
    assert_eq!(ElementType::F16.size_bytes(), 2);
    assert_eq!(ElementType::U32.size_bytes(), 4);
    assert_eq!(ElementType::F32.size_bytes(), 4);
    assert_eq!(ElementType::F64.size_bytes(), 8);
}

#[test]
fn test_estimate_size_bytes() {
    // 100 vec3 positions as f32
    assert_eq!(estimate_size_bytes(3, ElementType::F32, 100), 1200);
    // One mat4 as f64
    assert_eq!(estimate_size_bytes(16, ElementType::F64, 1), 128);
    assert_eq!(estimate_size_bytes(4, ElementType::U8, 0), 0);
}

#[test]
fn test_estimate_size_bytes_saturates() {
    assert_eq!(estimate_size_bytes(u64::MAX, ElementType::F64, 2), u64::MAX);
}

// ============================================================================
// Payloads
// ============================================================================

#[test]
fn test_payload_from_points() {
    let points = [Point3::new(1.0, 2.0, 3.0), Point3::new(-1.0, 0.5, 0.0)];
    let payload = UploadPayload::from_items(&points);

    assert_eq!(payload.values(), &[1.0, 2.0, 3.0, -1.0, 0.5, 0.0]);
    assert_eq!(payload.component_count(), 3);
    assert_eq!(payload.count(), 2);
    assert_eq!(payload.size_bytes(), 24);
    assert_eq!(payload.bytes().len() as u64, payload.size_bytes());
    assert_eq!(payload.element_type(), ElementType::F32);
}

#[test]
fn test_payload_matrix_is_column_major() {
    let m = Matrix4::from_translation(Vector3::new(7.0, 8.0, 9.0));
    let payload = UploadPayload::from_items(&[m]);

    assert_eq!(payload.values().len(), 16);
    assert_eq!(&payload.values()[12..15], &[7.0, 8.0, 9.0]);
    let expected: Vec<f32> = m.data().iter().map(|v| *v as f32).collect();
    assert_eq!(payload.values(), expected.as_slice());
}

#[test]
fn test_payload_quaternion_order() {
    let payload = UploadPayload::from_items(&[Quaternion::new(1.0, 2.0, 3.0, 4.0)]);
    assert_eq!(payload.values(), &[1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn test_payload_bytes_match_values() {
    let payload = UploadPayload::from_items(&[Vector3::new(1.5, -2.0, 0.25)]);
    let expected: Vec<u8> = [1.5f32, -2.0, 0.25]
        .iter()
        .flat_map(|v| v.to_ne_bytes())
        .collect();
    assert_eq!(payload.bytes(), expected.as_slice());
}

#[test]
fn test_empty_payload() {
    let payload = UploadPayload::from_items::<Vector3>(&[]);
    assert!(payload.is_empty());
    assert_eq!(payload.size_bytes(), 0);
    assert!(payload.bytes().is_empty());
}

#[test]
fn test_components_constant_matches_written_values() {
    let mut out = Vec::new();
    Matrix3::identity().write_f32(&mut out);
    assert_eq!(out.len(), <Matrix3 as GpuData>::COMPONENTS);

    out.clear();
    Vector2::new(1.0, 2.0).write_f32(&mut out);
    assert_eq!(out.len(), <Vector2 as GpuData>::COMPONENTS);
}
