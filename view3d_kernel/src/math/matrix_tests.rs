use crate::error::Error;
use crate::math::{Degrees, Point3, ProjectionConfig, Handedness, Quaternion, Vector2, Vector3};
use super::*;

const EPS: f64 = 1e-9;

fn sample_matrix2() -> Matrix2 {
    // rows [1 3; 2 4]
    Matrix2::from_cols_slice(&[1.0, 2.0, 3.0, 4.0]).unwrap()
}

fn sample_matrix4s() -> Vec<Matrix4> {
    let rotation = Quaternion::from_axis_angle(Vector3::new(1.0, -2.0, 0.5), Degrees(33.0)).unwrap();
    vec![
        Matrix4::from_translation(Vector3::new(1.0, -2.0, 3.0)),
        Matrix4::from_scale(Vector3::new(2.0, 0.5, -1.5)),
        Matrix4::from_quaternion(rotation).unwrap(),
        Matrix4::perspective(Degrees(60.0), 1.5, 0.1, 50.0, ProjectionConfig::default()).unwrap(),
    ]
}

// ============================================================================
// Construction and layout
// ============================================================================

#[test]
fn test_identity_data_is_column_major() {
    assert_eq!(Matrix2::identity().data(), vec![1.0, 0.0, 0.0, 1.0]);
    assert_eq!(
        Matrix3::identity().data(),
        vec![1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]
    );
    assert_eq!(Matrix4::identity().data().len(), Matrix4::ELEMENT_COUNT);
    assert_eq!(Matrix4::default(), Matrix4::IDENTITY);
}

#[test]
fn test_zero() {
    assert!(Matrix3::zero().data().iter().all(|v| *v == 0.0));
    assert_eq!(Matrix3::zero().determinant(), 0.0);
}

#[test]
fn test_from_cols_slice_dimension_mismatch() {
    assert_eq!(
        Matrix3::from_cols_slice(&[0.0; 8]),
        Err(Error::DimensionMismatch { expected: 9, actual: 8 })
    );
    assert!(Matrix4::from_cols_slice(&[0.0; 17]).is_err());
}

#[test]
fn test_element_access() {
    let m = Matrix3::from_cols_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]).unwrap();
    assert_eq!(m.get(0, 1), Some(4.0));
    assert_eq!(m.get(2, 0), Some(3.0));
    assert_eq!(m.get(3, 0), None);
    assert_eq!(m.col(2), Some(Vector3::new(7.0, 8.0, 9.0)));
    assert_eq!(m.row(0), Some(Vector3::new(1.0, 4.0, 7.0)));
    assert_eq!(m.col(3), None);

    let rebuilt = Matrix3::from_cols(
        Vector3::new(1.0, 2.0, 3.0),
        Vector3::new(4.0, 5.0, 6.0),
        Vector3::new(7.0, 8.0, 9.0),
    );
    assert_eq!(rebuilt, m);
}

// ============================================================================
// Algebra
// ============================================================================

#[test]
fn test_product() {
    // rows [5 7; 6 8]
    let b = Matrix2::from_cols_slice(&[5.0, 6.0, 7.0, 8.0]).unwrap();
    let product = sample_matrix2().mul(b);
    assert_eq!(product.data(), vec![23.0, 34.0, 31.0, 46.0]);
    assert_eq!(sample_matrix2() * b, product);
}

#[test]
fn test_product_is_associative() {
    let m = sample_matrix4s();
    let left = (m[0] * m[1]) * m[2];
    let right = m[0] * (m[1] * m[2]);
    assert!(left.approx_eq(&right, EPS));

    let left = (m[3] * m[2]) * m[0];
    let right = m[3] * (m[2] * m[0]);
    assert!(left.approx_eq(&right, EPS));
}

#[test]
fn test_identity_is_two_sided() {
    for m in sample_matrix4s() {
        assert_eq!(Matrix4::identity() * m, m);
        assert_eq!(m * Matrix4::identity(), m);
    }
}

#[test]
fn test_transpose_and_determinant() {
    assert_eq!(sample_matrix2().transpose().data(), vec![1.0, 3.0, 2.0, 4.0]);
    assert_eq!(sample_matrix2().determinant(), -2.0);
    for m in sample_matrix4s() {
        assert!((m.transpose().determinant() - m.determinant()).abs() < EPS);
    }
}

#[test]
fn test_inverse() {
    let inverse = sample_matrix2().inverse().unwrap();
    assert!(inverse.approx_eq(
        &Matrix2::from_cols_slice(&[-2.0, 1.0, 1.5, -0.5]).unwrap(),
        EPS
    ));

    for m in sample_matrix4s() {
        let inverse = m.inverse().unwrap();
        assert!((m * inverse).approx_eq(&Matrix4::identity(), 1e-6));
    }
}

#[test]
fn test_inverse_of_singular_matrix() {
    let singular = Matrix2::from_cols_slice(&[1.0, 2.0, 2.0, 4.0]).unwrap();
    assert!(matches!(singular.inverse(), Err(Error::DivideByZero(_))));
    assert!(matches!(Matrix4::zero().inverse(), Err(Error::DivideByZero(_))));
}

#[test]
fn test_matrix_vector_product() {
    let v = sample_matrix2() * Vector2::new(1.0, 1.0);
    assert_eq!(v, Vector2::new(4.0, 6.0));

    let rotated = Matrix2::from_angle(Degrees(90.0)) * Vector2::X;
    assert!(rotated.approx_eq(Vector2::Y, EPS));
}

// ============================================================================
// Affine transforms
// ============================================================================

#[test]
fn test_translation_moves_points_not_vectors() {
    let t = Matrix4::from_translation(Vector3::new(1.0, 2.0, 3.0));
    let p = t.transform_point(Point3::new(1.0, 1.0, 1.0)).unwrap();
    assert_eq!(p, Point3::new(2.0, 3.0, 4.0));

    let v = t.transform_vector(Vector3::new(1.0, 1.0, 1.0));
    assert_eq!(v, Vector3::new(1.0, 1.0, 1.0));
    assert_eq!(t.translation(), Vector3::new(1.0, 2.0, 3.0));
}

#[test]
fn test_scale_rotation_translation_order() {
    let scale = Vector3::new(2.0, 3.0, 4.0);
    let rotation = Quaternion::from_axis_angle(Vector3::Y, Degrees(90.0)).unwrap();
    let translation = Vector3::new(10.0, 0.0, 0.0);

    let combined = Matrix4::from_scale_rotation_translation(scale, rotation, translation).unwrap();
    let manual = Matrix4::from_translation(translation)
        * Matrix4::from_quaternion(rotation).unwrap()
        * Matrix4::from_scale(scale);
    assert!(combined.approx_eq(&manual, EPS));
}

#[test]
fn test_normal_matrix_of_non_uniform_scale() {
    let m = Matrix4::from_scale(Vector3::new(2.0, 1.0, 1.0));
    let normal = m.normal_matrix().unwrap();
    assert!(normal.approx_eq(&Matrix3::from_diagonal(Vector3::new(0.5, 1.0, 1.0)), EPS));

    let flat = Matrix4::from_scale(Vector3::new(1.0, 0.0, 1.0));
    assert!(matches!(flat.normal_matrix(), Err(Error::DivideByZero(_))));
}

#[test]
fn test_from_matrix4_drops_translation() {
    let m = Matrix4::from_translation(Vector3::new(4.0, 5.0, 6.0));
    assert_eq!(Matrix3::from_matrix4(&m), Matrix3::identity());
}

// ============================================================================
// View and projection
// ============================================================================

#[test]
fn test_look_at_places_target_in_front() {
    let eye = Point3::new(0.0, 0.0, 5.0);
    let rh = Matrix4::look_at(eye, Point3::origin(), Vector3::Y, Handedness::Right).unwrap();
    let in_view = rh.transform_point(Point3::origin()).unwrap();
    assert!(in_view.approx_eq(Point3::new(0.0, 0.0, -5.0), EPS));

    let lh = Matrix4::look_at(eye, Point3::origin(), Vector3::Y, Handedness::Left).unwrap();
    let in_view = lh.transform_point(Point3::origin()).unwrap();
    assert!(in_view.approx_eq(Point3::new(0.0, 0.0, 5.0), EPS));
}

#[test]
fn test_look_at_degenerate() {
    let eye = Point3::new(1.0, 2.0, 3.0);
    assert!(matches!(
        Matrix4::look_at(eye, eye, Vector3::Y, Handedness::Right),
        Err(Error::DegenerateCamera(_))
    ));
    assert!(matches!(
        Matrix4::look_at(eye, Point3::new(1.0, 10.0, 3.0), Vector3::Y, Handedness::Right),
        Err(Error::DegenerateCamera(_))
    ));
    assert!(matches!(
        Matrix4::look_at(eye, Point3::origin(), Vector3::zero(), Handedness::Right),
        Err(Error::DegenerateCamera(_))
    ));
    assert!(matches!(
        Matrix4::look_at(Point3::new(f64::NAN, 0.0, 0.0), Point3::origin(), Vector3::Y, Handedness::Right),
        Err(Error::DegenerateCamera(_))
    ));
}

#[test]
fn test_perspective_depth_range() {
    let vulkan = Matrix4::perspective(Degrees(60.0), 1.0, 0.5, 100.0, ProjectionConfig::vulkan()).unwrap();
    let near = vulkan.transform_point(Point3::new(0.0, 0.0, -0.5)).unwrap();
    let far = vulkan.transform_point(Point3::new(0.0, 0.0, -100.0)).unwrap();
    assert!(near.z().abs() < EPS);
    assert!((far.z() - 1.0).abs() < EPS);

    let gl = Matrix4::perspective(Degrees(60.0), 1.0, 0.5, 100.0, ProjectionConfig::opengl()).unwrap();
    let near = gl.transform_point(Point3::new(0.0, 0.0, -0.5)).unwrap();
    let far = gl.transform_point(Point3::new(0.0, 0.0, -100.0)).unwrap();
    assert!((near.z() + 1.0).abs() < EPS);
    assert!((far.z() - 1.0).abs() < EPS);

    let d3d = Matrix4::perspective(Degrees(60.0), 1.0, 0.5, 100.0, ProjectionConfig::direct3d()).unwrap();
    let near = d3d.transform_point(Point3::new(0.0, 0.0, 0.5)).unwrap();
    assert!(near.z().abs() < EPS);
}

#[test]
fn test_perspective_opengl_matches_glam() {
    let fov = Degrees(45.0);
    let ours = Matrix4::perspective(fov, 16.0 / 9.0, 0.1, 1000.0, ProjectionConfig::opengl()).unwrap();
    let reference = glam::DMat4::perspective_rh_gl(fov.to_radians().value(), 16.0 / 9.0, 0.1, 1000.0);
    assert!(ours.approx_eq(&Matrix4::from(reference), 1e-9));
}

#[test]
fn test_perspective_rejects_bad_parameters() {
    let config = ProjectionConfig::default();
    let cases = [
        Matrix4::perspective(Degrees(0.0), 1.0, 0.1, 10.0, config),
        Matrix4::perspective(Degrees(200.0), 1.0, 0.1, 10.0, config),
        Matrix4::perspective(Degrees(60.0), 0.0, 0.1, 10.0, config),
        Matrix4::perspective(Degrees(60.0), 1.0, 0.0, 10.0, config),
        Matrix4::perspective(Degrees(60.0), 1.0, 10.0, 10.0, config),
        Matrix4::perspective(Degrees(60.0), 1.0, 0.1, f64::INFINITY, config),
    ];
    for case in cases {
        assert!(matches!(case, Err(Error::DegenerateCamera(_))));
    }
}

#[test]
fn test_eye_has_no_projected_position() {
    let p = Matrix4::perspective(Degrees(60.0), 1.0, 0.1, 10.0, ProjectionConfig::default()).unwrap();
    assert!(matches!(
        p.transform_point(Point3::origin()),
        Err(Error::DivideByZero(_))
    ));
}

#[test]
fn test_orthographic() {
    let vulkan = Matrix4::orthographic(-1.0, 1.0, -1.0, 1.0, 1.0, 10.0, ProjectionConfig::vulkan()).unwrap();
    let near = vulkan.transform_point(Point3::new(1.0, -1.0, -1.0)).unwrap();
    assert!(near.approx_eq(Point3::new(1.0, -1.0, 0.0), EPS));
    let far = vulkan.transform_point(Point3::new(0.0, 0.0, -10.0)).unwrap();
    assert!((far.z() - 1.0).abs() < EPS);

    let gl = Matrix4::orthographic(-1.0, 1.0, -1.0, 1.0, 1.0, 10.0, ProjectionConfig::opengl()).unwrap();
    let near = gl.transform_point(Point3::new(0.0, 0.0, -1.0)).unwrap();
    assert!((near.z() + 1.0).abs() < EPS);

    assert!(matches!(
        Matrix4::orthographic(1.0, 1.0, -1.0, 1.0, 1.0, 10.0, ProjectionConfig::vulkan()),
        Err(Error::DivideByZero(_))
    ));
}

#[test]
fn test_display() {
    assert_eq!(Matrix2::identity().to_string(), "Matrix2(cols: [1, 0], [0, 1])");
}
