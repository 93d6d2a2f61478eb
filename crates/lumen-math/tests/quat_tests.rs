// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use core::f64::consts::FRAC_PI_2;

use lumen_math::{rotate_z, MathError, Matrix4d, Quatd, Quatf, Vec3d, Vec3f, Vec4d};

const EPS: f64 = 1e-12;

fn rel_close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol * b.abs().max(1.0)
}

#[test]
fn addition_is_component_wise() {
    let a = Quatf::new(2.0, Vec3f::new(1.0, 2.0, 3.0));
    let b = Quatf::new(3.0, Vec3f::new(4.0, 5.0, 6.0));
    assert_eq!(a + b, Quatf::new(5.0, Vec3f::new(5.0, 7.0, 9.0)));
    assert_eq!((a + b) - b, a);
    let mut c = a;
    c += b;
    c -= a;
    assert_eq!(c, b);
}

#[test]
fn hamilton_product_is_not_commutative() {
    let a = Quatf::new(2.0, Vec3f::new(1.0, 2.0, 3.0));
    let b = Quatf::new(3.0, Vec3f::new(4.0, 5.0, 6.0));
    assert_ne!(a * b, b * a);
    // w = 6 - 32, v = b.v*2 + a.v*3 + a.v x b.v
    assert_eq!(a * b, Quatf::new(-26.0, Vec3f::new(8.0, 22.0, 18.0)));
    let mut c = a;
    c *= b;
    assert_eq!(c, a.multiply(&b));
}

#[test]
fn negation_and_conjugate() {
    let q = Quatf::new(1.0, Vec3f::new(2.0, 3.0, 4.0));
    assert_eq!(-q, Quatf::new(-1.0, Vec3f::new(-2.0, -3.0, -4.0)));
    assert_eq!(q.conjugate(), Quatf::new(1.0, Vec3f::new(-2.0, -3.0, -4.0)));
    assert_eq!(q * 2.0, Quatf::new(2.0, Vec3f::new(4.0, 6.0, 8.0)));

    let unit = Quatd::from_angle_axis(0.8, &Vec3d::new(1.0, -2.0, 0.5));
    assert!((unit * unit.conjugate()).approx_eq(&Quatd::identity(), EPS));
}

#[test]
fn length_and_normalization() {
    let q = Quatd::new(1.0, Vec3d::new(1.0, 1.0, 1.0));
    assert_eq!(q.length_squared(), 4.0);
    assert_eq!(q.length(), 2.0);
    assert_eq!(q.normalized(), Quatd::new(0.5, Vec3d::splat(0.5)));
}

#[test]
fn default_and_load_identity() {
    let mut q = Quatf::new(0.0, Vec3f::UNIT_X);
    assert_eq!(*q.load_identity(), Quatf::default());
    assert_eq!(q.w(), 1.0);
    assert_eq!(q.v(), Vec3f::zero());
    assert!(Quatf::identity().to_matrix().is_identity());
}

#[test]
fn angle_axis_round_trip() {
    let q = Quatd::from_angle_axis(3.1, &Vec3d::UNIT_X);
    let (angle, axis) = q.to_angle_axis();
    assert!(rel_close(angle, 3.1, 1e-9), "angle {angle}");
    assert!(axis.approx_eq(&Vec3d::UNIT_X, 1e-9), "axis {axis}");
    assert_eq!(q.try_to_angle_axis(), Ok((angle, axis)));
}

#[test]
fn angle_axis_normalizes_axis() {
    let a = Quatd::from_angle_axis(1.0, &Vec3d::new(0.0, 0.0, 5.0));
    let b = Quatd::from_angle_axis(1.0, &Vec3d::UNIT_Z);
    assert!(a.approx_eq(&b, EPS));
}

#[test]
fn identity_has_no_rotation_axis() {
    assert_eq!(
        Quatd::identity().try_to_angle_axis(),
        Err(MathError::DegenerateRotation)
    );
    let (_, axis) = Quatd::identity().to_angle_axis();
    assert!(!axis.x().is_finite());
}

#[test]
fn euler_round_trip() {
    let angles = Vec3d::new(10.0_f64.to_radians(), 20.0_f64.to_radians(), 30.0_f64.to_radians());
    let q = Quatd::from_euler_vec(&angles);
    let back = q.to_euler();
    for i in 0..3 {
        assert!(rel_close(back[i], angles[i], 1e-4), "{back} vs {angles}");
    }
    assert_eq!(q, Quatd::from_euler(angles.x(), angles.y(), angles.z()));
}

#[test]
fn euler_gimbal_lock_keeps_middle_angle() {
    for &ry in &[FRAC_PI_2, -FRAC_PI_2] {
        let back = Quatd::from_euler(0.7, ry, 0.7).to_euler();
        assert!(back.y().is_finite(), "{back}");
        assert!((back.y() - ry).abs() < 1e-6, "{back}");
    }
    for &ry in &[core::f32::consts::FRAC_PI_2, -core::f32::consts::FRAC_PI_2] {
        let back = Quatf::from_euler(0.3, ry, 0.2).to_euler();
        assert!(back.y().is_finite(), "{back}");
        assert!((back.y() - ry).abs() < 1e-3, "{back}");
    }
}

#[test]
fn euler_single_axis_matches_angle_axis() {
    let q = Quatd::from_euler(0.0, 0.0, 0.7);
    assert!(q.approx_eq(&Quatd::from_angle_axis(0.7, &Vec3d::UNIT_Z), EPS));
    let q = Quatd::from_euler(0.4, 0.0, 0.0);
    assert!(q.approx_eq(&Quatd::from_angle_axis(0.4, &Vec3d::UNIT_X), EPS));
}

#[test]
fn to_matrix_matches_axis_rotation() {
    let q = Quatd::from_angle_axis(0.6, &Vec3d::UNIT_Z);
    assert!(q.to_matrix().approx_eq(&rotate_z(0.6), EPS));

    let m = Quatd::from_angle_axis(FRAC_PI_2, &Vec3d::UNIT_Y).to_matrix();
    let forward = m * Vec4d::new(0.0, 0.0, -1.0, 0.0);
    assert!(forward.approx_eq(&Vec4d::new(-1.0, 0.0, 0.0, 0.0), EPS), "{forward}");
    assert_eq!(m.row(3), Vec4d::new(0.0, 0.0, 0.0, 1.0));
}

#[test]
fn product_composes_rotations() {
    let a = Quatd::from_angle_axis(0.3, &Vec3d::new(1.0, 2.0, 3.0));
    let b = Quatd::from_angle_axis(-1.1, &Vec3d::new(0.0, 1.0, 0.0));
    let composed: Matrix4d = a.to_matrix() * b.to_matrix();
    assert!((a * b).to_matrix().approx_eq(&composed, 1e-12));
}

#[test]
fn direction_rotation_maps_x_onto_target() {
    let dir = Vec3d::UNIT_Y;
    let m = Quatd::from_direction(&dir).to_matrix();
    assert!(m.transform_direction(&Vec3d::UNIT_X).approx_eq(&dir, EPS));

    let dir = Vec3d::new(1.0, 1.0, 1.0).normalized();
    let q = Quatd::try_from_direction(&dir);
    assert!(q.is_ok());
    if let Ok(q) = q {
        let mapped = q.to_matrix().transform_direction(&Vec3d::UNIT_X);
        assert!(mapped.approx_eq(&dir, 1e-12), "{mapped}");
    }
}

#[test]
fn direction_parallel_to_x_is_degenerate() {
    assert_eq!(
        Quatd::try_from_direction(&Vec3d::UNIT_X),
        Err(MathError::DegenerateDirection)
    );
    assert_eq!(
        Quatd::try_from_direction(&-Vec3d::UNIT_X),
        Err(MathError::DegenerateDirection)
    );
}

#[test]
fn display_shows_scalar_then_vector() {
    let q = Quatf::new(1.0, Vec3f::new(0.0, -2.0, 0.5));
    assert_eq!(q.to_string(), "[1, (0, -2, 0.5)]");
}
