// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use proptest::prelude::*;

use lumen_math::{accumulate_columns, Matrix4d, Matrix4f, Quatd, Vec3d, Vec4d};

// Bounded finite scalars keep products far from overflow so tolerances stay
// meaningful.
fn scalar() -> impl Strategy<Value = f64> {
    -1.0e3..1.0e3_f64
}

fn vec3() -> impl Strategy<Value = Vec3d> {
    prop::array::uniform3(scalar()).prop_map(Vec3d::from)
}

fn small() -> impl Strategy<Value = f64> {
    -10.0..10.0_f64
}

fn mat4() -> impl Strategy<Value = Matrix4d> {
    prop::array::uniform4(prop::array::uniform4(small())).prop_map(Matrix4d::from_columns)
}

fn mat4f() -> impl Strategy<Value = Matrix4f> {
    prop::array::uniform4(prop::array::uniform4(-100.0..100.0_f32)).prop_map(Matrix4f::from_columns)
}

proptest! {
    #[test]
    fn add_then_sub_recovers_operand(a in vec3(), b in vec3()) {
        prop_assert!(((a + b) - b).approx_eq(&a, 1e-9));
    }

    #[test]
    fn dot_is_commutative(a in vec3(), b in vec3()) {
        prop_assert_eq!(a.dot(&b), b.dot(&a));
    }

    #[test]
    fn cross_is_anti_commutative(a in vec3(), b in vec3()) {
        prop_assert_eq!(a.cross(&b), -b.cross(&a));
    }

    #[test]
    fn length_is_non_negative(a in vec3()) {
        prop_assert!(a.length() >= 0.0);
    }

    #[test]
    fn identity_is_left_neutral(m in mat4()) {
        prop_assert_eq!(Matrix4d::identity() * m, m);
    }

    #[test]
    fn double_transpose_is_identity(m in mat4()) {
        prop_assert_eq!(m.transposed().transposed(), m);
    }

    #[test]
    fn matrix_vector_product_is_associative(
        m1 in mat4(),
        m2 in mat4(),
        v in prop::array::uniform4(small()).prop_map(Vec4d::from),
    ) {
        let lhs = (m1 * m2) * v;
        let rhs = m1 * (m2 * v);
        // Entries stay below 10^4 in magnitude; allow relative rounding.
        prop_assert!(lhs.approx_eq(&rhs, 1e-9), "{} vs {}", lhs, rhs);
    }

    #[test]
    fn simd_multiply_is_bit_identical(a in mat4f(), b in mat4f()) {
        let product = a * b;
        for j in 0..4 {
            let generic = accumulate_columns(a.columns(), &b[j]);
            prop_assert_eq!(product[j].map(f32::to_bits), generic.map(f32::to_bits));
        }
    }

    #[test]
    fn angle_axis_round_trips(
        angle in 0.05..3.0_f64,
        axis in prop::array::uniform3(-1.0..1.0_f64)
            .prop_map(Vec3d::from)
            .prop_filter("axis must not vanish", |a| a.length() > 0.1),
    ) {
        let (back_angle, back_axis) = Quatd::from_angle_axis(angle, &axis).to_angle_axis();
        prop_assert!((back_angle - angle).abs() < 1e-9);
        prop_assert!(back_axis.approx_eq(&axis.normalized(), 1e-9));
    }
}
