// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use lumen_geom::{Plane, Ray};
use lumen_math::{MathError, Vec3f};

fn ground() -> Plane<f32> {
    Plane::new(Vec3f::new(3.0, 2.0, 0.0), Vec3f::UNIT_Y)
}

#[test]
fn point_distances_are_signed() {
    let p = ground();
    assert_eq!(p.distance(&Vec3f::new(4.0, 2.0, 0.0)), 0.0);
    assert_eq!(p.distance(&Vec3f::new(4.0, 4.0, 0.0)), 2.0);
    assert_eq!(p.distance(&Vec3f::new(-7.0, -1.0, 9.0)), -3.0);
    assert_eq!(p.distance(&p.point()), 0.0);
    assert_eq!(p.distance(&(p.point() + p.normal())), 1.0);
}

#[test]
fn ray_distances_measure_along_direction() {
    let p = ground();
    let down = Vec3f::new(0.0, -1.0, 0.0);
    assert_eq!(p.ray_distance(&Ray::new(Vec3f::new(3.0, 5.0, 0.0), down)), 3.0);
    assert_eq!(p.ray_distance(&Ray::new(Vec3f::new(3.0, 0.0, 0.0), down)), -2.0);
    assert_eq!(
        p.ray_distance(&Ray::new(Vec3f::new(3.0, 0.0, 0.0), Vec3f::UNIT_Y)),
        2.0
    );
}

#[test]
fn parallel_rays_have_no_hit() {
    let p = ground();
    let ray = Ray::new(Vec3f::new(0.0, 5.0, 0.0), Vec3f::UNIT_X);
    assert!(!p.ray_distance(&ray).is_finite());
    assert_eq!(p.try_ray_distance(&ray, 1e-6), None);

    let hit = Ray::new(Vec3f::new(3.0, 5.0, 0.0), Vec3f::new(0.0, -2.0, 0.0));
    assert_eq!(p.try_ray_distance(&hit, 1e-6), Some(1.5));
    assert_eq!(hit.at(1.5), Vec3f::new(3.0, 2.0, 0.0));
}

#[test]
fn checked_constructor_rejects_non_unit_normals() {
    let err = Plane::try_new(Vec3f::zero(), Vec3f::new(0.0, 2.0, 0.0));
    assert_eq!(err, Err(MathError::NonUnitNormal { length: 2.0 }));
    assert_eq!(
        Plane::try_new(Vec3f::zero(), Vec3f::UNIT_Z),
        Ok(Plane::new(Vec3f::zero(), Vec3f::UNIT_Z))
    );
}

#[test]
fn set_replaces_point_and_normal() {
    let mut p = ground();
    p.set(Vec3f::new(0.0, 0.0, 1.0), -Vec3f::UNIT_Z);
    assert_eq!(p.normal(), -Vec3f::UNIT_Z);
    assert_eq!(p.distance(&Vec3f::zero()), 1.0);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "plane normal must be unit length")]
fn debug_builds_assert_unit_normal() {
    let _ = Plane::new(Vec3f::zero(), Vec3f::new(1.0, 1.0, 0.0));
}

#[test]
fn ray_display_lists_origin_then_direction() {
    let ray = Ray::new(Vec3f::zero(), Vec3f::UNIT_Z);
    assert_eq!(ray.to_string(), "Ray {(0, 0, 0), (0, 0, 1)}");
}
