// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use lumen_math::{MathError, Real, Vec3};

use crate::types::ray::Ray;

/// Tolerance on `|normal| - 1` accepted by the plane constructors.
pub const UNIT_NORMAL_TOLERANCE: f32 = 1e-5;

/// Oriented plane through `point` with unit `normal`.
///
/// Invariants:
/// - `normal` has unit length (within [`UNIT_NORMAL_TOLERANCE`]). Debug
///   builds assert this in [`Plane::new`] and [`Plane::set`];
///   [`Plane::try_new`] checks it in every build.
/// - The signed distance of a point is positive on the side `normal` points
///   to.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound(
        serialize = "T: lumen_math::Scalar + serde::Serialize",
        deserialize = "T: lumen_math::Scalar + serde::Deserialize<'de>"
    ))
)]
pub struct Plane<T> {
    normal: Vec3<T>,
    point: Vec3<T>,
}

fn is_unit<T: Real>(normal: &Vec3<T>) -> bool {
    (normal.length() - T::ONE).abs() < T::from_f32(UNIT_NORMAL_TOLERANCE)
}

impl<T: Real> Plane<T> {
    /// Plane through `point` with unit `normal`.
    pub fn new(point: Vec3<T>, normal: Vec3<T>) -> Self {
        debug_assert!(is_unit(&normal), "plane normal must be unit length: {normal}");
        Self { normal, point }
    }

    /// Checked [`Plane::new`].
    pub fn try_new(point: Vec3<T>, normal: Vec3<T>) -> Result<Self, MathError> {
        if !is_unit(&normal) {
            let length = normal.length().to_f64();
            tracing::trace!(length, "rejected non-unit plane normal");
            return Err(MathError::NonUnitNormal { length });
        }
        Ok(Self { normal, point })
    }

    /// Replaces point and normal; same contract as [`Plane::new`].
    pub fn set(&mut self, point: Vec3<T>, normal: Vec3<T>) -> &mut Self {
        *self = Self::new(point, normal);
        self
    }

    /// Unit normal.
    pub fn normal(&self) -> Vec3<T> {
        self.normal
    }

    /// Reference point on the plane.
    pub fn point(&self) -> Vec3<T> {
        self.point
    }

    /// Signed distance `dot(normal, p - point)`.
    pub fn distance(&self, p: &Vec3<T>) -> T {
        self.normal.dot(&(*p - self.point))
    }

    /// Ray parameter where `ray` meets the plane.
    ///
    /// Negative values lie behind the ray origin. A ray parallel to the
    /// plane divides by zero and yields ±∞ or NaN; see
    /// [`Plane::try_ray_distance`].
    pub fn ray_distance(&self, ray: &Ray<T>) -> T {
        (self.point - ray.origin).dot(&self.normal) / ray.dir.dot(&self.normal)
    }

    /// [`Plane::ray_distance`], or `None` when the ray runs parallel to the
    /// plane (`|dot(dir, normal)| <= epsilon`).
    pub fn try_ray_distance(&self, ray: &Ray<T>, epsilon: T) -> Option<T> {
        let denom = ray.dir.dot(&self.normal);
        if denom.abs() <= epsilon {
            return None;
        }
        Some((self.point - ray.origin).dot(&self.normal) / denom)
    }
}
