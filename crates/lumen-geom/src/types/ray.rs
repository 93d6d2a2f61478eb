// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;

use lumen_math::{Real, Vec3};

/// Half-line starting at `origin` and extending along `dir`.
///
/// `dir` need not be unit length; [`Ray::at`] and plane ray distances are
/// measured in multiples of it.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound(
        serialize = "T: lumen_math::Scalar + serde::Serialize",
        deserialize = "T: lumen_math::Scalar + serde::Deserialize<'de>"
    ))
)]
pub struct Ray<T> {
    /// Start point.
    pub origin: Vec3<T>,
    /// Direction of travel.
    pub dir: Vec3<T>,
}

impl<T: Real> Ray<T> {
    /// Creates a ray.
    pub fn new(origin: Vec3<T>, dir: Vec3<T>) -> Self {
        Self { origin, dir }
    }

    /// Point `origin + dir * t`.
    pub fn at(&self, t: T) -> Vec3<T> {
        self.origin + self.dir * t
    }
}

impl<T: fmt::Display> fmt::Display for Ray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ray {{{}, {}}}", self.origin, self.dir)
    }
}
