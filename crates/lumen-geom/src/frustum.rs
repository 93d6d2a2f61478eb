// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Six-plane perspective view frustum.
//!
//! The camera looks down `direction` with `up` as its vertical hint. All six
//! plane normals point into the frustum, so a point is inside when every
//! signed distance is non-negative.
//!
//! Planes are stored in a fixed order (near, far, top, bottom, left, right).
//! [`Frustum::contains_sphere`] tests them in that order and stops at the
//! first decisive plane.

use lumen_math::{Quat, Real, Vec3, Vec4};
use tracing::{debug, trace};

use crate::error::GeomError;
use crate::projection::Projection;
use crate::types::plane::Plane;

/// Result of classifying a volume against a frustum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Intersection {
    /// Entirely outside at least one plane.
    Outside,
    /// Entirely inside all planes.
    Inside,
    /// Straddles at least one plane.
    Intersect,
}

/// Names the six frustum planes in storage order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FrustumPlane {
    /// Near clipping plane.
    Near,
    /// Far clipping plane.
    Far,
    /// Upper side plane.
    Top,
    /// Lower side plane.
    Bottom,
    /// Left side plane.
    Left,
    /// Right side plane.
    Right,
}

impl FrustumPlane {
    /// All planes in storage (and test) order.
    pub const ALL: [Self; 6] = [
        Self::Near,
        Self::Far,
        Self::Top,
        Self::Bottom,
        Self::Left,
        Self::Right,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// View frustum for visibility culling.
///
/// Every mutator rebuilds the planes eagerly. [`Frustum::set_position`] and
/// [`Frustum::set_orientation`] skip the rebuild when nothing changed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frustum<T> {
    up: Vec3<T>,
    dir: Vec3<T>,
    origin: Vec3<T>,
    planes: [Plane<T>; 6],
    near: T,
    far: T,
    nh: T,
    nw: T,
}

impl<T: Real> Frustum<T> {
    /// Frustum at the origin looking down `-Z` with `+Y` up.
    ///
    /// The projection is used as given; see [`Frustum::try_new`].
    pub fn new(projection: &Projection<T>) -> Self {
        let placeholder = Plane::new(Vec3::zero(), Vec3::UNIT_Z);
        let mut frustum = Self {
            up: Vec3::UNIT_Y,
            dir: -Vec3::UNIT_Z,
            origin: Vec3::zero(),
            planes: [placeholder; 6],
            near: T::ZERO,
            far: T::ZERO,
            nh: T::ZERO,
            nw: T::ZERO,
        };
        frustum.set_projection(projection);
        frustum
    }

    /// [`Frustum::new`] after validating `projection`.
    pub fn try_new(projection: &Projection<T>) -> Result<Self, GeomError> {
        projection.validate()?;
        Ok(Self::new(projection))
    }

    /// Reconfigures the projection. `fov_y_degrees` is the vertical field of
    /// view in degrees.
    pub fn set(&mut self, fov_y_degrees: T, aspect: T, near: T, far: T) -> &mut Self {
        self.set_projection(&Projection::new(fov_y_degrees, aspect, near, far))
    }

    /// Reconfigures the projection from a [`Projection`] value.
    pub fn set_projection(&mut self, projection: &Projection<T>) -> &mut Self {
        let (nw, nh) = projection.near_half_extents();
        self.near = projection.near;
        self.far = projection.far;
        self.nh = nh;
        self.nw = nw;
        debug!(
            fov_y_degrees = projection.fov_y_degrees.to_f64(),
            aspect = projection.aspect.to_f64(),
            near = projection.near.to_f64(),
            far = projection.far.to_f64(),
            "frustum projection configured"
        );
        self.reset();
        self
    }

    /// Moves the camera origin; planes are rebuilt only when it changes.
    pub fn set_position(&mut self, position: Vec3<T>) -> &mut Self {
        if position != self.origin {
            self.origin = position;
            self.reset();
        }
        self
    }

    /// Orients the camera by rotating the default basis (`+Y` up, `-Z`
    /// forward) with `q`. Planes are rebuilt only when up or direction
    /// change.
    pub fn set_orientation(&mut self, q: &Quat<T>) -> &mut Self {
        let m = q.to_matrix();
        let up = (m * Vec4::new(T::ZERO, T::ONE, T::ZERO, T::ONE))
            .truncate()
            .normalized();
        let dir = (m * Vec4::new(T::ZERO, T::ZERO, -T::ONE, T::ONE))
            .truncate()
            .normalized();
        if up != self.up || dir != self.dir {
            self.up = up;
            self.dir = dir;
            self.reset();
        }
        self
    }

    /// `true` when `p` is on the inner side of all six planes.
    pub fn contains_point(&self, p: &Vec3<T>) -> bool {
        self.planes.iter().all(|plane| plane.distance(p) >= T::ZERO)
    }

    /// Classifies the sphere `(center, radius)`.
    ///
    /// Planes are visited in storage order. The first plane with the center
    /// more than `radius` behind it yields [`Intersection::Outside`]; the
    /// first plane closer than `radius` yields [`Intersection::Intersect`].
    /// Because of the early exit a sphere straddling an earlier plane but
    /// fully outside a later one reports `Intersect`, which is conservative
    /// for culling.
    pub fn contains_sphere(&self, center: &Vec3<T>, radius: T) -> Intersection {
        for plane in &self.planes {
            let d = plane.distance(center);
            if d < -radius {
                return Intersection::Outside;
            }
            if d.abs() < radius {
                return Intersection::Intersect;
            }
        }
        Intersection::Inside
    }

    /// Planes in storage order (near, far, top, bottom, left, right).
    pub fn planes(&self) -> &[Plane<T>; 6] {
        &self.planes
    }

    /// A single plane by name.
    pub fn plane(&self, which: FrustumPlane) -> &Plane<T> {
        &self.planes[which.index()]
    }

    /// Camera position.
    pub fn origin(&self) -> Vec3<T> {
        self.origin
    }

    /// Camera up hint (unit).
    pub fn up(&self) -> Vec3<T> {
        self.up
    }

    /// Viewing direction (unit).
    pub fn direction(&self) -> Vec3<T> {
        self.dir
    }

    /// Near clipping distance.
    pub fn near(&self) -> T {
        self.near
    }

    /// Far clipping distance.
    pub fn far(&self) -> T {
        self.far
    }

    /// Near-plane half-width and half-height, `(nw, nh)`.
    pub fn near_half_extents(&self) -> (T, T) {
        (self.nw, self.nh)
    }

    fn reset(&mut self) {
        // Camera basis: z points backwards, x right, y up.
        let z = -self.dir;
        let x = self.up.cross(&z).normalized();
        let y = z.cross(&x);

        let nc = self.origin - z * self.near;
        let fc = self.origin - z * self.far;

        let top = nc + y * self.nh;
        let bottom = nc - y * self.nh;
        let left = nc - x * self.nw;
        let right = nc + x * self.nw;
        let origin = self.origin;
        let toward = move |p: Vec3<T>| (p - origin).normalized();

        // Cross-product operand order fixes each side normal to point inward.
        self.planes = [
            Plane::new(nc, -z),
            Plane::new(fc, z),
            Plane::new(top, toward(top).cross(&x)),
            Plane::new(bottom, x.cross(&toward(bottom))),
            Plane::new(left, toward(left).cross(&y)),
            Plane::new(right, y.cross(&toward(right))),
        ];
        trace!(origin = %self.origin, direction = %self.dir, "frustum planes rebuilt");
    }
}

impl<T: Real> Default for Frustum<T> {
    fn default() -> Self {
        Self::new(&Projection::default())
    }
}
