// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use lumen_math::Real;

use crate::error::GeomError;

/// Perspective projection parameters for a [`crate::Frustum`].
///
/// The field of view is vertical and in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Projection<T> {
    /// Vertical field of view in degrees, in `(0, 180)`.
    pub fov_y_degrees: T,
    /// Width over height of the near plane.
    pub aspect: T,
    /// Distance to the near clipping plane (> 0).
    pub near: T,
    /// Distance to the far clipping plane (> `near`).
    pub far: T,
}

impl<T: Real> Projection<T> {
    /// Creates a projection without validating it.
    pub fn new(fov_y_degrees: T, aspect: T, near: T, far: T) -> Self {
        Self {
            fov_y_degrees,
            aspect,
            near,
            far,
        }
    }

    /// Checks that every parameter is finite and in range.
    pub fn validate(&self) -> Result<(), GeomError> {
        let all_finite = [self.fov_y_degrees, self.aspect, self.near, self.far]
            .iter()
            .all(|v| v.is_finite());
        if !all_finite {
            return Err(GeomError::InvalidProjection("parameters must be finite"));
        }
        if self.fov_y_degrees <= T::ZERO || self.fov_y_degrees >= T::from_f32(180.0) {
            return Err(GeomError::InvalidProjection(
                "field of view must be in (0, 180) degrees",
            ));
        }
        if self.aspect <= T::ZERO {
            return Err(GeomError::InvalidProjection("aspect ratio must be positive"));
        }
        if self.near <= T::ZERO {
            return Err(GeomError::InvalidProjection("near distance must be positive"));
        }
        if self.far <= self.near {
            return Err(GeomError::InvalidProjection(
                "far distance must exceed near distance",
            ));
        }
        Ok(())
    }

    /// Half-width and half-height of the near plane, `(nw, nh)`.
    pub fn near_half_extents(&self) -> (T, T) {
        let half_fov = self.fov_y_degrees.to_radians() * T::from_f32(0.5);
        let nh = half_fov.tan() * self.near;
        (nh * self.aspect, nh)
    }
}

impl<T: Real> Default for Projection<T> {
    fn default() -> Self {
        Self::new(
            T::from_f32(45.0),
            T::ONE,
            T::ONE,
            T::from_f32(100.0),
        )
    }
}
