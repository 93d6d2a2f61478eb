// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::MathError;
use crate::matrix::Matrix;
use crate::scalar::Real;
use crate::vector::Vec3;

/// Quaternion stored as scalar part `w` plus vector part `v`.
///
/// * All angles are expressed in radians.
/// * Unit length is intended for rotations but never enforced; conversions
///   do not normalize implicitly.
/// * [`Default`] is the identity rotation `(1, 0, 0, 0)`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound(
        serialize = "T: crate::Scalar + serde::Serialize",
        deserialize = "T: crate::Scalar + serde::Deserialize<'de>"
    ))
)]
pub struct Quat<T> {
    w: T,
    v: Vec3<T>,
}

/// `f32` quaternion.
pub type Quatf = Quat<f32>;
/// `f64` quaternion.
pub type Quatd = Quat<f64>;

impl<T: Real> Quat<T> {
    /// Creates a quaternion from scalar and vector parts.
    pub const fn new(w: T, v: Vec3<T>) -> Self {
        Self { w, v }
    }

    /// Identity rotation.
    pub fn identity() -> Self {
        Self::new(T::ONE, Vec3::zero())
    }

    /// Resets to the identity rotation.
    pub fn load_identity(&mut self) -> &mut Self {
        *self = Self::identity();
        self
    }

    /// Scalar part.
    pub fn w(&self) -> T {
        self.w
    }

    /// Vector part.
    pub fn v(&self) -> Vec3<T> {
        self.v
    }

    /// Hamilton product `self * other`.
    ///
    /// Non-commutative. For unit operands the result rotates by `other`
    /// first and then by `self` when applied to a vector.
    pub fn multiply(&self, other: &Self) -> Self {
        Self {
            w: self.w * other.w - self.v.dot(&other.v),
            v: other.v * self.w + self.v * other.w + self.v.cross(&other.v),
        }
    }

    /// Negates the vector part, inverting a unit rotation.
    pub fn conjugate(&self) -> Self {
        Self::new(self.w, -self.v)
    }

    /// Sum of squared components.
    pub fn length_squared(&self) -> T {
        self.w * self.w + self.v.length_squared()
    }

    /// Euclidean norm over all four components.
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Returns `self / |self|`.
    ///
    /// Precondition: nonzero length; otherwise the components become NaN.
    pub fn normalized(&self) -> Self {
        let inv = T::ONE / self.length();
        Self::new(self.w * inv, self.v * inv)
    }

    /// `true` when all four components differ by at most `epsilon`.
    pub fn approx_eq(&self, other: &Self, epsilon: T) -> bool {
        (self.w - other.w).abs() <= epsilon && self.v.approx_eq(&other.v, epsilon)
    }

    /// Homogeneous 4×4 rotation matrix.
    ///
    /// Assumes a unit quaternion; a non-unit input yields a matrix that also
    /// scales.
    pub fn to_matrix(&self) -> Matrix<T, 4> {
        let (x, y, z, w) = (self.v.x(), self.v.y(), self.v.z(), self.w);
        let v2 = self.v + self.v;
        let (xx, yy, zz) = (x * v2.x(), y * v2.y(), z * v2.z());
        let (xy, xz, yz) = (x * v2.y(), x * v2.z(), y * v2.z());
        let (wx, wy, wz) = (w * v2.x(), w * v2.y(), w * v2.z());
        let one = T::ONE;
        let zero = T::ZERO;
        Matrix::from_columns([
            [one - (yy + zz), xy + wz, xz - wy, zero],
            [xy - wz, one - (xx + zz), yz + wx, zero],
            [xz + wy, yz - wx, one - (xx + yy), zero],
            [zero, zero, zero, one],
        ])
    }

    /// Rotation `qz * qy * qx` from Euler angles about X, Y and Z.
    pub fn from_euler(rx: T, ry: T, rz: T) -> Self {
        let half = T::from_f32(0.5);
        let (sx, cx) = (rx * half).sin_cos();
        let (sy, cy) = (ry * half).sin_cos();
        let (sz, cz) = (rz * half).sin_cos();
        Self::new(
            cz * cy * cx + sz * sy * sx,
            Vec3::new(
                cz * cy * sx - sz * sy * cx,
                cz * sy * cx + sz * cy * sx,
                sz * cy * cx - cz * sy * sx,
            ),
        )
    }

    /// [`Quat::from_euler`] taking `(rx, ry, rz)` as a vector.
    pub fn from_euler_vec(angles: &Vec3<T>) -> Self {
        Self::from_euler(angles.x(), angles.y(), angles.z())
    }

    /// Euler angles `(rx, ry, rz)` inverting [`Quat::from_euler`].
    ///
    /// Near `ry = ±π/2` (gimbal lock) X and Z are not separable and the
    /// split between them is arbitrary; `ry` itself is still recovered.
    pub fn to_euler(&self) -> Vec3<T> {
        let (x, y, z, w) = (self.v.x(), self.v.y(), self.v.z(), self.w);
        let (xx, yy, zz, ww) = (x * x, y * y, z * z, w * w);
        let two = T::from_f32(2.0);
        Vec3::new(
            (two * (y * z + x * w)).atan2(-xx - yy + zz + ww),
            crate::scalar::clamp(-two * (x * z - y * w), -T::ONE, T::ONE).asin(),
            (two * (x * y + z * w)).atan2(xx - yy - zz + ww),
        )
    }

    /// Rotation of `angle` radians about `axis` (normalized here).
    ///
    /// Precondition: nonzero axis.
    pub fn from_angle_axis(angle: T, axis: &Vec3<T>) -> Self {
        let (s, c) = (angle * T::from_f32(0.5)).sin_cos();
        Self::new(c, axis.normalized() * s)
    }

    /// Returns `(angle, axis)`.
    ///
    /// Precondition: not the identity (`w != ±1`), where the axis is
    /// undefined and the result contains NaN/∞. Assumes a unit quaternion.
    pub fn to_angle_axis(&self) -> (T, Vec3<T>) {
        let half = self.w.acos();
        (half + half, self.v * (T::ONE / half.sin()))
    }

    /// Checked [`Quat::to_angle_axis`].
    pub fn try_to_angle_axis(&self) -> Result<(T, Vec3<T>), MathError> {
        let half = self.w.acos();
        let s = half.sin();
        if !s.is_finite() || s.abs() <= T::DEFAULT_EPSILON {
            tracing::trace!(w = self.w.to_f64(), "angle-axis conversion rejected");
            return Err(MathError::DegenerateRotation);
        }
        Ok((half + half, self.v * (T::ONE / s)))
    }

    /// Shortest-arc rotation taking `+X` onto the unit vector `dir`.
    ///
    /// Precondition: `dir` is neither parallel nor anti-parallel to `+X`,
    /// where the rotation axis vanishes.
    pub fn from_direction(dir: &Vec3<T>) -> Self {
        let x = Vec3::<T>::UNIT_X;
        Self::from_angle_axis(x.dot(dir).acos(), &x.cross(dir))
    }

    /// Checked [`Quat::from_direction`].
    pub fn try_from_direction(dir: &Vec3<T>) -> Result<Self, MathError> {
        let x = Vec3::<T>::UNIT_X;
        let axis = x.cross(dir);
        if axis.length() <= T::DEFAULT_EPSILON {
            tracing::trace!(%dir, "direction parallel to +X");
            return Err(MathError::DegenerateDirection);
        }
        Ok(Self::from_angle_axis(
            crate::scalar::clamp(x.dot(dir), -T::ONE, T::ONE).acos(),
            &axis,
        ))
    }
}

impl<T: Real> Default for Quat<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Real> Add for Quat<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.w + rhs.w, self.v + rhs.v)
    }
}

impl<T: Real> Sub for Quat<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.w - rhs.w, self.v - rhs.v)
    }
}

impl<T: Real> Mul for Quat<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl<T: Real> Mul<T> for Quat<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        Self::new(self.w * rhs, self.v * rhs)
    }
}

impl<T: Real> Neg for Quat<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.w, -self.v)
    }
}

impl<T: Real> AddAssign for Quat<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Real> SubAssign for Quat<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Real> MulAssign for Quat<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl<T: fmt::Display> fmt::Display for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.w, self.v)
    }
}
