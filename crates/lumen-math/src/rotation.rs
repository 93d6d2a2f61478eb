// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Rotation matrix builders.
//!
//! Angles are radians. Rows below are listed the way they read on paper;
//! storage is column-major like every [`Matrix`].

use crate::matrix::Matrix;
use crate::quat::Quat;
use crate::scalar::Real;
use crate::vector::Vec3;

/// Rotation about +X. Rows `(1,0,0)`, `(0,c,-s)`, `(0,s,c)`.
pub fn rotate_x<T: Real>(angle: T) -> Matrix<T, 4> {
    let (s, c) = angle.sin_cos();
    let (o, i) = (T::ZERO, T::ONE);
    Matrix::from_columns([[i, o, o, o], [o, c, s, o], [o, -s, c, o], [o, o, o, i]])
}

/// Rotation about +Y. Rows `(c,0,s)`, `(0,1,0)`, `(-s,0,c)`.
pub fn rotate_y<T: Real>(angle: T) -> Matrix<T, 4> {
    let (s, c) = angle.sin_cos();
    let (o, i) = (T::ZERO, T::ONE);
    Matrix::from_columns([[c, o, -s, o], [o, i, o, o], [s, o, c, o], [o, o, o, i]])
}

/// Rotation about +Z. Rows `(c,-s,0)`, `(s,c,0)`, `(0,0,1)`.
pub fn rotate_z<T: Real>(angle: T) -> Matrix<T, 4> {
    let (s, c) = angle.sin_cos();
    let (o, i) = (T::ZERO, T::ONE);
    Matrix::from_columns([[c, s, o, o], [-s, c, o, o], [o, o, i, o], [o, o, o, i]])
}

/// 2D affine rotation (3×3, homogeneous).
pub fn rotate_2d<T: Real>(angle: T) -> Matrix<T, 3> {
    let (s, c) = angle.sin_cos();
    let (o, i) = (T::ZERO, T::ONE);
    Matrix::from_columns([[c, s, o], [-s, c, o], [o, o, i]])
}

/// Rotation of `angle` about an arbitrary (nonzero) `axis`.
pub fn rotate_axis<T: Real>(angle: T, axis: &Vec3<T>) -> Matrix<T, 4> {
    Quat::from_angle_axis(angle, axis).to_matrix()
}

/// Shortest-arc rotation taking +X onto the unit vector `dir`.
///
/// Same preconditions as [`Quat::from_direction`].
pub fn rotate_to<T: Real>(dir: &Vec3<T>) -> Matrix<T, 4> {
    Quat::from_direction(dir).to_matrix()
}
