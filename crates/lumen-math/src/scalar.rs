// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Scalar abstraction for the fixed-size vector and matrix types.
//!
//! Two layers:
//! - [`Scalar`]: ring-like arithmetic shared by integer and floating types
//!   (`i32`, `f32`, `f64`). Enough for addition, products, dot products,
//!   determinants and exact comparisons.
//! - [`Real`]: floating-point types with square roots and trigonometry
//!   (`f32`, `f64`). Required for lengths, normalization, inversion and every
//!   rotation conversion.
//!
//! The matrix×vector accumulation kernel lives on [`Scalar::mul_columns`] so
//! a concrete scalar type can swap in a wider implementation without the
//! generic matrix code knowing about it. `f32` does this for 4×4 matrices.

use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Arithmetic required by [`crate::Vector`] and [`crate::Matrix`].
pub trait Scalar:
    Copy
    + fmt::Debug
    + fmt::Display
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
{
    /// Additive identity.
    const ZERO: Self;

    /// Multiplicative identity.
    const ONE: Self;

    /// Absolute value.
    fn abs(self) -> Self;

    /// Widens to `f64` for diagnostics, error payloads and conversions.
    fn to_f64(self) -> f64;

    /// Narrows from `f64`, truncating toward zero for integers (saturating
    /// at the type's range, NaN maps to 0).
    fn from_f64(value: f64) -> Self;

    /// Linear combination of `columns` weighted by `weights`.
    ///
    /// Output component `i` is `Σ_k columns[k][i] * weights[k]`, accumulated
    /// from zero in increasing `k`. This is the single kernel behind every
    /// matrix×matrix and matrix×vector product. Overrides must produce the
    /// same bits as [`accumulate_columns`].
    #[inline]
    fn mul_columns<const N: usize>(columns: &[[Self; N]; N], weights: &[Self; N]) -> [Self; N] {
        accumulate_columns(columns, weights)
    }
}

/// Floating-point scalars.
pub trait Real: Scalar + Neg<Output = Self> {
    /// Tolerance used by the `approx_eq` helpers when callers have no better
    /// bound of their own.
    const DEFAULT_EPSILON: Self;

    /// Square root.
    fn sqrt(self) -> Self;
    /// Sine (radians).
    fn sin(self) -> Self;
    /// Cosine (radians).
    fn cos(self) -> Self;
    /// Sine and cosine (radians).
    fn sin_cos(self) -> (Self, Self);
    /// Tangent (radians).
    fn tan(self) -> Self;
    /// Arc cosine; NaN outside `[-1, 1]`.
    fn acos(self) -> Self;
    /// Arc sine; NaN outside `[-1, 1]`.
    fn asin(self) -> Self;
    /// Four-quadrant arc tangent of `self / other`.
    fn atan2(self, other: Self) -> Self;
    /// Degrees to radians.
    fn to_radians(self) -> Self;
    /// `true` unless NaN or ±∞.
    fn is_finite(self) -> bool;
    /// Converts a literal into this type.
    fn from_f32(value: f32) -> Self;
}

/// Generic column accumulation; see [`Scalar::mul_columns`].
#[inline]
pub fn accumulate_columns<T: Scalar, const N: usize>(
    columns: &[[T; N]; N],
    weights: &[T; N],
) -> [T; N] {
    let mut out = [T::ZERO; N];
    for (column, &weight) in columns.iter().zip(weights) {
        for (acc, &value) in out.iter_mut().zip(column) {
            *acc += value * weight;
        }
    }
    out
}

impl Scalar for i32 {
    const ZERO: Self = 0;
    const ONE: Self = 1;

    fn abs(self) -> Self {
        i32::abs(self)
    }

    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn from_f64(value: f64) -> Self {
        value as i32
    }
}

impl Scalar for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    fn abs(self) -> Self {
        f32::abs(self)
    }

    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn mul_columns<const N: usize>(columns: &[[Self; N]; N], weights: &[Self; N]) -> [Self; N] {
        crate::simd::mul_columns_f32(columns, weights)
    }
}

impl Scalar for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    fn abs(self) -> Self {
        f64::abs(self)
    }

    fn to_f64(self) -> f64 {
        self
    }

    fn from_f64(value: f64) -> Self {
        value
    }
}

impl Real for f32 {
    const DEFAULT_EPSILON: Self = 1e-6;

    fn sqrt(self) -> Self {
        f32::sqrt(self)
    }
    fn sin(self) -> Self {
        f32::sin(self)
    }
    fn cos(self) -> Self {
        f32::cos(self)
    }
    fn sin_cos(self) -> (Self, Self) {
        f32::sin_cos(self)
    }
    fn tan(self) -> Self {
        f32::tan(self)
    }
    fn acos(self) -> Self {
        f32::acos(self)
    }
    fn asin(self) -> Self {
        f32::asin(self)
    }
    fn atan2(self, other: Self) -> Self {
        f32::atan2(self, other)
    }
    fn to_radians(self) -> Self {
        f32::to_radians(self)
    }
    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }
    fn from_f32(value: f32) -> Self {
        value
    }
}

impl Real for f64 {
    const DEFAULT_EPSILON: Self = 1e-12;

    fn sqrt(self) -> Self {
        f64::sqrt(self)
    }
    fn sin(self) -> Self {
        f64::sin(self)
    }
    fn cos(self) -> Self {
        f64::cos(self)
    }
    fn sin_cos(self) -> (Self, Self) {
        f64::sin_cos(self)
    }
    fn tan(self) -> Self {
        f64::tan(self)
    }
    fn acos(self) -> Self {
        f64::acos(self)
    }
    fn asin(self) -> Self {
        f64::asin(self)
    }
    fn atan2(self, other: Self) -> Self {
        f64::atan2(self, other)
    }
    fn to_radians(self) -> Self {
        f64::to_radians(self)
    }
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
    fn from_f32(value: f32) -> Self {
        f64::from(value)
    }
}

/// Clamps `value` into `[lo, hi]`.
///
/// Unlike `f32::clamp` this never panics on an inverted range: values below
/// `lo` map to `lo` first.
pub fn clamp<T: PartialOrd>(value: T, lo: T, hi: T) -> T {
    if value < lo {
        lo
    } else if value > hi {
        hi
    } else {
        value
    }
}

/// Linear interpolation `a + (b - a) * t`.
pub fn lerp<T: Scalar>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Sign of `value` as `-1`, `0` or `1`.
pub fn sgn<T: Scalar>(value: T) -> T {
    if value > T::ZERO {
        T::ONE
    } else if value < T::ZERO {
        T::ZERO - T::ONE
    } else {
        T::ZERO
    }
}

/// Converts degrees to radians.
pub fn deg_to_rad<T: Real>(degrees: T) -> T {
    degrees.to_radians()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_handles_both_bounds() {
        assert_eq!(clamp(5, 0, 3), 3);
        assert_eq!(clamp(-1, 0, 3), 0);
        assert_eq!(clamp(2.5_f32, 0.0, 3.0), 2.5);
    }

    #[test]
    fn sgn_covers_zero_and_signs() {
        assert_eq!(sgn(-4), -1);
        assert_eq!(sgn(0), 0);
        assert_eq!(sgn(9.0_f64), 1.0);
    }

    #[test]
    fn accumulate_columns_is_a_linear_combination() {
        let cols = [[1, 2], [3, 4]];
        assert_eq!(accumulate_columns(&cols, &[5, 6]), [23, 34]);
    }
}
