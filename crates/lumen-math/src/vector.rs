// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::error::MathError;
use crate::scalar::{Real, Scalar};

/// Fixed-dimension numeric tuple.
///
/// * `N` is fixed at compile time; the crate uses 2, 3 and 4 (see the
///   `Vec*` aliases).
/// * Value type: copies are independent and equality is strict
///   component-wise `==` (no tolerance; use [`Vector::approx_eq`] when
///   accumulated rounding matters).
/// * Arithmetic operators are pure. The assigning forms (`+=`, ...) and
///   [`Vector::normalize`], [`Vector::assign`], [`Vector::clamp`] mutate the
///   receiver; the latter three return it for chaining.
///
/// # Examples
/// ```
/// use lumen_math::Vec3f;
/// let a = Vec3f::new(1.0, 2.0, 2.0);
/// assert_eq!(a.length(), 3.0);
/// assert_eq!(a.dot(&Vec3f::new(2.0, 4.0, 4.0)), 18.0);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vector<T, const N: usize> {
    data: [T; N],
}

/// Two-component vector.
pub type Vec2<T> = Vector<T, 2>;
/// Three-component vector.
pub type Vec3<T> = Vector<T, 3>;
/// Four-component (homogeneous) vector.
pub type Vec4<T> = Vector<T, 4>;

/// `f32` 2-vector.
pub type Vec2f = Vec2<f32>;
/// `f32` 3-vector.
pub type Vec3f = Vec3<f32>;
/// `f32` 4-vector.
pub type Vec4f = Vec4<f32>;
/// `i32` 2-vector (pixel and grid coordinates).
pub type Vec2i = Vec2<i32>;
/// `f64` 2-vector.
pub type Vec2d = Vec2<f64>;
/// `f64` 3-vector.
pub type Vec3d = Vec3<f64>;
/// `f64` 4-vector.
pub type Vec4d = Vec4<f64>;

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Wraps an array of components.
    pub const fn from_array(data: [T; N]) -> Self {
        Self { data }
    }

    /// Vector with every component set to `value`.
    pub fn splat(value: T) -> Self {
        Self { data: [value; N] }
    }

    /// All-zero vector.
    pub fn zero() -> Self {
        Self::splat(T::ZERO)
    }

    /// Converts the leading `N` components of `other` into this scalar type.
    ///
    /// Precondition: `Z >= N` (debug-asserted); missing components become
    /// zero in release builds. Float to integer truncates toward zero.
    ///
    /// # Examples
    /// ```
    /// use lumen_math::{Vec2f, Vec2i, Vec3d, Vec4d};
    /// assert_eq!(Vec2f::cast_from(&Vec2i::new(3, -7)), Vec2f::new(3.0, -7.0));
    /// let h = Vec4d::new(1.0, 2.0, 3.0, 1.0);
    /// assert_eq!(Vec3d::cast_from(&h), Vec3d::new(1.0, 2.0, 3.0));
    /// ```
    pub fn cast_from<U: Scalar, const Z: usize>(other: &Vector<U, Z>) -> Self {
        debug_assert!(Z >= N, "cannot narrow a {Z}-vector into a {N}-vector");
        Self {
            data: core::array::from_fn(|i| {
                other
                    .data
                    .get(i)
                    .map_or(T::ZERO, |&value| T::from_f64(value.to_f64()))
            }),
        }
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [T; N] {
        self.data
    }

    /// Borrows the components as an array.
    pub fn as_array(&self) -> &[T; N] {
        &self.data
    }

    /// Raw component storage.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable raw component storage.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Assigns `value` to every component.
    pub fn assign(&mut self, value: T) -> &mut Self {
        self.data = [value; N];
        self
    }

    /// Sum of component-wise products.
    pub fn dot(&self, other: &Self) -> T {
        self.data
            .iter()
            .zip(&other.data)
            .fold(T::ZERO, |sum, (&a, &b)| sum + a * b)
    }

    /// Squared euclidean norm.
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    /// Sum of absolute components (L1 norm).
    pub fn manhattan_norm(&self) -> T {
        self.data.iter().fold(T::ZERO, |sum, &v| sum + v.abs())
    }

    /// Applies `f` to every component.
    pub fn map(&self, f: impl Fn(T) -> T) -> Self {
        Self { data: self.data.map(f) }
    }

    /// Clamps every component into `[lo[i], hi[i]]` in place.
    pub fn clamp(&mut self, lo: &Self, hi: &Self) -> &mut Self {
        for ((v, &a), &b) in self.data.iter_mut().zip(&lo.data).zip(&hi.data) {
            *v = crate::scalar::clamp(*v, a, b);
        }
        self
    }

    /// Linear interpolation `self + (other - self) * t`.
    pub fn lerp(&self, other: &Self, t: T) -> Self {
        *self + (*other - *self) * t
    }

    fn zip_with(self, other: Self, f: impl Fn(T, T) -> T) -> Self {
        let mut data = self.data;
        for (a, &b) in data.iter_mut().zip(&other.data) {
            *a = f(*a, b);
        }
        Self { data }
    }
}

impl<T: Real, const N: usize> Vector<T, N> {
    /// Euclidean norm.
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Returns this vector scaled to unit length.
    ///
    /// Precondition: nonzero length. A zero vector divides by zero and yields
    /// NaN components; use [`Vector::try_normalized`] when the input is not
    /// known to be valid.
    pub fn normalized(&self) -> Self {
        *self / self.length()
    }

    /// Scales this vector to unit length in place.
    ///
    /// Same precondition as [`Vector::normalized`].
    pub fn normalize(&mut self) -> &mut Self {
        *self /= self.length();
        self
    }

    /// Checked [`Vector::normalized`].
    pub fn try_normalized(&self) -> Result<Self, MathError> {
        let len = self.length();
        if len == T::ZERO || !len.is_finite() {
            tracing::trace!(?self, "refusing to normalize degenerate vector");
            return Err(MathError::ZeroLength);
        }
        Ok(*self / len)
    }

    /// Euclidean distance between two points.
    pub fn distance(&self, other: &Self) -> T {
        (*self - *other).length()
    }

    /// `true` when every component differs by at most `epsilon`.
    pub fn approx_eq(&self, other: &Self, epsilon: T) -> bool {
        self.data
            .iter()
            .zip(&other.data)
            .all(|(&a, &b)| (a - b).abs() <= epsilon)
    }
}

impl<T: Scalar> Vector<T, 2> {
    /// Creates a 2-vector.
    pub const fn new(x: T, y: T) -> Self {
        Self { data: [x, y] }
    }

    /// First component.
    pub fn x(&self) -> T {
        self.data[0]
    }

    /// Second component.
    pub fn y(&self) -> T {
        self.data[1]
    }

    /// Appends a third component.
    pub fn extend(self, z: T) -> Vector<T, 3> {
        Vector::<T, 3>::new(self.data[0], self.data[1], z)
    }
}

impl<T: Scalar> Vector<T, 3> {
    /// Unit vector along +X.
    pub const UNIT_X: Self = Self::new(T::ONE, T::ZERO, T::ZERO);
    /// Unit vector along +Y.
    pub const UNIT_Y: Self = Self::new(T::ZERO, T::ONE, T::ZERO);
    /// Unit vector along +Z.
    pub const UNIT_Z: Self = Self::new(T::ZERO, T::ZERO, T::ONE);

    /// Creates a 3-vector.
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { data: [x, y, z] }
    }

    /// First component.
    pub fn x(&self) -> T {
        self.data[0]
    }

    /// Second component.
    pub fn y(&self) -> T {
        self.data[1]
    }

    /// Third component.
    pub fn z(&self) -> T {
        self.data[2]
    }

    /// Cross product `self × other` (right-handed).
    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Appends a fourth (homogeneous) component.
    pub fn extend(self, w: T) -> Vector<T, 4> {
        Vector::<T, 4>::new(self.data[0], self.data[1], self.data[2], w)
    }

    /// Drops the third component.
    pub fn truncate(self) -> Vector<T, 2> {
        Vector::<T, 2>::new(self.data[0], self.data[1])
    }
}

impl<T: Scalar> Vector<T, 4> {
    /// Creates a 4-vector.
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// First component.
    pub fn x(&self) -> T {
        self.data[0]
    }

    /// Second component.
    pub fn y(&self) -> T {
        self.data[1]
    }

    /// Third component.
    pub fn z(&self) -> T {
        self.data[2]
    }

    /// Fourth (homogeneous) component.
    pub fn w(&self) -> T {
        self.data[3]
    }

    /// Drops `w`, keeping `(x, y, z)`. No perspective divide.
    pub fn truncate(self) -> Vector<T, 3> {
        Vector::<T, 3>::new(self.data[0], self.data[1], self.data[2])
    }
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(data: [T; N]) -> Self {
        Self { data }
    }
}

impl<T: Scalar, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(v: Vector<T, N>) -> Self {
        v.data
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;
    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

impl<T: Scalar, const N: usize> Add for Vector<T, N> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl<T: Scalar, const N: usize> Sub for Vector<T, N> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a - b)
    }
}

/// Component-wise (Hadamard) product.
impl<T: Scalar, const N: usize> Mul for Vector<T, N> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a * b)
    }
}

/// Component-wise division.
impl<T: Scalar, const N: usize> Div for Vector<T, N> {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a / b)
    }
}

impl<T: Scalar, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        self.map(|a| a * rhs)
    }
}

impl<T: Scalar, const N: usize> Div<T> for Vector<T, N> {
    type Output = Self;
    fn div(self, rhs: T) -> Self {
        self.map(|a| a / rhs)
    }
}

impl<T: Scalar + Neg<Output = T>, const N: usize> Neg for Vector<T, N> {
    type Output = Self;
    fn neg(self) -> Self {
        self.map(|a| -a)
    }
}

impl<T: Scalar, const N: usize> AddAssign for Vector<T, N> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar, const N: usize> SubAssign for Vector<T, N> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar, const N: usize> MulAssign for Vector<T, N> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Scalar, const N: usize> DivAssign for Vector<T, N> {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<T: Scalar, const N: usize> MulAssign<T> for Vector<T, N> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Scalar, const N: usize> DivAssign<T> for Vector<T, N> {
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

impl<const N: usize> Mul<Vector<f32, N>> for f32 {
    type Output = Vector<f32, N>;
    fn mul(self, rhs: Vector<f32, N>) -> Vector<f32, N> {
        rhs * self
    }
}

impl<const N: usize> Mul<Vector<f64, N>> for f64 {
    type Output = Vector<f64, N>;
    fn mul(self, rhs: Vector<f64, N>) -> Vector<f64, N> {
        rhs * self
    }
}

impl<const N: usize> Mul<Vector<i32, N>> for i32 {
    type Output = Vector<i32, N>;
    fn mul(self, rhs: Vector<i32, N>) -> Vector<i32, N> {
        rhs * self
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, v) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v}")?;
        }
        f.write_str(")")
    }
}

#[cfg(feature = "serde")]
impl<T: Scalar + serde::Serialize, const N: usize> serde::Serialize for Vector<T, N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        crate::serde_array::serialize(&self.data, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Scalar + serde::Deserialize<'de>, const N: usize> serde::Deserialize<'de>
    for Vector<T, N>
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        crate::serde_array::deserialize(deserializer, T::ZERO).map(Self::from_array)
    }
}
