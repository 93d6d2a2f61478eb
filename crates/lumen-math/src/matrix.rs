// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Index, IndexMut, Mul, MulAssign};

use crate::error::MathError;
use crate::scalar::{Real, Scalar};
use crate::vector::{Vec3, Vector};

/// Square N×N matrix stored as N columns of N scalars (column-major).
///
/// - `m[j][i]` addresses column `j`, row `i`, matching GPU upload layout.
/// - For `N = 4` (and `N = 3` in 2D) the last column carries the affine
///   translation; the last row stays `(0, …, 0, 1)` for affine transforms.
/// - Every constructor fills all entries; there is no uninitialized state.
///
/// Products use a single kernel: output column `j` is the linear combination
/// of the left matrix's columns weighted by the right operand's column `j`
/// (or by the vector's components). See [`Scalar::mul_columns`]; `f32` 4×4
/// products take a 4-wide SIMD path with identical results.
///
/// # Precision
/// [`Matrix::is_identity`], [`Matrix::is_scale`] and `==` are exact. After a
/// chain of floating-point products they can report `false` for matrices that
/// are identity up to rounding; compare with [`Matrix::approx_eq`] there.
///
/// # Examples
/// ```
/// use lumen_math::{Matrix4f, Vec4f};
/// let s = Matrix4f::scale(1.0, 2.0, 3.0);
/// assert_eq!(s * Vec4f::new(2.0, 2.0, 2.0, 1.0), Vec4f::new(2.0, 4.0, 6.0, 1.0));
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix<T, const N: usize> {
    columns: [[T; N]; N],
}

/// `f32` 2×2 matrix.
pub type Matrix2f = Matrix<f32, 2>;
/// `f32` 3×3 matrix (linear 3D or affine 2D).
pub type Matrix3f = Matrix<f32, 3>;
/// `f32` 4×4 matrix (affine / projective 3D).
pub type Matrix4f = Matrix<f32, 4>;
/// `f64` 2×2 matrix.
pub type Matrix2d = Matrix<f64, 2>;
/// `f64` 3×3 matrix.
pub type Matrix3d = Matrix<f64, 3>;
/// `f64` 4×4 matrix.
pub type Matrix4d = Matrix<f64, 4>;

impl<T: Scalar, const N: usize> Matrix<T, N> {
    /// Builds a matrix from column arrays.
    pub const fn from_columns(columns: [[T; N]; N]) -> Self {
        Self { columns }
    }

    /// All-zero matrix.
    pub fn zero() -> Self {
        Self { columns: [[T::ZERO; N]; N] }
    }

    /// Identity matrix.
    pub fn identity() -> Self {
        let mut m = Self::zero();
        m.load_identity();
        m
    }

    /// Copies the leading N×N block of a larger matrix (e.g. the linear part
    /// of a 4×4 affine transform).
    ///
    /// Requires `N <= M`.
    pub fn from_upper_left<const M: usize>(src: &Matrix<T, M>) -> Self {
        debug_assert!(N <= M, "cannot take a {N}x{N} block of a {M}x{M} matrix");
        let mut out = Self::zero();
        for (dst, col) in out.columns.iter_mut().zip(&src.columns) {
            dst.copy_from_slice(&col[..N]);
        }
        out
    }

    /// Column `j` as a vector.
    pub fn column(&self, j: usize) -> Vector<T, N> {
        Vector::from_array(self.columns[j])
    }

    /// Row `i` as a vector.
    pub fn row(&self, i: usize) -> Vector<T, N> {
        Vector::from_array(self.columns.map(|col| col[i]))
    }

    /// Replaces column `j`.
    pub fn set_column(&mut self, j: usize, column: Vector<T, N>) -> &mut Self {
        self.columns[j] = column.to_array();
        self
    }

    /// Column arrays.
    pub fn columns(&self) -> &[[T; N]; N] {
        &self.columns
    }

    /// Column-major view of all N² entries.
    pub fn as_slice(&self) -> &[T] {
        self.columns.as_flattened()
    }

    /// Sets every entry to zero.
    pub fn load_zero(&mut self) -> &mut Self {
        self.columns = [[T::ZERO; N]; N];
        self
    }

    /// Overwrites this matrix with the identity.
    pub fn load_identity(&mut self) -> &mut Self {
        self.load_zero();
        for (j, col) in self.columns.iter_mut().enumerate() {
            col[j] = T::ONE;
        }
        self
    }

    /// Transposes in place.
    pub fn transpose(&mut self) -> &mut Self {
        for j in 0..N {
            for i in (j + 1)..N {
                let tmp = self.columns[j][i];
                self.columns[j][i] = self.columns[i][j];
                self.columns[i][j] = tmp;
            }
        }
        self
    }

    /// Returns the transpose.
    pub fn transposed(&self) -> Self {
        let mut m = *self;
        m.transpose();
        m
    }

    /// Writes `sx, sy` onto the first two diagonal entries.
    ///
    /// Other entries are left untouched; start from
    /// [`Matrix::load_identity`] when building a fresh 2D affine transform.
    pub fn set_scale_2d(&mut self, sx: T, sy: T) -> &mut Self {
        self.columns[0][0] = sx;
        self.columns[1][1] = sy;
        self
    }

    /// Writes `tx, ty` into rows 0 and 1 of the last column.
    ///
    /// Other entries are left untouched.
    pub fn set_translate_2d(&mut self, tx: T, ty: T) -> &mut Self {
        self.columns[N - 1][0] = tx;
        self.columns[N - 1][1] = ty;
        self
    }

    /// Writes `sx, sy, sz` onto the first three diagonal entries (`N >= 3`).
    ///
    /// Other entries are left untouched; start from
    /// [`Matrix::load_identity`] when building a fresh 3D affine transform.
    pub fn set_scale(&mut self, sx: T, sy: T, sz: T) -> &mut Self {
        self.columns[0][0] = sx;
        self.columns[1][1] = sy;
        self.columns[2][2] = sz;
        self
    }

    /// Writes `tx, ty, tz` into rows 0..3 of the last column (`N >= 4` for a
    /// meaningful affine transform).
    pub fn set_translate(&mut self, tx: T, ty: T, tz: T) -> &mut Self {
        self.columns[N - 1][0] = tx;
        self.columns[N - 1][1] = ty;
        self.columns[N - 1][2] = tz;
        self
    }

    /// Exact test against the identity.
    pub fn is_identity(&self) -> bool {
        self.columns.iter().enumerate().all(|(j, col)| {
            col.iter()
                .enumerate()
                .all(|(i, &v)| v == if i == j { T::ONE } else { T::ZERO })
        })
    }

    /// Exact test for a pure diagonal (scale) matrix.
    pub fn is_scale(&self) -> bool {
        self.columns.iter().enumerate().all(|(j, col)| {
            col.iter()
                .enumerate()
                .all(|(i, &v)| i == j || v == T::ZERO)
        })
    }

    /// Matrix × vector.
    pub fn mul_vector(&self, v: &Vector<T, N>) -> Vector<T, N> {
        Vector::from_array(T::mul_columns(&self.columns, v.as_array()))
    }

    /// Matrix product `self * rhs`.
    pub fn multiply(&self, rhs: &Self) -> Self {
        Self {
            columns: rhs.columns.map(|col| T::mul_columns(&self.columns, &col)),
        }
    }

    /// Replaces `self` with `lhs * self`.
    ///
    /// Useful when accumulating transforms that apply after the current one.
    /// The `*=` operator composes the other way (`self = self * rhs`).
    pub fn pre_multiply(&mut self, lhs: &Self) -> &mut Self {
        *self = lhs.multiply(self);
        self
    }

    /// Multiplies every entry by `s`.
    pub fn scaled(&self, s: T) -> Self {
        Self {
            columns: self.columns.map(|col| col.map(|v| v * s)),
        }
    }

    /// 2×2 minor built from rows `ox, ox+1` and columns `oy, oy+1`, with
    /// indices wrapping modulo `N`.
    ///
    /// The wrap turns the signed cofactors of a 3×3 matrix into plain minors:
    /// the cyclic ordering of the remaining rows/columns supplies the sign.
    pub fn det_minor(&self, ox: usize, oy: usize) -> T {
        let x1 = ox % N;
        let y1 = oy % N;
        let x2 = (ox + 1) % N;
        let y2 = (oy + 1) % N;
        self.columns[y1][x1] * self.columns[y2][x2] - self.columns[y1][x2] * self.columns[y2][x1]
    }
}

impl<T: Real, const N: usize> Matrix<T, N> {
    /// `true` when every entry differs by at most `epsilon`.
    pub fn approx_eq(&self, other: &Self, epsilon: T) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(&a, &b)| (a - b).abs() <= epsilon)
    }

    /// Tolerant variant of [`Matrix::is_identity`].
    pub fn is_identity_within(&self, epsilon: T) -> bool {
        self.approx_eq(&Self::identity(), epsilon)
    }
}

fn checked_reciprocal<T: Real>(det: T) -> Result<T, MathError> {
    if det == T::ZERO || !det.is_finite() {
        tracing::trace!(determinant = det.to_f64(), "matrix inverse rejected");
        return Err(MathError::Singular {
            determinant: det.to_f64(),
        });
    }
    Ok(T::ONE / det)
}

impl<T: Scalar> Matrix<T, 2> {
    /// Determinant `ad - bc`.
    pub fn det(&self) -> T {
        self.det_minor(0, 0)
    }
}

impl<T: Real> Matrix<T, 2> {
    /// Inverse via the adjugate formula.
    ///
    /// Precondition: nonzero determinant; otherwise entries are ±∞/NaN.
    pub fn inverse(&self) -> Self {
        self.adjugate().scaled(T::ONE / self.det())
    }

    /// Checked [`Matrix::inverse`].
    pub fn try_inverse(&self) -> Result<Self, MathError> {
        checked_reciprocal(self.det()).map(|inv| self.adjugate().scaled(inv))
    }

    fn adjugate(&self) -> Self {
        let [[a, c], [b, d]] = self.columns;
        Self::from_columns([[d, -c], [-b, a]])
    }
}

impl<T: Scalar> Matrix<T, 3> {
    /// Determinant by Laplace expansion down the first column, each
    /// cofactor taken as a cyclic [`Matrix::det_minor`].
    pub fn det(&self) -> T {
        self.columns[0][0] * self.det_minor(1, 1)
            + self.columns[0][1] * self.det_minor(2, 1)
            + self.columns[0][2] * self.det_minor(0, 1)
    }

    fn cofactors_transposed(&self) -> Self {
        let mut minors = Self::zero();
        for j in 0..3 {
            for i in 0..3 {
                minors.columns[j][i] = self.det_minor(i + 1, j + 1);
            }
        }
        minors.transpose();
        minors
    }
}

impl<T: Real> Matrix<T, 3> {
    /// Inverse: transposed cofactor matrix × (1 / det).
    ///
    /// Precondition: nonzero determinant; otherwise entries are ±∞/NaN.
    pub fn inverse(&self) -> Self {
        self.cofactors_transposed().scaled(T::ONE / self.det())
    }

    /// Checked [`Matrix::inverse`].
    pub fn try_inverse(&self) -> Result<Self, MathError> {
        checked_reciprocal(self.det()).map(|inv| self.cofactors_transposed().scaled(inv))
    }

    /// Transpose of the inverse; transforms normals under a linear map.
    pub fn inverse_transposed(&self) -> Self {
        self.inverse().transposed()
    }
}

impl<T: Scalar> Matrix<T, 4> {
    /// 3×3 matrix left after deleting `row` and `col`.
    fn minor(&self, row: usize, col: usize) -> Matrix<T, 3> {
        let mut out = Matrix::<T, 3>::zero();
        let kept = |skip: usize| (0..4).filter(move |&k| k != skip);
        for (dj, sj) in kept(col).enumerate() {
            for (di, si) in kept(row).enumerate() {
                out.columns[dj][di] = self.columns[sj][si];
            }
        }
        out
    }

    fn cofactor(&self, row: usize, col: usize) -> T {
        let m = self.minor(row, col).det();
        if (row + col) % 2 == 0 {
            m
        } else {
            T::ZERO - m
        }
    }

    /// Determinant by first-row Laplace expansion over 3×3 minors.
    pub fn det(&self) -> T {
        (0..4).fold(T::ZERO, |acc, j| acc + self.columns[j][0] * self.cofactor(0, j))
    }

    fn adjugate(&self) -> Self {
        let mut adj = Self::zero();
        for j in 0..4 {
            for i in 0..4 {
                adj.columns[j][i] = self.cofactor(j, i);
            }
        }
        adj
    }

    /// Non-uniform scale transform.
    pub fn scale(sx: T, sy: T, sz: T) -> Self {
        let mut m = Self::identity();
        m.set_scale(sx, sy, sz);
        m
    }

    /// Scale transform from a vector of factors.
    pub fn from_scale(s: Vec3<T>) -> Self {
        Self::scale(s.x(), s.y(), s.z())
    }

    /// Translation transform.
    pub fn translation(tx: T, ty: T, tz: T) -> Self {
        let mut m = Self::identity();
        m.set_translate(tx, ty, tz);
        m
    }

    /// Translation transform from an offset vector.
    pub fn from_translation(t: Vec3<T>) -> Self {
        Self::translation(t.x(), t.y(), t.z())
    }

    /// Transforms a point (`w = 1`, no perspective divide).
    pub fn transform_point(&self, p: &Vec3<T>) -> Vec3<T> {
        self.mul_vector(&p.extend(T::ONE)).truncate()
    }

    /// Transforms a direction (`w = 0`); translation is ignored.
    pub fn transform_direction(&self, d: &Vec3<T>) -> Vec3<T> {
        self.mul_vector(&d.extend(T::ZERO)).truncate()
    }
}

impl<T: Real> Matrix<T, 4> {
    /// Inverse via the adjugate (cofactor) expansion.
    ///
    /// Precondition: nonzero determinant; otherwise entries are ±∞/NaN.
    pub fn inverse(&self) -> Self {
        self.adjugate().scaled(T::ONE / self.det())
    }

    /// Checked [`Matrix::inverse`].
    pub fn try_inverse(&self) -> Result<Self, MathError> {
        checked_reciprocal(self.det()).map(|inv| self.adjugate().scaled(inv))
    }

    /// Transpose of the inverse.
    pub fn inverse_transposed(&self) -> Self {
        self.inverse().transposed()
    }
}

impl<T: Scalar, const N: usize> Default for Matrix<T, N> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Scalar, const N: usize> From<[[T; N]; N]> for Matrix<T, N> {
    fn from(columns: [[T; N]; N]) -> Self {
        Self { columns }
    }
}

/// Builds a matrix from exactly N² column-major scalars.
impl<T: Scalar, const N: usize> TryFrom<&[T]> for Matrix<T, N> {
    type Error = MathError;

    fn try_from(data: &[T]) -> Result<Self, Self::Error> {
        if data.len() != N * N {
            return Err(MathError::DimensionMismatch {
                expected: N * N,
                found: data.len(),
            });
        }
        let mut m = Self::zero();
        for (col, chunk) in m.columns.iter_mut().zip(data.chunks_exact(N)) {
            col.copy_from_slice(chunk);
        }
        Ok(m)
    }
}

impl<T, const N: usize> Index<usize> for Matrix<T, N> {
    type Output = [T; N];
    fn index(&self, j: usize) -> &[T; N] {
        &self.columns[j]
    }
}

impl<T, const N: usize> IndexMut<usize> for Matrix<T, N> {
    fn index_mut(&mut self, j: usize) -> &mut [T; N] {
        &mut self.columns[j]
    }
}

impl<T: Scalar, const N: usize> Mul for Matrix<T, N> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl<T: Scalar, const N: usize> Mul<&Matrix<T, N>> for &Matrix<T, N> {
    type Output = Matrix<T, N>;
    fn mul(self, rhs: &Matrix<T, N>) -> Matrix<T, N> {
        self.multiply(rhs)
    }
}

impl<T: Scalar, const N: usize> MulAssign for Matrix<T, N> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl<T: Scalar, const N: usize> MulAssign<&Matrix<T, N>> for Matrix<T, N> {
    fn mul_assign(&mut self, rhs: &Self) {
        *self = self.multiply(rhs);
    }
}

impl<T: Scalar, const N: usize> Mul<Vector<T, N>> for Matrix<T, N> {
    type Output = Vector<T, N>;
    fn mul(self, rhs: Vector<T, N>) -> Vector<T, N> {
        self.mul_vector(&rhs)
    }
}

impl<T: Scalar, const N: usize> Mul<T> for Matrix<T, N> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        self.scaled(rhs)
    }
}

/// Prints one row per line, left-aligned in five-character cells.
impl<T: fmt::Display, const N: usize> fmt::Display for Matrix<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..N {
            for col in &self.columns {
                write!(f, "{:<5} ", col[i])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl<T: Scalar + serde::Serialize, const N: usize> serde::Serialize for Matrix<T, N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        crate::serde_array::serialize(&self.columns.map(Vector::from_array), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Scalar + serde::Deserialize<'de>, const N: usize> serde::Deserialize<'de>
    for Matrix<T, N>
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let cols: [Vector<T, N>; N] = crate::serde_array::deserialize(deserializer, Vector::zero())?;
        Ok(Self::from_columns(cols.map(Vector::to_array)))
    }
}
