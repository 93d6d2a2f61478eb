// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error type for the checked (`try_*`) math operations.

use thiserror::Error;

/// Failures reported by the checked variants of otherwise contract-based
/// operations.
///
/// The unchecked operations never return this type: they document their
/// preconditions and let IEEE-754 NaN/∞ propagate when a caller breaks them.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MathError {
    /// A vector with zero length cannot be normalized.
    #[error("cannot normalize a zero-length vector")]
    ZeroLength,
    /// The matrix determinant is zero or not finite.
    #[error("matrix is singular (determinant {determinant})")]
    Singular {
        /// Determinant that failed the check, widened to `f64`.
        determinant: f64,
    },
    /// The quaternion encodes the identity rotation (`w = ±1`), whose axis is
    /// undefined.
    #[error("rotation angle is a multiple of 2π; axis is undefined")]
    DegenerateRotation,
    /// The target direction is parallel or anti-parallel to the reference
    /// axis, so the shortest-arc axis is undefined.
    #[error("direction is parallel to the reference axis; rotation axis is undefined")]
    DegenerateDirection,
    /// A plane normal was not unit length.
    #[error("plane normal must be unit length (got {length})")]
    NonUnitNormal {
        /// Measured length of the rejected normal.
        length: f64,
    },
    /// Raw data did not contain the expected number of scalars.
    #[error("expected {expected} scalars, found {found}")]
    DimensionMismatch {
        /// Required element count.
        expected: usize,
        /// Element count supplied.
        found: usize,
    },
}
