// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use lumen_math::MathError;
use thiserror::Error;

/// Error type for the checked geometry constructors.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeomError {
    /// A projection parameter is out of range.
    #[error("invalid projection: {0}")]
    InvalidProjection(&'static str),
    /// Underlying math precondition failed.
    #[error(transparent)]
    Math(#[from] MathError),
}
