// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! lumen-math: fixed-size vectors, square matrices and quaternions for 2D/3D
//! transforms.
//!
//! Conventions used throughout:
//! - Matrices are column-major; `m[col][row]` indexes a column then a row.
//! - Vectors are column vectors multiplied on the right (`M * v`).
//! - Angles are radians unless a name says otherwise.
//! - Plain operations are contract-based: preconditions are documented and
//!   a violated one yields IEEE NaN/∞ instead of a panic. The `try_*`
//!   variants check the same conditions and return [`MathError`].
//!
//! `f32` 4×4 products run through a 4-wide SIMD lane on x86/x86_64 (SSE)
//! and aarch64 (NEON) unless the `scalar_only` feature is set; results are
//! bit-identical either way.
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::redundant_pub_crate,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::use_self,
    clippy::float_cmp,
    clippy::needless_range_loop,
    clippy::cognitive_complexity,
    clippy::option_if_let_else,
    clippy::doc_markdown,
    clippy::too_many_lines,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::similar_names,
    clippy::trivially_copy_pass_by_ref,
    clippy::too_long_first_doc_paragraph
)]

mod error;
mod matrix;
mod quat;
pub mod rotation;
mod scalar;
#[cfg(feature = "serde")]
mod serde_array;
pub mod simd;
mod vector;

pub use error::MathError;
pub use matrix::{Matrix, Matrix2d, Matrix2f, Matrix3d, Matrix3f, Matrix4d, Matrix4f};
pub use quat::{Quat, Quatd, Quatf};
pub use rotation::{rotate_2d, rotate_axis, rotate_to, rotate_x, rotate_y, rotate_z};
pub use scalar::{accumulate_columns, clamp, deg_to_rad, lerp, sgn, Real, Scalar};
pub use vector::{Vec2, Vec2d, Vec2f, Vec2i, Vec3, Vec3d, Vec3f, Vec4, Vec4d, Vec4f, Vector};
