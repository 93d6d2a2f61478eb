// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
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
#![doc = r"Geometry for Lumen visibility queries.

This crate provides:
- Oriented planes with signed point/ray distances (`Plane`, `Ray`).
- A six-plane perspective view frustum (`Frustum`) with point and sphere
  classification (`Intersection`).
- The projection configuration that drives it (`Projection`).

Design notes:
- Plane normals are unit length; the frustum's normals point inward, so a
  non-negative distance means the inside half-space.
- Every frustum mutator rebuilds all six planes immediately; queries never
  observe stale state.
- Generic over `f32`/`f64` through `lumen_math::Real`.
"]

mod error;
/// Six-plane view frustum.
pub mod frustum;
/// Perspective projection parameters.
pub mod projection;
/// Foundational geometric types.
pub mod types;

pub use error::GeomError;
pub use frustum::{Frustum, FrustumPlane, Intersection};
pub use projection::Projection;
pub use types::plane::Plane;
pub use types::ray::Ray;
