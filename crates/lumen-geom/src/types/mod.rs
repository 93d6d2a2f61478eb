// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Core geometry types used by the frustum (plane, ray).
//!
//! Sign conventions:
//! - A plane's signed distance is positive on the side its normal points to.
//! - Ray distances are parametric in units of the ray direction's length.

#[doc = "Oriented planes in point-normal form."]
pub mod plane;
#[doc = "Half-lines with origin and direction."]
pub mod ray;
