// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! 4-wide fast path for `f32` 4×4 column accumulation.
//!
//! Selected at compile time by target architecture:
//! - x86 / x86_64 with SSE: `_mm_mul_ps` + `_mm_add_ps`
//! - aarch64: NEON `vmulq_f32` + `vaddq_f32`
//!
//! Both lanes multiply and add as separate, correctly rounded IEEE operations
//! in the same order as [`crate::scalar::accumulate_columns`], so the result is
//! bit-identical to the scalar kernel. No fused multiply-add is used. Every
//! other shape (or the `scalar_only` feature) takes the generic kernel.
#![allow(unsafe_code)]

use crate::scalar::accumulate_columns;

#[cfg(all(
    not(feature = "scalar_only"),
    any(target_arch = "x86", target_arch = "x86_64"),
    target_feature = "sse"
))]
mod lane {
    #[cfg(target_arch = "x86")]
    use core::arch::x86::{_mm_add_ps, _mm_loadu_ps, _mm_mul_ps, _mm_set1_ps, _mm_setzero_ps, _mm_storeu_ps};
    #[cfg(target_arch = "x86_64")]
    use core::arch::x86_64::{
        _mm_add_ps, _mm_loadu_ps, _mm_mul_ps, _mm_set1_ps, _mm_setzero_ps, _mm_storeu_ps,
    };

    #[inline]
    pub(super) fn mul_columns4(columns: &[f32; 16], weights: &[f32; 4]) -> [f32; 4] {
        let mut out = [0.0_f32; 4];
        // SAFETY: SSE is enabled for this target (cfg above); every load reads
        // four in-bounds floats of `columns`, the store writes exactly `out`.
        unsafe {
            let mut acc = _mm_setzero_ps();
            for (k, &weight) in weights.iter().enumerate() {
                let column = _mm_loadu_ps(columns.as_ptr().add(k * 4));
                acc = _mm_add_ps(acc, _mm_mul_ps(column, _mm_set1_ps(weight)));
            }
            _mm_storeu_ps(out.as_mut_ptr(), acc);
        }
        out
    }
}

#[cfg(all(not(feature = "scalar_only"), target_arch = "aarch64"))]
mod lane {
    use core::arch::aarch64::{vaddq_f32, vdupq_n_f32, vld1q_f32, vmulq_f32, vst1q_f32};

    #[inline]
    pub(super) fn mul_columns4(columns: &[f32; 16], weights: &[f32; 4]) -> [f32; 4] {
        let mut out = [0.0_f32; 4];
        // SAFETY: NEON is mandatory on aarch64; loads and the store stay within
        // `columns` and `out`.
        unsafe {
            let mut acc = vdupq_n_f32(0.0);
            for (k, &weight) in weights.iter().enumerate() {
                let column = vld1q_f32(columns.as_ptr().add(k * 4));
                acc = vaddq_f32(acc, vmulq_f32(column, vdupq_n_f32(weight)));
            }
            vst1q_f32(out.as_mut_ptr(), acc);
        }
        out
    }
}

/// `true` when this build routes 4×4 `f32` products through a SIMD lane.
pub const SIMD_LANE_ENABLED: bool = cfg!(all(
    not(feature = "scalar_only"),
    any(
        all(any(target_arch = "x86", target_arch = "x86_64"), target_feature = "sse"),
        target_arch = "aarch64"
    )
));

/// `f32` override of [`crate::Scalar::mul_columns`].
#[inline]
pub(crate) fn mul_columns_f32<const N: usize>(
    columns: &[[f32; N]; N],
    weights: &[f32; N],
) -> [f32; N] {
    #[cfg(any(
        all(
            not(feature = "scalar_only"),
            any(target_arch = "x86", target_arch = "x86_64"),
            target_feature = "sse"
        ),
        all(not(feature = "scalar_only"), target_arch = "aarch64")
    ))]
    {
        // Both conversions only succeed when N == 4.
        if let (Ok(flat), Ok(w)) = (
            <&[f32; 16]>::try_from(columns.as_flattened()),
            <&[f32; 4]>::try_from(weights.as_slice()),
        ) {
            let lanes = lane::mul_columns4(flat, w);
            let mut out = [0.0_f32; N];
            out.copy_from_slice(&lanes);
            return out;
        }
    }
    accumulate_columns(columns, weights)
}
