//! SSE2 search — four packed pixels per 128-bit compare.
//!
//! SSE2 is part of the x86_64 baseline, so availability is a
//! compile-time fact and no runtime detection is needed. The vector loop
//! only narrows a hit down to a window of four pixels; the scalar pass
//! resolves the exact index by re-scanning that window, which costs at
//! most four redundant compares and keeps lane bookkeeping out of the
//! hot loop.

#![allow(unsafe_code)]

use core::arch::x86_64::{
    __m128i, _mm_and_si128, _mm_cmpeq_epi8, _mm_cmpeq_epi32, _mm_loadu_si128, _mm_max_epu8,
    _mm_movemask_epi8, _mm_set1_epi32,
};

use rgb::alt::BGRA;

use crate::{ChannelBounds, scalar};

/// Pixels per 128-bit register.
const LANES: usize = 4;

/// Per-byte unsigned `a >= b`, as 0xFF/0x00 lanes.
///
/// SSE2 has no unsigned byte compare and the signed one would misorder
/// values >= 0x80 (including the pinned alpha bytes). `_mm_max_epu8` is
/// unsigned, and `a >= b` exactly when `max(a, b) == a`.
#[inline]
fn cmpge_epu8(a: __m128i, b: __m128i) -> __m128i {
    // SAFETY: SSE2 is part of the x86_64 baseline.
    unsafe { _mm_cmpeq_epi8(_mm_max_epu8(a, b), a) }
}

/// Per-byte unsigned `a <= b`, as 0xFF/0x00 lanes.
#[inline]
fn cmple_epu8(a: __m128i, b: __m128i) -> __m128i {
    cmpge_epu8(b, a)
}

/// Find the index of the first pixel within `bounds`, four at a time.
///
/// Returns exactly what [`scalar::find_in_range`] returns for the same
/// inputs; only the execution differs.
#[inline]
pub(crate) fn find_in_range(pixels: &[BGRA<u8>], bounds: ChannelBounds) -> Option<usize> {
    // Reference pixels with the alpha byte pinned to its extreme, so the
    // fourth byte of every lane trivially passes both unsigned compares.
    // SAFETY: SSE2 is part of the x86_64 baseline.
    let (high, low, ones) = unsafe {
        (
            _mm_set1_epi32(bounds.high_word() as i32),
            _mm_set1_epi32(bounds.low_word() as i32),
            _mm_set1_epi32(-1),
        )
    };

    let mut i = 0;
    while i + LANES <= pixels.len() {
        // SAFETY: `BGRA<u8>` is a 4-byte `#[repr(C)]` struct with no
        // padding, and `i + LANES <= pixels.len()`, so the 16 bytes at
        // pixel `i` are inside the slice. `loadu` has no alignment
        // requirement.
        let chunk = unsafe { _mm_loadu_si128(pixels.as_ptr().add(i).cast::<__m128i>()) };

        let below_high = cmple_epu8(chunk, high);
        let above_low = cmpge_epu8(chunk, low);

        // A pixel matches only when all four bytes of its lane are in
        // range; collapse the per-byte bits into one integer mask.
        // SAFETY: SSE2 is part of the x86_64 baseline.
        let mask = unsafe {
            let in_range = _mm_and_si128(below_high, above_low);
            _mm_movemask_epi8(_mm_cmpeq_epi32(in_range, ones))
        };
        if mask != 0 {
            break;
        }

        i += LANES;
    }

    // Scalar pass over the hit window or the sub-vector remainder.
    scalar::find_in_range(&pixels[i..], bounds).map(|tail| i + tail)
}
