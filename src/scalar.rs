//! Byte-at-a-time reference search.
//!
//! Always correct on every target; baseline for the SSE2 backend and the
//! tail pass it falls back to for sub-vector remainders and hit windows.

use rgb::alt::BGRA;

use crate::ChannelBounds;

/// Find the index of the first pixel within `bounds`, one pixel at a time.
///
/// Returns `None` when no pixel in the slice matches. Reads every pixel
/// at most once and never looks at the alpha byte.
#[inline]
pub(crate) fn find_in_range(pixels: &[BGRA<u8>], bounds: ChannelBounds) -> Option<usize> {
    pixels.iter().position(|px| bounds.matches(*px))
}
