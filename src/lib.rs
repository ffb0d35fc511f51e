//! SIMD pixel range search over packed BGRA buffers.
//!
//! Locates the first pixel whose red, green and blue values each fall
//! within independent inclusive bounds. Intended for repeated calls over
//! large buffers (screen captures, decoded frames) where the pixels are
//! in B,G,R,A byte order — the native layout for Windows/DirectX
//! surfaces. The alpha byte is ignored by the predicate.
//!
//! - [`ChannelBounds`] — per-channel inclusive bounds, builder-style
//! - [`find_in_range`] — first match in a flat pixel slice
//! - [`find_in_image`] — first match in a strided [`ImgRef`], as (x, y)
//! - [`Strategy`] — explicit backend selection (scalar / SSE2)
//!
//! The SSE2 backend compares four pixels per 128-bit operation and
//! returns bit-identical results to the scalar reference. On targets
//! other than x86_64 the scalar path is used.
//!
//! "Not found" is a normal outcome, not an error: both entry points
//! return `None` when no pixel matches.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate alloc;

mod bounds;
mod image;
mod scalar;
mod search;
#[cfg(target_arch = "x86_64")]
mod sse2;

pub use bounds::ChannelBounds;
pub use image::find_in_image;
pub use search::{Strategy, find_in_range};

// Re-exports for callers that produce or describe pixel buffers.
pub use imgref::{Img, ImgRef, ImgVec};
pub use rgb;
pub use rgb::alt::BGRA as Bgra;
