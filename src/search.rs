//! Backend selection and the public search entry point.

use rgb::alt::BGRA;

use crate::{ChannelBounds, scalar};

/// Search backend.
///
/// [`find_in_range`] picks the fastest backend for the target
/// automatically; `Strategy` exists for callers that need a specific
/// one — benchmarks, or checking the vector path against the scalar
/// reference. Every backend returns identical results for identical
/// inputs.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Byte-at-a-time reference implementation. Available everywhere.
    Scalar,
    /// Four pixels per iteration in 128-bit SSE2 registers.
    #[cfg(target_arch = "x86_64")]
    Sse2,
}

impl Strategy {
    /// Backends available on this target, fastest first.
    ///
    /// Never empty: [`Strategy::Scalar`] is always present.
    pub const fn available() -> &'static [Strategy] {
        #[cfg(target_arch = "x86_64")]
        {
            &[Strategy::Sse2, Strategy::Scalar]
        }
        #[cfg(not(target_arch = "x86_64"))]
        {
            &[Strategy::Scalar]
        }
    }

    /// Run the search with this backend.
    #[inline]
    pub fn find_in_range(self, pixels: &[BGRA<u8>], bounds: ChannelBounds) -> Option<usize> {
        match self {
            Strategy::Scalar => scalar::find_in_range(pixels, bounds),
            #[cfg(target_arch = "x86_64")]
            Strategy::Sse2 => crate::sse2::find_in_range(pixels, bounds),
        }
    }
}

/// Find the index of the first pixel whose red, green and blue values
/// all fall within `bounds`.
///
/// Returns `None` when no pixel matches — a normal outcome, not an
/// error. The alpha byte of each pixel is ignored. Uses the fastest
/// backend for the current target; see [`Strategy`] to pick one
/// explicitly.
///
/// # Example
///
/// ```
/// use zenscan::{Bgra, ChannelBounds, find_in_range};
///
/// let pixels = [
///     Bgra { b: 10, g: 10, r: 10, a: 255 },
///     Bgra { b: 50, g: 50, r: 200, a: 255 },
///     Bgra { b: 128, g: 128, r: 128, a: 255 },
/// ];
/// let bounds = ChannelBounds::new()
///     .with_red(100, 150)
///     .with_green(100, 150)
///     .with_blue(100, 150);
///
/// // The second pixel's red (200) exceeds the bound; the third matches.
/// assert_eq!(find_in_range(&pixels, bounds), Some(2));
/// ```
#[inline]
pub fn find_in_range(pixels: &[BGRA<u8>], bounds: ChannelBounds) -> Option<usize> {
    #[cfg(target_arch = "x86_64")]
    {
        crate::sse2::find_in_range(pixels, bounds)
    }
    #[cfg(not(target_arch = "x86_64"))]
    {
        scalar::find_in_range(pixels, bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn scalar_always_available() {
        assert!(Strategy::available().contains(&Strategy::Scalar));
    }

    #[test]
    fn auto_dispatch_matches_scalar() {
        let pixels: Vec<_> = (0u8..=255)
            .map(|v| BGRA { b: v, g: v.wrapping_mul(3), r: v.wrapping_add(17), a: v })
            .collect();
        let bounds = ChannelBounds::new().with_red(40, 80).with_green(0, 200).with_blue(10, 250);
        assert_eq!(
            find_in_range(&pixels, bounds),
            Strategy::Scalar.find_in_range(&pixels, bounds)
        );
    }

    /// Every available backend must agree with the scalar reference on
    /// random buffers and random bounds, including degenerate
    /// (`low > high`) and full-range ones.
    #[test]
    fn strategies_equivalent_on_random_input() {
        let mut rng = StdRng::seed_from_u64(0x5EED_B6BA);

        for _ in 0..2_000 {
            let len = rng.gen_range(0..=300);
            // Narrow value range so matches actually occur.
            let pixels: Vec<BGRA<u8>> = (0..len)
                .map(|_| BGRA {
                    b: rng.gen_range(0..=15),
                    g: rng.gen_range(0..=15),
                    r: rng.gen_range(0..=15),
                    a: rng.r#gen(),
                })
                .collect();

            // Raw (low, high) pairs: roughly half the channels end up
            // inverted, covering the vacuous-bounds contract.
            let bounds = match rng.gen_range(0..4) {
                0 => ChannelBounds::new(),
                _ => ChannelBounds::new()
                    .with_red(rng.gen_range(0..=16), rng.gen_range(0..=16))
                    .with_green(rng.gen_range(0..=16), rng.gen_range(0..=16))
                    .with_blue(rng.gen_range(0..=16), rng.gen_range(0..=16)),
            };

            let expected = Strategy::Scalar.find_in_range(&pixels, bounds);
            for &strategy in Strategy::available() {
                assert_eq!(
                    strategy.find_in_range(&pixels, bounds),
                    expected,
                    "{strategy:?} diverged from scalar: len={len} bounds={bounds:?}",
                );
            }
        }
    }

    /// Same fuzz over the full byte range, where values >= 0x80 would
    /// expose a signed vector compare.
    #[test]
    fn strategies_equivalent_on_high_bytes() {
        let mut rng = StdRng::seed_from_u64(0x0DD_BA11);

        for _ in 0..1_000 {
            let len = rng.gen_range(0..=64);
            let pixels: Vec<BGRA<u8>> = (0..len)
                .map(|_| BGRA {
                    b: rng.gen_range(0x70..=0xFF),
                    g: rng.gen_range(0x70..=0xFF),
                    r: rng.gen_range(0x70..=0xFF),
                    a: rng.r#gen(),
                })
                .collect();
            let bounds = ChannelBounds::new()
                .with_red(rng.gen_range(0x70..=0xFF), rng.gen_range(0x70..=0xFF))
                .with_green(rng.gen_range(0x70..=0xFF), rng.gen_range(0x70..=0xFF))
                .with_blue(rng.gen_range(0x70..=0xFF), rng.gen_range(0x70..=0xFF));

            let expected = Strategy::Scalar.find_in_range(&pixels, bounds);
            for &strategy in Strategy::available() {
                assert_eq!(strategy.find_in_range(&pixels, bounds), expected);
            }
        }
    }

    /// Spec'd tail lengths: every backend handles buffers that are not a
    /// multiple of the vector width, with the match in the last element.
    #[test]
    fn tail_lengths_with_terminal_match() {
        let bounds =
            ChannelBounds::new().with_red(100, 150).with_green(100, 150).with_blue(100, 150);
        for len in [1usize, 2, 3, 4, 5, 7, 8] {
            let mut pixels: Vec<_> =
                (0..len).map(|_| BGRA { b: 0, g: 0, r: 0, a: 255 }).collect();
            pixels[len - 1] = BGRA { b: 128, g: 128, r: 128, a: 255 };
            for &strategy in Strategy::available() {
                assert_eq!(strategy.find_in_range(&pixels, bounds), Some(len - 1));
            }
        }
    }
}
