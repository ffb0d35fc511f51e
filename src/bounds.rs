//! Per-channel search bounds.
//!
//! [`ChannelBounds`] holds one inclusive `[low, high]` range per color
//! channel and implements the canonical match predicate shared by every
//! search backend. It also packs the bounds into the two reference words
//! the SSE2 path broadcasts.

use rgb::alt::BGRA;

/// Inclusive per-channel bounds for a pixel range search.
///
/// Each of red, green and blue has an independent inclusive
/// `[low, high]` range; the alpha byte is never examined. A pixel
/// matches when all three channel values fall within their ranges.
///
/// Bounds are not validated: a channel with `low > high` is allowed and
/// matches nothing, so the search over any buffer returns `None`.
///
/// # Example
///
/// ```
/// use zenscan::{Bgra, ChannelBounds};
///
/// // Mid-gray pixels only.
/// let bounds = ChannelBounds::new()
///     .with_red(100, 150)
///     .with_green(100, 150)
///     .with_blue(100, 150);
///
/// assert!(bounds.matches(Bgra { b: 128, g: 128, r: 128, a: 0 }));
/// assert!(!bounds.matches(Bgra { b: 50, g: 50, r: 200, a: 0 }));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChannelBounds {
    red: (u8, u8),
    green: (u8, u8),
    blue: (u8, u8),
}

impl Default for ChannelBounds {
    fn default() -> Self {
        Self::new()
    }
}

impl ChannelBounds {
    /// Full-range bounds: every pixel matches.
    pub const fn new() -> Self {
        Self {
            red: (0, 255),
            green: (0, 255),
            blue: (0, 255),
        }
    }

    /// Bounds spanning the channel values of two corner pixels.
    ///
    /// `low` supplies the lower bound and `high` the upper bound for each
    /// channel; both alpha bytes are ignored. Convenient when the search
    /// target is an on-screen color picked up with some tolerance.
    ///
    /// # Example
    ///
    /// ```
    /// use zenscan::{Bgra, ChannelBounds, find_in_range};
    ///
    /// // Sampled color 120/130/140 with a +/- 10 tolerance per channel.
    /// let bounds = ChannelBounds::between(
    ///     Bgra { b: 110, g: 120, r: 130, a: 0 },
    ///     Bgra { b: 130, g: 140, r: 150, a: 0 },
    /// );
    ///
    /// let pixels = [
    ///     Bgra { b: 0, g: 0, r: 0, a: 255 },
    ///     Bgra { b: 121, g: 131, r: 141, a: 255 },
    /// ];
    /// assert_eq!(find_in_range(&pixels, bounds), Some(1));
    /// ```
    pub const fn between(low: BGRA<u8>, high: BGRA<u8>) -> Self {
        Self {
            red: (low.r, high.r),
            green: (low.g, high.g),
            blue: (low.b, high.b),
        }
    }

    /// Set the inclusive red range.
    pub const fn with_red(mut self, low: u8, high: u8) -> Self {
        self.red = (low, high);
        self
    }

    /// Set the inclusive green range.
    pub const fn with_green(mut self, low: u8, high: u8) -> Self {
        self.green = (low, high);
        self
    }

    /// Set the inclusive blue range.
    pub const fn with_blue(mut self, low: u8, high: u8) -> Self {
        self.blue = (low, high);
        self
    }

    /// Whether some channel has `low > high`, making a match impossible.
    ///
    /// Searching with empty bounds is permitted and returns `None`
    /// without error; this check lets callers skip the scan entirely.
    ///
    /// # Example
    ///
    /// ```
    /// use zenscan::ChannelBounds;
    ///
    /// assert!(ChannelBounds::new().with_green(200, 100).is_empty());
    /// assert!(!ChannelBounds::new().is_empty());
    /// ```
    pub const fn is_empty(&self) -> bool {
        self.red.0 > self.red.1 || self.green.0 > self.green.1 || self.blue.0 > self.blue.1
    }

    /// The canonical predicate: all three channels within their ranges.
    ///
    /// Every backend reduces to this test — the SSE2 path evaluates it
    /// four pixels at a time and re-runs it per pixel on a hit.
    #[inline]
    pub fn matches(&self, px: BGRA<u8>) -> bool {
        self.red.0 <= px.r
            && px.r <= self.red.1
            && self.green.0 <= px.g
            && px.g <= self.green.1
            && self.blue.0 <= px.b
            && px.b <= self.blue.1
    }

    /// Upper-bound reference word, alpha pinned to 0xFF.
    ///
    /// Byte offsets 0–3 carry blue, green, red, alpha — the same layout
    /// as `BGRA<u8>` in memory. Pinning alpha to the extreme makes the
    /// fourth byte trivially satisfy an unsigned `<=` compare, so one
    /// packed-byte comparison covers the whole lane.
    #[inline]
    pub(crate) fn high_word(&self) -> u32 {
        u32::from_le_bytes([self.blue.1, self.green.1, self.red.1, 0xFF])
    }

    /// Lower-bound reference word, alpha pinned to 0x00.
    #[inline]
    pub(crate) fn low_word(&self) -> u32 {
        u32::from_le_bytes([self.blue.0, self.green.0, self.red.0, 0x00])
    }
}
