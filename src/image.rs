//! Strided image search.
//!
//! Screen captures and GPU readbacks routinely carry row padding, so a
//! frame is not one contiguous pixel run. [`find_in_image`] searches an
//! [`imgref::ImgRef`] row by row with the flat kernel; padding pixels
//! between rows are never examined.

use imgref::ImgRef;
use rgb::alt::BGRA;

use crate::{ChannelBounds, find_in_range};

/// Find the coordinates of the first pixel within `bounds`.
///
/// Rows are searched top to bottom, left to right; the result is
/// `(x, y)` of the earliest match in that order, or `None`. The image's
/// stride may exceed its width — only the `width` leading pixels of each
/// row are examined.
///
/// # Example
///
/// ```
/// use zenscan::{Bgra, ChannelBounds, ImgVec, find_in_image};
///
/// let mut pixels = vec![Bgra { b: 0, g: 0, r: 0, a: 255 }; 12];
/// pixels[7] = Bgra { b: 128, g: 128, r: 128, a: 255 };
/// let img = ImgVec::new(pixels, 4, 3);
///
/// let bounds = ChannelBounds::new()
///     .with_red(100, 150)
///     .with_green(100, 150)
///     .with_blue(100, 150);
///
/// assert_eq!(find_in_image(img.as_ref(), bounds), Some((3, 1)));
/// ```
pub fn find_in_image(img: ImgRef<'_, BGRA<u8>>, bounds: ChannelBounds) -> Option<(usize, usize)> {
    for (y, row) in img.rows().enumerate() {
        if let Some(x) = find_in_range(row, bounds) {
            return Some((x, y));
        }
    }
    None
}
