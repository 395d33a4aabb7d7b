//! Binarization at a fixed threshold

use crate::models::{BinaryImage, GrayscaleImage};

/// Simple global threshold binarization.
/// A pixel is white when its luminance is at or above `threshold`, black otherwise.
pub fn threshold_binarize(gray: &GrayscaleImage, threshold: u8) -> BinaryImage {
    let (width, height) = (gray.width(), gray.height());
    let mut binary = BinaryImage::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let is_black = gray.get(x, y) < threshold;
            binary.set_black(x, y, is_black);
        }
    }

    binary
}
