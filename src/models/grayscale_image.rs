use crate::models::LuminanceRange;
use crate::utils::grayscale::rgba_to_grayscale;

/// Single-channel luminance image, one byte per pixel in row-major order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayscaleImage {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl GrayscaleImage {
    /// Wrap a row-major luminance buffer. Returns `None` if the length does not match.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Option<Self> {
        if data.len() != width * height {
            return None;
        }
        Some(Self {
            width,
            height,
            data,
        })
    }

    /// Image filled with a single luminance value
    pub fn filled(width: usize, height: usize, luminance: u8) -> Self {
        Self {
            width,
            height,
            data: vec![luminance; width * height],
        }
    }

    /// Convert a decoded RGBA image to luminance
    pub fn from_rgba(rgba: &image::RgbaImage) -> Self {
        let (width, height) = (rgba.width() as usize, rgba.height() as usize);
        Self {
            width,
            height,
            data: rgba_to_grayscale(rgba.as_raw(), width, height),
        }
    }

    /// Get image width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get image height
    pub fn height(&self) -> usize {
        self.height
    }

    /// Luminance at (x, y)
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }

    /// Raw luminance bytes, row-major
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Darkest, brightest and mean luminance; `None` when empty
    pub fn luminance_range(&self) -> Option<LuminanceRange> {
        LuminanceRange::of(&self.data)
    }
}
