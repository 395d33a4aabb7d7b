use crate::models::Balance;

/// Pixel value of a black pixel in a binary image
pub const BLACK: u8 = 0;
/// Pixel value of a white pixel in a binary image
pub const WHITE: u8 = 255;

/// Compact two-level image. A set bit is a black pixel, a clear bit is white.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryImage {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl BinaryImage {
    /// Create an all-white binary image with given dimensions
    pub fn new(width: usize, height: usize) -> Self {
        let bytes_needed = (width * height).div_ceil(8);
        Self {
            width,
            height,
            data: vec![0; bytes_needed],
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

    /// Total number of pixels
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Whether the pixel at (x, y) is black. Out of bounds reads as white.
    pub fn is_black(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let index = y * self.width + x;
        (self.data[index / 8] >> (index % 8)) & 1 == 1
    }

    /// Pixel value at (x, y): [`BLACK`] or [`WHITE`], never anything in between
    pub fn value(&self, x: usize, y: usize) -> u8 {
        if self.is_black(x, y) { BLACK } else { WHITE }
    }

    /// Mark the pixel at (x, y) black (`true`) or white (`false`)
    pub fn set_black(&mut self, x: usize, y: usize, black: bool) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = y * self.width + x;
        let byte_index = index / 8;
        let bit_index = index % 8;
        if black {
            self.data[byte_index] |= 1 << bit_index;
        } else {
            self.data[byte_index] &= !(1 << bit_index);
        }
    }

    /// Number of black pixels
    pub fn black_count(&self) -> usize {
        // Padding bits past the last pixel are never set.
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Black/white split of the whole image
    pub fn balance(&self) -> Balance {
        Balance {
            black: self.black_count(),
            total: self.pixel_count(),
        }
    }

    /// Iterate one row as black flags, left to right
    pub fn row(&self, y: usize) -> impl Iterator<Item = bool> + '_ {
        (0..self.width).map(move |x| self.is_black(x, y))
    }

    /// Expand to an 8-bit luma image holding only 0 and 255
    pub fn to_luma8(&self) -> image::GrayImage {
        image::GrayImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            image::Luma([self.value(x as usize, y as usize)])
        })
    }
}

impl Default for BinaryImage {
    fn default() -> Self {
        Self::new(0, 0)
    }
}
