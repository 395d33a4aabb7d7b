/// Bit-packed black/white image
pub mod binary_image;
/// Single-channel luminance image
pub mod grayscale_image;
/// Run options and their defaults
pub mod options;
/// Luminance range and black/white balance summaries
pub mod stats;

pub use binary_image::{BLACK, BinaryImage, WHITE};
pub use grayscale_image::GrayscaleImage;
pub use options::{FIXED_THRESHOLD, SelectionPolicy, TextOptions};
pub use stats::{Balance, LuminanceRange};
