//! text_davinci - draw an image with two glyphs in a text file
//!
//! An input image is resized to 60x60, converted to grayscale, cut into
//! black and white at a threshold that balances the two, and written out
//! one glyph per pixel.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// TOML configuration layers
pub mod config;
/// Crate error type
pub mod error;
/// Core data structures (GrayscaleImage, BinaryImage, TextOptions)
pub mod models;
/// End-to-end conversion from a decoded image to a text file
pub mod pipeline;
/// Text and preview output
pub mod render;
/// Image loading, resizing and statistics
pub mod tools;
/// Pixel stages (grayscale, binarization, threshold search)
pub mod utils;

pub use config::Config;
pub use error::{Error, Result};
pub use models::{BinaryImage, GrayscaleImage, SelectionPolicy, TextOptions};
pub use pipeline::{Rendering, convert_image, run, write_to_txt};
pub use render::{render_text, render_to_string, write_text_file};
pub use utils::threshold::{ThresholdSearch, optimal_binarize, optimal_binarize_parallel};
