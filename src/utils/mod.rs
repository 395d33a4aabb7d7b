//! Image processing stages
//!
//! This module provides the per-pixel steps of the pipeline:
//! - Grayscale conversion (RGB/RGBA to luminance)
//! - Binarization at a fixed threshold
//! - Threshold search balancing black and white pixels

pub mod binarization;
pub mod grayscale;
pub mod threshold;
