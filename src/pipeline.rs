use crate::error::Result;
use crate::models::{BinaryImage, FIXED_THRESHOLD, GrayscaleImage, TextOptions};
use crate::render::{save_preview, write_text_file};
use crate::tools::{load_image, resize_to_target};
use crate::utils::binarization::threshold_binarize;
use crate::utils::threshold::optimal_binarize;
use image::DynamicImage;
use std::path::Path;

/// Binary image produced for one run, with the threshold that made it
#[derive(Debug, Clone)]
pub struct Rendering {
    /// Threshold the binary image was cut at
    pub threshold: u8,
    /// Black/white image handed to the renderer
    pub binary: BinaryImage,
}

/// Binarize at the fixed threshold, or search when the options allow it
pub fn binarize(gray: &GrayscaleImage, options: &TextOptions) -> Rendering {
    if options.disable_threshold_optimization {
        log::debug!("threshold search disabled, using {}", FIXED_THRESHOLD);
        Rendering {
            threshold: FIXED_THRESHOLD,
            binary: threshold_binarize(gray, FIXED_THRESHOLD),
        }
    } else {
        let search = optimal_binarize(gray, options.selection);
        Rendering {
            threshold: search.threshold,
            binary: search.binary,
        }
    }
}

/// Resize, convert to grayscale and binarize. No I/O.
pub fn convert_image(img: &DynamicImage, options: &TextOptions) -> Rendering {
    let resized = resize_to_target(img);
    let gray = GrayscaleImage::from_rgba(&resized);

    if let Some(range) = gray.luminance_range() {
        log::debug!("grayscale {}", range);
        if range.is_flat() {
            log::warn!("input has a single luminance, output will be one glyph");
        }
    }

    let rendering = binarize(&gray, options);
    log::info!(
        "threshold {}: {}",
        rendering.threshold,
        rendering.binary.balance()
    );
    rendering
}

fn write_outputs(img: &DynamicImage, options: &TextOptions) -> Result<Rendering> {
    let rendering = convert_image(img, options);
    write_text_file(&rendering.binary, options)?;
    if let Some(preview) = &options.preview {
        save_preview(&rendering.binary, preview)?;
    }
    Ok(rendering)
}

/// Validate the options, convert `img` and write the text file (and preview)
pub fn write_to_txt(img: &DynamicImage, options: &TextOptions) -> Result<Rendering> {
    options.validate()?;
    write_outputs(img, options)
}

/// Full run from an input path. Options are validated before the input is opened.
pub fn run(input: &Path, options: &TextOptions) -> Result<Rendering> {
    options.validate()?;
    let img = load_image(input)?;
    write_outputs(&img, options)
}
