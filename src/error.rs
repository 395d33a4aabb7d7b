//! Error type shared by every stage of the pipeline.

use std::path::PathBuf;

/// Errors that can occur while turning an image into text art.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input image could not be opened
    #[error("failed to open input image '{}': {source}", path.display())]
    OpenInput {
        /// Input path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Input image could not be decoded
    #[error("failed to decode image '{}': {source}", path.display())]
    Decode {
        /// Input path
        path: PathBuf,
        /// Underlying decoder error
        source: image::ImageError,
    },

    /// Input is neither PNG nor JPEG
    #[error("unsupported image format for '{}' (expected PNG or JPEG)", path.display())]
    UnsupportedFormat {
        /// Input path
        path: PathBuf,
    },

    /// Output file could not be created
    #[error("failed to create output file '{}': {source}", path.display())]
    CreateOutput {
        /// Output path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Writing the rendering failed part way
    #[error("failed to write output file '{}': {source}", path.display())]
    WriteOutput {
        /// Output path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Preview image could not be encoded or saved
    #[error("failed to write preview image '{}': {source}", path.display())]
    Preview {
        /// Preview path
        path: PathBuf,
        /// Underlying encoder error
        source: image::ImageError,
    },

    /// Options failed validation
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// Config file could not be read or parsed
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;
