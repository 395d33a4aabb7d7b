//! TOML configuration file handling.
//!
//! Every key is optional. Layers are merged with [`Config::merge`]
//! (command line over file over built-in defaults) and resolved into
//! [`TextOptions`] once, before any image work starts.

use crate::models::{SelectionPolicy, TextOptions};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// One layer of settings. `None` means "not set at this layer".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Glyph for white pixels
    pub white_char: Option<String>,
    /// Glyph for black pixels
    pub black_char: Option<String>,
    /// Destination text file
    pub output_path: Option<PathBuf>,
    /// Swap the glyphs
    pub flip: Option<bool>,
    /// Use the fixed threshold instead of searching
    pub disable_threshold: Option<bool>,
    /// Search selection rule
    pub selection: Option<SelectionPolicy>,
    /// PNG dump of the binary image
    pub preview: Option<PathBuf>,
}

impl Config {
    /// Load a config file. The file must exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Combine two layers; values set in `self` win over `lower`.
    pub fn merge(self, lower: Config) -> Config {
        Config {
            white_char: self.white_char.or(lower.white_char),
            black_char: self.black_char.or(lower.black_char),
            output_path: self.output_path.or(lower.output_path),
            flip: self.flip.or(lower.flip),
            disable_threshold: self.disable_threshold.or(lower.disable_threshold),
            selection: self.selection.or(lower.selection),
            preview: self.preview.or(lower.preview),
        }
    }

    /// Resolve against the built-in defaults
    pub fn into_options(self) -> TextOptions {
        let defaults = TextOptions::default();
        TextOptions {
            white_glyph: self.white_char.unwrap_or(defaults.white_glyph),
            black_glyph: self.black_char.unwrap_or(defaults.black_glyph),
            output: self.output_path.unwrap_or(defaults.output),
            flip: self.flip.unwrap_or(defaults.flip),
            disable_threshold_optimization: self
                .disable_threshold
                .unwrap_or(defaults.disable_threshold_optimization),
            selection: self.selection.unwrap_or(defaults.selection),
            preview: self.preview.or(defaults.preview),
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config file '{}': {source}", path.display())]
    Io {
        /// Config path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
    /// Config file is not valid TOML for [`Config`]
    #[error("failed to parse config file '{}': {source}", path.display())]
    Parse {
        /// Config path
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },
}
