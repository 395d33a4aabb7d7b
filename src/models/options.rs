use crate::error::{Error, Result};
use std::path::PathBuf;

/// Glyph drawn for white pixels unless overridden
pub const DEFAULT_WHITE_GLYPH: &str = " ";
/// Glyph drawn for black pixels unless overridden
pub const DEFAULT_BLACK_GLYPH: &str = "⠢";
/// Output file written unless overridden
pub const DEFAULT_OUTPUT_PATH: &str = "output.txt";
/// Threshold used when the search is disabled
pub const FIXED_THRESHOLD: u8 = 128;

/// How the threshold search picks among candidates.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SelectionPolicy {
    /// Sentinel-and-margin rule, output-compatible with earlier releases
    #[default]
    Legacy,
    /// First threshold with the smallest black/half difference
    Closest,
}

/// Everything the renderer and the threshold stage need for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextOptions {
    /// Glyph for white pixels
    pub white_glyph: String,
    /// Glyph for black pixels
    pub black_glyph: String,
    /// Destination text file
    pub output: PathBuf,
    /// Swap which glyph stands for black and white
    pub flip: bool,
    /// Binarize at [`FIXED_THRESHOLD`] instead of searching
    pub disable_threshold_optimization: bool,
    /// Candidate selection rule for the search
    pub selection: SelectionPolicy,
    /// Optional PNG dump of the binary image
    pub preview: Option<PathBuf>,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            white_glyph: DEFAULT_WHITE_GLYPH.to_string(),
            black_glyph: DEFAULT_BLACK_GLYPH.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            flip: false,
            disable_threshold_optimization: false,
            selection: SelectionPolicy::default(),
            preview: None,
        }
    }
}

impl TextOptions {
    /// Glyph emitted for a pixel, honouring `flip`
    pub fn glyph_for(&self, black: bool) -> &str {
        if black != self.flip {
            &self.black_glyph
        } else {
            &self.white_glyph
        }
    }

    /// Reject option sets that would break the one-glyph-per-pixel grid.
    pub fn validate(&self) -> Result<()> {
        for (name, glyph) in [("white", &self.white_glyph), ("black", &self.black_glyph)] {
            if glyph.is_empty() {
                return Err(Error::InvalidOptions(format!("{name} glyph is empty")));
            }
            if glyph.contains(['\n', '\r']) {
                return Err(Error::InvalidOptions(format!(
                    "{name} glyph contains a line break"
                )));
            }
        }
        if self.output.as_os_str().is_empty() {
            return Err(Error::InvalidOptions("output path is empty".to_string()));
        }
        Ok(())
    }
}
