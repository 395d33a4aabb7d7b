use crate::error::{Error, Result};
use crate::models::BinaryImage;
use std::path::Path;

/// Save the binary image as an 8-bit grayscale PNG holding only 0 and 255
pub fn save_preview(binary: &BinaryImage, path: &Path) -> Result<()> {
    binary
        .to_luma8()
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|source| Error::Preview {
            path: path.to_path_buf(),
            source,
        })?;
    log::info!("wrote preview {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_round_trip() {
        let mut binary = BinaryImage::new(3, 2);
        binary.set_black(0, 0, true);
        binary.set_black(2, 1, true);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preview.png");
        save_preview(&binary, &path).unwrap();

        let loaded = image::open(&path).unwrap().to_luma8();
        assert_eq!(loaded.dimensions(), (3, 2));
        assert_eq!(loaded.get_pixel(0, 0).0[0], 0);
        assert_eq!(loaded.get_pixel(1, 0).0[0], 255);
        assert_eq!(loaded.get_pixel(2, 1).0[0], 0);
    }

    #[test]
    fn test_preview_bad_path() {
        let binary = BinaryImage::new(1, 1);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("preview.png");
        assert!(matches!(
            save_preview(&binary, &path),
            Err(Error::Preview { .. })
        ));
    }
}
