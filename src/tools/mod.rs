use crate::error::{Error, Result};
use image::io::Reader;
use image::{DynamicImage, GenericImageView, ImageFormat};
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Seek};
use std::path::Path;

/// Side length every input is resized to before binarization
pub const TARGET_SIZE: u32 = 60;

fn decode_sniffed<R: BufRead + Seek>(reader: Reader<R>, path: &Path) -> Result<DynamicImage> {
    match reader.format() {
        Some(ImageFormat::Png) | Some(ImageFormat::Jpeg) => {}
        _ => {
            return Err(Error::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        }
    }
    reader.decode().map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Open and decode a PNG or JPEG. The format is sniffed from the file
/// contents, not the extension.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
    let path = path.as_ref();
    let open_err = |source: std::io::Error| Error::OpenInput {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(open_err)?;
    let reader = Reader::new(BufReader::new(file))
        .with_guessed_format()
        .map_err(open_err)?;
    let img = decode_sniffed(reader, path)?;
    let (width, height) = img.dimensions();
    log::info!("loaded {} ({}x{})", path.display(), width, height);
    Ok(img)
}

/// Decode an in-memory PNG or JPEG. `name` is only used in error messages.
pub fn decode_image(bytes: &[u8], name: &Path) -> Result<DynamicImage> {
    let reader = Reader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|source| Error::OpenInput {
            path: name.to_path_buf(),
            source,
        })?;
    decode_sniffed(reader, name)
}

/// Resize to exactly `TARGET_SIZE` x `TARGET_SIZE` (aspect ratio is not kept)
pub fn resize_to_target(img: &DynamicImage) -> image::RgbaImage {
    image::imageops::resize(
        &img.to_rgba8(),
        TARGET_SIZE,
        TARGET_SIZE,
        image::imageops::FilterType::Lanczos3,
    )
}
