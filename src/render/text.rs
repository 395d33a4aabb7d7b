use crate::error::{Error, Result};
use crate::models::{BinaryImage, TextOptions};
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Glyphs and row separators in output order
fn glyphs<'a>(
    binary: &'a BinaryImage,
    options: &'a TextOptions,
) -> impl Iterator<Item = &'a str> {
    (0..binary.height()).flat_map(move |y| {
        let separator = (y != 0).then_some("\n");
        separator
            .into_iter()
            .chain(binary.row(y).map(move |black| options.glyph_for(black)))
    })
}

/// Write one glyph per pixel, rows top to bottom, separated by `\n`.
/// There is no newline after the last row.
pub fn render_text<W: Write>(
    binary: &BinaryImage,
    options: &TextOptions,
    out: &mut W,
) -> io::Result<()> {
    for glyph in glyphs(binary, options) {
        out.write_all(glyph.as_bytes())?;
    }
    Ok(())
}

/// Same layout as [`render_text`], collected into a `String`
pub fn render_to_string(binary: &BinaryImage, options: &TextOptions) -> String {
    glyphs(binary, options).collect()
}

/// Create (or truncate) `options.output` and write the whole rendering to it
pub fn write_text_file(binary: &BinaryImage, options: &TextOptions) -> Result<()> {
    let path = &options.output;
    let file = File::create(path).map_err(|source| Error::CreateOutput {
        path: path.clone(),
        source,
    })?;

    let mut writer = BufWriter::new(file);
    render_text(binary, options, &mut writer)
        .and_then(|()| writer.flush())
        .map_err(|source| Error::WriteOutput {
            path: path.clone(),
            source,
        })?;

    log::info!(
        "wrote {}x{} glyphs to {}",
        binary.width(),
        binary.height(),
        path.display()
    );
    Ok(())
}
