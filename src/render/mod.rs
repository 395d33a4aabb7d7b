/// PNG dump of the binary image
pub mod preview;
/// Glyph rendering
pub mod text;

pub use preview::save_preview;
pub use text::{render_text, render_to_string, write_text_file};
