//! Convert RGB/RGBA pixels to luminance
//! Y = 0.299*R + 0.587*G + 0.114*B
//! Uses 16-bit fixed point: Y = (19595*R16 + 38470*G16 + 7471*B16 + 2^15) >> 24
//! where each channel is widened to 16 bits (C16 = C * 257) and premultiplied
//! by alpha, so a fully transparent pixel is black.

/// Coefficients for grayscale conversion, scaled by 2^16 (they sum to 65536)
const COEF_R: u32 = 19595;
const COEF_G: u32 = 38470;
const COEF_B: u32 = 7471;

const ROUND: u32 = 1 << 15;

/// Widen an 8-bit channel to 16 bits and premultiply by alpha
#[inline]
fn premultiply(channel: u8, alpha16: u32) -> u32 {
    channel as u32 * 0x101 * alpha16 / 0xffff
}

/// Luminance of a single straight-alpha RGBA pixel
#[inline]
pub fn luminance(r: u8, g: u8, b: u8, a: u8) -> u8 {
    let a16 = a as u32 * 0x101;
    let r16 = premultiply(r, a16);
    let g16 = premultiply(g, a16);
    let b16 = premultiply(b, a16);
    ((COEF_R * r16 + COEF_G * g16 + COEF_B * b16 + ROUND) >> 24) as u8
}

/// Convert an RGB buffer (3 bytes per pixel) to grayscale
pub fn rgb_to_grayscale(rgb: &[u8], width: usize, height: usize) -> Vec<u8> {
    let pixel_count = width * height;
    rgb.chunks_exact(3)
        .take(pixel_count)
        .map(|px| luminance(px[0], px[1], px[2], u8::MAX))
        .collect()
}

/// Convert an RGBA buffer (4 bytes per pixel, straight alpha) to grayscale
pub fn rgba_to_grayscale(rgba: &[u8], width: usize, height: usize) -> Vec<u8> {
    let pixel_count = width * height;
    rgba.chunks_exact(4)
        .take(pixel_count)
        .map(|px| luminance(px[0], px[1], px[2], px[3]))
        .collect()
}
