//! Direct palette mapping without dithering.

use super::{write_pixel, Dither};
use crate::buffer::{self, CHANNELS};
use crate::error::QuantizeError;
use crate::palette::Palette;

/// Map every pixel to its nearest palette color.
///
/// Transparent pixels (alpha 0) become `(0, 0, 0, 0)`; all others keep
/// their alpha. Applying the same palette twice gives the same buffer as
/// applying it once.
///
/// # Errors
///
/// [`QuantizeError::InvalidBufferLength`] if `pixels.len()` is not a
/// multiple of 4.
///
/// # Example
///
/// ```
/// use pixel_dither::{apply_palette, Palette, Rgb};
///
/// let palette = Palette::new(vec![Rgb::gray(0), Rgb::gray(255)]).unwrap();
/// let out = apply_palette(&[200, 200, 200, 255], &palette).unwrap();
/// assert_eq!(out, vec![255, 255, 255, 255]);
/// ```
pub fn apply_palette(pixels: &[u8], palette: &Palette) -> Result<Vec<u8>, QuantizeError> {
    buffer::check_len(pixels)?;

    let mut output = vec![0u8; pixels.len()];
    for (idx, px) in pixels.chunks_exact(CHANNELS).enumerate() {
        if px[3] == 0 {
            continue;
        }
        let nearest = palette.find_closest([px[0] as f32, px[1] as f32, px[2] as f32]);
        write_pixel(&mut output, idx * CHANNELS, nearest.to_bytes(), px[3]);
    }
    Ok(output)
}

/// Direct palette mapping as a [`Dither`] implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Direct;

impl Dither for Direct {
    fn dither(
        &self,
        pixels: &[u8],
        width: usize,
        height: usize,
        palette: &Palette,
    ) -> Result<Vec<u8>, QuantizeError> {
        buffer::check_dimensions(pixels, width, height)?;
        apply_palette(pixels, palette)
    }
}
