//! Floyd-Steinberg error diffusion dithering algorithm.
//!
//! Floyd-Steinberg distributes 100% of the quantization error to 4
//! neighbors. Pixels are processed strictly in raster order: each pixel's
//! decision depends on error pushed forward by earlier pixels, so the loop
//! cannot be reordered or split across threads.

use super::{dither_with_kernel, Dither, FLOYD_STEINBERG};
use crate::buffer;
use crate::error::QuantizeError;
use crate::palette::Palette;

/// Floyd-Steinberg error diffusion dithering.
///
/// # Algorithm
///
/// ```text
///        X   7
///    3   5   1
/// ```
///
/// Weights: 7/16 right, 3/16 bottom-left, 5/16 bottom, 1/16 bottom-right.
/// Each neighbor is bounds-checked on its own, so pixels on the right edge
/// or bottom row pass on only part of their error.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloydSteinberg;

impl Dither for FloydSteinberg {
    fn dither(
        &self,
        pixels: &[u8],
        width: usize,
        height: usize,
        palette: &Palette,
    ) -> Result<Vec<u8>, QuantizeError> {
        buffer::check_dimensions(pixels, width, height)?;
        Ok(dither_with_kernel(
            pixels,
            width,
            height,
            palette,
            &FLOYD_STEINBERG,
        ))
    }
}
