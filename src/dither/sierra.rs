//! Sierra Lite error diffusion dithering algorithm.

use super::{dither_with_kernel, Dither, SIERRA_LITE};
use crate::buffer;
use crate::error::QuantizeError;
use crate::palette::Palette;

/// Sierra Lite error diffusion dithering (100% propagation, 3 neighbors).
///
/// ```text
///    X   2
///    1   1
/// ```
///
/// Cheaper than Floyd-Steinberg with a similar look.
#[derive(Debug, Clone, Copy, Default)]
pub struct SierraLite;

impl Dither for SierraLite {
    fn dither(
        &self,
        pixels: &[u8],
        width: usize,
        height: usize,
        palette: &Palette,
    ) -> Result<Vec<u8>, QuantizeError> {
        buffer::check_dimensions(pixels, width, height)?;
        Ok(dither_with_kernel(pixels, width, height, palette, &SIERRA_LITE))
    }
}
