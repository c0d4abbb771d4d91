//! Atkinson error diffusion dithering algorithm.
//!
//! Atkinson propagates only 75% of the quantization error. The discarded
//! quarter keeps large flat regions flat, giving the high-contrast look of
//! early Macintosh graphics.

use super::{dither_with_kernel, Dither, ATKINSON};
use crate::buffer;
use crate::error::QuantizeError;
use crate::palette::Palette;

/// Atkinson error diffusion dithering.
///
/// ```text
///        X   1   1
///    1   1   1
///        1
/// ```
///
/// Each neighbor receives 1/8 of the error; 6/8 propagates in total.
#[derive(Debug, Clone, Copy, Default)]
pub struct Atkinson;

impl Dither for Atkinson {
    fn dither(
        &self,
        pixels: &[u8],
        width: usize,
        height: usize,
        palette: &Palette,
    ) -> Result<Vec<u8>, QuantizeError> {
        buffer::check_dimensions(pixels, width, height)?;
        Ok(dither_with_kernel(pixels, width, height, palette, &ATKINSON))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    fn bw() -> Palette {
        Palette::new(vec![Rgb::gray(0), Rgb::gray(255)]).unwrap()
    }

    #[test]
    fn test_atkinson_light_gray_stays_white() {
        // 240 -> white; error -15 is small enough that no neighbor flips
        let pixels = [240, 240, 240, 255].repeat(16);
        let out = Atkinson.dither(&pixels, 4, 4, &bw()).unwrap();
        assert!(out.chunks_exact(4).all(|px| px == [255, 255, 255, 255]));
    }

    #[test]
    fn test_atkinson_reaches_two_rows_down() {
        // Single column: 100 -> black, (0,1) and (0,2) each get 12.5
        let pixels = [100, 100, 100, 255].repeat(3);
        let out = Atkinson.dither(&pixels, 1, 3, &bw()).unwrap();
        // Row 1: 112.5 -> black, error 112.5 -> row 2 gets 12.5 + 14.0625
        assert_eq!(&out[0..4], &[0, 0, 0, 255]);
        assert_eq!(&out[4..8], &[0, 0, 0, 255]);
        assert_eq!(&out[8..12], &[0, 0, 0, 255]);
    }
}
