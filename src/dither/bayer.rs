//! Bayer ordered dithering.
//!
//! Each pixel is perturbed by a position-dependent offset taken from a
//! Bayer threshold matrix, then matched against the palette. There is no
//! state shared between pixels, so the result for a pixel depends only on
//! its value and its coordinates.

use super::{apply_palette, write_pixel, Dither};
use crate::buffer::{self, CHANNELS};
use crate::error::QuantizeError;
use crate::palette::Palette;

/// 2x2 Bayer matrix.
pub const BAYER_2: [[u8; 2]; 2] = [[0, 2], [3, 1]];

/// 4x4 Bayer matrix.
#[rustfmt::skip]
pub const BAYER_4: [[u8; 4]; 4] = [
    [ 0,  8,  2, 10],
    [12,  4, 14,  6],
    [ 3, 11,  1,  9],
    [15,  7, 13,  5],
];

/// 8x8 Bayer matrix.
#[rustfmt::skip]
pub const BAYER_8: [[u8; 8]; 8] = [
    [ 0, 32,  8, 40,  2, 34, 10, 42],
    [48, 16, 56, 24, 50, 18, 58, 26],
    [12, 44,  4, 36, 14, 46,  6, 38],
    [60, 28, 52, 20, 62, 30, 54, 22],
    [ 3, 35, 11, 43,  1, 33,  9, 41],
    [51, 19, 59, 27, 49, 17, 57, 25],
    [15, 47,  7, 39, 13, 45,  5, 37],
    [63, 31, 55, 23, 61, 29, 53, 21],
];

/// Default dither strength.
pub const DEFAULT_STRENGTH: f32 = 100.0;

/// Threshold matrix size, chosen from the dither strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdMatrix {
    /// 2x2, for strength in (0, 33.3]
    Bayer2,
    /// 4x4, for strength in (33.3, 66.6]
    Bayer4,
    /// 8x8, for higher strengths
    Bayer8,
}

impl ThresholdMatrix {
    /// Matrix for a (clamped) strength. Both band edges belong to the
    /// smaller matrix.
    pub fn for_strength(strength: f32) -> Self {
        if strength <= 33.3 {
            ThresholdMatrix::Bayer2
        } else if strength <= 66.6 {
            ThresholdMatrix::Bayer4
        } else {
            ThresholdMatrix::Bayer8
        }
    }

    /// Side length of the matrix.
    #[inline]
    pub fn size(self) -> usize {
        match self {
            ThresholdMatrix::Bayer2 => 2,
            ThresholdMatrix::Bayer4 => 4,
            ThresholdMatrix::Bayer8 => 8,
        }
    }

    /// Matrix value for pixel (x, y), tiling the matrix over the image.
    #[inline]
    pub fn value(self, x: usize, y: usize) -> u8 {
        match self {
            ThresholdMatrix::Bayer2 => BAYER_2[y % 2][x % 2],
            ThresholdMatrix::Bayer4 => BAYER_4[y % 4][x % 4],
            ThresholdMatrix::Bayer8 => BAYER_8[y % 8][x % 8],
        }
    }
}

/// Bayer ordered dithering.
///
/// Strength is clamped to `0..=100` (NaN counts as the default, 100). At
/// strength 0 this is exactly [`apply_palette`]. Otherwise every opaque
/// pixel gets the same offset added to R, G and B:
///
/// ```text
/// offset = (m[y % n][x % n] / n² - 0.5) * (strength / 100) * n² / 2
/// ```
///
/// # Example
///
/// ```
/// use pixel_dither::{Bayer, Dither, Palette, Rgb};
///
/// let palette = Palette::new(vec![Rgb::gray(0), Rgb::gray(255)]).unwrap();
/// let pixels = [120, 120, 120, 255].repeat(64);
/// let out = Bayer::new(100.0).dither(&pixels, 8, 8, &palette).unwrap();
/// assert_eq!(out.len(), pixels.len());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bayer {
    strength: f32,
}

impl Default for Bayer {
    fn default() -> Self {
        Self {
            strength: DEFAULT_STRENGTH,
        }
    }
}

impl Bayer {
    /// Create a Bayer disperser with the given strength (clamped to 0..=100).
    pub fn new(strength: f32) -> Self {
        let strength = if strength.is_nan() {
            DEFAULT_STRENGTH
        } else {
            strength.clamp(0.0, 100.0)
        };
        Self { strength }
    }

    /// The clamped strength.
    #[inline]
    pub fn strength(&self) -> f32 {
        self.strength
    }

    /// Threshold matrix used at this strength, `None` at strength 0.
    pub fn matrix(&self) -> Option<ThresholdMatrix> {
        (self.strength > 0.0).then(|| ThresholdMatrix::for_strength(self.strength))
    }

    /// Offset added to each channel of the pixel at (x, y).
    #[inline]
    pub fn offset(&self, matrix: ThresholdMatrix, x: usize, y: usize) -> f32 {
        let cells = (matrix.size() * matrix.size()) as f32;
        let threshold = matrix.value(x, y) as f32 / cells - 0.5;
        threshold * (self.strength / 100.0) * cells / 2.0
    }
}

impl Dither for Bayer {
    fn dither(
        &self,
        pixels: &[u8],
        width: usize,
        height: usize,
        palette: &Palette,
    ) -> Result<Vec<u8>, QuantizeError> {
        buffer::check_dimensions(pixels, width, height)?;

        let Some(matrix) = self.matrix() else {
            return apply_palette(pixels, palette);
        };

        let mut output = vec![0u8; pixels.len()];
        for y in 0..height {
            for x in 0..width {
                let idx = (y * width + x) * CHANNELS;
                let alpha = pixels[idx + 3];
                if alpha == 0 {
                    continue;
                }

                let offset = self.offset(matrix, x, y);
                let pixel = [
                    pixels[idx] as f32 + offset,
                    pixels[idx + 1] as f32 + offset,
                    pixels[idx + 2] as f32 + offset,
                ];
                let nearest = palette.find_closest(pixel);
                write_pixel(&mut output, idx, nearest.to_bytes(), alpha);
            }
        }

        Ok(output)
    }
}
