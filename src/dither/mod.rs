//! Palette application and dithering.
//!
//! Every disperser maps an RGBA buffer onto a [`Palette`] and returns a new
//! buffer of the same size. Fully transparent pixels always come out as
//! `(0, 0, 0, 0)`; every other pixel keeps its alpha and takes its RGB from a
//! palette entry.
//!
//! # Algorithms
//!
//! - **Direct**: nearest palette color per pixel, no dithering
//! - **Bayer**: ordered dithering with a 2x2, 4x4 or 8x8 threshold matrix
//! - **Floyd-Steinberg**: classic error diffusion, 100% propagation
//! - **Atkinson**: error diffusion, 75% propagation
//! - **Sierra Lite**: small 3-neighbor error diffusion kernel
//!
//! # Example
//!
//! ```
//! use pixel_dither::{Dither, FloydSteinberg, Palette, Rgb};
//!
//! let palette = Palette::new(vec![Rgb::gray(0), Rgb::gray(255)]).unwrap();
//! let pixels = [128, 128, 128, 255].repeat(4);
//! let out = FloydSteinberg.dither(&pixels, 2, 2, &palette).unwrap();
//! assert_eq!(out.len(), pixels.len());
//! ```

mod atkinson;
mod bayer;
mod direct;
mod floyd_steinberg;
mod kernel;
mod sierra;

pub use atkinson::Atkinson;
pub use bayer::{Bayer, ThresholdMatrix, BAYER_2, BAYER_4, BAYER_8};
pub use direct::{apply_palette, Direct};
pub use floyd_steinberg::FloydSteinberg;
pub use kernel::*;
pub use sierra::SierraLite;

use serde::{Deserialize, Serialize};

use crate::buffer::CHANNELS;
use crate::error::QuantizeError;
use crate::palette::Palette;

/// Dither algorithm selection for the [`Quantizer`](crate::Quantizer) builder
/// and [`QuantizeConfig`](crate::QuantizeConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DitherAlgorithm {
    /// Nearest palette color per pixel.
    None,

    /// Ordered dithering; the matrix size follows the dither strength.
    Bayer,

    /// Floyd-Steinberg error diffusion (100% propagation).
    #[default]
    FloydSteinberg,

    /// Atkinson error diffusion (75% propagation).
    Atkinson,

    /// Sierra Lite error diffusion (100% propagation, 3 neighbors).
    SierraLite,
}

/// A palette mapping over a flat RGBA buffer.
///
/// Implementors validate that `pixels.len() == width * height * 4` and
/// return a new buffer of the same length.
pub trait Dither {
    /// Map `pixels` onto `palette`.
    ///
    /// # Errors
    ///
    /// [`QuantizeError::DimensionMismatch`] if the buffer length does not
    /// match `width` x `height`.
    fn dither(
        &self,
        pixels: &[u8],
        width: usize,
        height: usize,
        palette: &Palette,
    ) -> Result<Vec<u8>, QuantizeError>;
}

/// Error buffer for error diffusion.
///
/// Manages a sliding window of error rows, storing only the rows that the
/// diffusion kernel can reach (`max_dy + 1`). Error only ever flows to
/// pixels that have not been visited yet, so the window holds exactly what a
/// full-image accumulator would.
///
/// # Usage Pattern
///
/// 1. Create buffer with `new(width, row_depth)`
/// 2. For each row:
///    a. Read accumulated error with `get_accumulated(x)`
///    b. After processing pixel, distribute error with `add_error(x, dy, error)`
///    c. After row complete, call `advance_row()`
#[derive(Debug)]
pub struct ErrorBuffer {
    /// Error rows: rows[0] is current row, rows[1] is next, etc.
    rows: Vec<Vec<[f32; 3]>>,
    width: usize,
}

impl ErrorBuffer {
    /// Create a new error buffer `row_depth` rows deep.
    pub fn new(width: usize, row_depth: usize) -> Self {
        Self {
            rows: (0..row_depth).map(|_| vec![[0.0; 3]; width]).collect(),
            width,
        }
    }

    /// Get accumulated error for a pixel in the current row.
    #[inline]
    pub fn get_accumulated(&self, x: usize) -> [f32; 3] {
        self.rows[0][x]
    }

    /// Add error to a pixel `row_offset` rows below the current one.
    ///
    /// Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn add_error(&mut self, x: usize, row_offset: usize, error: [f32; 3]) {
        if x < self.width && row_offset < self.rows.len() {
            for c in 0..3 {
                self.rows[row_offset][x][c] += error[c];
            }
        }
    }

    /// Advance to the next row.
    ///
    /// The first row is discarded, later rows shift forward, and a zeroed
    /// row is appended.
    pub fn advance_row(&mut self) {
        self.rows.rotate_left(1);
        if let Some(last) = self.rows.last_mut() {
            last.fill([0.0; 3]);
        }
    }
}

/// Write `color` with `alpha` into the RGBA pixel at byte offset `idx`.
#[inline]
pub(crate) fn write_pixel(output: &mut [u8], idx: usize, color: [u8; 3], alpha: u8) {
    output[idx..idx + 3].copy_from_slice(&color);
    output[idx + 3] = alpha;
}

/// Core error diffusion loop parameterized by kernel.
///
/// Pixels are visited in raster order (left to right, top to bottom). The
/// accumulated value is clamped to `0..=255` before matching, and the error
/// is measured from the clamped value. Transparent pixels are written as
/// `(0, 0, 0, 0)` and diffuse nothing. Neighbor bounds are checked per
/// entry, so edge pixels diffuse only the in-bounds share of their error.
///
/// The caller must have validated the buffer dimensions.
pub(crate) fn dither_with_kernel(
    pixels: &[u8],
    width: usize,
    height: usize,
    palette: &Palette,
    kernel: &Kernel,
) -> Vec<u8> {
    let mut output = vec![0u8; pixels.len()];
    let mut error_buf = ErrorBuffer::new(width, kernel.max_dy + 1);
    let divisor = kernel.divisor as f32;

    for y in 0..height {
        for x in 0..width {
            let idx = (y * width + x) * CHANNELS;
            let alpha = pixels[idx + 3];
            if alpha == 0 {
                continue;
            }

            let accumulated = error_buf.get_accumulated(x);
            let pixel = [
                (pixels[idx] as f32 + accumulated[0]).clamp(0.0, 255.0),
                (pixels[idx + 1] as f32 + accumulated[1]).clamp(0.0, 255.0),
                (pixels[idx + 2] as f32 + accumulated[2]).clamp(0.0, 255.0),
            ];

            let nearest = palette.find_closest(pixel);
            write_pixel(&mut output, idx, nearest.to_bytes(), alpha);

            let target = nearest.to_f32();
            let error = [
                pixel[0] - target[0],
                pixel[1] - target[1],
                pixel[2] - target[2],
            ];

            for &(dx, dy, weight) in kernel.entries {
                let nx = x as isize + dx as isize;
                let ny = y + dy as usize;
                if nx >= 0 && (nx as usize) < width && ny < height {
                    let share = weight as f32 / divisor;
                    let scaled_error = [error[0] * share, error[1] * share, error[2] * share];
                    error_buf.add_error(nx as usize, dy as usize, scaled_error);
                }
            }
        }

        error_buf.advance_row();
    }

    output
}
