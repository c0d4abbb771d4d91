//! Grayscale conversion.

use crate::buffer::{self, CHANNELS};
use crate::error::QuantizeError;

/// Rec. 601 luma of an RGB triple, rounded to a byte.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    (0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32)
        .round()
        .clamp(0.0, 255.0) as u8
}

/// Convert every pixel to its gray equivalent, keeping alpha.
///
/// # Errors
///
/// [`QuantizeError::InvalidBufferLength`] if `pixels.len()` is not a
/// multiple of 4.
pub fn to_grayscale(pixels: &[u8]) -> Result<Vec<u8>, QuantizeError> {
    buffer::check_len(pixels)?;
    Ok(pixels
        .chunks_exact(CHANNELS)
        .flat_map(|px| {
            let y = luma(px[0], px[1], px[2]);
            [y, y, y, px[3]]
        })
        .collect())
}
